//! The Rust crate flavor of rapidhash (hoxxep/rapidhash).
//!
//! Eight registrations: {new, seeded} x {quality, fast} x {wide
//! multiply, portable 32x32 approximation}. The quality tier adds an
//! avalanche finish; the portable tier replaces the 128-bit product
//! with a carry-free 32-bit decomposition. Seeding mirrors
//! `RapidHasher::new()` (seed premix) and `SeedableState::new()`
//! (secret table generation).

use std::cell::Cell;

use crate::bits::{get_u32, get_u64, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, ImplFlags, SrcStatus};
use crate::mathmult::mult64_128;
use crate::registry::RegistryBuilder;

const DEFAULT_SECRETS: [u64; 7] = [
    0x2d358dccaa6c78a5,
    0x8bb84b93962eacc9,
    0x4b33a62ed433d4a3,
    0x4d5a2da51de1aa47,
    0xa0761d6478bd642f,
    0xe7037ed1a0b428db,
    0x90ed1765281c388c,
];

// Somewhat arbitrary cutoff for the 7-lane long-input path.
const COLD_PATH_CUTOFF: usize = 400;

#[inline]
fn mum<const PROTECTED: bool, const PORTABLE: bool>(a: &mut u64, b: &mut u64) {
    if PORTABLE {
        // Approximate the 128-bit product by dropping carries:
        //   (hx*hy ^ lx*ly) ^ (hx*ly ^ lx*hy).rotate_right(32)
        let lx = u64::from(*a as u32);
        let ly = u64::from(*b as u32);
        let hx = u64::from((*a >> 32) as u32);
        let hy = u64::from((*b >> 32) as u32);

        let ll = lx.wrapping_mul(ly);
        let lh = lx.wrapping_mul(hy);
        let hl = hx.wrapping_mul(ly);
        let hh = hx.wrapping_mul(hy);

        if PROTECTED {
            *a ^= hh ^ ll;
            *b ^= (hl ^ lh).rotate_right(32);
        } else {
            *a = hh ^ ll;
            *b = (hl ^ lh).rotate_right(32);
        }
    } else {
        let (rlo, rhi) = mult64_128(*a, *b);
        if PROTECTED {
            *a ^= rlo;
            *b ^= rhi;
        } else {
            *a = rlo;
            *b = rhi;
        }
    }
}

#[inline]
fn mix<const PROTECTED: bool, const PORTABLE: bool>(mut a: u64, mut b: u64) -> u64 {
    mum::<PROTECTED, PORTABLE>(&mut a, &mut b);
    a ^ b
}

thread_local! {
    // Slot 7 stores the hashing seed alongside the derived secrets.
    static SECRETS: Cell<[u64; 8]> = const { Cell::new([0; 8]) };
}

// Matches RapidHasher::new(): premix the user seed. The premix uses the
// plain wide multiply regardless of the registered variant's tier.
fn rapidhash_seed(seed: u64) -> u64 {
    seed ^ mix::<false, false>(seed ^ DEFAULT_SECRETS[2], DEFAULT_SECRETS[1])
}

// From GlobalSecrets::create_secrets(): always the protected, wide mix.
fn premix_seed(mut seed: u64, i: usize) -> u64 {
    const HI: u64 = 0xFFFF << 48;
    const MI: u64 = 0xFFFF << 24;
    const LO: u64 = 0xFFFF;

    seed ^= mix::<true, false>(seed ^ DEFAULT_SECRETS[0], DEFAULT_SECRETS[i]);

    // Ensure the secrets are of reasonable non-zero quality.
    if seed & HI == 0 {
        seed |= 1 << 63;
    }
    if seed & MI == 0 {
        seed |= 1 << 31;
    }
    if seed & LO == 0 {
        seed |= 1;
    }
    seed
}

// Analogous to SeedableState::new(): the secret-generation seed is
// derived from the hashing seed rather than drawn from an external RNG.
fn create_secrets_from_seed(s: u64) -> u64 {
    let seed = rapidhash_seed(s);

    let mut secrets = [0u64; 8];
    secrets[0] = premix_seed(seed, 0);
    for i in 1..7 {
        secrets[i] = premix_seed(secrets[i - 1], i);
    }
    secrets[7] = seed;
    SECRETS.with(|c| c.set(secrets));
    1
}

#[inline]
fn finish<const PROTECTED: bool, const PORTABLE: bool, const AVALANCHE: bool>(
    mut a: u64,
    mut b: u64,
    seed: u64,
    secrets: &[u64],
) -> u64 {
    a ^= secrets[0];
    b ^= seed;
    mum::<PROTECTED, PORTABLE>(&mut a, &mut b);

    if AVALANCHE {
        mix::<PROTECTED, PORTABLE>(a ^ 0xaaaaaaaaaaaaaaaa ^ seed, b ^ secrets[1])
    } else {
        a ^ b
    }
}

// Reads may reach back before `off`; callers guarantee at least 16
// bytes exist behind the tail.
fn final_48<const BSWAP: bool, const PROTECTED: bool, const PORTABLE: bool, const AVALANCHE: bool>(
    p: &[u8],
    off: usize,
    len: usize,
    mut seed: u64,
    secrets: &[u64],
    origlen: usize,
) -> u64 {
    if len > 16 {
        seed = mix::<PROTECTED, PORTABLE>(
            get_u64::<BSWAP>(p, off) ^ secrets[0],
            get_u64::<BSWAP>(p, off + 8) ^ seed,
        );
        if len > 32 {
            seed = mix::<PROTECTED, PORTABLE>(
                get_u64::<BSWAP>(p, off + 16) ^ secrets[0],
                get_u64::<BSWAP>(p, off + 24) ^ seed,
            );
        }
    }

    let a = get_u64::<BSWAP>(p, off + len - 16);
    let b = get_u64::<BSWAP>(p, off + len - 8);
    seed = seed.wrapping_add(origlen as u64);
    finish::<PROTECTED, PORTABLE, AVALANCHE>(a, b, seed, secrets)
}

fn core_cold<
    const BSWAP: bool,
    const UNROLLED: bool,
    const PROTECTED: bool,
    const PORTABLE: bool,
    const AVALANCHE: bool,
>(
    p: &[u8],
    len: usize,
    mut seed: u64,
    secrets: &[u64],
) -> u64 {
    let mut sees = [seed; 6];
    let mut i = len;
    let mut off = 0usize;

    let mut block7 = |off: usize, seed: &mut u64, sees: &mut [u64; 6]| {
        *seed = mix::<PROTECTED, PORTABLE>(
            get_u64::<BSWAP>(p, off) ^ secrets[0],
            get_u64::<BSWAP>(p, off + 8) ^ *seed,
        );
        for k in 0..6 {
            sees[k] = mix::<PROTECTED, PORTABLE>(
                get_u64::<BSWAP>(p, off + 16 * (k + 1)) ^ secrets[k + 1],
                get_u64::<BSWAP>(p, off + 16 * (k + 1) + 8) ^ sees[k],
            );
        }
    };

    if UNROLLED {
        while i >= 224 {
            block7(off, &mut seed, &mut sees);
            block7(off + 112, &mut seed, &mut sees);
            off += 224;
            i -= 224;
        }
        if i >= 112 {
            block7(off, &mut seed, &mut sees);
            off += 112;
            i -= 112;
        }
    } else {
        loop {
            block7(off, &mut seed, &mut sees);
            off += 112;
            i -= 112;
            if i <= 112 {
                break;
            }
        }
    }

    let mut block3 = |off: usize, seed: &mut u64, sees: &mut [u64; 6]| {
        *seed = mix::<PROTECTED, PORTABLE>(
            get_u64::<BSWAP>(p, off) ^ secrets[0],
            get_u64::<BSWAP>(p, off + 8) ^ *seed,
        );
        sees[0] = mix::<PROTECTED, PORTABLE>(
            get_u64::<BSWAP>(p, off + 16) ^ secrets[1],
            get_u64::<BSWAP>(p, off + 24) ^ sees[0],
        );
        sees[1] = mix::<PROTECTED, PORTABLE>(
            get_u64::<BSWAP>(p, off + 32) ^ secrets[2],
            get_u64::<BSWAP>(p, off + 40) ^ sees[1],
        );
    };

    if UNROLLED {
        if i >= 48 {
            block3(off, &mut seed, &mut sees);
            off += 48;
            i -= 48;
            if i >= 48 {
                block3(off, &mut seed, &mut sees);
                off += 48;
                i -= 48;
            }
        }
    } else {
        while i >= 48 {
            block3(off, &mut seed, &mut sees);
            off += 48;
            i -= 48;
        }
    }

    let see3 = sees[2] ^ sees[3];
    let see5 = sees[4] ^ sees[5];
    seed ^= sees[0];
    let see3 = see3 ^ sees[1];
    seed ^= see5;
    seed ^= see3;

    final_48::<BSWAP, PROTECTED, PORTABLE, AVALANCHE>(p, off, i, seed, secrets, len)
}

fn core_17_plus<
    const BSWAP: bool,
    const UNROLLED: bool,
    const PROTECTED: bool,
    const PORTABLE: bool,
    const AVALANCHE: bool,
>(
    p: &[u8],
    len: usize,
    mut seed: u64,
    secrets: &[u64],
) -> u64 {
    if len <= 48 {
        return final_48::<BSWAP, PROTECTED, PORTABLE, AVALANCHE>(p, 0, len, seed, secrets, len);
    }

    if len > COLD_PATH_CUTOFF {
        return core_cold::<BSWAP, UNROLLED, PROTECTED, PORTABLE, AVALANCHE>(p, len, seed, secrets);
    }

    let mut see1 = seed;
    let mut see2 = seed;
    let mut remain = len;
    let mut off = 0usize;

    loop {
        seed = mix::<PROTECTED, PORTABLE>(
            get_u64::<BSWAP>(p, off) ^ secrets[0],
            get_u64::<BSWAP>(p, off + 8) ^ seed,
        );
        see1 = mix::<PROTECTED, PORTABLE>(
            get_u64::<BSWAP>(p, off + 16) ^ secrets[1],
            get_u64::<BSWAP>(p, off + 24) ^ see1,
        );
        see2 = mix::<PROTECTED, PORTABLE>(
            get_u64::<BSWAP>(p, off + 32) ^ secrets[2],
            get_u64::<BSWAP>(p, off + 40) ^ see2,
        );
        off += 48;
        remain -= 48;
        if remain < 48 {
            break;
        }
    }

    seed ^= see1 ^ see2;
    final_48::<BSWAP, PROTECTED, PORTABLE, AVALANCHE>(p, off, remain, seed, secrets, len)
}

fn core<
    const BSWAP: bool,
    const UNROLLED: bool,
    const PROTECTED: bool,
    const PORTABLE: bool,
    const AVALANCHE: bool,
>(
    p: &[u8],
    len: usize,
    mut seed: u64,
    secrets: &[u64],
) -> u64 {
    if len <= 16 {
        let (a, b) = if len >= 8 {
            (get_u64::<BSWAP>(p, 0), get_u64::<BSWAP>(p, len - 8))
        } else if len >= 4 {
            (
                u64::from(get_u32::<BSWAP>(p, 0)),
                u64::from(get_u32::<BSWAP>(p, len - 4)),
            )
        } else if len > 0 {
            (
                (u64::from(p[0]) << 45) | u64::from(p[len - 1]),
                u64::from(p[len >> 1]),
            )
        } else {
            (0, 0)
        };

        seed = seed.wrapping_add(len as u64);
        finish::<PROTECTED, PORTABLE, AVALANCHE>(a, b, seed, secrets)
    } else {
        core_17_plus::<BSWAP, UNROLLED, PROTECTED, PORTABLE, AVALANCHE>(p, len, seed, secrets)
    }
}

fn rust_rapidhash<
    const BSWAP: bool,
    const PORTABLE: bool,
    const AVALANCHE: bool,
    const SEEDED: bool,
>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let tls;
    let (secrets, seedval): (&[u64], u64) = if SEEDED {
        tls = SECRETS.with(Cell::get);
        (&tls[..], tls[7])
    } else {
        (&DEFAULT_SECRETS[..], seed)
    };

    let mut h = core::<BSWAP, true, false, PORTABLE, AVALANCHE>(input, len, seedval, secrets);
    if AVALANCHE {
        h = mix::<false, PORTABLE>(h, DEFAULT_SECRETS[1]);
    }
    put_u64::<BSWAP>(h, out, 0);
}

const FAST_BADSEEDS: [u64; 452] = [
    0x006091b0, 0x00e0c55d, 0x01478255, 0x01ec81ac, 0x02e4a803, 0x03c933b3, 0x046acbda, 0x04ad8a93,
    0x05f3ddd5, 0x06039935, 0x070a4c1b, 0x078e80cb, 0x07bc7d65, 0x091f8f97, 0x0a863af8, 0x0b589405,
    0x0e18b6b2, 0x0f676061, 0x1075f5c4, 0x111672b7, 0x11f9c5e9, 0x129c16ba, 0x13277adb, 0x1762a99f,
    0x17d8fb3c, 0x19975ef4, 0x19a5441a, 0x1b4e344f, 0x1cafd2e0, 0x1e2ead63, 0x1f494a44, 0x1fffd470,
    0x2021bd35, 0x208872f7, 0x23c6a285, 0x27e441f9, 0x28b55059, 0x2ac93903, 0x2c77bb8c, 0x2e0c6201,
    0x2f3be950, 0x30fe2ffe, 0x318f5fea, 0x33c1595e, 0x34975250, 0x368c3ed8, 0x38404ad2, 0x39c895a9,
    0x3acf00e0, 0x3bc4ebd6, 0x3bce27f8, 0x3bf8695e, 0x3dcec869, 0x3ef97476, 0x3f04e611, 0x3f05237f,
    0x3f120003, 0x3f74d662, 0x3ff798b8, 0x4305c20f, 0x4770073c, 0x479243d7, 0x47d17e77, 0x4807af00,
    0x4809299d, 0x484b0bd0, 0x49b4bd9c, 0x4b102850, 0x4cc5e0fa, 0x4dfe94a8, 0x4e8d2f4c, 0x4fe82f84,
    0x5097a007, 0x50a4129a, 0x5176ae27, 0x51a703ee, 0x5313d90f, 0x54c75b97, 0x5684ad3f, 0x570c13b6,
    0x57397e5c, 0x57af7d68, 0x595a4e7c, 0x5a5a5960, 0x5e3927d2, 0x5e59388d, 0x5fc06386, 0x6174688f,
    0x61b33fe7, 0x621c4ab2, 0x630a29a1, 0x65c98e42, 0x664719a6, 0x66953d54, 0x6a18b9c4, 0x6b078e1e,
    0x707defb2, 0x718f35a6, 0x74f64aff, 0x76d0cd3b, 0x7a95d765, 0x7a9d6ed0, 0x7b362944, 0x7b8de12a,
    0x7dbe1bc4, 0x811684be, 0x876755dd, 0x87729579, 0x8897dd8e, 0x896a0120, 0x89dd2818, 0x8ab18982,
    0x8abd49e6, 0x8bc0b8da, 0x8d9ccbf1, 0x90559b9b, 0x9130a2c5, 0x92353cd0, 0x9563da70, 0x966e10cf,
    0x96f717f1, 0x983bca81, 0x98a57a5a, 0x9a17c9f2, 0x9ad93c3a, 0x9b19c002, 0x9bc11f2a, 0x9c2736af,
    0x9da3d125, 0x9e29bedf, 0x9e4cfb24, 0x9fa5a30d, 0x9ffb6796, 0xa14d99e6, 0xa277a48e, 0xa31dab49,
    0xa43233c9, 0xa4c56836, 0xa5286d19, 0xa562c81d, 0xa61c5526, 0xa691db21, 0xa8bcbbd7, 0xa90e048d,
    0xaacceac1, 0xaca37850, 0xb3040889, 0xb546ff8c, 0xb60c0eed, 0xb647af3f, 0xb69eabaf, 0xb6b8c16c,
    0xb9e69d89, 0xb9f355df, 0xbba90dab, 0xbca434f9, 0xbd39c7f2, 0xc464d83c, 0xc69d0e42, 0xc932cb08,
    0xca78f43f, 0xcd7d879f, 0xcf0a6a0a, 0xcf5424c8, 0xcf580fd6, 0xd0b41933, 0xd0dc5dfc, 0xd10c2288,
    0xd1f49c21, 0xd2a5d96d, 0xd2e43950, 0xd45f4239, 0xd98d7707, 0xd9c53771, 0xd9e5b4a9, 0xda0eadad,
    0xdc997cc7, 0xdcbd4663, 0xdce54b18, 0xdd24b884, 0xdd562528, 0xdfdb4af6, 0xe0e442f7, 0xe1aef272,
    0xe4b55a34, 0xe4d53f83, 0xe535f642, 0xe5cf27e6, 0xe72db555, 0xe75ee1a7, 0xe8265e42, 0xea994d3d,
    0xeaaf72f9, 0xeb585260, 0xec6fc1d6, 0xec6fd214, 0xee9d27f8, 0xeef6cb11, 0xf05f4efc, 0xf2d6d683,
    0xf2e5d6d3, 0xf39ab966, 0xf3ab4da0, 0xf4192b4b, 0xf428d555, 0xf441ace9, 0xf786c710, 0xf7e3b622,
    0xf8bdc795, 0xf8d1066b, 0xf9d9b0f7, 0xfb1f5813, 0xfbc10367, 0xfbd7d460, 0xfddefd49, 0xfeb08a75,
    0xfefb2dfe, 0xffffffff00daff1f, 0xffffffff011f2554, 0xffffffff0352eb83, 0xffffffff0493393b,
    0xffffffff08f7fd3c, 0xffffffff0a530476, 0xffffffff0ccff3b6, 0xffffffff0cf28bf6,
    0xffffffff0d5e51d0, 0xffffffff0d8cf236, 0xffffffff104d78ac, 0xffffffff10f011c1,
    0xffffffff116ee4ec, 0xffffffff14934997, 0xffffffff14ba3231, 0xffffffff15c991cb,
    0xffffffff16ad48c2, 0xffffffff16f1544c, 0xffffffff18ba60f7, 0xffffffff192cbfa0,
    0xffffffff1d388935, 0xffffffff1deda067, 0xffffffff20fe702c, 0xffffffff21650829,
    0xffffffff2175e692, 0xffffffff21857de0, 0xffffffff22ebb0f5, 0xffffffff230c5c64,
    0xffffffff23230b5a, 0xffffffff26b54fd6, 0xffffffff274a3c51, 0xffffffff279e5744,
    0xffffffff27c36508, 0xffffffff2839810b, 0xffffffff289f3c28, 0xffffffff2a5bbde9,
    0xffffffff2b061b72, 0xffffffff2ca15138, 0xffffffff3054e364, 0xffffffff3123259a,
    0xffffffff3257f065, 0xffffffff3348a78b, 0xffffffff338ea163, 0xffffffff3532cba1,
    0xffffffff36349bdd, 0xffffffff3667b83c, 0xffffffff3a07ce4f, 0xffffffff3a7e2030,
    0xffffffff3b2dc859, 0xffffffff3b95fcc8, 0xffffffff3bc5031e, 0xffffffff3f994c60,
    0xffffffff405af3ab, 0xffffffff421898fa, 0xffffffff43545695, 0xffffffff44184311,
    0xffffffff443d617e, 0xffffffff4829e519, 0xffffffff488c5716, 0xffffffff48986588,
    0xffffffff48f0c679, 0xffffffff490772a0, 0xffffffff49708c13, 0xffffffff4b38b47c,
    0xffffffff4b6f3e66, 0xffffffff4b86ac21, 0xffffffff4c3dcc69, 0xffffffff4f87aaeb,
    0xffffffff52455614, 0xffffffff52d19434, 0xffffffff54b73287, 0xffffffff56f2f62d,
    0xffffffff57d70c5c, 0xffffffff58e0305e, 0xffffffff58ed9522, 0xffffffff5a0f3f59,
    0xffffffff5ac6dac1, 0xffffffff5b2c9834, 0xffffffff5cac8a93, 0xffffffff5d1c7398,
    0xffffffff5e71e2c5, 0xffffffff5e88a1b1, 0xffffffff5f1f269a, 0xffffffff5fc92832,
    0xffffffff5fd170e0, 0xffffffff604a8acc, 0xffffffff65ed839a, 0xffffffff661c78ec,
    0xffffffff66d29d9f, 0xffffffff6883e1b5, 0xffffffff68f22cb2, 0xffffffff6a41931e,
    0xffffffff6a8671f3, 0xffffffff6b2cdc1f, 0xffffffff6b5ddfd0, 0xffffffff6b9fc369,
    0xffffffff6bae49b9, 0xffffffff6c57b51f, 0xffffffff6e325565, 0xffffffff714e348b,
    0xffffffff717730a1, 0xffffffff726cb66c, 0xffffffff7528a7ce, 0xffffffff764315eb,
    0xffffffff7a00520a, 0xffffffff7a4aa491, 0xffffffff7afd058d, 0xffffffff7b498fde,
    0xffffffff7b52c8c7, 0xffffffff7b769086, 0xffffffff7b78cc93, 0xffffffff7c94024a,
    0xffffffff7dc37f07, 0xffffffff7dd2befa, 0xffffffff7e433a0b, 0xffffffff7e730d03,
    0xffffffff7ea0b4fc, 0xffffffff7f807381, 0xffffffff81152679, 0xffffffff81b6a801,
    0xffffffff8227c170, 0xffffffff8286ba70, 0xffffffff838c1414, 0xffffffff83d0e436,
    0xffffffff83eb7e49, 0xffffffff8407954c, 0xffffffff846f634d, 0xffffffff85c0dbcd,
    0xffffffff869a2ecd, 0xffffffff89912b00, 0xffffffff8b4b6fd3, 0xffffffff8d00d9dd,
    0xffffffff8e2cab94, 0xffffffff909777bf, 0xffffffff914a2ac4, 0xffffffff9173c42d,
    0xffffffff9350a593, 0xffffffff9362cc3f, 0xffffffff93969835, 0xffffffff942d9214,
    0xffffffff94f79935, 0xffffffff97588898, 0xffffffff97740a54, 0xffffffff97937fc1,
    0xffffffff9b71c57b, 0xffffffff9c841728, 0xffffffff9cd8c9fd, 0xffffffff9e4d0a45,
    0xffffffff9eaa8988, 0xffffffffa02d0e41, 0xffffffffa255e2bb, 0xffffffffa4441bd9,
    0xffffffffa80f85b5, 0xffffffffaa599dd4, 0xffffffffaa605ff9, 0xffffffffafc7b019,
    0xffffffffb3b247d1, 0xffffffffb4430cf2, 0xffffffffb4764b68, 0xffffffffb5945d74,
    0xffffffffb5a46157, 0xffffffffb90e644b, 0xffffffffbaec046d, 0xffffffffbd50d72b,
    0xffffffffbdc52bed, 0xffffffffbdebc076, 0xffffffffbea5be85, 0xffffffffc0468f41,
    0xffffffffc17b7515, 0xffffffffc410f051, 0xffffffffc557348a, 0xffffffffc6bd8f83,
    0xffffffffc7736d73, 0xffffffffcbcfd0a5, 0xffffffffcbd55602, 0xffffffffcc75dc74,
    0xffffffffce6a11ee, 0xffffffffce90bdc8, 0xffffffffceb21440, 0xffffffffd0c53142,
    0xffffffffd1e1090c, 0xffffffffd382ef36, 0xffffffffd3fd5596, 0xffffffffd42f1abc,
    0xffffffffd4387d1f, 0xffffffffd4764e98, 0xffffffffd494a106, 0xffffffffd624bb1f,
    0xffffffffd7337c7a, 0xffffffffd8703faa, 0xffffffffd99ed440, 0xffffffffd9bd0b3a,
    0xffffffffda6764f3, 0xffffffffdb03266a, 0xffffffffdb4c2eef, 0xffffffffdcfb9bd2,
    0xffffffffdd64d4cf, 0xffffffffde7a9574, 0xffffffffdf4073d4, 0xffffffffdf5cb774,
    0xffffffffdf9d4c29, 0xffffffffe0b16dcd, 0xffffffffe45d405d, 0xffffffffe5689cb4,
    0xffffffffe595e78f, 0xffffffffe609983c, 0xffffffffe6d4984e, 0xffffffffe84379ee,
    0xffffffffe89d46ef, 0xffffffffea26fe56, 0xffffffffecf33496, 0xffffffffed644ea2,
    0xffffffffed9443e7, 0xffffffffee4ee4b8, 0xffffffffeeb4df72, 0xffffffffef3cf9e7,
    0xffffffffef71d6ba, 0xfffffffff00a401b, 0xfffffffff01eeb0f, 0xfffffffff09bcb5a,
    0xfffffffff2951685, 0xfffffffff469d078, 0xfffffffff506ad9d, 0xfffffffff507891f,
    0xfffffffff5af211d, 0xfffffffff6305f88, 0xfffffffff67616c0, 0xfffffffff8a44825,
    0xfffffffff8caa1fb, 0xfffffffff95d1c06, 0xfffffffffbdf73fc, 0xfffffffffbff89f3,
    0xfffffffffc5e0ba5, 0xfffffffffca53082, 0xffffffffff894ead,
];

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "rust_rapidhash",
        src_url: Some("https://github.com/hoxxep/rapidhash"),
        src_status: SrcStatus::Active,
    });

    let flags = ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_MIT;

    reg.add(
        HashDescriptor::new(
            "rust_rapidhash",
            "rust_rapidhash",
            64,
            rust_rapidhash::<false, false, true, false>,
            rust_rapidhash::<true, false, true, false>,
        )
        .desc("rapidhash rust, quality::RapidHasher::new()")
        .sort_order(0)
        .impl_flags(flags)
        .verification(0x562EF848, 0x714A6798)
        .seedprep(rapidhash_seed),
    );

    reg.add(
        HashDescriptor::new(
            "rust_rapidhash_seed",
            "rust_rapidhash",
            64,
            rust_rapidhash::<false, false, true, true>,
            rust_rapidhash::<true, false, true, true>,
        )
        .desc("rapidhash rust, quality::SeedableState::new()")
        .sort_order(10)
        .impl_flags(flags)
        .verification(0x9E0838C9, 0x1C2AC079)
        .seedprep(create_secrets_from_seed),
    );

    reg.add(
        HashDescriptor::new(
            "rust_rapidhash_fast",
            "rust_rapidhash",
            64,
            rust_rapidhash::<false, false, false, false>,
            rust_rapidhash::<true, false, false, false>,
        )
        .desc("rapidhash rust, fast::RapidHasher::new()")
        .sort_order(20)
        .impl_flags(flags)
        .verification(0xB891F260, 0x7B75C39E)
        .seedprep(rapidhash_seed)
        .badseeds(&FAST_BADSEEDS)
        .badseed_desc("Many bad seeds; see the fast-tier known list"),
    );

    reg.add(
        HashDescriptor::new(
            "rust_rapidhash_fast_seed",
            "rust_rapidhash",
            64,
            rust_rapidhash::<false, false, false, true>,
            rust_rapidhash::<true, false, false, true>,
        )
        .desc("rapidhash rust, fast::SeedableState::new()")
        .sort_order(30)
        .impl_flags(flags)
        .verification(0xC3100741, 0x62C5E469)
        .seedprep(create_secrets_from_seed),
    );

    reg.add(
        HashDescriptor::new(
            "rust_rapidhash_p",
            "rust_rapidhash",
            64,
            rust_rapidhash::<false, true, true, false>,
            rust_rapidhash::<true, true, true, false>,
        )
        .desc("rapidhash rust, quality::RapidHasher::new(), no wide mult")
        .sort_order(40)
        .impl_flags(flags)
        .verification(0x77BCDA91, 0xF30CC344)
        .seedprep(rapidhash_seed),
    );

    reg.add(
        HashDescriptor::new(
            "rust_rapidhash_p_seed",
            "rust_rapidhash",
            64,
            rust_rapidhash::<false, true, true, true>,
            rust_rapidhash::<true, true, true, true>,
        )
        .desc("rapidhash rust, quality::SeedableState::new(), no wide mult")
        .sort_order(50)
        .impl_flags(flags)
        .verification(0xC31AF1C5, 0x617E996C)
        .seedprep(create_secrets_from_seed),
    );

    reg.add(
        HashDescriptor::new(
            "rust_rapidhash_p_fast",
            "rust_rapidhash",
            64,
            rust_rapidhash::<false, true, false, false>,
            rust_rapidhash::<true, true, false, false>,
        )
        .desc("rapidhash rust, fast::RapidHasher::new(), no wide mult")
        .sort_order(60)
        .impl_flags(flags)
        .verification(0x2955B659, 0x9D0F120C)
        .seedprep(rapidhash_seed),
    );

    reg.add(
        HashDescriptor::new(
            "rust_rapidhash_p_fast_seed",
            "rust_rapidhash",
            64,
            rust_rapidhash::<false, true, false, true>,
            rust_rapidhash::<true, true, false, true>,
        )
        .desc("rapidhash rust, fast::SeedableState::new(), no wide mult")
        .sort_order(70)
        .impl_flags(flags)
        .verification(0xDB1D8A21, 0x64BAB88E)
        .seedprep(create_secrets_from_seed),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premixed_secrets_have_nonzero_fields() {
        for s in [0u64, 1, 0xFFFF_FFFF, u64::MAX] {
            create_secrets_from_seed(s);
            let secrets = SECRETS.with(Cell::get);
            for sec in &secrets[..7] {
                assert_ne!(sec & (0xFFFF << 48), 0);
                assert_ne!(sec & (0xFFFF << 24), 0);
                assert_ne!(sec & 0xFFFF, 0);
            }
        }
    }

    #[test]
    fn portable_mum_drops_carries_only() {
        // When no cross-lane carries occur the two tiers agree.
        let mut a1 = 2u64;
        let mut b1 = 3u64;
        let mut a2 = 2u64;
        let mut b2 = 3u64;
        mum::<false, false>(&mut a1, &mut b1);
        mum::<false, true>(&mut a2, &mut b2);
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn quality_and_fast_differ() {
        let msg = b"rust rapidhash tiers";
        let mut q = [0u8; 8];
        let mut f = [0u8; 8];
        rust_rapidhash::<false, false, true, false>(msg, msg.len(), 9, &mut q);
        rust_rapidhash::<false, false, false, false>(msg, msg.len(), 9, &mut f);
        assert_ne!(q, f);
    }

    #[test]
    fn long_input_paths_cover_cold_cutoff() {
        let msg = vec![0x44u8; 1024];
        let mut out = [0u8; 8];
        for n in [17usize, 48, 49, 112, 113, 399, 400, 401, 448, 1024] {
            rust_rapidhash::<false, false, true, false>(&msg, n, 3, &mut out);
            rust_rapidhash::<false, true, false, false>(&msg, n, 3, &mut out);
        }
    }
}
