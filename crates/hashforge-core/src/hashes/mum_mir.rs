//! MUM hash (v1/v2/v3) and MIR hash.
//!
//! Every combination of version, unroll power 2^1..2^4, and exact vs
//! no-carry multiply is a separate registration, because the unroll
//! factor and multiply mode change the hash values, not just the speed.
//! The "realign" variants upstream are compiled out as unreachable and
//! are intentionally not registered here.

use crate::bits::{get_u32, get_u64, put_u64};
use crate::descriptor::{
    FamilyInfo, HashDescriptor, HashFn, ImplFlags, SrcStatus, exclude_bad_seeds,
};
use crate::mathmult::{mult64_128, mult64_128_nocarry};
use crate::registry::RegistryBuilder;

// Randomly generated primes with equal bit-value probability.
const BLOCK_START_PRIME: u64 = 0xc42b5e2e6480b23b;
const UNROLL_PRIME: u64 = 0x7b51ec3d22f7096f;
const TAIL_PRIME: u64 = 0xaf47d47c99b1461b;
const FINISH_PRIME1: u64 = 0xa9a7ae7ceff79f3f;
const FINISH_PRIME2: u64 = 0xaf47d47c99b1461b;

const PRIMES: [u64; 16] = [
    0x9ebdcae10d981691,
    0x32b9b9b97a27ac7d,
    0x29b5584d83d35bbd,
    0x4b04e0e61401255f,
    0x25e8f7b1f1c9d027,
    0x80d4c8c000f3e881,
    0xbd1255431904b9dd,
    0x8a3bd4485eee6d81,
    0x3bc721b2aad05197,
    0x71b1a19b907d6e33,
    0x525e6c1084a8534b,
    0x9e4c2cd340c1299f,
    0xde3add92e94caa37,
    0x7e14eadb1f65311d,
    0x3f5aa40f89812853,
    0x33b15a3b587d15c9,
];

// Multiply v and p and fold the 128-bit product by addition. The
// inexact mode drops cross-lane carries, which is faster without a
// 128-bit multiply and still hashes well; both modes are computable
// everywhere, so both are registered.
#[inline]
fn mum<const EXACT: bool>(v: u64, p: u64) -> u64 {
    let (lo, hi) = if EXACT {
        mult64_128(v, p)
    } else {
        mult64_128_nocarry(v, p)
    };
    hi.wrapping_add(lo)
}

// The unroll power affects hash values, not just speed, so it is a
// compile-time parameter and every power is registered on every
// platform.
fn mum_hash_aligned<const VERSION: u32, const UNROLL_POWER: u32, const BSWAP: bool, const EXACT: bool>(
    seed: u64,
    key: &[u8],
    mut len: usize,
) -> u64 {
    let unroll_factor = 1usize << UNROLL_POWER;
    let mut off = 0usize;

    let mut result = if VERSION == 1 || VERSION == 3 {
        mum::<EXACT>(seed, BLOCK_START_PRIME)
    } else {
        seed
    };

    while len > unroll_factor * 8 {
        if VERSION == 1 || VERSION == 2 {
            for i in 0..unroll_factor {
                result ^= mum::<EXACT>(get_u64::<BSWAP>(key, off + i * 8), PRIMES[i]);
            }
        } else {
            let mut i = 0;
            while i < unroll_factor {
                result ^= mum::<EXACT>(
                    get_u64::<BSWAP>(key, off + i * 8) ^ PRIMES[i],
                    get_u64::<BSWAP>(key, off + i * 8 + 8) ^ PRIMES[i + 1],
                );
                i += 2;
            }
        }
        len -= unroll_factor * 8;
        off += unroll_factor * 8;
        // The same primes are reused next iteration, so randomize the
        // state between blocks.
        result = mum::<EXACT>(result, UNROLL_PRIME);
    }

    let n = len / 8;
    for i in 0..n {
        result ^= mum::<EXACT>(get_u64::<BSWAP>(key, off + i * 8), PRIMES[i]);
    }
    len -= n * 8;
    off += n * 8;

    if len == 0 {
        return result;
    }
    let mut u64v: u64;
    if len >= 4 {
        u64v = u64::from(get_u32::<BSWAP>(key, off));
        for i in 4..len {
            u64v |= u64::from(key[off + i]) << (8 * i);
        }
    } else {
        u64v = u64::from(key[off]);
        for i in 1..len {
            u64v |= u64::from(key[off + i]) << (8 * i);
        }
    }
    result ^ mum::<EXACT>(u64v, TAIL_PRIME)
}

fn mum_final<const VERSION: u32, const EXACT: bool>(mut h: u64) -> u64 {
    if VERSION == 1 {
        h ^= mum::<EXACT>(h, FINISH_PRIME1);
        h ^= mum::<EXACT>(h, FINISH_PRIME2);
    } else if VERSION == 2 {
        h ^= h.rotate_left(33);
        h ^= mum::<EXACT>(h, FINISH_PRIME1);
    } else {
        h = mum::<EXACT>(h, h);
    }
    h
}

fn mum_aligned<const VERSION: u32, const UNROLL_POWER: u32, const BSWAP: bool, const EXACT: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let h = mum_hash_aligned::<VERSION, UNROLL_POWER, BSWAP, EXACT>(
        seed.wrapping_add(len as u64),
        input,
        len,
    );
    put_u64::<BSWAP>(mum_final::<VERSION, EXACT>(h), out, 0);
}

// MIR hash.

const P1: u64 = 0x65862b62bdf5ef4d;
const P2: u64 = 0x288eea216831e6a7;

#[inline]
fn mir_mum<const EXACT: bool>(v: u64, c: u64) -> u64 {
    if EXACT {
        return mum::<true>(v, c);
    }
    let v1 = v >> 32;
    let v2 = u64::from(v as u32);
    let c1 = c >> 32;
    let c2 = u64::from(c as u32);
    let rm = v2.wrapping_mul(c1).wrapping_add(v1.wrapping_mul(c2));
    v1.wrapping_mul(c1)
        .wrapping_add(rm >> 32)
        .wrapping_add(v2.wrapping_mul(c2))
        .wrapping_add(rm << 32)
}

#[inline]
fn mir_round<const EXACT: bool>(mut state: u64, v: u64) -> u64 {
    state ^= mir_mum::<EXACT>(v, P1);
    state ^ mir_mum::<EXACT>(state, P2)
}

fn mir_get_key_part<const BSWAP: bool>(v: &[u8], off: usize, len: usize) -> u64 {
    let mut tail = 0u64;
    let mut start = 0usize;
    if len >= 4 {
        tail = u64::from(get_u32::<BSWAP>(v, off)) << 32;
        start = 4;
    }
    for i in start..len {
        tail = (tail >> 8) | (u64::from(v[off + i]) << 56);
    }
    tail
}

fn mir_hash<const BSWAP: bool, const EXACT: bool>(
    input: &[u8],
    olen: usize,
    seed: u64,
    out: &mut [u8],
) {
    let mut r = seed.wrapping_add(olen as u64);
    let mut len = olen;
    let mut off = 0usize;

    while len >= 16 {
        r ^= mir_mum::<EXACT>(get_u64::<BSWAP>(input, off), P1);
        r ^= mir_mum::<EXACT>(get_u64::<BSWAP>(input, off + 8), P2);
        r ^= mir_mum::<EXACT>(r, P1);
        len -= 16;
        off += 16;
    }
    if len >= 8 {
        r ^= mir_mum::<EXACT>(get_u64::<BSWAP>(input, off), P1);
        len -= 8;
        off += 8;
    }
    if len != 0 {
        r ^= mir_mum::<EXACT>(mir_get_key_part::<BSWAP>(input, off, len), P2);
    }
    r = mir_round::<EXACT>(r, r);
    put_u64::<BSWAP>(r, out, 0);
}

struct MumEntry {
    name: &'static str,
    desc: &'static str,
    verification_le: u32,
    verification_be: u32,
    native: HashFn,
    bswap: HashFn,
    badseed_desc: &'static str,
}

const ZERO_FF_COLLIDE: &str =
    "All seeds collide on keys of all 0x00 versus all 0xFF for some lengths (e.g. 32 bytes, 80 bytes)";
const BYTE_PAIR_COLLIDE: &str =
    "All seeds have byte pairs which produce collisions on some lengths (e.g. 0x08 vs. 0x7f on 32-byte keys)";
const ZERO_LEN_SEED: &str = "All seeds give zero hashes on keys of all zero bytes if len+seed==0";

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "mum_mir",
        src_url: Some("https://github.com/vnmakarov/mum-hash"),
        src_status: SrcStatus::Frozen,
    });

    let entries = [
        MumEntry {
            name: "mum1_exact_unroll1",
            desc: "Mum-hash v1, unroll 2^1, exact mult",
            verification_le: 0xCB93DE58,
            verification_be: 0xE820D0FB,
            native: mum_aligned::<1, 1, false, true>,
            bswap: mum_aligned::<1, 1, true, true>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum1_exact_unroll2",
            desc: "Mum-hash v1, unroll 2^2, exact mult",
            verification_le: 0x3EEAE2D4,
            verification_be: 0xF23A691C,
            native: mum_aligned::<1, 2, false, true>,
            bswap: mum_aligned::<1, 2, true, true>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum1_exact_unroll3",
            desc: "Mum-hash v1, unroll 2^3, exact mult",
            verification_le: 0x7C0A2F98,
            verification_be: 0x210F4BEB,
            native: mum_aligned::<1, 3, false, true>,
            bswap: mum_aligned::<1, 3, true, true>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum1_exact_unroll4",
            desc: "Mum-hash v1, unroll 2^4, exact mult",
            verification_le: 0x280B2CC6,
            verification_be: 0x0609C4A6,
            native: mum_aligned::<1, 4, false, true>,
            bswap: mum_aligned::<1, 4, true, true>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum1_inexact_unroll1",
            desc: "Mum-hash v1, unroll 2^1, inexact mult",
            verification_le: 0x689214DF,
            verification_be: 0x14FBDFDD,
            native: mum_aligned::<1, 1, false, false>,
            bswap: mum_aligned::<1, 1, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum1_inexact_unroll2",
            desc: "Mum-hash v1, unroll 2^2, inexact mult",
            verification_le: 0xA973C6C0,
            verification_be: 0x9C12DFA3,
            native: mum_aligned::<1, 2, false, false>,
            bswap: mum_aligned::<1, 2, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum1_inexact_unroll3",
            desc: "Mum-hash v1, unroll 2^3, inexact mult",
            verification_le: 0x5FC8FC51,
            verification_be: 0x907AB469,
            native: mum_aligned::<1, 3, false, false>,
            bswap: mum_aligned::<1, 3, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum1_inexact_unroll4",
            desc: "Mum-hash v1, unroll 2^4, inexact mult",
            verification_le: 0x2EF256D3,
            verification_be: 0xBF27AAE6,
            native: mum_aligned::<1, 4, false, false>,
            bswap: mum_aligned::<1, 4, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum2_exact_unroll1",
            desc: "Mum-hash v2, unroll 2^1, exact mult",
            verification_le: 0x9B36F94C,
            verification_be: 0x50F10B41,
            native: mum_aligned::<2, 1, false, true>,
            bswap: mum_aligned::<2, 1, true, true>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum2_exact_unroll2",
            desc: "Mum-hash v2, unroll 2^2, exact mult",
            verification_le: 0x40427228,
            verification_be: 0x43DB198B,
            native: mum_aligned::<2, 2, false, true>,
            bswap: mum_aligned::<2, 2, true, true>,
            badseed_desc: BYTE_PAIR_COLLIDE,
        },
        MumEntry {
            name: "mum2_exact_unroll3",
            desc: "Mum-hash v2, unroll 2^3, exact mult",
            verification_le: 0xB5D1CB5C,
            verification_be: 0xA718EDE8,
            native: mum_aligned::<2, 3, false, true>,
            bswap: mum_aligned::<2, 3, true, true>,
            badseed_desc: BYTE_PAIR_COLLIDE,
        },
        MumEntry {
            name: "mum2_exact_unroll4",
            desc: "Mum-hash v2, unroll 2^4, exact mult",
            verification_le: 0x59AEDABF,
            verification_be: 0x3B1A2832,
            native: mum_aligned::<2, 4, false, true>,
            bswap: mum_aligned::<2, 4, true, true>,
            badseed_desc: BYTE_PAIR_COLLIDE,
        },
        MumEntry {
            name: "mum2_inexact_unroll1",
            desc: "Mum-hash v2, unroll 2^1, inexact mult",
            verification_le: 0x1CC6D1E3,
            verification_be: 0x297D8E45,
            native: mum_aligned::<2, 1, false, false>,
            bswap: mum_aligned::<2, 1, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum2_inexact_unroll2",
            desc: "Mum-hash v2, unroll 2^2, inexact mult",
            verification_le: 0x62325A27,
            verification_be: 0x5324AEEA,
            native: mum_aligned::<2, 2, false, false>,
            bswap: mum_aligned::<2, 2, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum2_inexact_unroll3",
            desc: "Mum-hash v2, unroll 2^3, inexact mult",
            verification_le: 0xF4DD9947,
            verification_be: 0x98C9448F,
            native: mum_aligned::<2, 3, false, false>,
            bswap: mum_aligned::<2, 3, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum2_inexact_unroll4",
            desc: "Mum-hash v2, unroll 2^4, inexact mult",
            verification_le: 0x62C46C55,
            verification_be: 0x0E9DDA53,
            native: mum_aligned::<2, 4, false, false>,
            bswap: mum_aligned::<2, 4, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum3_exact_unroll1",
            desc: "Mum-hash v3, unroll 2^1, exact mult",
            verification_le: 0x3D14C6E2,
            verification_be: 0x360A792D,
            native: mum_aligned::<3, 1, false, true>,
            bswap: mum_aligned::<3, 1, true, true>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum3_exact_unroll2",
            desc: "Mum-hash v3, unroll 2^2, exact mult",
            verification_le: 0x3A556EB2,
            verification_be: 0x752891D0,
            native: mum_aligned::<3, 2, false, true>,
            bswap: mum_aligned::<3, 2, true, true>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum3_exact_unroll3",
            desc: "Mum-hash v3, unroll 2^3, exact mult",
            verification_le: 0x8BD72B8C,
            verification_be: 0xDD8DD247,
            native: mum_aligned::<3, 3, false, true>,
            bswap: mum_aligned::<3, 3, true, true>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum3_exact_unroll4",
            desc: "Mum-hash v3, unroll 2^4, exact mult",
            verification_le: 0x0AD998DF,
            verification_be: 0x05832709,
            native: mum_aligned::<3, 4, false, true>,
            bswap: mum_aligned::<3, 4, true, true>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum3_inexact_unroll1",
            desc: "Mum-hash v3, unroll 2^1, inexact mult",
            verification_le: 0x475D666B,
            verification_be: 0xE75B31F7,
            native: mum_aligned::<3, 1, false, false>,
            bswap: mum_aligned::<3, 1, true, false>,
            badseed_desc: ZERO_LEN_SEED,
        },
        MumEntry {
            name: "mum3_inexact_unroll2",
            desc: "Mum-hash v3, unroll 2^2, inexact mult",
            verification_le: 0xF6E13B23,
            verification_be: 0x7B00F4F6,
            native: mum_aligned::<3, 2, false, false>,
            bswap: mum_aligned::<3, 2, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum3_inexact_unroll3",
            desc: "Mum-hash v3, unroll 2^3, inexact mult",
            verification_le: 0xB5560703,
            verification_be: 0x1220D737,
            native: mum_aligned::<3, 3, false, false>,
            bswap: mum_aligned::<3, 3, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
        MumEntry {
            name: "mum3_inexact_unroll4",
            desc: "Mum-hash v3, unroll 2^4, inexact mult",
            verification_le: 0xE96A20C0,
            verification_be: 0xE784308C,
            native: mum_aligned::<3, 4, false, false>,
            bswap: mum_aligned::<3, 4, true, false>,
            badseed_desc: ZERO_FF_COLLIDE,
        },
    ];

    for e in entries {
        reg.add(
            HashDescriptor::new(e.name, "mum_mir", 64, e.native, e.bswap)
                .desc(e.desc)
                .impl_flags(
                    ImplFlags::MULTIPLY_64_128 | ImplFlags::ROTATE | ImplFlags::LICENSE_MIT,
                )
                .verification(e.verification_le, e.verification_be)
                .badseed_desc(e.badseed_desc),
        );
    }

    reg.add(
        HashDescriptor::new(
            "mir_exact",
            "mum_mir",
            64,
            mir_hash::<false, true>,
            mir_hash::<true, true>,
        )
        .desc("MIR-hash, exact 128-bit mult")
        .impl_flags(ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_MIT)
        .verification(0x00A393C8, 0x39F99A44)
        .badseed_desc("All seeds produce many collisions on certain key lengths (e.g. 32 bytes, 80 bytes)"),
    );

    reg.add(
        HashDescriptor::new(
            "mir_inexact",
            "mum_mir",
            64,
            mir_hash::<false, false>,
            mir_hash::<true, false>,
        )
        .desc("MIR-hash, inexact 128-bit mult")
        .impl_flags(ImplFlags::MULTIPLY_64_64 | ImplFlags::LICENSE_MIT)
        .verification(0x422A66FC, 0xA9A6A383)
        .seedfix(exclude_bad_seeds)
        .badseed_desc(ZERO_LEN_SEED),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_inexact_mum_agree_without_carries() {
        // Small operands generate no cross-lane carries.
        assert_eq!(mum::<true>(3, 5), mum::<false>(3, 5));
        assert_ne!(
            mum::<true>(u64::MAX, 0x1111111111111111),
            mum::<false>(u64::MAX, 0x1111111111111111)
        );
    }

    #[test]
    fn unroll_power_changes_long_input_hashes() {
        let msg = vec![0x2Au8; 200];
        let h1 = mum_hash_aligned::<1, 1, false, true>(7, &msg, 200);
        let h2 = mum_hash_aligned::<1, 2, false, true>(7, &msg, 200);
        let h4 = mum_hash_aligned::<1, 4, false, true>(7, &msg, 200);
        assert_ne!(h1, h2);
        assert_ne!(h2, h4);
    }

    #[test]
    fn unroll_power_is_invisible_for_short_inputs() {
        // Below one unroll block, every power takes the same path.
        let msg = b"short";
        assert_eq!(
            mum_hash_aligned::<1, 1, false, true>(7, msg, 5),
            mum_hash_aligned::<1, 4, false, true>(7, msg, 5),
        );
    }

    #[test]
    fn mir_key_part_shifts_tail_to_the_top() {
        let v = [0xAAu8, 0xBB, 0xCC, 0xDD, 0xEE];
        // 5-byte tail: first 4 bytes as one word, last byte shifted in.
        let part = mir_get_key_part::<false>(&v, 0, 5);
        assert_eq!(part >> 56, 0xEE);
    }

    #[test]
    fn mum3_inexact_zero_pathology() {
        // The documented bad-seed class: len+seed==0 over zero bytes
        // hashes to zero (version 3 finishes with h = mum(h, h)).
        let msg = [0u8; 32];
        let mut out = [0u8; 8];
        let seed = 0u64.wrapping_sub(32);
        mum_aligned::<3, 2, false, false>(&msg, 32, seed, &mut out);
        assert_eq!(u64::from_ne_bytes(out), 0);
    }
}
