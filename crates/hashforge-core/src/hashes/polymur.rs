//! PolymurHash: 61-bit Mersenne-prime polynomial hashing plus an mx3
//! mixing finish.
//!
//! Two registrations: one derives full parameters from the seed
//! (`seedprep`), the other uses fixed zero-derived parameters and feeds
//! the seed in as a tweak.

use std::cell::Cell;
use std::sync::OnceLock;

use crate::bits::{get_u32, get_u64, is_be, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus};
use crate::mathmult::{add128, mult64_128};
use crate::registry::RegistryBuilder;

const P611: u64 = (1 << 61) - 1;

// Completely arbitrary; the fractional bits of sqrt(p), p = 2, 3, 5, 7.
const ARBITRARY1: u64 = 0x6a09e667f3bcc908;
const ARBITRARY2: u64 = 0xbb67ae8584caa73b;
const ARBITRARY3: u64 = 0x3c6ef372fe94f82b;
const ARBITRARY4: u64 = 0xa54ff53a5f1d36f1;

#[derive(Debug, Clone, Copy, Default)]
struct PolymurParams {
    k: u64,
    k2: u64,
    k7: u64,
    s: u64,
}

#[inline]
fn load_le_u32(buf: &[u8], off: usize) -> u64 {
    let v = get_u32::<false>(buf, off);
    u64::from(if is_be() { v.swap_bytes() } else { v })
}

#[inline]
fn load_le_u64(buf: &[u8], off: usize) -> u64 {
    let v = get_u64::<false>(buf, off);
    if is_be() { v.swap_bytes() } else { v }
}

// 0 to 8 bytes as a little-endian integer.
fn load_le_u64_0_8(buf: &[u8], off: usize, len: usize) -> u64 {
    if len < 4 {
        if len == 0 {
            return 0;
        }
        let mut v = u64::from(buf[off]);
        v |= u64::from(buf[off + len / 2]) << (8 * (len / 2));
        v |= u64::from(buf[off + len - 1]) << (8 * (len - 1));
        return v;
    }
    let lo = load_le_u32(buf, off);
    let hi = load_le_u32(buf, off + len - 4);
    lo | (hi << (8 * (len - 4)))
}

#[inline]
fn mul128(a: u64, b: u64) -> (u64, u64) {
    mult64_128(a, b)
}

#[inline]
fn red611((lo, hi): (u64, u64)) -> u64 {
    (lo & P611).wrapping_add((lo >> 61) | (hi << 3))
}

#[inline]
fn extrared611(x: u64) -> u64 {
    (x & P611) + (x >> 61)
}

// Mixing function from mx3 (rev 2).
fn polymur_mix(mut x: u64) -> u64 {
    x ^= x >> 32;
    x = x.wrapping_mul(0xe9846af9b1a615d);
    x ^= x >> 32;
    x = x.wrapping_mul(0xe9846af9b1a615d);
    x ^= x >> 28;
    x
}

fn init_params(k_seed: u64, s_seed: u64) -> PolymurParams {
    let mut p = PolymurParams {
        s: s_seed ^ ARBITRARY1, // People love to pass zero.
        ..PolymurParams::default()
    };

    // pow37[i] = 37^(2^i) mod (2^61 - 1).
    let mut pow37 = [0u64; 64];
    pow37[0] = 37;
    pow37[32] = 559096694736811184;
    for i in 0..31 {
        pow37[i + 1] = extrared611(red611(mul128(pow37[i], pow37[i])));
        pow37[i + 33] = extrared611(red611(mul128(pow37[i + 32], pow37[i + 32])));
    }

    let mut k_seed = k_seed;
    loop {
        // Choose a random exponent coprime to 2^61 - 2.
        k_seed = k_seed.wrapping_add(ARBITRARY2);
        let e = (k_seed >> 3) | 1;
        if e % 3 == 0 {
            continue;
        }
        if e % 5 == 0 || e % 7 == 0 {
            continue;
        }
        if e % 11 == 0 || e % 13 == 0 || e % 31 == 0 {
            continue;
        }
        if e % 41 == 0 || e % 61 == 0 || e % 151 == 0 || e % 331 == 0 || e % 1321 == 0 {
            continue;
        }

        // k = 37^e mod 2^61 - 1; 37 generates the multiplicative group,
        // and e is coprime with its order, so k is another generator.
        let mut ka = 1u64;
        let mut kb = 1u64;
        let mut e = e;
        let mut i = 0usize;
        while e != 0 {
            if e & 1 != 0 {
                ka = extrared611(red611(mul128(ka, pow37[i])));
            }
            if e & 2 != 0 {
                kb = extrared611(red611(mul128(kb, pow37[i + 1])));
            }
            i += 2;
            e >>= 2;
        }
        let k = extrared611(red611(mul128(ka, kb)));

        p.k = extrared611(k);
        p.k2 = extrared611(red611(mul128(p.k, p.k)));
        let k3 = red611(mul128(p.k, p.k2));
        let k4 = red611(mul128(p.k2, p.k2));
        p.k7 = extrared611(red611(mul128(k3, k4)));
        // Bound on k^7 needed for efficient reduction.
        if p.k7 < (1u64 << 60) - (1u64 << 56) {
            break;
        }
    }
    p
}

thread_local! {
    static PARAMS: Cell<PolymurParams> = const { Cell::new(PolymurParams {
        k: 0,
        k2: 0,
        k7: 0,
        s: 0,
    }) };
}

static PARAMS_ZERO: OnceLock<PolymurParams> = OnceLock::new();

fn init_params_from_seed(seed: u64) -> u64 {
    let p = init_params(
        polymur_mix(seed.wrapping_add(ARBITRARY3)),
        polymur_mix(seed.wrapping_add(ARBITRARY4)),
    );
    PARAMS.with(|s| s.set(p));
    1
}

fn init_params_from_zero() -> bool {
    let _ = PARAMS_ZERO.get_or_init(|| init_params(polymur_mix(ARBITRARY3), polymur_mix(ARBITRARY4)));
    true
}

fn hash_poly611(buf: &[u8], mut len: usize, p: &PolymurParams, tweak: u64) -> u64 {
    let poly_acc = tweak;
    let mut off = 0usize;

    if len <= 7 {
        let m0 = load_le_u64_0_8(buf, off, len);
        return poly_acc.wrapping_add(red611(mul128(
            p.k.wrapping_add(m0),
            p.k2.wrapping_add(len as u64),
        )));
    }

    let mut k3 = red611(mul128(p.k, p.k2));
    let mut k4 = red611(mul128(p.k2, p.k2));
    let mut poly_acc = poly_acc;
    if len >= 50 {
        let k5 = extrared611(red611(mul128(p.k, k4)));
        let k6 = extrared611(red611(mul128(p.k2, k4)));
        k3 = extrared611(k3);
        k4 = extrared611(k4);
        let mut h = 0u64;
        loop {
            let mut m = [0u64; 7];
            for (i, slot) in m.iter_mut().enumerate() {
                *slot = load_le_u64(buf, off + 7 * i) & 0x00ff_ffff_ffff_ffff;
            }
            let t0 = mul128(p.k.wrapping_add(m[0]), k6.wrapping_add(m[1]));
            let t1 = mul128(p.k2.wrapping_add(m[2]), k5.wrapping_add(m[3]));
            let t2 = mul128(k3.wrapping_add(m[4]), k4.wrapping_add(m[5]));
            let t3 = mul128(h.wrapping_add(m[6]), p.k7);
            let mut s = t0;
            add128(&mut s.0, &mut s.1, t1.0, t1.1);
            let mut s23 = t2;
            add128(&mut s23.0, &mut s23.1, t3.0, t3.1);
            add128(&mut s.0, &mut s.1, s23.0, s23.1);
            h = red611(s);
            len -= 49;
            off += 49;
            if len < 50 {
                break;
            }
        }
        let k14 = red611(mul128(p.k7, p.k7));
        let hk14 = red611(mul128(extrared611(h), k14));
        poly_acc = poly_acc.wrapping_add(extrared611(hk14));
    }

    if len >= 8 {
        let m0 = load_le_u64(buf, off) & 0x00ff_ffff_ffff_ffff;
        let m1 = load_le_u64(buf, off + (len - 7) / 2) & 0x00ff_ffff_ffff_ffff;
        let m2 = load_le_u64(buf, off + len - 8) >> 8;
        let t0 = mul128(p.k2.wrapping_add(m0), p.k7.wrapping_add(m1));
        let t1 = mul128(p.k.wrapping_add(m2), k3.wrapping_add(len as u64));
        if len <= 21 {
            let mut s = t0;
            add128(&mut s.0, &mut s.1, t1.0, t1.1);
            return poly_acc.wrapping_add(red611(s));
        }
        let m3 = load_le_u64(buf, off + 7) & 0x00ff_ffff_ffff_ffff;
        let m4 = load_le_u64(buf, off + 14) & 0x00ff_ffff_ffff_ffff;
        let m5 = load_le_u64(buf, off + len - 21) & 0x00ff_ffff_ffff_ffff;
        let m6 = load_le_u64(buf, off + len - 14) & 0x00ff_ffff_ffff_ffff;
        let t0r = red611(t0);
        let t2 = mul128(p.k2.wrapping_add(m3), p.k7.wrapping_add(m4));
        let t3 = mul128(t0r.wrapping_add(m5), k4.wrapping_add(m6));
        let mut s = t1;
        add128(&mut s.0, &mut s.1, t2.0, t2.1);
        add128(&mut s.0, &mut s.1, t3.0, t3.1);
        return poly_acc.wrapping_add(red611(s));
    }

    let m0 = load_le_u64_0_8(buf, off, len);
    poly_acc.wrapping_add(red611(mul128(
        p.k.wrapping_add(m0),
        p.k2.wrapping_add(len as u64),
    )))
}

fn polymur<const BSWAP: bool, const TWEAK_SEED: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let (p, tweak) = if TWEAK_SEED {
        let p = *PARAMS_ZERO
            .get_or_init(|| init_params(polymur_mix(ARBITRARY3), polymur_mix(ARBITRARY4)));
        (p, seed)
    } else {
        (PARAMS.with(Cell::get), 0)
    };
    let hash = polymur_mix(hash_poly611(input, len, &p, tweak)).wrapping_add(p.s);
    put_u64::<BSWAP>(hash, out, 0);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "polymur",
        src_url: Some("https://github.com/orlp/polymur-hash"),
        src_status: SrcStatus::Stableish,
    });

    reg.add(
        HashDescriptor::new(
            "polymurhash",
            "polymur",
            64,
            polymur::<false, false>,
            polymur::<true, false>,
        )
        .desc("Polymur Hash (deriving parameters from the seed)")
        .hash_flags(HashFlags::XL_SEED)
        .impl_flags(ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_ZLIB)
        .verification(0x0722B1A7, 0x830CF404)
        .seedprep(init_params_from_seed),
    );

    reg.add(
        HashDescriptor::new(
            "polymurhash_tweakseed",
            "polymur",
            64,
            polymur::<false, true>,
            polymur::<true, true>,
        )
        .desc("Polymur Hash (using seed as tweak)")
        .hash_flags(HashFlags::XL_SEED)
        .impl_flags(ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_ZLIB)
        .verification(0x95CFB54D, 0xEE893701)
        .init(init_params_from_zero),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_k7_respects_reduction_bound() {
        for seed in [0u64, 1, 0xDEAD_BEEF, u64::MAX] {
            let p = init_params(
                polymur_mix(seed.wrapping_add(ARBITRARY3)),
                polymur_mix(seed.wrapping_add(ARBITRARY4)),
            );
            assert!(p.k7 < (1 << 60) - (1 << 56));
            assert_ne!(p.k, 0);
            assert_ne!(p.k2, 0);
        }
    }

    #[test]
    fn pow37_squaring_chain_links_up() {
        // 37^(2^32) computed by repeated squaring must land on the
        // hard-coded table constant.
        let mut v = 37u64;
        for _ in 0..32 {
            v = extrared611(red611(mul128(v, v)));
        }
        // extrared611 may leave a value one multiple of p above the
        // canonical residue.
        let canon = |x: u64| if x >= P611 { x - P611 } else { x };
        assert_eq!(canon(v), canon(559096694736811184));
    }

    #[test]
    fn short_loader_is_little_endian() {
        let buf = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(load_le_u64_0_8(&buf, 0, 8), 0x0807060504030201);
        assert_eq!(load_le_u64_0_8(&buf, 0, 3), 0x030201);
        assert_eq!(load_le_u64_0_8(&buf, 0, 0), 0);
    }

    #[test]
    fn tweak_and_param_modes_differ() {
        init_params_from_zero();
        init_params_from_seed(5);
        let msg = vec![0u8; 49];
        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        polymur::<false, false>(&msg, msg.len(), 5, &mut a);
        polymur::<false, true>(&msg, msg.len(), 5, &mut b);
        assert_ne!(a, b);
    }
}
