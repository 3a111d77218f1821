//! Rust FxHash v2.1.1 (rustc-hash).
//!
//! A polynomial hash over an MCG keystream, finished with a single
//! rotation, plus a wyhash-inspired compression function for byte
//! slices. Registered in 64- and 32-bit forms, each with an optional
//! unofficial avalanche pass and with a 32-bit-multiplier fallback mixer.

use crate::bits::{get_u32, get_u64, put_u32, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus};
use crate::mathmult::mult64_128;
use crate::registry::RegistryBuilder;

// MCG multipliers from Steele & Vigna, "Computationally Easy,
// Spectrally Good Multipliers for Congruential PRNGs".
const K64: u64 = 0xf1357aea2e62a9c5;
const K32: u32 = 0x93d765dd;

// Nothing special, digits of pi.
const SEED1: u64 = 0x243f6a8885a308d3;
const SEED2: u64 = 0x13198a2e03707344;
const PREVENT_TRIVIAL_ZERO_COLLAPSE: u64 = 0xa4093822299f31d0;

#[inline]
fn multiply_mix<const MUL64: bool>(x: u64, y: u64) -> u64 {
    if MUL64 {
        let (rlo, rhi) = mult64_128(x, y);
        rlo ^ rhi
    } else {
        // Decomposition for targets where a full 64x64->128 product is
        // prohibitively expensive: cross-multiply the 32-bit halves.
        let lx = u64::from(x as u32);
        let ly = u64::from(y as u32);
        let hx = u64::from((x >> 32) as u32);
        let hy = u64::from((y >> 32) as u32);

        let afull = lx.wrapping_mul(hy);
        let bfull = hx.wrapping_mul(ly);
        afull ^ bfull.rotate_right(32)
    }
}

fn hash_bytes<const BSWAP: bool, const MUL64: bool>(bytes: &[u8], len: usize) -> u64 {
    let mut s0 = SEED1;
    let mut s1 = SEED2;

    if len <= 16 {
        if len >= 8 {
            s0 ^= get_u64::<BSWAP>(bytes, 0);
            s1 ^= get_u64::<BSWAP>(bytes, len - 8);
        } else if len >= 4 {
            s0 ^= u64::from(get_u32::<BSWAP>(bytes, 0));
            s1 ^= u64::from(get_u32::<BSWAP>(bytes, len - 4));
        } else if len > 0 {
            let lo = u64::from(bytes[0]);
            let mid = u64::from(bytes[len / 2]);
            let hi = u64::from(bytes[len - 1]);
            s0 ^= lo;
            s1 ^= (hi << 8) | mid;
        }
    } else {
        // Bulk blocks may partially overlap with the suffix reads.
        let mut off = 0usize;
        while off < len - 16 {
            let x = get_u64::<BSWAP>(bytes, off);
            let y = get_u64::<BSWAP>(bytes, off + 8);

            // s1 becomes a mix of s0, x, and y while s0 takes s1's old
            // value, giving two independent dependency streams. The
            // constant XOR keeps all-zero input from collapsing.
            let t = multiply_mix::<MUL64>(s0 ^ x, PREVENT_TRIVIAL_ZERO_COLLAPSE ^ y);
            s0 = s1;
            s1 = t;
            off += 16;
        }

        s0 ^= get_u64::<BSWAP>(bytes, len - 16);
        s1 ^= get_u64::<BSWAP>(bytes, len - 8);
    }

    multiply_mix::<MUL64>(s0, s1) ^ len as u64
}

// MurmurHash3-style avalanching permutations for the unofficial "mix"
// registrations.
fn f64(mut val: u64) -> u64 {
    val ^= val >> 33;
    val = val.wrapping_mul(0xff51afd7ed558ccd);
    val ^= val >> 33;
    val = val.wrapping_mul(0xc4ceb9fe1a85ec53);
    val ^= val >> 33;
    val
}

fn f32(mut val: u32) -> u32 {
    val ^= val >> 16;
    val = val.wrapping_mul(0x85ebca6b);
    val ^= val >> 13;
    val = val.wrapping_mul(0xc2b2ae35);
    val ^= val >> 16;
    val
}

fn fxhash64<const BSWAP: bool, const AVALANCHE: bool, const MUL64: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let mut hash = seed;
    let hb = hash_bytes::<BSWAP, MUL64>(input, len);

    if AVALANCHE {
        hash = f64(hash);
        hash ^= hb;
        hash = f64(hash);
    } else {
        hash = hash.wrapping_add(hb).wrapping_mul(K64);
        hash = hash.rotate_left(26);
    }

    put_u64::<BSWAP>(hash, out, 0);
}

fn fxhash32<const BSWAP: bool, const AVALANCHE: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let mut hash = seed as u32;
    let hb = hash_bytes::<BSWAP, false>(input, len);

    if AVALANCHE {
        hash = f32(hash);
        hash ^= hb as u32;
        hash ^= (hb >> 32) as u32;
        hash = f32(hash);
    } else {
        hash = hash.wrapping_add(hb as u32).wrapping_mul(K32);
        hash = hash.wrapping_add((hb >> 32) as u32).wrapping_mul(K32);
        hash = hash.rotate_left(15);
    }

    put_u32::<BSWAP>(hash, out, 0);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "rust_fxhash",
        src_url: Some("https://github.com/rust-lang/rustc-hash"),
        src_status: SrcStatus::Stableish,
    });

    let flags64 = ImplFlags::MULTIPLY_64_128
        | ImplFlags::ROTATE
        | ImplFlags::CANONICAL_LE
        | ImplFlags::LICENSE_MIT;
    let flags64_m32 = ImplFlags::MULTIPLY_64_64
        | ImplFlags::ROTATE
        | ImplFlags::CANONICAL_LE
        | ImplFlags::LICENSE_MIT;
    let flags32 =
        ImplFlags::MULTIPLY | ImplFlags::ROTATE | ImplFlags::CANONICAL_LE | ImplFlags::LICENSE_MIT;

    reg.add(
        HashDescriptor::new(
            "rust_fxhash64",
            "rust_fxhash",
            64,
            fxhash64::<false, false, true>,
            fxhash64::<true, false, true>,
        )
        .desc("Rust FxHash v2.1.1 64-bit version")
        .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(flags64)
        .verification(0x8F177350, 0xDA24B5D0),
    );

    reg.add(
        HashDescriptor::new(
            "rust_fxhash64_mix",
            "rust_fxhash",
            64,
            fxhash64::<false, true, true>,
            fxhash64::<true, true, true>,
        )
        .desc("Rust FxHash v2.1.1 64-bit version, with unofficial extra mixing")
        .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(flags64)
        .verification(0xFC662413, 0x0B8B6821),
    );

    reg.add(
        HashDescriptor::new(
            "rust_fxhash64_mult32",
            "rust_fxhash",
            64,
            fxhash64::<false, false, false>,
            fxhash64::<true, false, false>,
        )
        .desc("Rust FxHash v2.1.1 64-bit version, 32-bit multiplies only")
        .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(flags64_m32)
        .verification(0x686292BD, 0xF10008B1),
    );

    reg.add(
        HashDescriptor::new(
            "rust_fxhash64_mult32_mix",
            "rust_fxhash",
            64,
            fxhash64::<false, true, false>,
            fxhash64::<true, true, false>,
        )
        .desc("Rust FxHash v2.1.1 64-bit version, 32-bit multiplies, with unofficial extra mixing")
        .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(flags64_m32)
        .verification(0x9CF6B62E, 0x23CEDC0E),
    );

    reg.add(
        HashDescriptor::new(
            "rust_fxhash32",
            "rust_fxhash",
            32,
            fxhash32::<false, false>,
            fxhash32::<true, false>,
        )
        .desc("Rust FxHash v2.1.1 32-bit version")
        .hash_flags(HashFlags::SMALL_SEED | HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(flags32)
        .verification(0xC8D7717D, 0x0209B465),
    );

    reg.add(
        HashDescriptor::new(
            "rust_fxhash32_mix",
            "rust_fxhash",
            32,
            fxhash32::<false, true>,
            fxhash32::<true, true>,
        )
        .desc("Rust FxHash v2.1.1 32-bit version, with unofficial extra mixing")
        .hash_flags(HashFlags::SMALL_SEED | HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(flags32)
        .verification(0xD2DC6A74, 0x6202E4AD),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_mixed_into_the_result() {
        let buf = [0u8; 32];
        assert_ne!(
            hash_bytes::<false, true>(&buf, 16),
            hash_bytes::<false, true>(&buf, 17)
        );
    }

    #[test]
    fn mult32_mixer_differs_from_full_mixer() {
        let msg = b"fxhash multiplier fallbacks";
        assert_ne!(
            hash_bytes::<false, true>(msg, msg.len()),
            hash_bytes::<false, false>(msg, msg.len())
        );
    }

    #[test]
    fn avalanche_permutations_are_bijective_samples() {
        // Distinct inputs through f64/f32 stay distinct.
        assert_ne!(f64(0), f64(1));
        assert_ne!(f32(0), f32(1));
        assert_eq!(f64(0x0123_4567_89AB_CDEF), f64(0x0123_4567_89AB_CDEF));
    }

    #[test]
    fn small_length_buckets_all_work() {
        let msg = vec![0x7Eu8; 40];
        let mut out = [0u8; 8];
        for n in 0..=40 {
            fxhash64::<false, false, true>(&msg, n, 1, &mut out);
        }
    }
}
