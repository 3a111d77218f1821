//! a5hash v5.21.
//!
//! Seeds start from mantissa bits of pi, XORed with the message length
//! and the user seed masked by alternating bit-pairs; mixing is one
//! 128-bit multiply per 16-byte lane, with a length-keyed tail.

use crate::bits::{get_u32, get_u64, put_u32, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus};
use crate::mathmult::mult64_128;
use crate::registry::RegistryBuilder;

/// `01` bit-pairs.
const VAL01: u64 = 0x5555_5555_5555_5555;
/// `10` bit-pairs.
const VAL10: u64 = 0xAAAA_AAAA_AAAA_AAAA;

#[inline]
fn umul64(u: u32, v: u32) -> (u32, u32) {
    let r = u64::from(u) * u64::from(v);
    (r as u32, (r >> 32) as u32)
}

fn a5hash_64_impl<const BSWAP: bool>(msg: &[u8], mut len: usize, use_seed: u64) -> u64 {
    let mut val01 = VAL01;
    let mut val10 = VAL10;

    let mut seed1 = 0x243F_6A88_85A3_08D3u64 ^ len as u64;
    let mut seed2 = 0x4528_21E6_38D0_1377u64 ^ len as u64;
    let mut off = 0usize;

    let (s1, s2) = mult64_128(seed2 ^ (use_seed & val10), seed1 ^ (use_seed & val01));
    seed1 = s1;
    seed2 = s2;

    if len > 16 {
        val01 ^= seed1;
        val10 ^= seed2;

        loop {
            let a = (u64::from(get_u32::<BSWAP>(msg, off)) << 32)
                ^ u64::from(get_u32::<BSWAP>(msg, off + 4))
                ^ seed1;
            let b = (u64::from(get_u32::<BSWAP>(msg, off + 8)) << 32)
                ^ u64::from(get_u32::<BSWAP>(msg, off + 12))
                ^ seed2;
            let (s1, s2) = mult64_128(a, b);

            len -= 16;
            off += 16;

            seed1 = s1.wrapping_add(val01);
            seed2 = s2.wrapping_add(val10);
            if len <= 16 {
                break;
            }
        }
    }

    if len != 0 {
        if len > 3 {
            let msg4 = off + len - 4;
            let mo = len >> 3;

            seed1 ^= (u64::from(get_u32::<BSWAP>(msg, off)) << 32)
                | u64::from(get_u32::<BSWAP>(msg, msg4));
            seed2 ^= (u64::from(get_u32::<BSWAP>(msg, off + mo * 4)) << 32)
                | u64::from(get_u32::<BSWAP>(msg, msg4 - mo * 4));
        } else {
            seed1 ^= u64::from(msg[off]);
            if len > 1 {
                seed1 ^= u64::from(msg[off + 1]) << 8;
                if len > 2 {
                    seed1 ^= u64::from(msg[off + 2]) << 16;
                }
            }
        }
    }

    let (s1, s2) = mult64_128(seed1, seed2);
    let (s1, s2) = mult64_128(s1 ^ val01, s2);
    s1 ^ s2
}

// The registered 32-bit variant runs in "small platform" mode: the third
// seed pair is the fixed product of the pi constants rather than being
// derived from the upper length bits.
fn a5hash_32_impl<const BSWAP: bool>(msg: &[u8], mut len: usize, use_seed: u32) -> u32 {
    let mut val01 = VAL01 as u32;
    let mut val10 = VAL10 as u32;

    let mut seed1 = 0x243F_6A88u32 ^ len as u32;
    let mut seed2 = 0x85A3_08D3u32 ^ len as u32;
    let mut seed3 = 0xFB0B_D3EAu32;
    let mut seed4 = 0x0F58_FD47u32;
    let mut off = 0usize;

    let (s1, s2) = umul64(seed2 ^ (use_seed & val10), seed1 ^ (use_seed & val01));
    seed1 = s1;
    seed2 = s2;

    let a;
    let b;
    if len < 17 {
        if len > 3 {
            let msg4 = len - 4;
            a = get_u32::<BSWAP>(msg, 0);
            b = get_u32::<BSWAP>(msg, msg4);

            if len >= 9 {
                let mo = len >> 3;
                let c = get_u32::<BSWAP>(msg, mo * 4);
                let d = get_u32::<BSWAP>(msg, msg4 - mo * 4);
                let (s3, s4) = umul64(c.wrapping_add(seed3), d.wrapping_add(seed4));
                seed3 = s3;
                seed4 = s4;
            }
        } else {
            let mut acc = 0u32;
            if len != 0 {
                acc = u32::from(msg[0]);
                if len != 1 {
                    acc |= u32::from(msg[1]) << 8;
                    if len != 2 {
                        acc |= u32::from(msg[2]) << 16;
                    }
                }
            }
            a = acc;
            b = 0;
        }
    } else {
        val01 ^= seed1;
        val10 ^= seed2;

        loop {
            let s1 = seed1;
            let s4 = seed4;

            let (n1, n2) = umul64(
                get_u32::<BSWAP>(msg, off).wrapping_add(seed1),
                get_u32::<BSWAP>(msg, off + 4).wrapping_add(seed2),
            );
            let (n3, n4) = umul64(
                get_u32::<BSWAP>(msg, off + 8).wrapping_add(seed3),
                get_u32::<BSWAP>(msg, off + 12).wrapping_add(seed4),
            );

            len -= 16;
            off += 16;

            seed1 = n1.wrapping_add(val01);
            seed2 = n2.wrapping_add(s4);
            seed3 = n3.wrapping_add(s1);
            seed4 = n4.wrapping_add(val10);
            if len <= 16 {
                break;
            }
        }

        a = get_u32::<BSWAP>(msg, off + len - 8);
        b = get_u32::<BSWAP>(msg, off + len - 4);

        if len >= 9 {
            let c = get_u32::<BSWAP>(msg, off + len - 16);
            let d = get_u32::<BSWAP>(msg, off + len - 12);
            let (s3, s4) = umul64(c.wrapping_add(seed3), d.wrapping_add(seed4));
            seed3 = s3;
            seed4 = s4;
        }
    }

    seed1 ^= seed3;
    seed2 ^= seed4;

    let (s1, s2) = umul64(a.wrapping_add(seed1), b.wrapping_add(seed2));
    let (ra, rb) = umul64(val01 ^ s1, s2);
    ra ^ rb
}

#[inline]
fn lu64x32<const BSWAP: bool>(msg: &[u8], hi: usize, lo: usize) -> u64 {
    (u64::from(get_u32::<BSWAP>(msg, hi)) << 32) | u64::from(get_u32::<BSWAP>(msg, lo))
}

// Returns (low, high); `high` is only meaningful when TRUNCATE is false.
fn a5hash_128_impl<const BSWAP: bool, const TRUNCATE: bool>(
    msg: &[u8],
    mut len: usize,
    use_seed: u64,
) -> (u64, u64) {
    let mut val01 = VAL01;
    let mut val10 = VAL10;

    let mut seed1 = 0x243F_6A88_85A3_08D3u64 ^ len as u64;
    let mut seed2 = 0x4528_21E6_38D0_1377u64 ^ len as u64;
    let mut seed3 = 0xA409_3822_299F_31D0u64;
    let mut seed4 = 0xC0AC_29B7_C97C_50DDu64;
    let mut off = 0usize;

    let (s1, s2) = mult64_128(seed2 ^ (use_seed & val10), seed1 ^ (use_seed & val01));
    seed1 = s1;
    seed2 = s2;

    let finish = |mut a: u64,
                  b: u64,
                  seed1: u64,
                  seed2: u64,
                  seed3: u64,
                  seed4: u64,
                  val01: u64|
     -> (u64, u64) {
        let (s1, s2) = mult64_128(a.wrapping_add(seed1), b.wrapping_add(seed2));
        let (ra, rb) = mult64_128(val01 ^ s1, s2);
        a = ra ^ rb;
        if TRUNCATE {
            (a, 0)
        } else {
            let (h1, h2) = mult64_128(s1 ^ seed3, s2 ^ seed4);
            (a, h1 ^ h2)
        }
    };

    if len < 17 {
        let a;
        let b;
        if len > 3 {
            let msg4 = len - 4;
            let mo = len >> 3;
            a = lu64x32::<BSWAP>(msg, 0, msg4);
            b = lu64x32::<BSWAP>(msg, mo * 4, msg4 - mo * 4);
        } else {
            let mut acc = 0u64;
            if len != 0 {
                acc = u64::from(msg[0]);
                if len > 1 {
                    acc |= u64::from(msg[1]) << 8;
                    if len > 2 {
                        acc |= u64::from(msg[2]) << 16;
                    }
                }
            }
            a = acc;
            b = 0;
        }
        // Short inputs skip the third seed pair entirely.
        return finish(a, b, seed1, seed2, seed3, seed4, val01);
    }

    if len < 33 {
        let a = lu64x32::<BSWAP>(msg, 0, 4);
        let b = lu64x32::<BSWAP>(msg, 8, 12);
        let c = lu64x32::<BSWAP>(msg, len - 16, len - 12);
        let d = lu64x32::<BSWAP>(msg, len - 8, len - 4);

        let (s3, s4) = mult64_128(c.wrapping_add(seed3), d.wrapping_add(seed4));
        seed3 = s3;
        seed4 = s4;
        seed1 ^= seed3;
        seed2 ^= seed4;
        return finish(a, b, seed1, seed2, seed3, seed4, val01);
    }

    val01 ^= seed1;
    val10 ^= seed2;

    let mut do_tail32 = true;
    if len > 64 {
        let mut seed5 = 0x082E_FA98_EC4E_6C89u64;
        let mut seed6 = 0x3F84_D5B5_B547_0917u64;
        let mut seed7 = 0x1319_8A2E_0370_7344u64;
        let mut seed8 = 0xBE54_66CF_34E9_0C6Cu64;

        loop {
            let s1 = seed1;
            let s3 = seed3;
            let s5 = seed5;

            let (n1, n2) = mult64_128(
                get_u64::<BSWAP>(msg, off).wrapping_add(seed1),
                get_u64::<BSWAP>(msg, off + 32).wrapping_add(seed2),
            );
            seed1 = n1.wrapping_add(val01);
            seed2 = n2.wrapping_add(seed8);

            let (n3, n4) = mult64_128(
                get_u64::<BSWAP>(msg, off + 8).wrapping_add(seed3),
                get_u64::<BSWAP>(msg, off + 40).wrapping_add(seed4),
            );
            seed3 = n3.wrapping_add(s1);
            seed4 = n4.wrapping_add(val10);

            let (n5, n6) = mult64_128(
                get_u64::<BSWAP>(msg, off + 16).wrapping_add(seed5),
                get_u64::<BSWAP>(msg, off + 48).wrapping_add(seed6),
            );
            let (n7, n8) = mult64_128(
                get_u64::<BSWAP>(msg, off + 24).wrapping_add(seed7),
                get_u64::<BSWAP>(msg, off + 56).wrapping_add(seed8),
            );

            len -= 64;
            off += 64;

            seed5 = n5.wrapping_add(s3);
            seed6 = n6.wrapping_add(val10);
            seed7 = n7.wrapping_add(s5);
            seed8 = n8.wrapping_add(val10);
            if len <= 64 {
                break;
            }
        }

        seed1 ^= seed5;
        seed2 ^= seed6;
        seed3 ^= seed7;
        seed4 ^= seed8;

        do_tail32 = len > 32;
    }

    if do_tail32 {
        let s1 = seed1;

        let (n1, n2) = mult64_128(
            get_u64::<BSWAP>(msg, off).wrapping_add(seed1),
            get_u64::<BSWAP>(msg, off + 8).wrapping_add(seed2),
        );
        seed1 = n1.wrapping_add(val01);
        seed2 = n2.wrapping_add(seed4);

        let (n3, n4) = mult64_128(
            get_u64::<BSWAP>(msg, off + 16).wrapping_add(seed3),
            get_u64::<BSWAP>(msg, off + 24).wrapping_add(seed4),
        );

        len -= 32;
        off += 32;

        seed3 = n3.wrapping_add(s1);
        seed4 = n4.wrapping_add(val10);
    }

    let a = get_u64::<BSWAP>(msg, off + len - 16);
    let b = get_u64::<BSWAP>(msg, off + len - 8);

    if len >= 17 {
        let c = get_u64::<BSWAP>(msg, off + len - 32);
        let d = get_u64::<BSWAP>(msg, off + len - 24);
        let (s3, s4) = mult64_128(c.wrapping_add(seed3), d.wrapping_add(seed4));
        seed3 = s3;
        seed4 = s4;
    }

    seed1 ^= seed3;
    seed2 ^= seed4;
    finish(a, b, seed1, seed2, seed3, seed4, val01)
}

fn a5hash_64<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let hash = a5hash_64_impl::<BSWAP>(input, len, seed);
    put_u64::<BSWAP>(hash, out, 0);
}

fn a5hash_32<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let hash = a5hash_32_impl::<BSWAP>(input, len, seed as u32);
    put_u32::<BSWAP>(hash, out, 0);
}

fn a5hash_128<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let (lo, hi) = a5hash_128_impl::<BSWAP, false>(input, len, seed);
    put_u64::<BSWAP>(lo, out, 0);
    put_u64::<BSWAP>(hi, out, 8);
}

fn a5hash_128_64<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let (lo, _) = a5hash_128_impl::<BSWAP, true>(input, len, seed);
    put_u64::<BSWAP>(lo, out, 0);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "a5hash",
        src_url: Some("https://github.com/avaneev/a5hash"),
        src_status: SrcStatus::Stableish,
    });

    reg.add(
        HashDescriptor::new("a5hash", "a5hash", 64, a5hash_64::<false>, a5hash_64::<true>)
            .desc("a5hash v5.21, 64-bit version")
            .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
            .impl_flags(
                ImplFlags::CANONICAL_LE | ImplFlags::MULTIPLY | ImplFlags::LICENSE_MIT,
            )
            .verification(0xADDE79B3, 0x11A303D0),
    );

    reg.add(
        HashDescriptor::new("a5hash_32", "a5hash", 32, a5hash_32::<false>, a5hash_32::<true>)
            .desc("a5hash v5.21, 32-bit version")
            .hash_flags(HashFlags::SMALL_SEED | HashFlags::ENDIAN_INDEPENDENT)
            .impl_flags(
                ImplFlags::CANONICAL_LE | ImplFlags::MULTIPLY | ImplFlags::LICENSE_MIT,
            )
            .verification(0xA948D11B, 0x9C6196A0),
    );

    reg.add(
        HashDescriptor::new(
            "a5hash_128",
            "a5hash",
            128,
            a5hash_128::<false>,
            a5hash_128::<true>,
        )
        .desc("a5hash v5.21, 128-bit version")
        .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(ImplFlags::CANONICAL_LE | ImplFlags::MULTIPLY | ImplFlags::LICENSE_MIT)
        .verification(0x89406B11, 0x890F41CB),
    );

    reg.add(
        HashDescriptor::new(
            "a5hash_128_64",
            "a5hash",
            64,
            a5hash_128_64::<false>,
            a5hash_128_64::<true>,
        )
        .desc("a5hash v5.21, 128-bit version truncated to 64 bits")
        .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(ImplFlags::CANONICAL_LE | ImplFlags::MULTIPLY | ImplFlags::LICENSE_MIT)
        .verification(0x14AD402C, 0xA500372C),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_ignores_message_bytes() {
        // len == 0 must not read the input; identical results for any buffer.
        let a = a5hash_64_impl::<false>(&[0xFFu8; 16], 0, 0);
        let b = a5hash_64_impl::<false>(&[0x00u8; 16], 0, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn seed_changes_output() {
        let msg = b"0123456789abcdef0123456789abcdef0123";
        assert_ne!(
            a5hash_64_impl::<false>(msg, msg.len(), 1),
            a5hash_64_impl::<false>(msg, msg.len(), 2)
        );
        assert_ne!(
            a5hash_32_impl::<false>(msg, msg.len(), 1),
            a5hash_32_impl::<false>(msg, msg.len(), 2)
        );
    }

    #[test]
    fn truncated_128_matches_low_half_short_inputs() {
        // For inputs under 17 bytes the truncated variant shares the
        // low-word computation with the full 128-bit one.
        let msg = b"abcdefgh";
        let (lo, _) = a5hash_128_impl::<false, false>(msg, msg.len(), 7);
        let (tlo, thi) = a5hash_128_impl::<false, true>(msg, msg.len(), 7);
        assert_eq!(lo, tlo);
        assert_eq!(thi, 0);
    }

    #[test]
    fn all_block_boundaries_are_deterministic() {
        // Exercises every tail/loop path; the verification digest pins
        // down the actual values.
        let msg = vec![0x5Au8; 200];
        for &n in &[0usize, 1, 3, 4, 8, 15, 16, 17, 31, 32, 33, 63, 64, 65, 127, 128, 129] {
            assert_eq!(
                a5hash_64_impl::<false>(&msg, n, 42),
                a5hash_64_impl::<false>(&msg, n, 42),
            );
            assert_eq!(
                a5hash_32_impl::<false>(&msg, n, 42),
                a5hash_32_impl::<false>(&msg, n, 42),
            );
            assert_eq!(
                a5hash_128_impl::<false, false>(&msg, n, 42),
                a5hash_128_impl::<false, false>(&msg, n, 42),
            );
        }
    }
}
