//! komihash v5.7.
//!
//! 128-bit-multiply mixing seeded from pi mantissa bits; long inputs run
//! an 8-lane carry interleave. Tail words are loaded with the "final
//! byte" padding scheme, which encodes the remaining length into the
//! word itself.

use crate::bits::{get_u32, get_u64, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus};
use crate::mathmult::mult64_128;
use crate::registry::RegistryBuilder;

// Tail loaders. `off` is the position of the remaining bytes inside the
// whole message; reads may reach a few bytes before `off`, which stays
// in-bounds because callers only use these deep enough into the buffer.

fn lpu64ec_l3<const BSWAP: bool>(msg: &[u8], off: usize, len: usize) -> u64 {
    let ml8 = (len * 8) as u32;
    if len < 4 {
        let m3 = off + len - 3;
        let m = u64::from(msg[m3]) | u64::from(msg[m3 + 1]) << 8 | u64::from(msg[m3 + 2]) << 16;
        (1u64 << ml8) | (m >> (24 - ml8))
    } else {
        let mh = u64::from(get_u32::<BSWAP>(msg, off + len - 4));
        let ml = u64::from(get_u32::<BSWAP>(msg, off));
        (1u64 << ml8) | ml | (mh >> (64 - ml8)) << 32
    }
}

fn lpu64ec_nz<const BSWAP: bool>(msg: &[u8], off: usize, len: usize) -> u64 {
    let ml8 = (len * 8) as u32;
    if len < 4 {
        let mut m = u64::from(msg[off]);
        if len > 1 {
            m |= u64::from(msg[off + 1]) << 8;
            if len > 2 {
                m |= u64::from(msg[off + 2]) << 16;
            }
        }
        (1u64 << ml8) | m
    } else {
        let mh = u64::from(get_u32::<BSWAP>(msg, off + len - 4));
        let ml = u64::from(get_u32::<BSWAP>(msg, off));
        (1u64 << ml8) | ml | (mh >> (64 - ml8)) << 32
    }
}

fn lpu64ec_l4<const BSWAP: bool>(msg: &[u8], off: usize, len: usize) -> u64 {
    let ml8 = (len * 8) as u32;
    if len < 5 {
        let m = u64::from(get_u32::<BSWAP>(msg, off + len - 4));
        (1u64 << ml8) | (m >> (32 - ml8))
    } else {
        let m = get_u64::<BSWAP>(msg, off + len - 8);
        (1u64 << ml8) | (m >> (64 - ml8))
    }
}

#[inline]
fn hash16<const BSWAP: bool>(msg: &[u8], off: usize, seed1: &mut u64, seed5: &mut u64) {
    let (lo, hi) = mult64_128(
        *seed1 ^ get_u64::<BSWAP>(msg, off),
        *seed5 ^ get_u64::<BSWAP>(msg, off + 8),
    );
    *seed1 = lo;
    *seed5 = seed5.wrapping_add(hi);
    *seed1 ^= *seed5;
}

#[inline]
fn hashround(seed1: &mut u64, seed5: &mut u64) {
    let (lo, hi) = mult64_128(*seed1, *seed5);
    *seed1 = lo;
    *seed5 = seed5.wrapping_add(hi);
    *seed1 ^= *seed5;
}

#[inline]
fn hashfin(r1h: u64, r2h: u64, seed1: &mut u64, seed5: &mut u64) -> u64 {
    let (lo, hi) = mult64_128(r1h, r2h);
    *seed1 = lo;
    *seed5 = seed5.wrapping_add(hi);
    *seed1 ^= *seed5;
    hashround(seed1, seed5);
    *seed1
}

fn komihash_epi<const BSWAP: bool>(
    msg: &[u8],
    mut off: usize,
    mut len: usize,
    mut seed1: u64,
    mut seed5: u64,
) -> u64 {
    if len > 31 {
        hash16::<BSWAP>(msg, off, &mut seed1, &mut seed5);
        hash16::<BSWAP>(msg, off + 16, &mut seed1, &mut seed5);
        off += 32;
        len -= 32;
    }
    if len > 15 {
        hash16::<BSWAP>(msg, off, &mut seed1, &mut seed5);
        off += 16;
        len -= 16;
    }

    let (r1h, r2h) = if len > 7 {
        (
            seed1 ^ get_u64::<BSWAP>(msg, off),
            seed5 ^ lpu64ec_l4::<BSWAP>(msg, off + 8, len - 8),
        )
    } else {
        (seed1 ^ lpu64ec_l4::<BSWAP>(msg, off, len), seed5)
    };

    hashfin(r1h, r2h, &mut seed1, &mut seed5)
}

fn komihash_impl<const BSWAP: bool>(msg: &[u8], mut len: usize, use_seed: u64) -> u64 {
    // The seeds are initialized to the first mantissa bits of PI.
    let mut seed1 = 0x243F_6A88_85A3_08D3u64 ^ (use_seed & 0x5555_5555_5555_5555);
    let mut seed5 = 0x4528_21E6_38D0_1377u64 ^ (use_seed & 0xAAAA_AAAA_AAAA_AAAA);
    let mut off = 0usize;

    hashround(&mut seed1, &mut seed5);

    if len < 16 {
        let mut r1h = seed1;
        let mut r2h = seed5;
        if len > 7 {
            r2h ^= lpu64ec_l3::<BSWAP>(msg, 8, len - 8);
            r1h ^= get_u64::<BSWAP>(msg, 0);
        } else if len != 0 {
            r1h ^= lpu64ec_nz::<BSWAP>(msg, 0, len);
        }
        return hashfin(r1h, r2h, &mut seed1, &mut seed5);
    }

    if len < 32 {
        hash16::<BSWAP>(msg, 0, &mut seed1, &mut seed5);
        let (r1h, r2h) = if len > 23 {
            (
                seed1 ^ get_u64::<BSWAP>(msg, 16),
                seed5 ^ lpu64ec_l4::<BSWAP>(msg, 24, len - 24),
            )
        } else {
            (seed1 ^ lpu64ec_l4::<BSWAP>(msg, 16, len - 16), seed5)
        };
        return hashfin(r1h, r2h, &mut seed1, &mut seed5);
    }

    if len > 63 {
        let mut seed2 = 0x1319_8A2E_0370_7344u64 ^ seed1;
        let mut seed3 = 0xA409_3822_299F_31D0u64 ^ seed1;
        let mut seed4 = 0x082E_FA98_EC4E_6C89u64 ^ seed1;
        let mut seed6 = 0xBE54_66CF_34E9_0C6Cu64 ^ seed5;
        let mut seed7 = 0xC0AC_29B7_C97C_50DDu64 ^ seed5;
        let mut seed8 = 0x3F84_D5B5_B547_0917u64 ^ seed5;

        loop {
            let (l1, r1h) = mult64_128(
                seed1 ^ get_u64::<BSWAP>(msg, off),
                seed5 ^ get_u64::<BSWAP>(msg, off + 32),
            );
            let (l2, r2h) = mult64_128(
                seed2 ^ get_u64::<BSWAP>(msg, off + 8),
                seed6 ^ get_u64::<BSWAP>(msg, off + 40),
            );
            let (l3, r3h) = mult64_128(
                seed3 ^ get_u64::<BSWAP>(msg, off + 16),
                seed7 ^ get_u64::<BSWAP>(msg, off + 48),
            );
            let (l4, r4h) = mult64_128(
                seed4 ^ get_u64::<BSWAP>(msg, off + 24),
                seed8 ^ get_u64::<BSWAP>(msg, off + 56),
            );
            seed1 = l1;
            seed2 = l2;
            seed3 = l3;
            seed4 = l4;

            off += 64;
            len -= 64;

            // The lane shift below fuses the four PRNG lanes so they
            // cannot synchronize.
            seed5 = seed5.wrapping_add(r1h);
            seed6 = seed6.wrapping_add(r2h);
            seed7 = seed7.wrapping_add(r3h);
            seed8 = seed8.wrapping_add(r4h);
            seed2 ^= seed5;
            seed3 ^= seed6;
            seed4 ^= seed7;
            seed1 ^= seed8;

            if len <= 63 {
                break;
            }
        }

        seed5 ^= seed6 ^ seed7 ^ seed8;
        seed1 ^= seed2 ^ seed3 ^ seed4;
    }

    komihash_epi::<BSWAP>(msg, off, len, seed1, seed5)
}

fn komihash<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let h = komihash_impl::<BSWAP>(input, len, seed);
    put_u64::<BSWAP>(h, out, 0);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "komihash",
        src_url: Some("https://github.com/avaneev/komihash/"),
        src_status: SrcStatus::Active,
    });

    reg.add(
        HashDescriptor::new("komihash", "komihash", 64, komihash::<false>, komihash::<true>)
            .desc("komihash v5.7")
            .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
            .impl_flags(
                ImplFlags::CANONICAL_LE
                    | ImplFlags::MULTIPLY_64_128
                    | ImplFlags::SHIFT_VARIABLE
                    | ImplFlags::LICENSE_MIT,
            )
            .verification(0x8157FF6D, 0x3A74F6E6),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_loader_encodes_length() {
        // The final-byte padding bit distinguishes otherwise-equal tails.
        let buf = [0u8; 16];
        assert_ne!(
            lpu64ec_l4::<false>(&buf, 8, 3),
            lpu64ec_l4::<false>(&buf, 8, 4)
        );
        assert_ne!(
            lpu64ec_nz::<false>(&buf, 0, 1),
            lpu64ec_nz::<false>(&buf, 0, 2)
        );
    }

    #[test]
    fn length_paths_are_deterministic() {
        let msg = vec![0xA5u8; 160];
        for &n in &[0usize, 1, 7, 8, 15, 16, 23, 24, 31, 32, 63, 64, 65, 127, 128, 129] {
            assert_eq!(
                komihash_impl::<false>(&msg, n, 0x0123_4567_89AB_CDEF),
                komihash_impl::<false>(&msg, n, 0x0123_4567_89AB_CDEF),
            );
        }
    }

    #[test]
    fn seed_is_an_entropy_source() {
        let msg = b"komihash test message bytes";
        assert_ne!(
            komihash_impl::<false>(msg, msg.len(), 0),
            komihash_impl::<false>(msg, msg.len(), 1)
        );
    }
}
