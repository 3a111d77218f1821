//! w1hash, a wyhash variant optimized for short inputs.
//!
//! Upstream offers two tail-read strategies: unaligned near-page-end
//! reads (undefined behaviour, fast) and a portable byte-composed one.
//! The portable extraction is registered here; both produce identical
//! hashes on little-endian data.

use crate::bits::put_u64;
use crate::descriptor::{FamilyInfo, HashDescriptor, ImplFlags, SrcStatus};
use crate::mathmult::mult64_128;
use crate::registry::RegistryBuilder;

const S0: u64 = 0x2d358dccaa6c78a5;
const S1: u64 = 0x8bb84b93962eacc9;
const S2: u64 = 0x4b33a62ed433d4a3;
const S3: u64 = 0x4d5a2da51de1aa47;

// Little-endian read of 0..=8 bytes.
#[inline]
fn w1r(p: &[u8], off: usize, n: usize) -> u64 {
    let mut v = 0u64;
    for i in (0..n).rev() {
        v = (v << 8) | u64::from(p[off + i]);
    }
    v
}

#[inline]
fn w1r8(p: &[u8], off: usize) -> u64 {
    w1r(p, off, 8)
}

#[inline]
fn w1mix(a: u64, b: u64) -> u64 {
    let (lo, hi) = mult64_128(a, b);
    lo ^ hi
}

fn w1hash_with_seed(p: &[u8], len: usize, mut seed: u64) -> u64 {
    seed ^= w1mix(seed ^ S0, len as u64 ^ S1);

    let mut off = 0usize;
    let mut l = len;

    if l > 64 {
        let mut x = seed;
        let mut y = seed;
        let mut z = seed;
        loop {
            seed = w1mix(w1r8(p, off) ^ S0, w1r8(p, off + 8) ^ seed);
            x = w1mix(w1r8(p, off + 16) ^ S1, w1r8(p, off + 24) ^ x);
            y = w1mix(w1r8(p, off + 32) ^ S2, w1r8(p, off + 40) ^ y);
            z = w1mix(w1r8(p, off + 48) ^ S3, w1r8(p, off + 56) ^ z);
            off += 64;
            l -= 64;
            if l <= 64 {
                break;
            }
        }
        seed ^= x ^ y ^ z;
    }
    if l > 32 {
        let mut x = seed;
        seed = w1mix(w1r8(p, off) ^ S0, w1r8(p, off + 8) ^ seed);
        x = w1mix(w1r8(p, off + 16) ^ S1, w1r8(p, off + 24) ^ x);
        seed ^= x;
        off += 32;
        l -= 32;
    }
    if l > 16 {
        seed = w1mix(w1r8(p, off) ^ S0, w1r8(p, off + 8) ^ seed);
        off += 16;
        l -= 16;
    }

    // Branchless-style tail: l is now 0..=16.
    let (ta, tb) = if l <= 8 {
        (w1r(p, off, l), 0)
    } else {
        (w1r8(p, off), w1r(p, off + 8, l - 8))
    };

    let (a, b) = mult64_128(ta ^ S1, tb ^ seed);
    w1mix(a ^ (S0 ^ len as u64), b ^ S1)
}

fn w1hash<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let hash = w1hash_with_seed(input, len, seed);
    put_u64::<BSWAP>(hash, out, 0);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "w1hash",
        src_url: Some("https://github.com/peterrk/w1hash"),
        src_status: SrcStatus::Stableish,
    });

    reg.add(
        HashDescriptor::new("w1hash", "w1hash", 64, w1hash::<false>, w1hash::<true>)
            .desc("w1hash")
            .impl_name("portable")
            .impl_flags(
                ImplFlags::READ_PAST_EOB | ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_BSD,
            )
            .verification(0x648948F1, 0xD69F31A0),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_reads_compose_little_endian() {
        let buf = [0x11u8, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
        assert_eq!(w1r(&buf, 0, 0), 0);
        assert_eq!(w1r(&buf, 0, 1), 0x11);
        assert_eq!(w1r(&buf, 0, 3), 0x332211);
        assert_eq!(w1r(&buf, 0, 8), 0x8877665544332211);
        assert_eq!(w1r(&buf, 2, 2), 0x4433);
    }

    #[test]
    fn every_tail_length_hashes() {
        let buf: Vec<u8> = (0..160u32).map(|i| i as u8).collect();
        let mut seen = std::collections::HashSet::new();
        for n in 0..=96 {
            assert!(seen.insert(w1hash_with_seed(&buf, n, 0)), "collision at {n}");
        }
    }

    #[test]
    fn seed_perturbs_short_inputs() {
        assert_ne!(w1hash_with_seed(b"ab", 2, 0), w1hash_with_seed(b"ab", 2, 1));
    }
}
