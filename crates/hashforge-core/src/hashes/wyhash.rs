//! wyhash v4: 32-bit version plus 64-bit strict and non-strict versions.
//!
//! The strict flavor XORs each 128-bit product back into the operands
//! instead of overwriting them. The published files always read input
//! little-endian; the registered variants differ only in output byte
//! order. The 64-bit hash's init callback replays the published
//! self-test vectors.

use crate::bits::{get_u32, get_u64, is_le, put_u32, put_u64};
use crate::descriptor::{
    FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus, exclude_bad_seeds,
};
use crate::mathmult::mult64_128;
use crate::registry::RegistryBuilder;

// The default secret parameters.
const WYP: [u64; 4] = [
    0x2d358dccaa6c78a5,
    0x8bb84b93962eacc9,
    0x4b33a62ed433d4a3,
    0x4d5a2da51de1aa47,
];

#[inline]
fn wyr8<const BSWAP: bool>(p: &[u8], off: usize) -> u64 {
    get_u64::<BSWAP>(p, off)
}

#[inline]
fn wyr4<const BSWAP: bool>(p: &[u8], off: usize) -> u64 {
    u64::from(get_u32::<BSWAP>(p, off))
}

#[inline]
fn wyr3(p: &[u8], off: usize, k: usize) -> u64 {
    (u64::from(p[off]) << 16) | (u64::from(p[off + (k >> 1)]) << 8) | u64::from(p[off + k - 1])
}

#[inline]
fn wymum<const STRICT: bool>(a: &mut u64, b: &mut u64) {
    let (rlo, rhi) = mult64_128(*a, *b);
    if STRICT {
        *a ^= rlo;
        *b ^= rhi;
    } else {
        *a = rlo;
        *b = rhi;
    }
}

#[inline]
fn wymix<const STRICT: bool>(mut a: u64, mut b: u64) -> u64 {
    wymum::<STRICT>(&mut a, &mut b);
    a ^ b
}

fn wyhash64_impl<const BSWAP: bool, const STRICT: bool>(
    p: &[u8],
    len: usize,
    mut seed: u64,
) -> u64 {
    let secrets = &WYP;
    let a;
    let b;

    seed ^= wymix::<STRICT>(seed ^ secrets[0], secrets[1]);

    if len <= 16 {
        if len >= 4 {
            a = (wyr4::<BSWAP>(p, 0) << 32) | wyr4::<BSWAP>(p, (len >> 3) << 2);
            b = (wyr4::<BSWAP>(p, len - 4) << 32)
                | wyr4::<BSWAP>(p, len - 4 - ((len >> 3) << 2));
        } else if len > 0 {
            a = wyr3(p, 0, len);
            b = 0;
        } else {
            a = 0;
            b = 0;
        }
    } else {
        let mut i = len;
        let mut off = 0usize;
        if i >= 48 {
            let mut see1 = seed;
            let mut see2 = seed;
            loop {
                seed = wymix::<STRICT>(
                    wyr8::<BSWAP>(p, off) ^ secrets[1],
                    wyr8::<BSWAP>(p, off + 8) ^ seed,
                );
                see1 = wymix::<STRICT>(
                    wyr8::<BSWAP>(p, off + 16) ^ secrets[2],
                    wyr8::<BSWAP>(p, off + 24) ^ see1,
                );
                see2 = wymix::<STRICT>(
                    wyr8::<BSWAP>(p, off + 32) ^ secrets[3],
                    wyr8::<BSWAP>(p, off + 40) ^ see2,
                );
                off += 48;
                i -= 48;
                if i < 48 {
                    break;
                }
            }
            seed ^= see1 ^ see2;
        }
        while i > 16 {
            seed = wymix::<STRICT>(
                wyr8::<BSWAP>(p, off) ^ secrets[1],
                wyr8::<BSWAP>(p, off + 8) ^ seed,
            );
            i -= 16;
            off += 16;
        }
        a = wyr8::<BSWAP>(p, off + i - 16);
        b = wyr8::<BSWAP>(p, off + i - 8);
    }

    let mut a = a ^ secrets[1];
    let mut b = b ^ seed;
    wymum::<STRICT>(&mut a, &mut b);
    wymix::<STRICT>(a ^ secrets[0] ^ len as u64, b ^ secrets[1])
}

#[inline]
fn wymix32(a: &mut u32, b: &mut u32) {
    let c = u64::from(*a ^ 0x53c5ca59).wrapping_mul(u64::from(*b ^ 0x74743c1b));
    *a = c as u32;
    *b = (c >> 32) as u32;
}

fn wyhash32_impl<const BSWAP: bool>(p: &[u8], len: usize, mut seed: u32) -> u32 {
    let mut i = len as u64;
    let mut see1 = len as u32;
    let mut off = 0usize;

    seed ^= (len as u64 >> 32) as u32;
    wymix32(&mut seed, &mut see1);

    while i > 8 {
        seed ^= get_u32::<BSWAP>(p, off);
        see1 ^= get_u32::<BSWAP>(p, off + 4);
        wymix32(&mut seed, &mut see1);
        i -= 8;
        off += 8;
    }
    if i >= 4 {
        seed ^= get_u32::<BSWAP>(p, off);
        see1 ^= get_u32::<BSWAP>(p, off + i as usize - 4);
    } else if i > 0 {
        seed ^= wyr3(p, off, i as usize) as u32;
    }
    wymix32(&mut seed, &mut see1);
    wymix32(&mut seed, &mut see1);
    seed ^ see1
}

// The published sources read input little-endian on every host; only
// the output byte order follows the registered variant.
fn wyhash32<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let h = if is_le() {
        wyhash32_impl::<false>(input, len, seed as u32)
    } else {
        wyhash32_impl::<true>(input, len, seed as u32)
    };
    put_u32::<BSWAP>(h, out, 0);
}

fn wyhash64<const BSWAP: bool, const STRICT: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let h = if is_le() {
        wyhash64_impl::<false, STRICT>(input, len, seed)
    } else {
        wyhash64_impl::<true, STRICT>(input, len, seed)
    };
    put_u64::<BSWAP>(h, out, 0);
}

const SELFTEST: [(u64, &[u8]); 7] = [
    (0x93228a4de0eec5a2, b""),
    (0xc5bac3db178713c4, b"a"),
    (0xa97f2f7b1d9b3314, b"abc"),
    (0x786d1f1df3801df4, b"message digest"),
    (0xdca5a8138ad37c87, b"abcdefghijklmnopqrstuvwxyz"),
    (
        0xb9e734f117cfaf70,
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
    ),
    (
        0x6cc5eab49a92d617,
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
    ),
];

fn wyhash64_selftest() -> bool {
    for (i, (expected, key)) in SELFTEST.iter().enumerate() {
        let h = if is_le() {
            wyhash64_impl::<false, false>(key, key.len(), i as u64)
        } else {
            wyhash64_impl::<true, false>(key, key.len(), i as u64)
        };
        if h != *expected {
            return false;
        }
    }
    true
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "wyhash",
        src_url: Some("https://github.com/wangyi-fudan/wyhash"),
        src_status: SrcStatus::Active,
    });

    reg.add(
        HashDescriptor::new("wyhash_32", "wyhash", 32, wyhash32::<false>, wyhash32::<true>)
            .desc("wyhash v4, 32-bit native version")
            .hash_flags(HashFlags::SMALL_SEED)
            .impl_flags(ImplFlags::MULTIPLY | ImplFlags::LICENSE_PUBLIC_DOMAIN)
            .verification(0x09DE8066, 0x46D1F8A2)
            .seedfix(exclude_bad_seeds)
            .badseeds(&[0x429dacdd, 0xd637dbf3]),
    );

    reg.add(
        HashDescriptor::new(
            "wyhash",
            "wyhash",
            64,
            wyhash64::<false, false>,
            wyhash64::<true, false>,
        )
        .desc("wyhash v4.2, 64-bit non-strict version")
        .impl_flags(
            ImplFlags::MULTIPLY_64_128 | ImplFlags::ROTATE | ImplFlags::LICENSE_PUBLIC_DOMAIN,
        )
        .verification(0x9DAE7DD3, 0x2E958F8A)
        .init(wyhash64_selftest),
    );

    reg.add(
        HashDescriptor::new(
            "wyhash_strict",
            "wyhash",
            64,
            wyhash64::<false, true>,
            wyhash64::<true, true>,
        )
        .desc("wyhash v4.2, 64-bit strict version")
        .impl_flags(
            ImplFlags::MULTIPLY_64_128 | ImplFlags::ROTATE | ImplFlags::LICENSE_PUBLIC_DOMAIN,
        )
        .verification(0x82FE7E2E, 0xBA2BDA4F),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_selftest_vectors_pass() {
        assert!(wyhash64_selftest());
    }

    #[test]
    fn abc_with_seed_two_matches_published_value() {
        let h = if is_le() {
            wyhash64_impl::<false, false>(b"abc", 3, 2)
        } else {
            wyhash64_impl::<true, false>(b"abc", 3, 2)
        };
        assert_eq!(h, 0xa97f2f7b1d9b3314);
    }

    #[test]
    fn strict_and_nonstrict_disagree() {
        let msg = b"wyhash strictness";
        assert_ne!(
            wyhash64_impl::<false, false>(msg, msg.len(), 0),
            wyhash64_impl::<false, true>(msg, msg.len(), 0)
        );
    }

    #[test]
    fn wyhash32_handles_length_buckets() {
        let buf = vec![0x42u8; 64];
        for n in [0usize, 1, 2, 3, 4, 5, 8, 9, 12, 16, 17, 33, 64] {
            assert_eq!(
                wyhash32_impl::<false>(&buf, n, 7),
                wyhash32_impl::<false>(&buf, n, 7)
            );
        }
    }
}
