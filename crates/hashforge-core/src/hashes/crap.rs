//! Hashes from the "noncryptohashzoo": Crap8, CrapWow, CrapWow64.
//!
//! Small legacy hashes built on multiply-fold steps. The tail reads a
//! full word and masks or shifts it down, so all three may read past the
//! end of the input buffer.

use crate::bits::{get_u32, get_u64, is_le, put_u32, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus};
use crate::mathmult::mult64_128;
use crate::registry::RegistryBuilder;

#[inline]
fn fold32(a: u32, b: u32, lo: &mut u32, hi: &mut u32) {
    let p = u64::from(a) * u64::from(b);
    *lo ^= p as u32;
    *hi ^= (p >> 32) as u32;
}

#[inline]
fn fold64(a: u64, b: u64, lo: &mut u64, hi: &mut u64) {
    let (pl, ph) = mult64_128(a, b);
    *lo ^= pl;
    *hi ^= ph;
}

fn crap8_impl<const BSWAP: bool>(key: &[u8], mut len: usize, seed: u32) -> u32 {
    const M: u32 = 0x83d2e73b;
    const N: u32 = 0x97e1cc59;

    let mut h = (len as u32).wrapping_add(seed);
    let mut k = N.wrapping_add(len as u32);
    let mut off = 0usize;

    #[inline]
    fn mix(input: u32, h: &mut u32, k: &mut u32) {
        *h = h.wrapping_mul(M);
        fold32(input, M, k, h);
    }

    while len >= 8 {
        mix(get_u32::<BSWAP>(key, off), &mut h, &mut k);
        mix(get_u32::<BSWAP>(key, off + 4), &mut h, &mut k);
        off += 8;
        len -= 8;
    }
    if len >= 4 {
        mix(get_u32::<BSWAP>(key, off), &mut h, &mut k);
        off += 4;
        len -= 4;
    }
    if len > 0 {
        let word = get_u32::<BSWAP>(key, off);
        let tail = if is_le() ^ BSWAP {
            word & ((1u32 << (len * 8)) - 1)
        } else {
            word >> (32 - len * 8)
        };
        mix(tail, &mut h, &mut k);
    }

    // The closing fold XORs both product halves into k in sequence.
    let p = u64::from(h ^ k) * u64::from(N);
    k ^= p as u32;
    k ^= (p >> 32) as u32;
    k
}

fn crapwow_impl<const BSWAP: bool>(key: &[u8], mut len: usize, seed: u32) -> u32 {
    const M: u32 = 0x57559429;
    const N: u32 = 0x5052acdb;

    let mut h = len as u32;
    let mut k = (len as u32).wrapping_add(seed).wrapping_add(N);
    let mut off = 0usize;

    while len >= 8 {
        fold32(get_u32::<BSWAP>(key, off), N, &mut h, &mut k);
        fold32(get_u32::<BSWAP>(key, off + 4), M, &mut k, &mut h);
        off += 8;
        len -= 8;
    }
    if len >= 4 {
        fold32(get_u32::<BSWAP>(key, off), N, &mut h, &mut k);
        off += 4;
        len -= 4;
    }
    if len > 0 {
        let word = get_u32::<BSWAP>(key, off);
        let tail = if is_le() ^ BSWAP {
            word & ((1u32 << (len * 8)) - 1)
        } else {
            word >> (32 - len * 8)
        };
        fold32(tail, M, &mut k, &mut h);
    }

    fold32(h ^ k.wrapping_add(N), N, &mut h, &mut k);
    k ^ h
}

fn crapwow64_impl<const BSWAP: bool>(key: &[u8], mut len: usize, seed: u64) -> u64 {
    const M: u64 = 0x95b47aa3355ba1a1;
    const N: u64 = 0x8a970be7488fda55;

    let mut h = len as u64;
    let mut k = (len as u64).wrapping_add(seed).wrapping_add(N);
    let mut off = 0usize;

    while len >= 16 {
        fold64(get_u64::<BSWAP>(key, off), N, &mut h, &mut k);
        fold64(get_u64::<BSWAP>(key, off + 8), M, &mut k, &mut h);
        off += 16;
        len -= 16;
    }
    if len >= 8 {
        fold64(get_u64::<BSWAP>(key, off), N, &mut h, &mut k);
        off += 8;
        len -= 8;
    }
    if len > 0 {
        let word = get_u64::<BSWAP>(key, off);
        let tail = if is_le() ^ BSWAP {
            word & ((1u64 << (len * 8)) - 1)
        } else {
            word >> (64 - len * 8)
        };
        fold64(tail, M, &mut k, &mut h);
    }

    fold64(h ^ k.wrapping_add(N), N, &mut h, &mut k);
    k ^ h
}

fn crap8<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let h = crap8_impl::<BSWAP>(input, len, seed as u32);
    put_u32::<BSWAP>(h, out, 0);
}

fn crapwow<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let h = crapwow_impl::<BSWAP>(input, len, seed as u32);
    put_u32::<BSWAP>(h, out, 0);
}

fn crapwow64<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let h = crapwow64_impl::<BSWAP>(input, len, seed);
    put_u64::<BSWAP>(h, out, 0);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "crap",
        src_url: Some(
            "https://web.archive.org/web/20150218011033/http://floodyberry.com/noncryptohashzoo/",
        ),
        src_status: SrcStatus::Frozen,
    });

    reg.add(
        HashDescriptor::new("Crap8", "crap", 32, crap8::<false>, crap8::<true>)
            .desc("Noncryptohashzoo's Crap8 hash")
            .hash_flags(HashFlags::SMALL_SEED)
            .impl_flags(
                ImplFlags::READ_PAST_EOB | ImplFlags::MULTIPLY | ImplFlags::LICENSE_MIT,
            )
            .verification(0x743E97A1, 0xDFE06AD9),
    );

    reg.add(
        HashDescriptor::new("CrapWow", "crap", 32, crapwow::<false>, crapwow::<true>)
            .desc("Noncryptohashzoo's CrapWow hash")
            .hash_flags(HashFlags::SMALL_SEED)
            .impl_flags(
                ImplFlags::SANITY_FAILS
                    | ImplFlags::READ_PAST_EOB
                    | ImplFlags::MULTIPLY
                    | ImplFlags::LICENSE_MIT,
            )
            .verification(0x49ECB015, 0x4EF994DF),
    );

    reg.add(
        HashDescriptor::new("CrapWow_64", "crap", 64, crapwow64::<false>, crapwow64::<true>)
            .desc("Noncryptohashzoo's CrapWow64 hash")
            .impl_flags(
                ImplFlags::SANITY_FAILS
                    | ImplFlags::READ_PAST_EOB
                    | ImplFlags::MULTIPLY_64_128
                    | ImplFlags::LICENSE_MIT,
            )
            .verification(0x669D3A9B, 0xCBB7690C)
            .badseed_desc(
                "Any keys of len==32*N consisting of repeated 16-byte blocks collide with any seed",
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crapwow64_repeated_block_collision() {
        // The documented pathology: a 32-byte key of two identical
        // 16-byte blocks collides with other such keys under any seed.
        let mut k1 = [0u8; 48];
        let mut k2 = [0u8; 48];
        k1[..16].copy_from_slice(b"0123456789abcdef");
        k1[16..32].copy_from_slice(b"0123456789abcdef");
        k2[..16].copy_from_slice(b"FEDCBA9876543210");
        k2[16..32].copy_from_slice(b"FEDCBA9876543210");
        for seed in [0u64, 1, 42, u64::MAX] {
            assert_eq!(
                crapwow64_impl::<false>(&k1, 32, seed),
                crapwow64_impl::<false>(&k2, 32, seed),
            );
        }
    }

    #[test]
    fn tail_reads_are_masked() {
        // The word past `len` is read but must not affect the result.
        let mut a = [0u8; 16];
        let mut b = [0xFFu8; 16];
        a[..3].copy_from_slice(b"abc");
        b[..3].copy_from_slice(b"abc");
        assert_eq!(crap8_impl::<false>(&a, 3, 1), crap8_impl::<false>(&b, 3, 1));
        assert_eq!(
            crapwow_impl::<false>(&a, 3, 1),
            crapwow_impl::<false>(&b, 3, 1)
        );
        assert_eq!(
            crapwow64_impl::<false>(&a, 3, 1),
            crapwow64_impl::<false>(&b, 3, 1)
        );
    }
}
