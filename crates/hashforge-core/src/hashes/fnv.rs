//! FNV (Fowler-Noll-Vo) and related multiply-xor hashes.
//!
//! Includes the classic bytewise FNV-1a at 32/64/128 bits, wordwise
//! variants, and the sanmayce family (YoshimitsuTRIAD, Totenschiff,
//! Pippip-Yurii) plus Mulvey's avalanche finish and Knuth's Fibonacci
//! hash. Totenschiff and Pippip-Yurii read a full trailing word, so the
//! driver must provide readable padding past the input.

use crate::bits::{cond_bswap32, get_u16, get_u32, get_u64, is_le, put_u32, put_u64};
use crate::descriptor::{
    FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus, exclude_bad_seeds,
};
use crate::mathmult::mult64_128;
use crate::registry::RegistryBuilder;

fn exclude_low32_zero(_hinfo: &HashDescriptor, seed: u64) -> u64 {
    if seed & 0xFFFF_FFFF == 0 {
        seed ^ 0xA5A5_A5A5
    } else {
        seed
    }
}

const FIB_C: u64 = 11400714819323198485;

fn fibonacci_32<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let mut h = seed as u32;
    let words = len / 4;
    for i in 0..words {
        let w = get_u32::<BSWAP>(input, i * 4);
        h = h.wrapping_add(u64::from(w).wrapping_mul(FIB_C) as u32);
    }
    for &b in input.iter().take(len).skip(words * 4) {
        h = h.wrapping_add(u64::from(b).wrapping_mul(FIB_C) as u32);
    }
    put_u32::<BSWAP>(h, out, 0);
}

fn fibonacci_64<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let mut h = seed;
    let words = len / 8;
    for i in 0..words {
        let w = get_u64::<BSWAP>(input, i * 8);
        h = h.wrapping_add(w.wrapping_mul(FIB_C));
    }
    for &b in input.iter().take(len).skip(words * 8) {
        h = h.wrapping_add(u64::from(b).wrapping_mul(FIB_C));
    }
    put_u64::<BSWAP>(h, out, 0);
}

fn fnv1a_32<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let mut h = (seed as u32) ^ 2166136261;
    for &b in input.iter().take(len) {
        h ^= u32::from(b);
        h = h.wrapping_mul(16777619);
    }
    put_u32::<BSWAP>(h, out, 0);
}

fn fnv1a_64<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let mut h = seed ^ 0xcbf29ce484222325;
    for &b in input.iter().take(len) {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x100000001b3);
    }
    put_u64::<BSWAP>(h, out, 0);
}

// The Golang 128-bit FNV-1a. One function serves as both endianness
// variants: the output bytes are canonical regardless of host order.
fn fnv1a_128(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    const C1LO: u64 = 0x62b821756295c58d;
    const C1HI: u64 = 0x6c62272e07bb0142;
    const C2: u64 = 0x13b;

    let mut hash_hi = seed ^ C1HI;
    let mut hash_lo = seed ^ C1LO;
    for &b in input.iter().take(len) {
        hash_lo ^= u64::from(b);
        let (s1, s0) = mult64_128(C2, hash_lo);
        let s0 = s0
            .wrapping_add(hash_lo << 24)
            .wrapping_add(C2.wrapping_mul(hash_hi));
        hash_hi = s0;
        hash_lo = s1;
    }

    if is_le() {
        put_u64::<true>(hash_hi, out, 0);
        put_u64::<true>(hash_lo, out, 8);
    } else {
        put_u64::<false>(hash_hi, out, 0);
        put_u64::<false>(hash_lo, out, 8);
    }
}

fn fnv2_32<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let mut h = 2166136261u32 ^ (seed as u32);
    let words = len / 4;
    for i in 0..words {
        h ^= get_u32::<BSWAP>(input, i * 4);
        h = h.wrapping_mul(16777619);
    }
    for &b in input.iter().take(len).skip(words * 4) {
        h ^= u32::from(b);
        h = h.wrapping_mul(16777619);
    }
    put_u32::<BSWAP>(h, out, 0);
}

fn fnv2_64<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let mut h = 0xcbf29ce484222325u64 ^ seed;
    let words = len / 8;
    for i in 0..words {
        h ^= get_u64::<BSWAP>(input, i * 8);
        h = h.wrapping_mul(0x100000001b3);
    }
    for &b in input.iter().take(len).skip(words * 8) {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x100000001b3);
    }
    put_u64::<BSWAP>(h, out, 0);
}

fn fnv_yoshimitsu_triad<const BSWAP: bool>(input: &[u8], olen: usize, seed: u64, out: &mut [u8]) {
    const PRIME: u32 = 709607;

    let mut hash_a = 2166136261u32 ^ (seed as u32);
    let mut hash_b = 2166136261u32.wrapping_add(olen as u32);
    let mut hash_c = 2166136261u32;
    let mut len = olen;
    let mut p = 0usize;

    while len >= 24 {
        hash_a = (hash_a
            ^ (get_u32::<BSWAP>(input, p).rotate_left(5) ^ get_u32::<BSWAP>(input, p + 4)))
            .wrapping_mul(PRIME);
        hash_b = (hash_b
            ^ (get_u32::<BSWAP>(input, p + 8).rotate_left(5) ^ get_u32::<BSWAP>(input, p + 12)))
            .wrapping_mul(PRIME);
        hash_c = (hash_c
            ^ (get_u32::<BSWAP>(input, p + 16).rotate_left(5) ^ get_u32::<BSWAP>(input, p + 20)))
            .wrapping_mul(PRIME);
        len -= 24;
        p += 24;
    }
    if p != 0 {
        hash_a = (hash_a ^ hash_c.rotate_left(5)).wrapping_mul(PRIME);
    }
    if len & 16 != 0 {
        hash_a = (hash_a
            ^ (get_u32::<BSWAP>(input, p).rotate_left(5) ^ get_u32::<BSWAP>(input, p + 4)))
            .wrapping_mul(PRIME);
        hash_b = (hash_b
            ^ (get_u32::<BSWAP>(input, p + 8).rotate_left(5) ^ get_u32::<BSWAP>(input, p + 12)))
            .wrapping_mul(PRIME);
        p += 16;
    }
    if len & 8 != 0 {
        hash_a = (hash_a ^ get_u32::<BSWAP>(input, p)).wrapping_mul(PRIME);
        hash_b = (hash_b ^ get_u32::<BSWAP>(input, p + 4)).wrapping_mul(PRIME);
        p += 8;
    }
    if len & 4 != 0 {
        hash_a = (hash_a ^ u32::from(get_u16::<BSWAP>(input, p))).wrapping_mul(PRIME);
        hash_b = (hash_b ^ u32::from(get_u16::<BSWAP>(input, p + 2))).wrapping_mul(PRIME);
        p += 4;
    }
    if len & 2 != 0 {
        hash_a = (hash_a ^ u32::from(get_u16::<BSWAP>(input, p))).wrapping_mul(PRIME);
        p += 2;
    }
    if len & 1 != 0 {
        hash_a = (hash_a ^ u32::from(input[p])).wrapping_mul(PRIME);
    }

    hash_a = (hash_a ^ hash_b.rotate_left(5)).wrapping_mul(PRIME);
    hash_a ^= hash_a >> 16;

    put_u32::<false>(cond_bswap32(hash_a, BSWAP), out, 0);
}

// Zero out the n highest- (or lowest-) significance bits of a trailing
// word so the tail depends only on the bytes inside the input.
#[inline]
fn padr_kaze(x: u64, n: u32, keep_lsb: bool) -> u64 {
    if n >= 64 {
        return 0;
    }
    if keep_lsb { (x << n) >> n } else { x >> n }
}

fn fnv_totenschiff<const BSWAP: bool>(input: &[u8], olen: usize, seed: u64, out: &mut [u8]) {
    const PRIME: u64 = 591798841;

    let mut hash64 = seed ^ 14695981039346656037;
    let mut len = olen;
    let mut p = 0usize;

    while len > 8 {
        let padded = get_u64::<BSWAP>(input, p);
        hash64 = (hash64 ^ padded).wrapping_mul(PRIME);
        len -= 8;
        p += 8;
    }

    // len is 0..=8 here; a full word is read and masked down.
    let padded = padr_kaze(
        get_u64::<BSWAP>(input, p),
        ((8 - len) << 3) as u32,
        is_le() ^ BSWAP,
    );
    hash64 = (hash64 ^ padded).wrapping_mul(PRIME);

    let mut hash32 = (hash64 ^ (hash64 >> 32)) as u32;
    hash32 ^= hash32 >> 16;

    put_u32::<false>(cond_bswap32(hash32, BSWAP), out, 0);
}

fn fnv_pippip_yurii<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    const PRIME: u64 = 591798841;

    let mut hash64 = seed ^ 14695981039346656037;

    if len > 8 {
        let cycles = ((len - 1) >> 4) + 1;
        let ndhead = len - (cycles << 3);
        let mut p = 0usize;
        for _ in 0..cycles {
            hash64 = (hash64 ^ get_u64::<BSWAP>(input, p)).wrapping_mul(PRIME);
            hash64 = (hash64 ^ get_u64::<BSWAP>(input, p + ndhead)).wrapping_mul(PRIME);
            p += 8;
        }
    } else {
        let padded = padr_kaze(
            get_u64::<BSWAP>(input, 0),
            ((8 - len) << 3) as u32,
            is_le() ^ BSWAP,
        );
        hash64 = (hash64 ^ padded).wrapping_mul(PRIME);
    }

    let mut hash32 = (hash64 ^ (hash64 >> 32)) as u32;
    hash32 ^= hash32 >> 16;

    put_u32::<false>(cond_bswap32(hash32, BSWAP), out, 0);
}

fn fnv_mulvey<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let mut h = (seed as u32) ^ 2166136261;
    for &b in input.iter().take(len) {
        h ^= u32::from(b);
        h = h.wrapping_mul(16777619);
    }

    h = h.wrapping_add(h << 13);
    h ^= h >> 7;
    h = h.wrapping_add(h << 3);
    h ^= h >> 17;
    h = h.wrapping_add(h << 5);

    put_u32::<false>(cond_bswap32(h, BSWAP), out, 0);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "fnv",
        src_url: Some("http://www.sanmayce.com/Fastest_Hash/index.html"),
        src_status: SrcStatus::Stableish,
    });

    reg.add(
        HashDescriptor::new("fibonacci_32", "fnv", 32, fibonacci_32::<false>, fibonacci_32::<true>)
            .desc("32-bit wordwise Fibonacci hash (Knuth)")
            .hash_flags(HashFlags::SMALL_SEED)
            .impl_flags(
                ImplFlags::SANITY_FAILS | ImplFlags::MULTIPLY | ImplFlags::LICENSE_MIT,
            )
            .verification(0x09952480, 0x006F7705)
            .seedfix(exclude_low32_zero)
            .badseeds(&[0, 0xffffffff00000000]),
    );

    reg.add(
        HashDescriptor::new("fibonacci_64", "fnv", 64, fibonacci_64::<false>, fibonacci_64::<true>)
            .desc("64-bit wordwise Fibonacci hash (Knuth)")
            .impl_flags(
                ImplFlags::SANITY_FAILS | ImplFlags::MULTIPLY_64_64 | ImplFlags::LICENSE_MIT,
            )
            .verification(0xFE3BD380, 0x3E67D58C)
            .badseed_desc("All keys of zero bytes produce the seed as the hash."),
    );

    reg.add(
        HashDescriptor::new("FNV_1a_32", "fnv", 32, fnv1a_32::<false>, fnv1a_32::<true>)
            .desc("32-bit bytewise FNV-1a (Fowler-Noll-Vo)")
            .hash_flags(HashFlags::NO_SEED | HashFlags::SMALL_SEED)
            .impl_flags(ImplFlags::MULTIPLY | ImplFlags::LICENSE_MIT | ImplFlags::VERY_SLOW)
            .verification(0xE3CBBE91, 0x656F95A0),
    );

    reg.add(
        HashDescriptor::new("FNV_1a_64", "fnv", 64, fnv1a_64::<false>, fnv1a_64::<true>)
            .desc("64-bit bytewise FNV-1a (Fowler-Noll-Vo)")
            .hash_flags(HashFlags::NO_SEED)
            .impl_flags(
                ImplFlags::MULTIPLY_64_64 | ImplFlags::LICENSE_MIT | ImplFlags::VERY_SLOW,
            )
            .verification(0x103455FC, 0x4B032B63)
            .seedfix(exclude_bad_seeds)
            .badseeds(&[0xcbf29ce484222325]),
    );

    reg.add(
        HashDescriptor::new("FNV_1a_128", "fnv", 128, fnv1a_128, fnv1a_128)
            .desc("128-bit bytewise FNV-1a (Fowler-Noll-Vo), from Golang")
            .hash_flags(HashFlags::ENDIAN_INDEPENDENT | HashFlags::NO_SEED)
            .impl_flags(
                ImplFlags::MULTIPLY_64_128
                    | ImplFlags::LICENSE_BSD
                    | ImplFlags::VERY_SLOW
                    | ImplFlags::CANONICAL_BOTH,
            )
            .verification(0x0269D36F, 0x0269D36F),
    );

    reg.add(
        HashDescriptor::new("FNV_1a_32_wordwise", "fnv", 32, fnv2_32::<false>, fnv2_32::<true>)
            .desc("32-bit wordwise hash based on FNV-1a")
            .hash_flags(HashFlags::NO_SEED | HashFlags::SMALL_SEED)
            .impl_flags(
                ImplFlags::SANITY_FAILS | ImplFlags::MULTIPLY | ImplFlags::LICENSE_MIT,
            )
            .verification(0x739801C5, 0xC5999647),
    );

    reg.add(
        HashDescriptor::new("FNV_1a_64_wordwise", "fnv", 64, fnv2_64::<false>, fnv2_64::<true>)
            .desc("64-bit wordwise hash based on FNV-1a")
            .hash_flags(HashFlags::NO_SEED)
            .impl_flags(
                ImplFlags::SANITY_FAILS | ImplFlags::MULTIPLY_64_64 | ImplFlags::LICENSE_MIT,
            )
            .verification(0x1967C625, 0x06F5053E)
            .badseed_desc(
                "All seeds collide on keys of all zero bytes of varying lengths (e.g. 18 vs. 32 bytes, 52 vs. 80).",
            ),
    );

    reg.add(
        HashDescriptor::new(
            "FNV_YoshimitsuTRIAD",
            "fnv",
            32,
            fnv_yoshimitsu_triad::<false>,
            fnv_yoshimitsu_triad::<true>,
        )
        .desc("FNV-YoshimitsuTRIAD 32-bit (sanmayce)")
        .hash_flags(HashFlags::NO_SEED | HashFlags::SMALL_SEED)
        .impl_flags(ImplFlags::MULTIPLY | ImplFlags::ROTATE | ImplFlags::LICENSE_MIT)
        .verification(0xD8AFFD71, 0x85C2EC2F)
        .seedfix(exclude_bad_seeds)
        .badseeds(&[0x811c9dc5, 0x23d4a49d]),
    );

    reg.add(
        HashDescriptor::new(
            "FNV_Totenschiff",
            "fnv",
            32,
            fnv_totenschiff::<false>,
            fnv_totenschiff::<true>,
        )
        .desc("FNV-Totenschiff 32-bit (sanmayce)")
        .hash_flags(HashFlags::NO_SEED | HashFlags::SMALL_SEED)
        .impl_flags(
            ImplFlags::SANITY_FAILS
                | ImplFlags::MULTIPLY
                | ImplFlags::READ_PAST_EOB
                | ImplFlags::LICENSE_MIT,
        )
        .verification(0x95D95ACF, 0xC16E2C8F)
        .seedfix(exclude_bad_seeds)
        .badseeds(&[0x811c9dc5]),
    );

    reg.add(
        HashDescriptor::new(
            "FNV_PippipYurii",
            "fnv",
            32,
            fnv_pippip_yurii::<false>,
            fnv_pippip_yurii::<true>,
        )
        .desc("FNV-Pippip-Yurii 32-bit (sanmayce)")
        .hash_flags(HashFlags::NO_SEED | HashFlags::SMALL_SEED)
        .impl_flags(
            ImplFlags::SANITY_FAILS
                | ImplFlags::MULTIPLY
                | ImplFlags::READ_PAST_EOB
                | ImplFlags::LICENSE_MIT,
        )
        .verification(0xE79AE3E4, 0x90C8C706)
        .seedfix(exclude_bad_seeds)
        .badseeds(&[0x811c9dc5]),
    );

    reg.add(
        HashDescriptor::new("FNV_Mulvey", "fnv", 32, fnv_mulvey::<false>, fnv_mulvey::<true>)
            .desc("FNV-Mulvey 32-bit")
            .hash_flags(HashFlags::NO_SEED | HashFlags::SMALL_SEED)
            .impl_flags(ImplFlags::MULTIPLY | ImplFlags::VERY_SLOW | ImplFlags::LICENSE_MIT)
            .verification(0x0E256555, 0xAC12B951),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_32_classic_vectors() {
        // Canonical FNV-1a test values (seed 0).
        let mut out = [0u8; 4];
        fnv1a_32::<false>(b"", 0, 0, &mut out);
        assert_eq!(u32::from_ne_bytes(out), 0x811c9dc5);
        fnv1a_32::<false>(b"a", 1, 0, &mut out);
        assert_eq!(u32::from_ne_bytes(out), 0xe40c292c);
        fnv1a_32::<false>(b"foobar", 6, 0, &mut out);
        assert_eq!(u32::from_ne_bytes(out), 0xbf9cf968);
    }

    #[test]
    fn fnv1a_64_classic_vectors() {
        let mut out = [0u8; 8];
        fnv1a_64::<false>(b"", 0, 0, &mut out);
        assert_eq!(u64::from_ne_bytes(out), 0xcbf29ce484222325);
        fnv1a_64::<false>(b"foobar", 6, 0, &mut out);
        assert_eq!(u64::from_ne_bytes(out), 0x85944171f73967e8);
    }

    #[test]
    fn fnv1a_128_is_canonical_both_ways() {
        // One function serves as native and bswapped variant; output
        // bytes must not depend on which slot invoked it.
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        fnv1a_128(b"hello", 5, 3, &mut a);
        fnv1a_128(b"hello", 5, 3, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn totenschiff_tail_is_masked() {
        // Bytes past len are read but masked out of the result.
        let mut a = [0u8; 16];
        let mut b = [0xFFu8; 16];
        a[..5].copy_from_slice(b"abcde");
        b[..5].copy_from_slice(b"abcde");
        let mut out_a = [0u8; 4];
        let mut out_b = [0u8; 4];
        fnv_totenschiff::<false>(&a, 5, 0, &mut out_a);
        fnv_totenschiff::<false>(&b, 5, 0, &mut out_b);
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn pippip_yurii_handles_all_lengths() {
        let buf = vec![0x11u8; 64 + 16];
        let mut out = [0u8; 4];
        for len in [0usize, 1, 7, 8, 9, 15, 16, 17, 31, 32, 33, 63, 64] {
            fnv_pippip_yurii::<false>(&buf, len, 1, &mut out);
        }
    }
}
