//! Dietzfelbinger multiply-shift and pair-multiply-shift on strings.
//!
//! Thorup, "High Speed Hashing for Integers and Strings" (2018),
//! schemes 3.4 and 3.5. A table of 256 random 128-bit multipliers is
//! generated once by a Xorshift PRNG; the message length and seed are
//! folded into the basis so keys of different lengths hash differently.

use std::sync::OnceLock;

use crate::bits::{get_u16, get_u32, get_u64, put_u32, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus};
use crate::mathmult::{add128_lo, mult128_128};
use crate::registry::RegistryBuilder;

const RANDOM_WORDS: usize = 1 << 8;

// Xorshift RNG, arbitrarily chosen; this hash is labeled as
// system-dependent since in practice some srand()/rand() would be used.
#[inline]
fn mix(w: &mut u32, x: &mut u32, y: &mut u32, z: &mut u32) {
    let t = *x ^ (*x << 11);
    *x = *y;
    *y = *z;
    *z = *w;
    *w = *w ^ (*w >> 19) ^ t ^ (t >> 8);
}

fn seed_table(seed: u64) -> Vec<u64> {
    let mut x = 0x498b3bc5u32 ^ (seed as u32);
    let mut y = 0x5a05089au32 ^ ((seed >> 32) as u32);
    let mut w = 0u32;
    let mut z = 0u32;
    for _ in 0..10 {
        mix(&mut w, &mut x, &mut y, &mut z);
    }

    let mut table = vec![0u64; RANDOM_WORDS * 2];
    for i in 0..RANDOM_WORDS {
        mix(&mut w, &mut x, &mut y, &mut z);
        table[2 * i + 1] = (u64::from(x) << 32) | u64::from(y);
        mix(&mut w, &mut x, &mut y, &mut z);
        table[2 * i] = (u64::from(x) << 32) | u64::from(y);
        if table[2 * i] == 0 {
            // A zero low word degenerates the multiplier.
            table[2 * i] += 1;
        }
    }
    table
}

static TABLE: OnceLock<Vec<u64>> = OnceLock::new();

fn table() -> &'static [u64] {
    TABLE.get_or_init(|| seed_table(0))
}

fn init() -> bool {
    let _ = table();
    true
}

#[inline]
fn basis(seed: u64, len_bytes: usize, rand: &[u64]) -> u64 {
    u64::from(seed as u32)
        .wrapping_mul(rand[RANDOM_WORDS - 1])
        .wrapping_add(u64::from((seed >> 32) as u32).wrapping_mul(rand[RANDOM_WORDS - 2]))
        .wrapping_add(u64::from(len_bytes as u32).wrapping_mul(rand[RANDOM_WORDS - 3]))
        .wrapping_add(
            u64::from((len_bytes as u64 >> 32) as u32).wrapping_mul(rand[RANDOM_WORDS - 4]),
        )
}

// Trailing 1..=3 bytes, packed big-endian style.
#[inline]
fn last_bytes<const BSWAP: bool>(buf: &[u8], mut off: usize, remaining: usize) -> u64 {
    let mut last = 0u64;
    if remaining & 2 != 0 {
        last = (last << 16) | u64::from(get_u16::<BSWAP>(buf, off));
        off += 2;
    }
    if remaining & 1 != 0 {
        last = (last << 8) | u64::from(buf[off]);
    }
    last
}

fn multiply_shift_32<const BSWAP: bool>(input: &[u8], len_bytes: usize, seed: u64, out: &mut [u8]) {
    let rand = table();
    let len = len_bytes / 4;
    let mut h = basis(seed, len_bytes, rand);
    let mut off = 0usize;

    for i in 0..len {
        let t = u64::from(get_u32::<BSWAP>(input, off)).wrapping_mul(rand[i % RANDOM_WORDS]);
        h = h.wrapping_add(t);
        off += 4;
    }

    let remaining = len_bytes & 3;
    if remaining != 0 {
        let last = last_bytes::<BSWAP>(input, off, remaining);
        h = h.wrapping_add(last.wrapping_mul(rand[len % RANDOM_WORDS]));
    }

    put_u32::<BSWAP>((h >> 32) as u32, out, 0);
}

fn pair_multiply_shift_32<const BSWAP: bool>(
    input: &[u8],
    len_bytes: usize,
    seed: u64,
    out: &mut [u8],
) {
    let rand = table();
    let len = len_bytes / 4;
    let mut h = basis(seed, len_bytes, rand);
    let mut off = 0usize;

    for i in 0..len / 2 {
        let t = get_u64::<BSWAP>(input, off);
        let lo = u64::from(t as u32).wrapping_add(rand[(2 * i) % RANDOM_WORDS + 1]);
        let hi = u64::from((t >> 32) as u32).wrapping_add(rand[(2 * i) % RANDOM_WORDS]);
        h = h.wrapping_add(lo.wrapping_mul(hi));
        off += 8;
    }

    if len & 1 != 0 {
        let t = u64::from(get_u32::<BSWAP>(input, off)).wrapping_mul(rand[(len - 1) % RANDOM_WORDS]);
        h = h.wrapping_add(t);
        off += 4;
    }

    let remaining = len_bytes & 3;
    if remaining != 0 {
        let last = last_bytes::<BSWAP>(input, off, remaining);
        h = h.wrapping_add(last.wrapping_mul(rand[len % RANDOM_WORDS]));
    }

    put_u32::<BSWAP>((h >> 32) as u32, out, 0);
}

// Only the high half of each 128x128 product is accumulated.
#[inline]
fn mult_hi(a: u64, blo: u64, bhi: u64) -> u64 {
    let (_, hi) = mult128_128(a, 0, blo, bhi);
    hi
}

fn multiply_shift_64<const BSWAP: bool>(input: &[u8], len_bytes: usize, seed: u64, out: &mut [u8]) {
    let rand = table();
    let len = len_bytes / 8;

    let mut h = mult_hi(seed, rand[RANDOM_WORDS - 1], rand[RANDOM_WORDS - 2]);
    h = h.wrapping_add(mult_hi(
        len_bytes as u64,
        rand[RANDOM_WORDS - 3],
        rand[RANDOM_WORDS - 4],
    ));

    let mut off = 0usize;
    for i in 0..len {
        let k = i % RANDOM_WORDS;
        h = h.wrapping_add(mult_hi(
            get_u64::<BSWAP>(input, off),
            rand[k * 2],
            rand[k * 2 + 1],
        ));
        off += 8;
    }

    let remaining = len_bytes & 7;
    if remaining != 0 {
        let mut last = 0u64;
        if remaining & 4 != 0 {
            last = u64::from(get_u32::<BSWAP>(input, off));
            off += 4;
        }
        if remaining & 2 != 0 {
            last = (last << 16) | u64::from(get_u16::<BSWAP>(input, off));
            off += 2;
        }
        if remaining & 1 != 0 {
            last = (last << 8) | u64::from(input[off]);
        }
        let k = len % RANDOM_WORDS;
        h = h.wrapping_add(mult_hi(last, rand[k * 2], rand[k * 2 + 1]));
    }

    put_u64::<BSWAP>(h, out, 0);
}

fn pair_multiply_shift_64<const BSWAP: bool>(
    input: &[u8],
    len_bytes: usize,
    seed: u64,
    out: &mut [u8],
) {
    let rand = table();
    let len = len_bytes / 8;

    let mut h = mult_hi(seed, rand[RANDOM_WORDS - 1], rand[RANDOM_WORDS - 2]);
    h = h.wrapping_add(mult_hi(
        len_bytes as u64,
        rand[RANDOM_WORDS - 3],
        rand[RANDOM_WORDS - 4],
    ));

    let mut off = 0usize;
    for i in 0..len / 2 {
        let k = (2 * i) % RANDOM_WORDS;
        let mut blk1lo = rand[k * 2 + 2];
        let mut blk1hi = rand[k * 2 + 3];
        let mut blk2lo = rand[k * 2];
        let mut blk2hi = rand[k * 2 + 1];
        add128_lo(&mut blk1lo, &mut blk1hi, get_u64::<BSWAP>(input, off));
        add128_lo(&mut blk2lo, &mut blk2hi, get_u64::<BSWAP>(input, off + 8));
        let (_, t) = mult128_128(blk1lo, blk1hi, blk2lo, blk2hi);
        h = h.wrapping_add(t);
        off += 16;
    }

    if len & 1 != 0 {
        let k = (len - 1) % RANDOM_WORDS;
        h = h.wrapping_add(mult_hi(
            get_u64::<BSWAP>(input, off),
            rand[k * 2],
            rand[k * 2 + 1],
        ));
        off += 8;
    }

    let remaining = len_bytes & 7;
    if remaining != 0 {
        let mut last = 0u64;
        if remaining & 4 != 0 {
            last = u64::from(get_u32::<BSWAP>(input, off));
            off += 4;
        }
        if remaining & 2 != 0 {
            last = (last << 16) | u64::from(get_u16::<BSWAP>(input, off));
            off += 2;
        }
        if remaining & 1 != 0 {
            last = (last << 8) | u64::from(input[off]);
        }
        let k = len % RANDOM_WORDS;
        h = h.wrapping_add(mult_hi(last, rand[k * 2], rand[k * 2 + 1]));
    }

    put_u64::<BSWAP>(h, out, 0);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "multiply_shift",
        src_url: Some(
            "https://github.com/rurban/smhasher/blob/2b5992fe015282c87c9069e3c664771b47555ff3/Hashes.cpp",
        ),
        src_status: SrcStatus::Frozen,
    });

    reg.add(
        HashDescriptor::new(
            "multiply_shift_32",
            "multiply_shift",
            32,
            multiply_shift_32::<false>,
            multiply_shift_32::<true>,
        )
        .desc("Dietzfelbinger Multiply-shift on strings, 32-bit blocks")
        .hash_flags(HashFlags::LOOKUP_TABLE | HashFlags::SYSTEM_SPECIFIC)
        .impl_flags(ImplFlags::MULTIPLY_64_64 | ImplFlags::LICENSE_MIT)
        .verification(0x34BAD85C, 0x133CC3AC)
        .init(init),
    );

    reg.add(
        HashDescriptor::new(
            "pair_multiply_shift_32",
            "multiply_shift",
            32,
            pair_multiply_shift_32::<false>,
            pair_multiply_shift_32::<true>,
        )
        .desc("Dietzfelbinger Pair-multiply-shift strings, 32-bit blocks")
        .hash_flags(HashFlags::LOOKUP_TABLE | HashFlags::SYSTEM_SPECIFIC)
        .impl_flags(ImplFlags::MULTIPLY_64_64 | ImplFlags::LICENSE_MIT)
        .verification(0xFC284F0F, 0x6E93B706)
        .init(init),
    );

    reg.add(
        HashDescriptor::new(
            "multiply_shift",
            "multiply_shift",
            64,
            multiply_shift_64::<false>,
            multiply_shift_64::<true>,
        )
        .desc("Dietzfelbinger Multiply-shift on strings, 64-bit blocks")
        .hash_flags(HashFlags::LOOKUP_TABLE | HashFlags::SYSTEM_SPECIFIC)
        .impl_flags(ImplFlags::MULTIPLY_128_128 | ImplFlags::LICENSE_MIT)
        .verification(0xB7A5E66D, 0x6E3902A6)
        .init(init),
    );

    reg.add(
        HashDescriptor::new(
            "pair_multiply_shift",
            "multiply_shift",
            64,
            pair_multiply_shift_64::<false>,
            pair_multiply_shift_64::<true>,
        )
        .desc("Dietzfelbinger Pair-multiply-shift strings, 64-bit blocks")
        .hash_flags(HashFlags::LOOKUP_TABLE | HashFlags::SYSTEM_SPECIFIC)
        .impl_flags(ImplFlags::MULTIPLY_128_128 | ImplFlags::LICENSE_MIT)
        .verification(0x4FBA804D, 0x2B7F643B)
        .init(init),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorshift_warmup_prefix() {
        // The first table pair from starting state
        // (x=0x498b3bc5, y=0x5a05089a, w=z=0) after 10 warm-up rounds.
        let mut x = 0x498b3bc5u32;
        let mut y = 0x5a05089au32;
        let mut w = 0u32;
        let mut z = 0u32;
        for _ in 0..10 {
            mix(&mut w, &mut x, &mut y, &mut z);
        }
        mix(&mut w, &mut x, &mut y, &mut z);
        let expect_hi = (u64::from(x) << 32) | u64::from(y);
        mix(&mut w, &mut x, &mut y, &mut z);
        let mut expect_lo = (u64::from(x) << 32) | u64::from(y);
        if expect_lo == 0 {
            expect_lo += 1;
        }
        let t = table();
        assert_eq!(t[1], expect_hi);
        assert_eq!(t[0], expect_lo);
    }

    #[test]
    fn table_low_words_are_nonzero() {
        let t = table();
        assert_eq!(t.len(), RANDOM_WORDS * 2);
        for i in 0..RANDOM_WORDS {
            assert_ne!(t[2 * i], 0, "degenerate multiplier at {i}");
        }
    }

    #[test]
    fn nonzero_seed_tables_avoid_degenerate_state() {
        for seed in [0u64, u64::MAX] {
            let t = seed_table(seed);
            for i in 0..RANDOM_WORDS {
                assert_ne!(t[2 * i], 0);
            }
        }
    }

    #[test]
    fn length_is_part_of_the_basis() {
        // A key and the same key with appended zeros must differ.
        let buf = [0u8; 12];
        let mut h1 = [0u8; 8];
        let mut h2 = [0u8; 8];
        multiply_shift_64::<false>(&buf, 8, 0, &mut h1);
        multiply_shift_64::<false>(&buf, 12, 0, &mut h2);
        assert_ne!(h1, h2);
    }
}
