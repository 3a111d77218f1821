//! PMP-Multilinear, 32- and 64-bit.
//!
//! Recursive multilinear hashing over 128-word chunks with Mersenne-ish
//! prime reductions (2^32 + 15 for the 32-bit hash, 2^64 + 13 for the
//! 64-bit one). Eight levels of random coefficients come from fixed
//! tables; seeding perturbs one level-0 word, exactly as the reference
//! does. Intermediate per-chunk values are semi-reduced (a low word
//! plus a tiny high word), and upper levels hash those values.

use std::cell::Cell;

use super::pmp_tables::{PMPML_32_RD, PMPML_64_RD};
use crate::bits::{get_u16, get_u32, get_u64, put_u32, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus};
use crate::mathmult::{add128_lo, fma32_96, fma64_128, fma64_192, mult32_64, mult64_128};
use crate::registry::RegistryBuilder;

const CHUNK_LOG2: usize = 7;
const CHUNK_SIZE: usize = 1 << CHUNK_LOG2;
const LEVELS: usize = 8;
const CHUNK_BYTES_32: usize = CHUNK_SIZE * 4;
const CHUNK_BYTES_64: usize = CHUNK_SIZE * 8;

// Seeding replaces one level-0 word; the rest of the tables are shared.
thread_local! {
    static SEEDED_CONST_TERM_32: Cell<u64> = const { Cell::new(0) };
    static SEEDED_COEFF0_64: Cell<u64> = const { Cell::new(0) };
    static SEEDED_32: Cell<bool> = const { Cell::new(false) };
    static SEEDED_64: Cell<bool> = const { Cell::new(false) };
}

fn pmpml_32_seed(seed: u64) -> u64 {
    SEEDED_CONST_TERM_32.with(|c| c.set(PMPML_32_RD[0].const_term ^ seed));
    SEEDED_32.with(|c| c.set(true));
    1
}

fn pmpml_64_seed(seed: u64) -> u64 {
    SEEDED_COEFF0_64.with(|c| c.set(PMPML_64_RD[0].coeff[0] ^ seed));
    SEEDED_64.with(|c| c.set(true));
    1
}

fn const_term_32(level: usize) -> u64 {
    if level == 0 && SEEDED_32.with(Cell::get) {
        SEEDED_CONST_TERM_32.with(Cell::get)
    } else {
        PMPML_32_RD[level].const_term
    }
}

fn coeff_64(level: usize, i: usize) -> u64 {
    if level == 0 && i == 0 && SEEDED_64.with(Cell::get) {
        SEEDED_COEFF0_64.with(Cell::get)
    } else {
        PMPML_64_RD[level].coeff[i]
    }
}

fn const_term_64(level: usize) -> u64 {
    PMPML_64_RD[level].const_term
}

fn fmix32_short(mut h: u32) -> u32 {
    h ^= h >> 13;
    h = h.wrapping_mul(0xab3be54f);
    h ^= h >> 16;
    h
}

fn fmix64_short(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^= k >> 33;
    k
}

// 32-bit hash. The accumulator is 96 bits: the low/high halves of the
// evolving constant term plus a small counter word.

struct Acc96 {
    lo: u32,
    hi: u32,
    hh: u32,
}

impl Acc96 {
    fn new(const_term: u64) -> Acc96 {
        Acc96 {
            lo: const_term as u32,
            hi: (const_term >> 32) as u32,
            hh: 0,
        }
    }

    #[inline]
    fn fma(&mut self, a: u32, b: u32) {
        fma32_96(&mut self.lo, &mut self.hi, &mut self.hh, a, b);
    }
}

// Partial reduction mod 2^32 + 15: result is a low word plus a high
// word of at most 1.
fn reduce_to_semi_32(acc: Acc96) -> u64 {
    let Acc96 {
        mut lo,
        hi,
        hh: ctr,
    } = acc;

    let m = mult32_64(hi, 15);
    let mlo = m as u32;
    let mhi = (m >> 32) as u32;
    let part = ctr
        .wrapping_mul(225)
        .wrapping_add(mhi << 4)
        .wrapping_sub(mhi)
        .wrapping_add(15);
    lo = lo.wrapping_add(part);
    let mut high = 1 + u32::from(lo < part);
    high -= u32::from(lo < mlo);
    lo = lo.wrapping_sub(mlo);
    if lo >= 30 {
        lo = lo.wrapping_sub(high.wrapping_mul(15));
        high = 0;
    } else if high != 0 {
        lo = lo.wrapping_sub(high.wrapping_mul(15)).wrapping_sub(15);
        high = 0;
    }
    (u64::from(high) << 32) | u64::from(lo)
}

// Full reduction with the avalanche finish applied on the common path.
fn reduce_and_finish_32(acc: Acc96) -> u32 {
    let Acc96 {
        mut lo,
        hi,
        hh: ctr,
    } = acc;

    let m = mult32_64(hi, 15);
    let mlo = m as u32;
    let mhi = (m >> 32) as u32;
    let part = ctr
        .wrapping_mul(225)
        .wrapping_add(mhi << 4)
        .wrapping_sub(mhi)
        .wrapping_add(15);
    lo = lo.wrapping_add(part);
    let mut high = 1 + u32::from(lo < part);
    high -= u32::from(lo < mlo);
    lo = lo.wrapping_sub(mlo);
    if lo >= 30 {
        lo = lo.wrapping_sub((high << 4).wrapping_sub(high));
        fmix32_short(lo)
    } else if high != 0 {
        lo = lo.wrapping_sub(high.wrapping_mul(15).wrapping_sub(15));
        if lo >= 15 {
            fmix32_short(lo.wrapping_sub(15))
        } else {
            lo
        }
    } else {
        fmix32_short(lo)
    }
}

// Encode the trailing 0..=3 bytes with a length marker.
fn tail_word_32<const BSWAP: bool>(chars: &[u8], off: usize, cnt: usize) -> u32 {
    match cnt & 3 {
        0 => 0x1,
        1 => 0x100 + u32::from(chars[off + cnt - 1]),
        2 => u32::from(get_u16::<BSWAP>(chars, off + cnt - 2)) + 0x10000,
        _ => {
            (u32::from(chars[off + cnt - 1]) << 16)
                + u32::from(get_u16::<BSWAP>(chars, off + cnt - 3))
                + 0x1000000
        }
    }
}

fn hash_of_string_chunk_32<const BSWAP: bool>(msg: &[u8], off: usize) -> u64 {
    let coeff = &PMPML_32_RD[0].coeff;
    let mut acc = Acc96::new(const_term_32(0));
    for i in 0..CHUNK_SIZE {
        acc.fma(get_u32::<BSWAP>(msg, off + i * 4), coeff[i]);
    }
    reduce_to_semi_32(acc)
}

fn hash_of_beginning_32<const BSWAP: bool>(msg: &[u8], off: usize, tail_size: usize) -> u64 {
    let coeff = &PMPML_32_RD[0].coeff;
    let mut acc = Acc96::new(const_term_32(0));
    let size = tail_size >> 2;
    for i in 0..size {
        acc.fma(get_u32::<BSWAP>(msg, off + i * 4), coeff[i]);
    }
    let x_last = tail_word_32::<BSWAP>(msg, off, tail_size);
    acc.fma(x_last, coeff[size]);
    reduce_to_semi_32(acc)
}

fn hash_of_num_chunk_32(level: usize, values: &[u64]) -> u64 {
    let coeff = &PMPML_32_RD[level].coeff;
    let mut acc = Acc96::new(const_term_32(level));
    for i in 0..CHUNK_SIZE {
        // Upper-level inputs are truncated to their low words.
        acc.fma(values[i] as u32, coeff[i]);
    }
    reduce_to_semi_32(acc)
}

fn hash_of_num_chunk_incomplete_32(level: usize, values: &[u64], count: usize) -> u64 {
    let coeff = &PMPML_32_RD[level].coeff;
    let prev_const_term = const_term_32(level - 1);
    let coeff_sum = PMPML_32_RD[level].cached_sum;
    let mut acc = Acc96::new(const_term_32(level));

    let mut c_ctr: u64 = 0;
    if count < CHUNK_SIZE >> 1 {
        for i in 0..count {
            acc.fma(values[i] as u32, coeff[i]);
            c_ctr = c_ctr.wrapping_add(u64::from(coeff[i]));
        }
        c_ctr = coeff_sum.wrapping_sub(c_ctr);
    } else {
        let mut i = 0usize;
        while i < count {
            acc.fma(values[i] as u32, coeff[i]);
            while i < CHUNK_SIZE {
                c_ctr = c_ctr.wrapping_add(u64::from(coeff[i]));
                i += 1;
            }
            i += 1;
        }
    }

    // Multiply the skipped-coefficient sum by the previous level's
    // constant term and fold the 96-bit product in.
    let c_lo = c_ctr as u32;
    let c_hi = (c_ctr >> 32) as u32;
    let p_lo = prev_const_term as u32;
    let p_hi = (prev_const_term >> 32) as u32;

    let low_product = mult32_64(c_lo, p_lo);
    let mid_product = mult32_64(c_lo, p_hi)
        .wrapping_add(mult32_64(c_hi, p_lo))
        .wrapping_add(low_product >> 32);
    let low_product = (mid_product << 32) | (low_product & 0xFFFF_FFFF);
    let hi_product = c_hi
        .wrapping_mul(p_hi)
        .wrapping_add((mid_product >> 32) as u32);

    let mut ct = (u64::from(acc.hi) << 32) | u64::from(acc.lo);
    ct = ct.wrapping_add(low_product);
    let carry = u32::from(ct < low_product);
    acc.lo = ct as u32;
    acc.hi = (ct >> 32) as u32;
    acc.hh = acc.hh.wrapping_add(hi_product).wrapping_add(carry);

    reduce_to_semi_32(acc)
}

fn process_next_value_32(
    mut level: usize,
    mut value: u64,
    all_values: &mut [u64],
    cnts: &mut [usize],
    flag: &mut u32,
) {
    loop {
        all_values[(level << CHUNK_LOG2) + cnts[level]] = value;
        cnts[level] += 1;
        if cnts[level] != CHUNK_SIZE {
            break;
        }
        cnts[level] = 0;
        value = hash_of_num_chunk_32(level, &all_values[level << CHUNK_LOG2..]);
        if *flag & (1 << level) == 0 {
            cnts[level + 1] = 0;
            *flag |= 1 << level;
        }
        level += 1;
    }
}

fn finalize_32(level: usize, all_values: &mut [u64], cnts: &mut [usize], flag: &mut u32) -> u64 {
    let mut i = level;
    loop {
        if *flag & (1 << i) == 0 && cnts[i] == 1 {
            return all_values[i << CHUNK_LOG2];
        }
        if cnts[i] != 0 {
            if *flag & (1 << i) == 0 {
                cnts[i + 1] = 0;
                *flag |= 1 << i;
            }
            let value =
                hash_of_num_chunk_incomplete_32(i, &all_values[i << CHUNK_LOG2..], cnts[i]);
            process_next_value_32(i + 1, value, all_values, cnts, flag);
        }
        i += 1;
    }
}

fn pmpml_hash_32<const BSWAP: bool>(chars: &[u8], cnt: usize) -> u32 {
    if cnt < 32 {
        let coeff = &PMPML_32_RD[0].coeff;
        let mut acc = Acc96::new(const_term_32(0));
        let size = cnt >> 2;
        for i in 0..size {
            acc.fma(get_u32::<BSWAP>(chars, i * 4), coeff[i]);
        }
        let x_last = tail_word_32::<BSWAP>(chars, 0, cnt);
        acc.fma(x_last, coeff[size]);
        reduce_and_finish_32(acc)
    } else if cnt < CHUNK_BYTES_32 {
        let semi = hash_of_beginning_32::<BSWAP>(chars, 0, cnt);
        if semi >> 32 == 0 {
            fmix32_short(semi as u32)
        } else {
            semi as u32
        }
    } else {
        let mut all_values = vec![0u64; LEVELS * CHUNK_SIZE];
        let mut cnts = [0usize; LEVELS + 1];
        let mut flag = 0u32;

        for i in 0..cnt >> (CHUNK_LOG2 + 2) {
            let value = hash_of_string_chunk_32::<BSWAP>(chars, i << (CHUNK_LOG2 + 2));
            process_next_value_32(1, value, &mut all_values, &mut cnts, &mut flag);
        }

        // The tail is always processed; a chunk-multiple length feeds an
        // empty tail, which contributes the length marker alone.
        let tail_cnt = cnt & (CHUNK_BYTES_32 - 1);
        let tail_off = cnt & !(CHUNK_BYTES_32 - 1);
        let value = hash_of_beginning_32::<BSWAP>(chars, tail_off, tail_cnt);
        process_next_value_32(1, value, &mut all_values, &mut cnts, &mut flag);

        let semi = finalize_32(1, &mut all_values, &mut cnts, &mut flag);
        if semi >> 32 == 0 {
            fmix32_short(semi as u32)
        } else {
            semi as u32
        }
    }
}

// 64-bit hash. The accumulator is 192 bits; chunk values are 128-bit
// (low word plus a small high word).

struct Acc192 {
    c0: u64,
    c1: u64,
    c2: u64,
}

impl Acc192 {
    fn new(const_term: u64) -> Acc192 {
        Acc192 {
            c0: const_term,
            c1: 0,
            c2: 0,
        }
    }

    #[inline]
    fn fma(&mut self, a: u64, b: u64) {
        fma64_192(&mut self.c0, &mut self.c1, &mut self.c2, a, b);
    }

    // A semi-reduced 128-bit input: multiply its halves by the
    // coefficient and fold the 128-bit intermediate back in.
    #[inline]
    fn fma_wide(&mut self, x_lo: u64, x_hi: u64, coeff: u64) {
        if x_hi == 0 {
            self.fma(x_lo, coeff);
        } else {
            let (mul_low, mut mul_high) = mult64_128(x_lo, coeff);
            mul_high = mul_high.wrapping_add(x_hi.wrapping_mul(coeff));
            self.fma(mul_low, mul_high);
        }
    }
}

// Partial reduction mod 2^64 + 13: low word plus a high word of at
// most 1.
fn reduce_to_semi_64(acc: Acc192) -> (u64, u64) {
    let Acc192 {
        mut c0,
        c1,
        c2,
    } = acc;

    let (mlo, mhi) = mult64_128(c1, 13);
    let part = c2
        .wrapping_mul(169)
        .wrapping_add(mhi.wrapping_mul(13))
        .wrapping_add(13);
    c0 = c0.wrapping_add(part);
    let mut high = 1 + u64::from(c0 < part);
    high -= u64::from(c0 < mlo);
    c0 = c0.wrapping_sub(mlo);
    if c0 >= 26 {
        c0 = c0.wrapping_sub(high.wrapping_mul(13));
        high = 0;
    } else {
        c0 = c0.wrapping_sub(high.wrapping_mul(13));
        if c0 < 26 {
            high = 0;
        } else {
            c0 = c0.wrapping_add(13);
            high = u64::from(c0 < 13);
        }
    }
    (c0, high)
}

fn reduce_and_finish_64(acc: Acc192) -> u64 {
    let Acc192 {
        mut c0,
        c1,
        c2,
    } = acc;

    let (mlo, mhi) = mult64_128(c1, 13);
    let part = c2
        .wrapping_mul(169)
        .wrapping_add(mhi.wrapping_mul(13))
        .wrapping_add(13);
    c0 = c0.wrapping_add(part);
    let mut high = 1 + u64::from(c0 < part);
    high -= u64::from(c0 < mlo);
    c0 = c0.wrapping_sub(mlo);
    if c0 >= 26 {
        fmix64_short(c0.wrapping_sub(high.wrapping_mul(13)))
    } else {
        c0 = c0.wrapping_sub(high.wrapping_mul(13));
        if c0 < 26 {
            fmix64_short(c0)
        } else {
            fmix64_short(c0.wrapping_add(13))
        }
    }
}

// Encode the trailing 0..=7 bytes with a length marker.
fn read_tail_64<const BSWAP: bool>(tail: &[u8], off: usize, tail_size: usize) -> u64 {
    match tail_size & 7 {
        0 => 0x1,
        1 => 0x100 + u64::from(tail[off + tail_size - 1]),
        2 => u64::from(get_u16::<BSWAP>(tail, off + tail_size - 2)) + 0x10000,
        3 => {
            (u64::from(tail[off + tail_size - 1]) << 16)
                + u64::from(get_u16::<BSWAP>(tail, off + tail_size - 3))
                + 0x1000000
        }
        4 => u64::from(get_u32::<BSWAP>(tail, off + tail_size - 4)) + 0x1_0000_0000,
        5 => {
            (u64::from(tail[off + tail_size - 1]) << 32)
                + 0x100_0000_0000
                + u64::from(get_u32::<BSWAP>(tail, off + tail_size - 5))
        }
        6 => {
            (u64::from(get_u16::<BSWAP>(tail, off + tail_size - 2)) << 32)
                + 0x1_0000_0000_0000
                + u64::from(get_u32::<BSWAP>(tail, off + tail_size - 6))
        }
        _ => {
            (u64::from(tail[off + tail_size - 1]) << 48)
                + (u64::from(get_u16::<BSWAP>(tail, off + tail_size - 3)) << 32)
                + 0x100_0000_0000_0000
                + u64::from(get_u32::<BSWAP>(tail, off + tail_size - 7))
        }
    }
}

fn hash_of_string_chunk_64<const BSWAP: bool>(msg: &[u8], off: usize) -> (u64, u64) {
    let mut acc = Acc192::new(const_term_64(0));
    for i in 0..CHUNK_SIZE {
        acc.fma(get_u64::<BSWAP>(msg, off + i * 8), coeff_64(0, i));
    }
    reduce_to_semi_64(acc)
}

fn hash_of_beginning_64<const BSWAP: bool>(msg: &[u8], off: usize, tail_size: usize) -> (u64, u64) {
    let mut acc = Acc192::new(const_term_64(0));
    let size = tail_size >> 3;
    for i in 0..size {
        acc.fma(get_u64::<BSWAP>(msg, off + i * 8), coeff_64(0, i));
    }
    let x_last = read_tail_64::<BSWAP>(msg, off, tail_size);
    acc.fma(x_last, coeff_64(0, size));
    reduce_to_semi_64(acc)
}

fn hash_of_num_chunk_64(level: usize, values: &[(u64, u64)]) -> (u64, u64) {
    let mut acc = Acc192::new(const_term_64(level));
    for (i, &(lo, hi)) in values.iter().take(CHUNK_SIZE).enumerate() {
        acc.fma_wide(lo, hi, coeff_64(level, i));
    }
    reduce_to_semi_64(acc)
}

fn hash_of_num_chunk_incomplete_64(
    level: usize,
    values: &[(u64, u64)],
    count: usize,
) -> (u64, u64) {
    let prev_const_term = const_term_64(level - 1);
    let coeff_sum_low = PMPML_64_RD[level].cached_sum_low;
    let coeff_sum_high = PMPML_64_RD[level].cached_sum_high;
    let mut acc = Acc192::new(const_term_64(level));

    let mut c0: u64 = 0;
    let mut c1: u64 = 0;
    if count < CHUNK_SIZE >> 1 {
        for i in 0..count {
            add128_lo(&mut c0, &mut c1, coeff_64(level, i));
            acc.fma_wide(values[i].0, values[i].1, coeff_64(level, i));
        }
        if c0 > coeff_sum_low {
            c1 = coeff_sum_high.wrapping_sub(c1).wrapping_sub(1);
        } else {
            c1 = coeff_sum_high.wrapping_sub(c1);
        }
        c0 = coeff_sum_low.wrapping_sub(c0);
    } else {
        for i in 0..count {
            acc.fma_wide(values[i].0, values[i].1, coeff_64(level, i));
        }
        for i in count..CHUNK_SIZE {
            add128_lo(&mut c0, &mut c1, coeff_64(level, i));
        }
    }

    acc.fma(c0, prev_const_term);
    fma64_128(&mut acc.c1, &mut acc.c2, c1, prev_const_term);

    reduce_to_semi_64(acc)
}

fn process_next_value_64(
    mut level: usize,
    mut value: (u64, u64),
    all_values: &mut [(u64, u64)],
    cnts: &mut [usize],
    flag: &mut u32,
) {
    loop {
        all_values[(level << CHUNK_LOG2) + cnts[level]] = value;
        cnts[level] += 1;
        if cnts[level] != CHUNK_SIZE {
            break;
        }
        cnts[level] = 0;
        value = hash_of_num_chunk_64(level, &all_values[level << CHUNK_LOG2..]);
        if *flag & (1 << level) == 0 {
            cnts[level + 1] = 0;
            *flag |= 1 << level;
        }
        level += 1;
    }
}

fn finalize_64(
    level: usize,
    all_values: &mut [(u64, u64)],
    cnts: &mut [usize],
    flag: &mut u32,
) -> (u64, u64) {
    let mut i = level;
    loop {
        if *flag & (1 << i) == 0 && cnts[i] == 1 {
            return all_values[i << CHUNK_LOG2];
        }
        if cnts[i] != 0 {
            if *flag & (1 << i) == 0 {
                cnts[i + 1] = 0;
                *flag |= 1 << i;
            }
            let value =
                hash_of_num_chunk_incomplete_64(i, &all_values[i << CHUNK_LOG2..], cnts[i]);
            process_next_value_64(i + 1, value, all_values, cnts, flag);
        }
        i += 1;
    }
}

fn pmpml_hash_64<const BSWAP: bool>(chars: &[u8], cnt: usize) -> u64 {
    if cnt < 64 {
        let mut acc = Acc192::new(const_term_64(0));
        let size = cnt >> 3;
        for i in 0..size {
            acc.fma(get_u64::<BSWAP>(chars, i * 8), coeff_64(0, i));
        }
        let x_last = read_tail_64::<BSWAP>(chars, 0, cnt);
        acc.fma(x_last, coeff_64(0, size));
        reduce_and_finish_64(acc)
    } else if cnt < CHUNK_BYTES_64 {
        let (lo, hi) = hash_of_beginning_64::<BSWAP>(chars, 0, cnt);
        if hi == 0 { fmix64_short(lo) } else { lo }
    } else {
        let mut all_values = vec![(0u64, 0u64); LEVELS * CHUNK_SIZE];
        let mut cnts = [0usize; LEVELS + 1];
        let mut flag = 0u32;

        for i in 0..cnt >> (CHUNK_LOG2 + 3) {
            let value = hash_of_string_chunk_64::<BSWAP>(chars, i << (CHUNK_LOG2 + 3));
            process_next_value_64(1, value, &mut all_values, &mut cnts, &mut flag);
        }

        let tail_cnt = cnt & (CHUNK_BYTES_64 - 1);
        let tail_off = cnt & !(CHUNK_BYTES_64 - 1);
        let value = hash_of_beginning_64::<BSWAP>(chars, tail_off, tail_cnt);
        process_next_value_64(1, value, &mut all_values, &mut cnts, &mut flag);

        let (lo, hi) = finalize_64(1, &mut all_values, &mut cnts, &mut flag);
        if hi == 0 { fmix64_short(lo) } else { lo }
    }
}

fn pmpml_32<const BSWAP: bool>(input: &[u8], len: usize, _seed: u64, out: &mut [u8]) {
    let h = pmpml_hash_32::<BSWAP>(input, len);
    put_u32::<BSWAP>(h, out, 0);
}

fn pmpml_64<const BSWAP: bool>(input: &[u8], len: usize, _seed: u64, out: &mut [u8]) {
    let h = pmpml_hash_64::<BSWAP>(input, len);
    put_u64::<BSWAP>(h, out, 0);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "PMP_mutilinear",
        src_url: Some("https://github.com/lemire/StronglyUniversalStringHashing"),
        src_status: SrcStatus::Frozen,
    });

    reg.add(
        HashDescriptor::new(
            "PMP_Multilinear_32",
            "PMP_mutilinear",
            32,
            pmpml_32::<false>,
            pmpml_32::<true>,
        )
        .desc("PMP_Multilinear 32-bit")
        .hash_flags(HashFlags::LOOKUP_TABLE)
        .impl_flags(
            ImplFlags::TYPE_PUNNING
                | ImplFlags::MULTIPLY
                | ImplFlags::LICENSE_BSD
                | ImplFlags::SLOW,
        )
        .verification(0xF3199670, 0xF602E963)
        .seedprep(pmpml_32_seed),
    );

    reg.add(
        HashDescriptor::new(
            "PMP_Multilinear_64",
            "PMP_mutilinear",
            64,
            pmpml_64::<false>,
            pmpml_64::<true>,
        )
        .desc("PMP_Multilinear 64-bit")
        .hash_flags(HashFlags::LOOKUP_TABLE)
        .impl_flags(ImplFlags::TYPE_PUNNING | ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_BSD)
        .verification(0xB776D2B9, 0x8E1E0CDF)
        .seedprep(pmpml_64_seed),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semi_reduced_values_are_small() {
        // The partial reduction leaves at most one multiple of the
        // prime in the high word.
        let mut acc = Acc96::new(PMPML_32_RD[0].const_term);
        for i in 0..CHUNK_SIZE {
            acc.fma(0xFFFF_FFFF, PMPML_32_RD[0].coeff[i]);
        }
        let semi = reduce_to_semi_32(acc);
        assert!(semi >> 32 <= 1);

        let mut acc = Acc192::new(PMPML_64_RD[0].const_term);
        for i in 0..CHUNK_SIZE {
            acc.fma(u64::MAX, PMPML_64_RD[0].coeff[i]);
        }
        let (_, hi) = reduce_to_semi_64(acc);
        assert!(hi <= 1);
    }

    #[test]
    fn cached_sums_match_the_tables() {
        for rd in &PMPML_32_RD {
            let sum: u64 = rd.coeff.iter().map(|&c| u64::from(c)).sum();
            assert_eq!(sum, rd.cached_sum);
        }
        for rd in &PMPML_64_RD {
            let mut lo = 0u64;
            let mut hi = 0u64;
            for &c in &rd.coeff {
                add128_lo(&mut lo, &mut hi, c);
            }
            assert_eq!((lo, hi), (rd.cached_sum_low, rd.cached_sum_high));
        }
    }

    #[test]
    fn seeding_perturbs_only_the_hash_value() {
        let msg = vec![0x77u8; 600];
        pmpml_32_seed(1);
        let a = pmpml_hash_32::<false>(&msg, msg.len());
        pmpml_32_seed(2);
        let b = pmpml_hash_32::<false>(&msg, msg.len());
        assert_ne!(a, b);
        pmpml_64_seed(1);
        let c = pmpml_hash_64::<false>(&msg, msg.len());
        pmpml_64_seed(2);
        let d = pmpml_hash_64::<false>(&msg, msg.len());
        assert_ne!(c, d);
    }

    #[test]
    fn chunk_boundary_lengths_hash() {
        pmpml_32_seed(0);
        pmpml_64_seed(0);
        let msg = vec![0x13u8; 3 * CHUNK_BYTES_64 + 9];
        for n in [
            0usize,
            1,
            31,
            32,
            63,
            64,
            CHUNK_BYTES_32 - 1,
            CHUNK_BYTES_32,
            CHUNK_BYTES_32 + 1,
            CHUNK_BYTES_64 - 1,
            CHUNK_BYTES_64,
            CHUNK_BYTES_64 + 1,
            2 * CHUNK_BYTES_64,
            3 * CHUNK_BYTES_64 + 9,
        ] {
            let _ = pmpml_hash_32::<false>(&msg, n);
            let _ = pmpml_hash_64::<false>(&msg, n);
        }
    }
}
