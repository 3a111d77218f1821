//! t1ha, "Fast Positive Hash": t1ha0 (32-bit core), t1ha1, t1ha2 at 64
//! and 128 bits, and the t1ha2 incremental streamer.
//!
//! Each variant exists in little- and big-endian read flavors; the
//! registered native function reads in host order and the byte-swapped
//! one in the opposite order, so all published hash values are
//! reachable on any host. Init replays the published 81-entry
//! known-answer tables. The registered incremental variants seed
//! differently from their published self-test tables and are flagged
//! INCREMENTAL_DIFFERENT accordingly.

use crate::bits::{get_u32, get_u64, is_be, is_le, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, ImplFlags, SrcStatus};
use crate::mathmult::{mult32_64, mult64_128};
use crate::registry::RegistryBuilder;

// 'magic' primes
const PRIME_0: u64 = 0xEC99BF0D8372CAAB;
const PRIME_1: u64 = 0x82434FE90EDCEF39;
const PRIME_2: u64 = 0xD4F06DB99D67BE4B;
const PRIME_3: u64 = 0xBD9CACC22C6E9571;
const PRIME_4: u64 = 0x9C06FAF4D023E3AB;
const PRIME_5: u64 = 0xC060724A8424F345;
const PRIME_6: u64 = 0xCB5AF53AE3AAAC31;

const PRIME32_0: u32 = 0x92D78269;
const PRIME32_1: u32 = 0xCA9B4735;
const PRIME32_2: u32 = 0xA4ABA1C3;
const PRIME32_3: u32 = 0xF6499843;
const PRIME32_4: u32 = 0x86F0FD61;
const PRIME32_5: u32 = 0xCA2DA6FB;
const PRIME32_6: u32 = 0xC4BB3575;

// Word fetches: BE_OUT selects big-endian interpretation of the bytes.
#[inline]
fn fetch32<const BE_OUT: bool>(p: &[u8], off: usize) -> u32 {
    let v = get_u32::<false>(p, off);
    if BE_OUT != is_be() { v.swap_bytes() } else { v }
}

#[inline]
fn fetch64<const BE_OUT: bool>(p: &[u8], off: usize) -> u64 {
    let v = get_u64::<false>(p, off);
    if BE_OUT != is_be() { v.swap_bytes() } else { v }
}

// Compose the trailing `tail & 3` bytes (0 meaning a full word).
fn tail32<const BE_OUT: bool>(p: &[u8], off: usize, tail: usize) -> u32 {
    let n = match tail & 3 {
        0 => 4,
        k => k,
    };
    if n == 4 {
        return fetch32::<BE_OUT>(p, off);
    }
    let mut r = 0u32;
    if BE_OUT {
        for i in 0..n {
            r = (r << 8) | u32::from(p[off + i]);
        }
    } else {
        for i in (0..n).rev() {
            r = (r << 8) | u32::from(p[off + i]);
        }
    }
    r
}

// Compose the trailing `tail & 7` bytes (0 meaning a full word).
fn tail64<const BE_OUT: bool>(p: &[u8], off: usize, tail: usize) -> u64 {
    let n = match tail & 7 {
        0 => 8,
        k => k,
    };
    if n == 8 {
        return fetch64::<BE_OUT>(p, off);
    }
    let mut r = 0u64;
    if BE_OUT {
        for i in 0..n {
            r = (r << 8) | u64::from(p[off + i]);
        }
    } else {
        for i in (0..n).rev() {
            r = (r << 8) | u64::from(p[off + i]);
        }
    }
    r
}

// t1ha0: 32-bit core.

#[inline]
fn mixup32(a: &mut u32, b: &mut u32, v: u32, prime: u32) {
    let r = mult32_64(b.wrapping_add(v), prime);
    *a ^= r as u32;
    *b = b.wrapping_add((r >> 32) as u32);
}

#[inline]
fn final32(a: u32, b: u32) -> u64 {
    let mut l = u64::from(b ^ a.rotate_right(13)) | u64::from(a) << 32;
    l = l.wrapping_mul(PRIME_0);
    l ^= l >> 41;
    l = l.wrapping_mul(PRIME_4);
    l ^= l >> 47;
    l = l.wrapping_mul(PRIME_6);
    l
}

fn t1ha0_impl<const BE_OUT: bool>(data: &[u8], mut len: usize, seed: u64) -> u64 {
    let mut a = (len as u32).rotate_right(17).wrapping_add(seed as u32);
    let mut b = (len as u32) ^ ((seed >> 32) as u32);
    let mut off = 0usize;

    if len > 16 {
        let mut c = !a;
        let mut d = b.rotate_right(5);
        let detent = len - 15;
        loop {
            let w0 = fetch32::<BE_OUT>(data, off);
            let w1 = fetch32::<BE_OUT>(data, off + 4);
            let w2 = fetch32::<BE_OUT>(data, off + 8);
            let w3 = fetch32::<BE_OUT>(data, off + 12);
            off += 16;

            let d13 = w1.wrapping_add(w3.wrapping_add(d).rotate_right(17));
            let c02 = w0 ^ w2.wrapping_add(c).rotate_right(11);
            d ^= a.wrapping_add(w0).rotate_right(3);
            c ^= b.wrapping_add(w1).rotate_right(7);
            b = PRIME32_1.wrapping_mul(c02.wrapping_add(w3));
            a = PRIME32_0.wrapping_mul(d13 ^ w2);
            if off >= detent {
                break;
            }
        }

        c = c.wrapping_add(a);
        d = d.wrapping_add(b);
        a ^= PRIME32_6.wrapping_mul(c.rotate_right(16).wrapping_add(d));
        b ^= PRIME32_5.wrapping_mul(c.wrapping_add(d.rotate_right(16)));

        len &= 15;
    }

    if len >= 13 {
        mixup32(&mut a, &mut b, fetch32::<BE_OUT>(data, off), PRIME32_4);
        off += 4;
    }
    if len >= 9 {
        mixup32(&mut b, &mut a, fetch32::<BE_OUT>(data, off), PRIME32_3);
        off += 4;
    }
    if len >= 5 {
        mixup32(&mut a, &mut b, fetch32::<BE_OUT>(data, off), PRIME32_2);
        off += 4;
    }
    if len >= 1 {
        mixup32(&mut b, &mut a, tail32::<BE_OUT>(data, off, len), PRIME32_1);
    }
    final32(a, b)
}

// t1ha1.

/// XOR of the high and low parts of the full 128-bit product.
#[inline]
fn mux64(v: u64, prime: u64) -> u64 {
    let (l, h) = mult64_128(v, prime);
    l ^ h
}

/// xor-mul-xor mixer.
#[inline]
fn mix64(v: u64, p: u64) -> u64 {
    let v = v.wrapping_mul(p);
    v ^ v.rotate_right(41)
}

#[inline]
fn final_weak_avalanche(a: u64, b: u64) -> u64 {
    mux64(a.wrapping_add(b).rotate_right(17), PRIME_4).wrapping_add(mix64(a ^ b, PRIME_0))
}

fn t1ha1_impl<const BE_OUT: bool>(data: &[u8], mut len: usize, seed: u64) -> u64 {
    let mut a = seed;
    let mut b = len as u64;
    let mut off = 0usize;

    if len > 32 {
        let mut c = (len as u64).rotate_right(17).wrapping_add(seed);
        let mut d = (len as u64) ^ seed.rotate_right(17);
        let detent = len - 31;
        loop {
            let w0 = fetch64::<BE_OUT>(data, off);
            let w1 = fetch64::<BE_OUT>(data, off + 8);
            let w2 = fetch64::<BE_OUT>(data, off + 16);
            let w3 = fetch64::<BE_OUT>(data, off + 24);
            off += 32;

            let d02 = w0 ^ w2.wrapping_add(d).rotate_right(17);
            let c13 = w1 ^ w3.wrapping_add(c).rotate_right(17);
            d = d.wrapping_sub(b ^ w1.rotate_right(31));
            c = c.wrapping_add(a ^ w0.rotate_right(41));
            b ^= PRIME_0.wrapping_mul(c13.wrapping_add(w2));
            a ^= PRIME_1.wrapping_mul(d02.wrapping_add(w3));
            if off >= detent {
                break;
            }
        }

        a ^= PRIME_6.wrapping_mul(c.rotate_right(17).wrapping_add(d));
        b ^= PRIME_5.wrapping_mul(c.wrapping_add(d.rotate_right(17)));
        len &= 31;
    }

    if len >= 25 {
        b = b.wrapping_add(mux64(fetch64::<BE_OUT>(data, off), PRIME_4));
        off += 8;
    }
    if len >= 17 {
        a = a.wrapping_add(mux64(fetch64::<BE_OUT>(data, off), PRIME_3));
        off += 8;
    }
    if len >= 9 {
        b = b.wrapping_add(mux64(fetch64::<BE_OUT>(data, off), PRIME_2));
        off += 8;
    }
    if len >= 1 {
        a = a.wrapping_add(mux64(tail64::<BE_OUT>(data, off, len), PRIME_1));
    }
    final_weak_avalanche(a, b)
}

// t1ha2. State words a, b, c, d.

#[derive(Clone, Copy)]
struct State256 {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl State256 {
    fn init_ab(x: u64, y: u64) -> State256 {
        State256 {
            a: x,
            b: y,
            c: 0,
            d: 0,
        }
    }

    fn init_cd(&mut self, x: u64, y: u64) {
        self.c = y.rotate_right(23).wrapping_add(!x);
        self.d = (!y).wrapping_add(x.rotate_right(19));
    }

    fn squash(&mut self) {
        self.a ^= PRIME_6.wrapping_mul(self.c.wrapping_add(self.d.rotate_right(23)));
        self.b ^= PRIME_5.wrapping_mul(self.c.rotate_right(19).wrapping_add(self.d));
    }
}

#[inline]
fn mixup64(a: &mut u64, b: &mut u64, v: u64, prime: u64) {
    let (l, h) = mult64_128(b.wrapping_add(v), prime);
    *a ^= l;
    *b = b.wrapping_add(h);
}

#[inline]
fn final64(a: u64, b: u64) -> u64 {
    let x = a.wrapping_add(b.rotate_right(41)).wrapping_mul(PRIME_0);
    let y = a.rotate_right(23).wrapping_add(b).wrapping_mul(PRIME_6);
    mux64(x ^ y, PRIME_5)
}

fn final128(mut a: u64, mut b: u64, mut c: u64, mut d: u64) -> (u64, u64) {
    mixup64(&mut a, &mut b, c.rotate_right(41) ^ d, PRIME_0);
    mixup64(&mut b, &mut c, d.rotate_right(23) ^ a, PRIME_6);
    mixup64(&mut c, &mut d, a.rotate_right(19) ^ b, PRIME_5);
    mixup64(&mut d, &mut a, b.rotate_right(31) ^ c, PRIME_4);
    (a ^ b, c.wrapping_add(d))
}

fn t1ha2_update_block<const BE_OUT: bool>(s: &mut State256, v: &[u8], off: usize) {
    let w0 = fetch64::<BE_OUT>(v, off);
    let w1 = fetch64::<BE_OUT>(v, off + 8);
    let w2 = fetch64::<BE_OUT>(v, off + 16);
    let w3 = fetch64::<BE_OUT>(v, off + 24);

    let d02 = w0.wrapping_add(w2.wrapping_add(s.d).rotate_right(56));
    let c13 = w1.wrapping_add(w3.wrapping_add(s.c).rotate_right(19));

    s.d ^= s.b.wrapping_add(w1.rotate_right(38));
    s.c ^= s.a.wrapping_add(w0.rotate_right(57));
    s.b ^= PRIME_6.wrapping_mul(c13.wrapping_add(w2));
    s.a ^= PRIME_5.wrapping_mul(d02.wrapping_add(w3));
}

// Consume 32-byte blocks; returns the new offset.
fn t1ha2_loop<const BE_OUT: bool>(s: &mut State256, data: &[u8], mut off: usize, len: usize) -> usize {
    let detent = off + len - 31;
    loop {
        t1ha2_update_block::<BE_OUT>(s, data, off);
        off += 32;
        if off >= detent {
            break;
        }
    }
    off
}

fn t1ha2_tail<const BE_OUT: bool, const USE_ABCD: bool>(
    s: &mut State256,
    data: &[u8],
    mut off: usize,
    len: usize,
) -> (u64, u64) {
    if len >= 25 {
        if USE_ABCD {
            let (mut a, mut d) = (s.a, s.d);
            mixup64(&mut a, &mut d, fetch64::<BE_OUT>(data, off), PRIME_4);
            s.a = a;
            s.d = d;
        } else {
            let (mut a, mut b) = (s.a, s.b);
            mixup64(&mut a, &mut b, fetch64::<BE_OUT>(data, off), PRIME_4);
            s.a = a;
            s.b = b;
        }
        off += 8;
    }
    if len >= 17 {
        // ".b, .a" for either layout.
        let (mut b, mut a) = (s.b, s.a);
        mixup64(&mut b, &mut a, fetch64::<BE_OUT>(data, off), PRIME_3);
        s.b = b;
        s.a = a;
        off += 8;
    }
    if len >= 9 {
        if USE_ABCD {
            let (mut c, mut b) = (s.c, s.b);
            mixup64(&mut c, &mut b, fetch64::<BE_OUT>(data, off), PRIME_2);
            s.c = c;
            s.b = b;
        } else {
            let (mut a, mut b) = (s.a, s.b);
            mixup64(&mut a, &mut b, fetch64::<BE_OUT>(data, off), PRIME_2);
            s.a = a;
            s.b = b;
        }
        off += 8;
    }
    if len >= 1 {
        let val = tail64::<BE_OUT>(data, off, len);
        if USE_ABCD {
            let (mut d, mut c) = (s.d, s.c);
            mixup64(&mut d, &mut c, val, PRIME_1);
            s.d = d;
            s.c = c;
        } else {
            let (mut b, mut a) = (s.b, s.a);
            mixup64(&mut b, &mut a, val, PRIME_1);
            s.b = b;
            s.a = a;
        }
    }
    if USE_ABCD {
        final128(s.a, s.b, s.c, s.d)
    } else {
        (final64(s.a, s.b), 0)
    }
}

fn t1ha2_oneshot<const BE_OUT: bool, const XWIDTH: bool>(
    data: &[u8],
    len: usize,
    seed: u64,
) -> (u64, u64) {
    let mut state = State256::init_ab(seed, len as u64);
    let mut off = 0usize;
    let mut length = len;

    if length > 32 {
        state.init_cd(seed, len as u64);
        off = t1ha2_loop::<BE_OUT>(&mut state, data, 0, length);
        if !XWIDTH {
            state.squash();
        }
        length &= 31;
    } else if XWIDTH {
        state.init_cd(seed, len as u64);
    }
    t1ha2_tail::<BE_OUT, XWIDTH>(&mut state, data, off, length)
}

/// Streaming t1ha2.
///
/// Buffers input in 32-byte blocks; `finish`/`finish128` append the
/// length tag and run the tail round. Finishing consumes the context.
/// Splitting input across any sequence of `update` calls produces the
/// same digest as one call with the concatenation.
pub struct T1ha2Context<const BE_OUT: bool = false> {
    state: State256,
    buffer: [u8; 32],
    partial: usize,
    total: u64,
}

impl<const BE_OUT: bool> T1ha2Context<BE_OUT> {
    #[must_use]
    pub fn new(seed_x: u64, seed_y: u64) -> Self {
        let mut state = State256::init_ab(seed_x, seed_y);
        state.init_cd(seed_x, seed_y);
        T1ha2Context {
            state,
            buffer: [0; 32],
            partial: 0,
            total: 0,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut length = data.len();
        let mut off = 0usize;
        self.total = self.total.wrapping_add(length as u64);

        if self.partial != 0 {
            let left = 32 - self.partial;
            let chunk = length.min(left);
            self.buffer[self.partial..self.partial + chunk].copy_from_slice(&data[..chunk]);
            self.partial += chunk;
            if self.partial < 32 {
                return;
            }
            self.partial = 0;
            off += chunk;
            length -= chunk;
            let buf = self.buffer;
            t1ha2_update_block::<BE_OUT>(&mut self.state, &buf, 0);
        }

        while length >= 32 {
            t1ha2_update_block::<BE_OUT>(&mut self.state, data, off);
            off += 32;
            length -= 32;
        }

        if length > 0 {
            self.buffer[..length].copy_from_slice(&data[off..off + length]);
            self.partial = length;
        }
    }

    fn finalize(mut self, xwidth: bool) -> (u64, u64) {
        // The length tag is always appended as little-endian bytes.
        let bits = ((self.total << 3) ^ (1u64 << 63)).to_le_bytes();
        self.update(&bits);

        let buf = self.buffer;
        let partial = self.partial;
        if xwidth {
            t1ha2_tail::<BE_OUT, true>(&mut self.state, &buf, 0, partial)
        } else {
            self.state.squash();
            t1ha2_tail::<BE_OUT, false>(&mut self.state, &buf, 0, partial)
        }
    }

    #[must_use]
    pub fn finish(self) -> u64 {
        self.finalize(false).0
    }

    #[must_use]
    pub fn finish128(self) -> (u64, u64) {
        self.finalize(true)
    }
}

// Registered entry points. The published hashes self-test with the
// seed used twice at init; production seeding uses it once.

fn t1ha0<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let hash = if BSWAP != is_be() {
        t1ha0_impl::<true>(input, len, seed)
    } else {
        t1ha0_impl::<false>(input, len, seed)
    };
    put_u64::<BSWAP>(hash, out, 0);
}

fn t1ha1<const BSWAP: bool>(input: &[u8], len: usize, seed: u64, out: &mut [u8]) {
    let hash = if BSWAP != is_be() {
        t1ha1_impl::<true>(input, len, seed)
    } else {
        t1ha1_impl::<false>(input, len, seed)
    };
    put_u64::<BSWAP>(hash, out, 0);
}

fn t1ha2<const BSWAP: bool, const XWIDTH: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let (hash, xhash) = if BSWAP != is_be() {
        t1ha2_oneshot::<true, XWIDTH>(input, len, seed)
    } else {
        t1ha2_oneshot::<false, XWIDTH>(input, len, seed)
    };
    put_u64::<BSWAP>(hash, out, 0);
    if XWIDTH {
        put_u64::<BSWAP>(xhash, out, 8);
    }
}

fn t1ha2_incr_run<const BE_OUT: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    xwidth: bool,
    selftest_seeding: bool,
) -> (u64, u64) {
    let mut ctx: T1ha2Context<BE_OUT> =
        T1ha2Context::new(seed, if selftest_seeding { seed } else { 0 });
    ctx.update(&input[..len]);
    ctx.finalize(xwidth)
}

fn t1ha2_incr<const BSWAP: bool, const XWIDTH: bool, const SELFTEST_SEEDING: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let (hash, xhash) = if BSWAP != is_be() {
        t1ha2_incr_run::<true>(input, len, seed, XWIDTH, SELFTEST_SEEDING)
    } else {
        t1ha2_incr_run::<false>(input, len, seed, XWIDTH, SELFTEST_SEEDING)
    };
    put_u64::<BSWAP>(hash, out, 0);
    if XWIDTH {
        put_u64::<BSWAP>(xhash, out, 8);
    }
}

// Published known-answer tables (81 probes each).

const TEST_PATTERN: [u8; 64] = [
    0, 1, 2, 3, 4, 5, 6, 7, 0xFF, 0x7F, 0x3F, 0x1F, 0xF, 8, 16, 32, 64, 0x80, 0xFE, 0xFC, 0xF8,
    0xF0, 0xE0, 0xC0, 0xFD, 0xFB, 0xF7, 0xEF, 0xDF, 0xBF, 0x55, 0xAA, 11, 17, 19, 23, 29, 37, 42,
    43, b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j', b'k', b'l', b'm', b'n', b'o',
    b'p', b'q', b'r', b's', b't', b'u', b'v', b'w', b'x',
];

use super::t1ha_refvals::{
    REFVAL_2ATONCE, REFVAL_2ATONCE128, REFVAL_2STREAM, REFVAL_2STREAM128, REFVAL_32BE,
    REFVAL_32LE, REFVAL_64BE, REFVAL_64LE,
};

fn selfcheck(hash: crate::descriptor::HashFn, reference: &[u64; 81], bswap_out: bool) -> bool {
    let mut refs = reference.iter();
    let mut failed = false;
    // A 16-byte scratch covers both 64- and 128-bit variants; only the
    // first 8 output bytes are probed.
    let mut check = |data: &[u8], len: usize, seed: u64| {
        let mut result = [0u8; 16];
        hash(data, len, seed, &mut result);
        let actual = if bswap_out {
            get_u64::<true>(&result, 0)
        } else {
            get_u64::<false>(&result, 0)
        };
        if actual != *refs.next().unwrap_or(&0) {
            failed = true;
        }
    };

    let empty: [u8; 16] = [0; 16];
    check(&empty, 0, 0);
    check(&empty, 0, !0u64);
    check(&TEST_PATTERN, 64, 0);

    let mut seed = 1u64;
    for i in 1..64 {
        check(&TEST_PATTERN, i, seed);
        seed <<= 1;
    }

    seed = !0u64;
    for i in 1..=7usize {
        seed <<= 1;
        check(&TEST_PATTERN[i..], 64 - i, seed);
    }

    let mut pattern_long = [0u8; 512];
    for (i, b) in pattern_long.iter_mut().enumerate() {
        *b = i as u8;
    }
    for i in 0..=7usize {
        check(&pattern_long[i..], 128 + i * 17, seed);
    }

    !failed
}

fn t1ha0_selftest() -> bool {
    let (le_fn, be_fn): (crate::descriptor::HashFn, crate::descriptor::HashFn) = if is_le() {
        (t1ha0::<false>, t1ha0::<true>)
    } else {
        (t1ha0::<true>, t1ha0::<false>)
    };
    selfcheck(le_fn, &REFVAL_32LE, is_be()) && selfcheck(be_fn, &REFVAL_32BE, is_le())
}

fn t1ha1_selftest() -> bool {
    let (le_fn, be_fn): (crate::descriptor::HashFn, crate::descriptor::HashFn) = if is_le() {
        (t1ha1::<false>, t1ha1::<true>)
    } else {
        (t1ha1::<true>, t1ha1::<false>)
    };
    selfcheck(le_fn, &REFVAL_64LE, is_be()) && selfcheck(be_fn, &REFVAL_64BE, is_le())
}

fn t1ha2_selftest() -> bool {
    let (f64_le, f128_le): (crate::descriptor::HashFn, crate::descriptor::HashFn) = if is_le() {
        (t1ha2::<false, false>, t1ha2::<false, true>)
    } else {
        (t1ha2::<true, false>, t1ha2::<true, true>)
    };
    selfcheck(f64_le, &REFVAL_2ATONCE, is_be()) && selfcheck(f128_le, &REFVAL_2ATONCE128, is_be())
}

fn t1ha2_incr_selftest() -> bool {
    let (f64_le, f128_le): (crate::descriptor::HashFn, crate::descriptor::HashFn) = if is_le() {
        (
            t1ha2_incr::<false, false, true>,
            t1ha2_incr::<false, true, true>,
        )
    } else {
        (
            t1ha2_incr::<true, false, true>,
            t1ha2_incr::<true, true, true>,
        )
    };
    selfcheck(f64_le, &REFVAL_2STREAM, is_be()) && selfcheck(f128_le, &REFVAL_2STREAM128, is_be())
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "t1ha",
        src_url: Some(
            "https://web.archive.org/web/20211209095620/https://github.com/erthink/t1ha",
        ),
        src_status: SrcStatus::Frozen,
    });

    reg.add(
        HashDescriptor::new("t1ha0", "t1ha", 64, t1ha0::<false>, t1ha0::<true>)
            .desc("Fast Positive Hash #0 (portable, 32-bit core)")
            .impl_name("portable")
            .impl_flags(
                ImplFlags::READ_PAST_EOB
                    | ImplFlags::MULTIPLY
                    | ImplFlags::ROTATE
                    | ImplFlags::LICENSE_ZLIB,
            )
            .verification(0x7F7D7B29, 0x6B552A17)
            .init(t1ha0_selftest),
    );

    reg.add(
        HashDescriptor::new("t1ha1", "t1ha", 64, t1ha1::<false>, t1ha1::<true>)
            .desc("Fast Positive Hash #1 (portable, 64-bit core)")
            .impl_name("portable")
            .impl_flags(
                ImplFlags::READ_PAST_EOB
                    | ImplFlags::MULTIPLY_64_128
                    | ImplFlags::ROTATE
                    | ImplFlags::LICENSE_ZLIB,
            )
            .verification(0xD6836381, 0xB895E54F)
            .init(t1ha1_selftest),
    );

    reg.add(
        HashDescriptor::new(
            "t1ha2_64",
            "t1ha",
            64,
            t1ha2::<false, false>,
            t1ha2::<true, false>,
        )
        .desc("Fast Positive Hash #2 (portable, 64-bit core)")
        .impl_name("portable")
        .impl_flags(
            ImplFlags::READ_PAST_EOB
                | ImplFlags::TYPE_PUNNING
                | ImplFlags::MULTIPLY_64_128
                | ImplFlags::ROTATE
                | ImplFlags::LICENSE_ZLIB,
        )
        .verification(0x8F16C948, 0x061CB08C)
        .init(t1ha2_selftest),
    );

    reg.add(
        HashDescriptor::new(
            "t1ha2_128",
            "t1ha",
            128,
            t1ha2::<false, true>,
            t1ha2::<true, true>,
        )
        .desc("Fast Positive Hash #2 (portable, 64-bit core, 128-bit output)")
        .impl_name("portable")
        .impl_flags(
            ImplFlags::READ_PAST_EOB
                | ImplFlags::TYPE_PUNNING
                | ImplFlags::MULTIPLY_64_128
                | ImplFlags::ROTATE
                | ImplFlags::LICENSE_ZLIB,
        )
        .verification(0xB44C43A1, 0x95EB2DA8)
        .init(t1ha2_selftest),
    );

    reg.add(
        HashDescriptor::new(
            "t1ha2_64_incr",
            "t1ha",
            64,
            t1ha2_incr::<false, false, false>,
            t1ha2_incr::<true, false, false>,
        )
        .desc("Fast Positive Hash #2 (portable, 64-bit core, incremental version)")
        .impl_name("portable")
        .impl_flags(
            ImplFlags::READ_PAST_EOB
                | ImplFlags::TYPE_PUNNING
                | ImplFlags::MULTIPLY_64_128
                | ImplFlags::ROTATE
                | ImplFlags::INCREMENTAL
                | ImplFlags::INCREMENTAL_DIFFERENT
                | ImplFlags::LICENSE_ZLIB,
        )
        .verification(0xDED9B580, 0xB355A009)
        .init(t1ha2_incr_selftest),
    );

    reg.add(
        HashDescriptor::new(
            "t1ha2_128_incr",
            "t1ha",
            128,
            t1ha2_incr::<false, true, false>,
            t1ha2_incr::<true, true, false>,
        )
        .desc("Fast Positive Hash #2 (portable, 64-bit core, incremental, 128-bit output)")
        .impl_name("portable")
        .impl_flags(
            ImplFlags::READ_PAST_EOB
                | ImplFlags::TYPE_PUNNING
                | ImplFlags::MULTIPLY_64_128
                | ImplFlags::ROTATE
                | ImplFlags::INCREMENTAL
                | ImplFlags::INCREMENTAL_DIFFERENT
                | ImplFlags::LICENSE_ZLIB,
        )
        .verification(0xE929E756, 0x3898932B)
        .init(t1ha2_incr_selftest),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_selftests_pass() {
        assert!(t1ha0_selftest());
        assert!(t1ha1_selftest());
        assert!(t1ha2_selftest());
        assert!(t1ha2_incr_selftest());
    }

    #[test]
    fn incremental_matches_oneshot_for_any_split() {
        let data = vec![0x5Au8; 256];
        let (one, onex) = {
            let mut ctx: T1ha2Context = T1ha2Context::new(42, 42);
            ctx.update(&data);
            ctx.finalize(true)
        };
        for split in [1usize, 7, 31, 32, 33, 200] {
            let mut ctx: T1ha2Context = T1ha2Context::new(42, 42);
            ctx.update(&data[..split]);
            ctx.update(&data[split..]);
            let (lo, hi) = ctx.finalize(true);
            assert_eq!((lo, hi), (one, onex), "split at {split}");
        }
    }

    #[test]
    fn incremental_64_matches_for_many_chunkings() {
        let data: Vec<u8> = (0..500u32).map(|i| (i * 13) as u8).collect();
        let expect = {
            let mut ctx: T1ha2Context = T1ha2Context::new(7, 0);
            ctx.update(&data);
            ctx.finish()
        };
        for chunk in [1usize, 3, 8, 29, 32, 64, 100] {
            let mut ctx: T1ha2Context = T1ha2Context::new(7, 0);
            for piece in data.chunks(chunk) {
                ctx.update(piece);
            }
            assert_eq!(ctx.finish(), expect, "chunk size {chunk}");
        }
    }

    #[test]
    fn registered_incremental_seeds_differently_from_selftest() {
        // The production registration seeds (seed, 0); the published
        // KAT tables use (seed, seed).
        let data = TEST_PATTERN;
        let mut prod = [0u8; 8];
        let mut kat = [0u8; 8];
        t1ha2_incr::<false, false, false>(&data, 64, 3, &mut prod);
        t1ha2_incr::<false, false, true>(&data, 64, 3, &mut kat);
        assert_ne!(prod, kat);
    }
}
