//! MuseAir v0.3.
//!
//! Six-lane long-input core with a "mumix" multiply-xor step and a
//! rotation-keyed epilogue; constants are AiryAi(0) mantissas. Four
//! registrations: standard and bfast flavors at 64 and 128 bits. The
//! bfast flavor overwrites state with the product instead of folding it
//! back in.

use crate::bits::{get_u32, get_u64, is_be, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus};
use crate::mathmult::mult64_128;
use crate::registry::RegistryBuilder;

const CONSTANT: [u64; 7] = [
    0x5ae31e589c56e17a,
    0x96d7bb04e64f6da9,
    0x7ab1006b26f9eb64,
    0x21233394220b8457,
    0x047cb9557c9f3b43,
    0xd24f2590c0bcee28,
    0x33ea8f71bb6016d8,
];

fn read_short<const BSWAP: bool>(bytes: &[u8], base: usize, len: usize) -> (u64, u64) {
    if len >= 4 {
        let off = (len & 24) >> (len >> 3); // len >= 8 ? 4 : 0
        let i = (u64::from(get_u32::<BSWAP>(bytes, base)) << 32)
            | u64::from(get_u32::<BSWAP>(bytes, base + len - 4));
        let j = (u64::from(get_u32::<BSWAP>(bytes, base + off)) << 32)
            | u64::from(get_u32::<BSWAP>(bytes, base + len - 4 - off));
        (i, j)
    } else if len > 0 {
        let i = (u64::from(bytes[base]) << 48)
            | (u64::from(bytes[base + (len >> 1)]) << 24)
            | u64::from(bytes[base + len - 1]);
        (i, 0)
    } else {
        (0, 0)
    }
}

#[inline]
fn mumix<const BFAST: bool>(state_p: &mut u64, state_q: &mut u64, input_p: u64, input_q: u64) {
    if BFAST {
        let (lo, hi) = mult64_128(*state_p ^ input_p, *state_q ^ input_q);
        *state_p = lo;
        *state_q = hi;
    } else {
        *state_p ^= input_p;
        *state_q ^= input_q;
        let (lo, hi) = mult64_128(*state_p, *state_q);
        *state_p ^= lo;
        *state_q ^= hi;
    }
}

fn hash_short<const BSWAP: bool, const BFAST: bool, const B128: bool>(
    bytes: &[u8],
    len: usize,
    seed: u64,
) -> (u64, u64) {
    let (lo2, hi2) = mult64_128(seed ^ CONSTANT[0], len as u64 ^ CONSTANT[1]);

    let (mut i, mut j) = read_short::<BSWAP>(bytes, 0, len.min(16));
    i ^= len as u64 ^ lo2;
    j ^= seed ^ hi2;

    if len > 16 {
        let (u, v) = read_short::<BSWAP>(bytes, 16, len - 16);
        let (lo0, hi0) = mult64_128(CONSTANT[2], CONSTANT[3] ^ u);
        let (lo1, hi1) = mult64_128(CONSTANT[4], CONSTANT[5] ^ v);
        i ^= lo0 ^ hi1;
        j ^= lo1 ^ hi0;
    }

    if B128 {
        let (lo0, hi0) = mult64_128(i, j);
        let (lo1, hi1) = mult64_128(i ^ CONSTANT[2], j ^ CONSTANT[3]);
        let i = lo0 ^ hi1;
        let j = lo1 ^ hi0;
        let (lo0, hi0) = mult64_128(i, j);
        let (lo1, hi1) = mult64_128(i ^ CONSTANT[4], j ^ CONSTANT[5]);
        (lo0 ^ hi1, lo1 ^ hi0)
    } else {
        let (lo2, hi2) = mult64_128(i ^ CONSTANT[2], j ^ CONSTANT[3]);
        if BFAST {
            i = lo2;
            j = hi2;
        } else {
            i ^= lo2;
            j ^= hi2;
        }
        let (lo2, hi2) = mult64_128(i ^ CONSTANT[4], j ^ CONSTANT[5]);
        if BFAST {
            (lo2 ^ hi2, 0)
        } else {
            (i ^ j ^ lo2 ^ hi2, 0)
        }
    }
}

fn hash_loong<const BSWAP: bool, const BFAST: bool, const B128: bool>(
    bytes: &[u8],
    len: usize,
    seed: u64,
) -> (u64, u64) {
    let mut off = 0usize;
    let mut q = len;

    let mut lo5 = CONSTANT[6];

    let mut state = [
        CONSTANT[0].wrapping_add(seed),
        CONSTANT[1].wrapping_sub(seed),
        CONSTANT[2] ^ seed,
        CONSTANT[3].wrapping_add(seed),
        CONSTANT[4].wrapping_sub(seed),
        CONSTANT[5] ^ seed,
    ];

    if q >= 96 {
        while q >= 96 {
            let mut lanes = [0u64; 12];
            for (k, lane) in lanes.iter_mut().enumerate() {
                *lane = get_u64::<BSWAP>(bytes, off + 8 * k);
            }

            // Ring pass: each state word absorbs two lanes and the
            // previous product's low word.
            let mut prev_lo = lo5;
            for s in 0..6 {
                let next = (s + 1) % 6;
                state[s] ^= lanes[2 * s];
                state[next] ^= lanes[2 * s + 1];
                let (lo, hi) = mult64_128(state[s], state[next]);
                if BFAST {
                    state[s] = prev_lo ^ hi;
                } else {
                    state[s] = state[s].wrapping_add(prev_lo ^ hi);
                }
                prev_lo = lo;
            }
            lo5 = prev_lo;

            off += 96;
            q -= 96;
        }
        state[0] ^= lo5;
    }

    if q >= 48 {
        {
            let (s0, s1) = state.split_at_mut(1);
            mumix::<BFAST>(
                &mut s0[0],
                &mut s1[0],
                get_u64::<BSWAP>(bytes, off),
                get_u64::<BSWAP>(bytes, off + 8),
            );
        }
        {
            let (s2, s3) = state.split_at_mut(3);
            mumix::<BFAST>(
                &mut s2[2],
                &mut s3[0],
                get_u64::<BSWAP>(bytes, off + 16),
                get_u64::<BSWAP>(bytes, off + 24),
            );
        }
        {
            let (s4, s5) = state.split_at_mut(5);
            mumix::<BFAST>(
                &mut s4[4],
                &mut s5[0],
                get_u64::<BSWAP>(bytes, off + 32),
                get_u64::<BSWAP>(bytes, off + 40),
            );
        }
        off += 48;
        q -= 48;
    }

    if q >= 16 {
        let (a, b) = state.split_at_mut(3);
        mumix::<BFAST>(
            &mut a[0],
            &mut b[0],
            get_u64::<BSWAP>(bytes, off),
            get_u64::<BSWAP>(bytes, off + 8),
        );
        if q >= 32 {
            mumix::<BFAST>(
                &mut a[1],
                &mut b[1],
                get_u64::<BSWAP>(bytes, off + 16),
                get_u64::<BSWAP>(bytes, off + 24),
            );
        }
    }

    {
        let (a, b) = state.split_at_mut(3);
        mumix::<BFAST>(
            &mut a[2],
            &mut b[2],
            get_u64::<BSWAP>(bytes, off + q - 16),
            get_u64::<BSWAP>(bytes, off + q - 8),
        );
    }

    // Epilogue.
    let mut i = state[0].wrapping_sub(state[1]);
    let mut j = state[2].wrapping_sub(state[3]);
    let mut k = state[4].wrapping_sub(state[5]);

    let rot = (len & 63) as u32;
    i = i.rotate_left(rot);
    j = j.rotate_right(rot);
    k ^= len as u64;

    let (lo0, hi0) = mult64_128(i, j);
    let (lo1, hi1) = mult64_128(j, k);
    let (lo2, hi2) = mult64_128(k, i);
    i = lo0 ^ hi2;
    j = lo1 ^ hi0;
    k = lo2 ^ hi1;

    let (lo0, hi0) = mult64_128(i, j);
    let (lo1, hi1) = mult64_128(j, k);
    let (lo2, hi2) = mult64_128(k, i);

    if B128 {
        (lo0 ^ lo1 ^ hi2, hi0 ^ hi1 ^ lo2)
    } else {
        (
            (lo0 ^ hi2)
                .wrapping_add(lo1 ^ hi0)
                .wrapping_add(lo2 ^ hi1),
            0,
        )
    }
}

fn museair<const BSWAP: bool, const BFAST: bool, const B128: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let (out_lo, out_hi) = if len <= 32 {
        hash_short::<BSWAP, BFAST, B128>(input, len, seed)
    } else {
        hash_loong::<BSWAP, BFAST, B128>(input, len, seed)
    };

    // Canonical little-endian output on every host.
    put_u64::<false>(if is_be() { out_lo.swap_bytes() } else { out_lo }, out, 0);
    if B128 {
        put_u64::<false>(if is_be() { out_hi.swap_bytes() } else { out_hi }, out, 8);
    }
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "museair",
        src_url: Some("https://github.com/eternal-io/museair/"),
        src_status: SrcStatus::Active,
    });

    let flags = ImplFlags::MULTIPLY_64_128
        | ImplFlags::ROTATE_VARIABLE
        | ImplFlags::CANONICAL_LE
        | ImplFlags::LICENSE_PUBLIC_DOMAIN;

    reg.add(
        HashDescriptor::new(
            "MuseAir",
            "museair",
            64,
            museair::<false, false, false>,
            museair::<true, false, false>,
        )
        .desc("MuseAir v0.3")
        .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(flags)
        .verification(0xF89F1683, 0xDFEF2570),
    );

    reg.add(
        HashDescriptor::new(
            "MuseAir_bfast",
            "museair",
            64,
            museair::<false, true, false>,
            museair::<true, true, false>,
        )
        .desc("MuseAir v0.3, bfast version")
        .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(flags)
        .verification(0xC61BEE56, 0x16186D00),
    );

    reg.add(
        HashDescriptor::new(
            "MuseAir_128",
            "museair",
            128,
            museair::<false, false, true>,
            museair::<true, false, true>,
        )
        .desc("MuseAir v0.3, 128 bits")
        .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(flags)
        .verification(0xD3DFE238, 0x05EC3BE4),
    );

    reg.add(
        HashDescriptor::new(
            "MuseAir_128_bfast",
            "museair",
            128,
            museair::<false, true, true>,
            museair::<true, true, true>,
        )
        .desc("MuseAir v0.3, 128 bits, bfast version")
        .hash_flags(HashFlags::ENDIAN_INDEPENDENT)
        .impl_flags(flags)
        .verification(0x27939BF1, 0xCB4AB283),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reader_offset_rule() {
        // (len & 24) >> (len >> 3) selects 4 once a full word exists.
        let buf: Vec<u8> = (0..32).collect();
        let (i4, _) = read_short::<false>(&buf, 0, 4);
        let (i8, j8) = read_short::<false>(&buf, 0, 8);
        assert_ne!(i4, i8);
        assert_ne!(j8, 0);
    }

    #[test]
    fn short_and_long_paths_meet_at_32_33() {
        let buf = vec![0x9Du8; 64];
        let s = hash_short::<false, false, false>(&buf, 32, 1);
        let l = hash_loong::<false, false, false>(&buf, 33, 1);
        assert_ne!(s.0, l.0);
    }

    #[test]
    fn bfast_and_standard_disagree() {
        let buf = vec![0x31u8; 100];
        assert_ne!(
            hash_loong::<false, false, false>(&buf, 100, 0).0,
            hash_loong::<false, true, false>(&buf, 100, 0).0
        );
    }

    #[test]
    fn output_is_length_keyed() {
        let buf = vec![0u8; 200];
        let mut prev = None;
        for n in [33usize, 48, 64, 95, 96, 97, 144, 192] {
            let h = hash_loong::<false, false, true>(&buf, n, 0);
            assert_ne!(Some(h), prev);
            prev = Some(h);
        }
    }
}
