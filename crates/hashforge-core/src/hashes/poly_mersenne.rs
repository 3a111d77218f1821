//! Polynomial hashing mod the Mersenne prime 2^61 - 1.
//!
//! A degree-K polynomial in a random point, with K in 1..=4 registered
//! separately. The random parameters are drawn per seed by a FreeBSD
//! rand()-style LCG so results are stable across platforms; the derived
//! parameters live in thread-local state and the hash ignores its seed
//! argument.

use std::cell::Cell;

use crate::bits::{cond_bswap64, get_u16, get_u32};
use crate::descriptor::{
    FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus, exclude_bad_seeds,
};
use crate::mathmult::fma64_128;
use crate::registry::RegistryBuilder;

const MERSENNE_61: u64 = (1 << 61) - 1;
const MAX_K: usize = 4;

// Park-Miller x = (7^5 * x) mod (2^31 - 1), via the 127773/2836
// schedule. The state is kept unsigned the whole way; the classical
// negative-wrap correction never fires on an unsigned value, and the
// next call's reduction renormalizes instead.
fn bsd_rand(state: &mut u64) -> u32 {
    let x = (*state % 0x7ffffffe) + 1;
    let hi = x / 127773;
    let lo = x % 127773;
    let x = 16807u64
        .wrapping_mul(lo)
        .wrapping_sub(2836u64.wrapping_mul(hi))
        .wrapping_sub(1);
    *state = x;
    x as u32
}

fn rand_u128(state: &mut u64) -> u128 {
    // At least 16 bits per draw are assumed, so eight draws are lapped
    // together 16 bits apart.
    let mut r = u128::from(bsd_rand(state));
    for _ in 0..7 {
        r <<= 16;
        r ^= u128::from(bsd_rand(state));
    }
    r
}

#[derive(Debug, Clone, Copy, Default)]
struct PolyMersenneState {
    random: [u64; MAX_K + 1],
    a: u64,
    b: u64,
}

thread_local! {
    static STATE: Cell<PolyMersenneState> = const { Cell::new(PolyMersenneState {
        random: [0; MAX_K + 1],
        a: 0,
        b: 0,
    }) };
}

fn seed_init(seed: u64) -> u64 {
    let mut rng = seed;
    let mut st = PolyMersenneState::default();
    // `a` must stay at most 2^60, or the lazy modular reduction in
    // combine61 can overflow.
    st.a = (rand_u128(&mut rng) % u128::from(MERSENNE_61 / 2)) as u64;
    st.b = (rand_u128(&mut rng) % u128::from(MERSENNE_61)) as u64;
    for slot in st.random.iter_mut() {
        *slot = (rand_u128(&mut rng) % u128::from(MERSENNE_61)) as u64;
    }
    STATE.with(|s| s.set(st));
    // The derived parameters live in thread-local state; the handle is
    // just a non-zero cookie.
    1
}

// a + h*x, lazily reduced mod 2^61-1 (result may exceed the prime by a
// little; callers finish the reduction at the end).
fn mult_combine61(h: u64, x: u64, a: u64) -> u64 {
    let mut rlo = a;
    let mut rhi = 0u64;
    fma64_128(&mut rlo, &mut rhi, h, x);

    rhi <<= 64 - 61;
    rhi |= rlo >> 61;
    rlo &= MERSENNE_61;

    rlo.wrapping_add(rhi)
}

fn poly_mersenne<const K: u32, const BSWAP: bool>(
    input: &[u8],
    len: usize,
    _seed: u64,
    out: &mut [u8],
) {
    let data = STATE.with(Cell::get);
    let a = data.a;

    // The length serves as the first character of the polynomial.
    let mut h = len as u64;
    let mut off = 0usize;

    for _ in 0..len / 4 {
        // Each round adds 32 bits and the partial reduction removes up
        // to 61, so the accumulator cannot overflow.
        h = mult_combine61(h, a, u64::from(get_u32::<BSWAP>(input, off)));
        off += 4;
    }

    let remaining = len % 4;
    if remaining != 0 {
        let mut last = 0u32;
        if remaining & 2 != 0 {
            last = u32::from(get_u16::<BSWAP>(input, off));
            off += 2;
        }
        if remaining & 1 != 0 {
            last = (last << 8) | u32::from(input[off]);
        }
        h = mult_combine61(h, a, u64::from(last));
    }

    // Lift the plain polynomial hash to K-independence with a second
    // polynomial over random coefficients.
    if K != 0 {
        let h0 = h;
        h = data.random[0];
        for i in 1..=(K as usize).min(MAX_K) {
            h = mult_combine61(h, h0, data.random[i]);
        }
    }

    if h >= MERSENNE_61 {
        h -= MERSENNE_61;
    }

    let h = cond_bswap64(h, BSWAP);
    out.copy_from_slice(&h.to_ne_bytes()[..4]);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "poly_mersenne",
        src_url: Some("https://github.com/rurban/smhasher/blob/master/Hashes.cpp"),
        src_status: SrcStatus::Frozen,
    });

    reg.add(
        HashDescriptor::new(
            "poly_mersenne_deg1",
            "poly_mersenne",
            32,
            poly_mersenne::<1, false>,
            poly_mersenne::<1, true>,
        )
        .desc("Degree 1 Hashing mod 2^61-1")
        .impl_name("int128")
        .hash_flags(HashFlags::LOOKUP_TABLE | HashFlags::SYSTEM_SPECIFIC)
        .impl_flags(
            ImplFlags::BITS128
                | ImplFlags::MULTIPLY_64_128
                | ImplFlags::LICENSE_BSD
                | ImplFlags::SLOW,
        )
        .verification(0x50526DA4, 0xBB8CF709)
        .seedprep(seed_init),
    );

    reg.add(
        HashDescriptor::new(
            "poly_mersenne_deg2",
            "poly_mersenne",
            32,
            poly_mersenne::<2, false>,
            poly_mersenne::<2, true>,
        )
        .desc("Degree 2 Hashing mod 2^61-1")
        .impl_name("int128")
        .hash_flags(HashFlags::SYSTEM_SPECIFIC)
        .impl_flags(
            ImplFlags::BITS128
                | ImplFlags::MULTIPLY_64_128
                | ImplFlags::LICENSE_BSD
                | ImplFlags::SLOW,
        )
        .verification(0xCDDDA91B, 0x9507D811)
        .seedprep(seed_init)
        .seedfix(exclude_bad_seeds)
        .badseeds(&[0x60e8512c]),
    );

    reg.add(
        HashDescriptor::new(
            "poly_mersenne_deg3",
            "poly_mersenne",
            32,
            poly_mersenne::<3, false>,
            poly_mersenne::<3, true>,
        )
        .desc("Degree 3 Hashing mod 2^61-1")
        .impl_name("int128")
        .hash_flags(HashFlags::SYSTEM_SPECIFIC)
        .impl_flags(
            ImplFlags::BITS128
                | ImplFlags::MULTIPLY_64_128
                | ImplFlags::LICENSE_BSD
                | ImplFlags::SLOW,
        )
        .verification(0x7D822707, 0x7273EB0A)
        .seedprep(seed_init)
        .seedfix(exclude_bad_seeds)
        .badseeds(&[0x3d25f745]),
    );

    reg.add(
        HashDescriptor::new(
            "poly_mersenne_deg4",
            "poly_mersenne",
            32,
            poly_mersenne::<4, false>,
            poly_mersenne::<4, true>,
        )
        .desc("Degree 4 Hashing mod 2^61-1")
        .impl_name("int128")
        .hash_flags(HashFlags::SYSTEM_SPECIFIC)
        .impl_flags(
            ImplFlags::BITS128
                | ImplFlags::MULTIPLY_64_128
                | ImplFlags::LICENSE_BSD
                | ImplFlags::SLOW,
        )
        .verification(0xBF0273E6, 0xAA526413)
        .seedprep(seed_init),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcg_stream_is_stable() {
        // First draws from a zero seed; the schedule starts from
        // x = (0 % 0x7ffffffe) + 1 = 1, so draw 1 is 16807 - 1.
        let mut state = 0u64;
        assert_eq!(bsd_rand(&mut state), 16806);
        // Next step: x = 16807, so 16807 * 16807 - 1.
        assert_eq!(bsd_rand(&mut state), 282475248);
    }

    #[test]
    fn derived_parameters_stay_in_field() {
        for seed in [0u64, 1, 42, u64::MAX] {
            seed_init(seed);
            let st = STATE.with(Cell::get);
            assert!(st.a < MERSENNE_61 / 2);
            assert!(st.b < MERSENNE_61);
            for r in st.random {
                assert!(r < MERSENNE_61);
            }
        }
    }

    #[test]
    fn combine61_is_congruent_mod_mersenne() {
        let cases = [
            (0u64, 0u64, 0u64),
            (123456789, 987654321, 555),
            (MERSENNE_61 - 1, MERSENNE_61 / 2 - 1, MERSENNE_61 - 1),
        ];
        for (h, x, a) in cases {
            let got = mult_combine61(h, x, a);
            let expect =
                ((u128::from(h) * u128::from(x) + u128::from(a)) % u128::from(MERSENNE_61)) as u64;
            assert_eq!(got % MERSENNE_61, expect);
        }
    }

    #[test]
    fn output_is_reduced_and_deterministic() {
        seed_init(99);
        let msg = b"polynomial hashing over mersenne primes";
        let mut out1 = [0u8; 4];
        let mut out2 = [0u8; 4];
        poly_mersenne::<2, false>(msg, msg.len(), 0, &mut out1);
        poly_mersenne::<2, false>(msg, msg.len(), 0, &mut out2);
        assert_eq!(out1, out2);
    }
}
