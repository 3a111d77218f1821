//! Tabulation hashing with a multiply-shift mixer.
//!
//! Thorup's scheme: a fast strongly-universal signature of the string
//! (blockwise multiply-shift folded with Mersenne-prime polynomial
//! combination), finished through per-byte lookup tables. The random
//! coefficients are derived per seed by a splitmix PRNG so results are
//! stable across platforms; hash quality is only as good as that RNG.

use std::cell::RefCell;

use crate::bits::{get_u16, get_u32, get_u64, put_u32, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, HashFlags, ImplFlags, SrcStatus};
use crate::registry::RegistryBuilder;

const CHAR_SIZE: usize = 8;
const BLOCK_SIZE: usize = 1 << 8;
const MERSENNE_31: u32 = (1 << 31) - 1;
const MERSENNE_61: u64 = (1 << 61) - 1;

fn splitmix_rand(state: &mut u64) -> u32 {
    *state = state.wrapping_add(0x9e3779b97f4a7c15);
    let mut rand = *state;
    rand ^= rand >> 30;
    rand = rand.wrapping_mul(0xbf58476d1ce4e5b9);
    rand ^= rand >> 27;
    rand = rand.wrapping_mul(0x94d049bb133111eb);
    rand ^= rand >> 31;
    // The middle 32 bits.
    (rand >> 16) as u32
}

fn tab_rand64(state: &mut u64) -> u64 {
    // At least 16 bits per draw are assumed, so four draws are lapped
    // together 16 bits apart.
    let mut r = 0u64;
    for _ in 0..4 {
        r <<= 16;
        r ^= u64::from(splitmix_rand(state));
    }
    r
}

fn tab_rand128(state: &mut u64) -> u128 {
    let hi = tab_rand64(state);
    let lo = tab_rand64(state);
    u128::from(lo) | (u128::from(hi) << 64)
}

struct Seed32 {
    random: [u64; BLOCK_SIZE],
    a: u32,
    b: u64,
    tabulation: [[u32; 1 << CHAR_SIZE]; 32 / CHAR_SIZE],
    seed: u64,
}

impl Default for Seed32 {
    fn default() -> Self {
        Seed32 {
            random: [0; BLOCK_SIZE],
            a: 0,
            b: 0,
            tabulation: [[0; 1 << CHAR_SIZE]; 32 / CHAR_SIZE],
            seed: 0,
        }
    }
}

thread_local! {
    static SEED32: RefCell<Seed32> = RefCell::new(Seed32::default());
}

fn tabulation32_seed(seed: u64) -> u64 {
    let mut rng = seed;
    SEED32.with(|cell| {
        let mut st = cell.borrow_mut();
        let mut have_broken_rand = false;
        st.seed = seed;
        // The lazy Mersenne combination needs 30-bit polynomial values.
        st.a = (tab_rand64(&mut rng) & ((1 << 30) - 1)) as u32;
        if st.a == 0 {
            st.a = (tab_rand64(&mut rng) & ((1 << 30) - 1)) as u32;
        }
        if st.a == 0 {
            have_broken_rand = true;
            st.a = (0xababababbeafcafeu64 & ((1 << 30) - 1)) as u32;
        }
        st.b = tab_rand64(&mut rng);
        if st.b == 0 {
            st.b = if have_broken_rand {
                0xdeadbeef
            } else {
                tab_rand64(&mut rng)
            };
        }
        for i in 0..BLOCK_SIZE {
            st.random[i] = tab_rand64(&mut rng);
            if st.random[i] == 0 {
                st.random[i] = if have_broken_rand {
                    0xdeadbeef
                } else {
                    tab_rand64(&mut rng)
                };
            }
        }
        for i in 0..32 / CHAR_SIZE {
            for j in 0..1 << CHAR_SIZE {
                st.tabulation[i][j] = tab_rand64(&mut rng) as u32;
            }
        }
    });
    1
}

#[inline]
fn combine31(h: u32, x: u32, a: u32) -> u32 {
    let temp = u64::from(h) * u64::from(x) + u64::from(a);
    (temp as u32 & MERSENNE_31).wrapping_add((temp >> 31) as u32)
}

fn tabulation32<const BSWAP: bool>(input: &[u8], len: usize, _seed: u64, out: &mut [u8]) {
    SEED32.with(|cell| {
        let st = cell.borrow();
        let len_words = len / 4;
        let len_blocks = len_words / BLOCK_SIZE;
        let mut off = 0usize;

        let mut h = (len as u32) ^ (st.seed as u32);

        for _ in 0..len_blocks {
            let mut block_hash = 0u32;
            for i in 0..BLOCK_SIZE {
                block_hash ^= (st.random[i]
                    .wrapping_mul(u64::from(get_u32::<BSWAP>(input, off)))
                    >> 32) as u32;
                off += 4;
            }
            h = combine31(h, st.a, block_hash >> 2);
        }

        let remaining_words = len_words % BLOCK_SIZE;
        for i in 0..remaining_words {
            h ^= (st.random[i]
                .wrapping_mul(u64::from(get_u32::<BSWAP>(input, off)))
                >> 32) as u32;
            off += 4;
        }

        let remaining_bytes = len % 4;
        if remaining_bytes != 0 {
            let mut last = 0u32;
            if remaining_bytes & 2 != 0 {
                last = u32::from(get_u16::<BSWAP>(input, off));
                off += 2;
            }
            if remaining_bytes & 1 != 0 {
                last = (last << 8) | u32::from(input[off]);
            }
            h ^= (st.b.wrapping_mul(u64::from(last)) >> 32) as u32;
        }

        let mut tab = 0u32;
        for i in 0..32 / CHAR_SIZE {
            tab ^= st.tabulation[i][(h & ((1 << CHAR_SIZE) - 1)) as usize];
            h >>= CHAR_SIZE;
        }

        put_u32::<BSWAP>(tab, out, 0);
    });
}

struct Seed64 {
    random: [u128; BLOCK_SIZE],
    a: u128,
    b: u128,
    tabulation: [[u64; 1 << CHAR_SIZE]; 64 / CHAR_SIZE],
    seed: u64,
}

impl Default for Seed64 {
    fn default() -> Self {
        Seed64 {
            random: [0; BLOCK_SIZE],
            a: 0,
            b: 0,
            tabulation: [[0; 1 << CHAR_SIZE]; 64 / CHAR_SIZE],
            seed: 0,
        }
    }
}

thread_local! {
    static SEED64: RefCell<Seed64> = RefCell::new(Seed64::default());
}

fn tabulation64_seed(seed: u64) -> u64 {
    let mut rng = seed;
    SEED64.with(|cell| {
        let mut st = cell.borrow_mut();
        let mut have_broken_rand = false;
        st.seed = seed;
        // The lazy Mersenne combination needs 60-bit polynomial values.
        st.a = tab_rand128(&mut rng) & ((1 << 60) - 1);
        st.b = tab_rand128(&mut rng);
        if st.a == 0 {
            st.a = tab_rand128(&mut rng) & ((1 << 60) - 1);
        }
        if st.a == 0 {
            have_broken_rand = true;
            st.a = u128::from(0xababababbeafcafeu64 & ((1 << 60) - 1));
        }
        if st.b == 0 {
            st.b = tab_rand128(&mut rng);
        }
        if st.b == 0 {
            have_broken_rand = true;
            st.b += 1;
        }
        for i in 0..BLOCK_SIZE {
            st.random[i] = tab_rand128(&mut rng);
            if st.random[i] == 0 {
                st.random[i] = 0x12345678;
            }
        }
        for i in 0..64 / CHAR_SIZE {
            for j in 0..1 << CHAR_SIZE {
                st.tabulation[i][j] = if have_broken_rand {
                    st.random[i] as u64
                } else {
                    tab_rand128(&mut rng) as u64
                };
            }
        }
    });
    1
}

#[inline]
fn combine61(h: u64, x: u64, a: u64) -> u64 {
    let temp = u128::from(h) * u128::from(x) + u128::from(a);
    ((temp as u64) & MERSENNE_61).wrapping_add((temp >> 61) as u64)
}

fn tabulation64<const BSWAP: bool>(input: &[u8], len: usize, _seed: u64, out: &mut [u8]) {
    SEED64.with(|cell| {
        let st = cell.borrow();
        let mut off = 0usize;

        // The string's signature only has to be collision resistant, so
        // the variable-length polynomial mod-Mersenne scheme suffices.
        // The length goes into the basis so appended zero bytes change
        // the hash.
        let mut h = len as u64 ^ st.seed ^ (st.seed << 8);

        if len >= 8 {
            let len_words = len / 8;
            if len_words >= BLOCK_SIZE {
                let len_blocks = len_words / BLOCK_SIZE;
                for _ in 0..len_blocks {
                    let mut block_hash = 0u64;
                    for i in 0..BLOCK_SIZE {
                        block_hash ^= (st.random[i]
                            .wrapping_mul(u128::from(get_u64::<BSWAP>(input, off)))
                            >> 64) as u64;
                        off += 8;
                    }
                    // Any shift of multiply-shift output stays
                    // strongly universal; shifting keeps the value
                    // under the Mersenne prime.
                    h = combine61(h, st.a as u64, block_hash >> 4);
                }
            }

            let remaining_words = len_words % BLOCK_SIZE;
            for i in 0..remaining_words {
                h ^= (st.random[i]
                    .wrapping_mul(u128::from(get_u64::<BSWAP>(input, off)))
                    >> 64) as u64;
                off += 8;
            }
        }

        let remaining_bytes = len % 8;
        if remaining_bytes != 0 {
            let mut last = 0u64;
            if remaining_bytes & 4 != 0 {
                last = u64::from(get_u32::<BSWAP>(input, off));
                off += 4;
            }
            if remaining_bytes & 2 != 0 {
                last = (last << 16) | u64::from(get_u16::<BSWAP>(input, off));
                off += 2;
            }
            if remaining_bytes & 1 != 0 {
                last = (last << 8) | u64::from(input[off]);
            }
            h ^= (st.b.wrapping_mul(u128::from(last)) >> 64) as u64;
        }

        let mut tab = 0u64;
        for i in 0..64 / CHAR_SIZE {
            tab ^= st.tabulation[i][(h % (1 << CHAR_SIZE)) as usize];
            h >>= CHAR_SIZE;
        }

        put_u64::<BSWAP>(tab, out, 0);
    });
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "tabulation",
        src_url: Some("https://github.com/rurban/smhasher/blob/master/Hashes.cpp"),
        src_status: SrcStatus::Frozen,
    });

    reg.add(
        HashDescriptor::new(
            "tabulation_32",
            "tabulation",
            32,
            tabulation32::<false>,
            tabulation32::<true>,
        )
        .desc("32-bit Tabulation with Multiply-Shift Mixer")
        .hash_flags(HashFlags::LOOKUP_TABLE | HashFlags::SYSTEM_SPECIFIC)
        .impl_flags(ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_BSD)
        .verification(0x0D34E471, 0x84CD19C4)
        .seedprep(tabulation32_seed),
    );

    reg.add(
        HashDescriptor::new(
            "tabulation_64",
            "tabulation",
            64,
            tabulation64::<false>,
            tabulation64::<true>,
        )
        .desc("64-bit Tabulation with Multiply-Shift Mixer")
        .impl_name("int128")
        .hash_flags(HashFlags::LOOKUP_TABLE | HashFlags::SYSTEM_SPECIFIC)
        .impl_flags(ImplFlags::BITS128 | ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_BSD)
        .verification(0x53B08B2D, 0x164CA53D)
        .seedprep(tabulation64_seed)
        .badseed_desc("Many seeds can collide on keys of all zero bytes"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitmix_returns_middle_bits() {
        let mut s = 0u64;
        let a = splitmix_rand(&mut s);
        let b = splitmix_rand(&mut s);
        assert_ne!(a, b);
        assert_eq!(s, 0x9e3779b97f4a7c15u64.wrapping_mul(2));
    }

    #[test]
    fn seed_tables_have_no_zero_multipliers() {
        tabulation64_seed(7);
        SEED64.with(|cell| {
            let st = cell.borrow();
            assert_ne!(st.a, 0);
            assert_ne!(st.b, 0);
            for r in st.random.iter() {
                assert_ne!(*r, 0);
            }
        });
        tabulation32_seed(7);
        SEED32.with(|cell| {
            let st = cell.borrow();
            assert_ne!(st.a, 0);
            assert_ne!(st.b, 0);
        });
    }

    #[test]
    fn combine31_and_61_are_congruent() {
        let got = combine31(12345, 678, 91011);
        assert_eq!(
            u64::from(got) % u64::from(MERSENNE_31),
            (12345u64 * 678 + 91011) % u64::from(MERSENNE_31)
        );
        let got = combine61(1 << 40, (1 << 50) + 3, 77);
        assert_eq!(
            u128::from(got) % u128::from(MERSENNE_61),
            ((1u128 << 40) * ((1 << 50) + 3) + 77) % u128::from(MERSENNE_61)
        );
    }

    #[test]
    fn block_boundary_lengths_hash() {
        tabulation32_seed(3);
        tabulation64_seed(3);
        let buf = vec![0xE1u8; 8 * BLOCK_SIZE + 24];
        let mut o32 = [0u8; 4];
        let mut o64 = [0u8; 8];
        for n in [0usize, 3, 4, 1024, 1025, 2048, 2049, 8 * BLOCK_SIZE, 8 * BLOCK_SIZE + 7] {
            tabulation32::<false>(&buf, n, 0, &mut o32);
            tabulation64::<false>(&buf, n, 0, &mut o64);
        }
    }
}
