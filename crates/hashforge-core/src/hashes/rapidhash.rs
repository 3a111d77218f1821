//! rapidhash v3: full, micro, and nano variants, each in a plain and a
//! protected flavor.
//!
//! The protected flavor XORs each 128-bit product back into its operands
//! instead of overwriting them, to resist seed/entropy loss on
//! pathological multiplier values.

use crate::bits::{get_u32, get_u64, is_le, put_u64};
use crate::descriptor::{FamilyInfo, HashDescriptor, ImplFlags, SrcStatus};
use crate::mathmult::mult64_128;
use crate::registry::RegistryBuilder;

const SECRET: [u64; 8] = [
    0x2d358dccaa6c78a5,
    0x8bb84b93962eacc9,
    0x4b33a62ed433d4a3,
    0x4d5a2da51de1aa47,
    0xa0761d6478bd642f,
    0xe7037ed1a0b428db,
    0x90ed1765281c388c,
    0xaaaaaaaaaaaaaaaa,
];

#[inline]
fn mum<const PROTECTED: bool>(a: &mut u64, b: &mut u64) {
    let (rlo, rhi) = mult64_128(*a, *b);
    if PROTECTED {
        *a ^= rlo;
        *b ^= rhi;
    } else {
        *a = rlo;
        *b = rhi;
    }
}

#[inline]
fn mix<const PROTECTED: bool>(mut a: u64, mut b: u64) -> u64 {
    mum::<PROTECTED>(&mut a, &mut b);
    a ^ b
}

#[inline]
fn read64<const BSWAP: bool>(p: &[u8], off: usize) -> u64 {
    get_u64::<BSWAP>(p, off)
}

#[inline]
fn read32<const BSWAP: bool>(p: &[u8], off: usize) -> u64 {
    u64::from(get_u32::<BSWAP>(p, off))
}

// Shared small-input tail (len <= 16) and the closing mix.
#[inline]
fn small_tail<const BSWAP: bool>(p: &[u8], len: usize, seed: &mut u64) -> (u64, u64) {
    if len >= 4 {
        *seed ^= len as u64;
        if len >= 8 {
            (read64::<BSWAP>(p, 0), read64::<BSWAP>(p, len - 8))
        } else {
            (read32::<BSWAP>(p, 0), read32::<BSWAP>(p, len - 4))
        }
    } else if len > 0 {
        (
            (u64::from(p[0]) << 45) | u64::from(p[len - 1]),
            u64::from(p[len >> 1]),
        )
    } else {
        (0, 0)
    }
}

#[inline]
fn finish<const PROTECTED: bool>(mut a: u64, mut b: u64, seed: u64, i: u64) -> u64 {
    a ^= SECRET[1];
    b ^= seed;
    mum::<PROTECTED>(&mut a, &mut b);
    mix::<PROTECTED>(a ^ SECRET[7], b ^ SECRET[1] ^ i)
}

#[inline]
fn block7<const BSWAP: bool, const PROTECTED: bool>(
    p: &[u8],
    off: usize,
    seed: &mut u64,
    sees: &mut [u64; 6],
) {
    *seed = mix::<PROTECTED>(
        read64::<BSWAP>(p, off) ^ SECRET[0],
        read64::<BSWAP>(p, off + 8) ^ *seed,
    );
    for k in 0..6 {
        sees[k] = mix::<PROTECTED>(
            read64::<BSWAP>(p, off + 16 * (k + 1)) ^ SECRET[k + 1],
            read64::<BSWAP>(p, off + 16 * (k + 1) + 8) ^ sees[k],
        );
    }
}

fn rapidhash_full<const BSWAP: bool, const PROTECTED: bool, const UNROLLED: bool>(
    p: &[u8],
    len: usize,
    mut seed: u64,
) -> u64 {
    let mut i = len;
    let mut off = 0usize;
    let a;
    let b;

    seed ^= mix::<PROTECTED>(seed ^ SECRET[2], SECRET[1]);

    if len <= 16 {
        let (ta, tb) = small_tail::<BSWAP>(p, len, &mut seed);
        a = ta;
        b = tb;
    } else {
        if len > 112 {
            let mut sees = [seed; 6];
            if UNROLLED {
                while i > 224 {
                    block7::<BSWAP, PROTECTED>(p, off, &mut seed, &mut sees);
                    block7::<BSWAP, PROTECTED>(p, off + 112, &mut seed, &mut sees);
                    off += 224;
                    i -= 224;
                }
                if i > 112 {
                    block7::<BSWAP, PROTECTED>(p, off, &mut seed, &mut sees);
                    off += 112;
                    i -= 112;
                }
            } else {
                loop {
                    block7::<BSWAP, PROTECTED>(p, off, &mut seed, &mut sees);
                    off += 112;
                    i -= 112;
                    if i <= 112 {
                        break;
                    }
                }
            }
            seed ^= sees[0];
            let see2 = sees[1] ^ sees[2];
            let see4 = sees[3] ^ sees[4];
            seed ^= sees[5];
            let see2 = see2 ^ see4;
            seed ^= see2;
        }
        if i > 16 {
            seed = mix::<PROTECTED>(
                read64::<BSWAP>(p, off) ^ SECRET[2],
                read64::<BSWAP>(p, off + 8) ^ seed,
            );
            if i > 32 {
                seed = mix::<PROTECTED>(
                    read64::<BSWAP>(p, off + 16) ^ SECRET[2],
                    read64::<BSWAP>(p, off + 24) ^ seed,
                );
                if i > 48 {
                    seed = mix::<PROTECTED>(
                        read64::<BSWAP>(p, off + 32) ^ SECRET[1],
                        read64::<BSWAP>(p, off + 40) ^ seed,
                    );
                    if i > 64 {
                        seed = mix::<PROTECTED>(
                            read64::<BSWAP>(p, off + 48) ^ SECRET[1],
                            read64::<BSWAP>(p, off + 56) ^ seed,
                        );
                        if i > 80 {
                            seed = mix::<PROTECTED>(
                                read64::<BSWAP>(p, off + 64) ^ SECRET[2],
                                read64::<BSWAP>(p, off + 72) ^ seed,
                            );
                            if i > 96 {
                                seed = mix::<PROTECTED>(
                                    read64::<BSWAP>(p, off + 80) ^ SECRET[1],
                                    read64::<BSWAP>(p, off + 88) ^ seed,
                                );
                            }
                        }
                    }
                }
            }
        }
        a = read64::<BSWAP>(p, off + i - 16) ^ i as u64;
        b = read64::<BSWAP>(p, off + i - 8);
    }

    finish::<PROTECTED>(a, b, seed, i as u64)
}

fn rapidhash_micro<const BSWAP: bool, const PROTECTED: bool>(
    p: &[u8],
    len: usize,
    mut seed: u64,
) -> u64 {
    let mut i = len;
    let mut off = 0usize;
    let a;
    let b;

    seed ^= mix::<PROTECTED>(seed ^ SECRET[2], SECRET[1]);

    if len <= 16 {
        let (ta, tb) = small_tail::<BSWAP>(p, len, &mut seed);
        a = ta;
        b = tb;
    } else {
        if len > 80 {
            let mut sees = [seed; 4];
            loop {
                seed = mix::<PROTECTED>(
                    read64::<BSWAP>(p, off) ^ SECRET[0],
                    read64::<BSWAP>(p, off + 8) ^ seed,
                );
                for k in 0..4 {
                    sees[k] = mix::<PROTECTED>(
                        read64::<BSWAP>(p, off + 16 * (k + 1)) ^ SECRET[k + 1],
                        read64::<BSWAP>(p, off + 16 * (k + 1) + 8) ^ sees[k],
                    );
                }
                off += 80;
                i -= 80;
                if i <= 80 {
                    break;
                }
            }
            seed ^= sees[0];
            let see2 = sees[1] ^ sees[2];
            seed ^= sees[3];
            seed ^= see2;
        }
        if i > 16 {
            seed = mix::<PROTECTED>(
                read64::<BSWAP>(p, off) ^ SECRET[2],
                read64::<BSWAP>(p, off + 8) ^ seed,
            );
            if i > 32 {
                seed = mix::<PROTECTED>(
                    read64::<BSWAP>(p, off + 16) ^ SECRET[2],
                    read64::<BSWAP>(p, off + 24) ^ seed,
                );
                if i > 48 {
                    seed = mix::<PROTECTED>(
                        read64::<BSWAP>(p, off + 32) ^ SECRET[1],
                        read64::<BSWAP>(p, off + 40) ^ seed,
                    );
                    if i > 64 {
                        seed = mix::<PROTECTED>(
                            read64::<BSWAP>(p, off + 48) ^ SECRET[1],
                            read64::<BSWAP>(p, off + 56) ^ seed,
                        );
                    }
                }
            }
        }
        a = read64::<BSWAP>(p, off + i - 16) ^ i as u64;
        b = read64::<BSWAP>(p, off + i - 8);
    }

    finish::<PROTECTED>(a, b, seed, i as u64)
}

fn rapidhash_nano<const BSWAP: bool, const PROTECTED: bool>(
    p: &[u8],
    len: usize,
    mut seed: u64,
) -> u64 {
    let mut i = len;
    let mut off = 0usize;
    let a;
    let b;

    seed ^= mix::<PROTECTED>(seed ^ SECRET[2], SECRET[1]);

    if len <= 16 {
        let (ta, tb) = small_tail::<BSWAP>(p, len, &mut seed);
        a = ta;
        b = tb;
    } else {
        if len > 48 {
            let mut see1 = seed;
            let mut see2 = seed;
            loop {
                seed = mix::<PROTECTED>(
                    read64::<BSWAP>(p, off) ^ SECRET[0],
                    read64::<BSWAP>(p, off + 8) ^ seed,
                );
                see1 = mix::<PROTECTED>(
                    read64::<BSWAP>(p, off + 16) ^ SECRET[1],
                    read64::<BSWAP>(p, off + 24) ^ see1,
                );
                see2 = mix::<PROTECTED>(
                    read64::<BSWAP>(p, off + 32) ^ SECRET[2],
                    read64::<BSWAP>(p, off + 40) ^ see2,
                );
                off += 48;
                i -= 48;
                if i <= 48 {
                    break;
                }
            }
            seed ^= see1;
            seed ^= see2;
        }
        if i > 16 {
            seed = mix::<PROTECTED>(
                read64::<BSWAP>(p, off) ^ SECRET[2],
                read64::<BSWAP>(p, off + 8) ^ seed,
            );
            if i > 32 {
                seed = mix::<PROTECTED>(
                    read64::<BSWAP>(p, off + 16) ^ SECRET[2],
                    read64::<BSWAP>(p, off + 24) ^ seed,
                );
            }
        }
        a = read64::<BSWAP>(p, off + i - 16) ^ i as u64;
        b = read64::<BSWAP>(p, off + i - 8);
    }

    finish::<PROTECTED>(a, b, seed, i as u64)
}

// The published hash always reads little-endian and emits a plain
// 64-bit integer; output byte order follows the registered variant.
fn rapid_full<const BSWAP: bool, const PROTECTED: bool, const UNROLLED: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let h = if is_le() {
        rapidhash_full::<false, PROTECTED, UNROLLED>(input, len, seed)
    } else {
        rapidhash_full::<true, PROTECTED, UNROLLED>(input, len, seed)
    };
    put_u64::<BSWAP>(h, out, 0);
}

fn rapid_micro<const BSWAP: bool, const PROTECTED: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let h = if is_le() {
        rapidhash_micro::<false, PROTECTED>(input, len, seed)
    } else {
        rapidhash_micro::<true, PROTECTED>(input, len, seed)
    };
    put_u64::<BSWAP>(h, out, 0);
}

fn rapid_nano<const BSWAP: bool, const PROTECTED: bool>(
    input: &[u8],
    len: usize,
    seed: u64,
    out: &mut [u8],
) {
    let h = if is_le() {
        rapidhash_nano::<false, PROTECTED>(input, len, seed)
    } else {
        rapidhash_nano::<true, PROTECTED>(input, len, seed)
    };
    put_u64::<BSWAP>(h, out, 0);
}

pub(crate) fn register(reg: &mut RegistryBuilder) {
    reg.family(FamilyInfo {
        name: "rapidhash",
        src_url: Some("https://github.com/Nicoshev/rapidhash"),
        src_status: SrcStatus::Active,
    });

    reg.add(
        HashDescriptor::new(
            "rapidhash",
            "rapidhash",
            64,
            rapid_full::<false, false, true>,
            rapid_full::<true, false, true>,
        )
        .desc("rapidhash v3, 64-bit")
        .sort_order(0)
        .impl_flags(ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_MIT)
        .verification(0x1FDC65EE, 0xB2DB16B5),
    );

    reg.add(
        HashDescriptor::new(
            "rapidhash_protected",
            "rapidhash",
            64,
            rapid_full::<false, true, false>,
            rapid_full::<true, true, false>,
        )
        .desc("rapidhash v3, 64-bit protected version")
        .sort_order(10)
        .impl_flags(ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_MIT)
        .verification(0x72C9270A, 0x9A145308),
    );

    reg.add(
        HashDescriptor::new(
            "rapidhash_micro",
            "rapidhash",
            64,
            rapid_micro::<false, false>,
            rapid_micro::<true, false>,
        )
        .desc("rapidhashMicro v3, 64-bit")
        .sort_order(20)
        .impl_flags(ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_MIT)
        .verification(0x6F183D61, 0xFAAE4D8F),
    );

    reg.add(
        HashDescriptor::new(
            "rapidhash_micro_protected",
            "rapidhash",
            64,
            rapid_micro::<false, true>,
            rapid_micro::<true, true>,
        )
        .desc("rapidhashMicro v3, 64-bit protected version")
        .sort_order(30)
        .impl_flags(ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_MIT)
        .verification(0xC7F9987C, 0xDC04682C),
    );

    reg.add(
        HashDescriptor::new(
            "rapidhash_nano",
            "rapidhash",
            64,
            rapid_nano::<false, false>,
            rapid_nano::<true, false>,
        )
        .desc("rapidhashNano v3, 64-bit")
        .sort_order(40)
        .impl_flags(ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_MIT)
        .verification(0x2C200DC7, 0xC082DAAD),
    );

    reg.add(
        HashDescriptor::new(
            "rapidhash_nano_protected",
            "rapidhash",
            64,
            rapid_nano::<false, true>,
            rapid_nano::<true, true>,
        )
        .desc("rapidhashNano v3, 64-bit protected version")
        .sort_order(50)
        .impl_flags(ImplFlags::MULTIPLY_64_128 | ImplFlags::LICENSE_MIT)
        .verification(0x7A2FA761, 0xCC879229),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrolled_and_rolled_loops_agree() {
        // The unroll factor is a performance choice only.
        let msg: Vec<u8> = (0..1024u32).map(|i| (i * 7) as u8).collect();
        for &n in &[17usize, 112, 113, 224, 225, 448, 449, 1000] {
            assert_eq!(
                rapidhash_full::<false, false, true>(&msg, n, 42),
                rapidhash_full::<false, false, false>(&msg, n, 42),
                "len {n}"
            );
        }
    }

    #[test]
    fn protected_differs_from_plain() {
        let msg = b"rapidhash protected flavor";
        assert_ne!(
            rapidhash_full::<false, false, true>(msg, msg.len(), 0),
            rapidhash_full::<false, true, true>(msg, msg.len(), 0)
        );
    }

    #[test]
    fn variants_cover_their_block_sizes() {
        let msg = vec![0x3Cu8; 512];
        for &n in &[0usize, 1, 3, 4, 7, 8, 15, 16, 17, 33, 48, 49, 80, 81, 112, 113, 224, 225] {
            let f = rapidhash_full::<false, false, true>(&msg, n, 7);
            let m = rapidhash_micro::<false, false>(&msg, n, 7);
            let na = rapidhash_nano::<false, false>(&msg, n, 7);
            if n <= 16 {
                // All three share the short-input path.
                assert_eq!(f, m);
                assert_eq!(m, na);
            }
        }
    }
}
