//! Per-hash metadata and the uniform dispatch contract.
//!
//! Every registered hash variant is described by one [`HashDescriptor`]:
//! its family, output width, behaviour flags, the two 32-bit verification
//! codes, the native and byte-swapped function pointers, and the optional
//! init / seed-preparation / seed-fixup callbacks. Descriptors are built
//! at startup through the builder methods and are immutable afterwards.

use std::collections::BTreeSet;
use std::ops::BitOr;

use crate::bits::{is_be, is_le};

/// Uniform hash entry point.
///
/// `input.len() >= len` always holds; the bytes past `len` are driver-owned
/// padding. Hashes whose descriptor carries [`ImplFlags::READ_PAST_EOB`]
/// may read up to 7 bytes past `len`; the driver guarantees at least 16
/// bytes of padding for those. `out.len()` equals `bits / 8`.
pub type HashFn = fn(input: &[u8], len: usize, seed: u64, out: &mut [u8]);

/// One-shot family initialisation. Returning `false` means the hash is
/// unavailable on this host and must not be registered.
pub type InitFn = fn() -> bool;

/// Per-seed fixup: transforms a user seed to route around declared bad
/// seeds. Must be idempotent.
pub type SeedfixFn = fn(&HashDescriptor, u64) -> u64;

/// Per-seed preparation: derives thread-local state from the seed and
/// returns a non-zero handle, or 0 meaning "use the input seed as-is".
pub type SeedprepFn = fn(u64) -> u64;

/// Hash-behaviour flag bitset (closed vocabulary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HashFlags(pub u64);

impl HashFlags {
    pub const NONE: HashFlags = HashFlags(0);
    pub const MOCK: HashFlags = HashFlags(1 << 0);
    pub const CRYPTOGRAPHIC: HashFlags = HashFlags(1 << 1);
    pub const CRYPTOGRAPHIC_WEAK: HashFlags = HashFlags(1 << 2);
    pub const CRC_BASED: HashFlags = HashFlags(1 << 3);
    pub const AES_BASED: HashFlags = HashFlags(1 << 4);
    pub const CLMUL_BASED: HashFlags = HashFlags(1 << 5);
    pub const LOOKUP_TABLE: HashFlags = HashFlags(1 << 6);
    pub const XL_SEED: HashFlags = HashFlags(1 << 7);
    pub const SMALL_SEED: HashFlags = HashFlags(1 << 8);
    pub const NO_SEED: HashFlags = HashFlags(1 << 9);
    pub const SYSTEM_SPECIFIC: HashFlags = HashFlags(1 << 10);
    pub const ENDIAN_INDEPENDENT: HashFlags = HashFlags(1 << 11);
    pub const FLOATING_POINT: HashFlags = HashFlags(1 << 12);

    #[inline]
    #[must_use]
    pub const fn contains(self, other: HashFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for HashFlags {
    type Output = HashFlags;

    fn bitor(self, rhs: HashFlags) -> HashFlags {
        HashFlags(self.0 | rhs.0)
    }
}

/// Implementation-detail flag bitset (closed vocabulary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImplFlags(pub u64);

impl ImplFlags {
    pub const NONE: ImplFlags = ImplFlags(0);
    pub const SANITY_FAILS: ImplFlags = ImplFlags(1 << 0);
    pub const SLOW: ImplFlags = ImplFlags(1 << 1);
    pub const VERY_SLOW: ImplFlags = ImplFlags(1 << 2);
    pub const READ_PAST_EOB: ImplFlags = ImplFlags(1 << 3);
    pub const TYPE_PUNNING: ImplFlags = ImplFlags(1 << 4);
    pub const INCREMENTAL: ImplFlags = ImplFlags(1 << 5);
    pub const INCREMENTAL_DIFFERENT: ImplFlags = ImplFlags(1 << 6);
    pub const BITS128: ImplFlags = ImplFlags(1 << 7);
    pub const MULTIPLY: ImplFlags = ImplFlags(1 << 8);
    pub const MULTIPLY_64_64: ImplFlags = ImplFlags(1 << 9);
    pub const MULTIPLY_64_128: ImplFlags = ImplFlags(1 << 10);
    pub const MULTIPLY_128_128: ImplFlags = ImplFlags(1 << 11);
    pub const ROTATE: ImplFlags = ImplFlags(1 << 12);
    pub const ROTATE_VARIABLE: ImplFlags = ImplFlags(1 << 13);
    pub const SHIFT_VARIABLE: ImplFlags = ImplFlags(1 << 14);
    pub const MODULUS: ImplFlags = ImplFlags(1 << 15);
    pub const ASM: ImplFlags = ImplFlags(1 << 16);
    pub const CANONICAL_LE: ImplFlags = ImplFlags(1 << 17);
    pub const CANONICAL_BE: ImplFlags = ImplFlags(1 << 18);
    pub const CANONICAL_BOTH: ImplFlags = ImplFlags(1 << 19);
    pub const SEED_WITH_HINT: ImplFlags = ImplFlags(1 << 20);
    pub const LICENSE_PUBLIC_DOMAIN: ImplFlags = ImplFlags(1 << 21);
    pub const LICENSE_BSD: ImplFlags = ImplFlags(1 << 22);
    pub const LICENSE_MIT: ImplFlags = ImplFlags(1 << 23);
    pub const LICENSE_APACHE2: ImplFlags = ImplFlags(1 << 24);
    pub const LICENSE_ZLIB: ImplFlags = ImplFlags(1 << 25);
    pub const LICENSE_GPL3: ImplFlags = ImplFlags(1 << 26);

    #[inline]
    #[must_use]
    pub const fn contains(self, other: ImplFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ImplFlags {
    type Output = ImplFlags;

    fn bitor(self, rhs: ImplFlags) -> ImplFlags {
        ImplFlags(self.0 | rhs.0)
    }
}

/// Which endian variant of a hash the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// The canonical variant for this host, per the descriptor's flags.
    #[default]
    Default,
    /// The opposite of [`Endianness::Default`].
    NonDefault,
    /// Always the native-endian function.
    Native,
    /// Always the byte-swapped function.
    Byteswapped,
    /// Native iff the host is little-endian.
    Little,
    /// Native iff the host is big-endian.
    Big,
}

/// Upstream source stability for a hash family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SrcStatus {
    #[default]
    Unknown,
    /// Very unlikely to change.
    Frozen,
    /// Fairly unlikely to change.
    Stableish,
    /// Likely to change.
    Active,
}

/// Family-level metadata shared by a group of registrations.
#[derive(Debug, Clone)]
pub struct FamilyInfo {
    pub name: &'static str,
    pub src_url: Option<&'static str>,
    pub src_status: SrcStatus,
}

/// Immutable metadata for one registered hash.
pub struct HashDescriptor {
    /// Canonical display name; underscores in the registration identifier
    /// are replaced with hyphens.
    pub name: String,
    pub family: &'static str,
    pub desc: &'static str,
    pub impl_name: &'static str,
    pub hash_flags: HashFlags,
    pub impl_flags: ImplFlags,
    /// Stable display-ordering within a family.
    pub sort_order: u32,
    /// Output width in bits.
    pub bits: u32,
    pub verification_le: u32,
    pub verification_be: u32,
    pub initfn: Option<InitFn>,
    pub seedfixfn: Option<SeedfixFn>,
    pub seedfn: Option<SeedprepFn>,
    pub hashfn_native: HashFn,
    pub hashfn_bswap: HashFn,
    /// Seeds known to collide pathologically; consulted by `seedfixfn`.
    pub badseeds: BTreeSet<u64>,
    pub badseed_desc: Option<&'static str>,
}

impl HashDescriptor {
    /// Start a descriptor with the required fields; the remaining metadata
    /// comes in through the builder methods below.
    #[must_use]
    pub fn new(
        name: &str,
        family: &'static str,
        bits: u32,
        hashfn_native: HashFn,
        hashfn_bswap: HashFn,
    ) -> Self {
        HashDescriptor {
            name: name.replace('_', "-"),
            family,
            desc: "",
            impl_name: "",
            hash_flags: HashFlags::NONE,
            impl_flags: ImplFlags::NONE,
            sort_order: 0,
            bits,
            verification_le: 0,
            verification_be: 0,
            initfn: None,
            seedfixfn: None,
            seedfn: None,
            hashfn_native,
            hashfn_bswap,
            badseeds: BTreeSet::new(),
            badseed_desc: None,
        }
    }

    #[must_use]
    pub fn desc(mut self, desc: &'static str) -> Self {
        self.desc = desc;
        self
    }

    #[must_use]
    pub fn impl_name(mut self, impl_name: &'static str) -> Self {
        self.impl_name = impl_name;
        self
    }

    #[must_use]
    pub fn hash_flags(mut self, flags: HashFlags) -> Self {
        self.hash_flags = flags;
        self
    }

    #[must_use]
    pub fn impl_flags(mut self, flags: ImplFlags) -> Self {
        self.impl_flags = flags;
        self
    }

    #[must_use]
    pub fn sort_order(mut self, order: u32) -> Self {
        self.sort_order = order;
        self
    }

    /// The two declared verification codes, little-endian then big-endian.
    #[must_use]
    pub fn verification(mut self, le: u32, be: u32) -> Self {
        self.verification_le = le;
        self.verification_be = be;
        self
    }

    #[must_use]
    pub fn init(mut self, f: InitFn) -> Self {
        self.initfn = Some(f);
        self
    }

    #[must_use]
    pub fn seedfix(mut self, f: SeedfixFn) -> Self {
        self.seedfixfn = Some(f);
        self
    }

    #[must_use]
    pub fn seedprep(mut self, f: SeedprepFn) -> Self {
        self.seedfn = Some(f);
        self
    }

    #[must_use]
    pub fn badseeds(mut self, seeds: &[u64]) -> Self {
        self.badseeds = seeds.iter().copied().collect();
        self
    }

    #[must_use]
    pub fn badseed_desc(mut self, desc: &'static str) -> Self {
        self.badseed_desc = Some(desc);
        self
    }

    /// Output width in bytes.
    #[inline]
    #[must_use]
    pub fn output_bytes(&self) -> usize {
        (self.bits / 8) as usize
    }

    /// Endian-variant selection rule: true picks `hashfn_native`.
    #[must_use]
    pub fn is_native(&self, e: Endianness) -> bool {
        match e {
            Endianness::Native => true,
            Endianness::Byteswapped => false,
            Endianness::Little => is_le(),
            Endianness::Big => is_be(),
            Endianness::Default | Endianness::NonDefault => {
                let mut native = true;
                if self.hash_flags.contains(HashFlags::ENDIAN_INDEPENDENT) {
                    if self.impl_flags.contains(ImplFlags::CANONICAL_BOTH) {
                        native = true;
                    } else if self.impl_flags.contains(ImplFlags::CANONICAL_LE) {
                        native = is_le();
                    } else if self.impl_flags.contains(ImplFlags::CANONICAL_BE) {
                        native = is_be();
                    }
                }
                if e == Endianness::NonDefault {
                    native = !native;
                }
                native
            }
        }
    }

    /// The function pointer selected for an endianness request.
    #[inline]
    #[must_use]
    pub fn hashfn(&self, e: Endianness) -> HashFn {
        if self.is_native(e) {
            self.hashfn_native
        } else {
            self.hashfn_bswap
        }
    }

    /// The declared verification code for the variant `e` selects, taking
    /// the host's endianness into account.
    #[must_use]
    pub fn expected_verification(&self, e: Endianness) -> u32 {
        let want_le = is_be() ^ self.is_native(e);
        if want_le {
            self.verification_le
        } else {
            self.verification_be
        }
    }

    /// Run the one-shot init callback, if any.
    #[must_use]
    pub fn run_init(&self) -> bool {
        match self.initfn {
            Some(f) => f(),
            None => true,
        }
    }

    /// Produce the effective seed for one evaluation.
    ///
    /// Canonical order: seed fixup (skipped when `allow_fix` is false or
    /// replaced by a hint side-effect for `SEED_WITH_HINT` hashes), then
    /// seed preparation, whose non-zero return replaces the seed.
    #[must_use]
    pub fn seed(&self, mut seed: u64, allow_fix: bool, hint: u64) -> u64 {
        if let Some(fix) = self.seedfixfn {
            if self.impl_flags.contains(ImplFlags::SEED_WITH_HINT) {
                let _ = fix(self, hint);
            } else if allow_fix {
                seed = fix(self, seed);
            }
        }
        if let Some(prep) = self.seedfn {
            let prepared = prep(seed);
            if prepared != 0 {
                seed = prepared;
            }
        }
        seed
    }

    /// Seed fixup only, without preparation.
    #[must_use]
    pub fn fixed_seed(&self, seed: u64) -> u64 {
        match self.seedfixfn {
            Some(fix) if !self.impl_flags.contains(ImplFlags::SEED_WITH_HINT) => fix(self, seed),
            _ => seed,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_mock(&self) -> bool {
        self.hash_flags.contains(HashFlags::MOCK)
    }

    #[inline]
    #[must_use]
    pub fn is_32bit_seed(&self) -> bool {
        self.hash_flags.contains(HashFlags::SMALL_SEED)
    }

    #[inline]
    #[must_use]
    pub fn is_endian_defined(&self) -> bool {
        self.hash_flags.contains(HashFlags::ENDIAN_INDEPENDENT)
    }

    #[inline]
    #[must_use]
    pub fn is_slow(&self) -> bool {
        self.impl_flags.contains(ImplFlags::SLOW) || self.impl_flags.contains(ImplFlags::VERY_SLOW)
    }
}

impl std::fmt::Debug for HashDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashDescriptor")
            .field("name", &self.name)
            .field("family", &self.family)
            .field("bits", &self.bits)
            .field("verification_le", &format_args!("{:#010x}", self.verification_le))
            .field("verification_be", &format_args!("{:#010x}", self.verification_be))
            .finish_non_exhaustive()
    }
}

/// Generic seed fixup: step past every declared bad seed.
///
/// Idempotent: the returned value is never in the bad-seed set, so a
/// second application returns it unchanged.
pub fn exclude_bad_seeds(hinfo: &HashDescriptor, seed: u64) -> u64 {
    let mut seed = seed;
    loop {
        let probe = if hinfo.is_32bit_seed() {
            seed & 0xFFFF_FFFF
        } else {
            seed
        };
        if !hinfo.badseeds.contains(&probe) {
            return seed;
        }
        seed = seed.wrapping_add(1);
    }
}

/// Seed fixup for hashes that cannot accept a zero seed.
pub fn exclude_zero_seed(_hinfo: &HashDescriptor, seed: u64) -> u64 {
    if seed == 0 { 1 } else { seed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn null_hash(_input: &[u8], _len: usize, _seed: u64, out: &mut [u8]) {
        for b in out.iter_mut() {
            *b = 0;
        }
    }

    fn mock(hash_flags: HashFlags, impl_flags: ImplFlags) -> HashDescriptor {
        HashDescriptor::new("mock_hash", "mock", 32, null_hash, null_hash)
            .hash_flags(hash_flags)
            .impl_flags(impl_flags)
            .verification(0x1111_1111, 0x2222_2222)
    }

    #[test]
    fn name_canonicalisation_replaces_underscores() {
        let d = mock(HashFlags::NONE, ImplFlags::NONE);
        assert_eq!(d.name, "mock-hash");
    }

    #[test]
    fn endian_selection_explicit_requests() {
        let d = mock(HashFlags::NONE, ImplFlags::NONE);
        assert!(d.is_native(Endianness::Native));
        assert!(!d.is_native(Endianness::Byteswapped));
        assert_eq!(d.is_native(Endianness::Little), is_le());
        assert_eq!(d.is_native(Endianness::Big), is_be());
    }

    #[test]
    fn endian_selection_default_for_endian_dependent_hash() {
        let d = mock(HashFlags::NONE, ImplFlags::NONE);
        assert!(d.is_native(Endianness::Default));
        assert!(!d.is_native(Endianness::NonDefault));
    }

    #[test]
    fn endian_selection_default_for_canonical_le_hash() {
        let d = mock(
            HashFlags::ENDIAN_INDEPENDENT,
            ImplFlags::CANONICAL_LE,
        );
        assert_eq!(d.is_native(Endianness::Default), is_le());
        assert_eq!(d.is_native(Endianness::NonDefault), is_be());

        let both = mock(
            HashFlags::ENDIAN_INDEPENDENT,
            ImplFlags::CANONICAL_BOTH,
        );
        assert!(both.is_native(Endianness::Default));
    }

    #[test]
    fn expected_verification_picks_the_host_side() {
        let d = mock(HashFlags::NONE, ImplFlags::NONE);
        if is_le() {
            assert_eq!(d.expected_verification(Endianness::Native), 0x1111_1111);
            assert_eq!(d.expected_verification(Endianness::Byteswapped), 0x2222_2222);
        } else {
            assert_eq!(d.expected_verification(Endianness::Native), 0x2222_2222);
            assert_eq!(d.expected_verification(Endianness::Byteswapped), 0x1111_1111);
        }
    }

    #[test]
    fn exclude_bad_seeds_is_idempotent() {
        let d = mock(HashFlags::NONE, ImplFlags::NONE).badseeds(&[7, 8, 9]);
        let fixed = exclude_bad_seeds(&d, 7);
        assert_eq!(fixed, 10);
        assert_eq!(exclude_bad_seeds(&d, fixed), fixed);
        assert_eq!(exclude_bad_seeds(&d, 3), 3);
    }

    #[test]
    fn exclude_bad_seeds_masks_small_seeds() {
        let d = mock(HashFlags::SMALL_SEED, ImplFlags::NONE).badseeds(&[0x429dacdd]);
        assert_eq!(exclude_bad_seeds(&d, 0x429dacdd), 0x429dacde);
    }

    #[test]
    fn exclude_zero_seed_remaps_zero_only() {
        let d = mock(HashFlags::NONE, ImplFlags::NONE);
        assert_eq!(exclude_zero_seed(&d, 0), 1);
        assert_eq!(exclude_zero_seed(&d, 5), 5);
    }

    #[test]
    fn seed_plumbing_applies_prep_after_fix() {
        fn prep(seed: u64) -> u64 {
            if seed == 42 { 0 } else { seed.wrapping_mul(3) }
        }
        let d = mock(HashFlags::NONE, ImplFlags::NONE)
            .badseeds(&[5])
            .seedfix(exclude_bad_seeds)
            .seedprep(prep);

        // Fixup runs first (5 -> 6), then prep (6 -> 18).
        assert_eq!(d.seed(5, true, 0), 18);
        // Forced seeding skips the fixup.
        assert_eq!(d.seed(5, false, 0), 15);
        // A zero prep return leaves the seed unchanged.
        assert_eq!(d.seed(42, true, 0), 42);
    }
}
