//! # hashforge-core
//!
//! Portable, bit-exact implementations of a broad set of non-cryptographic
//! hash functions, plus the registry and dispatch layer that binds them
//! behind one uniform contract.
//!
//! Every hash is a pure function of `(bytes, len, seed)`. Each registered
//! variant carries metadata, two per-endianness 32-bit verification codes,
//! and a native plus byte-swapped function pointer produced by
//! monomorphising one body over a `const BSWAP: bool` parameter. A test
//! driver reads the metadata, picks a variant via the endianness rules, and
//! checks the computed verification digest against the declared constant.

#![deny(unsafe_code)]

pub mod bits;
pub mod descriptor;
pub mod hashes;
pub mod mathmult;
pub mod registry;
pub mod verify;

pub use descriptor::{
    Endianness, FamilyInfo, HashDescriptor, HashFlags, HashFn, ImplFlags, SrcStatus,
};
pub use registry::{Registry, global};
pub use verify::{INPUT_PADDING, compute_verification, verification_matches};
