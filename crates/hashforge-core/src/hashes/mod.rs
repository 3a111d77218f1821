//! Hash family implementations.
//!
//! Each module ports one family bit-exactly and contributes its
//! registrations through `register`. Families whose only available
//! reference is hardware-specific (AES-NI t1ha0 variants, the SSSE3
//! khashv kernel) are not registered; the portable algorithms here are
//! the canonical ones.

pub mod a5hash;
pub mod crap;
pub mod fnv;
pub mod komihash;
pub mod multiply_shift;
pub mod mum_mir;
pub mod museair;
pub mod pmp_multilinear;
mod pmp_tables;
pub mod poly_mersenne;
pub mod polymur;
pub mod rapidhash;
pub mod rust_fxhash;
pub mod rust_rapidhash;
pub mod t1ha;
mod t1ha_refvals;
pub mod tabulation;
pub mod umash;
pub mod w1hash;
pub mod wyhash;

pub use t1ha::T1ha2Context;

use crate::registry::RegistryBuilder;

/// Register every family. Called once while building the global
/// registry.
pub(crate) fn register_all(reg: &mut RegistryBuilder) {
    a5hash::register(reg);
    crap::register(reg);
    fnv::register(reg);
    komihash::register(reg);
    multiply_shift::register(reg);
    mum_mir::register(reg);
    museair::register(reg);
    pmp_multilinear::register(reg);
    poly_mersenne::register(reg);
    polymur::register(reg);
    rapidhash::register(reg);
    rust_fxhash::register(reg);
    rust_rapidhash::register(reg);
    t1ha::register(reg);
    tabulation::register(reg);
    umash::register(reg);
    w1hash::register(reg);
    wyhash::register(reg);
}
