//! The central acceptance property: for every registered hash and every
//! endianness request, the computed verification digest must equal the
//! declared constant. A single mismatch pinpoints a porting defect in
//! the byte I/O, the wide math, a seeding RNG, or the hash body itself.

use hashforge_core::{Endianness, compute_verification, global};

#[test]
fn every_hash_verifies_native_and_byteswapped() {
    let mut failures = Vec::new();
    for h in global().list_all() {
        for endian in [Endianness::Native, Endianness::Byteswapped] {
            let computed = compute_verification(h, endian);
            let expected = h.expected_verification(endian);
            if computed != expected {
                failures.push(format!(
                    "{}: {:?} computed {:#010x}, expected {:#010x}",
                    h.name, endian, computed, expected
                ));
            }
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn default_and_nondefault_requests_also_verify() {
    for h in global().list_all() {
        for endian in [Endianness::Default, Endianness::NonDefault] {
            assert_eq!(
                compute_verification(h, endian),
                h.expected_verification(endian),
                "{} under {:?}",
                h.name,
                endian
            );
        }
    }
}

#[test]
fn spec_scenarios_carry_their_published_codes() {
    // A few registrations double as documented end-to-end scenarios;
    // pin their constants so a metadata edit cannot go unnoticed.
    let reg = global();
    let a5 = reg.lookup("a5hash").expect("a5hash registered");
    assert_eq!(a5.verification_le, 0xADDE79B3);
    assert_eq!(a5.verification_be, 0x11A303D0);

    let polymur = reg.lookup("polymurhash").expect("polymur registered");
    assert_eq!(polymur.verification_le, 0x0722B1A7);

    let wy = reg.lookup("wyhash-strict").expect("wyhash strict registered");
    assert_eq!(wy.verification_le, 0x82FE7E2E);
}
