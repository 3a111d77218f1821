//! End-to-end harness flow: run a campaign, log it, report it.

use hashforge_core::{Endianness, global};
use hashforge_harness::report::VerificationReport;
use hashforge_harness::runner::VerificationRunner;
use hashforge_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, validate_log};

#[test]
fn full_campaign_produces_consistent_log_and_report() {
    let outcomes = VerificationRunner::new(global())
        .run(&[Endianness::Native, Endianness::Byteswapped]);
    assert_eq!(outcomes.len(), global().len() * 2);

    let emitter = LogEmitter::new(Vec::new());
    for o in &outcomes {
        let mut entry = LogEntry::event("campaign-test", LogLevel::Info, "verification");
        entry.hash = Some(o.hash.clone());
        entry.endian = Some(o.endian.clone());
        entry.outcome = Some(if o.passed { Outcome::Pass } else { Outcome::Fail });
        emitter.emit(&entry).unwrap();
    }
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    let entries = validate_log(&text).unwrap();
    assert_eq!(entries.len(), outcomes.len());

    let report = VerificationReport::from_outcomes("campaign-test", &outcomes);
    assert_eq!(report.total, outcomes.len());
    assert!(report.all_passed(), "failures: {:?}", report.failures);
}

#[test]
fn single_hash_campaign_isolates_one_registration() {
    let outcomes =
        VerificationRunner::new(global())
            .with_filter("komihash")
            .run(&[Endianness::Default]);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].hash, "komihash");
    assert!(outcomes[0].passed);
}
