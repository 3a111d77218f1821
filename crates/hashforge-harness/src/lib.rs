//! Verification-test harness for hashforge.
//!
//! This crate provides:
//! - Runner: drive every registered hash through the verification
//!   schedule and collect pass/fail results
//! - Fixtures: JSON-encoded published self-test vectors, replayable
//!   against the registered hashes
//! - Structured logging: canonical JSONL records for campaign runs
//! - Reports: machine-readable verification reports with SHA-256
//!   integrity digests

#![forbid(unsafe_code)]

pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;

pub use fixtures::{FixtureCase, FixtureSet};
pub use report::VerificationReport;
pub use runner::{VerificationOutcome, VerificationRunner};
