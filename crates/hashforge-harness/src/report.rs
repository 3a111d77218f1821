//! Machine-readable verification reports.

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::runner::VerificationOutcome;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Summary of one verification campaign.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub campaign: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<VerificationOutcome>,
    /// SHA-256 over the serialized outcome list, for artifact
    /// cross-referencing from the structured log.
    pub artifact_sha256: String,
}

impl VerificationReport {
    #[must_use]
    pub fn from_outcomes(campaign: impl Into<String>, outcomes: &[VerificationOutcome]) -> Self {
        let serialized = serde_json::to_vec(outcomes).expect("outcomes serialize");
        let digest = Sha256::digest(&serialized);
        let artifact_sha256 = digest.iter().map(|b| format!("{b:02x}")).collect();

        let failed: Vec<VerificationOutcome> =
            outcomes.iter().filter(|o| !o.passed).cloned().collect();
        VerificationReport {
            campaign: campaign.into(),
            total: outcomes.len(),
            passed: outcomes.len() - failed.len(),
            failed: failed.len(),
            failures: failed,
            artifact_sha256,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn write_json(&self, path: &std::path::Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self).expect("report serializes");
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, passed: bool) -> VerificationOutcome {
        VerificationOutcome {
            hash: name.to_string(),
            family: "fam".to_string(),
            endian: "native".to_string(),
            computed: 1,
            expected: if passed { 1 } else { 2 },
            passed,
        }
    }

    #[test]
    fn report_counts_and_digest_are_stable() {
        let outcomes = vec![outcome("a", true), outcome("b", false)];
        let r1 = VerificationReport::from_outcomes("smoke", &outcomes);
        let r2 = VerificationReport::from_outcomes("smoke", &outcomes);
        assert_eq!(r1.total, 2);
        assert_eq!(r1.passed, 1);
        assert_eq!(r1.failed, 1);
        assert!(!r1.all_passed());
        assert_eq!(r1.artifact_sha256, r2.artifact_sha256);
        assert_eq!(r1.artifact_sha256.len(), 64);
    }
}
