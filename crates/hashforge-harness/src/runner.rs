//! Verification campaign execution.

use hashforge_core::{Endianness, Registry, compute_verification};
use serde::Serialize;

/// The result of verifying one hash under one endianness request.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationOutcome {
    pub hash: String,
    pub family: String,
    pub endian: String,
    pub computed: u32,
    pub expected: u32,
    pub passed: bool,
}

/// Runs the verification schedule across a registry.
pub struct VerificationRunner<'r> {
    registry: &'r Registry,
    /// Optional case filter: exact canonical hash name.
    pub filter: Option<String>,
}

fn endian_label(e: Endianness) -> &'static str {
    match e {
        Endianness::Default => "default",
        Endianness::NonDefault => "nondefault",
        Endianness::Native => "native",
        Endianness::Byteswapped => "byteswapped",
        Endianness::Little => "little",
        Endianness::Big => "big",
    }
}

impl<'r> VerificationRunner<'r> {
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        VerificationRunner {
            registry,
            filter: None,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, name: impl Into<String>) -> Self {
        self.filter = Some(name.into());
        self
    }

    /// Verify every selected hash under both endian variants.
    #[must_use]
    pub fn run(&self, endians: &[Endianness]) -> Vec<VerificationOutcome> {
        let mut results = Vec::new();
        for h in self.registry.list_all() {
            if let Some(filter) = &self.filter {
                if !h.name.eq_ignore_ascii_case(filter) {
                    continue;
                }
            }
            for &endian in endians {
                let computed = compute_verification(h, endian);
                let expected = h.expected_verification(endian);
                results.push(VerificationOutcome {
                    hash: h.name.clone(),
                    family: h.family.to_string(),
                    endian: endian_label(endian).to_string(),
                    computed,
                    expected,
                    passed: computed == expected,
                });
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashforge_core::global;

    #[test]
    fn filter_selects_a_single_hash() {
        let runner = VerificationRunner::new(global()).with_filter("wyhash");
        let results = runner.run(&[Endianness::Native, Endianness::Byteswapped]);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.hash == "wyhash"));
    }

    #[test]
    fn unfiltered_run_covers_the_registry() {
        let runner = VerificationRunner::new(global());
        let results = runner.run(&[Endianness::Default]);
        assert_eq!(results.len(), global().len());
    }
}
