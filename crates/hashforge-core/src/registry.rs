//! Process-wide hash registry.
//!
//! All families register their descriptors when the registry is first
//! touched; after that the registry is read-only. Registration runs each
//! descriptor's `init` callback and silently drops hashes whose init
//! reports the host cannot support them.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::descriptor::{FamilyInfo, HashDescriptor};
use crate::hashes;

/// Collects family and hash registrations during startup.
#[derive(Default)]
pub struct RegistryBuilder {
    families: Vec<FamilyInfo>,
    hashes: Vec<HashDescriptor>,
}

impl RegistryBuilder {
    /// Declare family-level metadata.
    pub fn family(&mut self, info: FamilyInfo) {
        self.families.push(info);
    }

    /// Register one hash variant.
    pub fn add(&mut self, descriptor: HashDescriptor) {
        self.hashes.push(descriptor);
    }

    fn finish(mut self) -> Registry {
        // A failing init means the hash is unavailable on this host; it
        // is never registered and never observable at runtime.
        self.hashes.retain(|h| h.run_init());
        self.hashes
            .sort_by(|a, b| {
                a.family
                    .cmp(b.family)
                    .then(a.sort_order.cmp(&b.sort_order))
                    .then(a.name.cmp(&b.name))
            });
        let by_name = self
            .hashes
            .iter()
            .enumerate()
            .map(|(i, h)| (h.name.to_ascii_lowercase(), i))
            .collect();
        Registry {
            families: self.families,
            hashes: self.hashes,
            by_name,
        }
    }
}

/// The immutable, sorted set of registered hashes.
pub struct Registry {
    families: Vec<FamilyInfo>,
    hashes: Vec<HashDescriptor>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// All registered hashes, ordered by family name, then sort order,
    /// then hash name.
    #[must_use]
    pub fn list_all(&self) -> &[HashDescriptor] {
        &self.hashes
    }

    /// All registered families.
    #[must_use]
    pub fn families(&self) -> &[FamilyInfo] {
        &self.families
    }

    /// Look a hash up by canonical name (case-insensitive).
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&HashDescriptor> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|&i| &self.hashes[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The global registry, built on first use.
#[must_use]
pub fn global() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let mut builder = RegistryBuilder::default();
        hashes::register_all(&mut builder);
        builder.finish()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_nonempty_and_sorted() {
        let reg = global();
        assert!(!reg.is_empty());
        let all = reg.list_all();
        for pair in all.windows(2) {
            let key = |h: &HashDescriptor| (h.family, h.sort_order, h.name.clone());
            assert!(key(&pair[0]) <= key(&pair[1]));
        }
    }

    #[test]
    fn lookup_finds_registered_names() {
        let reg = global();
        let first = &reg.list_all()[0];
        assert_eq!(
            reg.lookup(&first.name).map(|h| h.name.as_str()),
            Some(first.name.as_str())
        );
        assert_eq!(
            reg.lookup(&first.name.to_ascii_uppercase())
                .map(|h| h.name.as_str()),
            Some(first.name.as_str())
        );
        assert!(reg.lookup("no-such-hash").is_none());
    }

    #[test]
    fn names_contain_no_underscores() {
        for h in global().list_all() {
            assert!(!h.name.contains('_'), "{}", h.name);
        }
    }
}
