//! Identifier generation for newly created expense records.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces identifiers that do not collide within a session.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter with a fixed prefix (`exp-1`, `exp-2`, ...).
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(first),
        }
    }

    /// Counter that resumes after the highest `<prefix>-N` among `existing`.
    pub fn continuing<'a>(
        prefix: impl Into<String>,
        existing: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let prefix = prefix.into();
        let marker = format!("{}-", prefix);
        let highest = existing
            .into_iter()
            .filter_map(|id| id.strip_prefix(marker.as_str()))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::starting_at(prefix, highest + 1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let value = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sequential_ids_never_repeat() {
        let ids = SequentialIds::new("exp");
        let generated: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 100);
        assert_eq!(ids.next_id(), "exp-101");
    }

    #[test]
    fn continuing_skips_ids_already_taken() {
        let taken = ["1", "exp-2", "exp-7", "exp-x", "cap-40", "exp-"];
        let ids = SequentialIds::continuing("exp", taken);
        assert_eq!(ids.next_id(), "exp-8");
        assert_eq!(SequentialIds::continuing("exp", []).next_id(), "exp-1");
    }

    #[test]
    fn uuid_ids_are_distinct() {
        let ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
