use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};

/// Hands out gap-free document numbers, one independent sequence per key.
///
/// Yearly sequences reset by key (`DEV-2024` and `DEV-2025` are separate
/// counters); plain codes grow forever. Allocation happens under the
/// write lock so two concurrent saves can never draw the same number.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    counters: RwLock<HashMap<String, u64>>,
}

impl SequenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&self, key: &str) -> StoreResult<u64> {
        let mut counters = self.counters.write().map_err(|_| StoreError::Poisoned)?;
        let next = counters.entry(key.to_string()).or_insert(0);
        *next += 1;
        Ok(*next)
    }

    /// Next number in a per-year sequence: `DEV-2024-001`, `AFF-2024-012`.
    pub fn next_yearly(&self, prefix: &str, year: i32) -> StoreResult<String> {
        let n = self.bump(&format!("{prefix}-{year}"))?;
        Ok(format!("{prefix}-{year}-{n:03}"))
    }

    /// Next code in a flat sequence: `CL00042`.
    pub fn next_code(&self, prefix: &str, width: usize) -> StoreResult<String> {
        let n = self.bump(prefix)?;
        Ok(format!("{prefix}{n:0width$}"))
    }

    /// Moves a sequence forward so freshly issued numbers never collide
    /// with records loaded from an earlier session.
    pub fn advance_to(&self, key: &str, at_least: u64) -> StoreResult<()> {
        let mut counters = self.counters.write().map_err(|_| StoreError::Poisoned)?;
        let current = counters.entry(key.to_string()).or_insert(0);
        if *current < at_least {
            *current = at_least;
        }
        Ok(())
    }
}
