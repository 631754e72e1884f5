//! Weighted random draw over a validated outcome table.
//!
//! This is the primitive behind gacha pulls, slot reels and enhancement
//! outcome rolls: one outcome is drawn with probability proportional to its
//! weight.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::rng::RandomSource;

/// One outcome with its selection weight. Weights are strictly positive;
/// zero weights are rejected when the table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedOutcome<T> {
    pub outcome: T,
    pub weight: u32,
}

/// A non-empty list of weighted outcomes, validated on construction so
/// `select` itself cannot fail.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<WeightedOutcome<T>>,
    total_weight: u64,
}

impl<T> WeightedTable<T> {
    pub fn new(entries: Vec<WeightedOutcome<T>>) -> Result<Self, EngineError> {
        if entries.is_empty() {
            return Err(EngineError::EmptyTable);
        }
        for (index, entry) in entries.iter().enumerate() {
            if entry.weight == 0 {
                return Err(EngineError::ZeroWeight { index });
            }
        }
        let total_weight = entries.iter().map(|e| u64::from(e.weight)).sum();
        Ok(Self {
            entries,
            total_weight,
        })
    }

    /// Draws one outcome proportional to weight.
    ///
    /// The draw takes `r` uniform in `[0, total_weight)` and walks the
    /// entries subtracting each weight; the first entry whose cumulative
    /// boundary is crossed wins. Ties therefore resolve in table order,
    /// which is observable under a fixed seed and must stay stable. If
    /// floating-point rounding leaves a sliver after the scan, the last
    /// entry is returned.
    pub fn select(&self, rng: &mut impl RandomSource) -> &T {
        let mut r = rng.uniform_range(0.0, self.total_weight as f64);
        for entry in &self.entries {
            let w = f64::from(entry.weight);
            if r < w {
                return &entry.outcome;
            }
            r -= w;
        }
        &self.entries[self.entries.len() - 1].outcome
    }

    pub fn entries(&self) -> &[WeightedOutcome<T>] {
        &self.entries
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }
}
