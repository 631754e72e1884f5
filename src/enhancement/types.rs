use serde::{Deserialize, Serialize};

use crate::catalog::{EnhancementTier, StatDelta};
use crate::error::EngineError;
use crate::weighted::{WeightedOutcome, WeightedTable};

/// Tagged result of a single enhancement attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnhancementOutcome {
    /// The tier's stat bonus was applied.
    Success { delta: StatDelta },
    /// Nothing changed, but the attempt was still consumed.
    Fail,
    /// The instance is gone for good.
    Destroyed,
}

impl EnhancementOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EnhancementOutcome::Success { .. })
    }
}

/// Internal draw target for the 3-way outcome roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutcomeKind {
    Success,
    Fail,
    Destroy,
}

/// Builds the weighted outcome table for a tier. Zero-weight outcomes are
/// left out (e.g. no destruction below the risky tiers); a tier with no
/// positive weight at all is a data-integrity error.
pub(crate) fn outcome_table(
    tier: &EnhancementTier,
) -> Result<WeightedTable<OutcomeKind>, EngineError> {
    let mut entries = Vec::with_capacity(3);
    for (kind, weight) in [
        (OutcomeKind::Success, tier.success_weight),
        (OutcomeKind::Fail, tier.fail_weight),
        (OutcomeKind::Destroy, tier.destroy_weight),
    ] {
        if weight > 0 {
            entries.push(WeightedOutcome {
                outcome: kind,
                weight,
            });
        }
    }
    WeightedTable::new(entries).map_err(|_| EngineError::DeadTier)
}
