use std::collections::BTreeMap;

use crate::catalog::{EnhancementTier, Stat, StatDelta};
use crate::equipment::EquipmentInstance;
use crate::error::EngineError;
use crate::rng::RandomSource;

use super::types::{outcome_table, EnhancementOutcome, OutcomeKind};

/// Runs one enhancement attempt and returns the advanced instance plus the
/// outcome.
///
/// The input is never mutated; callers holding the old value can diff
/// before and after. Attempting on a destroyed or exhausted instance is a
/// precondition violation, never a silent no-op.
pub fn attempt(
    instance: &EquipmentInstance,
    tier: &EnhancementTier,
    rng: &mut impl RandomSource,
) -> Result<(EquipmentInstance, EnhancementOutcome), EngineError> {
    if instance.is_destroyed {
        return Err(EngineError::AlreadyDestroyed);
    }
    if instance.remaining_upgrades == 0 {
        return Err(EngineError::NoAttemptsRemaining);
    }

    let table = outcome_table(tier)?;

    let mut next = instance.clone();
    // One attempt consumed no matter how the roll lands.
    next.remaining_upgrades -= 1;

    let outcome = match table.select(rng) {
        OutcomeKind::Success => {
            apply_delta(&mut next.current_stats, &tier.bonus);
            next.enhance_count += 1;
            EnhancementOutcome::Success {
                delta: tier.bonus.clone(),
            }
        }
        OutcomeKind::Fail => EnhancementOutcome::Fail,
        OutcomeKind::Destroy => {
            next.is_destroyed = true;
            EnhancementOutcome::Destroyed
        }
    };

    Ok((next, outcome))
}

/// Applies the whole delta in one step. Stats the delta names but the
/// instance lacks are created; values clamp at zero rather than going
/// negative.
fn apply_delta(stats: &mut BTreeMap<Stat, i32>, delta: &StatDelta) {
    for (&stat, &amount) in delta {
        let slot = stats.entry(stat).or_insert(0);
        *slot = (*slot + amount).max(0);
    }
}
