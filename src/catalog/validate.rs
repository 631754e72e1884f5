//! Load-time catalog validation.
//!
//! Malformed catalog data means a bug in the data layer, so every check
//! here fails loudly instead of clamping or defaulting.

use crate::error::EngineError;

use super::types::{Catalog, DropTableEntry, EnhancementTier};

/// Checks every entry of a drop table: chance in `[0, 1]`, quantity range
/// not inverted.
pub fn validate_drop_table(table: &[DropTableEntry]) -> Result<(), EngineError> {
    for entry in table {
        if !(0.0..=1.0).contains(&entry.chance) {
            return Err(EngineError::ChanceOutOfRange {
                item_id: entry.item_id,
                chance: entry.chance,
            });
        }
        if entry.min_qty > entry.max_qty {
            return Err(EngineError::InvertedQuantityRange {
                item_id: entry.item_id,
                min_qty: entry.min_qty,
                max_qty: entry.max_qty,
            });
        }
    }
    Ok(())
}

/// A tier needs at least one positive outcome weight to be drawable.
pub fn validate_tier(tier: &EnhancementTier) -> Result<(), EngineError> {
    if tier.success_weight == 0 && tier.fail_weight == 0 && tier.destroy_weight == 0 {
        return Err(EngineError::DeadTier);
    }
    Ok(())
}

impl Catalog {
    pub fn validate(&self) -> Result<(), EngineError> {
        for table in self.drop_tables.values() {
            validate_drop_table(table)?;
        }
        for machine in &self.gacha_machines {
            machine.table()?;
        }
        for tier in &self.enhancement_tiers {
            validate_tier(tier)?;
        }
        Ok(())
    }
}
