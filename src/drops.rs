//! Monster drop resolution.
//!
//! Every drop table entry is an independent Bernoulli trial, so a single
//! kill can yield zero, one, or many drops. Nothing here picks "one of the
//! table"; that is what gacha machines are for.

use serde::{Deserialize, Serialize};

use crate::catalog::{validate_drop_table, DropTableEntry, ItemId};
use crate::error::EngineError;
use crate::rng::RandomSource;

/// One triggered drop with its rolled quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDrop {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Resolves a monster's drop table for a single kill.
///
/// The table is validated up front, so a malformed entry fails the whole
/// call before any randomness is consumed. Output preserves table order;
/// duplicate item ids are separate trials and are not merged.
pub fn resolve(
    table: &[DropTableEntry],
    rng: &mut impl RandomSource,
) -> Result<Vec<ResolvedDrop>, EngineError> {
    validate_drop_table(table)?;

    let mut drops = Vec::new();
    for entry in table {
        if rng.uniform() < entry.chance {
            drops.push(ResolvedDrop {
                item_id: entry.item_id,
                quantity: roll_quantity(entry, rng),
            });
        }
    }
    Ok(drops)
}

fn roll_quantity(entry: &DropTableEntry, rng: &mut impl RandomSource) -> u32 {
    let span = f64::from(entry.max_qty - entry.min_qty + 1);
    let rolled = entry.min_qty + (rng.uniform() * span) as u32;
    // uniform() can sit just under 1.0; keep the roll inside the range.
    rolled.min(entry.max_qty)
}
