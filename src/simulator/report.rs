//! Aggregated drop statistics.

use std::collections::HashMap;

use crate::catalog::ItemId;
use crate::drops::ResolvedDrop;

/// Results aggregated over a batch of kills.
#[derive(Debug, Clone, Default)]
pub struct DropReport {
    pub kills: u32,
    pub total_drops: u64,
    pub total_quantity: u64,
    pub drops_per_item: HashMap<ItemId, u64>,
}

impl DropReport {
    /// Records one kill's resolved drops.
    pub fn record(&mut self, drops: &[ResolvedDrop]) {
        self.kills += 1;
        for drop in drops {
            self.total_drops += 1;
            self.total_quantity += u64::from(drop.quantity);
            *self.drops_per_item.entry(drop.item_id).or_insert(0) += 1;
        }
    }

    /// Average drops per kill. Can exceed 1.0 since table entries are
    /// independent trials.
    pub fn drop_rate(&self) -> f64 {
        if self.kills == 0 {
            0.0
        } else {
            self.total_drops as f64 / f64::from(self.kills)
        }
    }

    /// Observed trigger rate for one item id.
    pub fn item_rate(&self, item_id: ItemId) -> f64 {
        if self.kills == 0 {
            return 0.0;
        }
        let hits = self.drops_per_item.get(&item_id).copied().unwrap_or(0);
        hits as f64 / f64::from(self.kills)
    }

    /// Average quantity per triggered drop.
    pub fn avg_quantity(&self) -> f64 {
        if self.total_drops == 0 {
            0.0
        } else {
            self.total_quantity as f64 / self.total_drops as f64
        }
    }
}
