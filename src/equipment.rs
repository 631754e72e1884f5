//! Concrete equipment instances.
//!
//! An instance is created once per acquisition event (monster drop or
//! gacha pull) and only ever changes through enhancement transitions,
//! which return new values rather than mutating in place.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{BaseEquipmentStats, ItemId, LevelMeta, Stat};
use crate::rng::RandomSource;
use crate::variance;

/// Where an instance came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DropSource {
    Monster { mob_id: u32 },
    Gacha { machine_id: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentInstance {
    pub item_id: ItemId,
    pub current_stats: BTreeMap<Stat, i32>,
    pub remaining_upgrades: u32,
    pub enhance_count: u32,
    pub is_destroyed: bool,
    pub source: DropSource,
    pub acquired_at: DateTime<Utc>,
}

/// Rolls a fresh instance from an item's base stats.
///
/// `acquired_at` is supplied by the caller; the engine never reads the
/// wall clock, so acquisition stays reproducible under a fixed seed.
pub fn acquire(
    item_id: ItemId,
    base: &BaseEquipmentStats,
    meta: &LevelMeta,
    source: DropSource,
    acquired_at: DateTime<Utc>,
    rng: &mut impl RandomSource,
) -> EquipmentInstance {
    let mut current_stats = BTreeMap::new();
    for (stat, range) in variance::generate(base, meta) {
        current_stats.insert(stat, variance::roll(&range, rng));
    }
    EquipmentInstance {
        item_id,
        current_stats,
        remaining_upgrades: base.upgrades,
        enhance_count: 0,
        is_destroyed: false,
        source,
        acquired_at,
    }
}
