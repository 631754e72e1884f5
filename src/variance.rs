//! Equipment stat variance.
//!
//! Range computation is fully deterministic — the level-derived magnitude
//! `O` is split across stat families and widens each base stat into a
//! `[min, max]` window. Only [`roll`] consumes randomness, which keeps the
//! allocation rules testable without a seed.
//!
//! Family allocation of `O = req_level / 10` (doubled for one-piece armor):
//! primary stats split `O` between the primaries present, weapon/magic
//! attack and speed get `O / 2`, accuracy and avoidability the full `O`,
//! jump `O / 4`, and hp/mp/defenses `O × 5`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{BaseEquipmentStats, ItemCategory, LevelMeta, Stat};
use crate::rng::RandomSource;

/// A rolled stat window. Invariants: `min <= base <= max`, `min >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRange {
    pub base: i32,
    pub min: i32,
    pub max: i32,
}

const PRIMARY_STATS: [Stat; 4] = [Stat::Str, Stat::Dex, Stat::Int, Stat::Luk];

/// Computes the variance range for every stat present on the base item.
/// Absent stats are omitted, not zeroed. Projectiles roll no variance at
/// all and yield an empty map.
pub fn generate(base: &BaseEquipmentStats, meta: &LevelMeta) -> BTreeMap<Stat, StatRange> {
    let mut ranges = BTreeMap::new();
    if meta.category == ItemCategory::Projectile {
        return ranges;
    }

    let mut magnitude = f64::from(meta.req_level) / 10.0;
    if meta.one_piece {
        magnitude *= 2.0;
    }

    let primary_count = PRIMARY_STATS
        .iter()
        .filter(|&&s| base.get(s).is_some())
        .count();

    for stat in Stat::ALL {
        let Some(b) = base.get(stat) else { continue };
        let allocation = round2(allocation_for(stat, magnitude, primary_count));
        let min = ((f64::from(b) - allocation).round() as i32).max(0);
        let max = (f64::from(b) + allocation).round() as i32;
        ranges.insert(stat, StatRange { base: b, min, max });
    }
    ranges
}

/// Draws the concrete value for one stat. The only randomness-consuming
/// step of acquisition.
pub fn roll(range: &StatRange, rng: &mut impl RandomSource) -> i32 {
    rng.uniform_int(range.min, range.max)
}

fn allocation_for(stat: Stat, magnitude: f64, primary_count: usize) -> f64 {
    match stat {
        Stat::Str | Stat::Dex | Stat::Int | Stat::Luk => {
            if primary_count == 0 {
                magnitude
            } else {
                magnitude / primary_count as f64
            }
        }
        Stat::Watk | Stat::Matk | Stat::Speed => magnitude / 2.0,
        Stat::Accuracy | Stat::Avoidability => magnitude,
        Stat::Jump => magnitude / 4.0,
        Stat::Hp | Stat::Mp | Stat::Wdef | Stat::Mdef => magnitude * 5.0,
        // Attack speed is a discrete tier, not a varying stat.
        Stat::AttackSpeed => 0.0,
    }
}

/// Allocations are rounded to 2 decimal places before widening the range.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
