use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::rng::RandomSource;
use crate::weighted::{WeightedOutcome, WeightedTable};

pub type ItemId = u32;

/// A per-stat amount applied on a successful enhancement. The concrete
/// bonus table ships with the catalog; this engine applies it verbatim.
pub type StatDelta = BTreeMap<Stat, i32>;

/// Every stat an equipment instance can carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Stat {
    Str,
    Dex,
    Int,
    Luk,
    Watk,
    Matk,
    Wdef,
    Mdef,
    Hp,
    Mp,
    Accuracy,
    Avoidability,
    Speed,
    Jump,
    AttackSpeed,
}

impl Stat {
    pub const ALL: [Stat; 15] = [
        Stat::Str,
        Stat::Dex,
        Stat::Int,
        Stat::Luk,
        Stat::Watk,
        Stat::Matk,
        Stat::Wdef,
        Stat::Mdef,
        Stat::Hp,
        Stat::Mp,
        Stat::Accuracy,
        Stat::Avoidability,
        Stat::Speed,
        Stat::Jump,
        Stat::AttackSpeed,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCategory {
    Weapon,
    Armor,
    Accessory,
    /// Arrows, bullets and throwing stars: never roll stat variance.
    Projectile,
}

/// Level-derived metadata the variance generator needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelMeta {
    pub req_level: u32,
    /// Overall ("one-piece") armor doubles the variance magnitude.
    #[serde(default)]
    pub one_piece: bool,
    pub category: ItemCategory,
}

/// Base equipment stats from the item catalog. Absent stats stay `None`
/// and are omitted from variance generation, not treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseEquipmentStats {
    pub str: Option<i32>,
    pub dex: Option<i32>,
    pub int: Option<i32>,
    pub luk: Option<i32>,
    pub watk: Option<i32>,
    pub matk: Option<i32>,
    pub wdef: Option<i32>,
    pub mdef: Option<i32>,
    pub hp: Option<i32>,
    pub mp: Option<i32>,
    pub accuracy: Option<i32>,
    pub avoidability: Option<i32>,
    pub speed: Option<i32>,
    pub jump: Option<i32>,
    pub attack_speed: Option<i32>,
    /// Total enhancement attempts available on a fresh instance.
    pub upgrades: u32,
}

impl BaseEquipmentStats {
    pub fn get(&self, stat: Stat) -> Option<i32> {
        match stat {
            Stat::Str => self.str,
            Stat::Dex => self.dex,
            Stat::Int => self.int,
            Stat::Luk => self.luk,
            Stat::Watk => self.watk,
            Stat::Matk => self.matk,
            Stat::Wdef => self.wdef,
            Stat::Mdef => self.mdef,
            Stat::Hp => self.hp,
            Stat::Mp => self.mp,
            Stat::Accuracy => self.accuracy,
            Stat::Avoidability => self.avoidability,
            Stat::Speed => self.speed,
            Stat::Jump => self.jump,
            Stat::AttackSpeed => self.attack_speed,
        }
    }
}

/// One row of a monster's drop table. `chance` is an independent Bernoulli
/// probability, not a share of the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTableEntry {
    pub item_id: ItemId,
    pub chance: f64,
    pub min_qty: u32,
    pub max_qty: u32,
}

/// A gacha machine: one weighted item draw per currency spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GachaMachine {
    pub machine_id: u32,
    pub items: Vec<WeightedOutcome<ItemId>>,
}

impl GachaMachine {
    /// Builds the validated selection table for this machine.
    pub fn table(&self) -> Result<WeightedTable<ItemId>, EngineError> {
        WeightedTable::new(self.items.clone())
    }

    /// Draws one item id.
    pub fn pull(&self, rng: &mut impl RandomSource) -> Result<ItemId, EngineError> {
        Ok(*self.table()?.select(rng))
    }
}

/// Success/fail/destroy odds and the success stat bonus for one
/// enhancement tier. External data; a tier with all three weights zero is
/// rejected at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhancementTier {
    pub success_weight: u32,
    pub fail_weight: u32,
    pub destroy_weight: u32,
    pub bonus: StatDelta,
}

/// An item's full catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub base: BaseEquipmentStats,
    pub meta: LevelMeta,
}

/// The complete read-only catalog supplied by the data layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    /// Monster id → drop table.
    pub drop_tables: BTreeMap<u32, Vec<DropTableEntry>>,
    pub items: BTreeMap<ItemId, ItemRecord>,
    pub gacha_machines: Vec<GachaMachine>,
    /// Indexed by the instance's current `enhance_count`.
    pub enhancement_tiers: Vec<EnhancementTier>,
}

impl Catalog {
    /// Parses and validates a catalog in one step, pushing missing-field
    /// and bad-value handling to load time.
    pub fn load(json: &str) -> Result<Self, EngineError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn drop_table(&self, mob_id: u32) -> Option<&[DropTableEntry]> {
        self.drop_tables.get(&mob_id).map(Vec::as_slice)
    }

    pub fn item(&self, item_id: ItemId) -> Option<&ItemRecord> {
        self.items.get(&item_id)
    }

    pub fn gacha_machine(&self, machine_id: u32) -> Option<&GachaMachine> {
        self.gacha_machines
            .iter()
            .find(|m| m.machine_id == machine_id)
    }

    pub fn tier(&self, enhance_count: u32) -> Option<&EnhancementTier> {
        self.enhancement_tiers.get(enhance_count as usize)
    }
}
