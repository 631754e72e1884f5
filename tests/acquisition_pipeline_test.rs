//! Integration test: full acquisition pipeline
//!
//! Drop resolution → stat variance → concrete instance → enhancement,
//! driven end to end through the catalog the way the host application
//! would.

use chrono::Utc;
use maplesim::catalog::{
    BaseEquipmentStats, Catalog, DropTableEntry, EnhancementTier, ItemCategory, LevelMeta, Stat,
    StatDelta,
};
use maplesim::drops::resolve;
use maplesim::enhancement::{attempt, EnhancementOutcome};
use maplesim::equipment::{acquire, DropSource};
use maplesim::error::EngineError;
use maplesim::variance;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_kill_to_destruction_scenario() {
    // A certain drop of exactly two of item 5.
    let table = [DropTableEntry {
        item_id: 5,
        chance: 1.0,
        min_qty: 2,
        max_qty: 2,
    }];
    let mut rng = ChaCha8Rng::seed_from_u64(123);

    let drops = resolve(&table, &mut rng).unwrap();
    assert_eq!(drops.len(), 1);
    assert_eq!(drops[0].item_id, 5);
    assert_eq!(drops[0].quantity, 2);

    // str 10 at req level 50, single primary stat: O = 5 → range [5, 15].
    let base = BaseEquipmentStats {
        str: Some(10),
        upgrades: 1,
        ..Default::default()
    };
    let meta = LevelMeta {
        req_level: 50,
        one_piece: false,
        category: ItemCategory::Armor,
    };
    let ranges = variance::generate(&base, &meta);
    assert_eq!(ranges[&Stat::Str].min, 5);
    assert_eq!(ranges[&Stat::Str].max, 15);

    let instance = acquire(
        5,
        &base,
        &meta,
        DropSource::Monster { mob_id: 100100 },
        Utc::now(),
        &mut rng,
    );
    assert!((5..=15).contains(&instance.current_stats[&Stat::Str]));
    assert_eq!(instance.remaining_upgrades, 1);

    // A tier that can only destroy.
    let doom = EnhancementTier {
        destroy_weight: 1,
        ..Default::default()
    };
    let (after, outcome) = attempt(&instance, &doom, &mut rng).unwrap();
    assert_eq!(outcome, EnhancementOutcome::Destroyed);
    assert_eq!(after.remaining_upgrades, 0);
    assert!(after.is_destroyed);
    assert_eq!(after.current_stats, instance.current_stats);

    // Terminal: both the destruction and the spent attempts refuse more.
    assert!(matches!(
        attempt(&after, &doom, &mut rng),
        Err(EngineError::AlreadyDestroyed)
    ));
}

#[test]
fn test_gacha_pull_through_catalog() {
    let json = r#"{
        "items": {
            "1302000": {
                "base": { "watk": 17, "upgrades": 7 },
                "meta": { "reqLevel": 10, "category": "weapon" }
            }
        },
        "gachaMachines": [
            {
                "machineId": 1,
                "items": [ { "outcome": 1302000, "weight": 1 } ]
            }
        ],
        "enhancementTiers": [
            { "successWeight": 1, "bonus": { "watk": 2 } }
        ]
    }"#;
    let catalog = Catalog::load(json).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let machine = catalog.gacha_machine(1).unwrap();
    let item_id = machine.pull(&mut rng).unwrap();
    assert_eq!(item_id, 1302000);

    let record = catalog.item(item_id).unwrap();
    let instance = acquire(
        item_id,
        &record.base,
        &record.meta,
        DropSource::Gacha { machine_id: 1 },
        Utc::now(),
        &mut rng,
    );
    assert_eq!(instance.remaining_upgrades, 7);

    // watk at req level 10: O = 1, A = 0.5 → range [17 - 0.5, 17 + 0.5]
    // rounds to [17, 18] (round half away from zero).
    let watk = instance.current_stats[&Stat::Watk];
    assert!((17..=18).contains(&watk), "watk {watk} outside rolled range");

    // Guaranteed success applies the catalog bonus.
    let tier = catalog.tier(instance.enhance_count).unwrap();
    let (after, outcome) = attempt(&instance, tier, &mut rng).unwrap();
    assert_eq!(
        outcome,
        EnhancementOutcome::Success {
            delta: StatDelta::from([(Stat::Watk, 2)])
        }
    );
    assert_eq!(after.current_stats[&Stat::Watk], watk + 2);
    assert_eq!(after.enhance_count, 1);
    assert_eq!(after.remaining_upgrades, 6);
}

#[test]
fn test_enhancement_runs_down_to_exhaustion() {
    let base = BaseEquipmentStats {
        watk: Some(20),
        upgrades: 5,
        ..Default::default()
    };
    let meta = LevelMeta {
        req_level: 30,
        one_piece: false,
        category: ItemCategory::Weapon,
    };
    let tier = EnhancementTier {
        success_weight: 1,
        bonus: StatDelta::from([(Stat::Watk, 1)]),
        ..Default::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(31);

    let mut current = acquire(
        1,
        &base,
        &meta,
        DropSource::Monster { mob_id: 9 },
        Utc::now(),
        &mut rng,
    );
    let start_watk = current.current_stats[&Stat::Watk];

    for round in 1..=5 {
        let (next, outcome) = attempt(&current, &tier, &mut rng).unwrap();
        assert!(outcome.is_success());
        assert_eq!(next.remaining_upgrades, 5 - round);
        assert_eq!(next.enhance_count, round);
        current = next;
    }

    assert_eq!(current.current_stats[&Stat::Watk], start_watk + 5);
    assert!(matches!(
        attempt(&current, &tier, &mut rng),
        Err(EngineError::NoAttemptsRemaining)
    ));
}
