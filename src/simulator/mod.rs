//! Batch drop simulation for balance analysis.
//!
//! Runs many kills against a drop table through the real resolver and
//! aggregates the results. Seeding the config makes a whole batch
//! reproducible; the core itself stays pure.

mod config;
mod report;

pub use config::SimConfig;
pub use report::DropReport;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::DropTableEntry;
use crate::drops::resolve;
use crate::error::EngineError;

/// Resolves `config.num_kills` kills against `table` and aggregates.
pub fn run_drop_simulation(
    table: &[DropTableEntry],
    config: &SimConfig,
) -> Result<DropReport, EngineError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut report = DropReport::default();
    for _ in 0..config.num_kills {
        let drops = resolve(table, &mut rng)?;
        report.record(&drops);
    }
    Ok(report)
}
