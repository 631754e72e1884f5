//! Simulation configuration.

/// Configuration for a batch drop simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of kills to resolve
    pub num_kills: u32,

    /// Random seed for reproducibility (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_kills: 1000,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Reproducible run with a fixed seed.
    pub fn seeded(num_kills: u32, seed: u64) -> Self {
        Self {
            num_kills,
            seed: Some(seed),
        }
    }
}
