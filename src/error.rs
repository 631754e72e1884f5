//! Engine error taxonomy.
//!
//! Two families: data-integrity errors (malformed catalog input, a bug in
//! the external data layer) and precondition violations (caller bugs like
//! enhancing a destroyed item). Neither is recoverable locally, so both are
//! surfaced as typed errors rather than corrected or swallowed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    // --- data integrity ---
    #[error("drop chance {chance} for item {item_id} is outside [0, 1]")]
    ChanceOutOfRange { item_id: u32, chance: f64 },

    #[error("quantity range for item {item_id} is inverted: min {min_qty} > max {max_qty}")]
    InvertedQuantityRange {
        item_id: u32,
        min_qty: u32,
        max_qty: u32,
    },

    #[error("weighted table has no entries")]
    EmptyTable,

    #[error("weighted table entry {index} has zero weight")]
    ZeroWeight { index: usize },

    #[error("enhancement tier has no positive outcome weight")]
    DeadTier,

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    // --- precondition violations ---
    #[error("equipment instance is already destroyed")]
    AlreadyDestroyed,

    #[error("equipment instance has no upgrade attempts remaining")]
    NoAttemptsRemaining,
}
