//! Equipment enhancement state machine.
//!
//! An instance moves through Normal → Enhanced(n) → Destroyed/exhausted.
//! Each attempt consumes exactly one remaining upgrade regardless of
//! outcome; the outcome odds and the success stat bonus come from the
//! catalog's enhancement tier table.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
