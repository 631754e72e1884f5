//! Typed catalog schema.
//!
//! The surrounding application owns the static item/monster/gacha data and
//! ships it as JSON; this module parses it once into typed entities and
//! validates it at load time, so per-call code never has to reason about
//! missing or malformed fields.

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::*;
