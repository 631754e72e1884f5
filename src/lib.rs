//! maplesim — catalog-driven drop, gacha, stat-variance and enhancement
//! simulation engine.
//!
//! Every call is a pure function of its inputs plus an injected
//! [`rng::RandomSource`]: the engine never reads the clock, does no I/O,
//! and keeps no state between invocations, so a fixed seed reproduces a
//! full simulation and independent calls parallelize freely.

pub mod catalog;
pub mod drops;
pub mod enhancement;
pub mod equipment;
pub mod error;
pub mod rng;
pub mod simulator;
pub mod slots;
pub mod variance;
pub mod weighted;
