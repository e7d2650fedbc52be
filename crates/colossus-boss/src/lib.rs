//! Boss behavior logic for COLOSSUS.
//!
//! Implements the encounter phase state machine and the health-scaled
//! attack cadence as pure functions over plain data. No handles, no side
//! effects — the stateful controller in `colossus-sim` applies the results.

pub mod cadence;
pub mod fsm;
pub mod profile;

pub use colossus_core as core;
