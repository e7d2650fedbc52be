//! Encounter engine for COLOSSUS.
//!
//! Owns the boss-fight state (phase, timers, health mirror, in-flight
//! waves), runs once per host frame, and reaches all external actors
//! through the handle traits in `colossus-core`. Completely headless,
//! enabling deterministic testing.

pub mod assembly;
pub mod camera;
pub mod controller;
pub mod platform;
pub mod systems;

pub use colossus_core as core;
pub use controller::{CueSet, EncounterConfig, EncounterController, EncounterIo};
