//! Encounter snapshot — the complete visible state exposed to the host each tick.
//!
//! The snapshot exists for external observers (boss HP bar, debug overlays,
//! replay capture); nothing in the core reads it back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::EncounterPhase;
use crate::types::EncounterClock;

/// Complete encounter state view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub clock: EncounterClock,
    pub phase: EncounterPhase,
    pub running: bool,
    /// Mirrored boss health (owned by the external boss entity).
    pub health: f32,
    pub max_health: f32,
    /// Seconds spent in the current phase.
    pub elapsed_in_phase: f32,
    pub waves_fired_this_cycle: u32,
    pub attack_in_progress: bool,
    /// In-flight projectile waves.
    pub waves: Vec<WaveView>,
}

/// One in-flight projectile wave.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// Seconds since the wave was scheduled.
    pub elapsed: f32,
    /// Telegraph visuals are showing.
    pub warned: bool,
    /// Impact has fired; record lingers briefly before pruning.
    pub impacted: bool,
    /// Target spots in the XZ plane.
    pub spots: Vec<Vec2>,
    pub damage: f32,
}
