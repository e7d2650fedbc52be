//! Events emitted by the encounter for host audio, UI, and effects.

use serde::{Deserialize, Serialize};

use crate::enums::EncounterPhase;

/// Encounter events, buffered during `update` and drained by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EncounterEvent {
    /// The FSM entered a new phase.
    PhaseChanged { phase: EncounterPhase },
    /// An attack animation started and a wave was scheduled.
    AttackStarted { wave_size: u32 },
    /// The boss began its slam windup.
    Slam,
    /// The boss hit the platform and became damageable.
    Landed,
    /// The boss left the ground and is invulnerable again.
    Takeoff,
}
