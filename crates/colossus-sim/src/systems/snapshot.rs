//! Snapshot system: builds the complete EncounterSnapshot view.
//!
//! Read-only — it never modifies encounter state.

use colossus_core::enums::EncounterPhase;
use colossus_core::state::EncounterSnapshot;
use colossus_core::types::EncounterClock;

use crate::systems::waves::WaveScheduler;

/// Assemble a snapshot from the controller's current state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    clock: EncounterClock,
    phase: EncounterPhase,
    running: bool,
    health: f32,
    max_health: f32,
    elapsed_in_phase: f32,
    waves_fired_this_cycle: u32,
    attack_in_progress: bool,
    waves: &WaveScheduler,
) -> EncounterSnapshot {
    EncounterSnapshot {
        clock,
        phase,
        running,
        health,
        max_health,
        elapsed_in_phase,
        waves_fired_this_cycle,
        attack_in_progress,
        waves: waves.views(),
    }
}
