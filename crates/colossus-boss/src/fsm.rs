//! Encounter phase finite state machine.
//!
//! Pure functions that compute phase transitions from elapsed time, wave
//! progress, and the attack gate. No handles used — the controller in
//! `colossus-sim` owns the mutable state and applies side effects on entry.

use colossus_core::enums::{BodyMode, EncounterPhase};

use crate::profile::BossProfile;

/// Input to the phase FSM for one tick.
#[derive(Debug, Clone, Copy)]
pub struct PhaseContext {
    pub phase: EncounterPhase,
    /// Seconds spent in the current phase.
    pub elapsed_in_phase: f32,
    /// Waves fired since entering Ranged.
    pub waves_fired_this_cycle: u32,
    /// An attack animation is still playing.
    pub attack_in_progress: bool,
}

/// Output from the phase FSM.
#[derive(Debug, Clone, Copy)]
pub struct PhaseUpdate {
    pub next_phase: EncounterPhase,
    pub phase_changed: bool,
}

/// Evaluate the FSM for one tick. Transitions are strictly cyclic:
/// Ranged → Slam → Vulnerable → Recover → Ranged.
pub fn evaluate(ctx: &PhaseContext, profile: &BossProfile) -> PhaseUpdate {
    let hold = PhaseUpdate {
        next_phase: ctx.phase,
        phase_changed: false,
    };

    match ctx.phase {
        // Idle never self-transitions; `start()` drives entry into Ranged.
        EncounterPhase::Idle => hold,
        EncounterPhase::Ranged => evaluate_ranged(ctx, profile),
        EncounterPhase::Slam => timed(ctx, profile.slam_windup, EncounterPhase::Vulnerable),
        EncounterPhase::Vulnerable => {
            timed(ctx, profile.vulnerable_duration, EncounterPhase::Recover)
        }
        EncounterPhase::Recover => timed(ctx, profile.recover_duration, EncounterPhase::Ranged),
    }
}

/// Ranged ends once the full barrage cycle is out and the last attack
/// animation has cleared, so the slam never cuts off a windup.
fn evaluate_ranged(ctx: &PhaseContext, profile: &BossProfile) -> PhaseUpdate {
    if ctx.waves_fired_this_cycle >= profile.waves_per_cycle && !ctx.attack_in_progress {
        return PhaseUpdate {
            next_phase: EncounterPhase::Slam,
            phase_changed: true,
        };
    }
    PhaseUpdate {
        next_phase: ctx.phase,
        phase_changed: false,
    }
}

fn timed(ctx: &PhaseContext, duration: f32, next: EncounterPhase) -> PhaseUpdate {
    if ctx.elapsed_in_phase >= duration {
        return PhaseUpdate {
            next_phase: next,
            phase_changed: true,
        };
    }
    PhaseUpdate {
        next_phase: ctx.phase,
        phase_changed: false,
    }
}

/// The body-mode invariant: Dynamic only while Vulnerable, Kinematic
/// everywhere else. Enforced by the controller on every phase entry.
pub fn body_mode_for(phase: EncounterPhase) -> BodyMode {
    match phase {
        EncounterPhase::Vulnerable => BodyMode::Dynamic,
        _ => BodyMode::Kinematic,
    }
}
