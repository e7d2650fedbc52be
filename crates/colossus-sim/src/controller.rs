//! Encounter controller — the stateful heart of the boss fight.
//!
//! Owns the phase machine's mutable state, the attack gating timers, the
//! mirrored boss health, the wave scheduler, and the event buffer. Phase
//! decisions come from `colossus-boss`; this module applies them to the
//! host through the handle traits.

use glam::vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use colossus_core::enums::{BodyMode, EncounterPhase};
use colossus_core::events::EncounterEvent;
use colossus_core::handles::{AnimationCue, NoopCue, PhysicsBody, PlayerTracker, VisualScene};
use colossus_core::state::EncounterSnapshot;
use colossus_core::types::EncounterClock;

use colossus_boss::cadence;
use colossus_boss::fsm::{self, PhaseContext};
use colossus_boss::profile::BossProfile;

use crate::systems::snapshot;
use crate::systems::waves::{WaveImpact, WaveScheduler, WaveSpec};

/// Configuration for a new encounter.
#[derive(Debug, Clone, Copy)]
pub struct EncounterConfig {
    /// RNG seed for wave scatter. Same seed = same encounter.
    pub seed: u64,
    /// Boss behavior tuning.
    pub profile: BossProfile,
    /// Height of the walkable arena floor the waves land on.
    pub ground_y: f32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            profile: BossProfile::standard(),
            ground_y: 0.0,
        }
    }
}

/// Animation cues on the boss rig, all optional (no-op by default).
pub struct CueSet {
    /// Ranged barrage windup.
    pub attack: Box<dyn AnimationCue>,
    /// Slam crash-down.
    pub slam: Box<dyn AnimationCue>,
    /// Grounded stagger during the damage window.
    pub stagger: Box<dyn AnimationCue>,
    /// Rise back into the air.
    pub rise: Box<dyn AnimationCue>,
}

impl Default for CueSet {
    fn default() -> Self {
        Self {
            attack: Box::new(NoopCue),
            slam: Box::new(NoopCue),
            stagger: Box::new(NoopCue),
            rise: Box::new(NoopCue),
        }
    }
}

/// The host-owned actors the controller touches during a call.
///
/// Borrowed per call rather than stored, so the host keeps ownership of
/// its scene and physics objects between frames.
pub struct EncounterIo<'a> {
    pub player: &'a dyn PlayerTracker,
    pub body: &'a mut dyn PhysicsBody,
    pub scene: &'a mut dyn VisualScene,
}

/// The boss-fight state machine and its per-frame driver.
pub struct EncounterController {
    profile: BossProfile,
    clock: EncounterClock,
    phase: EncounterPhase,
    elapsed_in_phase: f32,
    running: bool,

    // Mirror of the external boss entity's health; synced, not owned.
    health: f32,
    max_health: f32,

    waves_fired_this_cycle: u32,
    attack_timer: f32,
    attack_in_progress: bool,
    /// Countdown that clears `attack_in_progress`; all attack timing
    /// lives inside `update`, never in deferred host callbacks.
    attack_end_in: f32,

    waves: WaveScheduler,
    rng: ChaCha8Rng,
    cues: CueSet,
    events: Vec<EncounterEvent>,
}

impl EncounterController {
    pub fn new(config: EncounterConfig) -> Self {
        Self::with_cues(config, CueSet::default())
    }

    pub fn with_cues(config: EncounterConfig, cues: CueSet) -> Self {
        Self {
            profile: config.profile,
            clock: EncounterClock::default(),
            phase: EncounterPhase::Idle,
            elapsed_in_phase: 0.0,
            running: false,
            health: 1.0,
            max_health: 1.0,
            waves_fired_this_cycle: 0,
            attack_timer: 0.0,
            attack_in_progress: false,
            attack_end_in: 0.0,
            waves: WaveScheduler::new(config.ground_y),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            cues,
            events: Vec::new(),
        }
    }

    /// Begin the fight: no-op if already running, else enter Ranged.
    pub fn start(&mut self, io: &mut EncounterIo<'_>) {
        if self.running {
            return;
        }
        self.running = true;
        self.enter_phase(EncounterPhase::Ranged, io);
    }

    /// Halt ticking. Leaves the phase unchanged and zeroes the pending
    /// attack countdown so no stale gate survives a later restart.
    pub fn stop(&mut self) {
        self.running = false;
        self.attack_in_progress = false;
        self.attack_end_in = 0.0;
    }

    /// Apply damage to the mirrored health. Only meaningful while
    /// Vulnerable; silently dropped in every other phase.
    pub fn on_damage(&mut self, amount: f32) {
        if self.phase != EncounterPhase::Vulnerable {
            return;
        }
        self.health = (self.health - amount.max(0.0)).max(0.0);
    }

    /// Overwrite the health mirror from the boss entity (the source of
    /// truth). Call before or alongside game-loop ticks.
    pub fn sync_health(&mut self, current: f32, max: Option<f32>) {
        if let Some(max) = max {
            self.max_health = max.max(f32::EPSILON);
        }
        self.health = current.clamp(0.0, self.max_health);
    }

    /// Jump straight to a phase, bypassing timers. Debug/testing only.
    pub fn force_phase(&mut self, phase: EncounterPhase, io: &mut EncounterIo<'_>) {
        self.enter_phase(phase, io);
    }

    /// Advance one frame. No-op while stopped.
    ///
    /// Returns the impacts that resolved this frame; the host applies
    /// area damage and calls back `on_damage`/`sync_health` as needed.
    pub fn update(&mut self, dt: f32, io: &mut EncounterIo<'_>) -> Vec<WaveImpact> {
        if !self.running {
            return Vec::new();
        }

        self.clock.advance(dt);
        self.elapsed_in_phase += dt;

        if self.attack_in_progress {
            self.attack_end_in -= dt;
            if self.attack_end_in <= 0.0 {
                self.attack_in_progress = false;
                self.attack_end_in = 0.0;
            }
        }

        if self.phase == EncounterPhase::Ranged {
            self.tick_ranged(dt, io);
        }

        let update = fsm::evaluate(&self.phase_context(), &self.profile);
        if update.phase_changed {
            self.enter_phase(update.next_phase, io);
        }

        self.waves.update(dt, io.scene)
    }

    /// Take the events buffered since the last drain.
    pub fn drain_events(&mut self) -> Vec<EncounterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build the complete state view for host observers.
    pub fn snapshot(&self) -> EncounterSnapshot {
        snapshot::build_snapshot(
            self.clock,
            self.phase,
            self.running,
            self.health,
            self.max_health,
            self.elapsed_in_phase,
            self.waves_fired_this_cycle,
            self.attack_in_progress,
            &self.waves,
        )
    }

    /// Drop all in-flight waves and their visuals (dispose/level change).
    pub fn clear_waves(&mut self, scene: &mut dyn VisualScene) {
        self.waves.clear(scene);
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn profile(&self) -> &BossProfile {
        &self.profile
    }

    /// Waves not yet pruned.
    pub fn active_waves(&self) -> usize {
        self.waves.active_count()
    }

    // ---- Internals ----

    fn health_ratio(&self) -> f32 {
        self.health / self.max_health
    }

    fn phase_context(&self) -> PhaseContext {
        PhaseContext {
            phase: self.phase,
            elapsed_in_phase: self.elapsed_in_phase,
            waves_fired_this_cycle: self.waves_fired_this_cycle,
            attack_in_progress: self.attack_in_progress,
        }
    }

    /// Ranged-phase attack gating: count down to the next barrage and
    /// fire it once no attack is mid-animation.
    fn tick_ranged(&mut self, dt: f32, io: &mut EncounterIo<'_>) {
        self.attack_timer -= dt;
        if self.attack_timer > 0.0
            || self.attack_in_progress
            || self.waves_fired_this_cycle >= self.profile.waves_per_cycle
        {
            return;
        }

        let ratio = self.health_ratio();
        let count = cadence::wave_size(ratio, &self.profile);
        let target = io.player.position();

        self.cues.attack.reset();
        self.cues.attack.play();

        self.waves.schedule_wave(
            WaveSpec::from_tuning(&self.profile.wave, count, vec2(target.x, target.z)),
            &mut self.rng,
        );

        self.waves_fired_this_cycle += 1;
        self.attack_in_progress = true;
        self.attack_end_in = self.profile.attack_duration;
        self.attack_timer = cadence::fire_interval(ratio, &self.profile);
        self.events.push(EncounterEvent::AttackStarted { wave_size: count });
        log::debug!(
            "barrage {}/{}: {} projectiles",
            self.waves_fired_this_cycle,
            self.profile.waves_per_cycle,
            count
        );
    }

    /// Enter a phase: reset the phase clock, enforce the body-mode
    /// invariant, fire entry cues and events.
    fn enter_phase(&mut self, phase: EncounterPhase, io: &mut EncounterIo<'_>) {
        self.phase = phase;
        self.elapsed_in_phase = 0.0;

        apply_body_mode(io.body, fsm::body_mode_for(phase), self.profile.body_mass);

        match phase {
            EncounterPhase::Idle => {}
            EncounterPhase::Ranged => {
                self.waves_fired_this_cycle = 0;
                self.attack_in_progress = false;
                self.attack_end_in = 0.0;
                self.attack_timer = cadence::fire_interval(self.health_ratio(), &self.profile);
            }
            EncounterPhase::Slam => {
                self.cues.slam.reset();
                self.cues.slam.play();
                self.events.push(EncounterEvent::Slam);
            }
            EncounterPhase::Vulnerable => {
                self.cues.stagger.reset();
                self.cues.stagger.play();
                self.events.push(EncounterEvent::Landed);
            }
            EncounterPhase::Recover => {
                self.cues.rise.reset();
                self.cues.rise.play();
                self.events.push(EncounterEvent::Takeoff);
            }
        }

        self.events.push(EncounterEvent::PhaseChanged { phase });
        log::debug!("entered phase {phase:?}");
    }
}

/// Enforce a body mode, including the explicit mass-properties recompute
/// the physics binding requires after mode/mass mutation.
fn apply_body_mode(body: &mut dyn PhysicsBody, mode: BodyMode, dynamic_mass: f32) {
    body.set_mode(mode);
    match mode {
        BodyMode::Kinematic => body.set_mass(0.0),
        BodyMode::Dynamic => body.set_mass(dynamic_mass),
    }
    body.recompute_mass_properties();
}
