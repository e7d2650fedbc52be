//! Boss behavior profile — consolidated tuning for one encounter.

use serde::{Deserialize, Serialize};

use colossus_core::constants::*;
use colossus_core::enums::SpreadBias;

/// Per-wave tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveTuning {
    /// Scatter radius around the target center (meters).
    pub radius: f32,
    /// Area damage per wave.
    pub damage: f32,
    /// Seconds from scheduling to the telegraph appearing.
    pub warning_delay: f32,
    /// Seconds from telegraph to impact (the dodge window).
    pub impact_delay: f32,
    /// Spot distribution.
    pub spread: SpreadBias,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            radius: WAVE_RADIUS,
            damage: WAVE_DAMAGE,
            warning_delay: WAVE_WARNING_DELAY_SECS,
            impact_delay: WAVE_IMPACT_DELAY_SECS,
            spread: SpreadBias::Uniform,
        }
    }
}

/// Behavioral profile for the boss encounter.
///
/// Cadence fields feed [`crate::cadence`]; timing fields feed
/// [`crate::fsm`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossProfile {
    /// Seconds between barrages at full health.
    pub base_fire_interval: f32,
    /// Cadence multiplier reached at zero health (>= 1.0).
    pub max_rate_multiplier: f32,
    /// Waves fired per Ranged cycle before the slam.
    pub waves_per_cycle: u32,
    /// Projectiles per wave at full health.
    pub base_missiles: u32,
    /// Additional projectiles per wave at zero health.
    pub missile_count_scale: f32,
    /// Attack-in-progress gate duration (approximate animation length).
    pub attack_duration: f32,
    /// Slam windup duration.
    pub slam_windup: f32,
    /// Grounded damage window duration.
    pub vulnerable_duration: f32,
    /// Rise duration before the next barrage.
    pub recover_duration: f32,
    /// Boss body mass while Dynamic (kg).
    pub body_mass: f32,
    /// Wave tuning.
    pub wave: WaveTuning,
}

impl Default for BossProfile {
    fn default() -> Self {
        Self::standard()
    }
}

impl BossProfile {
    /// The shipping encounter tuning.
    pub fn standard() -> Self {
        Self {
            base_fire_interval: BASE_FIRE_INTERVAL_SECS,
            max_rate_multiplier: MAX_RATE_MULTIPLIER,
            waves_per_cycle: WAVES_PER_CYCLE,
            base_missiles: BASE_MISSILES,
            missile_count_scale: MISSILE_COUNT_SCALE,
            attack_duration: ATTACK_DURATION_SECS,
            slam_windup: SLAM_WINDUP_SECS,
            vulnerable_duration: VULNERABLE_DURATION_SECS,
            recover_duration: RECOVER_DURATION_SECS,
            body_mass: BOSS_BODY_MASS,
            wave: WaveTuning::default(),
        }
    }

    /// Harder variant: faster cadence, denser center-biased waves, a
    /// shorter damage window.
    pub fn onslaught() -> Self {
        Self {
            base_fire_interval: BASE_FIRE_INTERVAL_SECS * 0.7,
            max_rate_multiplier: MAX_RATE_MULTIPLIER * 1.25,
            base_missiles: BASE_MISSILES + 2,
            vulnerable_duration: VULNERABLE_DURATION_SECS * 0.75,
            wave: WaveTuning {
                spread: SpreadBias::CenterBiased,
                ..WaveTuning::default()
            },
            ..Self::standard()
        }
    }
}
