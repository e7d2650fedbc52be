//! Health-scaled attack cadence.
//!
//! The boss attacks faster and throws denser waves as its health drops,
//! interpolating linearly on the health ratio.

use crate::profile::BossProfile;

/// Cadence multiplier for a given health ratio: 1.0 at full health,
/// `max_rate_multiplier` at zero. Out-of-range ratios are clamped.
pub fn rate_multiplier(health_ratio: f32, profile: &BossProfile) -> f32 {
    let ratio = health_ratio.clamp(0.0, 1.0);
    1.0 + (profile.max_rate_multiplier - 1.0) * (1.0 - ratio)
}

/// Seconds until the next barrage may start.
pub fn fire_interval(health_ratio: f32, profile: &BossProfile) -> f32 {
    profile.base_fire_interval / rate_multiplier(health_ratio, profile)
}

/// Projectiles in the next wave: the base count plus a linear ramp toward
/// `missile_count_scale` extra projectiles at zero health.
pub fn wave_size(health_ratio: f32, profile: &BossProfile) -> u32 {
    let ratio = health_ratio.clamp(0.0, 1.0);
    let bonus = ((1.0 - ratio) * profile.missile_count_scale).floor() as u32;
    profile.base_missiles + bonus
}
