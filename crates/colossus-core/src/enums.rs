//! Enumeration types used throughout the encounter.

use serde::{Deserialize, Serialize};

/// Boss encounter phase. Exactly one is active at a time.
///
/// `update()` only ever moves Ranged → Slam → Vulnerable → Recover → Ranged;
/// `force_phase` (debug) may jump arbitrarily.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterPhase {
    /// Constructed but not started.
    #[default]
    Idle,
    /// Airborne ranged barrage: fires projectile waves at the player.
    Ranged,
    /// Windup before crashing down onto the platform.
    Slam,
    /// Grounded and damageable; the only window `on_damage` has effect.
    Vulnerable,
    /// Rising back into the air before the next barrage.
    Recover,
}

/// Physics body simulation mode for the boss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyMode {
    /// Moved only by explicit position writes; mass forced to 0.
    #[default]
    Kinematic,
    /// Fully simulated (gravity, collisions, applied forces); mass > 0.
    Dynamic,
}

/// Spot distribution for a projectile wave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadBias {
    /// Uniform over the target disk.
    #[default]
    Uniform,
    /// Power-law bias clustering spots near the target center.
    CenterBiased,
}

/// Identification tag on static collision bodies, for external filtering
/// (e.g. excluding the platform from wall-slide checks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaticKind {
    /// The walkable arena floor.
    ArenaPlatform,
    /// Arena boundary geometry (tagged by the host, never created here).
    ArenaWall,
}

/// Kind of primitive mesh the encounter asks the host scene to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshKind {
    /// Flat ground marker telegraphing an incoming impact spot.
    ImpactMarker,
    /// Descending projectile stand-in.
    Projectile,
    /// The arena platform box.
    PlatformBox,
}
