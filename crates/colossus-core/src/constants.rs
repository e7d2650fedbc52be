//! Encounter tuning defaults.

// --- Attack cadence (Ranged phase) ---

/// Seconds between projectile barrages at full boss health.
pub const BASE_FIRE_INTERVAL_SECS: f32 = 2.5;

/// Cadence multiplier ceiling as health approaches zero
/// (1.0 at full health, this value at zero health).
pub const MAX_RATE_MULTIPLIER: f32 = 2.0;

/// Waves fired per Ranged cycle before the slam.
pub const WAVES_PER_CYCLE: u32 = 3;

/// Projectiles per wave at full boss health.
pub const BASE_MISSILES: u32 = 6;

/// Additional projectiles per wave at zero health (scaled linearly).
pub const MISSILE_COUNT_SCALE: f32 = 6.0;

/// Approximate duration of the attack animation; the attack-in-progress
/// gate clears after this countdown.
pub const ATTACK_DURATION_SECS: f32 = 1.2;

// --- Phase timing ---

/// Windup before the boss crashes onto the platform.
pub const SLAM_WINDUP_SECS: f32 = 1.0;

/// Grounded damage window.
pub const VULNERABLE_DURATION_SECS: f32 = 4.0;

/// Rise back to the air before the next barrage.
pub const RECOVER_DURATION_SECS: f32 = 1.0;

// --- Boss body ---

/// Mass given to the boss body while Dynamic (kg).
pub const BOSS_BODY_MASS: f32 = 40.0;

// --- Projectile waves ---

/// Default scatter radius around the target center (meters).
pub const WAVE_RADIUS: f32 = 5.0;

/// Default area damage per wave.
pub const WAVE_DAMAGE: f32 = 20.0;

/// Seconds from scheduling until the telegraph appears.
pub const WAVE_WARNING_DELAY_SECS: f32 = 2.0;

/// Seconds from telegraph until impact (the player's dodge window).
pub const WAVE_IMPACT_DELAY_SECS: f32 = 1.5;

/// How long an impacted wave record lingers before pruning.
pub const WAVE_PRUNE_SLACK_SECS: f32 = 0.25;

/// Exponent for center-biased spot sampling.
pub const CENTER_BIAS_EXPONENT: f32 = 1.5;

/// Height above the ground at which projectile visuals spawn (meters).
pub const PROJECTILE_SPAWN_HEIGHT: f32 = 18.0;

/// Minimum fall time used when back-solving projectile speed, so a
/// telegraph that fires very late never divides by a vanishing window.
pub const MIN_FALL_TIME_SECS: f32 = 0.05;

/// Ground marker footprint radius (meters).
pub const MARKER_RADIUS: f32 = 0.9;

/// Ground marker thickness (meters); kept just above the floor.
pub const MARKER_THICKNESS: f32 = 0.02;

/// Projectile stand-in half-extent (meters).
pub const PROJECTILE_HALF_EXTENT: f32 = 0.35;

// --- Encounter camera framing ---

/// Follow distance during the encounter.
pub const ENCOUNTER_CAMERA_DISTANCE: f32 = 14.0;

/// Camera pitch during the encounter (radians).
pub const ENCOUNTER_CAMERA_PITCH: f32 = -0.45;

/// Look-at height offset during the encounter.
pub const ENCOUNTER_CAMERA_HEIGHT_OFFSET: f32 = 3.0;
