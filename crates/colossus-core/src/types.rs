//! Fundamental timing and camera types.
//!
//! Positions and spots use `glam` vectors directly: `Vec3` in world space
//! (y up), `Vec2` for ground spots in the XZ plane.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Frame-driven encounter clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EncounterClock {
    /// Number of `update` calls since the encounter started.
    pub tick: u64,
    /// Accumulated simulation time in seconds.
    pub elapsed_secs: f32,
}

impl EncounterClock {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// The three follow-camera scalars the encounter overrides for framing.
///
/// Everything else about the camera (collision avoidance, smoothing) stays
/// with the host's camera component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraFraming {
    /// Follow distance behind the player (meters).
    pub distance: f32,
    /// Pitch angle (radians, negative looks down).
    pub pitch: f32,
    /// Vertical offset of the look-at point (meters).
    pub height_offset: f32,
}

/// Squared XZ distance between two ground spots.
pub fn spot_distance_sq(a: Vec2, b: Vec2) -> f32 {
    (b - a).length_squared()
}

/// XZ distance between two ground spots.
pub fn spot_distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}
