//! Handle traits for host-owned collaborators.
//!
//! The encounter never owns the boss, the player, the scene, or the physics
//! world — it reaches them through these narrow contracts. Every optional
//! capability has a no-op implementation so the encounter code carries no
//! is-it-present branching.

use glam::Vec3;

use crate::enums::{BodyMode, MeshKind, StaticKind};
use crate::types::CameraFraming;

/// Read-only access to the player's world position.
pub trait PlayerTracker {
    fn position(&self) -> Vec3;
}

/// The boss's rigid body. Mode and mass changes must be followed by a
/// `recompute_mass_properties` call before the next physics step.
pub trait PhysicsBody {
    fn mode(&self) -> BodyMode;
    fn set_mode(&mut self, mode: BodyMode);
    fn mass(&self) -> f32;
    fn set_mass(&mut self, mass: f32);
    fn recompute_mass_properties(&mut self);
}

/// One animation clip on the boss rig.
pub trait AnimationCue {
    /// Rewind to the first frame.
    fn reset(&mut self);
    /// Start playback.
    fn play(&mut self);
}

/// Default cue used wherever the host supplies none.
#[derive(Debug, Default)]
pub struct NoopCue;

impl AnimationCue for NoopCue {
    fn reset(&mut self) {}
    fn play(&mut self) {}
}

/// Host-assigned identifier for a mesh added through [`VisualScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u64);

/// Host-assigned identifier for a body added through [`CollisionWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u64);

/// Description of a primitive mesh for the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshDesc {
    pub kind: MeshKind,
    pub half_extents: Vec3,
    pub position: Vec3,
}

/// Simple primitive meshes in the host scene (telegraph markers,
/// projectile stand-ins, the platform box).
pub trait VisualScene {
    fn add_mesh(&mut self, desc: MeshDesc) -> MeshId;
    fn set_mesh_position(&mut self, id: MeshId, position: Vec3);
    fn remove_mesh(&mut self, id: MeshId);
}

/// Static tagged box colliders in the host physics world.
pub trait CollisionWorld {
    fn add_static_box(&mut self, kind: StaticKind, half_extents: Vec3, position: Vec3) -> BodyId;
    fn remove_static(&mut self, id: BodyId);
}

/// The host's third-person follow camera, reduced to the three scalars the
/// encounter overrides.
pub trait FollowCamera {
    fn framing(&self) -> CameraFraming;
    fn set_framing(&mut self, framing: CameraFraming);
}
