//! Arena platform — the static fixture the encounter is fought on.
//!
//! One `size` triple builds both the visual box and the collision box, so
//! the walkable surface and the rendered surface can never disagree.

use glam::Vec3;

use colossus_core::enums::{MeshKind, StaticKind};
use colossus_core::handles::{BodyId, CollisionWorld, MeshDesc, MeshId, VisualScene};

/// A static box platform with matched visual and collision halves.
pub struct ArenaPlatform {
    size: Vec3,
    position: Vec3,
    mesh: Option<MeshId>,
    body: Option<BodyId>,
}

impl ArenaPlatform {
    /// `size` is full extents (width, height, depth); `position` is the
    /// box center.
    pub fn new(size: Vec3, position: Vec3) -> Self {
        Self {
            size,
            position,
            mesh: None,
            body: None,
        }
    }

    /// Attach both halves to the host. Idempotent — calling again while
    /// attached does nothing.
    pub fn add_to(&mut self, scene: &mut dyn VisualScene, world: &mut dyn CollisionWorld) {
        let half_extents = self.size * 0.5;
        if self.mesh.is_none() {
            self.mesh = Some(scene.add_mesh(MeshDesc {
                kind: MeshKind::PlatformBox,
                half_extents,
                position: self.position,
            }));
        }
        if self.body.is_none() {
            self.body =
                Some(world.add_static_box(StaticKind::ArenaPlatform, half_extents, self.position));
        }
    }

    /// Walkable surface height, for actor placement.
    pub fn top_y(&self) -> f32 {
        self.position.y + self.size.y * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.size
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_attached(&self) -> bool {
        self.mesh.is_some() || self.body.is_some()
    }

    /// Remove and free both halves. Idempotent.
    pub fn dispose(&mut self, scene: &mut dyn VisualScene, world: &mut dyn CollisionWorld) {
        if let Some(mesh) = self.mesh.take() {
            scene.remove_mesh(mesh);
        }
        if let Some(body) = self.body.take() {
            world.remove_static(body);
        }
    }
}
