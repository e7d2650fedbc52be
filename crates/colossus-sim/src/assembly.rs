//! Assembly glue: wires the controller, platform, and camera rig into one
//! encounter and brackets its lifetime against the host.

use glam::{vec3, Vec3};

use colossus_core::handles::{CollisionWorld, FollowCamera};
use colossus_core::types::CameraFraming;

use crate::camera::CameraRig;
use crate::controller::{CueSet, EncounterConfig, EncounterController, EncounterIo};
use crate::platform::ArenaPlatform;
use crate::systems::waves::WaveImpact;

/// Builder for a complete boss encounter.
pub struct EncounterAssembler {
    config: EncounterConfig,
    platform_size: Vec3,
    platform_position: Vec3,
    framing: Option<CameraFraming>,
    cues: CueSet,
}

impl EncounterAssembler {
    pub fn new(config: EncounterConfig) -> Self {
        Self {
            config,
            platform_size: vec3(30.0, 2.0, 30.0),
            platform_position: Vec3::ZERO,
            framing: None,
            cues: CueSet::default(),
        }
    }

    /// Arena platform geometry (full extents and center).
    pub fn platform(mut self, size: Vec3, position: Vec3) -> Self {
        self.platform_size = size;
        self.platform_position = position;
        self
    }

    /// Custom encounter framing; defaults to the tuned constants.
    pub fn camera_framing(mut self, framing: CameraFraming) -> Self {
        self.framing = Some(framing);
        self
    }

    /// Boss animation cues; any omitted cue stays a no-op.
    pub fn cues(mut self, cues: CueSet) -> Self {
        self.cues = cues;
        self
    }

    /// Wire everything together. Waves land on the platform's top surface.
    pub fn assemble(self) -> Encounter {
        let platform = ArenaPlatform::new(self.platform_size, self.platform_position);
        let config = EncounterConfig {
            ground_y: platform.top_y(),
            ..self.config
        };
        Encounter {
            controller: EncounterController::with_cues(config, self.cues),
            platform,
            rig: self.framing.map(CameraRig::new).unwrap_or_default(),
        }
    }
}

/// A fully wired boss encounter.
pub struct Encounter {
    controller: EncounterController,
    platform: ArenaPlatform,
    rig: CameraRig,
}

impl Encounter {
    /// Start the fight: attach the platform, override the camera, and
    /// enter Ranged.
    pub fn begin(
        &mut self,
        io: &mut EncounterIo<'_>,
        world: &mut dyn CollisionWorld,
        camera: &mut dyn FollowCamera,
    ) {
        self.platform.add_to(io.scene, world);
        self.rig.activate(camera);
        self.controller.start(io);
    }

    /// Per-frame driver; forwards to the controller.
    pub fn update(&mut self, dt: f32, io: &mut EncounterIo<'_>) -> Vec<WaveImpact> {
        self.controller.update(dt, io)
    }

    /// End the fight: stop the FSM, drop in-flight waves, restore the
    /// camera, and free the platform.
    pub fn finish(
        &mut self,
        io: &mut EncounterIo<'_>,
        world: &mut dyn CollisionWorld,
        camera: &mut dyn FollowCamera,
    ) {
        self.controller.stop();
        self.controller.clear_waves(io.scene);
        self.rig.deactivate(camera);
        self.platform.dispose(io.scene, world);
    }

    pub fn controller(&self) -> &EncounterController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut EncounterController {
        &mut self.controller
    }

    pub fn platform(&self) -> &ArenaPlatform {
        &self.platform
    }

    pub fn camera_rig(&self) -> &CameraRig {
        &self.rig
    }
}
