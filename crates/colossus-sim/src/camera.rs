//! Encounter camera rig — temporary framing override for the boss fight.
//!
//! Saves the live follow camera's three framing scalars on activation and
//! restores them on deactivation, leaving all other camera behavior
//! (collision avoidance, smoothing) untouched in the host.

use colossus_core::constants::{
    ENCOUNTER_CAMERA_DISTANCE, ENCOUNTER_CAMERA_HEIGHT_OFFSET, ENCOUNTER_CAMERA_PITCH,
};
use colossus_core::handles::FollowCamera;
use colossus_core::types::CameraFraming;

/// Save/override/restore wrapper around the host follow camera.
pub struct CameraRig {
    override_framing: CameraFraming,
    saved: Option<CameraFraming>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraFraming {
            distance: ENCOUNTER_CAMERA_DISTANCE,
            pitch: ENCOUNTER_CAMERA_PITCH,
            height_offset: ENCOUNTER_CAMERA_HEIGHT_OFFSET,
        })
    }
}

impl CameraRig {
    pub fn new(override_framing: CameraFraming) -> Self {
        Self {
            override_framing,
            saved: None,
        }
    }

    /// Snapshot the live framing and apply the override. No-op while
    /// already active.
    pub fn activate(&mut self, camera: &mut dyn FollowCamera) {
        if self.saved.is_some() {
            return;
        }
        self.saved = Some(camera.framing());
        camera.set_framing(self.override_framing);
    }

    /// Restore the snapshot taken at activation. No-op while inactive.
    pub fn deactivate(&mut self, camera: &mut dyn FollowCamera) {
        if let Some(saved) = self.saved.take() {
            camera.set_framing(saved);
        }
    }

    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }
}
