//! Camera pose, derived targets, and the transition state machine.
//!
//! The controller is the exclusive owner of the live camera pose. While a
//! transition is in flight the tween drives the pose; otherwise the orbit
//! rig applies user gestures directly. Consumers read the pose once per
//! frame and never mutate it.

pub mod rig;
pub mod transition;

use orrery_catalog::Body;
use orrery_core::constants::{OVERVIEW_LOOK_AT, OVERVIEW_POSITION};
use orrery_core::vector;

pub use rig::{GestureTuning, OrbitRig};
pub use transition::{CameraController, Transition};

/// Live camera pose: a position and the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: [f64; 3],
    pub look_at: [f64; 3],
}

impl CameraPose {
    /// The session's starting pose, identical to the overview target.
    pub fn overview() -> Self {
        Self {
            position: OVERVIEW_POSITION,
            look_at: OVERVIEW_LOOK_AT,
        }
    }
}

/// A desired viewpoint derived from the current selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: [f64; 3],
    pub look_at: [f64; 3],
}

impl CameraTarget {
    /// Whether a pose already sits exactly on this target.
    pub fn reached_by(&self, pose: &CameraPose) -> bool {
        pose.position == self.position && pose.look_at == self.look_at
    }
}

/// Overview target used when nothing is selected.
pub fn overview_target() -> CameraTarget {
    CameraTarget {
        position: OVERVIEW_POSITION,
        look_at: OVERVIEW_LOOK_AT,
    }
}

/// Viewpoint framing a selected body.
///
/// Derived from the body's *catalog* base position: the target is a
/// snapshot taken at selection time and does not chase the body around its
/// orbit. The offset backs away along +X/+Z by eight radii and climbs four.
pub fn target_for_body(body: &Body) -> CameraTarget {
    let distance = body.size * 8.0;
    CameraTarget {
        position: vector::add(&body.position, &[distance, body.size * 4.0, distance]),
        look_at: body.position,
    }
}
