//! Spherical orbit rig for free-form camera gestures.

use std::f64::consts::FRAC_PI_2;

use orrery_core::constants::{MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE};
use orrery_core::vector;

use crate::CameraPose;

/// Pitch stays this far short of straight up/down; at the poles the view
/// direction and the world up vector collapse together.
const PITCH_MARGIN: f64 = 0.01;

const WORLD_UP: [f64; 3] = [0.0, 1.0, 0.0];

/// Gesture sensitivity applied to raw pointer and scroll deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTuning {
    pub rotate_speed: f64,
    pub pan_speed: f64,
    pub zoom_speed: f64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            rotate_speed: 0.4,
            pan_speed: 0.8,
            zoom_speed: 0.6,
        }
    }
}

/// Yaw/pitch/distance state around a movable focus point.
///
/// The rig is the gesture-facing view of the camera: drag-to-orbit adjusts
/// the angles, drag-to-pan slides the focus in the screen plane, and
/// scroll-to-zoom scales the distance inside the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    focus: [f64; 3],
    yaw: f64,
    pitch: f64,
    distance: f64,
}

impl OrbitRig {
    /// Recover spherical state from an arbitrary pose.
    ///
    /// Degenerate poses (position on top of the look-at point) fall back to
    /// the minimum zoom distance looking down the +X axis.
    pub fn from_pose(pose: &CameraPose) -> Self {
        let offset = vector::sub(&pose.position, &pose.look_at);
        let distance = vector::norm(&offset);
        if distance <= f64::EPSILON {
            return Self {
                focus: pose.look_at,
                yaw: 0.0,
                pitch: 0.0,
                distance: MIN_CAMERA_DISTANCE,
            };
        }
        let pitch = (offset[1] / distance).asin();
        let yaw = offset[2].atan2(offset[0]);
        Self {
            focus: pose.look_at,
            yaw,
            pitch,
            distance,
        }
    }

    /// The pose this rig currently describes.
    pub fn pose(&self) -> CameraPose {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let offset = [
            self.distance * cos_pitch * cos_yaw,
            self.distance * sin_pitch,
            self.distance * cos_pitch * sin_yaw,
        ];
        CameraPose {
            position: vector::add(&self.focus, &offset),
            look_at: self.focus,
        }
    }

    /// Current distance from the focus point.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Rotate around the focus. Yaw is unbounded; pitch is kept off the
    /// poles.
    pub fn orbit(&mut self, yaw_delta: f64, pitch_delta: f64) {
        let limit = FRAC_PI_2 - PITCH_MARGIN;
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-limit, limit);
    }

    /// Slide the focus in the camera's screen plane by `(dx, dy)` world
    /// units.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let view = vector::normalize(&vector::sub(&self.focus, &self.pose().position));
        let right = vector::normalize(&vector::cross(&view, &WORLD_UP));
        let up = vector::cross(&right, &view);
        let shift = vector::add(&vector::scale(&right, dx), &vector::scale(&up, dy));
        self.focus = vector::add(&self.focus, &shift);
    }

    /// Scale the distance by `1 + amount` (positive zooms out), clamped to
    /// the configured bounds.
    pub fn zoom(&mut self, amount: f64) {
        self.distance =
            (self.distance * (1.0 + amount)).clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }
}
