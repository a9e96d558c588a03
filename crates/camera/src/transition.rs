//! Time-bounded interpolation of the camera pose toward a target.

use tracing::debug;

use orrery_core::constants::TRANSITION_SECONDS;
use orrery_core::{easing, vector};

use crate::rig::{GestureTuning, OrbitRig};
use crate::{CameraPose, CameraTarget};

/// An in-flight tween from a sampled start position toward a target.
///
/// Only position is interpolated; the look-at snaps to the target's when
/// the tween starts. Duration is fixed, so a target equal to the start
/// position degenerates into an instantly-completing tween with no division
/// hazard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    start_position: [f64; 3],
    target: CameraTarget,
    duration: f64,
    elapsed: f64,
}

impl Transition {
    /// Begin a tween from the live pose sampled now.
    ///
    /// A tween that is already at its destination is born finished and
    /// completes on the first advance.
    pub fn new(from: &CameraPose, target: CameraTarget) -> Self {
        let start_position = from.position;
        let elapsed = if start_position == target.position {
            TRANSITION_SECONDS
        } else {
            0.0
        };
        Self {
            start_position,
            target,
            duration: TRANSITION_SECONDS,
            elapsed,
        }
    }

    /// Consume a frame delta.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Whether the tween has run its full duration.
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Pose for the current tween time; exactly the target once finished.
    pub fn pose(&self) -> CameraPose {
        if self.finished() {
            return CameraPose {
                position: self.target.position,
                look_at: self.target.look_at,
            };
        }
        let progress = easing::quad_in_out(self.elapsed / self.duration);
        CameraPose {
            position: vector::lerp(&self.start_position, &self.target.position, progress),
            look_at: self.target.look_at,
        }
    }

    pub fn target(&self) -> &CameraTarget {
        &self.target
    }
}

/// Exclusive owner of the live camera pose.
///
/// Two states: *Idle*, where the orbit rig applies user gestures directly,
/// and *Transitioning*, where an in-flight tween owns the position until it
/// lands. Gestures arriving mid-transition are dropped; a new target
/// supersedes the current tween wholesale, restarting from the pose sampled
/// at that instant.
#[derive(Debug, Clone)]
pub struct CameraController {
    pose: CameraPose,
    rig: OrbitRig,
    transition: Option<Transition>,
    tuning: GestureTuning,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    /// Controller parked at the overview pose, idle.
    pub fn new() -> Self {
        Self::with_tuning(GestureTuning::default())
    }

    pub fn with_tuning(tuning: GestureTuning) -> Self {
        let pose = CameraPose::overview();
        Self {
            pose,
            rig: OrbitRig::from_pose(&pose),
            transition: None,
            tuning,
        }
    }

    /// The live pose; read-only to consumers.
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Current zoom distance of the idle rig.
    pub fn distance(&self) -> f64 {
        self.rig.distance()
    }

    /// Start (or restart) a tween from the live pose toward `target`.
    ///
    /// Always restarts from the current position, including when a tween is
    /// already in flight (supersession) or when the requested target is the
    /// one already being approached.
    pub fn retarget(&mut self, target: CameraTarget) {
        if self.transition.is_some() {
            debug!(
                "camera transition superseded; new target ({:.1}, {:.1}, {:.1})",
                target.position[0], target.position[1], target.position[2]
            );
        } else {
            debug!(
                "camera transition started toward ({:.1}, {:.1}, {:.1})",
                target.position[0], target.position[1], target.position[2]
            );
        }
        self.pose.look_at = target.look_at;
        self.transition = Some(Transition::new(&self.pose, target));
    }

    /// Advance the in-flight tween, if any, by the frame delta.
    pub fn advance(&mut self, dt: f64) {
        let Some(transition) = &mut self.transition else {
            return;
        };
        transition.advance(dt);
        self.pose = transition.pose();
        if transition.finished() {
            debug!("camera transition finished");
            self.rig = OrbitRig::from_pose(&self.pose);
            self.transition = None;
        }
    }

    /// Drag-to-orbit; ignored while a transition is in flight.
    pub fn orbit(&mut self, dx: f64, dy: f64) {
        if self.transition.is_some() {
            return;
        }
        self.rig.orbit(
            dx * self.tuning.rotate_speed,
            dy * self.tuning.rotate_speed,
        );
        self.pose = self.rig.pose();
    }

    /// Drag-to-pan; ignored while a transition is in flight.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        if self.transition.is_some() {
            return;
        }
        self.rig
            .pan(dx * self.tuning.pan_speed, dy * self.tuning.pan_speed);
        self.pose = self.rig.pose();
    }

    /// Scroll-to-zoom; ignored while a transition is in flight.
    pub fn zoom(&mut self, delta: f64) {
        if self.transition.is_some() {
            return;
        }
        self.rig.zoom(delta * self.tuning.zoom_speed);
        self.pose = self.rig.pose();
    }
}
