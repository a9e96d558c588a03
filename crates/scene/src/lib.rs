//! Frame-driven scene state for the Solar Orrery.
//!
//! [`Scene`] owns every mutable piece of the core (the clock, the per-body
//! motion state, the selection, and the camera) and advances them once per
//! rendered frame in a fixed order: clock first, then body motion, then the
//! camera transition, all with the same frame delta. Input operations are
//! applied between frames; everything is single-owner and single-threaded,
//! so there is no locking anywhere.

use thiserror::Error;
use tracing::{debug, warn};

use orrery_camera::{self as camera, CameraController, CameraPose, CameraTarget};
use orrery_catalog::{Body, Catalog};
use orrery_motion::path::{OrbitPath, OrbitPathCache};
use orrery_motion::{MotionEngine, SimulationClock};

/// Errors surfaced by scene input operations.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("body '{0}' is not present in the catalog")]
    UnknownBody(String),
}

/// At most one selected body, tracked by catalog index.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    /// Index of the selected body, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    fn clear(&mut self) {
        self.selected = None;
    }
}

/// One body's pose within a composed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose<'a> {
    pub name: &'a str,
    pub position: [f64; 3],
    pub rotation_angle: f64,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct FrameSnapshot<'a> {
    pub elapsed: f64,
    pub bodies: Vec<BodyPose<'a>>,
    pub camera: CameraPose,
    pub selected: Option<&'a str>,
    pub transitioning: bool,
}

/// Scripted or live input applied between frames.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Select(String),
    Reset,
    Orbit { dx: f64, dy: f64 },
    Pan { dx: f64, dy: f64 },
    Zoom { delta: f64 },
}

/// Owner of all mutable core state, updated once per rendered frame.
#[derive(Debug)]
pub struct Scene {
    catalog: Catalog,
    clock: SimulationClock,
    motion: MotionEngine,
    camera: CameraController,
    selection: SelectionState,
    paths: OrbitPathCache,
}

impl Scene {
    /// Build a scene over an immutable catalog, camera parked at the
    /// overview pose.
    pub fn new(catalog: Catalog) -> Self {
        let motion = MotionEngine::new(&catalog);
        let mut paths = OrbitPathCache::new();
        for body in catalog.bodies() {
            paths.ensure(body.orbit_radius, body.position[1]);
        }
        Self {
            catalog,
            clock: SimulationClock::new(),
            motion,
            camera: CameraController::new(),
            selection: SelectionState::default(),
            paths,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// The selected body, if any.
    pub fn selected_body(&self) -> Option<&Body> {
        self.selection.selected().and_then(|i| self.catalog.get(i))
    }

    /// The live camera pose for this frame.
    pub fn camera_pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// The target the current selection derives: a framed view of the
    /// selected body, or the overview when nothing is selected.
    pub fn camera_target(&self) -> CameraTarget {
        match self.selected_body() {
            Some(body) => camera::target_for_body(body),
            None => camera::overview_target(),
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.camera.is_transitioning()
    }

    /// Advance one frame: clock, then body motion, then the camera, all
    /// with the same delta.
    pub fn advance(&mut self, dt: f64) {
        self.clock.advance(dt);
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.motion
            .step(&self.catalog, self.clock.elapsed(), dt);
        self.camera.advance(dt);
    }

    /// Select a body by exact name and aim the camera at it.
    ///
    /// Unknown names are rejected without touching any state. Re-selecting
    /// the current body leaves the selection value unchanged but restarts
    /// the camera transition from the live pose.
    pub fn select_body(&mut self, name: &str) -> Result<(), SceneError> {
        let Some((index, body)) = self.catalog.find(name) else {
            warn!("selection rejected; '{name}' is not in the catalog");
            return Err(SceneError::UnknownBody(name.to_string()));
        };
        self.selection.select(index);
        debug!("selected '{name}'");
        self.camera.retarget(camera::target_for_body(body));
        Ok(())
    }

    /// Clear the selection and glide the camera back to the overview.
    pub fn reset_view(&mut self) {
        self.selection.clear();
        debug!("selection reset");
        self.camera.retarget(camera::overview_target());
    }

    /// Drag-to-orbit; dropped while a transition is in flight.
    pub fn orbit(&mut self, dx: f64, dy: f64) {
        self.camera.orbit(dx, dy);
    }

    /// Drag-to-pan; dropped while a transition is in flight.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.camera.pan(dx, dy);
    }

    /// Scroll-to-zoom; dropped while a transition is in flight.
    pub fn zoom(&mut self, delta: f64) {
        self.camera.zoom(delta);
    }

    /// Apply one scripted or queued input event.
    pub fn apply(&mut self, event: &InputEvent) -> Result<(), SceneError> {
        match event {
            InputEvent::Select(name) => self.select_body(name),
            InputEvent::Reset => {
                self.reset_view();
                Ok(())
            }
            InputEvent::Orbit { dx, dy } => {
                self.orbit(*dx, *dy);
                Ok(())
            }
            InputEvent::Pan { dx, dy } => {
                self.pan(*dx, *dy);
                Ok(())
            }
            InputEvent::Zoom { delta } => {
                self.zoom(*delta);
                Ok(())
            }
        }
    }

    /// Compose the visible frame from the current state.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        let bodies = self
            .catalog
            .bodies()
            .iter()
            .zip(self.motion.states())
            .map(|(body, state)| BodyPose {
                name: body.name.as_str(),
                position: state.position,
                rotation_angle: state.rotation_angle,
            })
            .collect();
        FrameSnapshot {
            elapsed: self.clock.elapsed(),
            bodies,
            camera: self.camera.pose(),
            selected: self.selected_body().map(|body| body.name.as_str()),
            transitioning: self.camera.is_transitioning(),
        }
    }

    /// Cached orbit polyline for a body, if it orbits.
    pub fn orbit_path(&self, body: &Body) -> Option<&OrbitPath> {
        self.paths.get(body.orbit_radius, body.position[1])
    }

    /// All distinct orbit polylines with the bodies that ride them.
    pub fn orbit_paths(&self) -> Vec<(&str, &OrbitPath)> {
        self.catalog
            .bodies()
            .iter()
            .filter_map(|body| {
                self.orbit_path(body)
                    .map(|path| (body.name.as_str(), path))
            })
            .collect()
    }
}
