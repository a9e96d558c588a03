//! Simulation-and-camera core for an interactive solar-system view.
//!
//! The workspace keeps the pure frame logic (orbital motion, selection,
//! and the camera transition state machine) in library crates with no
//! rendering dependencies, so multiple front-ends (headless playback,
//! offline plotting, a future interactive renderer) can share it.

pub use orrery_camera as camera;
pub use orrery_catalog as catalog;
pub use orrery_config as config;
pub use orrery_export as export;
pub use orrery_motion as motion;
pub use orrery_scene as scene;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
