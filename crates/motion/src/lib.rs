//! Per-frame orbital motion for catalog bodies.
//!
//! Orbits are simplified closed-form circles, not integrated physics: each
//! body's position is a pure function of elapsed time, confined to the
//! horizontal plane through its base `y`. Bodies never interact. The only
//! accumulated state is each body's self-rotation angle, advanced by the
//! frame delta so the spin rate stays frame-rate independent.

pub mod path;

use orrery_catalog::{Body, Catalog};
use orrery_core::angle;

/// Monotonically increasing elapsed-simulation-time accumulator.
///
/// Advanced once per frame by the frame's delta time; never resets and
/// never goes backward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    elapsed: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a frame delta; non-finite or negative deltas are ignored.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Elapsed simulation seconds since session start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// Orbit position of `body` after `elapsed` simulation seconds.
///
/// Fixed bodies (`orbit_radius == 0`) short-circuit to their base position
/// without evaluating any trigonometry. A negative `orbit_speed` reverses
/// the direction of travel.
pub fn position_at(body: &Body, elapsed: f64) -> [f64; 3] {
    if body.is_fixed() {
        return body.position;
    }
    let theta = angle::wrap(elapsed * body.orbit_speed);
    [
        theta.cos() * body.orbit_radius,
        body.position[1],
        theta.sin() * body.orbit_radius,
    ]
}

/// Pose produced for one body each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyState {
    pub position: [f64; 3],
    /// Accumulated self-rotation about the vertical axis, in `[0, 2π)`.
    pub rotation_angle: f64,
}

/// Owns the per-body accumulated rotation and recomputes positions each frame.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    states: Vec<BodyState>,
}

impl MotionEngine {
    /// Initial states for a catalog: positions at elapsed time zero, no spin.
    pub fn new(catalog: &Catalog) -> Self {
        let states = catalog
            .bodies()
            .iter()
            .map(|body| BodyState {
                position: position_at(body, 0.0),
                rotation_angle: 0.0,
            })
            .collect();
        Self { states }
    }

    /// Recompute every body's pose for this frame.
    ///
    /// `elapsed` is the clock value after the frame's advance; `dt` is the
    /// same frame delta the clock consumed.
    pub fn step(&mut self, catalog: &Catalog, elapsed: f64, dt: f64) {
        for (state, body) in self.states.iter_mut().zip(catalog.bodies()) {
            state.position = position_at(body, elapsed);
            state.rotation_angle = angle::wrap(state.rotation_angle + body.rotation_speed * dt);
        }
    }

    /// Current per-body poses, in catalog order.
    pub fn states(&self) -> &[BodyState] {
        &self.states
    }
}
