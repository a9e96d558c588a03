//! Cached orbit-path polylines for visualization.

use std::collections::HashMap;
use std::f64::consts::TAU;

use orrery_core::constants::ORBIT_PATH_SEGMENTS;

/// Closed polyline approximating one orbit circle.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    radius: f64,
    points: Vec<[f64; 3]>,
}

impl OrbitPath {
    /// Sample a circle of `radius` in the horizontal plane at `plane_y`.
    ///
    /// Produces `ORBIT_PATH_SEGMENTS + 1` points; the final sample repeats
    /// the first so the loop closes exactly.
    pub fn circle(radius: f64, plane_y: f64) -> Self {
        let mut points = Vec::with_capacity(ORBIT_PATH_SEGMENTS + 1);
        for i in 0..ORBIT_PATH_SEGMENTS {
            let theta = (i as f64 / ORBIT_PATH_SEGMENTS as f64) * TAU;
            points.push([theta.cos() * radius, plane_y, theta.sin() * radius]);
        }
        points.push(points[0]);
        Self { radius, points }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Polyline samples; first and last coincide.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }
}

/// One polyline per distinct `(radius, plane)` pair.
///
/// Paths depend only on the orbit geometry, never on time, so each is
/// computed once and reused every frame. Fixed bodies have no path.
#[derive(Debug, Clone, Default)]
pub struct OrbitPathCache {
    paths: HashMap<(u64, u64), OrbitPath>,
}

impl OrbitPathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute and store the path for this geometry if absent.
    pub fn ensure(&mut self, radius: f64, plane_y: f64) {
        if radius == 0.0 {
            return;
        }
        self.paths
            .entry(Self::key(radius, plane_y))
            .or_insert_with(|| OrbitPath::circle(radius, plane_y));
    }

    /// Cached path for this geometry, if one has been computed.
    pub fn get(&self, radius: f64, plane_y: f64) -> Option<&OrbitPath> {
        if radius == 0.0 {
            return None;
        }
        self.paths.get(&Self::key(radius, plane_y))
    }

    /// Number of cached polylines.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn key(radius: f64, plane_y: f64) -> (u64, u64) {
        (radius.to_bits(), plane_y.to_bits())
    }
}
