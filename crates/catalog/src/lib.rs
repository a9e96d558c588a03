//! Runtime body catalog with load-time validation.
//!
//! Config records are converted into [`Body`] values exactly once at
//! startup; invalid catalog data fails fast here instead of misrendering
//! later. Body names are the only key used to correlate selection,
//! visuals, and catalog entries.

use orrery_config::BodyConfig;
use thiserror::Error;

/// A celestial body with validated motion parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Unique name, stable for the process lifetime.
    pub name: String,
    /// Base position; the orbit plane passes through its `y` component.
    pub position: [f64; 3],
    /// Display radius, always positive.
    pub size: f64,
    /// Display color, opaque to the core.
    pub color: String,
    /// Horizontal distance from the central axis; `0` marks a fixed body.
    pub orbit_radius: f64,
    /// Radians per simulation second; sign sets the orbit direction.
    pub orbit_speed: f64,
    /// Self-rotation in radians per simulation second.
    pub rotation_speed: f64,
    /// Descriptive passthrough for presentation layers.
    pub description: String,
    pub distance: String,
    pub composition: String,
    pub temperature: String,
    pub moons: u32,
}

impl Body {
    /// Whether the body stays fixed at its base position.
    pub fn is_fixed(&self) -> bool {
        self.orbit_radius == 0.0
    }
}

/// Errors surfaced while validating catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("body catalog is empty")]
    Empty,
    #[error("body '{0}' has a negative orbit radius")]
    NegativeOrbitRadius(String),
    #[error("body '{0}' has a non-positive size")]
    NonPositiveSize(String),
    #[error("body '{0}' has a non-finite numeric field")]
    NonFiniteField(String),
    #[error("body name '{0}' appears more than once")]
    DuplicateName(String),
}

/// Immutable, ordered collection of bodies keyed by unique name.
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: Vec<Body>,
}

impl Catalog {
    /// Validate and seal a list of bodies, preserving input order.
    pub fn new(bodies: Vec<Body>) -> Result<Self, CatalogError> {
        if bodies.is_empty() {
            return Err(CatalogError::Empty);
        }
        for body in &bodies {
            validate_body(body)?;
        }
        for (index, body) in bodies.iter().enumerate() {
            if bodies[..index].iter().any(|other| other.name == body.name) {
                return Err(CatalogError::DuplicateName(body.name.clone()));
            }
        }
        Ok(Self { bodies })
    }

    /// Convert config records into a validated catalog.
    pub fn from_configs(configs: &[BodyConfig]) -> Result<Self, CatalogError> {
        Self::new(configs.iter().map(body_from_config).collect())
    }

    /// All bodies in catalog order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Body at a catalog index.
    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Resolve a body by its exact name.
    pub fn find(&self, name: &str) -> Option<(usize, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .find(|(_, body)| body.name == name)
    }
}

/// Convert a `BodyConfig` into the runtime `Body` representation.
fn body_from_config(config: &BodyConfig) -> Body {
    Body {
        name: config.name.clone(),
        position: config.position,
        size: config.size,
        color: config.color.clone(),
        orbit_radius: config.orbit_radius,
        orbit_speed: config.orbit_speed,
        rotation_speed: config.rotation_speed,
        description: config.description.clone(),
        distance: config.distance.clone(),
        composition: config.composition.clone(),
        temperature: config.temperature.clone(),
        moons: config.moons,
    }
}

fn validate_body(body: &Body) -> Result<(), CatalogError> {
    let numeric = [
        body.position[0],
        body.position[1],
        body.position[2],
        body.size,
        body.orbit_radius,
        body.orbit_speed,
        body.rotation_speed,
    ];
    if numeric.iter().any(|v| !v.is_finite()) {
        return Err(CatalogError::NonFiniteField(body.name.clone()));
    }
    if body.orbit_radius < 0.0 {
        return Err(CatalogError::NegativeOrbitRadius(body.name.clone()));
    }
    if body.size <= 0.0 {
        return Err(CatalogError::NonPositiveSize(body.name.clone()));
    }
    Ok(())
}
