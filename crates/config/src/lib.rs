//! Configuration models and loaders for the Solar Orrery.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Celestial body record parsed from catalog manifests.
///
/// Motion parameters are interpreted by the catalog and motion crates; the
/// descriptive fields pass through untouched for presentation layers.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    /// Base position; the orbit plane passes through its `y` component.
    pub position: [f64; 3],
    pub size: f64,
    pub color: String,
    /// Horizontal distance from the central axis; `0` marks a fixed body.
    pub orbit_radius: f64,
    /// Radians per simulation second; sign sets the orbit direction.
    pub orbit_speed: f64,
    /// Self-rotation in radians per simulation second.
    pub rotation_speed: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub composition: String,
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub moons: u32,
}

/// Timestamped input event parsed from session scripts.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "action")]
pub enum SessionEventConfig {
    #[serde(rename = "select")]
    Select { at: f64, body: String },
    #[serde(rename = "reset")]
    Reset { at: f64 },
    #[serde(rename = "orbit")]
    Orbit { at: f64, dx: f64, dy: f64 },
    #[serde(rename = "pan")]
    Pan { at: f64, dx: f64, dy: f64 },
    #[serde(rename = "zoom")]
    Zoom { at: f64, delta: f64 },
}

impl SessionEventConfig {
    /// Simulation-time second at which the event fires.
    pub fn at(&self) -> f64 {
        match self {
            Self::Select { at, .. }
            | Self::Reset { at }
            | Self::Orbit { at, .. }
            | Self::Pan { at, .. }
            | Self::Zoom { at, .. } => *at,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read YAML: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load body records from a YAML file or a directory of TOML records.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Load a session script from a YAML file or a directory of TOML records.
///
/// Events keep their script order; the playback driver fires each one when
/// the clock first reaches its timestamp.
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<Vec<SessionEventConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
