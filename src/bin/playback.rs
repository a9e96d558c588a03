use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use solar_orrery::catalog::Catalog;
use solar_orrery::config::{SessionEventConfig, load_bodies, load_session};
use solar_orrery::export::summary::{CameraRecord, SelectionRecord, SessionSummary, write_summary};
use solar_orrery::export::track;
use solar_orrery::scene::{InputEvent, Scene};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Run a headless scripted session and export the frame track"
)]
struct Cli {
    /// Body catalog (YAML file or directory of TOML records)
    #[arg(long, default_value = "configs/bodies")]
    bodies: PathBuf,

    /// Session script of timestamped input events (optional)
    #[arg(long)]
    session: Option<PathBuf>,

    /// Simulated session length in seconds
    #[arg(long, default_value_t = 10.0)]
    duration: f64,

    /// Fixed timestep frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Sample every Nth frame into the CSV track
    #[arg(long, default_value_t = 1)]
    every: usize,

    /// Frame track CSV destination (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Optional JSON session summary sidecar
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if cli.duration <= 0.0 || cli.fps <= 0.0 {
        return Err(anyhow::anyhow!("duration and fps must be positive"));
    }

    let catalog = Catalog::from_configs(&load_bodies(&cli.bodies)?)?;
    let mut events = match &cli.session {
        Some(path) => resolve_events(load_session(path)?, &catalog)?,
        None => Vec::new(),
    };
    // Stable by timestamp; same-time events keep script order.
    events.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut scene = Scene::new(catalog);
    let mut writer = track::writer_for_path(&cli.output)?;
    track::write_header(writer.as_mut())?;

    let dt = 1.0 / cli.fps;
    let frames = (cli.duration * cli.fps).round() as usize;
    let every = cli.every.max(1);
    let mut next_event = 0usize;
    let mut selections = Vec::new();
    let mut rows = 0usize;

    for frame in 0..frames {
        // Input events apply between frames, once the clock has reached
        // their timestamp.
        while next_event < events.len() && events[next_event].0 <= scene.elapsed() {
            let event = &events[next_event].1;
            scene.apply(event)?;
            match event {
                InputEvent::Select(name) => selections.push(SelectionRecord {
                    at_s: scene.elapsed(),
                    body: Some(name.clone()),
                }),
                InputEvent::Reset => selections.push(SelectionRecord {
                    at_s: scene.elapsed(),
                    body: None,
                }),
                _ => {}
            }
            next_event += 1;
        }

        scene.advance(dt);

        if frame % every != 0 {
            continue;
        }
        let snapshot = scene.snapshot();
        for body in &snapshot.bodies {
            track::Record {
                elapsed_s: snapshot.elapsed,
                body: body.name,
                position: body.position,
                rotation_rad: body.rotation_angle,
                camera_position: snapshot.camera.position,
                camera_look_at: snapshot.camera.look_at,
                selected: snapshot.selected == Some(body.name),
                transitioning: snapshot.transitioning,
            }
            .write_to(writer.as_mut())?;
            rows += 1;
        }
    }
    drop(writer);

    if let Some(path) = &cli.summary {
        let pose = scene.camera_pose();
        let summary = SessionSummary::new(
            scene.catalog().len(),
            frames,
            scene.elapsed(),
            selections,
            CameraRecord {
                position: pose.position,
                look_at: pose.look_at,
            },
        );
        write_summary(path, &summary)?;
    }

    if cli.output != PathBuf::from("-") {
        println!(
            "Wrote {} rows over {} frames ({:.2} s simulated) to {}",
            rows,
            frames,
            scene.elapsed(),
            cli.output.display()
        );
    }

    Ok(())
}

/// Resolve script events against the catalog, accepting case-insensitive
/// body names the way interactive front-ends do.
fn resolve_events(
    configs: Vec<SessionEventConfig>,
    catalog: &Catalog,
) -> anyhow::Result<Vec<(f64, InputEvent)>> {
    configs
        .into_iter()
        .map(|config| {
            let at = config.at();
            let event = match config {
                SessionEventConfig::Select { body, .. } => {
                    let name = find_body(catalog, &body)?;
                    InputEvent::Select(name)
                }
                SessionEventConfig::Reset { .. } => InputEvent::Reset,
                SessionEventConfig::Orbit { dx, dy, .. } => InputEvent::Orbit { dx, dy },
                SessionEventConfig::Pan { dx, dy, .. } => InputEvent::Pan { dx, dy },
                SessionEventConfig::Zoom { delta, .. } => InputEvent::Zoom { delta },
            };
            Ok((at, event))
        })
        .collect()
}

fn find_body(catalog: &Catalog, name: &str) -> anyhow::Result<String> {
    let upper = name.to_uppercase();
    catalog
        .bodies()
        .iter()
        .find(|body| body.name.to_uppercase() == upper)
        .map(|body| body.name.clone())
        .ok_or_else(|| anyhow::anyhow!("Body '{}' not found in catalog", name))
}
