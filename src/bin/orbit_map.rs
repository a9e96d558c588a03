use std::fs;
use std::path::PathBuf;

use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;

use solar_orrery::catalog::Catalog;
use solar_orrery::config::load_bodies;
use solar_orrery::motion::path::OrbitPath;
use solar_orrery::motion::position_at;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a top-down orbit map (PNG) of the catalog at a given time"
)]
struct Cli {
    /// Body catalog (YAML file or directory of TOML records)
    #[arg(long, default_value = "configs/bodies")]
    bodies: PathBuf,

    /// Elapsed simulation time at which to place the bodies
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Optional playback CSV whose camera track is overlaid
    #[arg(long)]
    track: Option<PathBuf>,

    #[arg(long, default_value = "artifacts/orbit_map.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 1024)]
    size: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::from_configs(&load_bodies(&cli.bodies)?)?;

    let camera_track = match &cli.track {
        Some(path) => read_camera_track(path)?,
        None => Vec::new(),
    };

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    let mut extent = catalog
        .bodies()
        .iter()
        .map(|body| body.orbit_radius)
        .fold(10.0_f64, f64::max);
    for (x, z) in &camera_track {
        extent = extent.max(x.abs()).max(z.abs());
    }
    let extent = extent * 1.15;

    let root = BitMapBackend::new(output_str, (cli.size, cli.size)).into_drawing_area();
    root.fill(&BLACK)?;

    let caption_style = ("sans-serif", 24).into_font().color(&WHITE);
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Solar Orrery at t = {:.1} s", cli.time), caption_style)
        .margin(12)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    for body in catalog.bodies() {
        if body.is_fixed() {
            continue;
        }
        let path = OrbitPath::circle(body.orbit_radius, body.position[1]);
        chart.draw_series(LineSeries::new(
            path.points().iter().map(|p| (p[0], p[2])),
            WHITE.mix(0.15),
        ))?;
    }

    for body in catalog.bodies() {
        let position = position_at(body, cli.time);
        let color = parse_color(&body.color);
        let radius = (body.size * 1.5).ceil().max(2.0) as i32;
        chart.draw_series(std::iter::once(Circle::new(
            (position[0], position[2]),
            radius,
            color.filled(),
        )))?;
    }

    if !camera_track.is_empty() {
        chart.draw_series(LineSeries::new(
            camera_track.iter().copied(),
            YELLOW.mix(0.6),
        ))?;
        let (x, z) = *camera_track.last().expect("non-empty track");
        chart.draw_series(std::iter::once(Cross::new((x, z), 6, &YELLOW)))?;
    }

    root.present()?;
    println!("Wrote orbit map to {}", cli.output.display());
    Ok(())
}

/// Ground-track (x, z) of the camera from a playback CSV, one point per
/// sampled frame.
fn read_camera_track(path: &PathBuf) -> anyhow::Result<Vec<(f64, f64)>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut anchor_body: Option<String> = None;
    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;
        let body = record
            .get(1)
            .ok_or_else(|| anyhow::anyhow!("Malformed track row: missing body column"))?;
        match &anchor_body {
            None => anchor_body = Some(body.to_string()),
            Some(name) if name != body => continue,
            Some(_) => {}
        }
        let x: f64 = parse_column(&record, 6)?;
        let z: f64 = parse_column(&record, 8)?;
        points.push((x, z));
    }
    Ok(points)
}

fn parse_column(record: &csv::StringRecord, index: usize) -> anyhow::Result<f64> {
    record
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("Malformed track row: missing column {index}"))?
        .parse()
        .map_err(|err| anyhow::anyhow!("Malformed track row: {err}"))
}

/// Parse a `#rrggbb` display color; anything else renders white.
fn parse_color(color: &str) -> RGBColor {
    let hex = color.trim_start_matches('#');
    if hex.len() != 6 {
        return WHITE;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => RGBColor(r, g, b),
        _ => WHITE,
    }
}
