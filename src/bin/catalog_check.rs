use std::path::PathBuf;

use clap::Parser;

use solar_orrery::catalog::Catalog;
use solar_orrery::config::load_bodies;

#[derive(Parser)]
#[command(author, version, about = "Validate a body catalog and print a summary")]
struct Cli {
    /// Body catalog (YAML file or directory of TOML records)
    #[arg(long, default_value = "configs/bodies")]
    bodies: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let configs = load_bodies(&cli.bodies)?;
    let catalog = Catalog::from_configs(&configs)?;

    println!("=== Body Catalog ===");
    println!(
        "{:<10} {:>8} {:>10} {:>10} {:>6} {:>6}",
        "name", "size", "orbit_r", "orbit_v", "spin", "moons"
    );
    for body in catalog.bodies() {
        println!(
            "{:<10} {:>8.2} {:>10.1} {:>10.3} {:>6.2} {:>6}",
            body.name, body.size, body.orbit_radius, body.orbit_speed, body.rotation_speed,
            body.moons
        );
    }
    let orbiting = catalog.bodies().iter().filter(|b| !b.is_fixed()).count();
    println!(
        "{} bodies ({} orbiting, {} fixed): catalog valid",
        catalog.len(),
        orbiting,
        catalog.len() - orbiting
    );
    Ok(())
}
