use std::fs;
use std::io::Write;

use solar_orrery::catalog::{Body, Catalog, CatalogError};
use solar_orrery::config::{SessionEventConfig, load_bodies, load_session};

fn body(name: &str, orbit_radius: f64, size: f64) -> Body {
    Body {
        name: name.to_string(),
        position: [orbit_radius, 0.0, 0.0],
        size,
        color: "#ffffff".to_string(),
        orbit_radius,
        orbit_speed: 0.5,
        rotation_speed: 0.1,
        description: String::new(),
        distance: String::new(),
        composition: String::new(),
        temperature: String::new(),
        moons: 0,
    }
}

#[test]
fn empty_catalog_is_rejected() {
    assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
}

#[test]
fn negative_orbit_radius_fails_fast() {
    let mut bad = body("Nemesis", 10.0, 1.0);
    bad.orbit_radius = -1.0;
    let err = Catalog::new(vec![bad]).unwrap_err();
    assert!(matches!(err, CatalogError::NegativeOrbitRadius(ref name) if name == "Nemesis"));
}

#[test]
fn non_positive_size_fails_fast() {
    let err = Catalog::new(vec![body("Speck", 10.0, 0.0)]).unwrap_err();
    assert!(matches!(err, CatalogError::NonPositiveSize(_)));
}

#[test]
fn non_finite_fields_fail_fast() {
    let mut bad = body("Glitch", 10.0, 1.0);
    bad.orbit_speed = f64::NAN;
    assert!(matches!(
        Catalog::new(vec![bad]),
        Err(CatalogError::NonFiniteField(_))
    ));
}

#[test]
fn duplicate_names_fail_fast() {
    let err = Catalog::new(vec![body("Twin", 10.0, 1.0), body("Twin", 20.0, 1.0)]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName(ref name) if name == "Twin"));
}

#[test]
fn find_is_exact_and_order_is_preserved() {
    let catalog = Catalog::new(vec![
        body("Sun", 0.0, 8.0),
        body("Earth", 50.0, 2.0),
    ])
    .expect("catalog");

    let names: Vec<_> = catalog.bodies().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Sun", "Earth"]);

    let (index, earth) = catalog.find("Earth").expect("find");
    assert_eq!(index, 1);
    assert_eq!(earth.orbit_radius, 50.0);
    assert!(catalog.find("earth").is_none());
    assert!(catalog.find("Pluto").is_none());
}

#[test]
fn bodies_load_from_a_yaml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("tempfile");
    writeln!(
        file,
        "- name: Sol\n  position: [0.0, 0.0, 0.0]\n  size: 8.0\n  color: \"#ffd700\"\n  orbit_radius: 0.0\n  orbit_speed: 0.0\n  rotation_speed: 0.1\n- name: Ares\n  position: [40.0, 0.0, 0.0]\n  size: 1.2\n  color: \"#c1440e\"\n  orbit_radius: 40.0\n  orbit_speed: 0.4\n  rotation_speed: 0.5\n  moons: 2"
    )
    .expect("write yaml");

    let configs = load_bodies(file.path()).expect("load");
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].name, "Sol");
    assert_eq!(configs[1].moons, 2);
    // Descriptive fields are optional passthrough.
    assert!(configs[0].description.is_empty());

    let catalog = Catalog::from_configs(&configs).expect("catalog");
    assert!(catalog.bodies()[0].is_fixed());
    assert!(!catalog.bodies()[1].is_fixed());
}

#[test]
fn bodies_load_from_a_directory_of_toml_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("00_sun.toml"),
        "name = \"Sol\"\nposition = [0.0, 0.0, 0.0]\nsize = 8.0\ncolor = \"#ffd700\"\norbit_radius = 0.0\norbit_speed = 0.0\nrotation_speed = 0.1\n",
    )
    .expect("write sun");
    fs::write(
        dir.path().join("01_earth.toml"),
        "name = \"Terra\"\nposition = [30.0, 0.0, 0.0]\nsize = 2.0\ncolor = \"#6b93d6\"\norbit_radius = 30.0\norbit_speed = 0.5\nrotation_speed = 0.6\nmoons = 1\n",
    )
    .expect("write earth");

    let configs = load_bodies(dir.path()).expect("load");
    let names: Vec<_> = configs.iter().map(|c| c.name.as_str()).collect();
    // Records come back in sorted filename order.
    assert_eq!(names, ["Sol", "Terra"]);
}

#[test]
fn the_shipped_catalog_is_valid() {
    let configs = load_bodies("configs/bodies").expect("shipped catalog");
    let catalog = Catalog::from_configs(&configs).expect("validate");
    assert_eq!(catalog.len(), 9);

    let sun = &catalog.bodies()[0];
    assert_eq!(sun.name, "Sun");
    assert!(sun.is_fixed());
    assert!(catalog.bodies()[1..].iter().all(|b| !b.is_fixed()));

    // Every orbit fits inside the zoom ceiling.
    assert!(catalog.bodies().iter().all(|b| b.orbit_radius < 300.0));
}

#[test]
fn session_scripts_parse_every_action() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("tempfile");
    writeln!(
        file,
        "- at: 0.5\n  action: select\n  body: Earth\n- at: 1.0\n  action: orbit\n  dx: 0.4\n  dy: 0.1\n- at: 1.5\n  action: pan\n  dx: 2.0\n  dy: 0.0\n- at: 2.0\n  action: zoom\n  delta: 0.5\n- at: 3.0\n  action: reset"
    )
    .expect("write yaml");

    let events = load_session(file.path()).expect("load");
    assert_eq!(events.len(), 5);
    assert_eq!(events[0].at(), 0.5);
    assert!(matches!(
        events[0],
        SessionEventConfig::Select { ref body, .. } if body == "Earth"
    ));
    assert!(matches!(events[1], SessionEventConfig::Orbit { .. }));
    assert!(matches!(events[4], SessionEventConfig::Reset { at } if at == 3.0));
}
