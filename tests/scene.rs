use solar_orrery::camera::{overview_target, target_for_body};
use solar_orrery::catalog::{Body, Catalog};
use solar_orrery::motion::position_at;
use solar_orrery::scene::{InputEvent, Scene, SceneError};

fn body(name: &str, orbit_radius: f64, orbit_speed: f64, size: f64) -> Body {
    Body {
        name: name.to_string(),
        position: [orbit_radius, 0.0, 0.0],
        size,
        color: "#ffffff".to_string(),
        orbit_radius,
        orbit_speed,
        rotation_speed: 0.2,
        description: String::new(),
        distance: String::new(),
        composition: String::new(),
        temperature: String::new(),
        moons: 0,
    }
}

fn test_catalog() -> Catalog {
    Catalog::new(vec![
        body("Sun", 0.0, 0.0, 8.0),
        body("Earth", 50.0, 1.0, 2.0),
        body("Mars", 65.0, 0.6, 1.2),
    ])
    .expect("catalog")
}

/// Run enough fixed-step frames to let any transition finish.
fn settle(scene: &mut Scene) {
    for _ in 0..180 {
        scene.advance(1.0 / 60.0);
    }
}

#[test]
fn selecting_unknown_body_changes_nothing() {
    let mut scene = Scene::new(test_catalog());
    let pose_before = scene.camera_pose();

    let err = scene.select_body("Vulcan").unwrap_err();
    assert!(matches!(err, SceneError::UnknownBody(ref name) if name == "Vulcan"));
    assert!(scene.selected_body().is_none());
    assert!(!scene.is_transitioning());
    assert_eq!(scene.camera_pose(), pose_before);
}

#[test]
fn selection_is_exact_about_names() {
    let mut scene = Scene::new(test_catalog());
    assert!(scene.select_body("earth").is_err());
    assert!(scene.select_body("Earth").is_ok());
}

#[test]
fn selecting_a_body_starts_a_transition_toward_it() {
    let mut scene = Scene::new(test_catalog());
    scene.select_body("Earth").expect("select");
    assert!(scene.is_transitioning());
    assert_eq!(scene.selected_body().map(|b| b.name.as_str()), Some("Earth"));

    settle(&mut scene);
    assert!(!scene.is_transitioning());
    let expected = target_for_body(&test_catalog().bodies()[1]);
    assert_eq!(scene.camera_pose().position, expected.position);
    assert_eq!(scene.camera_pose().look_at, expected.look_at);
}

#[test]
fn select_then_reset_returns_to_the_overview() {
    let mut scene = Scene::new(test_catalog());
    scene.select_body("Mars").expect("select");
    scene.advance(0.75);
    assert_eq!(
        scene.camera_target(),
        target_for_body(&test_catalog().bodies()[2])
    );

    scene.reset_view();
    assert!(scene.selected_body().is_none());
    assert_eq!(scene.camera_target(), overview_target());
    settle(&mut scene);

    let home = overview_target();
    assert_eq!(scene.camera_pose().position, home.position);
    assert_eq!(scene.camera_pose().look_at, home.look_at);
}

#[test]
fn reselecting_the_same_body_is_idempotent_for_selection() {
    let mut scene = Scene::new(test_catalog());
    scene.select_body("Earth").expect("first select");
    settle(&mut scene);

    // The stored selection is unchanged; the transition restarts anyway.
    scene.select_body("Earth").expect("second select");
    assert_eq!(scene.selected_body().map(|b| b.name.as_str()), Some("Earth"));
    assert!(scene.is_transitioning());
}

#[test]
fn frame_update_keeps_positions_in_step_with_the_clock() {
    let mut scene = Scene::new(test_catalog());
    for dt in [1.0 / 60.0, 1.0 / 30.0, 0.2, 1.0 / 144.0] {
        scene.advance(dt);
    }
    let elapsed = scene.elapsed();
    let snapshot = scene.snapshot();
    for (pose, body) in snapshot.bodies.iter().zip(scene.catalog().bodies()) {
        assert_eq!(pose.position, position_at(body, elapsed), "{}", body.name);
    }
}

#[test]
fn snapshot_reports_catalog_order_and_selection() {
    let mut scene = Scene::new(test_catalog());
    scene.select_body("Mars").expect("select");
    scene.advance(0.1);

    let snapshot = scene.snapshot();
    let names: Vec<_> = snapshot.bodies.iter().map(|b| b.name).collect();
    assert_eq!(names, ["Sun", "Earth", "Mars"]);
    assert_eq!(snapshot.selected, Some("Mars"));
    assert!(snapshot.transitioning);
    assert!(snapshot.elapsed > 0.0);
}

#[test]
fn gestures_are_dropped_mid_transition_and_applied_when_idle() {
    let mut scene = Scene::new(test_catalog());
    scene.select_body("Earth").expect("select");
    scene.advance(0.5);

    let in_flight = scene.camera_pose();
    scene.zoom(2.0);
    scene.orbit(1.0, 0.5);
    scene.pan(3.0, 3.0);
    assert_eq!(scene.camera_pose(), in_flight);

    settle(&mut scene);
    let landed = scene.camera_pose();
    scene.zoom(2.0);
    assert_ne!(scene.camera_pose(), landed);
}

#[test]
fn input_events_drive_the_same_operations() {
    let mut scene = Scene::new(test_catalog());
    scene
        .apply(&InputEvent::Select("Earth".to_string()))
        .expect("select event");
    assert_eq!(scene.selected_body().map(|b| b.name.as_str()), Some("Earth"));

    scene.apply(&InputEvent::Reset).expect("reset event");
    assert!(scene.selected_body().is_none());

    let err = scene.apply(&InputEvent::Select("Pluto".to_string()));
    assert!(err.is_err());
}

#[test]
fn orbit_paths_skip_fixed_bodies() {
    let scene = Scene::new(test_catalog());
    let paths = scene.orbit_paths();
    let names: Vec<_> = paths.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["Earth", "Mars"]);
    for (_, path) in paths {
        assert_eq!(path.points().len(), 65);
        assert_eq!(path.points().first(), path.points().last());
    }
}

#[test]
fn selection_survives_while_the_camera_lands() {
    let mut scene = Scene::new(test_catalog());
    scene.select_body("Earth").expect("select");
    settle(&mut scene);
    assert_eq!(scene.selected_body().map(|b| b.name.as_str()), Some("Earth"));
    assert!(!scene.is_transitioning());
}
