use approx::assert_relative_eq;
use nalgebra::Vector2;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::Length;

use crate::body::{Colour, DEFAULT_RADIUS};
use crate::error::SimError;
use crate::scenario::*;

const AU: f64 = 1.5e11;

const SCENARIO: &str = "
config:
  time_multiplier: 2.0e6
bodies:
  - position_au: [2.0, 2.0]
    mass: 2.0e30
    colour: [255, 0, 0]
    target: true
  - position_au: [2.0, 1.0]
    velocity: [30000.0, 0.0]
    mass: 6.0e24
random_field: { count: 5, seed: 7 }
launches:
  - { tick: 10, press: [400.0, 200.0], release: [380.0, 220.0] }
";

#[test]
fn test_sun_with_two_planets() {
    let bodies = sun_with_two_planets();

    assert_eq!(bodies.len(), 3);
    let masses: Vec<f64> = bodies.iter().map(|b| b.mass).collect();
    assert_eq!(masses, vec![6.0e28, 2.0e30, 6.0e24]);

    let sun = &bodies[1];
    assert!(sun.is_target);
    assert_eq!(sun.colour, Colour::RED);
    assert_eq!(sun.velocity, Vector2::zeros());

    // Planets 1 AU either side of the sun, moving in opposite directions
    assert_relative_eq!(bodies[0].position.y - sun.position.y, AU);
    assert_relative_eq!(sun.position.y - bodies[2].position.y, AU);
    assert_eq!(bodies[0].velocity, -bodies[2].velocity);
    assert!(bodies.iter().all(|b| b.validate().is_ok() && !b.player_spawned));
}

#[test]
fn test_random_field_is_repeatable() {
    let extent = Length::from_au(4.0);

    let a = seeded_random_field(42, 20, extent, extent);
    let b = seeded_random_field(42, 20, extent, extent);
    let c = seeded_random_field(43, 20, extent, extent);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_random_field_bounds() {
    let width = Length::from_au(4.0);
    let height = Length::from_au(3.0);
    let mut rng = ChaChaRng::seed_from_u64(1);

    let bodies = random_field(&mut rng, 200, width, height);

    assert_eq!(bodies.len(), 200);
    for body in &bodies {
        assert!((0.0..=width.to_meters()).contains(&body.position.x));
        assert!((0.0..=height.to_meters()).contains(&body.position.y));
        assert!(body.velocity.iter().all(|v| v.abs() <= 1.0e3));
        assert!((1.0e10..=1.0e30).contains(&body.mass));
        assert_eq!(body.radius, DEFAULT_RADIUS);
        assert!(body.validate().is_ok());
    }
}

#[test]
fn test_random_field_empty() {
    let mut rng = ChaChaRng::seed_from_u64(0);

    assert!(random_field(&mut rng, 0, Length::from_au(1.0), Length::from_au(1.0)).is_empty());
}

#[test]
fn test_parse_scenario_file() {
    let scenario = ScenarioFile::from_yaml_str(SCENARIO).unwrap();

    assert_eq!(scenario.config.time_multiplier, 2.0e6);
    assert_eq!(scenario.bodies.len(), 2);
    assert_eq!(scenario.random_field, Some(RandomFieldConfig { count: 5, seed: 7 }));
    assert_eq!(
        scenario.launches,
        vec![ScriptedLaunch {
            tick: 10,
            press: [400.0, 200.0],
            release: [380.0, 220.0],
        }]
    );

    let planet = &scenario.bodies[1];
    assert_eq!(planet.radius, DEFAULT_RADIUS);
    assert_eq!(planet.colour, Colour::WHITE);
    assert!(!planet.target);
}

#[test]
fn test_body_config_converts_au() {
    let scenario = ScenarioFile::from_yaml_str(SCENARIO).unwrap();

    let sun = scenario.bodies[0].to_spawn_params();

    assert_relative_eq!(sun.position.x, 2.0 * AU);
    assert_relative_eq!(sun.position.y, 2.0 * AU);
    assert_eq!(sun.colour, Colour::RED);
    assert!(sun.is_target);
}

#[test]
fn test_build_scenario() {
    let scenario = ScenarioFile::from_yaml_str(SCENARIO).unwrap();

    let sim = scenario.build().unwrap();

    assert_eq!(sim.body_count(), 7);
    assert_eq!(sim.time_multiplier(), 2.0e6);
    assert!(sim.bodies()[0].is_target);
    assert_eq!(sim.pending_launches(), 0);
}

#[test]
fn test_build_rejects_bad_body() {
    let yaml = "
bodies:
  - position_au: [1.0, 1.0]
    mass: 0.0
";
    let scenario = ScenarioFile::from_yaml_str(yaml).unwrap();

    assert!(matches!(
        scenario.build(),
        Err(SimError::InvalidSpawnParameters { .. })
    ));
}

#[test]
fn test_bad_config_rejected_on_load() {
    let result = ScenarioFile::from_yaml_str("config: { target_fps: 0 }");

    assert!(matches!(result, Err(SimError::Config(_))));
}

#[test]
fn test_empty_scenario() {
    let scenario = ScenarioFile::from_yaml_str("{}").unwrap();

    assert!(scenario.spawn_params().is_empty());
    assert_eq!(scenario.build().unwrap().body_count(), 0);
}
