//! Integration tests driving whole simulations through the public API.

use approx::assert_relative_eq;
use nalgebra::Point2;
use units::Time;

use slingshot::config::SimulationConfig;
use slingshot::launch::{Slingshot, ViewScale};
use slingshot::scenario::{sun_with_two_planets, ScenarioFile};
use slingshot::Simulation;

fn seed_scenario() -> Simulation {
    let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
    for params in sun_with_two_planets() {
        sim.add_body(params).unwrap();
    }
    sim
}

#[test]
fn seed_scenario_runs_for_a_year() {
    let mut sim = seed_scenario();
    let dt = sim.config().frame_dt();
    let initial_mass = sim.total_mass();

    // A simulated year at 60 fps and the default multiplier
    let ticks = (Time::from_years(1.0).to_seconds() / (dt * sim.time_multiplier())).ceil() as u64;
    let mut merges = 0;
    for _ in 0..ticks {
        merges += sim.tick(dt).unwrap().len();
        assert!(sim.bodies().iter().all(|b| b.has_finite_state()));
    }

    println!(
        "{} ticks, {} merges, {} bodies left, {:?} elapsed",
        ticks,
        merges,
        sim.body_count(),
        sim.elapsed().calendar()
    );

    assert_eq!(sim.body_count() + merges, 3);
    assert_relative_eq!(sim.total_mass(), initial_mass, max_relative = 1e-12);
    assert_eq!(sim.elapsed().calendar(), (1, 0));
}

#[test]
fn slingshot_onto_the_sun_is_a_strike() {
    let mut sim = seed_scenario();
    let scale = ViewScale::from_config(sim.config());
    let mut sling = Slingshot::from_config(sim.config());

    let sun = sim.bodies().iter().find(|b| b.is_target).copied().unwrap();
    let pixel = scale.to_screen(sun.position);

    sling.press(pixel);
    let launch = sling.release(Point2::new(pixel.x + 5.0, pixel.y)).unwrap();
    sim.enqueue_launch(launch);

    let events = sim.tick(sim.config().frame_dt()).unwrap();

    let strike = events.iter().find(|e| e.is_target_strike()).unwrap();
    assert_eq!(strike.survivor, sun.id);
    assert_eq!(sim.body_count(), 3);
    assert!(sim.bodies().iter().all(|b| !b.player_spawned));
}

#[test]
fn seeded_scenarios_are_deterministic() {
    let yaml = "
config:
  collisions_enabled: true
random_field: { count: 30, seed: 2024 }
";
    let scenario = ScenarioFile::from_yaml_str(yaml).unwrap();
    let mut a = scenario.build().unwrap();
    let mut b = scenario.build().unwrap();

    for _ in 0..200 {
        let ea = a.tick(1.0 / 60.0).unwrap();
        let eb = b.tick(1.0 / 60.0).unwrap();
        assert_eq!(ea, eb);
    }

    assert_eq!(a.body_count(), b.body_count());
    for (x, y) in a.bodies().iter().zip(b.bodies()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.position, y.position);
        assert_eq!(x.velocity, y.velocity);
    }
}

#[test]
fn crowded_field_collapses_and_conserves_mass() {
    // Twenty bodies within one launch radius of each other
    let mut yaml = String::from("bodies:\n");
    for i in 0..20 {
        yaml.push_str(&format!(
            "  - {{ position_au: [{:.3}, 1.0], mass: {}.0e24 }}\n",
            1.0 + i as f64 * 0.005,
            i + 1
        ));
    }
    let mut sim = ScenarioFile::from_yaml_str(&yaml).unwrap().build().unwrap();
    let initial_mass = sim.total_mass();

    let mut absorbed = Vec::new();
    for _ in 0..200 {
        for event in sim.tick(1.0 / 60.0).unwrap() {
            assert!(!absorbed.contains(&event.absorbed));
            absorbed.push(event.absorbed);
        }
        assert_relative_eq!(sim.total_mass(), initial_mass, max_relative = 1e-12);
    }

    println!("{} merges, {} bodies left", absorbed.len(), sim.body_count());
    assert!(sim.body_count() < 20);
    assert_eq!(sim.body_count() + absorbed.len(), 20);
}
