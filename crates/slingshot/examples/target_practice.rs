//! Slingshot example
//!
//! Loads the sun-and-two-planets scene, fires a body at the sun with a
//! press-drag-release gesture and runs until it hits.
//!
//! Run with: cargo run --package slingshot --example target_practice

use nalgebra::Vector2;
use slingshot::config::SimulationConfig;
use slingshot::launch::{Slingshot, ViewScale};
use slingshot::scenario::sun_with_two_planets;
use slingshot::Simulation;

fn main() -> slingshot::Result<()> {
    println!("Target Practice\n");
    println!("{}", "=".repeat(60));

    let config = SimulationConfig::default();
    let scale = ViewScale::from_config(&config);
    let mut sling = Slingshot::from_config(&config);
    let mut sim = Simulation::new(config)?;

    for params in sun_with_two_planets() {
        sim.add_body(params)?;
    }

    let Some(sun) = sim.bodies().iter().find(|b| b.is_target).copied() else {
        println!("No target in the scene");
        return Ok(());
    };

    // Press 100 px right of the sun, drag further right: flies left at it
    let sun_px = scale.to_screen(sun.position);
    let press = sun_px + Vector2::new(100.0, 0.0);
    sling.press(press);
    if let Some(preview) = sling.preview(press + Vector2::new(25.0, 0.0)) {
        println!(
            "Aiming from ({:.0}, {:.0}) px at {:.1} km/s",
            preview.anchor.x,
            preview.anchor.y,
            preview.speed.to_km_per_sec()
        );
    }
    if let Some(launch) = sling.release(press + Vector2::new(25.0, 0.0)) {
        sim.enqueue_launch(launch);
    }

    let dt = sim.config().frame_dt();
    for _ in 0..10_000 {
        let events = sim.tick(dt)?;

        for event in &events {
            println!(
                "Tick {:>5}: body {} absorbed body {}",
                sim.ticks(),
                event.survivor.0,
                event.absorbed.0
            );
        }

        if events.iter().any(|e| e.is_target_strike()) {
            let (years, months) = sim.elapsed().calendar();
            println!("\nHit! {years} years {months} months after launch");
            return Ok(());
        }
    }

    println!("\nMissed");
    Ok(())
}
