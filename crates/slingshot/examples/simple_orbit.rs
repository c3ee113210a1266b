//! Single planet orbit example
//!
//! Puts an Earth-like planet on a circular orbit around a Sun-like body and
//! watches how far the net-velocity Euler step lets the energy drift.
//!
//! Run with: cargo run --package slingshot --example simple_orbit

use nalgebra::{Point2, Vector2};
use slingshot::body::SpawnParams;
use slingshot::config::SimulationConfig;
use slingshot::forces::G;
use slingshot::Simulation;
use units::{circular_orbital_velocity, Length, Mass};

fn main() -> slingshot::Result<()> {
    println!("Single Planet Orbit\n");
    println!("{}", "=".repeat(60));

    let mut sim = Simulation::new(SimulationConfig::default())?;

    let sun_mass = Mass::from_kg(2.0e30);
    let r = Length::from_au(1.0);
    let v = circular_orbital_velocity(G, sun_mass, r);

    sim.add_body(SpawnParams::new(Point2::origin(), Vector2::zeros(), sun_mass.to_kg()))?;
    sim.add_body(SpawnParams::new(
        Point2::new(r.to_meters(), 0.0),
        Vector2::new(0.0, v.to_meters_per_sec()),
        6.0e24,
    ))?;

    println!("\nInitial conditions:");
    println!("  Orbital radius: {:.3} AU", r.to_au());
    println!("  Circular velocity: {:.2} km/s", v.to_km_per_sec());

    let e0 = sim.kinetic_energy() + sim.potential_energy();
    let dt = sim.config().frame_dt();

    println!("\n{:>8} {:>10} {:>12} {:>14}", "Tick", "Time (d)", "r (AU)", "ΔE/E₀");
    println!("{}", "-".repeat(48));

    for tick in 1..=2000 {
        sim.tick(dt)?;

        if tick % 200 == 0 {
            let bodies = sim.bodies();
            let r_now = Length::from_meters(bodies[0].distance_to(&bodies[1]));
            let e = sim.kinetic_energy() + sim.potential_energy();
            println!(
                "{:>8} {:>10.1} {:>12.5} {:>14.3e}",
                tick,
                sim.elapsed().to_days(),
                r_now.to_au(),
                (e - e0) / e0.abs()
            );
        }
    }

    let (years, months) = sim.elapsed().calendar();
    println!("\nElapsed: {years} years {months} months");

    Ok(())
}
