use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};
use nalgebra::Point2;
use units::{Length, Velocity};

use slingshot::launch::Slingshot;
use slingshot::scenario::{seeded_random_field, sun_with_two_planets, ScenarioFile, ScriptedLaunch};
use slingshot::Simulation;

/// Run a slingshot scenario without a window
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scenario YAML file; the sun-and-two-planets scene when omitted
    scenario: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,

    /// Extra randomly placed bodies
    #[arg(short, long, default_value_t = 0)]
    random: usize,

    /// Seed for the extra bodies
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Override the scenario's time multiplier
    #[arg(long)]
    time_multiplier: Option<f64>,

    /// Let bodies pass through each other
    #[arg(long)]
    no_collisions: bool,

    /// Stop at the first launched body to hit a target
    #[arg(long)]
    stop_on_strike: bool,

    /// Log a progress line every this many ticks (0 disables)
    #[arg(long, default_value_t = 600)]
    report_every: u64,
}

fn load_scenario(path: Option<&PathBuf>) -> Result<ScenarioFile> {
    let Some(path) = path else {
        return Ok(ScenarioFile::default());
    };

    let yaml = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    let scenario = ScenarioFile::from_yaml_str(&yaml)
        .with_context(|| format!("invalid scenario {}", path.display()))?;
    Ok(scenario)
}

fn build_simulation(args: &Args, scenario: &ScenarioFile) -> Result<Simulation> {
    let mut sim = scenario.build()?;

    if args.scenario.is_none() {
        for params in sun_with_two_planets() {
            sim.add_body(params)?;
        }
    }

    if args.random > 0 {
        let (width, height) = sim.config().world_extent();
        for params in seeded_random_field(args.seed, args.random, width, height) {
            sim.add_body(params)?;
        }
    }

    if let Some(time_multiplier) = args.time_multiplier {
        sim.set_time_multiplier(time_multiplier)
            .context("invalid --time-multiplier")?;
    }
    if args.no_collisions {
        sim.set_collisions_enabled(false);
    }

    Ok(sim)
}

/// Replays the launches scheduled for `tick` through the slingshot gesture
fn queue_launches(sim: &mut Simulation, sling: &mut Slingshot, launches: &[ScriptedLaunch], tick: u64) {
    for launch in launches.iter().filter(|l| l.tick == tick) {
        let [px, py] = launch.press;
        let [rx, ry] = launch.release;

        sling.press(Point2::new(px, py));
        match sling.release(Point2::new(rx, ry)) {
            Some(command) => sim.enqueue_launch(command),
            None => warn!("launch at tick {tick} produced nothing"),
        }
    }
}

fn main() -> Result<()> {
    let env = Env::default().filter_or("SLINGSHOT_LOG", "info");
    env_logger::init_from_env(env);

    let args = Args::parse();
    debug!("{args:?}");

    let scenario = load_scenario(args.scenario.as_ref())?;
    let mut sim = build_simulation(&args, &scenario)?;
    let mut sling = Slingshot::from_config(sim.config());
    let dt = sim.config().frame_dt();

    info!(
        "running {} ticks of {:.4} s with {} bodies",
        args.ticks,
        dt,
        sim.body_count()
    );

    let mut merges = 0;
    let mut strike = None;
    for tick in 0..args.ticks {
        queue_launches(&mut sim, &mut sling, &scenario.launches, tick);

        for event in sim.tick(dt)? {
            merges += 1;
            if event.is_target_strike() && strike.is_none() {
                let (years, months) = sim.elapsed().calendar();
                info!(
                    "target hit at tick {tick}: body {} absorbed body {} after {years} years {months} months",
                    event.survivor.0, event.absorbed.0
                );
                strike = Some(tick);
            }
        }

        if args.report_every > 0 && (tick + 1) % args.report_every == 0 {
            let (years, months) = sim.elapsed().calendar();
            info!(
                "tick {}: {} bodies, {years} years {months} months",
                tick + 1,
                sim.body_count()
            );
        }

        if args.stop_on_strike && strike.is_some() {
            break;
        }
    }

    let (years, months) = sim.elapsed().calendar();
    info!(
        "finished after {} ticks: {merges} merges, {} bodies left",
        sim.ticks(),
        sim.body_count()
    );

    println!("elapsed: {years} years {months} months");
    println!("{:>6} {:>12} {:>10} {:>10} {:>10}", "id", "mass (kg)", "x (AU)", "y (AU)", "v (km/s)");
    for body in sim.bodies() {
        let marker = if body.is_target { " target" } else { "" };
        println!(
            "{:>6} {:>12.3e} {:>10.3} {:>10.3} {:>10.2}{marker}",
            body.id.0,
            body.mass,
            Length::from_meters(body.position.x).to_au(),
            Length::from_meters(body.position.y).to_au(),
            Velocity::from_meters_per_sec(body.speed()).to_km_per_sec(),
        );
    }

    Ok(())
}
