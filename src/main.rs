//! Headless stimulus demo
//!
//! Runs the motion simulation without a window and prints a run summary.
//! Useful as a smoke test and for eyeballing parameter sets before wiring
//! them into the experiment application, which owns the real render loop.
//!
//! Usage: `mot-sim [config.json]` - with no argument the reference
//! parameter set is used. RUST_LOG=debug shows placement attempts and
//! avoidance cap hits.

use std::process;

use mot_sim::sim::step;
use mot_sim::{SimConfig, Simulation};

/// 20 seconds of stimulus at 60 frames per second
const DEMO_TICKS: u64 = 1200;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: cannot load {path}: {err}");
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };

    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let mut min_distance = f32::INFINITY;
    for _ in 0..DEMO_TICKS {
        step(&mut sim);
        for i in 0..sim.disks.len() {
            for j in i + 1..sim.disks.len() {
                min_distance = min_distance.min(sim.disks[i].pos.distance(sim.disks[j].pos));
            }
        }
    }

    let in_bounds = sim.disks.iter().all(|d| {
        d.pos.x >= d.radius
            && d.pos.x <= sim.arena_size - d.radius
            && d.pos.y >= d.radius
            && d.pos.y <= sim.arena_size - d.radius
    });

    println!(
        "{} disks ({} targets), {} ticks, arena {} px",
        sim.disks.len(),
        sim.target_count,
        sim.time_ticks,
        sim.arena_size
    );
    println!("all disks in bounds: {in_bounds}");
    if sim.disks.len() > 1 {
        println!("minimum pairwise distance observed: {min_distance:.1} px");
    }
    println!("degraded avoidance resolutions: {}", sim.degraded_resolutions);

    if !in_bounds {
        process::exit(2);
    }
}

fn load_config(path: &str) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
