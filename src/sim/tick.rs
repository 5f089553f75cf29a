//! Simulation tick
//!
//! Advances every disk by one frame: heading noise, look-ahead collision
//! avoidance, elastic boundary reflection, then commit. The pass is
//! sequential over one shared disk sequence in index order, so disk `i`
//! resolves against neighbors that have already moved this tick (`j < i`)
//! and neighbors still at last tick's position (`j > i`). That asymmetry
//! is intentional; resolving against a previous-tick snapshot produces a
//! different stimulus.

use glam::Vec2;
use log::debug;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Disk, Simulation};
use crate::consts::{AVOIDANCE_NUDGE, COLLISION_RETRY_CAP};
use crate::polar_to_cartesian;

/// Outcome of the per-pair avoidance loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Candidate move cleared the neighbor's repulsion radius
    Resolved,
    /// Retry cap hit; the last candidate stands and the pair may overlap
    /// for this tick
    CapReached,
}

/// What one call to [`step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Tick counter after this step
    pub tick: u64,
    /// Pairs whose avoidance hit the retry cap this tick
    pub degraded_pairs: u32,
}

/// A disk's move being built up within a tick, before commit
#[derive(Debug, Clone, Copy)]
struct CandidateMove {
    heading: f32,
    velocity: Vec2,
    pos: Vec2,
}

impl CandidateMove {
    fn new(old: Vec2, heading: f32, speed: f32) -> Self {
        let velocity = polar_to_cartesian(speed, heading);
        Self {
            heading,
            velocity,
            pos: old + velocity,
        }
    }
}

/// Advance the simulation by one tick
///
/// Mutates every disk in id order and returns a report for this tick.
/// Never fails: an avoidance retry cap hit is a degraded-but-defined
/// outcome, counted on the report and cumulatively on the simulation.
pub fn step(sim: &mut Simulation) -> StepReport {
    sim.time_ticks += 1;
    let mut degraded_pairs = 0u32;

    for i in 0..sim.disks.len() {
        let Disk {
            pos: old,
            heading,
            radius,
            repulsion_radius,
            speed,
            noise_amplitude,
            ..
        } = sim.disks[i];

        // Heading noise, uniform in [-amplitude, amplitude)
        let mut noisy_heading = heading;
        if noise_amplitude > 0.0 {
            noisy_heading += sim.rng.random_range(-noise_amplitude..noise_amplitude);
        }
        let mut cand = CandidateMove::new(old, noisy_heading, speed);

        // Look ahead one step: if the move lands inside a neighbor's
        // repulsion radius, nudge the heading until it clears or the cap
        // is reached. One-shot per pair; later pairs are not re-checked
        // against earlier ones.
        for j in 0..sim.disks.len() {
            if j == i {
                continue;
            }
            let neighbor = sim.disks[j].pos;
            match avoid_neighbor(&mut sim.rng, &mut cand, old, speed, repulsion_radius, neighbor) {
                Resolution::Resolved => {}
                Resolution::CapReached => {
                    degraded_pairs += 1;
                    debug!(
                        "tick {}: avoidance cap hit for pair ({i}, {j})",
                        sim.time_ticks
                    );
                }
            }
        }

        // Elastic boundaries: each axis independently inverts its velocity
        // component and recomputes from the pre-move position
        let hi = sim.arena_size - radius;
        if cand.pos.x <= radius || cand.pos.x >= hi {
            cand.velocity.x = -cand.velocity.x;
            cand.pos.x = old.x + cand.velocity.x;
        }
        if cand.pos.y <= radius || cand.pos.y >= hi {
            cand.velocity.y = -cand.velocity.y;
            cand.pos.y = old.y + cand.velocity.y;
        }

        sim.disks[i].pos = cand.pos;
        // Commit the heading of the velocity actually applied, reflections
        // included; atan2 (not atan) to keep the quadrant
        sim.disks[i].heading = cand.velocity.y.atan2(cand.velocity.x);
    }

    sim.degraded_resolutions += u64::from(degraded_pairs);
    StepReport {
        tick: sim.time_ticks,
        degraded_pairs,
    }
}

/// Nudge the candidate heading by ±0.05π until the move clears the
/// neighbor's repulsion radius, up to [`COLLISION_RETRY_CAP`] iterations
fn avoid_neighbor(
    rng: &mut Pcg32,
    cand: &mut CandidateMove,
    old: Vec2,
    speed: f32,
    repulsion_radius: f32,
    neighbor: Vec2,
) -> Resolution {
    let mut iterations = 0u32;
    while cand.pos.distance(neighbor) <= repulsion_radius {
        iterations += 1;
        if iterations > COLLISION_RETRY_CAP {
            return Resolution::CapReached;
        }
        let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
        *cand = CandidateMove::new(old, cand.heading + sign * AVOIDANCE_NUDGE, speed);
    }
    Resolution::Resolved
}
