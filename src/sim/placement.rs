//! Initial disk placement
//!
//! Draws uniform positions inside the arena margin and enforces the
//! separation rule: each disk after the first must land farther than
//! 5 radii from at least one earlier disk. The rule is deliberately that
//! lax - a single sufficiently-far neighbor accepts the candidate even if
//! every other neighbor is closer. Tracking stimuli were tuned against
//! this acceptance behavior, so it is kept as-is rather than strengthened
//! to all-pairs separation.

use std::f32::consts::TAU;

use glam::Vec2;
use log::debug;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Disk;
use crate::config::SimConfig;
use crate::consts::{PLACEMENT_RETRY_CAP, SEPARATION_FACTOR};
use crate::error::PlacementError;

/// Place `config.disk_count` disks, headings uniform in [0, 2π)
///
/// Candidate positions are redrawn up to [`PLACEMENT_RETRY_CAP`] times per
/// disk; exceeding the cap means the requested count/arena/radius are
/// geometrically infeasible for the separation rule.
pub fn place_disks(config: &SimConfig, rng: &mut Pcg32) -> Result<Vec<Disk>, PlacementError> {
    let r = config.radius;
    let hi = config.arena_size - r;
    let separation = SEPARATION_FACTOR * r;

    let mut disks = Vec::with_capacity(config.disk_count as usize);
    for id in 0..config.disk_count {
        // One heading per disk, independent of how many positions it takes
        let heading = rng.random_range(0.0..TAU);

        if id == 0 {
            // No prior disks, no separation check
            let pos = Vec2::new(rng.random_range(r..hi), rng.random_range(r..hi));
            disks.push(Disk::from_config(id, pos, heading, config));
            continue;
        }

        let mut attempts = 0u32;
        let pos = loop {
            attempts += 1;
            if attempts > PLACEMENT_RETRY_CAP {
                return Err(PlacementError {
                    disk: id,
                    attempts: PLACEMENT_RETRY_CAP,
                });
            }
            let candidate = Vec2::new(rng.random_range(r..hi), rng.random_range(r..hi));
            if disks.iter().any(|d| d.pos.distance(candidate) > separation) {
                break candidate;
            }
        };
        debug!("disk {id} placed after {attempts} attempt(s)");
        disks.push(Disk::from_config(id, pos, heading, config));
    }

    Ok(disks)
}
