//! Simulation state and core types
//!
//! Pure data plus the invariants other components enforce on it. All
//! stochastic state (the RNG) lives on the `Simulation` so a seed fully
//! determines the stimulus.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::placement;
use crate::config::SimConfig;
use crate::error::SimResult;

/// One moving disk
///
/// Kinematic parameters are carried per disk; the simple configuration
/// gives every disk the same values, but nothing in the stepper assumes
/// that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    /// Stable index, 0..N-1; also the evaluation order within a tick
    pub id: u32,
    /// Center position in arena pixels, origin at top-left
    pub pos: Vec2,
    /// Direction of travel in radians, atan2 convention (not normalized)
    pub heading: f32,
    /// Disk radius in pixels
    pub radius: f32,
    /// Distance below which another disk triggers avoidance
    pub repulsion_radius: f32,
    /// Travel distance per tick in pixels
    pub speed: f32,
    /// Heading noise amplitude in radians
    pub noise_amplitude: f32,
}

impl Disk {
    /// Build a disk from the shared configuration
    pub fn from_config(id: u32, pos: Vec2, heading: f32, config: &SimConfig) -> Self {
        Self {
            id,
            pos,
            heading,
            radius: config.radius,
            repulsion_radius: config.repulsion_radius(),
            speed: config.speed,
            noise_amplitude: config.noise_amplitude(),
        }
    }

    /// Hit test: true iff `point` lies strictly inside the disk
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius
    }
}

/// The complete stimulus state
///
/// Owns the ordered disk sequence and the seeded RNG. Mutated in place,
/// one full pass over all disks, once per tick by [`step`]; the render
/// adapter reads `disks` between ticks.
///
/// [`step`]: super::tick::step
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Side of the square arena in pixels
    pub arena_size: f32,
    /// Disks in id order; index order is semantically significant to the
    /// avoidance pass, so the sequence is never reordered
    pub disks: Vec<Disk>,
    /// The first `target_count` disks are the cued targets
    pub target_count: u32,
    /// Ticks stepped since creation
    pub time_ticks: u64,
    /// Cumulative count of pairs whose avoidance hit the retry cap
    pub degraded_resolutions: u64,
    pub(crate) rng: Pcg32,
}

impl Simulation {
    /// Validate `config`, then place disks under the separation rule
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let disks = placement::place_disks(&config, &mut rng)?;
        Ok(Self {
            arena_size: config.arena_size,
            disks,
            target_count: config.target_count,
            time_ticks: 0,
            degraded_resolutions: 0,
            rng,
        })
    }

    /// Build a simulation from explicit disks, bypassing placement
    ///
    /// For bespoke scenarios (single-disk probes, deliberately overlapping
    /// configurations); the boundary and avoidance rules still apply when
    /// stepped.
    pub fn with_disks(disks: Vec<Disk>, arena_size: f32, seed: u64) -> Self {
        Self {
            arena_size,
            disks,
            target_count: 0,
            time_ticks: 0,
            degraded_resolutions: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Whether the disk with this id is a cued target
    pub fn is_target(&self, id: u32) -> bool {
        id < self.target_count
    }

    /// The cued targets, in id order
    pub fn targets(&self) -> impl Iterator<Item = &Disk> {
        self.disks.iter().take(self.target_count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_disk(pos: Vec2) -> Disk {
        Disk::from_config(0, pos, 0.0, &SimConfig::default())
    }

    #[test]
    fn test_contains_inside() {
        let disk = test_disk(Vec2::new(100.0, 100.0));
        assert!(disk.contains(Vec2::new(105.0, 100.0)));
        assert!(disk.contains(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_contains_boundary_is_outside() {
        // Strict inequality: a point exactly on the rim is a miss
        let disk = test_disk(Vec2::new(100.0, 100.0));
        assert!(!disk.contains(Vec2::new(115.0, 100.0)));
        assert!(!disk.contains(Vec2::new(120.0, 100.0)));
    }

    #[test]
    fn test_target_designation() {
        let sim = Simulation::new(SimConfig::default()).unwrap();
        assert!(sim.is_target(0));
        assert!(sim.is_target(3));
        assert!(!sim.is_target(4));
        assert_eq!(sim.targets().count(), 4);
        assert!(sim.targets().all(|d| d.id < 4));
    }

    #[test]
    fn test_disks_in_id_order() {
        let sim = Simulation::new(SimConfig::default()).unwrap();
        for (index, disk) in sim.disks.iter().enumerate() {
            assert_eq!(disk.id as usize, index);
        }
    }
}
