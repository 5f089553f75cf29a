//! MOT Sim - a multiple-object-tracking stimulus core
//!
//! A field of disks wanders inside a square arena with stochastic heading
//! noise, pairwise collision avoidance, and elastic boundary reflection,
//! advanced one tick per rendered frame. The enclosing experiment
//! application owns rendering, input, and trial flow; this crate owns only
//! the geometry and physics it must supply each tick.
//!
//! Core modules:
//! - `config`: Stimulus parameters, validation, serde
//! - `sim`: Deterministic simulation (placement, tick stepper, hit test,
//!   smooth-pursuit path)
//! - `error`: Error types

pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::{ConfigError, PlacementError, SimError, SimResult};
pub use sim::{Disk, PursuitPath, Simulation, StepReport, step};

use glam::Vec2;

/// Reference stimulus parameters and algorithm constants
pub mod consts {
    /// Total number of disks in the stimulus
    pub const DISK_COUNT: u32 = 10;
    /// Number of cued targets among them
    pub const TARGET_COUNT: u32 = 4;
    /// Side of the square arena ("paper") in pixels
    pub const ARENA_SIZE: f32 = 500.0;
    /// Disk radius in pixels
    pub const DISK_RADIUS: f32 = 15.0;
    /// Repulsion radius as a multiple of the disk radius
    pub const REPULSION_MULTIPLIER: f32 = 4.0;
    /// Heading noise amplitude in degrees
    pub const NOISE_AMPLITUDE_DEG: f32 = 15.0;
    /// Disk speed in pixels per tick
    pub const DISK_SPEED: f32 = 2.0;
    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 1;

    /// Initial placement must put each disk farther than this many radii
    /// from at least one earlier disk (independent of the repulsion radius)
    pub const SEPARATION_FACTOR: f32 = 5.0;
    /// Placement candidate draws allowed per disk before giving up
    pub const PLACEMENT_RETRY_CAP: u32 = 10_000;
    /// Heading nudges allowed per disk pair per tick before giving up
    pub const COLLISION_RETRY_CAP: u32 = 10_000;
    /// Heading nudge applied per avoidance iteration (radians)
    pub const AVOIDANCE_NUDGE: f32 = 0.05 * std::f32::consts::PI;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
