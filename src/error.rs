//! Error types
//!
//! Two failure kinds exist: configuration rejected before the simulation is
//! built, and placement giving up on the separation rule. A collision
//! retry-cap hit during a tick is not an error; it degrades that pair's
//! resolution for one tick and is counted on the [`StepReport`].
//!
//! [`StepReport`]: crate::sim::StepReport

use thiserror::Error;

/// A configuration field rejected by [`SimConfig::validate`]
///
/// [`SimConfig::validate`]: crate::config::SimConfig::validate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("at least one disk is required")]
    NoDisks,

    #[error("arena side {arena} cannot fit a disk of radius {radius}")]
    ArenaTooSmall { arena: f32, radius: f32 },

    #[error("target count {targets} exceeds disk count {disks}")]
    TooManyTargets { targets: u32, disks: u32 },
}

/// Initial placement could not satisfy the separation rule within the
/// retry cap. The requested count/arena/radius combination is
/// geometrically infeasible; retry with fewer or smaller disks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no valid position for disk {disk} within {attempts} attempts")]
pub struct PlacementError {
    /// Index of the disk that could not be placed
    pub disk: u32,
    /// Number of candidate positions tried
    pub attempts: u32,
}

/// Umbrella error returned by [`Simulation::new`]
///
/// [`Simulation::new`]: crate::sim::Simulation::new
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("placement failed: {0}")]
    Placement(#[from] PlacementError),
}

pub type SimResult<T> = Result<T, SimError>;
