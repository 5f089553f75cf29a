//! Deterministic simulation module
//!
//! All stimulus motion lives here. This module must be pure and
//! deterministic:
//! - One tick per rendered frame, no internal suspension
//! - Seeded RNG only, owned by the simulation
//! - Stable iteration order (by disk id) - the avoidance pass is
//!   order-dependent
//! - No rendering or platform dependencies

pub mod placement;
pub mod pursuit;
pub mod state;
pub mod tick;

pub use pursuit::PursuitPath;
pub use state::{Disk, Simulation};
pub use tick::{Resolution, StepReport, step};
