//! Smooth-pursuit target path
//!
//! The pursuit variant of the task moves a single target on a sinusoid,
//! `p(t) = center + amplitude * sin(2π * frequency * t + phase)` per axis.
//! Equal frequencies with a π/2 phase offset between the axes give a
//! circular (or elliptic) sweep. Pure functions of time: no RNG, no tick
//! state, so the render loop can sample at whatever rate it flips frames.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A deterministic sinusoidal trajectory for one pursuit target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PursuitPath {
    /// Center of the sweep in arena pixels
    pub center: Vec2,
    /// Per-axis amplitude in pixels
    pub amplitude: Vec2,
    /// Per-axis frequency in cycles per second
    pub frequency: Vec2,
    /// Per-axis phase offset in radians
    pub phase: Vec2,
}

impl PursuitPath {
    /// Motion on the x axis only, the task's default pattern
    pub fn horizontal(center: Vec2, amplitude: f32, frequency: f32, start_phase: f32) -> Self {
        Self {
            center,
            amplitude: Vec2::new(amplitude, 0.0),
            frequency: Vec2::splat(frequency),
            phase: Vec2::new(start_phase, 0.0),
        }
    }

    /// Circular sweep of the given radius; the π/2 phase offset between
    /// the axes turns the two sinusoids into a circle
    pub fn circular(center: Vec2, radius: f32, frequency: f32) -> Self {
        Self {
            center,
            amplitude: Vec2::splat(radius),
            frequency: Vec2::splat(frequency),
            phase: Vec2::new(FRAC_PI_2, 0.0),
        }
    }

    /// Horizontal path with the frequency derived from a requested peak
    /// velocity: `f = v_peak / (2π * amplitude)`
    pub fn from_peak_velocity(
        center: Vec2,
        amplitude: f32,
        peak_velocity: f32,
        start_phase: f32,
    ) -> Self {
        let frequency = peak_velocity / (TAU * amplitude);
        Self::horizontal(center, amplitude, frequency, start_phase)
    }

    /// Target position at time `t` seconds
    pub fn position_at(&self, t: f32) -> Vec2 {
        let angle = TAU * self.frequency * t + self.phase;
        self.center + self.amplitude * Vec2::new(angle.x.sin(), angle.y.sin())
    }

    /// Target velocity at time `t` seconds, in pixels per second
    pub fn velocity_at(&self, t: f32) -> Vec2 {
        let angle = TAU * self.frequency * t + self.phase;
        self.amplitude * TAU * self.frequency * Vec2::new(angle.x.cos(), angle.y.cos())
    }

    /// Duration of one full x-axis cycle in seconds
    pub fn period(&self) -> f32 {
        1.0 / self.frequency.x
    }
}
