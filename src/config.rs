//! Stimulus configuration
//!
//! One field per knob the enclosing experiment passes in. Serializable so
//! trial parameter sets can be stored or loaded as JSON; validated before
//! any simulation is built so that stepping can never see NaN or an arena
//! the disks do not fit in.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Parameters for one simulation instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Total number of moving disks
    pub disk_count: u32,
    /// Number of cued targets (the first `target_count` disks by id)
    pub target_count: u32,
    /// Side of the square arena in pixels
    pub arena_size: f32,
    /// Disk radius in pixels
    pub radius: f32,
    /// Repulsion radius as a multiple of `radius`
    pub repulsion_multiplier: f32,
    /// Heading noise amplitude in degrees
    pub noise_amplitude_deg: f32,
    /// Disk speed in pixels per tick
    pub speed: f32,
    /// RNG seed (same seed, same stimulus)
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            disk_count: DISK_COUNT,
            target_count: TARGET_COUNT,
            arena_size: ARENA_SIZE,
            radius: DISK_RADIUS,
            repulsion_multiplier: REPULSION_MULTIPLIER,
            noise_amplitude_deg: NOISE_AMPLITUDE_DEG,
            speed: DISK_SPEED,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Repulsion radius in pixels
    pub fn repulsion_radius(&self) -> f32 {
        self.repulsion_multiplier * self.radius
    }

    /// Heading noise amplitude in radians
    pub fn noise_amplitude(&self) -> f32 {
        self.noise_amplitude_deg.to_radians()
    }

    /// Reject configurations the simulation cannot run on
    ///
    /// Runs before placement; stepping itself has no error paths, so every
    /// numeric pathology must be caught here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("arena_size", self.arena_size),
            ("radius", self.radius),
            ("repulsion_multiplier", self.repulsion_multiplier),
            ("noise_amplitude_deg", self.noise_amplitude_deg),
            ("speed", self.speed),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if self.disk_count == 0 {
            return Err(ConfigError::NoDisks);
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "radius",
                value: self.radius,
            });
        }
        // Strictly more than one diameter, so the placement interval
        // [r, S-r) is never empty.
        if self.arena_size <= 2.0 * self.radius {
            return Err(ConfigError::ArenaTooSmall {
                arena: self.arena_size,
                radius: self.radius,
            });
        }
        let non_negative = [
            ("repulsion_multiplier", self.repulsion_multiplier),
            ("noise_amplitude_deg", self.noise_amplitude_deg),
            ("speed", self.speed),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.target_count > self.disk_count {
            return Err(ConfigError::TooManyTargets {
                targets: self.target_count,
                disks: self.disk_count,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_derived_parameters() {
        let config = SimConfig::default();
        assert_eq!(config.repulsion_radius(), 60.0);
        assert!((config.noise_amplitude() - 15.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_nan() {
        let config = SimConfig {
            speed: f32::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "speed", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_disks() {
        let config = SimConfig {
            disk_count: 0,
            target_count: 0,
            ..SimConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoDisks));
    }

    #[test]
    fn test_rejects_arena_smaller_than_disk() {
        let config = SimConfig {
            arena_size: 30.0,
            radius: 15.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArenaTooSmall { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let config = SimConfig {
            speed: -1.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "speed", .. })
        ));
    }

    #[test]
    fn test_rejects_more_targets_than_disks() {
        let config = SimConfig {
            disk_count: 3,
            target_count: 4,
            ..SimConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyTargets {
                targets: 4,
                disks: 3
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimConfig {
            disk_count: 6,
            seed: 42,
            ..SimConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{"disk_count": 8}"#).unwrap();
        assert_eq!(config.disk_count, 8);
        assert_eq!(config.arena_size, ARENA_SIZE);
        assert_eq!(config.seed, DEFAULT_SEED);
    }
}
