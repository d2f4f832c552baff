//! Game balance and tuning
//!
//! Every gameplay constant can be overridden from a JSON document. Missing
//! fields keep their defaults from [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    /// Forward/backward speed (units/s)
    pub player_speed: f32,
    /// Turn rate (radians/s)
    pub rotation_speed: f32,
    /// Cheese spin rate (radians/s)
    pub spin_speed: f32,

    // === Arena ===
    /// Chomp distance threshold
    pub chomp_radius: f32,
    /// Respawn disk radius
    pub floor_radius: f32,
    /// Cheese height above the floor
    pub cheese_height: f32,

    // === Timer ===
    /// Countdown at round start
    pub round_seconds: f32,
    /// Max random bonus on top of `round_seconds` per chomp
    pub bonus_seconds: f32,

    // === Audio ===
    /// Crossfade duration between the normal and low loops
    pub music_ramp_seconds: f32,

    /// Fixed RNG seed; `None` picks one at startup
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            rotation_speed: ROTATION_SPEED,
            spin_speed: SPIN_SPEED,

            chomp_radius: CHOMP_RADIUS,
            floor_radius: FLOOR_RADIUS,
            cheese_height: CHEESE_HEIGHT,

            round_seconds: ROUND_SECONDS,
            bonus_seconds: BONUS_SECONDS,

            music_ramp_seconds: MUSIC_RAMP_SECONDS,

            seed: None,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("player_speed", self.player_speed),
            ("rotation_speed", self.rotation_speed),
            ("chomp_radius", self.chomp_radius),
            ("floor_radius", self.floor_radius),
            ("round_seconds", self.round_seconds),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        // Zero is fine here: no spin, no bonus, instant crossfade
        let non_negative = [
            ("spin_speed", self.spin_speed),
            ("bonus_seconds", self.bonus_seconds),
            ("music_ramp_seconds", self.music_ramp_seconds),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if !self.cheese_height.is_finite() {
            return Err(TuningError::Invalid("cheese_height must be finite".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.round_seconds, 3.0);
        assert_eq!(tuning.floor_radius, 2.0);
        assert!(tuning.seed.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "player_speed": 12.5, "seed": 7 }"#).unwrap();
        assert_eq!(tuning.player_speed, 12.5);
        assert_eq!(tuning.seed, Some(7));
        assert_eq!(tuning.spin_speed, SPIN_SPEED);
        assert_eq!(tuning.chomp_radius, CHOMP_RADIUS);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "floor_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));

        let err = Tuning::from_json(r#"{ "bonus_seconds": -1.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ player_speed: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
