//! Game configuration.
//!
//! Timing and dice parameters for one rule set. Every field has a default,
//! so a JSON file only needs the values it changes:
//!
//! ```
//! use dice_race::core::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "roll_count": 5, "seed": 7 }"#).unwrap();
//! assert_eq!(config.roll_count, 5);
//! assert_eq!(config.max_face, 6);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("roll_count must be at least 1")]
    ZeroRollCount,
    #[error("{field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("die faces must satisfy 1 <= min_face <= max_face, got {min}..={max}")]
    FaceRange { min: u8, max: u8 },
}

/// Dice and movement parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of die pairs shown during one roll; only the last one counts.
    pub roll_count: u32,

    /// Seconds between die pairs.
    pub roll_delay: f32,

    /// Token speed in world units per second.
    pub move_speed: f32,

    /// Lowest die face.
    pub min_face: u8,

    /// Highest die face.
    pub max_face: u8,

    /// Seed for the dice RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roll_count: 20,
            roll_delay: 0.075,
            move_speed: 10.0,
            min_face: 1,
            max_face: 6,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Check that the values describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roll_count == 0 {
            return Err(ConfigError::ZeroRollCount);
        }
        for (field, value) in [("roll_delay", self.roll_delay), ("move_speed", self.move_speed)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.min_face == 0 || self.min_face > self.max_face {
            return Err(ConfigError::FaceRange {
                min: self.min_face,
                max: self.max_face,
            });
        }
        Ok(())
    }

    /// Set the number of die pairs per roll.
    #[must_use]
    pub fn with_roll_count(mut self, count: u32) -> Self {
        self.roll_count = count;
        self
    }

    /// Set the delay between die pairs.
    #[must_use]
    pub fn with_roll_delay(mut self, seconds: f32) -> Self {
        self.roll_delay = seconds;
        self
    }

    /// Set the token speed.
    #[must_use]
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Set the die face range.
    #[must_use]
    pub fn with_faces(mut self, min: u8, max: u8) -> Self {
        self.min_face = min;
        self.max_face = max;
        self
    }

    /// Set the dice RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Seconds a full roll takes, from `roll()` to the hand-off to movement.
    #[must_use]
    pub fn roll_duration(&self) -> f32 {
        self.roll_count as f32 * self.roll_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.roll_count, 20);
        assert!((config.roll_delay - 0.075).abs() < f32::EPSILON);
        assert_eq!(config.move_speed, 10.0);
        assert_eq!((config.min_face, config.max_face), (1, 6));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_roll_count(3)
            .with_roll_delay(0.5)
            .with_move_speed(2.0)
            .with_faces(2, 4)
            .with_seed(123);

        assert_eq!(config.roll_count, 3);
        assert_eq!(config.roll_delay, 0.5);
        assert_eq!(config.move_speed, 2.0);
        assert_eq!((config.min_face, config.max_face), (2, 4));
        assert_eq!(config.seed, 123);
        assert_eq!(config.roll_duration(), 1.5);
    }

    #[test]
    fn test_validation_failures() {
        let zero_rolls = GameConfig::default().with_roll_count(0);
        assert!(matches!(zero_rolls.validate(), Err(ConfigError::ZeroRollCount)));

        let stalled = GameConfig::default().with_move_speed(0.0);
        assert!(matches!(
            stalled.validate(),
            Err(ConfigError::NonPositive { field: "move_speed", .. })
        ));

        let nan_delay = GameConfig::default().with_roll_delay(f32::NAN);
        assert!(matches!(
            nan_delay.validate(),
            Err(ConfigError::NonPositive { field: "roll_delay", .. })
        ));

        let inverted = GameConfig::default().with_faces(6, 1);
        assert!(matches!(inverted.validate(), Err(ConfigError::FaceRange { min: 6, max: 1 })));

        let zero_face = GameConfig::default().with_faces(0, 6);
        assert!(matches!(zero_face.validate(), Err(ConfigError::FaceRange { .. })));
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(r#"{ "move_speed": 4.0 }"#).unwrap();
        assert_eq!(config.move_speed, 4.0);
        assert_eq!(config.roll_count, 20);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "roll_count": 0 }"#),
            Err(ConfigError::ZeroRollCount)
        ));
        assert!(matches!(GameConfig::from_json("not json"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/nonexistent/dice-race.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
