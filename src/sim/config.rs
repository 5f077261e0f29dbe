//! Round parameters and their validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected round parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board must be positive and finite, got {width}x{height}")]
    InvalidBoard { width: f32, height: f32 },

    #[error("{name} speed must be finite and non-negative, got {value}")]
    InvalidSpeed { name: &'static str, value: f32 },

    #[error("{name} size must be positive and finite, got {width}x{height}")]
    InvalidEntitySize {
        name: &'static str,
        width: f32,
        height: f32,
    },

    #[error("{name} width {width} does not fit on a board {board_width} wide")]
    EntityTooWide {
        name: &'static str,
        width: f32,
        board_width: f32,
    },

    #[error("player of height {player_height} cannot spawn {offset} above the floor of a board {board_height} high")]
    InvalidSpawn {
        player_height: f32,
        offset: f32,
        board_height: f32,
    },

    #[error("round duration must be positive and finite, got {0} ms")]
    InvalidDuration(f32),
}

/// Parameters for a single round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub board_width: f32,
    pub board_height: f32,
    /// Horizontal player speed (px/s)
    pub player_speed: f32,
    /// Target fall speed (px/s)
    pub fall_speed: f32,
    pub duration_ms: f32,
    /// Score at or above this wins the round
    pub win_score: u32,
    pub player_width: f32,
    pub player_height: f32,
    pub target_width: f32,
    pub target_height: f32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            player_speed: PLAYER_SPEED,
            fall_speed: TARGET_FALL_SPEED,
            duration_ms: ROUND_DURATION_MS,
            win_score: WIN_SCORE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            target_width: TARGET_WIDTH,
            target_height: TARGET_HEIGHT,
        }
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl RoundConfig {
    /// Row the player occupies for the whole round
    pub fn player_spawn_y(&self) -> f32 {
        self.board_height - PLAYER_SPAWN_OFFSET
    }

    /// Check every parameter, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.board_width) || !positive(self.board_height) {
            return Err(ConfigError::InvalidBoard {
                width: self.board_width,
                height: self.board_height,
            });
        }

        for (name, value) in [("player", self.player_speed), ("fall", self.fall_speed)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpeed { name, value });
            }
        }

        for (name, width, height) in [
            ("player", self.player_width, self.player_height),
            ("target", self.target_width, self.target_height),
        ] {
            if !positive(width) || !positive(height) {
                return Err(ConfigError::InvalidEntitySize {
                    name,
                    width,
                    height,
                });
            }
        }

        if self.player_width > self.board_width {
            return Err(ConfigError::EntityTooWide {
                name: "player",
                width: self.player_width,
                board_width: self.board_width,
            });
        }
        // Random x is drawn from [0, board - target), which must not be empty
        if self.board_width - self.target_width < 1.0 {
            return Err(ConfigError::EntityTooWide {
                name: "target",
                width: self.target_width,
                board_width: self.board_width,
            });
        }

        if self.player_height > PLAYER_SPAWN_OFFSET || self.player_spawn_y() < 0.0 {
            return Err(ConfigError::InvalidSpawn {
                player_height: self.player_height,
                offset: PLAYER_SPAWN_OFFSET,
                board_height: self.board_height,
            });
        }

        if !positive(self.duration_ms) {
            return Err(ConfigError::InvalidDuration(self.duration_ms));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RoundConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.player_spawn_y(), 400.0);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let config = RoundConfig {
            duration_ms: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDuration(-1.0)));

        let config = RoundConfig {
            duration_ms: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_board_rejected() {
        let config = RoundConfig {
            board_width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBoard { .. })));
    }

    #[test]
    fn test_negative_speed_rejected() {
        let config = RoundConfig {
            fall_speed: -150.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSpeed {
                name: "fall",
                value: -150.0
            })
        );
    }

    #[test]
    fn test_target_wider_than_board_rejected() {
        let config = RoundConfig {
            target_width: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EntityTooWide { name: "target", .. })
        ));
    }

    #[test]
    fn test_spawn_outside_board_rejected() {
        let config = RoundConfig {
            board_height: 80.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpawn { .. })));
    }

    #[test]
    fn test_player_taller_than_spawn_offset_rejected() {
        let config = RoundConfig {
            player_height: 120.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSpawn {
                player_height: 120.0,
                offset: PLAYER_SPAWN_OFFSET,
                board_height: 500.0,
            })
        );
    }

    #[test]
    fn test_zero_player_size_rejected() {
        let config = RoundConfig {
            player_width: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidEntitySize {
                name: "player",
                width: 0.0,
                height: 50.0,
            })
        );
    }

    #[test]
    fn test_negative_target_size_rejected() {
        let config = RoundConfig {
            target_height: -20.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidEntitySize {
                name: "target",
                width: 20.0,
                height: -20.0,
            })
        );
    }

    #[test]
    fn test_nan_entity_size_rejected() {
        // NaN never compares equal, so match on the shape
        let config = RoundConfig {
            player_height: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEntitySize { name: "player", width, height })
                if width == 50.0 && height.is_nan()
        ));
    }

    #[test]
    fn test_player_wider_than_board_rejected() {
        let config = RoundConfig {
            player_width: 600.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EntityTooWide {
                name: "player",
                width: 600.0,
                board_width: 500.0,
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::InvalidDuration(-5.0);
        assert_eq!(err.to_string(), "round duration must be positive and finite, got -5 ms");
    }

    #[test]
    fn test_json_round_trip_keeps_defaults() {
        let json = serde_json::to_string(&RoundConfig::default()).unwrap();
        let parsed: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RoundConfig::default());
    }
}
