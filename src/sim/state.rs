//! Round state and core simulation types
//!
//! Everything a round needs lives in `RoundState`; there is no other state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::config::RoundConfig;

/// Result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    /// Clock ran out with score at or above the threshold
    Won,
    /// Clock ran out short of the threshold
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Verdict for a final score
    pub fn for_score(score: u32, win_score: u32) -> Self {
        if score >= win_score {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    }
}

/// Something the shell should react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// Player caught the target; `score` is the new total
    TargetCaught { score: u32, at: Vec2 },
    /// Clock hit zero; always the last event of its tick
    RoundEnded { score: u32, outcome: Outcome },
}

/// Play area bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

/// The hungry alien
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; y never changes during a round
    pub pos: Vec2,
    /// Horizontal velocity (px/s)
    pub vel_x: f32,
    /// Speed magnitude applied while a direction is held
    pub speed: f32,
    pub size: Vec2,
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Center point (sparkles, autopilot)
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// The falling ramen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Top-left corner
    pub pos: Vec2,
    /// Fall speed (px/s)
    pub fall_speed: f32,
    pub size: Vec2,
}

impl Target {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    /// Seed the round was started with
    pub seed: u64,
    pub config: RoundConfig,
    pub board: Board,
    pub player: Player,
    pub target: Target,
    pub score: u32,
    /// Countdown (ms), floored at 0
    pub remaining_ms: f32,
    pub outcome: Outcome,
    /// Ticks processed while in progress
    pub elapsed_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl RoundState {
    /// Build a fresh round from an already validated config
    pub(crate) fn new(config: RoundConfig, seed: u64) -> Self {
        let board = Board {
            width: config.board_width,
            height: config.board_height,
        };
        let player = Player {
            pos: Vec2::new(
                (config.board_width - config.player_width) / 2.0,
                config.player_spawn_y(),
            ),
            vel_x: 0.0,
            speed: config.player_speed,
            size: Vec2::new(config.player_width, config.player_height),
        };
        let target = Target {
            pos: Vec2::ZERO,
            fall_speed: config.fall_speed,
            size: Vec2::new(config.target_width, config.target_height),
        };

        Self {
            seed,
            remaining_ms: config.duration_ms,
            config,
            board,
            player,
            target,
            score: 0,
            outcome: Outcome::InProgress,
            elapsed_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Remaining time in seconds (HUD)
    pub fn remaining_secs(&self) -> f32 {
        self.remaining_ms / 1000.0
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }
}
