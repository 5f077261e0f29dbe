//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied elapsed time only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod config;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use config::{ConfigError, RoundConfig};
pub use state::{Board, Outcome, Player, RoundEvent, RoundState, Target};
pub use tick::{TickInput, autopilot, init_round, random_target_x, tick};
