//! Ramen Catch - a falling-object catch arcade game
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (movement, catches, countdown)
//! - `hud`: On-canvas texts and the end screen verdict
//! - `feedback`: Maps round events to sounds, sparkles and overlays
//! - `renderer`: Draw lists and the Canvas 2D backend
//! - `settings`: Presentation preferences (never game rules)
//! - `audio`: Web Audio sound effects (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod feedback;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{ConfigError, Outcome, RoundConfig, RoundEvent, RoundState, TickInput, init_round, tick};

/// Game configuration constants
pub mod consts {
    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 500.0;
    pub const BOARD_HEIGHT: f32 = 500.0;

    /// Player moves at the fall speed plus 50
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Player row sits this far above the floor
    pub const PLAYER_SPAWN_OFFSET: f32 = 100.0;

    /// Target (ramen) defaults
    pub const TARGET_FALL_SPEED: f32 = 150.0;
    pub const TARGET_WIDTH: f32 = 20.0;
    pub const TARGET_HEIGHT: f32 = 20.0;

    /// Round length (ms)
    pub const ROUND_DURATION_MS: f32 = 30_000.0;
    /// Catches needed for "Winner!"
    pub const WIN_SCORE: u32 = 10;

    /// Nominal frame step (60 Hz) used by headless runs
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Longest frame the shell forwards to the core (tab switches, hitches)
    pub const MAX_FRAME_MS: f32 = 100.0;
}
