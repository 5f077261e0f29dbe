//! Per-frame simulation tick
//!
//! Core game loop that advances a round by the caller's elapsed time.

use rand::Rng;

use super::collision::clamp_x;
use super::config::{ConfigError, RoundConfig};
use super::state::{Outcome, RoundEvent, RoundState};

/// Held direction keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

impl TickInput {
    /// Direction of travel: -1, 0 or 1. Left wins when both are held.
    pub fn direction(&self) -> f32 {
        if self.move_left {
            -1.0
        } else if self.move_right {
            1.0
        } else {
            0.0
        }
    }
}

/// Idle/demo mode: steer under the falling target
///
/// Holds still once the centers are within `deadzone` pixels.
pub fn autopilot(state: &RoundState, deadzone: f32) -> TickInput {
    let dx = state.target.center().x - state.player.center().x;
    TickInput {
        move_left: dx < -deadzone,
        move_right: dx > deadzone,
    }
}

/// Start a new round
pub fn init_round(config: RoundConfig, seed: u64) -> Result<RoundState, ConfigError> {
    config.validate()?;
    log::debug!(
        "Round start: seed={} board={}x{} duration={}ms win_score={}",
        seed,
        config.board_width,
        config.board_height,
        config.duration_ms,
        config.win_score
    );
    Ok(RoundState::new(config, seed))
}

/// Uniform integer x in `[0, board_width - target_width)`
pub fn random_target_x<R: Rng + ?Sized>(rng: &mut R, board_width: f32, target_width: f32) -> f32 {
    let span = (board_width - target_width).floor().max(1.0) as u32;
    rng.random_range(0..span) as f32
}

fn respawn_target(state: &mut RoundState) {
    let x = random_target_x(&mut state.rng, state.board.width, state.target.size.x);
    state.target.pos.x = x;
    state.target.pos.y = 0.0;
}

/// Advance the round by `elapsed_ms`
///
/// Returns the events produced this tick, in order. A `RoundEnded` event is
/// always last and no movement happens on the tick that produces it.
pub fn tick(state: &mut RoundState, elapsed_ms: f32, input: &TickInput) -> Vec<RoundEvent> {
    let mut events = Vec::new();

    // No transitions out of Won/Lost
    if state.is_over() {
        return events;
    }

    let elapsed_ms = if elapsed_ms.is_finite() { elapsed_ms.max(0.0) } else { 0.0 };

    // Countdown
    state.remaining_ms = (state.remaining_ms - elapsed_ms).max(0.0);
    if state.remaining_ms <= 0.0 {
        state.outcome = Outcome::for_score(state.score, state.config.win_score);
        log::debug!("Round over: score={} outcome={:?}", state.score, state.outcome);
        events.push(RoundEvent::RoundEnded {
            score: state.score,
            outcome: state.outcome,
        });
        return events;
    }

    state.elapsed_ticks += 1;
    let dt = elapsed_ms / 1000.0;

    // Player: horizontal only, held against the board edges
    state.player.vel_x = input.direction() * state.player.speed;
    let x = state.player.pos.x + state.player.vel_x * dt;
    state.player.pos.x = clamp_x(x, state.player.size.x, state.board.width);

    // Target falls
    state.target.pos.y += state.target.fall_speed * dt;

    if state.target.bounds().overlaps(&state.player.bounds()) {
        state.score += 1;
        events.push(RoundEvent::TargetCaught {
            score: state.score,
            at: state.player.pos,
        });
        respawn_target(state);
    } else if state.target.pos.y >= state.board.height {
        respawn_target(state);
    }

    events
}
