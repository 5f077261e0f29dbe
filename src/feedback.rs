//! Shell reactions to round events
//!
//! The simulation never plays sounds or touches the DOM. The shell feeds the
//! events from each tick through `react` and carries out the effects.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::hud::{EndScreen, score_text};
use crate::sim::{Outcome, RoundEvent};

/// Sound cues the shell knows how to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Target caught
    Coin,
    RoundWon,
    RoundLost,
}

/// One thing the shell must do this frame
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEffect {
    PlaySound(SoundCue),
    /// Sparkle burst following the player
    SparkleBurst { at: Vec2 },
    /// New text for the score label
    UpdateScore(String),
    /// Begin the background loop
    StartMusic,
    StopMusic,
    /// Stop requesting frames
    StopLoop,
    ShowEndScreen(EndScreen),
}

/// Effects for a freshly started round
pub fn round_start_effects() -> Vec<ShellEffect> {
    vec![ShellEffect::StartMusic, ShellEffect::UpdateScore(score_text(0))]
}

/// Translate tick events into shell effects, keeping event order
pub fn react(events: &[RoundEvent]) -> Vec<ShellEffect> {
    let mut effects = Vec::with_capacity(events.len() * 4);
    for event in events {
        match *event {
            RoundEvent::TargetCaught { score, at } => {
                effects.push(ShellEffect::PlaySound(SoundCue::Coin));
                effects.push(ShellEffect::SparkleBurst { at });
                effects.push(ShellEffect::UpdateScore(score_text(score)));
            }
            RoundEvent::RoundEnded { score, outcome } => {
                effects.push(ShellEffect::StopLoop);
                effects.push(ShellEffect::StopMusic);
                let cue = if outcome == Outcome::Won {
                    SoundCue::RoundWon
                } else {
                    SoundCue::RoundLost
                };
                effects.push(ShellEffect::PlaySound(cue));
                effects.push(ShellEffect::ShowEndScreen(EndScreen::new(score, outcome)));
            }
        }
    }
    effects
}

/// Hard cap on live sparkles
pub const MAX_SPARKLES: usize = 128;
/// Sparkles spawned per catch
pub const SPARKLES_PER_BURST: usize = 16;
/// Initial sparkle speed (px/s)
pub const SPARKLE_SPEED: f32 = 100.0;
/// Net vertical acceleration: board gravity minus the emitter's lift
pub const SPARKLE_GRAVITY: f32 = crate::consts::TARGET_FALL_SPEED - 200.0;
/// Seconds a sparkle lives
pub const SPARKLE_LIFETIME: f32 = 0.6;

/// A sparkle for the catch effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sparkle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1 at spawn, 0 at death
    pub life: f32,
}

/// Live sparkles (visual only, never affects the round)
#[derive(Debug, Clone, Default)]
pub struct Sparkles {
    pub particles: Vec<Sparkle>,
    cap: usize,
}

impl Sparkles {
    pub fn new(cap: usize) -> Self {
        Self {
            particles: Vec::new(),
            cap: cap.min(MAX_SPARKLES),
        }
    }

    pub fn set_cap(&mut self, cap: usize) {
        self.cap = cap.min(MAX_SPARKLES);
        self.particles.truncate(self.cap);
    }

    /// Spawn a burst at `at`, dropping whatever exceeds the cap
    pub fn emit<R: Rng + ?Sized>(&mut self, at: Vec2, rng: &mut R) {
        let room = self.cap.saturating_sub(self.particles.len());
        for _ in 0..SPARKLES_PER_BURST.min(room) {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            self.particles.push(Sparkle {
                pos: at,
                vel: Vec2::from_angle(angle) * SPARKLE_SPEED,
                life: 1.0,
            });
        }
    }

    pub fn update(&mut self, dt: f32) {
        for sparkle in self.particles.iter_mut() {
            sparkle.pos += sparkle.vel * dt;
            sparkle.vel.y += SPARKLE_GRAVITY * dt;
            sparkle.life -= dt / SPARKLE_LIFETIME;
        }
        self.particles.retain(|s| s.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
