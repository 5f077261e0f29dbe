//! HUD and end screen text

use serde::{Deserialize, Serialize};

use crate::sim::Outcome;

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Countdown rounded to the nearest whole second
pub fn time_text(remaining_secs: f32) -> String {
    format!("Remaining Time: {}", remaining_secs.max(0.0).round() as u32)
}

/// End screen headline
pub fn verdict(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "Winner!",
        Outcome::Lost => "Loser.",
        Outcome::InProgress => "",
    }
}

/// Contents of the game over overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndScreen {
    pub score: u32,
    pub verdict: String,
}

impl EndScreen {
    pub fn new(score: u32, outcome: Outcome) -> Self {
        Self {
            score,
            verdict: verdict(outcome).to_string(),
        }
    }

    pub fn score_text(&self) -> String {
        self.score.to_string()
    }
}
