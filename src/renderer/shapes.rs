//! Draw list generation for 2D primitives

use glam::Vec2;

use crate::feedback::Sparkles;
use crate::hud::time_text;
use crate::sim::{Aabb, RoundState};

/// Straight RGBA color (0-1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const SPACE: Color = Color([0.04, 0.03, 0.12, 1.0]);
    pub const ALIEN: Color = Color([0.86, 0.18, 0.22, 1.0]);
    pub const RAMEN: Color = Color([0.98, 0.78, 0.35, 1.0]);
    pub const SPARKLE: Color = Color([1.0, 0.95, 0.6, 1.0]);
    pub const TEXT: Color = Color([0.96, 0.96, 0.96, 1.0]);
    pub const BOUNDS: Color = Color([0.2, 1.0, 0.4, 1.0]);

    pub fn with_alpha(self, alpha: f32) -> Color {
        let [r, g, b, _] = self.0;
        Color([r, g, b, alpha.clamp(0.0, 1.0)])
    }

    /// CSS `rgba()` string for the canvas API
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.0;
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgba({}, {}, {}, {})", byte(r), byte(g), byte(b), a.clamp(0.0, 1.0))
    }
}

/// A single canvas operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill { rect: Aabb, color: Color },
    Outline { rect: Aabb, color: Color },
    Dot { pos: Vec2, radius: f32, color: Color },
    /// Text anchored at its top-left corner
    Text { text: String, pos: Vec2, color: Color },
}

/// Everything the frame needs besides the round itself
pub struct FrameView<'a> {
    pub sparkles: &'a Sparkles,
    pub score_label: &'a str,
    pub show_bounds: bool,
}

/// HUD font used by the canvas backend
pub const HUD_FONT: &str = "25px Arial";
const SPARKLE_RADIUS: f32 = 3.0;

/// Build the draw list for one frame, back to front
pub fn build_frame(state: &RoundState, view: &FrameView<'_>) -> Vec<DrawCmd> {
    let board = state.board();
    let mut cmds = Vec::with_capacity(8 + view.sparkles.len());

    cmds.push(DrawCmd::Fill {
        rect: Aabb::new(Vec2::ZERO, Vec2::new(board.width, board.height)),
        color: Color::SPACE,
    });
    cmds.push(DrawCmd::Fill {
        rect: state.target().bounds(),
        color: Color::RAMEN,
    });
    cmds.push(DrawCmd::Fill {
        rect: state.player().bounds(),
        color: Color::ALIEN,
    });

    for sparkle in &view.sparkles.particles {
        cmds.push(DrawCmd::Dot {
            pos: sparkle.pos,
            radius: SPARKLE_RADIUS,
            color: Color::SPARKLE.with_alpha(sparkle.life),
        });
    }

    if view.show_bounds {
        cmds.push(DrawCmd::Outline {
            rect: state.player().bounds(),
            color: Color::BOUNDS,
        });
        cmds.push(DrawCmd::Outline {
            rect: state.target().bounds(),
            color: Color::BOUNDS,
        });
    }

    cmds.push(DrawCmd::Text {
        text: time_text(state.remaining_secs()),
        pos: Vec2::new(10.0, 10.0),
        color: Color::TEXT,
    });
    cmds.push(DrawCmd::Text {
        text: view.score_label.to_string(),
        pos: Vec2::new(board.width - 120.0, 10.0),
        color: Color::TEXT,
    });

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{RoundConfig, init_round};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn texts(cmds: &[DrawCmd]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_frame_layout() {
        let state = init_round(RoundConfig::default(), 1).unwrap();
        let sparkles = Sparkles::new(0);
        let view = FrameView {
            sparkles: &sparkles,
            score_label: "Score: 0",
            show_bounds: false,
        };

        let cmds = build_frame(&state, &view);

        assert_eq!(cmds.len(), 5);
        assert_eq!(
            cmds[0],
            DrawCmd::Fill {
                rect: Aabb::new(Vec2::ZERO, Vec2::new(500.0, 500.0)),
                color: Color::SPACE
            }
        );
        assert_eq!(
            cmds[2],
            DrawCmd::Fill {
                rect: state.player().bounds(),
                color: Color::ALIEN
            }
        );
        assert_eq!(texts(&cmds), vec!["Remaining Time: 30", "Score: 0"]);
    }

    #[test]
    fn test_bounds_and_sparkles_drawn() {
        let state = init_round(RoundConfig::default(), 1).unwrap();
        let mut sparkles = Sparkles::new(64);
        sparkles.emit(Vec2::new(50.0, 50.0), &mut Pcg32::seed_from_u64(3));
        let view = FrameView {
            sparkles: &sparkles,
            score_label: "Score: 2",
            show_bounds: true,
        };

        let cmds = build_frame(&state, &view);

        let dots = cmds.iter().filter(|c| matches!(c, DrawCmd::Dot { .. })).count();
        let outlines = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Outline { .. }))
            .count();
        assert_eq!(dots, sparkles.len());
        assert_eq!(outlines, 2);
        assert_eq!(texts(&cmds)[1], "Score: 2");
    }

    #[test]
    fn test_css_color() {
        assert_eq!(Color::TEXT.to_css(), "rgba(245, 245, 245, 1)");
        assert_eq!(Color([1.0, 0.0, 0.0, 2.0]).to_css(), "rgba(255, 0, 0, 1)");
        assert_eq!(Color::SPARKLE.with_alpha(0.5).0[3], 0.5);
    }
}
