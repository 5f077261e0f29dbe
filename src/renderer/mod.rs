//! Canvas 2D rendering module
//!
//! `shapes` turns a round into a flat draw list; `canvas` replays it on a
//! browser 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{Color, DrawCmd, FrameView, build_frame};
