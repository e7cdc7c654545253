//! Pong Sim - a classic two-paddle ball game simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, paddle collisions, scoring)
//! - `render`: Pure state-to-draw-command generation
//! - `engine`: Engine facade (start/stop lifecycle, pointer input, frame loop contract)
//! - `tuning`: Difficulty presets
//!
//! The UI layer (menus, buttons, the actual drawing surface) lives outside
//! this crate. It drives the engine through [`Engine::start`],
//! [`Engine::stop`] and [`Engine::set_pointer_y`], and paints whatever
//! [`Engine::frame`] returns.

pub mod engine;
pub mod render;
pub mod sim;
pub mod tuning;

pub use engine::{Engine, EngineError, FrameHandle, FrameScheduler, RunState};
pub use render::{DrawCommand, render};
pub use sim::rng::{PcgSource, RandomSource};
pub use sim::state::{Ball, GameState, Paddle};
pub use sim::tick::advance;
pub use tuning::{Difficulty, DifficultyProfile};

/// Playfield constants
///
/// The field is a fixed 800x500 logical surface; all coordinates in the
/// crate are relative to it. None of these change after initialization.
pub mod consts {
    /// Logical playfield width
    pub const FIELD_WIDTH: f32 = 800.0;
    /// Logical playfield height
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Player paddle left edge
    pub const PLAYER_X: f32 = 28.0;
    /// Opponent paddle left edge (mirrored across the field)
    pub const OPPONENT_X: f32 = FIELD_WIDTH - PLAYER_X - PADDLE_WIDTH;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 12.0;

    /// Highest paddle top-edge position that keeps the paddle on the field
    pub const PADDLE_MAX_Y: f32 = FIELD_HEIGHT - PADDLE_HEIGHT;
}
