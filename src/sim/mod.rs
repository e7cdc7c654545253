//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed-topology physics only (one ball, two paddles, four walls)
//! - Injected RNG only (no ambient entropy)
//! - No rendering or platform dependencies
//!
//! The engine facade owns a [`state::GameState`] and advances it one tick at
//! a time with [`tick::advance`].

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{ball_paddle_overlap, deflection_offset};
pub use rng::{PcgSource, RandomSource};
pub use state::{Ball, GameState, Paddle};
pub use tick::advance;
