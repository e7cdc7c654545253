//! Difficulty presets
//!
//! Data-driven game balance: each difficulty maps to a fixed profile of
//! opponent tracking gain and serve speed. The table is closed; anything
//! outside it is rejected at the engine boundary.

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a difficulty label, rejecting anything outside the preset
    /// table.
    pub fn from_label(label: &str) -> Result<Self, EngineError> {
        match label.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidConfiguration(label.to_string())),
        }
    }

    /// The tuning profile for this difficulty.
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                ai_speed: 0.04,
                ball_speed: 4.0,
            },
            Difficulty::Medium => DifficultyProfile {
                ai_speed: 0.08,
                ball_speed: 6.0,
            },
            Difficulty::Hard => DifficultyProfile {
                ai_speed: 0.16,
                ball_speed: 8.0,
            },
        }
    }
}

/// Tuning values for one difficulty level
///
/// `ai_speed` is the opponent controller's proportional gain in `(0, 1]`;
/// `ball_speed` is the serve speed and the base for deflection angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub ai_speed: f32,
    pub ball_speed: f32,
}
