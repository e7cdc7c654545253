//! Game state and core simulation types
//!
//! Everything the physics step mutates lives here: both paddles, the ball,
//! and the two scores. The engine facade owns exactly one `GameState`; the
//! UI layer never holds a reference to it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::*;
use crate::tuning::DifficultyProfile;

/// A paddle, positioned by its top edge
///
/// The horizontal position is fixed per side ([`PLAYER_X`] / [`OPPONENT_X`])
/// and not part of the state. Invariant: `y` stays in `[0, PADDLE_MAX_Y]`
/// after every update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub y: f32,
}

impl Paddle {
    /// Paddle vertically centered on the field
    pub fn centered() -> Self {
        Self {
            y: (FIELD_HEIGHT - PADDLE_HEIGHT) / 2.0,
        }
    }

    /// Vertical center of the paddle face
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// Clamp the top edge back onto the field
    #[inline]
    pub fn clamp_to_field(&mut self) {
        self.y = self.y.clamp(0.0, PADDLE_MAX_Y);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Center the ball and re-randomize its velocity.
    ///
    /// Horizontal speed is exactly the profile's ball speed with a random
    /// sign; vertical speed is `ball_speed - 2` scaled by a random factor in
    /// `[-1, 1]`. Used at game start and after every point, so the rally
    /// speed-up resets to baseline each serve.
    pub fn reset(&mut self, profile: &DifficultyProfile, rng: &mut dyn RandomSource) {
        let speed = profile.ball_speed;
        self.pos = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        self.vel.x = if rng.next_f32() > 0.5 { speed } else { -speed };
        self.vel.y = (speed - 2.0) * (rng.next_f32() * 2.0 - 1.0);
    }

    /// Top edge of the ball's bounding square
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    /// Bottom edge of the ball's bounding square
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Left edge of the ball's bounding square
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    /// Right edge of the ball's bounding square
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// Complete game state (deterministic given the RNG source)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Human paddle (left side, pointer-driven)
    pub player: Paddle,
    /// Tracked paddle (right side, proportional controller)
    pub opponent: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub opponent_score: u32,
}

impl GameState {
    /// Fresh state: paddles centered, scores zero, ball served from center.
    pub fn new(profile: &DifficultyProfile, rng: &mut dyn RandomSource) -> Self {
        let mut ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        };
        ball.reset(profile, rng);
        Self {
            player: Paddle::centered(),
            opponent: Paddle::centered(),
            ball,
            player_score: 0,
            opponent_score: 0,
        }
    }

    /// Reset in place. Idempotent; called on every start regardless of
    /// whatever run came before.
    pub fn reset(&mut self, profile: &DifficultyProfile, rng: &mut dyn RandomSource) {
        self.player = Paddle::centered();
        self.opponent = Paddle::centered();
        self.ball.radius = BALL_RADIUS;
        self.ball.reset(profile, rng);
        self.player_score = 0;
        self.opponent_score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceSource;
    use crate::tuning::Difficulty;

    #[test]
    fn test_reset_centers_and_zeroes() {
        let profile = Difficulty::Medium.profile();
        let mut rng = SequenceSource::new(vec![0.9, 0.5]);
        let mut state = GameState::new(&profile, &mut rng);

        state.player_score = 7;
        state.opponent_score = 3;
        state.player.y = 0.0;
        state.opponent.y = PADDLE_MAX_Y;

        state.reset(&profile, &mut rng);
        state.reset(&profile, &mut rng); // twice in a row must be equivalent

        assert_eq!(state.player_score, 0);
        assert_eq!(state.opponent_score, 0);
        assert_eq!(state.player, Paddle::centered());
        assert_eq!(state.opponent, Paddle::centered());
        assert_eq!(state.ball.pos, Vec2::new(400.0, 250.0));
    }

    #[test]
    fn test_ball_reset_velocity_from_profile() {
        let profile = Difficulty::Easy.profile(); // ball_speed 4
        let mut ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        };

        // First draw > 0.5 sends the ball right; second draw 1.0 maps to +1
        let mut rng = SequenceSource::new(vec![0.9, 1.0]);
        ball.reset(&profile, &mut rng);
        assert_eq!(ball.vel.x, 4.0);
        assert!((ball.vel.y - 2.0).abs() < 1e-6); // (4 - 2) * 1

        // First draw <= 0.5 sends it left
        let mut rng = SequenceSource::new(vec![0.2, 0.5]);
        ball.reset(&profile, &mut rng);
        assert_eq!(ball.vel.x, -4.0);
        assert!(ball.vel.y.abs() < 1e-6); // (4 - 2) * 0
    }

    #[test]
    fn test_paddle_clamp() {
        let mut paddle = Paddle { y: -30.0 };
        paddle.clamp_to_field();
        assert_eq!(paddle.y, 0.0);

        paddle.y = FIELD_HEIGHT;
        paddle.clamp_to_field();
        assert_eq!(paddle.y, PADDLE_MAX_Y);
    }
}
