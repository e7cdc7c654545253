//! The per-tick physics step
//!
//! Advances the whole simulation by one frame: ball integration, wall
//! bounces, paddle collision response, scoring, and the opponent's tracking
//! controller. Total function over valid state; nothing in here can fail.

use crate::consts::*;
use crate::sim::collision::{ball_paddle_overlap, deflection_offset};
use crate::sim::rng::RandomSource;
use crate::sim::state::{Ball, GameState, Paddle};
use crate::tuning::DifficultyProfile;

/// Advance the game state by one tick.
///
/// Step order is fixed: integrate, wall bounce, player paddle, opponent
/// paddle, scoring, opponent tracking. Both paddle tests run every tick;
/// in the degenerate case both can fire in the same tick, which is left
/// unguarded.
pub fn advance(state: &mut GameState, profile: &DifficultyProfile, rng: &mut dyn RandomSource) {
    // Ball movement
    state.ball.pos += state.ball.vel;

    bounce_off_walls(&mut state.ball);

    // Player paddle: reflect with a 10% speed gain, deflection angle set by
    // where the ball struck the face. Repositioning to the paddle's far edge
    // keeps the ball from sticking inside it.
    if ball_paddle_overlap(&state.ball, PLAYER_X, &state.player) {
        let offset = deflection_offset(&state.ball, &state.player);
        state.ball.pos.x = PLAYER_X + PADDLE_WIDTH + state.ball.radius;
        state.ball.vel.x *= -1.1;
        state.ball.vel.y = profile.ball_speed * offset;
    }

    // Opponent paddle, mirrored geometry
    if ball_paddle_overlap(&state.ball, OPPONENT_X, &state.opponent) {
        let offset = deflection_offset(&state.ball, &state.opponent);
        state.ball.pos.x = OPPONENT_X - state.ball.radius;
        state.ball.vel.x *= -1.1;
        state.ball.vel.y = profile.ball_speed * offset;
    }

    // Scoring: the serve resets to the profile's baseline speed, undoing
    // whatever speed the rally built up.
    if state.ball.left() < 0.0 {
        state.opponent_score += 1;
        log::debug!(
            "opponent scores ({} - {})",
            state.player_score,
            state.opponent_score
        );
        state.ball.reset(profile, rng);
    }
    if state.ball.right() > FIELD_WIDTH {
        state.player_score += 1;
        log::debug!(
            "player scores ({} - {})",
            state.player_score,
            state.opponent_score
        );
        state.ball.reset(profile, rng);
    }

    track_ball(&mut state.opponent, state.ball.pos.y, profile.ai_speed);
}

/// Elastic bounce off the top and bottom walls, with position clamped so
/// the ball can never tunnel past an edge.
fn bounce_off_walls(ball: &mut Ball) {
    if ball.top() < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
    }
    if ball.bottom() > FIELD_HEIGHT {
        ball.pos.y = FIELD_HEIGHT - ball.radius;
        ball.vel.y = -ball.vel.y;
    }
}

/// Opponent tracking: a proportional controller toward the ball.
///
/// First-order low-pass filter; `ai_speed` is the gain, so higher values
/// track tighter (harder difficulty) and the lag is the only imperfection.
pub fn track_ball(opponent: &mut Paddle, ball_y: f32, ai_speed: f32) {
    let target = ball_y - PADDLE_HEIGHT / 2.0;
    opponent.y += (target - opponent.y) * ai_speed;
    opponent.clamp_to_field();
}
