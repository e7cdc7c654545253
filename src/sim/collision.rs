//! Ball-vs-paddle collision detection
//!
//! The field is axis-aligned, so overlap testing is a plain AABB check
//! between the ball's bounding square and a paddle rectangle. Response
//! (reflection, speed-up, deflection angle) lives in the tick step.

use crate::consts::{PADDLE_HEIGHT, PADDLE_WIDTH};
use crate::sim::state::{Ball, Paddle};

/// AABB overlap between the ball's bounding square and a paddle rectangle.
///
/// `paddle_x` is the paddle's left edge (fixed per side). Strict
/// inequalities: grazing contact with zero overlap is a miss.
pub fn ball_paddle_overlap(ball: &Ball, paddle_x: f32, paddle: &Paddle) -> bool {
    ball.right() > paddle_x
        && ball.left() < paddle_x + PADDLE_WIDTH
        && ball.bottom() > paddle.y
        && ball.top() < paddle.y + PADDLE_HEIGHT
}

/// Normalized vertical offset of the ball from the paddle center.
///
/// 0 at the paddle center, ±1 at the paddle's top/bottom edges. Not
/// clamped: a ball overlapping slightly past an edge yields |offset| > 1
/// and a steeper deflection, which is accepted arcade behavior.
#[inline]
pub fn deflection_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.pos.y - paddle.center_y()) / (PADDLE_HEIGHT / 2.0)
}
