//! Collision detection and response
//!
//! Wall reflection, ball-vs-paddle overlap, and the bounce-angle shaping that
//! gives returns their "english": strikes near a paddle edge leave steep,
//! strikes near the center leave flat.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::tuning::Tuning;

/// Reflect the ball off the top/bottom walls.
///
/// Perfectly elastic: the vertical velocity sign flips and nothing else
/// changes. No positional correction - the ball may overlap a wall by up to
/// one tick's travel.
pub fn reflect_walls(ball: &mut Ball, field_height: f32) -> bool {
    if ball.pos.y < 0.0 || ball.pos.y > field_height {
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Ball-vs-paddle overlap test.
///
/// The ball's x must have reached the paddle's x-span, and its y (inflated by
/// the radius) must overlap the paddle's vertical extent.
pub fn paddle_overlap(ball: &Ball, paddle: &Paddle, tuning: &Tuning) -> bool {
    let (x_min, x_max) = paddle.side.x_span(tuning);
    ball.pos.x >= x_min
        && ball.pos.x <= x_max
        && ball.pos.y + ball.radius >= paddle.y
        && ball.pos.y - ball.radius <= paddle.y + tuning.paddle_height
}

/// Bounce the ball off a paddle.
///
/// Horizontal velocity sign-flips with its magnitude preserved; vertical
/// velocity is re-derived from where the ball struck along the paddle:
/// `angle = normalized_intersect * max_bounce_angle`, `vy = -sin(angle) *
/// max_speed`. A center hit returns straight.
///
/// Returns the normalized strike offset in [-1, 1] (+1 = paddle top edge).
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, tuning: &Tuning) -> f32 {
    ball.vel.x = -ball.vel.x;

    let relative_intersect = paddle.center_y(tuning) - ball.pos.y;
    // Radius inflation lets the strike point fall outside the paddle body
    let normalized = (relative_intersect / (tuning.paddle_height / 2.0)).clamp(-1.0, 1.0);
    let bounce_angle = normalized * tuning.max_bounce_angle;
    ball.vel.y = -bounce_angle.sin() * tuning.max_speed;

    normalized
}

/// Clamp a velocity's magnitude to `cap`, preserving direction
#[inline]
pub fn clamp_speed(vel: Vec2, cap: f32) -> Vec2 {
    let speed = vel.length();
    if speed > cap { vel * (cap / speed) } else { vel }
}
