//! Predictive paddle policy
//!
//! A cheap, stateless heuristic: estimate when the ball reaches the paddle
//! plane under constant velocity (intermediate wall bounces ignored), chase
//! the predicted intercept unless already close enough, and gate movement on
//! an accuracy roll so the opponent stays beatable.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Ball, Paddle};
use crate::tuning::Tuning;

/// Tunable knobs for one paddle's policy
#[derive(Debug, Clone, Copy)]
pub struct AiPolicy {
    /// Chance per tick that the paddle reacts, in [0, 1]. 1.0 tracks every tick.
    pub accuracy: f32,
    /// Movement per tick when chasing
    pub step: f32,
    /// Half-height of the no-move band around the predicted intercept
    pub dead_zone: f32,
}

impl AiPolicy {
    /// The computer opponent
    pub fn computer(tuning: &Tuning) -> Self {
        Self {
            accuracy: tuning.ai_accuracy,
            step: tuning.ai_step,
            dead_zone: tuning.ai_dead_zone,
        }
    }

    /// Demo-mode stand-in for the player paddle (near-perfect tracking)
    pub fn demo(tuning: &Tuning) -> Self {
        Self {
            accuracy: tuning.demo_accuracy,
            ..Self::computer(tuning)
        }
    }
}

/// Predicted ball y at the given x-plane under constant velocity.
///
/// None when the ball has no horizontal motion - there is no finite
/// time-to-intercept, so callers hold position that tick.
pub fn predicted_intercept_y(ball: &Ball, face_x: f32) -> Option<f32> {
    if ball.vel.x == 0.0 {
        return None;
    }
    let ticks_to_reach = (face_x - ball.pos.x).abs() / ball.vel.x.abs();
    Some(ball.pos.y + ball.vel.y * ticks_to_reach)
}

/// Advance a paddle one tick toward the predicted intercept.
pub fn drive_paddle(
    paddle: &mut Paddle,
    ball: &Ball,
    policy: &AiPolicy,
    tuning: &Tuning,
    rng: &mut Pcg32,
) {
    let Some(predicted_y) = predicted_intercept_y(ball, paddle.side.face_x(tuning)) else {
        return;
    };

    // Dead-zone around the prediction, clamped to the playfield
    let zone_min = (predicted_y - policy.dead_zone).max(0.0);
    let zone_max = (predicted_y + policy.dead_zone).min(tuning.paddle_max_y());

    let center = paddle.center_y(tuning);
    if center >= zone_min && center <= zone_max {
        return;
    }

    // Imperfect reaction: some ticks the paddle simply doesn't move
    if rng.random::<f32>() >= policy.accuracy {
        return;
    }

    if center < zone_min {
        paddle.y += policy.step;
    } else {
        paddle.y -= policy.step;
    }
    paddle.clamp_to_field(tuning);
}
