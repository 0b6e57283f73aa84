//! Fixed timestep simulation tick
//!
//! The core step that advances the game deterministically, one call per
//! frame. Drivers pace calls at `consts::SIM_DT`; velocities are in field
//! units per tick.

use glam::Vec2;

use super::ai::{self, AiPolicy};
use super::collision::{bounce_off_paddle, clamp_speed, paddle_overlap, reflect_walls};
use super::state::{GameEvent, GamePhase, GameState, PaddleSide};
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer y in field coordinates; sets the player paddle directly
    pub target_y: Option<f32>,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Demo mode - the AI plays the player paddle too
    pub idle_mode: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    state.events.clear();

    if input.pause {
        state.paused = !state.paused;
    }
    // Paused ticks mutate nothing further - not even the tick counter
    if state.paused {
        return;
    }

    state.time_ticks += 1;

    // Post-score freeze: the ball sits dead at center until the window
    // elapses, then the stored serve goes out. Motion, AI, collisions and
    // scoring are all skipped while frozen.
    if let GamePhase::Frozen {
        resume_at_tick,
        serve_vx,
    } = state.phase
    {
        if state.time_ticks >= resume_at_tick {
            state.ball.vel = Vec2::new(serve_vx, 0.0);
            state.phase = GamePhase::Running;
        }
        return;
    }

    let mut rng = state.rng.tick_stream(state.time_ticks);

    // Player paddle: demo policy, or direct positional mapping from the pointer
    if input.idle_mode {
        ai::drive_paddle(
            &mut state.player,
            &state.ball,
            &AiPolicy::demo(tuning),
            tuning,
            &mut rng,
        );
    } else if let Some(target_y) = input.target_y {
        state.player.y = target_y - tuning.paddle_height / 2.0;
        state.player.clamp_to_field(tuning);
    }

    // Computer paddle
    ai::drive_paddle(
        &mut state.computer,
        &state.ball,
        &AiPolicy::computer(tuning),
        tuning,
        &mut rng,
    );

    // Ball motion
    state.ball.pos += state.ball.vel;

    if reflect_walls(&mut state.ball, tuning.field_height) {
        state.events.push(GameEvent::WallBounce {
            pos: state.ball.pos,
        });
    }

    // Paddle collisions shape the return angle. The paddles are a field
    // apart, so at most one can be touching the ball.
    for side in [PaddleSide::Player, PaddleSide::Computer] {
        let paddle = match side {
            PaddleSide::Player => state.player,
            PaddleSide::Computer => state.computer,
        };
        if paddle_overlap(&state.ball, &paddle, tuning) {
            bounce_off_paddle(&mut state.ball, &paddle, tuning);
            state.ball.vel = clamp_speed(state.ball.vel, tuning.speed_cap);
            state.events.push(GameEvent::PaddleHit {
                side,
                pos: state.ball.pos,
                vel: state.ball.vel,
            });
            break;
        }
    }

    state.events.push(GameEvent::Trail {
        pos: state.ball.pos,
        vel: state.ball.vel,
    });

    // Scoring: the ball escaped past a goal line. A bounced ball is still
    // inside the paddle's x-span, so a registered hit can never score.
    let scorer = if state.ball.pos.x < 0.0 {
        Some(PaddleSide::Computer)
    } else if state.ball.pos.x > tuning.field_width {
        Some(PaddleSide::Player)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        award_point(state, scorer, tuning);
    }
}

/// Record a goal, recenter the ball, and enter the post-score freeze with
/// the serve direction inverted.
fn award_point(state: &mut GameState, scorer: PaddleSide, tuning: &Tuning) {
    state.score.record(scorer);

    // Popup lands near the conceding paddle
    let at = match scorer {
        PaddleSide::Computer => Vec2::new(tuning.paddle_width + 10.0, state.player.y),
        PaddleSide::Player => Vec2::new(
            tuning.field_width - tuning.paddle_width - 50.0,
            state.computer.y,
        ),
    };
    state.events.push(GameEvent::Scored { scorer, at });

    let serve_vx = -state.ball.vel.x.signum() * tuning.serve_speed;
    state.ball.pos = tuning.field_center();
    state.ball.vel = Vec2::ZERO;
    state.phase = GamePhase::Frozen {
        resume_at_tick: state.time_ticks + tuning.freeze_ticks as u64,
        serve_vx,
    };

    log::debug!(
        "point to {:?}, score {}:{}",
        scorer,
        state.score.player,
        state.score.computer
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Score;

    /// Fresh game, unpaused and ticked once
    fn started(seed: u64, tuning: &Tuning) -> GameState {
        let mut state = GameState::new(seed, tuning);
        let input = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &input, tuning);
        state
    }

    #[test]
    fn test_paused_tick_is_inert() {
        let tuning = Tuning::default();
        let mut state = GameState::new(1, &tuning);
        let before_ball = state.ball;
        let input = TickInput::default();

        for _ in 0..10 {
            tick(&mut state, &input, &tuning);
        }

        assert!(state.paused);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.ball.pos, before_ball.pos);
        assert_eq!(state.ball.vel, before_ball.vel);
        assert_eq!(state.score, Score::default());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_pause_toggle() {
        let tuning = Tuning::default();
        let mut state = started(1, &tuning);
        assert!(!state.paused);

        let input = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &input, &tuning);
        assert!(state.paused);
        tick(&mut state, &input, &tuning);
        assert!(!state.paused);
    }

    #[test]
    fn test_ball_advances_per_tick() {
        let tuning = Tuning::default();
        let mut state = started(1, &tuning);
        let x0 = state.ball.pos.x;

        tick(&mut state, &TickInput::default(), &tuning);
        assert!((state.ball.pos.x - (x0 + tuning.serve_speed)).abs() < 0.001);
    }

    #[test]
    fn test_wall_bounce_emits_event() {
        let tuning = Tuning::default();
        let mut state = started(1, &tuning);
        state.ball.pos = Vec2::new(400.0, 1.0);
        state.ball.vel = Vec2::new(0.5, -2.0);

        tick(&mut state, &TickInput::default(), &tuning);

        assert_eq!(state.ball.vel.y, 2.0);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::WallBounce { .. }))
        );
    }

    #[test]
    fn test_paddle_hit_reverses_ball() {
        let tuning = Tuning::default();
        let mut state = started(1, &tuning);
        // Line the ball up on the computer paddle's center, one tick out
        state.computer.y = 162.5;
        state.ball.pos = Vec2::new(787.5, 200.0);
        state.ball.vel = Vec2::new(3.0, 0.0);

        tick(&mut state, &TickInput::default(), &tuning);

        assert!(state.ball.vel.x < 0.0, "horizontal direction reversed");
        assert_eq!(state.ball.vel.y, 0.0, "center hit returns straight");
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::PaddleHit { side: PaddleSide::Computer, .. }))
        );
    }

    #[test]
    fn test_left_exit_scores_for_computer() {
        let tuning = Tuning::default();
        let mut state = started(1, &tuning);
        // Ball about to escape left, far from the player paddle
        state.ball.pos = Vec2::new(1.0, 50.0);
        state.ball.vel = Vec2::new(-3.0, 0.0);

        tick(&mut state, &TickInput::default(), &tuning);

        assert_eq!(state.score.computer, 1);
        assert_eq!(state.score.player, 0);
        assert_eq!(state.ball.pos, tuning.field_center());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert!(matches!(
            state.phase,
            GamePhase::Frozen { serve_vx, .. } if serve_vx > 0.0
        ));
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::Scored { scorer: PaddleSide::Computer, .. }))
        );
    }

    #[test]
    fn test_right_exit_scores_for_player() {
        let tuning = Tuning::default();
        let mut state = started(1, &tuning);
        state.ball.pos = Vec2::new(tuning.field_width - 1.0, 50.0);
        state.ball.vel = Vec2::new(3.0, 0.0);

        tick(&mut state, &TickInput::default(), &tuning);

        assert_eq!(state.score.player, 1);
        assert!(matches!(
            state.phase,
            GamePhase::Frozen { serve_vx, .. } if serve_vx < 0.0
        ));
    }

    #[test]
    fn test_freeze_holds_then_serves_opposite() {
        let tuning = Tuning::default();
        let mut state = started(1, &tuning);
        state.ball.pos = Vec2::new(1.0, 50.0);
        state.ball.vel = Vec2::new(-3.0, 1.0);
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.score.computer, 1);

        // Frozen window: ball dead at center, no re-scoring, no motion
        for _ in 0..tuning.freeze_ticks - 1 {
            tick(&mut state, &TickInput::default(), &tuning);
            assert_eq!(state.ball.pos, tuning.field_center());
            assert_eq!(state.ball.vel, Vec2::ZERO);
            assert_eq!(state.score.computer, 1);
            assert!(matches!(state.phase, GamePhase::Frozen { .. }));
        }

        // Window elapses: serve goes out opposite the pre-reset direction
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.ball.vel, Vec2::new(tuning.serve_speed, 0.0));
        assert_eq!(state.ball.pos, tuning.field_center(), "motion resumes next tick");
    }

    #[test]
    fn test_pointer_input_maps_directly() {
        let tuning = Tuning::default();
        let mut state = started(1, &tuning);

        let input = TickInput {
            target_y: Some(100.0),
            ..Default::default()
        };
        tick(&mut state, &input, &tuning);
        assert_eq!(state.player.y, 100.0 - tuning.paddle_height / 2.0);

        // Clamped at the walls
        let input = TickInput {
            target_y: Some(-500.0),
            ..Default::default()
        };
        tick(&mut state, &input, &tuning);
        assert_eq!(state.player.y, 0.0);

        let input = TickInput {
            target_y: Some(5000.0),
            ..Default::default()
        };
        tick(&mut state, &input, &tuning);
        assert_eq!(state.player.y, tuning.paddle_max_y());
    }

    #[test]
    fn test_idle_mode_drives_player_paddle() {
        let tuning = Tuning::default();
        let mut state = started(1, &tuning);
        // Ball heading toward the player plane, intercept far below the paddle
        state.ball.pos = Vec2::new(400.0, 350.0);
        state.ball.vel = Vec2::new(-2.0, 0.0);
        let before = state.player.y;

        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..20 {
            tick(&mut state, &input, &tuning);
        }

        assert!(state.player.y > before, "demo policy chases the intercept");
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and inputs stay identical
        let tuning = Tuning::default();
        let mut state1 = started(99999, &tuning);
        let mut state2 = started(99999, &tuning);

        let inputs = [
            TickInput {
                target_y: Some(120.0),
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                idle_mode: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..500 {
            for input in &inputs {
                tick(&mut state1, input, &tuning);
                tick(&mut state2, input, &tuning);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.computer.y, state2.computer.y);
        assert_eq!(state1.score, state2.score);
    }
}
