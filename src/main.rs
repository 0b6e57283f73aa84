//! Retro Pong entry point
//!
//! Headless demo driver: runs an AI-vs-AI match at the fixed simulation
//! cadence and logs score events. A graphical frontend drives the crate the
//! same way - one `tick` per rendered frame, then feed the event stream to
//! `EffectsState`.
//!
//! Usage: retro-pong [seed] [frames]

use std::path::Path;

use retro_pong::effects::EffectsState;
use retro_pong::sim::{GameEvent, GameState, TickInput, tick};
use retro_pong::tuning::Tuning;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0xD1CE);
    // 5 minutes of play at 60 Hz unless told otherwise
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(18_000);

    let tuning = Tuning::load(Path::new("tuning.json"));
    let mut state = GameState::new(seed, &tuning);
    let mut effects = EffectsState::new(seed);

    log::info!("running {frames} frames with seed {seed:#x}");

    // New games start paused; the first input unpauses. Demo mode keeps the
    // player paddle on the AI policy.
    let mut input = TickInput {
        pause: true,
        idle_mode: true,
        ..Default::default()
    };

    for _ in 0..frames {
        tick(&mut state, &input, &tuning);
        // Clear one-shot inputs after processing
        input.pause = false;

        for event in &state.events {
            if let GameEvent::Scored { scorer, .. } = event {
                log::info!(
                    "{scorer:?} scores - player {} : computer {}",
                    state.score.player,
                    state.score.computer
                );
            }
        }

        effects.apply(&state.events);
        effects.update();
    }

    println!(
        "final score - player {} : computer {}",
        state.score.player, state.score.computer
    );
}
