//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here. Transient
//! render-side data (the per-tick event feed) is serde-skipped.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Post-score freeze: ball sits dead at center until the window elapses,
    /// then serves with the stored horizontal velocity
    Frozen { resume_at_tick: u64, serve_vx: f32 },
}

/// Which paddle - the player defends the left goal, the computer the right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleSide {
    Player,
    Computer,
}

impl PaddleSide {
    pub fn opponent(&self) -> Self {
        match self {
            PaddleSide::Player => PaddleSide::Computer,
            PaddleSide::Computer => PaddleSide::Player,
        }
    }

    /// The x-plane the ball strikes, i.e. the inner face of the paddle
    pub fn face_x(&self, tuning: &Tuning) -> f32 {
        match self {
            PaddleSide::Player => tuning.paddle_width,
            PaddleSide::Computer => tuning.field_width - tuning.paddle_width,
        }
    }

    /// Horizontal extent of the paddle body
    pub fn x_span(&self, tuning: &Tuning) -> (f32, f32) {
        match self {
            PaddleSide::Player => (0.0, tuning.paddle_width),
            PaddleSide::Computer => (tuning.field_width - tuning.paddle_width, tuning.field_width),
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at rest in the field center
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.field_center(),
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A paddle, stored by its top edge
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub side: PaddleSide,
    /// Top edge y. Invariant: within [0, field_height - paddle_height]
    pub y: f32,
}

impl Paddle {
    /// Paddle centered vertically in the field
    pub fn centered(side: PaddleSide, tuning: &Tuning) -> Self {
        Self {
            side,
            y: (tuning.field_height - tuning.paddle_height) / 2.0,
        }
    }

    pub fn center_y(&self, tuning: &Tuning) -> f32 {
        self.y + tuning.paddle_height / 2.0
    }

    /// Keep the paddle within the playfield
    pub fn clamp_to_field(&mut self, tuning: &Tuning) {
        self.y = self.y.clamp(0.0, tuning.paddle_max_y());
    }
}

/// Score counters, incremented exactly once per ball-exits-field event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn record(&mut self, scorer: PaddleSide) {
        match scorer {
            PaddleSide::Player => self.player += 1,
            PaddleSide::Computer => self.computer += 1,
        }
    }
}

/// One-way event feed from simulation to renderer/effects.
///
/// Emitted during a tick, cleared at the next tick's entry. Consumers must
/// not feed anything back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce { pos: Vec2 },
    /// Ball bounced off a paddle; velocity is post-bounce
    PaddleHit { side: PaddleSide, pos: Vec2, vel: Vec2 },
    /// Ball advanced this tick (drives the exhaust trail)
    Trail { pos: Vec2, vel: Vec2 },
    /// A side scored; `at` is near the conceding paddle for popup placement
    Scored { scorer: PaddleSide, at: Vec2 },
}

/// Seed wrapper deriving per-tick RNG streams.
///
/// Generator internals are never persisted: a stream is re-derived from
/// (seed, tick), so a serialized state resumes identically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// RNG stream for one tick. SplitMix via seed_from_u64 decorrelates
    /// consecutive ticks despite the additive constant.
    pub fn tick_stream(&self, tick: u64) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed.wrapping_add(tick.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// User pause flag, checked at tick entry. A paused tick mutates nothing.
    pub paused: bool,
    /// Current phase
    pub phase: GamePhase,
    pub ball: Ball,
    pub player: Paddle,
    pub computer: Paddle,
    pub score: Score,
    /// Events emitted by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// New game: paddles and ball centered, serve heading toward the
    /// computer, paused until the driver starts play.
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut ball = Ball::centered(tuning);
        ball.vel = Vec2::new(tuning.serve_speed, 0.0);

        Self {
            seed,
            rng: RngState::new(seed),
            time_ticks: 0,
            paused: true,
            phase: GamePhase::Running,
            ball,
            player: Paddle::centered(PaddleSide::Player, tuning),
            computer: Paddle::centered(PaddleSide::Computer, tuning),
            score: Score::default(),
            events: Vec::new(),
        }
    }
}
