//! Retro Pong - a classic two-paddle arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, paddle AI, game state)
//! - `effects`: Renderer-side decorations fed by the simulation event stream
//! - `tuning`: Data-driven game balance

pub mod effects;
pub mod sim;
pub mod tuning;

pub use effects::EffectsState;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation cadence (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;

    /// Ball defaults - velocities are in field units per tick
    pub const BALL_RADIUS: f32 = 12.0;
    pub const SERVE_SPEED: f32 = 3.0;
    /// Vertical speed budget for paddle bounces
    pub const MAX_SPEED: f32 = 3.5;
    /// Hard cap on ball speed magnitude
    pub const SPEED_CAP: f32 = 6.0;
    /// Steepest bounce off a paddle edge (75 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = 5.0 * std::f32::consts::PI / 12.0;

    /// Computer opponent defaults
    pub const AI_STEP: f32 = 3.0;
    pub const AI_DEAD_ZONE: f32 = 20.0;
    pub const AI_ACCURACY: f32 = 0.6;
    /// Accuracy of the demo-mode policy driving the player paddle
    pub const DEMO_ACCURACY: f32 = 0.99;

    /// Post-score freeze window (800 ms at 60 Hz)
    pub const FREEZE_TICKS: u32 = 48;
}

/// Map a pointer y coordinate from display space into field space.
///
/// Drivers hand `TickInput::target_y` values in field coordinates; this
/// accounts for a canvas rendered at a different size than the logical field.
#[inline]
pub fn pointer_to_field_y(display_y: f32, display_height: f32, field_height: f32) -> f32 {
    if display_height <= 0.0 {
        return 0.0;
    }
    display_y * (field_height / display_height)
}
