//! Data-driven game balance
//!
//! Field dimensions, speeds, and AI knobs are configuration, not hardwired
//! numbers. Persisted as JSON; a missing or malformed file falls back to the
//! defaults in `consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Game balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub serve_speed: f32,
    /// Vertical speed budget for paddle bounces
    pub max_speed: f32,
    /// Hard cap on ball speed magnitude
    pub speed_cap: f32,
    /// Steepest bounce angle off a paddle edge (radians)
    pub max_bounce_angle: f32,

    // === Computer opponent ===
    pub ai_step: f32,
    pub ai_dead_zone: f32,
    /// Reaction chance per tick, in [0, 1]
    pub ai_accuracy: f32,
    /// Accuracy of the demo-mode policy driving the player paddle
    pub demo_accuracy: f32,

    // === Flow ===
    /// Post-score freeze window in ticks
    pub freeze_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            ball_radius: consts::BALL_RADIUS,
            serve_speed: consts::SERVE_SPEED,
            max_speed: consts::MAX_SPEED,
            speed_cap: consts::SPEED_CAP,
            max_bounce_angle: consts::MAX_BOUNCE_ANGLE,
            ai_step: consts::AI_STEP,
            ai_dead_zone: consts::AI_DEAD_ZONE,
            ai_accuracy: consts::AI_ACCURACY,
            demo_accuracy: consts::DEMO_ACCURACY,
            freeze_ticks: consts::FREEZE_TICKS,
        }
    }
}

impl Tuning {
    /// Highest legal paddle top-edge position. Floored at zero so a paddle
    /// taller than the field still clamps instead of panicking.
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        (self.field_height - self.paddle_height).max(0.0)
    }

    /// Center of the field, where the ball serves from
    #[inline]
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Clamp out-of-range knobs rather than reject the file
    pub fn sanitize(mut self) -> Self {
        self.ai_accuracy = self.ai_accuracy.clamp(0.0, 1.0);
        self.demo_accuracy = self.demo_accuracy.clamp(0.0, 1.0);
        self
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Tuning>(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    return tuning.sanitize();
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {err}", path.display());
                }
            },
            Err(_) => log::info!("no tuning file at {}, using defaults", path.display()),
        }
        Self::default()
    }

    /// Save tuning as pretty-printed JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}
