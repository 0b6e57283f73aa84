//! Renderer-side visual effects
//!
//! Disposable decoration entities: exhaust particles behind the ball, rising
//! "+1" popups, the scoreboard pulse, and the conceding paddle's flash. All
//! are plain data records produced from the simulation's event feed and
//! consumed by a renderer - nothing here feeds back into physics.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::{GameEvent, PaddleSide};

/// Maximum live particles; oldest are dropped first
pub const MAX_PARTICLES: usize = 256;
/// Particles spawned per trail event
const TRAIL_BURST: usize = 5;
/// Particle life lost per frame
const PARTICLE_DECAY: f32 = 0.01;
/// Scoreboard pulse length in frames
const PULSE_FRAMES: u32 = 60;
/// Conceding-paddle flash length in frames
const FLASH_FRAMES: u32 = 120;

/// A single exhaust particle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life; dead at 0
    pub life: f32,
    pub size: f32,
}

impl Particle {
    /// Render opacity, ramping out as life drains
    pub fn opacity(&self) -> f32 {
        (self.life * 6.0).clamp(0.0, 1.0)
    }
}

/// A rising "+1" popup near the conceding paddle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScorePopup {
    pub pos: Vec2,
    pub opacity: f32,
    pub size: f32,
}

/// All live visual effects
#[derive(Debug)]
pub struct EffectsState {
    rng: Pcg32,
    pub particles: Vec<Particle>,
    pub popups: Vec<ScorePopup>,
    pulse_frames_left: u32,
    flash: Option<(PaddleSide, u32)>,
}

impl EffectsState {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            particles: Vec::with_capacity(MAX_PARTICLES),
            popups: Vec::new(),
            pulse_frames_left: 0,
            flash: None,
        }
    }

    /// Consume one tick's event feed
    pub fn apply(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Trail { pos, vel } => self.spawn_trail_burst(*pos, *vel),
                GameEvent::Scored { scorer, at } => {
                    self.popups.push(ScorePopup {
                        pos: *at,
                        opacity: 1.0,
                        size: 30.0,
                    });
                    self.pulse_frames_left = PULSE_FRAMES;
                    self.flash = Some((scorer.opponent(), FLASH_FRAMES));
                }
                GameEvent::WallBounce { .. } | GameEvent::PaddleHit { .. } => {}
            }
        }
    }

    /// Advance all effects one frame and drop the dead ones
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.pos += particle.vel;
            particle.life -= PARTICLE_DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);

        for popup in &mut self.popups {
            popup.pos.y -= 0.5;
            popup.opacity -= 0.02;
        }
        self.popups.retain(|p| p.opacity > 0.0);

        self.pulse_frames_left = self.pulse_frames_left.saturating_sub(1);
        self.flash = match self.flash {
            Some((side, frames)) if frames > 1 => Some((side, frames - 1)),
            _ => None,
        };
    }

    /// Scoreboard scale factor; swells over the pulse window, 1.0 at rest
    pub fn scoreboard_scale(&self) -> f32 {
        if self.pulse_frames_left == 0 {
            return 1.0;
        }
        let progress = (PULSE_FRAMES - self.pulse_frames_left) as f32 / PULSE_FRAMES as f32;
        1.0 + 0.1 * progress
    }

    /// Whether a paddle is currently flashing after conceding
    pub fn is_flashing(&self, side: PaddleSide) -> bool {
        matches!(self.flash, Some((s, _)) if s == side)
    }

    /// Sparks trailing opposite the ball's travel, with jittered spread
    fn spawn_trail_burst(&mut self, pos: Vec2, vel: Vec2) {
        let base_angle = (-vel.y).atan2(-vel.x);
        for _ in 0..TRAIL_BURST {
            let angle = base_angle + self.rng.random_range(-0.15..0.15);
            let speed = self.rng.random_range(0.5..1.5);
            let size = self.rng.random_range(10.0..12.0);
            self.particles.push(Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: 0.15,
                size,
            });
        }

        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            self.particles.drain(0..excess);
        }
    }
}
