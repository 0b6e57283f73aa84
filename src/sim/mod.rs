//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame, velocities in units/tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Renderers observe the simulation through `GameState` plus the per-tick
//! `GameEvent` feed; nothing in here reads back from them.

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::AiPolicy;
pub use collision::{bounce_off_paddle, clamp_speed, paddle_overlap, reflect_walls};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, PaddleSide, RngState, Score};
pub use tick::{TickInput, tick};
