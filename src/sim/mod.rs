//! Fixed-tick match simulation
//!
//! All gameplay logic lives here. This module is pure and deterministic:
//! - Integer positions, one tick per call
//! - No rendering, windowing or clock dependencies
//! - Seeded RNG only (autopilot)

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{CollisionResult, deflection, resolve_collisions};
pub use input::{KeyState, apply_input, can_move};
pub use state::{Ball, Direction, Field, GameEvent, GamePhase, MatchState, Paddle, Side};
pub use tick::tick;
