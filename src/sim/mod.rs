//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pool order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod difficulty;
pub mod effect;
pub mod geometry;
pub mod pool;
pub mod pursuit;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use effect::StatusEffect;
pub use geometry::{Rect, overlaps};
pub use pool::Pool;
pub use state::{
    Collectible, DeathCause, GameEvent, GamePhase, GameState, Hazard, Player, PowerUp, Pursuer,
};
pub use tick::{resolve_collisions, tick};
pub use timer::{TimerHandle, Timers};
