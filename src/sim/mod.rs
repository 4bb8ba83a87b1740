//! Simulation core
//!
//! All gameplay logic lives here. This module must stay pure and headless:
//! - Fixed timestep only (one unified `tick`, no free-running timers)
//! - Seeded RNG only
//! - Obstacle shapes recomputed from absolute time (drift-free)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use collision::{Aabb, CollisionOutcome};
pub use level::{Level, LevelError, generate};
pub use state::{AimState, Bird, Coin, Explosion, GamePhase, GameState, MovePattern, Pipe};
pub use tick::tick;
pub use trajectory::{Trajectory, predict};
