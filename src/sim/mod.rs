//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected at the tick seam
//! - Stable iteration order (vector order, ids only for render keys)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, bullet_box, enemy_box, player_box};
pub use state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Player, Snapshot};
pub use tick::{Direction, TickInput, tick};
