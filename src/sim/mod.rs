//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (back-to-front when removing in place)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_proximity, rects_overlap};
pub use config::GameConfig;
pub use spawn::Spawner;
pub use state::{Coin, GameState, Mode, Obstacle, Player, Snapshot};
pub use tick::tick;
