//! Lane Runner - an endless runner over fixed lanes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `driver`: Fixed-cadence frame driver that ticks the sim and exposes snapshots
//!
//! Rendering, DOM wiring and raw input capture live in the platform entry
//! point (`main.rs`). They talk to the core only through discrete commands
//! and read-only per-frame snapshots.

pub mod driver;
pub mod sim;

pub use driver::FrameDriver;
pub use sim::{GameConfig, GameState, Mode};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep. One tick per animation frame, each
    /// covering 1/60 s of game time regardless of wall-clock frame pacing.
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Number of lanes
    pub const LANES: usize = 3;

    /// Scroll speed (pixels per tick)
    pub const INITIAL_SPEED: f32 = 2.5;
    pub const MAX_SPEED: f32 = 8.0;
    /// Speed gained each Running tick, up to `MAX_SPEED`
    pub const SPEED_INCREMENT: f32 = 0.0005;

    /// Vertical kinematics
    pub const JUMP_POWER: f32 = 15.0;
    pub const JUMP_GRAVITY: f32 = 0.6;
    pub const SLIDE_GRAVITY: f32 = 0.8;
    /// How long a slide lasts (seconds)
    pub const SLIDE_DURATION: f32 = 0.5;

    /// Cosmetic coin spin (radians per tick)
    pub const COIN_SPIN_RATE: f32 = 0.1;

    /// Scoring
    pub const SCORE_PER_TICK: f64 = 0.1;
    pub const DODGE_SCORE: f64 = 10.0;
    pub const COIN_SCORE: f64 = 50.0;
    /// Displayed score at which the run is won
    pub const WIN_SCORE: u64 = 2000;

    /// Obstacle spawn interval starts here and shrinks with elapsed time
    pub const OBSTACLE_INTERVAL_BASE: f32 = 2.0;
    pub const OBSTACLE_INTERVAL_FLOOR: f32 = 1.0;
    pub const OBSTACLE_INTERVAL_RAMP: f32 = 0.02;
    /// Coin spawn interval (constant, seconds)
    pub const COIN_INTERVAL: f32 = 1.5;

    /// Viewport-derived sizing fractions (of the smaller viewport dimension,
    /// except the obstacle width which is a fraction of the lane width)
    pub const PLAYER_SIZE_FRACTION: f32 = 0.06;
    pub const OBSTACLE_WIDTH_FRACTION: f32 = 0.8;
    pub const OBSTACLE_HEIGHT_FRACTION: f32 = 0.12;
    pub const COIN_RADIUS_FRACTION: f32 = 0.03;
    /// Ground sits this far down the viewport
    pub const GROUND_FRACTION: f32 = 0.80;
}
