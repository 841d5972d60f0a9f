//! Time-gated entity spawning
//!
//! Obstacles spawn on an interval that shrinks as the run goes on; coins on
//! a fixed interval. Lanes are chosen uniformly from a seeded RNG so a
//! session is fully replayable from its seed.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::config::GameConfig;
use super::state::{Coin, Obstacle};
use crate::consts::*;

/// Spawns obstacles and coins just above the visible top edge
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    /// Elapsed-time stamp of the last obstacle spawn
    pub last_obstacle_time: f32,
    /// Elapsed-time stamp of the last coin spawn
    pub last_coin_time: f32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            last_obstacle_time: 0.0,
            last_coin_time: 0.0,
        }
    }

    /// Zero the spawn clocks for a fresh run. The RNG stream keeps going;
    /// determinism is per-seed, not per-run.
    pub fn reset_timers(&mut self) {
        self.last_obstacle_time = 0.0;
        self.last_coin_time = 0.0;
    }

    /// Seconds between obstacle spawns at a given elapsed time. Shrinks
    /// monotonically from the base and is floored so the stream never
    /// becomes a wall.
    #[inline]
    pub fn obstacle_interval(elapsed: f32) -> f32 {
        (OBSTACLE_INTERVAL_BASE - elapsed * OBSTACLE_INTERVAL_RAMP).max(OBSTACLE_INTERVAL_FLOOR)
    }

    /// Spawn an obstacle if the interval has elapsed
    pub fn maybe_spawn_obstacle(&mut self, elapsed: f32, config: &GameConfig) -> Option<Obstacle> {
        if elapsed - self.last_obstacle_time <= Self::obstacle_interval(elapsed) {
            return None;
        }
        self.last_obstacle_time = elapsed;
        let lane = self.rng.random_range(0..config.lanes);
        Some(Obstacle {
            lane,
            x: config.lane_origin(lane, config.obstacle_width),
            // Just above the top edge so it scrolls into view
            y: -config.obstacle_height,
            width: config.obstacle_width,
            height: config.obstacle_height,
        })
    }

    /// Spawn a coin if the interval has elapsed
    pub fn maybe_spawn_coin(&mut self, elapsed: f32, config: &GameConfig) -> Option<Coin> {
        if elapsed - self.last_coin_time <= COIN_INTERVAL {
            return None;
        }
        self.last_coin_time = elapsed;
        let lane = self.rng.random_range(0..config.lanes);
        Some(Coin {
            lane,
            x: config.lane_center(lane),
            y: -config.coin_radius * 2.0,
            radius: config.coin_radius,
            rotation: 0.0,
        })
    }
}
