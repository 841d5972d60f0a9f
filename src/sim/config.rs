//! Viewport-derived game configuration
//!
//! Immutable for the duration of a session except through [`GameConfig::resize`],
//! which the viewport adapter calls when the host window changes size.

use crate::consts::*;

/// Per-session configuration. Tuning values come from [`crate::consts`];
/// the geometric fields are derived from the viewport dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Number of lanes (must be > 0; a zero here is a programmer error)
    pub lanes: usize,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub lane_width: f32,
    /// Player is a square of this side length
    pub player_size: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub coin_radius: f32,
    pub initial_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    pub jump_power: f32,
    pub jump_gravity: f32,
    /// Reserved crouch-drop gravity; the current slide is purely timed
    pub slide_gravity: f32,
    /// Vertical coordinate of the running surface
    pub ground_level: f32,
}

impl GameConfig {
    /// Derive a configuration from viewport dimensions
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut config = Self {
            lanes: LANES,
            viewport_width,
            viewport_height,
            lane_width: 0.0,
            player_size: 0.0,
            obstacle_width: 0.0,
            obstacle_height: 0.0,
            coin_radius: 0.0,
            initial_speed: INITIAL_SPEED,
            max_speed: MAX_SPEED,
            speed_increment: SPEED_INCREMENT,
            jump_power: JUMP_POWER,
            jump_gravity: JUMP_GRAVITY,
            slide_gravity: SLIDE_GRAVITY,
            ground_level: 0.0,
        };
        config.derive();
        config
    }

    /// Recompute derived fields for new viewport dimensions
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
        self.derive();
    }

    fn derive(&mut self) {
        debug_assert!(self.lanes > 0, "lane count must be positive");
        let min_dimension = self.viewport_width.min(self.viewport_height);
        self.lane_width = self.viewport_width / self.lanes as f32;
        self.player_size = min_dimension * PLAYER_SIZE_FRACTION;
        self.obstacle_width = self.lane_width * OBSTACLE_WIDTH_FRACTION;
        self.obstacle_height = min_dimension * OBSTACLE_HEIGHT_FRACTION;
        self.coin_radius = min_dimension * COIN_RADIUS_FRACTION;
        self.ground_level = self.viewport_height * GROUND_FRACTION;
    }

    /// X origin that centers an entity of `width` within `lane`
    #[inline]
    pub fn lane_origin(&self, lane: usize, width: f32) -> f32 {
        lane as f32 * self.lane_width + (self.lane_width - width) / 2.0
    }

    /// X coordinate of the center of `lane`
    #[inline]
    pub fn lane_center(&self, lane: usize) -> f32 {
        lane as f32 * self.lane_width + self.lane_width / 2.0
    }

    /// The lane the player respawns into
    #[inline]
    pub fn center_lane(&self) -> usize {
        self.lanes / 2
    }
}
