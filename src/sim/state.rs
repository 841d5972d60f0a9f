//! Game state and core simulation types
//!
//! One explicit [`GameState`] owns everything for a session: no globals.
//! The platform adapter holds it (through the frame driver), feeds it
//! commands, and reads it back through [`Snapshot`].

use glam::Vec2;

use super::collision::Rect;
use super::config::GameConfig;
use super::spawn::Spawner;
use crate::consts::*;

/// Current mode of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Title/instructions screen, nothing simulates
    #[default]
    Instructions,
    /// Active gameplay
    Running,
    /// Frozen mid-run
    Paused,
    /// Run ended by losing the last life
    GameOver,
    /// Run ended by reaching the score threshold
    Win,
}

/// The player entity. Occupies one lane, runs at ground level, and can
/// briefly jump or slide. Never both at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Lane index, always in [0, lanes-1]
    pub lane: usize,
    /// Top-left corner, derived from lane each tick
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity while airborne (screen coords: negative = up)
    pub velocity_y: f32,
    pub jumping: bool,
    pub sliding: bool,
    /// Seconds of slide remaining
    pub slide_time_left: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let mut player = Self {
            lane: config.center_lane(),
            x: 0.0,
            y: config.ground_level,
            width: config.player_size,
            height: config.player_size,
            velocity_y: 0.0,
            jumping: false,
            sliding: false,
            slide_time_left: 0.0,
        };
        player.x = config.lane_origin(player.lane, player.width);
        player
    }

    /// Put the player back at the ground in the center lane with no
    /// vertical motion. Used at session start and after losing a life.
    pub fn respawn(&mut self, config: &GameConfig) {
        self.lane = config.center_lane();
        self.x = config.lane_origin(self.lane, self.width);
        self.y = config.ground_level;
        self.velocity_y = 0.0;
        self.jumping = false;
        self.sliding = false;
        self.slide_time_left = 0.0;
    }

    /// Collision hitbox. While sliding the player crouches: half the
    /// height, origin shifted down by half the full height.
    pub fn hitbox(&self) -> Rect {
        if self.sliding {
            Rect::new(
                self.x,
                self.y + self.height * 0.5,
                self.width,
                self.height * 0.5,
            )
        } else {
            Rect::new(self.x, self.y, self.width, self.height)
        }
    }

    /// Center of the full (non-crouched) body, used for coin pickup
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A red barrier occupying most of a lane, scrolling downward
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub lane: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A collectible coin, scrolling downward. Rotation is cosmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub lane: usize,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub rotation: f32,
}

impl Coin {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub mode: Mode,
    /// Continuous score accumulator. Fractional per-tick increments
    /// persist here; floor only for display and threshold comparisons.
    pub score: f64,
    /// Score captured when the run ended
    pub final_score: u64,
    /// Current scroll speed (pixels per tick)
    pub speed: f32,
    /// Total distance scrolled this run
    pub distance: f32,
    /// Game time elapsed this run (seconds, in SIM_DT steps)
    pub elapsed: f32,
    pub lives: u32,
    pub has_booster: bool,
    /// Decorative mascot-interaction flag; never affects the outcome
    pub cat_touched: bool,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub spawner: Spawner,
}

impl GameState {
    /// Create a fresh session in Instructions mode
    pub fn new(viewport_width: f32, viewport_height: f32, seed: u64) -> Self {
        let config = GameConfig::new(viewport_width, viewport_height);
        let player = Player::new(&config);
        Self {
            config,
            mode: Mode::Instructions,
            score: 0.0,
            final_score: 0,
            speed: INITIAL_SPEED,
            distance: 0.0,
            elapsed: 0.0,
            lives: 1,
            has_booster: false,
            cat_touched: false,
            player,
            obstacles: Vec::new(),
            coins: Vec::new(),
            spawner: Spawner::new(seed),
        }
    }

    /// Score as shown in the HUD (floored)
    #[inline]
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0) as u64
    }

    /// Begin a run. The bonus-code entry flow is the caller's concern;
    /// the core only receives the lives/booster it produced.
    pub fn start_game(&mut self, lives: u32, has_booster: bool) {
        if self.mode != Mode::Instructions {
            return;
        }
        self.reset_run();
        self.lives = lives.max(1);
        self.has_booster = has_booster;
        self.mode = Mode::Running;
        log::info!(
            "run started: lives={}, booster={}",
            self.lives,
            self.has_booster
        );
    }

    /// Flip between Running and Paused; no-op in any other mode
    pub fn toggle_pause(&mut self) {
        match self.mode {
            Mode::Running => self.mode = Mode::Paused,
            Mode::Paused => self.mode = Mode::Running,
            _ => {}
        }
    }

    /// Return to the Instructions screen with full defaults
    pub fn restart_game(&mut self) {
        match self.mode {
            Mode::GameOver | Mode::Win => {}
            _ => return,
        }
        self.reset_run();
        self.lives = 1;
        self.has_booster = false;
        self.cat_touched = false;
        self.mode = Mode::Instructions;
        log::info!("session reset to instructions");
    }

    /// Shared reset for start_game/restart_game: score, clock, speed,
    /// player and all live entities back to defaults.
    fn reset_run(&mut self) {
        self.score = 0.0;
        self.speed = INITIAL_SPEED;
        self.distance = 0.0;
        self.elapsed = 0.0;
        self.player.respawn(&self.config);
        self.obstacles.clear();
        self.coins.clear();
        self.spawner.reset_timers();
    }

    /// Viewport adapter hook: recompute derived config and re-pin the
    /// player to the (possibly moved) ground.
    pub fn on_resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.config.resize(viewport_width, viewport_height);
        self.player.width = self.config.player_size;
        self.player.height = self.config.player_size;
        self.player.x = self.config.lane_origin(self.player.lane, self.player.width);
        if !self.player.jumping {
            self.player.y = self.config.ground_level;
        }
    }

    /// Move one lane left. No-op at the leftmost lane or outside Running.
    pub fn lane_left(&mut self) {
        if self.mode == Mode::Running && self.player.lane > 0 {
            self.player.lane -= 1;
        }
    }

    /// Move one lane right. No-op at the rightmost lane or outside Running.
    pub fn lane_right(&mut self) {
        if self.mode == Mode::Running && self.player.lane < self.config.lanes - 1 {
            self.player.lane += 1;
        }
    }

    /// Start a jump. No-op while already jumping or sliding.
    pub fn jump(&mut self) {
        if self.mode == Mode::Running && !self.player.jumping && !self.player.sliding {
            self.player.jumping = true;
            self.player.velocity_y = -self.config.jump_power;
        }
    }

    /// Start a slide. No-op while already sliding or jumping.
    pub fn slide(&mut self) {
        if self.mode == Mode::Running && !self.player.sliding && !self.player.jumping {
            self.player.sliding = true;
            self.player.slide_time_left = SLIDE_DURATION;
        }
    }

    /// Decorative: the title-screen cat was petted
    pub fn touch_cat(&mut self) {
        self.cat_touched = true;
    }

    /// Read-only view for the render and HUD adapters
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            mode: self.mode,
            score: self.display_score(),
            final_score: self.final_score,
            lives: self.lives,
            has_booster: self.has_booster,
            speed: self.speed,
            distance: self.distance,
            ground_level: self.config.ground_level,
            cat_touched: self.cat_touched,
            player: &self.player,
            obstacles: &self.obstacles,
            coins: &self.coins,
            config: &self.config,
        }
    }
}

/// Per-frame read-only view of the simulation
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub mode: Mode,
    /// Floored score for display
    pub score: u64,
    pub final_score: u64,
    pub lives: u32,
    pub has_booster: bool,
    pub speed: f32,
    pub distance: f32,
    pub ground_level: f32,
    pub cat_touched: bool,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub coins: &'a [Coin],
    pub config: &'a GameConfig,
}
