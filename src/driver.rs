//! Fixed-cadence frame driver
//!
//! One simulation tick per animation-frame callback, each covering exactly
//! [`crate::consts::SIM_DT`] of game time. Visible speed therefore tracks the
//! host refresh rate rather than the wall clock; that is a deliberate design
//! choice (the step constant is isolated should an accumulator scheme ever be
//! wanted). After ticking, the driver hands out a read-only snapshot for the
//! render and HUD adapters.

use crate::sim::{self, GameState, Mode, Snapshot};

/// Owns the session state and advances it once per frame
#[derive(Debug)]
pub struct FrameDriver {
    state: GameState,
    last_mode: Mode,
}

impl FrameDriver {
    pub fn new(viewport_width: f32, viewport_height: f32, seed: u64) -> Self {
        let state = GameState::new(viewport_width, viewport_height, seed);
        let last_mode = state.mode;
        Self { state, last_mode }
    }

    /// Direct read access for adapters that need more than the snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Command surface: input and viewport adapters call the session's
    /// methods through this, applied immediately on receipt.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Advance one frame: tick the simulation (a no-op outside Running)
    /// and expose the resulting state.
    pub fn frame(&mut self) -> Snapshot<'_> {
        sim::tick(&mut self.state);
        if self.state.mode != self.last_mode {
            log::debug!("mode {:?} -> {:?}", self.last_mode, self.state.mode);
            self.last_mode = self.state.mode;
        }
        self.state.snapshot()
    }
}
