//! Game clock owned by the runtime.
use std::sync::atomic::{AtomicU64, Ordering};

use spell_core::{ClockOracle, GameTime};

/// Monotonic game clock advanced by the simulation loop.
#[derive(Debug, Default)]
pub struct ClockOracleImpl {
    now: AtomicU64,
}

impl ClockOracleImpl {
    pub fn new(start: GameTime) -> Self {
        Self {
            now: AtomicU64::new(start.0),
        }
    }

    /// Advances the clock and returns the new time.
    pub fn advance(&self, by: u64) -> GameTime {
        let previous = self.now.fetch_add(by, Ordering::Relaxed);
        GameTime(previous.saturating_add(by))
    }
}

impl ClockOracle for ClockOracleImpl {
    fn game_time(&self) -> GameTime {
        GameTime(self.now.load(Ordering::Relaxed))
    }
}
