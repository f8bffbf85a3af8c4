//! Game clock oracle.

use crate::state::GameTime;

/// Read access to elapsed game time.
pub trait ClockOracle: Send + Sync {
    fn game_time(&self) -> GameTime;
}
