//! Outcomes reported to the host after each command

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A block landed on the tower
    Placed {
        gained: u32,
        perfect: bool,
        /// Width of the new block (and of the next mover)
        width: f32,
    },
    /// The mover missed the tower entirely
    Missed { final_score: u32 },
    /// A new session started
    Restarted { high_score: u32 },
    /// Command had no effect in the current phase
    Ignored,
}

/// Commands a host maps its input devices onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputAction {
    /// Drop the mover (or restart after game over)
    Place,
    /// Start over at any time
    Restart,
}
