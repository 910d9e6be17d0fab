//! Stack Tower - A block-stacking arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (oscillation, placement, viewport, game state)
//! - `palette`: Color source for newly placed blocks
//! - `settings`: Data-driven game tuning

pub mod palette;
pub mod settings;
pub mod sim;

pub use palette::{ColorSource, ColorToken, FixedColors, Palette};
pub use settings::{Settings, Tuning};
pub use sim::{GameEvent, GamePhase, InputAction, SessionController, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Nominal fixed step interval (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Default viewport dimensions
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 420.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

    /// Base block defaults
    pub const BASE_BLOCK_HEIGHT: f32 = 24.0;
    /// Base block width as a fraction of the viewport width
    pub const BASE_WIDTH_FRACTION: f32 = 0.8;

    /// Moving block speed, in units per tick
    pub const INITIAL_SPEED: f32 = 3.2;
    pub const SPEED_STEP: f32 = 0.12;
    pub const MAX_SPEED: f32 = 12.0;

    /// Max |moving.left - prev.left| that still counts as a perfect drop
    pub const PERFECT_TOLERANCE: f32 = 4.0;
    pub const PERFECT_SCORE: u32 = 2;
    pub const NORMAL_SCORE: u32 = 1;
    pub const PERFECT_MESSAGE: &str = "PERFECT!";
    pub const PERFECT_MESSAGE_TICKS: u32 = 25;

    /// The mover is kept below this fraction of the viewport height
    pub const SCROLL_BAND_FRACTION: f32 = 0.25;
}
