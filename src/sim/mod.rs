//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed steps only (one `tick` per step, no wall-clock time)
//! - Colors come from an injected source
//! - No rendering or platform dependencies

pub mod controller;
pub mod event;
pub mod oscillator;
pub mod placement;
pub mod snapshot;
pub mod state;
pub mod viewport;

pub use controller::SessionController;
pub use event::{GameEvent, InputAction};
pub use placement::{overlap, place};
pub use snapshot::Snapshot;
pub use state::{Block, Direction, GamePhase, GameSession, MovingBlock, Tower};
