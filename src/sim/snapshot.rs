//! Read-only view of a session for renderers

use serde::Serialize;

use super::state::{Block, GameSession, MovingBlock};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Base first
    pub tower: Vec<Block>,
    /// Absent once the game is over
    pub moving: Option<MovingBlock>,
    pub score: u32,
    pub high_score: u32,
    pub status_message: String,
    pub game_over: bool,
    pub show_instructions: bool,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl From<&GameSession> for Snapshot {
    fn from(session: &GameSession) -> Self {
        let game_over = session.is_game_over();
        Self {
            tower: session.tower.blocks().to_vec(),
            moving: (!game_over).then_some(session.moving),
            score: session.score,
            high_score: session.high_score,
            status_message: session.status_message.clone(),
            game_over,
            show_instructions: session.show_instructions,
            viewport_width: session.viewport_width,
            viewport_height: session.viewport_height,
        }
    }
}
