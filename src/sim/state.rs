//! Game state and core simulation types
//!
//! Plain data owned by the session controller. Behavior lives in the
//! sibling modules.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::palette::{ColorSource, ColorToken};
use crate::settings::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Mover oscillating, waiting for a drop
    #[default]
    Playing,
    /// Last drop missed the tower; ticks do nothing until restart
    GameOver,
}

/// Horizontal travel direction of the mover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A placed block. Geometry never changes except by whole-tower shifts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub color: ColorToken,
}

impl Block {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.left += offset.x;
        self.top += offset.y;
    }
}

/// The block currently oscillating above the tower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingBlock {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub direction: Direction,
    /// Units per tick
    pub speed: f32,
}

impl MovingBlock {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.left += offset.x;
        self.top += offset.y;
    }
}

/// Placed blocks, base first. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Block>", into = "Vec<Block>")]
pub struct Tower {
    blocks: Vec<Block>,
}

impl TryFrom<Vec<Block>> for Tower {
    type Error = String;

    fn try_from(blocks: Vec<Block>) -> Result<Self, Self::Error> {
        if blocks.is_empty() {
            return Err("tower needs at least a base block".to_string());
        }
        Ok(Self { blocks })
    }
}

impl From<Tower> for Vec<Block> {
    fn from(tower: Tower) -> Self {
        tower.blocks
    }
}

impl Tower {
    pub fn with_base(base: Block) -> Self {
        Self { blocks: vec![base] }
    }

    pub fn base(&self) -> &Block {
        &self.blocks[0]
    }

    /// The block the mover will land on
    pub fn top(&self) -> &Block {
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn translate_all(&mut self, offset: Vec2) {
        for block in &mut self.blocks {
            block.translate(offset);
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub tower: Tower,
    /// Retains its last values after game over
    pub moving: MovingBlock,
    pub score: u32,
    /// Best score seen this process, folded in on restart
    pub high_score: u32,
    pub status_message: String,
    pub status_ticks: u32,
    pub phase: GamePhase,
    /// Controls hint, shown until the first drop
    pub show_instructions: bool,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl GameSession {
    /// Build a fresh session: one centered base block at the bottom of the
    /// viewport and a mover one block above it, flush left.
    pub fn new(
        tuning: &Tuning,
        viewport_width: f32,
        viewport_height: f32,
        high_score: u32,
        colors: &mut impl ColorSource,
    ) -> Self {
        let height = tuning.block_height;
        let base_width = viewport_width * tuning.base_width_fraction;
        let base = Block {
            left: (viewport_width - base_width) / 2.0,
            top: viewport_height - height,
            width: base_width,
            height,
            color: colors.next_color(),
        };

        let moving = MovingBlock {
            left: 0.0,
            top: base.top - height,
            width: base_width,
            height,
            direction: Direction::Right,
            speed: tuning.initial_speed,
        };

        Self {
            tower: Tower::with_base(base),
            moving,
            score: 0,
            high_score,
            status_message: String::new(),
            status_ticks: 0,
            phase: GamePhase::Playing,
            show_instructions: true,
            viewport_width,
            viewport_height,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::FixedColors;

    fn session() -> GameSession {
        let mut colors = FixedColors::new(vec![ColorToken(0xABCDEF)]);
        GameSession::new(&Tuning::default(), 420.0, 720.0, 0, &mut colors)
    }

    #[test]
    fn test_new_session_layout() {
        let s = session();
        assert_eq!(s.tower.len(), 1);
        let base = s.tower.base();
        assert_eq!(base.width, 336.0);
        assert_eq!(base.left, 42.0);
        assert_eq!(base.top, 696.0);
        assert_eq!(base.bottom(), 720.0);
        assert_eq!(base.color, ColorToken(0xABCDEF));

        assert_eq!(s.moving.left, 0.0);
        assert_eq!(s.moving.top, 672.0);
        assert_eq!(s.moving.width, 336.0);
        assert_eq!(s.moving.direction, Direction::Right);
        assert_eq!(s.moving.speed, 3.2);

        assert_eq!(s.phase, GamePhase::Playing);
        assert!(s.show_instructions);
        assert!(s.status_message.is_empty());
    }

    #[test]
    fn test_direction_reverse() {
        assert_eq!(Direction::Left.reversed(), Direction::Right);
        assert_eq!(Direction::Right.reversed(), Direction::Left);
        assert_eq!(Direction::Left.sign(), -1.0);
    }

    #[test]
    fn test_tower_rejects_empty_json() {
        assert!(serde_json::from_str::<Tower>("[]").is_err());
        assert!(Tower::try_from(Vec::new()).is_err());
    }

    #[test]
    fn test_tower_json_keeps_blocks() {
        let s = session();
        let json = serde_json::to_string(&s.tower).expect("serialize");
        let tower: Tower = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(tower, s.tower);
        assert_eq!(tower.len(), 1);
    }

    #[test]
    fn test_tower_translate_all() {
        let mut s = session();
        s.tower.translate_all(Vec2::new(5.0, 10.0));
        assert_eq!(s.tower.base().left, 47.0);
        assert_eq!(s.tower.base().top, 706.0);
        assert_eq!(s.tower.top(), s.tower.base());
    }
}
