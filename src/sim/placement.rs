//! Dropping the mover onto the tower
//!
//! The mover is trimmed to its overlap with the top block. No overlap ends
//! the game. Every successful drop narrows the next mover, speeds it up and
//! sends it back from the opposite edge.

use super::event::GameEvent;
use super::state::{Block, Direction, GamePhase, GameSession};
use super::viewport;
use crate::palette::ColorSource;
use crate::settings::Tuning;

/// Horizontal overlap of two spans as `(left, width)`. Width is
/// non-positive when they do not overlap.
#[inline]
pub fn overlap(a_left: f32, a_right: f32, b_left: f32, b_right: f32) -> (f32, f32) {
    let left = a_left.max(b_left);
    let right = a_right.min(b_right);
    (left, right - left)
}

/// Commit the mover's current position
pub fn place(session: &mut GameSession, tuning: &Tuning, colors: &mut impl ColorSource) -> GameEvent {
    if session.is_game_over() {
        return GameEvent::Ignored;
    }

    session.show_instructions = false;

    let prev = *session.tower.top();
    let moving = session.moving;
    let (overlap_left, overlap_width) = overlap(prev.left, prev.right(), moving.left, moving.right());

    if overlap_width <= 0.0 {
        session.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {}, tower height {}",
            session.score,
            session.tower.len()
        );
        return GameEvent::Missed {
            final_score: session.score,
        };
    }

    session.tower.push(Block {
        left: overlap_left,
        top: moving.top,
        width: overlap_width,
        height: prev.height,
        color: colors.next_color(),
    });

    let perfect = (moving.left - prev.left).abs() <= tuning.perfect_tolerance;
    let gained = if perfect {
        session.status_message = tuning.perfect_message.clone();
        session.status_ticks = tuning.perfect_message_ticks;
        tuning.perfect_score
    } else {
        tuning.normal_score
    };
    session.score += gained;

    session.moving.width = overlap_width;
    session.moving.top -= prev.height;

    viewport::scroll_into_band(session, tuning.scroll_band_fraction);

    let next = &mut session.moving;
    next.direction = next.direction.reversed();
    next.speed = (next.speed + tuning.speed_step).min(tuning.max_speed);
    next.left = match next.direction {
        Direction::Right => 0.0,
        Direction::Left => (session.viewport_width - next.width).max(0.0),
    };

    log::debug!(
        "Placed block {}: width {:.2}, perfect {}, speed {:.2}",
        session.tower.len() - 1,
        overlap_width,
        perfect,
        next.speed
    );

    GameEvent::Placed {
        gained,
        perfect,
        width: overlap_width,
    }
}
