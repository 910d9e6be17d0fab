//! Per-tick mover motion and status countdown

use super::state::{Direction, GameSession};

/// Move the mover one step, bouncing off the viewport edges
pub fn advance(session: &mut GameSession) {
    if session.is_game_over() {
        return;
    }

    let width = session.viewport_width;
    let moving = &mut session.moving;
    moving.left += moving.speed * moving.direction.sign();

    if moving.left <= 0.0 {
        moving.left = 0.0;
        moving.direction = Direction::Right;
    } else if moving.right() >= width {
        moving.left = width - moving.width;
        moving.direction = Direction::Left;
    }
}

/// Count down the status message, clearing it when it expires
pub fn count_down_status(session: &mut GameSession) {
    if session.status_ticks > 0 {
        session.status_ticks -= 1;
        if session.status_ticks == 0 {
            session.status_message.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::FixedColors;
    use crate::settings::Tuning;
    use crate::sim::state::GamePhase;

    fn session() -> GameSession {
        GameSession::new(&Tuning::default(), 420.0, 720.0, 0, &mut FixedColors::new(vec![]))
    }

    #[test]
    fn test_advance_moves_by_speed() {
        let mut s = session();
        advance(&mut s);
        assert!((s.moving.left - 3.2).abs() < 1e-5);
        assert_eq!(s.moving.direction, Direction::Right);
    }

    #[test]
    fn test_bounce_right_edge() {
        let mut s = session();
        s.moving.left = 420.0 - 336.0 - 1.0;
        advance(&mut s);
        assert_eq!(s.moving.left, 84.0);
        assert_eq!(s.moving.direction, Direction::Left);
    }

    #[test]
    fn test_bounce_left_edge() {
        let mut s = session();
        s.moving.left = 2.0;
        s.moving.direction = Direction::Left;
        advance(&mut s);
        assert_eq!(s.moving.left, 0.0);
        assert_eq!(s.moving.direction, Direction::Right);
    }

    #[test]
    fn test_full_sweep_stays_in_viewport() {
        let mut s = session();
        s.moving.width = 50.0;
        for _ in 0..1000 {
            advance(&mut s);
            assert!(s.moving.left >= 0.0);
            assert!(s.moving.right() <= 420.0 + 1e-3);
        }
    }

    #[test]
    fn test_bounce_when_landing_exactly_on_left_edge() {
        let mut s = session();
        s.moving.left = 6.4;
        s.moving.speed = 3.2;
        s.moving.direction = Direction::Left;
        advance(&mut s);
        advance(&mut s);
        assert_eq!(s.moving.left, 0.0);
        assert_eq!(s.moving.direction, Direction::Right);
    }

    #[test]
    fn test_bounce_when_landing_exactly_on_right_edge() {
        let mut s = session();
        s.moving.width = 100.0;
        s.moving.left = 316.0;
        s.moving.speed = 4.0;
        advance(&mut s);
        assert_eq!(s.moving.left, 320.0);
        assert_eq!(s.moving.right(), 420.0);
        assert_eq!(s.moving.direction, Direction::Left);
    }

    #[test]
    fn test_advance_noop_when_game_over() {
        let mut s = session();
        s.phase = GamePhase::GameOver;
        s.moving.left = 10.0;
        advance(&mut s);
        assert_eq!(s.moving.left, 10.0);
    }

    #[test]
    fn test_status_countdown_clears_message() {
        let mut s = session();
        s.status_message = "PERFECT!".to_string();
        s.status_ticks = 2;
        count_down_status(&mut s);
        assert_eq!(s.status_message, "PERFECT!");
        count_down_status(&mut s);
        assert!(s.status_message.is_empty());
        assert_eq!(s.status_ticks, 0);
        count_down_status(&mut s);
        assert_eq!(s.status_ticks, 0);
    }
}
