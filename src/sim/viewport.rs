//! Viewport adjustments
//!
//! Both passes shift the whole scene by one offset, so block adjacency is
//! preserved exactly.

use glam::Vec2;

use super::state::GameSession;

/// Shift the scene down so the mover sits no higher than the scroll band.
/// Returns the applied shift (0 when already inside the band).
pub fn scroll_into_band(session: &mut GameSession, band_fraction: f32) -> f32 {
    let band_top = session.viewport_height * band_fraction;
    if session.moving.top >= band_top {
        return 0.0;
    }

    let shift = band_top - session.moving.top;
    let offset = Vec2::new(0.0, shift);
    session.tower.translate_all(offset);
    session.moving.translate(offset);
    log::debug!("Scrolled tower down by {:.2}", shift);
    shift
}

/// Store the new viewport size and center the tower horizontally in it.
/// Vertical positions are untouched.
pub fn on_resize(session: &mut GameSession, width: f32, height: f32) {
    let base_left = session.tower.base().left;
    let span = session.tower.top().right() - base_left;
    let target_left = (width - span) / 2.0;
    let offset = Vec2::new(target_left - base_left, 0.0);

    session.tower.translate_all(offset);
    session.moving.translate(offset);
    session.viewport_width = width;
    session.viewport_height = height;

    log::debug!("Viewport resized to {}x{}, recentered by {:.2}", width, height, offset.x);
}
