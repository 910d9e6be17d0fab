//! Session controller
//!
//! Owns the session and the color source, and is the only entry point a
//! host needs. Calls must be serialized by the host (one event loop).
//!
//! Phases:
//! - `Playing` + tick: mover advances, status counts down
//! - `Playing` + place: block lands (stay `Playing`) or misses (`GameOver`)
//! - `GameOver` + tick: nothing
//! - `GameOver` + place / restart: new session, score folded into high score
//! - any phase + resize: recenter only

use super::event::{GameEvent, InputAction};
use super::oscillator;
use super::placement;
use super::snapshot::Snapshot;
use super::state::{GamePhase, GameSession};
use super::viewport;
use crate::palette::{ColorSource, Palette};
use crate::settings::{Settings, Tuning};

pub struct SessionController<C: ColorSource = Palette> {
    session: GameSession,
    tuning: Tuning,
    colors: C,
    /// Completed tick count for the current session
    ticks: u64,
}

impl SessionController<Palette> {
    /// Controller with the arcade palette, seeded from settings (or randomly)
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Palette seed {}", seed);
        Self::new(
            settings.tuning.clone(),
            settings.viewport_width,
            settings.viewport_height,
            Palette::new(seed),
        )
    }
}

impl<C: ColorSource> SessionController<C> {
    pub fn new(tuning: Tuning, viewport_width: f32, viewport_height: f32, mut colors: C) -> Self {
        let tuning = tuning.sanitized();
        let session = GameSession::new(&tuning, viewport_width, viewport_height, 0, &mut colors);
        Self {
            session,
            tuning,
            colors,
            ticks: 0,
        }
    }

    /// Advance one fixed step
    pub fn tick(&mut self) {
        if self.session.phase == GamePhase::GameOver {
            return;
        }
        self.ticks += 1;
        oscillator::advance(&mut self.session);
        oscillator::count_down_status(&mut self.session);
    }

    /// Drop the mover. After game over this starts a new session instead.
    pub fn place(&mut self) -> GameEvent {
        match self.session.phase {
            GamePhase::Playing => placement::place(&mut self.session, &self.tuning, &mut self.colors),
            GamePhase::GameOver => self.restart(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        viewport::on_resize(&mut self.session, width, height);
    }

    /// Start over, keeping the best score
    pub fn restart(&mut self) -> GameEvent {
        let high_score = self.session.high_score.max(self.session.score);
        self.session = GameSession::new(
            &self.tuning,
            self.session.viewport_width,
            self.session.viewport_height,
            high_score,
            &mut self.colors,
        );
        self.ticks = 0;
        log::info!("New game started (high score {})", high_score);
        GameEvent::Restarted { high_score }
    }

    /// Dispatch a mapped input
    pub fn handle(&mut self, action: InputAction) -> GameEvent {
        match action {
            InputAction::Place => self.place(),
            InputAction::Restart => self.restart(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.session)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Direct access for hosts that script positions (replays, tests)
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }
}
