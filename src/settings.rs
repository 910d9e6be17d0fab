//! Game settings and tuning
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Tower ===
    /// Height of every block in the tower
    pub block_height: f32,
    /// Base block width as a fraction of viewport width
    pub base_width_fraction: f32,

    // === Mover ===
    /// Speed of the first mover (units per tick)
    pub initial_speed: f32,
    /// Speed gained per successful placement
    pub speed_step: f32,
    /// Speed never exceeds this
    pub max_speed: f32,

    // === Scoring ===
    pub perfect_tolerance: f32,
    pub perfect_score: u32,
    pub normal_score: u32,
    pub perfect_message: String,
    /// How long the perfect message stays up
    pub perfect_message_ticks: u32,

    // === Viewport ===
    pub scroll_band_fraction: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            block_height: BASE_BLOCK_HEIGHT,
            base_width_fraction: BASE_WIDTH_FRACTION,

            initial_speed: INITIAL_SPEED,
            speed_step: SPEED_STEP,
            max_speed: MAX_SPEED,

            perfect_tolerance: PERFECT_TOLERANCE,
            perfect_score: PERFECT_SCORE,
            normal_score: NORMAL_SCORE,
            perfect_message: PERFECT_MESSAGE.to_string(),
            perfect_message_ticks: PERFECT_MESSAGE_TICKS,

            scroll_band_fraction: SCROLL_BAND_FRACTION,
        }
    }
}

impl Tuning {
    /// Replace values that would break the tower geometry with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.block_height > 0.0) {
            log::warn!("block_height {} must be positive, using {}", self.block_height, defaults.block_height);
            self.block_height = defaults.block_height;
        }
        if !(self.base_width_fraction > 0.0 && self.base_width_fraction <= 1.0) {
            log::warn!(
                "base_width_fraction {} outside (0, 1], using {}",
                self.base_width_fraction,
                defaults.base_width_fraction
            );
            self.base_width_fraction = defaults.base_width_fraction;
        }
        if !(self.initial_speed > 0.0) {
            log::warn!("initial_speed {} must be positive, using {}", self.initial_speed, defaults.initial_speed);
            self.initial_speed = defaults.initial_speed;
        }
        if !(self.speed_step >= 0.0) {
            log::warn!("speed_step {} must not be negative, using {}", self.speed_step, defaults.speed_step);
            self.speed_step = defaults.speed_step;
        }
        if !(self.max_speed >= self.initial_speed) {
            log::warn!(
                "max_speed {} below initial_speed {}, clamping",
                self.max_speed,
                self.initial_speed
            );
            self.max_speed = self.initial_speed;
        }
        if !(self.perfect_tolerance >= 0.0) {
            log::warn!("perfect_tolerance {} must not be negative, using 0", self.perfect_tolerance);
            self.perfect_tolerance = 0.0;
        }
        if self.normal_score == 0 {
            log::warn!("normal_score must be at least 1, using {}", defaults.normal_score);
            self.normal_score = defaults.normal_score;
        }
        if self.perfect_score < self.normal_score {
            log::warn!(
                "perfect_score {} below normal_score {}, raising",
                self.perfect_score,
                self.normal_score
            );
            self.perfect_score = self.normal_score;
        }
        // A perfect message with no ticks would never be cleared
        if self.perfect_message_ticks == 0 {
            log::warn!("perfect_message_ticks must be at least 1, using 1");
            self.perfect_message_ticks = 1;
        }
        if !(self.scroll_band_fraction > 0.0 && self.scroll_band_fraction <= 1.0) {
            log::warn!(
                "scroll_band_fraction {} outside (0, 1], using {}",
                self.scroll_band_fraction,
                defaults.scroll_band_fraction
            );
            self.scroll_band_fraction = defaults.scroll_band_fraction;
        }

        self
    }
}

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    /// Initial viewport size
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Fixed step interval the host should drive `tick` at
    pub tick_interval_ms: u64,
    /// Palette seed (random if unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.tuning = settings.tuning.sanitized();
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Malformed settings in {}: {}, using defaults", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), err);
                Self::default()
            }
        }
    }
}
