//! Startup configuration
//!
//! Every value defaults to the classic layout; a JSON file may override any
//! subset of them.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    #[default]
    Human,
    Autopilot,
}

impl Controller {
    pub fn as_str(&self) -> &'static str {
        match self {
            Controller::Human => "human",
            Controller::Autopilot => "autopilot",
        }
    }
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    /// File is not valid settings JSON.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// Values parsed but describe an unplayable field.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: i32,
    pub field_height: i32,

    // === Paddles ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Pixels per tick
    pub paddle_speed: i32,
    /// Distance from the side wall
    pub paddle_inset: i32,
    /// Minimum distance from the top/bottom edge
    pub paddle_margin: i32,

    // === Ball ===
    pub ball_radius: i32,
    /// Horizontal pixels per tick
    pub ball_speed: i32,

    // === Rules ===
    pub win_score: u32,
    pub tick_rate: u32,
    /// Pause after a win, in milliseconds
    pub win_pause_ms: u64,

    // === Players ===
    pub left: Controller,
    pub right: Controller,
    /// Seed for autopilot aim
    pub autopilot_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
            paddle_margin: PADDLE_MARGIN,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            win_score: WIN_SCORE,
            tick_rate: TICK_RATE,
            win_pause_ms: WIN_PAUSE_MS,

            left: Controller::Human,
            right: Controller::Human,
            autopilot_seed: 0x5eed,
        }
    }
}

impl Settings {
    /// Read and validate settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Check that the values describe a playable field
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.paddle_inset < 0 || self.paddle_margin < 0 {
            return Err(SettingsError::Invalid(
                "paddle_inset and paddle_margin must not be negative".into(),
            ));
        }
        if self.field_width > MAX_FIELD_EXTENT || self.field_height > MAX_FIELD_EXTENT {
            return Err(SettingsError::Invalid(format!(
                "field {}x{} is larger than {MAX_FIELD_EXTENT}",
                self.field_width, self.field_height
            )));
        }

        // Widened so oversized values cannot overflow
        let (width, height) = (i64::from(self.field_width), i64::from(self.field_height));
        if i64::from(self.paddle_height) + 2 * i64::from(self.paddle_margin) > height {
            return Err(SettingsError::Invalid(format!(
                "paddle_height {} does not fit a field {} high",
                self.paddle_height, self.field_height
            )));
        }
        if 2 * (i64::from(self.paddle_inset) + i64::from(self.paddle_width)) >= width {
            return Err(SettingsError::Invalid(format!(
                "paddles overlap on a field {} wide",
                self.field_width
            )));
        }
        if 2 * i64::from(self.ball_radius) >= height {
            return Err(SettingsError::Invalid(format!(
                "ball_radius {} does not fit a field {} high",
                self.ball_radius, self.field_height
            )));
        }

        // A single tick may not carry the ball or a paddle across the field
        if self.ball_speed >= self.field_width / 2 {
            return Err(SettingsError::Invalid(format!(
                "ball_speed {} is too fast for a field {} wide",
                self.ball_speed, self.field_width
            )));
        }
        if self.paddle_speed > self.field_height {
            return Err(SettingsError::Invalid(format!(
                "paddle_speed {} is too fast for a field {} high",
                self.paddle_speed, self.field_height
            )));
        }
        if self.win_score == 0 {
            return Err(SettingsError::Invalid("win_score must be at least 1".into()));
        }
        if self.tick_rate == 0 {
            return Err(SettingsError::Invalid("tick_rate must be at least 1".into()));
        }
        Ok(())
    }

    /// Duration of one simulation tick (seconds)
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Real-time pause after a win
    pub fn win_pause(&self) -> Duration {
        Duration::from_millis(self.win_pause_ms)
    }

    /// Controller for one side
    pub fn controller(&self, side: crate::sim::Side) -> Controller {
        match side {
            crate::sim::Side::Left => self.left,
            crate::sim::Side::Right => self.right,
        }
    }
}
