//! Scrollbar configuration types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when a configuration cannot drive a scrollbar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("line height must be a positive finite number, got {0}")]
    InvalidLineHeight(f32),
    #[error("notch units must be greater than zero")]
    ZeroNotchUnits,
    #[error("{0} step must be greater than zero")]
    ZeroStep(&'static str),
    #[error("repeat period must be greater than zero")]
    ZeroRepeatPeriod,
}

/// What a press on the bare track does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackClick {
    /// Presses on the track are not handled.
    #[default]
    Ignore,
    /// Move one viewport towards the pressed side.
    Page,
    /// Move the handle so that it is centred on the pointer.
    Jump,
}

/// Per-scrollbar configuration.
///
/// Every field has a default, so partial documents deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Height of one line of text in pixels, used by wheel scrolling.
    pub line_height: f32,

    /// Lines scrolled per wheel notch.
    pub lines_per_notch: u32,

    /// Wheel delta reported for a single notch.
    pub notch_units: u32,

    /// Button step while Ctrl is held.
    pub fine_step: u32,

    /// Button step with no modifier held.
    pub normal_step: u32,

    /// Button step while Shift is held.
    pub coarse_step: u32,

    /// Follow growing content while scrolled to the end.
    pub stick_to_end: bool,

    /// Behavior of presses on the track outside the handle.
    pub track_click: TrackClick,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            line_height: 11.0,
            lines_per_notch: 3,
            notch_units: 120,
            fine_step: 1,
            normal_step: 10,
            coarse_step: 100,
            stick_to_end: false,
            track_click: TrackClick::Ignore,
        }
    }
}

impl ScrollbarConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line height used for wheel scrolling.
    pub fn line_height(mut self, pixels: f32) -> Self {
        self.line_height = pixels;
        self
    }

    /// Set how many lines one wheel notch scrolls.
    pub fn lines_per_notch(mut self, lines: u32) -> Self {
        self.lines_per_notch = lines;
        self
    }

    /// Set the button steps for Ctrl, no modifier and Shift.
    pub fn steps(mut self, fine: u32, normal: u32, coarse: u32) -> Self {
        self.fine_step = fine;
        self.normal_step = normal;
        self.coarse_step = coarse;
        self
    }

    /// Keep the view pinned to the end while content grows.
    pub fn stick_to_end(mut self) -> Self {
        self.stick_to_end = true;
        self
    }

    /// Set the track click behavior.
    pub fn track_click(mut self, behavior: TrackClick) -> Self {
        self.track_click = behavior;
        self
    }

    /// Check that the configuration can drive a scrollbar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            return Err(ConfigError::InvalidLineHeight(self.line_height));
        }
        if self.notch_units == 0 {
            return Err(ConfigError::ZeroNotchUnits);
        }
        for (name, step) in [
            ("fine", self.fine_step),
            ("normal", self.normal_step),
            ("coarse", self.coarse_step),
        ] {
            if step == 0 {
                return Err(ConfigError::ZeroStep(name));
            }
        }
        Ok(())
    }
}
