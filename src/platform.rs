//! # Platform Capabilities
//!
//! The original watchface selected shadow length, hand widths, the center
//! cap, and a restore-after-focus hook with build-time platform switches.
//! This module models those switches as a plain configuration value resolved
//! once at startup, so every variant is expressible (and testable) in a
//! single binary.

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;

/// Shadow displacement magnitude on rectangular displays, in pixels.
pub const SHADOW_LENGTH_RECTANGULAR: i32 = 120;

/// Shadow displacement magnitude on round displays, in pixels. Shorter so
/// the shadow stays on the visible face.
pub const SHADOW_LENGTH_ROUND: i32 = 90;

/// Diameter of the filled center cap drawn on round displays.
pub const CENTER_CAP_DIAMETER: u32 = 7;

/// Display color capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Full color panel: hands get distinct stroke widths
    Color,
    /// 1-bit panel: uniform thin strokes, shadow pass needs the
    /// pixel-visited scratch buffer to avoid double-darkening
    Monochrome,
}

/// Physical display shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayShape {
    Rectangular,
    Round,
}

/// Capability flags resolved once at startup and passed by value into the
/// geometry and shadow components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformCaps {
    pub color_mode: ColorMode,
    pub shape: DisplayShape,
    /// Older host compositors may discard the window background while the
    /// app is unfocused; when set, a focus-resume event forces a redraw.
    pub legacy_backdrop_repair: bool,
}

impl PlatformCaps {
    /// Resolve capabilities from the display section of the config file.
    pub fn from_config(display: &DisplayConfig) -> Self {
        PlatformCaps {
            color_mode: display.color_mode,
            shape: display.shape,
            legacy_backdrop_repair: display.legacy_backdrop_repair,
        }
    }

    /// Magnitude of both shadow offset components for this platform.
    pub fn shadow_length(&self) -> i32 {
        match self.shape {
            DisplayShape::Rectangular => SHADOW_LENGTH_RECTANGULAR,
            DisplayShape::Round => SHADOW_LENGTH_ROUND,
        }
    }

    /// Stroke width of the minute hand in pixels.
    pub fn minute_stroke(&self) -> u32 {
        match self.color_mode {
            ColorMode::Color => 2,
            ColorMode::Monochrome => 1,
        }
    }

    /// Stroke width of the hour hand in pixels. Noticeably heavier than the
    /// minute hand on color panels, uniform on monochrome.
    pub fn hour_stroke(&self) -> u32 {
        match self.color_mode {
            ColorMode::Color => 6,
            ColorMode::Monochrome => 1,
        }
    }

    /// Round faces get a filled cap over the hand pivot.
    pub fn draws_center_cap(&self) -> bool {
        self.shape == DisplayShape::Round
    }

    /// Whether the per-pixel shadow-paint scratch buffer is needed.
    pub fn uses_scratch(&self) -> bool {
        self.color_mode == ColorMode::Monochrome
    }
}
