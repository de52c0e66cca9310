//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! watchface.toml file. It provides a centralized way to configure the
//! display platform (size, shape, color capability) and the face itself
//! (hand colors, hand proportions).

use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::platform::{ColorMode, DisplayShape};

/// Errors produced while turning config values into usable ones.
///
/// The config loader itself falls back to defaults on missing or malformed
/// files (startup must not die on a bad file); these errors cover values
/// that parse as TOML but are unusable, which is a fatal startup condition.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Color string is not of the form "#RRGGBB"
    #[error("invalid color {0:?}: expected \"#RRGGBB\"")]
    ColorParse(String),
}

/// Application configuration loaded from watchface.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Display platform configuration
    pub display: DisplayConfig,
    /// Face styling configuration
    pub face: FaceConfig,
}

/// Display platform configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Display width in pixels
    pub width: u32,
    /// Display height in pixels
    pub height: u32,
    /// Physical shape: "rectangular" or "round"
    pub shape: DisplayShape,
    /// Color capability: "color" or "monochrome"
    pub color_mode: ColorMode,
    /// Force a redraw when the app regains focus (older host compositors
    /// may have discarded the background while unfocused)
    pub legacy_backdrop_repair: bool,
}

/// Face styling configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct FaceConfig {
    /// Hand stroke color as "#RRGGBB"
    pub hand_color: String,
    /// Shadow color as "#RRGGBB", consumed by the compositing pass
    pub shadow_color: String,
    /// Minute hand length as a fraction of the face half-extent
    pub minute_hand_fraction: f32,
    /// How many pixels shorter the hour hand is than the minute hand
    pub hour_hand_margin: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: DisplayConfig {
                width: 180,
                height: 180,
                shape: DisplayShape::Rectangular,
                color_mode: ColorMode::Color,
                legacy_backdrop_repair: false,
            },
            face: FaceConfig {
                hand_color: "#ff0000".to_string(),   // red
                shadow_color: "#ffffff".to_string(), // white
                minute_hand_fraction: 1.0,           // full half-extent
                hour_hand_margin: 20,
            },
        }
    }
}

impl FaceConfig {
    /// Parse the configured hand color.
    pub fn hand_color(&self) -> Result<Rgb888, ConfigError> {
        parse_color(&self.hand_color)
    }

    /// Parse the configured shadow color.
    pub fn shadow_color(&self) -> Result<Rgb888, ConfigError> {
        parse_color(&self.shadow_color)
    }
}

/// Parse a "#RRGGBB" string into an RGB color.
pub fn parse_color(s: &str) -> Result<Rgb888, ConfigError> {
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| ConfigError::ColorParse(s.to_string()))?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ConfigError::ColorParse(s.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ConfigError::ColorParse(s.to_string()))
    };
    Ok(Rgb888::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl Config {
    /// Load configuration from the watchface.toml file.
    /// Falls back to default configuration if file doesn't exist or is invalid.
    pub fn load() -> Self {
        Self::load_from_path("watchface.toml")
    }

    /// Load configuration from specified path.
    /// Falls back to default configuration if file doesn't exist or is invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    println!(
                        "Loaded configuration: {}x{} {:?} {:?} display",
                        config.display.width,
                        config.display.height,
                        config.display.shape,
                        config.display.color_mode
                    );
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration (180x180 rectangular color)");
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!(
                    "Info: No config file found, using default configuration (180x180 rectangular color)"
                );
                Self::default()
            }
        }
    }

    /// Save current configuration to watchface.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("watchface.toml", contents)?;
        println!("Configuration saved to watchface.toml");
        Ok(())
    }
}
