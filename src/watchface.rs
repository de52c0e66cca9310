//! # Watchface State and Event Handling
//!
//! One owned struct holds everything the original kept in globals: the
//! shadow offset, the two stable colors, the platform capabilities, and
//! (on monochrome panels) the pixel-visited scratch buffer. The minute-tick
//! handler is the only writer; the redraw path derives hand geometry from
//! current state without mutating it, so redrawing twice between ticks
//! yields identical output.

use thiserror::Error;

use embedded_graphics::pixelcolor::Rgb888;

use crate::config::{Config, ConfigError};
use crate::hands::{self, HandLengths};
use crate::platform::PlatformCaps;
use crate::ports::{EffectPass, Surface};
use crate::shadow::{Quadrant, ShadowError, ShadowScratch};
use crate::{ClockTime, FaceGeometry, HandSegment, ShadowOffset};

/// Failures while assembling the watchface at startup. All fatal: the face
/// cannot run with unusable colors or without its scratch buffer.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Shadow(#[from] ShadowError),
}

/// The complete watchface state.
pub struct Watchface {
    caps: PlatformCaps,
    hand_color: Rgb888,
    shadow_color: Rgb888,
    minute_hand_fraction: f32,
    hour_hand_margin: u32,
    quadrant: Quadrant,
    offset: ShadowOffset,
    scratch: Option<ShadowScratch>,
}

impl Watchface {
    /// Build the watchface from configuration: parse the colors, resolve
    /// platform capabilities, and allocate the scratch buffer on
    /// monochrome platforms.
    ///
    /// The offset starts in Q1; the first minute tick re-derives it from
    /// the actual wall clock before anything is composited.
    pub fn from_config(config: &Config) -> Result<Self, SetupError> {
        let caps = PlatformCaps::from_config(&config.display);
        let scratch = if caps.uses_scratch() {
            Some(ShadowScratch::new(
                config.display.width,
                config.display.height,
            )?)
        } else {
            None
        };
        let quadrant = Quadrant::Q1;
        Ok(Watchface {
            caps,
            hand_color: config.face.hand_color()?,
            shadow_color: config.face.shadow_color()?,
            minute_hand_fraction: config.face.minute_hand_fraction,
            hour_hand_margin: config.face.hour_hand_margin,
            quadrant,
            offset: quadrant.offset(caps.shadow_length()),
            scratch,
        })
    }

    /// Minute-tick handler. Re-derives the shadow quadrant from the current
    /// minute, resets the scratch buffer, and invalidates the surface
    /// exactly once so the next redraw picks up the new offset.
    ///
    /// Never called from the redraw path; offset updates and compositing
    /// stay decoupled.
    pub fn handle_tick<S: Surface>(&mut self, time: ClockTime, surface: &mut S) {
        self.quadrant = Quadrant::for_minute(time.minute);
        self.offset = self.quadrant.offset(self.caps.shadow_length());
        if let Some(scratch) = &mut self.scratch {
            scratch.clear();
        }
        surface.mark_dirty();
    }

    /// Focus-resume handler. On legacy hosts the compositor may have
    /// discarded the background while the app was hidden; force a redraw
    /// there, do nothing elsewhere. The event carries no data.
    pub fn handle_focus_resume<S: Surface>(&mut self, surface: &mut S) {
        if self.caps.legacy_backdrop_repair {
            surface.mark_dirty();
        }
    }

    /// Redraw-path geometry: both hand segments for the given time and
    /// surface bounds. Pure with respect to the watchface state.
    pub fn hands(&self, time: ClockTime, geometry: &FaceGeometry) -> [HandSegment; 2] {
        let lengths =
            HandLengths::for_face(geometry, self.minute_hand_fraction, self.hour_hand_margin);
        hands::compute_hands(time, geometry, lengths)
    }

    /// Hand the current offset and colors to the compositing pass.
    pub fn run_effect<E: EffectPass>(&self, effect: &mut E) {
        effect.composite(self.offset, self.hand_color, self.shadow_color);
    }

    pub fn caps(&self) -> PlatformCaps {
        self.caps
    }

    pub fn offset(&self) -> ShadowOffset {
        self.offset
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    pub fn hand_color(&self) -> Rgb888 {
        self.hand_color
    }

    pub fn shadow_color(&self) -> Rgb888 {
        self.shadow_color
    }

    /// Scratch buffer access for the compositing side (monochrome only).
    pub fn scratch_mut(&mut self) -> Option<&mut ShadowScratch> {
        self.scratch.as_mut()
    }
}
