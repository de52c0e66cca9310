//! # Shadow Watchface Core Library
//!
//! This library implements an analog watchface with a simulated drop shadow:
//! a minute hand and an hour hand are recomputed once per minute, and a
//! shadow offset vector steps through the four diagonal quadrants as the
//! minute hand sweeps the face. The offset is consumed by an external
//! shadow/blur compositing pass; this crate's job is to keep the hand
//! geometry and the offset current.
//!
//! ## Design Philosophy
//!
//! ### Host independence
//! The original watchface was welded to a vendor windowing SDK. Here every
//! host service is a port (see [`ports`]): a wall-clock source, a surface
//! that can report its bounds and be marked dirty, and the compositing
//! pass itself. Production wires real implementations; tests wire fakes
//! and drive the whole face deterministically.
//!
//! ### Single-writer state
//! All mutable state (shadow offset, quadrant, scratch buffer) lives in one
//! explicitly-owned [`watchface::Watchface`] value. The minute-tick handler
//! is its only writer; the redraw path only reads. Everything runs on one
//! thread, so the ordering guarantee is simply that a tick completes before
//! the redraw it requested begins.
//!
//! ### Platform capabilities as data
//! Color vs monochrome, rectangular vs round, and the legacy
//! restore-after-focus quirk are compile-time switches in the original.
//! They are runtime configuration here ([`platform::PlatformCaps`]), so one
//! binary expresses every variant and the tests cover each combination.
//!
//! ## Core Types
//!
//! The library root exports the small value types shared by all modules:
//! - [`ClockTime`]: an hour/minute snapshot of the wall clock
//! - [`FaceGeometry`]: center point and bounding size of the face
//! - [`HandSegment`]: one clock hand as a line segment, rebuilt per redraw
//! - [`ShadowOffset`]: the diagonal offset fed to the compositing pass

use embedded_graphics::prelude::{Point, Size};
use serde::{Deserialize, Serialize};

// Module declarations
pub mod config;
pub mod hands;
pub mod platform;
pub mod ports;
pub mod renderer;
pub mod shadow;
pub mod watchface;

/// A wall-clock snapshot at minute granularity.
///
/// The host clock is read once per minute tick and once per redraw; each
/// reading is an immutable value, never updated in place.
///
/// # Example
/// ```
/// use watchface_lib::ClockTime;
///
/// let t = ClockTime { hour: 10, minute: 5 };
/// assert_eq!(t.hour % 12, 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    /// Hour of day, 0-23
    pub hour: u8,
    /// Minute of hour, 0-59
    pub minute: u8,
}

/// Face layout derived from the display surface bounds.
///
/// Recomputed from the surface on every redraw; the center is the pivot of
/// both hands and the anchor of the round-display center cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceGeometry {
    /// Pivot point of both hands (screen coordinates, y grows downward)
    pub center: Point,
    /// Bounding size of the drawing surface
    pub size: Size,
}

impl FaceGeometry {
    /// Build the face geometry for a surface of the given size, centering
    /// the face in the bounding box.
    pub fn from_size(size: Size) -> Self {
        FaceGeometry {
            center: Point::new(size.width as i32 / 2, size.height as i32 / 2),
            size,
        }
    }

    /// Half of the smaller bounding dimension; the longest hand that is
    /// guaranteed to stay on the face.
    pub fn half_extent(&self) -> u32 {
        self.size.width.min(self.size.height) / 2
    }

    /// Whether a point lies inside the bounding box.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.size.width && (p.y as u32) < self.size.height
    }
}

/// Which hand a segment represents. Selects stroke width on color displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandKind {
    Minute,
    Hour,
}

/// One clock hand as a line segment from the face center.
///
/// Two of these are created fresh on every redraw and discarded after
/// drawing; they carry no persistent identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandSegment {
    /// Always the face center
    pub origin: Point,
    /// Tip of the hand
    pub endpoint: Point,
    pub kind: HandKind,
}

/// The shadow displacement vector consumed by the compositing pass.
///
/// Invariant: `|dx| == |dy| ==` the platform shadow length, so the vector
/// always points into one of the four diagonal quadrants and is never
/// `(0, 0)`. Constructed only by [`shadow::Quadrant::offset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowOffset {
    /// Horizontal displacement in pixels (positive = right)
    pub dx: i32,
    /// Vertical displacement in pixels (positive = down)
    pub dy: i32,
}
