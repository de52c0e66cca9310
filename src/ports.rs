//! # Host Ports
//!
//! Traits standing in for the services the host environment provides: a
//! wall clock, a display surface that can be invalidated, and the external
//! shadow/blur compositing pass. Production code wires the real
//! implementations; tests substitute fakes to drive the face
//! deterministically.

use chrono::{Local, Timelike};
use embedded_graphics::pixelcolor::Rgb888;

use crate::{ClockTime, FaceGeometry, ShadowOffset};

/// On-demand wall-clock source.
pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// The drawing surface as the core sees it: something with bounds that can
/// be marked dirty to schedule a future redraw.
pub trait Surface {
    /// Current surface bounds, queried once per redraw for layout.
    fn bounds(&self) -> FaceGeometry;

    /// Invalidate the whole surface; the host delivers a redraw later.
    fn mark_dirty(&mut self);
}

/// The external shadow/blur compositing pass.
///
/// The core's only obligation is to feed it the current offset and the two
/// stable colors; the per-pixel work happens on the other side of this
/// trait.
pub trait EffectPass {
    fn composite(&mut self, offset: ShadowOffset, hand_color: Rgb888, shadow_color: Rgb888);
}

/// [`TimeSource`] backed by the system clock in local time.
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> ClockTime {
        let now = Local::now();
        ClockTime {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_returns_valid_fields() {
        let t = SystemClock.now();
        assert!(t.hour < 24);
        assert!(t.minute < 60);
    }
}
