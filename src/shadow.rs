//! # Shadow Direction Selector
//!
//! The simulated light source circles the face once per hour in four
//! discrete steps: the shadow offset points into one diagonal quadrant per
//! quarter hour. The mapping is a pure function of the current minute, so
//! the "state machine" is stateless re-derivation rather than stored
//! history.
//!
//! Interval boundaries are half-open `[lo, hi)`: minute 0 selects Q1,
//! minute 15 selects Q2, minute 30 selects Q3, minute 45 selects Q4. The
//! original left the exact boundary minutes undefined; this implementation
//! pins them.
//!
//! Monochrome panels additionally need a per-pixel scratch buffer: the
//! compositing pass darkens shadow pixels in place, and overlapping strokes
//! must not be darkened twice. [`ShadowScratch`] tracks which pixels have
//! been painted since the last minute tick.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::ShadowOffset;

/// Shadow allocation failures. The selector cannot do its per-pixel
/// bookkeeping without the scratch buffer, so startup treats this as fatal.
#[derive(Error, Debug)]
pub enum ShadowError {
    #[error("scratch buffer allocation failed: {0}")]
    ScratchAlloc(#[from] TryReserveError),
}

/// The four diagonal quadrants the shadow can be cast into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// Minutes [0, 15): shadow down-right
    Q1,
    /// Minutes [15, 30): shadow down-left
    Q2,
    /// Minutes [30, 45): shadow up-left
    Q3,
    /// Minutes [45, 60): shadow up-right
    Q4,
}

impl Quadrant {
    /// Quarter-hour bucket for the given minute.
    pub fn for_minute(minute: u8) -> Self {
        match minute {
            0..=14 => Quadrant::Q1,
            15..=29 => Quadrant::Q2,
            30..=44 => Quadrant::Q3,
            _ => Quadrant::Q4,
        }
    }

    /// The offset vector for this quadrant with the given magnitude per
    /// component. Both components are always exactly `±length`.
    pub fn offset(self, length: i32) -> ShadowOffset {
        let (dx, dy) = match self {
            Quadrant::Q1 => (length, length),
            Quadrant::Q2 => (-length, length),
            Quadrant::Q3 => (-length, -length),
            Quadrant::Q4 => (length, -length),
        };
        ShadowOffset { dx, dy }
    }
}

/// Tracks which pixels the shadow pass has already painted during the
/// current minute, one bit per pixel.
///
/// Allocated once at startup (sized to the full display), cleared at the
/// start of every minute tick, and only ever touched synchronously from
/// tick handling and the compositing pass.
pub struct ShadowScratch {
    width: u32,
    height: u32,
    row_bytes: usize,
    bits: Vec<u8>,
}

impl ShadowScratch {
    /// Allocate a zeroed scratch buffer covering a `width` x `height`
    /// display. Allocation failure is reported rather than aborting so the
    /// caller can fail startup with context.
    pub fn new(width: u32, height: u32) -> Result<Self, ShadowError> {
        let row_bytes = (width as usize).div_ceil(8);
        let len = row_bytes * height as usize;
        let mut bits = Vec::new();
        bits.try_reserve_exact(len)?;
        bits.resize(len, 0);
        Ok(ShadowScratch {
            width,
            height,
            row_bytes,
            bits,
        })
    }

    /// Zero every bit. Called at the start of each minute tick.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Record a painted pixel. Returns `true` if the pixel had not been
    /// painted since the last clear, `false` on repeat visits or for
    /// coordinates off the display.
    pub fn mark(&mut self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        let byte = y as usize * self.row_bytes + x as usize / 8;
        let bit = 1u8 << (x as usize % 8);
        let fresh = self.bits[byte] & bit == 0;
        self.bits[byte] |= bit;
        fresh
    }

    /// Whether any pixel is currently marked.
    pub fn is_clear(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_table_at_boundaries() {
        // Exact boundary minutes, per the half-open [lo, hi) convention
        assert_eq!(Quadrant::for_minute(0), Quadrant::Q1);
        assert_eq!(Quadrant::for_minute(14), Quadrant::Q1);
        assert_eq!(Quadrant::for_minute(15), Quadrant::Q2);
        assert_eq!(Quadrant::for_minute(29), Quadrant::Q2);
        assert_eq!(Quadrant::for_minute(30), Quadrant::Q3);
        assert_eq!(Quadrant::for_minute(44), Quadrant::Q3);
        assert_eq!(Quadrant::for_minute(45), Quadrant::Q4);
        assert_eq!(Quadrant::for_minute(59), Quadrant::Q4);
    }

    #[test]
    fn offset_signs_match_quadrants() {
        assert_eq!(Quadrant::Q1.offset(120), ShadowOffset { dx: 120, dy: 120 });
        assert_eq!(Quadrant::Q2.offset(120), ShadowOffset { dx: -120, dy: 120 });
        assert_eq!(
            Quadrant::Q3.offset(120),
            ShadowOffset { dx: -120, dy: -120 }
        );
        assert_eq!(Quadrant::Q4.offset(120), ShadowOffset { dx: 120, dy: -120 });
    }

    #[test]
    fn offset_magnitude_invariant_for_all_minutes() {
        // |dx| == |dy| == length and never (0, 0), for every minute
        for m in 0..60u8 {
            let offset = Quadrant::for_minute(m).offset(90);
            assert_eq!(offset.dx.abs(), 90, "minute {}", m);
            assert_eq!(offset.dy.abs(), 90, "minute {}", m);
        }
    }

    #[test]
    fn scratch_marks_once_per_pixel() {
        let mut scratch = ShadowScratch::new(16, 16).unwrap();
        assert!(scratch.mark(3, 7));
        assert!(!scratch.mark(3, 7), "second visit must report already painted");
        assert!(scratch.mark(4, 7));
    }

    #[test]
    fn scratch_clear_resets_all_pixels() {
        let mut scratch = ShadowScratch::new(32, 8).unwrap();
        for x in 0..32 {
            scratch.mark(x, 3);
        }
        assert!(!scratch.is_clear());
        scratch.clear();
        assert!(scratch.is_clear());
        assert!(scratch.mark(0, 3));
    }

    #[test]
    fn scratch_rejects_out_of_range() {
        let mut scratch = ShadowScratch::new(8, 8).unwrap();
        assert!(!scratch.mark(-1, 0));
        assert!(!scratch.mark(8, 0));
        assert!(!scratch.mark(0, 8));
        assert!(scratch.is_clear());
    }

    #[test]
    fn scratch_covers_non_byte_aligned_widths() {
        let mut scratch = ShadowScratch::new(13, 4).unwrap();
        for y in 0..4 {
            for x in 0..13 {
                assert!(scratch.mark(x, y), "pixel ({}, {})", x, y);
            }
        }
        assert!(!scratch.mark(12, 3));
    }
}
