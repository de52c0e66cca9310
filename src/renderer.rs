//! # Face Rendering
//!
//! Two rendering paths, mirroring production vs development:
//!
//! - [`draw_face`] strokes the hand segments onto any
//!   `embedded-graphics` draw target, with capability-driven stroke widths
//!   and the round-display center cap.
//! - [`draw_ascii`] renders the face as a character grid for terminal
//!   development mode, including a crude stand-in for the shadow pass so
//!   the offset state is visible without device hardware.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
};

use crate::platform::{PlatformCaps, CENTER_CAP_DIAMETER};
use crate::shadow::ShadowScratch;
use crate::{FaceGeometry, HandKind, HandSegment, ShadowOffset};

/// Stroke the hand segments onto a draw target.
///
/// Stroke widths come from the platform capabilities; on round displays a
/// filled cap covers the hand pivot. Draw errors are swallowed, matching
/// the fire-and-forget contract of a per-frame paint callback.
pub fn draw_face<D: DrawTarget<Color = Rgb888>>(
    display: &mut D,
    segments: &[HandSegment; 2],
    geometry: &FaceGeometry,
    caps: PlatformCaps,
    hand_color: Rgb888,
) {
    for segment in segments {
        let width = match segment.kind {
            HandKind::Minute => caps.minute_stroke(),
            HandKind::Hour => caps.hour_stroke(),
        };
        Line::new(segment.origin, segment.endpoint)
            .into_styled(PrimitiveStyle::with_stroke(hand_color, width))
            .draw(display)
            .ok();
    }

    if caps.draws_center_cap() {
        Circle::with_center(geometry.center, CENTER_CAP_DIAMETER)
            .into_styled(PrimitiveStyle::with_fill(hand_color))
            .draw(display)
            .ok();
    }
}

/// Render the face into a character grid.
///
/// The shadow hands are plotted first (displaced by the offset, scaled way
/// down for character cells), then the real hands over them, then the
/// pivot. On monochrome configurations the scratch buffer suppresses
/// double-painting where the two shadow strokes overlap, the same
/// bookkeeping the device compositing pass relies on.
pub fn render_ascii_grid(
    segments: &[HandSegment; 2],
    geometry: &FaceGeometry,
    offset: ShadowOffset,
    mut scratch: Option<&mut ShadowScratch>,
) -> Vec<String> {
    let cols = geometry.size.width as usize;
    let rows = geometry.size.height as usize;
    let mut grid = vec![vec![' '; cols]; rows];

    // Character cells are far coarser than pixels; keep only the direction
    // of the offset, two columns by one row.
    let shadow_step = Point::new(offset.dx.signum() * 2, offset.dy.signum());

    for segment in segments {
        plot_line(
            segment.origin + shadow_step,
            segment.endpoint + shadow_step,
            |x, y| {
                if let Some(scratch) = scratch.as_deref_mut() {
                    if !scratch.mark(x, y) {
                        return; // already darkened this minute
                    }
                }
                if let Some(cell) = cell_mut(&mut grid, x, y) {
                    if *cell == ' ' {
                        *cell = '.';
                    }
                }
            },
        );
    }

    for segment in segments {
        let glyph = match segment.kind {
            HandKind::Minute => '*',
            HandKind::Hour => '#',
        };
        plot_line(segment.origin, segment.endpoint, |x, y| {
            if let Some(cell) = cell_mut(&mut grid, x, y) {
                *cell = glyph;
            }
        });
    }

    if let Some(cell) = cell_mut(&mut grid, geometry.center.x, geometry.center.y) {
        *cell = 'O';
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Render the face to stdout (development mode).
pub fn draw_ascii(
    segments: &[HandSegment; 2],
    geometry: &FaceGeometry,
    offset: ShadowOffset,
    scratch: Option<&mut ShadowScratch>,
) {
    for row in render_ascii_grid(segments, geometry, offset, scratch) {
        println!("{}", row);
    }
}

fn cell_mut(grid: &mut [Vec<char>], x: i32, y: i32) -> Option<&mut char> {
    if x < 0 || y < 0 {
        return None;
    }
    grid.get_mut(y as usize)?.get_mut(x as usize)
}

/// Bresenham line walk, visiting every cell from `a` to `b` inclusive.
fn plot_line(a: Point, b: Point, mut plot: impl FnMut(i32, i32)) {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (a.x, a.y);
    loop {
        plot(x, y);
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
