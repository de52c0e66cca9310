//! # Hand Geometry Engine
//!
//! Pure trigonometry: given a clock reading and the face geometry, produce
//! the minute and hour hands as line segments from the face center. Angles
//! are measured clockwise from 12 o'clock and converted to screen
//! coordinates with the y axis growing downward.
//!
//! The hour hand deliberately moves in 10-minute steps rather than
//! continuously: its angle is a function of `(hour % 12) * 6 + minute / 10`
//! over 72 positions, reproducing the coarse sweep of the original face.

use std::f32::consts::TAU;

use embedded_graphics::prelude::Point;

use crate::{ClockTime, FaceGeometry, HandKind, HandSegment};

/// Angle of the minute hand in radians, clockwise from 12 o'clock.
pub fn minute_angle(minute: u8) -> f32 {
    TAU * f32::from(minute) / 60.0
}

/// Angle of the hour hand in radians, clockwise from 12 o'clock.
///
/// Integer division by 10 is intentional: the hand advances once every ten
/// minutes, six positions per hour, 72 positions per revolution.
pub fn hour_angle(hour: u8, minute: u8) -> f32 {
    let position = i32::from(hour % 12) * 6 + i32::from(minute) / 10;
    TAU * position as f32 / 72.0
}

/// Tip of a hand of the given length at the given angle.
///
/// Standard polar-to-cartesian conversion around the center, with the y
/// axis inverted for screen coordinates.
pub fn hand_endpoint(center: Point, length: f32, angle: f32) -> Point {
    Point::new(
        center.x + (length * angle.sin()).round() as i32,
        center.y - (length * angle.cos()).round() as i32,
    )
}

/// Resolved pixel lengths of the two hands for one redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLengths {
    pub minute: f32,
    pub hour: f32,
}

impl HandLengths {
    /// Derive hand lengths from the face geometry: the minute hand spans a
    /// fraction of the half-extent, the hour hand is strictly shorter by a
    /// fixed pixel margin.
    pub fn for_face(geometry: &FaceGeometry, minute_fraction: f32, hour_margin: u32) -> Self {
        let minute = geometry.half_extent() as f32 * minute_fraction;
        HandLengths {
            minute,
            hour: (minute - hour_margin as f32).max(0.0),
        }
    }
}

/// Compute both hand segments for the given time.
///
/// Total over all well-formed inputs; no side effects. Drawing (stroke
/// widths, center cap) is the renderer's concern.
pub fn compute_hands(
    time: ClockTime,
    geometry: &FaceGeometry,
    lengths: HandLengths,
) -> [HandSegment; 2] {
    let center = geometry.center;
    [
        HandSegment {
            origin: center,
            endpoint: hand_endpoint(center, lengths.minute, minute_angle(time.minute)),
            kind: HandKind::Minute,
        },
        HandSegment {
            origin: center,
            endpoint: hand_endpoint(center, lengths.hour, hour_angle(time.hour, time.minute)),
            kind: HandKind::Hour,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::Size;

    const EPS: f32 = 1e-5;

    #[test]
    fn minute_angle_matches_formula() {
        for m in 0..60u8 {
            let expected = TAU * m as f32 / 60.0;
            assert!((minute_angle(m) - expected).abs() < EPS, "minute {}", m);
        }
        assert!((minute_angle(0) - 0.0).abs() < EPS);
        assert!((minute_angle(15) - TAU / 4.0).abs() < EPS);
        assert!((minute_angle(30) - TAU / 2.0).abs() < EPS);
    }

    #[test]
    fn hour_angle_steps_every_ten_minutes() {
        // Within one 10-minute bucket the hour hand does not move
        for m in 0..10u8 {
            assert_eq!(hour_angle(3, m).to_bits(), hour_angle(3, 0).to_bits());
        }
        // At minute 10 it advances by exactly one of 72 positions
        let step = TAU / 72.0;
        assert!((hour_angle(3, 10) - hour_angle(3, 0) - step).abs() < EPS);
        assert!((hour_angle(3, 59) - hour_angle(3, 0) - 5.0 * step).abs() < EPS);
    }

    #[test]
    fn hour_angle_wraps_at_twelve() {
        assert!((hour_angle(12, 0) - hour_angle(0, 0)).abs() < EPS);
        assert!((hour_angle(23, 0) - hour_angle(11, 0)).abs() < EPS);
    }

    #[test]
    fn endpoint_cardinal_directions() {
        let center = Point::new(90, 90);
        // 12 o'clock: straight up
        assert_eq!(hand_endpoint(center, 90.0, minute_angle(0)), Point::new(90, 0));
        // 3 o'clock: straight right
        assert_eq!(
            hand_endpoint(center, 90.0, minute_angle(15)),
            Point::new(180, 90)
        );
        // 6 o'clock: straight down
        assert_eq!(
            hand_endpoint(center, 90.0, minute_angle(30)),
            Point::new(90, 180)
        );
        // 9 o'clock: straight left
        assert_eq!(
            hand_endpoint(center, 90.0, minute_angle(45)),
            Point::new(0, 90)
        );
    }

    #[test]
    fn ten_oh_five_scenario() {
        // 10:05 on a 180x180 face: minute hand at 30 degrees, hour hand at
        // 300 degrees (position 60 of 72).
        let geometry = FaceGeometry::from_size(Size::new(180, 180));
        let time = ClockTime { hour: 10, minute: 5 };

        let min_angle = minute_angle(time.minute);
        assert!((min_angle - TAU / 12.0).abs() < EPS); // 30 degrees

        let hr_angle = hour_angle(time.hour, time.minute);
        assert!((hr_angle - TAU * 60.0 / 72.0).abs() < EPS); // 300 degrees

        let minute_tip = hand_endpoint(geometry.center, 90.0, min_angle);
        assert!((minute_tip.x - 135).abs() <= 1, "minute tip x {}", minute_tip.x);
        assert!((minute_tip.y - 12).abs() <= 1, "minute tip y {}", minute_tip.y);

        // x = 90 + 65*sin(300deg) = 33.7, y = 90 - 65*cos(300deg) = 57.5
        let hour_tip = hand_endpoint(geometry.center, 65.0, hr_angle);
        assert!((hour_tip.x - 34).abs() <= 1, "hour tip x {}", hour_tip.x);
        assert!((hour_tip.y - 58).abs() <= 1, "hour tip y {}", hour_tip.y);
    }

    #[test]
    fn endpoints_stay_within_bounds() {
        // Any hand no longer than the half-extent lands inside the face,
        // for every minute and every hour position.
        let geometry = FaceGeometry::from_size(Size::new(180, 180));
        let lengths = HandLengths::for_face(&geometry, 1.0, 20);
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let time = ClockTime { hour, minute };
                for segment in compute_hands(time, &geometry, lengths) {
                    assert!(
                        segment.endpoint.x >= 0
                            && segment.endpoint.x <= 180
                            && segment.endpoint.y >= 0
                            && segment.endpoint.y <= 180,
                        "endpoint {:?} out of bounds at {:02}:{:02}",
                        segment.endpoint,
                        hour,
                        minute
                    );
                }
            }
        }
    }

    #[test]
    fn hand_lengths_respect_margin() {
        let geometry = FaceGeometry::from_size(Size::new(180, 180));
        let lengths = HandLengths::for_face(&geometry, 1.0, 20);
        assert!((lengths.minute - 90.0).abs() < EPS);
        assert!((lengths.hour - 70.0).abs() < EPS);

        // Margin larger than the hand clamps to zero instead of going negative
        let tiny = FaceGeometry::from_size(Size::new(20, 20));
        let clamped = HandLengths::for_face(&tiny, 1.0, 30);
        assert_eq!(clamped.hour, 0.0);
    }

    #[test]
    fn compute_hands_origin_is_center() {
        let geometry = FaceGeometry::from_size(Size::new(144, 168));
        let lengths = HandLengths::for_face(&geometry, 1.0, 20);
        let [minute, hour] = compute_hands(ClockTime { hour: 7, minute: 42 }, &geometry, lengths);
        assert_eq!(minute.origin, geometry.center);
        assert_eq!(hour.origin, geometry.center);
        assert_eq!(minute.kind, HandKind::Minute);
        assert_eq!(hour.kind, HandKind::Hour);
    }
}
