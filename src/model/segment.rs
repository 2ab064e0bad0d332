// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

/// Upper bound (inclusive) of both board axes; the lower bound is 0.
pub const BOARD_MAX: f64 = 4000.0;

/// A location on the board plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        coordinate_in_bounds(self.x) && coordinate_in_bounds(self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub(crate) fn coordinate_in_bounds(value: f64) -> bool {
    // Clamp-compare rather than a range test so the check reads the same as the
    // parser's rejection rule.
    value.is_finite() && value.clamp(0.0, BOARD_MAX) == value
}

/// A colored directed line between two in-bounds points.
///
/// Segments are immutable once constructed; the color is an opaque label that is
/// never validated against a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    color: SmolStr,
}

impl Segment {
    pub fn new(start: Point, end: Point, color: impl Into<SmolStr>) -> Self {
        Self {
            start,
            end,
            color: color.into(),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.start.x, self.start.y, self.end.x, self.end.y, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Segment, BOARD_MAX};

    #[test]
    fn point_bounds_are_inclusive() {
        assert!(Point::new(0.0, 0.0).in_bounds());
        assert!(Point::new(BOARD_MAX, BOARD_MAX).in_bounds());
        assert!(!Point::new(-0.5, 0.0).in_bounds());
        assert!(!Point::new(0.0, BOARD_MAX + 1.0).in_bounds());
        assert!(!Point::new(f64::NAN, 0.0).in_bounds());
    }

    #[test]
    fn segment_display_round_trips_through_the_edge_list_format() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0), "red");
        assert_eq!(segment.to_string(), "0 0 100 100 red");
    }
}
