// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Edge-list parsing.
//!
//! One segment per non-blank line, `x1 y1 x2 y2 COLOR`. Parsing a batch is
//! all-or-nothing: the first violation aborts the whole batch and reports the
//! 1-based line number of the offending line.

use std::fmt;

use smallvec::SmallVec;

use crate::model::{segment::coordinate_in_bounds, Point, Segment, BOARD_MAX};

const FIELDS_PER_LINE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum EdgeParseError {
    MissingFields {
        line_no: usize,
        found: usize,
    },
    InvalidCoordinate {
        line_no: usize,
        token: String,
    },
    OutOfBounds {
        line_no: usize,
        value: f64,
    },
}

impl EdgeParseError {
    pub fn line_no(&self) -> usize {
        match self {
            Self::MissingFields { line_no, .. }
            | Self::InvalidCoordinate { line_no, .. }
            | Self::OutOfBounds { line_no, .. } => *line_no,
        }
    }
}

impl fmt::Display for EdgeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { line_no, found } => write!(
                f,
                "malformed line {line_no}: expected 'x1 y1 x2 y2 COLOR' (found {found} of {FIELDS_PER_LINE} fields)"
            ),
            Self::InvalidCoordinate { line_no, token } => {
                write!(f, "non-numeric coordinate on line {line_no}: {token:?}")
            }
            Self::OutOfBounds { line_no, value } => write!(
                f,
                "coordinate out of bounds on line {line_no}: {value} (expected 0..={BOARD_MAX})"
            ),
        }
    }
}

impl std::error::Error for EdgeParseError {}

/// Parses a multi-line edge list into segments.
///
/// Blank lines are skipped but still count toward the reported line numbers.
/// Empty input is a successful empty batch. Tokens past the fifth are ignored.
pub fn parse_edge_list(input: &str) -> Result<Vec<Segment>, EdgeParseError> {
    let mut segments = Vec::new();

    for (index, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let line_no = index + 1;
        segments.push(parse_edge_line(line, line_no)?);
    }

    Ok(segments)
}

fn parse_edge_line(line: &str, line_no: usize) -> Result<Segment, EdgeParseError> {
    let fields: SmallVec<[&str; FIELDS_PER_LINE]> =
        line.split_whitespace().take(FIELDS_PER_LINE).collect();
    if fields.len() < FIELDS_PER_LINE {
        return Err(EdgeParseError::MissingFields {
            line_no,
            found: fields.len(),
        });
    }

    let x1 = parse_coordinate(fields[0], line_no)?;
    let y1 = parse_coordinate(fields[1], line_no)?;
    let x2 = parse_coordinate(fields[2], line_no)?;
    let y2 = parse_coordinate(fields[3], line_no)?;

    Ok(Segment::new(Point::new(x1, y1), Point::new(x2, y2), fields[4]))
}

fn parse_coordinate(token: &str, line_no: usize) -> Result<f64, EdgeParseError> {
    let value: f64 = token.parse().map_err(|_| EdgeParseError::InvalidCoordinate {
        line_no,
        token: token.to_owned(),
    })?;

    // `NaN`/`inf` parse as f64 but are not usable coordinates.
    if !value.is_finite() {
        return Err(EdgeParseError::InvalidCoordinate {
            line_no,
            token: token.to_owned(),
        });
    }

    // Clamping is only the detection mechanism: an out-of-range literal is
    // rejected, never silently pulled back onto the board.
    if !coordinate_in_bounds(value) {
        return Err(EdgeParseError::OutOfBounds { line_no, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_edge_list, EdgeParseError};
    use crate::model::Point;

    #[test]
    fn parses_a_single_edge() {
        let segments = parse_edge_list("0 0 100 100 red").expect("parse");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start(), Point::new(0.0, 0.0));
        assert_eq!(segments[0].end(), Point::new(100.0, 100.0));
        assert_eq!(segments[0].color(), "red");
    }

    #[test]
    fn parses_lines_in_order() {
        let segments = parse_edge_list("0 0 1 1 red\n2 2 3 3 green\n4 4 5 5 blue")
            .expect("parse");
        let colors: Vec<_> = segments.iter().map(|s| s.color().to_owned()).collect();
        assert_eq!(colors, ["red", "green", "blue"]);
    }

    #[test]
    fn empty_input_is_an_empty_batch() {
        assert_eq!(parse_edge_list(""), Ok(Vec::new()));
        assert_eq!(parse_edge_list("\n  \n\t\n"), Ok(Vec::new()));
    }

    #[test]
    fn blank_lines_are_skipped_but_keep_line_numbering() {
        let segments = parse_edge_list("0 0 1 1 red\n\n2 2 3 3 green").expect("parse");
        assert_eq!(segments.len(), 2);

        let err = parse_edge_list("0 0 1 1 red\n\n2 2 3 oops green").unwrap_err();
        assert_eq!(err.line_no(), 3);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let segments = parse_edge_list("   10 20 30 40 cyan   ").expect("parse");
        assert_eq!(segments[0].start(), Point::new(10.0, 20.0));
    }

    #[rstest]
    #[case("0 0 100 100", 4)]
    #[case("0", 1)]
    #[case("0 0 100", 3)]
    fn fewer_than_five_fields_is_malformed(#[case] line: &str, #[case] found: usize) {
        assert_eq!(
            parse_edge_list(line),
            Err(EdgeParseError::MissingFields { line_no: 1, found })
        );
    }

    #[test]
    fn tokens_past_the_fifth_are_ignored() {
        let segments = parse_edge_list("0 0 1 1 red ignored trailing").expect("parse");
        assert_eq!(segments[0].color(), "red");
    }

    #[rstest]
    #[case("0 0 abc 100 red", "abc")]
    #[case("0 0 NaN 100 red", "NaN")]
    #[case("inf 0 1 1 red", "inf")]
    fn non_numeric_coordinates_are_rejected(#[case] line: &str, #[case] token: &str) {
        assert_eq!(
            parse_edge_list(line),
            Err(EdgeParseError::InvalidCoordinate {
                line_no: 1,
                token: token.to_owned()
            })
        );
    }

    #[rstest]
    #[case("0 0 5000 100 red", 5000.0)]
    #[case("-1 0 100 100 red", -1.0)]
    #[case("0 0 100 4000.5 red", 4000.5)]
    fn out_of_range_literals_are_rejected_not_clamped(#[case] line: &str, #[case] value: f64) {
        assert_eq!(
            parse_edge_list(line),
            Err(EdgeParseError::OutOfBounds { line_no: 1, value })
        );
    }

    #[test]
    fn the_bound_itself_is_accepted() {
        let segments = parse_edge_list("0 0 4000 4000 lime").expect("parse");
        assert_eq!(segments[0].end(), Point::new(4000.0, 4000.0));
    }

    #[test]
    fn first_violation_aborts_the_whole_batch() {
        let err = parse_edge_list("0 0 1 1 red\n0 0 100 100\n0 0 bad 1 blue").unwrap_err();
        assert_eq!(err, EdgeParseError::MissingFields { line_no: 2, found: 4 });
    }

    #[test]
    fn color_tokens_are_taken_verbatim() {
        let segments = parse_edge_list("0 0 1 1 #ff8800").expect("parse");
        assert_eq!(segments[0].color(), "#ff8800");
    }
}
