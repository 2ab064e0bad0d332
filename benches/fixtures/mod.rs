// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::fmt::Write as _;

use triton::model::{Point, Segment, BOARD_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeLongColors,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeLongColors => "large_long_colors",
        }
    }

    pub fn lines(self) -> usize {
        match self {
            Self::Small => 16,
            Self::Medium => 512,
            Self::LargeLongColors => 4096,
        }
    }
}

const COLORS: [&str; 6] = ["red", "green", "blue", "#ff8800", "cyan", "magenta"];

/// Deterministic edge-list text: coordinates walk the board plane diagonally
/// and wrap before the bound.
pub fn edge_list(case: Case) -> String {
    let lines = case.lines();
    let long_colors = case == Case::LargeLongColors;

    let mut out = String::with_capacity(lines * 32);
    for index in 0..lines {
        let base = ((index * 37) % (BOARD_MAX as usize - 100)) as f64;
        let color = if long_colors {
            format!("{}-{index:04}", COLORS[index % COLORS.len()])
        } else {
            COLORS[index % COLORS.len()].to_owned()
        };
        writeln!(out, "{} {} {} {} {}", base, base + 1.0, base + 50.0, base + 99.0, color)
            .expect("write fixture line");
    }
    out
}

/// The same fixture as parsed segments, for store benches.
pub fn segment_batch(case: Case) -> Vec<Segment> {
    let lines = case.lines();
    (0..lines)
        .map(|index| {
            let base = ((index * 37) % (BOARD_MAX as usize - 100)) as f64;
            Segment::new(
                Point::new(base, base + 1.0),
                Point::new(base + 50.0, base + 99.0),
                COLORS[index % COLORS.len()],
            )
        })
        .collect()
}

pub fn checksum_segments(segments: &[Segment]) -> u64 {
    let mut acc = 0u64;
    for segment in segments {
        acc = acc.wrapping_mul(131).wrapping_add(segment.start().x as u64);
        acc = acc.wrapping_mul(131).wrapping_add(segment.end().y as u64);
        acc = acc.wrapping_mul(131).wrapping_add(segment.color().len() as u64);
    }
    acc
}
