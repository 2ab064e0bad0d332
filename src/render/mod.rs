// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The renderer boundary.
//!
//! A renderer is a pure painting surface: it is handed the full current segment
//! sequence on every change and keeps no history of its own. Repainting
//! everything is a design choice, not a shortcut; the scene is bounded by
//! interactive human input.

use ratatui::style::Color;

use crate::model::Segment;

#[cfg(test)]
pub(crate) mod test_utils;

/// Paints the current scene contents. Stateless with respect to history; called
/// with the full segment sequence on every scene-store mutation, never a diff.
pub trait Renderer {
    fn repaint(&mut self, segments: &[Segment]);
}

/// Renderer that discards every repaint. Used by headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn repaint(&mut self, _segments: &[Segment]) {}
}

/// Maps an opaque color label onto a terminal color.
///
/// Labels are never validated at parse time; unknown labels fall back to white
/// here, at the painting surface where the choice is purely cosmetic.
pub fn color_for_label(label: &str) -> Color {
    match label.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" | "lime" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" | "pink" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "orange" => Color::Rgb(0xff, 0xa5, 0x00),
        other => parse_hex_color(other).unwrap_or(Color::White),
    }
}

fn parse_hex_color(label: &str) -> Option<Color> {
    let hex = label.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
