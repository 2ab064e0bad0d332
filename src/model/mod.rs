// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Segments are colored directed lines on the bounded board plane; a Scene is the
//! insertion-ordered collection of them currently intended for display.

pub mod ids;
pub mod scene;
pub mod segment;

pub use ids::{Id, IdError, PlaceId};
pub use scene::Scene;
pub use segment::{Point, Segment, BOARD_MAX};
