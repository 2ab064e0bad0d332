// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Renderer;
use crate::model::Segment;

/// Test renderer that records every repaint snapshot it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    repaints: Vec<Vec<Segment>>,
}

impl RecordingRenderer {
    pub(crate) fn repaints(&self) -> &[Vec<Segment>] {
        &self.repaints
    }

    pub(crate) fn repaint_count(&self) -> usize {
        self.repaints.len()
    }
}

impl Renderer for RecordingRenderer {
    fn repaint(&mut self, segments: &[Segment]) {
        self.repaints.push(segments.to_vec());
    }
}
