// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The scene store: the single source of truth the renderer observes.
//!
//! The store accepts only already-validated batches, so both of its operations
//! are total. Each operation replaces the scene through the pure
//! [`Scene::append`] and triggers exactly one repaint carrying the full
//! resulting contents.

use crate::model::{Scene, Segment};
use crate::render::Renderer;

#[derive(Debug)]
pub struct SceneStore<R: Renderer> {
    scene: Scene,
    rev: u64,
    renderer: R,
}

impl<R: Renderer> SceneStore<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            scene: Scene::new(),
            rev: 0,
            renderer,
        }
    }

    /// Appends a validated batch to the end of the scene, preserving prior order
    /// and the batch's internal order. One operation, one repaint; an empty
    /// batch still counts.
    pub fn append(&mut self, batch: &[Segment]) {
        self.scene = self.scene.append(batch);
        self.publish();
    }

    /// Empties the scene unconditionally. Idempotent in contents, not in
    /// revision: every call is an operation and repaints.
    pub fn reset(&mut self) {
        self.scene = Scene::new();
        self.publish();
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Monotonic change counter; observers may compare revisions instead of
    /// scene contents.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn publish(&mut self) {
        self.rev = self.rev.wrapping_add(1);
        self.renderer.repaint(self.scene.segments());
    }
}
