// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::segment::Segment;

/// The insertion-ordered collection of segments currently intended for display.
///
/// A Scene has no identity beyond its ordered contents; two structurally equal
/// scenes are interchangeable for rendering. `append` is pure and returns a new
/// Scene, which keeps the single-writer invariant auditable and lets observers
/// detect change with an equality or revision check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    segments: Vec<Segment>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `self ++ batch`, preserving both the prior order and the batch's
    /// internal order.
    #[must_use]
    pub fn append(&self, batch: &[Segment]) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + batch.len());
        segments.extend(self.segments.iter().cloned());
        segments.extend(batch.iter().cloned());
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Scene;
    use crate::model::{Point, Segment};

    fn segment(label: &str) -> Segment {
        Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), label)
    }

    #[test]
    fn append_preserves_order_and_is_not_commutative() {
        let a = vec![segment("a1"), segment("a2")];
        let b = vec![segment("b1")];

        let ab = Scene::new().append(&a).append(&b);
        let ba = Scene::new().append(&b).append(&a);

        let colors = |scene: &Scene| {
            scene.segments().iter().map(|s| s.color().to_owned()).collect::<Vec<_>>()
        };
        assert_eq!(colors(&ab), ["a1", "a2", "b1"]);
        assert_eq!(colors(&ba), ["b1", "a1", "a2"]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn append_leaves_the_original_scene_untouched() {
        let base = Scene::new().append(&[segment("kept")]);
        let grown = base.append(&[segment("new")]);

        assert_eq!(base.len(), 1);
        assert_eq!(grown.len(), 2);
    }

    #[test]
    fn appending_an_empty_batch_yields_an_equal_scene() {
        let base = Scene::new().append(&[segment("only")]);
        assert_eq!(base.append(&[]), base);
    }
}
