// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use triton::model::Scene;
use triton::render::NullRenderer;
use triton::scene::SceneStore;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `scene.append`, `scene.store_cycle`
// - Case IDs must remain stable across refactors.
fn benches_scene(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("scene.append");

        for case in [fixtures::Case::Small, fixtures::Case::Medium] {
            let batch = fixtures::segment_batch(case);
            group.throughput(Throughput::Elements(batch.len() as u64));
            group.bench_function(case.id(), move |b| {
                let base = Scene::new().append(&batch);
                b.iter(|| {
                    let grown = base.append(black_box(&batch));
                    black_box(grown.len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("scene.store_cycle");

        let batch = fixtures::segment_batch(fixtures::Case::Medium);
        group.throughput(Throughput::Elements(batch.len() as u64));
        group.bench_function("append_reset", move |b| {
            b.iter_batched(
                || SceneStore::new(NullRenderer),
                |mut store| {
                    store.append(black_box(&batch));
                    store.append(black_box(&batch));
                    store.reset();
                    black_box(store.rev())
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_scene
}
criterion_main!(benches);
