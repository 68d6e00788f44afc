// Dweve Sparsebench - SpMV Benchmark Analytics
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Statistics engine benchmarks.
//!
//! Measures mean/percentile/summary throughput across series sizes typical
//! for benchmark runs (tens of samples) up to stress sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparsebench_core::{percentile, summarize, SampleSeries};

const SIZES: &[usize] = &[10, 100, 1_000, 10_000];

fn synthetic_series(n: usize) -> SampleSeries {
    // Deterministic but unsorted values so percentile pays its sort.
    let values = (0..n).map(|i| ((i * 7919) % 104_729) as f64 / 97.0).collect();
    SampleSeries::new("bench", values)
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("percentile");
    for &size in SIZES {
        let series = synthetic_series(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &series, |b, s| {
            b.iter(|| percentile(black_box(s), black_box(90.0)).unwrap());
        });
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for &size in SIZES {
        let series = synthetic_series(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &series, |b, s| {
            b.iter(|| summarize(black_box(s), black_box(90.0)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_percentile, bench_summarize);
criterion_main!(benches);
