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

//! Command implementations and shared helpers.

mod compare;
mod matrices;
mod strong;
mod weak;

pub use compare::compare;
pub use matrices::matrices;
pub use strong::strong_scaling;
pub use weak::weak_scaling;

use clap::ValueEnum;
use sparsebench_chart::style::{BLUE, CRIMSON, GREEN};
use sparsebench_chart::{Marker, SeriesStyle};

/// The SpMV kernel variants a comparison can include.
///
/// An explicit enumerated set instead of three independent booleans, so an
/// empty selection has exactly one meaning: all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KernelKind {
    /// Coordinate-format kernel.
    Coo,
    /// Compressed-sparse-row kernel.
    Csr,
    /// Parallel compressed-sparse-row kernel.
    ParallelCsr,
}

impl KernelKind {
    /// All kernel variants, in display order.
    pub const ALL: [KernelKind; 3] = [KernelKind::Coo, KernelKind::Csr, KernelKind::ParallelCsr];

    /// Human-readable kernel label.
    pub fn label(&self) -> &'static str {
        match self {
            KernelKind::Coo => "COO",
            KernelKind::Csr => "CSR",
            KernelKind::ParallelCsr => "Parallel CSR",
        }
    }

    /// Conventional sample file name written by the benchmark harness.
    pub fn sample_file_name(&self) -> &'static str {
        match self {
            KernelKind::Coo => "COO_exec_times.txt",
            KernelKind::Csr => "CSR_exec_times.txt",
            KernelKind::ParallelCsr => "Parallel_CSR_exec_times.txt",
        }
    }

    /// Stable per-kernel series style, so charts stay comparable across runs.
    pub fn style(&self) -> SeriesStyle {
        match self {
            KernelKind::Coo => SeriesStyle::solid(CRIMSON),
            KernelKind::Csr => SeriesStyle::solid(BLUE),
            KernelKind::ParallelCsr => SeriesStyle::solid(GREEN).with_marker(Marker::Square),
        }
    }
}

/// Resolves a kernel selection: an empty selection means all kernels.
///
/// Duplicates are dropped, first occurrence wins, so legend order follows
/// the command line.
pub fn resolve_selection(requested: &[KernelKind]) -> Vec<KernelKind> {
    if requested.is_empty() {
        return KernelKind::ALL.to_vec();
    }
    let mut selection = Vec::new();
    for &kernel in requested {
        if !selection.contains(&kernel) {
            selection.push(kernel);
        }
    }
    selection
}

/// Zips a process-count axis with one metric array into plot points.
pub(crate) fn metric_points(processes: &[u32], values: &[f64]) -> Vec<(f64, f64)> {
    processes
        .iter()
        .zip(values.iter())
        .map(|(&p, &v)| (f64::from(p), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_means_all() {
        assert_eq!(resolve_selection(&[]), KernelKind::ALL.to_vec());
    }

    #[test]
    fn test_selection_preserves_order_and_dedups() {
        let picked = resolve_selection(&[KernelKind::Csr, KernelKind::Coo, KernelKind::Csr]);
        assert_eq!(picked, vec![KernelKind::Csr, KernelKind::Coo]);
    }

    #[test]
    fn test_kernel_styles_are_distinct() {
        let styles: Vec<_> = KernelKind::ALL.iter().map(|k| k.style().color).collect();
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
    }

    #[test]
    fn test_metric_points() {
        let pts = metric_points(&[1, 2, 4], &[10.0, 20.0, 40.0]);
        assert_eq!(pts, vec![(1.0, 10.0), (2.0, 20.0), (4.0, 40.0)]);
    }
}
