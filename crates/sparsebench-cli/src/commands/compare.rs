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

//! Compare command - raw kernel timing series against each other.
//!
//! Loads one sample file per selected kernel, plots every series over the
//! run index with a dashed mean reference line per kernel (and optionally a
//! percentile line), and prints each kernel's average. With `--show`, a
//! full summary table is printed as well.

use super::{resolve_selection, KernelKind};
use crate::error::Result;
use colored::Colorize;
use sparsebench_chart::{render_svg, Axis, Cell, Figure, RefLine, Series, SeriesStyle};
use sparsebench_core::{summarize, SampleSeries, Summary};
use std::path::Path;

/// Generates the raw-series comparison chart.
///
/// # Arguments
///
/// * `kernels` - Selected kernel variants; empty means all
/// * `dir` - Directory holding the sample files
/// * `output` - Output SVG path, overwritten on each run
/// * `quantile` - Optional percentile drawn as a second reference line
/// * `show` - Print the full summary table to the console
///
/// # Errors
///
/// Returns `Err` if any selected sample file is missing or malformed, a
/// series is empty, the quantile is out of range, or rendering fails.
pub fn compare(
    kernels: &[KernelKind],
    dir: &str,
    output: &str,
    quantile: Option<f64>,
    show: bool,
) -> Result<()> {
    let selection = resolve_selection(kernels);
    let q = quantile.unwrap_or(90.0);

    let mut cell = Cell::new(
        format!(
            "Benchmark: {} execution times",
            selection
                .iter()
                .map(|k| k.label())
                .collect::<Vec<_>>()
                .join(" vs ")
        ),
        Axis::linear("Run #"),
        Axis::linear("Time (ms)"),
    );

    let mut summaries: Vec<(KernelKind, Summary)> = Vec::new();
    for kernel in &selection {
        let path = Path::new(dir).join(kernel.sample_file_name());
        let series = SampleSeries::from_path(kernel.label(), &path)?;
        let summary = summarize(&series, q)?;

        cell = cell
            .with_series(Series::line(
                format!("{} times", kernel.label()),
                series.indexed().collect(),
                kernel.style(),
            ))
            .with_ref_line(RefLine::new(
                format!("{} avg ({:.5} ms)", kernel.label(), summary.mean),
                summary.mean,
                SeriesStyle::dashed(kernel.style().color),
            ));
        if quantile.is_some() {
            cell = cell.with_ref_line(RefLine::new(
                format!("{} p{:.0} ({:.5} ms)", kernel.label(), q, summary.percentile),
                summary.percentile,
                SeriesStyle::dashed(kernel.style().color),
            ));
        }

        summaries.push((*kernel, summary));
    }

    let figure = Figure::new("").with_size(900, 560).with_cell(cell);
    render_svg(&figure, Path::new(output))?;

    for (kernel, summary) in &summaries {
        println!("{} average: {:.8} ms", kernel.label(), summary.mean);
    }

    if show {
        print_summary_table(&summaries, q);
    }
    println!("Wrote {}", output);

    Ok(())
}

/// Prints the per-kernel summary table.
fn print_summary_table(summaries: &[(KernelKind, Summary)], q: f64) {
    println!();
    println!("{}", "Kernel Timing Summary".bold());
    println!("=====================");
    println!();
    println!(
        "  {:<14} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Kernel",
        "Runs",
        "Mean (ms)",
        format!("p{:.0} (ms)", q),
        "Min (ms)",
        "Max (ms)",
        "StdDev (ms)"
    );
    println!(
        "  {:-<14} {:-^6} {:-^12} {:-^12} {:-^12} {:-^12} {:-^12}",
        "", "", "", "", "", "", ""
    );
    for (kernel, s) in summaries {
        println!(
            "  {:<14} {:>6} {:>12.5} {:>12.5} {:>12.5} {:>12.5} {:>12.5}",
            kernel.label(),
            s.count,
            s.mean,
            s.percentile,
            s.min,
            s.max,
            s.std_dev
        );
    }
}
