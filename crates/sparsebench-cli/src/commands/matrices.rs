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

//! Matrices command - the 3x2 all-matrices metric grid.
//!
//! One cell per scaling metric, one line per matrix in every cell, with
//! matrix identity as the series discriminator and the process count as
//! the shared log2 x-axis.

use super::metric_points;
use crate::error::Result;
use colored::Colorize;
use sparsebench_chart::{palette_color, render_svg, Axis, Cell, Figure, Series, SeriesStyle};
use sparsebench_core::{ScalingMetric, ScalingTable};
use std::path::Path;

/// Generates the all-matrices strong-scaling grid.
///
/// # Arguments
///
/// * `output` - Output SVG path, overwritten on each run
/// * `show` - Print every matrix's metric table to the console
///
/// # Errors
///
/// Returns `Err` if rendering fails.
pub fn matrices(output: &str, show: bool) -> Result<()> {
    let table = ScalingTable::strong();
    let processes = table.processes();

    let mut figure = Figure::new("").with_columns(2).with_size(1500, 1500);

    for metric in ScalingMetric::ALL {
        let mut cell = Cell::new(
            metric.title(),
            Axis::log2("Number of Processes", processes),
            Axis::linear(metric.axis_label()),
        );
        for (idx, record) in table.records().iter().enumerate() {
            cell = cell.with_series(Series::line(
                record.name.clone(),
                metric_points(processes, record.metric(metric)),
                SeriesStyle::solid(palette_color(idx)),
            ));
        }
        figure = figure.with_cell(cell);
    }

    render_svg(&figure, Path::new(output))?;

    if show {
        for record in table.records() {
            print_record_table(table, &record.name)?;
        }
    }
    println!("Wrote {}", output);

    Ok(())
}

/// Prints one matrix's metric table, one row per process count.
pub(super) fn print_record_table(table: &ScalingTable, matrix: &str) -> Result<()> {
    let record = table.record(matrix)?;
    let processes = table.processes();

    println!();
    println!("{} ({})", matrix.bold(), table.label());
    println!(
        "  {:<6} {:>12} {:>10} {:>12} {:>10} {:>10} {:>12}",
        "P", "Time (ms)", "Speedup", "Eff. (%)", "Comm %", "GFLOPs", "Ghosts"
    );
    println!(
        "  {:-<6} {:-^12} {:-^10} {:-^12} {:-^10} {:-^10} {:-^12}",
        "", "", "", "", "", "", ""
    );
    for (i, &p) in processes.iter().enumerate() {
        println!(
            "  {:<6} {:>12.3} {:>10.3} {:>12.3} {:>10.3} {:>10.3} {:>12.0}",
            p,
            record.avg_time_ms[i],
            record.speedup[i],
            record.efficiency_pct[i],
            record.comm_pct[i],
            record.gflops[i],
            record.avg_ghost[i]
        );
    }

    Ok(())
}
