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

//! Weak-scaling command - the 2x2 dashboard for the growing-problem study.
//!
//! Same first three panels as the strong-scaling dashboard; the fourth
//! panel tracks problem size (global rows and nonzeros per SpMV), which
//! should grow linearly with P in a weak-scaling study, on a log y-axis.

use super::metric_points;
use crate::error::Result;
use sparsebench_chart::style::{CRIMSON, DARK_ORANGE, GREY, INDIAN_RED, PURPLE, SLATE_BLUE, TEAL};
use sparsebench_chart::{
    render_svg, Axis, Cell, Figure, Marker, RefLine, Series, SeriesStyle,
};
use sparsebench_core::ScalingTable;
use std::path::Path;

/// Generates the weak-scaling dashboard.
///
/// # Arguments
///
/// * `matrix` - Matrix name in the weak-scaling table
/// * `output` - Output SVG path, overwritten on each run
/// * `show` - Print the matrix's metric table to the console
///
/// # Errors
///
/// Returns `Err` for an unknown matrix or a rendering failure.
pub fn weak_scaling(matrix: &str, output: &str, show: bool) -> Result<()> {
    let table = ScalingTable::weak();
    let record = table.record(matrix)?;
    let processes = table.processes();

    let time_gflops = Cell::new(
        "Time per SpMV & Achieved GFLOPS",
        Axis::log2("Number of processes P", processes),
        Axis::linear("Time per SpMV (ms)"),
    )
    .with_secondary_axis(Axis::linear("GFLOPS (avg)"))
    .with_series(Series::line(
        "Time / SpMV (ms)",
        metric_points(processes, &record.avg_time_ms),
        SeriesStyle::solid(CRIMSON),
    ))
    .with_series(
        Series::line(
            "GFLOPS",
            metric_points(processes, &record.gflops),
            SeriesStyle {
                color: TEAL,
                marker: Marker::Square,
                dashed: true,
                stroke_width: 2,
            },
        )
        .on_secondary(),
    );

    let comm = Cell::new(
        "Communication Fraction (%)",
        Axis::log2("Number of processes P", processes),
        Axis::linear("Communication fraction (%)"),
    )
    .with_series(Series::line(
        "Comm fraction",
        metric_points(processes, &record.comm_pct),
        SeriesStyle::solid(DARK_ORANGE).with_marker(Marker::Square),
    ))
    .with_ref_line(RefLine::new(
        "50% threshold",
        50.0,
        SeriesStyle::dashed(GREY),
    ));

    let ghosts = Cell::new(
        "Ghost Points per Rank",
        Axis::log2("Number of processes P", processes),
        Axis::linear("Ghosts (avg / rank)"),
    )
    .with_series(Series::bars(
        "Ghosts",
        metric_points(processes, &record.avg_ghost),
        SeriesStyle::solid(INDIAN_RED),
    ));

    let mut problem_size = Cell::new(
        "Problem Size Scaling (should be linear in weak scaling)",
        Axis::log2("Number of processes P", processes),
        Axis::log10("Size (log scale)"),
    );
    if let Some(rows) = &record.global_rows {
        problem_size = problem_size.with_series(Series::line(
            "Global rows",
            metric_points(processes, rows),
            SeriesStyle::solid(PURPLE).with_marker(Marker::Triangle),
        ));
    }
    if let Some(nnz) = &record.nnz_per_spmv {
        problem_size = problem_size.with_series(Series::line(
            "nnz per SpMV",
            metric_points(processes, nnz),
            SeriesStyle {
                color: SLATE_BLUE,
                marker: Marker::Circle,
                dashed: true,
                stroke_width: 2,
            },
        ));
    }

    let figure = Figure::new("Weak Scaling Behavior - SpMV on Growing Problem Size")
        .with_columns(2)
        .with_size(1400, 1000)
        .with_cell(time_gflops)
        .with_cell(comm)
        .with_cell(ghosts)
        .with_cell(problem_size);

    render_svg(&figure, Path::new(output))?;

    if show {
        super::matrices::print_record_table(table, matrix)?;
    }
    println!("Wrote {}", output);

    Ok(())
}
