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

//! Strong-scaling command - the 2x2 dashboard for one matrix.
//!
//! Panel layout follows the scaling study report: time + throughput on a
//! dual axis, communication fraction with the 50% threshold, ghost points
//! per rank as bars, and speedup + efficiency on a dual axis.

use super::metric_points;
use crate::error::Result;
use sparsebench_chart::style::{CRIMSON, DARK_ORANGE, GREY, INDIAN_RED, PURPLE, SLATE_BLUE, TEAL};
use sparsebench_chart::{
    render_svg, Axis, Cell, Figure, Marker, RefLine, Series, SeriesStyle,
};
use sparsebench_core::ScalingTable;
use std::path::Path;

/// Generates the strong-scaling dashboard for one matrix.
///
/// # Arguments
///
/// * `matrix` - Matrix name in the strong-scaling table
/// * `output` - Output SVG path, overwritten on each run
/// * `show` - Print the matrix's metric table to the console
///
/// # Errors
///
/// Returns `Err` for an unknown matrix or a rendering failure.
pub fn strong_scaling(matrix: &str, output: &str, show: bool) -> Result<()> {
    let table = ScalingTable::strong();
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

    let speedup_eff = Cell::new(
        "Speedup & Efficiency",
        Axis::log2("Number of processes P", processes),
        Axis::linear("Speedup"),
    )
    .with_secondary_axis(Axis::linear("Efficiency (%)"))
    .with_series(Series::line(
        "Speedup",
        metric_points(processes, &record.speedup),
        SeriesStyle::solid(PURPLE).with_marker(Marker::Triangle),
    ))
    .with_series(
        Series::line(
            "Efficiency (%)",
            metric_points(processes, &record.efficiency_pct),
            SeriesStyle {
                color: SLATE_BLUE,
                marker: Marker::Circle,
                dashed: true,
                stroke_width: 2,
            },
        )
        .on_secondary(),
    );

    let figure = Figure::new(format!("Performance Scaling Analysis - SpMV ({})", matrix))
        .with_columns(2)
        .with_size(1400, 1000)
        .with_cell(time_gflops)
        .with_cell(comm)
        .with_cell(ghosts)
        .with_cell(speedup_eff);

    render_svg(&figure, Path::new(output))?;

    if show {
        super::matrices::print_record_table(table, matrix)?;
    }
    println!("Wrote {}", output);

    Ok(())
}
