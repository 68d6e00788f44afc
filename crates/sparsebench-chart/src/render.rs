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

//! SVG rendering of figures.
//!
//! The figure is validated before the backend is opened, so a bad figure
//! never leaves a half-written artifact. Cells with fixed ticks render tick
//! marks at exactly the supplied positions (labelled `P=<count>` on log₂
//! axes), never auto-generated ones, and legends list series in input order.

use crate::error::{ChartError, Result};
use crate::figure::{AxisScale, Cell, Figure, RefLine, Series, SeriesKind, YSide};
use crate::style::Marker;
use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::combinators::BindKeyPoints;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Font sizes tuned for SVGs viewed scaled down.
const CAPTION_FONT_SIZE: u32 = 18;
const TITLE_FONT_SIZE: u32 = 26;

/// Renders a figure to an SVG artifact, overwriting any previous file.
///
/// # Errors
///
/// Returns [`ChartError::EmptyPlot`] / [`ChartError::AxisMismatch`] from
/// validation, and [`ChartError::Render`] if the backend fails.
pub fn render_svg(figure: &Figure, path: &Path) -> Result<()> {
    figure.validate()?;

    let root = SVGBackend::new(path, figure.size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(path, e))?;

    let root = if figure.title.is_empty() {
        root
    } else {
        root.titled(&figure.title, ("sans-serif", TITLE_FONT_SIZE))
            .map_err(|e| render_err(path, e))?
    };

    let areas = root.split_evenly((figure.rows(), figure.cols));
    for (cell, area) in figure.cells.iter().zip(areas.iter()) {
        draw_cell(cell, area, path)?;
    }

    root.present().map_err(|e| render_err(path, e))?;
    Ok(())
}

fn render_err(path: &Path, e: impl std::fmt::Display) -> ChartError {
    ChartError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn draw_cell(cell: &Cell, area: &DrawingArea<SVGBackend, Shift>, path: &Path) -> Result<()> {
    if cell.series.is_empty() {
        return Ok(());
    }

    let has_secondary = cell.y2.is_some() && cell.series.iter().any(|s| s.side == YSide::Right);
    match (cell.x.scale, cell.y.scale) {
        (AxisScale::Log2, AxisScale::Log10) => draw_log2_logy_cell(cell, area, path),
        (AxisScale::Log2, _) if has_secondary => draw_log2_dual_cell(cell, area, path),
        (AxisScale::Log2, _) => draw_log2_cell(cell, area, path),
        _ => draw_linear_cell(cell, area, path),
    }
}

/// Raw-series mode: linear x (run index), linear y, reference lines.
fn draw_linear_cell(
    cell: &Cell,
    area: &DrawingArea<SVGBackend, Shift>,
    path: &Path,
) -> Result<()> {
    let x_span = x_extent(cell);
    let y_span = y_extent(cell, YSide::Left, has_bars(cell));

    let mut chart = ChartBuilder::on(area)
        .caption(&cell.title, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(8)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_span.0..x_span.1, y_span.0..y_span.1)
        .map_err(|e| render_err(path, e))?;

    chart
        .configure_mesh()
        .x_desc(cell.x.label.as_str())
        .y_desc(cell.y.label.as_str())
        .draw()
        .map_err(|e| render_err(path, e))?;

    let left: Vec<&Series> = cell.series.iter().filter(|s| s.side == YSide::Left).collect();
    draw_series_set(&mut chart, &left, &cell.ref_lines, x_span, path)?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .draw()
        .map_err(|e| render_err(path, e))?;
    Ok(())
}

/// Scaling mode: log₂ x with literal process-count ticks, one linear y.
fn draw_log2_cell(cell: &Cell, area: &DrawingArea<SVGBackend, Shift>, path: &Path) -> Result<()> {
    let ticks = cell.x.ticks.clone().unwrap_or_default();
    let x_span = x_extent(cell);
    let y_span = y_extent(cell, YSide::Left, has_bars(cell));

    let mut chart = ChartBuilder::on(area)
        .caption(&cell.title, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(8)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_span.0..x_span.1).log_scale().with_key_points(ticks),
            y_span.0..y_span.1,
        )
        .map_err(|e| render_err(path, e))?;

    chart
        .configure_mesh()
        .x_desc(cell.x.label.as_str())
        .y_desc(cell.y.label.as_str())
        .x_label_formatter(&|x: &f64| format!("P={}", x.round() as u64))
        .draw()
        .map_err(|e| render_err(path, e))?;

    let left: Vec<&Series> = cell.series.iter().filter(|s| s.side == YSide::Left).collect();
    draw_series_set(&mut chart, &left, &cell.ref_lines, x_span, path)?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .draw()
        .map_err(|e| render_err(path, e))?;
    Ok(())
}

/// Scaling mode with two independently scaled y-axes on one shared x-axis.
fn draw_log2_dual_cell(
    cell: &Cell,
    area: &DrawingArea<SVGBackend, Shift>,
    path: &Path,
) -> Result<()> {
    let ticks = cell.x.ticks.clone().unwrap_or_default();
    let x_span = x_extent(cell);
    let y_span = y_extent(cell, YSide::Left, false);
    let y2_span = y_extent(cell, YSide::Right, false);

    let mut chart = ChartBuilder::on(area)
        .caption(&cell.title, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(8)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(55)
        .build_cartesian_2d(
            (x_span.0..x_span.1).log_scale().with_key_points(ticks.clone()),
            y_span.0..y_span.1,
        )
        .map_err(|e| render_err(path, e))?
        .set_secondary_coord(
            (x_span.0..x_span.1).log_scale().with_key_points(ticks),
            y2_span.0..y2_span.1,
        );

    chart
        .configure_mesh()
        .x_desc(cell.x.label.as_str())
        .y_desc(cell.y.label.as_str())
        .x_label_formatter(&|x: &f64| format!("P={}", x.round() as u64))
        .draw()
        .map_err(|e| render_err(path, e))?;

    let y2_label = cell.y2.as_ref().map(|a| a.label.clone()).unwrap_or_default();
    chart
        .configure_secondary_axes()
        .y_desc(y2_label)
        .draw()
        .map_err(|e| render_err(path, e))?;

    for series in cell.series.iter().filter(|s| s.side == YSide::Left) {
        let color = series.style.color;
        let stroke = color.stroke_width(series.style.stroke_width);
        let points = series.points.clone();

        let anno = if series.style.dashed {
            chart
                .draw_series(DashedLineSeries::new(points, 6, 4, stroke))
                .map_err(|e| render_err(path, e))?
        } else {
            chart
                .draw_series(LineSeries::new(points, stroke))
                .map_err(|e| render_err(path, e))?
        };
        anno.label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2)));

        match series.style.marker {
            Marker::Circle => {
                chart
                    .draw_series(
                        series.points.iter().map(|&p| Circle::new(p, 3, color.filled())),
                    )
                    .map_err(|e| render_err(path, e))?;
            }
            Marker::Square => {
                chart
                    .draw_series(series.points.iter().map(|&p| {
                        EmptyElement::at(p) + Rectangle::new([(-3, -3), (3, 3)], color.filled())
                    }))
                    .map_err(|e| render_err(path, e))?;
            }
            Marker::Triangle => {
                chart
                    .draw_series(
                        series
                            .points
                            .iter()
                            .map(|&p| TriangleMarker::new(p, 4, color.filled())),
                    )
                    .map_err(|e| render_err(path, e))?;
            }
            Marker::None => {}
        }
    }

    for line in &cell.ref_lines {
        let color = line.style.color;
        let stroke = color.stroke_width(line.style.stroke_width);
        let points = vec![(x_span.0, line.value), (x_span.1, line.value)];
        let anno = if line.style.dashed {
            chart
                .draw_series(DashedLineSeries::new(points, 6, 4, stroke))
                .map_err(|e| render_err(path, e))?
        } else {
            chart
                .draw_series(LineSeries::new(points, stroke))
                .map_err(|e| render_err(path, e))?
        };
        anno.label(line.label.as_str()).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
        });
    }

    // Secondary-axis series, drawn after the primary set so legend order
    // matches input order within each axis.
    for series in cell.series.iter().filter(|s| s.side == YSide::Right) {
        let color = series.style.color;
        let stroke = color.stroke_width(series.style.stroke_width);
        let points = series.points.clone();

        let anno = if series.style.dashed {
            chart
                .draw_secondary_series(DashedLineSeries::new(points, 6, 4, stroke))
                .map_err(|e| render_err(path, e))?
        } else {
            chart
                .draw_secondary_series(LineSeries::new(points, stroke))
                .map_err(|e| render_err(path, e))?
        };
        anno.label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2)));

        match series.style.marker {
            Marker::Circle => {
                chart
                    .draw_secondary_series(
                        series.points.iter().map(|&p| Circle::new(p, 3, color.filled())),
                    )
                    .map_err(|e| render_err(path, e))?;
            }
            Marker::Square => {
                chart
                    .draw_secondary_series(series.points.iter().map(|&p| {
                        EmptyElement::at(p) + Rectangle::new([(-3, -3), (3, 3)], color.filled())
                    }))
                    .map_err(|e| render_err(path, e))?;
            }
            Marker::Triangle => {
                chart
                    .draw_secondary_series(
                        series
                            .points
                            .iter()
                            .map(|&p| TriangleMarker::new(p, 4, color.filled())),
                    )
                    .map_err(|e| render_err(path, e))?;
            }
            Marker::None => {}
        }
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .draw()
        .map_err(|e| render_err(path, e))?;
    Ok(())
}

/// Problem-size panel: log₂ x, log₁₀ y.
fn draw_log2_logy_cell(
    cell: &Cell,
    area: &DrawingArea<SVGBackend, Shift>,
    path: &Path,
) -> Result<()> {
    let ticks = cell.x.ticks.clone().unwrap_or_default();
    let x_span = x_extent(cell);
    let (y_min, y_max) = log_y_extent(cell);

    let mut chart = ChartBuilder::on(area)
        .caption(&cell.title, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(8)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_span.0..x_span.1).log_scale().with_key_points(ticks),
            (y_min..y_max).log_scale(),
        )
        .map_err(|e| render_err(path, e))?;

    chart
        .configure_mesh()
        .x_desc(cell.x.label.as_str())
        .y_desc(cell.y.label.as_str())
        .x_label_formatter(&|x: &f64| format!("P={}", x.round() as u64))
        .draw()
        .map_err(|e| render_err(path, e))?;

    let left: Vec<&Series> = cell.series.iter().filter(|s| s.side == YSide::Left).collect();
    draw_series_set(&mut chart, &left, &[], x_span, path)?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .draw()
        .map_err(|e| render_err(path, e))?;
    Ok(())
}

/// Draws line/bar series, their markers, and reference lines into a chart.
fn draw_series_set<DB, X, Y>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<X, Y>>,
    series_set: &[&Series],
    ref_lines: &[RefLine],
    x_span: (f64, f64),
    path: &Path,
) -> Result<()>
where
    DB: DrawingBackend,
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    for series in series_set {
        let color = series.style.color;

        match series.kind {
            SeriesKind::Bars => {
                chart
                    .draw_series(series.points.iter().map(|&(x, y)| {
                        let (lo, hi) = bar_edges(x);
                        Rectangle::new([(lo, 0.0), (hi, y)], color.mix(0.75).filled())
                    }))
                    .map_err(|e| render_err(path, e))?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled())
                    });
            }
            SeriesKind::Line => {
                let stroke = color.stroke_width(series.style.stroke_width);
                let points = series.points.clone();
                let anno = if series.style.dashed {
                    chart
                        .draw_series(DashedLineSeries::new(points, 6, 4, stroke))
                        .map_err(|e| render_err(path, e))?
                } else {
                    chart
                        .draw_series(LineSeries::new(points, stroke))
                        .map_err(|e| render_err(path, e))?
                };
                anno.label(series.label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });

                match series.style.marker {
                    Marker::Circle => {
                        chart
                            .draw_series(
                                series.points.iter().map(|&p| Circle::new(p, 3, color.filled())),
                            )
                            .map_err(|e| render_err(path, e))?;
                    }
                    Marker::Square => {
                        chart
                            .draw_series(series.points.iter().map(|&p| {
                                EmptyElement::at(p)
                                    + Rectangle::new([(-3, -3), (3, 3)], color.filled())
                            }))
                            .map_err(|e| render_err(path, e))?;
                    }
                    Marker::Triangle => {
                        chart
                            .draw_series(
                                series
                                    .points
                                    .iter()
                                    .map(|&p| TriangleMarker::new(p, 4, color.filled())),
                            )
                            .map_err(|e| render_err(path, e))?;
                    }
                    Marker::None => {}
                }
            }
        }
    }

    for line in ref_lines {
        let color = line.style.color;
        let stroke = color.stroke_width(line.style.stroke_width);
        let points = vec![(x_span.0, line.value), (x_span.1, line.value)];
        let anno = if line.style.dashed {
            chart
                .draw_series(DashedLineSeries::new(points, 6, 4, stroke))
                .map_err(|e| render_err(path, e))?
        } else {
            chart
                .draw_series(LineSeries::new(points, stroke))
                .map_err(|e| render_err(path, e))?
        };
        anno.label(line.label.as_str()).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
        });
    }

    Ok(())
}

/// Bar extents around a tick on a multiplicative (log) axis.
fn bar_edges(x: f64) -> (f64, f64) {
    if x > 0.0 {
        (x / 1.22, x * 1.22)
    } else {
        (x - 0.4, x + 0.4)
    }
}

fn has_bars(cell: &Cell) -> bool {
    cell.series.iter().any(|s| s.kind == SeriesKind::Bars)
}

/// X extent: fixed ticks when present (padded multiplicatively for log
/// axes), otherwise the data extent with a small margin.
fn x_extent(cell: &Cell) -> (f64, f64) {
    if let Some(ticks) = &cell.x.ticks {
        let first = ticks.first().copied().unwrap_or(1.0);
        let last = ticks.last().copied().unwrap_or(2.0);
        if cell.x.scale == AxisScale::Log2 {
            return (first * 0.85, last * 1.18);
        }
        return pad_span(first, last);
    }

    let xs = cell
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(x, _)| x));
    let (min, max) = min_max(xs);
    pad_span(min, max)
}

/// Y extent over one axis side, including reference lines on the primary
/// side and the zero baseline when bars are present.
fn y_extent(cell: &Cell, side: YSide, include_zero: bool) -> (f64, f64) {
    let ys = cell
        .series
        .iter()
        .filter(|s| s.side == side)
        .flat_map(|s| s.points.iter().map(|&(_, y)| y));
    let (mut min, mut max) = min_max(ys);

    if side == YSide::Left {
        for line in &cell.ref_lines {
            min = min.min(line.value);
            max = max.max(line.value);
        }
    }
    if include_zero {
        min = min.min(0.0);
    }
    pad_span(min, max)
}

/// Y extent for log-scaled y-axes; strictly positive, padded multiplicatively.
fn log_y_extent(cell: &Cell) -> (f64, f64) {
    let ys = cell
        .series
        .iter()
        .filter(|s| s.side == YSide::Left)
        .flat_map(|s| s.points.iter().map(|&(_, y)| y))
        .filter(|&y| y > 0.0);
    let (min, max) = min_max(ys);
    if !min.is_finite() || !max.is_finite() {
        return (0.1, 10.0);
    }
    (min * 0.7, max * 2.0)
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn pad_span(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.06;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Axis;
    use crate::style::{SeriesStyle, BLUE, CRIMSON, GREY};

    fn scaling_cell(points: usize) -> Cell {
        let data: Vec<(f64, f64)> = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0]
            .iter()
            .take(points)
            .map(|&p| (p, p * 1.5))
            .collect();
        Cell::new(
            "Speedup",
            Axis::log2("Number of Processes", &[1, 2, 4, 8, 16, 32]),
            Axis::linear("Speedup"),
        )
        .with_series(Series::line("cage14", data, SeriesStyle::solid(BLUE)))
    }

    #[test]
    fn test_render_empty_figure_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let err = render_svg(&Figure::new("empty"), &path).unwrap_err();
        assert!(matches!(err, ChartError::EmptyPlot { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_render_axis_mismatch_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.svg");
        let figure = Figure::new("scaling").with_cell(scaling_cell(4));
        let err = render_svg(&figure, &path).unwrap_err();
        assert!(matches!(err, ChartError::AxisMismatch { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_render_scaling_cell_writes_literal_ticks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaling.svg");
        let figure = Figure::new("Scaling").with_cell(scaling_cell(6));
        render_svg(&figure, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<?xml") || svg.starts_with("<svg"));
        for p in [1, 2, 4, 8, 16, 32] {
            assert!(svg.contains(&format!("P={}", p)), "missing tick P={}", p);
        }
        // Ticks are the literal process counts, not auto-generated log ticks.
        assert!(!svg.contains("P=10"));
    }

    #[test]
    fn test_render_raw_series_with_ref_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.svg");
        let cell = Cell::new(
            "Benchmark: COO vs CSR execution times",
            Axis::linear("Run #"),
            Axis::linear("Time (ms)"),
        )
        .with_series(Series::line(
            "COO times",
            vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)],
            SeriesStyle::solid(CRIMSON),
        ))
        .with_ref_line(RefLine::new("COO avg (2.00000 ms)", 2.0, SeriesStyle::dashed(GREY)));
        let figure = Figure::new("").with_cell(cell);
        render_svg(&figure, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("COO times"));
        assert!(svg.contains("COO avg (2.00000 ms)"));
        assert!(svg.contains("Run #"));
    }

    #[test]
    fn test_render_grid_dual_axis_and_bars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.svg");
        let ticks = [1u32, 2, 4, 8, 16];
        let xs = [1.0, 2.0, 4.0, 8.0, 16.0];

        let dual = Cell::new(
            "Time per SpMV & Achieved GFLOPS",
            Axis::log2("Number of processes P", &ticks),
            Axis::linear("Time per SpMV (ms)"),
        )
        .with_secondary_axis(Axis::linear("GFLOPS (avg)"))
        .with_series(Series::line(
            "Time / SpMV (ms)",
            xs.iter().map(|&x| (x, x * 2.0)).collect(),
            SeriesStyle::solid(CRIMSON),
        ))
        .with_series(
            Series::line(
                "GFLOPS",
                xs.iter().map(|&x| (x, 4.0 - x / 8.0)).collect(),
                SeriesStyle::solid(BLUE),
            )
            .on_secondary(),
        );

        let bars = Cell::new(
            "Ghost Points per Rank",
            Axis::log2("Number of processes P", &ticks),
            Axis::linear("Ghosts (avg / rank)"),
        )
        .with_series(Series::bars(
            "ghosts",
            xs.iter().map(|&x| (x, x * 100.0)).collect(),
            SeriesStyle::solid(BLUE),
        ));

        let figure = Figure::new("Weak Scaling")
            .with_columns(2)
            .with_size(1400, 500)
            .with_cell(dual)
            .with_cell(bars);
        render_svg(&figure, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("GFLOPS (avg)"));
        assert!(svg.contains("Ghost Points per Rank"));
    }
}
