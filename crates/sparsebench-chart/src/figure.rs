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

//! Declarative figure model.
//!
//! A [`Figure`] is a titled grid of [`Cell`]s; each cell binds one x-axis to
//! one or two independently scaled y-axes and holds the series and
//! horizontal reference lines drawn in it. The model is validated before
//! any backend is touched, so a bad figure never leaves a half-written
//! artifact behind.

use crate::error::{ChartError, Result};
use crate::style::SeriesStyle;

/// Scale of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    /// Plain linear axis.
    Linear,
    /// Logarithmic axis in powers of two, with fixed tick positions.
    Log2,
    /// Logarithmic axis in powers of ten.
    Log10,
}

/// One axis: label, scale, and optional fixed tick positions.
///
/// When ticks are fixed, the rendered tick positions are exactly the given
/// values, never auto-generated, and every series in the cell must have
/// exactly one point per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Axis description label.
    pub label: String,
    /// Axis scale.
    pub scale: AxisScale,
    /// Fixed tick positions, if any.
    pub ticks: Option<Vec<f64>>,
}

impl Axis {
    /// A linear axis with auto-generated ticks.
    pub fn linear(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            scale: AxisScale::Linear,
            ticks: None,
        }
    }

    /// A log₂ axis with ticks exactly at the given process counts.
    pub fn log2(label: impl Into<String>, ticks: &[u32]) -> Self {
        Self {
            label: label.into(),
            scale: AxisScale::Log2,
            ticks: Some(ticks.iter().map(|&t| f64::from(t)).collect()),
        }
    }

    /// A log₁₀ axis with auto-generated ticks.
    pub fn log10(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            scale: AxisScale::Log10,
            ticks: None,
        }
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Connected line with optional markers.
    Line,
    /// Vertical bars from the zero baseline.
    Bars,
}

/// Which y-axis a series is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YSide {
    /// The primary (left) y-axis.
    Left,
    /// The secondary (right) y-axis.
    Right,
}

/// One named data series inside a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Data points in x order.
    pub points: Vec<(f64, f64)>,
    /// Visual identity.
    pub style: SeriesStyle,
    /// Line or bars.
    pub kind: SeriesKind,
    /// Axis binding.
    pub side: YSide,
}

impl Series {
    /// A line series on the primary y-axis.
    pub fn line(label: impl Into<String>, points: Vec<(f64, f64)>, style: SeriesStyle) -> Self {
        Self {
            label: label.into(),
            points,
            style,
            kind: SeriesKind::Line,
            side: YSide::Left,
        }
    }

    /// A bar series on the primary y-axis.
    pub fn bars(label: impl Into<String>, points: Vec<(f64, f64)>, style: SeriesStyle) -> Self {
        Self {
            label: label.into(),
            points,
            style,
            kind: SeriesKind::Bars,
            side: YSide::Left,
        }
    }

    /// Rebinds the series to the secondary y-axis.
    pub fn on_secondary(mut self) -> Self {
        self.side = YSide::Right;
        self
    }
}

/// A horizontal reference line (mean, percentile, fixed threshold).
#[derive(Debug, Clone, PartialEq)]
pub struct RefLine {
    /// Legend label.
    pub label: String,
    /// Y value the line is drawn at.
    pub value: f64,
    /// Visual identity (typically dashed).
    pub style: SeriesStyle,
}

impl RefLine {
    /// Creates a reference line.
    pub fn new(label: impl Into<String>, value: f64, style: SeriesStyle) -> Self {
        Self {
            label: label.into(),
            value,
            style,
        }
    }
}

/// One chart cell: an x-axis, one or two y-axes, series, reference lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Cell title.
    pub title: String,
    /// Shared x-axis.
    pub x: Axis,
    /// Primary y-axis.
    pub y: Axis,
    /// Secondary y-axis, when the cell overlays two scales.
    pub y2: Option<Axis>,
    /// Data series in legend order.
    pub series: Vec<Series>,
    /// Horizontal reference lines.
    pub ref_lines: Vec<RefLine>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new(title: impl Into<String>, x: Axis, y: Axis) -> Self {
        Self {
            title: title.into(),
            x,
            y,
            y2: None,
            series: Vec::new(),
            ref_lines: Vec::new(),
        }
    }

    /// Binds a secondary y-axis to the cell's shared x-axis.
    pub fn with_secondary_axis(mut self, axis: Axis) -> Self {
        self.y2 = Some(axis);
        self
    }

    /// Appends a series.
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Appends a reference line.
    pub fn with_ref_line(mut self, line: RefLine) -> Self {
        self.ref_lines.push(line);
        self
    }
}

/// A complete figure: a titled fixed grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Figure title, empty for none.
    pub title: String,
    /// Number of grid columns.
    pub cols: usize,
    /// Output pixel size.
    pub size: (u32, u32),
    /// Cells in row-major order.
    pub cells: Vec<Cell>,
}

impl Figure {
    /// Creates an empty single-column figure at the default size.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cols: 1,
            size: (900, 540),
            cells: Vec::new(),
        }
    }

    /// Sets the grid column count.
    pub fn with_columns(mut self, cols: usize) -> Self {
        self.cols = cols.max(1);
        self
    }

    /// Sets the output pixel size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Appends a cell.
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Number of grid rows for the current cell count.
    pub fn rows(&self) -> usize {
        (self.cells.len() + self.cols - 1) / self.cols
    }

    /// Checks the figure invariants without touching any backend.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::EmptyPlot`] if no cell holds a series, and
    /// [`ChartError::AxisMismatch`] if a cell has fixed x ticks and any of
    /// its series does not have exactly one point per tick.
    pub fn validate(&self) -> Result<()> {
        if self.cells.iter().all(|c| c.series.is_empty()) {
            return Err(ChartError::EmptyPlot {
                title: self.title.clone(),
            });
        }

        for cell in &self.cells {
            if let Some(ticks) = &cell.x.ticks {
                for series in &cell.series {
                    if series.points.len() != ticks.len() {
                        return Err(ChartError::AxisMismatch {
                            label: series.label.clone(),
                            len: series.points.len(),
                            expected: ticks.len(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{SeriesStyle, BLUE};

    fn line(label: &str, n: usize) -> Series {
        let points = (0..n).map(|i| (i as f64, i as f64)).collect();
        Series::line(label, points, SeriesStyle::solid(BLUE))
    }

    #[test]
    fn test_empty_figure_fails_validation() {
        let figure = Figure::new("empty");
        let err = figure.validate().unwrap_err();
        assert_eq!(
            err,
            ChartError::EmptyPlot {
                title: "empty".to_string()
            }
        );
    }

    #[test]
    fn test_cell_without_series_fails_validation() {
        let figure = Figure::new("empty").with_cell(Cell::new(
            "c",
            Axis::linear("Run #"),
            Axis::linear("Time (ms)"),
        ));
        assert!(matches!(
            figure.validate(),
            Err(ChartError::EmptyPlot { .. })
        ));
    }

    #[test]
    fn test_axis_mismatch_detected() {
        let cell = Cell::new(
            "Speedup",
            Axis::log2("Number of Processes", &[1, 2, 4, 8, 16, 32]),
            Axis::linear("Speedup"),
        )
        .with_series(line("cage14", 5));
        let figure = Figure::new("scaling").with_cell(cell);

        let err = figure.validate().unwrap_err();
        assert_eq!(
            err,
            ChartError::AxisMismatch {
                label: "cage14".to_string(),
                len: 5,
                expected: 6,
            }
        );
    }

    #[test]
    fn test_matching_series_validates() {
        let cell = Cell::new(
            "Speedup",
            Axis::log2("Number of Processes", &[1, 2, 4, 8, 16, 32]),
            Axis::linear("Speedup"),
        )
        .with_series(line("cage14", 6));
        let figure = Figure::new("scaling").with_cell(cell);
        assert!(figure.validate().is_ok());
    }

    #[test]
    fn test_linear_axis_has_no_tick_constraint() {
        let cell = Cell::new("Raw", Axis::linear("Run #"), Axis::linear("Time (ms)"))
            .with_series(line("COO", 3))
            .with_series(line("CSR", 17));
        let figure = Figure::new("compare").with_cell(cell);
        assert!(figure.validate().is_ok());
    }

    #[test]
    fn test_log2_axis_ticks_are_literal() {
        let axis = Axis::log2("P", &[1, 2, 4, 8, 16, 32]);
        assert_eq!(
            axis.ticks.unwrap(),
            vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0]
        );
    }

    #[test]
    fn test_grid_rows() {
        let mut figure = Figure::new("grid").with_columns(2);
        for i in 0..6 {
            figure = figure.with_cell(
                Cell::new(
                    format!("cell {}", i),
                    Axis::linear("x"),
                    Axis::linear("y"),
                )
                .with_series(line("s", 2)),
            );
        }
        assert_eq!(figure.rows(), 3);
    }
}
