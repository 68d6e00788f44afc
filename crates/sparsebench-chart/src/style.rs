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

//! Series styles and the fixed color palette.
//!
//! Styles are rendering identity only, but they must be stable across runs
//! of the same kernel or matrix so charts stay comparable. Kernels keep
//! their traditional colors (COO red, CSR blue); matrices draw from a
//! fixed palette in dataset order.

use plotters::style::RGBColor;

/// Crimson, the time-per-SpMV line color.
pub const CRIMSON: RGBColor = RGBColor(220, 20, 60);
/// Teal, the throughput line color.
pub const TEAL: RGBColor = RGBColor(0, 128, 128);
/// Dark orange, the communication-fraction line color.
pub const DARK_ORANGE: RGBColor = RGBColor(255, 140, 0);
/// Indian red, the ghost-count bar color.
pub const INDIAN_RED: RGBColor = RGBColor(205, 92, 92);
/// Purple, the speedup line color.
pub const PURPLE: RGBColor = RGBColor(128, 0, 128);
/// Slate blue, the efficiency line color.
pub const SLATE_BLUE: RGBColor = RGBColor(106, 90, 205);
/// Medium blue, the CSR series color.
pub const BLUE: RGBColor = RGBColor(31, 119, 180);
/// Forest green, the parallel-CSR series color.
pub const GREEN: RGBColor = RGBColor(44, 160, 44);
/// Neutral grey for threshold reference lines.
pub const GREY: RGBColor = RGBColor(128, 128, 128);

/// Fixed palette for per-matrix series, in legend order.
pub const PALETTE: &[RGBColor] = &[
    RGBColor(66, 133, 244),  // Blue
    RGBColor(219, 68, 55),   // Red
    RGBColor(244, 180, 0),   // Yellow
    RGBColor(15, 157, 88),   // Green
    RGBColor(128, 0, 128),   // Purple
    RGBColor(0, 172, 193),   // Cyan
];

/// Picks a palette color by series position, cycling past the end.
pub fn palette_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Point marker drawn on top of a line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// No marker, line only.
    None,
    /// Filled circle.
    Circle,
    /// Filled square.
    Square,
    /// Filled triangle.
    Triangle,
}

/// Visual identity of one series: color, marker, dash, stroke width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    /// Line and marker color.
    pub color: RGBColor,
    /// Marker drawn at each data point.
    pub marker: Marker,
    /// Whether the line is dashed.
    pub dashed: bool,
    /// Line stroke width in pixels.
    pub stroke_width: u32,
}

impl SeriesStyle {
    /// A solid line with circle markers.
    pub fn solid(color: RGBColor) -> Self {
        Self {
            color,
            marker: Marker::Circle,
            dashed: false,
            stroke_width: 2,
        }
    }

    /// A dashed line without markers, as used for reference lines.
    pub fn dashed(color: RGBColor) -> Self {
        Self {
            color,
            marker: Marker::None,
            dashed: true,
            stroke_width: 1,
        }
    }

    /// Replaces the marker.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Replaces the stroke width.
    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), palette_color(PALETTE.len()));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn test_style_builders() {
        let style = SeriesStyle::solid(CRIMSON)
            .with_marker(Marker::Square)
            .with_stroke_width(3);
        assert_eq!(style.marker, Marker::Square);
        assert_eq!(style.stroke_width, 3);
        assert!(!style.dashed);

        let reference = SeriesStyle::dashed(GREY);
        assert!(reference.dashed);
        assert_eq!(reference.marker, Marker::None);
    }
}
