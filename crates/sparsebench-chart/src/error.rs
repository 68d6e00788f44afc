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

//! Error types for figure validation and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// The main error type for figure validation and SVG rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A figure was rendered with no series in any cell.
    #[error("figure '{title}' has no series to plot")]
    EmptyPlot {
        /// Title of the offending figure.
        title: String,
    },

    /// A series length does not match its cell's fixed x-axis tick count.
    #[error("series '{label}' has {len} points but the x-axis has {expected} ticks")]
    AxisMismatch {
        /// Label of the offending series.
        label: String,
        /// Number of points in the series.
        len: usize,
        /// Number of ticks on the cell's x-axis.
        expected: usize,
    },

    /// The drawing backend failed while writing the artifact.
    #[error("failed to render '{path}': {message}")]
    Render {
        /// Output path of the artifact.
        path: PathBuf,
        /// Backend error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_mismatch_display() {
        let err = ChartError::AxisMismatch {
            label: "cage14".to_string(),
            len: 5,
            expected: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("cage14"));
        assert!(msg.contains('5'));
        assert!(msg.contains('6'));
    }
}
