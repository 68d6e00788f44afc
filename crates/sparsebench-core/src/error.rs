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

//! Error types for benchmark aggregation.
//!
//! Every failure in the core pipeline is fatal to the current invocation and
//! carries enough context (source path, line number, key) to identify the
//! offending input. Nothing is silently recovered: a partial or incorrect
//! benchmark summary is worse than a failed run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchmark aggregation operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// The main error type for sample loading, statistics, and scaling tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchError {
    /// The measurement source could not be opened or read.
    #[error("cannot read sample source '{path}': {message}")]
    SourceUnavailable {
        /// The path that failed to open or read.
        path: PathBuf,
        /// The underlying I/O error message.
        message: String,
    },

    /// A non-blank line in a measurement source did not parse as a sample.
    ///
    /// Samples are finite, non-negative millisecond durations; NaN, infinities
    /// and negative values are malformed data, not measurements.
    #[error("malformed sample in '{source_name}' at line {line}: {token:?} is not a non-negative duration")]
    MalformedSample {
        /// The source the line came from.
        source_name: String,
        /// 1-based line number of the offending token.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// A statistic was requested over a series with no samples.
    #[error("sample series '{name}' is empty")]
    EmptySeries {
        /// Name of the offending series.
        name: String,
    },

    /// A percentile was requested outside the valid range.
    #[error("quantile {q} is outside the valid range 0..=100")]
    InvalidQuantile {
        /// The rejected quantile value.
        q: f64,
    },

    /// A matrix name was not found in the scaling table.
    #[error("unknown matrix '{name}' in scaling table '{table}'")]
    UnknownMatrix {
        /// The requested matrix name.
        name: String,
        /// Label of the table that was queried.
        table: String,
    },

    /// A metric name was not one of the six scaling metrics.
    #[error("unknown scaling metric '{name}' (expected one of: avg_time, speedup, efficiency, comm_pct, gflops, avg_ghost)")]
    UnknownMetric {
        /// The requested metric name.
        name: String,
    },

    /// A scaling dataset violated a construction invariant.
    #[error("invalid scaling dataset '{table}': {message}")]
    InvalidDataset {
        /// Label of the offending dataset.
        table: String,
        /// Description of the violated invariant.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_sample_display() {
        let err = BenchError::MalformedSample {
            source_name: "COO_exec_times.txt".to_string(),
            line: 7,
            token: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("COO_exec_times.txt"));
        assert!(msg.contains("line 7"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_unknown_matrix_display() {
        let err = BenchError::UnknownMatrix {
            name: "unknown_matrix".to_string(),
            table: "strong_scaling".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown_matrix"));
        assert!(msg.contains("strong_scaling"));
    }

    #[test]
    fn test_unknown_metric_lists_valid_names() {
        let err = BenchError::UnknownMetric {
            name: "latency".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("latency"));
        assert!(msg.contains("gflops"));
    }

    #[test]
    fn test_error_equality() {
        let a = BenchError::InvalidQuantile { q: 120.0 };
        let b = BenchError::InvalidQuantile { q: 120.0 };
        let c = BenchError::InvalidQuantile { q: -1.0 };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
