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

//! Sample series loading.
//!
//! A measurement source is a newline-delimited text stream with one
//! floating-point duration (milliseconds) per line. Blank lines are skipped;
//! everything else must parse as a finite, non-negative number. Line order is
//! the run order and is preserved, since it becomes the chart's x-axis.

use crate::error::{BenchError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An ordered series of timing samples from one benchmark source.
///
/// Read-only after construction: one series per kernel variant per
/// invocation. Values are millisecond durations in run order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    name: String,
    values: Vec<f64>,
}

impl SampleSeries {
    /// Creates a series from already-validated values.
    ///
    /// Intended for programmatic construction; file ingestion goes through
    /// [`SampleSeries::from_path`] which enforces the sample invariants.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Loads a series from a newline-delimited sample file.
    ///
    /// # Arguments
    ///
    /// * `name` - Series name used in statistics and chart legends
    /// * `path` - Path to the sample file
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::SourceUnavailable`] if the file cannot be opened
    /// or read, and [`BenchError::MalformedSample`] if any non-blank line is
    /// not a finite, non-negative number. A malformed line anywhere in the
    /// source fails the whole load; no partial series is produced.
    pub fn from_path(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| BenchError::SourceUnavailable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_reader(name, &path.display().to_string(), BufReader::new(file))
    }

    /// Loads a series from any buffered reader.
    ///
    /// # Arguments
    ///
    /// * `name` - Series name used in statistics and chart legends
    /// * `source_name` - Identifier reported in parse errors
    /// * `reader` - The sample stream
    ///
    /// # Errors
    ///
    /// Same contract as [`SampleSeries::from_path`].
    pub fn from_reader(
        name: impl Into<String>,
        source_name: &str,
        reader: impl BufRead,
    ) -> Result<Self> {
        let mut values = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| BenchError::SourceUnavailable {
                path: source_name.into(),
                message: e.to_string(),
            })?;
            let token = line.trim();
            if token.is_empty() {
                continue;
            }

            let value: f64 = token.parse().map_err(|_| BenchError::MalformedSample {
                source_name: source_name.to_string(),
                line: idx + 1,
                token: token.to_string(),
            })?;

            // "inf" and "NaN" parse as f64 but are not measurements.
            if !value.is_finite() || value < 0.0 {
                return Err(BenchError::MalformedSample {
                    source_name: source_name.to_string(),
                    line: idx + 1,
                    token: token.to_string(),
                });
            }

            values.push(value);
        }

        Ok(Self {
            name: name.into(),
            values,
        })
    }

    /// Returns the series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the samples in run order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the samples as `(run index, value)` points for plotting.
    pub fn indexed(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    fn load(input: &str) -> Result<SampleSeries> {
        SampleSeries::from_reader("test", "test.txt", Cursor::new(input.to_string()))
    }

    #[test]
    fn test_load_preserves_line_order() {
        let series = load("1.0\n2.0\n3.0\n").unwrap();
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let series = load("1.5\n\n  \n2.5\n\n").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.values(), &[1.5, 2.5]);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let series = load("  0.125  \n\t3.5\n").unwrap();
        assert_eq!(series.values(), &[0.125, 3.5]);
    }

    #[test]
    fn test_malformed_line_fails_whole_load() {
        let err = load("1.0\nabc\n3.0\n").unwrap_err();
        assert_eq!(
            err,
            BenchError::MalformedSample {
                source_name: "test.txt".to_string(),
                line: 2,
                token: "abc".to_string(),
            }
        );
    }

    #[test]
    fn test_line_number_counts_blank_lines() {
        let err = load("1.0\n\n\nbogus\n").unwrap_err();
        assert!(matches!(err, BenchError::MalformedSample { line: 4, .. }));
    }

    #[test]
    fn test_negative_and_non_finite_rejected() {
        for bad in ["-1.0", "inf", "-inf", "NaN"] {
            let err = load(&format!("1.0\n{}\n", bad)).unwrap_err();
            assert!(
                matches!(err, BenchError::MalformedSample { line: 2, .. }),
                "{} should be malformed",
                bad
            );
        }
    }

    #[test]
    fn test_empty_source_yields_empty_series() {
        let series = load("").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SampleSeries::from_path("COO", "/nonexistent/COO_exec_times.txt").unwrap_err();
        assert!(matches!(err, BenchError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CSR_exec_times.txt");
        let mut f = File::create(&path).unwrap();
        writeln!(f, "0.021\n0.096\n\n0.025").unwrap();

        let series = SampleSeries::from_path("CSR", &path).unwrap();
        assert_eq!(series.name(), "CSR");
        assert_eq!(series.values(), &[0.021, 0.096, 0.025]);
    }

    #[test]
    fn test_indexed_points() {
        let series = SampleSeries::new("x", vec![5.0, 6.0]);
        let pts: Vec<(f64, f64)> = series.indexed().collect();
        assert_eq!(pts, vec![(0.0, 5.0), (1.0, 6.0)]);
    }
}
