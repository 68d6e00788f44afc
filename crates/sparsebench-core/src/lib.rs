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

//! Sparsebench core: benchmark aggregation for SpMV kernel studies.
//!
//! Turns raw per-run timing samples from sparse matrix-vector kernels
//! (COO, CSR, parallel CSR) and curated multi-process scaling measurements
//! into the data structures the chart layer renders.
//!
//! ## Pipeline
//!
//! - [`samples`]: load newline-delimited timing files into ordered series
//! - [`stats`]: reduce a series to mean / percentile / summary statistics
//! - [`scaling`]: per-matrix scaling metrics over a process-count axis
//!
//! Everything is synchronous and single-threaded; loaded series and tables
//! are read-only for the rest of the invocation, and every failure is fatal
//! with a message naming the offending source, line, or key.

pub mod error;
pub mod samples;
pub mod scaling;
pub mod stats;

// Re-export key types for convenience
pub use error::{BenchError, Result};
pub use samples::SampleSeries;
pub use scaling::{MatrixScalingRecord, ScalingMetric, ScalingMode, ScalingTable};
pub use stats::{mean, percentile, summarize, Summary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_then_summarize_pipeline() {
        let series = SampleSeries::from_reader(
            "COO",
            "inline",
            std::io::Cursor::new("1.0\n2.0\n3.0\n".to_string()),
        )
        .unwrap();
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(mean(&series).unwrap(), 2.0);
        assert!((percentile(&series, 90.0).unwrap() - 2.8).abs() < 1e-12);
    }

    #[test]
    fn test_scaling_tables_are_independent() {
        assert_ne!(
            ScalingTable::strong().processes().len(),
            ScalingTable::weak().processes().len()
        );
    }
}
