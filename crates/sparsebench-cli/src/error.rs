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

//! Error types for the command-line interface.
//!
//! All CLI operations return `Result<T, CliError>` for consistent error
//! reporting: the binary prints the message to stderr and exits non-zero.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// The main error type for CLI command execution.
///
/// Wraps the core and chart error taxonomies; their messages already name
/// the offending source, line, or key, so they pass through unchanged.
#[derive(Error, Debug)]
pub enum CliError {
    /// Sample loading, statistics, or scaling-table failure.
    #[error(transparent)]
    Bench(#[from] sparsebench_core::BenchError),

    /// Figure validation or rendering failure.
    #[error(transparent)]
    Chart(#[from] sparsebench_chart::ChartError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparsebench_core::BenchError;

    #[test]
    fn test_bench_error_passes_through() {
        let err: CliError = BenchError::UnknownMetric {
            name: "latency".to_string(),
        }
        .into();
        assert!(err.to_string().contains("latency"));
    }
}
