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

//! Curated scaling-metrics tables.
//!
//! Each table maps matrix name to one [`MatrixScalingRecord`]: six parallel
//! metric arrays over a fixed process-count axis, assembled from prior MPI
//! benchmark runs rather than computed live. Strong and weak scaling are
//! independent tables with independent axes and are never merged.
//!
//! The shipped datasets are JSON resources embedded at compile time and
//! parsed once on first access; external datasets go through the same
//! validating [`ScalingTable::from_json`] constructor.

use crate::error::{BenchError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Scaling-study mode of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingMode {
    /// Fixed total problem size, increasing process count.
    Strong,
    /// Problem size grows proportionally with process count.
    Weak,
}

/// The six derived metrics every scaling record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalingMetric {
    /// Average time per SpMV in milliseconds.
    AvgTime,
    /// Baseline time divided by time at P processes.
    Speedup,
    /// Speedup over P (strong) or retained baseline performance (weak), in percent.
    Efficiency,
    /// Share of each iteration spent in halo exchange, in percent.
    CommPct,
    /// Achieved floating-point throughput (2·nnz per SpMV).
    Gflops,
    /// Average ghost entries received per rank.
    AvgGhost,
}

impl ScalingMetric {
    /// All six metrics, in dashboard order.
    pub const ALL: [ScalingMetric; 6] = [
        ScalingMetric::AvgTime,
        ScalingMetric::Speedup,
        ScalingMetric::Efficiency,
        ScalingMetric::CommPct,
        ScalingMetric::Gflops,
        ScalingMetric::AvgGhost,
    ];

    /// The metric's stable lookup name.
    pub fn name(&self) -> &'static str {
        match self {
            ScalingMetric::AvgTime => "avg_time",
            ScalingMetric::Speedup => "speedup",
            ScalingMetric::Efficiency => "efficiency",
            ScalingMetric::CommPct => "comm_pct",
            ScalingMetric::Gflops => "gflops",
            ScalingMetric::AvgGhost => "avg_ghost",
        }
    }

    /// Resolves a lookup name to a metric.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::UnknownMetric`] for any name that is not one of
    /// the six metrics.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| BenchError::UnknownMetric {
                name: name.to_string(),
            })
    }

    /// Chart cell title for this metric.
    pub fn title(&self) -> &'static str {
        match self {
            ScalingMetric::AvgTime => "Average Time (ms)",
            ScalingMetric::Speedup => "Speedup",
            ScalingMetric::Efficiency => "Efficiency (%)",
            ScalingMetric::CommPct => "Communication %",
            ScalingMetric::Gflops => "GFLOPs",
            ScalingMetric::AvgGhost => "Average Ghost Count",
        }
    }

    /// Y-axis label for this metric.
    pub fn axis_label(&self) -> &'static str {
        match self {
            ScalingMetric::AvgTime => "Time (ms)",
            ScalingMetric::Speedup => "Speedup",
            ScalingMetric::Efficiency => "Efficiency (%)",
            ScalingMetric::CommPct => "Comm %",
            ScalingMetric::Gflops => "GFLOPs",
            ScalingMetric::AvgGhost => "Ghost Count",
        }
    }
}

/// Scaling metrics for one matrix over the table's process-count axis.
///
/// All six arrays have the same length as the axis; that invariant is
/// enforced when the table is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixScalingRecord {
    /// Matrix name (unique within a table).
    pub name: String,
    /// Average time per SpMV, milliseconds.
    pub avg_time_ms: Vec<f64>,
    /// Speedup relative to the smallest-P baseline.
    pub speedup: Vec<f64>,
    /// Parallel efficiency, percent.
    pub efficiency_pct: Vec<f64>,
    /// Communication fraction, percent.
    pub comm_pct: Vec<f64>,
    /// Achieved GFLOP/s.
    pub gflops: Vec<f64>,
    /// Average ghost entries per rank.
    pub avg_ghost: Vec<f64>,
    /// Global row count per run (weak scaling only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_rows: Option<Vec<f64>>,
    /// Nonzeros touched per SpMV (weak scaling only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nnz_per_spmv: Option<Vec<f64>>,
}

impl MatrixScalingRecord {
    /// Returns the array for one metric.
    pub fn metric(&self, metric: ScalingMetric) -> &[f64] {
        match metric {
            ScalingMetric::AvgTime => &self.avg_time_ms,
            ScalingMetric::Speedup => &self.speedup,
            ScalingMetric::Efficiency => &self.efficiency_pct,
            ScalingMetric::CommPct => &self.comm_pct,
            ScalingMetric::Gflops => &self.gflops,
            ScalingMetric::AvgGhost => &self.avg_ghost,
        }
    }
}

#[derive(Deserialize)]
struct RawTable {
    mode: ScalingMode,
    processes: Vec<u32>,
    matrices: Vec<MatrixScalingRecord>,
}

/// A static lookup table of per-matrix scaling records.
///
/// Record order is the dataset order, so chart legends stay stable across
/// runs. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ScalingTable {
    label: String,
    mode: ScalingMode,
    processes: Vec<u32>,
    records: Vec<MatrixScalingRecord>,
}

impl ScalingTable {
    /// Parses and validates a scaling dataset from JSON.
    ///
    /// # Arguments
    ///
    /// * `label` - Table label used in error messages
    /// * `json` - The dataset text
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidDataset`] when the JSON does not parse,
    /// the process axis is empty or not strictly increasing, a record's
    /// arrays do not all match the axis length, matrix names collide, or a
    /// strong-scaling record violates the P-baseline invariants
    /// (`speedup[0] == 1.0`, `efficiency_pct[0] == 100.0`).
    pub fn from_json(label: impl Into<String>, json: &str) -> Result<Self> {
        let label = label.into();
        let invalid = |message: String| BenchError::InvalidDataset {
            table: label.clone(),
            message,
        };

        let raw: RawTable =
            serde_json::from_str(json).map_err(|e| invalid(format!("parse error: {}", e)))?;

        if raw.processes.is_empty() {
            return Err(invalid("process-count axis is empty".to_string()));
        }
        if !raw.processes.windows(2).all(|w| w[0] < w[1]) {
            return Err(invalid(
                "process-count axis must be strictly increasing".to_string(),
            ));
        }
        if raw.matrices.is_empty() {
            return Err(invalid("dataset holds no matrices".to_string()));
        }

        let axis_len = raw.processes.len();
        for record in &raw.matrices {
            if raw
                .matrices
                .iter()
                .filter(|other| other.name == record.name)
                .count()
                > 1
            {
                return Err(invalid(format!("duplicate matrix name '{}'", record.name)));
            }

            let lengths = [
                ("avg_time_ms", record.avg_time_ms.len()),
                ("speedup", record.speedup.len()),
                ("efficiency_pct", record.efficiency_pct.len()),
                ("comm_pct", record.comm_pct.len()),
                ("gflops", record.gflops.len()),
                ("avg_ghost", record.avg_ghost.len()),
            ];
            for (field, len) in lengths {
                if len != axis_len {
                    return Err(invalid(format!(
                        "matrix '{}': {} has {} points but the axis has {}",
                        record.name, field, len, axis_len
                    )));
                }
            }
            for (field, extra) in [
                ("global_rows", &record.global_rows),
                ("nnz_per_spmv", &record.nnz_per_spmv),
            ] {
                if let Some(values) = extra {
                    if values.len() != axis_len {
                        return Err(invalid(format!(
                            "matrix '{}': {} has {} points but the axis has {}",
                            record.name,
                            field,
                            values.len(),
                            axis_len
                        )));
                    }
                }
            }

            if raw.mode == ScalingMode::Strong {
                if (record.speedup[0] - 1.0).abs() > 1e-9 {
                    return Err(invalid(format!(
                        "matrix '{}': strong-scaling speedup baseline must be 1.0, got {}",
                        record.name, record.speedup[0]
                    )));
                }
                if (record.efficiency_pct[0] - 100.0).abs() > 1e-9 {
                    return Err(invalid(format!(
                        "matrix '{}': strong-scaling efficiency baseline must be 100.0, got {}",
                        record.name, record.efficiency_pct[0]
                    )));
                }
            }
        }

        Ok(Self {
            label,
            mode: raw.mode,
            processes: raw.processes,
            records: raw.matrices,
        })
    }

    /// The strong-scaling table shipped with the toolkit.
    ///
    /// Parsed once from the embedded dataset and immutable thereafter; a
    /// corrupt embedded resource fails fast at first access.
    pub fn strong() -> &'static ScalingTable {
        static TABLE: Lazy<ScalingTable> = Lazy::new(|| {
            ScalingTable::from_json("strong_scaling", include_str!("../data/strong_scaling.json"))
                .expect("embedded strong-scaling dataset is valid")
        });
        &TABLE
    }

    /// The weak-scaling table shipped with the toolkit.
    pub fn weak() -> &'static ScalingTable {
        static TABLE: Lazy<ScalingTable> = Lazy::new(|| {
            ScalingTable::from_json("weak_scaling", include_str!("../data/weak_scaling.json"))
                .expect("embedded weak-scaling dataset is valid")
        });
        &TABLE
    }

    /// Returns the table label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the scaling mode.
    pub fn mode(&self) -> ScalingMode {
        self.mode
    }

    /// Returns the process-count axis.
    pub fn processes(&self) -> &[u32] {
        &self.processes
    }

    /// Returns all records in dataset order.
    pub fn records(&self) -> &[MatrixScalingRecord] {
        &self.records
    }

    /// Returns the matrix names in dataset order.
    pub fn matrix_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Looks up the record for one matrix.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::UnknownMatrix`] if the name is not present.
    pub fn record(&self, name: &str) -> Result<&MatrixScalingRecord> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| BenchError::UnknownMatrix {
                name: name.to_string(),
                table: self.label.clone(),
            })
    }

    /// Returns the metric array for one matrix by metric name.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::UnknownMatrix`] for an unknown matrix and
    /// [`BenchError::UnknownMetric`] for a name outside the six metrics.
    pub fn metric_series(&self, matrix: &str, metric: &str) -> Result<&[f64]> {
        let metric = ScalingMetric::from_name(metric)?;
        Ok(self.record(matrix)?.metric(metric))
    }
}
