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

//! CLI command definitions and argument parsing.

use crate::commands::{self, KernelKind};
use crate::error::Result;
use clap::Subcommand;

/// Top-level CLI commands.
///
/// Every command reads static inputs (sample files or the embedded scaling
/// datasets) and writes exactly one SVG artifact, overwritten per run.
/// `--show` additionally prints the underlying numbers to the console.
#[derive(Subcommand)]
pub enum Commands {
    /// Compare raw kernel timing series
    ///
    /// Loads one newline-delimited sample file per selected kernel from the
    /// given directory and plots every series over the run index, with a
    /// dashed mean reference line per kernel. When no kernels are selected,
    /// all of them are included.
    Compare {
        /// Kernels to include (all if none given)
        #[arg(short, long, value_enum, value_delimiter = ',')]
        kernels: Vec<KernelKind>,

        /// Directory holding the sample files
        #[arg(short, long, default_value = ".")]
        dir: String,

        /// Output SVG path
        #[arg(short, long, default_value = "benchmark_comparison.svg")]
        output: String,

        /// Also draw this percentile as a reference line (0-100)
        #[arg(short, long, value_name = "Q")]
        percentile: Option<f64>,

        /// Print the summary table to the console
        #[arg(long)]
        show: bool,
    },

    /// Render the strong-scaling dashboard for one matrix
    ///
    /// A 2x2 grid over the fixed process counts: time + throughput,
    /// communication fraction, ghost points per rank, and speedup +
    /// efficiency.
    StrongScaling {
        /// Matrix name in the strong-scaling dataset
        #[arg(value_name = "MATRIX", default_value = "cage14")]
        matrix: String,

        /// Output SVG path
        #[arg(short, long, default_value = "strong_scaling.svg")]
        output: String,

        /// Print the metric table to the console
        #[arg(long)]
        show: bool,
    },

    /// Render the weak-scaling dashboard
    ///
    /// Same layout as strong scaling, with a problem-size panel in place of
    /// speedup + efficiency.
    WeakScaling {
        /// Matrix name in the weak-scaling dataset
        #[arg(value_name = "MATRIX", default_value = "synthetic_uniform")]
        matrix: String,

        /// Output SVG path
        #[arg(short, long, default_value = "weak_scaling.svg")]
        output: String,

        /// Print the metric table to the console
        #[arg(long)]
        show: bool,
    },

    /// Render the all-matrices metric grid
    ///
    /// A 3x2 grid with one cell per scaling metric and one line per matrix,
    /// over the strong-scaling process counts.
    Matrices {
        /// Output SVG path
        #[arg(short, long, default_value = "all_matrices.svg")]
        output: String,

        /// Print every matrix's metric table to the console
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if loading, statistics, or rendering fails; the binary
    /// surfaces the message and exits non-zero.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Compare {
                kernels,
                dir,
                output,
                percentile,
                show,
            } => commands::compare(&kernels, &dir, &output, percentile, show),
            Commands::StrongScaling {
                matrix,
                output,
                show,
            } => commands::strong_scaling(&matrix, &output, show),
            Commands::WeakScaling {
                matrix,
                output,
                show,
            } => commands::weak_scaling(&matrix, &output, show),
            Commands::Matrices { output, show } => commands::matrices(&output, show),
        }
    }
}
