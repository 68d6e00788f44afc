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

//! Sparsebench Command Line Interface

use clap::Parser;
use sparsebench_cli::cli::Commands;
use std::process::ExitCode;

/// Sparsebench - SpMV benchmark analytics toolkit
///
/// Turns raw SpMV kernel timing samples and curated scaling measurements
/// into summary statistics and comparison charts.
///
/// # Examples
///
/// ```bash
/// # Compare COO and CSR timing series from the current directory
/// sparsebench compare --kernels coo,csr
///
/// # Strong-scaling dashboard for one matrix
/// sparsebench strong-scaling cage14 --output strong_scaling.svg
///
/// # All-matrices metric grid with console tables
/// sparsebench matrices --show
/// ```
#[derive(Parser)]
#[command(name = "sparsebench")]
#[command(author, version, about = "Sparsebench - SpMV benchmark analytics toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
