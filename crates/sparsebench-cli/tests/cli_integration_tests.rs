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

//! End-to-end tests for the sparsebench binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Test helper to create a sparsebench command
fn sparsebench_cmd() -> Command {
    Command::cargo_bin("sparsebench").expect("Failed to find sparsebench binary")
}

/// Create a temporary directory with the three kernel sample files
fn create_sample_files() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("COO_exec_times.txt"), "1.0\n2.0\n3.0\n").unwrap();
    fs::write(dir.path().join("CSR_exec_times.txt"), "0.5\n\n1.5\n2.5\n").unwrap();
    fs::write(
        dir.path().join("Parallel_CSR_exec_times.txt"),
        "0.25\n0.75\n1.25\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_compare_writes_artifact_and_prints_averages() {
    let dir = create_sample_files();
    let output = dir.path().join("comparison.svg");

    sparsebench_cmd()
        .args(["compare", "--dir"])
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("COO average: 2.00000000 ms"))
        .stdout(predicate::str::contains("CSR average: 1.50000000 ms"));

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("COO times"));
    assert!(svg.contains("CSR times"));
    assert!(svg.contains("Parallel CSR times"));
}

#[test]
fn test_compare_kernel_selection_skips_unselected_files() {
    let dir = tempdir().unwrap();
    // Only the COO file exists; selecting just COO must succeed.
    fs::write(dir.path().join("COO_exec_times.txt"), "1.0\n2.0\n").unwrap();
    let output = dir.path().join("coo.svg");

    sparsebench_cmd()
        .args(["compare", "--kernels", "coo", "--dir"])
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("COO average"));

    let svg = fs::read_to_string(&output).unwrap();
    assert!(!svg.contains("CSR times"));
}

#[test]
fn test_compare_missing_file_fails_with_path() {
    let dir = tempdir().unwrap();

    sparsebench_cmd()
        .args(["compare", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("COO_exec_times.txt"));
}

#[test]
fn test_compare_malformed_sample_fails_with_line() {
    let dir = create_sample_files();
    fs::write(dir.path().join("CSR_exec_times.txt"), "1.0\nabc\n3.0\n").unwrap();

    sparsebench_cmd()
        .args(["compare", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn test_compare_empty_sample_file_fails() {
    let dir = create_sample_files();
    fs::write(dir.path().join("COO_exec_times.txt"), "\n\n").unwrap();

    sparsebench_cmd()
        .args(["compare", "--kernels", "coo", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_compare_invalid_percentile_fails() {
    let dir = create_sample_files();

    sparsebench_cmd()
        .args(["compare", "--percentile", "150", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("0..=100"));
}

#[test]
fn test_compare_show_prints_summary_table() {
    let dir = create_sample_files();
    let output = dir.path().join("comparison.svg");

    sparsebench_cmd()
        .args(["compare", "--show", "--percentile", "90", "--dir"])
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kernel Timing Summary"))
        .stdout(predicate::str::contains("p90 (ms)"));
}

#[test]
fn test_strong_scaling_writes_dashboard() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("strong.svg");

    sparsebench_cmd()
        .args(["strong-scaling", "cage14", "--output"])
        .arg(&output)
        .assert()
        .success();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Ghost Points per Rank"));
    assert!(svg.contains("Efficiency (%)"));
    for p in [1, 2, 4, 8, 16, 32] {
        assert!(svg.contains(&format!("P={}", p)), "missing tick P={}", p);
    }
}

#[test]
fn test_strong_scaling_unknown_matrix_fails() {
    sparsebench_cmd()
        .args(["strong-scaling", "unknown_matrix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown matrix 'unknown_matrix'"));
}

#[test]
fn test_weak_scaling_writes_dashboard() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("weak.svg");

    sparsebench_cmd()
        .args(["weak-scaling", "--output"])
        .arg(&output)
        .assert()
        .success();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Problem Size Scaling"));
    assert!(svg.contains("P=16"));
    assert!(!svg.contains("P=32"));
}

#[test]
fn test_matrices_grid_with_console_tables() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("all.svg");

    sparsebench_cmd()
        .args(["matrices", "--show", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("1138_bus"))
        .stdout(predicate::str::contains("Queen_4147"));

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Average Time (ms)"));
    assert!(svg.contains("Average Ghost Count"));
    assert!(svg.contains("nlpkkt160"));
}
