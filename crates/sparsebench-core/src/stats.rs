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

//! Summary statistics over sample series.
//!
//! All functions are pure and deterministic: the input series is never
//! mutated, and an empty series is an error rather than a silent zero.
//! Percentiles use the standard linear-interpolation rule between order
//! statistics.

use crate::error::{BenchError, Result};
use crate::samples::SampleSeries;

/// Summary statistics of one sample series.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Arithmetic mean.
    pub mean: f64,
    /// The `quantile`-th percentile (linear interpolation).
    pub percentile: f64,
    /// The quantile the percentile was computed at.
    pub quantile: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Number of samples.
    pub count: usize,
}

/// Computes the arithmetic mean of a series.
///
/// # Errors
///
/// Returns [`BenchError::EmptySeries`] if the series has no samples.
pub fn mean(series: &SampleSeries) -> Result<f64> {
    if series.is_empty() {
        return Err(BenchError::EmptySeries {
            name: series.name().to_string(),
        });
    }
    let sum: f64 = series.values().iter().sum();
    Ok(sum / series.len() as f64)
}

/// Computes the q-th percentile of a series with linear interpolation.
///
/// For rank `r = q/100 * (n - 1)`, the result interpolates between the
/// `floor(r)`-th and `ceil(r)`-th order statistics, so `percentile(s, 0)`
/// is the minimum and `percentile(s, 100)` the maximum.
///
/// # Arguments
///
/// * `series` - The sample series
/// * `q` - Quantile in `0..=100`
///
/// # Errors
///
/// Returns [`BenchError::EmptySeries`] if the series has no samples, and
/// [`BenchError::InvalidQuantile`] if `q` is NaN or outside `0..=100`.
pub fn percentile(series: &SampleSeries, q: f64) -> Result<f64> {
    if series.is_empty() {
        return Err(BenchError::EmptySeries {
            name: series.name().to_string(),
        });
    }
    if !(0.0..=100.0).contains(&q) {
        return Err(BenchError::InvalidQuantile { q });
    }

    let mut sorted = series.values().to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Computes the full summary of a series at the given quantile.
///
/// Bundles the mean, the q-th percentile, min, max, standard deviation and
/// sample count in one pass over the data.
///
/// # Errors
///
/// Same contract as [`mean`] and [`percentile`].
pub fn summarize(series: &SampleSeries, q: f64) -> Result<Summary> {
    let mean = mean(series)?;
    let percentile = percentile(series, q)?;

    let values = series.values();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    Ok(Summary {
        mean,
        percentile,
        quantile: q,
        min,
        max,
        std_dev: variance.sqrt(),
        count: values.len(),
    })
}
