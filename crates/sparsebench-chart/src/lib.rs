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

//! Sparsebench chart layer: declarative figures rendered to SVG.
//!
//! The chart layer knows nothing about kernels or matrices; it renders
//! whatever named series it is handed. Build a [`Figure`] from [`Cell`]s,
//! [`Series`] and [`RefLine`]s, then call [`render_svg`].
//!
//! ## Guarantees
//!
//! - Fixed tick positions render exactly as supplied, never auto-generated.
//! - Legend entries map 1:1 to input series, in input order.
//! - A figure that fails validation never touches the filesystem.

pub mod error;
pub mod figure;
pub mod render;
pub mod style;

// Re-export key types for convenience
pub use error::{ChartError, Result};
pub use figure::{Axis, AxisScale, Cell, Figure, RefLine, Series, SeriesKind, YSide};
pub use render::render_svg;
pub use style::{palette_color, Marker, SeriesStyle};
