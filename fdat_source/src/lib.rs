/*
 * Copyright © 2026, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “FDAT” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! the extractor contract every FDAT data source satisfies, plus the shared
//! table ingest and time series helpers. The extractors themselves live in the
//! per-source crates (fdat_climate, fdat_ndvi, fdat_firehistory, fdat_topo).

use async_trait::async_trait;

use fdat_common::datetime::DateRange;
use fdat_grid::Grid;

mod errors;
pub use errors::*;

pub mod table;
pub use table::*;

pub mod interpolate;
pub mod stats;

/// the capability each data source exposes to the pipeline: turn its (already
/// downloaded and normalized) raw extract into per-grid-cell observation records.
///
/// Dated sources (climate, NDVI, fire history) only emit records with dates inside
/// the requested range. Date-invariant sources (topography) ignore the range and
/// emit at most one record per grid cell.
///
/// Extractors are independent and read-only with respect to the Grid so the
/// pipeline can run them concurrently (fan-out) and join before the merge.
#[async_trait]
pub trait SourceExtractor {
    type Record: Send + 'static;

    /// canonical source name used in logs and error reports
    fn name (&self) -> &'static str;

    async fn extract (&self, grid: &Grid, range: &DateRange) -> Result<Vec<Self::Record>>;
}
