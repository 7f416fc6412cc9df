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

//! topography extractor. Input is a static per-cell table (elevation, slope,
//! aspect derived from a DEM). Topography is date-invariant - the merge engine
//! broadcasts one record per cell across all dates of the request.
//!
//! DEM extracts are often mosaicked from several tiles, so a cell can appear more
//! than once; duplicates are averaged field-wise, skipping NaN parts.

use std::path::PathBuf;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use fdat_common::{config, region_fname, datetime::DateRange};
use fdat_grid::Grid;
use fdat_source::{read_table, stats::MeanAcc, Result, SourceExtractor};

/// one raw per-cell topography sample. Serde aliases accept the native DEM
/// extract column names.
#[derive(Debug,Clone,Deserialize)]
pub struct TopoSample {
    #[serde(alias = "GridID")]
    pub grid_id: u32,
    #[serde(alias = "Latitude")]
    pub lat: f64,
    #[serde(alias = "Longitude")]
    pub lon: f64,

    #[serde(alias = "Elevation", default)]
    pub elevation: Option<f64>,
    #[serde(alias = "Slope", default)]
    pub slope: Option<f64>,
    #[serde(alias = "Aspect", default)]
    pub aspect: Option<f64>,
}

/// the normalized per-cell topography observation (no date - static values)
#[derive(Debug,Clone)]
pub struct TopoRecord {
    pub grid_id: u32,
    pub lat: f64,
    pub lon: f64,

    /// meters above sea level
    pub elevation: f64,
    /// degrees
    pub slope: f64,
    /// degrees clockwise from north, 0..360
    pub aspect: f64,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct TopoConfig {
    /// dir holding the normalized per-region topography tables
    pub input_dir: PathBuf,
}

impl Default for TopoConfig {
    fn default () -> Self {
        TopoConfig { input_dir: config::data_dir().join("topography") }
    }
}

impl TopoConfig {
    /// e.g. `FDAT_ROOT/data/topography/British_Columbia_topo.csv`
    pub fn input_path (&self, region: &str) -> PathBuf {
        self.input_dir.join( format!("{}_topo.csv", region_fname( region)))
    }
}

#[derive(Default)]
struct CellAcc {
    lat: f64,
    lon: f64,
    elevation: MeanAcc,
    slope: MeanAcc,
    aspect: MeanAcc,
}

/// collapse duplicate per-cell samples into one record per cell via field-wise
/// NaN-skipping means. Coordinates keep the first seen sample (they are
/// informational only - the Grid Model overrides them in the merge). Output
/// preserves first-seen cell order.
pub fn collapse_samples (samples: &[TopoSample]) -> Vec<TopoRecord> {
    let mut acc: IndexMap<u32,CellAcc> = IndexMap::new();

    for s in samples {
        let a = acc.entry( s.grid_id).or_insert_with( || CellAcc { lat: s.lat, lon: s.lon, ..Default::default() });
        a.elevation.add( s.elevation.unwrap_or( f64::NAN));
        a.slope.add( s.slope.unwrap_or( f64::NAN));
        a.aspect.add( s.aspect.unwrap_or( f64::NAN));
    }

    acc.into_iter().map( |(grid_id,a)| TopoRecord {
        grid_id,
        lat: a.lat,
        lon: a.lon,
        elevation: a.elevation.mean(),
        slope: a.slope.mean(),
        aspect: a.aspect.mean(),
    }).collect()
}

pub struct TopoExtractor {
    config: TopoConfig,
}

impl TopoExtractor {
    pub fn new (config: TopoConfig) -> Self {
        TopoExtractor { config }
    }
}

#[async_trait]
impl SourceExtractor for TopoExtractor {
    type Record = TopoRecord;

    fn name (&self) -> &'static str { "topography" }

    /// topography is date-invariant - the range is ignored
    async fn extract (&self, grid: &Grid, _range: &DateRange) -> Result<Vec<TopoRecord>> {
        let path = self.config.input_path( grid.region());
        let samples: Vec<TopoSample> = read_table( &path)?;

        let records = collapse_samples( &samples);
        info!("extracted {} topography records for {}", records.len(), grid.region());
        Ok(records)
    }
}
