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

//! NDVI extractor. Input is a sparse per-cell sample table (satellite revisit
//! cadence, typically every ~5 days); the extractor densifies it to daily values
//! with the temporal interpolator. Days outside the observed span of a cell stay
//! unfilled and surface as NaN in the merged table.

use std::collections::BTreeMap;
use std::path::PathBuf;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use fdat_common::{config, region_fname, datetime::DateRange};
use fdat_grid::Grid;
use fdat_source::{interpolate::interpolate_daily, read_table, Result, SourceExtractor};

/// one raw per-cell NDVI sample as mapped from the satellite raster
#[derive(Debug,Clone,Deserialize)]
pub struct NdviSample {
    #[serde(alias = "GridID")]
    pub grid_id: u32,
    #[serde(alias = "Date")]
    pub date: NaiveDate,
    pub ndvi: f64,
}

/// the normalized daily NDVI observation
#[derive(Debug,Clone)]
pub struct NdviRecord {
    pub grid_id: u32,
    pub date: NaiveDate,
    pub ndvi: f64,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct NdviConfig {
    /// dir holding the normalized per-region NDVI sample tables
    pub input_dir: PathBuf,
}

impl Default for NdviConfig {
    fn default () -> Self {
        NdviConfig { input_dir: config::data_dir().join("ndvi") }
    }
}

impl NdviConfig {
    /// e.g. `FDAT_ROOT/data/ndvi/British_Columbia_ndvi.csv`
    pub fn input_path (&self, region: &str) -> PathBuf {
        self.input_dir.join( format!("{}_ndvi.csv", region_fname( region)))
    }
}

/// NDVI is a normalized ratio - anything outside [-1,1] is a raster artifact
fn is_valid_ndvi (v: f64) -> bool {
    v.is_finite() && v.abs() <= 1.0
}

/// group samples per cell, drop invalid values and densify each cell series to
/// daily records via linear interpolation (no boundary extrapolation - see
/// fdat_source::interpolate). Output is sorted by (grid_id, date).
pub fn daily_records (range: &DateRange, samples: &[NdviSample]) -> Vec<NdviRecord> {
    let mut series: BTreeMap<u32,Vec<(NaiveDate,f64)>> = BTreeMap::new();
    let mut n_invalid = 0usize;

    for s in samples {
        if is_valid_ndvi( s.ndvi) {
            series.entry( s.grid_id).or_default().push( (s.date, s.ndvi));
        } else {
            n_invalid += 1;
        }
    }

    if n_invalid > 0 {
        debug!("{} invalid NDVI samples dropped", n_invalid);
    }

    let mut records: Vec<NdviRecord> = Vec::new();
    for (grid_id,obs) in series {
        for (date,ndvi) in interpolate_daily( range, &obs) {
            records.push( NdviRecord { grid_id, date, ndvi });
        }
    }
    records
}

pub struct NdviExtractor {
    config: NdviConfig,
}

impl NdviExtractor {
    pub fn new (config: NdviConfig) -> Self {
        NdviExtractor { config }
    }
}

#[async_trait]
impl SourceExtractor for NdviExtractor {
    type Record = NdviRecord;

    fn name (&self) -> &'static str { "ndvi" }

    async fn extract (&self, grid: &Grid, range: &DateRange) -> Result<Vec<NdviRecord>> {
        let path = self.config.input_path( grid.region());
        let samples: Vec<NdviSample> = read_table( &path)?;

        let records = daily_records( range, &samples);
        info!("extracted {} daily NDVI records for {} from {} samples", records.len(), grid.region(), samples.len());
        Ok(records)
    }
}
