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

//! climate reanalysis extractor. Input is a normalized table of reanalysis sample
//! points (native source resolution, sub-daily). Alignment reconciles both the
//! spatial mismatch (sample points -> containing grid cell) and the temporal one
//! (sub-daily samples -> per-(cell,day) means).

use std::collections::HashMap;
use std::path::PathBuf;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use fdat_common::{config, region_fname, datetime::{de_naive_datetime, DateRange}};
use fdat_grid::Grid;
use fdat_source::{read_table, stats::MeanAcc, Result, SourceExtractor};

/// one normalized reanalysis sample point. Serde aliases accept the native ERA5
/// point-extract column names (valid_time, u10, v10, d2m, t2m, sp, tp).
#[derive(Debug,Clone,Deserialize)]
pub struct ClimateSample {
    #[serde(alias = "valid_time", deserialize_with = "de_naive_datetime")]
    pub time: NaiveDateTime,
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lon: f64,

    #[serde(alias = "u10")]
    pub wind_u: f64,
    #[serde(alias = "v10")]
    pub wind_v: f64,
    #[serde(alias = "d2m")]
    pub dew_point: f64,
    #[serde(alias = "t2m")]
    pub temperature: f64,
    #[serde(alias = "sp")]
    pub surface_pressure: f64,
    #[serde(alias = "tp")]
    pub precipitation: f64,
}

/// the normalized per-(cell,day) climate observation. Coordinates are the cell
/// centroid and informational only - the Grid Model overrides them in the merge.
#[derive(Debug,Clone)]
pub struct ClimateRecord {
    pub grid_id: u32,
    pub date: NaiveDate,

    pub wind_u: f64,
    pub wind_v: f64,
    pub dew_point: f64,
    pub temperature: f64,
    pub surface_pressure: f64,
    pub precipitation: f64,

    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct ClimateConfig {
    /// dir holding the normalized per-region reanalysis point extracts
    pub input_dir: PathBuf,
}

impl Default for ClimateConfig {
    fn default () -> Self {
        ClimateConfig { input_dir: config::data_dir().join("climate") }
    }
}

impl ClimateConfig {
    /// e.g. `FDAT_ROOT/data/climate/British_Columbia_climate.csv`
    pub fn input_path (&self, region: &str) -> PathBuf {
        self.input_dir.join( format!("{}_climate.csv", region_fname( region)))
    }
}

#[derive(Default)]
struct CellDayAcc {
    wind_u: MeanAcc,
    wind_v: MeanAcc,
    dew_point: MeanAcc,
    temperature: MeanAcc,
    surface_pressure: MeanAcc,
    precipitation: MeanAcc,
}

impl CellDayAcc {
    fn add (&mut self, s: &ClimateSample) {
        self.wind_u.add( s.wind_u);
        self.wind_v.add( s.wind_v);
        self.dew_point.add( s.dew_point);
        self.temperature.add( s.temperature);
        self.surface_pressure.add( s.surface_pressure);
        self.precipitation.add( s.precipitation);
    }
}

/// assign samples to grid cells by containment and average all samples of one
/// (cell, calendar day) per field. Samples outside the grid or the date range are
/// dropped. Output is sorted by (grid_id, date).
pub fn aggregate_samples (grid: &Grid, range: &DateRange, samples: &[ClimateSample]) -> Vec<ClimateRecord> {
    let mut acc: HashMap<(u32,NaiveDate),CellDayAcc> = HashMap::new();
    let mut n_dropped = 0usize;

    for s in samples {
        let date = s.time.date();
        if !range.contains( date) {
            continue
        }
        match grid.cell_at( s.lat, s.lon) {
            Some(cell) => acc.entry( (cell.id, date)).or_default().add( s),
            None => n_dropped += 1
        }
    }

    if n_dropped > 0 {
        debug!("{} climate samples outside the grid", n_dropped);
    }

    let mut records: Vec<ClimateRecord> = acc.into_iter().map( |((grid_id,date),a)| {
        let cell = grid.cell( grid_id).unwrap(); // keys come from grid.cell_at
        ClimateRecord {
            grid_id, date,
            wind_u: a.wind_u.mean(),
            wind_v: a.wind_v.mean(),
            dew_point: a.dew_point.mean(),
            temperature: a.temperature.mean(),
            surface_pressure: a.surface_pressure.mean(),
            precipitation: a.precipitation.mean(),
            lat: cell.lat,
            lon: cell.lon,
        }
    }).collect();

    records.sort_by_key( |r| (r.grid_id, r.date));
    records
}

pub struct ClimateExtractor {
    config: ClimateConfig,
}

impl ClimateExtractor {
    pub fn new (config: ClimateConfig) -> Self {
        ClimateExtractor { config }
    }
}

#[async_trait]
impl SourceExtractor for ClimateExtractor {
    type Record = ClimateRecord;

    fn name (&self) -> &'static str { "climate" }

    async fn extract (&self, grid: &Grid, range: &DateRange) -> Result<Vec<ClimateRecord>> {
        let path = self.config.input_path( grid.region());
        let samples: Vec<ClimateSample> = read_table( &path)?;

        let records = aggregate_samples( grid, range, &samples);
        info!("extracted {} climate records for {} from {} samples", records.len(), grid.region(), samples.len());
        Ok(records)
    }
}
