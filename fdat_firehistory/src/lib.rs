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

//! fire history extractor. Input is a national incident table (point coordinates,
//! report date, burned size, cause). Incidents are assigned to grid cells by
//! containment and aggregated per (cell, day). Record coordinates are replaced by
//! the cell centroid - incident positions are only used for the cell assignment.

use std::collections::HashMap;
use std::path::PathBuf;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use fdat_common::{config, datetime::{de_naive_date, DateRange}};
use fdat_grid::Grid;
use fdat_source::{read_table, Result, SourceExtractor};

/// one raw fire incident. Serde aliases accept the native national fire database
/// column names (LATITUDE, LONGITUDE, REP_DATE, SIZE_HA, CAUSE).
#[derive(Debug,Clone,Deserialize)]
pub struct FireIncident {
    #[serde(alias = "LATITUDE")]
    pub lat: f64,
    #[serde(alias = "LONGITUDE")]
    pub lon: f64,
    #[serde(alias = "REP_DATE", deserialize_with = "de_naive_date")]
    pub date: NaiveDate,
    #[serde(alias = "SIZE_HA", default)]
    pub size_ha: Option<f64>,
    #[serde(alias = "CAUSE", default)]
    pub cause: Option<String>,
}

impl FireIncident {
    /// missing or non-numeric burned size counts as 0 ha, per the upstream table convention
    pub fn size (&self) -> f64 {
        self.size_ha.filter( |v| v.is_finite()).unwrap_or(0.0)
    }
}

/// the normalized per-(cell,day) fire observation
#[derive(Debug,Clone)]
pub struct FireRecord {
    pub grid_id: u32,
    pub date: NaiveDate,

    /// total burned size of all incidents of this cell and day, in hectares
    pub total_fire_size: f64,
    /// 1 if any incident was reported for this cell and day
    pub fire_occurred: u8,
    /// cause code of the first reported incident (e.g. "H", "L", "U"), if known
    pub fire_cause: Option<String>,

    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct FireHistoryConfig {
    /// the (region independent) incident table - incidents outside the requested
    /// grid are filtered out during extraction
    pub history_file: PathBuf,
}

impl Default for FireHistoryConfig {
    fn default () -> Self {
        FireHistoryConfig { history_file: config::data_dir().join("firehistory").join("fire_history.csv") }
    }
}

/// filter incidents to the request range and grid, assign them to cells and
/// aggregate per (cell, day): `fire_occurred = 1`, sizes summed, first reported
/// cause kept. Output is sorted by (grid_id, date).
pub fn aggregate_incidents (grid: &Grid, range: &DateRange, incidents: &[FireIncident]) -> Vec<FireRecord> {
    let mut acc: HashMap<(u32,NaiveDate),FireRecord> = HashMap::new();
    let mut n_outside = 0usize;

    for inc in incidents {
        if !range.contains( inc.date) {
            continue
        }
        let Some(cell) = grid.cell_at( inc.lat, inc.lon) else {
            n_outside += 1;
            continue
        };

        acc.entry( (cell.id, inc.date))
            .and_modify( |rec| {
                rec.total_fire_size += inc.size();
                if rec.fire_cause.is_none() {
                    rec.fire_cause = inc.cause.clone();
                }
            })
            .or_insert_with( || FireRecord {
                grid_id: cell.id,
                date: inc.date,
                total_fire_size: inc.size(),
                fire_occurred: 1,
                fire_cause: inc.cause.clone(),
                lat: cell.lat,
                lon: cell.lon,
            });
    }

    if n_outside > 0 {
        debug!("{} fire incidents outside the grid", n_outside);
    }

    let mut records: Vec<FireRecord> = acc.into_values().collect();
    records.sort_by_key( |r| (r.grid_id, r.date));
    records
}

pub struct FireHistoryExtractor {
    config: FireHistoryConfig,
}

impl FireHistoryExtractor {
    pub fn new (config: FireHistoryConfig) -> Self {
        FireHistoryExtractor { config }
    }
}

#[async_trait]
impl SourceExtractor for FireHistoryExtractor {
    type Record = FireRecord;

    fn name (&self) -> &'static str { "firehistory" }

    async fn extract (&self, grid: &Grid, range: &DateRange) -> Result<Vec<FireRecord>> {
        let incidents: Vec<FireIncident> = read_table( &self.config.history_file)?;

        let records = aggregate_incidents( grid, range, &incidents);
        info!("extracted {} fire records for {} from {} incidents", records.len(), grid.region(), incidents.len());
        Ok(records)
    }
}
