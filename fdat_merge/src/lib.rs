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

//! the FDAT merge engine. Takes the normalized records of all extractors and
//! produces one row per (cell, day) of the request - the row set is the full
//! cross product of the Grid Model cells and the date range, independent of how
//! sparse the sources are. Cell coordinates always come from the Grid Model.
//!
//! Missing source data never removes a row, it surfaces as the per-source
//! missing fill (NaN for measurements, 0 for fire occurrence). A source that
//! failed to extract altogether just contributes an empty record set.

use std::collections::{hash_map::Entry, HashMap};
use chrono::NaiveDate;
use tracing::{info, warn};

use fdat_common::datetime::DateRange;
use fdat_grid::Grid;
use fdat_source::stats::MeanAcc;
use fdat_climate::ClimateRecord;
use fdat_firehistory::FireRecord;
use fdat_ndvi::NdviRecord;
use fdat_topo::TopoRecord;

mod errors;
pub use errors::*;

pub mod writer;

/// the climate column group of a merged row
#[derive(Debug,Clone)]
pub struct ClimateFields {
    pub wind_u: f64,
    pub wind_v: f64,
    pub dew_point: f64,
    pub temperature: f64,
    pub surface_pressure: f64,
    pub precipitation: f64,
}

impl ClimateFields {
    /// fill for a (cell, day) without climate data
    pub fn missing () -> Self {
        ClimateFields {
            wind_u: f64::NAN,
            wind_v: f64::NAN,
            dew_point: f64::NAN,
            temperature: f64::NAN,
            surface_pressure: f64::NAN,
            precipitation: f64::NAN,
        }
    }
}

impl From<&ClimateRecord> for ClimateFields {
    fn from (r: &ClimateRecord) -> Self {
        ClimateFields {
            wind_u: r.wind_u,
            wind_v: r.wind_v,
            dew_point: r.dew_point,
            temperature: r.temperature,
            surface_pressure: r.surface_pressure,
            precipitation: r.precipitation,
        }
    }
}

/// the fire column group of a merged row
#[derive(Debug,Clone)]
pub struct FireFields {
    pub total_fire_size: f64,
    pub fire_occurred: u8,
    pub fire_cause: Option<String>,
}

impl FireFields {
    /// fill for a (cell, day) without reported fires: explicitly no fire, size 0.
    /// Unlike measurements, fire absence is a statement, not a data gap.
    pub fn missing () -> Self {
        FireFields { total_fire_size: 0.0, fire_occurred: 0, fire_cause: None }
    }

    /// combine duplicate fire records of one (cell, day): sizes are additive,
    /// occurrence saturates at 1, the first reported cause wins
    pub fn combine (&mut self, r: &FireRecord) {
        self.total_fire_size += r.total_fire_size;
        self.fire_occurred = self.fire_occurred.max( r.fire_occurred);
        if self.fire_cause.is_none() {
            self.fire_cause = r.fire_cause.clone();
        }
    }
}

impl From<&FireRecord> for FireFields {
    fn from (r: &FireRecord) -> Self {
        FireFields {
            total_fire_size: r.total_fire_size,
            fire_occurred: r.fire_occurred,
            fire_cause: r.fire_cause.clone(),
        }
    }
}

/// the topography column group of a merged row
#[derive(Debug,Clone)]
pub struct TopoFields {
    pub elevation: f64,
    pub slope: f64,
    pub aspect: f64,
}

impl TopoFields {
    /// fill for a cell without topography data
    pub fn missing () -> Self {
        TopoFields { elevation: f64::NAN, slope: f64::NAN, aspect: f64::NAN }
    }
}

/// one row of the merged dataset. Coordinates are the Grid Model cell centroid
#[derive(Debug,Clone)]
pub struct MergedRecord {
    pub grid_id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,

    pub climate: ClimateFields,
    pub fire: FireFields,
    pub ndvi: f64,
    pub topo: TopoFields,
}

fn index_climate (grid: &Grid, range: &DateRange, records: &[ClimateRecord]) -> HashMap<(u32,NaiveDate),ClimateFields> {
    let mut map: HashMap<(u32,NaiveDate),ClimateFields> = HashMap::with_capacity( records.len());
    for r in records {
        if !grid.contains_id( r.grid_id) {
            warn!("dropping climate record for unknown grid cell {}", r.grid_id);
            continue
        }
        if !range.contains( r.date) { continue }

        if map.contains_key( &(r.grid_id, r.date)) {
            warn!("duplicate climate record for cell {} on {}, keeping the first", r.grid_id, r.date);
        } else {
            map.insert( (r.grid_id, r.date), ClimateFields::from( r));
        }
    }
    map
}

fn index_fire (grid: &Grid, range: &DateRange, records: &[FireRecord]) -> HashMap<(u32,NaiveDate),FireFields> {
    let mut map: HashMap<(u32,NaiveDate),FireFields> = HashMap::with_capacity( records.len());
    for r in records {
        if !grid.contains_id( r.grid_id) {
            warn!("dropping fire record for unknown grid cell {}", r.grid_id);
            continue
        }
        if !range.contains( r.date) { continue }

        match map.entry( (r.grid_id, r.date)) {
            Entry::Occupied(mut e) => {
                warn!("duplicate fire record for cell {} on {}, combining", r.grid_id, r.date);
                e.get_mut().combine( r);
            }
            Entry::Vacant(e) => { e.insert( FireFields::from( r)); }
        }
    }
    map
}

fn index_ndvi (grid: &Grid, range: &DateRange, records: &[NdviRecord]) -> HashMap<(u32,NaiveDate),f64> {
    let mut map: HashMap<(u32,NaiveDate),f64> = HashMap::with_capacity( records.len());
    for r in records {
        if !grid.contains_id( r.grid_id) {
            warn!("dropping NDVI record for unknown grid cell {}", r.grid_id);
            continue
        }
        if !range.contains( r.date) { continue }

        if map.contains_key( &(r.grid_id, r.date)) {
            warn!("duplicate NDVI record for cell {} on {}, keeping the first", r.grid_id, r.date);
        } else {
            map.insert( (r.grid_id, r.date), r.ndvi);
        }
    }
    map
}

#[derive(Default)]
struct TopoAcc {
    elevation: MeanAcc,
    slope: MeanAcc,
    aspect: MeanAcc,
}

fn index_topo (grid: &Grid, records: &[TopoRecord]) -> HashMap<u32,TopoFields> {
    let mut acc: HashMap<u32,TopoAcc> = HashMap::with_capacity( records.len());
    for r in records {
        if !grid.contains_id( r.grid_id) {
            warn!("dropping topography record for unknown grid cell {}", r.grid_id);
            continue
        }
        let a = acc.entry( r.grid_id).or_default();
        a.elevation.add( r.elevation);
        a.slope.add( r.slope);
        a.aspect.add( r.aspect);
    }

    acc.into_iter().map( |(id,a)| (id, TopoFields {
        elevation: a.elevation.mean(),
        slope: a.slope.mean(),
        aspect: a.aspect.mean(),
    })).collect()
}

/// assemble the merged dataset: exactly one row per (cell, day), cells in grid
/// definition order, days ascending within each cell. Records for unknown cells
/// or outside the range are dropped with a warning, missing (cell, day) data is
/// filled per source. Topography is date-invariant and broadcast across all days
/// of a cell.
pub fn merge (grid: &Grid, range: &DateRange,
              climate: &[ClimateRecord], fire: &[FireRecord],
              ndvi: &[NdviRecord], topo: &[TopoRecord]) -> Vec<MergedRecord>
{
    let mut climate_idx = index_climate( grid, range, climate);
    let mut fire_idx = index_fire( grid, range, fire);
    let ndvi_idx = index_ndvi( grid, range, ndvi);
    let topo_idx = index_topo( grid, topo);

    let mut rows: Vec<MergedRecord> = Vec::with_capacity( grid.len() * range.num_days() as usize);

    for cell in grid.cells() {
        let topo_f = topo_idx.get( &cell.id).cloned().unwrap_or_else( TopoFields::missing);

        for date in range.iter() {
            let key = (cell.id, date);
            rows.push( MergedRecord {
                grid_id: cell.id,
                latitude: cell.lat,
                longitude: cell.lon,
                date,
                climate: climate_idx.remove( &key).unwrap_or_else( ClimateFields::missing),
                fire: fire_idx.remove( &key).unwrap_or_else( FireFields::missing),
                ndvi: ndvi_idx.get( &key).copied().unwrap_or( f64::NAN),
                topo: topo_f.clone(),
            });
        }
    }

    info!("merged {} rows ({} cells x {} days) for {}", rows.len(), grid.len(), range.num_days(), grid.region());
    rows
}
