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

//! CSV output for merged datasets. Column order is fixed so downstream training
//! pipelines can rely on it. NaN measurements and unknown causes are written as
//! empty fields.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use fdat_common::{fs::ensure_dir, datetime::DATE_FMT};
use crate::{MergedRecord, Result};

/// the canonical column order of a merged dataset file
pub const COLUMNS: [&str; 17] = [
    "grid_id", "latitude", "longitude", "date",
    "wind_u", "wind_v", "dew_point", "temperature", "surface_pressure", "precipitation",
    "total_fire_size", "fire_occurred", "fire_cause",
    "ndvi",
    "elevation", "slope", "aspect",
];

/// non-finite measurements (the missing fill) serialize to empty fields
fn fmt_f64 (v: f64) -> String {
    if v.is_finite() { v.to_string() } else { String::new() }
}

pub fn write_csv_to<W: Write> (records: &[MergedRecord], w: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer( w);
    wtr.write_record( &COLUMNS)?;

    for r in records {
        wtr.write_record( &[
            r.grid_id.to_string(),
            fmt_f64( r.latitude),
            fmt_f64( r.longitude),
            r.date.format( DATE_FMT).to_string(),
            fmt_f64( r.climate.wind_u),
            fmt_f64( r.climate.wind_v),
            fmt_f64( r.climate.dew_point),
            fmt_f64( r.climate.temperature),
            fmt_f64( r.climate.surface_pressure),
            fmt_f64( r.climate.precipitation),
            fmt_f64( r.fire.total_fire_size),
            r.fire.fire_occurred.to_string(),
            r.fire.fire_cause.clone().unwrap_or_default(),
            fmt_f64( r.ndvi),
            fmt_f64( r.topo.elevation),
            fmt_f64( r.topo.slope),
            fmt_f64( r.topo.aspect),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_csv (records: &[MergedRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            ensure_dir( dir)?;
        }
    }

    write_csv_to( records, File::create( path)?)?;
    info!("wrote {} rows to {:?}", records.len(), path);
    Ok(())
}
