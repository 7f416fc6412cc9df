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

//! temporal gap filling for sparse per-cell time series (the NDVI path, but
//! applicable to any scalar source sampled below daily cadence)

use chrono::NaiveDate;

use fdat_common::datetime::DateRange;

/// fill the daily gaps of one cell's sparse observation series by linear interpolation
/// between the two bracketing observations.
///
/// The result is still sparse: days before the first or after the last observation in
/// the range are NOT extrapolated and simply have no entry (they surface as NaN in the
/// merged table). A series with zero observations yields nothing; a series with a single
/// observation yields only that observation (no bracket, nothing to interpolate).
///
/// Observations outside the range are ignored; duplicate observation dates keep the
/// first seen value. Output is sorted by date and deterministic for a given input.
pub fn interpolate_daily (range: &DateRange, obs: &[(NaiveDate,f64)]) -> Vec<(NaiveDate,f64)> {
    let mut anchors: Vec<(NaiveDate,f64)> = obs.iter()
        .filter( |(date,value)| range.contains(*date) && value.is_finite())
        .copied()
        .collect();
    anchors.sort_by_key( |(date,_)| *date);
    anchors.dedup_by_key( |(date,_)| *date); // first seen wins

    let mut filled: Vec<(NaiveDate,f64)> = Vec::new();

    for pair in anchors.windows(2) {
        let (d0,v0) = pair[0];
        let (d1,v1) = pair[1];
        let span = (d1 - d0).num_days();

        filled.push( (d0,v0));
        for i in 1..span {
            let date = d0 + chrono::Duration::days(i);
            let value = v0 + (v1 - v0) * (i as f64 / span as f64);
            filled.push( (date,value));
        }
    }

    if let Some(last) = anchors.last() {
        filled.push( *last);
    }

    filled
}
