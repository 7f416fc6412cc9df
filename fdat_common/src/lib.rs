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

//! common types and helpers shared by all FDAT crates: dates and date ranges,
//! geographic primitives and the FDAT_ROOT based config/data lookup

pub mod datetime;
pub mod geo;
pub mod fs;
pub mod config;

/// turn a user supplied region name into its canonical filename form (e.g. "British Columbia" -> "British_Columbia")
pub fn region_fname (region: &str) -> String {
    region.trim().replace(' ', "_")
}
