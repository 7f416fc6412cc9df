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

use fdat_climate::{aggregate_samples, ClimateSample};
use fdat_common::{datetime::{parse_datetime, DateRange}, geo::BoundingBox};
use fdat_grid::{Grid, GridCell};

fn test_grid () -> Grid {
    Grid::from_cells( "Testland", vec![
        GridCell::new( 1, BoundingBox::from_wsen( -120.0, 50.0, -119.9, 50.1)),
        GridCell::new( 2, BoundingBox::from_wsen( -119.9, 50.0, -119.8, 50.1)),
    ]).unwrap()
}

fn sample (time: &str, lat: f64, lon: f64, temperature: f64) -> ClimateSample {
    ClimateSample {
        time: parse_datetime(time).unwrap(),
        lat, lon,
        wind_u: 1.0, wind_v: -1.0, dew_point: 280.0, temperature,
        surface_pressure: 101325.0, precipitation: 0.001,
    }
}

#[test]
fn test_daily_mean_aggregation() {
    let grid = test_grid();
    let range = DateRange::parse( "2023-05-01", "2023-05-02").unwrap();

    let samples = vec![
        sample( "2023-05-01 00:00:00", 50.05, -119.95, 270.0), // cell 1
        sample( "2023-05-01 12:00:00", 50.06, -119.94, 280.0), // cell 1, same day
        sample( "2023-05-02 12:00:00", 50.05, -119.95, 290.0), // cell 1, next day
        sample( "2023-05-01 12:00:00", 50.05, -119.85, 300.0), // cell 2
    ];

    let records = aggregate_samples( &grid, &range, &samples);
    assert_eq!( records.len(), 3);

    let r0 = &records[0];
    assert_eq!( (r0.grid_id, r0.date.to_string().as_str()), (1, "2023-05-01"));
    assert_eq!( r0.temperature, 275.0); // mean of the two day-1 samples
    assert_eq!( r0.wind_u, 1.0);

    assert_eq!( records[1].temperature, 290.0);
    assert_eq!( records[2].grid_id, 2);
}

#[test]
fn test_out_of_grid_and_out_of_range_samples_dropped() {
    let grid = test_grid();
    let range = DateRange::parse( "2023-05-01", "2023-05-02").unwrap();

    let samples = vec![
        sample( "2023-05-01 12:00:00", 45.0, -100.0, 280.0),  // outside grid
        sample( "2023-06-01 12:00:00", 50.05, -119.95, 280.0), // outside range
    ];

    assert!( aggregate_samples( &grid, &range, &samples).is_empty());
}

#[test]
fn test_nan_samples_do_not_poison_mean() {
    let grid = test_grid();
    let range = DateRange::parse( "2023-05-01", "2023-05-01").unwrap();

    let samples = vec![
        sample( "2023-05-01 00:00:00", 50.05, -119.95, f64::NAN),
        sample( "2023-05-01 12:00:00", 50.05, -119.95, 284.0),
    ];

    let records = aggregate_samples( &grid, &range, &samples);
    assert_eq!( records.len(), 1);
    assert_eq!( records[0].temperature, 284.0);
}

#[test]
fn test_centroid_coordinates() {
    let grid = test_grid();
    let range = DateRange::parse( "2023-05-01", "2023-05-01").unwrap();

    let samples = vec![ sample( "2023-05-01 12:00:00", 50.01, -119.99, 280.0) ];
    let records = aggregate_samples( &grid, &range, &samples);

    // record coordinates are the cell centroid, not the sample position
    assert!( (records[0].lat - 50.05).abs() < 1e-10);
    assert!( (records[0].lon - (-119.95)).abs() < 1e-10);
}
