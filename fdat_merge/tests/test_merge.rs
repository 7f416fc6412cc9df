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

use std::collections::HashSet;
use chrono::NaiveDate;

use fdat_common::{datetime::{parse_date, DateRange}, geo::BoundingBox};
use fdat_grid::{Grid, GridCell};
use fdat_climate::ClimateRecord;
use fdat_firehistory::FireRecord;
use fdat_ndvi::NdviRecord;
use fdat_topo::TopoRecord;
use fdat_merge::{merge, writer::write_csv_to, MergedRecord};

/// 10 cells in a 0.1 deg row along 50.0..50.1 N
fn test_grid () -> Grid {
    let cells = (0..10).map( |i| {
        let west = -120.0 + 0.1 * (i as f64);
        GridCell::new( i as u32 + 1, BoundingBox::from_wsen( west, 50.0, west + 0.1, 50.1))
    }).collect();
    Grid::from_cells( "Testland", cells).unwrap()
}

fn test_range () -> DateRange {
    DateRange::parse( "2023-05-01", "2023-05-05").unwrap()
}

fn climate_rec (grid_id: u32, date: &str, temperature: f64) -> ClimateRecord {
    ClimateRecord {
        grid_id,
        date: parse_date( date).unwrap(),
        wind_u: 1.0, wind_v: -1.0, dew_point: 280.0, temperature,
        surface_pressure: 101300.0, precipitation: 0.0,
        lat: 0.0, lon: 0.0, // deliberately bogus, the grid centroid must win
    }
}

fn fire_rec (grid_id: u32, date: &str, size: f64, cause: &str) -> FireRecord {
    FireRecord {
        grid_id,
        date: parse_date( date).unwrap(),
        total_fire_size: size,
        fire_occurred: 1,
        fire_cause: Some( cause.to_string()),
        lat: 0.0, lon: 0.0,
    }
}

fn ndvi_rec (grid_id: u32, date: &str, ndvi: f64) -> NdviRecord {
    NdviRecord { grid_id, date: parse_date( date).unwrap(), ndvi }
}

fn topo_rec (grid_id: u32, elevation: f64, slope: f64, aspect: f64) -> TopoRecord {
    TopoRecord { grid_id, lat: 0.0, lon: 0.0, elevation, slope, aspect }
}

#[test]
fn test_full_cross_product() {
    let grid = test_grid();
    let range = test_range();

    let rows = merge( &grid, &range, &[], &[], &[], &[]);
    assert_eq!( rows.len(), 50); // 10 cells x 5 days, regardless of source sparsity

    let keys: HashSet<(u32,NaiveDate)> = rows.iter().map( |r| (r.grid_id, r.date)).collect();
    assert_eq!( keys.len(), 50);

    // cells in definition order, days ascending within each cell
    assert_eq!( (rows[0].grid_id, rows[0].date), (1, parse_date("2023-05-01").unwrap()));
    assert_eq!( (rows[4].grid_id, rows[4].date), (1, parse_date("2023-05-05").unwrap()));
    assert_eq!( (rows[5].grid_id, rows[5].date), (2, parse_date("2023-05-01").unwrap()));
    assert_eq!( (rows[49].grid_id, rows[49].date), (10, parse_date("2023-05-05").unwrap()));
}

fn row<'a> (rows: &'a [MergedRecord], grid_id: u32, date: &str) -> &'a MergedRecord {
    let date = parse_date( date).unwrap();
    rows.iter().find( |r| r.grid_id == grid_id && r.date == date).unwrap()
}

#[test]
fn test_missing_fills() {
    let grid = test_grid();
    let range = test_range();

    let climate = vec![ climate_rec( 1, "2023-05-01", 290.0) ];
    let fire = vec![ fire_rec( 1, "2023-05-02", 12.5, "H") ];
    let ndvi = vec![ ndvi_rec( 1, "2023-05-01", 0.42) ];

    let rows = merge( &grid, &range, &climate, &fire, &ndvi, &[]);
    assert_eq!( rows.len(), 50);

    let present = row( &rows, 1, "2023-05-01");
    assert_eq!( present.climate.temperature, 290.0);
    assert!( (present.ndvi - 0.42).abs() < 1e-12);

    // no fire reported for (2, 2023-05-01): explicit absence, not a data gap
    let absent = row( &rows, 2, "2023-05-01");
    assert_eq!( absent.fire.total_fire_size, 0.0);
    assert_eq!( absent.fire.fire_occurred, 0);
    assert!( absent.fire.fire_cause.is_none());

    // but its measurements are data gaps
    assert!( absent.climate.temperature.is_nan());
    assert!( absent.ndvi.is_nan());
    assert!( absent.topo.elevation.is_nan());

    let burned = row( &rows, 1, "2023-05-02");
    assert_eq!( burned.fire.total_fire_size, 12.5);
    assert_eq!( burned.fire.fire_occurred, 1);
    assert_eq!( burned.fire.fire_cause.as_deref(), Some("H"));
}

#[test]
fn test_topo_broadcast() {
    let grid = test_grid();
    let range = test_range();

    let topo = vec![ topo_rec( 1, 962.05, 35.0, 161.71) ];
    let rows = merge( &grid, &range, &[], &[], &[], &topo);

    // one static topo record shows up on every day of its cell
    for date in ["2023-05-01", "2023-05-02", "2023-05-03", "2023-05-04", "2023-05-05"] {
        let r = row( &rows, 1, date);
        assert_eq!( r.topo.elevation, 962.05);
        assert_eq!( r.topo.slope, 35.0);
        assert_eq!( r.topo.aspect, 161.71);
    }
    assert!( row( &rows, 2, "2023-05-01").topo.elevation.is_nan());
}

#[test]
fn test_grid_coordinate_authority() {
    let grid = test_grid();
    let range = test_range();

    let climate = vec![ climate_rec( 1, "2023-05-01", 290.0) ];
    let rows = merge( &grid, &range, &climate, &[], &[], &[]);

    // source record coordinates (bogus 0/0) never leak into the output
    let r = row( &rows, 1, "2023-05-01");
    assert!( (r.latitude - 50.05).abs() < 1e-10);
    assert!( (r.longitude - (-119.95)).abs() < 1e-10);
}

#[test]
fn test_unknown_cells_dropped() {
    let grid = test_grid();
    let range = test_range();

    let climate = vec![ climate_rec( 99, "2023-05-01", 290.0) ];
    let ndvi = vec![ ndvi_rec( 99, "2023-05-01", 0.5) ];
    let fire = vec![ fire_rec( 99, "2023-05-01", 1.0, "H") ];
    let topo = vec![ topo_rec( 99, 100.0, 1.0, 1.0) ];

    let rows = merge( &grid, &range, &climate, &fire, &ndvi, &topo);

    // unknown cells never create rows and never abort the merge
    assert_eq!( rows.len(), 50);
    assert!( rows.iter().all( |r| r.grid_id != 99));
}

#[test]
fn test_duplicate_fire_records_combined() {
    let grid = test_grid();
    let range = test_range();

    let fire = vec![
        fire_rec( 1, "2023-05-01", 10.0, "H"),
        fire_rec( 1, "2023-05-01", 2.5, "L"),
    ];
    let rows = merge( &grid, &range, &[], &fire, &[], &[]);

    let r = row( &rows, 1, "2023-05-01");
    assert_eq!( r.fire.total_fire_size, 12.5);
    assert_eq!( r.fire.fire_occurred, 1);
    assert_eq!( r.fire.fire_cause.as_deref(), Some("H"));
}

#[test]
fn test_duplicate_measurements_keep_first() {
    let grid = test_grid();
    let range = test_range();

    let climate = vec![ climate_rec( 1, "2023-05-01", 290.0), climate_rec( 1, "2023-05-01", 300.0) ];
    let ndvi = vec![ ndvi_rec( 1, "2023-05-01", 0.4), ndvi_rec( 1, "2023-05-01", 0.8) ];

    let rows = merge( &grid, &range, &climate, &[], &ndvi, &[]);
    let r = row( &rows, 1, "2023-05-01");
    assert_eq!( r.climate.temperature, 290.0);
    assert!( (r.ndvi - 0.4).abs() < 1e-12);
}

#[test]
fn test_out_of_range_records_dropped() {
    let grid = test_grid();
    let range = test_range();

    let climate = vec![ climate_rec( 1, "2023-04-30", 290.0) ];
    let fire = vec![ fire_rec( 1, "2023-05-06", 1.0, "H") ];

    let rows = merge( &grid, &range, &climate, &fire, &[], &[]);
    assert_eq!( rows.len(), 50);
    assert!( row( &rows, 1, "2023-05-01").climate.temperature.is_nan());
    assert_eq!( row( &rows, 1, "2023-05-05").fire.fire_occurred, 0);
}

#[test]
fn test_output_idempotent() {
    let grid = test_grid();
    let range = test_range();

    let climate = vec![ climate_rec( 3, "2023-05-02", 291.5) ];
    let fire = vec![ fire_rec( 7, "2023-05-04", 3.0, "L") ];
    let ndvi = vec![ ndvi_rec( 5, "2023-05-03", 0.33) ];
    let topo = vec![ topo_rec( 1, 962.05, 35.0, 161.71) ];

    // same inputs, two full runs, byte-identical output
    let mut out1: Vec<u8> = Vec::new();
    let rows1 = merge( &grid, &range, &climate, &fire, &ndvi, &topo);
    write_csv_to( &rows1, &mut out1).unwrap();

    let mut out2: Vec<u8> = Vec::new();
    let rows2 = merge( &grid, &range, &climate, &fire, &ndvi, &topo);
    write_csv_to( &rows2, &mut out2).unwrap();

    assert_eq!( out1, out2);
}

#[test]
fn test_csv_shape() {
    // quarter degree cells so the centroids are exact binary fractions and the
    // expected row text is stable
    let cells = (0..10).map( |i| {
        let west = -120.0 + 0.25 * (i as f64);
        GridCell::new( i as u32 + 1, BoundingBox::from_wsen( west, 50.0, west + 0.25, 50.25))
    }).collect();
    let grid = Grid::from_cells( "Testland", cells).unwrap();
    let range = test_range();

    let rows = merge( &grid, &range, &[], &[ fire_rec( 1, "2023-05-01", 12.5, "H") ], &[], &[]);

    let mut out: Vec<u8> = Vec::new();
    write_csv_to( &rows, &mut out).unwrap();
    let text = String::from_utf8( out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!( lines.len(), 51); // header + 50 rows
    assert!( lines[0].starts_with( "grid_id,latitude,longitude,date,wind_u"));

    // NaN measurements serialize as empty fields
    let first = lines[1];
    assert!( first.starts_with( "1,50.125,-119.875,2023-05-01,"));
    assert!( first.contains( ",12.5,1,H,"));
    let second = lines[2];
    assert!( second.contains( ",0,0,,")); // size 0, no fire, no cause, no NDVI on day 2
}
