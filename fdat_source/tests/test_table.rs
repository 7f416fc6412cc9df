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

use std::fs;
use serde::Deserialize;
use fdat_source::{read_table, read_table_from, SourceFetchError};

#[derive(Debug,Deserialize,PartialEq)]
struct Row {
    #[serde(alias = "GridID")]
    grid_id: u32,
    value: f64,
}

#[test]
fn test_read_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.csv");
    fs::write( &path, "grid_id,value\n1,0.5\n2,1.5\n").unwrap();

    let rows: Vec<Row> = read_table( &path).unwrap();
    assert_eq!( rows, vec![ Row { grid_id: 1, value: 0.5 }, Row { grid_id: 2, value: 1.5 } ]);
}

#[test]
fn test_native_column_alias() {
    let rows: Vec<Row> = read_table_from( "GridID,value\n7,2.25\n".as_bytes()).unwrap();
    assert_eq!( rows, vec![ Row { grid_id: 7, value: 2.25 } ]);
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    match read_table::<Row>( dir.path().join("nope.csv")) {
        Err( SourceFetchError::MissingInput(_)) => {}
        other => panic!("expected MissingInput, got {other:?}")
    }
}
