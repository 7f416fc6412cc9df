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

use std::io::Read;
use std::path::Path;
use serde::de::DeserializeOwned;

use crate::errors::{Result, SourceFetchError};

/// read a whole normalized CSV extract into typed rows.
/// All FDAT source extracts are headered CSV; the row types use serde aliases to
/// also accept the native column names of the upstream products.
pub fn read_table<T> (path: impl AsRef<Path>) -> Result<Vec<T>> where T: DeserializeOwned {
    let path = path.as_ref();
    if !path.is_file() {
        return Err( SourceFetchError::MissingInput( path.to_path_buf()))
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim( csv::Trim::All)
        .from_path( path)?;

    read_rows( &mut reader)
}

pub fn read_table_from<T,R> (rdr: R) -> Result<Vec<T>> where T: DeserializeOwned, R: Read {
    let mut reader = csv::ReaderBuilder::new().trim( csv::Trim::All).from_reader( rdr);
    read_rows( &mut reader)
}

fn read_rows<R: Read, T: DeserializeOwned> (reader: &mut csv::Reader<R>) -> Result<Vec<T>> {
    let mut rows: Vec<T> = Vec::new();
    for rec in reader.deserialize() {
        rows.push( rec?);
    }
    Ok(rows)
}
