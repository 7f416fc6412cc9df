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
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub fn ensure_dir (path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all( path)?
    }
    Ok(())
}

pub fn file_contents_as_bytes (path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let mut file = fs::File::open( path.as_ref())?;
    let len = file.metadata()?.len();
    let mut contents: Vec<u8> = Vec::with_capacity(len as usize);
    file.read_to_end( &mut contents)?;
    Ok(contents)
}

pub fn filepath_contents_as_string (path: impl AsRef<Path>) -> io::Result<String> {
    let mut file = fs::File::open( path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string( &mut contents)?;
    Ok(contents)
}

pub fn filename<'a,T: AsRef<Path>> (path: &'a T) -> Option<&'a str> {
    path.as_ref().file_name().and_then(|oss| oss.to_str())
}
