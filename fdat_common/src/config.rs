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

/// RON based configuration lookup for FDAT crates.
/// Config files are resolved against `FDAT_ROOT/configs` first and a local `./configs`
/// second, so a deployment can override crate defaults without rebuilding.
/// Input/output data lives under `FDAT_ROOT/data`.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::fs::file_contents_as_bytes;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error,Debug)]
pub enum ConfigError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("no config file {0}")]
    ConfigNotFound(String),
}

static ROOT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// the global root dir: `FDAT_ROOT` if set, the current dir otherwise.
/// Invariant after first use.
pub fn root_dir () -> &'static PathBuf {
    ROOT_DIR.get_or_init(|| {
        match env::var("FDAT_ROOT") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => PathBuf::from("."),
        }
    })
}

/// the global data dir: `FDAT_ROOT/data`
pub fn data_dir () -> PathBuf {
    root_dir().join("data")
}

/// look up a config file in `FDAT_ROOT/configs`, then `./configs`
pub fn config_path (filename: &str) -> Option<PathBuf> {
    let candidates = [ root_dir().join("configs"), PathBuf::from("configs") ];
    for dir in candidates {
        let path = dir.join(filename);
        if path.is_file() {
            return Some(path)
        }
    }
    None
}

pub fn load_config_path<C,P> (path: P) -> Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let data = file_contents_as_bytes( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

pub fn load_config<C> (filename: &str) -> Result<C> where C: DeserializeOwned {
    match config_path( filename) {
        Some(path) => load_config_path( path),
        None => Err( ConfigError::ConfigNotFound( filename.to_string()))
    }
}

/// config lookup that falls back to the compiled-in Default if there is no config file.
/// A file that exists but does not parse is still reported as an error.
pub fn load_config_or_default<C> (filename: &str) -> Result<C> where C: DeserializeOwned + Default {
    match config_path( filename) {
        Some(path) => load_config_path( path),
        None => {
            debug!("no config file {filename}, using defaults");
            Ok( C::default())
        }
    }
}
