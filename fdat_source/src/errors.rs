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

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SourceFetchError>;

/// extraction failures are recoverable - the pipeline degrades the failed source
/// to all-missing records instead of aborting the merge
#[derive(Error,Debug)]
pub enum SourceFetchError {
    #[error("missing source input {0}")]
    MissingInput(PathBuf),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("CSV error {0}")]
    CsvError( #[from] csv::Error),

    #[error("config error {0}")]
    ConfigError( #[from] fdat_common::config::ConfigError),

    /// a generic error
    #[error("operation failed {0}")]
    OpFailed(String),
}

pub fn op_failed (msg: impl ToString) -> SourceFetchError {
    SourceFetchError::OpFailed( msg.to_string())
}
