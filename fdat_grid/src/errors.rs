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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FdatGridError>;

#[derive(Error,Debug)]
pub enum FdatGridError {
    #[error("no grid definition for region {0}")]
    RegionNotFound(String),

    #[error("duplicate cell id {id} in grid definition for {region}")]
    DuplicateCellId { region: String, id: u32 },

    #[error("grid definition for {0} has no cells")]
    EmptyGrid(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    /// a generic error
    #[error("operation failed {0}")]
    OpFailed(String),
}

pub fn op_failed (msg: impl ToString) -> FdatGridError {
    FdatGridError::OpFailed( msg.to_string())
}
