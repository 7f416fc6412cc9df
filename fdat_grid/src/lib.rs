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

//! the FDAT Grid Model - the fixed set of grid cells of one region, which is the
//! spatial join key for every data source and the coordinate authority for the
//! merged output. Grids are immutable once loaded.

use std::path::{Path, PathBuf};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use fdat_common::{region_fname, geo::{BoundingBox, LatLon}, fs::file_contents_as_bytes, config};

mod errors;
pub use errors::*;

/// one fixed spatial unit of a region grid. The centroid is derived from the cell
/// bounds at load time and never overridden by source data.
#[derive(Debug,Clone,PartialEq)]
pub struct GridCell {
    pub id: u32,
    pub lat: f64,
    pub lon: f64,
    pub bounds: BoundingBox,
}

impl GridCell {
    pub fn new (id: u32, bounds: BoundingBox) -> Self {
        let c = bounds.center();
        GridCell { id, lat: c.lat, lon: c.lon, bounds }
    }

    pub fn centroid (&self) -> LatLon {
        LatLon::new( self.lat, self.lon)
    }

    pub fn contains (&self, lat: f64, lon: f64) -> bool {
        self.bounds.contains( lat, lon)
    }
}

/// on-disk cell representation within a region grid definition file
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct GridCellDef {
    pub id: u32,
    pub bounds: BoundingBox,
}

/// on-disk grid definition for one region
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct GridDef {
    pub region: String,
    pub cells: Vec<GridCellDef>,
}

/// the canonical spatial index of one request: an ordered, immutable set of grid cells.
/// Iteration order is the definition order, which makes every downstream join and the
/// merged output row order stable across runs.
#[derive(Debug,Clone)]
pub struct Grid {
    region: String,
    cells: IndexMap<u32,GridCell>,
    bounds: BoundingBox,
}

impl Grid {
    pub fn from_cells (region: impl ToString, cell_vec: Vec<GridCell>) -> Result<Self> {
        let region = region.to_string();
        if cell_vec.is_empty() {
            return Err( FdatGridError::EmptyGrid( region))
        }

        let mut bounds = cell_vec[0].bounds;
        let mut cells: IndexMap<u32,GridCell> = IndexMap::with_capacity( cell_vec.len());

        for cell in cell_vec {
            bounds = bounds.expand( &cell.bounds);
            let id = cell.id;
            if cells.insert( id, cell).is_some() {
                return Err( FdatGridError::DuplicateCellId { region, id })
            }
        }

        Ok( Grid { region, cells, bounds })
    }

    pub fn region (&self) -> &str { self.region.as_str() }

    pub fn len (&self) -> usize { self.cells.len() }
    pub fn is_empty (&self) -> bool { self.cells.is_empty() }

    /// bbox enclosing all cells - used by extractors for cheap point pre-filtering
    pub fn bounds (&self) -> &BoundingBox { &self.bounds }

    pub fn contains_id (&self, id: u32) -> bool {
        self.cells.contains_key( &id)
    }

    pub fn cell (&self, id: u32) -> Option<&GridCell> {
        self.cells.get( &id)
    }

    /// iterate cells in definition order
    pub fn cells (&self) -> impl Iterator<Item=&GridCell> {
        self.cells.values()
    }

    /// resolve a point to the cell that contains it. Cell containment is half-open
    /// so a point on a shared edge resolves to exactly one cell.
    pub fn cell_at (&self, lat: f64, lon: f64) -> Option<&GridCell> {
        if !self.bounds.contains( lat, lon) {
            return None
        }
        self.cells.values().find( |c| c.contains( lat, lon))
    }
}

/// grid definition filename for a region ("British Columbia" -> "British_Columbia_grid.ron")
pub fn grid_filename (region: &str) -> String {
    format!("{}_grid.ron", region_fname( region))
}

/// load the grid for a named region from a grid definition dir.
/// Fails with `RegionNotFound` if there is no definition file for the region.
pub fn load_grid_from_dir (dir: impl AsRef<Path>, region: &str) -> Result<Grid> {
    let path = dir.as_ref().join( grid_filename( region));
    if !path.is_file() {
        return Err( FdatGridError::RegionNotFound( region.to_string()))
    }

    let data = file_contents_as_bytes( &path)?;
    let def: GridDef = ron::de::from_bytes( data.as_slice())?;

    let cells: Vec<GridCell> = def.cells.into_iter().map( |cd| GridCell::new( cd.id, cd.bounds)).collect();
    let grid = Grid::from_cells( def.region, cells)?;

    info!("loaded grid for {} with {} cells from {:?}", grid.region(), grid.len(), path);
    Ok(grid)
}

/// load the grid for a named region from the standard `FDAT_ROOT/data/grid` location
pub fn load_grid (region: &str) -> Result<Grid> {
    load_grid_from_dir( config::data_dir().join("grid"), region)
}
