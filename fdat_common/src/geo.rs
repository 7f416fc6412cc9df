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

/// geographic primitives for FDAT grids. All coordinates are geodetic WGS84 degrees.
/// We keep thin serializable wrappers with value semantics and convert to the georust
/// foundation types where we need algorithms.

use std::fmt;
use serde::{Deserialize, Serialize};
use geo_types::{coord, Coord, Rect};

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new (lat: f64, lon: f64) -> Self { LatLon { lat, lon } }
}

impl fmt::Display for LatLon {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.5},{:.5}]", self.lat, self.lon)
    }
}

/// a geographic west/south/east/north rectangle in degrees.
/// Containment is half-open (west/south edges inclusive, east/north exclusive) so that
/// adjacent grid cells never both claim a point on a shared edge.
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn from_wsen (west: f64, south: f64, east: f64, north: f64) -> Self {
        BoundingBox { west, south, east, north }
    }

    pub fn to_rect (&self) -> Rect<f64> {
        Rect::new( coord! { x: self.west, y: self.south }, coord! { x: self.east, y: self.north })
    }

    pub fn center (&self) -> LatLon {
        let c: Coord<f64> = self.to_rect().center();
        LatLon::new( c.y, c.x)
    }

    pub fn contains (&self, lat: f64, lon: f64) -> bool {
        lon >= self.west && lon < self.east && lat >= self.south && lat < self.north
    }

    /// smallest bbox enclosing both self and other
    pub fn expand (&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            west: self.west.min( other.west),
            south: self.south.min( other.south),
            east: self.east.max( other.east),
            north: self.north.max( other.north),
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.west, self.south, self.east, self.north)
    }
}
