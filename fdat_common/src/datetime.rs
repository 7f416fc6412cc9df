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

use std::fmt;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DateRangeError>;

#[derive(Error,Debug)]
pub enum DateRangeError {
    #[error("end date {end} before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("not a valid date: {0}")]
    DateParseError(String),
}

/// canonical date format used throughout FDAT tables ("2023-05-01")
pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn parse_date (s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str( s.trim(), DATE_FMT).map_err(|_| DateRangeError::DateParseError(s.to_string()))
}

/// accept both "2023-05-01T12:00:00" and the "2023-05-01 12:00:00" form used by reanalysis point extracts
pub fn parse_datetime (s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str( s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str( s, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| parse_date(s).ok().map(|d| d.and_time( NaiveTime::MIN)))
}

pub fn de_naive_datetime<'a,D> (deserializer: D) -> std::result::Result<NaiveDateTime,D::Error> where D: Deserializer<'a> {
    let s = String::deserialize(deserializer)?;
    parse_datetime( s.as_str()).ok_or( serde::de::Error::custom( format!("not a valid datetime: {s}")))
}

/// deserialize a date from either a plain date or a full datetime string (fire history extracts carry "2023-05-01 00:00:00")
pub fn de_naive_date<'a,D> (deserializer: D) -> std::result::Result<NaiveDate,D::Error> where D: Deserializer<'a> {
    let s = String::deserialize(deserializer)?;
    parse_datetime( s.as_str()).map(|dt| dt.date()).ok_or( serde::de::Error::custom( format!("not a valid date: {s}")))
}

/// an inclusive range of calendar days - the temporal domain of one dataset request.
/// Construction fails if the end date lies before the start date.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new (start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            Err( DateRangeError::EndBeforeStart { start, end })
        } else {
            Ok( DateRange { start, end })
        }
    }

    pub fn parse (start: &str, end: &str) -> Result<Self> {
        Self::new( parse_date(start)?, parse_date(end)?)
    }

    pub fn start (&self) -> NaiveDate { self.start }
    pub fn end (&self) -> NaiveDate { self.end }

    /// number of days in the range - at least 1 since the range is inclusive
    pub fn num_days (&self) -> u64 {
        ((self.end - self.start).num_days() + 1) as u64
    }

    pub fn contains (&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// iterate all days in ascending order
    pub fn iter (&self) -> impl Iterator<Item=NaiveDate> {
        self.start.iter_days().take( self.num_days() as usize)
    }
}

impl fmt::Display for DateRange {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.start, self.end)
    }
}
