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

//! end-to-end dataset assembly: load the region grid, run all source extractors
//! concurrently, merge and write the dataset CSV. A failing source degrades to
//! an empty record set (its columns get the missing fill) - only an unknown
//! region or an invalid date range abort the run.

use std::path::PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use tracing::{info, warn};

use fdat_common::{config::load_config_or_default, datetime::DateRange, region_fname};
use fdat_grid::{load_grid, Grid};
use fdat_source::SourceExtractor;
use fdat_climate::ClimateExtractor;
use fdat_firehistory::FireHistoryExtractor;
use fdat_ndvi::NdviExtractor;
use fdat_topo::TopoExtractor;
use fdat_merge::{merge, writer::write_csv};

/// assemble a merged wildfire ML dataset for a region and date range
#[derive(Parser)]
struct Args {
    /// region name as used by the grid definition (e.g. "British Columbia")
    region: String,

    /// first day of the dataset (YYYY-MM-DD)
    start_date: NaiveDate,

    /// last day of the dataset, inclusive (YYYY-MM-DD)
    end_date: NaiveDate,

    /// output file (default: <Region>_<start>_<end>_dataset.csv)
    #[arg(short,long)]
    output: Option<PathBuf>,
}

impl Args {
    fn output_path (&self, range: &DateRange) -> PathBuf {
        self.output.clone().unwrap_or_else( || {
            PathBuf::from( format!("{}_{}_{}_dataset.csv", region_fname( &self.region), range.start(), range.end()))
        })
    }
}

/// a failing extractor is reported but never aborts the assembly
async fn run_extractor<E: SourceExtractor> (extractor: &E, grid: &Grid, range: &DateRange) -> Vec<E::Record> {
    match extractor.extract( grid, range).await {
        Ok(records) => records,
        Err(e) => {
            warn!("{} extraction failed ({e}), continuing without {} data", extractor.name(), extractor.name());
            Vec::new()
        }
    }
}

#[tokio::main]
async fn main () -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let range = DateRange::new( args.start_date, args.end_date)?;
    let grid = load_grid( &args.region)?;
    info!("assembling dataset for {} over {} ({} cells)", grid.region(), range, grid.len());

    let climate = ClimateExtractor::new( load_config_or_default( "climate.ron")?);
    let firehistory = FireHistoryExtractor::new( load_config_or_default( "firehistory.ron")?);
    let ndvi = NdviExtractor::new( load_config_or_default( "ndvi.ron")?);
    let topo = TopoExtractor::new( load_config_or_default( "topography.ron")?);

    let (climate_recs, fire_recs, ndvi_recs, topo_recs) = tokio::join!(
        run_extractor( &climate, &grid, &range),
        run_extractor( &firehistory, &grid, &range),
        run_extractor( &ndvi, &grid, &range),
        run_extractor( &topo, &grid, &range),
    );

    let records = merge( &grid, &range, &climate_recs, &fire_recs, &ndvi_recs, &topo_recs);

    let path = args.output_path( &range);
    write_csv( &records, &path)?;

    Ok(())
}
