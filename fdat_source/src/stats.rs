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

/// NaN-skipping mean accumulator, matching the aggregation semantics of the
/// upstream tabular products (a gap in one sample does not poison the cell mean).
/// An accumulator that never saw a finite value yields NaN.
#[derive(Debug,Clone,Copy,Default)]
pub struct MeanAcc {
    sum: f64,
    n: u64,
}

impl MeanAcc {
    pub fn new () -> Self { MeanAcc::default() }

    pub fn add (&mut self, v: f64) {
        if v.is_finite() {
            self.sum += v;
            self.n += 1;
        }
    }

    pub fn n (&self) -> u64 { self.n }

    pub fn mean (&self) -> f64 {
        if self.n > 0 { self.sum / self.n as f64 } else { f64::NAN }
    }
}
