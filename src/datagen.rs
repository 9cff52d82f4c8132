/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use rand::Rng;
use std::str::FromStr;
use thiserror::Error;

/// Largest value produced for random data.
pub const RANDOM_MAX: i64 = 10_000;

#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum DataShape {
    Random,
    Sorted,
    ReverseSorted,
}

#[derive(Error, Debug, PartialEq)]
#[error("invalid data type '{0}', use: random, sorted, or reverse_sorted")]
pub struct InvalidDataShape(pub String);

impl DataShape {
    pub const ALL: [DataShape; 3] = [DataShape::Random, DataShape::Sorted, DataShape::ReverseSorted];

    pub fn keyword(self) -> &'static str {
        match self {
            DataShape::Random => "random",
            DataShape::Sorted => "sorted",
            DataShape::ReverseSorted => "reverse_sorted",
        }
    }

    /// Human readable name, e.g. "Reverse Sorted".
    pub fn title(self) -> &'static str {
        match self {
            DataShape::Random => "Random",
            DataShape::Sorted => "Sorted",
            DataShape::ReverseSorted => "Reverse Sorted",
        }
    }
}

impl FromStr for DataShape {
    type Err = InvalidDataShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();

        DataShape::ALL
            .iter()
            .copied()
            .find(|shape| shape.keyword() == lower)
            .ok_or_else(|| InvalidDataShape(s.to_string()))
    }
}

impl std::fmt::Display for DataShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Produces `size` integers laid out according to `shape`.
///
/// Random data is uniform over `0..=RANDOM_MAX`, sorted data is `0..size` and
/// reverse sorted data counts down from `size` to 1.
pub fn generate<R>(size: usize, shape: DataShape, rng: &mut R) -> Vec<i64>
where
    R: Rng,
{
    match shape {
        DataShape::Random => (0..size).map(|_| rng.random_range(0..=RANDOM_MAX)).collect(),
        DataShape::Sorted => (0..size as i64).collect(),
        DataShape::ReverseSorted => (1..=size as i64).rev().collect(),
    }
}
