/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use log::{debug, info, warn};
use rand::Rng;
use std::hint::black_box;
use std::panic;
use std::time::{Duration, Instant};

use super::datagen::{self, DataShape};
use super::sort;

pub type SortFn = fn(&[i64]) -> Vec<i64>;

pub const INSERTION_SORT: &str = "Insertion Sort";

/// Insertion sort only competes for "fastest" up to this size.
pub const INSERTION_FASTEST_CUTOFF: usize = 1000;

#[derive(Clone, Copy)]
pub struct Algorithm {
    pub name: &'static str,
    pub sort: SortFn,
}

pub const ALGORITHMS: &[Algorithm] = &[
    Algorithm { name: "Merge Sort", sort: sort::merge_sort::<i64> },
    Algorithm { name: INSERTION_SORT, sort: sort::insertion_sort::<i64> },
    Algorithm { name: "Binary Insertion Sort", sort: sort::binary_insertion_sort::<i64> },
    Algorithm { name: "Std Sort (stable)", sort: sort::std_sorted::<i64> },
    Algorithm { name: "Std Sort (unstable)", sort: sort::std_sort_unstable::<i64> },
    Algorithm { name: "K-Way Merge Sort", sort: sort::kway_merge_sort::<i64> },
];

#[derive(Clone, Debug)]
pub struct Plan {
    pub sizes: Vec<usize>,
    pub shapes: Vec<DataShape>,
    /// Insertion sort is skipped above this size.
    pub insertion_limit: usize,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            sizes: vec![100, 1000, 5000, 10000],
            shapes: DataShape::ALL.to_vec(),
            insertion_limit: 5000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Average duration of one call.
    Time(Duration),
    Skipped,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct Timing {
    pub name: &'static str,
    pub outcome: Outcome,
}

#[derive(Clone, Debug)]
pub struct Scenario {
    pub shape: DataShape,
    pub size: usize,
    pub timings: Vec<Timing>,
}

impl Scenario {
    /// Name of the quickest measured algorithm, if any was measured.
    pub fn fastest(&self) -> Option<&'static str> {
        self.timings
            .iter()
            .filter(|t| t.name != INSERTION_SORT || self.size <= INSERTION_FASTEST_CUTOFF)
            .filter_map(|t| match t.outcome {
                Outcome::Time(d) => Some((t.name, d)),
                _ => None,
            })
            .min_by_key(|&(_, d)| d)
            .map(|(name, _)| name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Report {
    pub scenarios: Vec<Scenario>,
}

impl Report {
    pub fn scenarios_for(&self, shape: DataShape) -> impl Iterator<Item = &Scenario> + '_ {
        self.scenarios.iter().filter(move |s| s.shape == shape)
    }
}

pub fn iterations_for(name: &str, size: usize) -> u32 {
    if size > 1000 || name == INSERTION_SORT {
        3
    } else {
        10
    }
}

/// Average wall-clock time of `iterations` calls, each on a fresh copy of `data`.
pub fn measure(sort: SortFn, data: &[i64], iterations: u32) -> Duration {
    let iterations = iterations.max(1);
    let mut total = Duration::ZERO;

    for _ in 0..iterations {
        let test_data = data.to_vec();

        let start = Instant::now();
        black_box(sort(black_box(&test_data)));
        total += start.elapsed();
    }

    total / iterations
}

fn measure_guarded(sort: SortFn, data: &[i64], iterations: u32) -> Result<Duration, String> {
    panic::catch_unwind(|| measure(sort, data, iterations)).map_err(|payload| {
        if let Some(msg) = payload.downcast_ref::<&str>() {
            msg.to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            String::from("sort panicked")
        }
    })
}

/// Times every algorithm on every (shape, size) pair of `plan`, printing
/// progress as it goes. A panicking algorithm is recorded as failed and the
/// run carries on.
pub fn compare<R>(plan: &Plan, algorithms: &[Algorithm], rng: &mut R) -> Report
where
    R: Rng,
{
    let mut report = Report::default();

    for &shape in &plan.shapes {
        println!("\nData Type: {}", shape.title());
        println!("{}", "-".repeat(30));

        for &size in &plan.sizes {
            println!("\nArray size: {}", size);

            let data = datagen::generate(size, shape, rng);
            let mut timings = Vec::with_capacity(algorithms.len());

            for alg in algorithms {
                let outcome = if alg.name == INSERTION_SORT && size > plan.insertion_limit {
                    println!("{:20}: Skipped (too slow)", alg.name);
                    Outcome::Skipped
                } else {
                    let iterations = iterations_for(alg.name, size);
                    debug!("{} x{} on {} {}", alg.name, iterations, size, shape);

                    match measure_guarded(alg.sort, &data, iterations) {
                        Ok(d) => {
                            println!("{:20}: {:.6} seconds", alg.name, d.as_secs_f64());
                            Outcome::Time(d)
                        }
                        Err(msg) => {
                            warn!("{} failed on {} {}: {}", alg.name, size, shape, msg);
                            println!("{:20}: Error - {}", alg.name, msg);
                            Outcome::Failed(msg)
                        }
                    }
                };

                timings.push(Timing { name: alg.name, outcome });
            }

            report.scenarios.push(Scenario { shape, size, timings });
        }
    }

    info!("benchmarked {} scenarios", report.scenarios.len());

    report
}
