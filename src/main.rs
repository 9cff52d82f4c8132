/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

pub mod bench;
pub mod datagen;
pub mod merge;
pub mod report;
pub mod sort;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::clap::{self, ErrorKind};
use structopt::StructOpt;

use bench::Plan;
use datagen::{DataShape, InvalidDataShape};

const USAGE: &str = "Invalid data type. Use: random, sorted, or reverse_sorted";

#[derive(StructOpt)]
#[structopt(name = "mergebench")]
struct Opt {
    /// One of: random, sorted, reverse_sorted (all when omitted)
    #[structopt(name = "data-type")]
    data_type: Option<String>,

    /// Comma separated array sizes [default: 100,1000,5000,10000]
    #[structopt(long, use_delimiter = true)]
    sizes: Option<Vec<usize>>,

    /// Skip insertion sort above this size [default: 5000]
    #[structopt(long)]
    insertion_limit: Option<usize>,

    /// Seed for random data
    #[structopt(long)]
    seed: Option<u64>,

    /// Merge the lists [1,4,5], [1,3,4], [2,6] and exit
    #[structopt(long)]
    demo: bool,
}

fn run_demo() {
    let lists = vec![vec![1, 4, 5], vec![1, 3, 4], vec![2, 6]];
    println!("Merged list: {:?}", merge::merge_all(&lists));
}

/// Bad arguments are reported as text, never through the exit status. Only
/// `--help` and `--version` let clap exit on its own.
fn parse_opt<I>(args: I) -> Option<Opt>
where
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match Opt::from_iter_safe(args) {
        Ok(opt) => Some(opt),
        Err(e) if e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed => e.exit(),
        Err(e) => {
            log::warn!("{}", e.message.lines().next().unwrap_or_default());
            println!("{}", USAGE);
            None
        }
    }
}

fn select_shapes(data_type: Option<&str>) -> Result<Vec<DataShape>, InvalidDataShape> {
    match data_type {
        Some(keyword) => Ok(vec![keyword.parse()?]),
        None => Ok(DataShape::ALL.to_vec()),
    }
}

fn plan_for(opt: &Opt, shapes: Vec<DataShape>) -> Plan {
    let defaults = Plan::default();

    Plan {
        sizes: opt.sizes.clone().unwrap_or(defaults.sizes),
        shapes,
        insertion_limit: opt.insertion_limit.unwrap_or(defaults.insertion_limit),
    }
}

fn main() -> Result<()> {
    env_logger::builder().format_timestamp(None).init();

    let opt = match parse_opt(std::env::args_os()) {
        Some(opt) => opt,
        None => return Ok(()),
    };

    if opt.demo {
        run_demo();
        return Ok(());
    }

    let shapes = match select_shapes(opt.data_type.as_deref()) {
        Ok(shapes) => shapes,
        Err(e) => {
            log::debug!("{}", e);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    match shapes.as_slice() {
        [shape] => println!("Running performance comparison for {} data only...", shape),
        _ => println!("Running complete performance comparison..."),
    }

    let plan = plan_for(&opt, shapes);

    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let results = bench::compare(&plan, bench::ALGORITHMS, &mut rng);
    report::print_summary(&results)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(args: &[&str]) -> Result<Opt, clap::Error> {
        Opt::from_iter_safe(std::iter::once("mergebench").chain(args.iter().copied()))
    }

    #[test]
    fn one_keyword_selects_one_shape() {
        assert_eq!(select_shapes(Some("random")), Ok(vec![DataShape::Random]));
        assert_eq!(select_shapes(Some("Reverse_Sorted")), Ok(vec![DataShape::ReverseSorted]));
    }

    #[test]
    fn no_keyword_selects_every_shape() {
        assert_eq!(select_shapes(None), Ok(DataShape::ALL.to_vec()));
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        assert_eq!(select_shapes(Some("bogus")), Err(InvalidDataShape("bogus".to_string())));
    }

    #[test]
    fn bad_arguments_do_not_yield_options() {
        assert!(parse_opt(vec!["mergebench", "random", "sorted"]).is_none());
        assert!(parse_opt(vec!["mergebench", "-x"]).is_none());
        assert!(parse_opt(vec!["mergebench", "--sizes", "ten"]).is_none());
        assert!(parse_opt(vec!["mergebench", "bogus"]).is_some());
    }

    #[test]
    fn help_is_left_to_clap() {
        let err = opt(&["--help"]).err().map(|e| e.kind);
        assert_eq!(err, Some(ErrorKind::HelpDisplayed));
    }

    #[test]
    fn plan_defaults_come_from_bench() {
        let plan = plan_for(&opt(&[]).unwrap(), DataShape::ALL.to_vec());
        let defaults = Plan::default();

        assert_eq!(plan.sizes, defaults.sizes);
        assert_eq!(plan.insertion_limit, defaults.insertion_limit);
    }

    #[test]
    fn plan_takes_flags() {
        let o = opt(&["sorted", "--sizes", "10,20", "--insertion-limit", "15"]).unwrap();
        let plan = plan_for(&o, select_shapes(o.data_type.as_deref()).unwrap());

        assert_eq!(plan.sizes, vec![10, 20]);
        assert_eq!(plan.shapes, vec![DataShape::Sorted]);
        assert_eq!(plan.insertion_limit, 15);
    }
}
