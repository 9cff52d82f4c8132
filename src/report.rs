/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::io::{self, Write};

use super::bench::{Report, Scenario};
use super::datagen::DataShape;

pub fn write_summary<W>(report: &Report, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "\nFASTEST ALGORITHM BY SCENARIO:")?;

    let mut shapes: Vec<DataShape> = vec![];
    for scenario in &report.scenarios {
        if !shapes.contains(&scenario.shape) {
            shapes.push(scenario.shape);
        }
    }

    for shape in shapes {
        writeln!(out, "\n   {} data:", shape.title())?;

        let mut scenarios: Vec<&Scenario> = report.scenarios_for(shape).collect();
        scenarios.sort_by_key(|s| s.size);

        for scenario in scenarios {
            if let Some(name) = scenario.fastest() {
                writeln!(out, "     Size {}: {}", scenario.size, name)?;
            }
        }
    }

    Ok(())
}

pub fn print_summary(report: &Report) -> io::Result<()> {
    let stdout = io::stdout();
    write_summary(report, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::{Outcome, Timing};
    use std::time::Duration;

    fn scenario(shape: DataShape, size: usize, times: &[(&'static str, u64)]) -> Scenario {
        Scenario {
            shape,
            size,
            timings: times
                .iter()
                .map(|&(name, us)| Timing { name, outcome: Outcome::Time(Duration::from_micros(us)) })
                .collect(),
        }
    }

    #[test]
    fn summary_lists_fastest_per_size() {
        let report = Report {
            scenarios: vec![
                scenario(DataShape::ReverseSorted, 5000, &[("Merge Sort", 90), ("Std Sort (stable)", 20)]),
                scenario(DataShape::ReverseSorted, 100, &[("Merge Sort", 3), ("Std Sort (stable)", 9)]),
                scenario(DataShape::Random, 100, &[("Merge Sort", 5), ("Std Sort (stable)", 4)]),
                Scenario { shape: DataShape::Random, size: 200, timings: vec![] },
            ],
        };

        let mut out = vec![];
        write_summary(&report, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nFASTEST ALGORITHM BY SCENARIO:\n\
             \n   Reverse Sorted data:\n\
             \x20    Size 100: Merge Sort\n\
             \x20    Size 5000: Std Sort (stable)\n\
             \n   Random data:\n\
             \x20    Size 100: Std Sort (stable)\n"
        );
    }

    #[test]
    fn empty_report_prints_header_only() {
        let mut out = vec![];
        write_summary(&Report::default(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\nFASTEST ALGORITHM BY SCENARIO:\n");
    }
}
