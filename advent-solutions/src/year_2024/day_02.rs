//! Year 2024, Day 2
//!
//! Reactor reports: a report is safe when its levels are strictly monotonic
//! and every adjacent gap has magnitude 1 to 3. Part 2 tolerates the removal
//! of a single level (the "problem dampener").

use advent_core::{Solution, SolutionError, parse_lines};
use advent_macros::AutoRegisterUnit;

type Report = Vec<i32>;

#[derive(AutoRegisterUnit)]
#[advent(year = 2024, day = 2)]
pub struct Day02;

impl Solution for Day02 {
    type Parsed = Vec<Report>;

    fn parse(input: &str) -> Result<Self::Parsed, SolutionError> {
        parse_lines(input)
            .map(|line| {
                line.split_whitespace()
                    .map(|token| {
                        token.parse().map_err(|_| {
                            SolutionError::InvalidFormat(format!("bad level `{token}`"))
                        })
                    })
                    .collect()
            })
            .collect()
    }

    fn part1(parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
        let safe = parsed.iter().filter(|report| is_safe(report)).count();
        Some(Ok(safe.to_string()))
    }

    fn part2(parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
        let safe = parsed
            .iter()
            .filter(|report| is_safe_with_dampener(report))
            .count();
        Some(Ok(safe.to_string()))
    }
}

/// Adjacent differences for a report
fn diffs(report: &[i32]) -> Vec<i32> {
    report.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

fn has_valid_steps(diffs: &[i32]) -> bool {
    diffs.iter().all(|diff| (1..=3).contains(&diff.abs()))
}

fn is_monotonic(diffs: &[i32]) -> bool {
    diffs.iter().all(|&diff| diff > 0) || diffs.iter().all(|&diff| diff < 0)
}

fn is_safe(report: &[i32]) -> bool {
    let diffs = diffs(report);
    has_valid_steps(&diffs) && is_monotonic(&diffs)
}

fn is_safe_with_dampener(report: &[i32]) -> bool {
    if is_safe(report) {
        return true;
    }
    (0..report.len()).any(|skip| {
        let dampened: Report = report
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &level)| level)
            .collect();
        is_safe(&dampened)
    })
}
