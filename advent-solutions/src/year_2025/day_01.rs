//! Year 2025, Day 1
//!
//! Two columns of location IDs. Part 1 pairs the columns in sorted order and
//! sums the distances; part 2 scores each left value by how often it appears
//! on the right.

use advent_core::{Solution, SolutionError, parse_lines};
use advent_macros::AutoRegisterUnit;
use anyhow::{Context, anyhow};
use itertools::Itertools;
use std::collections::HashMap;

#[derive(AutoRegisterUnit)]
#[advent(year = 2025, day = 1)]
pub struct Day01;

#[derive(Debug)]
pub struct Columns {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl Solution for Day01 {
    type Parsed = Columns;

    fn parse(input: &str) -> Result<Self::Parsed, SolutionError> {
        parse_lines(input)
            .enumerate()
            .map(|(index, line)| {
                parse_pair(line).with_context(|| format!("line {}", index + 1))
            })
            .try_fold(
                Columns {
                    left: Vec::new(),
                    right: Vec::new(),
                },
                |mut columns, pair| {
                    let (left, right) = pair?;
                    columns.left.push(left);
                    columns.right.push(right);
                    Ok(columns)
                },
            )
            .map_err(|e: anyhow::Error| SolutionError::InvalidFormat(e.to_string()))
    }

    fn part1(parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
        let distance: i64 = parsed
            .left
            .iter()
            .sorted()
            .zip(parsed.right.iter().sorted())
            .map(|(left, right)| (left - right).abs())
            .sum();
        Some(Ok(distance.to_string()))
    }

    fn part2(parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
        let mut counts: HashMap<i64, i64> = HashMap::new();
        for &value in &parsed.right {
            *counts.entry(value).or_default() += 1;
        }
        let similarity: i64 = parsed
            .left
            .iter()
            .map(|value| value * counts.get(value).copied().unwrap_or(0))
            .sum();
        Some(Ok(similarity.to_string()))
    }
}

fn parse_pair(line: &str) -> anyhow::Result<(i64, i64)> {
    let mut tokens = line.split_whitespace();
    let left = tokens
        .next()
        .ok_or_else(|| anyhow!("missing left value"))?
        .parse()
        .context("bad left value")?;
    let right = tokens
        .next()
        .ok_or_else(|| anyhow!("missing right value"))?
        .parse()
        .context("bad right value")?;
    if tokens.next().is_some() {
        return Err(anyhow!("expected exactly two values"));
    }
    Ok((left, right))
}
