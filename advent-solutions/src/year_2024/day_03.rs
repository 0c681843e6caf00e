//! Year 2024, Day 3
//!
//! Corrupted memory scan over a fixed instruction vocabulary: `mul(a,b)`
//! multiplies, `do()` enables and `don't()` disables subsequent `mul`s.
//! Anything that does not match an instruction exactly is noise.

use advent_core::{Solution, SolutionError};
use advent_macros::AutoRegisterUnit;

#[derive(AutoRegisterUnit)]
#[advent(year = 2024, day = 3)]
pub struct Day03;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(i64, i64),
    Do,
    Dont,
}

impl Solution for Day03 {
    type Parsed = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::Parsed, SolutionError> {
        Ok(scan(input))
    }

    fn part1(parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
        let total: i64 = parsed
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::Mul(a, b) => Some(a * b),
                _ => None,
            })
            .sum();
        Some(Ok(total.to_string()))
    }

    fn part2(parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
        let (total, _) = parsed
            .iter()
            .fold((0i64, true), |(total, enabled), instruction| {
                match instruction {
                    Instruction::Do => (total, true),
                    Instruction::Dont => (total, false),
                    Instruction::Mul(a, b) if enabled => (total + a * b, enabled),
                    Instruction::Mul(..) => (total, enabled),
                }
            });
        Some(Ok(total.to_string()))
    }
}

/// Extract every instruction in order of appearance, skipping noise
fn scan(text: &str) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        if rest.starts_with("don't()") {
            instructions.push(Instruction::Dont);
            rest = &rest["don't()".len()..];
        } else if rest.starts_with("do()") {
            instructions.push(Instruction::Do);
            rest = &rest["do()".len()..];
        } else if let Some(after) = rest.strip_prefix("mul(") {
            match scan_mul_args(after) {
                Some((a, b, used)) => {
                    instructions.push(Instruction::Mul(a, b));
                    rest = &after[used..];
                }
                None => rest = after,
            }
        } else {
            let mut chars = rest.chars();
            chars.next();
            rest = chars.as_str();
        }
    }
    instructions
}

/// Match `A,B)` where A and B are 1-3 digit numbers; returns bytes consumed
fn scan_mul_args(text: &str) -> Option<(i64, i64, usize)> {
    let (a, mut used) = scan_number(text)?;
    if text.as_bytes().get(used) != Some(&b',') {
        return None;
    }
    used += 1;
    let (b, digits) = scan_number(&text[used..])?;
    used += digits;
    if text.as_bytes().get(used) != Some(&b')') {
        return None;
    }
    Some((a, b, used + 1))
}

fn scan_number(text: &str) -> Option<(i64, usize)> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if (1..=3).contains(&digits) {
        text[..digits].parse().ok().map(|number| (number, digits))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_1: &str = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const SAMPLE_2: &str = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn scanner_keeps_instruction_order() {
        assert_eq!(
            scan("do()mul(2,3)don't()"),
            vec![
                Instruction::Do,
                Instruction::Mul(2, 3),
                Instruction::Dont,
            ]
        );
    }

    #[test]
    fn scanner_rejects_malformed_calls() {
        assert_eq!(scan("mul(4*"), vec![]);
        assert_eq!(scan("mul(6,9!"), vec![]);
        assert_eq!(scan("?(12,34)"), vec![]);
        assert_eq!(scan("mul ( 2 , 4 )"), vec![]);
        // Numbers longer than three digits are noise.
        assert_eq!(scan("mul(1234,5)"), vec![]);
    }

    #[test]
    fn sample_part1_sums_all_products() {
        let mut parsed = Day03::parse(SAMPLE_1).unwrap();
        assert_eq!(Day03::part1(&mut parsed).unwrap().unwrap(), "161");
    }

    #[test]
    fn sample_part2_honours_toggles() {
        let mut parsed = Day03::parse(SAMPLE_2).unwrap();
        assert_eq!(Day03::part2(&mut parsed).unwrap().unwrap(), "48");
    }

    #[test]
    fn part2_starts_enabled() {
        let mut parsed = Day03::parse("mul(3,3)").unwrap();
        assert_eq!(Day03::part2(&mut parsed).unwrap().unwrap(), "9");
    }
}
