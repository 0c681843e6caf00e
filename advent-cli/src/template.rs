//! Template generation for scaffolded solution units

/// Generate the solution file for a new (year, day)
///
/// The generated unit compiles as-is: `parse` splits the input into lines
/// and both parts answer `"0"` until real logic replaces them.
pub fn get_template(year: u16, day: u8) -> String {
    format!(
        r#"//! Year {year}, Day {day}

use advent_core::{{Solution, SolutionError}};
use advent_macros::AutoRegisterUnit;

#[derive(AutoRegisterUnit)]
#[advent(year = {year}, day = {day})]
pub struct Day{day:02};

impl Solution for Day{day:02} {{
    type Parsed = Vec<String>;

    fn parse(input: &str) -> Result<Self::Parsed, SolutionError> {{
        Ok(input.trim().lines().map(str::to_owned).collect())
    }}

    fn part1(_parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {{
        Some(Ok("0".to_string()))
    }}

    fn part2(_parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {{
        Some(Ok("0".to_string()))
    }}
}}
"#
    )
}
