//! Output formatting for runner results

use advent_core::PartReport;
use std::time::Duration;

/// Formats runner output for the terminal
pub struct OutputFormatter {
    timing: bool,
}

impl OutputFormatter {
    /// Create a formatter; `timing` appends per-part durations
    pub fn new(timing: bool) -> Self {
        Self { timing }
    }

    /// Print the run header for a year/day
    pub fn print_header(&self, year: u16, day: u8) {
        println!("Year {year}, Day {day:02}");
        println!("{}", "-".repeat(50));
    }

    /// Print a single part result
    pub fn print_report(&self, report: &PartReport) {
        println!("{}", self.format_report(report));
    }

    fn format_report(&self, report: &PartReport) -> String {
        if self.timing {
            format!(
                "Part {}: {} ({})",
                report.part,
                report.answer,
                format_duration(report.duration)
            )
        } else {
            format!("Part {}: {}", report.part, report.answer)
        }
    }
}

/// Format a duration for display
fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_exactly_part_and_answer() {
        let formatter = OutputFormatter::new(false);
        let report = PartReport {
            part: 1,
            answer: "0".to_string(),
            duration: Duration::from_micros(42),
        };
        assert_eq!(formatter.format_report(&report), "Part 1: 0");
    }

    #[test]
    fn timing_format_appends_duration() {
        let formatter = OutputFormatter::new(true);
        let report = PartReport {
            part: 2,
            answer: "161".to_string(),
            duration: Duration::from_micros(42),
        };
        assert_eq!(formatter.format_report(&report), "Part 2: 161 (42µs)");
    }

    #[test]
    fn duration_units_scale() {
        assert_eq!(format_duration(Duration::from_micros(999)), "999µs");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_secs(2)), "2.00s");
    }
}
