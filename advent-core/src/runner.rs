//! Solution runner: context setup, unit resolution and part dispatch

use crate::context::set_context;
use crate::error::RunError;
use crate::input::get_data_in;
use crate::paths::SourceTree;
use crate::registry::UnitRegistry;
use std::time::{Duration, Instant};

/// Fixed dispatch order; parts are independent, the order is display-only
const PART_ORDER: [u8; 2] = [1, 2];

/// Outcome of one implemented part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartReport {
    /// Part number (1 or 2)
    pub part: u8,
    /// The answer, rendered as text
    pub answer: String,
    /// Wall-clock time spent in the part
    pub duration: Duration,
}

/// Conventional unit name used in diagnostics, e.g. `year_2024::day_02`
pub fn unit_name(year: u16, day: u8) -> String {
    format!("year_{year}::day_{day:02}")
}

/// Run the solution for (year, day) against the default source tree
pub fn run_solution(
    registry: &UnitRegistry,
    year: u16,
    day: u8,
) -> Result<Vec<PartReport>, RunError> {
    run_solution_in(registry, &SourceTree::default(), year, day)
}

/// Run the solution for (year, day), loading input from `tree`
///
/// Ordering invariant: the ambient context is established before the unit is
/// resolved, so any code reaching for the context during resolution or
/// parsing observes the correct (year, day).
pub fn run_solution_in(
    registry: &UnitRegistry,
    tree: &SourceTree,
    year: u16,
    day: u8,
) -> Result<Vec<PartReport>, RunError> {
    set_context(year, day);

    let unit = registry
        .resolve(year, day)
        .ok_or(RunError::UnitNotFound { year, day })?;

    // Required capability, checked before any input is read.
    if !unit.binds_parse() {
        return Err(RunError::InterfaceViolation {
            unit: unit_name(year, day),
        });
    }

    let raw = get_data_in(tree)?;

    let mut instance = match unit.parse(&raw) {
        Some(parsed) => parsed?,
        None => {
            return Err(RunError::InterfaceViolation {
                unit: unit_name(year, day),
            });
        }
    };

    let mut reports = Vec::new();
    for part in PART_ORDER {
        let started = Instant::now();
        // Absent parts are skipped silently; failures propagate unchanged.
        if let Some(result) = instance.run_part(part) {
            reports.push(PartReport {
                part,
                answer: result?,
                duration: started.elapsed(),
            });
        }
    }
    Ok(reports)
}
