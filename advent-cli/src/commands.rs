//! The `run` and `create` subcommands

use crate::error::CliError;
use crate::output::OutputFormatter;
use crate::template::get_template;
use advent_core::{InputError, RunError, SourceTree, UnitRegistry, run_solution_in};
use std::fs;
use std::io;
use std::path::Path;

/// Run the solution for (year, day), printing results or diagnostics
///
/// All failure classes are presented here and none are fatal: a missing unit
/// suggests scaffolding, a missing input names the resolved path, anything
/// else is reported as a generic error.
pub fn run(registry: &UnitRegistry, tree: &SourceTree, year: u16, day: u8, timing: bool) {
    let formatter = OutputFormatter::new(timing);
    formatter.print_header(year, day);

    match run_solution_in(registry, tree, year, day) {
        Ok(reports) => {
            for report in &reports {
                formatter.print_report(report);
            }
        }
        Err(RunError::UnitNotFound { .. }) => {
            eprintln!("Solution not found for year {year}, day {day:02}");
            eprintln!("Create it with: advent create -y {year} -d {day}");
        }
        Err(err @ RunError::Input(InputError::NotFound { .. })) => {
            eprintln!("{err}");
        }
        Err(err) => {
            eprintln!("Error: {err}");
        }
    }
}

/// Scaffold the solution unit and input file for a new (year, day)
pub fn create(tree: &SourceTree, year: u16, day: u8) -> Result<(), CliError> {
    let year_dir = tree.year_dir(year);
    fs::create_dir_all(&year_dir)?;

    // Module markers, so the new unit is wired into the solutions crate.
    let year_mod = year_dir.join("mod.rs");
    if !year_mod.exists() {
        fs::write(&year_mod, format!("//! Advent of Code {year} solutions\n\n"))?;
    }
    ensure_line(&year_mod, &format!("pub mod day_{day:02};"))?;

    let lib_rs = tree.root().join("lib.rs");
    if lib_rs.exists() {
        ensure_line(&lib_rs, &format!("pub mod year_{year};"))?;
    }

    let solution = tree.solution_file(year, day);
    if solution.exists() {
        eprintln!("Solution file already exists: {}", solution.display());
        return Ok(());
    }
    fs::write(&solution, get_template(year, day))?;
    println!("✓ Created: {}", solution.display());

    let input = tree.input_file(year, day);
    fs::create_dir_all(tree.input_dir(year))?;
    if !input.exists() {
        fs::write(&input, "")?;
        println!("✓ Created: {}", input.display());
    }

    println!();
    println!("Next steps:");
    println!("  1. Add your puzzle input to: {}", input.display());
    println!("  2. Run with: advent run -y {year} -d {day}");
    Ok(())
}

/// Append `line` to the file unless an identical line is already present
fn ensure_line(path: &Path, line: &str) -> io::Result<()> {
    let mut contents = fs::read_to_string(path)?;
    if contents.lines().any(|existing| existing.trim() == line) {
        return Ok(());
    }
    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(line);
    contents.push('\n');
    fs::write(path, contents)
}
