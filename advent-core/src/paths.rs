//! Path resolution for solution units and their input data
//!
//! Pure path composition keyed by (year, day); no I/O, no failure modes.
//!
//! Layout, relative to the source root:
//!
//! ```text
//! <root>/year_<YEAR>/mod.rs            module marker, created by scaffolding
//! <root>/year_<YEAR>/day_<DD>.rs       solution unit, DD zero-padded
//! <root>/year_<YEAR>/data/day<DD>.txt  raw puzzle input
//! ```

use std::path::{Path, PathBuf};

/// Default source root: where the `year_YYYY` modules live
pub const DEFAULT_SRC_ROOT: &str = "advent-solutions/src";

/// Directory inside each year module where input data lives
pub const INPUT_DIR_NAME: &str = "data";

/// A configured source tree rooted at some directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
    root: PathBuf,
}

impl SourceTree {
    /// Create a source tree rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for a given year, e.g. `<root>/year_2024`
    pub fn year_dir(&self, year: u16) -> PathBuf {
        self.root.join(format!("year_{year}"))
    }

    /// Source file for a given year/day, e.g. `<root>/year_2024/day_02.rs`
    pub fn solution_file(&self, year: u16, day: u8) -> PathBuf {
        self.year_dir(year).join(format!("day_{day:02}.rs"))
    }

    /// Input data directory for a given year, e.g. `<root>/year_2024/data`
    pub fn input_dir(&self, year: u16) -> PathBuf {
        self.year_dir(year).join(INPUT_DIR_NAME)
    }

    /// Input file for a given year/day, e.g. `<root>/year_2024/data/day02.txt`
    pub fn input_file(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir(year).join(format!("day{day:02}.txt"))
    }
}

impl Default for SourceTree {
    fn default() -> Self {
        Self::new(DEFAULT_SRC_ROOT)
    }
}

/// Directory for a given year under the default root
pub fn year_dir(year: u16) -> PathBuf {
    SourceTree::default().year_dir(year)
}

/// Solution file for a given year/day under the default root
pub fn solution_file(year: u16, day: u8) -> PathBuf {
    SourceTree::default().solution_file(year, day)
}

/// Input file for a given year/day under the default root
pub fn input_file(year: u16, day: u8) -> PathBuf {
    SourceTree::default().input_file(year, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::Path;

    #[test]
    fn day_numbers_are_zero_padded() {
        let tree = SourceTree::new("src");
        assert_eq!(
            tree.solution_file(2024, 2),
            Path::new("src/year_2024/day_02.rs")
        );
        assert_eq!(
            tree.input_file(2024, 2),
            Path::new("src/year_2024/data/day02.txt")
        );
        assert_eq!(
            tree.solution_file(2025, 25),
            Path::new("src/year_2025/day_25.rs")
        );
    }

    #[test]
    fn input_lives_under_data_dir() {
        let tree = SourceTree::new("root");
        let input = tree.input_file(2024, 7);
        assert!(input.starts_with(tree.year_dir(2024).join(INPUT_DIR_NAME)));
    }

    #[test]
    fn default_root_matches_free_functions() {
        assert_eq!(year_dir(2024), SourceTree::default().year_dir(2024));
        assert_eq!(
            input_file(2024, 1),
            SourceTree::default().input_file(2024, 1)
        );
    }

    proptest! {
        #[test]
        fn resolution_is_referentially_transparent(year in 2015u16..2100, day in 1u8..=25) {
            let tree = SourceTree::new("src");
            prop_assert_eq!(tree.solution_file(year, day), tree.solution_file(year, day));
            prop_assert_eq!(tree.input_file(year, day), tree.input_file(year, day));
            prop_assert_eq!(tree.year_dir(year), tree.year_dir(year));
        }

        #[test]
        fn files_nest_under_year_dir(year in 2015u16..2100, day in 1u8..=25) {
            let tree = SourceTree::new("src");
            prop_assert!(tree.solution_file(year, day).starts_with(tree.year_dir(year)));
            prop_assert!(tree.input_file(year, day).starts_with(tree.year_dir(year)));
        }
    }
}
