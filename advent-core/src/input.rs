//! Input loading for the currently active solution context

use crate::context::{get_day, get_year};
use crate::error::InputError;
use crate::paths::SourceTree;
use std::fs;
use std::io::ErrorKind;

/// Return raw input text for the current (year, day) context, default root
///
/// One-shot whole-file read; no caching, no retries.
pub fn get_data() -> Result<String, InputError> {
    get_data_in(&SourceTree::default())
}

/// Return raw input text for the current (year, day) context in `tree`
///
/// Fails with [`InputError::NotFound`] carrying the resolved path when the
/// file does not exist; the filesystem error is preserved as the source.
pub fn get_data_in(tree: &SourceTree) -> Result<String, InputError> {
    let year = get_year()?;
    let day = get_day()?;
    let path = tree.input_file(year, day);

    fs::read_to_string(&path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound { path, source },
        _ => InputError::Io { path, source },
    })
}

/// Split input into lines, dropping blank and whitespace-only lines
pub fn parse_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::set_context;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_input_for_active_context() {
        let temp = TempDir::new().unwrap();
        let tree = SourceTree::new(temp.path());

        let input_path = tree.input_file(2024, 5);
        fs::create_dir_all(input_path.parent().unwrap()).unwrap();
        fs::write(&input_path, "a\nb\nc\n").unwrap();

        set_context(2024, 5);
        assert_eq!(get_data_in(&tree).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn missing_input_reports_resolved_path() {
        let temp = TempDir::new().unwrap();
        let tree = SourceTree::new(temp.path());

        set_context(2024, 9);
        let err = get_data_in(&tree).unwrap_err();
        match &err {
            InputError::NotFound { path, .. } => {
                assert_eq!(*path, tree.input_file(2024, 9));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        // The message carries the exact resolved path.
        assert!(
            err.to_string()
                .contains(&tree.input_file(2024, 9).display().to_string())
        );
        // The underlying filesystem error is kept as the cause.
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unset_context_fails_before_touching_disk() {
        let tree = SourceTree::new("/nonexistent");
        assert!(matches!(get_data_in(&tree), Err(InputError::Context(_))));
    }

    #[test]
    fn parse_lines_drops_blanks() {
        let lines: Vec<_> = parse_lines("a\n\n  \nb\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }
}
