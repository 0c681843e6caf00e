//! Ambient solution context
//!
//! Binds the (year, day) pair of the puzzle currently being executed so that
//! utilities like the input loader can locate files without having the pair
//! threaded through every signature. Storage is thread-local: one logical run
//! per thread, so concurrent runs on separate threads never cross-talk.

use crate::error::ContextError;
use std::cell::Cell;

/// The currently active solution, identified by year and day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionContext {
    /// Four-digit calendar year (advisory, not enforced here)
    pub year: u16,
    /// Day number, conventionally 1-25 (advisory, not enforced here)
    pub day: u8,
}

thread_local! {
    static CONTEXT: Cell<Option<SolutionContext>> = const { Cell::new(None) };
}

/// Set the ambient context for the current thread
///
/// A later call replaces the previous value; there is no teardown.
pub fn set_context(year: u16, day: u8) {
    CONTEXT.with(|ctx| ctx.set(Some(SolutionContext { year, day })));
}

/// Return the ambient context for the current thread
///
/// Fails with [`ContextError::NotSet`] before the first `set_context`.
pub fn get_context() -> Result<SolutionContext, ContextError> {
    CONTEXT.with(|ctx| ctx.get()).ok_or(ContextError::NotSet)
}

/// Get the year of the active context
pub fn get_year() -> Result<u16, ContextError> {
    get_context().map(|ctx| ctx.year)
}

/// Get the day of the active context
pub fn get_day() -> Result<u8, ContextError> {
    get_context().map(|ctx| ctx.day)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test runs on its own thread, so the thread-local starts Unset.

    #[test]
    fn unset_context_errors() {
        assert!(matches!(get_context(), Err(ContextError::NotSet)));
        assert!(matches!(get_year(), Err(ContextError::NotSet)));
        assert!(matches!(get_day(), Err(ContextError::NotSet)));
    }

    #[test]
    fn set_then_get_roundtrip() {
        set_context(2024, 5);
        assert_eq!(
            get_context().unwrap(),
            SolutionContext { year: 2024, day: 5 }
        );
        assert_eq!(get_year().unwrap(), 2024);
        assert_eq!(get_day().unwrap(), 5);
    }

    #[test]
    fn later_set_overwrites() {
        set_context(2024, 1);
        set_context(2025, 25);
        assert_eq!(get_year().unwrap(), 2025);
        assert_eq!(get_day().unwrap(), 25);
    }

    #[test]
    fn context_is_thread_scoped() {
        set_context(2024, 3);
        let other = std::thread::spawn(|| get_context().is_err());
        assert!(other.join().unwrap());
        assert_eq!(get_day().unwrap(), 3);
    }
}
