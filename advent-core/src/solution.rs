//! Solution unit contract and type-erased dispatch
//!
//! A solution unit bundles the logic for one (year, day) puzzle. The typed
//! [`Solution`] trait is the authoring surface: `parse` is mandatory, the two
//! parts are optional and signal absence by returning `None`. The registry
//! and runner work against the erased [`UnitBindings`]/[`UnitInstance`] pair
//! so units with different `Parsed` types live in one container.

use crate::error::SolutionError;
use std::marker::PhantomData;

/// Trait implemented by each day's solution
///
/// # Example
///
/// ```
/// use advent_core::{Solution, SolutionError};
///
/// struct Day;
///
/// impl Solution for Day {
///     type Parsed = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, SolutionError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| SolutionError::InvalidFormat("bad int".into())))
///             .collect()
///     }
///
///     fn part1(parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
///         Some(Ok(parsed.iter().sum::<i64>().to_string()))
///     }
/// }
/// ```
pub trait Solution {
    /// Parsed representation of the puzzle input, opaque to the runner
    type Parsed;

    /// Transform raw input text into the parsed representation (required)
    fn parse(input: &str) -> Result<Self::Parsed, SolutionError>;

    /// Solve part 1; `None` means the part is not implemented
    fn part1(_parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
        None
    }

    /// Solve part 2; `None` means the part is not implemented
    ///
    /// Parts are independent: part 2 never receives part 1's result.
    fn part2(_parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
        None
    }
}

/// Type-erased capability bundle for one solution unit
///
/// The registry stores these. `parse` is a capability, not a given: a unit
/// that does not bind it answers `false` from [`binds_parse`] and `None` from
/// [`parse`], and the runner reports an interface violation at dispatch time.
///
/// [`binds_parse`]: UnitBindings::binds_parse
/// [`parse`]: UnitBindings::parse
pub trait UnitBindings: Sync {
    /// Whether this unit binds the required `parse` entry point
    fn binds_parse(&self) -> bool;

    /// Parse raw input into a runnable instance
    ///
    /// Returns `None` when the unit does not bind `parse`.
    fn parse(&self, input: &str) -> Option<Result<Box<dyn UnitInstance>, SolutionError>>;
}

/// A parsed solution unit, ready to run parts
pub trait UnitInstance {
    /// Run the given part number against the parsed data
    ///
    /// Returns `None` when the unit does not implement that part.
    fn run_part(&mut self, part: u8) -> Option<Result<String, SolutionError>>;
}

impl std::fmt::Debug for dyn UnitInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UnitInstance")
    }
}

/// Adapter giving every [`Solution`] implementation its [`UnitBindings`] form
///
/// Zero-sized and const-constructible so the derive macro can place one in a
/// static for plugin collection.
pub struct TypedUnit<S> {
    _marker: PhantomData<fn() -> S>,
}

impl<S> TypedUnit<S> {
    /// Create the adapter for solution type `S`
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S> Default for TypedUnit<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> UnitBindings for TypedUnit<S>
where
    S: Solution + 'static,
    S::Parsed: 'static,
{
    fn binds_parse(&self) -> bool {
        true
    }

    fn parse(&self, input: &str) -> Option<Result<Box<dyn UnitInstance>, SolutionError>> {
        Some(S::parse(input).map(|parsed| Box::new(Instance::<S> { parsed }) as Box<dyn UnitInstance>))
    }
}

/// Concrete instance pairing a solution type with its parsed data
struct Instance<S: Solution> {
    parsed: S::Parsed,
}

impl<S: Solution> UnitInstance for Instance<S> {
    fn run_part(&mut self, part: u8) -> Option<Result<String, SolutionError>> {
        match part {
            1 => S::part1(&mut self.parsed),
            2 => S::part2(&mut self.parsed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sum;

    impl Solution for Sum {
        type Parsed = Vec<i64>;

        fn parse(input: &str) -> Result<Self::Parsed, SolutionError> {
            input
                .lines()
                .map(|l| {
                    l.parse()
                        .map_err(|_| SolutionError::InvalidFormat("bad int".into()))
                })
                .collect()
        }

        fn part1(parsed: &mut Self::Parsed) -> Option<Result<String, SolutionError>> {
            Some(Ok(parsed.iter().sum::<i64>().to_string()))
        }
    }

    #[test]
    fn typed_unit_binds_parse_and_dispatches() {
        let unit = TypedUnit::<Sum>::new();
        assert!(unit.binds_parse());

        let mut instance = unit.parse("1\n2\n3").unwrap().unwrap();
        assert_eq!(instance.run_part(1).unwrap().unwrap(), "6");
        // part2 left unimplemented: absent-value sentinel, no error
        assert!(instance.run_part(2).is_none());
    }

    #[test]
    fn parse_failure_surfaces_unchanged() {
        let unit = TypedUnit::<Sum>::new();
        let err = unit.parse("not a number").unwrap().unwrap_err();
        assert!(matches!(err, SolutionError::InvalidFormat(_)));
    }
}
