//! Unit registry: maps (year, day) to solution units
//!
//! Dispatch is by data, not static linkage: units are collected at startup
//! through `inventory` plugin submission (normally via the
//! `#[derive(AutoRegisterUnit)]` macro) and frozen into an immutable registry
//! the runner resolves against.

use crate::error::RegistrationError;
use crate::solution::UnitBindings;
use std::collections::HashMap;

/// Plugin record for automatic unit registration
///
/// Submit one per solution unit:
///
/// ```ignore
/// inventory::submit! {
///     UnitPlugin { year: 2024, day: 2, unit: &TypedUnit::<Day02>::new() }
/// }
/// ```
pub struct UnitPlugin {
    /// Puzzle year
    pub year: u16,
    /// Day number (1-25)
    pub day: u8,
    /// The unit's type-erased capability bundle
    pub unit: &'static dyn UnitBindings,
}

inventory::collect!(UnitPlugin);

/// Fluent builder for a [`UnitRegistry`]
///
/// Consuming methods chain with `?`; duplicates are rejected during
/// registration so conflicts surface at startup, not at dispatch.
pub struct RegistryBuilder {
    units: HashMap<(u16, u8), &'static dyn UnitBindings>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            units: HashMap::new(),
        }
    }

    /// Register a unit for a specific year and day
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        unit: &'static dyn UnitBindings,
    ) -> Result<Self, RegistrationError> {
        if self.units.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateUnit(year, day));
        }
        self.units.insert((year, day), unit);
        Ok(self)
    }

    /// Register every unit submitted through the plugin system
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<UnitPlugin>() {
            self = self.register(plugin.year, plugin.day, plugin.unit)?;
        }
        Ok(self)
    }

    /// Freeze into an immutable registry
    pub fn build(self) -> UnitRegistry {
        UnitRegistry { units: self.units }
    }
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("keys", &self.units.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from (year, day) to solution units
pub struct UnitRegistry {
    units: HashMap<(u16, u8), &'static dyn UnitBindings>,
}

impl UnitRegistry {
    /// Resolve the unit for a specific year and day, if registered
    pub fn resolve(&self, year: u16, day: u8) -> Option<&dyn UnitBindings> {
        self.units.get(&(year, day)).copied()
    }

    /// Whether a unit is registered for this year and day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.units.contains_key(&(year, day))
    }

    /// Number of registered units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the registry holds no units
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolutionError;
    use crate::solution::{Solution, TypedUnit};

    struct Noop;

    impl Solution for Noop {
        type Parsed = ();

        fn parse(_input: &str) -> Result<Self::Parsed, SolutionError> {
            Ok(())
        }
    }

    static NOOP: TypedUnit<Noop> = TypedUnit::new();

    #[test]
    fn resolve_is_exact() {
        let registry = RegistryBuilder::new()
            .register(2024, 2, &NOOP)
            .unwrap()
            .build();

        assert!(registry.resolve(2024, 2).is_some());
        // A unit for a different day or year never satisfies the lookup.
        assert!(registry.resolve(2024, 3).is_none());
        assert!(registry.resolve(2025, 2).is_none());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let err = RegistryBuilder::new()
            .register(2024, 2, &NOOP)
            .unwrap()
            .register(2024, 2, &NOOP)
            .unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateUnit(2024, 2)));
    }

    #[test]
    fn empty_registry_reports_empty() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(!registry.contains(2024, 1));
    }
}
