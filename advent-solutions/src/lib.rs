//! Per-day puzzle solution units
//!
//! Each unit lives at `year_YYYY/day_DD.rs`, implements the `Solution`
//! contract from advent-core and registers itself with the
//! `AutoRegisterUnit` derive macro. The runner never depends on a unit's
//! internals, only on its registered entry points.

pub mod year_2024;
pub mod year_2025;
