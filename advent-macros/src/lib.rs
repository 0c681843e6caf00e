//! Procedural macros for the advent-core library

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro registering a solution unit with the plugin system
///
/// Generates an `inventory::submit!` of a `UnitPlugin` wrapping the type in
/// a `TypedUnit`, so the unit is discovered by
/// `RegistryBuilder::register_all_plugins` without any static wiring.
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2024)
/// - `day`: Required. The day number (1-25)
///
/// # Requirements
///
/// The type must implement the `Solution` trait; a missing implementation is
/// reported as a clear compile-time trait-bound error.
///
/// # Example
///
/// ```ignore
/// use advent_core::{AutoRegisterUnit, Solution, SolutionError};
///
/// #[derive(AutoRegisterUnit)]
/// #[advent(year = 2024, day = 2)]
/// pub struct Day02;
///
/// impl Solution for Day02 {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterUnit, attributes(advent))]
pub fn derive_auto_register_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let advent_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("advent"))
        .expect("AutoRegisterUnit derive macro requires #[advent(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;

    advent_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[advent(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    let unit_static = format_ident!("__ADVENT_UNIT_{}", name.to_string().to_uppercase());

    let expanded = quote! {
        // Compile-time check that the type implements the Solution trait,
        // surfacing a readable error when the impl is missing
        const _: () = {
            trait MustImplementSolution: ::advent_core::Solution {}
            impl MustImplementSolution for #name {}
        };

        #[doc(hidden)]
        static #unit_static: ::advent_core::TypedUnit<#name> =
            ::advent_core::TypedUnit::new();

        ::advent_core::inventory::submit! {
            ::advent_core::UnitPlugin {
                year: #year,
                day: #day,
                unit: &#unit_static,
            }
        }
    };

    TokenStream::from(expanded)
}
