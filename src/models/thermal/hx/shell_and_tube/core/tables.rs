//! Static reference data consumed by the sizing stages.
//!
//! Each table is a `static` slice of plain records, kept apart from the
//! stage code so entries can be added or corrected without touching the
//! formulas. Name lookups are case-insensitive.
//!
//! Values follow the usual textbook tables for preliminary design
//! (Coulson & Richardson's *Chemical Engineering Design*, Vol. 6, ch. 12).

mod fouling;
mod layout;
mod material;
mod typical_u;

pub use fouling::{FOULING_RESISTANCES, FoulingEntry, fouling_resistance_for};
pub use layout::{
    BUNDLE_CONSTANTS, BundleConstants, CLEARANCE_BANDS, ClearanceBand, bundle_constants,
    shell_clearance,
};
pub use material::{TUBE_MATERIALS, TubeMaterial, tube_material_conductivity};
pub use typical_u::{TYPICAL_COEFFICIENTS, TypicalCoefficient, typical_overall_coefficient};

/// Finds the first entry whose key matches `name`, ignoring ASCII case and
/// surrounding whitespace.
fn find<'a, T>(entries: &'a [T], name: &str, key: impl Fn(&T) -> &str) -> Option<&'a T> {
    let name = name.trim();
    entries.iter().find(|&e| key(e).eq_ignore_ascii_case(name))
}
