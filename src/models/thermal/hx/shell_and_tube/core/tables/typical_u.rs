use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

use crate::models::thermal::hx::shell_and_tube::core::SizingError;

/// Typical overall coefficient for a hot/cold fluid pair, W/(m²·°C).
///
/// The value is the middle of the usual design range for the pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypicalCoefficient {
    pub hot: &'static str,
    pub cold: &'static str,
    pub coefficient: f64,
}

const fn pair(hot: &'static str, cold: &'static str, coefficient: f64) -> TypicalCoefficient {
    TypicalCoefficient {
        hot,
        cold,
        coefficient,
    }
}

pub static TYPICAL_COEFFICIENTS: &[TypicalCoefficient] = &[
    // Exchangers
    pair("water", "water", 1150.0),
    pair("organic solvents", "organic solvents", 200.0),
    pair("light oils", "light oils", 250.0),
    pair("heavy oils", "heavy oils", 175.0),
    pair("gases", "gases", 30.0),
    // Coolers
    pair("organic solvents", "water", 500.0),
    pair("light oils", "water", 625.0),
    pair("heavy oils", "water", 180.0),
    pair("gases", "water", 160.0),
    pair("organic solvents", "brine", 325.0),
    pair("water", "brine", 900.0),
    pair("gases", "brine", 132.5),
    // Heaters
    pair("steam", "water", 2750.0),
    pair("steam", "organic solvents", 750.0),
    pair("steam", "light oils", 600.0),
    pair("steam", "heavy oils", 255.0),
    pair("steam", "gases", 165.0),
    pair("dowtherm", "heavy oils", 175.0),
    pair("dowtherm", "gases", 110.0),
    pair("flue gases", "steam", 65.0),
    pair("flue gases", "hydrocarbon vapours", 65.0),
];

/// Returns the typical overall coefficient for a hot/cold fluid pair.
///
/// The pair is ordered: the first name is the hot fluid.
///
/// # Errors
///
/// Returns [`SizingError::UnknownLookupKey`] if the pair is not listed.
pub fn typical_overall_coefficient(hot: &str, cold: &str) -> Result<HeatTransfer, SizingError> {
    let (hot_key, cold_key) = (hot.trim(), cold.trim());

    TYPICAL_COEFFICIENTS
        .iter()
        .find(|e| e.hot.eq_ignore_ascii_case(hot_key) && e.cold.eq_ignore_ascii_case(cold_key))
        .map(|e| HeatTransfer::new::<watt_per_square_meter_kelvin>(e.coefficient))
        .ok_or_else(|| SizingError::UnknownLookupKey {
            table: "typical overall coefficient",
            key: format!("{hot_key} / {cold_key}"),
        })
}
