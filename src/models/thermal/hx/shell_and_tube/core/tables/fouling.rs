use crate::{
    models::thermal::hx::shell_and_tube::core::SizingError,
    support::units::{FoulingResistance, fouling_resistance},
};

/// Fouling resistance for one type of service, m²·°C/W.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoulingEntry {
    pub service: &'static str,
    pub resistance: f64,
}

#[rustfmt::skip]
pub static FOULING_RESISTANCES: &[FoulingEntry] = &[
    FoulingEntry { service: "river water", resistance: 2.0e-4 },
    FoulingEntry { service: "sea water", resistance: 5.0e-4 },
    FoulingEntry { service: "cooling water", resistance: 2.5e-4 },
    FoulingEntry { service: "soft towns water", resistance: 2.5e-4 },
    FoulingEntry { service: "hard towns water", resistance: 6.0e-4 },
    FoulingEntry { service: "steam condensate", resistance: 3.0e-4 },
    FoulingEntry { service: "steam", resistance: 1.0e-4 },
    FoulingEntry { service: "oil-contaminated steam", resistance: 3.0e-4 },
    FoulingEntry { service: "brine", resistance: 2.5e-4 },
    FoulingEntry { service: "air", resistance: 1.5e-4 },
    FoulingEntry { service: "flue gases", resistance: 4.0e-4 },
    FoulingEntry { service: "organic vapours", resistance: 2.0e-4 },
    FoulingEntry { service: "organic liquids", resistance: 2.0e-4 },
    FoulingEntry { service: "light hydrocarbons", resistance: 2.0e-4 },
    FoulingEntry { service: "heavy hydrocarbons", resistance: 5.0e-4 },
    FoulingEntry { service: "boiling organics", resistance: 4.0e-4 },
    FoulingEntry { service: "condensing organics", resistance: 2.0e-4 },
    FoulingEntry { service: "heat transfer fluids", resistance: 2.0e-4 },
    FoulingEntry { service: "aqueous salt solutions", resistance: 2.5e-4 },
];

/// Returns the fouling resistance for a named service.
///
/// # Errors
///
/// Returns [`SizingError::UnknownLookupKey`] if the service is not listed.
pub fn fouling_resistance_for(service: &str) -> Result<FoulingResistance, SizingError> {
    super::find(FOULING_RESISTANCES, service, |e| e.service)
        .map(|e| fouling_resistance(e.resistance))
        .ok_or_else(|| SizingError::UnknownLookupKey {
            table: "fouling service",
            key: service.to_owned(),
        })
}
