use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

use crate::models::thermal::hx::shell_and_tube::core::SizingError;

/// Thermal conductivity of a tube material near ambient temperature, W/(m·°C).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeMaterial {
    pub name: &'static str,
    pub conductivity: f64,
}

#[rustfmt::skip]
pub static TUBE_MATERIALS: &[TubeMaterial] = &[
    TubeMaterial { name: "carbon steel", conductivity: 45.0 },
    TubeMaterial { name: "stainless steel", conductivity: 16.0 },
    TubeMaterial { name: "copper", conductivity: 390.0 },
    TubeMaterial { name: "admiralty brass", conductivity: 111.0 },
    TubeMaterial { name: "aluminium", conductivity: 205.0 },
    TubeMaterial { name: "cupronickel 90/10", conductivity: 50.0 },
    TubeMaterial { name: "cupronickel 70/30", conductivity: 29.0 },
    TubeMaterial { name: "nickel", conductivity: 91.0 },
    TubeMaterial { name: "monel", conductivity: 26.0 },
    TubeMaterial { name: "titanium", conductivity: 22.0 },
];

/// Returns the wall conductivity of a named tube material.
///
/// # Errors
///
/// Returns [`SizingError::UnknownLookupKey`] if the material is not listed.
pub fn tube_material_conductivity(name: &str) -> Result<ThermalConductivity, SizingError> {
    super::find(TUBE_MATERIALS, name, |m| m.name)
        .map(|m| ThermalConductivity::new::<watt_per_meter_kelvin>(m.conductivity))
        .ok_or_else(|| SizingError::UnknownLookupKey {
            table: "tube material",
            key: name.to_owned(),
        })
}
