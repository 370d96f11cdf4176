use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, MassRate, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::fouling_resistance;

use super::FluidStream;

/// Raw stream values as collected by an input form.
///
/// Flow rate and specific heat are interpreted according to a
/// [`UnitConvention`]. The other fields are always °C, kg/m³, Pa·s,
/// W/(m·°C), and m²·°C/W.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamReading {
    pub flow_rate: f64,
    pub specific_heat: f64,
    pub inlet_celsius: f64,
    pub outlet_celsius: f64,
    pub density: f64,
    pub viscosity: f64,
    pub conductivity: f64,
    pub fouling: f64,
}

/// Units in which a [`StreamReading`] reports flow rate and specific heat.
///
/// The sizing pipeline itself always works in SI; the convention only
/// decides how raw readings are converted at the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitConvention {
    /// Flow in kg/s, specific heat in J/(kg·°C).
    #[default]
    SiPerSecond,

    /// Flow in kg/h, specific heat in kJ/(kg·°C).
    PerHourKilojoule,
}

impl UnitConvention {
    /// Converts a raw reading into a [`FluidStream`].
    #[must_use]
    pub fn stream(self, reading: &StreamReading) -> FluidStream {
        let (flow_scale, cp_scale) = match self {
            Self::SiPerSecond => (1.0, 1.0),
            Self::PerHourKilojoule => (1.0 / 3600.0, 1000.0),
        };

        FluidStream {
            m_dot: MassRate::new::<kilogram_per_second>(reading.flow_rate * flow_scale),
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
                reading.specific_heat * cp_scale,
            ),
            inlet: ThermodynamicTemperature::new::<degree_celsius>(reading.inlet_celsius),
            outlet: ThermodynamicTemperature::new::<degree_celsius>(reading.outlet_celsius),
            density: MassDensity::new::<kilogram_per_cubic_meter>(reading.density),
            viscosity: DynamicViscosity::new::<pascal_second>(reading.viscosity),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(reading.conductivity),
            fouling: fouling_resistance(reading.fouling),
        }
    }
}
