//! Worked-example fixture shared by the stage tests.
//!
//! A light hydrocarbon cooled from 200 °C to 40 °C on the shell side by
//! water heated from 30 °C to 50 °C in the tubes.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, HeatTransfer, Length, MassDensity, MassRate, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::fouling_resistance;

use super::{
    AssumedCoefficient, FluidStream, MaterialAndFouling, PitchLayout, SizingConfig, SizingInput,
    TubeGeometry,
};

pub(crate) fn hot_stream() -> FluidStream {
    FluidStream {
        m_dot: MassRate::new::<kilogram_per_second>(6.25),
        cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2280.0),
        inlet: ThermodynamicTemperature::new::<degree_celsius>(200.0),
        outlet: ThermodynamicTemperature::new::<degree_celsius>(40.0),
        density: MassDensity::new::<kilogram_per_cubic_meter>(730.0),
        viscosity: DynamicViscosity::new::<pascal_second>(0.43e-3),
        conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.13),
        fouling: fouling_resistance(2.0e-4),
    }
}

/// The supplied flow differs from the energy-balance flow on purpose.
pub(crate) fn cold_stream() -> FluidStream {
    FluidStream {
        m_dot: MassRate::new::<kilogram_per_second>(30.0),
        cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
        inlet: ThermodynamicTemperature::new::<degree_celsius>(30.0),
        outlet: ThermodynamicTemperature::new::<degree_celsius>(50.0),
        density: MassDensity::new::<kilogram_per_cubic_meter>(992.0),
        viscosity: DynamicViscosity::new::<pascal_second>(0.8e-3),
        conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.59),
        fouling: fouling_resistance(2.0e-4),
    }
}

pub(crate) fn tube_geometry() -> TubeGeometry {
    TubeGeometry::new_unchecked(
        Length::new::<meter>(0.02),
        Length::new::<meter>(0.016),
        Length::new::<meter>(5.0),
        Length::new::<meter>(0.023_812_5),
        PitchLayout::Triangular,
        2,
    )
}

pub(crate) fn surfaces() -> MaterialAndFouling {
    MaterialAndFouling {
        wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(45.0),
        hot_fouling: fouling_resistance(2.0e-4),
        cold_fouling: fouling_resistance(2.0e-4),
    }
}

pub(crate) fn sizing_input() -> SizingInput {
    SizingInput {
        hot: hot_stream(),
        cold: cold_stream(),
        tubes: tube_geometry(),
        surfaces: surfaces(),
    }
}

pub(crate) fn sizing_config() -> SizingConfig {
    SizingConfig::new(AssumedCoefficient::Given(HeatTransfer::new::<
        watt_per_square_meter_kelvin,
    >(500.0)))
}
