use uom::si::f64::{
    DynamicViscosity, MassDensity, MassRate, SpecificHeatCapacity, TemperatureInterval,
    ThermalConductivity, ThermodynamicTemperature,
};

use crate::support::units::{FoulingResistance, TemperatureDifference};

/// Flow rate, terminal temperatures, and bulk properties of one stream.
///
/// Properties are taken as constant at the stream's mean temperature.
/// Range validation is the job of whatever collects the values; the sizing
/// stages report physically impossible combinations as
/// [`SizingError`](super::super::SizingError)s.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluidStream {
    pub m_dot: MassRate,
    pub cp: SpecificHeatCapacity,
    pub inlet: ThermodynamicTemperature,
    pub outlet: ThermodynamicTemperature,
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub conductivity: ThermalConductivity,
    pub fouling: FoulingResistance,
}

impl FluidStream {
    /// Returns `inlet - outlet`, positive for a stream that cools.
    #[must_use]
    pub fn temperature_drop(&self) -> TemperatureInterval {
        self.inlet.minus(self.outlet)
    }

    /// Returns `outlet - inlet`, positive for a stream that heats.
    #[must_use]
    pub fn temperature_rise(&self) -> TemperatureInterval {
        self.outlet.minus(self.inlet)
    }
}
