use uom::si::f64::ThermalConductivity;

use crate::support::{
    constraint::{ConstraintResult, NonNegative, StrictlyPositive},
    units::FoulingResistance,
};

use super::super::{
    SizingError,
    tables::{fouling_resistance_for, tube_material_conductivity},
};
use super::FluidStream;

/// Tube wall conductivity and the fouling resistance on each side.
///
/// Either supplied directly, taken from the streams' own fouling factors, or
/// selected by name from the reference tables.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialAndFouling {
    pub wall_conductivity: ThermalConductivity,
    pub hot_fouling: FoulingResistance,
    pub cold_fouling: FoulingResistance,
}

impl MaterialAndFouling {
    /// Constructs validated surface properties.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall conductivity is not strictly positive or
    /// either fouling resistance is negative.
    pub fn new(
        wall_conductivity: ThermalConductivity,
        hot_fouling: FoulingResistance,
        cold_fouling: FoulingResistance,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            wall_conductivity: StrictlyPositive::new(wall_conductivity)?.into_inner(),
            hot_fouling: NonNegative::new(hot_fouling)?.into_inner(),
            cold_fouling: NonNegative::new(cold_fouling)?.into_inner(),
        })
    }

    /// Uses the fouling resistances already carried by the streams.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`MaterialAndFouling::new`].
    pub fn from_streams(
        wall_conductivity: ThermalConductivity,
        hot: &FluidStream,
        cold: &FluidStream,
    ) -> ConstraintResult<Self> {
        Self::new(wall_conductivity, hot.fouling, cold.fouling)
    }

    /// Selects the wall conductivity and fouling resistances by name.
    ///
    /// Names are matched case-insensitively against the tube material and
    /// fouling service tables.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::UnknownLookupKey`] for a name missing from its
    /// table.
    pub fn from_names(
        material: &str,
        hot_service: &str,
        cold_service: &str,
    ) -> Result<Self, SizingError> {
        Ok(Self {
            wall_conductivity: tube_material_conductivity(material)?,
            hot_fouling: fouling_resistance_for(hot_service)?,
            cold_fouling: fouling_resistance_for(cold_service)?,
        })
    }
}
