//! Output records of the sizing stages.

use uom::si::{
    f64::{Area, HeatTransfer, Length, MassRate, Power, Pressure, TemperatureInterval, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
};

use crate::support::units::FoulingResistance;

/// Everything computed by one pass of the sizing pipeline.
///
/// All dimensional values are SI; Reynolds, Prandtl and Nusselt numbers and
/// friction factors are plain `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizingResult {
    pub duty: HeatDuty,
    pub temperature: TemperatureDifference,
    pub tubes: TubeCount,
    pub tube_side: SideHydraulics,
    pub shell: ShellGeometry,
    pub shell_side: SideHydraulics,
    pub overall: OverallCoefficient,
}

/// Heat duty and the tube-side flow it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatDuty {
    /// Heat given up by the hot stream.
    pub q_dot: Power,

    /// Cold-stream flow that absorbs `q_dot` between its terminal temperatures.
    pub companion_m_dot: MassRate,
}

/// Terminal temperature differences and the mean driving force.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureDifference {
    /// Hot inlet minus cold outlet.
    pub delta_t1: TemperatureInterval,

    /// Hot outlet minus cold inlet.
    pub delta_t2: TemperatureInterval,

    pub lmtd: TemperatureInterval,

    /// LMTD correction factor applied.
    pub correction_factor: f64,

    /// `correction_factor · lmtd`.
    pub corrected: TemperatureInterval,
}

/// Provisional area and the tube count that provides it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TubeCount {
    pub assumed_coefficient: HeatTransfer,
    pub provisional_area: Area,
    pub tubes: u32,

    /// `tubes / passes`, not rounded.
    pub tubes_per_pass: f64,
}

/// Flow, heat transfer, and pressure drop on one side of the exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideHydraulics {
    pub flow_area: Area,
    pub velocity: Velocity,

    /// Length used in the Reynolds and Nusselt numbers: the tube inner
    /// diameter or the shell-side equivalent diameter.
    pub characteristic_length: Length,

    pub reynolds: f64,
    pub prandtl: f64,
    pub nusselt: f64,
    pub friction_factor: f64,
    pub h: HeatTransfer,
    pub pressure_drop: Pressure,
}

/// Bundle, shell, and baffle dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShellGeometry {
    pub bundle_diameter: Length,
    pub clearance: Length,
    pub shell_diameter: Length,
    pub baffle_spacing: Length,
    pub cross_flow_area: Area,
}

/// Calculated overall coefficient alongside the assumed one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverallCoefficient {
    pub calculated: HeatTransfer,
    pub assumed: HeatTransfer,

    /// Shell-side film plus fouling resistance.
    pub hot_resistance: FoulingResistance,

    /// Tube wall conduction resistance.
    pub wall_resistance: FoulingResistance,

    /// Tube-side film plus fouling resistance, referred to the outside area.
    pub cold_resistance: FoulingResistance,
}

impl OverallCoefficient {
    /// Returns `(calculated - assumed) / assumed`.
    ///
    /// Positive when the design has margin over the assumed coefficient.
    #[must_use]
    pub fn relative_deviation(&self) -> f64 {
        let assumed = self.assumed.get::<watt_per_square_meter_kelvin>();
        (self.calculated.get::<watt_per_square_meter_kelvin>() - assumed) / assumed
    }
}
