use std::fmt;

use thiserror::Error;
use uom::si::f64::TemperatureInterval;

use super::PitchLayout;

/// Pipeline stage at which a sizing calculation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    HeatDuty,
    TemperatureDifference,
    AreaAndTubeCount,
    TubeSide,
    BundleAndShell,
    ShellSide,
    OverallCoefficient,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HeatDuty => "heat duty",
            Self::TemperatureDifference => "temperature difference",
            Self::AreaAndTubeCount => "area and tube count",
            Self::TubeSide => "tube side",
            Self::BundleAndShell => "bundle and shell",
            Self::ShellSide => "shell side",
            Self::OverallCoefficient => "overall coefficient",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while sizing a shell-and-tube heat exchanger.
///
/// Every variant is raised by the stage that would otherwise divide by zero,
/// take the logarithm of a non-positive number, or apply a correlation
/// outside its domain. No input is clamped or replaced by a default.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// A temperature difference is non-positive or otherwise non-physical.
    ///
    /// Raised for crossing hot/cold profiles, for streams that change
    /// temperature in the wrong direction, and for correction factors that
    /// cannot be achieved by the configured arrangement.
    #[error("invalid temperature profile in {stage} stage: {quantity} = {delta_t:?}")]
    InvalidTemperatureProfile {
        stage: Stage,
        quantity: &'static str,
        delta_t: TemperatureInterval,
    },

    /// A denominator evaluated to zero.
    ///
    /// Every denominator in the method is a physically positive quantity, so
    /// negative and non-finite values are reported the same way.
    #[error("division by zero in {stage} stage: {quantity} is not positive")]
    DivisionByZero {
        stage: Stage,
        quantity: &'static str,
    },

    /// A flow correlation was evaluated outside its domain.
    ///
    /// The Reynolds and Prandtl numbers and the heat duty must be finite and
    /// strictly positive, and the tube count must fit in a `u32`.
    #[error("non-physical flow in {stage} stage: {quantity} = {value}")]
    NonPhysicalFlow {
        stage: Stage,
        quantity: &'static str,
        value: f64,
    },

    /// No bundle constants exist for the pitch layout and pass count.
    #[error("no bundle constants for {layout:?} pitch with {passes} tube passes")]
    UnsupportedConfiguration { layout: PitchLayout, passes: u16 },

    /// A name was not found in a reference table.
    #[error("unknown {table} key: {key:?}")]
    UnknownLookupKey { table: &'static str, key: String },
}

impl SizingError {
    /// Returns the stage that raised the error, when it is stage-specific.
    ///
    /// Lookup failures can happen while preparing inputs, before any stage
    /// runs, so they have no stage.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::InvalidTemperatureProfile { stage, .. }
            | Self::DivisionByZero { stage, .. }
            | Self::NonPhysicalFlow { stage, .. } => Some(*stage),
            Self::UnsupportedConfiguration { .. } => Some(Stage::BundleAndShell),
            Self::UnknownLookupKey { .. } => None,
        }
    }

    /// Checks that a dimensionless flow group is finite and strictly positive.
    pub(super) fn check_flow_group(
        stage: Stage,
        quantity: &'static str,
        value: f64,
    ) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::NonPhysicalFlow {
                stage,
                quantity,
                value,
            })
        }
    }

    /// Checks that a denominator is finite and strictly positive.
    pub(super) fn check_denominator(
        stage: Stage,
        quantity: &'static str,
        value: f64,
    ) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::DivisionByZero { stage, quantity })
        }
    }
}
