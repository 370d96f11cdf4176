use uom::si::f64::{HeatTransfer, Length};

use crate::support::constraint::{ConstraintError, UnitIntervalLowerOpen};

use super::{SizingError, tables::typical_overall_coefficient};

/// Options that select between the variants of the sizing method.
///
/// Only the assumed overall coefficient has no sensible default, so it is
/// required by [`SizingConfig::new`]; every other field starts at its
/// [`Default`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizingConfig {
    /// Overall coefficient used to size the provisional area.
    pub assumed_coefficient: AssumedCoefficient,

    /// Source of the LMTD correction factor.
    pub correction_factor: CorrectionFactorSource,

    /// Mass flow used on the tube side.
    pub tube_flow: TubeFlow,

    /// How the baffle spacing is chosen.
    pub baffle_spacing: BaffleSpacing,

    /// Shell-side correlation constants.
    pub shell_side: ShellSideFactors,

    /// Relative gap between calculated and assumed overall coefficient above
    /// which a warning is logged.
    pub acceptable_deviation: f64,
}

impl SizingConfig {
    /// Default relative deviation between calculated and assumed `U`.
    pub const DEFAULT_ACCEPTABLE_DEVIATION: f64 = 0.3;

    /// Creates a configuration with defaults for everything but `U`.
    #[must_use]
    pub fn new(assumed_coefficient: AssumedCoefficient) -> Self {
        Self {
            assumed_coefficient,
            correction_factor: CorrectionFactorSource::default(),
            tube_flow: TubeFlow::default(),
            baffle_spacing: BaffleSpacing::default(),
            shell_side: ShellSideFactors::default(),
            acceptable_deviation: Self::DEFAULT_ACCEPTABLE_DEVIATION,
        }
    }
}

/// Source of the overall coefficient assumed for the provisional area.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssumedCoefficient {
    /// Caller-supplied value.
    Given(HeatTransfer),

    /// Typical value for a hot/cold fluid pair, e.g. `"light oils"` cooled
    /// by `"water"`.
    Typical { hot: String, cold: String },
}

impl AssumedCoefficient {
    /// Shorthand for [`AssumedCoefficient::Typical`].
    pub fn typical(hot: impl Into<String>, cold: impl Into<String>) -> Self {
        Self::Typical {
            hot: hot.into(),
            cold: cold.into(),
        }
    }

    /// Resolves the coefficient, looking it up if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::UnknownLookupKey`] for an unlisted fluid pair.
    pub fn resolve(&self) -> Result<HeatTransfer, SizingError> {
        match self {
            Self::Given(u) => Ok(*u),
            Self::Typical { hot, cold } => typical_overall_coefficient(hot, cold),
        }
    }
}

/// LMTD correction factor `F_T`, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct CorrectionFactor(f64);

impl CorrectionFactor {
    /// Value assumed for one shell pass and an even number of tube passes.
    pub const ASSUMED: Self = Self(0.9);

    /// Pure counterflow.
    pub const ONE: Self = Self(1.0);

    /// Creates a correction factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in `(0, 1]`.
    pub fn new(value: f64) -> Result<Self, ConstraintError> {
        Ok(Self(UnitIntervalLowerOpen::new(value)?.into_inner()))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CorrectionFactor {
    type Error = ConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CorrectionFactor> for f64 {
    fn from(factor: CorrectionFactor) -> Self {
        factor.0
    }
}

/// Source of the LMTD correction factor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectionFactorSource {
    /// Caller-supplied value, typically read from a chart.
    Given(CorrectionFactor),

    /// [`CorrectionFactor::ASSUMED`].
    #[default]
    Assumed,

    /// Computed from the terminal temperatures for one shell pass and an
    /// even number of tube passes.
    OneShellPass,
}

/// Mass flow driving the tube-side velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TubeFlow {
    /// Flow that absorbs the heat duty between the cold terminal temperatures.
    #[default]
    EnergyBalance,

    /// The cold stream's own mass flow rate.
    Supplied,
}

/// How the baffle spacing is set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaffleSpacing {
    /// A fraction of the shell diameter.
    ShellDiameterRatio(f64),

    /// A fixed spacing.
    Given(Length),
}

impl Default for BaffleSpacing {
    fn default() -> Self {
        Self::ShellDiameterRatio(0.2)
    }
}

impl BaffleSpacing {
    /// Returns the spacing for a given shell diameter.
    #[must_use]
    pub fn for_shell(self, shell_diameter: Length) -> Length {
        match self {
            Self::ShellDiameterRatio(ratio) => ratio * shell_diameter,
            Self::Given(spacing) => spacing,
        }
    }
}

/// Constants for the shell-side heat transfer and pressure drop correlations.
///
/// Both depend on Reynolds number and baffle cut; the defaults are chart
/// readings for a 25 % cut in the turbulent range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShellSideFactors {
    /// Heat transfer factor `j_h`.
    pub heat_transfer_factor: f64,

    /// Friction factor `f_shell`.
    pub friction_factor: f64,
}

impl Default for ShellSideFactors {
    fn default() -> Self {
        Self {
            heat_transfer_factor: 5.0e-3,
            friction_factor: 4.0e-2,
        }
    }
}
