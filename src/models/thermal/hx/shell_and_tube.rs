//! Shell-and-tube heat exchanger sizing.
//!
//! [`ShellAndTubeSizing`] is the [`twine_core::Model`] adapter: its input is
//! a [`SizingInput`] and its output a [`SizingResult`], with the method
//! options fixed in a [`SizingConfig`]. The computation lives in the internal
//! `core` module and is also callable directly through [`size`].
//!
//! The hot stream is on the shell side and the cold stream in the tubes.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_hx_sizing::models::thermal::hx::shell_and_tube::{
//!     AssumedCoefficient, MaterialAndFouling, PitchLayout, ShellAndTubeSizing, SizingConfig,
//!     SizingInput, StreamReading, TubeGeometry, UnitConvention,
//! };
//! use uom::si::{f64::Length, length::meter};
//!
//! let units = UnitConvention::SiPerSecond;
//! let hot = units.stream(&StreamReading {
//!     flow_rate: 6.25,
//!     specific_heat: 2280.0,
//!     inlet_celsius: 200.0,
//!     outlet_celsius: 40.0,
//!     density: 730.0,
//!     viscosity: 0.43e-3,
//!     conductivity: 0.13,
//!     fouling: 2.0e-4,
//! });
//! let cold = units.stream(&StreamReading {
//!     flow_rate: 27.0,
//!     specific_heat: 4180.0,
//!     inlet_celsius: 30.0,
//!     outlet_celsius: 50.0,
//!     density: 992.0,
//!     viscosity: 0.8e-3,
//!     conductivity: 0.59,
//!     fouling: 2.0e-4,
//! });
//!
//! let tubes = TubeGeometry::new(
//!     Length::new::<meter>(0.02),
//!     Length::new::<meter>(0.016),
//!     Length::new::<meter>(5.0),
//!     Length::new::<meter>(0.0238125),
//!     PitchLayout::Triangular,
//!     2,
//! )?;
//! let surfaces =
//!     MaterialAndFouling::from_names("carbon steel", "light hydrocarbons", "cooling water")?;
//!
//! let model = ShellAndTubeSizing::new(SizingConfig::new(AssumedCoefficient::typical(
//!     "light oils",
//!     "water",
//! )));
//! let result = model.call(&SizingInput { hot, cold, tubes, surfaces })?;
//!
//! assert!(result.tubes.tubes > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

use twine_core::Model;

pub use self::core::{
    AssumedCoefficient, BUNDLE_CONSTANTS, BaffleSpacing, BundleConstants, CLEARANCE_BANDS,
    ClearanceBand, CorrectionFactor, CorrectionFactorSource, FOULING_RESISTANCES, FluidStream,
    FoulingEntry, HeatDuty, MaterialAndFouling, OverallCoefficient, PitchLayout, ShellGeometry,
    ShellSideFactors, SideHydraulics, SizingConfig, SizingError, SizingInput, SizingResult, Stage,
    StreamReading, TUBE_MATERIALS, TYPICAL_COEFFICIENTS, TemperatureDifference, TubeCount,
    TubeFlow, TubeGeometry, TubeGeometryError, TubeMaterial, TypicalCoefficient, UnitConvention,
    bundle_constants, equivalent_diameter, fouling_resistance_for, log_mean,
    one_shell_pass_correction, shell_clearance, size, tube_material_conductivity,
    typical_overall_coefficient,
};

/// Sizes a shell-and-tube exchanger with a fixed [`SizingConfig`].
///
/// Each call runs the pipeline once. An outer loop that updates the assumed
/// coefficient from [`OverallCoefficient::calculated`] can wrap this model.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellAndTubeSizing {
    config: SizingConfig,
}

impl ShellAndTubeSizing {
    /// Creates a sizing model with the given configuration.
    #[must_use]
    pub fn new(config: SizingConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by every call.
    #[must_use]
    pub fn config(&self) -> &SizingConfig {
        &self.config
    }
}

impl Model for ShellAndTubeSizing {
    type Input = SizingInput;
    type Output = SizingResult;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        size(input, &self.config)
    }
}
