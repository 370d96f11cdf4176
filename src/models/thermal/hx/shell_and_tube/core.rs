//! Kern-method sizing of a shell-and-tube heat exchanger.
//!
//! The method runs as a fixed pipeline of seven stages: heat duty, mean
//! temperature difference, provisional area and tube count, tube-side
//! hydraulics, bundle and shell geometry, shell-side hydraulics, and the
//! overall coefficient. Each stage consumes the records of earlier stages
//! and either produces its own record or fails with a [`SizingError`] that
//! names the stage and the offending quantity.
//!
//! The pipeline makes a single pass. The calculated overall coefficient is
//! reported next to the assumed one and the caller decides whether to size
//! again with a different assumption.

mod config;
mod error;
mod input;
mod results;
mod stages;
mod tables;

#[cfg(test)]
pub(super) mod test_support;

pub use config::{
    AssumedCoefficient, BaffleSpacing, CorrectionFactor, CorrectionFactorSource, ShellSideFactors,
    SizingConfig, TubeFlow,
};
pub use error::{SizingError, Stage};
pub use input::{
    FluidStream, MaterialAndFouling, PitchLayout, SizingInput, StreamReading, TubeGeometry,
    TubeGeometryError, UnitConvention,
};
pub use results::{
    HeatDuty, OverallCoefficient, ShellGeometry, SideHydraulics, SizingResult,
    TemperatureDifference, TubeCount,
};
pub use stages::{equivalent_diameter, log_mean, one_shell_pass_correction};
pub use tables::{
    BUNDLE_CONSTANTS, BundleConstants, CLEARANCE_BANDS, ClearanceBand, FOULING_RESISTANCES,
    FoulingEntry, TUBE_MATERIALS, TYPICAL_COEFFICIENTS, TubeMaterial, TypicalCoefficient,
    bundle_constants, fouling_resistance_for, shell_clearance, tube_material_conductivity,
    typical_overall_coefficient,
};

use uom::si::heat_transfer::watt_per_square_meter_kelvin;

/// Runs the full sizing pipeline once.
///
/// The stages run in order and the first failure is returned unchanged.
/// When the calculated overall coefficient differs from the assumed one by
/// more than [`SizingConfig::acceptable_deviation`], a warning is logged and
/// the result is still returned.
///
/// # Errors
///
/// Returns a [`SizingError`] if the assumed coefficient cannot be resolved
/// or any stage rejects its inputs.
pub fn size(input: &SizingInput, config: &SizingConfig) -> Result<SizingResult, SizingError> {
    let span = tracing::debug_span!("shell_and_tube_sizing", passes = input.tubes.passes());
    let _entered = span.enter();

    let assumed = config.assumed_coefficient.resolve()?;

    let duty = stages::heat_duty(&input.hot, &input.cold)?;
    let temperature =
        stages::temperature_difference(&input.hot, &input.cold, config.correction_factor)?;
    let tubes = stages::tube_count(&duty, &temperature, assumed, &input.tubes)?;

    let tube_m_dot = match config.tube_flow {
        TubeFlow::EnergyBalance => duty.companion_m_dot,
        TubeFlow::Supplied => input.cold.m_dot,
    };
    let tube_side = stages::tube_side(&input.cold, tube_m_dot, &input.tubes, &tubes)?;

    let shell = stages::bundle_and_shell(&input.tubes, &tubes, config.baffle_spacing)?;
    let shell_side = stages::shell_side(&input.hot, &input.tubes, &shell, config.shell_side)?;

    let overall = stages::overall_coefficient(
        &input.tubes,
        &tube_side,
        &shell_side,
        &input.surfaces,
        assumed,
    )?;

    let deviation = overall.relative_deviation();
    if deviation.abs() > config.acceptable_deviation {
        tracing::warn!(
            calculated_w_m2_k = overall.calculated.get::<watt_per_square_meter_kelvin>(),
            assumed_w_m2_k = assumed.get::<watt_per_square_meter_kelvin>(),
            deviation,
            "calculated overall coefficient is far from the assumed value"
        );
    }

    Ok(SizingResult {
        duty,
        temperature,
        tubes,
        tube_side,
        shell,
        shell_side,
        overall,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{HeatTransfer, ThermodynamicTemperature},
        length::meter,
        mass_rate::kilogram_per_second,
        power::watt,
        pressure::pascal,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
        velocity::meter_per_second,
    };

    use super::test_support::{sizing_config, sizing_input};

    #[test]
    fn worked_example() -> Result<(), SizingError> {
        let result = size(&sizing_input(), &sizing_config())?;

        assert_relative_eq!(result.duty.q_dot.get::<watt>(), 2.28e6, max_relative = 1e-12);
        assert_relative_eq!(
            result.duty.companion_m_dot.get::<kilogram_per_second>(),
            27.272_727,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            result.temperature.delta_t1.get::<delta_kelvin>(),
            150.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.temperature.delta_t2.get::<delta_kelvin>(),
            10.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.temperature.lmtd.get::<delta_kelvin>(),
            51.697_712,
            max_relative = 1e-7
        );
        assert_eq!(result.tubes.tubes, 312);
        assert_relative_eq!(result.tubes.tubes_per_pass, 156.0);
        assert_relative_eq!(result.tube_side.reynolds, 17_390.18, max_relative = 1e-5);
        assert_relative_eq!(
            result.tube_side.pressure_drop.get::<pascal>(),
            8_474.62,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            result.shell.shell_diameter.get::<meter>(),
            0.598_670,
            max_relative = 1e-5
        );
        assert_relative_eq!(result.shell_side.reynolds, 13_947.77, max_relative = 1e-5);
        assert_relative_eq!(
            result.shell_side.pressure_drop.get::<pascal>(),
            73_781.0,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            result.overall.calculated.get::<watt_per_square_meter_kelvin>(),
            705.49,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            result.overall.assumed.get::<watt_per_square_meter_kelvin>(),
            500.0
        );
        Ok(())
    }

    #[test]
    fn supplied_tube_flow_drives_the_tube_side() -> Result<(), SizingError> {
        let mut config = sizing_config();
        config.tube_flow = TubeFlow::Supplied;

        let balance = size(&sizing_input(), &sizing_config())?;
        let supplied = size(&sizing_input(), &config)?;

        // The supplied cold flow is 30 kg/s against 27.27 kg/s from the balance.
        assert_relative_eq!(
            supplied.tube_side.velocity.get::<meter_per_second>()
                / balance.tube_side.velocity.get::<meter_per_second>(),
            30.0 / 27.272_727,
            max_relative = 1e-6
        );
        assert_eq!(supplied.duty, balance.duty);
        assert_eq!(supplied.shell, balance.shell);
        Ok(())
    }

    #[test]
    fn typical_coefficient_from_the_table() -> Result<(), SizingError> {
        let config = SizingConfig::new(AssumedCoefficient::typical("Light oils", "Water"));
        let result = size(&sizing_input(), &config)?;

        assert_eq!(
            result.tubes.assumed_coefficient,
            HeatTransfer::new::<watt_per_square_meter_kelvin>(625.0)
        );
        assert_eq!(result.overall.assumed, result.tubes.assumed_coefficient);
        Ok(())
    }

    #[test]
    fn unknown_fluid_pair_fails_before_any_stage() {
        let config = SizingConfig::new(AssumedCoefficient::typical("molten salt", "water"));
        let err = size(&sizing_input(), &config).unwrap_err();

        assert!(matches!(err, SizingError::UnknownLookupKey { .. }));
        assert_eq!(err.stage(), None);
    }

    #[test]
    fn crossing_profile_stops_the_pipeline() {
        let mut input = sizing_input();
        input.hot.inlet = ThermodynamicTemperature::new::<degree_celsius>(48.0);
        input.hot.outlet = ThermodynamicTemperature::new::<degree_celsius>(35.0);

        let err = size(&input, &sizing_config()).unwrap_err();

        assert!(matches!(err, SizingError::InvalidTemperatureProfile { .. }));
        assert_eq!(err.stage(), Some(Stage::TemperatureDifference));
    }

    #[test]
    fn one_shell_pass_rejects_the_worked_example() {
        let mut config = sizing_config();
        config.correction_factor = CorrectionFactorSource::OneShellPass;

        let err = size(&sizing_input(), &config).unwrap_err();

        assert_eq!(err.stage(), Some(Stage::TemperatureDifference));
    }

    #[test]
    fn unsupported_pass_count_is_reported_by_the_bundle_stage() {
        let mut input = sizing_input();
        input.tubes = TubeGeometry::new(
            input.tubes.outer_diameter(),
            input.tubes.inner_diameter(),
            input.tubes.length(),
            input.tubes.pitch(),
            PitchLayout::Triangular,
            3,
        )
        .expect("geometry is valid");

        let err = size(&input, &sizing_config()).unwrap_err();

        assert_eq!(
            err,
            SizingError::UnsupportedConfiguration {
                layout: PitchLayout::Triangular,
                passes: 3,
            }
        );
    }
}
