use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::{
    models::thermal::hx::shell_and_tube::core::{
        CorrectionFactor, CorrectionFactorSource, FluidStream, SizingError, Stage,
        TemperatureDifference,
    },
    support::units::TemperatureDifference as _,
};

/// Relative tolerance below which the terminal differences count as equal.
const EQUAL_ENDS_TOLERANCE: f64 = 1e-9;

/// Computes the counter-flow terminal differences, the LMTD, and the
/// corrected mean temperature difference.
pub(in super::super) fn temperature_difference(
    hot: &FluidStream,
    cold: &FluidStream,
    source: CorrectionFactorSource,
) -> Result<TemperatureDifference, SizingError> {
    let delta_t1 = hot.inlet.minus(cold.outlet);
    let delta_t2 = hot.outlet.minus(cold.inlet);

    for (quantity, delta_t) in [
        ("hot inlet minus cold outlet", delta_t1),
        ("hot outlet minus cold inlet", delta_t2),
    ] {
        if delta_t.get::<delta_kelvin>() <= 0.0 {
            return Err(SizingError::InvalidTemperatureProfile {
                stage: Stage::TemperatureDifference,
                quantity,
                delta_t,
            });
        }
    }

    let lmtd = log_mean(delta_t1, delta_t2);

    let correction_factor = match source {
        CorrectionFactorSource::Given(factor) => factor.value(),
        CorrectionFactorSource::Assumed => CorrectionFactor::ASSUMED.value(),
        CorrectionFactorSource::OneShellPass => {
            let hot_drop = hot.temperature_drop().get::<delta_kelvin>();
            let cold_rise = cold.temperature_rise().get::<delta_kelvin>();
            let approach = hot.inlet.minus(cold.inlet).get::<delta_kelvin>();

            one_shell_pass_correction(hot_drop / cold_rise, cold_rise / approach).ok_or(
                SizingError::InvalidTemperatureProfile {
                    stage: Stage::TemperatureDifference,
                    quantity: "temperature cross for one shell pass",
                    delta_t: hot.outlet.minus(cold.outlet),
                },
            )?
        }
    };

    let corrected = correction_factor * lmtd;

    tracing::debug!(
        delta_t1_k = delta_t1.get::<delta_kelvin>(),
        delta_t2_k = delta_t2.get::<delta_kelvin>(),
        lmtd_k = lmtd.get::<delta_kelvin>(),
        correction_factor,
        "temperature difference"
    );

    Ok(TemperatureDifference {
        delta_t1,
        delta_t2,
        lmtd,
        correction_factor,
        corrected,
    })
}

/// Returns the logarithmic mean of two positive temperature differences.
///
/// When the two are equal to within a relative `1e-9` the mean is the common
/// value, which is the limit of `(a - b) / ln(a / b)` as `a → b`.
#[must_use]
pub fn log_mean(a: TemperatureInterval, b: TemperatureInterval) -> TemperatureInterval {
    let a_k = a.get::<delta_kelvin>();
    let b_k = b.get::<delta_kelvin>();

    if (a_k - b_k).abs() <= EQUAL_ENDS_TOLERANCE * a_k.abs().max(b_k.abs()) {
        return a;
    }

    TemperatureInterval::new::<delta_kelvin>((a_k - b_k) / (a_k / b_k).ln())
}

/// Returns the LMTD correction factor for one shell pass and an even number
/// of tube passes.
///
/// `r` is the hot-stream drop over the cold-stream rise and `p` is the cold
/// rise over the inlet approach `T_hot,in - T_cold,in`. Returns `None` when
/// the arrangement cannot reach the requested temperatures, which shows up
/// as a logarithm of a non-positive number.
#[must_use]
pub fn one_shell_pass_correction(r: f64, p: f64) -> Option<f64> {
    if !r.is_finite() || r <= 0.0 || p <= 0.0 || p >= 1.0 || p.is_nan() {
        return None;
    }

    let s = (r * r + 1.0).sqrt();
    let denominator_arg = (2.0 - p * (r + 1.0 - s)) / (2.0 - p * (r + 1.0 + s));
    if !denominator_arg.is_finite() || denominator_arg <= 0.0 {
        return None;
    }

    let f_t = if (r - 1.0).abs() <= EQUAL_ENDS_TOLERANCE {
        (p * s / (1.0 - p)) / denominator_arg.ln()
    } else {
        let numerator_arg = (1.0 - p) / (1.0 - p * r);
        if !numerator_arg.is_finite() || numerator_arg <= 0.0 {
            return None;
        }
        s / (r - 1.0) * numerator_arg.ln() / denominator_arg.ln()
    };

    (f_t.is_finite() && f_t > 0.0 && f_t <= 1.0 + EQUAL_ENDS_TOLERANCE).then_some(f_t.min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

    use crate::models::thermal::hx::shell_and_tube::core::test_support::{
        cold_stream, hot_stream,
    };

    fn k(value: f64) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(value)
    }

    #[test]
    fn log_mean_of_distinct_ends() {
        assert_relative_eq!(
            log_mean(k(40.0), k(20.0)).get::<delta_kelvin>(),
            28.853_900_817_779_27,
            max_relative = 1e-12
        );
    }

    #[test]
    fn log_mean_of_equal_ends_is_the_common_value() {
        assert_eq!(log_mean(k(25.0), k(25.0)), k(25.0));
        assert_relative_eq!(
            log_mean(k(25.0), k(25.0 * (1.0 + 1e-12))).get::<delta_kelvin>(),
            25.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn log_mean_is_continuous_just_outside_the_equal_ends_tolerance() {
        let near = log_mean(k(25.0), k(25.0 * (1.0 + 1e-6))).get::<delta_kelvin>();

        assert!(near > 25.0);
        assert_relative_eq!(near, 25.0, max_relative = 1e-6);
    }

    #[test]
    fn worked_example_driving_force() -> Result<(), SizingError> {
        let dt = temperature_difference(
            &hot_stream(),
            &cold_stream(),
            CorrectionFactorSource::Assumed,
        )?;

        assert_relative_eq!(dt.delta_t1.get::<delta_kelvin>(), 150.0, max_relative = 1e-12);
        assert_relative_eq!(dt.delta_t2.get::<delta_kelvin>(), 10.0, max_relative = 1e-12);
        assert_relative_eq!(dt.lmtd.get::<delta_kelvin>(), 51.697_712, max_relative = 1e-7);
        assert_relative_eq!(dt.correction_factor, 0.9);
        assert_relative_eq!(
            dt.corrected.get::<delta_kelvin>(),
            0.9 * 51.697_712,
            max_relative = 1e-7
        );
        Ok(())
    }

    #[test]
    fn given_factor_is_applied() -> Result<(), SizingError> {
        let factor = CorrectionFactor::new(0.8).expect("0.8 is a valid factor");
        let dt = temperature_difference(
            &hot_stream(),
            &cold_stream(),
            CorrectionFactorSource::Given(factor),
        )?;

        assert_relative_eq!(
            dt.corrected.get::<delta_kelvin>(),
            0.8 * dt.lmtd.get::<delta_kelvin>()
        );
        Ok(())
    }

    #[test]
    fn crossing_profiles_are_rejected() {
        let mut hot = hot_stream();
        hot.inlet = ThermodynamicTemperature::new::<degree_celsius>(45.0);
        hot.outlet = ThermodynamicTemperature::new::<degree_celsius>(35.0);

        let err = temperature_difference(&hot, &cold_stream(), CorrectionFactorSource::Assumed)
            .unwrap_err();

        let SizingError::InvalidTemperatureProfile {
            stage,
            quantity,
            delta_t,
        } = err
        else {
            panic!("expected an invalid temperature profile, got {err:?}");
        };
        assert_eq!(stage, Stage::TemperatureDifference);
        assert_eq!(quantity, "hot inlet minus cold outlet");
        assert_relative_eq!(delta_t.get::<delta_kelvin>(), -5.0, max_relative = 1e-9);
    }

    #[test]
    fn zero_approach_at_the_cold_end_is_rejected() {
        let mut hot = hot_stream();
        hot.outlet = cold_stream().inlet;

        assert!(matches!(
            temperature_difference(&hot, &cold_stream(), CorrectionFactorSource::Assumed),
            Err(SizingError::InvalidTemperatureProfile {
                quantity: "hot outlet minus cold inlet",
                ..
            })
        ));
    }

    #[test]
    fn one_shell_pass_reference_values() {
        let unit_ratio = one_shell_pass_correction(1.0, 0.4).expect("feasible");
        assert_relative_eq!(unit_ratio, 0.920_937, max_relative = 1e-5);

        let general = one_shell_pass_correction(2.0, 0.2).expect("feasible");
        assert_relative_eq!(general, 0.971_654, max_relative = 1e-5);
    }

    #[test]
    fn one_shell_pass_rejects_deep_temperature_cross() {
        // 200 → 40 against 30 → 50 needs more than one shell pass.
        assert_eq!(one_shell_pass_correction(8.0, 20.0 / 170.0), None);

        let err = temperature_difference(
            &hot_stream(),
            &cold_stream(),
            CorrectionFactorSource::OneShellPass,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SizingError::InvalidTemperatureProfile {
                stage: Stage::TemperatureDifference,
                quantity: "temperature cross for one shell pass",
                ..
            }
        ));
    }

    #[test]
    fn one_shell_pass_used_when_feasible() -> Result<(), SizingError> {
        let mut hot = hot_stream();
        hot.inlet = ThermodynamicTemperature::new::<degree_celsius>(110.0);
        hot.outlet = ThermodynamicTemperature::new::<degree_celsius>(70.0);

        let dt =
            temperature_difference(&hot, &cold_stream(), CorrectionFactorSource::OneShellPass)?;

        // R = 40 / 20, P = 20 / 80.
        let expected = one_shell_pass_correction(2.0, 0.25).expect("feasible");
        assert_relative_eq!(dt.correction_factor, expected, max_relative = 1e-9);
        assert!(dt.correction_factor < 1.0);
        Ok(())
    }

    proptest! {
        #[test]
        fn log_mean_lies_between_the_ends(a in 0.1..500.0_f64, b in 0.1..500.0_f64) {
            let mean = log_mean(k(a), k(b)).get::<delta_kelvin>();
            let tolerance = 1e-9 * a.max(b);
            prop_assert!(mean >= a.min(b) - tolerance);
            prop_assert!(mean <= a.max(b) + tolerance);
        }

        #[test]
        fn log_mean_is_symmetric(a in 0.1..500.0_f64, b in 0.1..500.0_f64) {
            let forward = log_mean(k(a), k(b)).get::<delta_kelvin>();
            let reverse = log_mean(k(b), k(a)).get::<delta_kelvin>();
            prop_assert!((forward - reverse).abs() <= 1e-9 * forward.abs());
        }

        #[test]
        fn one_shell_pass_factor_is_a_fraction(r in 0.1..5.0_f64, p in 0.01..0.99_f64) {
            if let Some(f_t) = one_shell_pass_correction(r, p) {
                prop_assert!(f_t > 0.0 && f_t <= 1.0);
            }
        }
    }
}
