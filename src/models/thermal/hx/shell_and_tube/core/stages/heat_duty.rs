use uom::si::{
    f64::{MassRate, Power},
    mass_rate::kilogram_per_second,
    power::watt,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::models::thermal::hx::shell_and_tube::core::{
    FluidStream, HeatDuty, SizingError, Stage,
};

/// Computes the duty released by the hot stream and the cold flow that
/// absorbs it.
///
/// `Q = m_hot · cp_hot · (T_in - T_out)` and
/// `m_cold = Q / (cp_cold · (t_out - t_in))`.
pub(in super::super) fn heat_duty(
    hot: &FluidStream,
    cold: &FluidStream,
) -> Result<HeatDuty, SizingError> {
    let hot_drop = hot.temperature_drop();
    if hot_drop.get::<delta_kelvin>() <= 0.0 {
        return Err(SizingError::InvalidTemperatureProfile {
            stage: Stage::HeatDuty,
            quantity: "hot stream temperature drop",
            delta_t: hot_drop,
        });
    }

    let cold_rise = cold.temperature_rise();
    if cold_rise.get::<delta_kelvin>() < 0.0 {
        return Err(SizingError::InvalidTemperatureProfile {
            stage: Stage::HeatDuty,
            quantity: "cold stream temperature rise",
            delta_t: cold_rise,
        });
    }

    let q_dot = SizingError::check_flow_group(
        Stage::HeatDuty,
        "heat duty",
        hot.m_dot.get::<kilogram_per_second>()
            * hot.cp.get::<joule_per_kilogram_kelvin>()
            * hot_drop.get::<delta_kelvin>(),
    )?;

    let cold_capacity = SizingError::check_denominator(
        Stage::HeatDuty,
        "cold stream cp × temperature rise",
        cold.cp.get::<joule_per_kilogram_kelvin>() * cold_rise.get::<delta_kelvin>(),
    )?;
    let companion_m_dot = q_dot / cold_capacity;

    tracing::debug!(q_dot_w = q_dot, companion_m_dot_kg_s = companion_m_dot, "heat duty");

    Ok(HeatDuty {
        q_dot: Power::new::<watt>(q_dot),
        companion_m_dot: MassRate::new::<kilogram_per_second>(companion_m_dot),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

    use crate::models::thermal::hx::shell_and_tube::core::test_support::{
        cold_stream, hot_stream,
    };

    #[test]
    fn duty_is_the_hot_stream_enthalpy_change() -> Result<(), SizingError> {
        let duty = heat_duty(&hot_stream(), &cold_stream())?;

        assert_relative_eq!(duty.q_dot.get::<watt>(), 6.25 * 2280.0 * 160.0, max_relative = 1e-12);
        assert_relative_eq!(duty.q_dot.get::<watt>(), 2.28e6, max_relative = 1e-12);
        assert_relative_eq!(
            duty.companion_m_dot.get::<kilogram_per_second>(),
            2.28e6 / (4180.0 * 20.0),
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn isothermal_cold_stream_divides_by_zero() {
        let mut cold = cold_stream();
        cold.outlet = cold.inlet;

        assert_eq!(
            heat_duty(&hot_stream(), &cold),
            Err(SizingError::DivisionByZero {
                stage: Stage::HeatDuty,
                quantity: "cold stream cp × temperature rise",
            })
        );
    }

    #[test]
    fn stagnant_hot_stream_has_no_duty() {
        let mut hot = hot_stream();
        hot.m_dot = MassRate::new::<kilogram_per_second>(0.0);

        assert_eq!(
            heat_duty(&hot, &cold_stream()),
            Err(SizingError::NonPhysicalFlow {
                stage: Stage::HeatDuty,
                quantity: "heat duty",
                value: 0.0,
            })
        );
    }

    #[test]
    fn hot_stream_must_cool() {
        let mut hot = hot_stream();
        hot.outlet = ThermodynamicTemperature::new::<degree_celsius>(210.0);

        assert!(matches!(
            heat_duty(&hot, &cold_stream()),
            Err(SizingError::InvalidTemperatureProfile {
                stage: Stage::HeatDuty,
                quantity: "hot stream temperature drop",
                ..
            })
        ));
    }

    #[test]
    fn cold_stream_must_not_cool() {
        let mut cold = cold_stream();
        cold.outlet = ThermodynamicTemperature::new::<degree_celsius>(25.0);

        assert!(matches!(
            heat_duty(&hot_stream(), &cold),
            Err(SizingError::InvalidTemperatureProfile {
                quantity: "cold stream temperature rise",
                ..
            })
        ));
    }
}
