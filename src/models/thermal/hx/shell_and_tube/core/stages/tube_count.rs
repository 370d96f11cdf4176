use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer},
    heat_transfer::watt_per_square_meter_kelvin,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::models::thermal::hx::shell_and_tube::core::{
    HeatDuty, SizingError, Stage, TemperatureDifference, TubeCount, TubeGeometry,
};

/// Computes the provisional area for an assumed coefficient and the whole
/// number of tubes that provides it.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(in super::super) fn tube_count(
    duty: &HeatDuty,
    temperature: &TemperatureDifference,
    assumed_coefficient: HeatTransfer,
    tubes: &TubeGeometry,
) -> Result<TubeCount, SizingError> {
    let driving_force = SizingError::check_denominator(
        Stage::AreaAndTubeCount,
        "assumed U × corrected LMTD",
        assumed_coefficient.get::<watt_per_square_meter_kelvin>()
            * temperature.corrected.get::<delta_kelvin>(),
    )?;
    let area = duty.q_dot.get::<watt>() / driving_force;

    let per_tube = SizingError::check_denominator(
        Stage::AreaAndTubeCount,
        "outer area of one tube",
        tubes.tube_outer_area().get::<square_meter>(),
    )?;

    let tubes_needed = (area / per_tube).ceil();
    if tubes_needed > f64::from(u32::MAX) {
        return Err(SizingError::NonPhysicalFlow {
            stage: Stage::AreaAndTubeCount,
            quantity: "tube count",
            value: tubes_needed,
        });
    }
    // Positive and within `u32` range here.
    let count = tubes_needed as u32;
    let tubes_per_pass = f64::from(count) / f64::from(tubes.passes());

    tracing::debug!(area_m2 = area, tubes = count, tubes_per_pass, "area and tube count");

    Ok(TubeCount {
        assumed_coefficient,
        provisional_area: Area::new::<square_meter>(area),
        tubes: count,
        tubes_per_pass,
    })
}
