use uom::si::{
    f64::HeatTransfer,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::{
    models::thermal::hx::shell_and_tube::core::{
        MaterialAndFouling, OverallCoefficient, SideHydraulics, SizingError, Stage, TubeGeometry,
    },
    support::units::fouling_resistance,
};

/// Combines the film, fouling, and wall resistances into the overall
/// coefficient referred to the tube outside area.
///
/// The assumed coefficient is reported alongside, unchanged. No iteration
/// is performed.
pub(in super::super) fn overall_coefficient(
    tubes: &TubeGeometry,
    tube_side: &SideHydraulics,
    shell_side: &SideHydraulics,
    surfaces: &MaterialAndFouling,
    assumed: HeatTransfer,
) -> Result<OverallCoefficient, SizingError> {
    let od = tubes.outer_diameter().get::<meter>();
    let id = tubes.inner_diameter().get::<meter>();

    let h_hot = SizingError::check_denominator(
        Stage::OverallCoefficient,
        "shell-side film coefficient",
        shell_side.h.get::<watt_per_square_meter_kelvin>(),
    )?;
    let h_cold = SizingError::check_denominator(
        Stage::OverallCoefficient,
        "tube-side film coefficient",
        tube_side.h.get::<watt_per_square_meter_kelvin>(),
    )?;
    let k_wall = SizingError::check_denominator(
        Stage::OverallCoefficient,
        "tube wall conductivity",
        surfaces.wall_conductivity.get::<watt_per_meter_kelvin>(),
    )?;

    let hot_resistance = 1.0 / h_hot + surfaces.hot_fouling.value;
    let wall_resistance = od * (od / id).ln() / (2.0 * k_wall);
    let cold_resistance = od / id * (1.0 / h_cold + surfaces.cold_fouling.value);

    let total = SizingError::check_denominator(
        Stage::OverallCoefficient,
        "total thermal resistance",
        hot_resistance + wall_resistance + cold_resistance,
    )?;
    let calculated = 1.0 / total;

    tracing::debug!(
        calculated_w_m2_k = calculated,
        assumed_w_m2_k = assumed.get::<watt_per_square_meter_kelvin>(),
        "overall coefficient"
    );

    Ok(OverallCoefficient {
        calculated: HeatTransfer::new::<watt_per_square_meter_kelvin>(calculated),
        assumed,
        hot_resistance: fouling_resistance(hot_resistance),
        wall_resistance: fouling_resistance(wall_resistance),
        cold_resistance: fouling_resistance(cold_resistance),
    })
}
