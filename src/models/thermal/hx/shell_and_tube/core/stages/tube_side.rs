use uom::si::{
    area::square_meter,
    dynamic_viscosity::pascal_second,
    f64::{Area, HeatTransfer, MassRate, Pressure, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

use crate::models::thermal::hx::shell_and_tube::core::{
    FluidStream, SideHydraulics, SizingError, Stage, TubeCount, TubeGeometry,
};

/// Velocity heads lost per pass in headers and return bends.
const RETURN_LOSS_HEADS: f64 = 2.5;

/// Evaluates the tube-side film coefficient and pressure drop.
///
/// Uses Dittus-Boelter for heat transfer, with the heating exponent 0.4 on
/// the Prandtl number, and `f = 0.0014 + 0.125 · Re^-0.32` for friction.
pub(in super::super) fn tube_side(
    cold: &FluidStream,
    m_dot: MassRate,
    tubes: &TubeGeometry,
    count: &TubeCount,
) -> Result<SideHydraulics, SizingError> {
    let inner_diameter = tubes.inner_diameter().get::<meter>();
    let density = cold.density.get::<kilogram_per_cubic_meter>();
    let viscosity = cold.viscosity.get::<pascal_second>();
    let conductivity = cold.conductivity.get::<watt_per_meter_kelvin>();

    let flow_area = tubes.tube_flow_area().get::<square_meter>() * count.tubes_per_pass;
    let mass_flux = SizingError::check_denominator(
        Stage::TubeSide,
        "density × tube flow area",
        density * flow_area,
    )?;
    let velocity = m_dot.get::<kilogram_per_second>() / mass_flux;

    let reynolds = SizingError::check_flow_group(
        Stage::TubeSide,
        "Reynolds number",
        density * velocity * inner_diameter / viscosity,
    )?;
    let prandtl = SizingError::check_flow_group(
        Stage::TubeSide,
        "Prandtl number",
        cold.cp.get::<joule_per_kilogram_kelvin>() * viscosity / conductivity,
    )?;

    let nusselt = 0.023 * reynolds.powf(0.8) * prandtl.powf(0.4);
    let h = nusselt * conductivity / inner_diameter;

    let friction_factor = 0.0014 + 0.125 * reynolds.powf(-0.32);
    let velocity_head = density * velocity * velocity / 2.0;
    let pressure_drop = f64::from(tubes.passes())
        * (4.0 * friction_factor * (tubes.length().get::<meter>() / inner_diameter)
            + RETURN_LOSS_HEADS)
        * velocity_head;

    tracing::debug!(
        velocity_m_s = velocity,
        reynolds,
        prandtl,
        h_w_m2_k = h,
        pressure_drop_pa = pressure_drop,
        "tube side"
    );

    Ok(SideHydraulics {
        flow_area: Area::new::<square_meter>(flow_area),
        velocity: Velocity::new::<meter_per_second>(velocity),
        characteristic_length: tubes.inner_diameter(),
        reynolds,
        prandtl,
        nusselt,
        friction_factor,
        h: HeatTransfer::new::<watt_per_square_meter_kelvin>(h),
        pressure_drop: Pressure::new::<pascal>(pressure_drop),
    })
}
