use uom::si::{
    area::square_meter,
    dynamic_viscosity::pascal_second,
    f64::{HeatTransfer, Length, Pressure, Velocity},
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
    FluidStream, ShellGeometry, ShellSideFactors, SideHydraulics, SizingError, Stage,
    TubeGeometry,
};

/// Evaluates the shell-side film coefficient and pressure drop with Kern's
/// method.
///
/// `Nu = jh · Re · Pr^(1/3)` and `ΔP = 4 · f · (Ds / de) · (L / B) · ρv² / 2`,
/// with `jh` and `f` taken from `factors`.
pub(in super::super) fn shell_side(
    hot: &FluidStream,
    tubes: &TubeGeometry,
    shell: &ShellGeometry,
    factors: ShellSideFactors,
) -> Result<SideHydraulics, SizingError> {
    let density = hot.density.get::<kilogram_per_cubic_meter>();
    let viscosity = hot.viscosity.get::<pascal_second>();
    let conductivity = hot.conductivity.get::<watt_per_meter_kelvin>();

    let mass_flux = SizingError::check_denominator(
        Stage::ShellSide,
        "density × cross-flow area",
        density * shell.cross_flow_area.get::<square_meter>(),
    )?;
    let velocity = hot.m_dot.get::<kilogram_per_second>() / mass_flux;

    let de = SizingError::check_denominator(
        Stage::ShellSide,
        "equivalent diameter",
        equivalent_diameter(tubes.outer_diameter(), tubes.pitch()).get::<meter>(),
    )?;

    let reynolds = SizingError::check_flow_group(
        Stage::ShellSide,
        "Reynolds number",
        density * velocity * de / viscosity,
    )?;
    let prandtl = SizingError::check_flow_group(
        Stage::ShellSide,
        "Prandtl number",
        hot.cp.get::<joule_per_kilogram_kelvin>() * viscosity / conductivity,
    )?;

    let nusselt = factors.heat_transfer_factor * reynolds * prandtl.cbrt();
    let h = nusselt * conductivity / de;

    let pressure_drop = 4.0
        * factors.friction_factor
        * (shell.shell_diameter.get::<meter>() / de)
        * (tubes.length().get::<meter>() / shell.baffle_spacing.get::<meter>())
        * (density * velocity * velocity / 2.0);

    tracing::debug!(
        velocity_m_s = velocity,
        equivalent_diameter_m = de,
        reynolds,
        prandtl,
        h_w_m2_k = h,
        pressure_drop_pa = pressure_drop,
        "shell side"
    );

    Ok(SideHydraulics {
        flow_area: shell.cross_flow_area,
        velocity: Velocity::new::<meter_per_second>(velocity),
        characteristic_length: Length::new::<meter>(de),
        reynolds,
        prandtl,
        nusselt,
        friction_factor: factors.friction_factor,
        h: HeatTransfer::new::<watt_per_square_meter_kelvin>(h),
        pressure_drop: Pressure::new::<pascal>(pressure_drop),
    })
}

/// Returns the shell-side equivalent diameter for a triangular pitch,
/// `de = 1.10 / OD · (pitch² - 0.917 · OD²)`.
///
/// The same expression is used for square layouts; the square-pitch form
/// `1.27 / OD · (pitch² - 0.785 · OD²)` is not applied.
#[must_use]
pub fn equivalent_diameter(outer_diameter: Length, pitch: Length) -> Length {
    let od = outer_diameter.get::<meter>();
    let pt = pitch.get::<meter>();
    Length::new::<meter>(1.10 / od * (pt * pt - 0.917 * od * od))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::{Area, MassRate};

    use crate::models::thermal::hx::shell_and_tube::core::test_support::{
        hot_stream, tube_geometry,
    };

    fn worked_example_shell() -> ShellGeometry {
        let shell_diameter = Length::new::<meter>(0.598_670);
        let baffle_spacing = 0.2 * shell_diameter;
        ShellGeometry {
            bundle_diameter: Length::new::<meter>(0.506_670),
            clearance: Length::new::<meter>(0.092),
            shell_diameter,
            baffle_spacing,
            cross_flow_area: Area::new::<square_meter>(
                (0.023_812_5 - 0.02) / 0.023_812_5
                    * shell_diameter.get::<meter>()
                    * baffle_spacing.get::<meter>(),
            ),
        }
    }

    #[test]
    fn equivalent_diameter_of_worked_example_pitch() {
        let de = equivalent_diameter(Length::new::<meter>(0.02), Length::new::<meter>(0.023_812_5));
        assert_relative_eq!(de.get::<meter>(), 0.011_012_9, max_relative = 1e-5);
    }

    #[test]
    fn worked_example_shell_side() -> Result<(), SizingError> {
        let side = shell_side(
            &hot_stream(),
            &tube_geometry(),
            &worked_example_shell(),
            ShellSideFactors::default(),
        )?;

        assert_relative_eq!(
            side.velocity.get::<meter_per_second>(),
            0.746_015,
            max_relative = 1e-5
        );
        assert_relative_eq!(side.reynolds, 13_947.77, max_relative = 1e-5);
        assert_relative_eq!(side.prandtl, 7.541_54, max_relative = 1e-5);
        assert_relative_eq!(
            side.h.get::<watt_per_square_meter_kelvin>(),
            1_614.37,
            max_relative = 1e-5
        );
        assert_relative_eq!(side.pressure_drop.get::<pascal>(), 73_781.0, max_relative = 1e-5);
        assert_relative_eq!(side.friction_factor, 0.04);
        Ok(())
    }

    #[test]
    fn stagnant_shell_is_non_physical() {
        let mut hot = hot_stream();
        hot.m_dot = MassRate::new::<kilogram_per_second>(0.0);

        assert!(matches!(
            shell_side(
                &hot,
                &tube_geometry(),
                &worked_example_shell(),
                ShellSideFactors::default(),
            ),
            Err(SizingError::NonPhysicalFlow {
                stage: Stage::ShellSide,
                quantity: "Reynolds number",
                ..
            })
        ));
    }
}
