use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use crate::models::thermal::hx::shell_and_tube::core::{
    BaffleSpacing, ShellGeometry, SizingError, Stage, TubeCount, TubeGeometry,
    tables::{bundle_constants, shell_clearance},
};

/// Sizes the tube bundle, the shell around it, and the baffle spacing.
///
/// `Db = OD · (N / K1)^(1 / n1)` with `(K1, n1)` from the layout table, and
/// `Ds = Db + clearance`. The cross-flow area between baffles is
/// `(pitch - OD) / pitch · Ds · B`.
pub(in super::super) fn bundle_and_shell(
    tubes: &TubeGeometry,
    count: &TubeCount,
    baffle: BaffleSpacing,
) -> Result<ShellGeometry, SizingError> {
    let constants = bundle_constants(tubes.layout(), tubes.passes())?;

    let outer_diameter = tubes.outer_diameter().get::<meter>();
    let pitch = tubes.pitch().get::<meter>();

    let bundle_diameter = Length::new::<meter>(
        outer_diameter * (f64::from(count.tubes) / constants.k1).powf(1.0 / constants.n1),
    );
    let clearance = shell_clearance(bundle_diameter);
    let shell_diameter = bundle_diameter + clearance;

    let baffle_spacing = baffle.for_shell(shell_diameter);
    SizingError::check_denominator(
        Stage::BundleAndShell,
        "baffle spacing",
        baffle_spacing.get::<meter>(),
    )?;

    let cross_flow_area = (pitch - outer_diameter) / pitch
        * shell_diameter.get::<meter>()
        * baffle_spacing.get::<meter>();

    tracing::debug!(
        bundle_diameter_m = bundle_diameter.get::<meter>(),
        shell_diameter_m = shell_diameter.get::<meter>(),
        baffle_spacing_m = baffle_spacing.get::<meter>(),
        cross_flow_area_m2 = cross_flow_area,
        "bundle and shell"
    );

    Ok(ShellGeometry {
        bundle_diameter,
        clearance,
        shell_diameter,
        baffle_spacing,
        cross_flow_area: Area::new::<square_meter>(cross_flow_area),
    })
}
