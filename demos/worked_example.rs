//! Sizes a hydrocarbon cooler against cooling water and prints each stage's result.
//!
//! Run with `cargo run --example worked_example`.

use std::error::Error;

use twine_core::Model;
use twine_hx_sizing::models::thermal::hx::shell_and_tube::{
    AssumedCoefficient, MaterialAndFouling, PitchLayout, ShellAndTubeSizing, SizingConfig,
    SizingInput, StreamReading, TubeGeometry, UnitConvention,
};
use uom::si::{
    f64::{HeatTransfer, Length, ThermalConductivity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::{meter, millimeter},
    mass_rate::kilogram_per_second,
    power::kilowatt,
    pressure::kilopascal,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let units = UnitConvention::PerHourKilojoule;
    let hot = units.stream(&StreamReading {
        flow_rate: 22_500.0,
        specific_heat: 2.28,
        inlet_celsius: 200.0,
        outlet_celsius: 40.0,
        density: 730.0,
        viscosity: 0.43e-3,
        conductivity: 0.13,
        fouling: 2.0e-4,
    });
    let cold = units.stream(&StreamReading {
        flow_rate: 98_000.0,
        specific_heat: 4.18,
        inlet_celsius: 30.0,
        outlet_celsius: 50.0,
        density: 992.0,
        viscosity: 0.8e-3,
        conductivity: 0.59,
        fouling: 2.0e-4,
    });

    let tubes = TubeGeometry::new(
        Length::new::<millimeter>(20.0),
        Length::new::<millimeter>(16.0),
        Length::new::<meter>(5.0),
        Length::new::<millimeter>(23.8125),
        PitchLayout::Triangular,
        2,
    )?;
    let surfaces = MaterialAndFouling::from_streams(
        ThermalConductivity::new::<watt_per_meter_kelvin>(45.0),
        &hot,
        &cold,
    )?;

    let model = ShellAndTubeSizing::new(SizingConfig::new(AssumedCoefficient::Given(
        HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0),
    )));
    let result = model.call(&SizingInput {
        hot,
        cold,
        tubes,
        surfaces,
    })?;

    println!("Heat duty            {:>10.1} kW", result.duty.q_dot.get::<kilowatt>());
    println!(
        "Cooling water        {:>10.2} kg/s",
        result.duty.companion_m_dot.get::<kilogram_per_second>()
    );
    println!(
        "LMTD / corrected     {:>10.2} / {:.2} K",
        result.temperature.lmtd.get::<delta_kelvin>(),
        result.temperature.corrected.get::<delta_kelvin>()
    );
    println!(
        "Tubes                {:>10} ({} per pass)",
        result.tubes.tubes, result.tubes.tubes_per_pass
    );
    println!(
        "Tube side            {:>10.2} m/s, Re {:.0}, h {:.0} W/m²K, ΔP {:.2} kPa",
        result.tube_side.velocity.get::<meter_per_second>(),
        result.tube_side.reynolds,
        result.tube_side.h.get::<watt_per_square_meter_kelvin>(),
        result.tube_side.pressure_drop.get::<kilopascal>()
    );
    println!(
        "Bundle / shell       {:>10.0} / {:.0} mm, baffles every {:.0} mm",
        result.shell.bundle_diameter.get::<millimeter>(),
        result.shell.shell_diameter.get::<millimeter>(),
        result.shell.baffle_spacing.get::<millimeter>()
    );
    println!(
        "Shell side           {:>10.2} m/s, Re {:.0}, h {:.0} W/m²K, ΔP {:.2} kPa",
        result.shell_side.velocity.get::<meter_per_second>(),
        result.shell_side.reynolds,
        result.shell_side.h.get::<watt_per_square_meter_kelvin>(),
        result.shell_side.pressure_drop.get::<kilopascal>()
    );
    println!(
        "Overall U            {:>10.0} W/m²K calculated, {:.0} assumed ({:+.0} %)",
        result.overall.calculated.get::<watt_per_square_meter_kelvin>(),
        result.overall.assumed.get::<watt_per_square_meter_kelvin>(),
        100.0 * result.overall.relative_deviation()
    );

    Ok(())
}
