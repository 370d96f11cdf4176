use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P3, Z0},
};

/// Area-specific thermal resistance, m²·K/W in SI.
///
/// The reciprocal of a heat transfer coefficient. Fouling factors and the
/// film, wall and deposit resistances of a tube are expressed in it.
pub type FoulingResistance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`FoulingResistance`] from a value in m²·K/W.
#[must_use]
pub fn fouling_resistance(square_meter_kelvin_per_watt: f64) -> FoulingResistance {
    FoulingResistance {
        dimension: PhantomData,
        units: PhantomData,
        value: square_meter_kelvin_per_watt,
    }
}
