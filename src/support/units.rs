//! Extensions to [`uom`].
//!
//! Every physical quantity in this crate is a [`uom`] SI quantity. This
//! module adds the pieces [`uom`] does not ship:
//!
//! - [`TemperatureDifference`]: subtracting two absolute temperatures to get
//!   a [`TemperatureInterval`](uom::si::f64::TemperatureInterval), used for
//!   stream temperature changes and terminal temperature differences.
//! - [`FoulingResistance`]: area-specific thermal resistance (m²·K/W), the
//!   unit of fouling factors and of the series resistances that make up an
//!   overall heat transfer coefficient.
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval::kelvin, thermodynamic_temperature::degree_celsius};
//! use twine_hx_sizing::support::units::TemperatureDifference;
//!
//! let hot_in = ThermodynamicTemperature::new::<degree_celsius>(200.0);
//! let cold_out = ThermodynamicTemperature::new::<degree_celsius>(50.0);
//! assert!((hot_in.minus(cold_out).get::<kelvin>() - 150.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{FoulingResistance, fouling_resistance};
pub use temperature_difference::TemperatureDifference;
