//! The seven sizing stages, in pipeline order.
//!
//! Each stage reads the inputs and the records of earlier stages and returns
//! its own record. Correlations are evaluated on SI `f64` values extracted
//! from the [`uom`] quantities at the top of each stage.

mod bundle;
mod heat_duty;
mod overall;
mod shell_side;
mod temperature_difference;
mod tube_count;
mod tube_side;

pub(super) use bundle::bundle_and_shell;
pub(super) use heat_duty::heat_duty;
pub(super) use overall::overall_coefficient;
pub(super) use shell_side::shell_side;
pub(super) use temperature_difference::temperature_difference;
pub(super) use tube_count::tube_count;
pub(super) use tube_side::tube_side;

pub use shell_side::equivalent_diameter;
pub use temperature_difference::{log_mean, one_shell_pass_correction};
