//! # Twine HX Sizing
//!
//! Preliminary design of shell-and-tube heat exchangers for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given two streams, a tube geometry, and an assumed overall coefficient,
//! the sizing model works out the heat duty, the mean temperature
//! difference, the number of tubes, the shell diameter, the film
//! coefficients and pressure drops on both sides, and the overall
//! coefficient those film coefficients actually give.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations, starting with
//!   [`models::thermal::hx::shell_and_tube::ShellAndTubeSizing`].
//! - [`support`]: Value constraints and unit helpers used by the models.
//!
//! ## Logging
//!
//! Stages emit [`tracing`] events at `debug` level and a `warn` event when
//! the calculated overall coefficient is far from the assumed one. The crate
//! never installs a subscriber.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for inputs, configuration, and results.

pub mod models;
pub mod support;
