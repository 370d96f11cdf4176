//! Thermal systems models.
//!
//! Currently heat exchanger sizing. Rating and transient thermal models
//! would sit next to [`hx`].

pub mod hx;
