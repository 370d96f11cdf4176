//! Heat exchanger models.
//!
//! Each exchanger type lives in its own module with a [`twine_core::Model`]
//! adapter over an internal `core` module.

pub mod shell_and_tube;
