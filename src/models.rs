//! Public Twine models.
//!
//! Models are grouped by domain (currently only `thermal`). Each model lives
//! in its own module; the [`twine_core::Model`] implementation there is a
//! thin adapter over an internal `core` module that holds the calculation.
//! Types a caller needs to build inputs or read results are re-exported
//! next to the adapter.

pub mod thermal;
