//! Supporting utilities used by the sizing model.
//!
//! These modules are public because they are useful to callers building
//! inputs, but their APIs are not stable.

pub mod constraint;
pub mod units;
