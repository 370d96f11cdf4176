//! Numeric constraints checked once, at construction.
//!
//! Sizing inputs that must be physically meaningful (a tube length, a wall
//! conductivity, an LMTD correction factor) are wrapped in
//! [`Constrained<T, C>`], where `C` is a zero-sized marker implementing
//! [`Constraint<T>`]. After construction the wrapper is as cheap as `T`.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero
//! - [`NonNegative`]: zero or greater
//! - [`UnitIntervalLowerOpen`]: `0 < x ≤ 1`
//!
//! Each marker has an associated `new()` shortcut, for example
//! `StrictlyPositive::new(length)`.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalLowerOpen};

/// A numeric invariant enforced by a marker type.
pub trait Constraint<T> {
    /// Checks that `value` satisfies the invariant.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Reason a value was rejected by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result alias for constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value of type `T` known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_hx_sizing::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::meter};
///
/// let length = Constrained::<_, StrictlyPositive>::new(Length::new::<meter>(5.0)).unwrap();
/// assert_eq!(length.into_inner().get::<meter>(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Wraps `value` after checking it against `C`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
