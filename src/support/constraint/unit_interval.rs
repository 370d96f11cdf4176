use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the bounds 0 and 1 for types used with unit-interval constraints.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

/// Marker for values in the lower-open unit interval `0 < x ≤ 1`.
///
/// The LMTD correction factor lives here: a value of one is a pure
/// counterflow exchanger, zero would mean no driving force at all.
///
/// # Examples
///
/// ```
/// use twine_hx_sizing::support::constraint::UnitIntervalLowerOpen;
///
/// assert!(UnitIntervalLowerOpen::new(0.9).is_ok());
/// assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
/// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
/// assert!(UnitIntervalLowerOpen::new(1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Constructs a [`Constrained<T, UnitIntervalLowerOpen>`].
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if the value is zero or less.
    /// - [`ConstraintError::AboveMaximum`] if the value exceeds one.
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLowerOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLowerOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_factor_bounds() {
        assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
        assert!(UnitIntervalLowerOpen::new(0.75).is_ok());

        assert_eq!(
            UnitIntervalLowerOpen::new(0.0),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalLowerOpen::new(1.01),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitIntervalLowerOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
