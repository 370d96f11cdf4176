use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that are zero or greater.
///
/// Fouling resistances use this constraint: a clean surface has zero
/// resistance, a negative one is meaningless.
///
/// # Examples
///
/// ```
/// use twine_hx_sizing::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(2.0e-4).is_ok());
/// assert!(NonNegative::new(-1.0e-4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
