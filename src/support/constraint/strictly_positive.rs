use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values greater than zero.
///
/// Tube geometry (diameters, length, pitch) and the tube wall conductivity
/// are checked against this constraint.
///
/// # Examples
///
/// ```
/// use twine_hx_sizing::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(0.02).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, ThermalConductivity},
        length::millimeter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn tube_diameters() {
        let od = Length::new::<millimeter>(20.0);
        assert!(StrictlyPositive::new(od).is_ok());

        assert_eq!(
            StrictlyPositive::new(Length::new::<millimeter>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::new(Length::new::<millimeter>(-16.0)),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn wall_conductivity() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(45.0);
        assert!(StrictlyPositive::new(k).is_ok());

        assert_eq!(
            StrictlyPositive::new(ThermalConductivity::new::<watt_per_meter_kelvin>(0.0)),
            Err(ConstraintError::Zero)
        );
    }

    #[test]
    fn nan_is_rejected() {
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
