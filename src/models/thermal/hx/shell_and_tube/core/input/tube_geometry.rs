use thiserror::Error;
use uom::si::f64::{Area, Length};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

/// Arrangement of tube centres on the tube sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitchLayout {
    Triangular,
    Square,
}

/// Errors returned when constructing a [`TubeGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TubeGeometryError {
    #[error("invalid {dimension}: {source}")]
    Dimension {
        dimension: &'static str,
        #[source]
        source: ConstraintError,
    },
    #[error("outer diameter must exceed inner diameter")]
    WallThickness,
    #[error("tube pitch must exceed outer diameter")]
    Pitch,
    #[error("at least one tube pass is required")]
    ZeroPasses,
}

/// Tube dimensions, pitch layout, and number of tube passes.
///
/// Construction guarantees `outer_diameter > inner_diameter > 0`, a positive
/// length, and a pitch wider than the tube. The pass count is only required
/// to be non-zero here; whether bundle constants exist for it is decided by
/// the bundle stage.
///
/// With the `serde` feature, deserialization goes through
/// [`TubeGeometry::new`] and rejects the same inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TubeGeometryFields", into = "TubeGeometryFields")
)]
pub struct TubeGeometry {
    outer_diameter: Length,
    inner_diameter: Length,
    length: Length,
    pitch: Length,
    layout: PitchLayout,
    passes: u16,
}

impl TubeGeometry {
    /// Constructs validated tube geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`TubeGeometryError`] if any dimension is not strictly
    /// positive, if the wall thickness is not positive, if the pitch does not
    /// exceed the outer diameter, or if `passes` is zero.
    pub fn new(
        outer_diameter: Length,
        inner_diameter: Length,
        length: Length,
        pitch: Length,
        layout: PitchLayout,
        passes: u16,
    ) -> Result<Self, TubeGeometryError> {
        let positive = |dimension: &'static str, value: Length| {
            StrictlyPositive::new(value)
                .map(|v| v.into_inner())
                .map_err(|source| TubeGeometryError::Dimension { dimension, source })
        };

        let outer_diameter = positive("outer diameter", outer_diameter)?;
        let inner_diameter = positive("inner diameter", inner_diameter)?;
        let length = positive("tube length", length)?;
        let pitch = positive("tube pitch", pitch)?;

        if outer_diameter <= inner_diameter {
            return Err(TubeGeometryError::WallThickness);
        }
        if pitch <= outer_diameter {
            return Err(TubeGeometryError::Pitch);
        }
        if passes == 0 {
            return Err(TubeGeometryError::ZeroPasses);
        }

        Ok(Self::new_unchecked(
            outer_diameter,
            inner_diameter,
            length,
            pitch,
            layout,
            passes,
        ))
    }

    /// Constructs tube geometry without validation.
    ///
    /// # Warning
    ///
    /// The caller must uphold the invariants checked by [`TubeGeometry::new`].
    /// Violating them produces sizing errors or meaningless results.
    #[must_use]
    pub fn new_unchecked(
        outer_diameter: Length,
        inner_diameter: Length,
        length: Length,
        pitch: Length,
        layout: PitchLayout,
        passes: u16,
    ) -> Self {
        Self {
            outer_diameter,
            inner_diameter,
            length,
            pitch,
            layout,
            passes,
        }
    }

    #[must_use]
    pub fn outer_diameter(&self) -> Length {
        self.outer_diameter
    }

    #[must_use]
    pub fn inner_diameter(&self) -> Length {
        self.inner_diameter
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn pitch(&self) -> Length {
        self.pitch
    }

    #[must_use]
    pub fn layout(&self) -> PitchLayout {
        self.layout
    }

    #[must_use]
    pub fn passes(&self) -> u16 {
        self.passes
    }

    /// Outside surface area of a single tube, `π · OD · L`.
    #[must_use]
    pub fn tube_outer_area(&self) -> Area {
        std::f64::consts::PI * self.outer_diameter * self.length
    }

    /// Flow cross-section inside a single tube, `π · ID² / 4`.
    #[must_use]
    pub fn tube_flow_area(&self) -> Area {
        std::f64::consts::FRAC_PI_4 * self.inner_diameter * self.inner_diameter
    }
}

/// Unvalidated serialized form of [`TubeGeometry`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct TubeGeometryFields {
    outer_diameter: Length,
    inner_diameter: Length,
    length: Length,
    pitch: Length,
    layout: PitchLayout,
    passes: u16,
}

#[cfg(feature = "serde")]
impl TryFrom<TubeGeometryFields> for TubeGeometry {
    type Error = TubeGeometryError;

    fn try_from(fields: TubeGeometryFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.outer_diameter,
            fields.inner_diameter,
            fields.length,
            fields.pitch,
            fields.layout,
            fields.passes,
        )
    }
}

#[cfg(feature = "serde")]
impl From<TubeGeometry> for TubeGeometryFields {
    fn from(tubes: TubeGeometry) -> Self {
        Self {
            outer_diameter: tubes.outer_diameter,
            inner_diameter: tubes.inner_diameter,
            length: tubes.length,
            pitch: tubes.pitch,
            layout: tubes.layout,
            passes: tubes.passes,
        }
    }
}
