use uom::si::{f64::Length, length::millimeter};

use crate::models::thermal::hx::shell_and_tube::core::{PitchLayout, SizingError};

/// Bundle-diameter constants for one pitch layout and pass count.
///
/// Used in `D_b = OD · (N / K1)^(1 / n1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundleConstants {
    pub layout: PitchLayout,
    pub passes: u16,
    pub k1: f64,
    pub n1: f64,
}

/// Bundle constants for a pitch of 1.25 × OD.
#[rustfmt::skip]
pub static BUNDLE_CONSTANTS: &[BundleConstants] = &[
    BundleConstants { layout: PitchLayout::Triangular, passes: 1, k1: 0.319, n1: 2.142 },
    BundleConstants { layout: PitchLayout::Triangular, passes: 2, k1: 0.249, n1: 2.207 },
    BundleConstants { layout: PitchLayout::Triangular, passes: 4, k1: 0.175, n1: 2.285 },
    BundleConstants { layout: PitchLayout::Triangular, passes: 6, k1: 0.0743, n1: 2.499 },
    BundleConstants { layout: PitchLayout::Triangular, passes: 8, k1: 0.0365, n1: 2.675 },
    BundleConstants { layout: PitchLayout::Square, passes: 1, k1: 0.215, n1: 2.207 },
    BundleConstants { layout: PitchLayout::Square, passes: 2, k1: 0.156, n1: 2.291 },
    BundleConstants { layout: PitchLayout::Square, passes: 4, k1: 0.158, n1: 2.263 },
    BundleConstants { layout: PitchLayout::Square, passes: 6, k1: 0.0402, n1: 2.617 },
    BundleConstants { layout: PitchLayout::Square, passes: 8, k1: 0.0331, n1: 2.643 },
];

/// Returns the bundle constants for a layout and pass count.
///
/// # Errors
///
/// Returns [`SizingError::UnsupportedConfiguration`] if the table has no entry.
pub fn bundle_constants(layout: PitchLayout, passes: u16) -> Result<BundleConstants, SizingError> {
    BUNDLE_CONSTANTS
        .iter()
        .find(|c| c.layout == layout && c.passes == passes)
        .copied()
        .ok_or(SizingError::UnsupportedConfiguration { layout, passes })
}

/// Diametral clearance between bundle and shell for bundles below a size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearanceBand {
    /// Exclusive upper bound on the bundle diameter, mm.
    pub below_mm: f64,
    /// Clearance added to the bundle diameter, mm.
    pub clearance_mm: f64,
}

/// Bundle-to-shell clearance bands, ordered by bundle diameter.
///
/// The last band is unbounded.
#[rustfmt::skip]
pub static CLEARANCE_BANDS: &[ClearanceBand] = &[
    ClearanceBand { below_mm: 300.0, clearance_mm: 56.0 },
    ClearanceBand { below_mm: 600.0, clearance_mm: 92.0 },
    ClearanceBand { below_mm: f64::INFINITY, clearance_mm: 111.0 },
];

/// Returns the shell clearance for a bundle diameter.
///
/// A bundle exactly on a threshold falls in the larger band.
#[must_use]
pub fn shell_clearance(bundle_diameter: Length) -> Length {
    let db_mm = bundle_diameter.get::<millimeter>();
    let band = CLEARANCE_BANDS
        .iter()
        .find(|band| db_mm < band.below_mm)
        .unwrap_or(&CLEARANCE_BANDS[CLEARANCE_BANDS.len() - 1]);
    Length::new::<millimeter>(band.clearance_mm)
}
