mod fluid_stream;
mod reading;
mod surfaces;
mod tube_geometry;

pub use fluid_stream::FluidStream;
pub use reading::{StreamReading, UnitConvention};
pub use surfaces::MaterialAndFouling;
pub use tube_geometry::{PitchLayout, TubeGeometry, TubeGeometryError};

/// Everything the sizing pipeline needs besides its configuration.
///
/// The hot stream flows through the shell and the cold stream through the
/// tubes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizingInput {
    /// Hot, shell-side stream.
    pub hot: FluidStream,

    /// Cold, tube-side stream.
    pub cold: FluidStream,

    /// Tube dimensions, layout, and pass count.
    pub tubes: TubeGeometry,

    /// Tube wall conductivity and fouling resistances.
    pub surfaces: MaterialAndFouling,
}
