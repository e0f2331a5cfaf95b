mod coverage;
mod grid;
mod occupancy;

#[doc(inline)]
pub use coverage::CoverageEvaluator;
#[doc(inline)]
pub use grid::BinaryGrid;
#[doc(inline)]
pub use occupancy::OccupancyTracker;

/// Intensities strictly above this value mark a free (usable) cell
pub const FREE_THRESHOLD: u8 = 128;
