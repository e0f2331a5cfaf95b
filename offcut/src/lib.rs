//! Greedy rectangle packing suggestions for scrap material.
//!
//! Given an occupancy mask of a (perspective corrected) offcut and its physical dimensions,
//! [`pack_rectangles`] scans the mask row by row and suggests axis-aligned rectangles which fit in
//! the usable material, largest candidate sizes first.

/// Configuration of a packing run
pub mod config;

/// Generation of the candidate rectangle sizes
pub mod candidates;

/// Cooperative cancellation of a running scan
pub mod cancel;

/// Geometric primitives
pub mod geometry;

/// Importing and exporting of the engine's results
pub mod io;

/// Reference mask, availability tracking and coverage evaluation
pub mod mask;

/// Merging of touching suggestions into simplified outlines
pub mod outline;

/// Progress reporting towards the caller
pub mod progress;

mod scale;
mod scanner;
mod suggestion;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use cancel::{AbortSignal, CancellationToken, NeverAbort};
#[doc(inline)]
pub use config::{Orientation, PackingConfig};
#[doc(inline)]
pub use progress::{NoopListener, PackListener, ProgressSnapshot};
#[doc(inline)]
pub use scale::PhysicalScale;
#[doc(inline)]
pub use scanner::{PackOutcome, PlacementScanner, ScanState, ScanStatus, pack_rectangles};
#[doc(inline)]
pub use suggestion::PlacementSuggestion;
