use serde::{Deserialize, Serialize};

/// External representation of a [`PlacementSuggestion`](crate::PlacementSuggestion).
/// Top-left corner and size, in millimeters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSuggestion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// External representation of an [`Outline`](crate::outline::Outline).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtOutline {
    /// Closed ring of points in millimeters
    pub points: Vec<(f64, f64)>,
    /// Number of suggestions merged into this outline
    pub n_rects: usize,
}

/// Terminal state of the scan which produced a solution
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtScanStatus {
    Completed,
    Cancelled,
}

/// External representation of a [`PackOutcome`](crate::PackOutcome).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    pub status: ExtScanStatus,
    /// Suggestions in discovery order
    pub suggestions: Vec<ExtSuggestion>,
    /// Merged outlines, absent when merging was not applicable
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub outlines: Option<Vec<ExtOutline>>,
    pub processed_rows: usize,
    pub total_rows: usize,
    /// Total area covered by the suggestions, in mm²
    pub used_area: f64,
}
