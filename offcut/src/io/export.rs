use itertools::Itertools;

use crate::io::ext_repr::{ExtOutline, ExtScanStatus, ExtSolution, ExtSuggestion};
use crate::outline::Outline;
use crate::scanner::{PackOutcome, ScanStatus};
use crate::suggestion::PlacementSuggestion;

pub fn export_suggestion(s: &PlacementSuggestion) -> ExtSuggestion {
    ExtSuggestion {
        x: s.x_mm,
        y: s.y_mm,
        width: s.width_mm,
        height: s.height_mm,
    }
}

pub fn export_outline(o: &Outline) -> ExtOutline {
    ExtOutline {
        points: o.points.iter().map(|&p| p.into()).collect_vec(),
        n_rects: o.n_rects,
    }
}

pub fn export_status(status: ScanStatus) -> ExtScanStatus {
    match status {
        ScanStatus::Completed => ExtScanStatus::Completed,
        ScanStatus::Cancelled => ExtScanStatus::Cancelled,
    }
}

/// Exports a [`PackOutcome`], merging outlines if the run's configuration allowed it
pub fn export_solution(outcome: &PackOutcome) -> ExtSolution {
    ExtSolution {
        status: export_status(outcome.status),
        suggestions: outcome.suggestions.iter().map(export_suggestion).collect_vec(),
        outlines: outcome
            .outlines()
            .map(|outlines| outlines.iter().map(export_outline).collect_vec()),
        processed_rows: outcome.processed_rows,
        total_rows: outcome.total_rows,
        used_area: outcome.used_area(),
    }
}
