use anyhow::Result;
use log::{debug, info};
use offcut::{PackListener, PlacementSuggestion, ProgressSnapshot};
use thousands::Separable;

/// Reports the progress of a packing run through the logger
#[derive(Clone, Debug, Default)]
pub struct LogListener {
    pub n_added: usize,
    pub used_area: f64,
}

impl PackListener for LogListener {
    async fn on_progress(&mut self, snapshot: &ProgressSnapshot) -> Result<()> {
        info!(
            "[MAIN] {:>5.1}% ({}/{} rows), {} suggestions",
            snapshot.progress * 100.0,
            snapshot.processed_rows.separate_with_commas(),
            snapshot.total_rows.separate_with_commas(),
            snapshot.suggestion_count.separate_with_commas()
        );
        Ok(())
    }

    fn on_rectangle_added(&mut self, suggestion: &PlacementSuggestion) {
        self.n_added += 1;
        self.used_area += suggestion.area();
        debug!(
            "[MAIN] suggestion #{} added, {:.2}x{:.2}mm, total area: {:.1}mm²",
            self.n_added, suggestion.width_mm, suggestion.height_mm, self.used_area
        );
    }
}
