use anyhow::Result;
use log::warn;

use crate::suggestion::PlacementSuggestion;

/// State of a running scan, handed to [`PackListener::on_progress`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressSnapshot {
    /// Fraction of the scan rows processed, in `[0, 1]`
    pub progress: f64,
    pub processed_rows: usize,
    pub total_rows: usize,
    pub suggestion_count: usize,
    pub last_suggestion: Option<PlacementSuggestion>,
}

/// Observer of a packing run. Both hooks have no-op defaults.
pub trait PackListener {
    /// Called every `progress_interval_rows` rows and once more when the scan completes.
    /// The scan awaits the returned future before it resumes, which gives the host a chance to run.
    /// Errors are logged and otherwise ignored, they never abort the scan.
    fn on_progress(&mut self, snapshot: &ProgressSnapshot) -> impl Future<Output = Result<()>> {
        let _ = snapshot;
        async { Ok(()) }
    }

    /// Called synchronously for every accepted placement, in discovery order
    fn on_rectangle_added(&mut self, suggestion: &PlacementSuggestion) {
        let _ = suggestion;
    }
}

/// Listener which ignores all events
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl PackListener for NoopListener {}

/// Throttles progress snapshots to one per `interval_rows` rows
#[derive(Clone, Debug)]
pub struct ProgressReporter {
    interval_rows: usize,
    n_emitted: usize,
    n_failed: usize,
}

impl ProgressReporter {
    pub fn new(interval_rows: usize) -> Self {
        Self {
            interval_rows,
            n_emitted: 0,
            n_failed: 0,
        }
    }

    pub fn is_due(&self, processed_rows: usize) -> bool {
        self.interval_rows > 0 && processed_rows > 0 && processed_rows % self.interval_rows == 0
    }

    /// Hands `snapshot` to the listener and waits for it. A failing listener is logged, not propagated.
    pub async fn emit<L: PackListener>(&mut self, listener: &mut L, snapshot: ProgressSnapshot) {
        self.n_emitted += 1;
        if let Err(err) = listener.on_progress(&snapshot).await {
            self.n_failed += 1;
            warn!(
                "[PACK] progress handler failed at row {}/{}: {err:#}",
                snapshot.processed_rows, snapshot.total_rows
            );
        }
    }

    pub fn n_emitted(&self) -> usize {
        self.n_emitted
    }

    pub fn n_failed(&self) -> usize {
        self.n_failed
    }
}
