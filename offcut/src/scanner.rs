use std::time::Instant;

use anyhow::Result;
use itertools::Itertools;
use log::{debug, info, warn};
use thousands::Separable;

use crate::cancel::AbortSignal;
use crate::candidates::{SizeCandidate, generate_candidates};
use crate::config::PackingConfig;
use crate::geometry::primitives::PxRect;
use crate::mask::{BinaryGrid, CoverageEvaluator, FREE_THRESHOLD, OccupancyTracker};
use crate::outline::{self, Outline};
use crate::progress::{PackListener, ProgressReporter, ProgressSnapshot};
use crate::scale::PhysicalScale;
use crate::suggestion::PlacementSuggestion;
use crate::util::assertions;

/// Terminal state of a scan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStatus {
    /// The grid was exhausted or `max_shapes` suggestions were found
    Completed,
    /// The abort signal was observed, the suggestions found so far are kept
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
    Finished(ScanStatus),
}

/// Result of a single packing run
#[derive(Clone, Debug)]
pub struct PackOutcome {
    /// Accepted placements in discovery order: top to bottom, left to right, larger candidates first
    pub suggestions: Vec<PlacementSuggestion>,
    pub status: ScanStatus,
    pub processed_rows: usize,
    pub total_rows: usize,
    pub scale: PhysicalScale,
    /// Whether the run's configuration allows outline merging, see [`PackingConfig::merges_outlines`]
    pub merges_outlines: bool,
}

impl PackOutcome {
    pub fn used_area(&self) -> f64 {
        self.suggestions.iter().map(PlacementSuggestion::area).sum()
    }

    /// Merged outlines of touching suggestions, `None` if the run asked for a gap or rounded corners
    pub fn outlines(&self) -> Option<Vec<Outline>> {
        self.merges_outlines
            .then(|| outline::merge_suggestion_outlines(&self.suggestions, &self.scale))
    }
}

/// A [`SizeCandidate`] together with its size on the pixel grid
#[derive(Clone, Copy, Debug)]
struct PxCandidate {
    size: SizeCandidate,
    w: usize,
    h: usize,
}

/// Greedy row-major scan over an occupancy mask.
///
/// Every `step_mm` along both axes, an anchor cell which is still available is tried with all
/// candidate sizes, largest first. The first candidate that fits in the mask, has a clear
/// (gap-expanded) region and reaches the coverage threshold is accepted.
/// A scanner is consumed by [`PlacementScanner::run`], create a new one for a fresh scan.
pub struct PlacementScanner {
    config: PackingConfig,
    scale: PhysicalScale,
    tracker: OccupancyTracker,
    coverage: CoverageEvaluator,
    candidates: Vec<PxCandidate>,
    state: ScanState,
    suggestions: Vec<PlacementSuggestion>,
    placements: Vec<PxRect>,
    processed_rows: usize,
}

impl PlacementScanner {
    /// Validates the inputs and prepares the scan. No scanning happens yet.
    pub fn new(
        mask: &[u8],
        mask_width: usize,
        mask_height: usize,
        width_mm: f64,
        height_mm: f64,
        config: PackingConfig,
    ) -> Result<Self> {
        let scale = PhysicalScale::try_new(mask_width, mask_height, width_mm, height_mm)?;
        let original = BinaryGrid::from_intensities(mask, mask_width, mask_height, FREE_THRESHOLD)?;

        let candidates = generate_candidates(&config)
            .into_iter()
            .map(|size| PxCandidate {
                size,
                w: scale.mm_to_px_x(size.width_mm),
                h: scale.mm_to_px_y(size.height_mm),
            })
            .filter(|c| {
                let visible = c.w > 0 && c.h > 0;
                if !visible {
                    warn!(
                        "[PACK] candidate {}x{}mm is smaller than a pixel, skipped",
                        c.size.width_mm, c.size.height_mm
                    );
                }
                visible
            })
            .collect_vec();

        let coverage = CoverageEvaluator::new(&original);
        let tracker = OccupancyTracker::new(
            original,
            scale.gap_to_px_x(config.gap_mm),
            scale.gap_to_px_y(config.gap_mm),
        );

        Ok(Self {
            config,
            scale,
            tracker,
            coverage,
            candidates,
            state: ScanState::Idle,
            suggestions: vec![],
            placements: vec![],
            processed_rows: 0,
        })
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn n_candidates(&self) -> usize {
        self.candidates.len()
    }

    fn strides(&self) -> (usize, usize) {
        self.scale.stride(self.config.step_mm)
    }

    /// Number of rows visited by the outer loop
    pub fn total_rows(&self) -> usize {
        let (_, stride_y) = self.strides();
        self.tracker.n_rows().div_ceil(stride_y)
    }

    /// Runs the scan to completion or cancellation.
    pub async fn run<L, A>(mut self, listener: &mut L, abort: &A) -> PackOutcome
    where
        L: PackListener,
        A: AbortSignal + ?Sized,
    {
        let start = Instant::now();
        let (stride_x, stride_y) = self.strides();
        let (n_cols, n_rows) = (self.tracker.n_cols(), self.tracker.n_rows());
        let total_rows = self.total_rows();
        let mut reporter = ProgressReporter::new(self.config.progress_interval_rows);

        debug!(
            "[PACK] scanning {n_cols}x{n_rows}px mask with {} candidates, stride: {stride_x}x{stride_y}px",
            self.candidates.len()
        );
        self.state = ScanState::Scanning;

        let status = 'scan: {
            if self.config.max_shapes == 0 {
                break 'scan ScanStatus::Completed;
            }
            for y in (0..n_rows).step_by(stride_y) {
                if abort.is_aborted() {
                    break 'scan ScanStatus::Cancelled;
                }
                for x in (0..n_cols).step_by(stride_x) {
                    if abort.is_aborted() {
                        break 'scan ScanStatus::Cancelled;
                    }
                    if !self.tracker.is_free(x, y) {
                        continue;
                    }
                    if let Some(rect) = self.find_placement(x, y) {
                        self.accept(rect, listener);
                        if self.suggestions.len() >= self.config.max_shapes {
                            break 'scan ScanStatus::Completed;
                        }
                    }
                }
                self.processed_rows += 1;

                if reporter.is_due(self.processed_rows) {
                    let snapshot = self.snapshot(total_rows);
                    reporter.emit(listener, snapshot).await;
                }
                if self.config.yield_after_rows > 0
                    && self.processed_rows % self.config.yield_after_rows == 0
                {
                    tokio::task::yield_now().await;
                    if abort.is_aborted() {
                        break 'scan ScanStatus::Cancelled;
                    }
                }
            }
            ScanStatus::Completed
        };

        if status == ScanStatus::Completed {
            let snapshot = ProgressSnapshot {
                progress: 1.0,
                ..self.snapshot(total_rows)
            };
            reporter.emit(listener, snapshot).await;
        }
        self.state = ScanState::Finished(status);

        debug_assert!(assertions::available_within_original(&self.tracker));
        debug_assert!(assertions::claimed_regions_disjoint(
            &self.tracker,
            &self.placements
        ));

        info!(
            "[PACK] scan {:?} after {}/{} rows in {:.3}ms: {} suggestions, {} progress updates",
            status,
            self.processed_rows.separate_with_commas(),
            total_rows.separate_with_commas(),
            start.elapsed().as_secs_f64() * 1000.0,
            self.suggestions.len().separate_with_commas(),
            reporter.n_emitted()
        );

        PackOutcome {
            suggestions: self.suggestions,
            status,
            processed_rows: self.processed_rows,
            total_rows,
            scale: self.scale,
            merges_outlines: self.config.merges_outlines(),
        }
    }

    /// First candidate accepted at anchor `(x, y)`, if any
    fn find_placement(&self, x: usize, y: usize) -> Option<PxRect> {
        let (n_cols, n_rows) = (self.tracker.n_cols(), self.tracker.n_rows());
        self.candidates
            .iter()
            .map(|c| PxRect::new(x, y, c.w, c.h))
            .find(|rect| {
                rect.fits_within(n_cols, n_rows)
                    && self.tracker.is_area_free(rect)
                    && self.coverage.purity(rect) >= self.config.coverage_threshold
            })
    }

    fn accept<L: PackListener>(&mut self, rect: PxRect, listener: &mut L) {
        let suggestion = self.scale.suggestion_from_px(&rect);
        self.tracker.mark_used(&rect);
        self.placements.push(rect);
        self.suggestions.push(suggestion);
        debug!(
            "[PACK] placed #{} at [{:.2}, {:.2}] mm, size {:.2}x{:.2} mm",
            self.suggestions.len(),
            suggestion.x_mm,
            suggestion.y_mm,
            suggestion.width_mm,
            suggestion.height_mm
        );
        listener.on_rectangle_added(&suggestion);
    }

    fn snapshot(&self, total_rows: usize) -> ProgressSnapshot {
        let progress = match total_rows {
            0 => 1.0,
            _ => (self.processed_rows as f64 / total_rows as f64).clamp(0.0, 1.0),
        };
        ProgressSnapshot {
            progress,
            processed_rows: self.processed_rows,
            total_rows,
            suggestion_count: self.suggestions.len(),
            last_suggestion: self.suggestions.last().copied(),
        }
    }
}

/// Packs rectangles into the free area of `mask`.
///
/// `mask` holds one intensity per pixel, row-major, `mask_width * mask_height` values.
/// `width_mm` and `height_mm` are the physical dimensions the mask depicts.
/// Invalid inputs are reported before any scanning starts.
/// Cancellation is not an error: the outcome then carries [`ScanStatus::Cancelled`] and the partial result.
#[allow(clippy::too_many_arguments)]
pub async fn pack_rectangles<L, A>(
    mask: &[u8],
    mask_width: usize,
    mask_height: usize,
    width_mm: f64,
    height_mm: f64,
    config: &PackingConfig,
    listener: &mut L,
    abort: &A,
) -> Result<PackOutcome>
where
    L: PackListener,
    A: AbortSignal + ?Sized,
{
    let scanner = PlacementScanner::new(mask, mask_width, mask_height, width_mm, height_mm, *config)?;
    Ok(scanner.run(listener, abort).await)
}
