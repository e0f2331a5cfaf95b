use crate::geometry::primitives::PxRect;
use crate::mask::BinaryGrid;

/// Tracks which cells of the mask are still available for new placements.
///
/// `original` is the reference mask and never changes. `available` starts as a copy of it and
/// loses cells as placements are committed, so it is always a subset of `original`'s free cells.
/// Both the free-check and the commit operate on the placement grown by the gap on every side,
/// which keeps the clearance margins of two placements from ever overlapping.
#[derive(Clone, Debug)]
pub struct OccupancyTracker {
    original: BinaryGrid,
    available: BinaryGrid,
    gap_x: usize,
    gap_y: usize,
}

impl OccupancyTracker {
    pub fn new(original: BinaryGrid, gap_x: usize, gap_y: usize) -> Self {
        let available = original.clone();
        Self {
            original,
            available,
            gap_x,
            gap_y,
        }
    }

    pub fn original(&self) -> &BinaryGrid {
        &self.original
    }

    pub fn available(&self) -> &BinaryGrid {
        &self.available
    }

    pub fn n_cols(&self) -> usize {
        self.available.n_cols
    }

    pub fn n_rows(&self) -> usize {
        self.available.n_rows
    }

    /// Is the single cell at `(x, y)` still available?
    pub fn is_free(&self, x: usize, y: usize) -> bool {
        self.available.is_free(x, y)
    }

    /// The region claimed by a placement at `rect`: grown by the gap, clamped to the grid
    pub fn claimed_region(&self, rect: &PxRect) -> PxRect {
        rect.expanded(self.gap_x, self.gap_y, self.n_cols(), self.n_rows())
    }

    pub fn is_area_free(&self, rect: &PxRect) -> bool {
        self.available.all_free(&self.claimed_region(rect))
    }

    /// Removes the claimed region of `rect` from the available cells. Marking twice is harmless.
    pub fn mark_used(&mut self, rect: &PxRect) {
        let region = self.claimed_region(rect);
        self.available.occupy(&region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_is_applied_to_check_and_mark() {
        let mut tracker = OccupancyTracker::new(BinaryGrid::filled(10, 10, true), 1, 1);
        let first = PxRect::new(0, 0, 4, 4);
        assert!(tracker.is_area_free(&first));
        tracker.mark_used(&first);
        //claimed region is 5x5 after clamping at the top-left border
        assert_eq!(tracker.available().n_free(), 100 - 25);

        //touching the claimed margin is not enough, the candidate's own margin has to be clear as well
        assert!(!tracker.is_area_free(&PxRect::new(5, 0, 2, 2)));
        assert!(tracker.is_area_free(&PxRect::new(6, 0, 2, 2)));
    }

    #[test]
    fn marking_is_idempotent() {
        let mut tracker = OccupancyTracker::new(BinaryGrid::filled(6, 6, true), 0, 0);
        let r = PxRect::new(2, 2, 2, 2);
        tracker.mark_used(&r);
        let after_first = tracker.available().clone();
        tracker.mark_used(&r);
        assert_eq!(tracker.available(), &after_first);
        assert_eq!(tracker.original().n_free(), 36);
    }

    #[test]
    fn occupied_original_cells_block_placements() {
        let mut grid = BinaryGrid::filled(6, 6, true);
        grid.occupy(&PxRect::new(3, 0, 1, 6));
        let tracker = OccupancyTracker::new(grid, 0, 0);
        assert!(tracker.is_area_free(&PxRect::new(0, 0, 3, 6)));
        assert!(!tracker.is_area_free(&PxRect::new(1, 0, 3, 3)));
        assert!(!tracker.is_free(3, 2));
    }
}
