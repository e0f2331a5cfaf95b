use crate::geometry::primitives::PxRect;
use crate::mask::BinaryGrid;

/// Computes how much of a rectangle is covered by free cells of the reference mask.
///
/// Backed by a summed-area table over the reference mask, so every query is constant time.
/// Earlier placements are not taken into account.
#[derive(Clone, Debug)]
pub struct CoverageEvaluator {
    /// `(n_cols + 1) * (n_rows + 1)` prefix sums, with a zero row and column in front
    sums: Vec<u64>,
    n_cols: usize,
    n_rows: usize,
}

impl CoverageEvaluator {
    pub fn new(reference: &BinaryGrid) -> Self {
        let (n_cols, n_rows) = (reference.n_cols, reference.n_rows);
        let stride = n_cols + 1;
        let mut sums = vec![0u64; stride * (n_rows + 1)];
        for row in 0..n_rows {
            let mut row_sum = 0;
            for col in 0..n_cols {
                row_sum += reference.is_free(col, row) as u64;
                sums[(row + 1) * stride + col + 1] = sums[row * stride + col + 1] + row_sum;
            }
        }
        Self {
            sums,
            n_cols,
            n_rows,
        }
    }

    /// Number of free reference cells inside `rect`, the part outside the grid counts as occupied
    pub fn free_count(&self, rect: &PxRect) -> u64 {
        let x0 = usize::min(rect.x, self.n_cols);
        let y0 = usize::min(rect.y, self.n_rows);
        let x1 = usize::min(rect.x_max(), self.n_cols);
        let y1 = usize::min(rect.y_max(), self.n_rows);
        let stride = self.n_cols + 1;
        let at = |x: usize, y: usize| self.sums[y * stride + x];
        at(x1, y1) + at(x0, y0) - at(x0, y1) - at(x1, y0)
    }

    /// Fraction of `rect` covered by free reference cells, 0 for an empty rectangle
    pub fn purity(&self, rect: &PxRect) -> f64 {
        match rect.area() {
            0 => 0.0,
            area => self.free_count(rect) as f64 / area as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn purity_counts_reference_cells() {
        let mut grid = BinaryGrid::filled(8, 4, true);
        grid.occupy(&PxRect::new(4, 0, 2, 4));
        let coverage = CoverageEvaluator::new(&grid);

        assert!(approx_eq!(f64, coverage.purity(&PxRect::new(0, 0, 4, 4)), 1.0));
        assert!(approx_eq!(f64, coverage.purity(&PxRect::new(2, 0, 4, 4)), 0.5));
        assert!(approx_eq!(f64, coverage.purity(&PxRect::new(4, 1, 2, 2)), 0.0));
        assert_eq!(coverage.free_count(&PxRect::new(0, 0, 8, 4)), 24);
    }

    #[test]
    fn empty_rect_has_zero_purity() {
        let coverage = CoverageEvaluator::new(&BinaryGrid::filled(3, 3, true));
        assert_eq!(coverage.purity(&PxRect::new(1, 1, 0, 2)), 0.0);
    }

    #[test]
    fn cells_outside_the_grid_are_not_free() {
        let coverage = CoverageEvaluator::new(&BinaryGrid::filled(4, 4, true));
        assert!(approx_eq!(f64, coverage.purity(&PxRect::new(2, 0, 4, 4)), 0.5));
    }
}
