use std::cmp::Ordering;

use anyhow::{Result, ensure};

use crate::geometry::primitives::PxRect;

/// Row-major grid of free/occupied cells
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryGrid {
    cells: Vec<bool>,
    pub n_cols: usize,
    pub n_rows: usize,
}

impl BinaryGrid {
    /// Binarizes raw intensities: a cell is free if its intensity exceeds `threshold`.
    pub fn from_intensities(data: &[u8], n_cols: usize, n_rows: usize, threshold: u8) -> Result<Self> {
        ensure!(
            n_cols > 0 && n_rows > 0,
            "mask must not be empty, got {n_cols}x{n_rows}"
        );
        ensure!(
            data.len() == n_cols * n_rows,
            "mask length {} does not match its dimensions {n_cols}x{n_rows} ({} cells)",
            data.len(),
            n_cols * n_rows
        );
        let cells = data.iter().map(|&v| v > threshold).collect();
        Ok(Self {
            cells,
            n_cols,
            n_rows,
        })
    }

    pub fn filled(n_cols: usize, n_rows: usize, free: bool) -> Self {
        Self {
            cells: vec![free; n_cols * n_rows],
            n_cols,
            n_rows,
        }
    }

    pub fn is_free(&self, col: usize, row: usize) -> bool {
        match self.to_index(row, col) {
            Some(idx) => self.cells[idx],
            None => false,
        }
    }

    /// True if every cell of `rect` is free. `rect` has to lie inside the grid.
    pub fn all_free(&self, rect: &PxRect) -> bool {
        debug_assert!(rect.fits_within(self.n_cols, self.n_rows));
        (rect.y..rect.y_max()).all(|row| {
            let start = row * self.n_cols + rect.x;
            self.cells[start..start + rect.w].iter().all(|&c| c)
        })
    }

    /// Marks every cell of `rect` as occupied. `rect` has to lie inside the grid.
    pub fn occupy(&mut self, rect: &PxRect) {
        debug_assert!(rect.fits_within(self.n_cols, self.n_rows));
        for row in rect.y..rect.y_max() {
            let start = row * self.n_cols + rect.x;
            self.cells[start..start + rect.w].fill(false);
        }
    }

    pub fn n_free(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn to_index(&self, row: usize, col: usize) -> Option<usize> {
        match (row.cmp(&self.n_rows), col.cmp(&self.n_cols)) {
            (Ordering::Less, Ordering::Less) => Some(row * self.n_cols + col),
            _ => None, //out of bounds
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensities_above_threshold_are_free() {
        let grid = BinaryGrid::from_intensities(&[0, 128, 129, 255], 2, 2, 128).unwrap();
        assert!(!grid.is_free(0, 0));
        assert!(!grid.is_free(1, 0));
        assert!(grid.is_free(0, 1));
        assert!(grid.is_free(1, 1));
        assert!(!grid.is_free(2, 1));
        assert_eq!(grid.n_free(), 2);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert!(BinaryGrid::from_intensities(&[255; 5], 2, 2, 128).is_err());
        assert!(BinaryGrid::from_intensities(&[], 0, 0, 128).is_err());
    }

    #[test]
    fn occupy_clears_only_the_rect() {
        let mut grid = BinaryGrid::filled(4, 3, true);
        grid.occupy(&PxRect::new(1, 1, 2, 2));
        assert_eq!(grid.n_free(), 12 - 4);
        assert!(grid.all_free(&PxRect::new(0, 0, 4, 1)));
        assert!(!grid.all_free(&PxRect::new(0, 0, 2, 2)));
    }
}
