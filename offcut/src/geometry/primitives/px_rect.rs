use crate::geometry::primitives::Rect;

/// Axis-aligned rectangle on the pixel grid, with its top-left cell at `(x, y)`.
/// Covers columns `x..x + w` and rows `y..y + h`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
pub struct PxRect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl PxRect {
    pub fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        PxRect { x, y, w, h }
    }

    pub fn x_max(&self) -> usize {
        self.x + self.w
    }

    pub fn y_max(&self) -> usize {
        self.y + self.h
    }

    pub fn area(&self) -> usize {
        self.w * self.h
    }

    /// True if the rectangle lies entirely inside a `width` x `height` grid.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.x_max() <= width && self.y_max() <= height
    }

    /// Grows `self` by `gap_x` columns and `gap_y` rows on every side, clamped to a `width` x `height` grid.
    pub fn expanded(&self, gap_x: usize, gap_y: usize, width: usize, height: usize) -> PxRect {
        let x = self.x.saturating_sub(gap_x);
        let y = self.y.saturating_sub(gap_y);
        let x_max = usize::min(self.x_max() + gap_x, width);
        let y_max = usize::min(self.y_max() + gap_y, height);
        PxRect {
            x,
            y,
            w: x_max.saturating_sub(x),
            h: y_max.saturating_sub(y),
        }
    }

    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.x as f64, self.y as f64, self.w as f64, self.h as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_is_clamped_to_grid() {
        let r = PxRect::new(1, 0, 4, 4);
        assert_eq!(r.expanded(2, 2, 6, 5), PxRect::new(0, 0, 6, 5));
        assert_eq!(r.expanded(0, 0, 6, 5), r);
    }

    #[test]
    fn fits_within_bounds() {
        assert!(PxRect::new(6, 6, 4, 4).fits_within(10, 10));
        assert!(!PxRect::new(7, 6, 4, 4).fits_within(10, 10));
    }
}
