use anyhow::{Result, ensure};

use crate::geometry::primitives::PxRect;
use crate::suggestion::PlacementSuggestion;

/// Conversion between mask pixels and physical millimeters.
/// Both axes carry their own ratio, a mask does not need to share the aspect ratio of the material it depicts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalScale {
    pub px_per_mm_x: f64,
    pub px_per_mm_y: f64,
}

impl PhysicalScale {
    pub fn try_new(mask_width: usize, mask_height: usize, width_mm: f64, height_mm: f64) -> Result<Self> {
        ensure!(
            width_mm.is_finite() && width_mm > 0.0,
            "physical width must be strictly positive, got {width_mm}"
        );
        ensure!(
            height_mm.is_finite() && height_mm > 0.0,
            "physical height must be strictly positive, got {height_mm}"
        );
        ensure!(
            mask_width > 0 && mask_height > 0,
            "mask must not be empty, got {mask_width}x{mask_height}"
        );
        Ok(Self {
            px_per_mm_x: mask_width as f64 / width_mm,
            px_per_mm_y: mask_height as f64 / height_mm,
        })
    }

    pub fn mm_to_px_x(&self, mm: f64) -> usize {
        (mm * self.px_per_mm_x).round().max(0.0) as usize
    }

    pub fn mm_to_px_y(&self, mm: f64) -> usize {
        (mm * self.px_per_mm_y).round().max(0.0) as usize
    }

    pub fn px_to_mm_x(&self, px: f64) -> f64 {
        px / self.px_per_mm_x
    }

    pub fn px_to_mm_y(&self, px: f64) -> f64 {
        px / self.px_per_mm_y
    }

    /// Clearance in pixels along x, rounded up: the enforced gap is never narrower than `gap_mm`
    pub fn gap_to_px_x(&self, gap_mm: f64) -> usize {
        ceil_px(gap_mm * self.px_per_mm_x)
    }

    /// Clearance in pixels along y, rounded up: the enforced gap is never narrower than `gap_mm`
    pub fn gap_to_px_y(&self, gap_mm: f64) -> usize {
        ceil_px(gap_mm * self.px_per_mm_y)
    }

    /// Scan stride in pixels along both axes, never smaller than one pixel
    pub fn stride(&self, step_mm: f64) -> (usize, usize) {
        (
            usize::max(self.mm_to_px_x(step_mm), 1),
            usize::max(self.mm_to_px_y(step_mm), 1),
        )
    }

    pub fn suggestion_from_px(&self, r: &PxRect) -> PlacementSuggestion {
        PlacementSuggestion {
            x_mm: self.px_to_mm_x(r.x as f64),
            y_mm: self.px_to_mm_y(r.y as f64),
            width_mm: self.px_to_mm_x(r.w as f64),
            height_mm: self.px_to_mm_y(r.h as f64),
        }
    }

    /// Snaps a suggestion back onto the pixel grid
    pub fn suggestion_to_px(&self, s: &PlacementSuggestion) -> PxRect {
        PxRect {
            x: self.mm_to_px_x(s.x_mm),
            y: self.mm_to_px_y(s.y_mm),
            w: self.mm_to_px_x(s.width_mm),
            h: self.mm_to_px_y(s.height_mm),
        }
    }
}

/// Rounds a positive pixel length up to whole pixels, ignoring floating point noise below `1e-6` px
fn ceil_px(px: f64) -> usize {
    match px > 0.0 {
        true => (px - 1e-6).ceil().max(1.0) as usize,
        false => 0,
    }
}
