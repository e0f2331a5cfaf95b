use crate::geometry::primitives::Rect;

/// An accepted rectangle, in the physical space of the mask (origin top-left, y down, millimeters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementSuggestion {
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PlacementSuggestion {
    pub fn bbox(&self) -> Rect {
        Rect::from_origin_size(self.x_mm, self.y_mm, self.width_mm, self.height_mm)
    }

    pub fn area(&self) -> f64 {
        self.width_mm * self.height_mm
    }
}
