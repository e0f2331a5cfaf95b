use crate::geometry::primitives::Point;
use crate::util::FPA;

///Axis-aligned rectangle in continuous (millimeter or pixel) space, y increasing downward
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Rectangle with its top-left corner at `(x, y)`
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    /// Returns the four corners of `self`, clockwise starting at the top-left (y down).
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Returns a copy of `self` grown by `dx` on the left and right and by `dy` on the top and bottom.
    pub fn expand(self, dx: f64, dy: f64) -> Self {
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: f64::min(a.x_min, b.x_min),
            y_min: f64::min(a.y_min, b.y_min),
            x_max: f64::max(a.x_max, b.x_max),
            y_max: f64::max(a.y_max, b.y_max),
        }
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f64::max(a.x_min, b.x_min);
        let y_min = f64::max(a.y_min, b.y_min);
        let x_max = f64::min(a.x_max, b.x_max);
        let y_max = f64::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    /// True if the interiors of `self` and `other` overlap. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        Rect::intersection(*self, *other).is_some()
    }

    /// True if `p` lies inside `self` by more than `tolerance` on every side.
    pub fn strictly_contains(&self, p: &Point, tolerance: f64) -> bool {
        p.0 > self.x_min + tolerance
            && p.0 < self.x_max - tolerance
            && p.1 > self.y_min + tolerance
            && p.1 < self.y_max - tolerance
    }

    /// True if `self` lies within `bounds`, with floating point tolerance.
    pub fn almost_within(&self, bounds: &Rect) -> bool {
        FPA(self.x_min) >= FPA(bounds.x_min)
            && FPA(self.y_min) >= FPA(bounds.y_min)
            && FPA(self.x_max) <= FPA(bounds.x_max)
            && FPA(self.y_max) <= FPA(bounds.y_max)
    }
}
