/// Geometric primitive representing a point.
/// Coordinates follow image conventions: origin at the top-left, y increasing downward.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point(pub f64, pub f64);

impl Point {
    /// Angle (radians, in `(-π, π]`) of the vector from `center` to `self`.
    pub fn angle_around(&self, center: &Point) -> f64 {
        f64::atan2(self.1 - center.1, self.0 - center.0)
    }

    pub fn scale(self, sx: f64, sy: f64) -> Point {
        Point(self.0 * sx, self.1 * sy)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}
