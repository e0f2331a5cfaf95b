use serde::{Deserialize, Serialize};

/// Which axis assignments of a candidate size are attempted
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Only `(width, height)` as configured
    Landscape,
    /// Only the swapped `(height, width)`
    Portrait,
    /// Both assignments, whenever width and height differ
    #[default]
    Both,
}

///Configuration of a packing run. All lengths are in millimeters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PackingConfig {
    ///Largest candidate width
    pub max_width_mm: f64,
    ///Largest candidate height
    pub max_height_mm: f64,
    ///Smallest candidate width
    pub min_width_mm: f64,
    ///Smallest candidate height
    pub min_height_mm: f64,
    ///Granularity of the candidate sizes, also used as the scan stride
    pub step_mm: f64,
    ///Clearance enforced around every placement
    pub gap_mm: f64,
    ///Minimum fraction of a placement that has to be covered by free material
    pub coverage_threshold: f64,
    pub orientation: Orientation,
    ///Maximum number of suggestions returned
    pub max_shapes: usize,
    ///Number of scanned rows between two progress snapshots, 0 disables periodic snapshots
    pub progress_interval_rows: usize,
    ///Number of scanned rows between two cooperative yields, 0 disables yielding
    pub yield_after_rows: usize,
    ///Corner rounding requested for the exported shapes. Outline merging is disabled when non-zero.
    pub corner_radius_mm: f64,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            max_width_mm: 50.0,
            max_height_mm: 50.0,
            min_width_mm: 10.0,
            min_height_mm: 10.0,
            step_mm: 5.0,
            gap_mm: 0.0,
            coverage_threshold: 0.95,
            orientation: Orientation::Both,
            max_shapes: 500,
            progress_interval_rows: 4,
            yield_after_rows: 8,
            corner_radius_mm: 0.0,
        }
    }
}

impl PackingConfig {
    /// Smallest accepted value for the size bounds
    pub const MIN_SIZE_MM: f64 = 1.0;
    /// Smallest accepted step
    pub const MIN_STEP_MM: f64 = 0.1;

    /// Returns a copy with every field clamped to its documented range.
    /// The engine never clamps on its own, callers feeding user input should pass it through here first.
    pub fn sanitized(&self) -> Self {
        let min_width_mm = self.min_width_mm.max(Self::MIN_SIZE_MM);
        let min_height_mm = self.min_height_mm.max(Self::MIN_SIZE_MM);
        Self {
            max_width_mm: self.max_width_mm.max(min_width_mm),
            max_height_mm: self.max_height_mm.max(min_height_mm),
            min_width_mm,
            min_height_mm,
            step_mm: self.step_mm.max(Self::MIN_STEP_MM),
            gap_mm: self.gap_mm.max(0.0),
            coverage_threshold: self.coverage_threshold.clamp(0.0, 1.0),
            orientation: self.orientation,
            max_shapes: self.max_shapes.max(1),
            progress_interval_rows: self.progress_interval_rows,
            yield_after_rows: self.yield_after_rows,
            corner_radius_mm: self.corner_radius_mm.max(0.0),
        }
    }

    /// Outlines are only merged when placements touch and keep their sharp corners
    pub fn merges_outlines(&self) -> bool {
        self.gap_mm == 0.0 && self.corner_radius_mm == 0.0
    }
}
