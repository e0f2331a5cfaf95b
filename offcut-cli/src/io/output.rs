use offcut::PackingConfig;
use offcut::io::ext_repr::ExtSolution;
use serde::{Deserialize, Serialize};

/// Mask the solution was computed for
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtMask {
    pub name: String,
    pub width_px: usize,
    pub height_px: usize,
    pub width_mm: f64,
    pub height_mm: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackOutput {
    pub mask: ExtMask,
    pub solution: ExtSolution,
    pub config: PackingConfig,
}
