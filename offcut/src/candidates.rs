use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::config::{Orientation, PackingConfig};
use crate::util::{mm_key, round_mm};

/// A rectangle size to attempt at an anchor point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeCandidate {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl SizeCandidate {
    pub fn area(&self) -> f64 {
        self.width_mm * self.height_mm
    }

    fn key(&self) -> (i64, i64) {
        (mm_key(self.width_mm), mm_key(self.height_mm))
    }
}

/// Builds the ordered list of [`SizeCandidate`]s from the size bounds of a [`PackingConfig`].
/// Larger candidates come first: at every anchor the scanner accepts the first one that fits.
pub fn generate_candidates(config: &PackingConfig) -> Vec<SizeCandidate> {
    let widths = descending_steps(config.max_width_mm, config.min_width_mm, config.step_mm);
    let heights = descending_steps(config.max_height_mm, config.min_height_mm, config.step_mm);

    widths
        .iter()
        .cartesian_product(heights.iter())
        .flat_map(|(&w, &h)| {
            let straight = SizeCandidate {
                width_mm: w,
                height_mm: h,
            };
            let swapped = SizeCandidate {
                width_mm: h,
                height_mm: w,
            };
            match config.orientation {
                Orientation::Landscape => vec![straight],
                Orientation::Portrait => vec![swapped],
                Orientation::Both if mm_key(w) == mm_key(h) => vec![straight],
                Orientation::Both => vec![straight, swapped],
            }
        })
        .unique_by(SizeCandidate::key)
        //stable sort, equal areas keep their generation order
        .sorted_by_key(|c| Reverse(OrderedFloat(c.area())))
        .collect_vec()
}

/// Strictly descending values from `max` to `min` in decrements of `step`.
/// `min` is always the last value, also when `max - min` is not a multiple of `step`.
fn descending_steps(max: f64, min: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 {
        return [max, min]
            .into_iter()
            .map(round_mm)
            .dedup_by(|a, b| mm_key(*a) == mm_key(*b))
            .collect_vec();
    }
    let min_key = mm_key(min);
    let mut values = vec![];
    let mut i = 0;
    loop {
        //derived from the index to avoid accumulating rounding errors
        let v = round_mm(max - step * i as f64);
        if mm_key(v) <= min_key {
            break;
        }
        values.push(v);
        i += 1;
    }
    values.push(round_mm(min));
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sizes(candidates: &[SizeCandidate]) -> Vec<(f64, f64)> {
        candidates.iter().map(|c| (c.width_mm, c.height_mm)).collect()
    }

    #[test_case(20.0, 10.0, 10.0, vec![20.0, 10.0]; "aligned")]
    #[test_case(25.0, 10.0, 10.0, vec![25.0, 15.0, 10.0]; "unaligned min is appended")]
    #[test_case(10.0, 10.0, 3.0, vec![10.0]; "max equals min")]
    #[test_case(1.3, 1.0, 0.1, vec![1.3, 1.2, 1.1, 1.0]; "fractional step")]
    #[test_case(30.0, 10.0, 0.0, vec![30.0, 10.0]; "zero step collapses")]
    #[test_case(30.0, 10.0, -4.0, vec![30.0, 10.0]; "negative step collapses")]
    fn descending_steps_cases(max: f64, min: f64, step: f64, expected: Vec<f64>) {
        assert_eq!(descending_steps(max, min, step), expected);
    }

    #[test]
    fn both_orientations_sorted_by_area() {
        let config = PackingConfig {
            max_width_mm: 20.0,
            max_height_mm: 20.0,
            min_width_mm: 10.0,
            min_height_mm: 10.0,
            step_mm: 10.0,
            orientation: Orientation::Both,
            ..PackingConfig::default()
        };
        assert_eq!(
            sizes(&generate_candidates(&config)),
            vec![(20.0, 20.0), (20.0, 10.0), (10.0, 20.0), (10.0, 10.0)]
        );
    }

    #[test]
    fn single_orientation_assigns_one_axis() {
        let base = PackingConfig {
            max_width_mm: 30.0,
            max_height_mm: 10.0,
            min_width_mm: 30.0,
            min_height_mm: 10.0,
            step_mm: 5.0,
            ..PackingConfig::default()
        };
        let landscape = PackingConfig {
            orientation: Orientation::Landscape,
            ..base
        };
        let portrait = PackingConfig {
            orientation: Orientation::Portrait,
            ..base
        };
        let both = PackingConfig {
            orientation: Orientation::Both,
            ..base
        };
        assert_eq!(sizes(&generate_candidates(&landscape)), vec![(30.0, 10.0)]);
        assert_eq!(sizes(&generate_candidates(&portrait)), vec![(10.0, 30.0)]);
        assert_eq!(
            sizes(&generate_candidates(&both)),
            vec![(30.0, 10.0), (10.0, 30.0)]
        );
    }

    #[test]
    fn candidates_are_unique_and_non_increasing_in_area() {
        let config = PackingConfig {
            max_width_mm: 42.0,
            max_height_mm: 37.0,
            min_width_mm: 5.0,
            min_height_mm: 5.0,
            step_mm: 2.5,
            orientation: Orientation::Both,
            ..PackingConfig::default()
        };
        let candidates = generate_candidates(&config);
        assert!(candidates.windows(2).all(|w| w[0].area() >= w[1].area()));
        assert_eq!(
            candidates.iter().map(SizeCandidate::key).unique().count(),
            candidates.len()
        );
    }
}
