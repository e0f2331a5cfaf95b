#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use float_cmp::approx_eq;
    use offcut::io::ext_repr::{ExtOutline, ExtScanStatus, ExtSolution, ExtSuggestion};
    use offcut::{NeverAbort, Orientation, PackingConfig, pack_rectangles};
    use test_case::test_case;

    use offcut_cli::io;
    use offcut_cli::io::svg_export::solution_to_svg;
    use offcut_cli::listener::LogListener;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("offcut-cli-tests");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(format!("{}_{name}", std::process::id()))
    }

    fn solution(outlines: Option<Vec<ExtOutline>>) -> ExtSolution {
        ExtSolution {
            status: ExtScanStatus::Completed,
            suggestions: vec![
                ExtSuggestion {
                    x: 0.0,
                    y: 0.0,
                    width: 20.0,
                    height: 10.0,
                },
                ExtSuggestion {
                    x: 20.0,
                    y: 0.0,
                    width: 20.0,
                    height: 10.0,
                },
            ],
            outlines,
            processed_rows: 5,
            total_rows: 5,
            used_area: 400.0,
        }
    }

    #[test_case(0.0, "rx=\"0\""; "sharp corners")]
    #[test_case(2.0, "rx=\"2\""; "rounded corners")]
    #[test_case(50.0, "rx=\"5\""; "radius clamped to half the short side")]
    fn suggestions_are_drawn_with_corner_radius(radius: f64, expected: &str) {
        let config = PackingConfig {
            corner_radius_mm: radius,
            ..PackingConfig::default()
        };
        let svg = solution_to_svg(&solution(None), 50.0, 50.0, &config, "test").to_string();
        assert!(svg.contains(expected), "{svg}");
        assert!(svg.contains("suggestion #1"));
        assert!(!svg.contains("outlines"));
    }

    #[test]
    fn outlines_are_drawn_as_closed_paths() {
        let outline = ExtOutline {
            points: vec![(0.0, 0.0), (40.0, 0.0), (40.0, 10.0), (0.0, 10.0)],
            n_rects: 2,
        };
        let svg = solution_to_svg(
            &solution(Some(vec![outline])),
            50.0,
            50.0,
            &PackingConfig::default(),
            "test",
        )
        .to_string();
        assert!(svg.contains("id=\"outlines\""));
        assert!(svg.contains("outline of 2 suggestions"));
        assert!(svg.contains('z'));
    }

    #[test]
    fn config_file_falls_back_to_defaults() {
        let path = scratch_path("config.json");
        std::fs::write(&path, r#"{"max_shapes": 12, "orientation": "landscape"}"#).unwrap();
        let config = io::read_config(&path).unwrap();
        assert_eq!(config.max_shapes, 12);
        assert_eq!(config.orientation, Orientation::Landscape);
        assert_eq!(config.step_mm, PackingConfig::default().step_mm);

        std::fs::write(&path, "not json").unwrap();
        assert!(io::read_config(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn mask_is_loaded_as_grayscale_intensities() {
        let path = scratch_path("mask.png");
        let img = image::GrayImage::from_fn(8, 4, |x, _y| image::Luma([if x < 4 { 255 } else { 0 }]));
        img.save(&path).unwrap();

        let mask = io::read_mask(&path).unwrap();
        assert_eq!((mask.width, mask.height), (8, 4));
        assert_eq!(mask.data.len(), 32);
        assert_eq!(&mask.data[..8], &[255, 255, 255, 255, 0, 0, 0, 0]);
        std::fs::remove_file(&path).unwrap();

        assert!(io::read_mask(&scratch_path("missing.png")).is_err());
    }

    #[tokio::test]
    async fn log_listener_tracks_added_area() {
        let config = PackingConfig {
            max_width_mm: 20.0,
            max_height_mm: 20.0,
            min_width_mm: 10.0,
            min_height_mm: 10.0,
            step_mm: 10.0,
            coverage_threshold: 0.9,
            ..PackingConfig::default()
        };
        let mut listener = LogListener::default();
        let outcome = pack_rectangles(
            &[255; 100 * 100],
            100,
            100,
            50.0,
            50.0,
            &config,
            &mut listener,
            &NeverAbort,
        )
        .await
        .unwrap();
        assert_eq!(listener.n_added, outcome.suggestions.len());
        assert!(approx_eq!(f64, listener.used_area, outcome.used_area()));
    }
}
