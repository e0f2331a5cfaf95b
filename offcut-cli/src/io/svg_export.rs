use offcut::PackingConfig;
use offcut::io::ext_repr::{ExtOutline, ExtSolution, ExtSuggestion};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Rectangle, Text, Title};

const MASK_FILL: &str = "#CC824A";
const SUGGESTION_FILL: &str = "#FFC879";
const OUTLINE_STROKE: &str = "#1F3A93";

/// Draws the mask bounds, every suggestion and the merged outlines (if any).
/// Coordinates are in millimeters, y pointing down like the mask itself.
pub fn solution_to_svg(
    solution: &ExtSolution,
    width_mm: f64,
    height_mm: f64,
    config: &PackingConfig,
    title: &str,
) -> Document {
    let margin = 0.05 * f64::max(width_mm, height_mm);
    let stroke_width = f64::min(width_mm, height_mm) * 0.002;

    let label = {
        let used_pct = solution.used_area / (width_mm * height_mm) * 100.0;
        Text::new(format!(
            "{:.1}x{:.1}mm | {} suggestions | used: {:.3}% | {}",
            width_mm,
            height_mm,
            solution.suggestions.len(),
            used_pct,
            title
        ))
        .set("x", 0.0)
        .set("y", -0.4 * margin)
        .set("font-size", 0.4 * margin)
        .set("font-family", "monospace")
        .set("font-weight", "500")
    };

    let mask_group = Group::new().set("id", "mask").add(
        Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", width_mm)
            .set("height", height_mm)
            .set("fill", MASK_FILL)
            .set("fill-opacity", "0.3")
            .set("stroke", "black")
            .set("stroke-width", 2.0 * stroke_width),
    );

    let suggestion_group = solution.suggestions.iter().enumerate().fold(
        Group::new().set("id", "suggestions"),
        |group, (i, s)| group.add(suggestion_rect(i, s, config.corner_radius_mm, stroke_width)),
    );

    let mut document = Document::new()
        .set(
            "viewBox",
            (-margin, -margin, width_mm + 2.0 * margin, height_mm + 2.0 * margin),
        )
        .add(label)
        .add(mask_group)
        .add(suggestion_group);

    if let Some(outlines) = &solution.outlines {
        let outline_group = outlines
            .iter()
            .filter_map(|o| outline_path(o, stroke_width))
            .fold(Group::new().set("id", "outlines"), Group::add);
        document = document.add(outline_group);
    }
    document
}

fn suggestion_rect(i: usize, s: &ExtSuggestion, corner_radius: f64, stroke_width: f64) -> Rectangle {
    //a radius beyond half the shortest side would be clamped by the renderer anyway
    let radius = corner_radius.min(0.5 * f64::min(s.width, s.height));
    Rectangle::new()
        .set("x", s.x)
        .set("y", s.y)
        .set("width", s.width)
        .set("height", s.height)
        .set("rx", radius)
        .set("ry", radius)
        .set("fill", SUGGESTION_FILL)
        .set("fill-opacity", "0.8")
        .set("stroke", "black")
        .set("stroke-width", stroke_width)
        .add(Title::new(format!(
            "suggestion #{i}, [x: {:.3}, y: {:.3}, w: {:.3}, h: {:.3}]",
            s.x, s.y, s.width, s.height
        )))
}

fn outline_path(o: &ExtOutline, stroke_width: f64) -> Option<Path> {
    //path data is single precision
    let to_f32 = |&(x, y): &(f64, f64)| (x as f32, y as f32);
    let (first, rest) = o.points.split_first()?;
    let data = rest
        .iter()
        .map(to_f32)
        .fold(Data::new().move_to(to_f32(first)), |data, p| data.line_to(p))
        .close();
    let path = Path::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", OUTLINE_STROKE)
        .set("stroke-width", 3.0 * stroke_width)
        .set("stroke-linejoin", "round")
        .add(Title::new(format!("outline of {} suggestions", o.n_rects)));
    Some(path)
}
