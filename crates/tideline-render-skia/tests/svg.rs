// File: crates/tideline-render-skia/tests/svg.rs
// Purpose: SVG serialization covers every scene element kind.

use tideline_core::{Chart, ChartEvent, Dataset, Record};
use tideline_render_skia::scene_to_svg;

#[test]
fn single_series_svg_has_path_markers_and_grid() {
    let chart = Chart::new(Dataset::new(
        "single",
        vec![Record::scalar(0.0, 1.0), Record::scalar(5.0, 3.0), Record::scalar(10.0, 2.0)],
    ));
    let svg = scene_to_svg(chart.scene());
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"<g transform="translate(50,20)">"#));
    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains(r#"stroke-dasharray="3,3""#));
    assert!(svg.contains(r##"stroke="#2563eb""##));
}

#[test]
fn multi_series_svg_has_legend_panel_and_hides_toggled_series() {
    let mut chart = Chart::new(Dataset::new(
        "multi",
        vec![
            Record::vector(0.0, [Some(1.0), Some(2.0), Some(3.0)]),
            Record::vector(1.0, [Some(2.0), Some(1.0), Some(0.0)]),
        ],
    ));
    chart.handle(ChartEvent::ToggleSeries(2));
    let svg = scene_to_svg(chart.scene());
    assert_eq!(svg.matches("<path").count(), 2);
    assert!(!svg.contains(r##"stroke="#dc2626""##));
    assert!(svg.contains(r#"rx="5" ry="5" fill="rgba(255, 255, 255, 0.800)""#));
    for name in ["Series 1", "Series 2", "Series 3"] {
        assert!(svg.contains(&format!(">{name}</text>")), "missing legend label {name}");
    }
}
