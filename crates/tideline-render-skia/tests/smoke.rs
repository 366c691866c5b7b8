// File: crates/tideline-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests: PNG bytes, file output and RGBA buffer shape.

use tideline_core::{Chart, ChartEvent, Dataset, Record, RenderOptions};
use tideline_render_skia::{SkiaRenderer, TextShaper};

fn multi_chart() -> Chart {
    let data = (0..50)
        .map(|i| {
            let t = i as f64 * 2.5;
            Record::vector(t, [Some((t * 0.1).sin()), if i % 5 == 0 { None } else { Some(t * 0.02) }, Some(-0.5)])
        })
        .collect();
    Chart::with_options(Dataset::new("multi", data), RenderOptions::default(), Box::new(TextShaper::new()))
}

#[test]
fn render_smoke_png() {
    let chart = multi_chart();
    let renderer = SkiaRenderer::new();

    let bytes = renderer.render_png_bytes(chart.scene()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let out = std::path::PathBuf::from("target/test_out/smoke_multi.png");
    renderer.render_to_png(chart.scene(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = multi_chart();
    chart.handle(ChartEvent::ToggleSeries(0));
    let (px, w, h, stride) = SkiaRenderer::new().render_rgba8(chart.scene()).expect("rgba render");
    assert_eq!(w, 880);
    assert_eq!(h, 400);
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel sits in the margin: opaque white background.
    assert_eq!(&px[..4], &[255, 255, 255, 255]);
}

#[test]
fn empty_chart_still_renders() {
    let chart = Chart::new(Dataset::new("empty", vec![]));
    let bytes = SkiaRenderer::new().render_png_bytes(chart.scene()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
