// File: crates/tideline-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic charts (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the golden compare; the pixel checks below still run.

use tideline_core::{ApproxTextMeasure, Chart, Dataset, Record, RenderOptions};
use tideline_render_skia::SkiaRenderer;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn label_free(dataset: Dataset) -> Chart {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    Chart::with_options(dataset, opts, Box::new(ApproxTextMeasure::default()))
}

fn render(dataset: Dataset) -> Vec<u8> {
    SkiaRenderer::new().render_png_bytes(label_free(dataset).scene()).expect("render bytes")
}

fn single_dataset() -> Dataset {
    let data = vec![
        Record::scalar(0.0, 0.0),
        Record::scalar(1.0, 1.0),
        Record::null(1.5),
        Record::scalar(2.0, 0.0),
        Record::scalar(3.0, 1.5),
        Record::scalar(4.0, 1.0),
    ];
    Dataset::new("single", data)
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_single_series() {
    let bytes = render(single_dataset());
    write_or_compare(&snapshot_path("single_series.png"), &bytes);
}

#[test]
fn single_series_pixels_follow_the_scene() {
    let chart = label_free(single_dataset());
    let y = chart.view().y.domain;
    assert!(y.0 == 0.0 && (y.1 - 1.6).abs() < 1e-12, "niced y domain {y:?}");

    let renderer = SkiaRenderer::new();
    let (px, w, h, stride) = renderer.render_rgba8(chart.scene()).expect("rgba render");
    let (again, ..) = renderer.render_rgba8(chart.scene()).expect("rgba render");
    assert_eq!(px, again, "rendering must be deterministic");
    assert_eq!((w, h), (880, 400));

    // Marker for (1, 1): plot (200, 127.5) shifted by the (50, 20) origin.
    assert_eq!(pixel(&px, stride, 250, 147), [0x25, 0x63, 0xeb, 255]);
    // Plot interior away from gridlines and the curve.
    assert_eq!(pixel(&px, stride, 800, 40), [255, 255, 255, 255]);
    // Right margin.
    assert_eq!(pixel(&px, stride, 870, 200), [255, 255, 255, 255]);
}

#[test]
fn golden_multi_series() {
    // Legend labels are always drawn here; bless on the platform that compares.
    let data = (0..8)
        .map(|i| {
            let t = i as f64;
            Record::vector(t, [Some(t), Some(8.0 - t), if i % 3 == 0 { None } else { Some(4.0) }])
        })
        .collect();
    let bytes = render(Dataset::new("multi", data));
    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((decoded.width(), decoded.height()), (880, 400));
    write_or_compare(&snapshot_path("multi_series.png"), &bytes);
}
