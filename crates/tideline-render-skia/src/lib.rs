// File: crates/tideline-render-skia/src/lib.rs
// Summary: Skia backend for tideline-core scenes: raster output, SVG output and text metrics.

pub mod raster;
pub mod svg;
pub mod text;

pub use raster::SkiaRenderer;
pub use svg::scene_to_svg;
pub use text::TextShaper;
