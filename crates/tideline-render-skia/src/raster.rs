// File: crates/tideline-render-skia/src/raster.rs
// Summary: Headless rasterization of a scene using Skia CPU raster surfaces (PNG bytes, RGBA8).

use anyhow::Result;
use skia_safe as skia;
use tideline_core::curve::PathCmd;
use tideline_core::scene::{Element, Scene, Stroke};
use tideline_core::Color;
use tracing::debug;

use crate::text::TextShaper;

#[inline]
fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(sk_color(stroke.color));
    paint.set_alpha_f(stroke.color.alpha_f() * stroke.opacity);
    if let Some(dash) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&dash, 0.0));
    }
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk_color(color));
    paint
}

/// Draws scenes onto Skia canvases. Every call starts from a cleared surface.
pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    pub fn shaper(&self) -> &TextShaper {
        &self.shaper
    }

    fn surface_for(scene: &Scene) -> Result<skia::Surface> {
        let w = scene.width.ceil().max(1.0) as i32;
        let h = scene.height.ceil().max(1.0) as i32;
        skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))
    }

    /// Clear `canvas` to the scene background and draw every item in order.
    pub fn draw(&self, canvas: &skia::Canvas, scene: &Scene) {
        canvas.clear(sk_color(scene.background));
        canvas.save();
        canvas.translate((scene.origin.x, scene.origin.y));
        for item in scene.items() {
            self.draw_element(canvas, &item.element);
        }
        canvas.restore();
    }

    fn draw_element(&self, canvas: &skia::Canvas, element: &Element) {
        match element {
            Element::Line { from, to, stroke } => {
                canvas.draw_line((from.x, from.y), (to.x, to.y), &stroke_paint(stroke));
            }
            Element::Path { cmds, stroke } => {
                let mut path = skia::Path::new();
                for cmd in cmds {
                    match *cmd {
                        PathCmd::MoveTo(p) => { path.move_to((p.x, p.y)); }
                        PathCmd::LineTo(p) => { path.line_to((p.x, p.y)); }
                        PathCmd::CubicTo(c1, c2, p) => { path.cubic_to((c1.x, c1.y), (c2.x, c2.y), (p.x, p.y)); }
                    }
                }
                canvas.draw_path(&path, &stroke_paint(stroke));
            }
            Element::Circle { center, radius, fill } => {
                canvas.draw_circle((center.x, center.y), *radius, &fill_paint(*fill));
            }
            Element::Rect { rect, corner_radius, fill, stroke } => {
                let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
                let rr = skia::RRect::new_rect_xy(r, *corner_radius, *corner_radius);
                canvas.draw_rrect(rr, &fill_paint(*fill));
                if let Some(s) = stroke {
                    canvas.draw_rrect(rr, &stroke_paint(s));
                }
            }
            Element::Text { pos, text, size, color, anchor, dy_em } => {
                self.shaper.draw_anchored(canvas, text, (pos.x, pos.y), *size, sk_color(*color), *anchor, *dy_em);
            }
        }
    }

    /// Render the scene and encode it as PNG.
    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = Self::surface_for(scene)?;
        self.draw(surface.canvas(), scene);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(bytes = data.len(), width = scene.width, height = scene.height, "encoded png");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene and write a PNG at `output_png_path`.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_png_bytes(scene)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render into an unpremultiplied RGBA8 buffer. Returns `(pixels, width, height, stride)`.
    pub fn render_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = Self::surface_for(scene)?;
        self.draw(surface.canvas(), scene);

        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}
