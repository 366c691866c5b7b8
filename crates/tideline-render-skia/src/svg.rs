// File: crates/tideline-render-skia/src/svg.rs
// Summary: SVG serialization of a scene (vector output alongside the raster backend).

use std::fmt::Write as _;

use tideline_core::curve::PathCmd;
use tideline_core::scene::{Element, Scene, Stroke, TextAnchor};
use tideline_core::Color;

fn rgba(c: Color) -> String {
    if c.a == 255 {
        c.to_hex()
    } else {
        format!("rgba({}, {}, {}, {:.3})", c.r, c.g, c.b, c.alpha_f())
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn stroke_attrs(s: &Stroke) -> String {
    let mut a = format!(r#"stroke="{}" stroke-width="{}""#, rgba(s.color), s.width);
    if let Some([on, off]) = s.dash {
        let _ = write!(a, r#" stroke-dasharray="{on},{off}""#);
    }
    if s.opacity < 1.0 {
        let _ = write!(a, r#" opacity="{}""#, s.opacity);
    }
    a
}

fn path_data(cmds: &[PathCmd]) -> String {
    let mut d = String::new();
    for cmd in cmds {
        let _ = match cmd {
            PathCmd::MoveTo(p) => write!(d, "M{},{}", p.x, p.y),
            PathCmd::LineTo(p) => write!(d, "L{},{}", p.x, p.y),
            PathCmd::CubicTo(c1, c2, p) => write!(d, "C{},{},{},{},{},{}", c1.x, c1.y, c2.x, c2.y, p.x, p.y),
        };
    }
    d
}

/// Standalone SVG document for `scene`.
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, rgba(scene.background));
    let _ = writeln!(out, r#"<g transform="translate({},{})">"#, scene.origin.x, scene.origin.y);
    for item in scene.items() {
        let _ = match &item.element {
            Element::Line { from, to, stroke } => writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
                from.x, from.y, to.x, to.y, stroke_attrs(stroke)
            ),
            Element::Path { cmds, stroke } => {
                writeln!(out, r#"<path d="{}" fill="none" {}/>"#, path_data(cmds), stroke_attrs(stroke))
            }
            Element::Circle { center, radius, fill } => {
                writeln!(out, r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#, center.x, center.y, radius, rgba(*fill))
            }
            Element::Rect { rect, corner_radius, fill, stroke } => writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="{}" {}/>"#,
                rect.left,
                rect.top,
                rect.width(),
                rect.height(),
                rgba(*fill),
                stroke.as_ref().map(stroke_attrs).unwrap_or_default(),
                r = corner_radius
            ),
            Element::Text { pos, text, size, color, anchor, dy_em } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                writeln!(
                    out,
                    r#"<text x="{}" y="{}" dy="{}em" font-size="{}" font-family="sans-serif" text-anchor="{}" fill="{}">{}</text>"#,
                    pos.x,
                    pos.y,
                    dy_em,
                    size,
                    anchor,
                    rgba(*color),
                    escape(text)
                )
            }
        };
    }
    out.push_str("</g>\n</svg>\n");
    out
}
