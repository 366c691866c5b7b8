// File: crates/tideline-core/src/text.rs
// Summary: Text measurement seam; backends supply real shaping, core ships an approximation.

/// Measures rendered text width so layout (legend sizing) can fit labels.
pub trait TextMeasure {
    fn measure_width(&self, text: &str, size: f32) -> f32;
}

/// Fixed average glyph advance, as a fraction of the font size.
#[derive(Clone, Copy, Debug)]
pub struct ApproxTextMeasure {
    pub advance_em: f32,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn measure_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size.max(1.0) * self.advance_em
    }
}
