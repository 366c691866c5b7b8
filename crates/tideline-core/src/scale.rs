// File: crates/tideline-core/src/scale.rs
// Summary: Linear domain-to-pixel scale with nice rounding, tick generation and tick labels.
// Notes:
// - Tick stepping follows the 1-2-5 rule used by d3-array, so axis labels
//   line up with what a browser rendering of the same data would show.

/// Default tick count requested for axes and for nice rounding.
pub const DEFAULT_TICKS: usize = 10;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Monotonic linear mapping from `domain` to `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain value to pixel. A degenerate domain maps to the range midpoint.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span != 0.0 { (v - d0) / span } else { 0.5 };
        r0 + t * (r1 - r0)
    }

    /// Pixel to domain value; inverse of [`map`](Self::map).
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span != 0.0 { (px - r0) / span } else { 0.5 };
        d0 + t * (d1 - d0)
    }

    /// Extend the domain outward to multiples of the tick step.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        if !(start.is_finite() && stop.is_finite()) || start == stop {
            return self;
        }
        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if prestep == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self.domain = if reversed { (stop, start) } else { (start, stop) };
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }

    /// Formatter matching [`ticks`](Self::ticks): fixed precision derived from
    /// the tick step, with thousands separators.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let step = tick_step(self.domain.0, self.domain.1, count as f64);
        let precision = precision_fixed(step);
        move |v| format_grouped(v, precision)
    }
}

// JS `Math.round`: halves round toward +inf.
#[inline]
fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = js_round(start * inv);
        i2 = js_round(stop * inv);
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = js_round(start / inc);
        i2 = js_round(stop / inc);
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed step encoding: positive is the step itself, negative is `-1/step`.
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).2
}

/// Absolute tick step for `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reversed = stop < start;
    let (a, b) = if reversed { (stop, start) } else { (start, stop) };
    let inc = tick_increment(a, b, count);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

/// Round tick values covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reversed = stop < start;
    let (i1, i2, inc) = if reversed { tick_spec(stop, start, count) } else { tick_spec(start, stop, count) };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reversed {
        out.reverse();
    }
    out
}

fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if !(step > 0.0) || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Fixed-point with comma grouping of the integer part, e.g. `-1,234.50`.
pub fn format_grouped(v: f64, precision: usize) -> String {
    let raw = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    let is_zero = raw.bytes().all(|b| b == b'0' || b == b'.');
    if v < 0.0 && !is_zero {
        grouped.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    grouped
}
