// File: crates/tideline-core/src/curve.rs
// Summary: Monotone-X cubic interpolation producing path commands that never overshoot the data.
// Notes:
// - Tangents follow Steffen's method as popularised by d3's `curveMonotoneX`:
//   each interior tangent is limited by the neighbouring secant slopes, so the
//   curve stays within the local min/max of every segment.

use crate::geometry::Pos;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Pos),
    LineTo(Pos),
    CubicTo(Pos, Pos, Pos),
}

#[inline]
fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

// Signed zero divisor for coincident x, so the slope keeps its direction.
#[inline]
fn divisor(h: f64, other: f64) -> f64 {
    if h != 0.0 { h } else if other < 0.0 { -0.0 } else { 0.0 }
}

struct Monotone {
    cmds: Vec<PathCmd>,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
    state: u8,
}

impl Monotone {
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let s0 = (self.y1 - self.y0) / divisor(h0, h1);
        let s1 = (y2 - self.y1) / divisor(h1, h0);
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        if t.is_nan() { 0.0 } else { t }
    }

    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h != 0.0 { (3.0 * (self.y1 - self.y0) / h - t) / 2.0 } else { t }
    }

    fn segment(&mut self, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        self.cmds.push(PathCmd::CubicTo(
            Pos::new((self.x0 + dx) as f32, (self.y0 + dx * t0) as f32),
            Pos::new((self.x1 - dx) as f32, (self.y1 - dx * t1) as f32),
            Pos::new(self.x1 as f32, self.y1 as f32),
        ));
    }

    fn point(&mut self, x: f64, y: f64) {
        if x == self.x1 && y == self.y1 {
            return;
        }
        let mut t1 = f64::NAN;
        match self.state {
            0 => {
                self.state = 1;
                self.cmds.push(PathCmd::MoveTo(Pos::new(x as f32, y as f32)));
            }
            1 => self.state = 2,
            2 => {
                self.state = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.segment(t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.segment(self.t0, t1);
            }
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }

    fn finish(mut self) -> Vec<PathCmd> {
        match self.state {
            2 => self.cmds.push(PathCmd::LineTo(Pos::new(self.x1 as f32, self.y1 as f32))),
            3 => {
                let t1 = self.slope2(self.t0);
                self.segment(self.t0, t1);
            }
            _ => {}
        }
        self.cmds
    }
}

/// Path through `points` (pixel space, ascending x). One point yields a lone
/// `MoveTo`, two yield a straight segment, more yield cubic segments.
pub fn monotone_x(points: &[(f64, f64)]) -> Vec<PathCmd> {
    let mut m = Monotone {
        cmds: Vec::with_capacity(points.len() + 1),
        x0: f64::NAN,
        y0: f64::NAN,
        x1: f64::NAN,
        y1: f64::NAN,
        t0: f64::NAN,
        state: 0,
    };
    for &(x, y) in points {
        m.point(x, y);
    }
    m.finish()
}
