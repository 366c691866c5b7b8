// File: crates/tideline-core/src/visibility.rs
// Summary: Per-series visibility flags and the visible-only Y-domain they imply.

use crate::series::{extent, SeriesSet, SERIES_COUNT};
use crate::types::FALLBACK_Y_DOMAIN;

/// One flag per series; all visible initially.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility([bool; SERIES_COUNT]);

impl Default for Visibility {
    fn default() -> Self {
        Self([true; SERIES_COUNT])
    }
}

impl Visibility {
    pub fn from_flags(flags: [bool; SERIES_COUNT]) -> Self {
        Self(flags)
    }

    pub fn flags(&self) -> [bool; SERIES_COUNT] {
        self.0
    }

    /// Out-of-range indices read as hidden.
    pub fn is_visible(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Flip series `index`. Returns `false` (and changes nothing) when the
    /// index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.0.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    pub fn any_visible(&self) -> bool {
        self.0.iter().any(|&v| v)
    }
}

/// Extent of y over the visible series only; `[0, 100]` when nothing visible
/// contributes a point. Not yet niced.
pub fn visible_y_domain(series: &SeriesSet, visibility: &Visibility) -> (f64, f64) {
    let ys = series
        .iter()
        .filter(|(i, _)| visibility.is_visible(*i))
        .flat_map(|(_, points)| points.iter().map(|p| p.y));
    extent(ys).unwrap_or(FALLBACK_Y_DOMAIN)
}
