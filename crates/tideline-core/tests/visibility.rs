// File: crates/tideline-core/tests/visibility.rs
// Purpose: Visibility toggling and the visible-only Y-domain.

use tideline_core::series::Point;
use tideline_core::{visible_y_domain, SeriesSet, Visibility};

fn three_series() -> SeriesSet {
    SeriesSet::new([
        vec![Point::new(0.0, 1.0), Point::new(1.0, 5.0)],
        vec![Point::new(0.0, 10.0), Point::new(1.0, 20.0)],
        vec![Point::new(0.0, -3.0), Point::new(2.0, 0.0)],
    ])
}

#[test]
fn starts_all_visible() {
    let v = Visibility::default();
    assert_eq!(v.flags(), [true, true, true]);
    assert!(v.any_visible());
}

#[test]
fn hidden_series_leave_the_extent() {
    let set = three_series();
    let mut v = Visibility::default();
    assert_eq!(visible_y_domain(&set, &v), (-3.0, 20.0));

    v.toggle(1);
    assert_eq!(visible_y_domain(&set, &v), (-3.0, 5.0));
    v.toggle(2);
    assert_eq!(visible_y_domain(&set, &v), (1.0, 5.0));

    // Showing everything again restores the original extent.
    v.toggle(1);
    v.toggle(2);
    assert_eq!(visible_y_domain(&set, &v), (-3.0, 20.0));
}

#[test]
fn nothing_visible_falls_back_to_placeholder() {
    let set = three_series();
    let v = Visibility::from_flags([false, false, false]);
    assert!(!v.any_visible());
    assert_eq!(visible_y_domain(&set, &v), (0.0, 100.0));

    // Visible but empty series contribute nothing either.
    let empty = SeriesSet::default();
    assert_eq!(visible_y_domain(&empty, &Visibility::default()), (0.0, 100.0));
}

#[test]
fn out_of_range_toggle_is_rejected() {
    let mut v = Visibility::default();
    assert!(!v.toggle(3));
    assert_eq!(v, Visibility::default());
    assert!(!v.is_visible(7));
}
