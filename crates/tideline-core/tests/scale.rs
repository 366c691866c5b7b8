// File: crates/tideline-core/tests/scale.rs
// Purpose: Linear scale mapping, nice rounding, ticks, labels and the content width rule.

use tideline_core::axis::Axis;
use tideline_core::scale::{format_grouped, ticks, DEFAULT_TICKS};
use tideline_core::view::content_width;
use tideline_core::LinearScale;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn maps_and_inverts() {
    let s = LinearScale::new((0.0, 30.0), (0.0, 600.0));
    assert!(approx(s.map(15.0), 300.0));
    assert!(approx(s.invert(300.0), 15.0));
    // Out-of-range values extrapolate.
    assert!(approx(s.invert(-20.0), -1.0));

    let y = LinearScale::new((0.0, 100.0), (340.0, 0.0));
    assert!(approx(y.map(0.0), 340.0));
    assert!(approx(y.map(100.0), 0.0));
}

#[test]
fn degenerate_domain_maps_to_midpoint() {
    let s = LinearScale::new((5.0, 5.0), (0.0, 800.0));
    assert!(approx(s.map(5.0), 400.0));
    assert!(approx(s.invert(123.0), 5.0));
    assert_eq!(s.ticks(DEFAULT_TICKS), vec![5.0]);
}

#[test]
fn nice_extends_to_round_bounds() {
    let s = LinearScale::new((3.0, 97.0), (340.0, 0.0)).nice(DEFAULT_TICKS);
    assert_eq!(s.domain, (0.0, 100.0));

    let s = LinearScale::new((-3.0, 20.0), (340.0, 0.0)).nice(DEFAULT_TICKS);
    assert_eq!(s.domain, (-4.0, 20.0));

    let s = LinearScale::new((0.12, 0.87), (340.0, 0.0)).nice(DEFAULT_TICKS);
    assert!(approx(s.domain.0, 0.1) && approx(s.domain.1, 0.9), "{:?}", s.domain);

    // Already round, and single-valued domains, are left alone.
    let s = LinearScale::new((0.0, 100.0), (340.0, 0.0)).nice(DEFAULT_TICKS);
    assert_eq!(s.domain, (0.0, 100.0));
    let s = LinearScale::new((7.0, 7.0), (340.0, 0.0)).nice(DEFAULT_TICKS);
    assert_eq!(s.domain, (7.0, 7.0));
}

#[test]
fn ticks_follow_one_two_five_steps() {
    assert_eq!(ticks(0.0, 100.0, 10.0), (0..=10).map(|i| i as f64 * 10.0).collect::<Vec<_>>());
    assert_eq!(ticks(-4.0, 20.0, 10.0), (-2..=10).map(|i| i as f64 * 2.0).collect::<Vec<_>>());
    let t = ticks(0.0, 1.0, 10.0);
    assert_eq!(t.len(), 11);
    assert!(approx(t[3], 0.3));
    assert_eq!(ticks(0.0, 1.0, 0.0), Vec::<f64>::new());
}

#[test]
fn tick_labels_use_step_precision_and_grouping() {
    let x = LinearScale::new((0.0, 1.0), (0.0, 800.0));
    let axis = Axis::bottom(&x);
    assert_eq!(axis.ticks.first().map(|t| t.label.as_str()), Some("0.0"));
    assert_eq!(axis.ticks.last().map(|t| t.label.as_str()), Some("1.0"));

    let x = LinearScale::new((0.0, 20000.0), (0.0, 2000.0));
    let labels: Vec<String> = Axis::bottom(&x).ticks.into_iter().map(|t| t.label).collect();
    assert!(labels.contains(&"10,000".to_string()), "{labels:?}");

    assert_eq!(format_grouped(1234.5, 1), "1,234.5");
    assert_eq!(format_grouped(-1234567.0, 0), "-1,234,567");
    assert_eq!(format_grouped(-0.001, 2), "0.00");
    assert_eq!(format_grouped(999.0, 0), "999");
}

#[test]
fn content_width_has_a_floor() {
    assert!(approx(content_width(100, 800.0, 0.1), 800.0));
    assert!(approx(content_width(20_000, 800.0, 0.1), 2000.0));
    assert!(approx(content_width(0, 800.0, 0.1), 800.0));
}
