// File: crates/tideline-core/tests/tooltip.rs
// Purpose: Nearest-sample lookup (including the midpoint tie-break) and tooltip formatting.

use tideline_core::tooltip::{nearest_index, Tooltip};
use tideline_core::{locate, parse_datasets, ChartKind, LinearScale, Record, Theme, TooltipContent};

fn samples() -> Vec<Record> {
    [0.0, 10.0, 20.0, 30.0].iter().map(|&t| Record::scalar(t, t * 2.0)).collect()
}

#[test]
fn picks_the_closer_neighbour() {
    let records = samples();
    assert_eq!(nearest_index(14.0, &records), Some(1));
    assert_eq!(nearest_index(16.0, &records), Some(2));
    assert_eq!(nearest_index(20.0, &records), Some(2));
}

#[test]
fn exact_midpoint_resolves_left() {
    let records = samples();
    assert_eq!(nearest_index(15.0, &records), Some(1));
    assert_eq!(nearest_index(25.0, &records), Some(2));
}

#[test]
fn clamps_outside_the_time_range() {
    let records = samples();
    assert_eq!(nearest_index(-50.0, &records), Some(0));
    assert_eq!(nearest_index(0.0, &records), Some(0));
    assert_eq!(nearest_index(1e9, &records), Some(3));
    assert_eq!(nearest_index(3.0, &[Record::null(7.0)]), Some(0));
    assert_eq!(nearest_index(3.0, &[]), None);
}

#[test]
fn locate_inverts_the_pointer_through_the_scale() {
    let records = samples();
    let x = LinearScale::new((0.0, 30.0), (0.0, 300.0));
    assert_eq!(locate(140.0, &x, &records).map(Record::timestamp), Some(10.0));
    assert_eq!(locate(160.0, &x, &records).map(Record::timestamp), Some(20.0));
    assert_eq!(locate(-40.0, &x, &records).map(Record::timestamp), Some(0.0));
    assert_eq!(locate(900.0, &x, &records).map(Record::timestamp), Some(30.0));
    assert!(locate(10.0, &x, &[]).is_none());
}

#[test]
fn multi_rows_show_na_for_missing_values() {
    let theme = Theme::light();
    let record = Record::vector(42.0, [Some(1.234), None, Some(-7.0)]);
    let content = TooltipContent::for_record(&record, ChartKind::Multi, &theme);
    assert_eq!(content.rows.len(), 3);
    assert_eq!(
        content.to_html(),
        "<strong>Time:</strong> 42<br/>\
         <span style=\"color:#2563eb\">Series 1:</span> 1.23<br/>\
         <span style=\"color:#16a34a\">Series 2:</span> N/A<br/>\
         <span style=\"color:#dc2626\">Series 3:</span> -7.00<br/>"
    );

    let null_record = TooltipContent::for_record(&Record::null(1.5), ChartKind::Multi, &theme);
    assert!(null_record.rows.iter().all(|r| r.value.is_none()));
    assert!(null_record.to_html().starts_with("<strong>Time:</strong> 1.5<br/>"));
}

#[test]
fn mixed_slot_record_keeps_its_numeric_rows() {
    let datasets = parse_datasets(r#"[{"title":"t","data":[[1,[5,"y",7]]]}]"#).expect("parse");
    let content = TooltipContent::for_record(&datasets[0].data[0], ChartKind::Multi, &Theme::light());
    let values: Vec<Option<f64>> = content.rows.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![Some(5.0), None, Some(7.0)]);
    assert!(content.to_html().contains("Series 1:</span> 5.00<br/>"));
    assert!(content.to_html().contains("Series 2:</span> N/A<br/>"));
}

#[test]
fn single_row_for_scalar_records() {
    let content = TooltipContent::for_record(&Record::scalar(3.0, 0.5), ChartKind::Single, &Theme::light());
    assert_eq!(content.rows.len(), 1);
    assert_eq!(content.rows[0].name, "Value");
    assert!(content.to_html().ends_with("0.50<br/>"));
}

#[test]
fn hiding_keeps_content_but_drops_visibility() {
    let mut tip = Tooltip::default();
    assert!(!tip.is_visible());
    assert!(tip.html().is_none());

    let content = TooltipContent::for_record(&Record::scalar(1.0, 2.0), ChartKind::Single, &Theme::light());
    tip.show(content, 100.0, 200.0);
    assert!(tip.is_visible());
    assert_eq!(tip.opacity(), 1.0);
    assert_eq!(tip.position(), (110.0, 180.0));

    tip.hide();
    assert!(!tip.is_visible());
    assert_eq!(tip.opacity(), 0.0);
    assert!(tip.html().is_some());
}
