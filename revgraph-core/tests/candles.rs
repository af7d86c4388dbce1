use chrono::{DateTime, TimeZone, Utc};
use revgraph_core::{
    BucketSize, Component, MetricPoint, MinimalEdge, compute_candles, compute_components,
};

fn utc(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, h, 0, 0).unwrap()
}

fn pt(rev: &str, ts: DateTime<Utc>, value: f64) -> MetricPoint {
    MetricPoint::new("r1", rev, ts, value)
}

fn component(ids: &[&str]) -> Component {
    Component {
        bucket: "2024-01-01".into(),
        component_id: "2024-01-01:1".into(),
        rev_ids: ids.iter().map(|s| (*s).to_string()).collect(),
    }
}

#[test]
fn chain_in_one_bucket_gives_expected_ohlc() {
    let points = vec![pt("A", utc(1), 1.0), pt("B", utc(2), 2.0), pt("C", utc(3), 3.0)];
    let edges = vec![MinimalEdge::new("A", "B"), MinimalEdge::new("B", "C")];

    let components = compute_components(&points, &edges, BucketSize::Day);
    let candles = compute_candles(&points, components.as_slice());
    assert_eq!(candles.len(), 1);
    let c = &candles[0];
    assert_eq!((c.open, c.close, c.low, c.high), (1.0, 3.0, 1.0, 3.0));
    assert_eq!(c.bucket, "2024-01-01");
    assert_eq!(c.component_id, "2024-01-01:1");
}

#[test]
fn open_close_follow_time_not_member_order() {
    let points = vec![pt("A", utc(10), 5.0), pt("B", utc(12), 2.0), pt("C", utc(18), 7.0)];
    let candles = compute_candles(&points, &[component(&["C", "A", "B"])]);
    let c = &candles[0];
    assert_eq!(c.open, 5.0);
    assert_eq!(c.close, 7.0);
    assert_eq!(c.low, 2.0);
    assert_eq!(c.high, 7.0);
    assert_eq!(c.x, utc(14));
}

#[test]
fn equal_timestamps_keep_member_order() {
    let points = vec![pt("A", utc(6), 1.0), pt("B", utc(6), 9.0)];

    let candles = compute_candles(&points, &[component(&["B", "A"])]);
    assert_eq!((candles[0].open, candles[0].close), (9.0, 1.0));

    let candles = compute_candles(&points, &[component(&["A", "B"])]);
    assert_eq!((candles[0].open, candles[0].close), (1.0, 9.0));
}

#[test]
fn single_member_opens_and_closes_at_its_value() {
    let points = vec![pt("A", utc(4), 3.5)];
    let candles = compute_candles(&points, &[component(&["A"])]);
    let c = &candles[0];
    assert_eq!((c.open, c.close, c.low, c.high), (3.5, 3.5, 3.5, 3.5));
    assert_eq!(c.x, utc(4));
}

#[test]
fn midpoint_keeps_sub_second_precision() {
    let a = utc(0);
    let b = a + chrono::Duration::seconds(1);
    let points = vec![pt("A", a, 1.0), pt("B", b, 2.0)];
    let candles = compute_candles(&points, &[component(&["A", "B"])]);
    assert_eq!(candles[0].x, a + chrono::Duration::milliseconds(500));
}

#[test]
fn unresolvable_component_falls_back_to_zeros_at_epoch() {
    let candles = compute_candles(&[], &[component(&["missing"])]);
    let c = &candles[0];
    assert_eq!((c.open, c.close, c.low, c.high), (0.0, 0.0, 0.0, 0.0));
    assert_eq!(c.x, DateTime::<Utc>::UNIX_EPOCH);
    assert_eq!(c.component_id, "2024-01-01:1");
}

#[test]
fn candles_follow_component_order() {
    let points = vec![
        pt("A", utc(1), 1.0),
        pt("B", utc(2), 2.0),
        pt("C", utc(3), 3.0),
    ];
    let components = compute_components(&points, &[], BucketSize::Day);
    let candles = compute_candles(&points, components.as_slice());
    let ids: Vec<&str> = candles.iter().map(|c| c.component_id.as_str()).collect();
    let expected: Vec<&str> = components.iter().map(|c| c.component_id.as_str()).collect();
    assert_eq!(ids, expected);
}
