use chrono::{DateTime, TimeZone, Utc};
use revgraph_core::{
    BucketSize, MetricPoint, MinimalEdge, compute_candles, compute_component_links,
    compute_components,
};

fn utc(d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, h, 0, 0).unwrap()
}

fn pt(rev: &str, ts: DateTime<Utc>, value: f64) -> MetricPoint {
    MetricPoint::new("r1", rev, ts, value)
}

fn edge(parent: &str, child: &str) -> MinimalEdge {
    MinimalEdge::new(parent, child)
}

#[test]
fn deduplicates_parallel_links() {
    let points = vec![pt("A", utc(1, 10), 1.0), pt("B", utc(2, 10), 2.0)];
    let edges = vec![edge("A", "B"), edge("A", "B")];

    let components = compute_components(&points, &edges, BucketSize::Day);
    let candles = compute_candles(&points, components.as_slice());
    let links = compute_component_links(&edges, &components, &candles);
    assert_eq!(links.len(), 1);
}

#[test]
fn distinct_member_pairs_between_same_components_collapse() {
    // A,B on day 1 and C,D on day 2; A->C and B->D both join the same pair.
    let points = vec![
        pt("A", utc(1, 1), 1.0),
        pt("B", utc(1, 2), 2.0),
        pt("C", utc(2, 1), 3.0),
        pt("D", utc(2, 2), 4.0),
    ];
    let edges = vec![edge("A", "B"), edge("C", "D"), edge("A", "C"), edge("B", "D")];

    let components = compute_components(&points, &edges, BucketSize::Day);
    assert_eq!(components.len(), 2);
    let candles = compute_candles(&points, components.as_slice());
    let links = compute_component_links(&edges, &components, &candles);
    assert_eq!(links.len(), 1);
}

#[test]
fn links_anchor_on_candle_bodies() {
    let points = vec![
        pt("A", utc(1, 0), 2.0),
        pt("B", utc(1, 12), 100.0),
        pt("C", utc(1, 20), 4.0),
        pt("D", utc(2, 6), 10.0),
    ];
    let edges = vec![edge("A", "B"), edge("B", "C"), edge("C", "D")];

    let components = compute_components(&points, &edges, BucketSize::Day);
    let candles = compute_candles(&points, components.as_slice());
    let links = compute_component_links(&edges, &components, &candles);
    assert_eq!(links.len(), 1);
    let link = &links[0];
    // Day 1 body is open 2 / close 4, regardless of the 100 high.
    assert_eq!(link.y1, 3.0);
    assert_eq!(link.x1, utc(1, 10));
    assert_eq!(link.y2, 10.0);
    assert_eq!(link.x2, utc(2, 6));
}

#[test]
fn never_links_a_component_to_itself() {
    let points = vec![pt("A", utc(1, 1), 1.0), pt("B", utc(1, 2), 2.0)];
    let edges = vec![edge("A", "B"), edge("B", "A")];

    let components = compute_components(&points, &edges, BucketSize::Day);
    let candles = compute_candles(&points, components.as_slice());
    assert!(compute_component_links(&edges, &components, &candles).is_empty());
}

#[test]
fn direction_matters_for_deduplication() {
    let points = vec![pt("A", utc(1, 1), 1.0), pt("B", utc(2, 1), 2.0)];
    let edges = vec![edge("A", "B"), edge("B", "A")];

    let components = compute_components(&points, &edges, BucketSize::Day);
    let candles = compute_candles(&points, components.as_slice());
    let links = compute_component_links(&edges, &components, &candles);
    assert_eq!(links.len(), 2);
    assert_eq!((links[0].y1, links[0].y2), (1.0, 2.0));
    assert_eq!((links[1].y1, links[1].y2), (2.0, 1.0));
}

#[test]
fn edges_with_unassigned_endpoints_are_dropped() {
    let points = vec![pt("A", utc(1, 1), 1.0)];
    let edges = vec![edge("ghost", "A"), edge("A", "ghost")];

    let components = compute_components(&points, &edges, BucketSize::Day);
    let candles = compute_candles(&points, components.as_slice());
    assert!(compute_component_links(&edges, &components, &candles).is_empty());
}

#[test]
fn missing_candles_produce_no_link() {
    let points = vec![pt("A", utc(1, 1), 1.0), pt("B", utc(2, 1), 2.0)];
    let edges = vec![edge("A", "B")];

    let components = compute_components(&points, &edges, BucketSize::Day);
    assert!(compute_component_links(&edges, &components, &[]).is_empty());
}
