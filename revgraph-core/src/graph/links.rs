use std::collections::{HashMap, HashSet};

use revgraph_types::{Candle, ComponentEdgeXY, MinimalEdge};

use super::components::Components;

/// Derive links between distinct components from the minimal edges.
///
/// Each edge is mapped to the components of its endpoints; edges with an
/// unassigned endpoint, and edges inside a single component, are skipped.
/// Links are deduplicated by the ordered `(from, to)` component pair, the
/// first edge in input order winning. A link joins the body middles
/// (`(open + close) / 2`) of the two candles at their `x` positions; a pair
/// lacking either candle produces nothing.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use revgraph_core::{
///     compute_candles, compute_component_links, compute_components, BucketSize, MetricPoint,
///     MinimalEdge,
/// };
///
/// let points = vec![
///     MetricPoint::new("r1", "A", Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(), 1.0),
///     MetricPoint::new("r1", "B", Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap(), 2.0),
/// ];
/// // Parallel edges across a day boundary collapse into one link.
/// let edges = vec![MinimalEdge::new("A", "B"), MinimalEdge::new("A", "B")];
///
/// let components = compute_components(&points, &edges, BucketSize::Day);
/// let candles = compute_candles(&points, components.as_slice());
/// let links = compute_component_links(&edges, &components, &candles);
/// assert_eq!(links.len(), 1);
/// assert_eq!((links[0].y1, links[0].y2), (1.0, 2.0));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "revgraph::graph::compute_component_links",
        skip(edges, components, candles),
        fields(edges = edges.len(), components = components.len(), candles = candles.len()),
    )
)]
#[must_use]
pub fn compute_component_links(
    edges: &[MinimalEdge],
    components: &Components,
    candles: &[Candle],
) -> Vec<ComponentEdgeXY> {
    let candle_by_component: HashMap<&str, &Candle> = candles
        .iter()
        .map(|c| (c.component_id.as_str(), c))
        .collect();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut links = Vec::new();

    for edge in edges {
        let (Some(from), Some(to)) = (
            components.component_id_of(&edge.parent_rev_id),
            components.component_id_of(&edge.child_rev_id),
        ) else {
            continue;
        };
        if from == to || seen.contains(&(from, to)) {
            continue;
        }
        let (Some(from_candle), Some(to_candle)) =
            (candle_by_component.get(from), candle_by_component.get(to))
        else {
            continue;
        };
        seen.insert((from, to));
        links.push(ComponentEdgeXY {
            x1: from_candle.x,
            y1: from_candle.body_mid(),
            x2: to_candle.x,
            y2: to_candle.body_mid(),
        });
    }

    links
}
