use std::collections::HashMap;

use revgraph_types::{EdgeXY, MetricPoint, MinimalEdge};

/// Segments for the points view: one per minimal edge, from the parent's
/// `(ts, value)` to the child's.
///
/// Edges whose endpoints are not both among `points` are skipped; the rest
/// keep input order.
#[must_use]
pub fn build_edge_xy(points: &[MetricPoint], edges: &[MinimalEdge]) -> Vec<EdgeXY> {
    let point_by_rev: HashMap<&str, &MetricPoint> =
        points.iter().map(|p| (p.rev_id.as_str(), p)).collect();

    edges
        .iter()
        .filter_map(|edge| {
            let parent = point_by_rev.get(edge.parent_rev_id.as_str())?;
            let child = point_by_rev.get(edge.child_rev_id.as_str())?;
            Some(EdgeXY {
                x1: parent.ts,
                y1: parent.value,
                x2: child.ts,
                y2: child.value,
            })
        })
        .collect()
}
