use std::collections::HashSet;

use revgraph_types::{MetricPoint, MinimalEdge, ParentEdge};

use crate::arena::{RevArena, RevIdx};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Resolving,
    Done,
}

/// One pending `nearest_measured_ancestors(node)` evaluation.
struct Frame {
    node: RevIdx,
    next_parent: usize,
    found: Vec<RevIdx>,
    seen: HashSet<RevIdx>,
}

impl Frame {
    fn new(node: RevIdx) -> Self {
        Self {
            node,
            next_parent: 0,
            found: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn add(&mut self, ancestor: RevIdx) {
        if self.seen.insert(ancestor) {
            self.found.push(ancestor);
        }
    }
}

/// Memoized walk over the parent graph. Every field is indexed by `RevIdx`.
struct AncestorWalk<'g> {
    parents: &'g [Vec<RevIdx>],
    measured: &'g [bool],
    state: Vec<Visit>,
    memo: Vec<Vec<RevIdx>>,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    cycle_hits: usize,
}

impl<'g> AncestorWalk<'g> {
    fn new(parents: &'g [Vec<RevIdx>], measured: &'g [bool]) -> Self {
        let n = parents.len();
        Self {
            parents,
            measured,
            state: vec![Visit::Unvisited; n],
            memo: vec![Vec::new(); n],
            cycle_hits: 0,
        }
    }

    /// Nearest measured ancestors of `root`, in first-discovery order.
    ///
    /// Each direct parent contributes itself when measured, otherwise its own
    /// nearest measured ancestors. A revision reached again while it is still
    /// being resolved contributes nothing, which bounds the walk on cyclic
    /// input. The explicit stack keeps native stack depth constant however
    /// long the unmeasured chains are.
    fn resolve(&mut self, root: RevIdx) -> &[RevIdx] {
        if self.state[root] != Visit::Done {
            self.state[root] = Visit::Resolving;
            let mut stack = vec![Frame::new(root)];

            while let Some(frame) = stack.last_mut() {
                if let Some(&parent) = self.parents[frame.node].get(frame.next_parent) {
                    frame.next_parent += 1;
                    if self.measured[parent] {
                        frame.add(parent);
                        continue;
                    }
                    match self.state[parent] {
                        Visit::Done => {
                            for &ancestor in &self.memo[parent] {
                                frame.add(ancestor);
                            }
                        }
                        Visit::Resolving => self.cycle_hits += 1,
                        Visit::Unvisited => {
                            self.state[parent] = Visit::Resolving;
                            stack.push(Frame::new(parent));
                        }
                    }
                } else {
                    let Some(done) = stack.pop() else { break };
                    if let Some(caller) = stack.last_mut() {
                        for &ancestor in &done.found {
                            caller.add(ancestor);
                        }
                    }
                    self.state[done.node] = Visit::Done;
                    self.memo[done.node] = done.found;
                }
            }
        }
        &self.memo[root]
    }
}

/// Compute the minimal edges between measured revisions.
///
/// For every point, emits one [`MinimalEdge`] per nearest measured ancestor:
/// the closest measured revisions reachable through `parent_edges` when
/// unmeasured revisions in between are skipped. Edges are ordered by point,
/// then by the order in which the walk discovers each ancestor.
///
/// Parent lists keep input order and may contain duplicates. Cyclic input
/// terminates with a finite, deterministic (possibly incomplete) result.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use revgraph_core::{resolve_minimal_edges, MetricPoint, MinimalEdge, ParentEdge};
///
/// let t = |s: i64| DateTime::<Utc>::from_timestamp(s, 0).unwrap();
/// let points = vec![
///     MetricPoint::new("r1", "A", t(0), 1.0),
///     MetricPoint::new("r1", "C", t(100), 3.0),
/// ];
/// // B is unmeasured and sits between A and C.
/// let parents = vec![ParentEdge::new("B", "A"), ParentEdge::new("C", "B")];
/// assert_eq!(
///     resolve_minimal_edges(&points, &parents),
///     vec![MinimalEdge::new("A", "C")],
/// );
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "revgraph::ancestors::resolve_minimal_edges",
        skip(points, parent_edges),
        fields(points = points.len(), parent_edges = parent_edges.len()),
    )
)]
#[must_use]
pub fn resolve_minimal_edges(
    points: &[MetricPoint],
    parent_edges: &[ParentEdge],
) -> Vec<MinimalEdge> {
    let mut arena = RevArena::with_capacity(points.len() + parent_edges.len());
    let point_idx: Vec<RevIdx> = points.iter().map(|p| arena.intern(&p.rev_id)).collect();
    let links: Vec<(RevIdx, RevIdx)> = parent_edges
        .iter()
        .map(|e| (arena.intern(&e.child_rev_id), arena.intern(&e.parent_rev_id)))
        .collect();

    let mut parents: Vec<Vec<RevIdx>> = vec![Vec::new(); arena.len()];
    for (child, parent) in links {
        parents[child].push(parent);
    }
    let mut measured = vec![false; arena.len()];
    for &idx in &point_idx {
        measured[idx] = true;
    }

    let mut walk = AncestorWalk::new(&parents, &measured);
    let mut out = Vec::new();
    for (point, &idx) in points.iter().zip(&point_idx) {
        for &ancestor in walk.resolve(idx) {
            out.push(MinimalEdge::new(arena.name(ancestor), point.rev_id.as_str()));
        }
    }

    #[cfg(feature = "tracing")]
    {
        if walk.cycle_hits > 0 {
            tracing::debug!(
                cycle_hits = walk.cycle_hits,
                "parent graph contains cycles; revisited revisions contributed no ancestors"
            );
        }
        tracing::debug!(minimal_edges = out.len(), "resolved minimal edges");
    }

    out
}
