use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use revgraph_core::{
    BucketSize, MetricPoint, MinimalEdge, ParentEdge, bucket_key, compute_candles,
    compute_component_links, compute_components, resolve_minimal_edges,
};

const BASE: i64 = 1_704_067_200; // 2024-01-01T00:00:00Z

fn rev(i: usize) -> String {
    format!("r{i}")
}

/// Nodes `r0..rn`, some measured, with parent edges given as raw index pairs.
fn build(
    nodes: &[(bool, i64, i32)],
    raw_edges: &[(usize, usize)],
    acyclic: bool,
) -> (Vec<MetricPoint>, Vec<ParentEdge>) {
    let base = DateTime::<Utc>::from_timestamp(BASE, 0).unwrap();
    let points = nodes
        .iter()
        .enumerate()
        .filter(|(_, (measured, _, _))| *measured)
        .map(|(i, (_, hours, v))| {
            MetricPoint::new("repo", rev(i), base + Duration::hours(*hours), f64::from(*v))
        })
        .collect();
    let edges = raw_edges
        .iter()
        .filter(|(a, b)| !acyclic || a != b)
        .map(|&(a, b)| {
            if acyclic {
                // Parents always have the smaller index.
                ParentEdge::new(rev(a.max(b)), rev(a.min(b)))
            } else {
                ParentEdge::new(rev(a), rev(b))
            }
        })
        .collect();
    (points, edges)
}

fn arb_graph(acyclic: bool) -> impl Strategy<Value = (Vec<MetricPoint>, Vec<ParentEdge>)> {
    (1usize..40)
        .prop_flat_map(|n| {
            (
                proptest::collection::vec((any::<bool>(), 0i64..(21 * 24), -100i32..100), n),
                proptest::collection::vec((0..n, 0..n), 0..(n * 2)),
            )
        })
        .prop_map(move |(nodes, raw)| build(&nodes, &raw, acyclic))
}

fn arb_size() -> impl Strategy<Value = BucketSize> {
    prop::sample::select(BucketSize::ALL.to_vec())
}

/// Straightforward recursive definition used as the reference on acyclic input.
fn reference_ancestors(
    rev_id: &str,
    parents: &HashMap<&str, Vec<&str>>,
    measured: &HashSet<&str>,
    memo: &mut HashMap<String, BTreeSet<String>>,
) -> BTreeSet<String> {
    if let Some(hit) = memo.get(rev_id) {
        return hit.clone();
    }
    let mut out = BTreeSet::new();
    for p in parents.get(rev_id).into_iter().flatten() {
        if measured.contains(p) {
            out.insert((*p).to_string());
        } else {
            out.extend(reference_ancestors(p, parents, measured, memo));
        }
    }
    memo.insert(rev_id.to_string(), out.clone());
    out
}

proptest! {
    #[test]
    fn resolver_matches_recursive_definition_on_dags((points, parent_edges) in arb_graph(true)) {
        let measured: HashSet<&str> = points.iter().map(|p| p.rev_id.as_str()).collect();
        let mut parents: HashMap<&str, Vec<&str>> = HashMap::new();
        for e in &parent_edges {
            parents.entry(e.child_rev_id.as_str()).or_default().push(e.parent_rev_id.as_str());
        }

        let edges = resolve_minimal_edges(&points, &parent_edges);
        let mut memo = HashMap::new();
        for p in &points {
            let got: BTreeSet<String> = edges
                .iter()
                .filter(|e| e.child_rev_id == p.rev_id)
                .map(|e| e.parent_rev_id.clone())
                .collect();
            let per_child = edges.iter().filter(|e| e.child_rev_id == p.rev_id).count();
            prop_assert_eq!(per_child, got.len(), "duplicate ancestors for {}", p.rev_id);
            prop_assert_eq!(got, reference_ancestors(&p.rev_id, &parents, &measured, &mut memo));
        }
    }

    #[test]
    fn minimal_edges_join_measured_revisions((points, parent_edges) in arb_graph(false)) {
        let measured: HashSet<&str> = points.iter().map(|p| p.rev_id.as_str()).collect();
        let edges = resolve_minimal_edges(&points, &parent_edges);
        for e in &edges {
            prop_assert!(measured.contains(e.parent_rev_id.as_str()));
            prop_assert!(measured.contains(e.child_rev_id.as_str()));
        }
    }

    #[test]
    fn resolver_is_deterministic_on_cyclic_input((points, parent_edges) in arb_graph(false)) {
        let first = resolve_minimal_edges(&points, &parent_edges);
        let second = resolve_minimal_edges(&points, &parent_edges);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_point_lands_in_exactly_one_single_bucket_component(
        (points, parent_edges) in arb_graph(true),
        size in arb_size(),
    ) {
        let edges = resolve_minimal_edges(&points, &parent_edges);
        let components = compute_components(&points, &edges, size);

        let mut seen: HashSet<&str> = HashSet::new();
        for c in &components {
            prop_assert!(!c.rev_ids.is_empty());
            for r in &c.rev_ids {
                prop_assert!(seen.insert(r.as_str()), "{} in two components", r);
                prop_assert_eq!(components.component_id_of(r), Some(c.component_id.as_str()));
            }
            for r in &c.rev_ids {
                let p = points.iter().find(|p| &p.rev_id == r).unwrap();
                prop_assert_eq!(&bucket_key(p.ts, size), &c.bucket);
            }
            let prefix = format!("{}:", c.bucket);
            prop_assert!(c.component_id.starts_with(&prefix));
        }
        prop_assert_eq!(seen.len(), points.len());
    }

    #[test]
    fn same_bucket_minimal_edges_stay_inside_a_component(
        (points, parent_edges) in arb_graph(true),
        size in arb_size(),
    ) {
        let edges = resolve_minimal_edges(&points, &parent_edges);
        let components = compute_components(&points, &edges, size);
        let ts: HashMap<&str, DateTime<Utc>> =
            points.iter().map(|p| (p.rev_id.as_str(), p.ts)).collect();
        for MinimalEdge { parent_rev_id, child_rev_id } in &edges {
            let same_bucket = bucket_key(ts[parent_rev_id.as_str()], size)
                == bucket_key(ts[child_rev_id.as_str()], size);
            let same_component =
                components.component_id_of(parent_rev_id) == components.component_id_of(child_rev_id);
            prop_assert_eq!(same_bucket, same_component);
        }
    }

    #[test]
    fn candles_bracket_their_bodies_and_links_never_loop(
        (points, parent_edges) in arb_graph(true),
        size in arb_size(),
    ) {
        let edges = resolve_minimal_edges(&points, &parent_edges);
        let components = compute_components(&points, &edges, size);
        let candles = compute_candles(&points, components.as_slice());
        prop_assert_eq!(candles.len(), components.len());
        for c in &candles {
            prop_assert!(c.low <= c.open.min(c.close));
            prop_assert!(c.high >= c.open.max(c.close));
        }

        let links = compute_component_links(&edges, &components, &candles);
        let mut pairs = HashSet::new();
        for e in &edges {
            let from = components.component_id_of(&e.parent_rev_id).unwrap();
            let to = components.component_id_of(&e.child_rev_id).unwrap();
            if from != to {
                pairs.insert((from, to));
            }
        }
        prop_assert_eq!(links.len(), pairs.len());
    }
}
