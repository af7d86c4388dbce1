use std::collections::{HashMap, VecDeque};

use revgraph_types::{BucketSize, Component, MetricPoint, MinimalEdge};

use crate::arena::{RevArena, RevIdx};
use crate::timeseries::bucket::bucket_key;

/// Partition of measured revisions into bucket-restricted components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    components: Vec<Component>,
    component_by_rev: HashMap<String, usize>,
}

impl Components {
    /// Components in discovery order.
    #[must_use]
    pub fn as_slice(&self) -> &[Component] {
        &self.components
    }

    /// Consume the partition, keeping only the ordered components.
    #[must_use]
    pub fn into_vec(self) -> Vec<Component> {
        self.components
    }

    /// The component a revision was assigned to, if it is measured.
    #[must_use]
    pub fn component_of(&self, rev_id: &str) -> Option<&Component> {
        self.component_by_rev
            .get(rev_id)
            .map(|&i| &self.components[i])
    }

    /// Shorthand for the id of [`Components::component_of`].
    #[must_use]
    pub fn component_id_of(&self, rev_id: &str) -> Option<&str> {
        self.component_of(rev_id).map(|c| c.component_id.as_str())
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when there are no components (no points were given).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate components in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }
}

impl<'a> IntoIterator for &'a Components {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Interned bucket keys: `bucket_of[rev]` indexes into `names`.
struct Buckets {
    names: Vec<String>,
    bucket_of: Vec<usize>,
}

impl Buckets {
    fn assign(points: &[MetricPoint], point_idx: &[RevIdx], n: usize, size: BucketSize) -> Self {
        let mut names: Vec<String> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut bucket_of = vec![0; n];
        for (p, &idx) in points.iter().zip(point_idx) {
            let key = bucket_key(p.ts, size);
            let id = match by_name.get(&key) {
                Some(&id) => id,
                None => {
                    let id = names.len();
                    names.push(key.clone());
                    by_name.insert(key, id);
                    id
                }
            };
            // A revision measured twice takes the bucket of its last point.
            bucket_of[idx] = id;
        }
        Self { names, bucket_of }
    }
}

/// Group measured revisions into connected components confined to one bucket.
///
/// Two revisions are adjacent when a minimal edge joins them and both fall in
/// the same bucket; edges that cross buckets, or touch a revision without a
/// point, play no part here. Points are visited in order and each one not yet
/// assigned seeds a breadth-first traversal that collects its component.
///
/// Component ids are `"<bucket>:<n>"` with `n` counting from 1 within each
/// bucket, in discovery order. Every point ends up in exactly one component.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use revgraph_core::{compute_components, BucketSize, MetricPoint, MinimalEdge};
///
/// let points = vec![
///     MetricPoint::new("r1", "A", Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(), 1.0),
///     MetricPoint::new("r1", "B", Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(), 2.0),
///     MetricPoint::new("r1", "C", Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(), 3.0),
/// ];
/// let edges = vec![MinimalEdge::new("A", "B"), MinimalEdge::new("B", "C")];
///
/// let components = compute_components(&points, &edges, BucketSize::Day);
/// assert_eq!(components.len(), 2);
/// assert_eq!(components.component_id_of("B"), Some("2024-01-01:1"));
/// assert_eq!(components.component_id_of("C"), Some("2024-01-02:1"));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "revgraph::graph::compute_components",
        skip(points, edges),
        fields(points = points.len(), edges = edges.len(), bucket_size = %bucket_size),
    )
)]
#[must_use]
pub fn compute_components(
    points: &[MetricPoint],
    edges: &[MinimalEdge],
    bucket_size: BucketSize,
) -> Components {
    let mut arena = RevArena::with_capacity(points.len());
    let point_idx: Vec<RevIdx> = points.iter().map(|p| arena.intern(&p.rev_id)).collect();
    let n = arena.len();
    let buckets = Buckets::assign(points, &point_idx, n, bucket_size);

    let mut adjacency: Vec<Vec<RevIdx>> = vec![Vec::new(); n];
    #[cfg(feature = "tracing")]
    let mut cross_bucket = 0usize;
    for edge in edges {
        let (Some(parent), Some(child)) =
            (arena.get(&edge.parent_rev_id), arena.get(&edge.child_rev_id))
        else {
            continue;
        };
        if buckets.bucket_of[parent] != buckets.bucket_of[child] {
            #[cfg(feature = "tracing")]
            {
                cross_bucket += 1;
            }
            continue;
        }
        adjacency[parent].push(child);
        adjacency[child].push(parent);
    }

    let mut assigned: Vec<Option<usize>> = vec![None; n];
    let mut per_bucket = vec![0usize; buckets.names.len()];
    let mut components: Vec<Component> = Vec::new();
    let mut queue: VecDeque<RevIdx> = VecDeque::new();

    for &seed in &point_idx {
        if assigned[seed].is_some() {
            continue;
        }
        let slot = components.len();
        let bucket = buckets.bucket_of[seed];
        let mut rev_ids = Vec::new();

        assigned[seed] = Some(slot);
        queue.push_back(seed);
        while let Some(current) = queue.pop_front() {
            rev_ids.push(arena.name(current).to_string());
            for &next in &adjacency[current] {
                if assigned[next].is_none() && buckets.bucket_of[next] == bucket {
                    assigned[next] = Some(slot);
                    queue.push_back(next);
                }
            }
        }

        per_bucket[bucket] += 1;
        let name = &buckets.names[bucket];
        components.push(Component {
            bucket: name.clone(),
            component_id: format!("{name}:{}", per_bucket[bucket]),
            rev_ids,
        });
    }

    let component_by_rev: HashMap<String, usize> = assigned
        .iter()
        .enumerate()
        .filter_map(|(idx, slot)| slot.map(|s| (arena.name(idx).to_string(), s)))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        components = components.len(),
        cross_bucket_edges = cross_bucket,
        "clustered measured revisions"
    );

    Components {
        components,
        component_by_rev,
    }
}
