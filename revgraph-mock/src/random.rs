use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use revgraph_core::{MetricPoint, ParentEdge};

use crate::Fixture;

/// Shape of a random revision DAG.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomDag {
    /// Number of revisions, measured or not.
    pub revisions: usize,
    /// Probability that a revision carries a metric value.
    pub measured_ratio: f64,
    /// Probability that a non-root revision is a merge with two parents.
    pub merge_ratio: f64,
    /// Timestamp of the first revision.
    pub start: DateTime<Utc>,
    /// Upper bound on the gap between consecutive revisions.
    pub max_gap: Duration,
}

impl Default for RandomDag {
    fn default() -> Self {
        Self {
            revisions: 200,
            measured_ratio: 0.5,
            merge_ratio: 0.1,
            start: DateTime::<Utc>::UNIX_EPOCH + Duration::days(19_723), // 2024-01-01
            max_gap: Duration::hours(12),
        }
    }
}

/// Generate a DAG whose revisions `rev-0 .. rev-{n-1}` are in timestamp order.
///
/// Every revision but the first has one parent among the previous few
/// revisions (a merge adds a second one anywhere earlier), so the graph is
/// acyclic and mostly linear. Values follow a bounded random walk. The same
/// seed and shape always produce the same fixture.
#[must_use]
pub fn random_dag(seed: u64, shape: RandomDag) -> Fixture {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_gap_secs = shape.max_gap.num_seconds().max(1);
    let measured_ratio = shape.measured_ratio.clamp(0.0, 1.0);
    let merge_ratio = shape.merge_ratio.clamp(0.0, 1.0);

    let mut fixture = Fixture::default();
    let mut ts = shape.start;
    let mut value = 100.0_f64;

    for i in 0..shape.revisions {
        let rev_id = format!("rev-{i}");
        if i > 0 {
            let lookback = rng.random_range(1..=i.min(3));
            fixture
                .parents
                .push(ParentEdge::new(rev_id.as_str(), format!("rev-{}", i - lookback)));
            if i > 1 && rng.random_bool(merge_ratio) {
                let other = rng.random_range(0..i - 1);
                fixture
                    .parents
                    .push(ParentEdge::new(rev_id.as_str(), format!("rev-{other}")));
            }
            ts += Duration::seconds(rng.random_range(1..=max_gap_secs));
        }
        value = (value + rng.random_range(-5.0..5.0)).clamp(0.0, 1_000.0);
        if rng.random_bool(measured_ratio) {
            fixture
                .points
                .push(MetricPoint::new("random", rev_id, ts, value));
        }
    }

    fixture
}
