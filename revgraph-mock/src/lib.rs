//! Deterministic revision graphs for tests and demos.
//!
//! Every fixture is a [`Fixture`]: the measured points and the parent edges
//! the engine consumes, built either by hand with [`MockRepo`], by name from
//! [`fixtures::by_name`], or at random (but seeded) with [`random_dag`].
use chrono::{DateTime, Utc};
use revgraph_core::{MetricPoint, ParentEdge};

pub mod fixtures;
mod random;

pub use random::{RandomDag, random_dag};

/// Inputs for one render: measured points plus the full parent edge set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fixture {
    /// Measured revisions in commit order.
    pub points: Vec<MetricPoint>,
    /// Every parent edge, measured or not.
    pub parents: Vec<ParentEdge>,
}

/// Builder for a hand-written revision graph in a single repository.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use revgraph_mock::MockRepo;
///
/// let t = |s: i64| DateTime::<Utc>::from_timestamp(s, 0).unwrap();
/// let fixture = MockRepo::new("repo")
///     .measure("A", &[], t(0), 1.0)
///     .commit("B", &["A"])
///     .measure("C", &["B"], t(60), 2.0)
///     .build();
/// assert_eq!(fixture.points.len(), 2);
/// assert_eq!(fixture.parents.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockRepo {
    repo_id: String,
    fixture: Fixture,
}

impl MockRepo {
    /// Start an empty repository.
    pub fn new(repo_id: impl Into<String>) -> Self {
        Self {
            repo_id: repo_id.into(),
            fixture: Fixture::default(),
        }
    }

    /// Add an unmeasured revision with the given parents.
    #[must_use]
    pub fn commit(mut self, rev_id: &str, parents: &[&str]) -> Self {
        self.link(rev_id, parents);
        self
    }

    /// Add a measured revision with the given parents.
    #[must_use]
    pub fn measure(
        mut self,
        rev_id: &str,
        parents: &[&str],
        ts: DateTime<Utc>,
        value: f64,
    ) -> Self {
        self.link(rev_id, parents);
        self.fixture
            .points
            .push(MetricPoint::new(self.repo_id.clone(), rev_id, ts, value));
        self
    }

    /// Add a raw parent edge, e.g. to close a cycle.
    #[must_use]
    pub fn edge(mut self, child: &str, parent: &str) -> Self {
        self.fixture.parents.push(ParentEdge::new(child, parent));
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Fixture {
        self.fixture
    }

    fn link(&mut self, rev_id: &str, parents: &[&str]) {
        self.fixture
            .parents
            .extend(parents.iter().map(|p| ParentEdge::new(rev_id, *p)));
    }
}
