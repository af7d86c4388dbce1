//! Input rows and the derived revision-to-revision relation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One measured revision: a metric value observed at a revision's timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Repository the revision belongs to.
    pub repo_id: String,
    /// Revision identifier, unique within its repository.
    pub rev_id: String,
    /// Revision timestamp.
    pub ts: DateTime<Utc>,
    /// Measured metric value.
    pub value: f64,
}

impl MetricPoint {
    /// Construct a point from its parts.
    pub fn new(
        repo_id: impl Into<String>,
        rev_id: impl Into<String>,
        ts: DateTime<Utc>,
        value: f64,
    ) -> Self {
        Self {
            repo_id: repo_id.into(),
            rev_id: rev_id.into(),
            ts,
            value,
        }
    }
}

/// One edge of the revision graph: `child_rev_id` has `parent_rev_id` as a parent.
///
/// Either end may be unmeasured, and the edge set may reference revisions
/// that never appear among the points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentEdge {
    /// The child revision.
    pub child_rev_id: String,
    /// One of the child's parents.
    pub parent_rev_id: String,
}

impl ParentEdge {
    /// Construct a parent edge.
    pub fn new(child_rev_id: impl Into<String>, parent_rev_id: impl Into<String>) -> Self {
        Self {
            child_rev_id: child_rev_id.into(),
            parent_rev_id: parent_rev_id.into(),
        }
    }
}

/// Edge between two measured revisions, skipping any unmeasured revisions in between.
///
/// `parent_rev_id` is a nearest measured ancestor of `child_rev_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinimalEdge {
    /// The measured ancestor.
    pub parent_rev_id: String,
    /// The measured descendant.
    pub child_rev_id: String,
}

impl MinimalEdge {
    /// Construct a minimal edge from parent to child.
    pub fn new(parent_rev_id: impl Into<String>, child_rev_id: impl Into<String>) -> Self {
        Self {
            parent_rev_id: parent_rev_id.into(),
            child_rev_id: child_rev_id.into(),
        }
    }
}
