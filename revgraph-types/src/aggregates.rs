//! Render-ready aggregates produced by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A set of measured revisions connected by minimal edges within one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Bucket key shared by every member (e.g. `2024-W01`).
    pub bucket: String,
    /// `"<bucket>:<n>"`, where `n` counts components of this bucket from 1.
    pub component_id: String,
    /// Member revisions in discovery order.
    pub rev_ids: Vec<String>,
}

/// Open/high/low/close summary of one component's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket key of the summarized component.
    pub bucket: String,
    /// Identifier of the summarized component.
    pub component_id: String,
    /// Midpoint between the earliest and latest member timestamps.
    pub x: DateTime<Utc>,
    /// Value of the earliest member.
    pub open: f64,
    /// Value of the latest member.
    pub close: f64,
    /// Smallest member value.
    pub low: f64,
    /// Largest member value.
    pub high: f64,
}

impl Candle {
    /// Vertical middle of the candle body (`open`/`close`, not the wick).
    #[must_use]
    pub fn body_mid(&self) -> f64 {
        (self.open + self.close) / 2.0
    }
}

/// Link between the bodies of two candles, from the parent component to the child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEdgeXY {
    /// Parent candle midpoint time.
    pub x1: DateTime<Utc>,
    /// Parent candle body middle.
    pub y1: f64,
    /// Child candle midpoint time.
    pub x2: DateTime<Utc>,
    /// Child candle body middle.
    pub y2: f64,
}

/// Segment between two measured points along a minimal edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeXY {
    /// Parent revision timestamp.
    pub x1: DateTime<Utc>,
    /// Parent revision value.
    pub y1: f64,
    /// Child revision timestamp.
    pub x2: DateTime<Utc>,
    /// Child revision value.
    pub y2: f64,
}
