//! Re-export of the data types from `revgraph-types`.
// Consolidated re-exports so downstream crates can depend on `revgraph-core` only

pub use revgraph_types::RevGraphError;
pub use revgraph_types::{BucketSize, ReportConfig, ViewMode};
pub use revgraph_types::{Candle, Component, ComponentEdgeXY, EdgeXY};
pub use revgraph_types::{MetricDef, MetricPoint, MinimalEdge, ParentEdge};
