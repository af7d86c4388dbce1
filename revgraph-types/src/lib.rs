//! revgraph-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod aggregates;
mod config;
mod error;
mod metric;
mod points;

pub use aggregates::{Candle, Component, ComponentEdgeXY, EdgeXY};
pub use config::{BucketSize, ReportConfig, ViewMode};
pub use error::RevGraphError;
pub use metric::MetricDef;
pub use points::{MetricPoint, MinimalEdge, ParentEdge};
