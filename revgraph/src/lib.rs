//! Revgraph renders time-series reports over revision graphs.
//!
//! Overview
//! - Resolves *minimal edges*: each measured revision is joined to its nearest
//!   measured ancestors, skipping the unmeasured commits in between.
//! - Groups measured revisions into connected components confined to one
//!   day, ISO week or month, and summarizes each component as an OHLC candle.
//! - Links candles whose components are joined by a minimal edge.
//!
//! Key behaviors and trade-offs
//! - View mode:
//!   - `Points`: one segment per minimal edge; exact but dense on long histories.
//!   - `Candles`: one candle per component; compact, at the cost of hiding
//!     individual revisions inside a bucket.
//! - Bucket size: wider buckets merge more revisions per candle and leave fewer,
//!   longer links between candles.
//! - Cycles in the parent graph are tolerated: the result is finite and
//!   deterministic, though it depends on input order.
//! - Rendering is pure and synchronous. Callers that race renders (a user
//!   switching metrics) guard results with a [`RenderGate`].
//!
//! Examples
//! ```
//! use chrono::{TimeZone, Utc};
//! use revgraph::{MetricPoint, ParentEdge, Report, ViewMode};
//!
//! let at = |h| Utc.with_ymd_and_hms(2024, 1, 1, h, 0, 0).unwrap();
//! let points = vec![
//!     MetricPoint::new("repo", "A", at(9), 1.0),
//!     MetricPoint::new("repo", "C", at(11), 3.0),
//! ];
//! // B was never measured.
//! let parents = vec![ParentEdge::new("B", "A"), ParentEdge::new("C", "B")];
//!
//! let report = Report::builder().view_mode(ViewMode::Candles).build();
//! let rendered = report.render(&points, &parents);
//! let candles = rendered.as_candles().unwrap();
//! assert_eq!(rendered.minimal_edges().len(), 1);
//! assert_eq!(candles.candles.len(), 1);
//! assert_eq!((candles.candles[0].open, candles.candles[0].close), (1.0, 3.0));
//! ```
//!
//! Discarding superseded renders:
//! ```
//! use revgraph::{RenderGate, Report};
//!
//! let gate = RenderGate::new();
//! let report = Report::builder().build();
//!
//! let first = gate.begin();
//! let second = gate.begin();
//! let late = gate.apply(first, report.render(&[], &[]));
//! let fresh = gate.apply(second, report.render(&[], &[]));
//! assert!(late.is_none());
//! assert!(fresh.is_some());
//! ```
#![warn(missing_docs)]

mod core;
mod render;
mod selection;

pub use crate::core::{Report, ReportBuilder};
pub use render::{CandleView, PointView, Rendered};
pub use selection::{filter_numeric_metrics, select_metric_name, sort_metrics_by_name};

pub use revgraph_core::types::*;
pub use revgraph_core::{
    Components, GenerationCounter, RenderGate, RenderTicket, bucket_key, build_edge_xy,
    compute_candles, compute_component_links, compute_components, resolve_minimal_edges,
};
