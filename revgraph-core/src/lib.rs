//! revgraph-core
//!
//! The revision-metric graph aggregation engine.
//!
//! - `ancestors`: nearest measured ancestors over the full parent graph.
//! - `timeseries`: calendar bucket keys and OHLC candle aggregation.
//! - `graph`: bucket-restricted components, component links, point segments.
//! - `generation`: generation tokens for discarding superseded renders.
//!
//! Every computation is a pure function of its inputs. Per-revision state is
//! scoped to a single call, so the functions can be invoked once per user
//! interaction without accumulating anything between calls.
#![warn(missing_docs)]

/// Nearest-measured-ancestor resolution.
pub mod ancestors;
mod arena;
/// Render generation tokens.
pub mod generation;
/// Component clustering, component links, and point-to-point segments.
pub mod graph;
/// Calendar bucketing and candle aggregation.
pub mod timeseries;
pub mod types;

pub use ancestors::resolve_minimal_edges;
pub use generation::{GenerationCounter, RenderGate, RenderTicket};
pub use graph::components::{Components, compute_components};
pub use graph::edges::build_edge_xy;
pub use graph::links::compute_component_links;
pub use timeseries::bucket::bucket_key;
pub use timeseries::candles::compute_candles;
pub use types::*;
