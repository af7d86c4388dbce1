//! Graph views derived from minimal edges.
//!
//! Modules include:
//! - `components`: partition measured revisions into per-bucket components
//! - `links`: deduplicated links between components' candles
//! - `edges`: point-to-point segments for the points view
/// Bucket-restricted connected components.
pub mod components;
/// Point-to-point segments along minimal edges.
pub mod edges;
/// Links between components.
pub mod links;
