use revgraph_core::Components;
use revgraph_core::types::{BucketSize, Candle, ComponentEdgeXY, EdgeXY, MinimalEdge};

/// Output of the points view.
#[derive(Debug, Clone, PartialEq)]
pub struct PointView {
    /// Edges between each measured revision and its nearest measured ancestors.
    pub minimal_edges: Vec<MinimalEdge>,
    /// One segment per minimal edge whose endpoints both have a point.
    pub edges: Vec<EdgeXY>,
}

/// Output of the candles view.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleView {
    /// Bucket granularity the view was computed at.
    pub bucket_size: BucketSize,
    /// Minimal edges the components were built from.
    pub minimal_edges: Vec<MinimalEdge>,
    /// Bucket-restricted connected components, in discovery order.
    pub components: Components,
    /// One candle per component, aligned with `components`.
    pub candles: Vec<Candle>,
    /// Deduplicated links between candles of different components.
    pub links: Vec<ComponentEdgeXY>,
}

/// Result of [`Report::render`](crate::Report::render).
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Produced under `ViewMode::Points`.
    Points(PointView),
    /// Produced under `ViewMode::Candles`.
    Candles(CandleView),
}

impl Rendered {
    /// Minimal edges, computed in either view.
    #[must_use]
    pub fn minimal_edges(&self) -> &[MinimalEdge] {
        match self {
            Self::Points(v) => &v.minimal_edges,
            Self::Candles(v) => &v.minimal_edges,
        }
    }

    /// The points view, if this is one.
    #[must_use]
    pub const fn as_points(&self) -> Option<&PointView> {
        match self {
            Self::Points(v) => Some(v),
            Self::Candles(_) => None,
        }
    }

    /// The candles view, if this is one.
    #[must_use]
    pub const fn as_candles(&self) -> Option<&CandleView> {
        match self {
            Self::Candles(v) => Some(v),
            Self::Points(_) => None,
        }
    }
}
