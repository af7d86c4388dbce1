use revgraph_core::types::{BucketSize, ReportConfig, RevGraphError, ViewMode};
use revgraph_core::{
    MetricPoint, ParentEdge, build_edge_xy, compute_candles, compute_component_links,
    compute_components, resolve_minimal_edges,
};

use crate::render::{CandleView, PointView, Rendered};

/// Report renderer configured with a view mode and a bucket size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub(crate) cfg: ReportConfig,
}

/// Builder for constructing a `Report` with custom configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportBuilder {
    cfg: ReportConfig,
}

impl ReportBuilder {
    /// Create a new builder with defaults: points view, daily buckets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: ReportConfig::default(),
        }
    }

    /// Start from an existing configuration.
    #[must_use]
    pub const fn config(mut self, cfg: ReportConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select the bucket granularity used by the candles view.
    ///
    /// Behavior and trade-offs:
    /// - `Day` keeps the most candles and the fewest merged revisions.
    /// - `Week` and `Month` fold more history into each candle; links then
    ///   mostly follow branch structure that crosses those wider boundaries.
    #[must_use]
    pub const fn bucket_size(mut self, size: BucketSize) -> Self {
        self.cfg.bucket_size = size;
        self
    }

    /// Select the bucket granularity by name (`day`, `week`, `month`).
    ///
    /// # Errors
    /// Returns `InvalidArg` for any other name. Use [`BucketSize::normalize`]
    /// to fall back to `day` instead.
    pub fn bucket_size_named(self, name: &str) -> Result<Self, RevGraphError> {
        Ok(self.bucket_size(name.parse()?))
    }

    /// Select which view `render` produces.
    #[must_use]
    pub const fn view_mode(mut self, mode: ViewMode) -> Self {
        self.cfg.view_mode = mode;
        self
    }

    /// Build the `Report`.
    #[must_use]
    pub const fn build(self) -> Report {
        Report { cfg: self.cfg }
    }
}

impl Report {
    /// Start building a new `Report`.
    ///
    /// ```
    /// use revgraph::{BucketSize, Report, ViewMode};
    ///
    /// let report = Report::builder()
    ///     .view_mode(ViewMode::Candles)
    ///     .bucket_size(BucketSize::Month)
    ///     .build();
    /// assert_eq!(report.config().bucket_size, BucketSize::Month);
    /// ```
    #[must_use]
    pub fn builder() -> ReportBuilder {
        ReportBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> ReportConfig {
        self.cfg
    }

    /// Render the configured view.
    ///
    /// Minimal edges are always resolved; the candles view additionally
    /// clusters, aggregates and links components for the configured bucket size.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "revgraph::report::render",
            skip(self, points, parent_edges),
            fields(
                points = points.len(),
                parent_edges = parent_edges.len(),
                view_mode = %self.cfg.view_mode,
            ),
        )
    )]
    #[must_use]
    pub fn render(&self, points: &[MetricPoint], parent_edges: &[ParentEdge]) -> Rendered {
        match self.cfg.view_mode {
            ViewMode::Points => Rendered::Points(self.render_points(points, parent_edges)),
            ViewMode::Candles => Rendered::Candles(self.render_candles(points, parent_edges)),
        }
    }

    /// Render the points view regardless of the configured view mode.
    #[must_use]
    pub fn render_points(&self, points: &[MetricPoint], parent_edges: &[ParentEdge]) -> PointView {
        let minimal_edges = resolve_minimal_edges(points, parent_edges);
        let edges = build_edge_xy(points, &minimal_edges);
        PointView {
            minimal_edges,
            edges,
        }
    }

    /// Render the candles view at the configured bucket size.
    #[must_use]
    pub fn render_candles(
        &self,
        points: &[MetricPoint],
        parent_edges: &[ParentEdge],
    ) -> CandleView {
        self.render_bucketed(points, parent_edges, self.cfg.bucket_size)
    }

    /// Render the candles view at an explicit bucket size.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "revgraph::report::render_bucketed",
            skip(self, points, parent_edges),
            fields(points = points.len(), bucket_size = %bucket_size),
        )
    )]
    #[must_use]
    pub fn render_bucketed(
        &self,
        points: &[MetricPoint],
        parent_edges: &[ParentEdge],
        bucket_size: BucketSize,
    ) -> CandleView {
        let minimal_edges = resolve_minimal_edges(points, parent_edges);
        let components = compute_components(points, &minimal_edges, bucket_size);
        let candles = compute_candles(points, components.as_slice());
        let links = compute_component_links(&minimal_edges, &components, &candles);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            candles = candles.len(),
            links = links.len(),
            "rendered candles view"
        );

        CandleView {
            bucket_size,
            minimal_edges,
            components,
            candles,
            links,
        }
    }
}
