use revgraph_core::types::MetricDef;

/// Keep the metrics whose physical type can be plotted (`DOUBLE`, `BIGINT`).
#[must_use]
pub fn filter_numeric_metrics(metrics: &[MetricDef]) -> Vec<MetricDef> {
    metrics.iter().filter(|m| m.is_numeric()).cloned().collect()
}

/// Metrics ordered by name; equal names keep their input order.
#[must_use]
pub fn sort_metrics_by_name(metrics: &[MetricDef]) -> Vec<MetricDef> {
    let mut sorted = metrics.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

/// Choose which metric to show after the metric list changes.
///
/// Keeps `previous` while it is still listed, otherwise falls back to the
/// alphabetically first name. Returns `None` only for an empty list.
///
/// ```
/// use revgraph::{select_metric_name, MetricDef};
///
/// let metrics = vec![MetricDef::new("runtime", "DOUBLE"), MetricDef::new("alloc", "BIGINT")];
/// assert_eq!(select_metric_name(&metrics, Some("runtime")).as_deref(), Some("runtime"));
/// assert_eq!(select_metric_name(&metrics, Some("gone")).as_deref(), Some("alloc"));
/// assert_eq!(select_metric_name(&[], Some("runtime")), None);
/// ```
#[must_use]
pub fn select_metric_name(metrics: &[MetricDef], previous: Option<&str>) -> Option<String> {
    if let Some(prev) = previous.filter(|prev| metrics.iter().any(|m| m.name == *prev)) {
        return Some(prev.to_string());
    }
    metrics
        .iter()
        .map(|m| m.name.as_str())
        .min()
        .map(str::to_string)
}
