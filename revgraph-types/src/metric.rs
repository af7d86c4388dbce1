use serde::{Deserialize, Serialize};

/// Physical column types that carry plottable numeric values.
const NUMERIC_TYPES: [&str; 2] = ["DOUBLE", "BIGINT"];

/// Description of a metric available in the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDef {
    /// Metric name, used as the selection key.
    pub name: String,
    /// Optional human description.
    pub description: Option<String>,
    /// Optional unit, appended to axis labels.
    pub unit: Option<String>,
    /// Storage type of the metric's values (e.g. `DOUBLE`, `VARCHAR`).
    pub physical_type: String,
}

impl MetricDef {
    /// Construct a metric definition without description or unit.
    pub fn new(name: impl Into<String>, physical_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            unit: None,
            physical_type: physical_type.into(),
        }
    }

    /// Attach a unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// True when values of this metric can be plotted.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        NUMERIC_TYPES.contains(&self.physical_type.as_str())
    }

    /// Axis label: `name (unit)` when a non-blank unit is set, otherwise the name.
    ///
    /// ```
    /// use revgraph_types::MetricDef;
    /// let m = MetricDef::new("latency", "DOUBLE").with_unit("ms");
    /// assert_eq!(m.label(), "latency (ms)");
    /// assert_eq!(MetricDef::new("tokens", "BIGINT").with_unit("  ").label(), "tokens");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self.unit.as_deref() {
            Some(unit) if !unit.trim().is_empty() => format!("{} ({unit})", self.name),
            _ => self.name.clone(),
        }
    }
}
