//! Configuration types shared by the engine and the report facade.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RevGraphError;

/// Calendar granularity used to bucket measured revisions into candles.
///
/// Buckets are always computed from UTC calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketSize {
    /// One bucket per UTC calendar day (`YYYY-MM-DD`).
    #[default]
    Day,
    /// One bucket per ISO-8601 week (`YYYY-Www`).
    Week,
    /// One bucket per UTC calendar month (`YYYY-MM`).
    Month,
}

impl BucketSize {
    /// All supported sizes, in ascending granularity.
    pub const ALL: [Self; 3] = [Self::Day, Self::Week, Self::Month];

    /// Lowercase name used in selections and serialized config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Map a loosely typed selection to a supported size, falling back to `Day`.
    ///
    /// ```
    /// use revgraph_types::BucketSize;
    /// assert_eq!(BucketSize::normalize(Some("month")), BucketSize::Month);
    /// assert_eq!(BucketSize::normalize(Some("year")), BucketSize::Day);
    /// assert_eq!(BucketSize::normalize(None), BucketSize::Day);
    /// ```
    #[must_use]
    pub fn normalize(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for BucketSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketSize {
    type Err = RevGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(RevGraphError::invalid_arg(format!(
                "unknown bucket size '{other}' (expected day, week or month)"
            ))),
        }
    }
}

/// How a report presents the measured revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One mark per measured revision, linked along minimal edges.
    #[default]
    Points,
    /// One OHLC candle per bucketed component, linked across components.
    Candles,
}

impl ViewMode {
    /// Lowercase name used in selections and serialized config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Candles => "candles",
        }
    }

    /// Map a loosely typed selection to a view mode; anything but `"candles"` is `Points`.
    #[must_use]
    pub fn normalize(value: Option<&str>) -> Self {
        match value {
            Some("candles") => Self::Candles,
            _ => Self::Points,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = RevGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points" => Ok(Self::Points),
            "candles" => Ok(Self::Candles),
            other => Err(RevGraphError::invalid_arg(format!(
                "unknown view mode '{other}' (expected points or candles)"
            ))),
        }
    }
}

/// Global configuration for a `revgraph` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Granularity used when rendering candles.
    pub bucket_size: BucketSize,
    /// Which view `render` produces.
    pub view_mode: ViewMode,
}
