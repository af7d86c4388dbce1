use std::collections::HashMap;

use chrono::{DateTime, Utc};
use revgraph_types::{Candle, Component, MetricPoint};

/// Running OHLC state for one component, fed in timestamp order.
struct CandleAgg {
    first_ts: DateTime<Utc>,
    last_ts: DateTime<Utc>,
    open: f64,
    close: f64,
    low: f64,
    high: f64,
}

impl CandleAgg {
    fn start(p: &MetricPoint) -> Self {
        Self {
            first_ts: p.ts,
            last_ts: p.ts,
            open: p.value,
            close: p.value,
            low: p.value,
            high: p.value,
        }
    }

    fn push(&mut self, p: &MetricPoint) {
        self.last_ts = p.ts;
        self.close = p.value;
        self.low = self.low.min(p.value);
        self.high = self.high.max(p.value);
    }

    fn finish(self, component: &Component) -> Candle {
        Candle {
            bucket: component.bucket.clone(),
            component_id: component.component_id.clone(),
            x: self.first_ts + (self.last_ts - self.first_ts) / 2,
            open: self.open,
            close: self.close,
            low: self.low,
            high: self.high,
        }
    }
}

/// Placeholder for a component none of whose members resolve to a point.
fn empty_candle(component: &Component) -> Candle {
    Candle {
        bucket: component.bucket.clone(),
        component_id: component.component_id.clone(),
        x: DateTime::<Utc>::UNIX_EPOCH,
        open: 0.0,
        close: 0.0,
        low: 0.0,
        high: 0.0,
    }
}

/// Summarize each component as an OHLC candle.
///
/// Returns one candle per component, in the same order.
///
/// - Members are ordered by ascending timestamp; ties keep their order in `rev_ids`.
/// - Open  = value of the earliest member
/// - Close = value of the latest member
/// - Low / High = min / max value over all members
/// - `x` = midpoint between the earliest and latest member timestamps
///
/// Revision ids are looked up among `points`; when a revision id appears on
/// several points the last one wins. A component with no resolvable member
/// yields zeros at the Unix epoch.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use revgraph_core::{compute_candles, Component, MetricPoint};
///
/// let t = |s: i64| DateTime::<Utc>::from_timestamp(s, 0).unwrap();
/// let points = vec![
///     MetricPoint::new("r1", "A", t(3_600), 5.0),
///     MetricPoint::new("r1", "B", t(0), 2.0),
///     MetricPoint::new("r1", "C", t(7_200), 7.0),
/// ];
/// let component = Component {
///     bucket: "1970-01-01".into(),
///     component_id: "1970-01-01:1".into(),
///     rev_ids: vec!["A".into(), "B".into(), "C".into()],
/// };
/// let candles = compute_candles(&points, &[component]);
/// assert_eq!((candles[0].open, candles[0].close), (2.0, 7.0));
/// assert_eq!((candles[0].low, candles[0].high), (2.0, 7.0));
/// assert_eq!(candles[0].x, t(3_600));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "revgraph::timeseries::compute_candles",
        skip(points, components),
        fields(points = points.len(), components = components.len()),
    )
)]
#[must_use]
pub fn compute_candles(points: &[MetricPoint], components: &[Component]) -> Vec<Candle> {
    let point_by_rev: HashMap<&str, &MetricPoint> =
        points.iter().map(|p| (p.rev_id.as_str(), p)).collect();

    let mut members: Vec<&MetricPoint> = Vec::new();
    components
        .iter()
        .map(|component| {
            members.clear();
            members.extend(
                component
                    .rev_ids
                    .iter()
                    .filter_map(|rev| point_by_rev.get(rev.as_str()).copied()),
            );
            // Stable sort: equal timestamps keep member order.
            members.sort_by_key(|p| p.ts);

            let mut iter = members.iter();
            let Some(first) = iter.next() else {
                return empty_candle(component);
            };
            let mut agg = CandleAgg::start(first);
            for p in iter {
                agg.push(p);
            }
            agg.finish(component)
        })
        .collect()
}
