use chrono::{DateTime, Datelike, Utc};
use revgraph_types::BucketSize;

const DAY: i64 = 86_400;

/// Days since the Unix epoch of the Thursday in the ISO week containing `day`.
///
/// 1970-01-01 is a Thursday, so `(day + 3) mod 7` is the weekday counted from
/// Monday = 0.
const fn iso_thursday_day(day: i64) -> i64 {
    day - (day + 3).rem_euclid(7) + 3
}

/// ISO-8601 week-year and week number of `ts`.
///
/// The week belongs to the year of its Thursday; the week number counts the
/// Thursday's day of year in whole weeks from January 1.
fn iso_week_of(ts: DateTime<Utc>) -> (i32, u32) {
    let day = ts.timestamp().div_euclid(DAY);
    match DateTime::from_timestamp(iso_thursday_day(day) * DAY, 0) {
        Some(thursday) => (thursday.year(), thursday.ordinal0() / 7 + 1),
        // Only reachable within three days of the representable range.
        None => {
            let w = ts.iso_week();
            (w.year(), w.week())
        }
    }
}

/// Map a timestamp to the key of its calendar bucket, using UTC fields only.
///
/// - `Day`: `YYYY-MM-DD`
/// - `Week`: ISO-8601 week, `YYYY-Www` (the week-year may differ from the
///   calendar year around January 1)
/// - `Month`: `YYYY-MM`
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use revgraph_core::{bucket_key, BucketSize};
///
/// let ts = Utc.with_ymd_and_hms(2024, 2, 3, 10, 0, 0).unwrap();
/// assert_eq!(bucket_key(ts, BucketSize::Day), "2024-02-03");
/// assert_eq!(bucket_key(ts, BucketSize::Week), "2024-W05");
/// assert_eq!(bucket_key(ts, BucketSize::Month), "2024-02");
///
/// // Sunday 2023-01-01 belongs to the last ISO week of 2022.
/// let ts = Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(bucket_key(ts, BucketSize::Week), "2022-W52");
/// ```
#[must_use]
pub fn bucket_key(ts: DateTime<Utc>, size: BucketSize) -> String {
    match size {
        BucketSize::Day => format!("{:04}-{:02}-{:02}", ts.year(), ts.month(), ts.day()),
        BucketSize::Week => {
            let (year, week) = iso_week_of(ts);
            format!("{year:04}-W{week:02}")
        }
        BucketSize::Month => format!("{:04}-{:02}", ts.year(), ts.month()),
    }
}
