//! Canned revision graphs, looked up by name.
use chrono::{DateTime, TimeZone, Utc};

use crate::{Fixture, MockRepo};

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &[
    "chain",
    "sparse-chain",
    "merge",
    "week-boundary",
    "cross-day",
    "cycle",
];

/// Look up a canned fixture.
///
/// - `chain`: A(1) → B(2) → C(3), hours apart on 2024-01-01.
/// - `sparse-chain`: A → u1 → u2 → C → u3 → E, with `u*` unmeasured.
/// - `merge`: two measured branches joined by a measured merge through
///   unmeasured commits.
/// - `week-boundary`: a chain running Sunday 2024-01-07 into Monday 2024-01-08.
/// - `cross-day`: two same-day pairs on consecutive days with parallel links.
/// - `cycle`: measured A and C around an unmeasured B ↔ D cycle.
#[must_use]
pub fn by_name(name: &str) -> Option<Fixture> {
    match name {
        "chain" => Some(
            MockRepo::new("repo")
                .measure("A", &[], at(1, 10), 1.0)
                .measure("B", &["A"], at(1, 12), 2.0)
                .measure("C", &["B"], at(1, 14), 3.0)
                .build(),
        ),
        "sparse-chain" => Some(
            MockRepo::new("repo")
                .measure("A", &[], at(1, 9), 10.0)
                .commit("u1", &["A"])
                .commit("u2", &["u1"])
                .measure("C", &["u2"], at(1, 15), 12.0)
                .commit("u3", &["C"])
                .measure("E", &["u3"], at(2, 9), 11.0)
                .build(),
        ),
        "merge" => Some(
            MockRepo::new("repo")
                .measure("base", &[], at(3, 8), 5.0)
                .commit("left-1", &["base"])
                .measure("left", &["left-1"], at(3, 10), 7.0)
                .commit("right-1", &["base"])
                .measure("right", &["right-1"], at(3, 11), 4.0)
                .commit("merge-1", &["left", "right"])
                .measure("merged", &["merge-1"], at(3, 16), 6.0)
                .build(),
        ),
        "week-boundary" => Some(
            MockRepo::new("repo")
                .measure("sun-1", &[], at(7, 20), 1.0)
                .measure("sun-2", &["sun-1"], at(7, 22), 2.0)
                .measure("mon-1", &["sun-2"], at(8, 1), 3.0)
                .measure("mon-2", &["mon-1"], at(8, 3), 4.0)
                .build(),
        ),
        "cross-day" => Some(
            MockRepo::new("repo")
                .measure("a1", &[], at(1, 10), 1.0)
                .measure("a2", &["a1"], at(1, 11), 3.0)
                .measure("b1", &["a1"], at(2, 10), 5.0)
                .measure("b2", &["a2", "b1"], at(2, 11), 7.0)
                .build(),
        ),
        "cycle" => Some(
            MockRepo::new("repo")
                .measure("A", &[], at(1, 1), 1.0)
                .commit("B", &["A", "D"])
                .commit("D", &["B"])
                .measure("C", &["D"], at(1, 2), 2.0)
                .build(),
        ),
        _ => None,
    }
}

/// 2024-01-`day` at `hour`:00 UTC.
fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
