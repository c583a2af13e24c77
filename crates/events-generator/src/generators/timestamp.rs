//! Timestamp sampling within a window.

use chrono::{DateTime, Duration, Utc};
use events_core::Window;
use rand::Rng;

/// Sample a second-precision instant uniformly within the window.
///
/// A degenerate window (start >= end) yields the start bound.
pub fn sample_in_window<R: Rng>(rng: &mut R, window: &Window) -> DateTime<Utc> {
    let start = window.start.timestamp();
    let end = window.end.timestamp();

    let secs = if start >= end {
        start
    } else {
        rng.random_range(start..=end)
    };
    DateTime::from_timestamp(secs, 0).unwrap_or(window.start)
}

/// Push an instant forward by a uniform 0..=max_secs whole seconds.
pub fn jitter<R: Rng>(rng: &mut R, instant: DateTime<Utc>, max_secs: i64) -> DateTime<Utc> {
    instant + Duration::seconds(rng.random_range(0..=max_secs))
}
