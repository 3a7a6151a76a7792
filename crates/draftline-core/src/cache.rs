// Time-based cache entries. The clock is always passed in, so staleness is
// a pure function of the entry and `now`.

use chrono::{DateTime, Duration, Utc};

/// League metadata changes rarely during a draft.
pub const LEAGUE_TTL_SECS: i64 = 60 * 60;
/// Display names of league members.
pub const USERS_TTL_SECS: i64 = 5 * 60;
/// Pick history. A manual refresh inside this window reuses the cached list.
/// Must stay below the shortest refresh interval, or a timer tick that lands
/// a little early is served the previous tick's list as fresh.
pub const PICKS_TTL_SECS: i64 = 5;

/// A cached value with the time it was fetched and how long it stays fresh.
#[derive(Debug, Clone, PartialEq)]
pub struct Cached<T> {
    pub value: T,
    pub fetched_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl<T> Cached<T> {
    pub fn new(value: T, fetched_at: DateTime<Utc>, ttl: Duration) -> Self {
        Cached {
            value,
            fetched_at,
            ttl,
        }
    }

    /// True once `ttl` has elapsed since `fetched_at`.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at >= self.ttl
    }

    /// The value, if still fresh at `now`.
    pub fn fresh(&self, now: DateTime<Utc>) -> Option<&T> {
        if self.is_stale(now) {
            None
        } else {
            Some(&self.value)
        }
    }
}

/// How current the data behind a snapshot is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Fetched (or served from an unexpired cache entry) this cycle.
    Fresh,
    /// The fetch failed and an earlier value is being reused.
    Stale { fetched_at: DateTime<Utc> },
    /// The fetch failed and nothing was ever fetched.
    Unavailable,
}

impl Freshness {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Freshness::Fresh)
    }
}
