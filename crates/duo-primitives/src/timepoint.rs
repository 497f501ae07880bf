//! `TimePoint`: an unsigned count of nanoseconds since the Unix epoch,
//! monotonically non-decreasing along the TimeChain.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Nanoseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimePoint(u64);

impl TimePoint {
    /// Wrap a raw nanosecond count.
    pub const fn from_nanos(nanos: u64) -> Self {
        TimePoint(nanos)
    }

    /// The current wall-clock time, as nanoseconds since the epoch.
    pub fn now() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_nanos() as u64;
        TimePoint(nanos)
    }

    /// Raw nanosecond count.
    pub const fn as_nanos(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimePoint({}ns)", self.0)
    }
}

impl From<u64> for TimePoint {
    fn from(nanos: u64) -> Self {
        TimePoint(nanos)
    }
}

impl From<TimePoint> for u64 {
    fn from(t: TimePoint) -> Self {
        t.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_nanos() {
        let a = TimePoint::from_nanos(10);
        let b = TimePoint::from_nanos(20);
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn now_is_plausible() {
        // Sanity bound: comfortably after this crate was written.
        assert!(TimePoint::now().as_nanos() > 1_700_000_000_000_000_000);
    }

    #[test]
    fn roundtrip_through_u64() {
        let t = TimePoint::from_nanos(123_456_789);
        let raw: u64 = t.into();
        assert_eq!(raw, 123_456_789);
        assert_eq!(TimePoint::from(raw), t);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(TimePoint::default().as_nanos(), 0);
    }
}
