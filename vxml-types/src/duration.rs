//! Millisecond durations for timeouts, pauses and cache hints.
//!
//! VoiceXML takes durations in two shapes. Timeouts and pauses are time
//! designations (`"1500ms"`), which is what [`DurationMs`] displays as.
//! Cache hints (`maxage`, `maxstale`) are whole seconds; see
//! [`DurationMs::as_secs_rounded_up`]. In canonical JSON a duration is a
//! bare millisecond count.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A non-negative duration with millisecond precision.
///
/// ```
/// use vxml_types::DurationMs;
///
/// let pause = DurationMs::from_millis(1500);
/// assert_eq!(pause.to_string(), "1500ms");
/// assert_eq!(pause.as_secs_rounded_up(), 2);
/// assert_eq!(serde_json::to_string(&pause).unwrap(), "1500");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationMs(u64);

impl DurationMs {
    /// A duration of `ms` milliseconds.
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// A duration of `secs` seconds, saturating at `u64::MAX` milliseconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    /// Milliseconds.
    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// Seconds, rounded up: a non-zero duration never becomes `0`.
    pub const fn as_secs_rounded_up(&self) -> u64 {
        self.0.div_ceil(1000)
    }
}

impl From<Duration> for DurationMs {
    fn from(d: Duration) -> Self {
        Self(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

impl From<DurationMs> for Duration {
    fn from(d: DurationMs) -> Self {
        Duration::from_millis(d.0)
    }
}

impl fmt::Display for DurationMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_seconds_round_up() {
        assert_eq!(DurationMs::from_millis(0).as_secs_rounded_up(), 0);
        assert_eq!(DurationMs::from_millis(1).as_secs_rounded_up(), 1);
        assert_eq!(DurationMs::from_millis(500).as_secs_rounded_up(), 1);
        assert_eq!(DurationMs::from_secs(60).as_secs_rounded_up(), 60);
        assert_eq!(DurationMs::from_millis(60_001).as_secs_rounded_up(), 61);
        assert_eq!(DurationMs::from_millis(u64::MAX).as_secs_rounded_up(), u64::MAX / 1000 + 1);
    }

    #[test]
    fn time_designation() {
        assert_eq!(DurationMs::from_secs(8).to_string(), "8000ms");
        assert_eq!(DurationMs::from_millis(0).to_string(), "0ms");
    }

    #[test]
    fn std_duration_saturates() {
        let d = DurationMs::from(Duration::from_secs(u64::MAX));
        assert_eq!(d.as_millis(), u64::MAX);
        assert_eq!(Duration::from(DurationMs::from_millis(250)), Duration::from_millis(250));
    }
}
