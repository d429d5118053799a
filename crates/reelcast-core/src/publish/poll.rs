//! Poll policy: bounds the processing-status wait.

use std::time::Duration;

/// Bounded polling policy for container processing.
///
/// Pure data: the pipeline consumes it, so tests zero the interval and
/// count attempts through a scripted media service instead of waiting on
/// real time. There is no backoff and no cross-phase retry; this budget is
/// the protocol's only timeout safeguard.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Delay before each status poll.
    pub interval: Duration,

    /// Maximum number of polls before the attempt times out.
    pub max_attempts: u32,
}

impl PollPolicy {
    /// Default policy matching the media service's processing profile:
    /// 30 polls, 2 seconds apart, for an overall budget of one minute.
    pub fn default_graph() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 30,
        }
    }

    /// Total wall-clock budget this policy allows a single attempt.
    pub fn total_budget(&self) -> Duration {
        self.interval * self.max_attempts
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::default_graph()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_allows_one_minute() {
        let policy = PollPolicy::default_graph();
        assert_eq!(policy.interval, Duration::from_secs(2));
        assert_eq!(policy.max_attempts, 30);
        assert_eq!(policy.total_budget(), Duration::from_secs(60));
    }
}
