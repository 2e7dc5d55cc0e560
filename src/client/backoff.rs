//! Reconnect backoff schedule
//!
//! The delay schedule is a pure function of the previous delay, kept separate
//! from the transport so it can be tested without a network.

use std::time::Duration;

/// Connection state of the client transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// Backoff bounds: floor on first retry, doubling up to the ceiling
#[derive(Debug, Clone, Copy)]
pub struct BackoffConfig {
    pub floor: Duration,
    pub ceiling: Duration,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        // Same schedule as the original client: 1s doubling to 10s
        Self {
            floor: Duration::from_secs(1),
            ceiling: Duration::from_secs(10),
        }
    }
}

/// Next retry delay after a failure
pub fn next_delay(current: Duration, ceiling: Duration) -> Duration {
    (current * 2).min(ceiling)
}

/// Retry delay tracker driven by the connection state machine
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    config: BackoffConfig,
    current: Duration,
}

impl Backoff {
    pub fn new(config: BackoffConfig) -> Self {
        Self {
            config,
            current: config.floor,
        }
    }

    /// Delay to wait before the next attempt
    pub fn current_delay(&self) -> Duration {
        self.current
    }

    /// Record a failed attempt and grow the delay
    pub fn record_failure(&mut self) {
        self.current = next_delay(self.current, self.config.ceiling);
    }

    /// Record a successful handshake: delay resets to the floor
    pub fn record_success(&mut self) {
        self.current = self.config.floor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_delay_doubles_to_ceiling() {
        let ceiling = Duration::from_secs(10);
        let mut delay = Duration::from_secs(1);
        let mut seen = Vec::new();
        for _ in 0..6 {
            delay = next_delay(delay, ceiling);
            seen.push(delay.as_secs());
        }
        assert_eq!(seen, vec![2, 4, 8, 10, 10, 10]);
    }

    #[test]
    fn test_backoff_growth_is_monotonic() {
        let mut backoff = Backoff::new(BackoffConfig::default());
        let mut last = Duration::ZERO;
        for _ in 0..8 {
            let d = backoff.current_delay();
            assert!(d >= last);
            last = d;
            backoff.record_failure();
        }
        assert_eq!(backoff.current_delay(), Duration::from_secs(10));
    }

    #[test]
    fn test_success_resets_to_floor() {
        let mut backoff = Backoff::new(BackoffConfig::default());
        backoff.record_failure();
        backoff.record_failure();
        assert!(backoff.current_delay() > Duration::from_secs(1));

        backoff.record_success();
        assert_eq!(backoff.current_delay(), Duration::from_secs(1));
    }
}
