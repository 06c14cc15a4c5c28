//! Fixed-delay pacing between remote calls.
//!
//! The export loop never inspects rate-limit headers; it waits a configured
//! amount between calls and nothing more. Keeping that wait behind a policy
//! object lets adaptive backoff replace it later without touching the loop.

use std::time::Duration;

/// Delay-before-next-call policy with a fixed duration.
#[derive(Clone, Copy, Debug)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    /// Create a policy that waits `delay` between calls.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait before the next remote call. A zero delay returns immediately.
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn zero_delay_does_not_sleep() {
        let pacing = Pacing::new(Duration::ZERO);
        let start = Instant::now();
        pacing.pause().await;
        assert!(start.elapsed() < Duration::from_millis(10));
    }

    #[test]
    fn pause_waits_at_least_the_configured_delay() {
        let pacing = Pacing::new(Duration::from_millis(20));
        let start = Instant::now();
        tokio_test::block_on(pacing.pause());
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn delay_is_observable() {
        let pacing = Pacing::new(Duration::from_millis(350));
        assert_eq!(pacing.delay(), Duration::from_millis(350));
    }
}
