//! Fixed-window request limiting for geocoding providers.

use std::time::{Duration, Instant};

/// Allows at most `limit` requests per `window`.
///
/// The window opens on the first request after the previous one expired;
/// it does not slide.
#[derive(Debug, Clone)]
pub struct FixedWindow {
    limit: u32,
    window: Duration,
    requests: u32,
    resets_at: Option<Instant>,
}

impl FixedWindow {
    #[must_use]
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            requests: 0,
            resets_at: None,
        }
    }

    /// Record a request at `now`.
    ///
    /// Returns `Err` with the time left in the current window when the limit
    /// has been reached.
    pub fn try_acquire(&mut self, now: Instant) -> Result<(), Duration> {
        let expired = self.resets_at.is_none_or(|resets_at| now >= resets_at);
        if expired {
            self.requests = 0;
            self.resets_at = Some(now + self.window);
        }

        if self.requests >= self.limit {
            let remaining = self
                .resets_at
                .map_or(Duration::ZERO, |resets_at| resets_at.saturating_duration_since(now));
            return Err(remaining);
        }

        self.requests += 1;
        Ok(())
    }
}

impl Default for FixedWindow {
    /// One request per second.
    fn default() -> Self {
        Self::new(1, Duration::from_millis(1000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_is_allowed() {
        let mut limiter = FixedWindow::default();
        assert!(limiter.try_acquire(Instant::now()).is_ok());
    }

    #[test]
    fn second_request_in_window_is_rejected() {
        let mut limiter = FixedWindow::default();
        let start = Instant::now();
        limiter.try_acquire(start).unwrap();

        let remaining = limiter
            .try_acquire(start + Duration::from_millis(400))
            .unwrap_err();
        assert_eq!(remaining, Duration::from_millis(600));
    }

    #[test]
    fn window_resets_after_expiry() {
        let mut limiter = FixedWindow::default();
        let start = Instant::now();
        limiter.try_acquire(start).unwrap();
        assert!(limiter.try_acquire(start + Duration::from_millis(999)).is_err());
        assert!(limiter.try_acquire(start + Duration::from_millis(1000)).is_ok());
    }

    #[test]
    fn limit_counts_requests_per_window() {
        let mut limiter = FixedWindow::new(3, Duration::from_secs(60));
        let now = Instant::now();
        for _ in 0..3 {
            assert!(limiter.try_acquire(now).is_ok());
        }
        assert!(limiter.try_acquire(now).is_err());
    }
}
