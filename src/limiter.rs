//! Minimum-interval throttle for outbound REST calls.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::debug;

/// Enforces a minimum delay between successive calls.
///
/// The limiter owns its own timestamp; there is no process-wide state.
/// Clones share the timestamp, so all requests from one client (and its
/// clones) serialize through the same gate. The lock is held across the
/// wait on purpose: a second caller arriving mid-sleep queues behind the
/// first instead of racing it.
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Waits until at least `min_interval` has elapsed since the previous
    /// acquisition, then records the new call time.
    pub async fn acquire(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!(wait_ms = wait.as_millis() as u64, "throttling request");
                sleep(wait).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            min_interval: self.min_interval,
            last_call: Arc::clone(&self.last_call),
        }
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("min_interval", &self.min_interval)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_acquire_does_not_wait() {
        let limiter = RateLimiter::new(Duration::from_millis(500));
        let start = Instant::now();
        limiter.acquire().await;
        assert!(
            start.elapsed() < Duration::from_millis(100),
            "first call must pass straight through"
        );
    }

    #[tokio::test]
    async fn back_to_back_acquires_are_spaced_by_the_interval() {
        let limiter = RateLimiter::new(Duration::from_millis(50));
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(
            start.elapsed() >= Duration::from_millis(50),
            "second call must wait out the interval"
        );
    }

    #[tokio::test]
    async fn clones_share_the_same_gate() {
        let limiter = RateLimiter::new(Duration::from_millis(50));
        let clone = limiter.clone();

        let start = Instant::now();
        limiter.acquire().await;
        clone.acquire().await;
        assert!(
            start.elapsed() >= Duration::from_millis(50),
            "clone must see the original's last call time"
        );
    }
}
