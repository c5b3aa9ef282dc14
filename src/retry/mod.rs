use log::warn;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Fixed-count, fixed-delay retry for outbound calls
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Run `operation` until it succeeds or the retries are used up.
    /// The error of the last attempt is returned.
    pub async fn run<T, E, F, Fut>(&self, label: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut retries = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if self.should_retry(retries) => {
                    retries += 1;
                    warn!("Retry {}/{} for {}: {}", retries, self.max_retries, label, e);
                    self.apply_delay().await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn should_retry(&self, retries: u32) -> bool {
        retries < self.max_retries
    }

    async fn apply_delay(&self) {
        sleep(self.delay).await;
    }
}
