//! Bounded exponential backoff for sink write retries

use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug)]
pub struct RetryBackoff {
    initial_delay_secs: u64,
    max_delay_secs: u64,
    max_retries: u32,
    current_attempt: u32,
}

#[derive(Debug)]
pub struct RetriesExhausted;

impl std::fmt::Display for RetriesExhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Maximum retry attempts exceeded")
    }
}

impl std::error::Error for RetriesExhausted {}

impl RetryBackoff {
    pub fn new(initial_secs: u64, max_secs: u64, retries: u32) -> Self {
        Self {
            initial_delay_secs: initial_secs,
            max_delay_secs: max_secs,
            max_retries: retries,
            current_attempt: 0,
        }
    }

    /// Default policy for sink writes: 1s doubling to at most 30s.
    pub fn for_sink(max_retries: u32) -> Self {
        Self::new(1, 30, max_retries)
    }

    /// Wait before the next attempt, or fail once the attempt budget is
    /// spent.
    pub async fn sleep(&mut self) -> Result<(), RetriesExhausted> {
        if self.current_attempt >= self.max_retries {
            return Err(RetriesExhausted);
        }

        let delay = std::cmp::min(
            self.initial_delay_secs * 2_u64.pow(self.current_attempt),
            self.max_delay_secs,
        );

        log::warn!(
            "⏳ Sink retry attempt {} of {} in {}s",
            self.current_attempt + 1,
            self.max_retries,
            delay
        );

        sleep(Duration::from_secs(delay)).await;
        self.current_attempt += 1;
        Ok(())
    }

    /// Reset after a successful write so later rows get a full budget.
    pub fn reset(&mut self) {
        self.current_attempt = 0;
    }
}
