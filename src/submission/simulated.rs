//! Simulated remote submission
//!
//! Waits for a fixed latency and acknowledges the listing. Nothing is
//! persisted or sent over the network.

use super::traits::{ListingBackend, SubmissionReceipt};
use crate::state::ListingDraft;
use async_trait::async_trait;
use std::time::Duration;

/// Latency of a simulated submission (1.5 seconds)
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Backend that pretends to publish a listing
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    #[allow(dead_code)]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl ListingBackend for SimulatedBackend {
    async fn submit(&self, draft: ListingDraft) -> SubmissionReceipt {
        tracing::debug!(
            "Simulating submission of {:?} ({}ms)",
            draft.title,
            self.latency.as_millis()
        );
        tokio::time::sleep(self.latency).await;
        SubmissionReceipt::for_draft(&draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn draft() -> ListingDraft {
        ListingDraft {
            title: "Desk".to_string(),
            description: "A desk".to_string(),
            price: "100".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_latency_is_one_and_a_half_seconds() {
        assert_eq!(SimulatedBackend::default().latency(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_latency() {
        let backend = SimulatedBackend::default();
        let start = Instant::now();

        let receipt = backend.submit(draft()).await;

        assert!(start.elapsed() >= DEFAULT_LATENCY);
        assert_eq!(receipt.title, "Desk");
    }

    #[test]
    fn test_zero_latency_resolves_immediately() {
        let backend = SimulatedBackend::new(Duration::ZERO);
        let receipt = tokio_test::block_on(backend.submit(draft()));
        assert_eq!(receipt.title, "Desk");
    }

    #[test]
    fn test_receipts_have_unique_ids() {
        let first = SubmissionReceipt::for_draft(&draft());
        let second = SubmissionReceipt::for_draft(&draft());
        assert_ne!(first.id, second.id);
    }
}
