//! Trait abstraction for the submission backend to enable mocking in tests

use crate::state::ListingDraft;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Acknowledgement returned once a listing has been accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub title: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn for_draft(draft: &ListingDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            submitted_at: Utc::now(),
        }
    }
}

/// Where submitted listings go.
///
/// Submission has no failure path: every call resolves to a receipt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingBackend: Send + Sync {
    /// Submit a snapshot of the draft
    async fn submit(&self, draft: ListingDraft) -> SubmissionReceipt;
}
