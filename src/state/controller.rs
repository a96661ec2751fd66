//! Listing editor controller
//!
//! Owns the draft, the preview toggles and the submission lifecycle.
//! Validation is recomputed inside every edit so `errors()` always
//! reflects the latest draft; the preview is projected on read.

use super::listing::{CardStyle, DisplayMode, Field, ListingDraft, ListingError};
use super::preview::{PreviewProjector, PreviewView};
use super::validation::{validate, ValidationErrors};
use crate::submission::{ListingBackend, SubmissionReceipt};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// One-shot notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    Succeeded(SubmissionReceipt),
}

/// Per-session owner of the listing being edited
pub struct ListingController {
    draft: ListingDraft,
    errors: ValidationErrors,
    mode: DisplayMode,
    style: CardStyle,
    submission: SubmissionState,
    projector: PreviewProjector,
    backend: Arc<dyn ListingBackend>,
    completions_tx: mpsc::UnboundedSender<SubmissionReceipt>,
    completions_rx: mpsc::UnboundedReceiver<SubmissionReceipt>,
    pending: Option<JoinHandle<()>>,
}

impl ListingController {
    pub fn new(backend: Arc<dyn ListingBackend>, projector: PreviewProjector) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let draft = ListingDraft::default();
        let errors = validate(&draft);

        Self {
            draft,
            errors,
            mode: DisplayMode::default(),
            style: CardStyle::default(),
            submission: SubmissionState::default(),
            projector,
            backend,
            completions_tx,
            completions_rx,
            pending: None,
        }
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn style(&self) -> CardStyle {
        self.style
    }

    #[allow(dead_code)]
    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    /// Preview of the current draft as of today
    pub fn preview(&self) -> PreviewView {
        self.projector.project(&self.draft, self.mode, self.style)
    }

    /// Preview of the current draft as of a given render date
    #[allow(dead_code)]
    pub fn preview_on(&self, today: NaiveDate) -> PreviewView {
        self.projector
            .project_on(&self.draft, self.mode, self.style, today)
    }

    /// Replace one field of the draft and revalidate
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), ListingError> {
        self.draft.set(field, value.into())?;
        self.errors = validate(&self.draft);
        tracing::debug!(
            "Set {} ({} validation errors)",
            field.name(),
            self.errors.len()
        );
        Ok(())
    }

    /// Replace a field addressed by its external name (`title`, `imageUrl`, ...)
    #[allow(dead_code)]
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ListingError> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value)
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        tracing::debug!("Display mode: {}", mode.label());
        self.mode = mode;
    }

    pub fn set_style(&mut self, style: CardStyle) {
        tracing::debug!("Card style: {}", style.label());
        self.style = style;
    }

    /// No validation errors and every required field filled in
    pub fn is_submittable(&self) -> bool {
        self.errors.is_empty() && self.draft.has_required_fields()
    }

    /// Whether the submit control should be enabled right now
    pub fn can_submit(&self) -> bool {
        self.is_submittable() && !self.is_submitting()
    }

    /// Start a submission cycle.
    ///
    /// Returns false without touching any state when the draft is not
    /// submittable or a cycle is already in flight. Must be called from
    /// within a tokio runtime.
    pub fn submit(&mut self) -> bool {
        if self.is_submitting() {
            tracing::debug!("Ignoring submit: already submitting");
            return false;
        }
        if !self.is_submittable() {
            tracing::debug!("Ignoring submit: draft is not submittable");
            return false;
        }

        self.submission = SubmissionState::Submitting;
        tracing::info!("Submitting listing {:?}", self.draft.title);

        let backend = Arc::clone(&self.backend);
        let snapshot = self.draft.clone();
        let completions = self.completions_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            let receipt = backend.submit(snapshot).await;
            // The receiver only goes away with the controller itself
            let _ = completions.send(receipt);
        }));
        true
    }

    /// Drain finished submissions without blocking
    pub fn poll_events(&mut self) -> Vec<SubmissionEvent> {
        let mut events = Vec::new();
        while let Ok(receipt) = self.completions_rx.try_recv() {
            events.push(self.complete(receipt));
        }
        events
    }

    /// Wait for the in-flight submission to finish.
    ///
    /// Returns `None` right away when nothing is in flight.
    #[allow(dead_code)]
    pub async fn next_event(&mut self) -> Option<SubmissionEvent> {
        if !self.is_submitting() {
            return None;
        }
        let receipt = self.completions_rx.recv().await?;
        Some(self.complete(receipt))
    }

    fn complete(&mut self, receipt: SubmissionReceipt) -> SubmissionEvent {
        self.submission = SubmissionState::Idle;
        self.pending = None;
        tracing::info!("Listing submitted: {}", receipt.id);
        SubmissionEvent::Succeeded(receipt)
    }
}

impl Drop for ListingController {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            tracing::debug!("Discarding in-flight submission");
            handle.abort();
        }
    }
}
