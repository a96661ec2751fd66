//! Submission backend for finished listings

mod simulated;
mod traits;

pub use simulated::{SimulatedBackend, DEFAULT_LATENCY};
pub use traits::{ListingBackend, SubmissionReceipt};

#[cfg(test)]
pub use traits::MockListingBackend;
