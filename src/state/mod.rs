//! Listing editor state

mod controller;
mod focus;
mod listing;
mod preview;
mod validation;

pub use controller::*;
pub use focus::*;
pub use listing::*;
pub use preview::*;
pub use validation::*;
