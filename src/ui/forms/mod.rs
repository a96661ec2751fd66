//! Form rendering module
//!
//! - `field_renderer`: single field with inline error
//! - `listing_form`: the listing editor form

mod field_renderer;
mod listing_form;

pub use listing_form::draw_listing_form;
