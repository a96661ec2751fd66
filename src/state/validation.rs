//! Field validation for listing drafts
//!
//! Validation is advisory: errors are shown inline and gate submission,
//! they never stop the user from editing.

use super::listing::{Field, ListingDraft};
use std::collections::BTreeMap;
use thiserror::Error;

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 50;
/// Maximum description length in characters
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// A soft validation failure attached to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must be less than 50 characters")]
    TitleTooLong,
    #[error("Description must be less than 500 characters")]
    DescriptionTooLong,
    #[error("Price must be a number")]
    InvalidPrice,
}

/// Field-to-error mapping; a field without an entry is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    #[allow(dead_code)]
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    fn insert(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }
}

/// Parse a price the same way everywhere it is needed.
///
/// Unlike a plain `str::parse::<f64>`, this rejects non-finite results:
/// `"NaN"`, `"inf"` and `"1e400"` parse as floats but are not prices.
/// No trimming is applied.
pub fn parse_price(input: &str) -> Option<f64> {
    input.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Validate every field of the draft. All rules run on every call.
pub fn validate(draft: &ListingDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.title.chars().count() > TITLE_MAX_CHARS {
        errors.insert(Field::Title, ValidationError::TitleTooLong);
    }

    if draft.description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.insert(Field::Description, ValidationError::DescriptionTooLong);
    }

    if !draft.price.is_empty() && parse_price(&draft.price).is_none() {
        errors.insert(Field::Price, ValidationError::InvalidPrice);
    }

    errors
}
