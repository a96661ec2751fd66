//! Listing draft and the enums that drive the preview

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by the string-keyed entry points of the listing model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("unknown listing field: {0}")]
    UnknownField(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Editable fields of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    Price,
    ImageUrl,
    Category,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Price,
        Field::ImageUrl,
        Field::Category,
    ];

    /// External name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Price => "price",
            Self::ImageUrl => "imageUrl",
            Self::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Price => "Price",
            Self::ImageUrl => "Image URL",
            Self::Category => "Category",
        }
    }

    /// Fields that must be non-empty before the listing can be submitted
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Title | Self::Description | Self::Price)
    }
}

impl FromStr for Field {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "price" => Ok(Self::Price),
            "imageUrl" | "image_url" => Ok(Self::ImageUrl),
            "category" => Ok(Self::Category),
            other => Err(ListingError::UnknownField(other.to_string())),
        }
    }
}

/// Marketplace category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Electronics,
    Clothing,
    HomeAndGarden,
    Sports,
    Books,
    Toys,
    Vehicles,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::Clothing,
        Category::HomeAndGarden,
        Category::Sports,
        Category::Books,
        Category::Toys,
        Category::Vehicles,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::HomeAndGarden => "Home & Garden",
            Self::Sports => "Sports",
            Self::Books => "Books",
            Self::Toys => "Toys",
            Self::Vehicles => "Vehicles",
            Self::Other => "Other",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let pos = self.position();
        if pos == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[pos - 1]
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ListingError::UnknownCategory(s.to_string()))
    }
}

/// Who the preview is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Seller,
    Buyer,
}

impl DisplayMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Seller => Self::Buyer,
            Self::Buyer => Self::Seller,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Seller => "Seller",
            Self::Buyer => "Buyer",
        }
    }

    /// Label of the submit button in this mode
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Seller => "Publish Listing",
            Self::Buyer => "Submit Listing",
        }
    }
}

/// Visual tier of the preview card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    #[default]
    Basic,
    Featured,
}

impl CardStyle {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Basic => Self::Featured,
            Self::Featured => Self::Basic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Featured => "Featured",
        }
    }
}

/// The in-progress listing, kept exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub category: Category,
}

impl ListingDraft {
    /// Text value of a field (the category label for `Field::Category`)
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Price => &self.price,
            Field::ImageUrl => &self.image_url,
            Field::Category => self.category.label(),
        }
    }

    /// Replace one field. Only the category can be rejected.
    pub fn set(&mut self, field: Field, value: String) -> Result<(), ListingError> {
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
            Field::Price => self.price = value,
            Field::ImageUrl => self.image_url = value,
            Field::Category => self.category = value.parse()?,
        }
        Ok(())
    }

    /// Whether every required field has some input
    pub fn has_required_fields(&self) -> bool {
        Field::ALL
            .iter()
            .filter(|f| f.is_required())
            .all(|f| !self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field {
        use super::*;

        #[test]
        fn test_parses_external_names() {
            assert_eq!("title".parse::<Field>(), Ok(Field::Title));
            assert_eq!("imageUrl".parse::<Field>(), Ok(Field::ImageUrl));
            assert_eq!("image_url".parse::<Field>(), Ok(Field::ImageUrl));
            assert_eq!("category".parse::<Field>(), Ok(Field::Category));
        }

        #[test]
        fn test_unknown_name_is_rejected() {
            assert_eq!(
                "seller".parse::<Field>(),
                Err(ListingError::UnknownField("seller".to_string()))
            );
        }

        #[test]
        fn test_name_round_trips() {
            for field in Field::ALL {
                assert_eq!(field.name().parse::<Field>(), Ok(field));
            }
        }

        #[test]
        fn test_required_fields() {
            assert!(Field::Title.is_required());
            assert!(Field::Description.is_required());
            assert!(Field::Price.is_required());
            assert!(!Field::ImageUrl.is_required());
            assert!(!Field::Category.is_required());
        }
    }

    mod category {
        use super::*;

        #[test]
        fn test_default_is_electronics() {
            assert_eq!(Category::default(), Category::Electronics);
        }

        #[test]
        fn test_parse_is_case_insensitive() {
            assert_eq!("home & garden".parse::<Category>(), Ok(Category::HomeAndGarden));
            assert_eq!("BOOKS".parse::<Category>(), Ok(Category::Books));
        }

        #[test]
        fn test_unknown_category_is_rejected() {
            assert!(matches!(
                "Furniture".parse::<Category>(),
                Err(ListingError::UnknownCategory(_))
            ));
        }

        #[test]
        fn test_next_wraps() {
            assert_eq!(Category::Other.next(), Category::Electronics);
            assert_eq!(Category::Electronics.next(), Category::Clothing);
        }

        #[test]
        fn test_prev_wraps() {
            assert_eq!(Category::Electronics.prev(), Category::Other);
            assert_eq!(Category::Clothing.prev(), Category::Electronics);
        }
    }

    mod toggles {
        use super::*;

        #[test]
        fn test_display_mode_toggle() {
            assert_eq!(DisplayMode::Seller.toggle(), DisplayMode::Buyer);
            assert_eq!(DisplayMode::Buyer.toggle(), DisplayMode::Seller);
        }

        #[test]
        fn test_card_style_toggle() {
            assert_eq!(CardStyle::Basic.toggle(), CardStyle::Featured);
            assert_eq!(CardStyle::Featured.toggle(), CardStyle::Basic);
        }

        #[test]
        fn test_submit_label_depends_on_mode() {
            assert_ne!(
                DisplayMode::Seller.submit_label(),
                DisplayMode::Buyer.submit_label()
            );
        }

        #[test]
        fn test_modes_deserialize_lowercase() {
            let mode: DisplayMode = serde_json::from_str("\"buyer\"").unwrap();
            let style: CardStyle = serde_json::from_str("\"featured\"").unwrap();
            assert_eq!(mode, DisplayMode::Buyer);
            assert_eq!(style, CardStyle::Featured);
        }
    }

    mod draft {
        use super::*;

        #[test]
        fn test_set_replaces_only_one_field() {
            let mut draft = ListingDraft {
                title: "Desk".to_string(),
                description: "A desk".to_string(),
                ..Default::default()
            };
            draft.set(Field::Price, "100".to_string()).unwrap();
            assert_eq!(draft.title, "Desk");
            assert_eq!(draft.description, "A desk");
            assert_eq!(draft.price, "100");
        }

        #[test]
        fn test_price_keeps_partial_input() {
            let mut draft = ListingDraft::default();
            draft.set(Field::Price, "12.".to_string()).unwrap();
            assert_eq!(draft.get(Field::Price), "12.");
        }

        #[test]
        fn test_bad_category_leaves_draft_untouched() {
            let mut draft = ListingDraft::default();
            let result = draft.set(Field::Category, "Spaceships".to_string());
            assert!(result.is_err());
            assert_eq!(draft.category, Category::Electronics);
        }

        #[test]
        fn test_get_category_returns_label() {
            let draft = ListingDraft {
                category: Category::HomeAndGarden,
                ..Default::default()
            };
            assert_eq!(draft.get(Field::Category), "Home & Garden");
        }

        #[test]
        fn test_has_required_fields_ignores_image_url() {
            let draft = ListingDraft {
                title: "Desk".to_string(),
                description: "A desk".to_string(),
                price: "100".to_string(),
                ..Default::default()
            };
            assert!(draft.has_required_fields());
        }

        #[test]
        fn test_has_required_fields_false_when_price_empty() {
            let draft = ListingDraft {
                title: "Desk".to_string(),
                description: "A desk".to_string(),
                ..Default::default()
            };
            assert!(!draft.has_required_fields());
        }
    }
}
