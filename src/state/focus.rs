//! Focus navigation across the listing form

use super::listing::Field;

/// Focusable element of the listing form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Title,
    Description,
    Price,
    ImageUrl,
    Category,
    SubmitButton,
}

impl FormFocus {
    const ORDER: [FormFocus; 6] = [
        FormFocus::Title,
        FormFocus::Description,
        FormFocus::Price,
        FormFocus::ImageUrl,
        FormFocus::Category,
        FormFocus::SubmitButton,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[index - 1]
        }
    }

    /// The draft field under focus, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Title => Some(Field::Title),
            Self::Description => Some(Field::Description),
            Self::Price => Some(Field::Price),
            Self::ImageUrl => Some(Field::ImageUrl),
            Self::Category => Some(Field::Category),
            Self::SubmitButton => None,
        }
    }

    /// Whether typed characters go into a free-text field
    pub fn accepts_text(&self) -> bool {
        matches!(
            self,
            Self::Title | Self::Description | Self::Price | Self::ImageUrl
        )
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_title() {
        assert_eq!(FormFocus::default(), FormFocus::Title);
    }

    #[test]
    fn test_next_cycles_through_form() {
        let mut focus = FormFocus::Title;
        for _ in 0..6 {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::Title);
        assert_eq!(FormFocus::Category.next(), FormFocus::SubmitButton);
    }

    #[test]
    fn test_prev_wraps_to_submit_button() {
        assert_eq!(FormFocus::Title.prev(), FormFocus::SubmitButton);
        assert_eq!(FormFocus::Price.prev(), FormFocus::Description);
    }

    #[test]
    fn test_submit_button_has_no_field() {
        assert!(FormFocus::SubmitButton.field().is_none());
        assert_eq!(FormFocus::ImageUrl.field(), Some(Field::ImageUrl));
    }

    #[test]
    fn test_category_does_not_accept_text() {
        assert!(!FormFocus::Category.accepts_text());
        assert!(!FormFocus::SubmitButton.accepts_text());
        assert!(FormFocus::Price.accepts_text());
    }

    #[test]
    fn test_only_description_is_multiline() {
        assert!(FormFocus::Description.is_multiline());
        assert!(!FormFocus::Title.is_multiline());
    }
}
