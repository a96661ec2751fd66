//! Preview projection: what the listing card shows for the current draft

use super::listing::{CardStyle, Category, DisplayMode, ListingDraft};
use super::validation::parse_price;
use chrono::{Local, NaiveDate};
use url::Url;

/// Image shown when an accepted URL fails to load at draw time
pub const FALLBACK_IMAGE_URL: &str = "https://placehold.co/600x400?text=Image+unavailable";

/// Shown in place of an empty title
pub const TITLE_PLACEHOLDER: &str = "Untitled listing";
/// Shown in place of an empty description
pub const DESCRIPTION_PLACEHOLDER: &str = "No description provided yet.";
/// Shown when the price text is not a number
pub const PRICE_UNAVAILABLE: &str = "Price unavailable";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];

/// Whether a URL looks like a displayable image.
///
/// The URL must be absolute and its path (query and fragment excluded) must
/// end in a known image extension. Parse failures simply mean "no".
pub fn is_acceptable_image(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    let last_segment = parsed.path().rsplit('/').next().unwrap_or_default();
    last_segment
        .rsplit_once('.')
        .map(|(_, ext)| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Where the card image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// The user-supplied URL, accepted by [`is_acceptable_image`]
    Remote(String),
    /// No usable URL; draw the placeholder graphic
    Placeholder,
    /// The remote image failed to load; use [`FALLBACK_IMAGE_URL`]
    Fallback,
}

impl ImageSource {
    /// Source to use once the renderer reports a load failure
    #[allow(dead_code)]
    pub fn on_load_failure(&self) -> Self {
        match self {
            Self::Remote(_) | Self::Fallback => Self::Fallback,
            Self::Placeholder => Self::Placeholder,
        }
    }

    /// URL to fetch, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Remote(url) => Some(url),
            Self::Fallback => Some(FALLBACK_IMAGE_URL),
            Self::Placeholder => None,
        }
    }
}

/// Badge rendered on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Category(Category),
    Featured,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Category(category) => category.label(),
            Self::Featured => "Featured",
        }
    }
}

/// Typography level for title and price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Typography {
    Standard,
    Prominent,
}

/// Mode-dependent element under the price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Buyer view: a "contact seller" call to action
    ContactSeller,
    /// Seller view: the date the preview was rendered
    PostedOn(NaiveDate),
}

/// Renderable description of the preview card
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub title: String,
    pub title_is_placeholder: bool,
    pub description: String,
    pub description_is_placeholder: bool,
    pub price: String,
    pub image: ImageSource,
    pub badges: Vec<Badge>,
    pub typography: Typography,
    pub affordance: Affordance,
}

impl PreviewView {
    #[allow(dead_code)]
    pub fn is_featured(&self) -> bool {
        self.badges.contains(&Badge::Featured)
    }
}

/// Builds [`PreviewView`]s using a fixed currency rule
#[derive(Debug, Clone)]
pub struct PreviewProjector {
    currency_symbol: String,
}

impl Default for PreviewProjector {
    fn default() -> Self {
        Self::new("$")
    }
}

impl PreviewProjector {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    #[allow(dead_code)]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Project the draft, stamping seller previews with today's date
    pub fn project(&self, draft: &ListingDraft, mode: DisplayMode, style: CardStyle) -> PreviewView {
        self.project_on(draft, mode, style, Local::now().date_naive())
    }

    /// Project the draft as of a given render date
    pub fn project_on(
        &self,
        draft: &ListingDraft,
        mode: DisplayMode,
        style: CardStyle,
        today: NaiveDate,
    ) -> PreviewView {
        let (title, title_is_placeholder) = text_or_placeholder(&draft.title, TITLE_PLACEHOLDER);
        let (description, description_is_placeholder) =
            text_or_placeholder(&draft.description, DESCRIPTION_PLACEHOLDER);

        let image = if is_acceptable_image(&draft.image_url) {
            ImageSource::Remote(draft.image_url.clone())
        } else {
            ImageSource::Placeholder
        };

        let mut badges = vec![Badge::Category(draft.category)];
        if style == CardStyle::Featured {
            badges.push(Badge::Featured);
        }

        let typography = match style {
            CardStyle::Basic => Typography::Standard,
            CardStyle::Featured => Typography::Prominent,
        };

        let affordance = match mode {
            DisplayMode::Buyer => Affordance::ContactSeller,
            DisplayMode::Seller => Affordance::PostedOn(today),
        };

        PreviewView {
            title,
            title_is_placeholder,
            description,
            description_is_placeholder,
            price: self.display_price(&draft.price),
            image,
            badges,
            typography,
            affordance,
        }
    }

    /// Display string for the raw price input
    pub fn display_price(&self, price: &str) -> String {
        if price.is_empty() {
            return self.format_price(0.0);
        }
        match parse_price(price) {
            Some(value) => self.format_price(value),
            None => PRICE_UNAVAILABLE.to_string(),
        }
    }

    /// Format an amount as `$1,234.50`: symbol prefix, comma thousands
    /// separators, two fraction digits.
    pub fn format_price(&self, value: f64) -> String {
        let fixed = format!("{:.2}", value.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let negative = value < 0.0 && fixed != "0.00";
        let sign = if negative { "-" } else { "" };
        format!("{sign}{}{grouped}.{fraction}", self.currency_symbol)
    }
}

fn text_or_placeholder(value: &str, placeholder: &str) -> (String, bool) {
    if value.is_empty() {
        (placeholder.to_string(), true)
    } else {
        (value.to_string(), false)
    }
}
