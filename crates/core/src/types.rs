//! Content record types shared across the site.
//!
//! These mirror the documents authored in the content studio. The site crate
//! converts raw studio payloads into these types; the fallback datasets in
//! [`crate::fallback`] construct them directly.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Accent colors
// =============================================================================

/// Accent color tag assigned to a category.
///
/// The palette is fixed. Values outside it coming from the content source are
/// mapped to [`AccentColor::Magenta`], the brand primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Magenta,
    Verde,
    Naranja,
    Turquesa,
    Rojo,
}

impl AccentColor {
    /// Parse a studio color value. Returns `None` for unrecognized input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "magenta" => Some(Self::Magenta),
            "verde" => Some(Self::Verde),
            "naranja" => Some(Self::Naranja),
            "turquesa" => Some(Self::Turquesa),
            "rojo" => Some(Self::Rojo),
            _ => None,
        }
    }

    /// Canonical lowercase name, also used as the CSS class suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Magenta => "magenta",
            Self::Verde => "verde",
            Self::Naranja => "naranja",
            Self::Turquesa => "turquesa",
            Self::Rojo => "rojo",
        }
    }
}

// =============================================================================
// Catalog records
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// URL slug, unique across categories; also the price-guide key.
    pub slug: String,
    pub description: String,
    pub color: AccentColor,
    pub image_url: Option<String>,
    /// Explicit display order, ascending.
    pub order: i32,
}

/// Category summary resolved into a product.
///
/// Products whose reference did not resolve carry `None` and are excluded
/// from category-dependent rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub slug: String,
    pub color: AccentColor,
}

/// A product image with its alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub alt: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Retail price in MXN.
    pub price: Decimal,
    /// Wholesale price in MXN, when the studio sets one.
    pub wholesale_price: Option<Decimal>,
    pub images: Vec<ProductImage>,
    /// Destination the design depicts, e.g. "Oaxaca".
    pub destination: Option<String>,
    pub featured: bool,
    pub in_stock: bool,
    pub tags: Vec<String>,
    pub category: Option<CategoryRef>,
}

impl Product {
    /// Slug of the resolved category, if any.
    #[must_use]
    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.slug.as_str())
    }
}

// =============================================================================
// Passthrough content records
// =============================================================================

/// A customer testimonial shown on the homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub quote: String,
    pub avatar_url: Option<String>,
    /// 1-5 stars.
    pub rating: u8,
    pub featured: bool,
}

/// A blog post. Only listing fields are consumed; the body stays in the studio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub cover_image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub featured: bool,
}

/// A call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub text: String,
    pub link: String,
}

/// An emoji-prefixed trust indicator shown under the hero CTA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustIndicator {
    pub emoji: String,
    pub text: String,
}

/// Singleton hero section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSection {
    pub badge: String,
    pub headline: String,
    pub subheadline: String,
    pub cta_primary: Cta,
    pub cta_secondary: Cta,
    pub background_image_url: Option<String>,
    pub trust_indicators: Vec<TrustIndicator>,
}

/// A single statistic shown in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Singleton about section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub badge: String,
    pub headline: String,
    pub paragraphs: Vec<String>,
    pub quote: String,
    pub image_url: Option<String>,
    pub stats: Vec<Stat>,
}

/// Contact channels listed in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    /// WhatsApp number shown in the footer. The order hand-off uses the
    /// number from server configuration, not this field.
    pub whatsapp: String,
    pub address: Option<String>,
}

/// Social profile links; absent entries are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub tiktok: Option<String>,
    pub twitter: Option<String>,
}

/// Site-wide announcement bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub enabled: bool,
    pub text: String,
    pub link: Option<String>,
}

/// Singleton site settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_name: String,
    pub tagline: String,
    pub description: String,
    pub contact: ContactDetails,
    pub social: SocialLinks,
    pub announcement: Announcement,
}

// =============================================================================
// Slugs
// =============================================================================

/// Derive a URL slug from a display name.
///
/// Lowercases, folds Spanish diacritics to their base letters, collapses
/// every other non-alphanumeric run into a single hyphen, and trims hyphens
/// from both ends: `"Imán Cancún"` becomes `"iman-cancun"`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        let folded = match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        };
        if folded.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(folded);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_color_parses_known_values() {
        assert_eq!(AccentColor::parse("turquesa"), Some(AccentColor::Turquesa));
        assert_eq!(AccentColor::parse("rojo"), Some(AccentColor::Rojo));
        assert_eq!(AccentColor::parse("fucsia"), None);
        assert_eq!(AccentColor::parse(""), None);
    }

    #[test]
    fn test_accent_color_round_trips_through_as_str() {
        for color in [
            AccentColor::Magenta,
            AccentColor::Verde,
            AccentColor::Naranja,
            AccentColor::Turquesa,
            AccentColor::Rojo,
        ] {
            assert_eq!(AccentColor::parse(color.as_str()), Some(color));
        }
    }

    #[test]
    fn test_slugify_folds_diacritics() {
        assert_eq!(slugify("Imán Cancún"), "iman-cancun");
        assert_eq!(slugify("Diseño Ñandú"), "diseno-nandu");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Llavero   San Miguel de Allende "), "llavero-san-miguel-de-allende");
        assert_eq!(slugify("¡Ofertas! (2024)"), "ofertas-2024");
    }

    #[test]
    fn test_slugify_handles_empty_and_symbol_only_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("¡¿!?"), "");
    }
}
