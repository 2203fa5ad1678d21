//! Raw records as the query API returns them.
//!
//! GROQ projections omit keys whose value is null, so every field here
//! tolerates absence. The conversion layer decides which fields a record
//! cannot do without.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Envelope around every query response.
#[derive(Debug, Deserialize)]
pub(super) struct QueryResponse<T> {
    pub result: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub wholesale_price: Option<Decimal>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<CategoryRefRecord>,
    #[serde(default)]
    pub images: Option<Vec<ImageRecord>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoryRefRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ImageRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CategoryRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TestimonialRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CtaRecord {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TrustIndicatorRecord {
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct HeroRecord {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub subheadline: Option<String>,
    #[serde(default)]
    pub cta_primary: Option<CtaRecord>,
    #[serde(default)]
    pub cta_secondary: Option<CtaRecord>,
    #[serde(default)]
    pub trust_indicators: Option<Vec<TrustIndicatorRecord>>,
    #[serde(default)]
    pub background_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StatRecord {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AboutRecord {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub paragraphs: Option<Vec<String>>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub stats: Option<Vec<StatRecord>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContactRecord {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SocialRecord {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AnnouncementRecord {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SiteSettingsRecord {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact: Option<ContactRecord>,
    #[serde(default)]
    pub social: Option<SocialRecord>,
    #[serde(default)]
    pub announcement: Option<AnnouncementRecord>,
}
