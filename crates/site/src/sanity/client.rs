//! Sanity query API client implementation.
//!
//! Sends GROQ over the HTTP query API with `reqwest` 0.13. Responses are
//! cached with `moka`; content edits in the studio show up within the
//! cache window without a redeploy.

use std::sync::Arc;
use std::time::Duration;

use axkan_core::{AboutSection, Category, HeroSection, Post, Product, SiteSettings, Testimonial};
use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::SanityConfig;
use crate::sanity::SanityError;

use super::cache::CacheValue;
use super::conversions::{
    convert_about, convert_categories, convert_hero, convert_posts, convert_products,
    convert_site_settings, convert_testimonials,
};
use super::queries;
use super::records::{
    AboutRecord, CategoryRecord, HeroRecord, PostRecord, ProductRecord, QueryResponse,
    SiteSettingsRecord, TestimonialRecord,
};

/// How long a query result is reused before Sanity is asked again.
const CONTENT_TTL: Duration = Duration::from_secs(300);

// =============================================================================
// SanityClient
// =============================================================================

/// Client for the Sanity query API.
///
/// Provides typed access to products, categories, testimonials, posts, and
/// the page singletons. Every query result is cached for [`CONTENT_TTL`].
#[derive(Clone)]
pub struct SanityClient {
    inner: Arc<SanityClientInner>,
}

struct SanityClientInner {
    client: reqwest::Client,
    endpoint: String,
    token: Option<SecretString>,
    cache: Cache<String, CacheValue>,
}

/// First 500 chars of a response body, for logging.
fn body_excerpt(body: &str) -> String {
    body.chars().take(500).collect()
}

impl SanityClient {
    /// Create a new query API client.
    #[must_use]
    pub fn new(config: &SanityConfig) -> Self {
        let endpoint = format!(
            "https://{}.api.sanity.io/v{}/data/query/{}",
            config.project_id, config.api_version, config.dataset
        );

        Self {
            inner: Arc::new(SanityClientInner {
                client: reqwest::Client::new(),
                endpoint,
                token: config.token.clone(),
                cache: Cache::builder()
                    .max_capacity(64)
                    .time_to_live(CONTENT_TTL)
                    .build(),
            }),
        }
    }

    /// Execute a GROQ query and unwrap the response envelope.
    async fn execute<T: DeserializeOwned>(&self, query: &str) -> Result<T, SanityError> {
        let mut request = self
            .inner
            .client
            .get(&self.inner.endpoint)
            .query(&[("query", query)]);

        if let Some(token) = &self.inner.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        // Keep the raw body for error logs
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body_excerpt(&response_text),
                "Sanity query rejected"
            );
            return Err(SanityError::Status(status.as_u16()));
        }

        match serde_json::from_str::<QueryResponse<T>>(&response_text) {
            Ok(envelope) => Ok(envelope.result),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body_excerpt(&response_text),
                    "Sanity response did not match the expected shape"
                );
                Err(SanityError::Parse(e))
            }
        }
    }

    // =========================================================================
    // Catalog Queries
    // =========================================================================

    /// Get all in-stock products, featured first, then newest.
    ///
    /// # Errors
    ///
    /// Fails when the query request cannot be completed.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, SanityError> {
        let cache_key = "products";

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(cache_key).await {
            debug!("Serving cached products");
            return Ok(products);
        }

        let records: Option<Vec<ProductRecord>> = self.execute(queries::PRODUCTS).await?;
        let products = convert_products(records.unwrap_or_default());

        self.inner
            .cache
            .insert(cache_key.to_owned(), CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get all categories in display order.
    ///
    /// # Errors
    ///
    /// Fails when the query request cannot be completed.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, SanityError> {
        let cache_key = "categories";

        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(cache_key).await {
            debug!("Serving cached categories");
            return Ok(categories);
        }

        let records: Option<Vec<CategoryRecord>> = self.execute(queries::CATEGORIES).await?;
        let categories = convert_categories(records.unwrap_or_default());

        self.inner
            .cache
            .insert(
                cache_key.to_owned(),
                CacheValue::Categories(categories.clone()),
            )
            .await;

        Ok(categories)
    }

    // =========================================================================
    // Page Content Queries
    // =========================================================================

    /// Get testimonials, featured first, then newest.
    ///
    /// # Errors
    ///
    /// Fails when the query request cannot be completed.
    #[instrument(skip(self))]
    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, SanityError> {
        let cache_key = "testimonials";

        if let Some(CacheValue::Testimonials(testimonials)) =
            self.inner.cache.get(cache_key).await
        {
            debug!("Serving cached testimonials");
            return Ok(testimonials);
        }

        let records: Option<Vec<TestimonialRecord>> = self.execute(queries::TESTIMONIALS).await?;
        let testimonials = convert_testimonials(records.unwrap_or_default());

        self.inner
            .cache
            .insert(
                cache_key.to_owned(),
                CacheValue::Testimonials(testimonials.clone()),
            )
            .await;

        Ok(testimonials)
    }

    /// Get blog posts, newest first.
    ///
    /// # Errors
    ///
    /// Fails when the query request cannot be completed.
    #[instrument(skip(self))]
    pub async fn posts(&self) -> Result<Vec<Post>, SanityError> {
        let cache_key = "posts";

        if let Some(CacheValue::Posts(posts)) = self.inner.cache.get(cache_key).await {
            debug!("Serving cached posts");
            return Ok(posts);
        }

        let records: Option<Vec<PostRecord>> = self.execute(queries::POSTS).await?;
        let posts = convert_posts(records.unwrap_or_default());

        self.inner
            .cache
            .insert(cache_key.to_owned(), CacheValue::Posts(posts.clone()))
            .await;

        Ok(posts)
    }

    /// Get the hero section singleton, `None` when absent or incomplete.
    ///
    /// # Errors
    ///
    /// Fails when the query request cannot be completed.
    #[instrument(skip(self))]
    pub async fn hero(&self) -> Result<Option<HeroSection>, SanityError> {
        let cache_key = "hero";

        if let Some(CacheValue::Hero(hero)) = self.inner.cache.get(cache_key).await {
            debug!("Serving cached hero");
            return Ok(hero.map(|h| *h));
        }

        let record: Option<HeroRecord> = self.execute(queries::HERO).await?;
        let hero = record.and_then(convert_hero);

        self.inner
            .cache
            .insert(
                cache_key.to_owned(),
                CacheValue::Hero(hero.clone().map(Box::new)),
            )
            .await;

        Ok(hero)
    }

    /// Get the about section singleton, `None` when absent or incomplete.
    ///
    /// # Errors
    ///
    /// Fails when the query request cannot be completed.
    #[instrument(skip(self))]
    pub async fn about(&self) -> Result<Option<AboutSection>, SanityError> {
        let cache_key = "about";

        if let Some(CacheValue::About(about)) = self.inner.cache.get(cache_key).await {
            debug!("Serving cached about section");
            return Ok(about.map(|a| *a));
        }

        let record: Option<AboutRecord> = self.execute(queries::ABOUT).await?;
        let about = record.and_then(convert_about);

        self.inner
            .cache
            .insert(
                cache_key.to_owned(),
                CacheValue::About(about.clone().map(Box::new)),
            )
            .await;

        Ok(about)
    }

    /// Get the site settings singleton, `None` when absent or incomplete.
    ///
    /// # Errors
    ///
    /// Fails when the query request cannot be completed.
    #[instrument(skip(self))]
    pub async fn site_settings(&self) -> Result<Option<SiteSettings>, SanityError> {
        let cache_key = "settings";

        if let Some(CacheValue::Settings(settings)) = self.inner.cache.get(cache_key).await {
            debug!("Serving cached site settings");
            return Ok(settings.map(|s| *s));
        }

        let record: Option<SiteSettingsRecord> = self.execute(queries::SITE_SETTINGS).await?;
        let settings = record.and_then(convert_site_settings);

        self.inner
            .cache
            .insert(
                cache_key.to_owned(),
                CacheValue::Settings(settings.clone().map(Box::new)),
            )
            .await;

        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_endpoint_includes_project_version_and_dataset() {
        let config = SanityConfig {
            project_id: "a1b2c3d4".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            token: None,
        };
        let client = SanityClient::new(&config);
        assert_eq!(
            client.inner.endpoint,
            "https://a1b2c3d4.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_envelope_parses_list_result() {
        let json = r#"{
            "ms": 3,
            "query": "*",
            "result": [
                { "_id": "p1", "name": "Imán Oaxaca", "slug": "iman-oaxaca", "price": 45 }
            ]
        }"#;
        let envelope: QueryResponse<Option<Vec<ProductRecord>>> =
            serde_json::from_str(json).unwrap();
        let records = envelope.result.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, Some(Decimal::from(45)));
    }

    #[test]
    fn test_envelope_parses_null_singleton() {
        let json = r#"{ "ms": 1, "query": "*", "result": null }"#;
        let envelope: QueryResponse<Option<HeroRecord>> = serde_json::from_str(json).unwrap();
        assert!(envelope.result.is_none());
    }

    #[test]
    fn test_body_excerpt_caps_length() {
        let long = "x".repeat(2000);
        assert_eq!(body_excerpt(&long).len(), 500);
        assert_eq!(body_excerpt("corto"), "corto");
    }
}
