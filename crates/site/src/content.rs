//! Content access with built-in fallbacks.
//!
//! `ContentService` fronts the Sanity client and never fails: a fetch
//! error or an empty studio yields the built-in fallback data instead, so
//! every page renders with zero configuration. Posts are the one
//! exception - an empty blog is a normal state, not a gap to paper over.

use std::future::Future;

use axkan_core::{
    AboutSection, Category, HeroSection, Post, Product, SiteSettings, Testimonial, fallback,
};
use tracing::warn;

use crate::config::SanityConfig;
use crate::sanity::{SanityClient, SanityError};

/// Content provider backing every page.
///
/// Constructed without a client when no Sanity project is configured; the
/// site then serves fallback content exclusively.
#[derive(Clone)]
pub struct ContentService {
    client: Option<SanityClient>,
}

impl ContentService {
    /// Create the service, fallback-only when `config` is `None`.
    #[must_use]
    pub fn new(config: Option<&SanityConfig>) -> Self {
        Self {
            client: config.map(SanityClient::new),
        }
    }

    /// Catalog products, the sample catalog when the studio has none.
    pub async fn products(&self) -> Vec<Product> {
        self.fetch_list(
            "products",
            |c| async move { c.products().await },
            fallback::catalog_products,
        )
        .await
    }

    /// Categories in display order, the four built-in lines by default.
    pub async fn categories(&self) -> Vec<Category> {
        self.fetch_list(
            "categories",
            |c| async move { c.categories().await },
            fallback::catalog_categories,
        )
        .await
    }

    /// Testimonials for the homepage.
    pub async fn testimonials(&self) -> Vec<Testimonial> {
        self.fetch_list(
            "testimonials",
            |c| async move { c.testimonials().await },
            fallback::testimonials,
        )
        .await
    }

    /// Blog posts, newest first. No fallback: an empty list renders the
    /// blog's empty state.
    pub async fn posts(&self) -> Vec<Post> {
        let Some(client) = &self.client else {
            return Vec::new();
        };
        match client.posts().await {
            Ok(posts) => posts,
            Err(e) => {
                warn!(query = "posts", error = %e, "Content fetch failed, serving no posts");
                Vec::new()
            }
        }
    }

    /// Hero section content.
    pub async fn hero(&self) -> HeroSection {
        self.fetch_singleton("hero", |c| async move { c.hero().await }, fallback::hero)
            .await
    }

    /// About section content.
    pub async fn about(&self) -> AboutSection {
        self.fetch_singleton("about", |c| async move { c.about().await }, fallback::about)
            .await
    }

    /// Site-wide settings.
    pub async fn site_settings(&self) -> SiteSettings {
        self.fetch_singleton(
            "settings",
            |c| async move { c.site_settings().await },
            fallback::site_settings,
        )
        .await
    }

    async fn fetch_list<T, Fut>(
        &self,
        query: &'static str,
        fetch: impl FnOnce(SanityClient) -> Fut,
        fall: fn() -> Vec<T>,
    ) -> Vec<T>
    where
        Fut: Future<Output = Result<Vec<T>, SanityError>>,
    {
        let Some(client) = self.client.clone() else {
            return fall();
        };
        match fetch(client).await {
            Ok(items) => {
                if items.is_empty() {
                    return fall();
                }
                items
            }
            Err(e) => {
                warn!(query, error = %e, "Content fetch failed, serving fallback");
                fall()
            }
        }
    }

    async fn fetch_singleton<T, Fut>(
        &self,
        query: &'static str,
        fetch: impl FnOnce(SanityClient) -> Fut,
        fall: fn() -> T,
    ) -> T
    where
        Fut: Future<Output = Result<Option<T>, SanityError>>,
    {
        let Some(client) = self.client.clone() else {
            return fall();
        };
        match fetch(client).await {
            Ok(Some(value)) => value,
            Ok(None) => fall(),
            Err(e) => {
                warn!(query, error = %e, "Content fetch failed, serving fallback");
                fall()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_service_serves_fallback_catalog() {
        let service = ContentService::new(None);

        let products = service.products().await;
        let categories = service.categories().await;
        assert_eq!(products.len(), 8);
        assert_eq!(categories.len(), 4);
    }

    #[tokio::test]
    async fn test_unconfigured_service_serves_default_singletons() {
        let service = ContentService::new(None);

        let hero = service.hero().await;
        assert_eq!(hero.headline, "Recuerdos que sí importan");

        let settings = service.site_settings().await;
        assert_eq!(settings.site_name, "AXKAN");
    }

    #[tokio::test]
    async fn test_unconfigured_service_has_no_posts() {
        let service = ContentService::new(None);
        assert!(service.posts().await.is_empty());
    }
}
