//! Shared state handed to every route handler.

use std::sync::Arc;

use axkan_core::pricing::PriceTable;

use crate::config::SiteConfig;
use crate::content::ContentService;

/// Handler state: configuration, content service, and price guide behind
/// one `Arc`, cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    content: ContentService,
    prices: PriceTable,
}

impl AppState {
    /// Assemble state from loaded configuration.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let content = ContentService::new(config.sanity.as_ref());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                prices: PriceTable::default(),
            }),
        }
    }

    /// Site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Content service, Sanity-backed or fallback-only.
    #[must_use]
    pub fn content(&self) -> &ContentService {
        &self.inner.content
    }

    /// Price guide used for order estimates.
    #[must_use]
    pub fn prices(&self) -> &PriceTable {
        &self.inner.prices
    }
}
