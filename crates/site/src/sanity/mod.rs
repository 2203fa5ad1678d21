//! Sanity content API client.
//!
//! # Architecture
//!
//! - GROQ queries over the Sanity HTTP query API
//! - Sanity is source of truth - NO local sync, direct API calls
//! - In-memory caching via `moka` for query responses (5 minute TTL)
//!
//! Raw records deserialize the studio's camelCase documents; a conversion
//! layer maps them onto `axkan-core` domain types. Image URLs are projected
//! in the queries themselves, so no asset reference resolution happens here.
//!
//! # Example
//!
//! ```rust,ignore
//! use axkan_site::sanity::SanityClient;
//!
//! let client = SanityClient::new(&config);
//!
//! let products = client.products().await?;
//! let hero = client.hero().await?;
//! ```

mod cache;
mod client;
mod conversions;
mod records;

pub mod queries;

pub use client::SanityClient;

use thiserror::Error;

/// Errors that can occur when querying the Sanity API.
#[derive(Debug, Error)]
pub enum SanityError {
    /// Transport-level request failure.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API responded with a non-success status.
    #[error("Sanity API returned HTTP {0}")]
    Status(u16),

    /// Response JSON could not be decoded.
    #[error("Bad response JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanity_error_display() {
        let err = SanityError::Status(401);
        assert_eq!(err.to_string(), "Sanity API returned HTTP 401");
    }
}
