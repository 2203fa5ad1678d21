//! Cache types for query API responses.

use axkan_core::{AboutSection, Category, HeroSection, Post, Product, SiteSettings, Testimonial};

/// Cached value types, one variant per query.
///
/// Singletons cache their absence too, so a missing studio document does
/// not re-query on every request.
#[derive(Debug, Clone)]
pub(super) enum CacheValue {
    Products(Vec<Product>),
    Categories(Vec<Category>),
    Testimonials(Vec<Testimonial>),
    Posts(Vec<Post>),
    Hero(Option<Box<HeroSection>>),
    About(Option<Box<AboutSection>>),
    Settings(Option<Box<SiteSettings>>),
}
