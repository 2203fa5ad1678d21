//! GROQ queries for the studio's document types.
//!
//! Projections rename `_id` to plain fields, flatten slugs to strings, and
//! resolve image assets to their URLs so the raw records stay flat.

/// In-stock products, featured first, then newest.
pub const PRODUCTS: &str = r#"*[_type == "product" && inStock == true] | order(featured desc, _createdAt desc) {
  _id, name, "slug": slug.current, description, price, wholesalePrice,
  destination, featured, tags,
  "category": category->{ name, "slug": slug.current, color },
  "images": images[]{ "url": asset->url, alt }
}"#;

/// All categories by display order.
pub const CATEGORIES: &str = r#"*[_type == "category"] | order(order asc) {
  _id, name, "slug": slug.current, description, color, order,
  "imageUrl": image.asset->url
}"#;

/// Testimonials, featured first, then newest.
pub const TESTIMONIALS: &str = r#"*[_type == "testimonial"] | order(featured desc, _createdAt desc) {
  _id, name, role, quote, rating, featured,
  "avatarUrl": avatar.asset->url
}"#;

/// Blog posts, newest first.
pub const POSTS: &str = r#"*[_type == "post"] | order(publishedAt desc) {
  _id, title, "slug": slug.current, excerpt, publishedAt, featured, tags,
  "coverImageUrl": coverImage.asset->url
}"#;

/// The hero section singleton.
pub const HERO: &str = r#"*[_type == "heroSection"][0] {
  badge, headline, subheadline, ctaPrimary, ctaSecondary, trustIndicators,
  "backgroundImageUrl": backgroundImage.asset->url
}"#;

/// The about section singleton.
pub const ABOUT: &str = r#"*[_type == "aboutSection"][0] {
  badge, headline, paragraphs, quote, stats,
  "imageUrl": image.asset->url
}"#;

/// The site settings singleton.
pub const SITE_SETTINGS: &str = r#"*[_type == "siteSettings"][0] {
  siteName, tagline, description, contact, social, announcement
}"#;
