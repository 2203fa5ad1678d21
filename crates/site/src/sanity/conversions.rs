//! Conversions from raw records to domain types.
//!
//! Records missing a field the domain cannot do without (a product without
//! a price, a post without a publish date) are skipped rather than failing
//! the whole query.

use axkan_core::{
    AboutSection, AccentColor, Announcement, Category, CategoryRef, ContactDetails, Cta,
    HeroSection, Post, Product, ProductImage, SiteSettings, SocialLinks, Stat, Testimonial,
    TrustIndicator,
};

use super::records::{
    AboutRecord, CategoryRecord, CategoryRefRecord, CtaRecord, HeroRecord, ImageRecord,
    PostRecord, ProductRecord, SiteSettingsRecord, StatRecord, TestimonialRecord,
    TrustIndicatorRecord,
};

pub(super) fn convert_products(records: Vec<ProductRecord>) -> Vec<Product> {
    records.into_iter().filter_map(convert_product).collect()
}

fn convert_product(record: ProductRecord) -> Option<Product> {
    let name = record.name?;
    let slug = record.slug?;
    let price = record.price?;

    Some(Product {
        id: record.id,
        name,
        slug,
        description: record.description.unwrap_or_default(),
        price,
        wholesale_price: record.wholesale_price,
        images: record
            .images
            .unwrap_or_default()
            .into_iter()
            .filter_map(convert_image)
            .collect(),
        destination: record.destination,
        featured: record.featured,
        // The products query filters to in-stock documents
        in_stock: true,
        tags: record.tags.unwrap_or_default(),
        category: record.category.and_then(convert_category_ref),
    })
}

fn convert_image(record: ImageRecord) -> Option<ProductImage> {
    Some(ProductImage {
        url: record.url?,
        alt: record.alt.unwrap_or_default(),
    })
}

fn convert_category_ref(record: CategoryRefRecord) -> Option<CategoryRef> {
    Some(CategoryRef {
        name: record.name?,
        slug: record.slug?,
        color: accent_color(record.color),
    })
}

pub(super) fn convert_categories(records: Vec<CategoryRecord>) -> Vec<Category> {
    records.into_iter().filter_map(convert_category).collect()
}

fn convert_category(record: CategoryRecord) -> Option<Category> {
    Some(Category {
        id: record.id,
        name: record.name?,
        slug: record.slug?,
        description: record.description.unwrap_or_default(),
        color: accent_color(record.color),
        image_url: record.image_url,
        order: record.order.unwrap_or(0),
    })
}

pub(super) fn convert_testimonials(records: Vec<TestimonialRecord>) -> Vec<Testimonial> {
    records.into_iter().filter_map(convert_testimonial).collect()
}

fn convert_testimonial(record: TestimonialRecord) -> Option<Testimonial> {
    Some(Testimonial {
        id: record.id,
        name: record.name?,
        role: record.role.unwrap_or_default(),
        quote: record.quote?,
        avatar_url: record.avatar_url,
        rating: record.rating.unwrap_or(5).clamp(1, 5),
        featured: record.featured,
    })
}

pub(super) fn convert_posts(records: Vec<PostRecord>) -> Vec<Post> {
    records.into_iter().filter_map(convert_post).collect()
}

fn convert_post(record: PostRecord) -> Option<Post> {
    Some(Post {
        id: record.id,
        title: record.title?,
        slug: record.slug?,
        excerpt: record.excerpt.unwrap_or_default(),
        cover_image_url: record.cover_image_url,
        published_at: record.published_at?,
        tags: record.tags.unwrap_or_default(),
        featured: record.featured,
    })
}

pub(super) fn convert_hero(record: HeroRecord) -> Option<HeroSection> {
    Some(HeroSection {
        badge: record.badge.unwrap_or_default(),
        headline: record.headline?,
        subheadline: record.subheadline.unwrap_or_default(),
        cta_primary: convert_cta(record.cta_primary).unwrap_or_else(|| Cta {
            text: "Explorar Catálogo".to_owned(),
            link: "/catalogo".to_owned(),
        }),
        cta_secondary: convert_cta(record.cta_secondary).unwrap_or_else(|| Cta {
            text: "Hacer Pedido".to_owned(),
            link: "/pedido".to_owned(),
        }),
        background_image_url: record.background_image_url,
        trust_indicators: record
            .trust_indicators
            .unwrap_or_default()
            .into_iter()
            .filter_map(convert_trust_indicator)
            .collect(),
    })
}

fn convert_cta(record: Option<CtaRecord>) -> Option<Cta> {
    let record = record?;
    Some(Cta {
        text: record.text?,
        link: record.link?,
    })
}

fn convert_trust_indicator(record: TrustIndicatorRecord) -> Option<TrustIndicator> {
    Some(TrustIndicator {
        emoji: record.emoji.unwrap_or_default(),
        text: record.text?,
    })
}

pub(super) fn convert_about(record: AboutRecord) -> Option<AboutSection> {
    Some(AboutSection {
        badge: record.badge.unwrap_or_default(),
        headline: record.headline?,
        paragraphs: record.paragraphs.unwrap_or_default(),
        quote: record.quote.unwrap_or_default(),
        image_url: record.image_url,
        stats: record
            .stats
            .unwrap_or_default()
            .into_iter()
            .filter_map(convert_stat)
            .collect(),
    })
}

fn convert_stat(record: StatRecord) -> Option<Stat> {
    Some(Stat {
        value: record.value?,
        label: record.label?,
    })
}

pub(super) fn convert_site_settings(record: SiteSettingsRecord) -> Option<SiteSettings> {
    let site_name = record.site_name?;

    let contact = record.contact.map_or_else(
        || ContactDetails {
            email: String::new(),
            phone: String::new(),
            whatsapp: String::new(),
            address: None,
        },
        |c| ContactDetails {
            email: c.email.unwrap_or_default(),
            phone: c.phone.unwrap_or_default(),
            whatsapp: c.whatsapp.unwrap_or_default(),
            address: c.address,
        },
    );

    let social = record.social.map_or_else(SocialLinks::default, |s| SocialLinks {
        instagram: s.instagram,
        facebook: s.facebook,
        tiktok: s.tiktok,
        twitter: s.twitter,
    });

    let announcement = record
        .announcement
        .map_or_else(Announcement::default, |a| Announcement {
            enabled: a.enabled.unwrap_or(false),
            text: a.text.unwrap_or_default(),
            link: a.link,
        });

    Some(SiteSettings {
        site_name,
        tagline: record.tagline.unwrap_or_default(),
        description: record.description.unwrap_or_default(),
        contact,
        social,
        announcement,
    })
}

fn accent_color(value: Option<String>) -> AccentColor {
    value
        .as_deref()
        .and_then(AccentColor::parse)
        .unwrap_or_default()
}
