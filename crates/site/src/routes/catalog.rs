//! Catalog page handler.
//!
//! Filter state lives entirely in the query string (`categoria`, `q`,
//! `orden`), so every catalog view is a plain GET and filtered views stay
//! shareable links. The visible set is recomputed from the full product list
//! on each request.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use axkan_core::catalog::{CatalogFilter, visible_products};
use axkan_core::format::group_thousands;
use axkan_core::whatsapp;
use axkan_core::{AccentColor, Category, Product, ProductImage, SiteSettings};

use crate::filters;
use crate::state::AppState;

/// Pre-filled WhatsApp message for the custom-design banner.
const CUSTOM_DESIGN_MESSAGE: &str = "Hola! Me interesa un diseño personalizado";

// =============================================================================
// View data
// =============================================================================

/// One category tab in the filter bar.
pub struct CategoryPillView {
    pub slug: String,
    pub name: String,
    /// Accent class suffix for the selected state.
    pub color: &'static str,
    pub selected: bool,
}

/// One product card in the results grid.
pub struct ProductCardView {
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Grouped retail price, without the `$`.
    pub price: String,
    /// Caption under the placeholder art when the product has no image.
    pub destination: String,
    pub featured: bool,
    /// Accent class suffix for the card header and category chip.
    pub color: &'static str,
    /// Chip text; `None` when the category reference did not resolve.
    pub category_name: Option<String>,
    pub image: Option<ProductImage>,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub settings: SiteSettings,
    pub base_url: String,
    pub pills: Vec<CategoryPillView>,
    /// Selected category slug, empty when every category shows.
    pub category: String,
    pub all_selected: bool,
    pub search: String,
    pub sort: &'static str,
    pub products: Vec<ProductCardView>,
    pub result_count: usize,
    pub result_word: &'static str,
    pub custom_design_url: String,
}

fn category_pills(categories: &[Category], filter: &CatalogFilter) -> Vec<CategoryPillView> {
    categories
        .iter()
        .map(|category| CategoryPillView {
            slug: category.slug.clone(),
            name: category.name.clone(),
            color: category.color.as_str(),
            selected: filter.category_slug.as_deref() == Some(category.slug.as_str()),
        })
        .collect()
}

fn product_card(product: &Product) -> ProductCardView {
    let color = product
        .category
        .as_ref()
        .map_or(AccentColor::Magenta, |c| c.color)
        .as_str();
    let image = product.images.first().map(|img| ProductImage {
        url: img.url.clone(),
        alt: if img.alt.trim().is_empty() {
            product.name.clone()
        } else {
            img.alt.clone()
        },
    });

    ProductCardView {
        name: product.name.clone(),
        slug: product.slug.clone(),
        description: product.description.clone(),
        price: group_thousands(product.price),
        destination: product.destination.clone().unwrap_or_default(),
        featured: product.featured,
        color,
        category_name: product.category.as_ref().map(|c| c.name.clone()),
        image,
    }
}

const fn result_word(count: usize) -> &'static str {
    if count == 1 {
        "producto encontrado"
    } else {
        "productos encontrados"
    }
}

// =============================================================================
// Handler
// =============================================================================

/// Catalog query parameters. All optional; anything unrecognized falls back
/// to the unfiltered default instead of erroring.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub categoria: Option<String>,
    pub q: Option<String>,
    pub orden: Option<String>,
}

/// Display the catalog, filtered and sorted per the query string.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> CatalogTemplate {
    let filter = CatalogFilter::from_params(
        query.categoria.as_deref(),
        query.q.as_deref(),
        query.orden.as_deref(),
    );

    let settings = state.content().site_settings().await;
    let categories = state.content().categories().await;
    let products = state.content().products().await;

    let cards: Vec<ProductCardView> = visible_products(&products, &filter)
        .into_iter()
        .map(product_card)
        .collect();
    let result_count = cards.len();

    CatalogTemplate {
        settings,
        base_url: state.config().base_url.clone(),
        pills: category_pills(&categories, &filter),
        category: filter.category_slug.clone().unwrap_or_default(),
        all_selected: filter.category_slug.is_none(),
        search: filter.search.clone(),
        sort: filter.sort.as_str(),
        products: cards,
        result_count,
        result_word: result_word(result_count),
        custom_design_url: whatsapp::order_url(
            &state.config().whatsapp_number,
            CUSTOM_DESIGN_MESSAGE,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axkan_core::fallback;

    #[test]
    fn test_product_card_carries_category_color_and_chip() {
        let products = fallback::catalog_products();
        let llavero = products
            .iter()
            .find(|p| p.slug == "llavero-cdmx")
            .map(product_card);

        let Some(card) = llavero else {
            panic!("sample catalog must contain llavero-cdmx");
        };
        assert_eq!(card.color, "turquesa");
        assert_eq!(card.category_name.as_deref(), Some("Llaveros"));
        assert_eq!(card.price, "55");
        assert_eq!(card.destination, "CDMX");
    }

    #[test]
    fn test_product_card_without_category_falls_back_to_magenta() {
        let mut products = fallback::catalog_products();
        let Some(product) = products.first_mut() else {
            panic!("sample catalog must not be empty");
        };
        product.category = None;

        let card = product_card(product);
        assert_eq!(card.color, "magenta");
        assert_eq!(card.category_name, None);
    }

    #[test]
    fn test_product_card_image_alt_falls_back_to_name() {
        let mut products = fallback::catalog_products();
        let Some(product) = products.first_mut() else {
            panic!("sample catalog must not be empty");
        };
        product.images = vec![ProductImage {
            url: "https://cdn.sanity.io/images/x/production/a.webp".to_owned(),
            alt: "  ".to_owned(),
        }];

        let card = product_card(product);
        let Some(image) = card.image else {
            panic!("card must keep the first product image");
        };
        assert_eq!(image.alt, product.name);
    }

    #[test]
    fn test_pills_mark_only_the_selected_category() {
        let categories = fallback::catalog_categories();
        let filter = CatalogFilter::from_params(Some("destapadores"), None, None);

        let pills = category_pills(&categories, &filter);
        assert_eq!(pills.len(), 4);
        for pill in &pills {
            assert_eq!(pill.selected, pill.slug == "destapadores");
        }
    }

    #[test]
    fn test_no_pill_selected_when_every_category_shows() {
        let categories = fallback::catalog_categories();
        let filter = CatalogFilter::from_params(Some("all"), None, None);

        let pills = category_pills(&categories, &filter);
        assert!(pills.iter().all(|pill| !pill.selected));
    }

    #[test]
    fn test_result_word_pluralizes() {
        assert_eq!(result_word(0), "productos encontrados");
        assert_eq!(result_word(1), "producto encontrado");
        assert_eq!(result_word(8), "productos encontrados");
    }
}
