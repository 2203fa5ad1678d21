//! Catalog filtering, search, and sorting.
//!
//! The visible product set is a pure function of the full product list and the
//! user's filter state. Handlers recompute the whole pipeline on every request
//! instead of patching previous results, so the set can never drift from its
//! inputs.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// Category selection meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

// =============================================================================
// Sort modes
// =============================================================================

/// Sort order for catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Featured products first; ties keep their incoming order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    /// Spanish-collation name order.
    Name,
}

impl SortMode {
    /// Parse from a query-string value. Returns `None` for unknown input so
    /// callers can fall back to the default explicitly.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "featured" => Some(Self::Featured),
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "name" => Some(Self::Name),
            _ => None,
        }
    }

    /// Canonical query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Name => "name",
        }
    }
}

// =============================================================================
// Filter state
// =============================================================================

/// User-controlled filter state for one catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Selected category slug; `None` means every category.
    pub category_slug: Option<String>,
    /// Free-text needle matched against name, destination, and description.
    pub search: String,
    pub sort: SortMode,
}

impl CatalogFilter {
    /// Build from raw query-string values. `"all"`, empty, and missing
    /// category values all mean no category filter; unknown sort values fall
    /// back to [`SortMode::Featured`].
    #[must_use]
    pub fn from_params(category: Option<&str>, search: Option<&str>, sort: Option<&str>) -> Self {
        let category_slug = category
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
            .map(str::to_owned);
        Self {
            category_slug,
            search: search.unwrap_or_default().to_owned(),
            sort: sort.and_then(SortMode::parse).unwrap_or_default(),
        }
    }

    /// Whether any filter beyond the default sort is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category_slug.is_some() || !self.search.is_empty()
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Derive the visible result set: category filter, then text filter, then a
/// stable sort.
///
/// Products without a resolved category are excluded whenever a specific
/// category is selected. Missing optional fields never match the text filter
/// and never error.
#[must_use]
pub fn visible_products<'a>(products: &'a [Product], filter: &CatalogFilter) -> Vec<&'a Product> {
    let mut result: Vec<&Product> = products
        .iter()
        .filter(|p| match filter.category_slug.as_deref() {
            Some(selected) => p.category_slug() == Some(selected),
            None => true,
        })
        .collect();

    if !filter.search.is_empty() {
        let needle = filter.search.to_lowercase();
        result.retain(|p| matches_search(p, &needle));
    }

    match filter.sort {
        SortMode::Featured => result.sort_by_key(|p| !p.featured),
        SortMode::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::Name => result.sort_by(|a, b| spanish_cmp(&a.name, &b.name)),
    }

    result
}

fn matches_search(product: &Product, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(&product.name)
        || product.destination.as_deref().is_some_and(contains)
        || contains(&product.description)
}

// =============================================================================
// Spanish collation
// =============================================================================

/// Compare two strings with Spanish collation rules.
///
/// Diacritics fold to their base letters ("Ángel" sorts with "Angel") and `ñ`
/// ranks between `n` and `o`. Case-insensitive, with a plain byte comparison
/// as the final tie-break so names that fold identically still have a total
/// order.
#[must_use]
pub fn spanish_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().flat_map(char::to_lowercase).map(collation_weight);
    let mut right = b.chars().flat_map(char::to_lowercase).map(collation_weight);
    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => match l.cmp(&r) {
                Ordering::Equal => {}
                other => return other,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return a.cmp(b),
        }
    }
}

/// Per-character primary weight. Plain characters occupy even slots so `ñ`
/// can take the odd slot after `n`.
const fn collation_weight(c: char) -> u32 {
    let folded = match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => return 'n' as u32 * 2 + 1,
        other => other,
    };
    folded as u32 * 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    fn products() -> Vec<Product> {
        fallback::catalog_products()
    }

    #[test]
    fn test_default_filter_returns_everything() {
        let products = products();
        let result = visible_products(&products, &CatalogFilter::default());
        assert_eq!(result.len(), products.len());
    }

    #[test]
    fn test_default_filter_puts_featured_first() {
        let products = products();
        let result = visible_products(&products, &CatalogFilter::default());
        let first_regular = result
            .iter()
            .position(|p| !p.featured)
            .unwrap_or(result.len());
        assert!(
            result.iter().skip(first_regular).all(|p| !p.featured),
            "featured products must precede every non-featured product"
        );
    }

    #[test]
    fn test_featured_sort_keeps_source_order_within_groups() {
        let products = products();
        let result = visible_products(&products, &CatalogFilter::default());
        let positions_of = |featured: bool| -> Vec<usize> {
            result
                .iter()
                .filter(|p| p.featured == featured)
                .map(|p| products.iter().position(|q| q.id == p.id).unwrap_or(0))
                .collect()
        };
        for group in [positions_of(true), positions_of(false)] {
            assert!(group.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_category_filter_keeps_only_matching_products() {
        let products = products();
        let filter = CatalogFilter {
            category_slug: Some("llaveros".to_owned()),
            ..CatalogFilter::default()
        };
        let result = visible_products(&products, &filter);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|p| p.category_slug() == Some("llaveros")));
    }

    #[test]
    fn test_category_filter_excludes_products_without_category() {
        let mut products = products();
        if let Some(first) = products.first_mut() {
            first.category = None;
        }
        let filter = CatalogFilter {
            category_slug: Some("imanes".to_owned()),
            ..CatalogFilter::default()
        };
        let result = visible_products(&products, &filter);
        assert!(result.iter().all(|p| p.category.is_some()));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_search_is_case_and_accent_exact_substring() {
        let products = products();
        let filter = CatalogFilter {
            search: "cancún".to_owned(),
            ..CatalogFilter::default()
        };
        let result = visible_products(&products, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].destination.as_deref(), Some("Cancún"));

        let upper = CatalogFilter {
            search: "CANCÚN".to_owned(),
            ..CatalogFilter::default()
        };
        assert_eq!(visible_products(&products, &upper).len(), 1);
    }

    #[test]
    fn test_search_matches_name_destination_or_description() {
        let products = products();
        let filter = CatalogFilter {
            search: "agave".to_owned(),
            ..CatalogFilter::default()
        };
        let result = visible_products(&products, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "destapador-tequila");

        for needle in ["agave", "tequila"] {
            let filter = CatalogFilter {
                search: needle.to_owned(),
                ..CatalogFilter::default()
            };
            for p in visible_products(&products, &filter) {
                let haystacks = [
                    p.name.to_lowercase(),
                    p.destination.clone().unwrap_or_default().to_lowercase(),
                    p.description.to_lowercase(),
                ];
                assert!(haystacks.iter().any(|h| h.contains(needle)));
            }
        }
    }

    #[test]
    fn test_search_with_no_match_yields_empty_set() {
        let products = products();
        let filter = CatalogFilter {
            search: "acapulco".to_owned(),
            ..CatalogFilter::default()
        };
        assert!(visible_products(&products, &filter).is_empty());
    }

    #[test]
    fn test_price_sorts_are_exact_reverses() {
        let products = products();
        let asc = CatalogFilter {
            sort: SortMode::PriceAsc,
            ..CatalogFilter::default()
        };
        let desc = CatalogFilter {
            sort: SortMode::PriceDesc,
            ..CatalogFilter::default()
        };
        let asc_prices: Vec<_> = visible_products(&products, &asc)
            .iter()
            .map(|p| p.price)
            .collect();
        let mut desc_prices: Vec<_> = visible_products(&products, &desc)
            .iter()
            .map(|p| p.price)
            .collect();
        assert!(asc_prices.windows(2).all(|w| w[0] <= w[1]));
        desc_prices.reverse();
        assert_eq!(asc_prices, desc_prices);
    }

    #[test]
    fn test_name_sort_uses_spanish_collation() {
        let products = products();
        let filter = CatalogFilter {
            sort: SortMode::Name,
            ..CatalogFilter::default()
        };
        let names: Vec<_> = visible_products(&products, &filter)
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert!(names.windows(2).all(|w| spanish_cmp(&w[0], &w[1]) != Ordering::Greater));
        // "Imán ..." folds to "iman ..." and must sort before "Llavero ...".
        let first_iman = names.iter().position(|n| n.starts_with("Imán"));
        let first_llavero = names.iter().position(|n| n.starts_with("Llavero"));
        assert!(first_iman < first_llavero);
    }

    #[test]
    fn test_spanish_cmp_folds_accents_and_ranks_enie() {
        assert_eq!(spanish_cmp("Ángel", "angosto"), Ordering::Less);
        assert_eq!(spanish_cmp("nino", "niño"), Ordering::Less);
        assert_eq!(spanish_cmp("niño", "noche"), Ordering::Less);
        assert_eq!(spanish_cmp("México", "mexico"), Ordering::Greater);
        assert_eq!(spanish_cmp("igual", "igual"), Ordering::Equal);
    }

    #[test]
    fn test_sort_mode_parse_round_trips() {
        for mode in [
            SortMode::Featured,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
            SortMode::Name,
        ] {
            assert_eq!(SortMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(SortMode::parse("newest"), None);
    }

    #[test]
    fn test_filter_from_params_normalizes_inputs() {
        let filter = CatalogFilter::from_params(Some("all"), None, Some("bogus"));
        assert_eq!(filter.category_slug, None);
        assert_eq!(filter.search, "");
        assert_eq!(filter.sort, SortMode::Featured);
        assert!(!filter.is_active());

        let filter = CatalogFilter::from_params(Some("imanes"), Some("oaxaca"), Some("name"));
        assert_eq!(filter.category_slug.as_deref(), Some("imanes"));
        assert_eq!(filter.sort, SortMode::Name);
        assert!(filter.is_active());
    }
}
