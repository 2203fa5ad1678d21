//! Static price guide backing the order estimator.
//!
//! Estimates are indicative only; the confirmed price is agreed over
//! WhatsApp. Category slugs missing from the guide fall back to a default
//! pair so the estimator never fails on studio-added categories.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::order::OrderType;

/// Unit and wholesale price for one category, in MXN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePair {
    pub unit: Decimal,
    pub wholesale: Decimal,
}

impl PricePair {
    /// Price to apply for the given order type.
    #[must_use]
    pub const fn for_order_type(self, order_type: OrderType) -> Decimal {
        match order_type {
            OrderType::Retail => self.unit,
            OrderType::Wholesale => self.wholesale,
        }
    }
}

/// Category-slug to price-pair mapping with a default for unknown slugs.
#[derive(Debug, Clone)]
pub struct PriceTable {
    entries: HashMap<String, PricePair>,
    default_pair: PricePair,
}

impl PriceTable {
    /// Build a table from explicit entries and a default pair.
    #[must_use]
    pub fn new(entries: HashMap<String, PricePair>, default_pair: PricePair) -> Self {
        Self {
            entries,
            default_pair,
        }
    }

    /// Look up the pair for a category slug, falling back to the default.
    #[must_use]
    pub fn lookup(&self, category_slug: &str) -> PricePair {
        self.entries
            .get(category_slug)
            .copied()
            .unwrap_or(self.default_pair)
    }
}

impl Default for PriceTable {
    /// The built-in guide for the four standing categories.
    fn default() -> Self {
        let pair = |unit: i64, wholesale: i64| PricePair {
            unit: Decimal::from(unit),
            wholesale: Decimal::from(wholesale),
        };
        let entries = HashMap::from([
            ("imanes".to_owned(), pair(45, 35)),
            ("llaveros".to_owned(), pair(55, 45)),
            ("destapadores".to_owned(), pair(65, 50)),
            ("portallaves".to_owned(), pair(120, 95)),
        ]);
        Self {
            entries,
            default_pair: pair(50, 40),
        }
    }
}
