//! The order draft accumulated across the three-step wizard.
//!
//! The wizard is a linear state machine: Productos (1) → Datos (2) →
//! Confirmar (3). Forward moves are guarded by per-step completeness
//! predicates and silently refused when the predicate fails; backward moves
//! are always allowed. Refusals are UI gating, not faults, so no operation
//! here returns an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::PriceTable;
use crate::types::Category;

// =============================================================================
// Order type
// =============================================================================

/// Retail vs. wholesale pricing for the whole draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Retail,
    Wholesale,
}

impl OrderType {
    /// Parse from a form value. Returns `None` for unknown input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "retail" => Some(Self::Retail),
            "wholesale" => Some(Self::Wholesale),
            _ => None,
        }
    }

    /// Canonical form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Wholesale => "wholesale",
        }
    }

    /// Customer-facing Spanish label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Retail => "Menudeo",
            Self::Wholesale => "Mayoreo",
        }
    }
}

// =============================================================================
// Wizard steps
// =============================================================================

/// Wizard position. Declaration order is wizard order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Products,
    Contact,
    Confirm,
}

impl Step {
    /// 1-based step number shown in the progress indicator.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Products => 1,
            Self::Contact => 2,
            Self::Confirm => 3,
        }
    }

    /// Inverse of [`Step::number`].
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Products),
            2 => Some(Self::Contact),
            3 => Some(Self::Confirm),
            _ => None,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Products | Self::Contact => Self::Products,
            Self::Confirm => Self::Contact,
        }
    }
}

// =============================================================================
// Line items and contact data
// =============================================================================

/// One requested product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Selected category slug; empty until the customer picks one.
    pub category_slug: String,
    pub quantity: u32,
    /// Requested design or destination, free text.
    pub design: String,
    pub notes: String,
}

impl Default for OrderItem {
    fn default() -> Self {
        Self {
            category_slug: String::new(),
            quantity: 1,
            design: String::new(),
            notes: String::new(),
        }
    }
}

/// Editable fields of an [`OrderItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Category,
    Quantity,
    Design,
    Notes,
}

impl ItemField {
    /// Parse a form field name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "category" => Some(Self::Category),
            "quantity" => Some(Self::Quantity),
            "design" => Some(Self::Design),
            "notes" => Some(Self::Notes),
            _ => None,
        }
    }
}

/// Contact block collected in step 2. Email and notes stay optional; an
/// empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub notes: String,
}

// =============================================================================
// The draft
// =============================================================================

/// The whole in-progress order: items, contact data, pricing mode, and the
/// wizard position. Lives in the customer's session and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub order_type: OrderType,
    /// Always at least one item.
    pub items: Vec<OrderItem>,
    pub contact: ContactInfo,
    pub step: Step,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            order_type: OrderType::Retail,
            items: vec![OrderItem::default()],
            contact: ContactInfo::default(),
            step: Step::Products,
        }
    }
}

impl OrderDraft {
    /// Fresh draft with the first item's design pre-filled, used when the
    /// customer arrives from a catalog card.
    #[must_use]
    pub fn with_design_prefill(design: &str) -> Self {
        let mut draft = Self::default();
        if let Some(first) = draft.items.first_mut() {
            first.design = design.to_owned();
        }
        draft
    }

    /// Append a fresh empty item. No upper bound.
    pub fn add_item(&mut self) {
        self.items.push(OrderItem::default());
    }

    /// Remove the item at `index`. Refused (no-op) for the last remaining
    /// item and for out-of-range indices.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Replace one field of the item at `index`; sibling items are never
    /// touched. Quantity values that fail to parse as a positive integer
    /// clamp to 1. Out-of-range indices are ignored.
    pub fn update_item(&mut self, index: usize, field: ItemField, value: &str) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        match field {
            ItemField::Category => item.category_slug = value.to_owned(),
            ItemField::Quantity => {
                item.quantity = value.trim().parse().ok().filter(|q| *q >= 1).unwrap_or(1);
            }
            ItemField::Design => item.design = value.to_owned(),
            ItemField::Notes => item.notes = value.to_owned(),
        }
    }

    /// Step-1 predicate: every item has a known category and a positive
    /// quantity.
    #[must_use]
    pub fn products_step_complete(&self, categories: &[Category]) -> bool {
        self.items.iter().all(|item| {
            !item.category_slug.is_empty()
                && item.quantity > 0
                && categories.iter().any(|c| c.slug == item.category_slug)
        })
    }

    /// Step-2 predicate: name, phone, city, and state are all non-blank.
    #[must_use]
    pub fn contact_step_complete(&self) -> bool {
        [
            &self.contact.name,
            &self.contact.phone,
            &self.contact.city,
            &self.contact.state,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    /// Completeness predicate for the current step.
    #[must_use]
    pub fn current_step_complete(&self, categories: &[Category]) -> bool {
        match self.step {
            Step::Products => self.products_step_complete(categories),
            Step::Contact => self.contact_step_complete(),
            Step::Confirm => true,
        }
    }

    /// Guarded forward transition. Returns whether the draft moved; a
    /// failing predicate (or being on the last step) leaves it unchanged.
    pub fn try_advance(&mut self, categories: &[Category]) -> bool {
        let next = match self.step {
            Step::Products if self.products_step_complete(categories) => Step::Contact,
            Step::Contact if self.contact_step_complete() => Step::Confirm,
            _ => return false,
        };
        self.step = next;
        true
    }

    /// Unguarded backward transition; a no-op on the first step.
    pub fn go_back(&mut self) {
        self.step = self.step.previous();
    }

    /// Jump directly to an earlier step. Forward jumps (and jumps to the
    /// current step) are refused.
    pub fn try_jump(&mut self, target: Step) -> bool {
        if target < self.step {
            self.step = target;
            true
        } else {
            false
        }
    }

    /// Running total: per item, the guide pair for its category (default
    /// pair on a miss) at the draft's order type, times quantity.
    #[must_use]
    pub fn estimate(&self, table: &PriceTable) -> Decimal {
        self.items.iter().fold(Decimal::ZERO, |total, item| {
            let price = table
                .lookup(&item.category_slug)
                .for_order_type(self.order_type);
            total + price * Decimal::from(item.quantity)
        })
    }

    /// Total piece count across all items.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, item| sum.saturating_add(item.quantity))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fallback;

    fn categories() -> Vec<Category> {
        fallback::catalog_categories()
    }

    fn complete_products_draft() -> OrderDraft {
        let mut draft = OrderDraft::default();
        draft.update_item(0, ItemField::Category, "llaveros");
        draft.update_item(0, ItemField::Quantity, "2");
        draft.update_item(0, ItemField::Design, "CDMX");
        draft
    }

    #[test]
    fn test_new_draft_has_one_default_item_on_step_one() {
        let draft = OrderDraft::default();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].quantity, 1);
        assert!(draft.items[0].category_slug.is_empty());
        assert_eq!(draft.step, Step::Products);
        assert_eq!(draft.order_type, OrderType::Retail);
    }

    #[test]
    fn test_design_prefill_lands_on_first_item() {
        let draft = OrderDraft::with_design_prefill("iman-oaxaca");
        assert_eq!(draft.items[0].design, "iman-oaxaca");
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn test_add_item_appends_empty_line() {
        let mut draft = complete_products_draft();
        draft.add_item();
        assert_eq!(draft.items.len(), 2);
        assert!(draft.items[1].category_slug.is_empty());
        assert_eq!(draft.items[1].quantity, 1);
    }

    #[test]
    fn test_remove_item_refuses_last_item() {
        let mut draft = OrderDraft::default();
        draft.remove_item(0);
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn test_remove_item_ignores_out_of_range_index() {
        let mut draft = OrderDraft::default();
        draft.add_item();
        draft.remove_item(5);
        assert_eq!(draft.items.len(), 2);
    }

    #[test]
    fn test_remove_item_drops_exactly_the_indexed_line() {
        let mut draft = OrderDraft::default();
        draft.update_item(0, ItemField::Design, "primero");
        draft.add_item();
        draft.update_item(1, ItemField::Design, "segundo");
        draft.add_item();
        draft.update_item(2, ItemField::Design, "tercero");

        draft.remove_item(1);
        let designs: Vec<_> = draft.items.iter().map(|i| i.design.as_str()).collect();
        assert_eq!(designs, ["primero", "tercero"]);
    }

    #[test]
    fn test_update_item_leaves_siblings_alone() {
        let mut draft = OrderDraft::default();
        draft.add_item();
        draft.update_item(1, ItemField::Category, "imanes");
        draft.update_item(1, ItemField::Notes, "colores vivos");
        assert!(draft.items[0].category_slug.is_empty());
        assert!(draft.items[0].notes.is_empty());
        assert_eq!(draft.items[1].category_slug, "imanes");
    }

    #[test]
    fn test_quantity_updates_clamp_to_one() {
        let mut draft = OrderDraft::default();
        for bad in ["0", "-3", "abc", "", " "] {
            draft.update_item(0, ItemField::Quantity, bad);
            assert_eq!(draft.items[0].quantity, 1, "input {bad:?}");
        }
        draft.update_item(0, ItemField::Quantity, " 12 ");
        assert_eq!(draft.items[0].quantity, 12);
    }

    #[test]
    fn test_advance_refused_until_every_item_has_a_category() {
        let mut draft = complete_products_draft();
        draft.add_item();

        assert!(!draft.try_advance(&categories()));
        assert_eq!(draft.step, Step::Products);

        draft.update_item(1, ItemField::Category, "imanes");
        assert!(draft.try_advance(&categories()));
        assert_eq!(draft.step, Step::Contact);
    }

    #[test]
    fn test_advance_refused_for_unknown_category_slug() {
        let mut draft = OrderDraft::default();
        draft.update_item(0, ItemField::Category, "playeras");
        assert!(!draft.try_advance(&categories()));
        assert_eq!(draft.step, Step::Products);
    }

    #[test]
    fn test_contact_step_requires_the_four_mandatory_fields() {
        let mut draft = complete_products_draft();
        assert!(draft.try_advance(&categories()));

        draft.contact.name = "Ana".to_owned();
        draft.contact.phone = "555".to_owned();
        draft.contact.city = "CDMX".to_owned();
        draft.contact.state = "   ".to_owned();
        assert!(!draft.try_advance(&categories()));
        assert_eq!(draft.step, Step::Contact);

        draft.contact.state = "CDMX".to_owned();
        assert!(draft.try_advance(&categories()));
        assert_eq!(draft.step, Step::Confirm);
    }

    #[test]
    fn test_email_and_notes_are_not_required() {
        let mut draft = complete_products_draft();
        draft.contact = ContactInfo {
            name: "Ana".to_owned(),
            phone: "555".to_owned(),
            city: "CDMX".to_owned(),
            state: "CDMX".to_owned(),
            ..ContactInfo::default()
        };
        assert!(draft.contact_step_complete());
    }

    #[test]
    fn test_advance_on_last_step_is_refused() {
        let mut draft = OrderDraft {
            step: Step::Confirm,
            ..complete_products_draft()
        };
        assert!(!draft.try_advance(&categories()));
        assert_eq!(draft.step, Step::Confirm);
    }

    #[test]
    fn test_go_back_walks_one_step_and_stops_at_the_start() {
        let mut draft = OrderDraft {
            step: Step::Confirm,
            ..OrderDraft::default()
        };
        draft.go_back();
        assert_eq!(draft.step, Step::Contact);
        draft.go_back();
        assert_eq!(draft.step, Step::Products);
        draft.go_back();
        assert_eq!(draft.step, Step::Products);
    }

    #[test]
    fn test_jumps_only_go_backward() {
        let mut draft = OrderDraft {
            step: Step::Confirm,
            ..OrderDraft::default()
        };
        assert!(!draft.try_jump(Step::Confirm));
        assert!(draft.try_jump(Step::Products));
        assert_eq!(draft.step, Step::Products);
        assert!(!draft.try_jump(Step::Contact));
        assert_eq!(draft.step, Step::Products);
    }

    #[test]
    fn test_estimate_matches_the_price_guide() {
        let table = PriceTable::default();
        let mut draft = OrderDraft::default();
        draft.update_item(0, ItemField::Category, "imanes");
        draft.update_item(0, ItemField::Quantity, "3");

        assert_eq!(draft.estimate(&table), Decimal::from(135));
        draft.order_type = OrderType::Wholesale;
        assert_eq!(draft.estimate(&table), Decimal::from(105));
    }

    #[test]
    fn test_estimate_uses_default_pair_for_unknown_categories() {
        let table = PriceTable::default();
        let mut draft = OrderDraft::default();
        draft.update_item(0, ItemField::Category, "playeras");
        draft.update_item(0, ItemField::Quantity, "2");
        assert_eq!(draft.estimate(&table), Decimal::from(100));
        draft.order_type = OrderType::Wholesale;
        assert_eq!(draft.estimate(&table), Decimal::from(80));
    }

    #[test]
    fn test_estimate_is_linear_in_quantities() {
        let table = PriceTable::default();
        let mut draft = OrderDraft::default();
        draft.update_item(0, ItemField::Category, "llaveros");
        draft.update_item(0, ItemField::Quantity, "2");
        draft.add_item();
        draft.update_item(1, ItemField::Category, "portallaves");
        draft.update_item(1, ItemField::Quantity, "5");

        let single = draft.estimate(&table);
        for item in &mut draft.items {
            item.quantity *= 2;
        }
        assert_eq!(draft.estimate(&table), single * Decimal::from(2));
    }

    #[test]
    fn test_total_item_count_sums_quantities() {
        let mut draft = OrderDraft::default();
        draft.update_item(0, ItemField::Quantity, "2");
        draft.add_item();
        draft.update_item(1, ItemField::Quantity, "7");
        assert_eq!(draft.total_item_count(), 9);
    }

    #[test]
    fn test_draft_round_trips_through_session_json() {
        let mut draft = complete_products_draft();
        draft.order_type = OrderType::Wholesale;
        draft.step = Step::Contact;
        draft.contact.name = "Ana".to_owned();

        let json = serde_json::to_string(&draft).unwrap();
        let restored: OrderDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, draft);
    }
}
