//! Order hand-off to WhatsApp.
//!
//! The order wizard never posts to a backend. On confirmation the draft
//! is rendered as a plain-text Spanish message and the visitor is sent to
//! a `wa.me` link that opens a chat with the message pre-filled. Sales
//! staff take over from there.

use crate::format::group_thousands;
use crate::order::OrderDraft;
use crate::pricing::PriceTable;
use crate::types::Category;

/// Renders the full WhatsApp message for a draft.
///
/// Item categories are labeled with their display name when the slug is
/// known, falling back to the raw slug otherwise. Optional lines (design,
/// per-item notes, email, general notes) are omitted when blank.
#[must_use]
pub fn order_message(draft: &OrderDraft, categories: &[Category], prices: &PriceTable) -> String {
    let mut message = String::from("¡Hola! Me interesa hacer un pedido AXKAN.\n\n");
    message.push_str(&format!("*Tipo de pedido:* {}\n\n", draft.order_type.label()));
    message.push_str("*Productos solicitados:*\n");

    for (index, item) in draft.items.iter().enumerate() {
        let label = category_label(categories, &item.category_slug);
        message.push_str(&format!("{}. {label}\n", index + 1));
        message.push_str(&format!("   - Cantidad: {}\n", item.quantity));
        if !item.design.trim().is_empty() {
            message.push_str(&format!("   - Diseño/Destino: {}\n", item.design.trim()));
        }
        if !item.notes.trim().is_empty() {
            message.push_str(&format!("   - Notas: {}\n", item.notes.trim()));
        }
    }

    let total = draft.estimate(prices);
    message.push_str(&format!(
        "\n*Estimado total:* ${} MXN\n\n",
        group_thousands(total)
    ));

    message.push_str("*Datos de contacto:*\n");
    message.push_str(&format!("- Nombre: {}\n", draft.contact.name));
    message.push_str(&format!("- Teléfono: {}\n", draft.contact.phone));
    if !draft.contact.email.trim().is_empty() {
        message.push_str(&format!("- Email: {}\n", draft.contact.email));
    }
    message.push_str(&format!(
        "- Ubicación: {}, {}\n",
        draft.contact.city, draft.contact.state
    ));
    if !draft.contact.notes.trim().is_empty() {
        message.push_str(&format!("- Notas adicionales: {}\n", draft.contact.notes));
    }

    message
}

/// Builds the `wa.me` URL that opens a chat with `message` pre-filled.
///
/// `recipient` is the phone number in international format, digits only.
#[must_use]
pub fn order_url(recipient: &str, message: &str) -> String {
    format!("https://wa.me/{recipient}?text={}", urlencoding::encode(message))
}

/// Display name for a category slug, falling back to the slug itself.
#[must_use]
pub fn category_label(categories: &[Category], slug: &str) -> String {
    categories
        .iter()
        .find(|c| c.slug == slug)
        .map_or_else(|| slug.to_owned(), |c| c.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;
    use crate::order::{ItemField, OrderType};

    fn sample_draft() -> OrderDraft {
        let mut draft = OrderDraft::default();
        draft.update_item(0, ItemField::Category, "llaveros");
        draft.update_item(0, ItemField::Quantity, "2");
        draft.update_item(0, ItemField::Design, "CDMX");
        draft.contact.name = "Ana López".to_owned();
        draft.contact.phone = "55 1234 5678".to_owned();
        draft.contact.city = "Oaxaca".to_owned();
        draft.contact.state = "Oaxaca".to_owned();
        draft
    }

    #[test]
    fn test_message_lists_items_with_quantities_and_design() {
        let message = order_message(
            &sample_draft(),
            &fallback::catalog_categories(),
            &PriceTable::default(),
        );

        assert!(message.starts_with("¡Hola! Me interesa hacer un pedido AXKAN.\n"));
        assert!(message.contains("*Tipo de pedido:* Menudeo\n"));
        assert!(message.contains("1. Llaveros\n"));
        assert!(message.contains("   - Cantidad: 2\n"));
        assert!(message.contains("   - Diseño/Destino: CDMX\n"));
        assert!(message.contains("*Estimado total:* $110 MXN\n"));
        assert!(message.contains("- Nombre: Ana López\n"));
        assert!(message.contains("- Ubicación: Oaxaca, Oaxaca\n"));
    }

    #[test]
    fn test_wholesale_draft_uses_wholesale_label_and_prices() {
        let mut draft = sample_draft();
        draft.order_type = OrderType::Wholesale;
        let message = order_message(
            &draft,
            &fallback::catalog_categories(),
            &PriceTable::default(),
        );

        assert!(message.contains("*Tipo de pedido:* Mayoreo\n"));
        assert!(message.contains("*Estimado total:* $90 MXN\n"));
    }

    #[test]
    fn test_blank_optional_lines_are_omitted() {
        let message = order_message(
            &sample_draft(),
            &fallback::catalog_categories(),
            &PriceTable::default(),
        );

        assert!(!message.contains("- Email:"));
        assert!(!message.contains("- Notas adicionales:"));
        assert!(!message.contains("   - Notas:"));
    }

    #[test]
    fn test_email_line_appears_when_present() {
        let mut draft = sample_draft();
        draft.contact.email = "ana@example.com".to_owned();
        let message = order_message(
            &draft,
            &fallback::catalog_categories(),
            &PriceTable::default(),
        );

        assert!(message.contains("- Email: ana@example.com\n"));
    }

    #[test]
    fn test_unknown_category_slug_falls_back_to_slug() {
        let mut draft = sample_draft();
        draft.update_item(0, ItemField::Category, "sombreros");
        let message = order_message(
            &draft,
            &fallback::catalog_categories(),
            &PriceTable::default(),
        );

        assert!(message.contains("1. sombreros\n"));
    }

    #[test]
    fn test_url_targets_recipient_and_encodes_message() {
        let message = order_message(
            &sample_draft(),
            &fallback::catalog_categories(),
            &PriceTable::default(),
        );
        let url = order_url("5215538253251", &message);

        assert!(url.starts_with("https://wa.me/5215538253251?text="));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));

        let encoded = url.split_once("?text=").map(|(_, t)| t).unwrap_or("");
        let decoded = urlencoding::decode(encoded).unwrap_or_default();
        assert_eq!(decoded, message);
    }
}
