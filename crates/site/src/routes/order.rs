//! Order wizard route handlers.
//!
//! The three-step wizard (Productos → Datos → Confirmar) runs on plain HTML
//! forms: every POST carries the full current form state, the handler applies
//! the field values to the session draft, performs its action, and redirects
//! back to `GET /pedido` (POST-redirect-GET). A refused forward move leaves
//! the draft where it was, so the redirect silently re-renders the same step.
//!
//! Confirmation renders an anchor to the serialized `wa.me` URL; no POST ever
//! sends the message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use axkan_core::format::group_thousands;
use axkan_core::order::{ContactInfo, ItemField, OrderDraft, OrderItem, OrderType, Step};
use axkan_core::whatsapp;
use axkan_core::SiteSettings;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::{load_order_draft, save_order_draft};
use crate::state::AppState;

// =============================================================================
// View data
// =============================================================================

/// One pill in the step indicator.
pub struct StepView {
    pub number: u8,
    pub icon: &'static str,
    pub name: &'static str,
}

/// Category option for the step-1 selects, price hint included.
pub struct CategoryOptionView {
    pub slug: String,
    pub name: String,
    /// Grouped price for the draft's current order type, without the `$`.
    pub price: String,
}

/// One line of the confirmation summary.
pub struct SummaryLineView {
    pub label: String,
    pub quantity: u32,
    /// Trimmed design text; empty when the customer left it blank.
    pub design: String,
    /// Grouped line subtotal, without the `$`.
    pub subtotal: String,
}

/// Order wizard page template.
#[derive(Template, WebTemplate)]
#[template(path = "order.html")]
pub struct OrderTemplate {
    pub settings: SiteSettings,
    pub base_url: String,
    pub steps: Vec<StepView>,
    pub step_number: u8,
    pub order_type: &'static str,
    pub category_options: Vec<CategoryOptionView>,
    pub can_remove: bool,
    pub items: Vec<OrderItem>,
    pub contact: ContactInfo,
    pub summary_lines: Vec<SummaryLineView>,
    /// Grouped estimate total, without the `$`.
    pub estimate: String,
    pub piece_count: u32,
    pub piece_word: &'static str,
    pub whatsapp_url: String,
}

fn step_views() -> Vec<StepView> {
    vec![
        StepView {
            number: 1,
            icon: "🛍️",
            name: "Productos",
        },
        StepView {
            number: 2,
            icon: "📝",
            name: "Datos",
        },
        StepView {
            number: 3,
            icon: "✅",
            name: "Confirmar",
        },
    ]
}

/// Assemble the wizard view for the draft's current step.
///
/// Everything is recomputed from the draft on every render: option price
/// hints follow the order type, and the summary, estimate, and hand-off URL
/// always reflect the latest field values.
async fn wizard_view(state: &AppState, draft: OrderDraft) -> OrderTemplate {
    let settings = state.content().site_settings().await;
    let categories = state.content().categories().await;
    let prices = state.prices();

    let category_options = categories
        .iter()
        .map(|category| {
            let pair = prices.lookup(&category.slug);
            CategoryOptionView {
                slug: category.slug.clone(),
                name: category.name.clone(),
                price: group_thousands(pair.for_order_type(draft.order_type)),
            }
        })
        .collect();

    let summary_lines = draft
        .items
        .iter()
        .map(|item| {
            let unit = prices.lookup(&item.category_slug).for_order_type(draft.order_type);
            SummaryLineView {
                label: whatsapp::category_label(&categories, &item.category_slug),
                quantity: item.quantity,
                design: item.design.trim().to_owned(),
                subtotal: group_thousands(unit * Decimal::from(item.quantity)),
            }
        })
        .collect();

    let estimate = group_thousands(draft.estimate(prices));
    let piece_count = draft.total_item_count();
    let message = whatsapp::order_message(&draft, &categories, prices);
    let whatsapp_url = whatsapp::order_url(&state.config().whatsapp_number, &message);

    OrderTemplate {
        settings,
        base_url: state.config().base_url.clone(),
        steps: step_views(),
        step_number: draft.step.number(),
        order_type: draft.order_type.as_str(),
        category_options,
        can_remove: draft.items.len() > 1,
        items: draft.items,
        contact: draft.contact,
        summary_lines,
        estimate,
        piece_count,
        piece_word: if piece_count == 1 { "pieza" } else { "piezas" },
        whatsapp_url,
    }
}

// =============================================================================
// Form decoding
// =============================================================================

/// Entry query parameters.
#[derive(Debug, Deserialize)]
pub struct OrderEntryQuery {
    /// Catalog hand-off: pre-fills the first item's design on first entry.
    pub producto: Option<String>,
}

/// Splits an indexed field name like `quantity-2` into its field and index.
fn indexed_field(name: &str) -> Option<(ItemField, usize)> {
    let (field, index) = name.rsplit_once('-')?;
    Some((ItemField::parse(field)?, index.parse().ok()?))
}

/// First posted value for `name`, if any.
fn form_value<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Apply the step-1 form state: the order type plus every indexed item
/// field. Unknown names and out-of-range indices are ignored.
fn apply_products_form(draft: &mut OrderDraft, fields: &[(String, String)]) {
    for (name, value) in fields {
        if name == "order_type" {
            if let Some(order_type) = OrderType::parse(value) {
                draft.order_type = order_type;
            }
        } else if let Some((field, index)) = indexed_field(name) {
            draft.update_item(index, field, value);
        }
    }
}

/// Apply the step-2 contact fields. Unknown names are ignored.
fn apply_contact_form(draft: &mut OrderDraft, fields: &[(String, String)]) {
    for (name, value) in fields {
        match name.as_str() {
            "name" => draft.contact.name = value.clone(),
            "phone" => draft.contact.phone = value.clone(),
            "email" => draft.contact.email = value.clone(),
            "city" => draft.contact.city = value.clone(),
            "state" => draft.contact.state = value.clone(),
            "notes" => draft.contact.notes = value.clone(),
            _ => {}
        }
    }
}

/// Apply whatever step the draft is currently on. Used by the step-indicator
/// jump, which can fire from either editing step.
fn apply_current_step_form(draft: &mut OrderDraft, fields: &[(String, String)]) {
    match draft.step {
        Step::Products => apply_products_form(draft, fields),
        Step::Contact => apply_contact_form(draft, fields),
        Step::Confirm => {}
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the wizard at the draft's current step.
///
/// With no draft in the session, a `producto` query parameter seeds a fresh
/// draft with the first item's design pre-filled and stores it; otherwise an
/// unsaved default draft renders. An existing draft always wins over the
/// query parameter.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OrderEntryQuery>,
) -> Result<OrderTemplate> {
    let draft = match load_order_draft(&session).await {
        Some(draft) => draft,
        None => match query.producto.as_deref() {
            Some(producto) => {
                let draft = OrderDraft::with_design_prefill(producto);
                save_order_draft(&session, &draft).await?;
                draft
            }
            None => OrderDraft::default(),
        },
    };

    Ok(wizard_view(&state, draft).await)
}

/// Apply step-1 fields and append a fresh item.
#[instrument(skip(session, form))]
pub async fn add_item(
    session: Session,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let mut draft = load_order_draft(&session).await.unwrap_or_default();
    apply_products_form(&mut draft, &form);
    draft.add_item();
    save_order_draft(&session, &draft).await?;
    Ok(Redirect::to("/pedido"))
}

/// Apply step-1 fields and remove the item at the posted index.
#[instrument(skip(session, form))]
pub async fn remove_item(
    session: Session,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let mut draft = load_order_draft(&session).await.unwrap_or_default();
    apply_products_form(&mut draft, &form);
    if let Some(index) = form_value(&form, "index").and_then(|value| value.parse().ok()) {
        draft.remove_item(index);
    }
    save_order_draft(&session, &draft).await?;
    Ok(Redirect::to("/pedido"))
}

/// Apply step-1 fields and re-render, refreshing price hints and the
/// estimate. Fired by the enhancement script on order-type and category
/// changes.
#[instrument(skip(session, form))]
pub async fn refresh(
    session: Session,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let mut draft = load_order_draft(&session).await.unwrap_or_default();
    apply_products_form(&mut draft, &form);
    save_order_draft(&session, &draft).await?;
    Ok(Redirect::to("/pedido"))
}

/// Apply step-1 fields and advance to the contact step when every item has
/// a known category and a positive quantity.
#[instrument(skip(state, session, form))]
pub async fn products_next(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let mut draft = load_order_draft(&session).await.unwrap_or_default();
    apply_products_form(&mut draft, &form);
    let categories = state.content().categories().await;
    if draft.try_advance(&categories) {
        add_breadcrumb(
            "order",
            "Advanced to contact step",
            Some(&[("items", &draft.items.len().to_string())]),
        );
    }
    save_order_draft(&session, &draft).await?;
    Ok(Redirect::to("/pedido"))
}

/// Apply step-2 fields and go back to the products step.
#[instrument(skip(session, form))]
pub async fn contact_back(
    session: Session,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let mut draft = load_order_draft(&session).await.unwrap_or_default();
    apply_contact_form(&mut draft, &form);
    draft.go_back();
    save_order_draft(&session, &draft).await?;
    Ok(Redirect::to("/pedido"))
}

/// Apply step-2 fields and advance to confirmation when name, phone, city,
/// and state are all filled.
#[instrument(skip(state, session, form))]
pub async fn contact_next(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let mut draft = load_order_draft(&session).await.unwrap_or_default();
    apply_contact_form(&mut draft, &form);
    let categories = state.content().categories().await;
    if draft.try_advance(&categories) {
        add_breadcrumb("order", "Advanced to confirmation step", None);
    }
    save_order_draft(&session, &draft).await?;
    Ok(Redirect::to("/pedido"))
}

/// Go back from confirmation to the contact step.
#[instrument(skip(session))]
pub async fn confirm_back(session: Session) -> Result<Redirect> {
    let mut draft = load_order_draft(&session).await.unwrap_or_default();
    draft.go_back();
    save_order_draft(&session, &draft).await?;
    Ok(Redirect::to("/pedido"))
}

/// Step-indicator jump: apply the current step's fields, then move to the
/// posted step if it lies backward. Forward jumps are refused.
#[instrument(skip(session, form))]
pub async fn jump_step(
    session: Session,
    Form(form): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let mut draft = load_order_draft(&session).await.unwrap_or_default();
    apply_current_step_form(&mut draft, &form);
    if let Some(target) = form_value(&form, "step")
        .and_then(|value| value.parse().ok())
        .and_then(Step::from_number)
    {
        if draft.try_jump(target) {
            add_breadcrumb(
                "order",
                "Jumped back",
                Some(&[("step", &target.number().to_string())]),
            );
        }
    }
    save_order_draft(&session, &draft).await?;
    Ok(Redirect::to("/pedido"))
}
