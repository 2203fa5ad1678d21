//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use axkan_core::format::group_thousands;
use axkan_core::pricing::PriceTable;
use axkan_core::{AboutSection, Category, HeroSection, SiteSettings, Testimonial};

use crate::filters;
use crate::state::AppState;

// =============================================================================
// Static section content
// =============================================================================

/// One card in the "¿Por qué AXKAN?" grid.
#[derive(Clone)]
pub struct FeatureView {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent class suffix for the card's hover treatment.
    pub accent: &'static str,
}

fn features() -> Vec<FeatureView> {
    vec![
        FeatureView {
            icon: "🎨",
            title: "Diseños Auténticos",
            description: "Más de 500 destinos mexicanos capturados con precisión láser y \
                          colores vibrantes que celebran nuestra cultura.",
            accent: "magenta",
        },
        FeatureView {
            icon: "⚡",
            title: "Corte Láser Premium",
            description: "Tecnología de precisión que garantiza bordes perfectos y detalles \
                          increíbles en cada pieza.",
            accent: "turquesa",
        },
        FeatureView {
            icon: "🌟",
            title: "Acabado Brillante",
            description: "Recubrimiento UV de alta resistencia que protege y realza los \
                          colores por años.",
            accent: "naranja",
        },
        FeatureView {
            icon: "🎁",
            title: "Personalización",
            description: "Crea diseños únicos para tu negocio, evento o destino. Sin \
                          mínimos absurdos.",
            accent: "verde",
        },
    ]
}

/// Destination names for the scrolling band under the product grid.
const DESTINATIONS: [&str; 10] = [
    "Huasteca Potosina",
    "Oaxaca",
    "Cancún",
    "CDMX",
    "Guanajuato",
    "San Miguel",
    "Puerto Vallarta",
    "Chiapas",
    "Yucatán",
    "Acapulco",
];

// =============================================================================
// Category and Testimonial Views
// =============================================================================

/// A product-line card in the homepage grid.
#[derive(Clone)]
pub struct CategoryCardView {
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Starting-price line, e.g. `Desde $15`.
    pub price_from: String,
    /// Accent class suffix for the card header.
    pub color: &'static str,
    /// Shows the "Más Popular" badge.
    pub popular: bool,
}

/// Starting prices are marketing copy for the four standing lines; categories
/// added in the studio fall back to their retail price from the guide.
fn price_from(slug: &str, prices: &PriceTable) -> String {
    let amount = match slug {
        "imanes" => "15".to_owned(),
        "llaveros" => "18".to_owned(),
        "destapadores" => "25".to_owned(),
        "portallaves" => "45".to_owned(),
        _ => group_thousands(prices.lookup(slug).unit),
    };
    format!("Desde ${amount}")
}

fn category_card(category: &Category, prices: &PriceTable) -> CategoryCardView {
    CategoryCardView {
        slug: category.slug.clone(),
        name: category.name.clone(),
        description: category.description.clone(),
        price_from: price_from(&category.slug, prices),
        color: category.color.as_str(),
        popular: category.slug == "imanes",
    }
}

/// A testimonial card.
#[derive(Clone)]
pub struct TestimonialView {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub avatar_url: Option<String>,
    /// Letter shown in the avatar circle when there is no photo.
    pub initial: String,
    pub rating: u8,
}

impl From<&Testimonial> for TestimonialView {
    fn from(testimonial: &Testimonial) -> Self {
        Self {
            name: testimonial.name.clone(),
            role: testimonial.role.clone(),
            quote: testimonial.quote.clone(),
            avatar_url: testimonial.avatar_url.clone(),
            initial: testimonial.name.chars().next().unwrap_or('A').to_string(),
            rating: testimonial.rating.min(5),
        }
    }
}

/// Number of testimonials shown on the homepage.
const TESTIMONIAL_COUNT: usize = 3;

// =============================================================================
// Template and handler
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub settings: SiteSettings,
    pub base_url: String,
    pub hero: HeroSection,
    pub features: Vec<FeatureView>,
    pub category_cards: Vec<CategoryCardView>,
    pub destinations: Vec<&'static str>,
    pub about: AboutSection,
    pub testimonials: Vec<TestimonialView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> HomeTemplate {
    let settings = state.content().site_settings().await;
    let hero = state.content().hero().await;
    let about = state.content().about().await;
    let categories = state.content().categories().await;
    let testimonials = state.content().testimonials().await;
    let prices = state.prices();

    HomeTemplate {
        settings,
        base_url: state.config().base_url.clone(),
        hero,
        features: features(),
        category_cards: categories
            .iter()
            .map(|category| category_card(category, prices))
            .collect(),
        destinations: DESTINATIONS.to_vec(),
        about,
        testimonials: testimonials
            .iter()
            .take(TESTIMONIAL_COUNT)
            .map(TestimonialView::from)
            .collect(),
    }
}
