//! Blog listing route handler.
//!
//! Post bodies are authored and read in the studio; the site only lists
//! published posts. No fallback dataset exists for posts, so a site without
//! studio content renders the empty state.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use chrono::{DateTime, Datelike, Utc};
use tracing::instrument;

use axkan_core::{Post, SiteSettings};

use crate::filters;
use crate::state::AppState;

/// Post card for the listing.
#[derive(Clone)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub cover_image_url: Option<String>,
    /// Publication date in Spanish, e.g. `15 de marzo de 2026`.
    pub published: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            cover_image_url: post.cover_image_url.clone(),
            published: spanish_date(&post.published_at),
            tags: post.tags.clone(),
            featured: post.featured,
        }
    }
}

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn spanish_date(date: &DateTime<Utc>) -> String {
    let month = MONTHS.get(date.month0() as usize).copied().unwrap_or("");
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Blog listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub settings: SiteSettings,
    pub base_url: String,
    pub posts: Vec<PostView>,
}

/// Display the blog listing, newest post first.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> BlogTemplate {
    let settings = state.content().site_settings().await;
    let posts = state.content().posts().await;

    BlogTemplate {
        settings,
        base_url: state.config().base_url.clone(),
        posts: posts.iter().map(PostView::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_spanish_date_spells_out_the_month() {
        let date = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).single();
        let Some(date) = date else {
            panic!("fixed timestamp must be valid");
        };
        assert_eq!(spanish_date(&date), "15 de marzo de 2026");
    }

    #[test]
    fn test_post_view_formats_publication_date() {
        let date = Utc.with_ymd_and_hms(2025, 12, 1, 8, 30, 0).single();
        let Some(published_at) = date else {
            panic!("fixed timestamp must be valid");
        };
        let post = Post {
            id: "post-1".to_owned(),
            title: "Detrás del corte láser".to_owned(),
            slug: "detras-del-corte-laser".to_owned(),
            excerpt: "Cómo nace un imán AXKAN.".to_owned(),
            cover_image_url: None,
            published_at,
            tags: vec!["proceso".to_owned()],
            featured: true,
        };

        let view = PostView::from(&post);
        assert_eq!(view.published, "1 de diciembre de 2025");
        assert_eq!(view.slug, "detras-del-corte-laser");
        assert!(view.featured);
    }
}
