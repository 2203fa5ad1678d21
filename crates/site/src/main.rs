//! AXKAN marketing site - catalog, brand pages, and order hand-off.
//!
//! This binary serves the public site on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with server-rendered Askama templates
//! - Sanity Content API for studio-authored content, with built-in
//!   fallback data so the site renders with zero configuration
//! - Session-backed order wizard that serializes the draft into a
//!   pre-filled WhatsApp message; there is no checkout, no payments,
//!   and no database

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::borrow::Cow;

use axum::middleware::from_fn;
use axum::{Router, routing::get};
use sentry::integrations::tracing::{self as sentry_tracing, EventFilter};
use sentry::{ClientInitGuard, ClientOptions};
use sentry_tower::{NewSentryLayer, SentryHttpLayer};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use axkan_site::config::SiteConfig;
use axkan_site::state::AppState;
use axkan_site::{middleware, routes};

/// Start error tracking when a DSN is configured.
///
/// The returned guard flushes pending events on drop; `main` holds it for
/// the life of the process.
fn init_sentry(config: &SiteConfig) -> Option<ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        ClientOptions {
            release: sentry::release_name!(),
            environment: config.sentry_environment.clone().map(Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry error tracking enabled");
    Some(guard)
}

/// Route tracing levels to Sentry: warnings and errors become events,
/// info and debug become breadcrumbs on the next event.
fn sentry_level_filter(metadata: &tracing::Metadata<'_>) -> EventFilter {
    match *metadata.level() {
        Level::ERROR | Level::WARN => EventFilter::Event,
        Level::INFO | Level::DEBUG => EventFilter::Breadcrumb,
        _ => EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Configuration first: Sentry and the subscriber both depend on it.
    let config = SiteConfig::from_env().expect("Failed to load configuration");

    let _sentry_guard = init_sentry(&config);

    // RUST_LOG wins when set; the default keeps our crate at info.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "axkan_site=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_level_filter))
        .init();

    let state = AppState::new(config.clone());
    if config.sanity.is_none() {
        tracing::info!("No Sanity project configured, serving fallback content");
    }

    let session_layer = middleware::create_session_layer(state.config());

    // Sentry layers sit outermost so they see every request.
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/site/static"))
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .layer(NewSentryLayer::new_from_top())
        .layer(SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    tracing::info!("site listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Could not bind listen address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server exited with error");
}

/// Liveness probe. Answers as long as the process runs; checks nothing else.
async fn health() -> &'static str {
    "OK"
}

/// Resolve when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Could not install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Could not install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
