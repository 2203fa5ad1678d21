//! Security headers applied to every response.
//!
//! The policy set starts from "deny everything" and opens only what the
//! pages actually use: self-hosted scripts, styles, and fonts, product
//! imagery from the Sanity CDN, and form posts back to the site itself.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Content Security Policy.
///
/// The WhatsApp hand-off is a plain top-level navigation to `wa.me`, which
/// CSP does not restrict, so it needs no entry. Inline styles and scripts
/// are ruled out; the templates must not use `style=` attributes.
const CONTENT_SECURITY_POLICY: &str = "default-src 'none'; \
     script-src 'self'; \
     style-src 'self'; \
     font-src 'self'; \
     img-src 'self' https://cdn.sanity.io; \
     connect-src 'self'; \
     frame-src 'none'; \
     object-src 'none'; \
     base-uri 'self'; \
     form-action 'self'; \
     frame-ancestors 'none'; \
     upgrade-insecure-requests";

/// Permissions Policy denying every sensitive browser feature.
const PERMISSIONS_POLICY: &str = "accelerometer=(), \
     ambient-light-sensor=(), \
     autoplay=(), \
     battery=(), \
     browsing-topics=(), \
     camera=(), \
     cross-origin-isolated=(), \
     display-capture=(), \
     document-domain=(), \
     encrypted-media=(), \
     execution-while-not-rendered=(), \
     execution-while-out-of-viewport=(), \
     fullscreen=(), \
     geolocation=(), \
     gyroscope=(), \
     hid=(), \
     idle-detection=(), \
     interest-cohort=(), \
     magnetometer=(), \
     microphone=(), \
     midi=(), \
     navigation-override=(), \
     payment=(), \
     picture-in-picture=(), \
     publickey-credentials-get=(), \
     screen-wake-lock=(), \
     serial=(), \
     sync-xhr=(), \
     usb=(), \
     web-share=(), \
     xr-spatial-tracking=()";

/// Headers attached verbatim to every response.
///
/// `cross-origin-embedder-policy` uses the credentialless mode rather than
/// require-corp: the Sanity CDN sets no CORP header, and require-corp would
/// blank out every product image.
const FIXED_HEADERS: &[(&str, &str)] = &[
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "no-referrer"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("cross-origin-embedder-policy", "credentialless"),
    ("x-dns-prefetch-control", "off"),
];

/// Attach the security and caching headers to a response.
///
/// Pages render session state and must never be cached. Static asset
/// filenames embed a content hash, so those responses can live forever.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let is_static_asset = request.uri().path().starts_with("/static/");

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for (name, value) in FIXED_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    headers.insert(
        HeaderName::from_static("content-security-policy"),
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(PERMISSIONS_POLICY),
    );

    let cache_control = if is_static_asset {
        "public, max-age=31536000, immutable"
    } else {
        "no-store, max-age=0"
    };
    headers.insert(
        HeaderName::from_static("cache-control"),
        HeaderValue::from_static(cache_control),
    );

    response
}
