//! Site configuration loaded from environment variables.
//!
//! Every variable is optional: with nothing set the site binds
//! `0.0.0.0:3000` and serves the built-in fallback content, which keeps
//! local development and first deploys zero-config.
//!
//! # Environment Variables
//!
//! - `SITE_HOST` - Bind address (default: 0.0.0.0)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_BASE_URL` - Public URL for absolute links (default: <http://localhost:3000>)
//! - `SANITY_PROJECT_ID` - Sanity project; unset means fallback-only mode
//! - `SANITY_DATASET` - Sanity dataset (default: production)
//! - `SANITY_API_VERSION` - Sanity API version (default: 2024-01-01)
//! - `SANITY_API_TOKEN` - API token for private datasets (validated when set)
//! - `WHATSAPP_NUMBER` - Order recipient, digits only (default: 5215538253251)
//! - `SENTRY_DSN` - Error tracking DSN; unset disables Sentry
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 1.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Tokens below this Shannon entropy are rejected as too guessable.
const MIN_TOKEN_BITS_PER_CHAR: f64 = 3.3;

/// Fragments that mark a secret as copy-pasted boilerplate, matched
/// case-insensitively.
const PLACEHOLDER_FRAGMENTS: &[&str] = &[
    "changeme",
    "placeholder",
    "example",
    "your-",
    "put-your",
    "add-your",
    "enter-",
    "insert",
    "replace",
    "password",
    "secret",
    "xxx",
];

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Bad value for {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Refusing insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Bind address for the listener
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for absolute links and Open Graph tags
    pub base_url: String,
    /// Sanity content API configuration; `None` runs fallback-only
    pub sanity: Option<SanityConfig>,
    /// WhatsApp number order hand-offs target, digits only
    pub whatsapp_number: String,
    /// DSN for Sentry; `None` disables error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors reported to Sentry, 0.0 to 1.0
    pub sentry_sample_rate: f32,
    /// Fraction of requests traced for performance, 0.0 to 1.0
    pub sentry_traces_sample_rate: f32,
}

/// Sanity content API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct SanityConfig {
    /// Sanity project ID (e.g., a1b2c3d4)
    pub project_id: String,
    /// Dataset name (e.g., production)
    pub dataset: String,
    /// Query API version date (e.g., 2024-01-01)
    pub api_version: String,
    /// API token; only needed for private datasets
    pub token: Option<SecretString>,
}

impl std::fmt::Debug for SanityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SanityConfig")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_version", &self.api_version)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl SiteConfig {
    /// Read configuration from the process environment, consulting a
    /// `.env` file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse or the Sanity
    /// token fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let host = parse_env("SITE_HOST", "0.0.0.0")?;
        let port = parse_env("SITE_PORT", "3000")?;
        let base_url = env_or("SITE_BASE_URL", "http://localhost:3000");
        validate_base_url(&base_url)?;

        let sanity = SanityConfig::from_env()?;
        let whatsapp_number = env_or("WHATSAPP_NUMBER", "5215538253251");
        validate_whatsapp_number(&whatsapp_number)?;

        Ok(Self {
            host,
            port,
            base_url,
            sanity,
            whatsapp_number,
            sentry_dsn: env_var("SENTRY_DSN"),
            sentry_environment: env_var("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: env_var("SENTRY_SAMPLE_RATE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1.0),
            sentry_traces_sample_rate: env_var("SENTRY_TRACES_SAMPLE_RATE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1.0),
        })
    }

    /// Socket address assembled from `host` and `port`.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SanityConfig {
    /// Returns `Ok(None)` when `SANITY_PROJECT_ID` is unset.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(project_id) = env_var("SANITY_PROJECT_ID") else {
            return Ok(None);
        };

        let token = match env_var("SANITY_API_TOKEN") {
            Some(value) => {
                validate_token_strength(&value, "SANITY_API_TOKEN")?;
                Some(SecretString::from(value))
            }
            None => None,
        };

        Ok(Some(Self {
            project_id,
            dataset: env_or("SANITY_DATASET", "production"),
            api_version: env_or("SANITY_API_VERSION", "2024-01-01"),
            token,
        }))
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_or(key: &str, default: &str) -> String {
    env_var(key).unwrap_or_else(|| default.to_string())
}

/// Read an env var with a default and parse it, reporting the variable
/// name on failure.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// The base URL must parse and use http or https.
fn validate_base_url(value: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar("SITE_BASE_URL".to_string(), e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "SITE_BASE_URL".to_string(),
            format!("unsupported scheme '{}'", parsed.scheme()),
        ));
    }
    Ok(())
}

/// The WhatsApp number must be non-empty ASCII digits.
///
/// `wa.me` links want the international number with no `+`, spaces, or
/// dashes, e.g. 5215538253251.
fn validate_whatsapp_number(value: &str) -> Result<(), ConfigError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            "WHATSAPP_NUMBER".to_string(),
            "must be digits only, e.g. 5215538253251".to_string(),
        ));
    }
    Ok(())
}

/// Shannon entropy of the string in bits per character.
fn entropy_bits_per_char(s: &str) -> f64 {
    let mut counts: HashMap<char, u32> = HashMap::new();
    let mut total: u32 = 0;
    for c in s.chars() {
        *counts.entry(c).or_default() += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = f64::from(total);
    counts
        .values()
        .map(|&n| {
            let p = f64::from(n) / total;
            -p * p.log2()
        })
        .sum()
}

/// Reject tokens that look like boilerplate or carry too little entropy
/// to be a real API token.
fn validate_token_strength(token: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = token.to_lowercase();

    if let Some(fragment) = PLACEHOLDER_FRAGMENTS.iter().find(|f| lower.contains(*f)) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("looks like a placeholder (contains '{fragment}')"),
        ));
    }

    let entropy = entropy_bits_per_char(token);
    if entropy < MIN_TOKEN_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "only {entropy:.2} bits/char of entropy, need at least {MIN_TOKEN_BITS_PER_CHAR:.1}; use the token Sanity generated"
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_of_empty_string_is_zero() {
        assert!(entropy_bits_per_char("").abs() < f64::EPSILON);
    }

    #[test]
    fn test_entropy_of_repeated_char_is_zero() {
        assert!(entropy_bits_per_char("zzzzzzz").abs() < f64::EPSILON);
    }

    #[test]
    fn test_entropy_of_two_equally_likely_chars_is_one_bit() {
        let entropy = entropy_bits_per_char("xyxy");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_entropy_of_random_token_clears_the_threshold() {
        // 16 distinct characters, so exactly 4 bits per char
        assert!(entropy_bits_per_char("q8#Kd2!vZ5@Wm7$e") > MIN_TOKEN_BITS_PER_CHAR);
    }

    #[test]
    fn test_token_validation_rejects_placeholders() {
        let err = validate_token_strength("paste-your-token-here", "TEST_VAR").unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_token_validation_rejects_low_entropy() {
        assert!(validate_token_strength("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb", "TEST_VAR").is_err());
    }

    #[test]
    fn test_token_validation_accepts_a_real_looking_token() {
        assert!(validate_token_strength("N4q!u8Zr#2Kd$7Vm@5Xw^1Jt&9Fb", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_validate_whatsapp_number_digits_only() {
        assert!(validate_whatsapp_number("5215538253251").is_ok());
        assert!(validate_whatsapp_number("+52 55 3825 3251").is_err());
        assert!(validate_whatsapp_number("").is_err());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("http://localhost:3000").is_ok());
        assert!(validate_base_url("https://axkan.art").is_ok());
        assert!(validate_base_url("ftp://axkan.art").is_err());
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn test_socket_addr_combines_host_and_port() {
        let config = SiteConfig {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            sanity: None,
            whatsapp_number: "5215538253251".to_string(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_sanity_config_debug_redacts_token() {
        let config = SanityConfig {
            project_id: "a1b2c3d4".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            token: Some(SecretString::from("sk_live_totally_private_value")),
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("a1b2c3d4"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("sk_live_totally_private_value"));
    }
}
