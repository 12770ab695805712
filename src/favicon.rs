//! Favicon lookup for new shortcuts.
//!
//! The probe is advisory: any failure simply means the shortcut is shown
//! with [`FALLBACK_ICON`].

use std::time::Duration;

use percent_encoding::utf8_percent_encode;
use thiserror::Error;

use crate::config::FaviconConfig;
use crate::form::host_of;
use crate::search::QUERY_COMPONENT;

/// Glyph used when no favicon could be resolved
pub const FALLBACK_ICON: &str = "🔗";

/// Placeholder replaced with the host name in the favicon service URL
const DOMAIN_PLACEHOLDER: &str = "{domain}";

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("cannot derive a host from {0:?}")]
    NoHost(String),
    #[error("HTTP request failed: {0}")]
    Request(#[from] ureq::Error),
    #[error("response is not an image (content-type: {0})")]
    NotAnImage(String),
}

/// Favicon service URL for the host of `input`
pub fn favicon_url(service_url: &str, input: &str) -> Option<String> {
    let host = host_of(input)?;
    let encoded = utf8_percent_encode(&host, QUERY_COMPONENT).to_string();
    Some(service_url.replace(DOMAIN_PLACEHOLDER, &encoded))
}

/// Check that `url` answers with an image
fn probe(url: &str, timeout: Duration) -> Result<(), ProbeError> {
    let response = ureq::get(url)
        .config()
        .timeout_global(Some(timeout))
        .build()
        .call()?;

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(';').next().unwrap_or(s).trim().to_string());

    if let Some(ct) = content_type {
        if !ct.starts_with("image/") {
            return Err(ProbeError::NotAnImage(ct));
        }
    }
    Ok(())
}

/// Derive and probe a favicon for `input`, blocking for at most the
/// configured timeout
///
/// Returns the favicon URL when it is reachable.
pub fn resolve_icon(input: &str, config: &FaviconConfig) -> Result<String, ProbeError> {
    let url = favicon_url(&config.service_url, input)
        .ok_or_else(|| ProbeError::NoHost(input.to_string()))?;
    probe(&url, Duration::from_millis(config.timeout_ms))?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_url_uses_host() {
        let config = FaviconConfig::default();
        assert_eq!(
            favicon_url(&config.service_url, "github.com/rust-lang").as_deref(),
            Some("https://www.google.com/s2/favicons?domain=github.com&sz=64")
        );
    }

    #[test]
    fn test_favicon_url_custom_service() {
        assert_eq!(
            favicon_url("https://icons.example/{domain}.ico", "https://docs.rs/serde").as_deref(),
            Some("https://icons.example/docs.rs.ico")
        );
    }

    #[test]
    fn test_resolve_without_host_fails_fast() {
        let result = resolve_icon("", &FaviconConfig::default());
        assert!(matches!(result, Err(ProbeError::NoHost(_))));
    }
}
