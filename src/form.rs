//! Validation for the "add shortcut" form.

use thiserror::Error;
use url::Url;

use crate::favicon::FALLBACK_ICON;
use crate::shortcuts::ShortcutDraft;

/// Validation failures; `Display` is the message shown in the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingField,
    #[error("Please enter a valid URL")]
    InvalidUrl { input: String },
}

/// Raw user input of the add-shortcut form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutForm {
    pub label: String,
    pub url: String,
    /// Favicon URL found by the probe, if any
    pub icon: Option<String>,
}

impl ShortcutForm {
    /// Validate the input and build a draft ready to be placed on a rail
    pub fn submit(&self) -> Result<ShortcutDraft, FormError> {
        let label = self.label.trim();
        let url = self.url.trim();
        if label.is_empty() || url.is_empty() {
            return Err(FormError::MissingField);
        }

        let url = normalize_url(url).ok_or_else(|| FormError::InvalidUrl {
            input: url.to_string(),
        })?;

        let icon = self
            .icon
            .clone()
            .filter(|icon| !icon.is_empty())
            .unwrap_or_else(|| FALLBACK_ICON.to_string());

        Ok(ShortcutDraft {
            label: label.to_string(),
            url,
            icon,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Prefix `https://` when no scheme was typed and check the result is an
/// absolute URL with a host
///
/// The returned string is the prefixed input, not the re-serialized URL, so
/// `example.com` becomes `https://example.com` without a trailing slash.
pub fn normalize_url(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let formatted = if has_scheme(input) {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    let parsed = Url::parse(&formatted).ok()?;
    parsed.host_str().filter(|host| !host.is_empty())?;
    Some(formatted)
}

/// Whether `input` starts with `scheme://`
///
/// Only a leading scheme counts; `://` later in the path or query does not.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Host name of a (possibly scheme-less) URL
pub fn host_of(input: &str) -> Option<String> {
    let url = normalize_url(input)?;
    Url::parse(&url).ok()?.host_str().map(str::to_string)
}
