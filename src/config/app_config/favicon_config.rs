use serde::{Deserialize, Serialize};

/// Default favicon service; `{domain}` is replaced with the shortcut's host
pub const DEFAULT_FAVICON_SERVICE_URL: &str =
    "https://www.google.com/s2/favicons?domain={domain}&sz=64";

/// Configuration for favicon lookup in the add-shortcut form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaviconConfig {
    pub service_url: String,
    /// Probe timeout in milliseconds
    pub timeout_ms: u64,
    /// Delay after the last keystroke before probing, in milliseconds
    pub debounce_ms: u64,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_FAVICON_SERVICE_URL.to_string(),
            timeout_ms: 3000,
            debounce_ms: 500,
        }
    }
}
