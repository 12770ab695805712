//! Search bar query handling.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SearchConfig;
use crate::form::{host_of, normalize_url};

/// Characters escaped when a value is placed into a query string
pub const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

/// Turn search bar input into the URL to open
///
/// Input that looks like an address is opened directly; anything else goes
/// to the configured search engine. Blank input yields `None`.
pub fn resolve_query(input: &str, config: &SearchConfig) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if looks_like_address(input) {
        if let Some(url) = normalize_url(input) {
            return Some(url);
        }
    }

    let query = utf8_percent_encode(input, QUERY_COMPONENT);
    let separator = if config.action_url.contains('?') {
        '&'
    } else {
        '?'
    };
    Some(format!(
        "{}{}{}={}",
        config.action_url, separator, config.query_param, query
    ))
}

fn looks_like_address(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    if input.starts_with("http://") || input.starts_with("https://") {
        return true;
    }
    host_of(input).is_some_and(|host| host.contains('.') && !host.ends_with('.'))
}
