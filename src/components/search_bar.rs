use dioxus::prelude::*;

use crate::search::resolve_query;
use crate::state::Bootstrap;
use crate::utils::browser::open_url;

/// Web search box in the middle of the page
///
/// Submitting opens the query in the default browser, or the address
/// directly when the input looks like one.
#[component]
pub fn SearchBar() -> Element {
    let bootstrap = use_context::<Bootstrap>();
    let mut query = use_signal(String::new);

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Some(url) = resolve_query(&query.peek(), &bootstrap.config.search) else {
            return;
        };
        match open_url(&url) {
            Ok(()) => query.set(String::new()),
            Err(e) => tracing::error!(%e, "Failed to open search"),
        }
    };

    rsx! {
        form {
            class: "search-bar",
            role: "search",
            onsubmit: handle_submit,

            input {
                class: "search-input",
                r#type: "search",
                name: "q",
                placeholder: "Search the web",
                autocomplete: "off",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }

            button {
                class: "search-button",
                r#type: "submit",
                title: "Search",
                "Search"
            }
        }
    }
}
