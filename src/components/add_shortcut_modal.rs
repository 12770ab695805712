//! Modal form for adding a shortcut to a rail.

use dioxus::prelude::*;
use std::time::Duration;

use crate::favicon;
use crate::form::ShortcutForm;
use crate::state::{Bootstrap, NewTabState};

#[component]
pub fn AddShortcutModal() -> Element {
    let mut state = use_context::<NewTabState>();
    let bootstrap = use_context::<Bootstrap>();

    let mut fields = use_signal(ShortcutForm::default);
    let mut error = use_signal(|| None::<String>);
    // Bumped on every URL keystroke; a probe only applies its result if the
    // token is unchanged when it finishes
    let mut probe_token = use_signal(|| 0u64);

    let Some(side) = *state.add_target.read() else {
        return rsx! {};
    };

    let mut reset = move || {
        fields.write().clear();
        error.set(None);
        let token = probe_token.peek().wrapping_add(1);
        probe_token.set(token);
    };

    let mut close = move || {
        reset();
        state.close_add_form();
    };

    let handle_url_input = {
        let favicon_config = bootstrap.config.favicon.clone();
        move |evt: Event<FormData>| {
            let value = evt.value();
            {
                let mut fields = fields.write();
                fields.url = value.clone();
                fields.icon = None;
            }

            let token = probe_token.peek().wrapping_add(1);
            probe_token.set(token);
            if value.trim().is_empty() {
                return;
            }

            let favicon_config = favicon_config.clone();
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(favicon_config.debounce_ms)).await;
                if *probe_token.peek() != token {
                    return;
                }

                let result = tokio::task::spawn_blocking(move || {
                    favicon::resolve_icon(&value, &favicon_config)
                })
                .await;

                if *probe_token.peek() != token {
                    return;
                }
                match result {
                    Ok(Ok(found)) => fields.write().icon = Some(found),
                    Ok(Err(e)) => tracing::debug!(%e, "Favicon probe failed, using fallback"),
                    Err(e) => tracing::debug!(%e, "Favicon probe task failed"),
                }
            });
        }
    };

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        error.set(None);

        let submitted = fields.peek().submit();
        let draft = match submitted {
            Ok(draft) => draft,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        match state.add(side, draft) {
            Ok(_) => close(),
            Err(e) => {
                tracing::warn!(%e, %side, "Failed to add shortcut");
                error.set(Some(format!("Cannot add shortcut: {e}")));
            }
        }
    };

    let ShortcutForm {
        label: label_value,
        url: url_value,
        icon: icon_preview,
    } = fields();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| close(),

            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "modal-close-button",
                    r#type: "button",
                    title: "Close",
                    onclick: move |_| close(),
                    "✕"
                }

                h2 { class: "modal-title", "Add New Shortcut" }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "modal-field",
                        label { r#for: "shortcut-title", "Title *" }
                        input {
                            id: "shortcut-title",
                            r#type: "text",
                            placeholder: "e.g., Google",
                            autofocus: true,
                            value: "{label_value}",
                            oninput: move |evt| fields.write().label = evt.value(),
                        }
                    }

                    div {
                        class: "modal-field",
                        label { r#for: "shortcut-url", "URL *" }
                        input {
                            id: "shortcut-url",
                            r#type: "text",
                            placeholder: "e.g., google.com or https://google.com",
                            value: "{url_value}",
                            oninput: handle_url_input,
                        }
                    }

                    div {
                        class: "modal-field modal-icon-preview",
                        span { class: "modal-field-label", "Icon" }
                        if let Some(src) = icon_preview {
                            img { class: "modal-icon", src: "{src}", alt: "Website icon" }
                            span { class: "modal-hint", "Favicon detected" }
                        } else {
                            span { class: "modal-icon modal-icon--fallback", "{favicon::FALLBACK_ICON}" }
                            span { class: "modal-hint", "Default icon will be used" }
                        }
                    }

                    if let Some(message) = error() {
                        div { class: "modal-error", "{message}" }
                    }

                    div {
                        class: "modal-actions",
                        button {
                            class: "modal-button",
                            r#type: "button",
                            onclick: move |_| close(),
                            "Cancel"
                        }
                        button {
                            class: "modal-button modal-button--primary",
                            r#type: "submit",
                            "Add Shortcut"
                        }
                    }
                }
            }
        }
    }
}
