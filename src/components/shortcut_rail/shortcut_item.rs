use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::entry_menu::EntryMenu;
use crate::drag::HoverGeometry;
use crate::shortcuts::action::{ActionEffect, EntryAction};
use crate::shortcuts::ShortcutEntry;
use crate::state::{Bootstrap, NewTabState};

/// A single draggable shortcut on a rail
#[component]
pub fn ShortcutItem(index: usize, entry: ShortcutEntry) -> Element {
    let mut state = use_context::<NewTabState>();
    let bootstrap = use_context::<Bootstrap>();
    let side = entry.side;

    let mut menu_open = use_signal(|| false);

    // Mounted element, used to read the entry's bounds while hovering
    let mut element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let is_dragging = state
        .drag
        .read()
        .as_ref()
        .is_some_and(|payload| payload.id == entry.id);

    let handle_dragover = move |evt: Event<DragData>| async move {
        evt.prevent_default();
        if state.drag.peek().is_none() {
            return;
        }
        let pointer_y = evt.client_coordinates().y;

        // Clone before await to avoid holding GenerationalRef across the await point
        let mounted = element.read().clone();
        let Some(mounted) = mounted else {
            return;
        };
        match mounted.get_client_rect().await {
            Ok(rect) => state.hover(
                side,
                index,
                HoverGeometry {
                    top: rect.origin.y,
                    height: rect.size.height,
                    pointer_y,
                },
            ),
            Err(e) => tracing::debug!(?e, "Failed to read shortcut bounds"),
        }
    };

    let run_action = {
        let entry = entry.clone();
        let browser_config = bootstrap.config.browser.clone();
        move |action: EntryAction| {
            menu_open.set(false);
            match action.perform(&entry, &browser_config) {
                Ok(ActionEffect::Opened) => {}
                Ok(ActionEffect::Remove(id)) => state.remove(side, &id),
                Err(e) => tracing::error!(%e, ?action, "Shortcut action failed"),
            }
        }
    };

    let open_on_click = {
        let mut run_action = run_action.clone();
        move |evt: Event<MouseData>| {
            evt.prevent_default();
            run_action(EntryAction::Open);
        }
    };

    rsx! {
        div {
            class: "shortcut-item",
            class: if is_dragging { "dragging" },
            title: "{entry.url}",
            draggable: "true",
            onmounted: move |evt| {
                element.set(Some(evt.data()));
            },
            ondragstart: {
                let entry = entry.clone();
                move |_| {
                    state.start_drag(&entry, index);
                }
            },
            ondragover: handle_dragover,
            ondragend: move |_| state.end_drag(),

            if entry.has_image_icon() {
                img {
                    class: "shortcut-item-icon",
                    src: "{entry.icon}",
                    alt: "{entry.label}",
                    draggable: false,
                }
            } else {
                span { class: "shortcut-item-icon shortcut-item-glyph", "{entry.icon}" }
            }

            a {
                class: "shortcut-item-label",
                href: "{entry.url}",
                draggable: false,
                onclick: open_on_click,
                "{entry.label}"
            }

            button {
                class: "shortcut-item-menu-button",
                title: "More actions",
                draggable: false,
                onclick: move |evt| {
                    evt.stop_propagation();
                    menu_open.toggle();
                },
                "⋮"
            }

            if menu_open() {
                EntryMenu {
                    on_close: move |_| menu_open.set(false),
                    on_action: run_action,
                }
            }
        }
    }
}
