use dioxus::prelude::*;

use crate::shortcuts::action::EntryAction;

/// Menu of actions for one shortcut
///
/// Closes on any pointer-down outside the menu; the caller closes it after
/// an action is chosen.
#[component]
pub fn EntryMenu(on_close: EventHandler<()>, on_action: EventHandler<EntryAction>) -> Element {
    rsx! {
        // Backdrop to close menu on outside pointer-down
        div {
            class: "context-menu-backdrop",
            onmousedown: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
        }

        div {
            class: "context-menu",
            role: "menu",
            onmousedown: move |evt| evt.stop_propagation(),
            onclick: move |evt| evt.stop_propagation(),

            for action in EntryAction::ALL {
                if action.is_destructive() {
                    ContextMenuSeparator {}
                }
                ContextMenuItem {
                    label: action.label(),
                    destructive: action.is_destructive(),
                    on_click: move |_| on_action.call(action),
                }
            }
        }
    }
}

// ============================================================================
// Helper Components
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct ContextMenuItemProps {
    label: &'static str,
    #[props(default = false)]
    destructive: bool,
    on_click: EventHandler<()>,
}

#[component]
fn ContextMenuItem(props: ContextMenuItemProps) -> Element {
    rsx! {
        div {
            class: if props.destructive { "context-menu-item destructive" } else { "context-menu-item" },
            role: "menuitem",
            onclick: move |_| props.on_click.call(()),

            span { class: "context-menu-label", "{props.label}" }
        }
    }
}

#[component]
fn ContextMenuSeparator() -> Element {
    rsx! {
        div { class: "context-menu-separator" }
    }
}
