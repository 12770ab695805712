//! One side's rail of shortcuts.
//!
//! Hovering a dragged shortcut over an entry of its own rail reorders in
//! place; dropping it on the other rail transfers it.

pub mod shortcut_item;

use dioxus::prelude::*;

use crate::shortcuts::Side;
use crate::state::NewTabState;
use shortcut_item::ShortcutItem;

#[component]
pub fn ShortcutRail(side: Side) -> Element {
    let mut state = use_context::<NewTabState>();

    let board = state.board.read();
    let rail = board.rail(side);
    let entries = rail.entries().to_vec();
    let can_add = rail.can_add();
    drop(board);

    let is_drop_target = state
        .drag
        .read()
        .as_ref()
        .is_some_and(|payload| payload.side != side);

    rsx! {
        div {
            class: "shortcut-rail shortcut-rail--{side}",
            class: if is_drop_target { "drop-target" },
            ondragover: move |evt| {
                // Required for the rail to accept drops
                evt.prevent_default();
            },
            ondrop: move |evt| {
                evt.prevent_default();
                state.drop_on(side);
            },

            for (index, entry) in entries.into_iter().enumerate() {
                ShortcutItem {
                    key: "{entry.id}",
                    index,
                    entry,
                }
            }

            if can_add {
                button {
                    class: "shortcut-add-button",
                    title: "Add shortcut",
                    draggable: false,
                    onclick: move |_| state.open_add_form(side),
                    "+"
                }
            }
        }
    }
}
