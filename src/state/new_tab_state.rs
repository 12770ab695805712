//! Per-page state for the new tab page.
//!
//! # Testing Note
//!
//! `NewTabState` methods are thin wrappers that write a `Signal<Board>` and
//! then persist. Signals need a Dioxus runtime, so the logic they delegate to
//! is tested where it lives: `Board` in `shortcuts.rs`, the hover rule in
//! `drag.rs`, and `persist_sides` below.

use dioxus::prelude::*;
use std::sync::Arc;

use super::persistence::ShortcutStore;
use crate::config::Config;
use crate::drag::{classify_drop, DragPayload, DropKind, HoverGeometry};
use crate::shortcuts::{Board, RailError, ShortcutDraft, ShortcutEntry, ShortcutId, Side};

/// Everything the page needs from `main`, provided as root context
#[derive(Clone)]
pub struct Bootstrap {
    pub config: Arc<Config>,
    pub store: Arc<dyn ShortcutStore>,
}

/// Per-page application state.
///
/// `Copy` because every field is a signal or a `CopyValue`, so the state can
/// be moved into event handlers and async blocks freely.
#[derive(Clone, Copy)]
pub struct NewTabState {
    pub board: Signal<Board>,
    /// Shortcut currently being dragged, if any
    pub drag: Signal<Option<DragPayload>>,
    /// Rail the add-shortcut form is open for (`None` = form closed)
    pub add_target: Signal<Option<Side>>,
    store: CopyValue<Arc<dyn ShortcutStore>>,
}

impl NewTabState {
    /// Load both rails from the store
    ///
    /// A store that cannot be read yields empty rails; the failure is logged.
    pub fn new(config: &Config, store: Arc<dyn ShortcutStore>) -> Self {
        let stored = match store.load() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::error!(%e, "Failed to load shortcuts, starting empty");
                Default::default()
            }
        };
        tracing::debug!(
            left = stored.rail(Side::Left).len(),
            right = stored.rail(Side::Right).len(),
            "Loaded shortcuts"
        );

        let board = Board::from_stored(
            stored.left_shortcuts,
            stored.right_shortcuts,
            config.shortcuts.capacity(),
            config.shortcuts.full_rail_policy,
        );

        Self {
            board: Signal::new(board),
            drag: Signal::new(None),
            add_target: Signal::new(None),
            store: CopyValue::new(store),
        }
    }

    fn persist(&self, sides: &[Side]) {
        let store = self.store.read().clone();
        persist_sides(store.as_ref(), &self.board.peek(), sides);
    }

    pub fn open_add_form(&mut self, side: Side) {
        if !self.board.read().rail(side).can_add() {
            tracing::debug!(%side, "Rail is full, not opening add form");
            return;
        }
        self.add_target.set(Some(side));
    }

    pub fn close_add_form(&mut self) {
        self.add_target.set(None);
    }

    /// Add a shortcut to `side` and persist that rail
    pub fn add(&mut self, side: Side, draft: ShortcutDraft) -> Result<ShortcutId, RailError> {
        let id = self.board.write().add(side, draft)?;
        let count = self.board.peek().rail(side).len();
        tracing::debug!(%id, %side, count, "Added shortcut");
        self.persist(&[side]);
        Ok(id)
    }

    pub fn remove(&mut self, side: Side, id: &ShortcutId) {
        let removed = self.board.write().remove(side, id);
        if removed.is_some() {
            tracing::debug!(%id, %side, "Removed shortcut");
            self.persist(&[side]);
        }
    }

    pub fn start_drag(&mut self, entry: &ShortcutEntry, index: usize) {
        self.drag.set(Some(DragPayload::new(entry, index)));
    }

    /// Discard the gesture (drag ended outside a valid target or was cancelled)
    pub fn end_drag(&mut self) {
        if self.drag.peek().is_some() {
            self.drag.set(None);
        }
    }

    /// Pointer moved over entry `hover_index` on `side`
    pub fn hover(&mut self, side: Side, hover_index: usize, geometry: HoverGeometry) {
        let mov = {
            let mut drag = self.drag.write();
            let Some(payload) = drag.as_mut() else {
                return;
            };
            payload.hover_target(side, hover_index, geometry)
        };
        let Some((from, to)) = mov else {
            return;
        };

        match self.board.write().reorder(side, from, to) {
            Ok(()) => {}
            Err(e) => {
                tracing::debug!(%e, "Ignoring hover move");
                return;
            }
        }
        self.persist(&[side]);
    }

    /// The dragged shortcut was dropped on `side`
    pub fn drop_on(&mut self, side: Side) {
        let Some(payload) = self.drag.take() else {
            return;
        };

        match classify_drop(&payload, side) {
            // Hover moves already applied and persisted the new order
            DropKind::Reorder => {}
            DropKind::Transfer { from, to } => {
                tracing::debug!(%from, %to, "Dropped shortcut on the other rail");
                let result = self.board.write().transfer(&payload.id, to);
                match result {
                    Ok(outcome) => {
                        if let Some(evicted) = &outcome.evicted {
                            tracing::info!(id = %evicted.id, to = %outcome.to, "Evicted shortcut to make room");
                        }
                        tracing::debug!(
                            id = %payload.id,
                            label = %payload.entry.label,
                            from = %outcome.from,
                            to = %outcome.to,
                            "Transferred shortcut"
                        );
                        self.persist(&[outcome.from, outcome.to]);
                    }
                    Err(e) => {
                        tracing::warn!(%e, id = %payload.id, "Rejected shortcut transfer");
                    }
                }
            }
        }
    }
}

/// Write the current list of each rail in `sides` to the store
///
/// Failures are logged; the in-memory board stays authoritative.
pub fn persist_sides(store: &dyn ShortcutStore, board: &Board, sides: &[Side]) {
    for &side in sides {
        if let Err(e) = store.save_rail(side, board.rail(side).entries()) {
            tracing::error!(%e, %side, "Failed to save shortcuts");
        }
    }
}
