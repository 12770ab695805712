//! Shortcut rails for the new tab page.
//!
//! This module provides:
//! - `ShortcutEntry`: A single link shown on one of the two rails
//! - `Rail`: An ordered, bounded list of entries for one side
//! - `Board`: Both rails together, the unit that transfers mutate atomically

pub mod action;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum number of shortcuts a rail holds by default
pub const DEFAULT_RAIL_CAPACITY: usize = 4;

/// Which rail an entry belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Key under which this rail's list is persisted
    pub fn storage_key(self) -> &'static str {
        match self {
            Side::Left => "leftShortcuts",
            Side::Right => "rightShortcuts",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Opaque identifier assigned when a shortcut is created
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutId(String);

impl ShortcutId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(format!("shortcut-{}", uuid::Uuid::new_v4().simple()))
    }
}

impl From<&str> for ShortcutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A shortcut before it has been given an id and a rail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutDraft {
    pub label: String,
    pub url: String,
    /// Favicon URL or a fallback glyph
    pub icon: String,
}

/// A single shortcut shown on a rail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutEntry {
    pub id: ShortcutId,
    pub label: String,
    pub url: String,
    pub icon: String,
    /// Rail currently holding this entry (rewritten on load and transfer)
    #[serde(default)]
    pub side: Side,
}

impl ShortcutEntry {
    pub fn from_draft(draft: ShortcutDraft, side: Side) -> Self {
        Self {
            id: ShortcutId::generate(),
            label: draft.label,
            url: draft.url,
            icon: draft.icon,
            side,
        }
    }

    /// Whether `icon` points at an image rather than holding a glyph
    pub fn has_image_icon(&self) -> bool {
        let icon = self.icon.as_str();
        icon.starts_with("http://") || icon.starts_with("https://") || icon.starts_with("data:")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RailError {
    #[error("cannot move an entry onto its own position ({index})")]
    SameIndex { index: usize },
    #[error("index {index} is out of range for a rail of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("the {side} rail is full ({capacity} entries)")]
    Full { side: Side, capacity: usize },
    #[error("shortcut {0} is already on the {1} rail")]
    SameRail(ShortcutId, Side),
    #[error("shortcut {0} not found")]
    NotFound(ShortcutId),
}

/// What happens when an entry is transferred onto a rail that is already full
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FullRailPolicy {
    /// Refuse the transfer; the entry stays on its origin rail
    #[default]
    Reject,
    /// Delete the destination's first entry to make room
    EvictOldest,
}

/// An ordered, bounded list of shortcuts for one side
#[derive(Debug, Clone, PartialEq)]
pub struct Rail {
    side: Side,
    capacity: usize,
    entries: Vec<ShortcutEntry>,
}

impl Rail {
    pub fn new(side: Side, capacity: usize) -> Self {
        Self {
            side,
            capacity,
            entries: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[ShortcutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Whether the "add shortcut" affordance should be shown
    pub fn can_add(&self) -> bool {
        !self.is_full()
    }

    pub fn position(&self, id: &ShortcutId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    /// Move the entry at `drag_index` so that it ends up at `hover_index`
    ///
    /// The entry is removed first and then reinserted, so dragging index 0
    /// onto index 2 of `[a, b, c, d]` yields `[b, c, a, d]`.
    pub fn reorder(&mut self, drag_index: usize, hover_index: usize) -> Result<(), RailError> {
        let len = self.entries.len();
        for index in [drag_index, hover_index] {
            if index >= len {
                return Err(RailError::IndexOutOfRange { index, len });
            }
        }
        if drag_index == hover_index {
            return Err(RailError::SameIndex { index: drag_index });
        }

        let entry = self.entries.remove(drag_index);
        self.entries.insert(hover_index, entry);
        Ok(())
    }

    /// Append an entry, rewriting its `side` to this rail
    pub fn push(&mut self, mut entry: ShortcutEntry) -> Result<(), RailError> {
        if self.is_full() {
            return Err(RailError::Full {
                side: self.side,
                capacity: self.capacity,
            });
        }
        entry.side = self.side;
        self.entries.push(entry);
        Ok(())
    }

    /// Remove an entry by id; `None` if it is not on this rail
    pub fn remove(&mut self, id: &ShortcutId) -> Option<ShortcutEntry> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    fn evict_oldest(&mut self) -> Option<ShortcutEntry> {
        (!self.is_empty()).then(|| self.entries.remove(0))
    }
}

/// Result of a successful cross-rail transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome {
    pub from: Side,
    pub to: Side,
    /// Entry deleted from the destination to make room (`EvictOldest` only)
    pub evicted: Option<ShortcutEntry>,
}

/// Both shortcut rails
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    left: Rail,
    right: Rail,
    policy: FullRailPolicy,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_RAIL_CAPACITY, FullRailPolicy::default())
    }
}

impl Board {
    pub fn new(capacity: usize, policy: FullRailPolicy) -> Self {
        Self {
            left: Rail::new(Side::Left, capacity),
            right: Rail::new(Side::Right, capacity),
            policy,
        }
    }

    /// Build a board from previously stored lists
    ///
    /// Stored data is not trusted: sides are rewritten to match the list an
    /// entry was found in, duplicate ids are dropped (left rail wins) and
    /// lists longer than `capacity` are truncated.
    pub fn from_stored(
        left: Vec<ShortcutEntry>,
        right: Vec<ShortcutEntry>,
        capacity: usize,
        policy: FullRailPolicy,
    ) -> Self {
        let mut board = Self::new(capacity, policy);
        for (side, entries) in [(Side::Left, left), (Side::Right, right)] {
            for entry in entries {
                if board.find(&entry.id).is_some() {
                    tracing::warn!(id = %entry.id, %side, "Dropping stored shortcut with duplicate id");
                    continue;
                }
                let id = entry.id.clone();
                if let Err(e) = board.rail_mut(side).push(entry) {
                    tracing::warn!(%id, %e, "Dropping stored shortcut beyond rail capacity");
                }
            }
        }
        board
    }

    pub fn rail(&self, side: Side) -> &Rail {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn rail_mut(&mut self, side: Side) -> &mut Rail {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Locate an entry on either rail
    pub fn find(&self, id: &ShortcutId) -> Option<(Side, usize)> {
        Side::ALL
            .into_iter()
            .find_map(|side| self.rail(side).position(id).map(|index| (side, index)))
    }

    /// Create a new entry from a draft and append it to `side`
    pub fn add(&mut self, side: Side, draft: ShortcutDraft) -> Result<ShortcutId, RailError> {
        let entry = ShortcutEntry::from_draft(draft, side);
        let id = entry.id.clone();
        self.rail_mut(side).push(entry)?;
        Ok(id)
    }

    pub fn reorder(
        &mut self,
        side: Side,
        drag_index: usize,
        hover_index: usize,
    ) -> Result<(), RailError> {
        self.rail_mut(side).reorder(drag_index, hover_index)
    }

    pub fn remove(&mut self, side: Side, id: &ShortcutId) -> Option<ShortcutEntry> {
        self.rail_mut(side).remove(id)
    }

    /// Move an entry from whichever rail holds it onto the end of `to`
    ///
    /// Both rails are updated inside this call. On error neither rail changes.
    pub fn transfer(&mut self, id: &ShortcutId, to: Side) -> Result<TransferOutcome, RailError> {
        let (from, _) = self
            .find(id)
            .ok_or_else(|| RailError::NotFound(id.clone()))?;
        if from == to {
            return Err(RailError::SameRail(id.clone(), to));
        }

        let mut evicted = None;
        if self.rail(to).is_full() {
            match self.policy {
                FullRailPolicy::Reject => {
                    let rail = self.rail(to);
                    return Err(RailError::Full {
                        side: to,
                        capacity: rail.capacity(),
                    });
                }
                FullRailPolicy::EvictOldest => {
                    evicted = self.rail_mut(to).evict_oldest();
                }
            }
        }

        let entry = self
            .rail_mut(from)
            .remove(id)
            .ok_or_else(|| RailError::NotFound(id.clone()))?;
        self.rail_mut(to).push(entry)?;

        Ok(TransferOutcome { from, to, evicted })
    }
}
