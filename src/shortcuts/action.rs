//! Actions offered by a shortcut's menu.

use thiserror::Error;

use super::{ShortcutEntry, ShortcutId};
use crate::config::BrowserConfig;
use crate::utils::browser;

/// A menu action on a single shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Open,
    OpenPrivate,
    Delete,
}

impl EntryAction {
    /// Menu order
    pub const ALL: [EntryAction; 3] = [
        EntryAction::Open,
        EntryAction::OpenPrivate,
        EntryAction::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EntryAction::Open => "Open in new tab",
            EntryAction::OpenPrivate => "Open in private window",
            EntryAction::Delete => "Delete",
        }
    }

    pub fn is_destructive(self) -> bool {
        matches!(self, EntryAction::Delete)
    }

    /// Run the action for `entry`
    ///
    /// Opening happens here; deletion is reported back as
    /// [`ActionEffect::Remove`] so the owning rail can drop the entry.
    pub fn perform(
        self,
        entry: &ShortcutEntry,
        browser_config: &BrowserConfig,
    ) -> Result<ActionEffect, ActionError> {
        match self {
            EntryAction::Open => {
                browser::open_url(&entry.url)?;
                Ok(ActionEffect::Opened)
            }
            EntryAction::OpenPrivate => {
                browser::open_private(&entry.url, browser_config)?;
                Ok(ActionEffect::Opened)
            }
            EntryAction::Delete => Ok(ActionEffect::Remove(entry.id.clone())),
        }
    }
}

/// What the caller has to do after an action ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
    Opened,
    Remove(ShortcutId),
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("failed to open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no private browsing command is configured")]
    NoPrivateCommand,
}
