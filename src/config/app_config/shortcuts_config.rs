use serde::{Deserialize, Serialize};

use crate::shortcuts::{FullRailPolicy, DEFAULT_RAIL_CAPACITY};

fn default_max_per_rail() -> usize {
    DEFAULT_RAIL_CAPACITY
}

/// Configuration for the shortcut rails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutsConfig {
    /// Maximum number of shortcuts on each rail
    #[serde(default = "default_max_per_rail")]
    pub max_per_rail: usize,
    /// What to do when a shortcut is dragged onto a full rail: "reject" or "evictOldest"
    #[serde(default)]
    pub full_rail_policy: FullRailPolicy,
}

impl ShortcutsConfig {
    /// Rail capacity, never below one
    pub fn capacity(&self) -> usize {
        self.max_per_rail.max(1)
    }
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            max_per_rail: default_max_per_rail(),
            full_rail_policy: FullRailPolicy::default(),
        }
    }
}
