use serde::{Deserialize, Serialize};

/// Search engine used by the search bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub action_url: String,
    pub query_param: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            action_url: "https://www.google.com/search".to_string(),
            query_param: "q".to_string(),
        }
    }
}
