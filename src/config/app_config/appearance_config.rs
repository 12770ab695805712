use serde::{Deserialize, Serialize};

use crate::theme::PaletteName;

/// Look of the new tab page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceConfig {
    pub palette: PaletteName,
    /// Full-page wallpaper image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    /// Image shown above the search bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bento_image: Option<String>,
}
