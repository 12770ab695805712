use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};

use crate::assets::MAIN_STYLE;

const DEFAULT_WIDTH: u32 = 1280;
const DEFAULT_HEIGHT: u32 = 800;

/// Window config for the new tab page
pub fn create_window_config() -> Config {
    Config::new()
        .with_menu(None)
        .with_window(
            WindowBuilder::new()
                .with_title("New Tab")
                .with_inner_size(LogicalSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)),
        )
        // Add main style in config. Otherwise the style takes time to load and
        // the window appears unstyled for a brief moment.
        .with_custom_head(format!(r#"<link rel="stylesheet" href="{MAIN_STYLE}">"#))
}
