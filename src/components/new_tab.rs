use dioxus::prelude::*;

use super::add_shortcut_modal::AddShortcutModal;
use super::search_bar::SearchBar;
use super::shortcut_rail::ShortcutRail;
use crate::shortcuts::Side;
use crate::state::{Bootstrap, NewTabState};

/// Root component: left rail, search column, right rail
#[component]
pub fn NewTab() -> Element {
    let bootstrap = use_context::<Bootstrap>();
    use_context_provider(|| NewTabState::new(&bootstrap.config, bootstrap.store.clone()));

    let appearance = &bootstrap.config.appearance;
    let mut style = appearance.palette.palette().css_variables();
    if let Some(image) = &appearance.background_image {
        style.push_str(&format!(" background-image: url(\"{image}\");"));
    }
    let bento_image = appearance.bento_image.clone();

    rsx! {
        div {
            class: "new-tab",
            class: if appearance.background_image.is_some() { "new-tab--wallpaper" },
            style: "{style}",

            ShortcutRail { side: Side::Left }

            main {
                class: "new-tab-center",

                if let Some(src) = bento_image {
                    img {
                        class: "new-tab-bento",
                        src: "{src}",
                        alt: "",
                        draggable: false,
                    }
                }

                SearchBar {}
            }

            ShortcutRail { side: Side::Right }

            AddShortcutModal {}
        }
    }
}
