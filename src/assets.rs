use dioxus::prelude::*;

pub const MAIN_STYLE: Asset = asset!("/assets/newtab.css");
