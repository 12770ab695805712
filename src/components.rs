pub mod add_shortcut_modal;
pub mod entry_menu;
pub mod new_tab;
pub mod search_bar;
pub mod shortcut_rail;
