// State module - manages new tab page state

mod new_tab_state;
pub use new_tab_state::{Bootstrap, NewTabState};

mod persistence;
pub use persistence::{JsonFileStore, MemoryStore, ShortcutStore};
