mod assets;
mod components;
mod config;
mod drag;
mod favicon;
mod form;
mod search;
mod shortcuts;
mod state;
mod theme;
mod utils;
mod window;

use anyhow::Context as _;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use config::Config;
use state::{Bootstrap, JsonFileStore, MemoryStore, ShortcutStore};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    compile_time::datetime_str!(),
    ")",
);

/// Gitpaper: a new tab page with two rails of shortcuts
#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about,
    long_about = "Gitpaper: a new tab page with two rails of shortcuts\n\n\
        Shortcuts can be reordered by dragging within a rail, or moved to\n\
        the other rail by dropping them there. Both rails are saved between\n\
        sessions.",
    after_long_help = "Examples:\n\
        \x20 gitpaper                           Launch with the default config\n\
        \x20 gitpaper --config ./config.json    Use another config file\n\
        \x20 gitpaper --ephemeral               Do not read or save shortcuts"
)]
struct Cli {
    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding shortcuts.json
    #[arg(long, value_name = "DIR", conflicts_with = "ephemeral")]
    data_dir: Option<PathBuf>,

    /// Keep shortcuts in memory only
    #[arg(long)]
    ephemeral: bool,
}

const DEFAULT_LOGLEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first (before any other initialization)
    let cli = Cli::parse();

    // Load environment variables from .env file
    if let Ok(dotenv) = dotenvy::dotenv() {
        println!("Loaded .env file from: {}", dotenv.display());
    }
    init_tracing();

    let config_path = cli.config.unwrap_or_else(Config::path);
    let config = Arc::new(Config::load_from(&config_path));

    let store: Arc<dyn ShortcutStore> = if cli.ephemeral {
        tracing::info!("Running with in-memory shortcuts");
        Arc::new(MemoryStore::default())
    } else if let Some(dir) = cli.data_dir {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        let store = JsonFileStore::in_dir(&dir);
        tracing::info!(path = %store.path().display(), "Using shortcut storage");
        Arc::new(store)
    } else {
        let store = JsonFileStore::new(JsonFileStore::default_path());
        tracing::info!(path = %store.path().display(), "Using shortcut storage");
        Arc::new(store)
    };

    tracing::info!(version = VERSION, config = %config_path.display(), "Starting");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window::create_window_config())
        .with_context(Bootstrap { config, store })
        .launch(components::new_tab::NewTab);

    Ok(())
}

fn init_tracing() {
    let silence_filter = tracing_subscriber::filter::filter_fn(|metadata| {
        // Filter out specific error from dioxus_core::properties:136
        // Known issue: https://github.com/DioxusLabs/dioxus/issues/3872
        metadata.target() != "dioxus_core::properties::__component_called_as_function"
    });

    let env_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(silence_filter.clone());

    let registry = tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer);

    // On macOS, also log to Console.app via oslog
    #[cfg(target_os = "macos")]
    let registry = registry.with(
        tracing_oslog::OsLogger::new("com.gitpaper.NewTab", "default").with_filter(silence_filter),
    );

    registry.init();
}
