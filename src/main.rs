#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! WhichSpace: shows the active space number in the menu bar.

#[cfg(target_os = "macos")]
mod macos_main;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "whichspace=info";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
        )
        .init();

    tracing::info!("WhichSpace v{} starting", env!("CARGO_PKG_VERSION"));

    // Must exist before any observer, timer or menu action publishes
    if !whichspace::events::init_event_bus() {
        tracing::warn!("event bus was already initialized");
    }

    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    {
        tracing::error!("WhichSpace only runs on macOS");
        std::process::exit(1);
    }
}
