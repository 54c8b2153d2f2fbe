//! # GroceMate Shell Library
//!
//! Core library for the GroceMate hybrid shell. This is the main entry
//! point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! grocemate_mobile_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── store.rs    ◄─── Store handle wrapper
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Product listing/filtering, category counts
//! │   └── order.rs    ◄─── Order details, invoice export
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! Selection state (category, featured flag, search term) lives in the
//! webview and arrives as explicit command parameters; nothing here keeps
//! ambient filter state.

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use grocemate_store::{Store, StoreConfig};
use state::StoreState;

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// 1. Initialize logging (tracing-subscriber, RUST_LOG overridable)
/// 2. Determine store path (platform app-data dir, GROCEMATE_DB_PATH override)
/// 3. Connect to the store & run migrations
/// 4. Manage StoreState
/// 5. Register commands and launch the webview
/// ```
pub fn run() {
    init_tracing();

    info!("Starting GroceMate shell");

    tauri::Builder::default()
        .setup(|app| {
            let store_path = get_store_path(app)?;
            info!(?store_path, "Store path determined");

            let store = tauri::async_runtime::block_on(async {
                Store::new(StoreConfig::new(store_path)).await
            })?;

            info!("Store connected and migrations applied");

            app.manage(StoreState::new(store));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            commands::catalog::list_products,
            commands::catalog::list_categories,
            // Order commands
            commands::order::get_order,
            commands::order::list_orders,
            commands::order::export_invoice,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=grocemate=trace` - trace for grocemate crates only
/// - Default: INFO level, sqlx noise suppressed
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,grocemate=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the store file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.grocemate.app/grocemate.db`
/// - **Windows**: `%APPDATA%\grocemate\app\grocemate.db`
/// - **Linux**: `~/.local/share/grocemate-app/grocemate.db`
///
/// ## Development Override
/// Set `GROCEMATE_DB_PATH` to use a custom path.
fn get_store_path(_app: &tauri::App) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("GROCEMATE_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "grocemate", "app")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("grocemate.db"))
}
