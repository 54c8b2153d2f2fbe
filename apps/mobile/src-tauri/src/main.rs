//! # GroceMate Shell Entry Point
//!
//! This is the main entry point for the Tauri hybrid shell.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         GroceMate Shell                                 │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  ┌────────────────────────────────────────────────────────────┐  │  │
//! │  │  │                   Ionic Frontend                           │  │  │
//! │  │  │  • Products screen      • Category dropdown                │  │  │
//! │  │  │  • Order details        • Invoice download                 │  │  │
//! │  │  └────────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')                           │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► logging, store path, state, command registry     │  │
//! │  │  commands/ ──► list_products, list_categories, get_order,       │  │
//! │  │                export_invoice                                    │  │
//! │  │  state/ ─────► StoreState                                       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                   SQLite device store (grocemate.db)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // The actual setup is in lib.rs for better testability
    grocemate_mobile_lib::run();
}
