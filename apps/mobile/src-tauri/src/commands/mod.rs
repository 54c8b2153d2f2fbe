//! # Tauri Commands
//!
//! Command handlers invoked from the webview. Each submodule owns the DTOs
//! for its screen; internal domain types never cross the boundary directly.

pub mod catalog;
pub mod order;
