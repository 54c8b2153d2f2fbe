//! # Application State
//!
//! State types managed by Tauri and injected into command handlers.

mod store;

pub use store::StoreState;
