//! # Repository Module
//!
//! Repository implementations over the SQLite pool.
//!
//! ```text
//! repository/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Products and categories (reads + seeding inserts)
//! └── order.rs    ◄─── Order lookup by number-or-id, list, insert
//! ```
//!
//! Repositories translate rows into `grocemate-core` domain types; all
//! business semantics (filtering, invoice math) stay in the core crate.

pub mod catalog;
pub mod order;
