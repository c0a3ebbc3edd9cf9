//! # Blotter Architecture
//!
//! Blotter is a single-user blog manager: posts and their comments live in one
//! JSON file, an interactive menu drives create/read/search/delete, and the whole
//! blog can be exported as a static HTML page.
//!
//! The library holds everything except terminal I/O. The binary's `cli` module
//! is a thin menu loop on top of [`api::Blog`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, lenient id parsing, styled output    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Layer (api.rs)                                     │
//! │  - Owns the in-memory collection                            │
//! │  - Persists after every mutation, writes exports            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over Vec<Post>, HTML rendering                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PostStore trait                                          │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! Post ids are the post count plus one at creation time, and comment ids the
//! parent's comment count plus one. Deleting a post and then creating another
//! can therefore produce a duplicate id. Lookups return the first match and
//! deletes remove every match.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Blog` service, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Post`, `Comment`)
//! - [`config`]: Store and export locations
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
