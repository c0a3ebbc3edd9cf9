//! # Command Layer
//!
//! Business logic for every blog operation, one module per operation. Commands
//! work on the in-memory collection held by [`crate::api::Blog`] and return plain
//! Rust values. They never persist, print, or touch the filesystem; the service
//! decides when to save.

pub mod comment;
pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod search;
