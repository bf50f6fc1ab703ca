//! # Board Infrastructure
//!
//! Concrete implementations of the `PostStore` port defined in
//! `board-core`: the flat JSON document on disk and an in-memory store for
//! tests and no-persistence runs.

pub mod store;

pub use store::{InMemoryStore, JsonFileStore};
