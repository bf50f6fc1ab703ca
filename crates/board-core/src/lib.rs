//! # Board Core
//!
//! The domain layer of the community board backend: the post/comment data
//! model, the catalog that owns it, and the persistence port the catalog
//! writes through. No HTTP or filesystem code lives here.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod ports;

pub use catalog::Catalog;
pub use error::DomainError;
