//! # Board Shared
//!
//! Request/response types shared between the backend and the browser front
//! end.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
