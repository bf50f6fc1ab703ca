//! Domain entities - posts, comments, and the post kind dispatch.

mod comment;
mod post;

pub use comment::Comment;
pub use post::{ItemStatus, Post, PostKind};

/// Creation timestamps use a fixed human-readable format in the host's
/// local time zone; they are stored and compared as plain text.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
