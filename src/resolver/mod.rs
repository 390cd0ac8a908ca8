//! Tag resolution: output languages, known tags, and the caching resolver

pub mod engine;
pub mod tag;

pub use engine::{ResolveError, TagResolver};
pub use tag::{Language, Tag};
