// Skill extraction and comparison engine.
// Pure, synchronous functions over the immutable skill dictionary. No I/O here;
// handlers.rs is the only part that touches axum.

pub mod comparator;
pub mod dictionary;
pub mod extractor;
pub mod handlers;
pub mod suggestions;
