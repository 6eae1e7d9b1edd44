// Content Resolver: external generation with a deterministic canned fallback.
// The generation service itself lives in `generation`; this module is its client.

pub mod fallback;
pub mod resolver;

pub use resolver::{ContentResolver, ContentSource};
