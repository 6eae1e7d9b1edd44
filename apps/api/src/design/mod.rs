// Design Canvas: the live session, snippet assembly, rendering and hand-off.

pub mod canvas;
pub mod export;
pub mod handlers;
pub mod session;
pub mod snippets;
pub mod upload;
