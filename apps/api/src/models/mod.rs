pub mod content;
pub mod design;
