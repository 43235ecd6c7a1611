pub mod text;

pub use text::{capitalize_first, escape_markdown_cell, truncate_chars};
