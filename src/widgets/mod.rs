//! Built-in renderables.

mod paragraph;
mod table;

pub use paragraph::Paragraph;
pub use table::{Column, Table};
