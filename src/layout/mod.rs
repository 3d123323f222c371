//! Column layout for table-like widgets.

pub mod ratio;
mod widths;

pub use widths::{resolve_widths, ColumnConstraint, ColumnWidths};

/// Misuse of the column/row lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Columns must be declared before any row is added")]
    ColumnAfterRows,

    #[error("Row has {cells} cells but the table only has {columns} columns")]
    TooManyCells { cells: usize, columns: usize },
}
