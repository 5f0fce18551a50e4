/// Errors raised by grid buffer operations and grid-text parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A write or cursor move would land outside the grid.
    #[display("index {index} is out of bounds for a grid of {total} cells")]
    OutOfBounds {
        /// The offending index (for cursor moves, the would-be cursor).
        index: usize,
        /// Number of cells in the grid.
        total: usize,
    },
    /// A grid with an empty extent, or with more cells than `usize` can count,
    /// was requested.
    #[display("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// A grid-text row has a different number of tokens than the first row.
    #[display("row {row} has {found} tokens, expected {expected}")]
    RaggedRow {
        /// Zero-based row number.
        row: usize,
        /// Token count of the first row.
        expected: usize,
        /// Token count of this row.
        found: usize,
    },
    /// Grid text contains no rows.
    #[display("grid text is empty")]
    EmptyGrid,
}
