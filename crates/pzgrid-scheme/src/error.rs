use pzgrid_core::GridError;

/// Errors that can occur while decoding a compact string.
///
/// Decoders fail fast: the first malformed token aborts the decode and no
/// partial grid is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DecodeError {
    /// A grid buffer operation failed (out-of-bounds write or invalid dimensions).
    #[display("{_0}")]
    Grid(#[from] GridError),
    /// A skip or assignment would run past the last cell.
    #[display("move beyond grid: cursor={cursor}, step={step}, total={total}")]
    GridOverflow {
        /// Cursor position before the move.
        cursor: usize,
        /// Number of cells the move needed (1 for an assignment).
        step: usize,
        /// Number of cells in the grid.
        total: usize,
    },
    /// A bracketed value is unterminated or not a decimal number.
    #[display("malformed bracket at byte {offset}: {reason}")]
    MalformedBracket {
        /// Byte offset of the opening `[`.
        offset: usize,
        /// What is wrong with the bracket.
        reason: BracketFault,
    },
    /// The encoding assigned a different number of cells than the grid holds.
    #[display("number of assigned cells ({assigned}) does not match total cells ({total})")]
    CellCountMismatch {
        /// Cells assigned by the encoding.
        assigned: usize,
        /// Number of cells in the grid.
        total: usize,
    },
    /// The scheme needs edge clues but none were supplied.
    #[display("scheme `{scheme}` requires edge clues")]
    MissingClues {
        /// Name of the scheme.
        scheme: &'static str,
    },
    /// No scheme is registered under the requested puzzle type.
    #[display("unknown puzzle type: {name}")]
    UnknownPuzzleType {
        /// The requested puzzle type.
        name: String,
    },
}

/// The ways a bracketed value can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BracketFault {
    /// `[` has no matching `]`.
    #[display("unmatched '['")]
    Unterminated,
    /// The bracket contents are empty or contain a non-digit.
    #[display("invalid number in brackets: {contents:?}")]
    NonNumeric {
        /// Text between the brackets.
        contents: String,
    },
}
