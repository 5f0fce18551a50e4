//! Core grid types for decoding logic-puzzle clue encodings.
//!
//! This crate provides the data model shared by every puzzle family: the grid
//! dimensions, the cell tokens a decoder may write, the fixed-capacity grid buffer
//! with its write cursor, and the canonical problem text rendered from a buffer.
//!
//! # Overview
//!
//! 1. **Shape** - [`Dimensions`] fixes `rows × cols` for the lifetime of one decode.
//! 2. **Cells** - [`CellToken`] enumerates what a cell can hold, from the empty
//!    sentinel `-` to colored circles and ship segments.
//! 3. **Buffer** - [`GridBuffer`] is a row-major array of tokens with checked
//!    cursor operations, so overflowing the grid is a [`GridError`], never a panic.
//! 4. **Canonical text** - [`ProblemText`] renders a buffer and optional
//!    [`EdgeClues`] into the header + clue lines + grid lines format consumed by
//!    downstream solvers.
//!
//! # Examples
//!
//! ```
//! use pzgrid_core::{CellToken, Dimensions, GridBuffer, ProblemText};
//!
//! let dims = Dimensions::new(2, 3)?;
//! let mut grid = GridBuffer::new(dims);
//!
//! grid.advance(1)?;
//! grid.assign(CellToken::number("5"))?;
//!
//! let text = ProblemText::new(&grid).to_string();
//! assert_eq!(text, "2 3\n- 5 -\n- - -");
//! # Ok::<(), pzgrid_core::GridError>(())
//! ```

pub use self::{clues::*, dimensions::*, error::*, format::*, grid::*, token::*};

mod clues;
mod dimensions;
mod error;
mod format;
mod grid;
mod token;
