use pzgrid_core::{CellToken, GridBuffer, ShipSegment};

use super::{BoxedScheme, DecodeInput, DecodedPuzzle, Scheme, UnrecognizedInput};
use crate::{
    DecodeError,
    scanner::{Scanner, assign_cell, run_length, skip_cells},
};

/// Values appended to the Battleship header line.
///
/// Downstream consumers expect this fixed fleet descriptor verbatim.
pub const BATTLESHIP_HEADER_SUFFIX: [usize; 9] = [9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Decoder for Battleship given-segment grids.
///
/// The grid shape comes from the edge clues: one row per `rows_left` entry and
/// one column per `cols_top` entry. `DecodeInput::rows` and `cols` are ignored.
///
/// Grammar:
/// - `a`-`z`: skip 1-26 empty cells
/// - `0`-`6`: a segment, mapped `0→x 1→o 2→m 3→n 4→e 5→s 6→w`
/// - anything else, `7`-`9` included: [`UnrecognizedInput::PermissiveSkip`]
///
/// The canonical text carries [`BATTLESHIP_HEADER_SUFFIX`] on the header line
/// and the column and row clue lines before the grid body.
#[derive(Debug, Default, Clone, Copy)]
pub struct Battleship;

impl Battleship {
    /// Creates a new `Battleship` scheme.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Scheme for Battleship {
    fn name(&self) -> &'static str {
        "battleship"
    }

    fn clone_box(&self) -> BoxedScheme {
        Box::new(*self)
    }

    fn unrecognized_input(&self) -> UnrecognizedInput {
        UnrecognizedInput::PermissiveSkip
    }

    fn decode(&self, input: &DecodeInput<'_>) -> Result<DecodedPuzzle, DecodeError> {
        let clues = input.clues.ok_or(DecodeError::MissingClues {
            scheme: self.name(),
        })?;
        let mut grid = GridBuffer::new(clues.dims()?);
        let mut scanner = Scanner::new(input.compact);

        while let Some(byte) = scanner.peek() {
            if let Some(step) = run_length(byte) {
                scanner.bump();
                skip_cells(&mut grid, step)?;
            } else if let Some(segment) = ShipSegment::from_digit(byte) {
                scanner.bump();
                assign_cell(&mut grid, CellToken::Segment(segment))?;
            } else {
                scanner.skip_unrecognized();
            }
        }

        scanner.finish(self.name(), self.unrecognized_input(), &grid);
        Ok(DecodedPuzzle {
            grid,
            clues: Some(clues.clone()),
            header_suffix: &BATTLESHIP_HEADER_SUFFIX,
            skipped_chars: scanner.skipped(),
        })
    }
}
