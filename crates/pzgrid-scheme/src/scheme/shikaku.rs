use pzgrid_core::{CellToken, GridBuffer};

use super::{BoxedScheme, DecodeInput, DecodedPuzzle, Scheme, UnrecognizedInput};
use crate::{
    DecodeError,
    scanner::{Scanner, assign_cell, run_length, skip_cells},
};

/// Decoder for Shikaku clue grids.
///
/// Grammar:
/// - `a`-`z`: skip 1-26 empty cells
/// - a maximal digit run: one numeric clue in the next cell
/// - `_`: separates adjacent numbers, no grid effect
/// - anything else: noise
#[derive(Debug, Default, Clone, Copy)]
pub struct Shikaku;

impl Shikaku {
    /// Creates a new `Shikaku` scheme.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Scheme for Shikaku {
    fn name(&self) -> &'static str {
        "shikaku"
    }

    fn clone_box(&self) -> BoxedScheme {
        Box::new(*self)
    }

    fn unrecognized_input(&self) -> UnrecognizedInput {
        UnrecognizedInput::Noise
    }

    fn decode(&self, input: &DecodeInput<'_>) -> Result<DecodedPuzzle, DecodeError> {
        let mut grid = GridBuffer::new(input.dims()?);
        let mut scanner = Scanner::new(input.compact);

        while let Some(byte) = scanner.peek() {
            if let Some(step) = run_length(byte) {
                scanner.bump();
                skip_cells(&mut grid, step)?;
            } else if byte.is_ascii_digit() {
                let digits = scanner.take_digits();
                assign_cell(&mut grid, CellToken::number(digits))?;
            } else if byte == b'_' {
                scanner.bump();
            } else {
                scanner.skip_unrecognized();
            }
        }

        scanner.finish(self.name(), self.unrecognized_input(), &grid);
        Ok(DecodedPuzzle::new(grid).with_skipped(scanner.skipped()))
    }
}
