use pzgrid_core::{CellToken, CircleColor, GridBuffer};

use super::{BoxedScheme, DecodeInput, DecodedPuzzle, Scheme, UnrecognizedInput};
use crate::{
    DecodeError,
    scanner::{Scanner, assign_cell, run_length, skip_cells},
};

/// Decoder for Masyu pearl grids.
///
/// Grammar:
/// - `a`-`z`: skip 1-26 empty cells
/// - `W` or `B`: a white or black pearl, written as `w` or `b`
/// - anything else, digits included: [`UnrecognizedInput::PermissiveSkip`]
#[derive(Debug, Default, Clone, Copy)]
pub struct Masyu;

impl Masyu {
    /// Creates a new `Masyu` scheme.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Scheme for Masyu {
    fn name(&self) -> &'static str {
        "masyu"
    }

    fn clone_box(&self) -> BoxedScheme {
        Box::new(*self)
    }

    fn unrecognized_input(&self) -> UnrecognizedInput {
        UnrecognizedInput::PermissiveSkip
    }

    fn decode(&self, input: &DecodeInput<'_>) -> Result<DecodedPuzzle, DecodeError> {
        let mut grid = GridBuffer::new(input.dims()?);
        let mut scanner = Scanner::new(input.compact);

        while let Some(byte) = scanner.peek() {
            if let Some(step) = run_length(byte) {
                scanner.bump();
                skip_cells(&mut grid, step)?;
            } else if let Some(color) = CircleColor::from_marker(byte) {
                scanner.bump();
                assign_cell(&mut grid, CellToken::circle(color, None))?;
            } else {
                scanner.skip_unrecognized();
            }
        }

        scanner.finish(self.name(), self.unrecognized_input(), &grid);
        Ok(DecodedPuzzle::new(grid).with_skipped(scanner.skipped()))
    }
}
