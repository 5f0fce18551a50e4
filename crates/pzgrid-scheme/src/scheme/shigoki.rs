use pzgrid_core::{CellToken, CircleColor, GridBuffer};

use super::{BoxedScheme, DecodeInput, DecodedPuzzle, Scheme, UnrecognizedInput};
use crate::{
    DecodeError,
    scanner::{Scanner, assign_cell, run_length, skip_cells},
};

/// Decoder for Shigoki (Shingoki) circle grids.
///
/// Grammar:
/// - `a`-`z`: skip 1-26 empty cells
/// - `W` or `B` followed by an optional digit run: a white or black circle with
///   that count, written as `w3`, `b12` or a bare `w`
/// - anything else: [`UnrecognizedInput::PermissiveSkip`]
#[derive(Debug, Default, Clone, Copy)]
pub struct Shigoki;

impl Shigoki {
    /// Creates a new `Shigoki` scheme.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Scheme for Shigoki {
    fn name(&self) -> &'static str {
        "shigoki"
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
                let count = scanner.take_digits();
                assign_cell(&mut grid, CellToken::circle(color, Some(count)))?;
            } else {
                scanner.skip_unrecognized();
            }
        }

        scanner.finish(self.name(), self.unrecognized_input(), &grid);
        Ok(DecodedPuzzle::new(grid).with_skipped(scanner.skipped()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SchemeTester;

    #[test]
    fn test_circles_with_counts() {
        SchemeTester::new(Shigoki::new())
            .decode(2, 3, "cW3aB12")
            .assert_rows(["- - -", "w3 - b12"])
            .assert_skipped(0);
    }

    #[test]
    fn test_adjacent_circles_and_bare_color() {
        SchemeTester::new(Shigoki::new())
            .decode(1, 3, "B4B2W")
            .assert_rows(["b4 b2 w"]);
    }

    #[test]
    fn test_lowercase_markers_are_skips() {
        // `w` and `b` are run-length letters, not colors
        SchemeTester::new(Shigoki::new())
            .decode(1, 4, "bW2")
            .assert_rows(["- - w2 -"]);
    }

    #[test]
    fn test_unknown_characters_are_skipped_permissively() {
        SchemeTester::new(Shigoki::new())
            .decode(1, 3, "W2-7X?aB")
            .assert_rows(["w2 - b"])
            .assert_skipped(4);
    }

    #[test]
    fn test_circle_past_end_overflows() {
        SchemeTester::new(Shigoki::new())
            .decode(1, 2, "W1W2W3")
            .assert_error(DecodeError::GridOverflow {
                cursor: 2,
                step: 1,
                total: 2,
            });
    }

    #[test]
    fn test_skip_past_end_overflows() {
        SchemeTester::new(Shigoki::new())
            .decode(2, 2, "W1d")
            .assert_error(DecodeError::GridOverflow {
                cursor: 1,
                step: 4,
                total: 4,
            });
    }
}
