use pzgrid_core::{CellToken, GridBuffer};

use super::{BoxedScheme, DecodeInput, DecodedPuzzle, Scheme, UnrecognizedInput};
use crate::{
    BracketFault, DecodeError,
    scanner::{Scanner, assign_cell},
};

/// Decoder for Dominoes number grids.
///
/// Grammar:
/// - `[N]`: the decimal number `N` (used for values of two or more digits)
/// - a single digit: that number
/// - anything else: [`UnrecognizedInput::PermissiveSkip`]
///
/// There is no run-length skip. Every cell must be supplied explicitly, so the
/// decode fails with [`DecodeError::CellCountMismatch`] unless the encoding
/// assigns exactly `rows * cols` values.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dominoes;

impl Dominoes {
    /// Creates a new `Dominoes` scheme.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Scheme for Dominoes {
    fn name(&self) -> &'static str {
        "dominos"
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
            if byte == b'[' {
                let offset = scanner.offset();
                scanner.bump();
                let contents = scanner.take_until(b']').ok_or(DecodeError::MalformedBracket {
                    offset,
                    reason: BracketFault::Unterminated,
                })?;
                if contents.is_empty() || !contents.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DecodeError::MalformedBracket {
                        offset,
                        reason: BracketFault::NonNumeric {
                            contents: contents.to_owned(),
                        },
                    });
                }
                assign_cell(&mut grid, CellToken::number(contents))?;
            } else if byte.is_ascii_digit() {
                scanner.bump();
                assign_cell(&mut grid, CellToken::number(char::from(byte)))?;
            } else {
                scanner.skip_unrecognized();
            }
        }

        scanner.finish(self.name(), self.unrecognized_input(), &grid);
        if grid.remaining() != 0 {
            return Err(DecodeError::CellCountMismatch {
                assigned: grid.cursor(),
                total: grid.total_cells(),
            });
        }
        Ok(DecodedPuzzle::new(grid).with_skipped(scanner.skipped()))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::SchemeTester;

    fn encode(values: &[u32]) -> String {
        values
            .iter()
            .map(|&value| {
                if value < 10 {
                    value.to_string()
                } else {
                    format!("[{value}]")
                }
            })
            .collect()
    }

    #[test]
    fn test_bare_and_bracketed_values() {
        SchemeTester::new(Dominoes::new())
            .decode(2, 3, "3[30][25]7[21]0")
            .assert_text("2 3\n3 30 25\n7 21 0");
    }

    #[test]
    fn test_too_few_values() {
        SchemeTester::new(Dominoes::new())
            .decode(2, 2, "1[30]")
            .assert_error(DecodeError::CellCountMismatch {
                assigned: 2,
                total: 4,
            });
    }

    #[test]
    fn test_empty_input_is_a_mismatch() {
        SchemeTester::new(Dominoes::new())
            .decode(1, 1, "")
            .assert_error(DecodeError::CellCountMismatch {
                assigned: 0,
                total: 1,
            });
    }

    #[test]
    fn test_too_many_values() {
        SchemeTester::new(Dominoes::new())
            .decode(2, 2, "1234[5]")
            .assert_error(DecodeError::GridOverflow {
                cursor: 4,
                step: 1,
                total: 4,
            });
    }

    #[test]
    fn test_unterminated_bracket() {
        SchemeTester::new(Dominoes::new())
            .decode(2, 2, "12[34")
            .assert_error(DecodeError::MalformedBracket {
                offset: 2,
                reason: BracketFault::Unterminated,
            });
    }

    #[test]
    fn test_non_numeric_bracket() {
        SchemeTester::new(Dominoes::new())
            .decode(2, 2, "1[3a]")
            .assert_error(DecodeError::MalformedBracket {
                offset: 1,
                reason: BracketFault::NonNumeric {
                    contents: "3a".to_owned(),
                },
            });

        SchemeTester::new(Dominoes::new())
            .decode(2, 2, "[]123")
            .assert_error(DecodeError::MalformedBracket {
                offset: 0,
                reason: BracketFault::NonNumeric {
                    contents: String::new(),
                },
            });
    }

    #[test]
    fn test_separators_are_skipped_permissively() {
        SchemeTester::new(Dominoes::new())
            .decode(2, 2, "1 2\n3,[14]")
            .assert_rows(["1 2", "3 14"])
            .assert_skipped(3);
    }

    #[test]
    fn test_letters_are_not_run_length() {
        SchemeTester::new(Dominoes::new())
            .decode(1, 2, "a12")
            .assert_rows(["1 2"])
            .assert_skipped(1);
    }

    proptest! {
        #[test]
        fn test_round_trip(
            (rows, cols, values) in (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
                (Just(rows), Just(cols), prop::collection::vec(0u32..100, rows * cols))
            })
        ) {
            let decoded = Dominoes::new()
                .decode(&DecodeInput::new(rows, cols, &encode(&values)))
                .unwrap();
            let expected: Vec<_> = values
                .iter()
                .map(|value| CellToken::number(value.to_string()))
                .collect();
            prop_assert_eq!(decoded.grid.cells(), expected.as_slice());
        }

        #[test]
        fn test_wrong_count_is_rejected(
            rows in 1usize..6,
            cols in 1usize..6,
            len in 0usize..40,
        ) {
            prop_assume!(len != rows * cols);
            let values = vec![5; len];
            let result = Dominoes::new().decode(&DecodeInput::new(rows, cols, &encode(&values)));
            let is_rejected = matches!(
                result,
                Err(DecodeError::CellCountMismatch { .. } | DecodeError::GridOverflow { .. })
            );
            prop_assert!(is_rejected);
        }
    }
}
