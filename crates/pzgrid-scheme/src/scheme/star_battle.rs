use pzgrid_core::{CellToken, GridBuffer};

use super::{BoxedScheme, DecodeInput, DecodedPuzzle, Scheme, UnrecognizedInput};
use crate::{DecodeError, scanner::assign_cell};

/// Decoder for Star Battle region maps.
///
/// The compact string is a comma-separated list of region ids in row-major
/// order, copied into the grid verbatim. An empty string holds no ids. Fewer
/// than `rows * cols` ids leave the remaining cells empty; more overflow.
#[derive(Debug, Default, Clone, Copy)]
pub struct StarBattle;

impl StarBattle {
    /// Creates a new `StarBattle` scheme.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Scheme for StarBattle {
    fn name(&self) -> &'static str {
        "starbattle"
    }

    fn clone_box(&self) -> BoxedScheme {
        Box::new(*self)
    }

    fn unrecognized_input(&self) -> UnrecognizedInput {
        UnrecognizedInput::Verbatim
    }

    fn decode(&self, input: &DecodeInput<'_>) -> Result<DecodedPuzzle, DecodeError> {
        let mut grid = GridBuffer::new(input.dims()?);

        if !input.compact.is_empty() {
            for region in input.compact.split(',') {
                assign_cell(&mut grid, CellToken::raw(region))?;
            }
        }

        log::debug!(
            "{}: placed {} regions into {} grid",
            self.name(),
            grid.cursor(),
            grid.dims()
        );
        Ok(DecodedPuzzle::new(grid))
    }
}
