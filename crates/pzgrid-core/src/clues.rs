use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Dimensions, GridBuffer, GridError};

/// Per-column and per-row numeric clues printed along the grid edges.
///
/// Battleship supplies these as decoder inputs; the solved-grid family derives
/// them from a solution with [`EdgeClues::count_filled`].
///
/// `Display` renders the two clue lines of canonical text: column clues first,
/// then row clues.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeClues {
    /// One clue per column, left to right.
    pub cols_top: Vec<usize>,
    /// One clue per row, top to bottom.
    pub rows_left: Vec<usize>,
}

impl EdgeClues {
    /// Creates edge clues from column and row arrays.
    #[must_use]
    pub fn new(cols_top: Vec<usize>, rows_left: Vec<usize>) -> Self {
        Self {
            cols_top,
            rows_left,
        }
    }

    /// Returns the grid shape implied by the clue array lengths.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either array is empty.
    pub fn dims(&self) -> Result<Dimensions, GridError> {
        Dimensions::new(self.rows_left.len(), self.cols_top.len())
    }

    /// Counts the non-sentinel cells of each column and row of a grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use pzgrid_core::{EdgeClues, GridBuffer};
    ///
    /// let solved: GridBuffer = "# -\n# #".parse()?;
    /// let clues = EdgeClues::count_filled(&solved);
    /// assert_eq!(clues.cols_top, [2, 1]);
    /// assert_eq!(clues.rows_left, [1, 2]);
    /// # Ok::<(), pzgrid_core::GridError>(())
    /// ```
    #[must_use]
    pub fn count_filled(grid: &GridBuffer) -> Self {
        Self::new(grid.filled_per_column(), grid.filled_per_row())
    }
}

impl Display for EdgeClues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.cols_top)?;
        f.write_str("\n")?;
        write_joined(f, &self.rows_left)
    }
}

pub(crate) fn write_joined<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dims_from_lengths() {
        let clues = EdgeClues::new(vec![2, 1, 0], vec![1, 2]);
        assert_eq!(clues.dims(), Dimensions::new(2, 3));
        assert_eq!(
            EdgeClues::new(vec![], vec![1]).dims(),
            Err(GridError::InvalidDimensions { rows: 1, cols: 0 })
        );
    }

    #[test]
    fn test_display_columns_then_rows() {
        let clues = EdgeClues::new(vec![2, 10], vec![1, 2, 3]);
        assert_eq!(clues.to_string(), "2 10\n1 2 3");
    }
}
