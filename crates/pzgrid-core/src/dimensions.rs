use std::fmt::{self, Display};

use crate::GridError;

/// The shape of a puzzle grid.
///
/// Both extents are positive and `rows * cols` fits in a `usize`;
/// [`Dimensions::new`] rejects anything else.
/// Cells are addressed row-major: index `i` is row `i / cols`, column `i % cols`.
///
/// `Display` renders the `<rows>x<cols>` form used in puzzle identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Creates dimensions for a `rows × cols` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either extent is zero or
    /// the cell count overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use pzgrid_core::Dimensions;
    ///
    /// let dims = Dimensions::new(3, 4)?;
    /// assert_eq!(dims.total_cells(), 12);
    /// assert_eq!(dims.to_string(), "3x4");
    ///
    /// assert!(Dimensions::new(0, 4).is_err());
    /// assert!(Dimensions::new(usize::MAX, 2).is_err());
    /// # Ok::<(), pzgrid_core::GridError>(())
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        match rows.checked_mul(cols) {
            Some(total) if total > 0 => Ok(Self { rows, cols }),
            _ => Err(GridError::InvalidDimensions { rows, cols }),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Returns `rows * cols`.
    #[must_use]
    pub const fn total_cells(self) -> usize {
        self.rows * self.cols
    }

    /// Converts a row-major index into `(row, col)`.
    ///
    /// The index is not checked against [`total_cells`](Self::total_cells).
    #[must_use]
    pub const fn position_of(self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Converts `(row, col)` into a row-major index.
    #[must_use]
    pub const fn index_of(self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_extent() {
        assert_eq!(
            Dimensions::new(0, 3),
            Err(GridError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            Dimensions::new(3, 0),
            Err(GridError::InvalidDimensions { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn test_rejects_overflowing_cell_count() {
        let huge = 1 << (usize::BITS / 2);
        assert_eq!(
            Dimensions::new(huge, huge),
            Err(GridError::InvalidDimensions {
                rows: huge,
                cols: huge
            })
        );
        assert!(Dimensions::new(usize::MAX, 1).is_ok());
    }

    #[test]
    fn test_row_major_addressing() {
        let dims = Dimensions::new(3, 4).unwrap();
        assert_eq!(dims.position_of(0), (0, 0));
        assert_eq!(dims.position_of(5), (1, 1));
        assert_eq!(dims.position_of(11), (2, 3));
        for index in 0..dims.total_cells() {
            let (row, col) = dims.position_of(index);
            assert_eq!(dims.index_of(row, col), index);
        }
    }
}
