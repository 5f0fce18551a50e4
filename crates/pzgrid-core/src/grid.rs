use std::str::FromStr;

use crate::{CellToken, Dimensions, GridError};

/// A fixed-capacity, row-major buffer of cell tokens with a write cursor.
///
/// Every cell starts as [`CellToken::Empty`]. Decoders fill the buffer through
/// the cursor: [`assign`](Self::assign) writes the cell under the cursor and
/// moves past it, [`advance`](Self::advance) moves past cells without writing.
/// The cursor only moves forward, so a cell is assigned at most once, and it
/// never passes [`total_cells`](Self::total_cells).
///
/// # Examples
///
/// ```
/// use pzgrid_core::{CellToken, Dimensions, GridBuffer, GridError};
///
/// let mut grid = GridBuffer::new(Dimensions::new(1, 3)?);
/// grid.advance(2)?;
/// grid.assign(CellToken::number("7"))?;
/// assert_eq!(grid.cursor(), 3);
///
/// // The grid is full: any further move is an error.
/// assert_eq!(
///     grid.advance(1),
///     Err(GridError::OutOfBounds { index: 4, total: 3 })
/// );
/// # Ok::<(), GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuffer {
    dims: Dimensions,
    cells: Vec<CellToken>,
    cursor: usize,
}

impl GridBuffer {
    /// Creates a buffer filled with the empty sentinel, cursor at index 0.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![CellToken::Empty; dims.total_cells()],
            cursor: 0,
        }
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns the index the next [`assign`](Self::assign) writes to.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of cells between the cursor and the end of the grid.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total_cells() - self.cursor
    }

    /// Returns the token at a row-major index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CellToken> {
        self.cells.get(index)
    }

    /// Returns the token at `(row, col)`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellToken> {
        if row >= self.dims.rows() || col >= self.dims.cols() {
            return None;
        }
        self.get(self.dims.index_of(row, col))
    }

    /// Returns all tokens in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellToken] {
        &self.cells
    }

    /// Returns an iterator over the rows of the grid.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[CellToken]> {
        self.cells.chunks_exact(self.dims.cols())
    }

    /// Writes a token at an arbitrary index without moving the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `index >= total_cells`.
    pub fn write(&mut self, index: usize, token: CellToken) -> Result<(), GridError> {
        let total = self.total_cells();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GridError::OutOfBounds { index, total })?;
        *cell = token;
        Ok(())
    }

    /// Moves the cursor forward by `n` cells without writing.
    ///
    /// Landing exactly on `total_cells` is allowed; it leaves the buffer full.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the cursor would pass `total_cells`.
    /// The cursor is left unchanged on error.
    pub fn advance(&mut self, n: usize) -> Result<(), GridError> {
        let total = self.total_cells();
        match self.cursor.checked_add(n) {
            Some(next) if next <= total => {
                self.cursor = next;
                Ok(())
            }
            _ => Err(GridError::OutOfBounds {
                index: self.cursor.saturating_add(n),
                total,
            }),
        }
    }

    /// Writes a token under the cursor and moves the cursor past it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the buffer is already full.
    pub fn assign(&mut self, token: CellToken) -> Result<(), GridError> {
        self.write(self.cursor, token)?;
        self.cursor += 1;
        Ok(())
    }

    /// Counts the tokens in each row that are not the empty sentinel.
    #[must_use]
    pub fn filled_per_row(&self) -> Vec<usize> {
        self.rows()
            .map(|row| row.iter().filter(|token| !token.is_empty()).count())
            .collect()
    }

    /// Counts the tokens in each column that are not the empty sentinel.
    #[must_use]
    pub fn filled_per_column(&self) -> Vec<usize> {
        let mut counts = vec![0; self.dims.cols()];
        for row in self.rows() {
            for (count, token) in counts.iter_mut().zip(row) {
                if !token.is_empty() {
                    *count += 1;
                }
            }
        }
        counts
    }
}

impl FromStr for GridBuffer {
    type Err = GridError;

    /// Parses grid text: one line per row, whitespace-separated tokens.
    ///
    /// Surrounding whitespace is ignored. The first row fixes the column count
    /// and every other row must match it. `-` parses as the empty sentinel and
    /// any other field is kept as a raw token. The cursor of the parsed buffer
    /// is at the end.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::new();
        let mut expected = None;
        let mut rows = 0;
        for (row, line) in s.lines().enumerate() {
            let before = cells.len();
            cells.extend(line.split_whitespace().map(CellToken::from_text));
            let found = cells.len() - before;
            let expected = *expected.get_or_insert(found);
            if found != expected || found == 0 {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            rows += 1;
        }

        let dims = Dimensions::new(rows, expected.unwrap_or_default())?;
        let cursor = cells.len();
        Ok(Self {
            dims,
            cells,
            cursor,
        })
    }
}
