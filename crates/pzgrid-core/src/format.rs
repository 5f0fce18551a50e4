//! Canonical problem text.
//!
//! The canonical format is the contract between decoders and every downstream
//! consumer:
//!
//! ```text
//! <rows> <cols>[ <header suffix>...]
//! [<column clues>]
//! [<row clues>]
//! <rows lines of cols space-separated tokens>
//! ```
//!
//! Lines are joined with `\n` and there is no trailing newline.

use std::fmt::{self, Display};

use crate::{Dimensions, EdgeClues, GridBuffer, clues::write_joined};

/// The first line of canonical text: `<rows> <cols>` plus any family suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    dims: Dimensions,
    suffix: &'a [usize],
}

impl<'a> HeaderLine<'a> {
    /// Creates a header line.
    #[must_use]
    pub fn new(dims: Dimensions, suffix: &'a [usize]) -> Self {
        Self { dims, suffix }
    }
}

impl Display for HeaderLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dims.rows(), self.dims.cols())?;
        for value in self.suffix {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

/// Renders a [`GridBuffer`] as canonical problem text.
///
/// Rendering is a pure projection of the buffer and never fails.
///
/// # Examples
///
/// ```
/// use pzgrid_core::{CellToken, Dimensions, EdgeClues, GridBuffer, ProblemText, ShipSegment};
///
/// let mut grid = GridBuffer::new(Dimensions::new(2, 2)?);
/// grid.assign(CellToken::Segment(ShipSegment::Water))?;
///
/// let clues = EdgeClues::new(vec![2, 1], vec![1, 2]);
/// let text = ProblemText::new(&grid)
///     .with_header_suffix(&[9, 8])
///     .with_clues(&clues)
///     .to_string();
/// assert_eq!(text, "2 2 9 8\n2 1\n1 2\nx -\n- -");
/// # Ok::<(), pzgrid_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProblemText<'a> {
    grid: &'a GridBuffer,
    clues: Option<&'a EdgeClues>,
    header_suffix: &'a [usize],
}

impl<'a> ProblemText<'a> {
    /// Creates a renderer with no clue lines and a plain header.
    #[must_use]
    pub fn new(grid: &'a GridBuffer) -> Self {
        Self {
            grid,
            clues: None,
            header_suffix: &[],
        }
    }

    /// Adds the two clue lines between the header and the grid body.
    #[must_use]
    pub fn with_clues(mut self, clues: &'a EdgeClues) -> Self {
        self.clues = Some(clues);
        self
    }

    /// Sets values appended to the header line.
    #[must_use]
    pub fn with_header_suffix(mut self, suffix: &'a [usize]) -> Self {
        self.header_suffix = suffix;
        self
    }
}

impl Display for ProblemText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", HeaderLine::new(self.grid.dims(), self.header_suffix))?;
        if let Some(clues) = self.clues {
            write!(f, "\n{clues}")?;
        }
        for row in self.grid.rows() {
            f.write_str("\n")?;
            write_joined(f, row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::CellToken;

    #[test]
    fn test_plain_grid() {
        let mut grid = GridBuffer::new(Dimensions::new(1, 3).unwrap());
        grid.write(1, CellToken::number("5")).unwrap();
        assert_eq!(ProblemText::new(&grid).to_string(), "1 3\n- 5 -");
    }

    #[test]
    fn test_multichar_tokens_are_space_separated() {
        let grid: GridBuffer = "10 2\n3 44".parse().unwrap();
        assert_eq!(ProblemText::new(&grid).to_string(), "2 2\n10 2\n3 44");
    }

    proptest! {
        #[test]
        fn test_empty_grid_layout(rows in 1usize..12, cols in 1usize..12) {
            let grid = GridBuffer::new(Dimensions::new(rows, cols).unwrap());
            let text = ProblemText::new(&grid).to_string();
            let header = format!("{rows} {cols}");
            let mut lines = text.lines();
            prop_assert_eq!(lines.next(), Some(header.as_str()));
            let body: Vec<_> = lines.collect();
            prop_assert_eq!(body.len(), rows);
            for line in body {
                prop_assert_eq!(line.split(' ').count(), cols);
                prop_assert!(line.split(' ').all(|token| token == "-"));
            }
        }
    }
}
