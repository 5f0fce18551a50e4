use pzgrid_core::{Dimensions, EdgeClues, GridBuffer, HeaderLine};

use crate::DecodeError;

/// A puzzle whose edge clues were counted from its own solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPuzzle {
    /// Shape of the solved grid.
    pub dims: Dimensions,
    /// Non-sentinel cell counts of the solution, per column and per row.
    pub clues: EdgeClues,
    /// Canonical problem text: header, clue lines, then the unsolved grid.
    pub problem: String,
    /// Canonical solution text: header, then the solved grid.
    pub solution: String,
}

/// Builds problem and solution texts for a family whose clues are only known
/// through the solved grid.
///
/// `solution` is parsed as whitespace-separated rows; every cell other than
/// `-` counts toward its row and column clue. `grid` is the unsolved body that
/// follows the clue lines in the problem text; it is copied with surrounding
/// whitespace trimmed.
///
/// # Errors
///
/// Returns [`DecodeError::Grid`] if `solution` is empty or its rows differ in
/// length.
///
/// # Examples
///
/// ```
/// use pzgrid_scheme::derive_problem;
///
/// let derived = derive_problem("# # #\n- # -\n", "- - -\n- 3 -")?;
/// assert_eq!(derived.problem, "2 3\n1 2 1\n3 1\n- - -\n- 3 -");
/// assert_eq!(derived.solution, "2 3\n# # #\n- # -");
/// # Ok::<(), pzgrid_scheme::DecodeError>(())
/// ```
pub fn derive_problem(solution: &str, grid: &str) -> Result<DerivedPuzzle, DecodeError> {
    let solved: GridBuffer = solution.parse()?;
    let dims = solved.dims();
    let clues = EdgeClues::count_filled(&solved);
    let header = HeaderLine::new(dims, &[]);

    log::debug!("derived {dims} clues from solution");
    Ok(DerivedPuzzle {
        dims,
        problem: format!("{header}\n{clues}\n{}", grid.trim()),
        solution: format!("{header}\n{}", solution.trim()),
        clues,
    })
}

#[cfg(test)]
mod tests {
    use pzgrid_core::GridError;

    use super::*;

    #[test]
    fn test_rectangular_counts() {
        // Columns are counted over every row, not over the first `cols` rows
        let derived = derive_problem("1 - 2 -\n- - 3 4", "- - - -\n- - - -").unwrap();
        assert_eq!(derived.dims, Dimensions::new(2, 4).unwrap());
        assert_eq!(derived.clues.cols_top, [1, 0, 2, 1]);
        assert_eq!(derived.clues.rows_left, [2, 2]);
        assert_eq!(derived.problem, "2 4\n1 0 2 1\n2 2\n- - - -\n- - - -");
    }

    #[test]
    fn test_tall_grid() {
        let derived = derive_problem("x\n-\nx\nx", "-\n-\n-\n-").unwrap();
        assert_eq!(derived.clues.cols_top, [3]);
        assert_eq!(derived.clues.rows_left, [1, 0, 1, 1]);
        assert_eq!(derived.solution, "4 1\nx\n-\nx\nx");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let derived = derive_problem("\n  a b\n  c -\n\n", "\n1 -\n- -\n").unwrap();
        assert_eq!(derived.problem, "2 2\n2 1\n2 1\n1 -\n- -");
        assert_eq!(derived.solution, "2 2\na b\n  c -");
    }

    #[test]
    fn test_empty_solution() {
        assert_eq!(
            derive_problem(" \n ", "-"),
            Err(DecodeError::Grid(GridError::EmptyGrid))
        );
    }

    #[test]
    fn test_ragged_solution() {
        assert_eq!(
            derive_problem("a b\nc", "- -\n- -"),
            Err(DecodeError::Grid(GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }))
        );
    }
}
