//! Puzzle-family decoders.
//!
//! Each family encodes its clue grid in its own compact grammar. A [`Scheme`]
//! scans that string left to right with a cursor into a [`GridBuffer`] and
//! returns the populated buffer as a [`DecodedPuzzle`].
//!
//! Most grammars share the run-length skip: a lowercase letter advances the
//! cursor past `letter - 'a' + 1` empty cells.

use std::fmt::Debug;

use pzgrid_core::{Dimensions, EdgeClues, GridBuffer, GridError, ProblemText};

pub use self::{
    battleship::Battleship, dominoes::Dominoes, masyu::Masyu, shigoki::Shigoki,
    shikaku::Shikaku, star_battle::StarBattle,
};
use crate::DecodeError;

mod battleship;
mod dominoes;
mod masyu;
mod shigoki;
mod shikaku;
mod star_battle;

/// Returns every built-in scheme.
///
/// The order is fixed and matches [`SchemeRegistry::names`](crate::SchemeRegistry::names).
#[must_use]
pub fn all_schemes() -> Vec<BoxedScheme> {
    vec![
        Box::new(Shigoki::new()),
        Box::new(Shikaku::new()),
        Box::new(Dominoes::new()),
        Box::new(Masyu::new()),
        Box::new(StarBattle::new()),
        Box::new(Battleship::new()),
    ]
}

/// How a scheme treats characters outside its grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnrecognizedInput {
    /// The grammar defines any other character as noise to be ignored.
    Noise,
    /// Unknown characters are stepped over without effect.
    ///
    /// Existing site data may depend on this leniency, so it is kept; every
    /// skipped character is counted in [`DecodedPuzzle::skipped_chars`] and
    /// reported with a warning.
    PermissiveSkip,
    /// Every field of the input is a token; nothing can be unrecognized.
    Verbatim,
}

/// A decoder for one puzzle family's compact encoding.
pub trait Scheme: Debug + Send + Sync {
    /// Returns the puzzle type name the scheme is registered under.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the scheme.
    fn clone_box(&self) -> BoxedScheme;

    /// Returns how the scheme treats characters outside its grammar.
    fn unrecognized_input(&self) -> UnrecognizedInput;

    /// Decodes a compact string into a grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the input overflows the grid, is malformed for this
    /// family, or lacks inputs the family requires.
    fn decode(&self, input: &DecodeInput<'_>) -> Result<DecodedPuzzle, DecodeError>;
}

/// A boxed scheme.
pub type BoxedScheme = Box<dyn Scheme>;

impl Clone for BoxedScheme {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// The inputs of one decode call.
///
/// `rows` and `cols` are validated by the schemes that use them; Battleship
/// takes its shape from `clues` instead.
#[derive(Debug, Clone, Copy)]
pub struct DecodeInput<'a> {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// The site-native compact string.
    pub compact: &'a str,
    /// Externally supplied edge clues.
    pub clues: Option<&'a EdgeClues>,
}

impl<'a> DecodeInput<'a> {
    /// Creates an input without edge clues.
    #[must_use]
    pub fn new(rows: usize, cols: usize, compact: &'a str) -> Self {
        Self {
            rows,
            cols,
            compact,
            clues: None,
        }
    }

    /// Attaches edge clues.
    #[must_use]
    pub fn with_clues(mut self, clues: &'a EdgeClues) -> Self {
        self.clues = Some(clues);
        self
    }

    /// Returns the validated grid shape given by `rows` and `cols`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either is zero.
    pub fn dims(&self) -> Result<Dimensions, GridError> {
        Dimensions::new(self.rows, self.cols)
    }
}

/// The result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPuzzle {
    /// The populated grid.
    pub grid: GridBuffer,
    /// Edge clues printed between the header and the grid body.
    pub clues: Option<EdgeClues>,
    /// Family-specific values appended to the header line.
    pub header_suffix: &'static [usize],
    /// Characters stepped over as noise or under [`UnrecognizedInput::PermissiveSkip`].
    pub skipped_chars: usize,
}

impl DecodedPuzzle {
    /// Wraps a grid with no clues, no header suffix and no skipped characters.
    #[must_use]
    pub fn new(grid: GridBuffer) -> Self {
        Self {
            grid,
            clues: None,
            header_suffix: &[],
            skipped_chars: 0,
        }
    }

    /// Returns the grid shape.
    #[must_use]
    pub fn dims(&self) -> Dimensions {
        self.grid.dims()
    }

    /// Returns a renderer for the canonical problem text.
    #[must_use]
    pub fn problem_text(&self) -> ProblemText<'_> {
        let text = ProblemText::new(&self.grid).with_header_suffix(self.header_suffix);
        match &self.clues {
            Some(clues) => text.with_clues(clues),
            None => text,
        }
    }

    #[must_use]
    pub(crate) fn with_skipped(mut self, skipped_chars: usize) -> Self {
        self.skipped_chars = skipped_chars;
        self
    }
}
