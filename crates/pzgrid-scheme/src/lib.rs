//! Decoders for the compact clue encodings used by puzzle-hosting sites.
//!
//! Every puzzle family has its own grammar mapping a flat alphabet of letters,
//! digits, brackets and delimiters onto a 2-D grid. Each grammar is a
//! [`Scheme`]; the [`SchemeRegistry`] dispatches puzzle type names to schemes.
//!
//! # Families
//!
//! | name | grammar |
//! |---|---|
//! | `shigoki` | run-length skips, `W`/`B` circles with optional counts |
//! | `shikaku` | run-length skips, digit runs, `_` ignored |
//! | `dominos` | single digits and `[N]`, every cell supplied |
//! | `masyu` | run-length skips, `W`/`B` pearls |
//! | `starbattle` | comma-separated region ids |
//! | `battleship` | run-length skips, segment digits `0`-`6`, external edge clues |
//!
//! Families whose clues exist only through a solved grid go through
//! [`derive_problem`] instead of a scheme.
//!
//! # Examples
//!
//! ```
//! use pzgrid_core::EdgeClues;
//! use pzgrid_scheme::{DecodeInput, SchemeRegistry};
//!
//! let registry = SchemeRegistry::with_all_schemes();
//! let clues = EdgeClues::new(vec![2, 1], vec![1, 2]);
//! let input = DecodeInput::new(2, 2, "0a1").with_clues(&clues);
//! let decoded = registry.decode("battleship", &input)?;
//!
//! assert_eq!(
//!     decoded.problem_text().to_string(),
//!     "2 2 9 8 7 6 5 4 3 2 1\n2 1\n1 2\nx -\n- o"
//! );
//! # Ok::<(), pzgrid_scheme::DecodeError>(())
//! ```

pub use self::{
    derive::*,
    error::*,
    registry::*,
    scheme::{BoxedScheme, DecodeInput, DecodedPuzzle, Scheme, UnrecognizedInput},
};

mod derive;
mod error;
mod registry;
mod scanner;
pub mod scheme;

#[cfg(test)]
mod testing;
