//! Test utilities for scheme implementations.
//!
//! [`SchemeTester`] decodes a compact string and asserts on the resulting grid
//! or error:
//!
//! ```ignore
//! SchemeTester::new(Shikaku::new())
//!     .decode(1, 3, "a5")
//!     .assert_rows(["- 5 -"]);
//! ```

use pzgrid_core::EdgeClues;

use crate::{BoxedScheme, DecodeError, DecodeInput, DecodedPuzzle, Scheme};

/// A test harness for verifying scheme implementations.
///
/// All assertion methods return `self` for chaining and panic with the decoded
/// grid (or error) in the message, using `#[track_caller]` to report the
/// calling test line.
#[derive(Debug)]
pub struct SchemeTester {
    scheme: BoxedScheme,
    result: Option<Result<DecodedPuzzle, DecodeError>>,
}

impl SchemeTester {
    /// Creates a tester for a scheme.
    pub fn new<S>(scheme: S) -> Self
    where
        S: Scheme + 'static,
    {
        Self {
            scheme: Box::new(scheme),
            result: None,
        }
    }

    /// Decodes `compact` as a `rows × cols` grid.
    #[must_use]
    pub fn decode(mut self, rows: usize, cols: usize, compact: &str) -> Self {
        self.result = Some(self.scheme.decode(&DecodeInput::new(rows, cols, compact)));
        self
    }

    /// Decodes `compact` with edge clues and no explicit shape.
    #[must_use]
    pub fn decode_with_clues(mut self, clues: &EdgeClues, compact: &str) -> Self {
        let input = DecodeInput::new(0, 0, compact).with_clues(clues);
        self.result = Some(self.scheme.decode(&input));
        self
    }

    #[track_caller]
    fn decoded(&self) -> &DecodedPuzzle {
        match &self.result {
            Some(Ok(decoded)) => decoded,
            Some(Err(err)) => panic!("{}: decode failed: {err}", self.scheme.name()),
            None => panic!("decode() was not called"),
        }
    }

    /// Asserts the grid rows, each given as space-separated canonical tokens.
    #[track_caller]
    pub fn assert_rows<const N: usize>(self, expected: [&str; N]) -> Self {
        let decoded = self.decoded();
        let actual: Vec<String> = decoded
            .grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        assert_eq!(
            actual,
            expected,
            "{}: grid rows differ",
            self.scheme.name()
        );
        self
    }

    /// Asserts the complete canonical problem text.
    #[track_caller]
    pub fn assert_text(self, expected: &str) -> Self {
        let text = self.decoded().problem_text().to_string();
        assert_eq!(text, expected, "{}: problem text differs", self.scheme.name());
        self
    }

    /// Asserts the final cursor position.
    #[track_caller]
    pub fn assert_cursor(self, expected: usize) -> Self {
        let cursor = self.decoded().grid.cursor();
        assert_eq!(cursor, expected, "{}: cursor differs", self.scheme.name());
        self
    }

    /// Asserts how many characters were skipped as noise or permissively.
    #[track_caller]
    pub fn assert_skipped(self, expected: usize) -> Self {
        let skipped = self.decoded().skipped_chars;
        assert_eq!(
            skipped,
            expected,
            "{}: skipped character count differs",
            self.scheme.name()
        );
        self
    }

    /// Asserts that decoding failed with `expected`.
    #[track_caller]
    pub fn assert_error(self, expected: DecodeError) -> Self {
        match &self.result {
            Some(Err(err)) => assert_eq!(err, &expected, "{}: error differs", self.scheme.name()),
            Some(Ok(decoded)) => panic!(
                "{}: expected error {expected}, decoded\n{}",
                self.scheme.name(),
                decoded.problem_text()
            ),
            None => panic!("decode() was not called"),
        }
        self
    }
}
