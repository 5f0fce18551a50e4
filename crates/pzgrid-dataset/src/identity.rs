use std::borrow::Borrow;

use pzgrid_core::Dimensions;
use serde::{Deserialize, Serialize};
use md5::{Digest as _, Md5};

/// Number of hex digits of the content hash kept in a [`PuzzleId`].
pub const HASH_PREFIX_LEN: usize = 8;

/// Returns the first [`HASH_PREFIX_LEN`] lowercase hex digits of the MD5
/// digest of `text`.
///
/// Ids built from this hash match the ones in previously published datasets.
///
/// # Examples
///
/// ```
/// use pzgrid_dataset::content_hash;
///
/// assert_eq!(content_hash(""), "d41d8cd9");
/// ```
#[must_use]
pub fn content_hash(text: &str) -> String {
    Md5::digest(text.as_bytes())[..HASH_PREFIX_LEN / 2]
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// The deduplication key of a puzzle.
///
/// Decoded puzzles are content-addressed as `<type><hash8>_<rows>x<cols>`, so
/// identical canonical texts of the same type always share an id. Derived
/// puzzles carry the name they were published under instead of a hash.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct PuzzleId(String);

impl PuzzleId {
    /// Builds the content-addressed id of a canonical problem text.
    ///
    /// # Examples
    ///
    /// ```
    /// use pzgrid_core::Dimensions;
    /// use pzgrid_dataset::PuzzleId;
    ///
    /// let id = PuzzleId::content_addressed("shikaku", "1 3\n- 5 -", Dimensions::new(1, 3)?);
    /// assert_eq!(id.as_str(), "shikakuadb6a148_1x3");
    /// # Ok::<(), pzgrid_core::GridError>(())
    /// ```
    #[must_use]
    pub fn content_addressed(puzzle_type: &str, problem: &str, dims: Dimensions) -> Self {
        Self(format!("{puzzle_type}{}_{dims}", content_hash(problem)))
    }

    /// Builds the id of a puzzle published under `name`.
    #[must_use]
    pub fn named(name: &str, dims: Dimensions) -> Self {
        Self(format!("{name}_{dims}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PuzzleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for PuzzleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PuzzleId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
