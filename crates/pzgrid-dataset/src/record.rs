use std::sync::LazyLock;

use pzgrid_core::EdgeClues;
use pzgrid_scheme::{DecodeError, DecodeInput, DerivedPuzzle, Scheme, SchemeRegistry};
use serde::{Deserialize, Serialize};

use crate::{PuzzleId, SolutionRecord};

/// Everything a caller knows about one puzzle before it is decoded.
///
/// Missing fields deserialize to their defaults, so a JSON line only needs
/// the fields its puzzle type uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordRequest {
    /// Registered scheme name, also the id prefix.
    pub puzzle_type: String,
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// The site-native compact string.
    pub compact: String,
    /// Edge clues for families that take them as input.
    pub clues: Option<EdgeClues>,
    /// Site difficulty rating. Logged only.
    pub difficulty: u32,
    /// Where the puzzle was found.
    pub source: String,
}

impl RecordRequest {
    /// Creates a request with no clues, difficulty or source.
    #[must_use]
    pub fn new(
        puzzle_type: impl Into<String>,
        rows: usize,
        cols: usize,
        compact: impl Into<String>,
    ) -> Self {
        Self {
            puzzle_type: puzzle_type.into(),
            rows,
            cols,
            compact: compact.into(),
            ..Self::default()
        }
    }

    /// Sets the edge clues.
    #[must_use]
    pub fn with_clues(mut self, clues: EdgeClues) -> Self {
        self.clues = Some(clues);
        self
    }

    /// Sets the difficulty rating.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    fn decode_input(&self) -> DecodeInput<'_> {
        let input = DecodeInput::new(self.rows, self.cols, &self.compact);
        match &self.clues {
            Some(clues) => input.with_clues(clues),
            None => input,
        }
    }
}

/// A decoded puzzle, ready to be merged into a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    /// Deduplication key.
    pub id: PuzzleId,
    /// Where the puzzle was found.
    pub source: String,
    /// Canonical problem text.
    pub problem: String,
}

/// Builds puzzle records by dispatching on the request's puzzle type.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    registry: SchemeRegistry,
}

impl RecordBuilder {
    /// Creates a builder that looks schemes up in `registry`.
    #[must_use]
    pub fn new(registry: SchemeRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry used for dispatch.
    #[must_use]
    pub fn registry(&self) -> &SchemeRegistry {
        &self.registry
    }

    /// Decodes `request` with the scheme registered under its puzzle type.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownPuzzleType`] if no scheme is registered
    /// under `request.puzzle_type`, or the decoder's error unchanged.
    pub fn build(&self, request: &RecordRequest) -> Result<PuzzleRecord, DecodeError> {
        let scheme = self.registry.get(&request.puzzle_type)?;
        build_record_with(scheme, request)
    }
}

static DEFAULT_BUILDER: LazyLock<RecordBuilder> = LazyLock::new(RecordBuilder::default);

/// Decodes `request` with the built-in scheme registered under its puzzle type.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownPuzzleType`] for an unregistered puzzle type,
/// or the decoder's error unchanged.
///
/// # Examples
///
/// ```
/// use pzgrid_dataset::{RecordRequest, build_record};
///
/// let request = RecordRequest::new("shikaku", 1, 3, "a5").with_source("daily");
/// let record = build_record(&request)?;
///
/// assert_eq!(record.id.as_str(), "shikakuadb6a148_1x3");
/// assert_eq!(record.problem, "1 3\n- 5 -");
/// assert_eq!(record.source, "daily");
/// # Ok::<(), pzgrid_scheme::DecodeError>(())
/// ```
pub fn build_record(request: &RecordRequest) -> Result<PuzzleRecord, DecodeError> {
    DEFAULT_BUILDER.build(request)
}

/// Decodes `request` with an explicitly chosen scheme, bypassing dispatch.
///
/// The id is still prefixed with `request.puzzle_type`, which need not name a
/// registered scheme.
///
/// # Errors
///
/// Returns the decoder's error unchanged.
pub fn build_record_with(
    scheme: &dyn Scheme,
    request: &RecordRequest,
) -> Result<PuzzleRecord, DecodeError> {
    let decoded = scheme.decode(&request.decode_input())?;
    let problem = decoded.problem_text().to_string();
    let id = PuzzleId::content_addressed(&request.puzzle_type, &problem, decoded.dims());

    log::debug!(
        "built record {id} with {} (difficulty {})",
        scheme.name(),
        request.difficulty
    );
    Ok(PuzzleRecord {
        id,
        source: request.source.clone(),
        problem,
    })
}

/// The problem and solution records of a derived puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedRecord {
    /// Problem text with the derived clue lines.
    pub problem: PuzzleRecord,
    /// Solution text under the same id.
    pub solution: SolutionRecord,
}

/// Wraps a [`DerivedPuzzle`] published under `name` into records.
///
/// Both records share the id `<name>_<rows>x<cols>`.
///
/// # Examples
///
/// ```
/// use pzgrid_dataset::build_derived_record;
/// use pzgrid_scheme::derive_problem;
///
/// let derived = derive_problem("# -\n# #", "- -\n- -")?;
/// let record = build_derived_record("Puzzle 7", "site", &derived);
///
/// assert_eq!(record.problem.id.as_str(), "Puzzle 7_2x2");
/// assert_eq!(record.problem.problem, "2 2\n2 1\n1 2\n- -\n- -");
/// assert_eq!(record.solution.solution, "2 2\n# -\n# #");
/// # Ok::<(), pzgrid_scheme::DecodeError>(())
/// ```
#[must_use]
pub fn build_derived_record(name: &str, source: &str, derived: &DerivedPuzzle) -> DerivedRecord {
    let id = PuzzleId::named(name, derived.dims);
    log::debug!("built derived record {id}");
    DerivedRecord {
        problem: PuzzleRecord {
            id: id.clone(),
            source: source.to_owned(),
            problem: derived.problem.clone(),
        },
        solution: SolutionRecord {
            id,
            source: source.to_owned(),
            solution: derived.solution.clone(),
        },
    }
}
