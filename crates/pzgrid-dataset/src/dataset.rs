use std::{
    collections::{BTreeMap, HashMap},
    iter,
};

use serde::{Deserialize, Serialize};

use crate::{PuzzleId, PuzzleRecord};

/// A solution text keyed by the id of its problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRecord {
    /// Id of the matching [`PuzzleRecord`].
    pub id: PuzzleId,
    /// Where the solution was found.
    pub source: String,
    /// Canonical solution text.
    pub solution: String,
}

/// One puzzle of a [`Dataset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Canonical problem text.
    pub problem: String,
    /// Canonical solution text, empty when unknown.
    pub solution: String,
    /// Where the puzzle was found.
    pub source: String,
    /// Free-form notes; always empty when merged.
    pub info: String,
}

/// All puzzles of one type, keyed by id.
///
/// Serializes as `{count, count_sol, name, data}` with `data` in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Number of entries.
    pub count: usize,
    /// Number of entries with a non-blank solution.
    pub count_sol: usize,
    /// Puzzle type name.
    pub name: String,
    /// Entries keyed by puzzle id.
    pub data: BTreeMap<PuzzleId, DatasetEntry>,
}

impl Dataset {
    /// Pairs problems with solutions by id.
    ///
    /// Every problem becomes one entry; a solution without a problem is dropped.
    /// The entry source is the problem's, or the solution's when the problem's
    /// is blank. A later problem with an already-seen id replaces the earlier
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pzgrid_dataset::{Dataset, PuzzleRecord, SolutionRecord};
    ///
    /// let problem = PuzzleRecord {
    ///     id: "p_1x1".into(),
    ///     source: String::new(),
    ///     problem: "1 1\n-".to_owned(),
    /// };
    /// let solution = SolutionRecord {
    ///     id: "p_1x1".into(),
    ///     source: "site".to_owned(),
    ///     solution: "1 1\n#".to_owned(),
    /// };
    /// let dataset = Dataset::merge("demo", [problem], [solution]);
    ///
    /// assert_eq!(dataset.count, 1);
    /// assert_eq!(dataset.count_sol, 1);
    /// assert_eq!(dataset.data["p_1x1"].source, "site");
    /// ```
    #[must_use]
    pub fn merge<P, S>(name: &str, problems: P, solutions: S) -> Self
    where
        P: IntoIterator<Item = PuzzleRecord>,
        S: IntoIterator<Item = SolutionRecord>,
    {
        let solutions: HashMap<PuzzleId, SolutionRecord> = solutions
            .into_iter()
            .map(|solution| (solution.id.clone(), solution))
            .collect();

        let mut data = BTreeMap::new();
        for problem in problems {
            let matched = solutions.get(&problem.id);
            let source = match matched {
                Some(s) if problem.source.trim().is_empty() => s.source.trim(),
                _ => problem.source.trim(),
            };
            let entry = DatasetEntry {
                solution: matched.map(|s| s.solution.clone()).unwrap_or_default(),
                source: source.to_owned(),
                problem: problem.problem,
                info: String::new(),
            };
            if data.insert(problem.id.clone(), entry).is_some() {
                log::warn!("{name}: duplicate puzzle id {}", problem.id);
            }
        }
        let orphans = solutions.keys().filter(|id| !data.contains_key(*id)).count();
        if orphans > 0 {
            log::debug!("{name}: {orphans} solutions have no problem");
        }

        let count_sol = data
            .values()
            .filter(|entry| !entry.solution.trim().is_empty())
            .count();
        log::info!("{name}: {} puzzles, {count_sol} with solutions", data.len());
        Self {
            count: data.len(),
            count_sol,
            name: name.to_owned(),
            data,
        }
    }

    /// Collects problems with no solutions.
    #[must_use]
    pub fn from_problems<P>(name: &str, problems: P) -> Self
    where
        P: IntoIterator<Item = PuzzleRecord>,
    {
        Self::merge(name, problems, iter::empty())
    }
}
