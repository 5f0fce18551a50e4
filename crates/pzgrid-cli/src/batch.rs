//! Parallel decoding of JSON-lines record requests.

use std::num::NonZeroUsize;

use pzgrid_dataset::{Dataset, PuzzleRecord, RecordRequest, build_record};
use rayon::prelude::*;

use crate::CliError;

/// A parsed request and the 1-based input line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedRequest {
    /// Input line number.
    pub line: usize,
    /// The request on that line.
    pub request: RecordRequest,
}

/// The outcome of decoding one batch.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Records that decoded, in input order.
    pub records: Vec<PuzzleRecord>,
    /// Lines that could not be parsed or decoded.
    pub failed: usize,
}

impl BatchReport {
    /// Number of lines attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len() + self.failed
    }
}

/// Parses one request per non-blank line.
///
/// Unparsable lines are logged and counted as failures.
#[must_use]
pub fn parse_requests(text: &str) -> (Vec<NumberedRequest>, usize) {
    let mut requests = Vec::new();
    let mut failed = 0;
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(request) => requests.push(NumberedRequest {
                line: i + 1,
                request,
            }),
            Err(err) => {
                log::warn!("line {}: invalid request: {err}", i + 1);
                failed += 1;
            }
        }
    }
    (requests, failed)
}

/// Decodes every request, on `jobs` threads or rayon's global pool.
///
/// A request that fails to decode is logged and skipped; it never aborts the
/// rest of the batch.
///
/// # Errors
///
/// Returns [`CliError::ThreadPool`] if the dedicated pool cannot be started.
pub fn decode_all(
    requests: &[NumberedRequest],
    jobs: Option<NonZeroUsize>,
) -> Result<BatchReport, CliError> {
    let decode = || -> Vec<_> {
        requests
            .par_iter()
            .map(|numbered| (numbered.line, build_record(&numbered.request)))
            .collect()
    };
    let results = match jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs.get())
            .build()?
            .install(decode),
        None => decode(),
    };

    let mut report = BatchReport::default();
    for (line, result) in results {
        match result {
            Ok(record) => report.records.push(record),
            Err(err) => {
                log::warn!("line {line}: {err}");
                report.failed += 1;
            }
        }
    }
    Ok(report)
}

/// Parses, decodes and collects a JSON-lines batch into a dataset.
///
/// The dataset is named `name`, or after the first request's puzzle type.
///
/// # Errors
///
/// Returns [`CliError::AllFailed`] if the batch has lines but none decoded, or
/// [`CliError::ThreadPool`] if the dedicated pool cannot be started.
pub fn run_batch(
    text: &str,
    name: Option<&str>,
    jobs: Option<NonZeroUsize>,
) -> Result<Dataset, CliError> {
    let (requests, unparsed) = parse_requests(text);
    let mut report = decode_all(&requests, jobs)?;
    report.failed += unparsed;

    log::info!(
        "decoded {} of {} records",
        report.records.len(),
        report.total()
    );
    if report.records.is_empty() && report.failed > 0 {
        return Err(CliError::AllFailed {
            count: report.total(),
        });
    }

    let name = name
        .or_else(|| requests.first().map(|numbered| numbered.request.puzzle_type.as_str()))
        .unwrap_or_default();
    Ok(Dataset::from_problems(name, report.records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH: &str = r#"
{"puzzle_type":"shikaku","rows":1,"cols":3,"compact":"a5","source":"s1"}
not json
{"puzzle_type":"dominos","rows":2,"cols":2,"compact":"1[30]"}

{"puzzle_type":"masyu","rows":1,"cols":2,"compact":"aW"}
"#;

    #[test]
    fn test_parse_requests_numbers_lines() {
        let (requests, failed) = parse_requests(BATCH);
        assert_eq!(failed, 1);
        assert_eq!(
            requests.iter().map(|r| r.line).collect::<Vec<_>>(),
            [2, 4, 6]
        );
        assert_eq!(requests[0].request.source, "s1");
    }

    #[test]
    fn test_failures_are_skipped() {
        let (requests, _) = parse_requests(BATCH);
        let report = decode_all(&requests, NonZeroUsize::new(2)).unwrap();
        assert_eq!(report.failed, 1);
        assert_eq!(
            report
                .records
                .iter()
                .map(|record| record.problem.as_str())
                .collect::<Vec<_>>(),
            ["1 3\n- 5 -", "1 2\n- w"]
        );
    }

    #[test]
    fn test_dataset_named_after_first_request() {
        let dataset = run_batch(BATCH, None, None).unwrap();
        assert_eq!(dataset.name, "shikaku");
        assert_eq!(dataset.count, 2);
        assert_eq!(dataset.count_sol, 0);

        let dataset = run_batch(BATCH, Some("mixed"), None).unwrap();
        assert_eq!(dataset.name, "mixed");
    }

    #[test]
    fn test_all_failed() {
        let text = "{\"puzzle_type\":\"nope\",\"rows\":1,\"cols\":1}\n{";
        assert!(matches!(
            run_batch(text, None, None),
            Err(CliError::AllFailed { count: 2 })
        ));
    }

    #[test]
    fn test_oversized_request_does_not_stop_batch() {
        let huge = 1_usize << (usize::BITS / 2);
        let text = format!(
            "{{\"puzzle_type\":\"masyu\",\"rows\":{huge},\"cols\":{huge}}}\n\
             {{\"puzzle_type\":\"masyu\",\"rows\":1,\"cols\":2,\"compact\":\"aW\"}}"
        );
        let (requests, unparsed) = parse_requests(&text);
        assert_eq!(unparsed, 0);
        let report = decode_all(&requests, None).unwrap();
        assert_eq!(report.failed, 1);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].problem, "1 2\n- w");
    }

    #[test]
    fn test_empty_batch_is_an_empty_dataset() {
        let dataset = run_batch("\n\n", Some("masyu"), None).unwrap();
        assert_eq!(dataset.count, 0);
        assert!(dataset.data.is_empty());
    }
}
