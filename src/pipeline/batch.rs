//! Batch execution over many catalog pages.

use super::audit::{audit_dataset, AuditContext};
use super::exit_codes;
use crate::error::AuditError;
use crate::reports::DatasetReport;
use rayon::prelude::*;

/// Result of auditing one URL of a batch.
#[derive(Debug)]
pub struct DatasetOutcome {
    /// Position of the URL in the input list
    pub index: usize,
    pub url: String,
    pub result: Result<DatasetReport, AuditError>,
}

impl DatasetOutcome {
    #[must_use]
    pub fn report(&self) -> Option<&DatasetReport> {
        self.result.as_ref().ok()
    }
}

/// Audit every URL, at most `jobs` at a time.
///
/// Datasets are independent: a failing dataset yields a failed outcome and
/// the others carry on. `on_done` is called as each dataset completes (in
/// input order when `jobs` is 1); the returned outcomes are always in input
/// order.
pub fn audit_batch<F>(
    ctx: &AuditContext<'_>,
    urls: &[String],
    jobs: usize,
    on_done: F,
) -> Vec<DatasetOutcome>
where
    F: Fn(&DatasetOutcome) + Sync,
{
    let run = |(index, url): (usize, &String)| {
        tracing::debug!("[{}/{}] {}", index + 1, urls.len(), url);
        let outcome = DatasetOutcome {
            index,
            url: url.clone(),
            result: audit_dataset(ctx, url),
        };
        if let Err(e) = &outcome.result {
            tracing::error!("{}: {}", url, e);
        }
        on_done(&outcome);
        outcome
    };

    if jobs <= 1 {
        return urls.iter().enumerate().map(run).collect();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool.install(|| urls.par_iter().enumerate().map(run).collect()),
        Err(e) => {
            tracing::warn!("Cannot start {} workers ({}), auditing sequentially", jobs, e);
            urls.iter().enumerate().map(run).collect()
        }
    }
}

/// Totals of a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub audited: usize,
    pub failed: usize,
    /// Audited datasets scoring below the minimum
    pub below_min_score: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn from_outcomes(outcomes: &[DatasetOutcome], min_score: Option<u32>) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome.report() {
                Some(report) => {
                    summary.audited += 1;
                    if min_score.is_some_and(|min| report.quality.total < min) {
                        summary.below_min_score += 1;
                    }
                }
                None => summary.failed += 1,
            }
        }
        summary
    }

    /// Process exit code for this batch.
    ///
    /// A score below the minimum takes precedence over failed datasets.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.below_min_score > 0 {
            exit_codes::BELOW_MIN_SCORE
        } else if self.failed > 0 {
            exit_codes::DATASET_FAILED
        } else {
            exit_codes::SUCCESS
        }
    }
}
