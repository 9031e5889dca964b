//! Audit orchestration.
//!
//! [`audit_dataset`] runs the whole pipeline for one catalog page:
//! fetch → extract → validate → score → profile. [`audit_batch`] runs it
//! over a URL list with bounded parallelism and per-dataset fault isolation.

mod audit;
mod batch;
mod output;

pub use audit::{audit_dataset, AuditContext};
pub use batch::{audit_batch, BatchSummary, DatasetOutcome};
pub use output::{should_use_color, write_output, write_report_file, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Every dataset was audited
    pub const SUCCESS: i32 = 0;
    /// At least one catalog page could not be audited
    pub const DATASET_FAILED: i32 = 1;
    /// A dataset scored below `--min-score`
    pub const BELOW_MIN_SCORE: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
