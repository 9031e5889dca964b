//! FAIR quality scoring.
//!
//! Two fixed rubrics, interoperability (max 110 points) and reusability
//! (max 75 points), are evaluated as `(check, weight)` rule tables over the
//! [`DatasetSignals`](crate::model::DatasetSignals) of a dataset.
//!
//! # Usage
//!
//! ```no_run
//! use fair_audit::model::DatasetSignals;
//! use fair_audit::quality::ScoringEngine;
//! use fair_audit::validation::ComplianceOutcome;
//! use fair_audit::vocabulary::Vocabularies;
//!
//! let signals = DatasetSignals::default();
//! let vocabularies = Vocabularies::default();
//! let report = ScoringEngine::new().score(&signals, &vocabularies, &ComplianceOutcome::Untested);
//!
//! println!("Total: {}/{}", report.total, report.max_total());
//! for result in report.results() {
//!     println!("- {}: {}", result.check.name(), result.passed);
//! }
//! ```

mod checks;
mod formats;
mod rubric;
mod scorer;

pub use checks::{
    has_access_restrictions, has_formats, has_license, has_media_types,
    is_access_restrictions_vocabulary, is_machine_readable_format, is_non_proprietary_format,
    is_vocabulary_license, is_vocabulary_media_type,
};
pub use formats::{ACCESS_RIGHTS_VOCABULARY, MACHINE_READABLE_FORMATS, NON_PROPRIETARY_FORMATS};
pub use rubric::{CheckResult, Check, Dimension, INTEROPERABILITY_RULES, REUSABILITY_RULES};
pub use scorer::{
    DimensionScore, QualityReport, ScoringEngine, ScoringInput, SCORING_ENGINE_VERSION,
};
