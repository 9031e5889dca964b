//! **FAIR / DCAT-AP quality auditing for open-data catalog entries.**
//!
//! `fair-audit` fetches dataset pages of a CKAN-style catalog (such as
//! `catalog.data.gov`), extracts the metadata signals they expose, and grades
//! each dataset against two FAIR rubrics: *interoperability* (max 110 points)
//! and *reusability* (max 75 points). The primary CSV resource of each
//! dataset is profiled column by column, and the results are written as
//! console text, a spreadsheet-style CSV grid or JSON.
//!
//! ## Core Concepts & Modules
//!
//! - **[`vocabulary`]**: the reference media-type and licence vocabularies,
//!   with a flat-text read-through cache.
//! - **[`extract`]**: [`MetadataExtractor`] turns a parsed page into
//!   [`DatasetSignals`](model::DatasetSignals).
//! - **[`validation`]**: [`DcatApValidator`] submits each resource to the
//!   SHACL validation service and aggregates one short-circuiting outcome.
//! - **[`quality`]**: the [`ScoringEngine`] evaluates the rubric tables.
//! - **[`profile`]**: the [`TableProfiler`] computes per-column statistics.
//! - **[`reports`]**: console, spreadsheet and JSON renderings.
//! - **[`pipeline`]**: per-dataset orchestration and the parallel batch
//!   runner.
//! - **[`transport`]**: the [`HttpTransport`] seam every network call goes
//!   through.
//!
//! ## Getting Started: Scoring Signals
//!
//! Scoring is a pure function of the extracted signals and the vocabularies:
//!
//! ```
//! use fair_audit::model::DatasetSignals;
//! use fair_audit::quality::ScoringEngine;
//! use fair_audit::validation::ComplianceOutcome;
//! use fair_audit::vocabulary::Vocabularies;
//!
//! let signals = DatasetSignals {
//!     formats: vec!["CSV".to_string()],
//!     access_level: Some("public".to_string()),
//!     has_contact: true,
//!     ..Default::default()
//! };
//! let report = ScoringEngine::new().score(
//!     &signals,
//!     &Vocabularies::default(),
//!     &ComplianceOutcome::Untested,
//! );
//! assert_eq!(report.max_total(), 185);
//! ```
//!
//! ## Auditing a Catalog Page
//!
//! ```no_run
//! use fair_audit::pipeline::{audit_dataset, AuditContext};
//! use fair_audit::resources::ResourceCache;
//! use fair_audit::transport::default_transport;
//! use fair_audit::vocabulary::{VocabularySources, VocabularyStore};
//! use std::time::Duration;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = default_transport(Duration::from_secs(30))?;
//!     let vocabularies = VocabularyStore::new(
//!         "cache/vocabularies",
//!         VocabularySources::default(),
//!         transport.as_ref(),
//!     )
//!     .load_all();
//!
//!     let ctx = AuditContext::new(
//!         transport.as_ref(),
//!         &vocabularies,
//!         ResourceCache::new("cache/resources"),
//!     );
//!     let report = audit_dataset(&ctx, "https://catalog.data.gov/dataset/street-names")?;
//!     println!("{}: {}/185", report.id, report.quality.total);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `remote` (default): the blocking `reqwest` transport. Without it the
//!   crate builds with only the offline transport.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Statistics cast row and cell counts to f64
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod profile;
pub mod quality;
pub mod reports;
pub mod resources;
pub mod transport;
pub mod validation;
pub mod vocabulary;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, Validatable};
pub use error::{AuditError, ErrorContext, Result};
pub use extract::{CatalogPage, HtmlPage, MetadataExtractor};
pub use model::{DatasetId, DatasetSignals, FileProfile, ProfileOutcome};
pub use pipeline::{AuditContext, DatasetOutcome, audit_batch, audit_dataset};
pub use profile::TableProfiler;
pub use quality::{QualityReport, ScoringEngine};
pub use reports::{DatasetReport, ReportFormat, ReportGenerator};
pub use transport::{HttpResponse, HttpTransport};
pub use validation::{ComplianceOutcome, DcatApValidator};
pub use vocabulary::{Vocabularies, Vocabulary, VocabularyStore};
