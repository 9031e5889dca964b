//! Audit command handler.
//!
//! Implements the `audit` subcommand: resolve the URL list, load the
//! vocabularies once, audit every dataset and write the reports.

use crate::config::{AppConfig, Validatable, DEFAULT_CATALOG_URLS};
use crate::pipeline::{
    audit_batch, exit_codes, should_use_color, write_report_file, AuditContext, BatchSummary,
    DatasetOutcome,
};
use crate::reports::{create_reporter, ConsoleReporter, ReportGenerator};
use crate::resources::ResourceCache;
use crate::transport::{default_transport, HttpTransport};
use crate::vocabulary::VocabularyStore;
use anyhow::{bail, Context, Result};
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Where the catalog URLs of a run come from, highest priority first.
#[derive(Debug, Default, Clone)]
pub struct UrlSource {
    /// URLs given as arguments
    pub urls: Vec<String>,
    /// File with one URL per line
    pub urls_file: Option<PathBuf>,
}

impl UrlSource {
    /// Resolve the URL list: arguments, then the URL file, then the
    /// configured list, then the built-in sample of data.gov datasets.
    pub fn resolve(&self, config: &AppConfig) -> Result<Vec<String>> {
        let mut urls = self.urls.clone();
        if let Some(path) = &self.urls_file {
            urls.extend(read_url_file(path)?);
        }
        if urls.is_empty() {
            urls.clone_from(&config.catalog.urls);
        }
        if urls.is_empty() {
            tracing::info!("No URLs given, auditing the built-in sample list");
            urls = DEFAULT_CATALOG_URLS.iter().map(|u| (*u).to_string()).collect();
        }
        Ok(urls)
    }
}

/// Read a URL list, skipping blank lines and `#` comments.
pub fn read_url_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read URL file {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Run the audit command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_audit(config: &AppConfig, source: &UrlSource) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            tracing::error!("{}", e);
        }
        bail!("invalid configuration ({} errors)", errors.len());
    }

    let urls = source.resolve(config)?;
    let transport =
        default_transport(config.timeout()).context("failed to create HTTP client")?;
    tracing::debug!("Using {} transport", transport.name());

    let outcomes = audit_urls(config, transport.as_ref(), &urls);
    let summary = BatchSummary::from_outcomes(&outcomes, config.behavior.min_score);

    if let Some(threshold) = config.behavior.min_score {
        for report in outcomes.iter().filter_map(DatasetOutcome::report) {
            if report.quality.total < threshold {
                tracing::error!(
                    "{}: score {} is below minimum threshold {}",
                    report.id,
                    report.quality.total,
                    threshold
                );
            }
        }
    }

    tracing::info!(
        "Audited {} of {} datasets ({} failed)",
        summary.audited,
        urls.len(),
        summary.failed
    );
    Ok(summary.exit_code())
}

/// Audit `urls` with an explicit transport.
///
/// Loads the vocabularies once, then runs the batch. Console reports and
/// report files are emitted as each dataset completes.
pub fn audit_urls(
    config: &AppConfig,
    transport: &dyn HttpTransport,
    urls: &[String],
) -> Vec<DatasetOutcome> {
    let vocabularies = VocabularyStore::new(
        config.vocabulary_dir(),
        config.vocabulary_sources(),
        transport,
    )
    .load_all();
    tracing::info!(
        "Vocabularies: {} media types, {} licences",
        vocabularies.media_types.len(),
        vocabularies.licences.len()
    );

    let ctx = AuditContext::new(
        transport,
        &vocabularies,
        ResourceCache::new(config.resource_dir()),
    )
    .with_id_prefix(config.catalog.id_prefix.clone())
    .with_validation(
        config.validation.enabled,
        config.validation.endpoint.clone(),
    );

    let console = if should_use_color(config.output.no_color) {
        ConsoleReporter::new()
    } else {
        ConsoleReporter::new().no_color()
    };
    let file_reporter = create_reporter(config.output.format);

    audit_batch(&ctx, urls, config.behavior.jobs, |outcome| {
        let Some(report) = outcome.report() else {
            return;
        };

        if !config.behavior.quiet {
            match console.generate(report) {
                // One write per report keeps parallel output readable
                Ok(text) => {
                    let _ = writeln!(std::io::stdout().lock(), "{text}");
                }
                Err(e) => tracing::warn!("{}: console report failed: {}", report.id, e),
            }
        }

        if config.output.write_reports
            && let Err(e) =
                write_report_file(&config.output.report_dir, report, file_reporter.as_ref())
        {
            tracing::error!("{}: {}", report.id, e);
        }
    })
}

/// Map a handler result to a process exit code.
#[must_use]
pub fn exit_code_for(result: &Result<i32>) -> i32 {
    match result {
        Ok(code) => *code,
        Err(_) => exit_codes::ERROR,
    }
}
