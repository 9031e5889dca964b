//! End-to-end tests for the audit pipeline and batch runner.

mod common;

use common::*;
use fair_audit::{
    cli,
    config::AppConfig,
    error::AuditError,
    model::ProfileOutcome,
    pipeline::{AuditContext, BatchSummary, audit_batch, audit_dataset, exit_codes},
    reports::{ReportFormat, SPREADSHEET_LABELS},
    resources::ResourceCache,
    validation::ComplianceOutcome,
    vocabulary::{VocabularyCache, VocabularyKind, Vocabularies},
};
use std::sync::atomic::{AtomicUsize, Ordering};

fn vocabularies() -> Vocabularies {
    Vocabularies {
        media_types: ["text/csv", "application/json"].into_iter().collect(),
        licences: ["CC0"].into_iter().collect(),
    }
}

const MISSING_URL: &str = "https://catalog.data.gov/dataset/removed-dataset";

// ============================================================================
// Single Dataset
// ============================================================================

mod audit_dataset_tests {
    use super::*;

    #[test]
    fn test_full_audit() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = MockTransport::street_names();
        let vocabularies = vocabularies();
        let ctx = AuditContext::new(&transport, &vocabularies, ResourceCache::new(tmp.path()))
            .with_validation(true, VALIDATION_URL);

        let report = audit_dataset(&ctx, PAGE_URL).unwrap();

        assert_eq!(report.id.as_str(), "street-names");
        assert_eq!(report.title(), Some("Street Names"));
        assert_eq!(report.compliance, ComplianceOutcome::Passed { resources: 2 });
        assert_eq!(report.quality.total, 185);

        let profile = report.profile.profile().expect("profiled");
        assert_eq!((profile.row_count, profile.column_count), (4, 4));
    }

    #[test]
    fn test_validation_disabled_never_posts() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = MockTransport::street_names();
        let vocabularies = vocabularies();
        let ctx = AuditContext::new(&transport, &vocabularies, ResourceCache::new(tmp.path()))
            .with_validation(false, VALIDATION_URL);

        let report = audit_dataset(&ctx, PAGE_URL).unwrap();

        assert_eq!(report.compliance, ComplianceOutcome::Untested);
        assert_eq!(report.quality.total, 155);
        assert_eq!(transport.count("POST "), 0);
    }

    #[test]
    fn test_page_not_found_is_hard_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = MockTransport::new();
        let vocabularies = vocabularies();
        let ctx = AuditContext::new(&transport, &vocabularies, ResourceCache::new(tmp.path()));

        let err = audit_dataset(&ctx, MISSING_URL).unwrap_err();
        assert!(err.is_status(404), "{err}");
        // Nothing is attempted after the page fetch fails
        assert_eq!(transport.calls(), vec![format!("GET {MISSING_URL}")]);
    }

    #[test]
    fn test_page_network_error() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = MockTransport::new().broken(PAGE_URL);
        let vocabularies = vocabularies();
        let ctx = AuditContext::new(&transport, &vocabularies, ResourceCache::new(tmp.path()));

        assert!(matches!(
            audit_dataset(&ctx, PAGE_URL),
            Err(AuditError::Fetch { .. })
        ));
    }

    #[test]
    fn test_missing_resources_still_report() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = MockTransport::street_names().broken(CSV_URL).broken(JSON_URL);
        let vocabularies = vocabularies();
        let ctx = AuditContext::new(&transport, &vocabularies, ResourceCache::new(tmp.path()))
            .with_validation(true, VALIDATION_URL);

        let report = audit_dataset(&ctx, PAGE_URL).unwrap();

        assert!(!report.compliance.is_compliant());
        assert_eq!(report.profile, ProfileOutcome::NoData);
        assert_eq!(report.quality.total, 155);
    }

    #[test]
    fn test_non_catalog_url_uses_fallback_id() {
        let tmp = tempfile::tempdir().unwrap();
        let url = "https://data.example.gov/streets";
        let transport = MockTransport::new().route(
            url,
            fair_audit::transport::HttpResponse::new(200, b"<html><body></body></html>".to_vec()),
        );
        let vocabularies = vocabularies();
        let ctx = AuditContext::new(&transport, &vocabularies, ResourceCache::new(tmp.path()));

        let report = audit_dataset(&ctx, url).unwrap();
        assert_eq!(report.id.as_str(), "temp");
        assert_eq!(report.quality.total, 0);
    }
}

// ============================================================================
// Batch Runner
// ============================================================================

mod batch_tests {
    use super::*;

    fn urls() -> Vec<String> {
        vec![PAGE_URL.to_string(), MISSING_URL.to_string()]
    }

    #[test]
    fn test_failure_is_isolated() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = MockTransport::street_names();
        let vocabularies = vocabularies();
        let ctx = AuditContext::new(&transport, &vocabularies, ResourceCache::new(tmp.path()))
            .with_validation(false, VALIDATION_URL);
        let done = AtomicUsize::new(0);

        let outcomes = audit_batch(&ctx, &urls(), 1, |_| {
            done.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(done.load(Ordering::SeqCst), 2);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());

        let summary = BatchSummary::from_outcomes(&outcomes, None);
        assert_eq!(summary.audited, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.exit_code(), exit_codes::DATASET_FAILED);
    }

    #[test]
    fn test_parallel_batch_keeps_input_order() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = MockTransport::street_names();
        let vocabularies = vocabularies();
        let ctx = AuditContext::new(&transport, &vocabularies, ResourceCache::new(tmp.path()))
            .with_validation(false, VALIDATION_URL);

        let mut urls = urls();
        urls.push(PAGE_URL.to_string());
        let outcomes = audit_batch(&ctx, &urls, 3, |_| {});

        let indices: Vec<usize> = outcomes.iter().map(|o| o.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(outcomes[2].url, PAGE_URL);
        assert!(outcomes[2].report().is_some());
    }

    #[test]
    fn test_min_score_exit_code() {
        let tmp = tempfile::tempdir().unwrap();
        let transport = MockTransport::street_names();
        let vocabularies = vocabularies();
        let ctx = AuditContext::new(&transport, &vocabularies, ResourceCache::new(tmp.path()))
            .with_validation(false, VALIDATION_URL);

        let outcomes = audit_batch(&ctx, &urls(), 1, |_| {});

        assert_eq!(
            BatchSummary::from_outcomes(&outcomes, Some(160)).exit_code(),
            exit_codes::BELOW_MIN_SCORE
        );
        assert_eq!(
            BatchSummary::from_outcomes(&outcomes, Some(155)).exit_code(),
            exit_codes::DATASET_FAILED
        );
    }
}

// ============================================================================
// CLI Audit Run
// ============================================================================

mod cli_tests {
    use super::*;

    fn config(root: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.cache.dir = Some(root.join("cache"));
        config.output.report_dir = root.join("reports");
        config.behavior.quiet = true;
        config.validation.endpoint = VALIDATION_URL.to_string();

        let vocabulary_cache = VocabularyCache::new(config.vocabulary_dir());
        vocabulary_cache
            .write(
                VocabularyKind::MediaType,
                &["text/csv".to_string(), "application/json".to_string()],
            )
            .unwrap();
        vocabulary_cache
            .write(VocabularyKind::Licence, &["CC0".to_string()])
            .unwrap();
        config
    }

    #[test]
    fn test_audit_urls_writes_spreadsheet() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path());
        let transport = MockTransport::street_names();

        let outcomes = cli::audit_urls(&config, &transport, &[PAGE_URL.to_string()]);
        assert_eq!(outcomes.len(), 1);
        // Vocabularies come from the cache, not the network
        assert!(transport.calls().iter().all(|c| !c.contains("iana.org")));

        let path = config.output.report_dir.join("street-names.csv");
        let content = std::fs::read_to_string(&path).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

        let labels: Vec<&str> = rows[0].iter().collect();
        assert_eq!(labels, SPREADSHEET_LABELS.to_vec());
        assert_eq!(&rows[1][12], "185");
        assert_eq!(&rows[1][13], "4");
        assert_eq!(&rows[1][14], "4");
        assert!(rows.iter().any(|r| &r[0] == "link" && &r[1] == PAGE_URL));
    }

    #[test]
    fn test_audit_urls_json_reports() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = config(tmp.path());
        config.output.format = ReportFormat::Json;
        let transport = MockTransport::street_names();

        cli::audit_urls(&config, &transport, &[PAGE_URL.to_string(), MISSING_URL.to_string()]);

        let path = config.output.report_dir.join("street-names.json");
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["total"], 185);
        assert_eq!(value["max_total"], 185);
        assert_eq!(value["id"], "street-names");
        // Failed datasets produce no report file
        assert!(!config.output.report_dir.join("removed-dataset.json").exists());
    }

    #[test]
    fn test_non_catalog_pages_get_separate_reports() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = config(tmp.path());
        config.output.format = ReportFormat::Json;
        let first = "https://data.example.gov/streets";
        let second = "https://data.example.gov/parks";
        let page = || {
            fair_audit::transport::HttpResponse::new(200, b"<html><body></body></html>".to_vec())
        };
        let transport = MockTransport::new().route(first, page()).route(second, page());

        cli::audit_urls(&config, &transport, &[first.to_string(), second.to_string()]);

        let mut names: Vec<String> = std::fs::read_dir(&config.output.report_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names.len(), 2, "{names:?}");
        assert!(names.iter().all(|n| n.starts_with("temp-") && n.ends_with(".json")));
    }

    #[test]
    fn test_no_report_flag() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = config(tmp.path());
        config.output.write_reports = false;
        let transport = MockTransport::street_names();

        cli::audit_urls(&config, &transport, &[PAGE_URL.to_string()]);
        assert!(!config.output.report_dir.exists());
    }
}
