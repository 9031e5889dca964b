//! Integration tests for fair-audit
//!
//! These tests drive the extraction, validation, scoring, profiling and
//! reporting stages against a catalog page fixture served by a recording
//! mock transport.

mod common;

use common::*;
use fair_audit::{
    extract::{HtmlPage, MetadataExtractor},
    model::{ColumnStats, DatasetId, DatasetSignals, DownloadLink, MediaDownload, ProfileOutcome},
    profile::TableProfiler,
    quality::{Check, ScoringEngine},
    resources::ResourceCache,
    validation::{ComplianceOutcome, DcatApValidator, FailureReason},
    vocabulary::Vocabularies,
};

// ============================================================================
// Test Fixtures
// ============================================================================

fn page() -> HtmlPage {
    let html = String::from_utf8(fixture("catalog/street-names.html")).unwrap();
    HtmlPage::parse(&html)
}

fn vocabularies() -> Vocabularies {
    Vocabularies {
        media_types: ["text/csv", "application/json", "application/xml"]
            .into_iter()
            .collect(),
        licences: ["CC0", "CC-BY-4.0", "ODC-BY"].into_iter().collect(),
    }
}

fn id() -> DatasetId {
    DatasetId::from_catalog_url(PAGE_URL)
}

// ============================================================================
// Extraction Tests
// ============================================================================

mod extraction_tests {
    use super::*;

    #[test]
    fn test_extract_street_names_page() {
        let transport = MockTransport::street_names();
        let signals = MetadataExtractor::new(&transport).extract(&page(), PAGE_URL);

        assert_eq!(signals.title.as_deref(), Some("Street Names"));
        assert_eq!(signals.formats, vec!["CSV", "JSON"]);
        assert_eq!(signals.media_types, vec!["text/csv", "application/json"]);
        assert_eq!(
            signals.media_downloads,
            vec![
                MediaDownload::new("text/csv", CSV_URL),
                MediaDownload::new("application/json", JSON_URL),
            ]
        );
        assert_eq!(signals.licenses.iter().collect::<Vec<_>>(), vec!["CC0"]);
        assert_eq!(signals.access_level.as_deref(), Some("public"));
        assert!(signals.has_contact);
        assert!(signals.has_publisher);
        assert_eq!(
            signals.download_links,
            vec![
                DownloadLink::new("csv", CSV_URL),
                DownloadLink::new("json", JSON_URL),
            ]
        );
    }

    #[test]
    fn test_metadata_link_resolved_against_page_url() {
        let transport = MockTransport::street_names();
        MetadataExtractor::new(&transport).extract(&page(), PAGE_URL);

        assert_eq!(transport.calls(), vec![format!("GET {DATA_JSON_URL}")]);
    }

    #[test]
    fn test_broken_metadata_record_degrades_to_no_media_types() {
        let transport = MockTransport::street_names().broken(DATA_JSON_URL);
        let signals = MetadataExtractor::new(&transport).extract(&page(), PAGE_URL);

        assert!(signals.media_types.is_empty());
        assert!(signals.media_downloads.is_empty());
        // The rest of the page is unaffected
        assert_eq!(signals.formats, vec!["CSV", "JSON"]);
    }

    #[test]
    fn test_malformed_metadata_record() {
        let transport = MockTransport::street_names().route(
            DATA_JSON_URL,
            fair_audit::transport::HttpResponse::new(200, b"<html>oops</html>".to_vec()),
        );
        let signals = MetadataExtractor::new(&transport).extract(&page(), PAGE_URL);
        assert!(signals.media_types.is_empty());
    }

    #[test]
    fn test_empty_page_yields_absent_signals() {
        let transport = MockTransport::new();
        let signals =
            MetadataExtractor::new(&transport).extract(&HtmlPage::parse("<html></html>"), PAGE_URL);

        assert_eq!(signals, DatasetSignals::default());
        assert!(transport.calls().is_empty());
    }
}

// ============================================================================
// DCAT-AP Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    fn pairs() -> Vec<MediaDownload> {
        vec![
            MediaDownload::new("text/csv", CSV_URL),
            MediaDownload::new("application/json", JSON_URL),
        ]
    }

    #[test]
    fn test_all_pairs_pass() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResourceCache::new(tmp.path());
        let transport = MockTransport::street_names();

        let outcome = DcatApValidator::new(&transport, &cache)
            .with_endpoint(VALIDATION_URL)
            .validate(&id(), &pairs());

        assert_eq!(outcome, ComplianceOutcome::Passed { resources: 2 });
        assert_eq!(transport.count("POST "), 2);
        assert!(transport
            .calls()
            .contains(&format!("POST {VALIDATION_URL} application/json")));
    }

    #[test]
    fn test_first_rejection_short_circuits() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResourceCache::new(tmp.path());
        let transport = MockTransport::street_names().post_statuses(&[400, 200]);

        let outcome = DcatApValidator::new(&transport, &cache)
            .with_endpoint(VALIDATION_URL)
            .validate(&id(), &pairs());

        assert!(!outcome.is_compliant());
        match outcome {
            ComplianceOutcome::Failed {
                media_type, reason, ..
            } => {
                assert_eq!(media_type, "text/csv");
                assert_eq!(reason, FailureReason::Rejected("report".to_string()));
            }
            other => panic!("Expected Failed, got {other:?}"),
        }
        // The second pair is neither downloaded nor posted
        assert_eq!(transport.count("POST "), 1);
        assert_eq!(transport.count(&format!("GET {JSON_URL}")), 0);
    }

    #[test]
    fn test_download_failure_fails_without_posting() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResourceCache::new(tmp.path());
        let transport = MockTransport::street_names().broken(CSV_URL);

        let outcome = DcatApValidator::new(&transport, &cache)
            .with_endpoint(VALIDATION_URL)
            .validate(&id(), &pairs());

        assert!(matches!(
            outcome,
            ComplianceOutcome::Failed {
                reason: FailureReason::Download(_),
                ..
            }
        ));
        assert_eq!(transport.count("POST "), 0);
    }

    #[test]
    fn test_html_resource_is_not_downloaded() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResourceCache::new(tmp.path());
        let transport = MockTransport::street_names().route(
            CSV_URL,
            fair_audit::transport::HttpResponse::new(200, b"<html></html>".to_vec())
                .with_content_type("text/html"),
        );

        let outcome = DcatApValidator::new(&transport, &cache)
            .with_endpoint(VALIDATION_URL)
            .validate(&id(), &pairs());

        assert!(!outcome.is_compliant());
        assert_eq!(transport.count(&format!("GET {CSV_URL}")), 0);
    }

    #[test]
    fn test_second_run_uses_cache() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResourceCache::new(tmp.path());
        let transport = MockTransport::street_names();
        let validator = DcatApValidator::new(&transport, &cache).with_endpoint(VALIDATION_URL);

        validator.validate(&id(), &pairs());
        let downloads = transport.count("GET ");
        validator.validate(&id(), &pairs());

        assert_eq!(transport.count("GET "), downloads);
        assert_eq!(transport.count("POST "), 4);
    }
}

// ============================================================================
// Scoring Tests
// ============================================================================

mod scoring_tests {
    use super::*;

    #[test]
    fn test_reference_dataset_scores_125() {
        let signals = DatasetSignals {
            formats: vec!["CSV".to_string()],
            licenses: ["CC0".to_string()].into_iter().collect(),
            access_level: Some("public".to_string()),
            has_contact: true,
            has_publisher: false,
            ..Default::default()
        };
        let report = ScoringEngine::new().score(
            &signals,
            &vocabularies(),
            &ComplianceOutcome::Failed {
                media_type: "text/csv".to_string(),
                url: CSV_URL.to_string(),
                reason: FailureReason::UnexpectedStatus(500),
            },
        );

        assert_eq!(report.interoperability.points, 60);
        assert_eq!(report.reusability.points, 65);
        assert_eq!(report.total, 125);
    }

    #[test]
    fn test_extracted_page_scores() {
        let transport = MockTransport::street_names();
        let signals = MetadataExtractor::new(&transport).extract(&page(), PAGE_URL);
        let engine = ScoringEngine::new();

        let passed = engine.score(
            &signals,
            &vocabularies(),
            &ComplianceOutcome::Passed { resources: 2 },
        );
        assert_eq!(passed.total, 185);

        let untested = engine.score(&signals, &vocabularies(), &ComplianceOutcome::Untested);
        assert_eq!(untested.interoperability.points, 80);
        assert!(!untested.interoperability.passed(Check::DcatApCompliance));
    }

    #[test]
    fn test_empty_vocabularies_only_affect_vocabulary_checks() {
        let transport = MockTransport::street_names();
        let signals = MetadataExtractor::new(&transport).extract(&page(), PAGE_URL);
        let report = ScoringEngine::new().score(
            &signals,
            &Vocabularies::default(),
            &ComplianceOutcome::Untested,
        );

        assert_eq!(report.interoperability.points, 70);
        assert_eq!(report.reusability.points, 65);
    }
}

// ============================================================================
// Profiling Tests
// ============================================================================

mod profile_tests {
    use super::*;

    #[test]
    fn test_profile_streets_csv() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResourceCache::new(tmp.path());
        let transport = MockTransport::street_names();
        let links = vec![
            DownloadLink::new("json", JSON_URL),
            DownloadLink::new("csv", CSV_URL),
        ];

        let outcome = TableProfiler::new(&transport, &cache).profile_resources(&id(), &links);
        let profile = outcome.profile().expect("csv profiled");

        assert_eq!(profile.row_count, 4);
        assert_eq!(profile.column_count, 4);
        assert_eq!(
            profile.column_names(),
            vec!["name", "segments", "length_km", "zone"]
        );
        assert_eq!(profile.missing_counts(), vec![0, 0, 1, 1]);
        assert_eq!(profile.unique_counts(), vec![4, 3, 3, 2]);

        assert_eq!(profile.columns[0].stats, ColumnStats::NonNumeric);
        assert_eq!(
            profile.columns[1].stats,
            ColumnStats::Numeric {
                integer: true,
                zero_count: 2,
                min: 0.0,
                max: 12.0,
                mean: 4.0,
            }
        );
        assert_eq!(profile.columns[2].stats.mean(), Some(1.5));
        assert_eq!(profile.columns[2].stats.zero_count(), Some(0));
        // The JSON link is never fetched
        assert_eq!(transport.count(&format!("GET {JSON_URL}")), 0);
    }

    #[test]
    fn test_unparseable_csv_is_no_data() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResourceCache::new(tmp.path());
        let transport = MockTransport::new().route(
            CSV_URL,
            fair_audit::transport::HttpResponse::new(200, b"a,b\n1,2,3,4\n".to_vec()),
        );

        let outcome = TableProfiler::new(&transport, &cache)
            .profile_resources(&id(), &[DownloadLink::new("csv", CSV_URL)]);
        assert_eq!(outcome, ProfileOutcome::NoData);
    }

    #[test]
    fn test_missing_resource_is_no_data() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResourceCache::new(tmp.path());
        let transport = MockTransport::new();

        let outcome = TableProfiler::new(&transport, &cache)
            .profile_resources(&id(), &[DownloadLink::new("csv", CSV_URL)]);
        assert_eq!(outcome, ProfileOutcome::NoData);
    }
}
