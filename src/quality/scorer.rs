//! Rubric evaluation.
//!
//! Combines extracted signals, the loaded vocabularies and the DCAT-AP
//! outcome into per-dimension scores.

use super::checks::{
    has_access_restrictions, has_formats, has_license, has_media_types,
    is_access_restrictions_vocabulary, is_machine_readable_format, is_non_proprietary_format,
    is_vocabulary_license, is_vocabulary_media_type,
};
use super::rubric::{Check, CheckResult, Dimension};
use crate::model::DatasetSignals;
use crate::validation::ComplianceOutcome;
use crate::vocabulary::Vocabularies;
use serde::{Deserialize, Serialize};

/// Rubric version, bumped whenever a weight or predicate changes
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Everything a check may look at.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub signals: &'a DatasetSignals,
    pub vocabularies: &'a Vocabularies,
    pub compliance: &'a ComplianceOutcome,
}

impl ScoringInput<'_> {
    /// Evaluate one check.
    #[must_use]
    pub fn evaluate(&self, check: Check) -> bool {
        let s = self.signals;
        match check {
            Check::Format => has_formats(&s.formats),
            Check::MediaType => has_media_types(&s.media_types),
            Check::VocabularyMediaType => {
                is_vocabulary_media_type(&s.media_types, &self.vocabularies.media_types)
            }
            Check::NonProprietary => is_non_proprietary_format(&s.formats),
            Check::MachineReadable => is_machine_readable_format(&s.formats),
            Check::DcatApCompliance => self.compliance.is_compliant(),
            Check::LicenseInformation => has_license(&s.licenses),
            Check::LicenseVocabulary => {
                is_vocabulary_license(&s.licenses, &self.vocabularies.licences)
            }
            Check::AccessRestrictions => has_access_restrictions(s.access_level.as_deref()),
            Check::AccessRestrictionsVocabulary => {
                is_access_restrictions_vocabulary(s.access_level.as_deref())
            }
            Check::ContactPoint => s.has_contact,
            Check::Publisher => s.has_publisher,
        }
    }
}

/// Score of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// One result per rule, in rubric order
    pub results: Vec<CheckResult>,
    pub points: u32,
    pub max_points: u32,
}

impl DimensionScore {
    fn evaluate(dimension: Dimension, input: &ScoringInput<'_>) -> Self {
        let results: Vec<CheckResult> = dimension
            .rules()
            .iter()
            .map(|&(check, weight)| {
                let passed = input.evaluate(check);
                CheckResult {
                    check,
                    passed,
                    points: if passed { weight } else { 0 },
                }
            })
            .collect();

        Self {
            dimension,
            points: results.iter().map(|r| r.points).sum(),
            max_points: dimension.max_points(),
            results,
        }
    }

    /// Whether `check` passed; `false` for checks of another dimension.
    #[must_use]
    pub fn passed(&self, check: Check) -> bool {
        self.results
            .iter()
            .any(|r| r.check == check && r.passed)
    }
}

/// Complete quality assessment of one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct QualityReport {
    pub scoring_engine_version: String,
    pub interoperability: DimensionScore,
    pub reusability: DimensionScore,
    /// Interoperability plus reusability points
    pub total: u32,
}

impl QualityReport {
    /// Highest reachable total.
    #[must_use]
    pub fn max_total(&self) -> u32 {
        self.interoperability.max_points + self.reusability.max_points
    }

    #[must_use]
    pub const fn dimension(&self, dimension: Dimension) -> &DimensionScore {
        match dimension {
            Dimension::Interoperability => &self.interoperability,
            Dimension::Reusability => &self.reusability,
        }
    }

    /// Both dimensions' results, interoperability first.
    pub fn results(&self) -> impl Iterator<Item = &CheckResult> {
        self.interoperability
            .results
            .iter()
            .chain(self.reusability.results.iter())
    }
}

/// Stateless rubric evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Score a dataset.
    pub fn score(
        &self,
        signals: &DatasetSignals,
        vocabularies: &Vocabularies,
        compliance: &ComplianceOutcome,
    ) -> QualityReport {
        let input = ScoringInput {
            signals,
            vocabularies,
            compliance,
        };

        let interoperability = DimensionScore::evaluate(Dimension::Interoperability, &input);
        let reusability = DimensionScore::evaluate(Dimension::Reusability, &input);
        let total = interoperability.points + reusability.points;

        QualityReport {
            scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
            interoperability,
            reusability,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;

    fn vocabularies() -> Vocabularies {
        Vocabularies {
            media_types: ["text/csv", "application/json"].into_iter().collect(),
            licences: ["CC0"].into_iter().collect(),
        }
    }

    fn reference_signals() -> DatasetSignals {
        DatasetSignals {
            formats: vec!["CSV".to_string()],
            licenses: ["CC0".to_string()].into_iter().collect(),
            access_level: Some("public".to_string()),
            has_contact: true,
            has_publisher: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_dataset_scores_125() {
        let report = ScoringEngine::new().score(
            &reference_signals(),
            &vocabularies(),
            &ComplianceOutcome::Untested,
        );

        assert_eq!(report.interoperability.points, 60);
        assert_eq!(report.reusability.points, 65);
        assert_eq!(report.total, 125);

        assert!(report.interoperability.passed(Check::NonProprietary));
        assert!(!report.interoperability.passed(Check::VocabularyMediaType));
        assert!(!report.reusability.passed(Check::Publisher));
    }

    #[test]
    fn test_empty_signals_score_zero() {
        let empty = Vocabularies {
            media_types: Vocabulary::empty(),
            licences: Vocabulary::empty(),
        };
        let report = ScoringEngine::new().score(
            &DatasetSignals::default(),
            &empty,
            &ComplianceOutcome::Untested,
        );
        assert_eq!(report.total, 0);
        assert_eq!(report.max_total(), 185);
        assert!(report.results().all(|r| !r.passed));
    }

    #[test]
    fn test_perfect_dataset() {
        let signals = DatasetSignals {
            formats: vec!["CSV".to_string(), "JSON".to_string()],
            media_types: vec!["text/csv".to_string(), "application/json".to_string()],
            has_publisher: true,
            ..reference_signals()
        };
        let report = ScoringEngine::new().score(
            &signals,
            &vocabularies(),
            &ComplianceOutcome::Passed { resources: 2 },
        );
        assert_eq!(report.interoperability.points, 110);
        assert_eq!(report.reusability.points, 75);
        assert_eq!(report.results().count(), 12);
    }
}
