//! Rubric definition: which checks exist, their dimension and their weight.

use serde::{Deserialize, Serialize};

/// FAIR dimension a check contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Interoperability,
    Reusability,
}

impl Dimension {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Interoperability => "Interoperability",
            Self::Reusability => "Reusability",
        }
    }

    /// Checks of this dimension with their weights, in report order.
    #[must_use]
    pub const fn rules(&self) -> &'static [(Check, u32)] {
        match self {
            Self::Interoperability => INTEROPERABILITY_RULES,
            Self::Reusability => REUSABILITY_RULES,
        }
    }

    /// Highest reachable score for this dimension.
    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.rules().iter().map(|(_, weight)| weight).sum()
    }
}

/// One rubric question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Check {
    Format,
    MediaType,
    VocabularyMediaType,
    NonProprietary,
    MachineReadable,
    DcatApCompliance,
    LicenseInformation,
    LicenseVocabulary,
    AccessRestrictions,
    AccessRestrictionsVocabulary,
    ContactPoint,
    Publisher,
}

impl Check {
    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Format => "Format",
            Self::MediaType => "Media type",
            Self::VocabularyMediaType => "Format / Media type from vocabulary",
            Self::NonProprietary => "Non-proprietary",
            Self::MachineReadable => "Machine readable",
            Self::DcatApCompliance => "DCAT-AP compliance",
            Self::LicenseInformation => "License information",
            Self::LicenseVocabulary => "License vocabulary",
            Self::AccessRestrictions => "Access restrictions",
            Self::AccessRestrictionsVocabulary => "Access restrictions vocabulary",
            Self::ContactPoint => "Contact point",
            Self::Publisher => "Publisher",
        }
    }

    /// Column label used in the spreadsheet report
    #[must_use]
    pub const fn column_label(&self) -> &'static str {
        match self {
            Self::Format => "Format",
            Self::MediaType => "Media_type",
            Self::VocabularyMediaType => "Format_Media_type_from_vocabulary",
            Self::NonProprietary => "Non_proprietary",
            Self::MachineReadable => "Machine_readable",
            Self::DcatApCompliance => "DCATAP_compliance",
            Self::LicenseInformation => "License_information",
            Self::LicenseVocabulary => "License_vocabulary",
            Self::AccessRestrictions => "Access_restrictions",
            Self::AccessRestrictionsVocabulary => "Access_restrictions_vocabulary",
            Self::ContactPoint => "Contact_point",
            Self::Publisher => "Publisher",
        }
    }

    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Format
            | Self::MediaType
            | Self::VocabularyMediaType
            | Self::NonProprietary
            | Self::MachineReadable
            | Self::DcatApCompliance => Dimension::Interoperability,
            Self::LicenseInformation
            | Self::LicenseVocabulary
            | Self::AccessRestrictions
            | Self::AccessRestrictionsVocabulary
            | Self::ContactPoint
            | Self::Publisher => Dimension::Reusability,
        }
    }

    /// Points awarded when the check passes.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.dimension()
            .rules()
            .iter()
            .find(|(check, _)| check == self)
            .map_or(0, |(_, weight)| *weight)
    }
}

pub const INTEROPERABILITY_RULES: &[(Check, u32)] = &[
    (Check::Format, 20),
    (Check::MediaType, 10),
    (Check::VocabularyMediaType, 10),
    (Check::NonProprietary, 20),
    (Check::MachineReadable, 20),
    (Check::DcatApCompliance, 30),
];

pub const REUSABILITY_RULES: &[(Check, u32)] = &[
    (Check::LicenseInformation, 20),
    (Check::LicenseVocabulary, 10),
    (Check::AccessRestrictions, 10),
    (Check::AccessRestrictionsVocabulary, 5),
    (Check::ContactPoint, 20),
    (Check::Publisher, 10),
];

/// Outcome of one check for one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: Check,
    pub passed: bool,
    /// Points earned, `0` or the check's weight
    pub points: u32,
}
