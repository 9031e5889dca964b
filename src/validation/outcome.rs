use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a resource failed DCAT-AP validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureReason {
    /// The resource could not be downloaded or is not a data file
    Download(String),
    /// The validation service could not be reached
    Network(String),
    /// The service answered 400; carries the validation report
    Rejected(String),
    /// Any other status from the service
    UnexpectedStatus(u16),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Download(msg) => write!(f, "download failed: {msg}"),
            Self::Network(msg) => write!(f, "validation service unreachable: {msg}"),
            Self::Rejected(_) => write!(f, "rejected by the validation service"),
            Self::UnexpectedStatus(status) => {
                write!(f, "validation service answered HTTP {status}")
            }
        }
    }
}

/// Dataset-level DCAT-AP result.
///
/// `Untested` covers datasets with nothing to validate (and runs with
/// validation disabled); it is scored like a failure but reported apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComplianceOutcome {
    Untested,
    Passed {
        resources: usize,
    },
    Failed {
        media_type: String,
        url: String,
        reason: FailureReason,
    },
}

impl ComplianceOutcome {
    /// Only a validated dataset counts as compliant.
    #[must_use]
    pub const fn is_compliant(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Untested => "untested",
            Self::Passed { .. } => "passed",
            Self::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for ComplianceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untested => write!(f, "untested"),
            Self::Passed { resources } => write!(f, "passed ({resources} resources)"),
            Self::Failed {
                media_type, reason, ..
            } => write!(f, "failed on {media_type}: {reason}"),
        }
    }
}
