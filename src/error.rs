//! Unified error types for fair-audit.
//!
//! Most failures inside the audit core are *soft*: a failed fetch or a
//! malformed document degrades to "signal absent". The types here carry the
//! reason for those degradations into the logs, and represent the few hard
//! failures (catalog page fetch, report writing).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fair-audit operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AuditError {
    /// Errors while retrieving a remote document or resource
    #[error("Fetch failed: {context}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// Errors while parsing a fetched document
    #[error("Failed to parse document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific fetch error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("Resource is not a data file (content type {0})")]
    NotADataFile(String),

    #[error("Remote access is disabled in this build")]
    RemoteDisabled,
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid XML structure: {0}")]
    InvalidXml(String),

    #[error("Invalid CSV structure: {0}")]
    InvalidCsv(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Table has no rows or no columns")]
    EmptyTable,
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Writing report failed: {0}")]
    Write(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for fair-audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AuditError {
    /// Create a fetch error with context
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Create a fetch error for a non-success HTTP status
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::fetch(url, FetchErrorKind::HttpStatus(status))
    }

    /// Create a fetch error for a transport failure
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::fetch(url, FetchErrorKind::Network(message.into()))
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Whether this error came from an HTTP response with the given status
    #[must_use]
    pub const fn is_status(&self, status: u16) -> bool {
        matches!(
            self,
            Self::Fetch {
                source: FetchErrorKind::HttpStatus(s),
                ..
            } if *s == status
        )
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<csv::Error> for AuditError {
    fn from(err: csv::Error) -> Self {
        Self::parse("CSV decoding", ParseErrorKind::InvalidCsv(err.to_string()))
    }
}

impl From<crate::reports::ReportError> for AuditError {
    fn from(err: crate::reports::ReportError) -> Self {
        let kind = match &err {
            crate::reports::ReportError::IoError(_) => ReportErrorKind::Write(err.to_string()),
            _ => ReportErrorKind::Render(err.to_string()),
        };
        Self::report("", kind)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
///
/// # Example
///
/// ```ignore
/// use fair_audit::error::ErrorContext;
///
/// let bytes = std::fs::read(&path).context("reading cached resource")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AuditError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: AuditError, new_ctx: &str) -> AuditError {
    match err {
        AuditError::Fetch {
            context: existing,
            source,
        } => AuditError::Fetch {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Parse {
            context: existing,
            source,
        } => AuditError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Report {
            context: existing,
            source,
        } => AuditError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AuditError::Io {
            path,
            message,
            source,
        } => AuditError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuditError::http_status("https://catalog.data.gov/dataset/x", 404);
        let display = err.to_string();
        assert!(display.contains("catalog.data.gov"), "{display}");

        let err = AuditError::parse("data.json", ParseErrorKind::EmptyTable);
        assert!(err.to_string().contains("data.json"));
    }

    #[test]
    fn test_is_status() {
        let err = AuditError::http_status("u", 400);
        assert!(err.is_status(400));
        assert!(!err.is_status(200));
        assert!(!AuditError::network("u", "timeout").is_status(400));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AuditError::io("/cache/abc-123_csv", io_err);

        assert!(err.to_string().contains("/cache/abc-123_csv"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(AuditError::network("base", "connection reset"))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(AuditError::Fetch { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Fetch error, got {other:?}"),
        }
    }

    #[test]
    fn test_io_context() {
        let result: Result<()> = Err(std::io::Error::other("disk full").into());
        match result.context("writing street-names.csv") {
            Err(AuditError::Io { message, path, .. }) => {
                assert_eq!(message, "writing street-names.csv: disk full");
                assert!(path.is_none());
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
