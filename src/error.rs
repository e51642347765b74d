//! Error types for `quizgen`
//!
//! One enum per pipeline stage, aggregated into [`QuizgenError`] which maps
//! onto process exit codes.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `quizgen` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution (including best-effort runs with item failures)
    pub const SUCCESS: i32 = 0;

    /// General error (failed integrity check or catalog validation)
    pub const ERROR: i32 = 1;

    /// Catalog could not be loaded
    pub const CATALOG_ERROR: i32 = 2;

    /// I/O error outside of a single batch item
    pub const IO_ERROR: i32 = 3;

    /// Some batch items failed and `--strict` was requested
    pub const PARTIAL_FAILURE: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `quizgen` commands.
///
/// Per-item failures inside a batch never become a `QuizgenError`; they are
/// collected into the batch report instead.
#[derive(Debug, Error)]
pub enum QuizgenError {
    /// Catalog loading error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid glob pattern for the rewriter
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Catalog validation or integrity check reported failures
    #[error("{0}")]
    Failed(String),

    /// A best-effort batch had item failures in strict mode
    #[error("{failed} of {attempted} item(s) failed")]
    PartialFailure {
        /// Number of failed items
        failed: usize,
        /// Number of attempted items
        attempted: usize,
    },
}

impl QuizgenError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog(_) => ExitCode::CATALOG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Pattern(_) => ExitCode::USAGE_ERROR,
            Self::Failed(_) => ExitCode::ERROR,
            Self::PartialFailure { .. } => ExitCode::PARTIAL_FAILURE,
        }
    }
}

// ============================================================================
// Catalog Errors
// ============================================================================

/// The chapter catalog could not be loaded. Fatal for the whole run.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Catalog YAML is malformed
    #[error("failed to parse catalog {name}: {source}")]
    Parse {
        /// Catalog file path or built-in name
        name: String,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// Catalog parsed but lists no chapters
    #[error("catalog {name} contains no chapters")]
    Empty {
        /// Catalog file path or built-in name
        name: String,
    },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Rendering a single chapter against a template failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The template references a placeholder the chapter cannot supply
    #[error("missing field '{field}' for chapter {chapter}")]
    MissingField {
        /// Placeholder name
        field: String,
        /// Chapter identity (`NN-slug`)
        chapter: String,
    },

    /// The template references a placeholder name that does not exist
    #[error("unknown placeholder '{{{{{name}}}}}' in template")]
    UnknownPlaceholder {
        /// Placeholder name as written in the template
        name: String,
    },
}

// ============================================================================
// Batch Item Errors
// ============================================================================

/// Failure of one descriptor inside the generation batch.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Writing the output file failed
    #[error("failed to write {path}: {source}")]
    Write {
        /// Output file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Failure of one file inside the link rewrite scan.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// File could not be read (vanished, permission denied)
    #[error("failed to read {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        /// File path
        path: PathBuf,
        /// Underlying decoding error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Rewritten content could not be written back
    #[error("failed to write {path}: {source}")]
    Write {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for `quizgen` commands.
pub type Result<T> = std::result::Result<T, QuizgenError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CATALOG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::PARTIAL_FAILURE, 4);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_catalog_error_exit_code() {
        let err: QuizgenError = CatalogError::Empty {
            name: "html".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CATALOG_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: QuizgenError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_partial_failure_display() {
        let err = QuizgenError::PartialFailure {
            failed: 2,
            attempted: 23,
        };
        assert_eq!(err.to_string(), "2 of 23 item(s) failed");
        assert_eq!(err.exit_code(), ExitCode::PARTIAL_FAILURE);
    }

    #[test]
    fn test_missing_field_display() {
        let err = RenderError::MissingField {
            field: "variable".to_string(),
            chapter: "07-forms-advanced".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing field 'variable' for chapter 07-forms-advanced"
        );
    }

    #[test]
    fn test_unknown_placeholder_display() {
        let err = RenderError::UnknownPlaceholder {
            name: "colour".to_string(),
        };
        assert_eq!(err.to_string(), "unknown placeholder '{{colour}}' in template");
    }

    #[test]
    fn test_write_error_names_path() {
        let err = GenerateError::Write {
            path: PathBuf::from("out/07-forms-advanced-quiz.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("07-forms-advanced-quiz.html"));
        assert!(err.to_string().contains("denied"));
    }
}
