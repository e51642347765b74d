//! Idempotent navigation link migration.
//!
//! Quiz data files embed navigation links of the form
//! `"05-javascript-basics-quiz.html"`. Pages are now served from one
//! `quiz.html` that selects the chapter by query parameter, so each such
//! link becomes `"quiz.html?chapter=05"`. The descriptive slug is dropped
//! and the extension is kept.
//!
//! Files whose content does not change are never written, so a second run
//! over the same directory reports every file as skipped.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use glob::Pattern;
use regex::Regex;

use crate::error::{QuizgenError, RewriteError};
use crate::generate::{FsWriter, PageWriter};

/// Default file-name pattern for data files.
pub const DEFAULT_PATTERN: &str = "quiz-*.js";

/// A quoted per-chapter page link: two digits, a slug, `-quiz.`, extension.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([0-9]{2})-[\w-]+-quiz\.(\w+)""#).expect("valid regex")
});

/// Replacement: single page plus chapter query parameter.
const LINK_REPLACEMENT: &str = r#""quiz.${2}?chapter=${1}""#;

/// Text after link migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// Migrated text.
    pub text: String,
    /// Number of links replaced.
    pub replacements: usize,
}

/// Migrate every per-chapter link in `text`.
///
/// Replacement is repeated until no link matches. For ordinary content
/// this is one pass; it only matters when two links share a quote
/// character (`"05-a-quiz.html"06-b-quiz.html"`), where the closing quote
/// of one replacement opens the next match.
#[must_use]
pub fn rewrite_links(text: &str) -> Rewritten {
    let mut current = text.to_string();
    let mut replacements = 0;

    loop {
        let found = LINK_RE.find_iter(&current).count();
        if found == 0 {
            break;
        }
        current = LINK_RE
            .replace_all(&current, LINK_REPLACEMENT)
            .into_owned();
        replacements += found;
    }

    Rewritten {
        text: current,
        replacements,
    }
}

/// What happened to one discovered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Content changed and was written back (or would be, in a dry run).
    Updated {
        /// Number of links replaced.
        replacements: usize,
    },
    /// Content was already migrated or has no links.
    Skipped,
}

/// Outcome for one discovered file.
#[derive(Debug)]
pub struct FileOutcome {
    /// File path.
    pub path: PathBuf,
    /// Change applied, or the error that stopped this file.
    pub result: Result<Change, RewriteError>,
}

impl FileOutcome {
    fn name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }
}

/// Result of a rewrite scan.
#[derive(Debug)]
pub struct RewriteReport {
    /// Directory scanned.
    pub dir: PathBuf,
    /// File-name pattern used for discovery.
    pub pattern: String,
    /// `true` if nothing was written.
    pub dry_run: bool,
    /// Per-file outcomes sorted by file name.
    pub files: Vec<FileOutcome>,
}

impl RewriteReport {
    /// Number of files whose content changed.
    #[must_use]
    pub fn updated(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.result, Ok(Change::Updated { .. })))
            .count()
    }

    /// Number of files left untouched.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.result, Ok(Change::Skipped)))
            .count()
    }

    /// Number of files that could not be processed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_err()).count()
    }
}

impl fmt::Display for RewriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.files.is_empty() {
            return write!(
                f,
                "no files matching {} in {}",
                self.pattern,
                self.dir.display()
            );
        }

        writeln!(f, "found {} file(s) in {}", self.files.len(), self.dir.display())?;
        let verb = if self.dry_run { "would update" } else { "updated" };
        for file in &self.files {
            match &file.result {
                Ok(Change::Updated { replacements }) => {
                    writeln!(f, "✓ {verb}: {} ({replacements} link(s))", file.name())?;
                }
                Ok(Change::Skipped) => writeln!(f, "- skipped: {} (no changes)", file.name())?,
                Err(e) => writeln!(f, "✗ failed: {}: {e}", file.name())?,
            }
        }
        write!(
            f,
            "{verb} {} file(s), skipped {}, failed {}",
            self.updated(),
            self.skipped(),
            self.failed()
        )
    }
}

/// List regular files directly inside `dir` whose name matches `pattern`,
/// sorted by name. Subdirectories are not entered.
///
/// # Errors
///
/// Returns the I/O error if `dir` cannot be listed.
pub fn discover(dir: &Path, pattern: &Pattern) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::warn!(
                dir = %dir.display(),
                name = %name.to_string_lossy(),
                "skipping file name that is not valid UTF-8"
            );
            continue;
        };
        let path = entry.path();
        if pattern.matches(name) && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Migrate the links of one file in place.
///
/// The file is read as bytes and must be UTF-8. Only the matched links
/// change; line endings and every other byte are written back as read.
///
/// # Errors
///
/// Returns `RewriteError` if the file cannot be read, decoded or written.
pub fn rewrite_file(path: &Path, dry_run: bool) -> Result<Change, RewriteError> {
    rewrite_file_with(path, dry_run, &mut FsWriter)
}

/// [`rewrite_file`] with the write-back going through `writer`.
///
/// # Errors
///
/// Returns `RewriteError` if the file cannot be read, decoded or written.
pub fn rewrite_file_with<W: PageWriter + ?Sized>(
    path: &Path,
    dry_run: bool,
    writer: &mut W,
) -> Result<Change, RewriteError> {
    let bytes = fs::read(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let original = String::from_utf8(bytes).map_err(|source| RewriteError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let rewritten = rewrite_links(&original);
    if rewritten.text == original {
        return Ok(Change::Skipped);
    }

    if !dry_run {
        writer
            .write_page(path, &rewritten.text)
            .map_err(|source| RewriteError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }

    Ok(Change::Updated {
        replacements: rewritten.replacements,
    })
}

/// Migrate every file in `dir` matching `pattern`.
///
/// Per-file failures are recorded and the scan continues.
///
/// # Errors
///
/// Returns `QuizgenError::Pattern` for an invalid pattern and
/// `QuizgenError::Io` if `dir` cannot be listed.
pub fn rewrite_directory(
    dir: &Path,
    pattern: &str,
    dry_run: bool,
) -> Result<RewriteReport, QuizgenError> {
    let compiled = Pattern::new(pattern)?;
    let paths = discover(dir, &compiled)?;
    tracing::info!(dir = %dir.display(), pattern, count = paths.len(), "discovered files");

    let files = paths
        .into_iter()
        .map(|path| {
            let result = rewrite_file(&path, dry_run);
            match &result {
                Ok(Change::Updated { replacements }) => {
                    tracing::info!(path = %path.display(), replacements, dry_run, "links rewritten");
                }
                Ok(Change::Skipped) => tracing::debug!(path = %path.display(), "no changes"),
                Err(e) => tracing::error!(path = %path.display(), error = %e, "rewrite failed"),
            }
            FileOutcome { path, result }
        })
        .collect();

    Ok(RewriteReport {
        dir: dir.to_path_buf(),
        pattern: pattern.to_string(),
        dry_run,
        files,
    })
}
