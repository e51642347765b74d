//! Page/data pairing check.
//!
//! Confirms that every generated page and its companion data script agree
//! on names: the page exists and references the data file and the global
//! variable, and the data file exists and assigns `window.<variable>`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, ChapterDescriptor};

/// Per-chapter pairing status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterCheck {
    /// Chapter identity (`NN-slug`).
    pub chapter: String,
    /// Page path checked.
    pub page: PathBuf,
    /// Data file path checked.
    pub data: PathBuf,
    /// Global variable expected, if the convention yields one.
    pub variable: Option<String>,
    /// The page exists.
    pub page_exists: bool,
    /// The data file exists.
    pub data_exists: bool,
    /// The page mentions the data file name.
    pub page_references_data: bool,
    /// The page mentions the global variable.
    pub page_references_variable: bool,
    /// The data file assigns `window.<variable>`.
    pub data_defines_variable: bool,
}

impl ChapterCheck {
    /// Returns `true` if every check passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.page_exists
            && self.data_exists
            && self.page_references_data
            && self.page_references_variable
            && self.data_defines_variable
    }

    /// Human-readable descriptions of the failed checks.
    #[must_use]
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if !self.page_exists {
            problems.push("page file does not exist");
        }
        if !self.data_exists {
            problems.push("data file does not exist");
        }
        if self.variable.is_none() {
            problems.push("chapter has no data variable");
        }
        if self.page_exists && !self.page_references_data {
            problems.push("page does not reference the data file");
        }
        if self.page_exists && self.variable.is_some() && !self.page_references_variable {
            problems.push("page does not reference the data variable");
        }
        if self.data_exists && self.variable.is_some() && !self.data_defines_variable {
            problems.push("data file does not define the data variable");
        }
        problems
    }
}

/// Result of checking a catalog.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Per-chapter results in catalog order.
    pub chapters: Vec<ChapterCheck>,
}

impl CheckReport {
    /// Number of chapters that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.chapters.iter().filter(|c| c.passed()).count()
    }

    /// Number of chapters that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.chapters.len() - self.passed()
    }

    /// Returns `true` if every chapter passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for check in &self.chapters {
            let mark = if check.passed() { "✓" } else { "✗" };
            writeln!(f, "{mark} {}", check.page.display())?;
            for problem in check.problems() {
                writeln!(f, "    {problem}")?;
            }
        }
        writeln!(f)?;
        write!(
            f,
            "checked {} chapter(s): {} passed, {} failed",
            self.chapters.len(),
            self.passed(),
            self.failed()
        )
    }
}

/// Check every chapter of `catalog`. Pages are looked up in `pages_dir`
/// with the catalog's naming convention, data scripts in `data_dir`.
#[must_use]
pub fn check(catalog: &Catalog, pages_dir: &Path, data_dir: &Path) -> CheckReport {
    let chapters = catalog
        .chapters
        .iter()
        .map(|chapter| check_chapter(catalog, chapter, pages_dir, data_dir))
        .collect();
    CheckReport { chapters }
}

fn check_chapter(
    catalog: &Catalog,
    chapter: &ChapterDescriptor,
    pages_dir: &Path,
    data_dir: &Path,
) -> ChapterCheck {
    let data_file = catalog.page.payload.data_file(chapter);
    let mut result = ChapterCheck {
        chapter: chapter.identity(),
        page: pages_dir.join(catalog.page.naming.file_name(chapter)),
        data: data_dir.join(&data_file),
        variable: catalog.page.payload.variable(chapter),
        ..ChapterCheck::default()
    };

    if let Some(html) = read_if_present(&result.page) {
        result.page_exists = true;
        result.page_references_data = html.contains(&data_file);
        result.page_references_variable = result
            .variable
            .as_ref()
            .is_some_and(|var| html.contains(var.as_str()));
    }

    if let Some(data) = read_if_present(&result.data) {
        result.data_exists = true;
        result.data_defines_variable = result
            .variable
            .as_ref()
            .is_some_and(|var| data.contains(&format!("window.{var}")));
    }

    if !result.passed() {
        tracing::warn!(chapter = %result.chapter, problems = ?result.problems(), "pairing check failed");
    }

    result
}

fn read_if_present(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read file");
            None
        }
    }
}
