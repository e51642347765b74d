//! Best-effort batch generation of chapter pages.
//!
//! Every chapter is rendered and written in catalog order. A chapter that
//! fails to render or write is recorded in the report and the batch moves
//! on; nothing is retried and no earlier write is rolled back. Existing
//! files are overwritten without a backup.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, NamingConvention};
use crate::error::GenerateError;
use crate::render::Template;

/// Destination for rendered pages and rewritten data files.
pub trait PageWriter {
    /// Write `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn write_page(&mut self, path: &Path, contents: &str) -> std::io::Result<()>;
}

/// Writes pages to the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl PageWriter for FsWriter {
    fn write_page(&mut self, path: &Path, contents: &str) -> std::io::Result<()> {
        fs::write(path, contents)
    }
}

/// Outcome of one chapter.
#[derive(Debug)]
pub struct ItemOutcome {
    /// Chapter identity (`NN-slug`).
    pub chapter: String,
    /// Output path the chapter resolves to.
    pub path: PathBuf,
    /// `Ok` if the page was written.
    pub result: Result<(), GenerateError>,
}

impl ItemOutcome {
    /// Returns `true` if the page was written.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Result of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Catalog name.
    pub catalog: String,
    /// Per-chapter outcomes in catalog order.
    pub items: Vec<ItemOutcome>,
}

impl GenerationReport {
    /// Number of chapters attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.items.len()
    }

    /// Number of pages written.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|i| i.is_success()).count()
    }

    /// Number of chapters that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    /// Failed chapters in catalog order.
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.items.iter().filter(|i| !i.is_success())
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            match &item.result {
                Ok(()) => writeln!(f, "✓ {}", item.path.display())?,
                Err(e) => writeln!(f, "✗ {} ({}): {e}", item.path.display(), item.chapter)?,
            }
        }
        writeln!(f)?;
        write!(
            f,
            "{}: generated {} of {} page(s), {} failed",
            self.catalog,
            self.succeeded(),
            self.attempted(),
            self.failed()
        )
    }
}

/// Render every chapter of `catalog` with `template` and write it under
/// `output_dir` using `naming`.
///
/// Never fails as a whole; per-chapter failures are in the report.
pub fn generate<W: PageWriter + ?Sized>(
    catalog: &Catalog,
    template: Template,
    naming: NamingConvention,
    output_dir: &Path,
    writer: &mut W,
) -> GenerationReport {
    let mut report = GenerationReport {
        catalog: catalog.name.clone(),
        items: Vec::with_capacity(catalog.chapters.len()),
    };

    for chapter in &catalog.chapters {
        let path = output_dir.join(naming.file_name(chapter));
        let chapter_id = chapter.identity();

        let result = template
            .render(chapter, &catalog.page)
            .map_err(GenerateError::from)
            .and_then(|html| {
                writer
                    .write_page(&path, &html)
                    .map_err(|source| GenerateError::Write {
                        path: path.clone(),
                        source,
                    })
            });

        match &result {
            Ok(()) => tracing::info!(chapter = %chapter_id, path = %path.display(), "page written"),
            Err(e) => tracing::error!(chapter = %chapter_id, error = %e, "page generation failed"),
        }

        report.items.push(ItemOutcome {
            chapter: chapter_id,
            path,
            result,
        });
    }

    tracing::debug!(
        catalog = %catalog.name,
        attempted = report.attempted(),
        failed = report.failed(),
        "generation finished"
    );

    report
}
