//! `check` command handler.

use std::path::{Path, PathBuf};

use crate::check::check;
use crate::cli::args::CheckArgs;
use crate::error::QuizgenError;

/// Execute `check`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or any chapter fails
/// the pairing check.
pub fn run(args: &CheckArgs) -> Result<(), QuizgenError> {
    let catalog = super::load_catalog(&args.catalog)?;

    let pages: PathBuf = args.pages.clone().unwrap_or_else(|| {
        catalog
            .page
            .output_subdir
            .as_ref()
            .map_or_else(|| PathBuf::from("."), |sub| Path::new(".").join(sub))
    });

    let report = check(&catalog, &pages, &args.data);
    println!("{report}");

    if report.all_passed() {
        Ok(())
    } else {
        Err(QuizgenError::Failed(format!(
            "{} of {} chapter(s) failed the pairing check",
            report.failed(),
            report.chapters.len()
        )))
    }
}
