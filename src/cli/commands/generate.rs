//! `generate` command handler.

use std::fs;
use std::path::PathBuf;

use crate::cli::args::GenerateArgs;
use crate::error::QuizgenError;
use crate::generate::{FsWriter, generate};

/// Execute `generate`.
///
/// Prints the run summary to stdout. Page failures only change the exit
/// status under `--strict`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the output
/// directory cannot be created; with `--strict`, also if any page failed.
pub fn run(args: &GenerateArgs) -> Result<(), QuizgenError> {
    let catalog = super::load_catalog(&args.catalog)?;
    let template = args.template.unwrap_or(catalog.page.template);

    let output: PathBuf = catalog
        .page
        .output_subdir
        .as_ref()
        .map_or_else(|| args.output.clone(), |sub| args.output.join(sub));
    fs::create_dir_all(&output)?;

    tracing::info!(
        catalog = %catalog.name,
        template = ?template,
        output = %output.display(),
        "generating pages"
    );

    let report = generate(
        &catalog,
        template,
        catalog.page.naming,
        &output,
        &mut FsWriter,
    );
    println!("{report}");

    if args.strict && report.failed() > 0 {
        return Err(QuizgenError::PartialFailure {
            failed: report.failed(),
            attempted: report.attempted(),
        });
    }
    Ok(())
}
