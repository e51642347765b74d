//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod completions;
pub mod generate;
pub mod rewrite;
pub mod validate;

use crate::catalog::{self, Catalog};
use crate::cli::args::{CatalogArgs, Cli, Commands};
use crate::error::QuizgenError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), QuizgenError> {
    match cli.command {
        Commands::Generate(args) => generate::run(&args),
        Commands::Rewrite(args) => rewrite::run(&args),
        Commands::Check(args) => check::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
    }
}

/// Load the catalog selected on the command line.
fn load_catalog(args: &CatalogArgs) -> Result<Catalog, QuizgenError> {
    let catalog = catalog::resolve(args.catalog.as_deref(), args.set)?;
    tracing::info!(
        catalog = %catalog.name,
        chapters = catalog.chapters.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
