//! `validate` command handler.

use crate::catalog::validate_catalog;
use crate::cli::args::ValidateArgs;
use crate::error::QuizgenError;

/// Execute `validate`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or has error-level
/// issues (any issue with `--strict`).
pub fn run(args: &ValidateArgs) -> Result<(), QuizgenError> {
    let catalog = super::load_catalog(&args.catalog)?;
    let template = args.template.unwrap_or(catalog.page.template);
    let validation = validate_catalog(&catalog, template);

    for issue in &validation.issues {
        println!("{issue}");
    }

    let failing = if args.strict {
        validation.issues.len()
    } else {
        validation.error_count()
    };

    if failing > 0 {
        return Err(QuizgenError::Failed(format!(
            "catalog {} has {failing} issue(s)",
            catalog.name
        )));
    }

    println!(
        "catalog {}: {} chapter(s), no errors",
        catalog.name,
        catalog.chapters.len()
    );
    Ok(())
}
