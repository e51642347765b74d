//! `rewrite` command handler.

use crate::cli::args::RewriteArgs;
use crate::error::QuizgenError;
use crate::rewrite::rewrite_directory;

/// Execute `rewrite`.
///
/// # Errors
///
/// Returns an error for an invalid pattern or an unreadable directory;
/// with `--strict`, also if any file failed.
pub fn run(args: &RewriteArgs) -> Result<(), QuizgenError> {
    let report = rewrite_directory(&args.dir, &args.pattern, args.dry_run)?;
    println!("{report}");

    if args.strict && report.failed() > 0 {
        return Err(QuizgenError::PartialFailure {
            failed: report.failed(),
            attempted: report.files.len(),
        });
    }
    Ok(())
}
