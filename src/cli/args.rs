//! CLI argument definitions
//!
//! All Clap derive structs for `quizgen` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::catalog::Builtin;
use crate::observability::LogFormat;
use crate::render::Template;
use crate::rewrite::DEFAULT_PATTERN;

// ============================================================================
// Root CLI
// ============================================================================

/// Quiz page generator and navigation link rewriter.
#[derive(Parser, Debug)]
#[command(name = "quizgen", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "QUIZGEN_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "QUIZGEN_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one HTML page per catalog chapter.
    Generate(GenerateArgs),

    /// Migrate per-chapter page links in data files to `quiz.<ext>?chapter=NN`.
    Rewrite(RewriteArgs),

    /// Check that generated pages and data scripts reference each other.
    Check(CheckArgs),

    /// Check a catalog for duplicate ordinals, slugs and output paths.
    Validate(ValidateArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),
}

/// Catalog selection shared by catalog-driven commands.
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Built-in catalog.
    #[arg(short, long, default_value = "html")]
    pub set: Builtin,

    /// Catalog YAML file; overrides `--set`.
    #[arg(long, env = "QUIZGEN_CATALOG")]
    pub catalog: Option<PathBuf>,
}

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Catalog selection.
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Template override; defaults to the catalog's template.
    #[arg(short, long)]
    pub template: Option<Template>,

    /// Output root; the catalog's `output_subdir` is appended.
    #[arg(short, long, default_value = ".", env = "QUIZGEN_OUTPUT")]
    pub output: PathBuf,

    /// Exit non-zero if any page fails.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `rewrite`.
#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Directory holding the data files (not searched recursively).
    #[arg(short, long, default_value = ".", env = "QUIZGEN_DATA_DIR")]
    pub dir: PathBuf,

    /// File-name glob selecting the files to rewrite.
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Report what would change without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// Exit non-zero if any file fails.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Catalog selection.
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Directory holding the generated pages; defaults to the catalog's
    /// output directory under the current directory.
    #[arg(long)]
    pub pages: Option<PathBuf>,

    /// Directory holding the data scripts.
    #[arg(long, default_value = "data", env = "QUIZGEN_DATA_DIR")]
    pub data: PathBuf,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog selection.
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Template the catalog will be rendered with; defaults to the catalog's.
    #[arg(short, long)]
    pub template: Option<Template>,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
