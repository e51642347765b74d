//! Logging setup for `quizgen` runs.
//!
//! Per-item outcomes of a batch (`page written`, `rewrite failed`, ...) are
//! logged under the `quizgen` target. The verbosity flags scale only that
//! target; dependencies stay at `warn` until the highest level, so `-v`
//! shows one line per page or file and nothing else.
//!
//! `QUIZGEN_LOG_LEVEL` takes an `EnvFilter` directive and replaces the
//! computed one entirely.

use std::io::IsTerminal;

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::args::ColorChoice;

/// Environment variable that overrides the verbosity flags.
pub const LOG_LEVEL_ENV: &str = "QUIZGEN_LOG_LEVEL";

/// Target prefix of every event this crate emits.
pub const LOG_TARGET: &str = "quizgen";

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Plain text, colored when the terminal allows it.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

/// Filter directive for a `-v` count.
///
/// 0 keeps failures and warnings only. 1-3 raise the `quizgen` target to
/// info, debug and trace. 4 or more traces every target.
#[must_use]
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        3 => "trace",
        _ => return "trace".to_string(),
    };
    format!("warn,{LOG_TARGET}={level}")
}

/// Resolves `--color` against the terminal and `NO_COLOR`.
#[must_use]
pub fn use_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Build the stderr formatting layer for `format`.
///
/// Event targets are shown from `-vv` upward, where the module emitting
/// each line starts to matter.
fn stderr_layer(
    format: LogFormat,
    verbosity: u8,
    color: ColorChoice,
) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2);
    match format {
        LogFormat::Human => layer.with_ansi(use_ansi(color)).boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(stderr_layer(format, verbosity, color))
        .with(filter)
        .try_init();
}
