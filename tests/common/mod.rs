//! Shared helpers for end-to-end tests that spawn the `quizgen` binary.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Environment variables that would change CLI defaults.
const QUIZGEN_ENV: &[&str] = &[
    "QUIZGEN_CATALOG",
    "QUIZGEN_OUTPUT",
    "QUIZGEN_DATA_DIR",
    "QUIZGEN_COLOR",
    "QUIZGEN_LOG_FORMAT",
    "QUIZGEN_LOG_LEVEL",
];

/// Run `quizgen` with `args` in `cwd` and wait for it to exit.
pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quizgen"));
    cmd.args(args).current_dir(cwd);
    for var in QUIZGEN_ENV {
        cmd.env_remove(var);
    }
    cmd.output().expect("failed to spawn quizgen")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Exit code, panicking if the process was killed by a signal.
pub fn code(output: &Output) -> i32 {
    output.status.code().expect("process terminated by signal")
}

/// A small catalog with two ordinal chapters, rendered with the minimal
/// template.
pub const SMALL_CATALOG: &str = r#"
name: small
page:
  subject: Test Quiz
  naming: ordinal-slug-quiz
  template: minimal
  payload:
    kind: ordinal
    file_prefix: quiz
    variable_prefix: testQuiz_
  data_dir: data
  renderer_script: js/quiz-renderer.js
chapters:
  - { ordinal: 1, slug: intro, title: Intro }
  - { ordinal: 2, slug: next-steps, title: Next Steps }
"#;
