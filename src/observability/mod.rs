//! Observability module
//!
//! Structured logging for `quizgen` runs. The human run summary is printed
//! by the command handlers; logs carry the per-item detail.

pub mod logging;

pub use logging::{LogFormat, init_logging};
