//! `quizgen` - Quiz page generator and navigation link rewriter
//!
//! Renders one HTML page per chapter of a quiz catalog and migrates the
//! per-chapter page links embedded in quiz data files to a single
//! parameterized `quiz.<ext>?chapter=NN` page.

pub mod catalog;
pub mod check;
pub mod cli;
pub mod error;
pub mod generate;
pub mod observability;
pub mod render;
pub mod rewrite;
