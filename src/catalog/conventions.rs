//! Naming conventions deriving file and variable names from a chapter.

use serde::Deserialize;

use super::ChapterDescriptor;

/// Maps a chapter to its output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingConvention {
    /// `NN-<slug>-quiz.html`
    OrdinalSlugQuiz,
    /// `<slug>.html`
    Slug,
}

impl NamingConvention {
    /// Output file name for `chapter`.
    #[must_use]
    pub fn file_name(self, chapter: &ChapterDescriptor) -> String {
        match self {
            Self::OrdinalSlugQuiz => format!("{:02}-{}-quiz.html", chapter.ordinal, chapter.slug),
            Self::Slug => format!("{}.html", chapter.slug),
        }
    }
}

/// Maps a chapter to the data script the page loads and the global variable
/// that script defines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PayloadConvention {
    /// `<file_prefix>-NN.js` defining `<variable_prefix>NN`.
    Ordinal {
        /// Data file name prefix.
        file_prefix: String,
        /// Global variable prefix.
        variable_prefix: String,
    },
    /// `<file_prefix>-<slug>.js` defining `<variable_prefix><variable>`.
    Named {
        /// Data file name prefix.
        file_prefix: String,
        /// Global variable prefix.
        variable_prefix: String,
    },
}

impl PayloadConvention {
    /// Data script file name for `chapter`.
    #[must_use]
    pub fn data_file(&self, chapter: &ChapterDescriptor) -> String {
        match self {
            Self::Ordinal { file_prefix, .. } => {
                format!("{file_prefix}-{:02}.js", chapter.ordinal)
            }
            Self::Named { file_prefix, .. } => format!("{file_prefix}-{}.js", chapter.slug),
        }
    }

    /// Global variable name, or `None` when a `named` convention meets a
    /// chapter without a `variable`.
    #[must_use]
    pub fn variable(&self, chapter: &ChapterDescriptor) -> Option<String> {
        match self {
            Self::Ordinal {
                variable_prefix, ..
            } => Some(format!("{variable_prefix}{:02}", chapter.ordinal)),
            Self::Named {
                variable_prefix, ..
            } => chapter
                .variable
                .as_ref()
                .map(|suffix| format!("{variable_prefix}{suffix}")),
        }
    }

    /// Returns `true` if chapters must carry a `variable`.
    #[must_use]
    pub const fn requires_variable(&self) -> bool {
        matches!(self, Self::Named { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordinal() -> PayloadConvention {
        PayloadConvention::Ordinal {
            file_prefix: "quiz".to_string(),
            variable_prefix: "htmlQuizData_".to_string(),
        }
    }

    fn named() -> PayloadConvention {
        PayloadConvention::Named {
            file_prefix: "deep".to_string(),
            variable_prefix: "quizData_".to_string(),
        }
    }

    #[test]
    fn test_ordinal_slug_quiz_name() {
        let chapter = ChapterDescriptor::new(7, "forms-advanced", "表单进阶");
        assert_eq!(
            NamingConvention::OrdinalSlugQuiz.file_name(&chapter),
            "07-forms-advanced-quiz.html"
        );
    }

    #[test]
    fn test_ordinal_not_truncated() {
        let chapter = ChapterDescriptor::new(36, "future", "未来趋势");
        assert_eq!(
            NamingConvention::OrdinalSlugQuiz.file_name(&chapter),
            "36-future-quiz.html"
        );
    }

    #[test]
    fn test_slug_name() {
        let chapter = ChapterDescriptor::new(1, "14-01-execution-context", "执行上下文");
        assert_eq!(
            NamingConvention::Slug.file_name(&chapter),
            "14-01-execution-context.html"
        );
    }

    #[test]
    fn test_ordinal_payload() {
        let chapter = ChapterDescriptor::new(6, "forms-basic", "表单基础");
        assert_eq!(ordinal().data_file(&chapter), "quiz-06.js");
        assert_eq!(
            ordinal().variable(&chapter).as_deref(),
            Some("htmlQuizData_06")
        );
        assert!(!ordinal().requires_variable());
    }

    #[test]
    fn test_named_payload() {
        let chapter = ChapterDescriptor::new(1, "14-01-execution-context", "执行上下文")
            .with_variable("Deep1401ExecutionContext");
        assert_eq!(
            named().data_file(&chapter),
            "deep-14-01-execution-context.js"
        );
        assert_eq!(
            named().variable(&chapter).as_deref(),
            Some("quizData_Deep1401ExecutionContext")
        );
        assert!(named().requires_variable());
    }

    #[test]
    fn test_named_payload_without_variable() {
        let chapter = ChapterDescriptor::new(1, "14-01-execution-context", "执行上下文");
        assert!(named().variable(&chapter).is_none());
    }

    #[test]
    fn test_payload_deserialize() {
        let convention: PayloadConvention =
            serde_yaml::from_str("kind: named\nfile_prefix: basics\nvariable_prefix: quizData_\n")
                .unwrap();
        assert!(matches!(convention, PayloadConvention::Named { .. }));
    }
}
