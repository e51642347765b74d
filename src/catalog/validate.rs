//! Catalog conformance checks.
//!
//! The generator never calls this; a catalog with duplicate ordinals or
//! slugs renders without complaint and the later page silently overwrites
//! the earlier one. `quizgen validate` and the test suite use it to catch
//! such catalogs before they reach the generator.

use std::collections::HashMap;

use super::{Catalog, ChapterDescriptor};
use crate::render::Template;

/// Severity of a catalog issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The catalog would produce wrong or colliding output.
    Error,
    /// The catalog renders, but some pages will fail at render time.
    Warning,
}

/// A single problem found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    /// Identity of the offending chapter (`NN-slug`).
    pub chapter: String,
    /// Field that failed validation.
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{prefix}: {} ({}.{})", self.message, self.chapter, self.field)
    }
}

/// Result of catalog validation.
#[derive(Debug, Default)]
pub struct CatalogValidation {
    /// Issues in catalog order.
    pub issues: Vec<CatalogIssue>,
}

impl CatalogValidation {
    /// Returns `true` if there are no issues at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns `true` if any issue is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Number of error-level issues.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    fn push(
        &mut self,
        chapter: &ChapterDescriptor,
        field: &'static str,
        severity: Severity,
        message: String,
    ) {
        self.issues.push(CatalogIssue {
            chapter: chapter.identity(),
            field,
            message,
            severity,
        });
    }
}

/// Validate a catalog for uniqueness and completeness.
///
/// `template` is the template the catalog will be rendered with; it decides
/// whether a missing theme matters.
#[must_use]
pub fn validate_catalog(catalog: &Catalog, template: Template) -> CatalogValidation {
    let mut validation = CatalogValidation::default();
    let mut ordinals: HashMap<u32, String> = HashMap::new();
    let mut slugs: HashMap<&str, String> = HashMap::new();
    let mut outputs: HashMap<String, String> = HashMap::new();

    for chapter in &catalog.chapters {
        let identity = chapter.identity();

        if chapter.ordinal == 0 {
            validation.push(
                chapter,
                "ordinal",
                Severity::Error,
                "ordinal must be positive".to_string(),
            );
        }

        if let Some(first) = ordinals.get(&chapter.ordinal) {
            validation.push(
                chapter,
                "ordinal",
                Severity::Error,
                format!("duplicate ordinal {}, first seen in {first}", chapter.ordinal),
            );
        } else {
            ordinals.insert(chapter.ordinal, identity.clone());
        }

        if chapter.slug.is_empty() {
            validation.push(chapter, "slug", Severity::Error, "slug is empty".to_string());
        } else if !is_path_segment(&chapter.slug) {
            validation.push(
                chapter,
                "slug",
                Severity::Error,
                format!("slug \"{}\" is not a single path segment", chapter.slug),
            );
        }

        if let Some(first) = slugs.get(chapter.slug.as_str()) {
            validation.push(
                chapter,
                "slug",
                Severity::Error,
                format!("duplicate slug \"{}\", first seen in {first}", chapter.slug),
            );
        } else {
            slugs.insert(&chapter.slug, identity.clone());
        }

        let file_name = catalog.page.naming.file_name(chapter);
        if let Some(first) = outputs.get(&file_name) {
            validation.push(
                chapter,
                "slug",
                Severity::Error,
                format!("output file {file_name} collides with {first}"),
            );
        } else {
            outputs.insert(file_name, identity.clone());
        }

        if chapter.title.trim().is_empty() {
            validation.push(chapter, "title", Severity::Error, "title is empty".to_string());
        }

        if catalog.page.payload.requires_variable() && chapter.variable.is_none() {
            validation.push(
                chapter,
                "variable",
                Severity::Warning,
                "payload convention is `named` but no variable is set".to_string(),
            );
        }

        if template == Template::Themed && chapter.theme.is_none() {
            validation.push(
                chapter,
                "theme",
                Severity::Warning,
                "themed template selected but no theme is set".to_string(),
            );
        }
    }

    validation
}

/// A slug must be usable as a file name component without escaping.
fn is_path_segment(slug: &str) -> bool {
    slug != "."
        && slug != ".."
        && !slug
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_whitespace() || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Builtin, NamingConvention, PageSettings, PayloadConvention, Theme};

    fn catalog(chapters: Vec<ChapterDescriptor>) -> Catalog {
        Catalog {
            name: "test".to_string(),
            page: PageSettings {
                subject: "Test".to_string(),
                output_subdir: None,
                naming: NamingConvention::OrdinalSlugQuiz,
                template: Template::Full,
                payload: PayloadConvention::Ordinal {
                    file_prefix: "quiz".to_string(),
                    variable_prefix: "quizData_".to_string(),
                },
                data_dir: "../data".to_string(),
                renderer_script: "../js/quiz-renderer.js".to_string(),
                stylesheet: None,
                back_link: None,
                loading_title: "Loading...".to_string(),
                loading_desc: "Loading...".to_string(),
            },
            chapters,
        }
    }

    #[test]
    fn test_builtin_catalogs_are_clean() {
        for builtin in Builtin::ALL {
            let catalog = builtin.load().unwrap();
            let validation = validate_catalog(&catalog, catalog.page.template);
            assert!(
                validation.is_clean(),
                "{} has issues: {:?}",
                builtin.name(),
                validation.issues
            );
        }
    }

    #[test]
    fn test_duplicate_ordinal_detected() {
        let validation = validate_catalog(
            &catalog(vec![
                ChapterDescriptor::new(7, "forms", "Forms"),
                ChapterDescriptor::new(7, "media", "Media"),
            ]),
            Template::Full,
        );
        assert!(validation.has_errors());
        assert_eq!(validation.error_count(), 1);
        assert_eq!(validation.issues[0].field, "ordinal");
        assert_eq!(validation.issues[0].chapter, "07-media");
        assert!(validation.issues[0].message.contains("07-forms"));
    }

    #[test]
    fn test_duplicate_slug_detected() {
        let validation = validate_catalog(
            &catalog(vec![
                ChapterDescriptor::new(1, "forms", "Forms"),
                ChapterDescriptor::new(2, "forms", "Forms again"),
            ]),
            Template::Full,
        );
        assert_eq!(validation.error_count(), 1);
        assert_eq!(validation.issues[0].field, "slug");
        assert!(validation.issues[0].message.contains("duplicate slug"));
    }

    #[test]
    fn test_output_collision_detected() {
        let mut slug_named = catalog(vec![
            ChapterDescriptor::new(1, "forms", "Forms"),
            ChapterDescriptor::new(1, "forms", "Forms"),
        ]);
        slug_named.page.naming = NamingConvention::Slug;
        let validation = validate_catalog(&slug_named, Template::Full);
        let fields: Vec<_> = validation.issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["ordinal", "slug", "slug"]);
        assert!(validation.issues[2].message.contains("forms.html"));
    }

    #[test]
    fn test_zero_ordinal_and_empty_fields() {
        let validation = validate_catalog(
            &catalog(vec![ChapterDescriptor::new(0, "", " ")]),
            Template::Full,
        );
        let fields: Vec<_> = validation.issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["ordinal", "slug", "title"]);
    }

    #[test]
    fn test_slug_must_be_path_segment() {
        for slug in ["a/b", "a\\b", "has space", "..", "."] {
            let validation = validate_catalog(
                &catalog(vec![ChapterDescriptor::new(1, slug, "T")]),
                Template::Full,
            );
            assert!(validation.has_errors(), "slug {slug:?} should be rejected");
        }
    }

    #[test]
    fn test_missing_variable_is_warning() {
        let mut named = catalog(vec![ChapterDescriptor::new(1, "scope", "Scope")]);
        named.page.payload = PayloadConvention::Named {
            file_prefix: "deep".to_string(),
            variable_prefix: "quizData_".to_string(),
        };
        let validation = validate_catalog(&named, Template::Full);
        assert!(!validation.is_clean());
        assert!(!validation.has_errors());
        assert_eq!(validation.issues[0].field, "variable");
    }

    #[test]
    fn test_missing_theme_only_matters_for_themed() {
        let plain = catalog(vec![ChapterDescriptor::new(1, "scope", "Scope")]);
        assert!(validate_catalog(&plain, Template::Full).is_clean());

        let validation = validate_catalog(&plain, Template::Themed);
        assert_eq!(validation.issues.len(), 1);
        assert_eq!(validation.issues[0].severity, Severity::Warning);

        let themed = catalog(vec![ChapterDescriptor::new(1, "scope", "Scope").with_theme(
            Theme {
                primary: "#000".to_string(),
                light: "#fff".to_string(),
                gradient: "none".to_string(),
            },
        )]);
        assert!(validate_catalog(&themed, Template::Themed).is_clean());
    }

    #[test]
    fn test_issue_display() {
        let issue = CatalogIssue {
            chapter: "07-forms".to_string(),
            field: "slug",
            message: "duplicate slug \"forms\"".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(
            issue.to_string(),
            "error: duplicate slug \"forms\" (07-forms.slug)"
        );
    }
}
