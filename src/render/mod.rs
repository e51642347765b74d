//! Page rendering.
//!
//! Each [`Template`] is a fixed HTML body with `{{name}}` placeholders.
//! Substitution is a single left-to-right pass: a substituted value is
//! copied to the output as-is and never scanned again, so a chapter title
//! that happens to contain `{{title}}` renders literally. Values are not
//! HTML-escaped.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::catalog::{ChapterDescriptor, PageSettings};
use crate::error::RenderError;

/// Regex for matching `{{name}}` placeholders.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("valid regex"));

/// Every placeholder name a template may reference.
pub const KNOWN_PLACEHOLDERS: &[&str] = &[
    "title",
    "subject",
    "ordinal",
    "slug",
    "data_script",
    "renderer_script",
    "variable",
    "stylesheet_link",
    "back_anchor",
    "loading_title",
    "loading_desc",
    "primary_color",
    "primary_light",
    "bg_gradient",
];

/// The page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    /// Page shell and script references only.
    Minimal,
    /// Adds the back link and the `chapter-title`, `chapter-desc`,
    /// `quiz-container` and `nav-links` containers the renderer script
    /// attaches to.
    #[default]
    Full,
    /// The full page plus an inline style block with the chapter theme.
    Themed,
}

impl Template {
    /// Raw template text.
    #[must_use]
    pub const fn body(self) -> &'static str {
        match self {
            Self::Minimal => include_str!("templates/minimal.html"),
            Self::Full => include_str!("templates/full.html"),
            Self::Themed => include_str!("templates/themed.html"),
        }
    }

    /// Placeholder names referenced by this template, deduplicated, in
    /// order of first appearance.
    #[must_use]
    pub fn placeholders(self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for caps in PLACEHOLDER_RE.captures_iter(self.body()) {
            if let Some(name) = caps.get(1).map(|m| m.as_str()) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Render `chapter` with this template.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MissingField` if the template references a
    /// value the chapter and page settings do not supply.
    pub fn render(
        self,
        chapter: &ChapterDescriptor,
        page: &PageSettings,
    ) -> Result<String, RenderError> {
        let fields = Fields::for_chapter(chapter, page);
        substitute(self.body(), &fields)
    }
}

/// Render `chapter` with `template`. Same as [`Template::render`].
///
/// # Errors
///
/// See [`Template::render`].
pub fn render(
    chapter: &ChapterDescriptor,
    template: Template,
    page: &PageSettings,
) -> Result<String, RenderError> {
    template.render(chapter, page)
}

/// Placeholder values available for one chapter.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    chapter: String,
    values: BTreeMap<&'static str, String>,
}

impl Fields {
    /// Empty field set for a chapter identity.
    #[must_use]
    pub fn new(chapter: impl Into<String>) -> Self {
        Self {
            chapter: chapter.into(),
            values: BTreeMap::new(),
        }
    }

    /// Collects every value derivable from `chapter` and `page`.
    ///
    /// The stylesheet `<link>` and the back anchor are optional page
    /// elements and render as an empty string when not configured. A
    /// missing variable or theme leaves its placeholder unset.
    #[must_use]
    pub fn for_chapter(chapter: &ChapterDescriptor, page: &PageSettings) -> Self {
        let mut fields = Self::new(chapter.identity());
        fields.set("title", chapter.title.clone());
        fields.set("subject", page.subject.clone());
        fields.set("ordinal", chapter.padded_ordinal());
        fields.set("slug", chapter.slug.clone());
        fields.set(
            "data_script",
            format!(
                "{}/{}",
                page.data_dir.trim_end_matches('/'),
                page.payload.data_file(chapter)
            ),
        );
        fields.set("renderer_script", page.renderer_script.clone());
        fields.set("loading_title", page.loading_title.clone());
        fields.set("loading_desc", page.loading_desc.clone());

        if let Some(variable) = page.payload.variable(chapter) {
            fields.set("variable", variable);
        }
        fields.set(
            "stylesheet_link",
            page.stylesheet.as_ref().map_or_else(String::new, |href| {
                format!("\n    <link rel=\"stylesheet\" href=\"{href}\">")
            }),
        );
        fields.set(
            "back_anchor",
            page.back_link.as_ref().map_or_else(String::new, |back| {
                format!(
                    "\n    <a href=\"{}\" class=\"back-link\">{}</a>",
                    back.href, back.label
                )
            }),
        );
        if let Some(ref theme) = chapter.theme {
            fields.set("primary_color", theme.primary.clone());
            fields.set("primary_light", theme.light.clone());
            fields.set("bg_gradient", theme.gradient.clone());
        }
        fields
    }

    /// Sets a value.
    pub fn set(&mut self, name: &'static str, value: String) {
        self.values.insert(name, value);
    }

    /// Looks up a value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Replace every `{{name}}` in `template` with its value in one pass.
///
/// # Errors
///
/// Returns `RenderError::UnknownPlaceholder` for names outside
/// [`KNOWN_PLACEHOLDERS`] and `RenderError::MissingField` for known names
/// without a value.
pub fn substitute(template: &str, fields: &Fields) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len() + 256);
    let mut last = 0;

    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();

        if !KNOWN_PLACEHOLDERS.contains(&name) {
            return Err(RenderError::UnknownPlaceholder {
                name: name.to_string(),
            });
        }
        let value = fields.get(name).ok_or_else(|| RenderError::MissingField {
            field: name.to_string(),
            chapter: fields.chapter.clone(),
        })?;

        out.push_str(&template[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}

/// Returns `true` if `text` still contains a `{{name}}` placeholder.
#[must_use]
pub fn has_placeholders(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}
