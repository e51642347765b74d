//! Chapter catalog parsing.
//!
//! A catalog (`catalogs/*.yaml`) is the ordered list of chapters to render
//! plus the page settings shared by every chapter: which template to use,
//! how output files are named and how each page finds its companion data
//! script. Catalogs are plain data; they are loaded once per run and passed
//! by reference to the generator, never mutated.

pub mod conventions;
pub mod validate;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CatalogError;
use crate::render::Template;

pub use conventions::{NamingConvention, PayloadConvention};
pub use validate::{CatalogIssue, CatalogValidation, Severity, validate_catalog};

/// Parsed chapter catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Catalog name, used in log lines and reports.
    pub name: String,

    /// Settings shared by every page in the catalog.
    pub page: PageSettings,

    /// Ordered chapter descriptors.
    #[serde(default)]
    pub chapters: Vec<ChapterDescriptor>,
}

/// Page-level settings shared by every chapter of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSettings {
    /// Suffix appended to each chapter title in `<title>`.
    pub subject: String,

    /// Subdirectory of the output root that receives the pages.
    #[serde(default)]
    pub output_subdir: Option<PathBuf>,

    /// How a chapter maps to its output file name.
    pub naming: NamingConvention,

    /// Template used unless the caller overrides it.
    #[serde(default)]
    pub template: Template,

    /// How a chapter maps to its data script and global variable.
    pub payload: PayloadConvention,

    /// Href prefix of the data scripts, relative to the page.
    pub data_dir: String,

    /// Href of the shared renderer script.
    pub renderer_script: String,

    /// Href of the shared stylesheet.
    #[serde(default)]
    pub stylesheet: Option<String>,

    /// Navigation link back to the index page.
    #[serde(default)]
    pub back_link: Option<BackLink>,

    /// Placeholder text of the chapter heading before the renderer runs.
    #[serde(default = "default_loading_text")]
    pub loading_title: String,

    /// Placeholder text of the chapter description before the renderer runs.
    #[serde(default = "default_loading_text")]
    pub loading_desc: String,
}

fn default_loading_text() -> String {
    "Loading...".to_string()
}

/// Back-navigation anchor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackLink {
    /// Link target.
    pub href: String,
    /// Link text.
    pub label: String,
}

/// One quiz chapter to render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChapterDescriptor {
    /// Display number, zero-padded to two digits in file and variable names.
    pub ordinal: u32,

    /// Lowercase hyphenated identifier used in output file names.
    pub slug: String,

    /// Display title, inserted verbatim.
    pub title: String,

    /// Suffix of the global data variable for `named` payload conventions.
    #[serde(default)]
    pub variable: Option<String>,

    /// Colour theme for the themed template.
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl ChapterDescriptor {
    /// Creates a descriptor with no variable or theme.
    #[must_use]
    pub fn new(ordinal: u32, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            ordinal,
            slug: slug.into(),
            title: title.into(),
            variable: None,
            theme: None,
        }
    }

    /// Sets the payload variable suffix.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = Some(variable.into());
        self
    }

    /// Sets the colour theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Ordinal zero-padded to two digits.
    #[must_use]
    pub fn padded_ordinal(&self) -> String {
        format!("{:02}", self.ordinal)
    }

    /// `NN-slug`, used to identify the chapter in logs and reports.
    #[must_use]
    pub fn identity(&self) -> String {
        format!("{:02}-{}", self.ordinal, self.slug)
    }
}

/// Per-chapter colour theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    /// Primary accent colour.
    pub primary: String,
    /// Light variant of the accent colour.
    pub light: String,
    /// CSS background gradient.
    pub gradient: String,
}

/// Catalogs compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Builtin {
    /// HTML chapter quizzes (`NN-slug-quiz.html`).
    #[default]
    Html,
    /// JavaScript deep-principles pages (`deep/<slug>.html`).
    Deep,
    /// JavaScript basics pages with colour themes (`basics/<slug>.html`).
    Basics,
}

impl Builtin {
    /// All built-in catalogs.
    pub const ALL: [Self; 3] = [Self::Html, Self::Deep, Self::Basics];

    /// Catalog name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Deep => "deep",
            Self::Basics => "basics",
        }
    }

    /// Raw YAML source of the catalog.
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::Html => include_str!("../../catalogs/html.yaml"),
            Self::Deep => include_str!("../../catalogs/deep.yaml"),
            Self::Basics => include_str!("../../catalogs/basics.yaml"),
        }
    }

    /// Parses the compiled-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded YAML is malformed.
    pub fn load(self) -> Result<Catalog, CatalogError> {
        parse_catalog(self.name(), self.source())
    }
}

/// Parse a catalog from YAML text.
///
/// `name` identifies the source in error messages.
///
/// # Errors
///
/// Returns `CatalogError::Parse` for malformed YAML and
/// `CatalogError::Empty` if the catalog lists no chapters.
pub fn parse_catalog(name: &str, content: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_yaml::from_str(content).map_err(|source| CatalogError::Parse {
        name: name.to_string(),
        source,
    })?;

    if catalog.chapters.is_empty() {
        return Err(CatalogError::Empty {
            name: name.to_string(),
        });
    }

    Ok(catalog)
}

/// Read and parse a catalog file.
///
/// # Errors
///
/// Returns `CatalogError::Read` if the file cannot be read, otherwise the
/// errors of [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&path.display().to_string(), &content)
}

/// Resolve the catalog for a command: an explicit file wins over a built-in.
///
/// # Errors
///
/// Returns `CatalogError` if the catalog cannot be loaded.
pub fn resolve(file: Option<&Path>, builtin: Builtin) -> Result<Catalog, CatalogError> {
    match file {
        Some(path) => load_catalog(path),
        None => builtin.load(),
    }
}
