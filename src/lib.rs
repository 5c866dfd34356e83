//! cvgen - single-page CV site generator
//!
//! Reads a YAML resume document and an optional YAML theme document,
//! substitutes both into an HTML template, and writes a self-contained page.
//! The pipeline is a linear fold over one template string: theme variables,
//! then SEO tokens, then the embedded CV data.
//!
//! # Example
//!
//! ```rust
//! use cvgen::render;
//!
//! let template = "<title>{{ PAGE_TITLE }}</title>";
//! let cv = serde_yaml::from_str("basics: {name: Ada, label: Engineer}").unwrap();
//! let html = render(template, &cv, None);
//! assert_eq!(html, "<title>Ada - Engineer</title>");
//! ```

pub mod data;
pub mod seo;
pub mod theme;

pub use data::embed_data;
pub use seo::embed_seo;
pub use theme::Theme;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;

/// Errors that can occur during a build
///
/// Every variant is fatal; the CLI prints it and exits non-zero. A missing
/// theme file is not an error and never reaches this type.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A required input file does not exist
    #[error("{}: file not found", path.display())]
    NotFound { path: PathBuf },

    /// An input file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// An input document is not valid YAML
    #[error("failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_yaml::Error },

    /// The output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// File locations for one build
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Resume document path
    pub cv: PathBuf,
    /// HTML template path
    pub template: PathBuf,
    /// Theme document path; theming is skipped when the file is absent
    pub theme: PathBuf,
    /// Destination path, overwritten on success
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            cv: PathBuf::from("cv.yaml"),
            template: PathBuf::from("template.html"),
            theme: PathBuf::from("theme.yaml"),
            output: PathBuf::from("index.html"),
        }
    }
}

impl BuildConfig {
    /// Create a configuration with the default file locations
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resume document path
    pub fn with_cv(mut self, path: impl Into<PathBuf>) -> Self {
        self.cv = path.into();
        self
    }

    /// Set the template path
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = path.into();
        self
    }

    /// Set the theme document path
    pub fn with_theme(mut self, path: impl Into<PathBuf>) -> Self {
        self.theme = path.into();
        self
    }

    /// Set the output path
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }
}

/// Load and parse a YAML document
pub fn load_yaml(path: &Path) -> Result<Value, BuildError> {
    let content = read_file(path)?;
    serde_yaml::from_str(&content).map_err(|source| BuildError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the HTML template text
pub fn load_template(path: &Path) -> Result<String, BuildError> {
    read_file(path)
}

/// Load and parse a theme document
pub fn load_theme(path: &Path) -> Result<Theme, BuildError> {
    let content = read_file(path)?;
    Theme::from_str(&content).map_err(|source| BuildError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the generated page, overwriting any existing file
pub fn write_output(path: &Path, contents: &str) -> Result<(), BuildError> {
    fs::write(path, contents).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => BuildError::NotFound {
            path: path.to_path_buf(),
        },
        _ => BuildError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Run the substitution pipeline over an in-memory template.
///
/// Stages run in document order: theme variables (when a theme is supplied),
/// SEO tokens, then the embedded CV data. Each stage consumes the template
/// text and returns the rewritten version; nothing is written to disk.
pub fn render(template: &str, cv: &Value, theme: Option<&Theme>) -> String {
    let template = match theme {
        Some(theme) => theme.embed(template),
        None => template.to_string(),
    };
    let template = embed_seo(&template, cv);
    embed_data(&template, cv)
}

/// Run a complete build from files on disk.
///
/// Loads the resume and template, applies the theme when its file exists,
/// renders, and writes the output. The output file is only touched after
/// every substitution has succeeded in memory.
pub fn build(config: &BuildConfig) -> Result<(), BuildError> {
    let cv = load_yaml(&config.cv)?;
    let template = load_template(&config.template)?;
    let theme = if config.theme.exists() {
        Some(load_theme(&config.theme)?)
    } else {
        None
    };
    let html = render(&template, &cv, theme.as_ref());
    write_output(&config.output, &html)
}
