use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::collation::TRANSLATED_PAGE_TITLE;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "logging.filter")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollationSettings {
    /// Content language of the whole site.
    /// Used when a title carries no language suffix.
    pub site_language: String,

    /// Collation strategy used for category listings.
    pub category_collation: String,

    /// Upper-case the first letter of every title's local name.
    pub capital_links: bool,

    /// Reject translated display titles that drop the source page's
    /// namespace (pages outside the main namespace only).
    pub force_namespace: bool,

    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// `EnvFilter` directives, e.g. `"info,translated_title_collation=debug"`.
    pub filter: String,

    /// Log to a file in this directory instead of stdout.
    pub directory: Option<PathBuf>,

    pub file_name: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
            file_name: "title-collation.log".to_string(),
        }
    }
}

impl CollationSettings {
    /// # Errors
    /// - Required field is empty
    /// - Site language contains a path separator
    /// - Invalid log filter
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.site_language.is_empty() {
            errors.push(ValidationError::new(
                "siteLanguage",
                "The site language cannot be empty. Example: \"en\"",
            ));
        } else if self.site_language.contains('/') {
            errors.push(ValidationError::new(
                "siteLanguage",
                format!("Invalid language code '{}': must not contain '/'", self.site_language),
            ));
        }

        if self.category_collation.is_empty() {
            errors.push(ValidationError::new(
                "categoryCollation",
                format!("The collation name cannot be empty. Example: \"{TRANSLATED_PAGE_TITLE}\""),
            ));
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.filter) {
            errors.push(ValidationError::new(
                "logging.filter",
                format!("Invalid log filter '{}': {e}", self.logging.filter),
            ));
        }

        if self.logging.file_name.is_empty() {
            errors.push(ValidationError::new(
                "logging.fileName",
                "The file name cannot be empty. Example: \"title-collation.log\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for CollationSettings {
    fn default() -> Self {
        Self {
            site_language: "en".to_string(),
            category_collation: TRANSLATED_PAGE_TITLE.to_string(),
            capital_links: true,
            force_namespace: true,
            logging: LoggingSettings::default(),
        }
    }
}
