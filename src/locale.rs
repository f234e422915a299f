//! Locale service: language existence, namespace tables and case transforms.
//!
//! The core never owns locale databases. It talks to a [`LocaleService`]
//! supplied by the host; [`StaticLocale`] is an in-memory implementation
//! for hosts with fixed locale data and for tests.

use std::collections::{
    BTreeMap,
    HashMap,
    HashSet,
};
use std::fmt;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::title::{
    NamespaceTable,
    NamespaceTableData,
};

/// Languages whose `i` upper-cases to a dotted capital `İ`.
const TURKIC_LANGUAGES: &[&str] = &["tr", "az", "crh", "kaa", "tt"];

/// Site language codes accepted by [`StaticLocale::with_common_languages`].
const COMMON_LANGUAGE_CODES: &[&str] = &[
    "af", "ar", "az", "be", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "de-at", "de-ch",
    "el", "en", "en-ca", "en-gb", "eo", "es", "es-419", "et", "eu", "fa", "fi", "fr", "ga", "gl",
    "he", "hi", "hr", "hu", "hy", "id", "is", "it", "ja", "ka", "kk", "ko", "lt", "lv", "mk",
    "ms", "mt", "nb", "nl", "nn", "pl", "pt", "pt-br", "ro", "ru", "sk", "sl", "sq", "sr", "sv",
    "th", "tr", "uk", "ur", "vi", "zh", "zh-hans", "zh-hant", "zh-hk", "zh-tw",
];

/// Locale operations the core consumes.
///
/// The case transforms default to Unicode rules with Turkic dotted-i
/// handling; implementations backed by real locale data override them.
pub trait LocaleService: Send + Sync + fmt::Debug {
    /// Whether `code` names a language this site knows.
    fn language_exists(&self, code: &str) -> bool;

    /// Namespace names and aliases for `code`.
    ///
    /// `None` when the language is unknown or has no table of its own.
    fn namespace_alias_table(&self, code: &str) -> Option<NamespaceTable>;

    fn upper_case(&self, text: &str, code: &str) -> String {
        upper_case(text, code)
    }

    /// First character of `text`, or an empty string.
    fn first_char(&self, text: &str, _code: &str) -> String {
        text.chars().next().map(String::from).unwrap_or_default()
    }

    fn upper_case_first(&self, text: &str, code: &str) -> String {
        let mut chars = text.chars();
        chars.next().map_or_else(String::new, |first| {
            let mut result = upper_case_char(first, code);
            result.push_str(chars.as_str());
            result
        })
    }
}

fn is_turkic(code: &str) -> bool {
    TURKIC_LANGUAGES.contains(&code)
}

fn upper_case_char(character: char, code: &str) -> String {
    if character == 'i' && is_turkic(code) {
        return "İ".to_string();
    }
    character.to_uppercase().collect()
}

/// Upper-cases `text` with the rules of language `code`.
#[must_use]
pub fn upper_case(text: &str, code: &str) -> String {
    if is_turkic(code) {
        text.chars().map(|c| upper_case_char(c, code)).collect()
    } else {
        text.to_uppercase()
    }
}

#[derive(Error, Debug)]
pub enum LocaleDataError {
    #[error("Failed to read locale data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse locale data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialized locale data.
///
/// ```json
/// {
///   "languages": ["en", "de"],
///   "namespaces": { "de": { "names": { "Kategorie": 14 } } }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleData {
    pub languages: Vec<String>,
    /// Language code → namespace table. Codes listed here count as known.
    pub namespaces: BTreeMap<String, NamespaceTableData>,
}

/// In-memory [`LocaleService`].
#[derive(Debug, Clone, Default)]
pub struct StaticLocale {
    languages: HashSet<String>,
    tables: HashMap<String, NamespaceTable>,
}

impl StaticLocale {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A locale knowing the common site language codes, without namespace tables.
    #[must_use]
    pub fn with_common_languages() -> Self {
        Self::new().with_languages(COMMON_LANGUAGE_CODES.iter().copied())
    }

    #[must_use]
    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.languages.insert(code.into());
        self
    }

    #[must_use]
    pub fn with_languages<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Registers a namespace table, marking the language as known.
    #[must_use]
    pub fn with_namespace_table(mut self, code: impl Into<String>, table: NamespaceTable) -> Self {
        let code = code.into();
        self.languages.insert(code.clone());
        self.tables.insert(code, table);
        self
    }

    #[must_use]
    pub fn from_data(data: LocaleData) -> Self {
        let locale = Self::new().with_languages(data.languages);
        data.namespaces.into_iter().fold(locale, |locale, (code, table)| {
            locale.with_namespace_table(code, NamespaceTable::from_data(table))
        })
    }
}

impl LocaleService for StaticLocale {
    fn language_exists(&self, code: &str) -> bool {
        self.languages.contains(code)
    }

    fn namespace_alias_table(&self, code: &str) -> Option<NamespaceTable> {
        if !self.language_exists(code) {
            return None;
        }
        self.tables.get(code).cloned()
    }
}

/// Loads a [`StaticLocale`] from a JSON locale data file.
///
/// # Errors
/// - File read error
/// - JSON parse error
pub fn load_locale_data(path: &Path) -> Result<StaticLocale, LocaleDataError> {
    tracing::debug!("Loading locale data from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let data: LocaleData = serde_json::from_str(&content)?;

    tracing::debug!(
        languages = data.languages.len(),
        tables = data.namespaces.len(),
        "Locale data loaded"
    );
    Ok(StaticLocale::from_data(data))
}
