//! Title grammar over one namespace table.

use std::fmt;
use std::sync::Arc;

use super::{
    MalformedTitleError,
    NamespaceId,
    NamespaceTable,
    Title,
};
use crate::locale::LocaleService;

/// Longest accepted local name, in bytes.
pub const MAX_TITLE_BYTES: usize = 255;

/// Characters that can never appear in a title.
const ILLEGAL_CHARACTERS: &[char] = &['#', '<', '>', '[', ']', '|', '{', '}'];

/// Turns raw strings into [`Title`]s.
pub trait TitleGrammar: Send + Sync + fmt::Debug {
    /// Parses `raw`, placing prefix-less names in `default_namespace`.
    ///
    /// Case rules (capital links) follow `language`.
    ///
    /// # Errors
    /// Returns [`MalformedTitleError`] when `raw` is not a valid title.
    fn parse(
        &self,
        raw: &str,
        language: &str,
        default_namespace: NamespaceId,
    ) -> Result<Title, MalformedTitleError>;

    /// How `namespace` is written as a prefix, without the trailing `:`.
    fn namespace_name(&self, namespace: NamespaceId) -> Option<&str> {
        namespace.canonical_name()
    }
}

/// Title grammar bound to one namespace table.
pub struct TitleCodec {
    table: NamespaceTable,
    capital_links: bool,
    locale: Arc<dyn LocaleService>,
}

impl TitleCodec {
    #[must_use]
    pub fn new(table: NamespaceTable, capital_links: bool, locale: Arc<dyn LocaleService>) -> Self {
        Self { table, capital_links, locale }
    }

    /// The language-neutral grammar: canonical namespace names only.
    #[must_use]
    pub fn neutral(capital_links: bool, locale: Arc<dyn LocaleService>) -> Self {
        Self::new(NamespaceTable::canonical(), capital_links, locale)
    }

    fn validate(name: &str) -> Result<(), MalformedTitleError> {
        if name.starts_with(':') {
            return Err(MalformedTitleError::LeadingColon { title: name.to_string() });
        }

        if let Some(character) =
            name.chars().find(|c| ILLEGAL_CHARACTERS.contains(c) || c.is_control())
        {
            return Err(MalformedTitleError::IllegalCharacter { title: name.to_string(), character });
        }

        if name.split('/').any(|segment| segment == "." || segment == "..") {
            return Err(MalformedTitleError::RelativePath { title: name.to_string() });
        }

        if name.len() > MAX_TITLE_BYTES {
            return Err(MalformedTitleError::TooLong {
                length: name.len(),
                limit: MAX_TITLE_BYTES,
            });
        }

        Ok(())
    }
}

/// `_` → space, whitespace runs collapsed, trimmed.
fn normalize(raw: &str) -> String {
    raw.replace('_', " ").split_whitespace().collect::<Vec<_>>().join(" ")
}

impl TitleGrammar for TitleCodec {
    fn parse(
        &self,
        raw: &str,
        language: &str,
        default_namespace: NamespaceId,
    ) -> Result<Title, MalformedTitleError> {
        let text = normalize(raw);
        if text.is_empty() {
            return Err(MalformedTitleError::Empty);
        }

        // A leading colon only cancels the default namespace: ":Foo" is a main
        // page, ":Category:Foo" is still the category.
        let (body, fallback) = match text.strip_prefix(':') {
            Some(rest) => (rest.trim_start(), NamespaceId::MAIN),
            None => (text.as_str(), default_namespace),
        };

        let (namespace, name) = if let Some((prefix, rest)) = body.split_once(':')
            && let Some(namespace) = self.table.resolve(prefix)
        {
            (namespace, rest.trim_start())
        } else {
            (fallback, body)
        };

        if name.is_empty() {
            return if namespace == NamespaceId::MAIN {
                Err(MalformedTitleError::Empty)
            } else {
                Err(MalformedTitleError::EmptyName { title: text.clone() })
            };
        }

        Self::validate(name)?;

        let local_name = if self.capital_links {
            self.locale.upper_case_first(name, language)
        } else {
            name.to_string()
        };
        let prefix = self.namespace_name(namespace).unwrap_or_default().to_string();

        Ok(Title::with_prefix(namespace, local_name, prefix))
    }

    fn namespace_name(&self, namespace: NamespaceId) -> Option<&str> {
        self.table.name(namespace).or_else(|| namespace.canonical_name())
    }
}

impl fmt::Debug for TitleCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleCodec")
            .field("capital_links", &self.capital_links)
            .field("table", &"<NamespaceTable>")
            .finish_non_exhaustive()
    }
}
