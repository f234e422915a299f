//! Per-language title parser cache.

use std::collections::HashMap;
use std::fmt;
use std::sync::{
    Arc,
    PoisonError,
    RwLock,
};

use super::{
    MalformedTitleError,
    NamespaceId,
    Title,
    TitleCodec,
    TitleGrammar,
};
use crate::locale::LocaleService;

/// Parses titles with the namespace table of the requested language.
///
/// One [`TitleCodec`] is built lazily per language code and kept for the
/// lifetime of the parser. Languages without a table of their own are
/// parsed by the neutral grammar, still with their own case rules.
pub struct TitleParser {
    locale: Arc<dyn LocaleService>,
    neutral: Arc<dyn TitleGrammar>,
    capital_links: bool,
    /// Language code → codec
    codecs: RwLock<HashMap<String, Arc<TitleCodec>>>,
}

impl TitleParser {
    #[must_use]
    pub fn new(
        locale: Arc<dyn LocaleService>,
        neutral: Arc<dyn TitleGrammar>,
        capital_links: bool,
    ) -> Self {
        Self { locale, neutral, capital_links, codecs: RwLock::new(HashMap::new()) }
    }

    /// Parses `raw` in `language`, defaulting to the main namespace.
    ///
    /// # Errors
    /// Returns [`MalformedTitleError`] when `raw` is not a valid title.
    pub fn parse_title(
        &self,
        raw: &str,
        language: &str,
        default_namespace: Option<NamespaceId>,
    ) -> Result<Title, MalformedTitleError> {
        let default_namespace = default_namespace.unwrap_or(NamespaceId::MAIN);

        match self.codec(language) {
            Some(codec) => codec.parse(raw, language, default_namespace),
            None => self.neutral.parse(raw, language, default_namespace),
        }
    }

    /// How `namespace` is written as a prefix in `language`.
    #[must_use]
    pub fn namespace_name(&self, namespace: NamespaceId, language: &str) -> Option<String> {
        match self.codec(language) {
            Some(codec) => codec.namespace_name(namespace).map(str::to_string),
            None => self.neutral.namespace_name(namespace).map(str::to_string),
        }
    }

    /// The cached codec for `language`, building it on first use.
    ///
    /// Concurrent first uses may each build a codec; the first one stored wins.
    fn codec(&self, language: &str) -> Option<Arc<TitleCodec>> {
        if let Some(codec) =
            self.codecs.read().unwrap_or_else(PoisonError::into_inner).get(language)
        {
            return Some(Arc::clone(codec));
        }

        let table = self.locale.namespace_alias_table(language)?;
        tracing::debug!(language, "Building title codec");
        let codec =
            Arc::new(TitleCodec::new(table, self.capital_links, Arc::clone(&self.locale)));

        let mut codecs = self.codecs.write().unwrap_or_else(PoisonError::into_inner);
        Some(Arc::clone(codecs.entry(language.to_string()).or_insert(codec)))
    }

    /// Number of languages with a cached codec.
    #[must_use]
    pub fn cached_languages(&self) -> usize {
        self.codecs.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl fmt::Debug for TitleParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleParser")
            .field("neutral", &self.neutral)
            .field("capital_links", &self.capital_links)
            .field("cached_languages", &self.cached_languages())
            .finish_non_exhaustive()
    }
}
