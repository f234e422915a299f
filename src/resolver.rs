//! Language detection, title parsing and translated-title resolution.

use std::sync::Arc;

use thiserror::Error;

use crate::config::CollationSettings;
use crate::language;
use crate::locale::LocaleService;
use crate::title::{
    MalformedTitleError,
    NamespaceId,
    Title,
    TitleCodec,
    TitleGrammar,
    TitleParser,
};
use crate::translation::{
    TranslatableUnit,
    TranslationWorkflow,
};

/// A category link: the category page and the text to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    pub target: Title,
    pub label: String,
}

/// A translated display title that cannot be saved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayTitleError {
    #[error(transparent)]
    Malformed(#[from] MalformedTitleError),

    /// The translation dropped or changed the source page's namespace
    #[error("Display title '{display_title}' must start with '{expected_prefix}'")]
    NamespaceMismatch { display_title: String, expected_prefix: String },
}

/// Resolves raw page paths to their translated titles.
///
/// Holds the collaborators (locale service, translation workflow) and the
/// per-language title parser cache. Share it behind an `Arc`; every method
/// takes `&self`.
#[derive(Debug)]
pub struct TitleResolver {
    site_language: String,
    force_namespace: bool,
    locale: Arc<dyn LocaleService>,
    workflow: Arc<dyn TranslationWorkflow>,
    parser: TitleParser,
}

impl TitleResolver {
    /// Creates a resolver using the neutral grammar for languages without
    /// a namespace table.
    #[must_use]
    pub fn new(
        settings: &CollationSettings,
        locale: Arc<dyn LocaleService>,
        workflow: Arc<dyn TranslationWorkflow>,
    ) -> Self {
        let neutral = Arc::new(TitleCodec::neutral(settings.capital_links, Arc::clone(&locale)));
        Self::with_neutral_grammar(settings, locale, workflow, neutral)
    }

    /// Creates a resolver with a host-supplied default title grammar.
    #[must_use]
    pub fn with_neutral_grammar(
        settings: &CollationSettings,
        locale: Arc<dyn LocaleService>,
        workflow: Arc<dyn TranslationWorkflow>,
        neutral: Arc<dyn TitleGrammar>,
    ) -> Self {
        let parser = TitleParser::new(Arc::clone(&locale), neutral, settings.capital_links);
        Self {
            site_language: settings.site_language.clone(),
            force_namespace: settings.force_namespace,
            locale,
            workflow,
            parser,
        }
    }

    #[must_use]
    pub fn site_language(&self) -> &str {
        &self.site_language
    }

    #[must_use]
    pub fn locale(&self) -> &dyn LocaleService {
        self.locale.as_ref()
    }

    /// Language code carried by the last `/` segment of `path`.
    #[must_use]
    pub fn detect_language(&self, path: &str) -> Option<String> {
        language::detect_language(path, self.locale.as_ref())
    }

    /// Language of a page, read from its local name (never its namespace prefix).
    #[must_use]
    pub fn page_language(&self, title: &Title) -> Option<String> {
        self.detect_language(title.local_name())
    }

    /// Language of the page being viewed, or the site language when there is
    /// no page (e.g. a script request).
    ///
    /// A page without a language suffix still yields `None`.
    #[must_use]
    pub fn page_language_or_site(&self, title: Option<&Title>) -> Option<String> {
        match title {
            Some(title) => self.page_language(title),
            None => Some(self.site_language.clone()),
        }
    }

    /// Parses `raw` with the namespace table of `language`.
    ///
    /// # Errors
    /// Returns [`MalformedTitleError`] when `raw` is not a valid title.
    pub fn parse_title(
        &self,
        raw: &str,
        language: &str,
        default_namespace: Option<NamespaceId>,
    ) -> Result<Title, MalformedTitleError> {
        self.parser.parse_title(raw, language, default_namespace)
    }

    /// The tracked translatable unit `title` belongs to, if any.
    #[must_use]
    pub fn translatable_unit(&self, title: &Title) -> Option<TranslatableUnit> {
        self.workflow.find_translatable_unit(title)
    }

    /// The translated form of `title`, or `title` itself.
    ///
    /// Never fails: a display title that does not parse is ignored.
    #[must_use]
    pub fn resolve_translated_title(&self, title: &Title) -> Title {
        let Some(language) = self.page_language(title) else {
            return title.clone();
        };
        let Some(unit) = self.translatable_unit(title) else {
            return title.clone();
        };
        let Some(display_title) = self.workflow.display_title_override(&unit, &language) else {
            return title.clone();
        };

        // A bare localized category name gets its namespace back.
        match self.parse_title(&display_title, &language, Some(NamespaceId::CATEGORY)) {
            Ok(translated) => translated,
            Err(err) => {
                tracing::debug!(
                    title = %title,
                    display_title = %display_title,
                    error = %err,
                    "Ignoring unparsable display title"
                );
                title.clone()
            }
        }
    }

    /// Checks a translated display title for the page `source` in `language`.
    ///
    /// A page outside the main namespace must keep its namespace in every
    /// translation, spelled any way `language` accepts. The check is skipped
    /// when `force_namespace` is off.
    ///
    /// # Errors
    /// - The display title does not parse
    /// - It parses into another namespace; the error carries the prefix
    ///   `language` expects (e.g. `Kategorie:`)
    pub fn check_display_title(
        &self,
        source: &Title,
        display_title: &str,
        language: &str,
    ) -> Result<(), DisplayTitleError> {
        if !self.force_namespace || source.namespace() == NamespaceId::MAIN {
            return Ok(());
        }

        let translated = self.parse_title(display_title, language, Some(NamespaceId::MAIN))?;
        if translated.namespace() == source.namespace() {
            return Ok(());
        }

        let name = self.parser.namespace_name(source.namespace(), language).unwrap_or_default();
        tracing::debug!(
            source = %source,
            display_title,
            language,
            found = %translated.namespace(),
            "Display title changes the namespace"
        );
        Err(DisplayTitleError::NamespaceMismatch {
            display_title: display_title.to_string(),
            expected_prefix: format!("{name}:"),
        })
    }

    /// Text to show for a link to `title`: its translated local name.
    #[must_use]
    pub fn link_label(&self, title: &Title) -> String {
        self.resolve_translated_title(title).local_name().to_string()
    }

    /// Builds the link for a category named `name` (prefix optional).
    ///
    /// `None` when `name` is not a valid title.
    #[must_use]
    pub fn category_link(&self, name: &str) -> Option<CategoryLink> {
        let target =
            match self.parse_title(name, &self.site_language, Some(NamespaceId::CATEGORY)) {
                Ok(target) => target,
                Err(err) => {
                    tracing::debug!(name, error = %err, "Skipping invalid category name");
                    return None;
                }
            };
        let label = self.link_label(&target);
        Some(CategoryLink { target, label })
    }
}
