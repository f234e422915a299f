//! Translation workflow interface.
//!
//! The workflow engine (tracking which pages are translatable, their
//! per-language progress and display titles) is an external collaborator.
//! The core reads it through [`TranslationWorkflow`].

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::fmt;

use crate::title::{
    NamespaceId,
    Title,
};

/// A page known to the translation workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableUnit {
    /// The source page
    title: Title,
    /// Language code → display title override
    display_titles: BTreeMap<String, Option<String>>,
    /// Whether the page translates its title
    has_custom_titles: bool,
    /// Language code → completion percent
    progress: BTreeMap<String, u8>,
}

impl TranslatableUnit {
    #[must_use]
    pub fn new(title: Title) -> Self {
        Self {
            title,
            display_titles: BTreeMap::new(),
            has_custom_titles: false,
            progress: BTreeMap::new(),
        }
    }

    /// Sets the display title for `language`, enabling custom titles.
    #[must_use]
    pub fn with_display_title(
        mut self,
        language: impl Into<String>,
        display_title: impl Into<String>,
    ) -> Self {
        self.display_titles.insert(language.into(), Some(display_title.into()));
        self.has_custom_titles = true;
        self
    }

    #[must_use]
    pub fn with_custom_titles(mut self, enabled: bool) -> Self {
        self.has_custom_titles = enabled;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, language: impl Into<String>, percent: u8) -> Self {
        self.progress.insert(language.into(), percent.min(100));
        self
    }

    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    #[must_use]
    pub const fn has_custom_titles(&self) -> bool {
        self.has_custom_titles
    }

    #[must_use]
    pub const fn progress(&self) -> &BTreeMap<String, u8> {
        &self.progress
    }

    /// Whether the workflow actively tracks this page.
    #[must_use]
    pub fn is_tracked(&self) -> bool {
        !self.progress.is_empty()
    }

    /// Whether `language` is one of this page's translation targets.
    #[must_use]
    pub fn tracks_language(&self, language: &str) -> bool {
        self.progress.contains_key(language)
    }

    /// Display title override for `language`, only when titles are translated.
    #[must_use]
    pub fn display_title(&self, language: &str) -> Option<&str> {
        if !self.has_custom_titles {
            return None;
        }
        self.display_titles.get(language)?.as_deref()
    }
}

/// Read access to the translation workflow.
pub trait TranslationWorkflow: Send + Sync + fmt::Debug {
    /// Finds the unit `title` belongs to, either as its source page or as a
    /// language-suffixed variant of it.
    ///
    /// Untracked pages (no translation progress) yield `None`.
    fn find_translatable_unit(&self, title: &Title) -> Option<TranslatableUnit>;

    fn display_title_override(&self, unit: &TranslatableUnit, language: &str) -> Option<String> {
        unit.display_title(language).map(str::to_string)
    }
}

/// [`TranslationWorkflow`] over a fixed set of units.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkflow {
    /// (namespace, source name) → unit
    units: HashMap<(NamespaceId, String), TranslatableUnit>,
}

impl InMemoryWorkflow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unit(mut self, unit: TranslatableUnit) -> Self {
        self.insert(unit);
        self
    }

    pub fn insert(&mut self, unit: TranslatableUnit) {
        let key = (unit.title().namespace(), unit.title().local_name().to_string());
        self.units.insert(key, unit);
    }

    fn lookup(&self, namespace: NamespaceId, name: &str) -> Option<&TranslatableUnit> {
        self.units.get(&(namespace, name.to_string()))
    }
}

impl TranslationWorkflow for InMemoryWorkflow {
    fn find_translatable_unit(&self, title: &Title) -> Option<TranslatableUnit> {
        let namespace = title.namespace();

        let unit = self.lookup(namespace, title.local_name()).or_else(|| {
            let (base, language) = title.split_subpage()?;
            self.lookup(namespace, base).filter(|unit| unit.tracks_language(language))
        });

        match unit {
            Some(unit) if unit.is_tracked() => Some(unit.clone()),
            _ => {
                tracing::trace!(title = %title, "No tracked translatable unit");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[fixture]
    fn workflow() -> InMemoryWorkflow {
        InMemoryWorkflow::new()
            .with_unit(
                TranslatableUnit::new(Title::new(NamespaceId::MAIN, "Widget"))
                    .with_display_title("de", "Gerät")
                    .with_progress("de", 100)
                    .with_progress("fr", 40),
            )
            .with_unit(TranslatableUnit::new(Title::new(NamespaceId::MAIN, "Draft")))
    }

    #[rstest]
    #[case::source("Widget")]
    #[case::german_variant("Widget/de")]
    #[case::french_variant("Widget/fr")]
    fn finds_source_and_variants(workflow: InMemoryWorkflow, #[case] name: &str) {
        let unit = workflow.find_translatable_unit(&Title::new(NamespaceId::MAIN, name));

        assert_that!(unit.map(|u| u.title().local_name().to_string()), some(eq("Widget")));
    }

    #[rstest]
    #[case::untracked_language("Widget/nl", NamespaceId::MAIN)]
    #[case::other_namespace("Widget/de", NamespaceId::CATEGORY)]
    #[case::unknown_page("Gadget/de", NamespaceId::MAIN)]
    #[case::no_progress("Draft", NamespaceId::MAIN)]
    fn misses_yield_none(
        workflow: InMemoryWorkflow,
        #[case] name: &str,
        #[case] namespace: NamespaceId,
    ) {
        assert!(workflow.find_translatable_unit(&Title::new(namespace, name)).is_none());
    }

    #[rstest]
    fn display_title_requires_custom_titles() {
        let unit = TranslatableUnit::new(Title::new(NamespaceId::MAIN, "Widget"))
            .with_display_title("de", "Gerät");

        assert_that!(unit.display_title("de"), some(eq("Gerät")));
        assert_that!(unit.display_title("fr"), none());

        let disabled = unit.with_custom_titles(false);
        assert_that!(disabled.display_title("de"), none());
    }

    #[rstest]
    fn display_title_override_defaults_to_unit(workflow: InMemoryWorkflow) {
        let unit =
            workflow.find_translatable_unit(&Title::new(NamespaceId::MAIN, "Widget/de")).unwrap();

        assert_that!(workflow.display_title_override(&unit, "de"), some(eq("Gerät")));
        assert_that!(workflow.display_title_override(&unit, "fr"), none());
    }

    #[rstest]
    fn progress_is_clamped() {
        let unit =
            TranslatableUnit::new(Title::new(NamespaceId::MAIN, "Widget")).with_progress("de", 250);

        assert_eq!(unit.progress().get("de").copied(), Some(100));
    }
}
