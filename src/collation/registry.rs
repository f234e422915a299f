use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use super::{
    Collation,
    TranslatedTitleCollation,
    UppercaseCollation,
};
use crate::config::CollationSettings;
use crate::resolver::TitleResolver;

/// Name of the collation sorting by translated page titles.
pub const TRANSLATED_PAGE_TITLE: &str = "translated-page-title";

/// Name of the plain upper-casing collation.
pub const UPPERCASE: &str = "uppercase";

pub type CollationFactory = fn(Arc<TitleResolver>) -> Box<dyn Collation>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollationError {
    #[error("Unknown collation '{name}'. Available: {}", .available.join(", "))]
    Unknown { name: String, available: Vec<String> },
}

/// Collation strategies by name.
#[derive(Debug, Clone, Default)]
pub struct CollationRegistry {
    factories: HashMap<String, CollationFactory>,
}

impl CollationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in collations.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TRANSLATED_PAGE_TITLE, |resolver| {
            Box::new(TranslatedTitleCollation::new(resolver))
        });
        registry.register(UPPERCASE, |resolver| Box::new(UppercaseCollation::new(resolver)));
        registry
    }

    /// Registers `factory` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, factory: CollationFactory) {
        let name = name.into();
        tracing::debug!(name = %name, "Registering collation");
        self.factories.insert(name, factory);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// # Errors
    /// Returns [`CollationError::Unknown`] when nothing is registered as `name`.
    pub fn create(
        &self,
        name: &str,
        resolver: Arc<TitleResolver>,
    ) -> Result<Box<dyn Collation>, CollationError> {
        let factory = self.factories.get(name).ok_or_else(|| CollationError::Unknown {
            name: name.to_string(),
            available: self.names(),
        })?;
        Ok(factory(resolver))
    }

    /// Creates the collation named by `settings.category_collation`.
    ///
    /// # Errors
    /// Returns [`CollationError::Unknown`] for an unregistered name.
    pub fn create_configured(
        &self,
        settings: &CollationSettings,
        resolver: Arc<TitleResolver>,
    ) -> Result<Box<dyn Collation>, CollationError> {
        tracing::info!(collation = %settings.category_collation, "Creating category collation");
        self.create(&settings.category_collation, resolver)
    }
}
