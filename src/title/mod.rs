//! Titles and the language-sensitive title parser.

mod codec;
mod error;
pub mod namespace;
mod parser;

use std::fmt;
use std::hash::{
    Hash,
    Hasher,
};

pub use codec::{
    MAX_TITLE_BYTES,
    TitleCodec,
    TitleGrammar,
};
pub use error::MalformedTitleError;
pub use namespace::{
    NamespaceId,
    NamespaceTable,
    NamespaceTableData,
};
pub use parser::TitleParser;

/// A page title: a namespace plus the name within it.
///
/// Immutable once constructed, and only constructed by a [`TitleGrammar`],
/// so the local name is always normalized and valid. Two titles are the same page when namespace
/// and local name match; the prefix only records how the namespace is
/// spelled in the language the title was parsed with.
#[derive(Debug, Clone)]
pub struct Title {
    namespace: NamespaceId,
    local_name: String,
    prefix: String,
}

impl Title {
    /// Shorthand for a title whose local name is already in parsed form,
    /// spelled with the canonical (English) namespace prefix.
    ///
    /// Outside tests, titles only come from a [`TitleGrammar`].
    #[cfg(test)]
    #[must_use]
    pub(crate) fn new(namespace: NamespaceId, local_name: impl Into<String>) -> Self {
        let prefix = namespace.canonical_name().unwrap_or_default().to_string();
        Self { namespace, local_name: local_name.into(), prefix }
    }

    pub(crate) const fn with_prefix(
        namespace: NamespaceId,
        local_name: String,
        prefix: String,
    ) -> Self {
        Self { namespace, local_name, prefix }
    }

    #[must_use]
    pub const fn namespace(&self) -> NamespaceId {
        self.namespace
    }

    /// The name within the namespace, e.g. `Widget/fr` for `Category:Widget/fr`.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Prefix and local name joined by `:`, or the bare local name when the
    /// namespace has no prefix.
    #[must_use]
    pub fn full_text(&self) -> String {
        if self.prefix.is_empty() {
            self.local_name.clone()
        } else {
            format!("{}:{}", self.prefix, self.local_name)
        }
    }

    /// Splits `Base/Sub/fr` into `Base/Sub` and `fr`. `None` for top-level pages.
    #[must_use]
    pub fn split_subpage(&self) -> Option<(&str, &str)> {
        self.local_name.rsplit_once('/')
    }
}

impl PartialEq for Title {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.local_name == other.local_name
    }
}

impl Eq for Title {}

impl Hash for Title {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.local_name.hash(state);
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_text())
    }
}
