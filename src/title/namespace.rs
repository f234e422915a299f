//! Namespace ids and per-language namespace alias tables.

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Identifies a category of content. `0` is the main (content) namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceId(pub i32);

impl NamespaceId {
    pub const MEDIA: Self = Self(-2);
    pub const SPECIAL: Self = Self(-1);
    pub const MAIN: Self = Self(0);
    pub const TALK: Self = Self(1);
    pub const USER: Self = Self(2);
    pub const USER_TALK: Self = Self(3);
    pub const PROJECT: Self = Self(4);
    pub const PROJECT_TALK: Self = Self(5);
    pub const FILE: Self = Self(6);
    pub const FILE_TALK: Self = Self(7);
    pub const TEMPLATE: Self = Self(10);
    pub const TEMPLATE_TALK: Self = Self(11);
    pub const HELP: Self = Self(12);
    pub const HELP_TALK: Self = Self(13);
    pub const CATEGORY: Self = Self(14);
    pub const CATEGORY_TALK: Self = Self(15);
    /// Pages holding the per-unit translations of translatable pages.
    pub const TRANSLATIONS: Self = Self(1198);
    pub const TRANSLATIONS_TALK: Self = Self(1199);

    /// English canonical name, valid as a prefix in every language.
    ///
    /// The main namespace has an empty name.
    #[must_use]
    pub fn canonical_name(self) -> Option<&'static str> {
        CANONICAL_NAMES.iter().find(|(id, _)| *id == self).map(|(_, name)| *name)
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const CANONICAL_NAMES: &[(NamespaceId, &str)] = &[
    (NamespaceId::MEDIA, "Media"),
    (NamespaceId::SPECIAL, "Special"),
    (NamespaceId::MAIN, ""),
    (NamespaceId::TALK, "Talk"),
    (NamespaceId::USER, "User"),
    (NamespaceId::USER_TALK, "User talk"),
    (NamespaceId::PROJECT, "Project"),
    (NamespaceId::PROJECT_TALK, "Project talk"),
    (NamespaceId::FILE, "File"),
    (NamespaceId::FILE_TALK, "File talk"),
    (NamespaceId::TEMPLATE, "Template"),
    (NamespaceId::TEMPLATE_TALK, "Template talk"),
    (NamespaceId::HELP, "Help"),
    (NamespaceId::HELP_TALK, "Help talk"),
    (NamespaceId::CATEGORY, "Category"),
    (NamespaceId::CATEGORY_TALK, "Category talk"),
    (NamespaceId::TRANSLATIONS, "Translations"),
    (NamespaceId::TRANSLATIONS_TALK, "Translations talk"),
];

/// Folds a namespace prefix for case-insensitive lookup.
///
/// `Category_talk`, ` category  talk ` and `CATEGORY TALK` all fold to `category talk`.
pub(crate) fn fold_prefix(prefix: &str) -> String {
    prefix.replace('_', " ").split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Serialized form of a language's namespace table.
///
/// ```json
/// { "names": { "Kategorie": 14 }, "aliases": { "Bild": 6 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceTableData {
    /// Localized display name → namespace. Also accepted as a prefix.
    pub names: BTreeMap<String, NamespaceId>,
    /// Additional accepted prefixes that are never displayed.
    pub aliases: BTreeMap<String, NamespaceId>,
}

/// Namespace names and accepted prefixes for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTable {
    /// Display name per namespace.
    names: BTreeMap<NamespaceId, String>,
    /// Folded prefix → namespace.
    lookup: HashMap<String, NamespaceId>,
}

impl NamespaceTable {
    /// The language-neutral table: English canonical names only.
    #[must_use]
    pub fn canonical() -> Self {
        let mut names = BTreeMap::new();
        let mut lookup = HashMap::new();
        for (id, name) in CANONICAL_NAMES {
            names.insert(*id, (*name).to_string());
            if !name.is_empty() {
                lookup.insert(fold_prefix(name), *id);
            }
        }
        Self { names, lookup }
    }

    /// Builds a localized table on top of the canonical one.
    ///
    /// Localized names replace the canonical display names; the canonical
    /// names stay accepted as prefixes.
    #[must_use]
    pub fn localized<N, A>(names: N, aliases: A) -> Self
    where
        N: IntoIterator<Item = (String, NamespaceId)>,
        A: IntoIterator<Item = (String, NamespaceId)>,
    {
        let mut table = Self::canonical();
        for (name, id) in names {
            table.lookup.insert(fold_prefix(&name), id);
            table.names.insert(id, name);
        }
        for (alias, id) in aliases {
            table.lookup.insert(fold_prefix(&alias), id);
        }
        table
    }

    #[must_use]
    pub fn from_data(data: NamespaceTableData) -> Self {
        Self::localized(data.names, data.aliases)
    }

    /// Resolves a prefix (without the trailing `:`) to a namespace.
    #[must_use]
    pub fn resolve(&self, prefix: &str) -> Option<NamespaceId> {
        let folded = fold_prefix(prefix);
        if folded.is_empty() {
            return None;
        }
        self.lookup.get(&folded).copied()
    }

    /// Display name of a namespace in this table's language.
    #[must_use]
    pub fn name(&self, namespace: NamespaceId) -> Option<&str> {
        self.names.get(&namespace).map(String::as_str)
    }
}

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::canonical()
    }
}
