//! translated-title-collation
//!
//! Sorts and buckets category members by their translated page titles
//! instead of their raw, language-suffixed page paths.

pub mod collation;
pub mod config;
pub mod language;
pub mod locale;
pub mod logging;
pub mod resolver;
pub mod title;
pub mod tracking;
pub mod translation;

mod test_utils;

pub use collation::{
    Collation,
    CollationRegistry,
    SortKey,
    TranslatedTitleCollation,
};
pub use locale::{
    LocaleService,
    StaticLocale,
};
pub use resolver::{
    DisplayTitleError,
    TitleResolver,
};
pub use title::{
    MalformedTitleError,
    NamespaceId,
    Title,
};
pub use translation::{
    InMemoryWorkflow,
    TranslatableUnit,
    TranslationWorkflow,
};
