//! Sort keys and first-letter buckets for category listings.

mod registry;

use std::fmt;
use std::sync::Arc;

pub use registry::{
    CollationError,
    CollationFactory,
    CollationRegistry,
    TRANSLATED_PAGE_TITLE,
    UPPERCASE,
};

use crate::locale::LocaleService;
use crate::resolver::TitleResolver;
use crate::title::NamespaceId;

/// Separates a user-supplied sort override from the real category path.
pub const SORT_OVERRIDE_SEPARATOR: char = '\n';

/// Marks input that an upstream collation has already processed.
const PROCESSED_MARKER: char = '\0';

/// A collation strategy. Both methods are total.
pub trait Collation: Send + Sync + fmt::Debug {
    fn sort_key(&self, input: &str) -> String;

    fn first_letter(&self, input: &str) -> String;
}

/// A sort key and the language whose rules produced it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    pub key: String,
    pub language: String,
}

/// Text to sort by, and the language to sort it with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SortBasis {
    language: String,
    text: String,
}

fn strip_processed_marker(input: &str) -> &str {
    input.strip_prefix(PROCESSED_MARKER).unwrap_or(input)
}

/// Upper-cased first character of `text`, empty for empty text.
fn first_letter_of(locale: &dyn LocaleService, text: &str, language: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    locale.upper_case_first(&locale.first_char(text, language), language)
}

/// Sorts pages by their translated title instead of their path.
#[derive(Debug, Clone)]
pub struct TranslatedTitleCollation {
    resolver: Arc<TitleResolver>,
}

impl TranslatedTitleCollation {
    #[must_use]
    pub const fn new(resolver: Arc<TitleResolver>) -> Self {
        Self { resolver }
    }

    #[must_use]
    pub fn sort_key_with_language(&self, input: &str) -> SortKey {
        let basis = self.sort_basis(input);
        let key = self.resolver.locale().upper_case(&basis.text, &basis.language);
        SortKey { key, language: basis.language }
    }

    fn language_or_site(&self, path: &str) -> String {
        self.resolver
            .detect_language(path)
            .unwrap_or_else(|| self.resolver.site_language().to_string())
    }

    fn sort_basis(&self, input: &str) -> SortBasis {
        // "override\npath": keep the path after the override so categories
        // sharing an override still sort by their real paths.
        if let Some((_, path)) = input.split_once(SORT_OVERRIDE_SEPARATOR) {
            return SortBasis { language: self.language_or_site(path), text: input.to_string() };
        }

        let language = self.language_or_site(input);
        let text = match self.resolver.parse_title(input, &language, Some(NamespaceId::MAIN)) {
            Ok(title) => self.resolver.resolve_translated_title(&title).local_name().to_string(),
            Err(err) => {
                tracing::debug!(input, error = %err, "Sorting by unparsed input");
                input.to_string()
            }
        };

        SortBasis { language, text }
    }
}

impl Collation for TranslatedTitleCollation {
    fn sort_key(&self, input: &str) -> String {
        self.sort_key_with_language(input).key
    }

    fn first_letter(&self, input: &str) -> String {
        let basis = self.sort_basis(strip_processed_marker(input));
        first_letter_of(self.resolver.locale(), &basis.text, &basis.language)
    }
}

/// Plain upper-casing with the site language rules.
#[derive(Debug, Clone)]
pub struct UppercaseCollation {
    resolver: Arc<TitleResolver>,
}

impl UppercaseCollation {
    #[must_use]
    pub const fn new(resolver: Arc<TitleResolver>) -> Self {
        Self { resolver }
    }
}

impl Collation for UppercaseCollation {
    fn sort_key(&self, input: &str) -> String {
        self.resolver.locale().upper_case(input, self.resolver.site_language())
    }

    fn first_letter(&self, input: &str) -> String {
        let text = strip_processed_marker(input);
        first_letter_of(self.resolver.locale(), text, self.resolver.site_language())
    }
}
