//! Flags translation pages that link to pages in another language.

use crate::resolver::TitleResolver;
use crate::title::{
    NamespaceId,
    Title,
};

/// Tracking category key for pages linking across languages.
pub const ANOTHER_LANGUAGE_CATEGORY: &str = "translation-links-another-language";

/// A link found in rendered page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub title: Title,
    /// Interwiki prefix when the link leaves the site
    pub interwiki: Option<String>,
}

impl LinkTarget {
    #[must_use]
    pub const fn local(title: Title) -> Self {
        Self { title, interwiki: None }
    }

    #[must_use]
    pub fn interwiki(prefix: impl Into<String>, title: Title) -> Self {
        Self { title, interwiki: Some(prefix.into()) }
    }

    /// Translation variables (`$name`) are placeholders, not links.
    fn is_variable(&self) -> bool {
        self.title.local_name().starts_with('$')
    }
}

/// The first local link from `page` pointing at a page in another language.
///
/// Only pages in the translations namespace are checked. Languages are
/// compared as detected: a link without a language suffix differs from a
/// suffixed page, and any suffixed link differs from an unsuffixed page.
#[must_use]
pub fn find_cross_language_link<'a>(
    resolver: &TitleResolver,
    page: &Title,
    links: &'a [LinkTarget],
) -> Option<&'a LinkTarget> {
    if page.namespace() != NamespaceId::TRANSLATIONS {
        return None;
    }
    let page_language = resolver.page_language(page);

    links
        .iter()
        .filter(|link| link.interwiki.is_none() && !link.is_variable())
        .find(|link| resolver.page_language(&link.title) != page_language)
}

/// Tracking category to add to `page`, if any.
#[must_use]
pub fn tracking_category(
    resolver: &TitleResolver,
    page: &Title,
    links: &[LinkTarget],
) -> Option<&'static str> {
    let link = find_cross_language_link(resolver, page, links)?;
    tracing::debug!(page = %page, link = %link.title, "Page links to another language");
    Some(ANOTHER_LANGUAGE_CATEGORY)
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::test_resolver;

    fn translation_page(name: &str) -> Title {
        Title::new(NamespaceId::TRANSLATIONS, name)
    }

    fn main_link(name: &str) -> LinkTarget {
        LinkTarget::local(Title::new(NamespaceId::MAIN, name))
    }

    #[fixture]
    fn resolver() -> TitleResolver {
        test_resolver()
    }

    #[rstest]
    fn reports_first_link_in_other_language(resolver: TitleResolver) {
        let page = translation_page("Widget/1/de");
        let links = [main_link("Gadget/de"), main_link("Gadget/fr"), main_link("Gadget")];

        let found = find_cross_language_link(&resolver, &page, &links);

        assert_that!(found.map(|link| link.title.local_name()), some(eq("Gadget/fr")));
        assert_that!(tracking_category(&resolver, &page, &links), some(eq(ANOTHER_LANGUAGE_CATEGORY)));
    }

    #[rstest]
    #[case::suffixed_page_unsuffixed_link("Widget/1/de", "Gadget")]
    #[case::site_language_page_unsuffixed_link("Widget/1/en", "Gadget")]
    #[case::unsuffixed_page_suffixed_link("Widget/1", "Gadget/fr")]
    fn language_mismatches_are_reported(
        resolver: TitleResolver,
        #[case] page: &str,
        #[case] link: &str,
    ) {
        let links = [main_link(link)];

        assert_that!(
            tracking_category(&resolver, &translation_page(page), &links),
            some(eq(ANOTHER_LANGUAGE_CATEGORY))
        );
    }

    #[rstest]
    #[case::same_language("Widget/1/de", main_link("Gadget/de"))]
    #[case::both_unsuffixed("Widget/1", main_link("Gadget"))]
    #[case::interwiki(
        "Widget/1/de",
        LinkTarget::interwiki("wikipedia", Title::new(NamespaceId::MAIN, "Gadget/fr"))
    )]
    #[case::variable("Widget/1/de", main_link("$link"))]
    fn ignored_links(resolver: TitleResolver, #[case] page: &str, #[case] link: LinkTarget) {
        assert_that!(tracking_category(&resolver, &translation_page(page), &[link]), none());
    }

    #[rstest]
    fn only_translation_pages_are_checked(resolver: TitleResolver) {
        let page = Title::new(NamespaceId::MAIN, "Widget/de");
        let links = [main_link("Gadget/fr")];

        assert_that!(tracking_category(&resolver, &page, &links), none());
    }
}
