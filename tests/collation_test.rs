//! Category collation through the public API

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::sync::Arc;

use googletest::prelude::*;
use rstest::*;
use translated_title_collation::collation::TRANSLATED_PAGE_TITLE;
use translated_title_collation::config::CollationSettings;
use translated_title_collation::language::split_language_suffix;
use translated_title_collation::title::{
    NamespaceTable,
    TitleCodec,
    TitleGrammar,
};
use translated_title_collation::{
    Collation,
    CollationRegistry,
    DisplayTitleError,
    InMemoryWorkflow,
    LocaleService,
    MalformedTitleError,
    NamespaceId,
    StaticLocale,
    TitleResolver,
    TranslatableUnit,
};

#[fixture]
fn resolver() -> Arc<TitleResolver> {
    let locale: Arc<dyn LocaleService> =
        Arc::new(StaticLocale::new().with_languages(["en", "fr"]).with_namespace_table(
            "de",
            NamespaceTable::localized(
                [("Kategorie".to_string(), NamespaceId::CATEGORY)],
                std::iter::empty(),
            ),
        ));
    let source = TitleCodec::neutral(true, Arc::clone(&locale))
        .parse("widget", "en", NamespaceId::MAIN)
        .unwrap();
    let workflow = InMemoryWorkflow::new().with_unit(
        TranslatableUnit::new(source).with_display_title("de", "Gerät").with_progress("de", 100),
    );

    Arc::new(TitleResolver::new(&CollationSettings::default(), locale, Arc::new(workflow)))
}

#[fixture]
fn collation(resolver: Arc<TitleResolver>) -> Box<dyn Collation> {
    CollationRegistry::with_defaults().create(TRANSLATED_PAGE_TITLE, resolver).unwrap()
}

#[rstest]
fn localized_category_path(resolver: Arc<TitleResolver>) {
    let path = "Category:Kategorie/de";

    assert_that!(resolver.detect_language(path).as_deref(), some(eq("de")));

    let (base, language) = split_language_suffix(path, resolver.locale());
    let title = resolver.parse_title(base, &language.unwrap(), None).unwrap();

    assert_that!(title.namespace(), eq(NamespaceId::CATEGORY));
    assert_that!(title.local_name(), eq("Kategorie"));
}

#[rstest]
fn translated_page_title(resolver: Arc<TitleResolver>, collation: Box<dyn Collation>) {
    let title = resolver.parse_title("Widget/de", "de", Some(NamespaceId::MAIN)).unwrap();

    let translated = resolver.resolve_translated_title(&title);

    assert_that!(translated.local_name(), eq("Gerät"));
    assert_that!(collation.sort_key("Widget/de"), eq("GERÄT"));
    assert_that!(collation.first_letter("Widget/de"), eq("G"));
}

#[rstest]
#[case("en")]
#[case("de")]
#[case("xx")]
fn empty_title_is_malformed_but_sortable(
    resolver: Arc<TitleResolver>,
    collation: Box<dyn Collation>,
    #[case] language: &str,
) {
    assert_eq!(resolver.parse_title("", language, None), Err(MalformedTitleError::Empty));
    assert_that!(collation.sort_key(""), eq(""));
    assert_that!(collation.first_letter(""), eq(""));
}

#[rstest]
fn marker_byte_is_stripped(collation: Box<dyn Collation>) {
    assert_that!(collation.first_letter("\0Zebra/en"), eq(&collation.first_letter("Zebra/en")));
    assert_that!(collation.first_letter("\0Zebra/en"), eq("Z"));
}

#[rstest]
fn sort_overrides_do_not_collide(collation: Box<dyn Collation>) {
    let apple_widget = collation.sort_key("Apple\nWidget/fr");

    assert_ne!(apple_widget, collation.sort_key("Banana\nWidget/fr"));
    assert_ne!(apple_widget, collation.sort_key("Apple\nGadget/fr"));
}

#[rstest]
fn members_sort_by_translated_title(collation: Box<dyn Collation>) {
    let mut members = vec!["Zebra/de", "Widget/de", "Apple/de"];

    members.sort_by_key(|member| collation.sort_key(member));

    assert_that!(members, elements_are![eq(&"Apple/de"), eq(&"Widget/de"), eq(&"Zebra/de")]);
}

#[rstest]
fn configured_collation_from_settings(resolver: Arc<TitleResolver>) {
    let settings: CollationSettings =
        serde_json::from_str(r#"{"categoryCollation": "uppercase"}"#).unwrap();

    let collation = CollationRegistry::with_defaults().create_configured(&settings, resolver).unwrap();

    assert_that!(collation.sort_key("Widget/de"), eq("WIDGET/DE"));
}

#[rstest]
fn unknown_collation_is_rejected(resolver: Arc<TitleResolver>) {
    let result = CollationRegistry::with_defaults().create("numeric", resolver);

    assert!(result.is_err());
}

#[rstest]
fn resolver_locale_is_usable(resolver: Arc<TitleResolver>) {
    assert!(resolver.locale().language_exists("de"));
    assert_that!(resolver.locale().upper_case("gerät", "de"), eq("GERÄT"));
}

#[rstest]
fn leading_colon_titles_round_trip(resolver: Arc<TitleResolver>) {
    let title = resolver.parse_title(":Category:Foo", "en", None).unwrap();

    let reparsed = resolver.parse_title(&title.full_text(), "en", Some(title.namespace())).unwrap();

    assert_that!(title.namespace(), eq(NamespaceId::CATEGORY));
    assert_that!(title.local_name(), eq("Foo"));
    assert_eq!(reparsed, title);
}

#[rstest]
fn display_title_must_keep_namespace(resolver: Arc<TitleResolver>) {
    let source = resolver.parse_title("Category:Fruit", "en", None).unwrap();

    assert_eq!(resolver.check_display_title(&source, "Kategorie:Obst", "de"), Ok(()));
    assert_eq!(
        resolver.check_display_title(&source, "Obst", "de"),
        Err(DisplayTitleError::NamespaceMismatch {
            display_title: "Obst".to_string(),
            expected_prefix: "Kategorie:".to_string(),
        })
    );
}
