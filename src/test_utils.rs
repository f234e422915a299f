//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のロケール・ワークフローを提供します。
#![cfg(test)]

use std::sync::Arc;

use crate::config::CollationSettings;
use crate::locale::StaticLocale;
use crate::resolver::TitleResolver;
use crate::title::{
    NamespaceId,
    NamespaceTable,
    Title,
};
use crate::translation::{
    InMemoryWorkflow,
    TranslatableUnit,
};

/// テスト用のロケールを作成する
///
/// - `de`, `fr`: ローカライズされた名前空間テーブルあり
/// - `en`, `nl`, `tr`: テーブルなし（ニュートラル文法で解析される）
///
/// `tr` はテーブルがなくてもトルコ語の大文字化規則が使われることの確認用
pub(crate) fn test_locale() -> StaticLocale {
    StaticLocale::new()
        .with_languages(["en", "nl", "tr"])
        .with_namespace_table(
            "de",
            NamespaceTable::localized(
                [("Kategorie".to_string(), NamespaceId::CATEGORY)],
                [("Kat".to_string(), NamespaceId::CATEGORY)],
            ),
        )
        .with_namespace_table(
            "fr",
            NamespaceTable::localized(
                [("Catégorie".to_string(), NamespaceId::CATEGORY)],
                std::iter::empty(),
            ),
        )
}

/// テスト用の翻訳ワークフローを作成する
///
/// - `Widget`: `de` の表示タイトル "Gerät"、`de`/`fr` を追跡
/// - `Category:Fruit`: `de` の表示タイトル "Kategorie:Obst"
/// - `Draft`: 表示タイトルはあるが未追跡
/// - `Broken`: 不正な表示タイトル
pub(crate) fn test_workflow() -> InMemoryWorkflow {
    InMemoryWorkflow::new()
        .with_unit(
            TranslatableUnit::new(Title::new(NamespaceId::MAIN, "Widget"))
                .with_display_title("de", "Gerät")
                .with_progress("de", 100)
                .with_progress("fr", 40),
        )
        .with_unit(
            TranslatableUnit::new(Title::new(NamespaceId::CATEGORY, "Fruit"))
                .with_display_title("de", "Kategorie:Obst")
                .with_progress("de", 100),
        )
        .with_unit(
            TranslatableUnit::new(Title::new(NamespaceId::MAIN, "Draft"))
                .with_display_title("de", "Entwurf"),
        )
        .with_unit(
            TranslatableUnit::new(Title::new(NamespaceId::MAIN, "Broken"))
                .with_display_title("de", "Bad[name]")
                .with_progress("de", 80),
        )
}

/// デフォルト設定（サイト言語 `en`）のリゾルバーを作成する
pub(crate) fn test_resolver() -> TitleResolver {
    TitleResolver::new(
        &CollationSettings::default(),
        Arc::new(test_locale()),
        Arc::new(test_workflow()),
    )
}
