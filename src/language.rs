//! Language-suffix detection on `/`-delimited page paths.

use crate::locale::LocaleService;

/// Detects the language code carried by the last `/` segment of `path`.
///
/// Only the last segment is considered; there is no partial or
/// multi-segment matching. A path without `/` is its own last segment.
///
/// # Examples
/// - `Widget/fr` → `fr`
/// - `Category:Kategorie/de` → `de`
/// - `Widget/Setup` → `None`
/// - `de` → `de`
#[must_use]
pub fn detect_language(path: &str, locale: &dyn LocaleService) -> Option<String> {
    let segment = last_segment(path);
    if segment.is_empty() || !locale.language_exists(segment) {
        return None;
    }
    Some(segment.to_string())
}

/// Splits `path` into its base and a trailing language code.
///
/// When the last segment is not a known language (or there is no `/`),
/// the whole path is returned as the base.
#[must_use]
pub fn split_language_suffix<'a>(
    path: &'a str,
    locale: &dyn LocaleService,
) -> (&'a str, Option<String>) {
    match path.rsplit_once('/') {
        Some((base, segment)) if !segment.is_empty() && locale.language_exists(segment) => {
            (base, Some(segment.to_string()))
        }
        _ => (path, None),
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
