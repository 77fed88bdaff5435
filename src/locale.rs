//! String-level locale helpers shared by the locale data lookup and the decimal plan.

use icu::locale::Locale as IcuLocale;

use crate::error::{Error, Result};

pub(crate) const DEFAULT_NUMBERING_SYSTEM: &str = "latn";

/// Value of a `-u-` extension keyword, e.g. `nu` in `ar-EG-u-nu-latn`.
pub(crate) fn extract_unicode_extension(locale_str: &str, key: &str) -> Option<String> {
    let lower = locale_str.to_lowercase();
    let search_str = match lower.find("-x-") {
        Some(x_idx) => &lower[..x_idx],
        None => &lower[..],
    };
    let u_idx = search_str.find("-u-")?;
    let tokens: Vec<&str> = search_str[u_idx + 3..].split('-').collect();
    let pos = tokens.iter().position(|t| *t == key)?;
    match tokens.get(pos + 1) {
        Some(value) if value.len() > 2 => Some(value.to_string()),
        _ => Some("true".to_string()),
    }
}

pub(crate) fn strip_unicode_extensions(locale_str: &str) -> String {
    let search_end = locale_str.find("-x-").unwrap_or(locale_str.len());
    let search_part = &locale_str[..search_end];
    let Some(idx) = search_part.find("-u-") else {
        return locale_str.to_string();
    };
    let before = &locale_str[..idx];
    let tokens: Vec<&str> = locale_str[idx + 3..].split('-').collect();
    match tokens.iter().position(|t| t.len() == 1 && *t != "u") {
        Some(end_of_u) => format!("{}-{}", before, tokens[end_of_u..].join("-")),
        None => before.to_string(),
    }
}

/// Canonical locale without Unicode extensions.
pub(crate) fn base_locale(locale_str: &str) -> Result<IcuLocale> {
    strip_unicode_extensions(locale_str)
        .parse()
        .map_err(|_| Error::Locale(locale_str.to_string()))
}

pub(crate) fn language(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

/// `en-Latn-US`, `en-Latn`, `en`: most to least specific.
pub(crate) fn fallback_chain(locale: &IcuLocale) -> Vec<String> {
    let full = locale.to_string();
    let mut chain = vec![full.clone()];
    let mut current = full.as_str();
    while let Some(idx) = current.rfind('-') {
        current = &current[..idx];
        chain.push(current.to_string());
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_system_extension() {
        assert_eq!(extract_unicode_extension("ar-EG-u-nu-arab", "nu").as_deref(), Some("arab"));
        assert_eq!(extract_unicode_extension("en-US", "nu"), None);
        assert_eq!(extract_unicode_extension("en-u-nu-thai-x-foo", "nu").as_deref(), Some("thai"));
    }

    #[test]
    fn strips_extensions_but_keeps_private_use() {
        assert_eq!(strip_unicode_extensions("de-DE-u-nu-latn"), "de-DE");
        assert_eq!(strip_unicode_extensions("de-u-nu-latn-x-abc"), "de-x-abc");
        assert_eq!(strip_unicode_extensions("fr"), "fr");
    }

    #[test]
    fn chain_goes_to_language() {
        let loc = base_locale("pt-PT-u-nu-latn").unwrap();
        assert_eq!(fallback_chain(&loc), vec!["pt-PT".to_string(), "pt".to_string()]);
    }

    #[test]
    fn bad_locale_is_an_error() {
        assert!(matches!(base_locale("not a locale!"), Err(Error::Locale(_))));
    }

    #[test]
    fn language_subtag() {
        assert_eq!(language("zh_Hant_TW"), "zh");
        assert_eq!(language("en-US"), "en");
    }
}
