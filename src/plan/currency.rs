use icu::plurals::PluralCategory;

use super::CurrencyDisplay;
use crate::decoration::{Decoration, DecorationFamily};
use crate::locale::language;
use crate::text::Field;

pub(super) fn is_well_formed_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Default number of fraction digits for a currency.
pub fn currency_digits(currency: &str) -> u8 {
    match currency.to_ascii_uppercase().as_str() {
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF"
        | "UGX" | "UYI" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        _ => 2,
    }
}

fn currency_symbol(currency: &str, display: CurrencyDisplay, lang: &str) -> String {
    let code = currency.to_ascii_uppercase();
    let narrow = display == CurrencyDisplay::NarrowSymbol;
    match code.as_str() {
        "USD" => {
            if narrow || matches!(lang, "en" | "ja" | "de" | "fr") {
                "$".to_string()
            } else {
                "US$".to_string()
            }
        }
        "EUR" => "\u{20AC}".to_string(),
        "GBP" => "\u{00A3}".to_string(),
        "JPY" | "CNY" => "\u{00A5}".to_string(),
        "KRW" => "\u{20A9}".to_string(),
        "INR" => "\u{20B9}".to_string(),
        "RUB" => "\u{20BD}".to_string(),
        "BRL" => "R$".to_string(),
        "CAD" | "AUD" | "NZD" | "HKD" | "SGD" | "MXN" => {
            if narrow {
                "$".to_string()
            } else {
                format!("{}$", &code[..2])
            }
        }
        "SEK" | "NOK" | "DKK" => "kr".to_string(),
        "PLN" => "z\u{0142}".to_string(),
        "CHF" => "CHF".to_string(),
        _ => code,
    }
}

fn currency_names(currency: &str) -> (String, String) {
    let (one, other) = match currency.to_ascii_uppercase().as_str() {
        "USD" => ("US dollar", "US dollars"),
        "EUR" => ("euro", "euros"),
        "GBP" => ("British pound", "British pounds"),
        "JPY" => ("Japanese yen", "Japanese yen"),
        "CNY" => ("Chinese yuan", "Chinese yuan"),
        "CAD" => ("Canadian dollar", "Canadian dollars"),
        "AUD" => ("Australian dollar", "Australian dollars"),
        "CHF" => ("Swiss franc", "Swiss francs"),
        _ => {
            let code = currency.to_ascii_uppercase();
            return (code.clone(), code);
        }
    };
    (one.to_string(), other.to_string())
}

/// Locales that print the symbol after the number, e.g. "3,00 €".
fn currency_position_after(lang: &str) -> bool {
    matches!(
        lang,
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb" | "nn" | "no"
            | "sv" | "pl" | "cs" | "sk" | "hu" | "ro" | "bg" | "hr" | "sl" | "sr" | "tr"
            | "el" | "uk" | "ru" | "be" | "et" | "lv" | "lt" | "vi" | "id" | "ms"
    )
}

/// How the currency is attached to each value.
pub(super) enum CurrencyAffix {
    Fixed(Decoration),
    Named(DecorationFamily),
}

pub(super) fn currency_affix(currency: &str, display: CurrencyDisplay, locale: &str) -> CurrencyAffix {
    let lang = language(locale);
    if display == CurrencyDisplay::Name {
        let (one, other) = currency_names(currency);
        return CurrencyAffix::Named(
            DecorationFamily::new(format!("currency-{}", currency.to_ascii_uppercase()))
                .with_form(PluralCategory::One, "", &format!(" {one}"), Field::Currency)
                .with_form(PluralCategory::Other, "", &format!(" {other}"), Field::Currency),
        );
    }

    let symbol = match display {
        CurrencyDisplay::Code => currency.to_ascii_uppercase(),
        _ => currency_symbol(currency, display, lang),
    };
    let spaced = display == CurrencyDisplay::Code || symbol.chars().all(|c| c.is_alphabetic());
    let decoration = if currency_position_after(lang) {
        Decoration::empty()
            .with_suffix("\u{00A0}", None)
            .with_suffix(symbol, Some(Field::Currency))
    } else if spaced {
        Decoration::empty()
            .with_prefix(symbol, Some(Field::Currency))
            .with_prefix("\u{00A0}", None)
    } else {
        Decoration::empty().with_prefix(symbol, Some(Field::Currency))
    };
    CurrencyAffix::Fixed(decoration)
}
