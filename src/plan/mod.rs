//! A value-formatting plan over `fixed_decimal` and the ICU decimal formatter.
//!
//! Produces the three decoration layers the range engine works with: scientific
//! exponent as the inner layer, percent/currency/unit as the middle layer and the
//! sign as the outer layer.

mod currency;
mod units;

use std::fmt;
use std::sync::Arc;

use fixed_decimal::{Decimal, SignedRoundingMode, UnsignedRoundingMode};
use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::locale::Locale as IcuLocale;
use icu::plurals::{PluralOperands, PluralRules, PluralRulesOptions, PluralRulesPreferences};

use crate::decoration::{Decoration, DecorationFamily, Signum};
use crate::error::{Error, Result};
use crate::locale::language;
use crate::micros::{MicroProps, ValueFormattingPlan};
use crate::text::Field;

pub use currency::currency_digits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SignDisplay {
    #[default]
    Auto,
    Always,
    Never,
    ExceptZero,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Notation {
    #[default]
    Standard,
    Scientific,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    NarrowSymbol,
    Code,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum UnitDisplay {
    #[default]
    Short,
    Narrow,
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Decimal,
    Percent,
    Currency {
        code: String,
        display: CurrencyDisplay,
    },
    Unit {
        unit: String,
        display: UnitDisplay,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalOptions {
    pub style: Style,
    pub sign_display: SignDisplay,
    pub notation: Notation,
    pub min_fraction_digits: u8,
    pub max_fraction_digits: u8,
    pub grouping: bool,
}

impl Default for DecimalOptions {
    fn default() -> Self {
        Self {
            style: Style::Decimal,
            sign_display: SignDisplay::Auto,
            notation: Notation::Standard,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            grouping: true,
        }
    }
}

impl DecimalOptions {
    pub fn percent() -> Self {
        Self {
            style: Style::Percent,
            max_fraction_digits: 0,
            ..Self::default()
        }
    }

    /// Currency style with the currency's customary fraction digits.
    pub fn currency(code: &str, display: CurrencyDisplay) -> Self {
        let digits = currency_digits(code);
        Self {
            style: Style::Currency {
                code: code.to_ascii_uppercase(),
                display,
            },
            min_fraction_digits: digits,
            max_fraction_digits: digits,
            ..Self::default()
        }
    }

    pub fn unit(unit: &str, display: UnitDisplay) -> Self {
        Self {
            style: Style::Unit {
                unit: unit.to_string(),
                display,
            },
            ..Self::default()
        }
    }

    pub fn with_fraction_digits(mut self, min: u8, max: u8) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max.max(min);
        self
    }

    pub fn with_sign_display(mut self, sign_display: SignDisplay) -> Self {
        self.sign_display = sign_display;
        self
    }

    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }
}

enum MiddleAffix {
    Fixed(Decoration),
    Plural(Arc<DecorationFamily>),
}

/// Formats one decimal value for a locale. Immutable once built.
pub struct DecimalPlan {
    locale: String,
    options: DecimalOptions,
    formatter: DecimalFormatter,
    plural_rules: Option<PluralRules>,
    middle: MiddleAffix,
}

impl fmt::Debug for DecimalPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecimalPlan")
            .field("locale", &self.locale)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl DecimalPlan {
    pub fn try_new(locale_str: &str, options: DecimalOptions) -> Result<Self> {
        let locale: IcuLocale = locale_str
            .parse()
            .map_err(|_| Error::Locale(locale_str.to_string()))?;

        let prefs = DecimalFormatterPreferences::from(&locale);
        let formatter = DecimalFormatter::try_new(prefs, formatter_options(options.grouping))
            .or_else(|e| {
                tracing::debug!(%locale, error = %e, "no decimal symbols, using root");
                DecimalFormatter::try_new(Default::default(), formatter_options(options.grouping))
            })
            .map_err(|_| Error::Data {
                what: "decimal",
                locale: locale_str.to_string(),
            })?;

        let plural_rules =
            PluralRules::try_new(PluralRulesPreferences::from(&locale), PluralRulesOptions::default())
                .inspect_err(|e| tracing::debug!(%locale, error = %e, "no plural rules"))
                .ok();

        let middle = match &options.style {
            Style::Decimal => MiddleAffix::Fixed(Decoration::empty()),
            Style::Percent => MiddleAffix::Fixed(percent_affix(locale_str)),
            Style::Currency { code, display } => {
                if !currency::is_well_formed_currency_code(code) {
                    return Err(Error::Currency(code.clone()));
                }
                match currency::currency_affix(code, *display, locale_str) {
                    currency::CurrencyAffix::Fixed(d) => MiddleAffix::Fixed(d),
                    currency::CurrencyAffix::Named(f) => MiddleAffix::Plural(Arc::new(f)),
                }
            }
            Style::Unit { unit, display } => match units::unit_family(unit, *display) {
                Some(f) => MiddleAffix::Plural(Arc::new(f)),
                None => return Err(Error::Unit(unit.clone())),
            },
        };

        Ok(Self {
            locale: locale_str.to_string(),
            options,
            formatter,
            plural_rules,
            middle,
        })
    }

    pub fn options(&self) -> &DecimalOptions {
        &self.options
    }

    fn round(&self, dec: &mut Decimal) {
        dec.round_with_mode(
            -(self.options.max_fraction_digits as i16),
            SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
        );
        dec.absolute.trim_end();
        if self.options.min_fraction_digits > 0 {
            dec.absolute.pad_end(-(self.options.min_fraction_digits as i16));
        }
    }

    fn plural_category(&self, value: &Decimal) -> icu::plurals::PluralCategory {
        match &self.plural_rules {
            Some(rules) => rules.category_for(PluralOperands::from(value)),
            None => icu::plurals::PluralCategory::Other,
        }
    }
}

impl ValueFormattingPlan for DecimalPlan {
    fn preprocess(&self, quantity: &Decimal) -> MicroProps {
        let mut dec = quantity.clone();
        if self.options.style == Style::Percent {
            dec.multiply_pow10(2);
        }

        let scientific = self.options.notation == Notation::Scientific;
        let mut exponent: i16 = 0;
        if scientific && !dec.absolute.is_zero() {
            exponent = dec.absolute.nonzero_magnitude_start();
            dec.multiply_pow10(-exponent);
        }
        self.round(&mut dec);
        // 9.9996 rounds up to 10.000
        if scientific && !dec.absolute.is_zero() && dec.absolute.nonzero_magnitude_start() > 0 {
            dec.multiply_pow10(-1);
            exponent += 1;
            self.round(&mut dec);
        }

        let mut rounded = dec.clone();
        if scientific {
            rounded.multiply_pow10(exponent);
        }
        if rounded.absolute.is_zero() {
            rounded.sign = fixed_decimal::Sign::None;
        }

        let signum = Signum::of(&dec);
        dec.sign = fixed_decimal::Sign::None;

        let fraction_digits = dec
            .to_string()
            .split_once('.')
            .map_or(0, |(_, frac)| frac.len());
        let localized = self.formatter.format(&dec).to_string();

        let inner = if scientific {
            exponent_affix(exponent)
        } else {
            Decoration::empty()
        };
        let middle = match &self.middle {
            MiddleAffix::Fixed(d) => d.clone(),
            MiddleAffix::Plural(family) => {
                // Unit and currency names read the same for zero and positive values.
                let sign = if signum == Signum::Negative {
                    Signum::Negative
                } else {
                    Signum::Positive
                };
                family
                    .decoration(sign, self.plural_category(&dec))
                    .unwrap_or_default()
            }
        };
        let outer = match sign_text(self.options.sign_display, signum) {
            Some(s) => Decoration::empty().with_prefix(s, Some(Field::Sign)),
            None => Decoration::empty(),
        };

        MicroProps {
            quantity: rounded,
            number: number_chunks(&localized, fraction_digits),
            inner,
            middle,
            outer,
        }
    }
}

fn formatter_options(grouping: bool) -> DecimalFormatterOptions {
    let mut opts = DecimalFormatterOptions::default();
    opts.grouping_strategy = Some(if grouping {
        GroupingStrategy::Auto
    } else {
        GroupingStrategy::Never
    });
    opts
}

fn sign_text(display: SignDisplay, signum: Signum) -> Option<&'static str> {
    match (display, signum) {
        (SignDisplay::Never, _) => None,
        (_, Signum::Negative) => Some("-"),
        (SignDisplay::Always, _) | (SignDisplay::ExceptZero, Signum::Positive) => Some("+"),
        _ => None,
    }
}

fn exponent_affix(exponent: i16) -> Decoration {
    let mut d = Decoration::empty().with_suffix("E", Some(Field::ExponentSymbol));
    if exponent < 0 {
        d = d.with_suffix("-", Some(Field::ExponentSign));
    }
    d.with_suffix(exponent.unsigned_abs().to_string(), Some(Field::Exponent))
}

fn locale_percent_has_space(lang: &str) -> bool {
    matches!(
        lang,
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb" | "nn" | "no"
            | "sv" | "pl" | "cs" | "sk" | "hu" | "ro" | "bg" | "hr" | "sl" | "sr" | "tr"
            | "el" | "uk" | "ru" | "be" | "et" | "lv" | "lt"
    )
}

fn percent_affix(locale: &str) -> Decoration {
    if locale_percent_has_space(language(locale)) {
        Decoration::empty()
            .with_suffix("\u{00A0}", None)
            .with_suffix("%", Some(Field::Percent))
    } else {
        Decoration::empty().with_suffix("%", Some(Field::Percent))
    }
}

/// Splits localized digits into integer, group, decimal and fraction runs.
/// The last `fraction_digits` digits are the fraction.
fn number_chunks(localized: &str, fraction_digits: usize) -> Vec<(String, Field)> {
    let chars: Vec<char> = localized.chars().collect();
    let mut fields = vec![Field::Integer; chars.len()];
    let mut remaining = fraction_digits;
    let mut in_integer = fraction_digits == 0;
    for i in (0..chars.len()).rev() {
        let digit = chars[i].is_numeric();
        fields[i] = if remaining > 0 && digit {
            remaining -= 1;
            Field::Fraction
        } else if !in_integer && !digit {
            Field::Decimal
        } else {
            in_integer = true;
            if digit { Field::Integer } else { Field::Group }
        };
    }

    let mut out: Vec<(String, Field)> = Vec::new();
    for (c, field) in chars.into_iter().zip(fields) {
        match out.last_mut() {
            Some((text, f)) if *f == field => text.push(c),
            _ => out.push((c.to_string(), field)),
        }
    }
    out
}
