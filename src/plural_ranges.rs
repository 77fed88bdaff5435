//! Picking one plural form for a merged range decoration.

use std::borrow::Cow;

use icu::locale::Locale as IcuLocale;
use icu::plurals::{
    PluralCategory, PluralRuleType, PluralRules, PluralRulesOptions, PluralRulesPreferences,
    PluralRulesWithRanges,
};

use crate::decoration::Decoration;

pub(crate) fn plural_category_to_str(cat: PluralCategory) -> &'static str {
    match cat {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Locale data mapping the plural categories of a range's ends to the category of the range.
pub trait PluralRangeData: Send + Sync + std::fmt::Debug {
    fn resolve(&self, first: PluralCategory, second: PluralCategory) -> PluralCategory;
}

/// Plural ranges from the ICU compiled data.
pub struct StandardPluralRanges {
    ranges: Option<PluralRulesWithRanges<PluralRules>>,
}

impl std::fmt::Debug for StandardPluralRanges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardPluralRanges")
            .field("loaded", &self.ranges.is_some())
            .finish()
    }
}

impl StandardPluralRanges {
    pub fn new(locale: &IcuLocale) -> Self {
        let prefs = PluralRulesPreferences::from(locale);
        let mut opts = PluralRulesOptions::default();
        opts.rule_type = Some(PluralRuleType::Cardinal);
        let ranges = match PluralRulesWithRanges::try_new(prefs, opts) {
            Ok(r) => Some(r),
            Err(e) => {
                tracing::debug!(%locale, error = %e, "no plural range data, resolving to other");
                None
            }
        };
        Self { ranges }
    }
}

impl PluralRangeData for StandardPluralRanges {
    fn resolve(&self, first: PluralCategory, second: PluralCategory) -> PluralCategory {
        match &self.ranges {
            Some(r) => r.resolve_range(first, second),
            None => PluralCategory::Other,
        }
    }
}

/// The decoration to print once for a merged layer.
///
/// Decorations without plural forms have nothing to resolve and the first is used.
///
/// # Panics
///
/// If both decorations are plural-bound but come from different families or carry
/// different signs. Callers only merge decorations already found equivalent, which
/// rules this out.
pub(crate) fn resolve_decoration<'a>(
    ranges: &dyn PluralRangeData,
    first: &'a Decoration,
    second: &Decoration,
) -> Cow<'a, Decoration> {
    let (Some(a), Some(b)) = (first.plural(), second.plural()) else {
        return Cow::Borrowed(first);
    };
    assert!(
        std::sync::Arc::ptr_eq(&a.family, &b.family),
        "merging decorations from families {} and {}",
        a.family.name(),
        b.family.name()
    );
    assert_eq!(a.sign, b.sign, "merging decorations with different signs");

    let category = ranges.resolve(a.category, b.category);
    tracing::trace!(
        family = a.family.name(),
        first = plural_category_to_str(a.category),
        second = plural_category_to_str(b.category),
        resolved = plural_category_to_str(category),
        "resolved range plural"
    );
    match a.family.decoration(a.sign, category) {
        Some(d) => Cow::Owned(d),
        None => panic!("family {} has no form for {category:?}", a.family.name()),
    }
}
