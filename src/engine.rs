//! The range formatter: settings, construction and the per-call dispatch between
//! range, approximate and single-value rendering.

use std::fmt;
use std::sync::Arc;

use fixed_decimal::Decimal;

use crate::assembler;
use crate::collapse::{CollapsePlan, RangeCollapse};
use crate::error::Result;
use crate::identity::{IdentityFallback, RangeAction, action, classify};
use crate::locale::{DEFAULT_NUMBERING_SYSTEM, base_locale, extract_unicode_extension};
use crate::locale_data::{RangeData, RangeDataProvider, StaticRangeData};
use crate::micros::{MicroProps, ValueFormattingPlan, write_affixes, write_number};
use crate::plan::{DecimalOptions, DecimalPlan};
use crate::plural_ranges::{PluralRangeData, StandardPluralRanges};
use crate::result::FormattedRange;
use crate::text::FieldedString;

/// Everything a [`NumberRangeFormatter`] is built from.
///
/// Unset plans default to a [`DecimalPlan`] for the locale; unset data sources
/// default to the built-in tables.
#[derive(Clone)]
pub struct RangeSettings {
    locale: String,
    collapse: RangeCollapse,
    identity_fallback: IdentityFallback,
    formatter_first: Option<Arc<dyn ValueFormattingPlan>>,
    formatter_second: Option<Arc<dyn ValueFormattingPlan>>,
    data_provider: Option<Arc<dyn RangeDataProvider>>,
    plural_ranges: Option<Arc<dyn PluralRangeData>>,
}

impl fmt::Debug for RangeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSettings")
            .field("locale", &self.locale)
            .field("collapse", &self.collapse)
            .field("identity_fallback", &self.identity_fallback)
            .field("formatter_first", &self.formatter_first)
            .field("formatter_second", &self.formatter_second)
            .finish_non_exhaustive()
    }
}

impl RangeSettings {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            collapse: RangeCollapse::default(),
            identity_fallback: IdentityFallback::default(),
            formatter_first: None,
            formatter_second: None,
            data_provider: None,
            plural_ranges: None,
        }
    }

    pub fn collapse(mut self, collapse: RangeCollapse) -> Self {
        self.collapse = collapse;
        self
    }

    pub fn identity_fallback(mut self, fallback: IdentityFallback) -> Self {
        self.identity_fallback = fallback;
        self
    }

    /// Uses one plan for both ends.
    pub fn formatter(self, plan: Arc<dyn ValueFormattingPlan>) -> Self {
        self.formatter_first(Arc::clone(&plan)).formatter_second(plan)
    }

    pub fn formatter_first(mut self, plan: Arc<dyn ValueFormattingPlan>) -> Self {
        self.formatter_first = Some(plan);
        self
    }

    pub fn formatter_second(mut self, plan: Arc<dyn ValueFormattingPlan>) -> Self {
        self.formatter_second = Some(plan);
        self
    }

    pub fn data_provider(mut self, provider: Arc<dyn RangeDataProvider>) -> Self {
        self.data_provider = Some(provider);
        self
    }

    pub fn plural_ranges(mut self, ranges: Arc<dyn PluralRangeData>) -> Self {
        self.plural_ranges = Some(ranges);
        self
    }
}

/// Formats pairs of quantities as localized ranges.
///
/// Immutable after construction; a single instance can serve many threads.
#[derive(Debug)]
pub struct NumberRangeFormatter {
    collapse: RangeCollapse,
    identity_fallback: IdentityFallback,
    first: Arc<dyn ValueFormattingPlan>,
    second: Arc<dyn ValueFormattingPlan>,
    same_formatters: bool,
    data: RangeData,
    plurals: Arc<dyn PluralRangeData>,
}

impl NumberRangeFormatter {
    #[tracing::instrument(level = "debug", skip(settings), fields(locale = %settings.locale))]
    pub fn try_new(settings: RangeSettings) -> Result<Self> {
        let locale = base_locale(&settings.locale)?;
        let numbering_system = extract_unicode_extension(&settings.locale, "nu")
            .unwrap_or_else(|| DEFAULT_NUMBERING_SYSTEM.to_string());

        let (first, second, same_formatters) =
            match (settings.formatter_first, settings.formatter_second) {
                (None, None) => {
                    let plan: Arc<dyn ValueFormattingPlan> =
                        Arc::new(DecimalPlan::try_new(&settings.locale, DecimalOptions::default())?);
                    (Arc::clone(&plan), plan, true)
                }
                (Some(a), Some(b)) => {
                    let same = Arc::ptr_eq(&a, &b);
                    (a, b, same)
                }
                (a, b) => {
                    let default = || -> Result<Arc<dyn ValueFormattingPlan>> {
                        Ok(Arc::new(DecimalPlan::try_new(
                            &settings.locale,
                            DecimalOptions::default(),
                        )?))
                    };
                    let a = match a {
                        Some(a) => a,
                        None => default()?,
                    };
                    let b = match b {
                        Some(b) => b,
                        None => default()?,
                    };
                    (a, b, false)
                }
            };

        let provider = settings
            .data_provider
            .unwrap_or_else(|| Arc::new(StaticRangeData::builtin()));
        let data = RangeData::load(provider.as_ref(), &locale, &numbering_system);
        let plurals = settings
            .plural_ranges
            .unwrap_or_else(|| Arc::new(StandardPluralRanges::new(&locale)));

        tracing::debug!(%numbering_system, same_formatters, "range formatter ready");
        Ok(Self {
            collapse: settings.collapse,
            identity_fallback: settings.identity_fallback,
            first,
            second,
            same_formatters,
            data,
            plurals,
        })
    }

    /// Shorthand for a formatter with default settings for `locale`.
    pub fn for_locale(locale: &str) -> Result<Self> {
        Self::try_new(RangeSettings::new(locale))
    }

    pub fn same_formatters(&self) -> bool {
        self.same_formatters
    }

    /// Formats `first..second`.
    ///
    /// `equal_before_rounding` asserts the two quantities were equal before the plans
    /// rounded them; the formatter cannot tell on its own.
    pub fn format(&self, first: &Decimal, second: &Decimal, equal_before_rounding: bool) -> FormattedRange {
        let micros1 = self.first.preprocess(first);
        let micros2 = if self.same_formatters {
            self.first.preprocess(second)
        } else {
            self.second.preprocess(second)
        };

        let identity = classify(&micros1, &micros2, equal_before_rounding);
        let mut chosen = action(self.identity_fallback, identity);
        if chosen != RangeAction::Range && !self.same_formatters {
            chosen = RangeAction::Range;
        }
        tracing::trace!(?identity, action = ?chosen, "formatting range");

        let mut out = FieldedString::new();
        let boundaries = match chosen {
            RangeAction::Single => {
                format_single(&micros1, &mut out);
                None
            }
            RangeAction::Approximate => {
                let n = format_single(&micros1, &mut out);
                self.data.approximately.apply(&mut out, 0, n);
                None
            }
            RangeAction::Range => {
                let plan = CollapsePlan::new(self.collapse, &micros1, &micros2);
                tracing::trace!(?plan, "collapse");
                Some(assembler::format_range(
                    &mut out,
                    &self.data.range,
                    self.plurals.as_ref(),
                    plan,
                    &micros1,
                    &micros2,
                ))
            }
        };

        FormattedRange::new(out, boundaries, micros1.quantity, micros2.quantity, identity)
    }

    /// Formats `first..second`, treating the quantities as equal before rounding when
    /// they are equal as written.
    pub fn format_range(&self, first: &Decimal, second: &Decimal) -> FormattedRange {
        self.format(first, second, first == second)
    }
}

fn format_single(micros: &MicroProps, out: &mut FieldedString) -> usize {
    let n = write_number(micros, out, 0);
    n + write_affixes(micros, out, 0, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::Decoration;
    use crate::identity::IdentityResult;
    use crate::locale_data::MiscPatterns;
    use crate::micros::FnPlan;
    use crate::text::Field;

    fn dash_data() -> Arc<dyn RangeDataProvider> {
        let mut data = StaticRangeData::empty();
        data.insert("en", "latn", MiscPatterns {
            range: Some("{0}-{1}".to_string()),
            approximately: Some("~{0}".to_string()),
        });
        Arc::new(data)
    }

    fn plain_plan() -> Arc<dyn ValueFormattingPlan> {
        Arc::new(FnPlan(|q: &Decimal| MicroProps::plain(q.clone(), q.to_string())))
    }

    fn meters_plan() -> Arc<dyn ValueFormattingPlan> {
        Arc::new(FnPlan(|q: &Decimal| {
            MicroProps::plain(q.clone(), q.to_string())
                .with_middle(Decoration::empty().with_suffix(" meters", Some(Field::MeasureUnit)))
        }))
    }

    fn engine(settings: RangeSettings) -> NumberRangeFormatter {
        NumberRangeFormatter::try_new(settings.data_provider(dash_data())).unwrap()
    }

    #[test]
    fn formatter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NumberRangeFormatter>();
    }

    #[test]
    fn distinct_values_render_as_range() {
        let f = engine(RangeSettings::new("en").formatter(plain_plan()));
        let r = f.format(&Decimal::from(3), &Decimal::from(5), false);
        assert_eq!(r.to_string(), "3-5");
        assert_eq!(r.identity_result(), IdentityResult::NotEqual);
    }

    #[test]
    fn equal_after_rounding_is_approximate() {
        let f = engine(RangeSettings::new("en").formatter(plain_plan()));
        let r = f.format(&Decimal::from(3), &Decimal::from(3), false);
        assert_eq!(r.to_string(), "~3");
        assert_eq!(r.identity_result(), IdentityResult::EqualAfterRounding);
    }

    #[test]
    fn single_value_fallback() {
        let f = engine(
            RangeSettings::new("en")
                .formatter(plain_plan())
                .identity_fallback(IdentityFallback::SingleValue),
        );
        let r = f.format(&Decimal::from(3), &Decimal::from(3), true);
        assert_eq!(r.to_string(), "3");
        assert_eq!(r.identity_result(), IdentityResult::EqualBeforeRounding);
    }

    #[test]
    fn unit_policy_merges_units() {
        let f = engine(
            RangeSettings::new("en")
                .formatter(meters_plan())
                .collapse(RangeCollapse::Unit),
        );
        assert_eq!(f.format(&Decimal::from(3), &Decimal::from(5), false).to_string(), "3-5 meters");
    }

    #[test]
    fn distinct_plans_never_simplify() {
        let f = engine(
            RangeSettings::new("en")
                .formatter_first(plain_plan())
                .formatter_second(plain_plan())
                .identity_fallback(IdentityFallback::SingleValue),
        );
        assert!(!f.same_formatters());
        let r = f.format(&Decimal::from(3), &Decimal::from(3), true);
        assert_eq!(r.to_string(), "3-3");
        assert_eq!(r.identity_result(), IdentityResult::EqualBeforeRounding);
    }

    #[test]
    fn range_fallback_always_prints_both() {
        let f = engine(
            RangeSettings::new("en")
                .formatter(plain_plan())
                .identity_fallback(IdentityFallback::Range),
        );
        assert_eq!(f.format(&Decimal::from(4), &Decimal::from(4), true).to_string(), "4-4");
    }

    #[test]
    fn default_plan_rounds_and_uses_builtin_data() {
        let f = NumberRangeFormatter::for_locale("en").unwrap();
        assert!(f.same_formatters());
        let r = f.format_range(&"2.0001".parse().unwrap(), &"2.0002".parse().unwrap());
        assert_eq!(r.to_string(), "~2");
        assert_eq!(r.identity_result(), IdentityResult::EqualAfterRounding);
        let r = f.format_range(&Decimal::from(1000), &Decimal::from(2500));
        assert_eq!(r.to_string(), "1,000\u{2013}2,500");
    }

    #[test]
    fn values_rounding_to_zero_are_approximately_equal() {
        let f = NumberRangeFormatter::for_locale("en").unwrap();
        let r = f.format(&"-0.0001".parse().unwrap(), &"0.0001".parse().unwrap(), false);
        assert_eq!(r.to_string(), "~0");
        assert_eq!(r.identity_result(), IdentityResult::EqualAfterRounding);
        assert_eq!(r.first_quantity(), r.second_quantity());
    }

    #[test]
    fn missing_locale_data_uses_defaults() {
        let f = NumberRangeFormatter::try_new(
            RangeSettings::new("sw")
                .formatter(plain_plan())
                .data_provider(Arc::new(StaticRangeData::empty())),
        )
        .unwrap();
        assert_eq!(f.format(&Decimal::from(1), &Decimal::from(2), false).to_string(), "1\u{2013}2");
        assert_eq!(f.format(&Decimal::from(2), &Decimal::from(2), false).to_string(), "~2");
    }

    #[test]
    fn bad_locale_is_an_error() {
        assert!(NumberRangeFormatter::for_locale("not a locale!").is_err());
    }
}
