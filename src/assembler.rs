//! Laying out "start–end" with the join pattern and the values' decorations.

use crate::boundaries::RangeBoundaries;
use crate::collapse::CollapsePlan;
use crate::decoration::Decoration;
use crate::micros::{MicroProps, write_number};
use crate::pattern::RangePattern;
use crate::plural_ranges::{PluralRangeData, resolve_decoration};
use crate::text::FieldedString;

/// Writes both values into `out` as a range, returning where each part landed.
pub(crate) fn format_range(
    out: &mut FieldedString,
    pattern: &RangePattern,
    plurals: &dyn PluralRangeData,
    collapse: CollapsePlan,
    first: &MicroProps,
    second: &MicroProps,
) -> RangeBoundaries {
    let mut b = pattern.expand(out, 0);

    // Values that each carry their own decoration get a space on both sides of the
    // separator so "3 kg–5 kg" does not run together.
    if collapse.repeats_any(first) {
        let n = out.insert_code_point(b.index1(), ' ', None);
        b.grow_infix(n);
        let n = out.insert_code_point(b.index2(), ' ', None);
        b.grow_infix(n);
    }

    b.grow_first(write_number(first, out, b.index0()));
    b.grow_second(write_number(second, out, b.index2()));

    let layers = [
        (collapse.inner, &first.inner, &second.inner),
        (collapse.middle, &first.middle, &second.middle),
        (collapse.outer, &first.outer, &second.outer),
    ];
    for (collapsed, d1, d2) in layers {
        b = apply_layer(out, b, plurals, collapsed, d1, d2);
    }
    b
}

fn apply_layer(
    out: &mut FieldedString,
    mut b: RangeBoundaries,
    plurals: &dyn PluralRangeData,
    collapsed: bool,
    first: &Decoration,
    second: &Decoration,
) -> RangeBoundaries {
    if collapsed {
        let merged = resolve_decoration(plurals, first, second);
        let total = merged.apply(out, b.index0(), b.index3());
        b.grow_shared(merged.prefix_len(), total);
    } else {
        b.grow_first(first.apply(out, b.index0(), b.index1()));
        b.grow_second(second.apply(out, b.index2(), b.index3()));
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collapse::RangeCollapse;
    use crate::decoration::{DecorationFamily, Signum};
    use crate::plural_ranges::StandardPluralRanges;
    use crate::text::Field;
    use fixed_decimal::Decimal;
    use icu::plurals::PluralCategory;
    use std::sync::Arc;

    fn plurals() -> StandardPluralRanges {
        StandardPluralRanges::new(&"en".parse().unwrap())
    }

    fn render(policy: RangeCollapse, pattern: &str, a: &MicroProps, b: &MicroProps) -> String {
        let mut out = FieldedString::new();
        let plan = CollapsePlan::new(policy, a, b);
        format_range(&mut out, &RangePattern::parse(pattern).unwrap(), &plurals(), plan, a, b);
        out.to_string()
    }

    fn with_unit(n: i32, unit: &str) -> MicroProps {
        MicroProps::plain(Decimal::from(n), n.to_string())
            .with_middle(Decoration::empty().with_suffix(unit, Some(Field::MeasureUnit)))
    }

    #[test]
    fn bare_numbers_need_no_spacing() {
        let a = MicroProps::plain(Decimal::from(3), "3");
        let b = MicroProps::plain(Decimal::from(5), "5");
        assert_eq!(render(RangeCollapse::Auto, "{0}-{1}", &a, &b), "3-5");
    }

    #[test]
    fn merged_unit_prints_once() {
        let (a, b) = (with_unit(3, " meters"), with_unit(5, " meters"));
        assert_eq!(render(RangeCollapse::Unit, "{0}-{1}", &a, &b), "3-5 meters");
    }

    #[test]
    fn repeated_unit_adds_spacing() {
        let (a, b) = (with_unit(3, " meters"), with_unit(5, " meters"));
        assert_eq!(render(RangeCollapse::None, "{0}-{1}", &a, &b), "3 meters - 5 meters");
    }

    #[test]
    fn pattern_prefix_and_suffix_stay_outside() {
        let (a, b) = (with_unit(3, " kg"), with_unit(5, " kg"));
        assert_eq!(render(RangeCollapse::Auto, "[{0}..{1}]", &a, &b), "[3..5 kg]");
    }

    #[test]
    fn merged_outer_wraps_separately_decorated_values() {
        let sign = Decoration::empty().with_prefix("-", Some(Field::Sign));
        let a = MicroProps::plain(Decimal::from(3), "3")
            .with_middle(Decoration::empty().with_prefix("$", Some(Field::Currency)))
            .with_outer(sign.clone());
        let b = MicroProps::plain(Decimal::from(5), "5")
            .with_middle(Decoration::empty().with_prefix("$", Some(Field::Currency)))
            .with_outer(sign);
        assert_eq!(render(RangeCollapse::Auto, "{0}\u{2013}{1}", &a, &b), "-$3 \u{2013} $5");
    }

    #[test]
    fn collapse_all_nests_like_a_single_value() {
        let mk = |n: i32| {
            MicroProps::plain(Decimal::from(n), n.to_string())
                .with_inner(Decoration::empty().with_suffix("E3", Some(Field::ExponentSymbol)))
                .with_middle(Decoration::empty().with_suffix(" kg", Some(Field::MeasureUnit)))
                .with_outer(Decoration::empty().with_prefix("+", Some(Field::Sign)))
        };
        assert_eq!(render(RangeCollapse::All, "{0}-{1}", &mk(3), &mk(5)), "+3-5E3 kg");
        assert_eq!(render(RangeCollapse::Auto, "{0}-{1}", &mk(3), &mk(5)), "+3E3 - 5E3 kg");
    }

    #[test]
    fn merged_plural_decoration_uses_range_form() {
        let family = Arc::new(
            DecorationFamily::new("duration-day")
                .with_form(PluralCategory::One, "", " day", Field::MeasureUnit)
                .with_form(PluralCategory::Other, "", " days", Field::MeasureUnit),
        );
        let a = MicroProps::plain(Decimal::from(1), "1")
            .with_middle(family.decoration(Signum::Positive, PluralCategory::One).unwrap());
        let b = MicroProps::plain(Decimal::from(2), "2")
            .with_middle(family.decoration(Signum::Positive, PluralCategory::Other).unwrap());
        assert_eq!(render(RangeCollapse::Auto, "{0}\u{2013}{1}", &a, &b), "1\u{2013}2 days");
        assert_eq!(
            render(RangeCollapse::None, "{0}\u{2013}{1}", &a, &b),
            "1 day \u{2013} 2 days"
        );
    }

    #[test]
    fn value_regions_survive_shared_decorations() {
        let (a, b) = (with_unit(3, " kg"), with_unit(15, " kg"));
        let mut out = FieldedString::new();
        let plan = CollapsePlan::new(RangeCollapse::Auto, &a, &b);
        let pattern = RangePattern::parse("{0}-{1}").unwrap();
        let bounds = format_range(&mut out, &pattern, &plurals(), plan, &a, &b);
        let first = bounds.first_region();
        let second = bounds.second_region();
        assert_eq!(out.slice(first.start, first.end), "3");
        assert_eq!(out.slice(second.start, second.end), "15");
    }
}
