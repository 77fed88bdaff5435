//! Which decoration layers of a range may be printed once for both values.

use crate::micros::MicroProps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RangeCollapse {
    /// Merge units longer than one code point, e.g. "3–5 meters" but "3%–5%".
    #[default]
    Auto,
    /// Never merge, e.g. "3 meters–5 meters".
    None,
    /// Merge only currency, percent and measure units.
    Unit,
    /// Merge every equivalent layer, including notation.
    All,
}

/// Per-layer merge decision. A layer is only merged if every layer outside it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollapsePlan {
    pub inner: bool,
    pub middle: bool,
    pub outer: bool,
}

impl CollapsePlan {
    pub fn new(policy: RangeCollapse, first: &MicroProps, second: &MicroProps) -> Self {
        if policy == RangeCollapse::None {
            return Self::default();
        }

        let outer = first.outer.equivalent_to(&second.outer);
        if !outer {
            return Self::default();
        }

        let mut middle = first.middle.equivalent_to(&second.middle);
        if !middle {
            return Self {
                outer,
                ..Self::default()
            };
        }

        // Equivalent by now, so the first value's decoration speaks for both.
        let decoration = &first.middle;
        match policy {
            RangeCollapse::Unit => {
                if !decoration.fields().any(|f| f.is_unit_like()) {
                    middle = false;
                }
            }
            RangeCollapse::Auto => {
                if decoration.code_point_count() <= 1 {
                    middle = false;
                }
            }
            RangeCollapse::All | RangeCollapse::None => {}
        }

        let inner = middle
            && policy == RangeCollapse::All
            && first.inner.equivalent_to(&second.inner);
        Self {
            inner,
            middle,
            outer,
        }
    }

    /// Whether some non-empty layer is printed once per value.
    pub fn repeats_any(&self, first: &MicroProps) -> bool {
        (!self.inner && first.inner.code_point_count() > 0)
            || (!self.middle && first.middle.code_point_count() > 0)
            || (!self.outer && first.outer.code_point_count() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::Decoration;
    use crate::text::Field;
    use fixed_decimal::Decimal;

    fn micros(n: i32, inner: &str, middle: Option<(&str, Field)>, outer: &str) -> MicroProps {
        let mut m = MicroProps::plain(Decimal::from(n), n.to_string());
        if !inner.is_empty() {
            m = m.with_inner(Decoration::empty().with_suffix(inner, Some(Field::ExponentSymbol)));
        }
        if let Some((text, field)) = middle {
            m = m.with_middle(Decoration::empty().with_suffix(text, Some(field)));
        }
        if !outer.is_empty() {
            m = m.with_outer(Decoration::empty().with_prefix(outer, Some(Field::Sign)));
        }
        m
    }

    #[test]
    fn none_never_collapses() {
        let a = micros(3, "E3", Some((" kg", Field::MeasureUnit)), "+");
        let b = micros(5, "E3", Some((" kg", Field::MeasureUnit)), "+");
        assert_eq!(CollapsePlan::new(RangeCollapse::None, &a, &b), CollapsePlan::default());
    }

    #[test]
    fn differing_outer_blocks_everything() {
        let a = micros(3, "E3", Some((" kg", Field::MeasureUnit)), "-");
        let b = micros(5, "E3", Some((" kg", Field::MeasureUnit)), "");
        assert_eq!(CollapsePlan::new(RangeCollapse::All, &a, &b), CollapsePlan::default());
    }

    #[test]
    fn auto_skips_single_code_point_units() {
        let a = micros(3, "", Some(("%", Field::Percent)), "");
        let b = micros(5, "", Some(("%", Field::Percent)), "");
        let plan = CollapsePlan::new(RangeCollapse::Auto, &a, &b);
        assert!(plan.outer);
        assert!(!plan.middle);
        assert!(plan.repeats_any(&a));
    }

    #[test]
    fn auto_merges_long_units_but_not_notation() {
        let a = micros(3, "E3", Some((" kg", Field::MeasureUnit)), "");
        let b = micros(5, "E3", Some((" kg", Field::MeasureUnit)), "");
        let plan = CollapsePlan::new(RangeCollapse::Auto, &a, &b);
        assert_eq!(plan, CollapsePlan { inner: false, middle: true, outer: true });
    }

    #[test]
    fn unit_requires_unit_field() {
        let a = micros(3, "", Some((" apples", Field::Literal)), "");
        let b = micros(5, "", Some((" apples", Field::Literal)), "");
        assert!(!CollapsePlan::new(RangeCollapse::Unit, &a, &b).middle);

        let a = micros(3, "", Some(("%", Field::Percent)), "");
        let b = micros(5, "", Some(("%", Field::Percent)), "");
        assert!(CollapsePlan::new(RangeCollapse::Unit, &a, &b).middle);
    }

    #[test]
    fn all_merges_notation() {
        let a = micros(3, "E3", Some(("%", Field::Percent)), "");
        let b = micros(5, "E3", Some(("%", Field::Percent)), "");
        let plan = CollapsePlan::new(RangeCollapse::All, &a, &b);
        assert_eq!(plan, CollapsePlan { inner: true, middle: true, outer: true });
        assert!(!plan.repeats_any(&a));
    }

    #[test]
    fn all_keeps_differing_notation_apart() {
        let a = micros(3, "E3", Some(("%", Field::Percent)), "");
        let b = micros(5, "E4", Some(("%", Field::Percent)), "");
        let plan = CollapsePlan::new(RangeCollapse::All, &a, &b);
        assert!(plan.middle);
        assert!(!plan.inner);
    }
}
