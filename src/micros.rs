//! The contract between the range engine and a single-value formatting plan.

use std::fmt;

use fixed_decimal::Decimal;

use crate::decoration::Decoration;
use crate::text::{Field, FieldedString};

/// Everything a plan produced for one value: the rounded quantity, its numeric text,
/// and the three decoration layers from innermost to outermost.
#[derive(Debug, Clone)]
pub struct MicroProps {
    pub quantity: Decimal,
    pub number: Vec<(String, Field)>,
    /// Notation, e.g. a scientific exponent.
    pub inner: Decoration,
    /// Unit, percent or currency.
    pub middle: Decoration,
    /// Sign and other whole-value affixes.
    pub outer: Decoration,
}

impl MicroProps {
    /// Micro props with undecorated numeric text; the text is reported as one integer run.
    pub fn plain(quantity: Decimal, number: impl Into<String>) -> Self {
        Self {
            quantity,
            number: vec![(number.into(), Field::Integer)],
            inner: Decoration::empty(),
            middle: Decoration::empty(),
            outer: Decoration::empty(),
        }
    }

    pub fn with_inner(mut self, decoration: Decoration) -> Self {
        self.inner = decoration;
        self
    }

    pub fn with_middle(mut self, decoration: Decoration) -> Self {
        self.middle = decoration;
        self
    }

    pub fn with_outer(mut self, decoration: Decoration) -> Self {
        self.outer = decoration;
        self
    }

    pub(crate) fn layers_equivalent(&self, other: &MicroProps) -> bool {
        self.inner.equivalent_to(&other.inner)
            && self.middle.equivalent_to(&other.middle)
            && self.outer.equivalent_to(&other.outer)
    }
}

/// Turns one quantity into numeric text plus decorations.
///
/// Plans are shared across threads by the range formatter, so they must be
/// immutable after construction.
pub trait ValueFormattingPlan: Send + Sync + fmt::Debug {
    fn preprocess(&self, quantity: &Decimal) -> MicroProps;
}

/// Closure plans, mostly useful for tests and one-off layouts.
pub struct FnPlan<F>(pub F);

impl<F> fmt::Debug for FnPlan<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnPlan")
    }
}

impl<F> ValueFormattingPlan for FnPlan<F>
where
    F: Fn(&Decimal) -> MicroProps + Send + Sync,
{
    fn preprocess(&self, quantity: &Decimal) -> MicroProps {
        (self.0)(quantity)
    }
}

/// Writes the numeric text at `index`, returning its length in code points.
pub fn write_number(micros: &MicroProps, out: &mut FieldedString, index: usize) -> usize {
    let mut length = 0;
    for (text, field) in &micros.number {
        length += out.insert(index + length, text, Some(*field));
    }
    length
}

/// Applies the inner, middle and outer decorations around `out[start..end]`.
pub fn write_affixes(micros: &MicroProps, out: &mut FieldedString, start: usize, end: usize) -> usize {
    let mut length = micros.inner.apply(out, start, end);
    length += micros.middle.apply(out, start, end + length);
    length += micros.outer.apply(out, start, end + length);
    length
}
