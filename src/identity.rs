//! Deciding what to print when the two ends of a range are the same.

use fixed_decimal::Decimal;

use crate::micros::MicroProps;

/// How aggressively a range whose ends are equal is simplified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum IdentityFallback {
    /// Print one value, e.g. "5".
    SingleValue,
    /// Print "~5" unless the values were equal before rounding, then "5".
    ApproximateOrSingleValue,
    /// Print "~5".
    #[default]
    Approximately,
    /// Always print both values, e.g. "5–5".
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityResult {
    EqualBeforeRounding,
    EqualAfterRounding,
    NotEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RangeAction {
    Range,
    Approximate,
    Single,
}

/// Classifies the pair. Operands with differing decorations are never equal.
pub(crate) fn classify(
    first: &MicroProps,
    second: &MicroProps,
    equal_before_rounding: bool,
) -> IdentityResult {
    if !first.layers_equivalent(second) {
        IdentityResult::NotEqual
    } else if equal_before_rounding {
        IdentityResult::EqualBeforeRounding
    } else if quantities_equal(&first.quantity, &second.quantity) {
        IdentityResult::EqualAfterRounding
    } else {
        IdentityResult::NotEqual
    }
}

// Zero compares equal to negative zero.
fn quantities_equal(a: &Decimal, b: &Decimal) -> bool {
    if a.absolute.is_zero() && b.absolute.is_zero() {
        return true;
    }
    a == b
}

pub(crate) fn action(fallback: IdentityFallback, result: IdentityResult) -> RangeAction {
    use IdentityFallback as F;
    use IdentityResult as R;
    match (fallback, result) {
        (F::Range, _) | (_, R::NotEqual) => RangeAction::Range,
        (F::Approximately, R::EqualAfterRounding | R::EqualBeforeRounding)
        | (F::ApproximateOrSingleValue, R::EqualAfterRounding) => RangeAction::Approximate,
        (F::ApproximateOrSingleValue, R::EqualBeforeRounding)
        | (F::SingleValue, R::EqualAfterRounding | R::EqualBeforeRounding) => RangeAction::Single,
    }
}
