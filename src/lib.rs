//! Localized formatting of numeric ranges such as "3–5 meters", "~5" or "$3 – $5".
//!
//! A [`NumberRangeFormatter`] runs both ends of a range through a value-formatting
//! plan, decides whether the pair should print as a range, an approximation or a
//! single value, and merges decorations the two values share.

mod assembler;
mod boundaries;
mod collapse;
mod decoration;
mod engine;
mod error;
mod identity;
mod locale;
mod locale_data;
mod micros;
mod pattern;
mod plan;
mod plural_ranges;
mod result;
mod text;

pub use boundaries::RangeBoundaries;
pub use collapse::{CollapsePlan, RangeCollapse};
pub use decoration::{Affix, Decoration, DecorationFamily, PluralBinding, Signum};
pub use engine::{NumberRangeFormatter, RangeSettings};
pub use error::{Error, Result};
pub use identity::{IdentityFallback, IdentityResult};
pub use locale_data::{MiscPatterns, NumberingSystem, RangeData, RangeDataProvider, StaticRangeData};
pub use micros::{FnPlan, MicroProps, ValueFormattingPlan, write_affixes, write_number};
pub use pattern::{
    DEFAULT_APPROXIMATELY_PATTERN, DEFAULT_RANGE_PATTERN, RangePattern, SimplePattern,
    approximately_decoration,
};
pub use plan::{
    CurrencyDisplay, DecimalOptions, DecimalPlan, Notation, SignDisplay, Style, UnitDisplay,
    currency_digits,
};
pub use plural_ranges::{PluralRangeData, StandardPluralRanges};
pub use result::{FormattedRange, PartSource, RangePart};
pub use text::{Field, FieldedString};

pub use fixed_decimal::Decimal;
