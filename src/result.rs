use std::fmt;

use fixed_decimal::Decimal;

use crate::boundaries::RangeBoundaries;
use crate::identity::IdentityResult;
use crate::text::{Field, FieldedString};

/// Which operand a piece of output belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartSource {
    StartRange,
    EndRange,
    Shared,
}

impl PartSource {
    pub fn as_str(self) -> &'static str {
        match self {
            PartSource::StartRange => "startRange",
            PartSource::EndRange => "endRange",
            PartSource::Shared => "shared",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangePart {
    /// `None` for literal text from the join pattern or spacing.
    pub field: Option<Field>,
    pub source: PartSource,
    pub value: String,
}

impl RangePart {
    pub fn kind(&self) -> &'static str {
        self.field.map_or("literal", Field::as_str)
    }
}

/// A formatted range plus the information needed to inspect it.
#[derive(Debug, Clone)]
pub struct FormattedRange {
    text: FieldedString,
    // Present when both values were printed.
    boundaries: Option<RangeBoundaries>,
    first: Decimal,
    second: Decimal,
    identity: IdentityResult,
}

impl FormattedRange {
    pub(crate) fn new(
        text: FieldedString,
        boundaries: Option<RangeBoundaries>,
        first: Decimal,
        second: Decimal,
        identity: IdentityResult,
    ) -> Self {
        Self {
            text,
            boundaries,
            first,
            second,
            identity,
        }
    }

    pub fn identity_result(&self) -> IdentityResult {
        self.identity
    }

    /// The first quantity after rounding.
    pub fn first_quantity(&self) -> &Decimal {
        &self.first
    }

    /// The second quantity after rounding.
    pub fn second_quantity(&self) -> &Decimal {
        &self.second
    }

    pub fn fielded_text(&self) -> &FieldedString {
        &self.text
    }

    /// Output split into runs of one field from one source.
    pub fn parts(&self) -> Vec<RangePart> {
        let source_of = |i: usize| match &self.boundaries {
            Some(b) if b.first_region().contains(&i) => PartSource::StartRange,
            Some(b) if b.second_region().contains(&i) => PartSource::EndRange,
            _ => PartSource::Shared,
        };

        let mut parts: Vec<RangePart> = Vec::new();
        for (start, end, field) in self.text.runs() {
            let mut run_start = start;
            for i in start..end {
                if i + 1 == end || source_of(i + 1) != source_of(run_start) {
                    parts.push(RangePart {
                        field,
                        source: source_of(run_start),
                        value: self.text.slice(run_start, i + 1),
                    });
                    run_start = i + 1;
                }
            }
        }
        parts
    }
}

impl fmt::Display for FormattedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}
