//! Prefix/suffix decorations wrapped around a value's numeric text.

use std::sync::Arc;

use fixed_decimal::Decimal;
use icu::plurals::PluralCategory;

use crate::text::{Field, FieldedString};

/// Sign of a formatted value as seen by a plural-bound decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signum {
    Negative,
    Zero,
    Positive,
}

impl Signum {
    pub fn of(value: &Decimal) -> Self {
        if value.absolute.is_zero() {
            Signum::Zero
        } else if value.sign == fixed_decimal::Sign::Negative {
            Signum::Negative
        } else {
            Signum::Positive
        }
    }
}

/// One run of decoration text and the field it is reported as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affix {
    pub text: String,
    pub field: Option<Field>,
}

impl Affix {
    pub fn new(text: impl Into<String>, field: Option<Field>) -> Self {
        Self {
            text: text.into(),
            field,
        }
    }
}

/// Ties a decoration to the family that produced it, so a merged range can
/// ask the family for a different plural form.
#[derive(Debug, Clone)]
pub struct PluralBinding {
    pub family: Arc<DecorationFamily>,
    pub sign: Signum,
    pub category: PluralCategory,
}

/// Text wrapped around a numeral: a prefix before it and a suffix after it.
#[derive(Debug, Clone, Default)]
pub struct Decoration {
    prefix: Vec<Affix>,
    suffix: Vec<Affix>,
    plural: Option<PluralBinding>,
}

impl Decoration {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, text: impl Into<String>, field: Option<Field>) -> Self {
        self.prefix.push(Affix::new(text, field));
        self
    }

    pub fn with_suffix(mut self, text: impl Into<String>, field: Option<Field>) -> Self {
        self.suffix.push(Affix::new(text, field));
        self
    }

    pub fn plural(&self) -> Option<&PluralBinding> {
        self.plural.as_ref()
    }

    pub fn prefix_text(&self) -> String {
        self.prefix.iter().map(|a| a.text.as_str()).collect()
    }

    pub fn suffix_text(&self) -> String {
        self.suffix.iter().map(|a| a.text.as_str()).collect()
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix.iter().map(|a| a.text.chars().count()).sum()
    }

    pub fn code_point_count(&self) -> usize {
        self.prefix_len() + self.suffix.iter().map(|a| a.text.chars().count()).sum::<usize>()
    }

    pub fn contains_field(&self, field: Field) -> bool {
        self.prefix
            .iter()
            .chain(self.suffix.iter())
            .any(|a| a.field == Some(field))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.prefix
            .iter()
            .chain(self.suffix.iter())
            .filter_map(|a| a.field)
    }

    /// Whether the two decorations render the same thing regardless of the value.
    ///
    /// Decorations from one plural family with the same sign are equivalent even
    /// when they currently hold different plural forms; anything else must match
    /// text and fields exactly.
    pub fn equivalent_to(&self, other: &Decoration) -> bool {
        match (&self.plural, &other.plural) {
            (Some(a), Some(b)) => Arc::ptr_eq(&a.family, &b.family) && a.sign == b.sign,
            _ => self.prefix == other.prefix && self.suffix == other.suffix,
        }
    }

    /// Wraps `out[start..end]`, returning the number of code points inserted.
    pub fn apply(&self, out: &mut FieldedString, start: usize, end: usize) -> usize {
        let mut at = end;
        for affix in &self.suffix {
            at += out.insert(at, &affix.text, affix.field);
        }
        let suffix_len = at - end;
        let mut at = start;
        for affix in &self.prefix {
            at += out.insert(at, &affix.text, affix.field);
        }
        (at - start) + suffix_len
    }
}

#[derive(Debug, Clone)]
struct FamilyForm {
    sign: Option<Signum>,
    category: PluralCategory,
    prefix: Vec<Affix>,
    suffix: Vec<Affix>,
}

/// A set of decorations that differ only by sign and plural category,
/// such as the long names of one unit.
#[derive(Debug, Clone)]
pub struct DecorationFamily {
    name: String,
    forms: Vec<FamilyForm>,
}

impl DecorationFamily {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            forms: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a form used for every sign.
    pub fn with_form(self, category: PluralCategory, prefix: &str, suffix: &str, field: Field) -> Self {
        self.with_signed_form(None, category, prefix, suffix, field)
    }

    /// Registers a form for one sign; takes precedence over a form registered for every sign.
    pub fn with_signed_form(
        mut self,
        sign: Option<Signum>,
        category: PluralCategory,
        prefix: &str,
        suffix: &str,
        field: Field,
    ) -> Self {
        let affixes = |text: &str| {
            if text.is_empty() {
                Vec::new()
            } else {
                vec![Affix::new(text, Some(field))]
            }
        };
        self.forms.push(FamilyForm {
            sign,
            category,
            prefix: affixes(prefix),
            suffix: affixes(suffix),
        });
        self
    }

    fn find(&self, sign: Signum, category: PluralCategory) -> Option<&FamilyForm> {
        self.forms
            .iter()
            .find(|f| f.sign == Some(sign) && f.category == category)
            .or_else(|| self.forms.iter().find(|f| f.sign.is_none() && f.category == category))
    }

    /// The decoration for `(sign, category)`. Categories the family has no text for
    /// use its `Other` form.
    pub fn decoration(self: &Arc<Self>, sign: Signum, category: PluralCategory) -> Option<Decoration> {
        let form = self
            .find(sign, category)
            .or_else(|| self.find(sign, PluralCategory::Other))?;
        Some(Decoration {
            prefix: form.prefix.clone(),
            suffix: form.suffix.clone(),
            plural: Some(PluralBinding {
                family: Arc::clone(self),
                sign,
                category,
            }),
        })
    }
}
