use std::fmt;

/// Semantic label attached to a run of output text.
///
/// The set is closed per release but callers should not assume it is complete;
/// value-formatting plans are free to tag their decorations with any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Field {
    Integer,
    Fraction,
    Decimal,
    Group,
    Sign,
    Percent,
    PerMille,
    Currency,
    MeasureUnit,
    Compact,
    ExponentSymbol,
    ExponentSign,
    Exponent,
    ApproximatelySign,
    Literal,
}

impl Field {
    /// Fields that mark a decoration as a unit of measure for range collapsing.
    pub fn is_unit_like(self) -> bool {
        matches!(self, Field::Currency | Field::Percent | Field::MeasureUnit)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Integer => "integer",
            Field::Fraction => "fraction",
            Field::Decimal => "decimal",
            Field::Group => "group",
            Field::Sign => "sign",
            Field::Percent => "percentSign",
            Field::PerMille => "perMille",
            Field::Currency => "currency",
            Field::MeasureUnit => "unit",
            Field::Compact => "compact",
            Field::ExponentSymbol => "exponentSeparator",
            Field::ExponentSign => "exponentMinusSign",
            Field::Exponent => "exponentInteger",
            Field::ApproximatelySign => "approximatelySign",
            Field::Literal => "literal",
        }
    }
}

/// Code-point addressed text buffer that remembers the field of every code point.
///
/// All offsets are in code points, never bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldedString {
    chars: Vec<char>,
    fields: Vec<Option<Field>>,
}

impl FieldedString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Inserts `text` at code point `index`, returning the number of code points inserted.
    pub fn insert(&mut self, index: usize, text: &str, field: Option<Field>) -> usize {
        let before = self.chars.len();
        self.chars.splice(index..index, text.chars());
        let inserted = self.chars.len() - before;
        self.fields
            .splice(index..index, std::iter::repeat_n(field, inserted));
        inserted
    }

    pub fn insert_code_point(&mut self, index: usize, c: char, field: Option<Field>) -> usize {
        self.chars.insert(index, c);
        self.fields.insert(index, field);
        1
    }

    pub fn append(&mut self, text: &str, field: Option<Field>) -> usize {
        self.insert(self.chars.len(), text, field)
    }

    pub fn field_at(&self, index: usize) -> Option<Field> {
        self.fields.get(index).copied().flatten()
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Maximal runs of code points that share one field.
    pub(crate) fn runs(&self) -> Vec<(usize, usize, Option<Field>)> {
        let mut out = Vec::new();
        let mut start = 0;
        for i in 1..=self.fields.len() {
            if i == self.fields.len() || self.fields[i] != self.fields[start] {
                out.push((start, i, self.fields[start]));
                start = i;
            }
        }
        out
    }
}

impl fmt::Display for FieldedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_counts_code_points() {
        let mut s = FieldedString::new();
        assert_eq!(s.append("12", Some(Field::Integer)), 2);
        assert_eq!(s.insert(0, "\u{20AC}\u{A0}", Some(Field::Currency)), 2);
        assert_eq!(s.to_string(), "\u{20AC}\u{A0}12");
        assert_eq!(s.len(), 4);
        assert_eq!(s.field_at(0), Some(Field::Currency));
        assert_eq!(s.field_at(3), Some(Field::Integer));
    }

    #[test]
    fn insert_in_middle_shifts_fields() {
        let mut s = FieldedString::new();
        s.append("35", Some(Field::Integer));
        s.insert_code_point(1, '-', None);
        assert_eq!(s.to_string(), "3-5");
        assert_eq!(s.field_at(1), None);
        assert_eq!(s.field_at(2), Some(Field::Integer));
    }

    #[test]
    fn runs_group_adjacent_fields() {
        let mut s = FieldedString::new();
        s.append("3", Some(Field::Integer));
        s.append("-", None);
        s.append("5", Some(Field::Integer));
        s.append(" m", Some(Field::MeasureUnit));
        let runs = s.runs();
        assert_eq!(runs.len(), 4);
        assert_eq!(runs[3], (3, 5, Some(Field::MeasureUnit)));
    }

    #[test]
    fn empty_string_has_no_runs() {
        assert!(FieldedString::new().runs().is_empty());
    }
}
