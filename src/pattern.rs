//! Compiled `{0}`/`{1}` placeholder patterns for joining and approximating values.

use crate::boundaries::RangeBoundaries;
use crate::decoration::Decoration;
use crate::error::{Error, Result};
use crate::text::{Field, FieldedString};

pub const DEFAULT_RANGE_PATTERN: &str = "{0}\u{2013}{1}";
pub const DEFAULT_APPROXIMATELY_PATTERN: &str = "~{0}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Argument(usize),
}

/// A message pattern with numbered placeholders.
///
/// Apostrophes quote: `''` is a literal apostrophe and `'{0}'` is literal text.
/// A lone apostrophe not followed by a brace is kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplePattern {
    segments: Vec<Segment>,
    arg_count: usize,
}

impl SimplePattern {
    pub fn compile(pattern: &str, min_args: usize, max_args: usize) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut arg_count = 0;
        let mut in_quote = false;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                } else if in_quote {
                    in_quote = false;
                } else if matches!(chars.peek(), Some('{') | Some('}')) {
                    in_quote = true;
                } else {
                    literal.push('\'');
                }
                continue;
            }
            if in_quote || c != '{' {
                literal.push(c);
                continue;
            }

            let mut digits = String::new();
            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(d) if d.is_ascii_digit() => digits.push(d),
                    _ => return Err(Error::pattern(pattern, "malformed placeholder")),
                }
            }
            if digits.is_empty() {
                return Err(Error::pattern(pattern, "empty placeholder"));
            }
            let index: usize = digits
                .parse()
                .map_err(|_| Error::pattern(pattern, format!("placeholder {{{digits}}} is out of range")))?;
            if index >= max_args {
                return Err(Error::pattern(
                    pattern,
                    format!("placeholder {{{index}}} exceeds {max_args} arguments"),
                ));
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Argument(index));
            arg_count = arg_count.max(index + 1);
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        if arg_count < min_args {
            return Err(Error::pattern(
                pattern,
                format!("expected at least {min_args} arguments, found {arg_count}"),
            ));
        }
        Ok(Self {
            segments,
            arg_count,
        })
    }

    pub fn arg_count(&self) -> usize {
        self.arg_count
    }

    /// Literal text around the placeholders, in order. Requires placeholders
    /// `{0}`, `{1}`, ... each appearing exactly once in ascending order.
    fn literals_between_args(&self) -> Option<Vec<String>> {
        let mut out = vec![String::new()];
        let mut next_arg = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    if let Some(last) = out.last_mut() {
                        last.push_str(text);
                    }
                }
                Segment::Argument(i) if *i == next_arg => {
                    next_arg += 1;
                    out.push(String::new());
                }
                Segment::Argument(_) => return None,
            }
        }
        (next_arg == self.arg_count).then_some(out)
    }
}

/// Two-slot template joining the start and end of a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangePattern {
    prefix: String,
    infix: String,
    suffix: String,
}

impl RangePattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let compiled = SimplePattern::compile(pattern, 2, 2)?;
        let mut literals = compiled
            .literals_between_args()
            .ok_or_else(|| Error::pattern(pattern, "placeholders must appear once, in order"))?
            .into_iter();
        let mut next = || literals.next().unwrap_or_default();
        Ok(Self {
            prefix: next(),
            infix: next(),
            suffix: next(),
        })
    }

    /// Writes the pattern's literals at `index` with empty value regions between them.
    pub fn expand(&self, out: &mut FieldedString, index: usize) -> RangeBoundaries {
        let prefix = out.insert(index, &self.prefix, None);
        let infix = out.insert(index + prefix, &self.infix, None);
        let suffix = out.insert(index + prefix + infix, &self.suffix, None);
        RangeBoundaries::new(index, prefix, infix, suffix)
    }
}

impl Default for RangePattern {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            infix: "\u{2013}".to_string(),
            suffix: String::new(),
        }
    }
}

/// Builds the decoration that marks an approximate value, e.g. `~{0}`.
pub fn approximately_decoration(pattern: &str) -> Result<Decoration> {
    let compiled = SimplePattern::compile(pattern, 1, 1)?;
    let literals = compiled
        .literals_between_args()
        .ok_or_else(|| Error::pattern(pattern, "placeholder must appear once"))?;
    let mut decoration = Decoration::empty();
    if let Some(prefix) = literals.first().filter(|s| !s.is_empty()) {
        decoration = decoration.with_prefix(prefix.clone(), Some(Field::ApproximatelySign));
    }
    if let Some(suffix) = literals.get(1).filter(|s| !s.is_empty()) {
        decoration = decoration.with_suffix(suffix.clone(), Some(Field::ApproximatelySign));
    }
    Ok(decoration)
}
