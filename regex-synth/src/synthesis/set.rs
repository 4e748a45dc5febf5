use std::collections::BTreeSet;

use regex_syntax::hir::{ClassUnicode, ClassUnicodeRange};

use crate::{
    expr::{push_escaped_char, Expression},
    unicode::{self, UnicodeClass},
    Error, Result,
};

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// A set of Unicode scalar values that renders to a minimal bracket expression.
///
/// The set algebra mutates the receiver in place and returns it for chaining.
/// [`Clone`] the set first if the original is still needed.
///
/// ```
/// use regex_synth::{synthesis::CodepointSet, Expression};
///
/// let mut set = CodepointSet::from_range('A' as u32, 'Z' as u32)?;
/// set.union(&CodepointSet::from_chars("adfhZ".chars()));
/// assert_eq!(set.to_regex(), "[A-Zadfh]");
///
/// set.subtract(&CodepointSet::from_range('B' as u32, 'Y' as u32)?);
/// assert_eq!(set.to_regex(), "[AZadfh]");
/// # Ok::<(), regex_synth::Error>(())
/// ```
///
/// ## Negated operands
/// A negated set stands for a conceptually infinite complement, which cannot
/// be enumerated. [`union`](Self::union) and [`intersect`](Self::intersect)
/// therefore treat a negated operand as a subtraction of its points:
/// ```
/// use regex_synth::{synthesis::CodepointSet, Expression};
///
/// let mut set = CodepointSet::from_chars("abc".chars());
/// set.union(CodepointSet::from_chars("b".chars()).negate());
/// assert_eq!(set.to_regex(), "[ac]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodepointSet {
    points: ClassUnicode,
    negated: bool,
    /// Pre-rendered classes like `\p{Greek}`. Not expanded into `points`.
    classes: BTreeSet<String>,
}

impl Default for CodepointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CodepointSet {
    pub fn new() -> Self {
        Self {
            points: ClassUnicode::empty(),
            negated: false,
            classes: BTreeSet::new(),
        }
    }

    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            points: ClassUnicode::new(chars.into_iter().map(|c| ClassUnicodeRange::new(c, c))),
            ..Self::new()
        }
    }

    pub fn from_range(start: u32, end: u32) -> Result<Self> {
        let mut set = Self::new();
        set.add_range(start, end)?;
        Ok(set)
    }

    /// `start..=end`, or `end..=start` if they are out of order.
    pub(crate) fn span(start: char, end: char) -> Self {
        Self {
            points: ClassUnicode::new([ClassUnicodeRange::new(start, end)]),
            ..Self::new()
        }
    }

    /// Fails with [`Error::InvalidCodepoint`] if `cp` is not a Unicode scalar value.
    pub fn add_char(&mut self, cp: u32) -> Result<&mut Self> {
        let c = char::from_u32(cp).ok_or(Error::InvalidCodepoint(cp))?;
        Ok(self.push_char(c))
    }

    pub fn push_char(&mut self, c: char) -> &mut Self {
        self.points.push(ClassUnicodeRange::new(c, c));
        self
    }

    /// Adds `start..=end`. Surrogate halves inside the range are skipped.
    pub fn add_range(&mut self, start: u32, end: u32) -> Result<&mut Self> {
        for cp in [start, end] {
            if !unicode::is_valid_codepoint(cp) {
                return Err(Error::InvalidCodepoint(cp));
            }
        }
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }

        let mut push = |start: u32, end: u32| {
            if let (Some(start), Some(end)) = (char::from_u32(start), char::from_u32(end)) {
                if start <= end {
                    self.points.push(ClassUnicodeRange::new(start, end));
                }
            }
        };
        if end < SURROGATE_START || start > SURROGATE_END {
            push(start, end);
        } else {
            if start < SURROGATE_START {
                push(start, SURROGATE_START - 1);
            }
            if end > SURROGATE_END {
                push(SURROGATE_END + 1, end);
            }
        }
        Ok(self)
    }

    /// Adds the points of `other`, or removes them if `other` is negated.
    pub fn union(&mut self, other: &CodepointSet) -> &mut Self {
        if other.negated {
            self.points.difference(&other.points);
        } else {
            self.points.union(&other.points);
        }
        self
    }

    /// Keeps only the points also in `other`, or removes the points of `other` if it is negated.
    pub fn intersect(&mut self, other: &CodepointSet) -> &mut Self {
        if other.negated {
            self.points.difference(&other.points);
        } else {
            self.points.intersect(&other.points);
        }
        self
    }

    /// Removes the points of `other`, whether it is negated or not.
    ///
    /// Equivalent to intersecting with the negation of `other`.
    pub fn subtract(&mut self, other: &CodepointSet) -> &mut Self {
        self.points.difference(&other.points);
        self
    }

    /// Flips the negation flag. The points are unchanged.
    pub fn negate(&mut self) -> &mut Self {
        self.negated = !self.negated;
        self
    }

    /// Attaches a pre-rendered class fragment verbatim, e.g. `\p{Greek}` or `[:alpha:]`.
    pub fn with_class(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.classes.insert(fragment.into());
        self
    }

    pub fn with_unicode_class(&mut self, class: &UnicodeClass, negated: bool) -> &mut Self {
        self.with_class(class.to_regex(negated))
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Returns true if the set has no points. Attached classes are not counted.
    pub fn is_empty(&self) -> bool {
        self.points.ranges().is_empty()
    }

    /// The number of points.
    pub fn len(&self) -> usize {
        self.points
            .iter()
            .map(|r| {
                let (start, end) = (r.start() as u32, r.end() as u32);
                let mut len = end - start + 1;
                if start < SURROGATE_START && end > SURROGATE_END {
                    len -= SURROGATE_END - SURROGATE_START + 1;
                }
                len as usize
            })
            .sum()
    }

    pub fn contains(&self, c: char) -> bool {
        self.points
            .ranges()
            .binary_search_by(|r| {
                if r.end() < c {
                    core::cmp::Ordering::Less
                } else if r.start() > c {
                    core::cmp::Ordering::Greater
                } else {
                    core::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Iterates the points in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.points.iter().flat_map(|r| r.start()..=r.end())
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Runs of consecutive code points as `(first, last)`.
    ///
    /// `ClassUnicode` joins ranges across the surrogate block, but `U+D7FF`
    /// and `U+E000` are not consecutive code points, so such ranges are split.
    fn runs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.points.iter().flat_map(|r| {
            let (start, end) = (r.start(), r.end());
            if (start as u32) < SURROGATE_START && (end as u32) > SURROGATE_END {
                [
                    Some((start, '\u{D7FF}')),
                    Some(('\u{E000}', end)),
                ]
            } else {
                [Some((start, end)), None]
            }
            .into_iter()
            .flatten()
        })
    }
}

/// Escapes a character for use inside a bracket expression.
///
/// - ISO control characters become `\xHH`.
/// - Supplementary characters become `\x{hex}`.
/// - `^ ] [ \ / - " ' `` ` are backslash-escaped.
pub(crate) fn push_class_char(out: &mut String, c: char) {
    if unicode::is_iso_control(c) {
        out.push_str(&format!(r"\x{:02X}", c as u32));
    } else if unicode::is_supplementary(c) {
        out.push_str(&format!(r"\x{{{:x}}}", c as u32));
    } else {
        if matches!(c, '^' | ']' | '[' | '\\' | '/' | '-' | '"' | '\'' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
}

impl Expression for CodepointSet {
    fn to_regex(&self) -> String {
        let ranges = self.points.ranges();
        if ranges.is_empty() && self.classes.is_empty() {
            return String::new();
        }

        // [a] => a
        if !self.negated && self.classes.is_empty() {
            if let [r] = ranges {
                if r.start() == r.end() {
                    let mut s = String::new();
                    let c = r.start();
                    if unicode::is_iso_control(c) {
                        push_class_char(&mut s, c);
                    } else {
                        push_escaped_char(&mut s, c);
                    }
                    return s;
                }
            }
        }

        let mut s = String::from("[");
        if self.negated {
            s.push('^');
        }
        for (first, last) in self.runs() {
            push_class_char(&mut s, first);
            match last as u32 - first as u32 {
                0 => {}
                // [ab] is shorter than [a-b]
                1 => push_class_char(&mut s, last),
                _ => {
                    s.push('-');
                    push_class_char(&mut s, last);
                }
            }
        }
        for class in &self.classes {
            s.push_str(class);
        }
        s.push(']');
        s
    }
}
