/*!
The [`Expression`] capability shared by every synthesizer and by the [`dsl`](crate::dsl) combinators.

An expression renders itself into a self-contained piece of regex pattern
text. Rendering is a pure function of the expression's state at call time and
can be repeated any number of times.
*/
use core::fmt::{self, Write};

use crate::{unicode, Error, Result};

/// Something that renders to regex pattern text.
pub trait Expression {
    fn to_regex(&self) -> String;
}

impl<E: Expression + ?Sized> Expression for &E {
    #[inline]
    fn to_regex(&self) -> String {
        (**self).to_regex()
    }
}

impl<E: Expression + ?Sized> Expression for &mut E {
    #[inline]
    fn to_regex(&self) -> String {
        (**self).to_regex()
    }
}

impl<E: Expression + ?Sized> Expression for Box<E> {
    #[inline]
    fn to_regex(&self) -> String {
        (**self).to_regex()
    }
}

/// Pattern text that has already been rendered.
///
/// Most [`dsl`](crate::dsl) combinators return a `Fragment`: they render their
/// operands eagerly, so the result does not borrow the operands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// The text is used verbatim. No escaping is applied.
    pub fn raw(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Expression for Fragment {
    #[inline]
    fn to_regex(&self) -> String {
        self.0.clone()
    }
}

impl From<String> for Fragment {
    fn from(pattern: String) -> Self {
        Self(pattern)
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders each expression and concatenates the results.
pub(crate) fn render_all(expressions: &[&dyn Expression]) -> String {
    expressions.iter().map(|e| e.to_regex()).collect()
}

/// Escapes one character for use outside of a bracket expression.
///
/// Regex meta characters and `/` are backslash-escaped. ISO control characters
/// are written as `\xHH` and characters outside the Basic Multilingual Plane as
/// `\x{hex}`.
pub fn escape_char(c: char) -> String {
    let mut s = String::new();
    push_escaped_char(&mut s, c);
    s
}

pub(crate) fn push_escaped_char(out: &mut String, c: char) {
    if unicode::is_iso_control(c) {
        let _ = write!(out, r"\x{:02X}", c as u32);
        return;
    }
    if unicode::is_supplementary(c) {
        let _ = write!(out, r"\x{{{:x}}}", c as u32);
        return;
    }
    if regex_syntax::is_meta_character(c) || c == '/' {
        out.push('\\');
    }
    out.push(c);
}

/// Escapes every reserved character of `text` so it matches literally.
///
/// ```
/// use regex_synth::expr::escape_literal;
///
/// assert_eq!(escape_literal("https://"), r"https:\/\/");
/// assert_eq!(escape_literal("1+1=2"), r"1\+1=2");
/// ```
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped_char(&mut out, c);
    }
    out
}

/// Checks that `name` can be used as a named capture group.
///
/// A valid name starts with a letter, followed by 1 to 15 word characters
/// (`[0-9A-Za-z_]`).
pub fn validate_group_name(name: &str) -> Result<&str> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_alphabetic() && {
                    let rest = chars.as_str();
                    (1..=15).contains(&rest.chars().count())
                        && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                }
        }
        None => false,
    };
    if valid {
        Ok(name)
    } else {
        Err(Error::InvalidGroupName(name.to_owned()))
    }
}
