/*!
Code point predicates used by the escaping policy, and [`UnicodeClass`] names.

The synthesizers only need to know whether a code point exists, whether it is
an ISO control character and whether it lives outside the Basic Multilingual
Plane. Everything else is rendered literally.
*/
use core::fmt;

use crate::{Error, Result};

/// The largest Unicode code point.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Returns true if `cp` is in `0..=0x10FFFF`. Surrogate halves are included.
#[inline]
pub fn is_valid_codepoint(cp: u32) -> bool {
    cp <= MAX_CODEPOINT
}

/// Returns true if `cp` is a Unicode scalar value, i.e. a valid code point that is not a surrogate half.
#[inline]
pub fn is_scalar_value(cp: u32) -> bool {
    char::from_u32(cp).is_some()
}

/// `0x00..=0x1F` and `0x7F..=0x9F`.
#[inline]
pub fn is_iso_control(c: char) -> bool {
    matches!(c as u32, 0x00..=0x1F | 0x7F..=0x9F)
}

/// Returns true if `c` is outside the Basic Multilingual Plane.
#[inline]
pub fn is_supplementary(c: char) -> bool {
    c as u32 > 0xFFFF
}

/// A Unicode general category or script, referenced by name.
///
/// The class is never expanded into code points. It is rendered verbatim as
/// `\pL` / `\p{Greek}` (or `\PL` / `\P{Greek}` when negated), so it can be
/// attached to a [`CodepointSet`](crate::synthesis::CodepointSet) without
/// enumerating the script.
///
/// ```
/// use regex_synth::unicode::UnicodeClass;
///
/// let greek = UnicodeClass::new("Greek").unwrap();
/// assert_eq!(greek.to_regex(false), r"\p{Greek}");
/// assert_eq!(greek.to_regex(true), r"\P{Greek}");
/// assert_eq!(UnicodeClass::new("L").unwrap().to_regex(false), r"\pL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnicodeClass {
    name: String,
}

impl UnicodeClass {
    /// With the `unicode` feature the name is checked against the property
    /// tables of `regex-syntax`. Without it only the shape of the name is checked.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let well_formed = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '-' | '=' | '.'));
        if !well_formed {
            return Err(Error::InvalidUnicodeClass(name));
        }

        #[cfg(feature = "unicode")]
        if regex_syntax::parse(&format!(r"\p{{{name}}}")).is_err() {
            return Err(Error::InvalidUnicodeClass(name));
        }

        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn to_regex(&self, negated: bool) -> String {
        let p = if negated { 'P' } else { 'p' };
        if self.name.chars().count() == 1 {
            format!(r"\{p}{}", self.name)
        } else {
            format!(r"\{p}{{{}}}", self.name)
        }
    }
}

impl fmt::Display for UnicodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
