//! Character classes.
//!
//! Every preset returns a fresh [`CodepointSet`], so it can be combined further:
//! ```
//! use regex_synth::{dsl::*, Expression};
//!
//! let mut set = word();
//! set.union(&simple_set(['-', '.']));
//! assert_eq!(set.to_regex(), r"[\-.0-9A-Z_a-z]");
//! ```
use crate::{expr::Fragment, synthesis::CodepointSet, Error, Result};

/// Any character. Also matches `\n` with [`Flags::DOT_MATCHES_NEW_LINE`](crate::synth::Flags::DOT_MATCHES_NEW_LINE).
pub fn anything() -> Fragment {
    Fragment::raw(".")
}

pub fn simple_set(chars: impl IntoIterator<Item = char>) -> CodepointSet {
    CodepointSet::from_chars(chars)
}

/// Fails with [`Error::InvalidRange`] if `from > to`.
pub fn ranged_set(from: char, to: char) -> Result<CodepointSet> {
    if from > to {
        return Err(Error::InvalidRange {
            start: from as u32,
            end: to as u32,
        });
    }
    Ok(CodepointSet::span(from, to))
}

pub fn negated(mut set: CodepointSet) -> CodepointSet {
    set.negate();
    set
}

/// `[a-z]`
pub fn lowercase() -> CodepointSet {
    CodepointSet::span('a', 'z')
}

/// `[A-Z]`
pub fn uppercase() -> CodepointSet {
    CodepointSet::span('A', 'Z')
}

/// `0x00..=0x7F`
pub fn ascii() -> CodepointSet {
    CodepointSet::span('\0', '\x7F')
}

/// Extended ASCII, `0x00..=0xFF`.
pub fn ascii2() -> CodepointSet {
    CodepointSet::span('\0', '\u{FF}')
}

/// `[A-Za-z]`
pub fn alphabetic() -> CodepointSet {
    let mut set = lowercase();
    set.union(&uppercase());
    set
}

/// `[0-9]`
pub fn digit() -> CodepointSet {
    CodepointSet::span('0', '9')
}

pub fn not_digit() -> CodepointSet {
    negated(digit())
}

/// `[0-9A-Za-z]`
pub fn alphanumeric() -> CodepointSet {
    let mut set = alphabetic();
    set.union(&digit());
    set
}

/// ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``
pub fn punctuation() -> CodepointSet {
    simple_set(r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##.chars())
}

/// Visible characters: [`alphanumeric`] and [`punctuation`].
pub fn graphical() -> CodepointSet {
    let mut set = alphanumeric();
    set.union(&punctuation());
    set
}

/// [`graphical`] and space.
pub fn printable() -> CodepointSet {
    let mut set = graphical();
    set.push_char(' ');
    set
}

/// Space and horizontal tab.
pub fn blank() -> CodepointSet {
    simple_set([' ', '\t'])
}

/// `[0-9A-Fa-f]`
pub fn hex_digit() -> CodepointSet {
    let mut set = digit();
    set.union(&CodepointSet::span('a', 'f'))
        .union(&CodepointSet::span('A', 'F'));
    set
}

/// `[ \t\n\x0B\f\r]`
pub fn whitespace() -> CodepointSet {
    simple_set([' ', '\t', '\n', '\x0B', '\x0C', '\r'])
}

pub fn not_whitespace() -> CodepointSet {
    negated(whitespace())
}

/// `[0-9A-Za-z_]`
pub fn word() -> CodepointSet {
    let mut set = alphanumeric();
    set.push_char('_');
    set
}

pub fn not_word() -> CodepointSet {
    negated(word())
}

pub fn space() -> CodepointSet {
    simple_set([' '])
}

pub fn backslash() -> CodepointSet {
    simple_set(['\\'])
}

pub fn double_quotes() -> CodepointSet {
    simple_set(['"'])
}

pub fn single_quote() -> CodepointSet {
    simple_set(['\''])
}

pub fn backtick() -> CodepointSet {
    simple_set(['`'])
}

pub fn bell() -> CodepointSet {
    simple_set(['\x07'])
}

pub fn horizontal_tab() -> CodepointSet {
    simple_set(['\t'])
}

pub fn linebreak() -> CodepointSet {
    simple_set(['\n'])
}

pub fn vertical_tab() -> CodepointSet {
    simple_set(['\x0B'])
}

pub fn formfeed() -> CodepointSet {
    simple_set(['\x0C'])
}

pub fn carriage_return() -> CodepointSet {
    simple_set(['\r'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Expression;

    #[test]
    fn sets() {
        assert_eq!(simple_set("adfhZ".chars()).to_regex(), "[Zadfh]");
        assert_eq!(ranged_set('A', 'Z').unwrap().to_regex(), "[A-Z]");
        assert_eq!(
            ranged_set('\u{1F311}', '\u{1F31D}').unwrap().to_regex(),
            r"[\x{1f311}-\x{1f31d}]"
        );
        assert!(matches!(
            ranged_set('z', 'a'),
            Err(Error::InvalidRange { .. })
        ));
        assert_eq!(negated(simple_set("abc".chars())).to_regex(), "[^a-c]");
        assert_eq!(anything().to_regex(), ".");
    }

    #[test]
    fn posix() {
        assert_eq!(lowercase().to_regex(), "[a-z]");
        assert_eq!(uppercase().to_regex(), "[A-Z]");
        assert_eq!(ascii().to_regex(), r"[\x00-\x7F]");
        assert_eq!(ascii2().to_regex(), r"[\x00-ÿ]");
        assert_eq!(alphabetic().to_regex(), "[A-Za-z]");
        assert_eq!(digit().to_regex(), "[0-9]");
        assert_eq!(not_digit().to_regex(), "[^0-9]");
        assert_eq!(alphanumeric().to_regex(), "[0-9A-Za-z]");
        assert_eq!(punctuation().to_regex(), r"[!-\/:-@\[-\`{-~]");
        assert_eq!(graphical().to_regex(), "[!-~]");
        assert_eq!(printable().to_regex(), "[ -~]");
        assert_eq!(blank().to_regex(), r"[\x09 ]");
        assert_eq!(hex_digit().to_regex(), "[0-9A-Fa-f]");
        assert_eq!(whitespace().to_regex(), r"[\x09-\x0D ]");
        assert_eq!(not_whitespace().to_regex(), r"[^\x09-\x0D ]");
        assert_eq!(word().to_regex(), "[0-9A-Z_a-z]");
        assert_eq!(not_word().to_regex(), "[^0-9A-Z_a-z]");
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(space().to_regex(), " ");
        assert_eq!(backslash().to_regex(), r"\\");
        assert_eq!(double_quotes().to_regex(), "\"");
        assert_eq!(single_quote().to_regex(), "'");
        assert_eq!(backtick().to_regex(), "`");
        assert_eq!(bell().to_regex(), r"\x07");
        assert_eq!(horizontal_tab().to_regex(), r"\x09");
        assert_eq!(linebreak().to_regex(), r"\x0A");
        assert_eq!(vertical_tab().to_regex(), r"\x0B");
        assert_eq!(formfeed().to_regex(), r"\x0C");
        assert_eq!(carriage_return().to_regex(), r"\x0D");
    }
}
