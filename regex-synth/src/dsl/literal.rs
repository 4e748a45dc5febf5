use crate::{
    expr::{escape_char, escape_literal, Fragment},
    unicode::UnicodeClass,
};

/// Matches `text` literally. Meta characters and `/` are escaped.
///
/// ```
/// use regex_synth::{dsl::literal, Expression};
///
/// assert_eq!(literal("a.b").to_regex(), r"a\.b");
/// ```
pub fn literal(text: &str) -> Fragment {
    Fragment::raw(escape_literal(text))
}

/// Matches `text` literally, with every character escaped.
///
/// The regex engine has no `\Q...\E` quoting, so every ASCII punctuation
/// character is backslash-escaped instead. `<` and `>` are left alone since
/// `\<` and `\>` are word boundaries.
pub fn quoted_literal(text: &str) -> Fragment {
    let mut s = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if c.is_ascii_punctuation() && !matches!(c, '<' | '>') {
            s.push('\\');
            s.push(c);
        } else {
            s.push_str(&escape_char(c));
        }
    }
    Fragment::raw(s)
}

/// `\p{Name}`, or `\P{Name}` if `negated`.
pub fn unicode_class(class: &UnicodeClass, negated: bool) -> Fragment {
    Fragment::raw(class.to_regex(negated))
}
