/*!
Assembling expressions into a final pattern, and handing it to the regex engine.

```
use regex_synth::{dsl::*, synth::{Flags, RegexSynth}};

let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
let synth = RegexSynth::new(&[&exact_line_match(&[
    &integer_range(2012, 2020)?,
    &literal("-"),
    &capture_group(&[&either_strings(months)]),
    &literal("-"),
    &capture_group(&[&leading_zero(integer_range(1, 31)?)]),
])]);

let re = synth.compile(Flags::empty())?;
assert!(re.is_match("2019-Mar-15"));
assert!(re.is_match("2020-Dec-01"));
assert!(!re.is_match("2011-Mar-15"));
assert!(!re.is_match("2019-Mar-32"));
# Ok::<(), regex_synth::Error>(())
```
*/
use core::fmt;

use bitflags::bitflags;

use crate::expr::{render_all, Expression};
#[cfg(feature = "compile")]
use crate::Result;

bitflags! {
    /// Engine flags applied when compiling a pattern.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const CASE_INSENSITIVE = 1 << 0;
        /// `^` and `$` match at line boundaries.
        const MULTI_LINE = 1 << 1;
        /// `.` also matches `\n`.
        const DOT_MATCHES_NEW_LINE = 1 << 2;
    }
}

/// The concatenation of a sequence of expressions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegexSynth {
    pattern: String,
}

impl RegexSynth {
    pub fn new(expressions: &[&dyn Expression]) -> Self {
        Self {
            pattern: render_all(expressions),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn into_pattern(self) -> String {
        self.pattern
    }

    /// Fails with [`Error::Compile`](crate::Error::Compile) if the engine rejects the pattern.
    #[cfg(feature = "compile")]
    pub fn compile(&self, flags: Flags) -> Result<regex_automata::meta::Regex> {
        use regex_automata::{meta, util::syntax};

        log::debug!("compile {:?} with {flags:?}", self.pattern);
        let re = meta::Builder::new()
            .syntax(
                syntax::Config::new()
                    .case_insensitive(flags.contains(Flags::CASE_INSENSITIVE))
                    .multi_line(flags.contains(Flags::MULTI_LINE))
                    .dot_matches_new_line(flags.contains(Flags::DOT_MATCHES_NEW_LINE)),
            )
            .build(&self.pattern)?;
        Ok(re)
    }
}

/// Collects the text of every participating capture group, by group index.
///
/// All matches in `haystack` are visited. A later match overwrites what an
/// earlier match captured for the same group.
///
/// ```
/// use regex_synth::{dsl::*, synth::{matched_groups, Flags, RegexSynth}};
///
/// let re = RegexSynth::new(&[
///     &capture_group(&[&one_or_more(lowercase())]),
///     &literal("="),
///     &capture_group(&[&one_or_more(digit())]),
/// ])
/// .compile(Flags::empty())?;
/// let groups = matched_groups(&re, "a=1, b=22");
/// assert_eq!(groups[&1], "b");
/// assert_eq!(groups[&2], "22");
/// # Ok::<(), regex_synth::Error>(())
/// ```
#[cfg(feature = "compile")]
pub fn matched_groups<'h>(
    re: &regex_automata::meta::Regex,
    haystack: &'h str,
) -> std::collections::BTreeMap<usize, &'h str> {
    let mut groups = std::collections::BTreeMap::new();
    for caps in re.captures_iter(haystack) {
        for i in 1..caps.group_len() {
            if let Some(span) = caps.get_group(i) {
                groups.insert(i, &haystack[span.range()]);
            }
        }
    }
    groups
}

impl Expression for RegexSynth {
    fn to_regex(&self) -> String {
        self.pattern.clone()
    }
}

impl fmt::Display for RegexSynth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::*;

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    fn date() -> RegexSynth {
        RegexSynth::new(&[&exact_line_match(&[
            &integer_range(2012, 2020).unwrap(),
            &literal("-"),
            &capture_group(&[&either_strings(MONTHS)]),
            &literal("-"),
            &capture_group(&[&leading_zero(integer_range(1, 31).unwrap())]),
        ])])
    }

    #[test]
    fn date_pattern() {
        assert_eq!(
            date().pattern(),
            r"^(?:2020|201[2-9])\-((?:A(?:pr|ug)|Dec|Feb|J(?:an|u[ln])|Ma[ry]|Nov|Oct|Sep))\-((?:0?(?:3[01]|[12][0-9]|[1-9])))$"
        );
        assert_eq!(date().to_string(), date().pattern());
    }

    #[test]
    fn url_pattern() {
        let mut sub_domain = alphanumeric();
        sub_domain.union(&simple_set(['-', '.']));
        let synth = RegexSynth::new(&[&exact_line_match(&[
            &named_capture_group("protocol", &[&either_strings(["http", "https", "ftp"])]).unwrap(),
            &literal("://"),
            &named_capture_group("subDomain", &[&one_or_more(sub_domain)]).unwrap(),
            &literal("."),
            &named_capture_group("tld", &[&between(2, 4, alphabetic()).unwrap()]).unwrap(),
            &optional(
                named_capture_group("port", &[&literal(":"), &one_or_more(digit())]).unwrap(),
            ),
            &optional(literal("/")),
            &named_capture_group("resource", &[&zero_or_more(anything())]).unwrap(),
        ])]);
        assert_eq!(
            synth.pattern(),
            r"^(?P<protocol>(?:ftp|https?)):\/\/(?P<subDomain>(?:[\-.0-9A-Za-z])+)\.(?P<tld>(?:[A-Za-z]){2,4})(?:(?P<port>:(?:[0-9])+))?(?:\/)?(?P<resource>(?:.)*)$"
        );
    }

    #[test]
    fn department_pattern() {
        let synth = RegexSynth::new(&[
            &capture_group(&[&either_strings(["K", "KS", "KLE", "KLL"])]),
            &literal("**"),
            &capture_group(&[&exactly(3, digit()).unwrap()]),
        ]);
        assert_eq!(synth.pattern(), r"(K(?:(?:L[EL]|S))?)\*\*((?:[0-9]){3})");
    }

    #[test]
    fn empty() {
        assert_eq!(RegexSynth::new(&[]).pattern(), "");
        assert_eq!(RegexSynth::default().into_pattern(), "");
    }

    #[cfg(feature = "compile")]
    #[test]
    fn compile_date() {
        let re = date().compile(Flags::empty()).unwrap();
        assert!(re.is_match("2019-Mar-15"));
        assert!(re.is_match("2012-Jan-01"));
        assert!(re.is_match("2020-Dec-1"));
        assert!(!re.is_match("2011-Jan-01"));
        assert!(!re.is_match("2021-Jan-01"));
        assert!(!re.is_match("2019-Mar-00"));
        assert!(!re.is_match("2019-Mar-32"));
        assert!(!re.is_match("2019-mar-15"));

        let groups = matched_groups(&re, "2019-Mar-05");
        assert_eq!(groups[&1], "Mar");
        assert_eq!(groups[&2], "05");
    }

    #[cfg(feature = "compile")]
    #[test]
    fn compile_flags() {
        let synth = RegexSynth::new(&[&start_of_line(), &literal("ab"), &end_of_line()]);
        assert!(!synth.compile(Flags::empty()).unwrap().is_match("AB"));
        assert!(synth.compile(Flags::CASE_INSENSITIVE).unwrap().is_match("AB"));
        assert!(!synth.compile(Flags::empty()).unwrap().is_match("x\nab\ny"));
        assert!(synth.compile(Flags::MULTI_LINE).unwrap().is_match("x\nab\ny"));

        let synth = RegexSynth::new(&[&literal("a"), &anything(), &literal("b")]);
        assert!(!synth.compile(Flags::empty()).unwrap().is_match("a\nb"));
        assert!(synth
            .compile(Flags::DOT_MATCHES_NEW_LINE)
            .unwrap()
            .is_match("a\nb"));
    }

    #[cfg(feature = "compile")]
    #[test]
    fn compile_error() {
        let synth = RegexSynth::new(&[&crate::Fragment::raw("(unclosed")]);
        assert!(matches!(
            synth.compile(Flags::empty()),
            Err(crate::Error::Compile(_))
        ));
    }
}
