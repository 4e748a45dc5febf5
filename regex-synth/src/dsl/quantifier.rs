//! Quantifiers. The operand is always wrapped in `(?:...)`, so a quantifier
//! applies to the whole operand rather than to its last atom.
use crate::{
    expr::{Expression, Fragment},
    Error, Result,
};

fn quantify(expr: impl Expression, quantifier: &str) -> Fragment {
    Fragment::raw(format!("(?:{}){quantifier}", expr.to_regex()))
}

/// `(?:...)+`
pub fn one_or_more(expr: impl Expression) -> Fragment {
    quantify(expr, "+")
}

/// `(?:...)*`
pub fn zero_or_more(expr: impl Expression) -> Fragment {
    quantify(expr, "*")
}

/// `(?:...)?`
pub fn optional(expr: impl Expression) -> Fragment {
    quantify(expr, "?")
}

/// `(?:...){n}`
///
/// `n == 0` would erase the operand and `n == 1` is a no-op, both fail with
/// [`Error::RedundantQuantifier`].
pub fn exactly(n: u32, expr: impl Expression) -> Result<Fragment> {
    match n {
        0 => Err(Error::RedundantQuantifier("exactly zero times")),
        1 => Err(Error::RedundantQuantifier("exactly once")),
        n => Ok(quantify(expr, &format!("{{{n}}}"))),
    }
}

/// `(?:...){n,}`, or `*` / `+` for `0` / `1`.
pub fn at_least(n: u32, expr: impl Expression) -> Fragment {
    match n {
        0 => zero_or_more(expr),
        1 => one_or_more(expr),
        n => quantify(expr, &format!("{{{n},}}")),
    }
}

/// `(?:...){m,n}`
///
/// - `m > n` fails with [`Error::RangeOutOfOrder`].
/// - `0, 0` fails with [`Error::RedundantQuantifier`].
/// - `0, 1` is [`optional`].
/// - `1, 1` is the operand itself.
pub fn between(m: u32, n: u32, expr: impl Expression) -> Result<Fragment> {
    match (m, n) {
        (m, n) if m > n => Err(Error::RangeOutOfOrder {
            start: m.into(),
            end: n.into(),
        }),
        (0, 0) => Err(Error::RedundantQuantifier("between zero and zero times")),
        (0, 1) => Ok(optional(expr)),
        (1, 1) => Ok(Fragment::raw(expr.to_regex())),
        (m, n) => Ok(quantify(expr, &format!("{{{m},{n}}}"))),
    }
}

/// Makes a quantified expression match as few repetitions as possible.
///
/// ```
/// use regex_synth::{dsl::*, Expression};
///
/// assert_eq!(lazy(one_or_more(digit())).to_regex(), "(?:[0-9])+?");
/// ```
pub fn lazy(quantified: impl Expression) -> Fragment {
    Fragment::raw(quantified.to_regex() + "?")
}
