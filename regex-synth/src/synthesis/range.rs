use core::fmt::Write;

use bon::bon;
use itertools::Itertools;

use crate::{expr::Expression, Error, Result};

/// Matches the decimal representations of every integer in `lo..=hi`, without leading zeros.
///
/// Alternatives are ordered from the largest numbers down, so an unanchored
/// search prefers the longest number.
///
/// ```
/// use regex_synth::{synthesis::IntegerRange, Expression};
///
/// let day = IntegerRange::new(1, 31)?;
/// assert_eq!(day.to_regex(), "(?:3[01]|[12][0-9]|[1-9])");
///
/// let year = IntegerRange::builder(1900, 1999).collapse_repeats(true).build()?;
/// assert_eq!(year.to_regex(), "(?:19[0-9]{2})");
/// # Ok::<(), regex_synth::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntegerRange {
    lo: u64,
    hi: u64,
    collapse_repeats: bool,
}

#[bon]
impl IntegerRange {
    /// Fails with [`Error::RangeOutOfOrder`] if `lo > hi`.
    pub fn new(lo: u64, hi: u64) -> Result<Self> {
        Self::with_options(lo, hi, false)
    }

    #[builder(builder_type = IntegerRangeBuilder, start_fn = builder, finish_fn = build)]
    pub fn with_options(
        #[builder(start_fn)] lo: u64,
        #[builder(start_fn)] hi: u64,
        /// Fold consecutive identical digit classes, e.g. `[0-9][0-9][0-9]` into `[0-9]{3}`.
        ///
        /// Off by default.
        #[builder(default)]
        collapse_repeats: bool,
    ) -> Result<Self> {
        if lo > hi {
            return Err(Error::RangeOutOfOrder { start: lo, end: hi });
        }
        Ok(Self {
            lo,
            hi,
            collapse_repeats,
        })
    }

    pub fn lo(&self) -> u64 {
        self.lo
    }

    pub fn hi(&self) -> u64 {
        self.hi
    }

    /// Splits `lo..=hi` into bounds whose start and end differ digit by digit
    /// only in a way that one class per position can express. Ascending.
    fn bounds(&self) -> Vec<Bound> {
        let (lo, hi) = (self.lo as u128, self.hi as u128);

        // Round up from `lo`
        let mut left = Vec::new();
        let mut start = lo;
        while start < hi {
            let bound = Bound::from_start(start);
            left.push(bound);
            start = bound.end + 1;
        }
        let Some(last_left) = left.pop() else {
            return vec![Bound { start: lo, end: hi }];
        };

        // Round down from `hi`
        let mut right = Vec::new();
        let mut end = hi;
        while last_left.start < end {
            let bound = Bound::from_end(end);
            right.push(bound);
            if bound.start == 0 {
                break;
            }
            end = bound.start - 1;
        }
        right.reverse();
        log::trace!("{}..={}: left {left:?} {last_left:?}, right {right:?}", lo, hi);

        let mut right = right.into_iter();
        let mut merged = left;
        match right.next() {
            Some(first_right) if last_left.overlaps(&first_right) => merged.push(Bound {
                start: last_left.start,
                end: first_right.end,
            }),
            Some(first_right) => {
                merged.push(last_left);
                merged.push(first_right);
            }
            None => merged.push(last_left),
        }
        merged.extend(right);
        merged
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Bound {
    start: u128,
    end: u128,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Digit {
    Literal(u8),
    Class(u8, u8),
}

impl Bound {
    /// `1230` => `1230..=1299`, `5` => `5..=9`
    fn from_start(start: u128) -> Self {
        let mut digits = start.to_string().into_bytes();
        for d in digits.iter_mut().rev() {
            let zero = *d == b'0';
            *d = b'9';
            if !zero {
                break;
            }
        }
        Self {
            start,
            end: parse_digits(&digits),
        }
    }

    /// `1299` => `1000..=1299`, `31` => `30..=31`
    fn from_end(end: u128) -> Self {
        let mut digits = end.to_string().into_bytes();
        for d in digits.iter_mut().rev() {
            let nine = *d == b'9';
            *d = b'0';
            if !nine {
                break;
            }
        }
        Self {
            start: parse_digits(&digits),
            end,
        }
    }

    fn overlaps(&self, other: &Bound) -> bool {
        self.end > other.start && other.end > self.start
    }

    fn digits(&self) -> Vec<Digit> {
        let (start, end) = (self.start.to_string(), self.end.to_string());
        start
            .bytes()
            .zip(end.bytes())
            .map(|(a, b)| {
                if a == b {
                    Digit::Literal(a)
                } else {
                    Digit::Class(a, b)
                }
            })
            .collect()
    }

    fn push_regex(&self, out: &mut String, collapse_repeats: bool) {
        if collapse_repeats {
            for (n, digit) in self.digits().into_iter().dedup_with_count() {
                match digit {
                    Digit::Literal(_) => (0..n).for_each(|_| digit.push_regex(out)),
                    Digit::Class(..) => {
                        digit.push_regex(out);
                        if n > 1 {
                            let _ = write!(out, "{{{n}}}");
                        }
                    }
                }
            }
        } else {
            self.digits().into_iter().for_each(|digit| digit.push_regex(out));
        }
    }
}

impl Digit {
    fn push_regex(self, out: &mut String) {
        match self {
            Digit::Literal(d) => out.push(d as char),
            Digit::Class(a, b) => {
                out.push('[');
                out.push(a as char);
                if b != a + 1 {
                    out.push('-');
                }
                out.push(b as char);
                out.push(']');
            }
        }
    }
}

fn parse_digits(digits: &[u8]) -> u128 {
    digits
        .iter()
        .fold(0, |n, d| n * 10 + u128::from(d - b'0'))
}

impl Expression for IntegerRange {
    fn to_regex(&self) -> String {
        if self.lo == self.hi {
            return self.lo.to_string();
        }
        if self.hi <= 9 {
            let mut s = String::new();
            Digit::Class(b'0' + self.lo as u8, b'0' + self.hi as u8).push_regex(&mut s);
            return s;
        }

        let bounds = self.bounds();
        let mut s = String::from("(?:");
        for (i, bound) in bounds.iter().rev().enumerate() {
            if i != 0 {
                s.push('|');
            }
            bound.push_regex(&mut s, self.collapse_repeats);
        }
        s.push(')');
        s
    }
}
