use crate::{
    expr::{Expression, Fragment},
    synthesis::IntegerRange,
    Result,
};

/// See [`IntegerRange`].
pub fn integer_range(lo: u64, hi: u64) -> Result<IntegerRange> {
    IntegerRange::new(lo, hi)
}

/// Allows one optional leading `0`: `(?:0?...)`.
///
/// ```
/// use regex_synth::{dsl::*, Expression};
///
/// let month = leading_zero(integer_range(1, 12)?);
/// assert_eq!(month.to_regex(), "(?:0?(?:1[0-2]|[1-9]))");
/// # Ok::<(), regex_synth::Error>(())
/// ```
pub fn leading_zero(expr: impl Expression) -> Fragment {
    Fragment::raw(format!("(?:0?{})", expr.to_regex()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn ranges() {
        assert_eq!(integer_range(7, 7).unwrap().to_regex(), "7");
        assert_eq!(integer_range(0, 9).unwrap().to_regex(), "[0-9]");
        assert_eq!(
            integer_range(1, 31).unwrap().to_regex(),
            "(?:3[01]|[12][0-9]|[1-9])"
        );
        assert!(matches!(
            integer_range(31, 1),
            Err(Error::RangeOutOfOrder { start: 31, end: 1 })
        ));
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(
            leading_zero(integer_range(1, 31).unwrap()).to_regex(),
            "(?:0?(?:3[01]|[12][0-9]|[1-9]))"
        );
        assert_eq!(
            leading_zero(integer_range(1, 9).unwrap()).to_regex(),
            "(?:0?[1-9])"
        );
    }
}
