use crate::{
    expr::{render_all, validate_group_name, Expression, Fragment},
    Result,
};

/// `(?:...)`
pub fn non_capture_group(expressions: &[&dyn Expression]) -> Fragment {
    Fragment::raw(format!("(?:{})", render_all(expressions)))
}

/// `(...)`
pub fn capture_group(expressions: &[&dyn Expression]) -> Fragment {
    Fragment::raw(format!("({})", render_all(expressions)))
}

/// `(?P<name>...)`
///
/// Fails with [`Error::InvalidGroupName`](crate::Error::InvalidGroupName)
/// unless `name` is a letter followed by 1 to 15 characters of `[0-9A-Za-z_]`.
pub fn named_capture_group(name: &str, expressions: &[&dyn Expression]) -> Result<Fragment> {
    let name = validate_group_name(name)?;
    Ok(Fragment::raw(format!(
        "(?P<{name}>{})",
        render_all(expressions)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dsl::*, Error};

    #[test]
    fn groups() {
        let expr = concat(&[&literal("a"), &digit()]);
        assert_eq!(non_capture_group(&[&expr]).to_regex(), "(?:a[0-9])");
        assert_eq!(capture_group(&[&expr]).to_regex(), "(a[0-9])");
        assert_eq!(
            capture_group(&[&literal("a"), &literal("b")]).to_regex(),
            "(ab)"
        );
        assert_eq!(
            named_capture_group("digits", &[&expr]).unwrap().to_regex(),
            "(?P<digits>a[0-9])"
        );
    }

    #[test]
    fn invalid_name() {
        for name in ["--wowVeryWrong", "1wowVeryWrong", "x", "a_very_long_group_name", "\u{663}ab"] {
            assert!(matches!(
                named_capture_group(name, &[&digit()]),
                Err(Error::InvalidGroupName(_))
            ));
        }
    }

    #[cfg(feature = "compile")]
    #[test]
    fn accepted_names_compile() {
        use crate::synth::{Flags, RegexSynth};

        for name in ["digits", "zahl", "éab", "ab_1"] {
            let group = named_capture_group(name, &[&digit()]).unwrap();
            let re = RegexSynth::new(&[&group]).compile(Flags::empty()).unwrap();
            assert!(re.is_match("7"), "{name}");
        }
    }
}
