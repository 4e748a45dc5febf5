use crate::expr::{render_all, Expression, Fragment};

/// `^`. Matches at the start of every line with [`Flags::MULTI_LINE`](crate::synth::Flags::MULTI_LINE).
pub fn start_of_line() -> Fragment {
    Fragment::raw("^")
}

/// `$`. Matches at the end of every line with [`Flags::MULTI_LINE`](crate::synth::Flags::MULTI_LINE).
pub fn end_of_line() -> Fragment {
    Fragment::raw("$")
}

/// `\A`
pub fn start_of_text() -> Fragment {
    Fragment::raw(r"\A")
}

/// `\z`
pub fn end_of_text() -> Fragment {
    Fragment::raw(r"\z")
}

/// `\b`
pub fn word_boundary() -> Fragment {
    Fragment::raw(r"\b")
}

/// `\B`
pub fn non_word_boundary() -> Fragment {
    Fragment::raw(r"\B")
}

/// `^...$`
pub fn exact_line_match(expressions: &[&dyn Expression]) -> Fragment {
    Fragment::raw(format!("^{}$", render_all(expressions)))
}

/// `\b...\b`
pub fn exact_word_boundary(expressions: &[&dyn Expression]) -> Fragment {
    Fragment::raw(format!(r"\b{}\b", render_all(expressions)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::literal;

    #[test]
    fn anchors() {
        assert_eq!(start_of_line().to_regex(), "^");
        assert_eq!(end_of_line().to_regex(), "$");
        assert_eq!(start_of_text().to_regex(), r"\A");
        assert_eq!(end_of_text().to_regex(), r"\z");
        assert_eq!(word_boundary().to_regex(), r"\b");
        assert_eq!(non_word_boundary().to_regex(), r"\B");
    }

    #[test]
    fn exact() {
        assert_eq!(
            exact_line_match(&[&literal("a"), &literal("b")]).to_regex(),
            "^ab$"
        );
        assert_eq!(exact_word_boundary(&[&literal("cat")]).to_regex(), r"\bcat\b");
    }
}
