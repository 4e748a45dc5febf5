use crate::{
    expr::{render_all, Expression, Fragment},
    synthesis::TrieExpression,
};

/// `ab`
pub fn concat(expressions: &[&dyn Expression]) -> Fragment {
    Fragment::raw(render_all(expressions))
}

/// `(?:a|b)`
///
/// Alternatives are tried in the given order.
pub fn either(expressions: &[&dyn Expression]) -> Fragment {
    let alternatives: Vec<String> = expressions.iter().map(|e| e.to_regex()).collect();
    Fragment::raw(format!("(?:{})", alternatives.join("|")))
}

/// Alternation of plain strings, minimized as a [`TrieExpression`].
///
/// ```
/// use regex_synth::{dsl::either_strings, Expression};
///
/// assert_eq!(either_strings(["Jun", "Jul", "Jan"]).to_regex(), "J(?:an|u[ln])");
/// ```
pub fn either_strings<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> TrieExpression {
    words.into_iter().collect()
}
