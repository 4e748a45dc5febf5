use std::{collections::BTreeMap, mem};

use crate::expr::{push_escaped_char, Expression};

/// Matches exactly a finite set of strings, with shared prefixes factored out.
///
/// ```
/// use regex_synth::{synthesis::TrieExpression, Expression};
///
/// let mut trie = TrieExpression::new();
/// trie.insert_all(["http", "https", "ftp"]);
/// assert_eq!(trie.to_regex(), "(?:ftp|https?)");
/// ```
///
/// Children are visited in code point order, so the output does not depend on
/// the insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieExpression {
    root: Node,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Node {
    /// A word ends here.
    accepting: bool,
    children: BTreeMap<char, Node>,
}

impl TrieExpression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str) -> &mut Self {
        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.children.entry(c).or_default());
        node.accepting = true;
        self
    }

    pub fn insert_all<S: AsRef<str>>(&mut self, words: impl IntoIterator<Item = S>) -> &mut Self {
        for word in words {
            self.insert(word.as_ref());
        }
        self
    }

    /// Returns true if no non-empty word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        word.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
            .is_some_and(|node| node.accepting)
    }

    /// Returns `None` if there is nothing to match, i.e. the trie is empty or holds only `""`.
    pub fn synthesize(&self) -> Option<String> {
        let regex = self.root.synthesize();
        log::trace!("trie: {regex:?}");
        regex
    }
}

/// Output of [`Node::synthesize`], emitted front to back.
enum Step<'a> {
    Text(String),
    Node(&'a Node),
}

impl Node {
    /// A node with children renders as its alternatives. Leaf children
    /// share one class (`jun, jul` => `ju[nl]`). Everything inside the node
    /// is optional if a word also ends here.
    ///
    /// The shape of each node only depends on which children are leaves, so
    /// the pattern is written top-down with an explicit stack.
    fn synthesize(&self) -> Option<String> {
        if self.children.is_empty() {
            return None;
        }

        let mut out = String::new();
        let mut stack = vec![Step::Node(self)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Text(text) => out.push_str(&text),
                Step::Node(node) => {
                    let steps = node.steps();
                    stack.extend(steps.into_iter().rev());
                }
            }
        }
        Some(out)
    }

    /// Must only be called on a node with children.
    fn steps(&self) -> Vec<Step<'_>> {
        let (alternations, classes): (Vec<_>, Vec<_>) = self
            .children
            .iter()
            .partition(|(_, child)| !child.children.is_empty());
        let class_only = alternations.is_empty();
        let grouped = alternations.len() + usize::from(!classes.is_empty()) > 1;

        let mut steps = Vec::with_capacity(2 * alternations.len() + 5);
        if self.accepting && !class_only {
            steps.push(Step::Text("(?:".into()));
        }
        if grouped {
            steps.push(Step::Text("(?:".into()));
        }
        for (i, (&c, child)) in alternations.into_iter().enumerate() {
            let mut text = if i == 0 { String::new() } else { "|".into() };
            push_escaped_char(&mut text, c);
            steps.push(Step::Text(text));
            steps.push(Step::Node(child));
        }
        if !classes.is_empty() {
            let mut text = if class_only { String::new() } else { "|".into() };
            match classes.as_slice() {
                [(c, _)] => push_escaped_char(&mut text, **c),
                _ => {
                    text.push('[');
                    classes
                        .iter()
                        .for_each(|(c, _)| push_escaped_char(&mut text, **c));
                    text.push(']');
                }
            }
            steps.push(Step::Text(text));
        }
        if grouped {
            steps.push(Step::Text(")".into()));
        }
        match (self.accepting, class_only) {
            (false, _) => {}
            (true, true) => steps.push(Step::Text("?".into())),
            (true, false) => steps.push(Step::Text(")?".into())),
        }
        steps
    }
}

impl Drop for Node {
    // Words can be arbitrarily long, so nodes are dropped without recursion.
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut nodes: Vec<Node> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = nodes.pop() {
            nodes.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieExpression {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.insert_all(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for TrieExpression {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl Expression for TrieExpression {
    fn to_regex(&self) -> String {
        self.synthesize().unwrap_or_default()
    }
}
