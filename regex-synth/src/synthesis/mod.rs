/*!
The three synthesizers. Each one turns a high-level description into a
compact, self-contained regex fragment.

- [`CodepointSet`]: a set of code points as a minimal bracket expression.
- [`IntegerRange`]: every decimal number in an inclusive range.
- [`TrieExpression`]: a finite set of words with shared prefixes factored out.

```
use regex_synth::{synthesis::{CodepointSet, IntegerRange, TrieExpression}, Expression};

let set = CodepointSet::from_chars("ABDEC".chars());
assert_eq!(set.to_regex(), "[A-E]");

let range = IntegerRange::new(2012, 2020)?;
assert_eq!(range.to_regex(), "(?:2020|201[2-9])");

let trie: TrieExpression = ["Jun", "Jul"].into_iter().collect();
assert_eq!(trie.to_regex(), "Ju[ln]");
# Ok::<(), regex_synth::Error>(())
```
*/
mod range;
mod set;
mod trie;

pub use range::{IntegerRange, IntegerRangeBuilder};
pub use set::CodepointSet;
pub use trie::TrieExpression;
