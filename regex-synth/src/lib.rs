/*!
Synthesize regular expressions from high-level descriptions instead of writing them by hand.

## Features
- Code point sets with set algebra, rendered as minimal bracket expressions
  (`a, b, c, d, f` => `[a-df]`).
- Integer ranges rendered as exact digit patterns (`1..=31` => `(?:3[01]|[12][0-9]|[1-9])`).
- Word lists minimized with a prefix trie (`Jun, Jul` => `Ju[ln]`).
- A [combinator vocabulary](dsl) for groups, quantifiers, anchors and literals
  with automatic escaping.
- Optional compilation with [`regex-automata`](https://docs.rs/regex-automata/).

Every synthesizer implements [`Expression`], so they compose freely.
*/
//! ## Usage
//! ```
//! use regex_synth::{dsl::*, Expression};
//!
//! let time = concat(&[
//!     &leading_zero(integer_range(0, 23)?),
//!     &literal(":"),
//!     &leading_zero(integer_range(0, 59)?),
//! ]);
//! assert_eq!(
//!     time.to_regex(),
//!     "(?:0?(?:2[0-3]|1[0-9]|[0-9])):(?:0?(?:5[0-9]|[1-4][0-9]|[0-9]))"
//! );
//! # Ok::<(), regex_synth::Error>(())
//! ```
/*!
## Compiling
```
// cargo add regex-synth --features compile
use regex_synth::{dsl::*, synth::{Flags, RegexSynth}};

let re = RegexSynth::new(&[&exact_word_boundary(&[
    &integer_range(0, 1000)?,
    &literal("."),
    &between(1, 3, digit())?,
])])
.compile(Flags::empty())?;
assert!(re.is_match("pi is 3.14"));
assert!(re.is_match("1000.999"));
assert!(!re.is_match("1001.5"));
# Ok::<(), regex_synth::Error>(())
```
*/
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod dsl;
pub mod error;
pub mod expr;
pub mod synth;
pub mod synthesis;
pub mod unicode;

pub use error::{Error, Result};
pub use expr::{Expression, Fragment};
