/*!
Composable building blocks for writing patterns as code.

Everything is re-exported here, so `use regex_synth::dsl::*` brings the whole
vocabulary into scope.

Combinators taking several operands accept a slice of `&dyn Expression`. They
render eagerly and return a [`Fragment`](crate::Fragment) that owns its text.

## Example
```
use regex_synth::{dsl::*, Expression};

// A URL-ish protocol and host
let host = one_or_more(ranged_set('a', 'z')?);
let expr = concat(&[
    &named_capture_group("protocol", &[&either_strings(["http", "https", "ftp"])])?,
    &literal("://"),
    &named_capture_group("host", &[&host])?,
]);
assert_eq!(
    expr.to_regex(),
    r"(?P<protocol>(?:ftp|https?)):\/\/(?P<host>(?:[a-z])+)"
);
# Ok::<(), regex_synth::Error>(())
```
*/
mod anchor;
mod class;
mod group;
mod literal;
mod numeric;
mod op;
mod quantifier;

pub use anchor::*;
pub use class::*;
pub use group::*;
pub use literal::*;
pub use numeric::*;
pub use op::*;
pub use quantifier::*;
