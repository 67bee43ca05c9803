#![doc = r#"
numwords — spell out integers in British English.

Turns any integer whose magnitude is below 10^33 into words, e.g.
`-4567` → `"minus four thousand, five hundred and sixty-seven"`. Hundreds take
"and" before their tens and units, scale groups are separated by commas, and
compound tens are hyphenated. It powers the `numwords` CLI and can be embedded
in your own Rust applications.

Quick start
-----------
```rust
use numwords::number_to_words;

fn main() -> numwords::Result<()> {
    assert_eq!(number_to_words(0)?, "zero");
    assert_eq!(number_to_words(121)?, "one hundred and twenty-one");
    assert_eq!(number_to_words(1001)?, "one thousand, one");
    Ok(())
}
```

Parsing user text
-----------------
```rust
use numwords::convert_str;

fn main() -> numwords::Result<()> {
    let conversion = convert_str(" -4567 ")?;
    assert_eq!(conversion.value, -4567);
    assert_eq!(conversion.grouped, "-4,567");
    assert_eq!(conversion.words, "minus four thousand, five hundred and sixty-seven");
    Ok(())
}
```

Batch helpers
-------------
```rust
use numwords::convert_batch;

fn main() -> numwords::Result<()> {
    let report = convert_batch(["12", "twelve", "1000000"], true)?;
    println!("converted={} errors={}", report.converted.len(), report.errors.len());
    Ok(())
}
```

Error handling
--------------
All public functions return `numwords::Result<T>`. Input that is not a whole
number is `Error::InvalidInput`; a magnitude of 10^33 or more has no scale
name and is `Error::OutOfRange`.

```rust
use numwords::{convert_str, Error};

match convert_str("1000000000000000000000000000000000") {
    Ok(c) => println!("{}", c.words),
    Err(Error::OutOfRange { value }) => eprintln!("too large: {value}"),
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — parsing, `Conversion` records and batch conversion.
- [`core`] — word tables, group renderer and scale assembler.
- [`types`] — shared enums such as `OutputFormat`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::group::{group_to_words, group_tokens};
pub use crate::core::lexicon::{MAX_MAGNITUDE, MAX_SCALE_POSITION};
pub use crate::core::params::ConvertParams;
pub use crate::core::scale::number_to_words;
pub use error::{Error, Result};
pub use types::OutputFormat;

pub use api::{
    BatchError, BatchReport, Conversion, convert_batch, convert_str, convert_value,
    parse_integer,
};
