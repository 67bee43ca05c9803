//! High-level, ergonomic library API: parse user text, convert single values
//! into serialisable `Conversion` records, and convert many inputs at once.
//! Prefer these entrypoints over the `core` modules when integrating numwords.
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::digits::group_digits;
use crate::core::lexicon::MAX_DIGITS;
use crate::core::scale::number_to_words;
use crate::error::{Error, Result};

/// One converted number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: i128,
    /// `value` with thousands separators, e.g. `-4,567`
    pub grouped: String,
    pub words: String,
}

/// An input that could not be converted during a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchError {
    pub input: String,
    pub message: String,
}

/// Outcome of [`convert_batch`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub converted: Vec<Conversion>,
    pub errors: Vec<BatchError>,
}

/// Parse a whole number: optional leading `-`, then ASCII digits.
///
/// Surrounding whitespace is ignored and leading zeros are allowed. Digit
/// strings of any length are accepted; anything at or above 10^33 in
/// magnitude is reported as [`Error::OutOfRange`] rather than overflowing.
pub fn parse_integer(text: &str) -> Result<i128> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInput {
            input: trimmed.to_string(),
        });
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_DIGITS {
        return Err(Error::out_of_range(trimmed));
    }
    if significant.is_empty() {
        return Ok(0);
    }

    // At most 33 digits, well inside i128.
    let magnitude: i128 = significant.parse().map_err(|_| Error::InvalidInput {
        input: trimmed.to_string(),
    })?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Convert an already validated integer
pub fn convert_value(value: i128) -> Result<Conversion> {
    let words = number_to_words(value)?;
    debug!("Converted {} -> {:?}", value, words);
    Ok(Conversion {
        value,
        grouped: group_digits(value),
        words,
    })
}

/// Parse `text` and convert it
pub fn convert_str(text: &str) -> Result<Conversion> {
    convert_value(parse_integer(text)?)
}

/// Convert every input in order.
///
/// With `continue_on_error` failures are collected into the report; without
/// it the first failure is returned and nothing after it is attempted.
pub fn convert_batch<I, S>(inputs: I, continue_on_error: bool) -> Result<BatchReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = BatchReport::default();

    for input in inputs {
        let input = input.as_ref();
        match convert_str(input) {
            Ok(conversion) => report.converted.push(conversion),
            Err(e) if continue_on_error => {
                warn!("Skipping {:?}: {}", input, e);
                report.errors.push(BatchError {
                    input: input.to_string(),
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Batch complete: converted={} errors={}",
        report.converted.len(),
        report.errors.len()
    );
    Ok(report)
}
