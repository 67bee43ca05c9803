//! Splits an integer into base-1000 groups and reassembles their words with
//! scale names, most significant group first.
use crate::core::group::group_to_words;
use crate::core::lexicon::{NEGATIVE_PREFIX, UNITS, scale_name};
use crate::error::{Error, Result};

/// Spell out `n` in British English.
///
/// Groups are separated by `", "`, a hundreds group takes "and" before its
/// tens and units, and zero groups are skipped entirely. Values whose
/// magnitude reaches 10^33 have no scale name and return
/// [`Error::OutOfRange`].
pub fn number_to_words(n: i128) -> Result<String> {
    if n == 0 {
        return Ok(UNITS[0].to_string());
    }

    let mut phrases = scale_phrases(n)?;
    phrases.reverse();

    let joined = phrases.join(", ");
    if n < 0 {
        Ok(format!("{} {}", NEGATIVE_PREFIX, joined))
    } else {
        Ok(joined)
    }
}

/// Phrases for each nonzero group of `|n|`, least significant first.
fn scale_phrases(n: i128) -> Result<Vec<String>> {
    let mut magnitude = n.unsigned_abs();
    let mut phrases = Vec::new();
    let mut position = 0;

    while magnitude > 0 {
        let scale = scale_name(position).ok_or_else(|| Error::out_of_range(n))?;
        let group = (magnitude % 1000) as u16;

        if group > 0 {
            let words = group_to_words(group)?;
            if scale.is_empty() {
                phrases.push(words);
            } else {
                phrases.push(format!("{} {}", words, scale));
            }
        }

        magnitude /= 1000;
        position += 1;
    }

    Ok(phrases)
}
