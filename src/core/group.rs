//! Renders a single three-digit group (0..=999) without any scale suffix.
use std::borrow::Cow;

use crate::core::lexicon::{CONJUNCTION, HUNDRED, tens_word, unit_word};
use crate::error::{Error, Result};

/// Word tokens for `group`, in reading order. Zero yields no tokens.
///
/// A tens-units compound such as "forty-two" is produced as one token, so
/// joining the tokens with spaces never needs to patch an earlier word.
pub fn group_tokens(group: u16) -> Result<Vec<Cow<'static, str>>> {
    if group > 999 {
        return Err(Error::GroupOutOfRange { group });
    }

    let hundreds = group / 100;
    let remainder = group % 100;
    let mut tokens = Vec::with_capacity(4);

    if hundreds > 0 {
        tokens.push(Cow::Borrowed(unit_word(hundreds)));
        tokens.push(Cow::Borrowed(HUNDRED));
        if remainder > 0 {
            tokens.push(Cow::Borrowed(CONJUNCTION));
        }
    }

    if remainder > 0 {
        tokens.push(below_hundred(remainder));
    }

    Ok(tokens)
}

/// Words for `group`, or an empty string for zero.
pub fn group_to_words(group: u16) -> Result<String> {
    Ok(group_tokens(group)?.join(" "))
}

fn below_hundred(value: u16) -> Cow<'static, str> {
    if value < 20 {
        return Cow::Borrowed(unit_word(value));
    }

    let tens = tens_word(value / 10);
    match value % 10 {
        0 => Cow::Borrowed(tens),
        units => Cow::Owned(format!("{}-{}", tens, unit_word(units))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_group_is_empty() {
        assert!(group_tokens(0).unwrap().is_empty());
        assert_eq!(group_to_words(0).unwrap(), "");
    }

    #[test]
    fn teens_are_single_tokens() {
        assert_eq!(group_tokens(13).unwrap(), vec!["thirteen"]);
        assert_eq!(group_to_words(10).unwrap(), "ten");
        assert_eq!(group_to_words(19).unwrap(), "nineteen");
    }

    #[test]
    fn compound_tens_are_hyphenated_in_one_token() {
        assert_eq!(group_tokens(21).unwrap(), vec!["twenty-one"]);
        assert_eq!(group_tokens(20).unwrap(), vec!["twenty"]);
        assert_eq!(group_to_words(99).unwrap(), "ninety-nine");
    }

    #[test]
    fn hundreds_take_and_only_with_a_remainder() {
        assert_eq!(group_tokens(100).unwrap(), vec!["one", "hundred"]);
        assert_eq!(
            group_tokens(342).unwrap(),
            vec!["three", "hundred", "and", "forty-two"]
        );
        assert_eq!(group_to_words(105).unwrap(), "one hundred and five");
        assert_eq!(group_to_words(120).unwrap(), "one hundred and twenty");
        assert_eq!(group_to_words(999).unwrap(), "nine hundred and ninety-nine");
    }

    #[test]
    fn rejects_values_above_a_group() {
        assert_eq!(
            group_tokens(1000),
            Err(Error::GroupOutOfRange { group: 1000 })
        );
    }

    #[test]
    fn tokens_never_carry_whitespace() {
        for g in 0..=999u16 {
            let words = group_to_words(g).unwrap();
            assert_eq!(words.trim(), words, "group {g}");
            assert!(!words.contains("  "), "group {g}");
        }
    }
}
