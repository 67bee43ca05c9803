//! Fixed word tables. Indexing helpers take values that the callers have
//! already reduced to the table's range.

/// Words for 0 through 19. Ten to nineteen are irregular and never split.
pub const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Tens words indexed by the tens digit; slots 0 and 1 are never read.
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale names indexed by group position. Position 0 carries no name.
pub const SCALES: [&str; 11] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
];

pub const HUNDRED: &str = "hundred";
pub const CONJUNCTION: &str = "and";
pub const NEGATIVE_PREFIX: &str = "minus";

/// Highest group position with a scale name.
pub const MAX_SCALE_POSITION: usize = SCALES.len() - 1;

/// Most decimal digits a nameable magnitude can have.
pub const MAX_DIGITS: usize = SCALES.len() * 3;

/// Largest absolute value that can be spelled out: 10^33 - 1.
pub const MAX_MAGNITUDE: u128 = 1000u128.pow(SCALES.len() as u32) - 1;

pub fn unit_word(n: u16) -> &'static str {
    UNITS[n as usize]
}

pub fn tens_word(tens_digit: u16) -> &'static str {
    TENS[tens_digit as usize]
}

/// Scale name for `position`, `None` past the end of the table.
pub fn scale_name(position: usize) -> Option<&'static str> {
    SCALES.get(position).copied()
}
