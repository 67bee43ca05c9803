//! Crate-level error type and `Result` alias.
//! Separates input the parser rejects from integers that are well formed but
//! past the largest named scale.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Number out of range: {value} (magnitude must stay below 10^33)")]
    OutOfRange { value: String },

    #[error("Invalid input: {input:?} is not a whole number")]
    InvalidInput { input: String },

    #[error("Group value must be between 0 and 999, got: {group}")]
    GroupOutOfRange { group: u16 },
}

impl Error {
    pub fn out_of_range<V: std::fmt::Display>(value: V) -> Self {
        Error::OutOfRange {
            value: value.to_string(),
        }
    }

    /// True when the input was an integer but too large to name.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}
