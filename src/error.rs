/// Failure produced when a decimal string does not denote an integer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    #[error("cannot parse an integer from an empty string")]
    Empty,
    #[error("string holds only a sign and no digits")]
    SignOnly,
    #[error("invalid character {c:?} at position {index}")]
    InvalidDigit { c: char, index: usize },
}
