use core::fmt;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the codec.
///
/// Encoding never fails. Decoding fails only when filtering leaves too
/// little input to work with; everything else decodes to whatever the bits
/// say.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A character outside the alphabet and its aliases was handed to the
    /// single-symbol decoder.
    InvalidSymbol(char),
    /// Decode input held fewer than two recognizable symbols.
    InvalidLength(usize),
    /// A value does not fit in the requested number of 5-bit symbols.
    ValueTooWide { value: u64, width: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSymbol(c) => write!(f, "invalid symbol: {c:?}"),
            Error::InvalidLength(len) => write!(f, "too few symbols to decode: {len}"),
            Error::ValueTooWide { value, width } => {
                write!(f, "value {value} does not fit in {width} symbols")
            }
        }
    }
}

impl core::error::Error for Error {}
