use std::fmt;

/// Reasons a ZCZ call can refuse an input.
///
/// The reference implementation treats both of these conditions as a silent
/// no-op (the output buffer is left untouched). This crate surfaces them
/// instead, but preserves the "nothing written on error" contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The message is shorter than one di-block (32 bytes). ZCZ has no
    /// encoding for messages below this length.
    InputTooShort,

    /// `basic_encrypt`/`basic_decrypt` were called with a length that isn't a
    /// multiple of 32 bytes, or that exceeds the maximum basic message size
    /// (4096 bytes).
    InputTooLongForBasic,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputTooShort => {
                f.write_str("message is shorter than the minimum 32-byte di-block")
            }
            Error::InputTooLongForBasic => f.write_str(
                "message length is not a multiple of 32 bytes, or exceeds the basic message \
                 size limit of 4096 bytes",
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
