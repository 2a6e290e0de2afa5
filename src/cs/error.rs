//! Error types shared by the hashing and attack modules.

use thiserror::Error;

/// Result type for SHA-256 and length-extension operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in this crate is a deterministic defect in
/// the input; none of these are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A digest string could not be read back as a SHA-256 state.
    #[error("malformed digest: {reason}")]
    Format { reason: String },

    /// The message length in bits does not fit the 64-bit length field.
    #[error("message of {total_len} bytes is too long for the 64-bit length field")]
    Overflow { total_len: u64 },

    /// A byte stream handed to the block splitter is not block aligned.
    #[error("padded input of {len} bytes is not a multiple of the 64-byte block size")]
    Invariant { len: usize },
}

impl Error {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Error::Format {
            reason: reason.into(),
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::format(err.to_string())
    }
}
