//! Error types returned by the codec and the key constructors.

/// Error returned by [`Codec`](crate::Codec), [`KeyedHash`](crate::KeyedHash) and [`Key`](crate::Key)
/// constructors.
///
/// All checks are performed before any hashing work, so a failed call never produces a partial
/// result.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The key is not exactly 16 bytes long. Carries the length supplied.
    #[error("key must be 16 bytes long, got {0} bytes")]
    InvalidKeyLength(usize),

    /// The textual key representation is not hexadecimal.
    #[error("key is not a valid hexadecimal string")]
    InvalidKeyEncoding,

    /// The identifier is not a well-formed input for the requested operation.
    #[error("malformed identifier: {0}")]
    MalformedIdentifier(Malformed),
}

/// Describes why an identifier was rejected as [`Error::MalformedIdentifier`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Malformed {
    /// The identifier is not exactly 16 bytes long.
    #[error("expected 16 bytes, got {0} bytes")]
    Length(usize),

    /// The version nibble does not match the operation (7 to encode, 4 to decode).
    #[error("expected version {expected}, found {found}")]
    Version {
        /// Version required by the operation.
        expected: u8,
        /// Version nibble read from byte 6.
        found: u8,
    },
}

impl From<Malformed> for Error {
    fn from(src: Malformed) -> Self {
        Self::MalformedIdentifier(src)
    }
}
