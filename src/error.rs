//! Error types for QDataStream encoding and decoding

/// Errors that can occur while writing or reading a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A single-byte field was given something other than exactly one byte
    MalformedInput,
    /// Type tag outside the closed primitive set
    UnknownType,
    /// Read needs more bytes than remain in the input
    UnexpectedEof,
    /// Text payload is not valid UTF-16 in the configured byte order
    DecodeError,
    /// Value variant does not belong to the requested type tag
    TypeMismatch,
    /// Length or element count does not fit the 32-bit length field
    Overflow,
    /// Protocol version identifier outside the known revisions
    UnsupportedVersion,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::MalformedInput => "single-byte field must be exactly one byte long",
            Error::UnknownType => "unknown type tag",
            Error::UnexpectedEof => "unexpected end of stream",
            Error::DecodeError => "invalid UTF-16 text",
            Error::TypeMismatch => "value does not match type tag",
            Error::Overflow => "length does not fit in 32-bit length field",
            Error::UnsupportedVersion => "unsupported stream version",
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for stream operations
pub type Result<T> = core::result::Result<T, Error>;
