//! Contains the Error and Result type used throughout the crate.

/// An error from building, querying, decoding or encoding a tag tree.
///
/// Every error carries an [`ErrorKind`] to match on and a human readable
/// message for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A numeric value does not fit the width of the tag it was meant for.
    OutOfRange,

    /// A value had a different tag than required, such as a String pushed
    /// into a list of Shorts, or a list index applied to a compound.
    TypeMismatch,

    /// A path step named a key or index that does not exist.
    NotFound,

    /// Text given as a path could not be parsed.
    InvalidPath,

    /// A list element was set beyond the end of the list. Lists are never
    /// extended implicitly.
    IndexOutOfRange,

    /// The input was not a well formed document: unknown tag ids, truncated
    /// data, bad lengths, invalid UTF-8 or trailing bytes.
    MalformedDocument,

    /// The tree cannot be encoded, for example a list holding elements of
    /// different types or a string longer than a length prefix can express.
    InvalidTree,

    /// Reading or writing the underlying file or writer failed.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind,
        }
    }

    pub(crate) fn out_of_range(tag: crate::Tag, value: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            format!("value {} out of range for {}", value, tag),
        )
    }

    pub(crate) fn type_mismatch(expected: crate::Tag, found: crate::Tag) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("expected {}, found {}", expected, found),
        )
    }

    pub(crate) fn not_found(what: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::NotFound, format!("not found: {}", what))
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::new(
            ErrorKind::IndexOutOfRange,
            format!("index {} out of range for list of length {}", index, len),
        )
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedDocument, msg)
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self::malformed(format!("invalid nbt tag value: {}", tag))
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self::malformed("eof: unexpectedly ran out of input")
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Self {
        Self::malformed(format!(
            "invalid nbt string: nonunicode: {}",
            String::from_utf8_lossy(data)
        ))
    }

    pub(crate) fn invalid_tree(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidTree, msg)
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, format!("io error: {}", e))
    }
}
