use std::{
    error, fmt, io,
    path::{Path, PathBuf},
};

/// Kind of an inventory [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input document exists, but could not be read.
    ReadInput,
    /// Output file could not be created or written.
    WriteOutput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadInput => formatter.write_str("failed reading input document"),
            Self::WriteOutput => formatter.write_str("failed writing character inventory"),
        }
    }
}

/// Errors that can occur when collecting or writing a [`CharInventory`](crate::CharInventory).
///
/// A missing input document is not an error; it is skipped with a warning.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    path: PathBuf,
    source: io::Error,
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} `{}`", self.kind, self.path.display())
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}

impl Error {
    pub(crate) fn read_input(path: &Path, source: io::Error) -> Self {
        Self {
            kind: ErrorKind::ReadInput,
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn write_output(path: &Path, source: io::Error) -> Self {
        Self {
            kind: ErrorKind::WriteOutput,
            path: path.to_owned(),
            source,
        }
    }

    /// Gets the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Gets the path of the file this error relates to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }
}
