//! Reading input documents.

use std::{fs, io, path::Path};

use crate::Error;

/// Decodes `bytes` as UTF-8, silently dropping invalid byte sequences instead of replacing them
/// with `U+FFFD`.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
    }
    decoded
}

/// Reads and decodes a document. Returns `Ok(None)` if the document does not exist.
///
/// # Errors
///
/// Returns an error if the document exists, but cannot be read.
pub(crate) fn read_source(path: &Path) -> Result<Option<String>, Error> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(decode_permissive(&bytes))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "input file not found, skipping");
            Ok(None)
        }
        Err(err) => Err(Error::read_input(path, err)),
    }
}
