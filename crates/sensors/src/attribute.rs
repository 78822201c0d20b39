//! Bounded, UTF-8 validated reads of power-supply attribute files.
//!
//! Attribute files are pseudo-files: some have no meaningful EOF and none has
//! a size worth trusting, so reads are capped at [`MAX_ATTRIBUTE_BYTES`].

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::ReadError;

/// Maximum number of bytes read from a single attribute.
pub const MAX_ATTRIBUTE_BYTES: u64 = 512;

/// Reads at most [`MAX_ATTRIBUTE_BYTES`] from `reader`.
///
/// Stops at EOF or at the cap, whichever comes first. An empty reader yields
/// an empty buffer.
pub fn read_bounded<R: Read>(reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.take(MAX_ATTRIBUTE_BYTES).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Reads an attribute file and returns its contents as text.
///
/// The text is returned untrimmed; callers trim before interpreting it.
/// A multi-byte character cut in half by the read cap is dropped rather than
/// reported as bad encoding.
/// The file handle is dropped before returning on every path.
pub fn read_attribute(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| ReadError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let bytes = read_bounded(file).map_err(|source| ReadError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::trace!(path = %path.display(), bytes = bytes.len(), "read attribute");

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            let err = e.utf8_error();
            let truncated = e.as_bytes().len() as u64 == MAX_ATTRIBUTE_BYTES;
            if truncated && err.error_len().is_none() {
                let mut bytes = e.into_bytes();
                bytes.truncate(err.valid_up_to());
                return String::from_utf8(bytes).map_err(|e| ReadError::InvalidEncoding {
                    path: path.to_path_buf(),
                    source: e.utf8_error(),
                });
            }
            Err(ReadError::InvalidEncoding {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}
