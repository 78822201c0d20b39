//! Error types for attribute reads, battery queries and discovery.

use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

/// Errors that can occur while reading a single attribute file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("could not open attribute {path:?}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read attribute {path:?}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("attribute {path:?} is not valid UTF-8")]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },
}

impl ReadError {
    /// The attribute file the failure relates to.
    pub fn path(&self) -> &Path {
        match self {
            ReadError::OpenFailed { path, .. }
            | ReadError::ReadFailed { path, .. }
            | ReadError::InvalidEncoding { path, .. } => path.as_path(),
        }
    }
}

/// Errors returned by [`Battery::capacity`](crate::Battery::capacity).
///
/// `Unreadable` means the hardware could not be accessed. `Unparseable` and
/// `OutOfRange` mean it reported something that is not a usable percentage.
#[derive(Debug, thiserror::Error)]
pub enum CapacityError {
    #[error("could not read battery capacity")]
    Unreadable(#[from] ReadError),

    #[error("could not parse battery capacity {value:?}")]
    Unparseable {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("battery capacity {value} is not a non-negative percentage")]
    OutOfRange { value: f64 },
}

/// Errors returned by status queries.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("could not read battery status")]
    Unreadable(#[from] ReadError),
}

/// Errors returned by battery discovery.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("could not list batteries in {path:?}")]
    ListFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
