//! error types shared by the resolver and the walkers

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors produced by arcwalk itself.
///
/// Callback errors are never wrapped in this type: the walkers are generic over
/// the callback's error and hand it back untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// no registered suffix matched the filename
    #[error("unable to determine archive type")]
    UnknownType,

    /// the archive could not be opened (missing, unreadable, or not a zip)
    #[error("failed to open archive {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// the decompression filter rejected the stream header
    #[error("failed to create {format} reader: {source}")]
    Decoder {
        format: &'static str,
        #[source]
        source: io::Error,
    },

    /// corruption or truncation found while iterating entries
    #[error("failed to read archive: {0}")]
    Decode(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Flatten a zip error into an `io::Error`, keeping the inner one when it has one.
pub(crate) fn zip_to_io(err: zip::result::ZipError) -> io::Error {
    match err {
        zip::result::ZipError::Io(err) => err,
        other => io::Error::new(io::ErrorKind::InvalidData, other),
    }
}
