//! Gzip format support (tar.gz/tgz)

use crate::{
    formats::tarball::{self, TarEntry},
    Error,
};
use flate2::bufread::MultiGzDecoder;
use std::{io::BufReader, path::Path};

/// ID1, ID2 and the deflate compression method
const GZIP_MAGIC: [u8; 3] = [0x1f, 0x8b, 0x08];

/// Walk the contents of a gzip-compressed tar file and invoke `callback` for
/// each entry.
///
/// A file that does not start with a gzip header fails with
/// [`Error::Decoder`] before any entry is visited. Concatenated gzip members
/// are read as one stream.
pub fn walk_tar_gz<P, F, E>(path: P, callback: Option<F>) -> Result<(), E>
where
    P: AsRef<Path>,
    F: FnMut(&mut TarEntry<'_>) -> Result<(), E>,
    E: From<Error>,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "walking tar.gz archive");

    let mut reader = BufReader::new(tarball::open_archive(path)?);
    tarball::expect_magic(&mut reader, &GZIP_MAGIC, "gzip")?;
    let decoder = MultiGzDecoder::new(reader);

    tarball::read_tar(Box::new(decoder), callback)
}
