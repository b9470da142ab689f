//! Bzip2 format support (tar.bz2/tbz/tbz2)

use crate::{
    formats::tarball::{self, TarEntry},
    Error,
};
use bzip2::bufread::MultiBzDecoder;
use std::{io::BufReader, path::Path};

/// Walk the contents of a bzip2-compressed tar file and invoke `callback`
/// for each entry.
///
/// Bzip2 streams are not validated up front: a file that is not bzip2 data
/// fails on the first read with [`Error::Decode`].
pub fn walk_tar_bzip2<P, F, E>(path: P, callback: Option<F>) -> Result<(), E>
where
    P: AsRef<Path>,
    F: FnMut(&mut TarEntry<'_>) -> Result<(), E>,
    E: From<Error>,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "walking tar.bz2 archive");

    let file = tarball::open_archive(path)?;
    let decoder = MultiBzDecoder::new(BufReader::new(file));

    tarball::read_tar(Box::new(decoder), callback)
}
