//! XZ format support (tar.xz/txz)

use crate::{
    formats::tarball::{self, TarEntry},
    Error,
};
use std::{io::BufReader, path::Path};
use xz2::bufread::XzDecoder;

const XZ_MAGIC: [u8; 6] = [0xfd, b'7', b'z', b'X', b'Z', 0x00];

/// Walk the contents of an xz (lzma2) compressed tar file and invoke
/// `callback` for each entry.
///
/// A file without the xz stream header fails with [`Error::Decoder`] before
/// any entry is visited.
pub fn walk_tar_xz<P, F, E>(path: P, callback: Option<F>) -> Result<(), E>
where
    P: AsRef<Path>,
    F: FnMut(&mut TarEntry<'_>) -> Result<(), E>,
    E: From<Error>,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "walking tar.xz archive");

    let mut reader = BufReader::new(tarball::open_archive(path)?);
    tarball::expect_magic(&mut reader, &XZ_MAGIC, "xz")?;
    let decoder = XzDecoder::new_multi_decoder(reader);

    tarball::read_tar(Box::new(decoder), callback)
}
