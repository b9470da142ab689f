//! Shared tar walking for the tar-based formats, plus plain `.tar`.

use crate::{Error, Result};
use std::{
    fs::File,
    io::{self, BufRead, Read},
    path::Path,
};
use tar::Archive;

/// A tar entry as handed to tar callbacks: header access plus a reader over
/// the entry's content.
pub type TarEntry<'a> = tar::Entry<'a, Box<dyn Read>>;

/// Function pointer form of a tar callback, useful for spelling a `None` callback.
pub type TarCallback = fn(&mut TarEntry<'_>) -> Result<()>;

pub(crate) fn open_archive(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Check that the buffered stream starts with `magic` without consuming it.
pub(crate) fn expect_magic<R: BufRead>(
    reader: &mut R,
    magic: &[u8],
    format: &'static str,
) -> Result<()> {
    let head = reader
        .fill_buf()
        .map_err(|source| Error::Decoder { format, source })?;

    if head.starts_with(magic) {
        Ok(())
    } else {
        Err(Error::Decoder {
            format,
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                format!("not in {format} format"),
            ),
        })
    }
}

/// Drive a tar reader over `reader`, calling `callback` for each entry in the
/// order the entries appear in the stream.
pub(crate) fn read_tar<F, E>(
    reader: Box<dyn Read>,
    mut callback: Option<F>,
) -> std::result::Result<(), E>
where
    F: FnMut(&mut TarEntry<'_>) -> std::result::Result<(), E>,
    E: From<Error>,
{
    let mut archive = Archive::new(reader);

    for entry in archive.entries().map_err(Error::Decode)? {
        let mut entry = entry.map_err(Error::Decode)?;
        tracing::trace!(path = %String::from_utf8_lossy(&entry.path_bytes()), "tar entry");

        if let Some(callback) = callback.as_mut() {
            callback(&mut entry)?;
        }
    }

    Ok(())
}

/// Walk the contents of a plain tar file and invoke `callback` for each entry.
///
/// Fails with [`Error::Open`] when the file cannot be opened and with
/// [`Error::Decode`] on a corrupt or truncated archive. An `Err` returned by
/// the callback stops the walk and is returned as is.
pub fn walk_tar<P, F, E>(path: P, callback: Option<F>) -> std::result::Result<(), E>
where
    P: AsRef<Path>,
    F: FnMut(&mut TarEntry<'_>) -> std::result::Result<(), E>,
    E: From<Error>,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "walking tar archive");

    let file = open_archive(path)?;
    read_tar(Box::new(file), callback)
}
