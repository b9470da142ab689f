//! ZIP format support

use crate::{
    error::zip_to_io,
    formats::tarball::open_archive,
    Error, Result,
};
use std::{fs::File, io::BufReader, path::Path};
use zip::{read::ZipFile, result::ZipError, ZipArchive};

/// A zip entry as handed to zip callbacks: catalog metadata plus a reader over
/// the decompressed content.
pub type ZipEntry<'a> = ZipFile<'a, BufReader<File>>;

/// Function pointer form of a zip callback, useful for spelling a `None` callback.
pub type ZipCallback = fn(&mut ZipEntry<'_>) -> Result<()>;

/// Walk the contents of a zip file and invoke `callback` for each entry, in
/// central directory order.
///
/// Both a missing file and a file that is not a zip archive fail with
/// [`Error::Open`], since the central directory is read while opening.
///
/// Entries this build cannot decompress (an unsupported method, or
/// encryption) are still visited, opened raw: name, sizes and `is_dir()`
/// are intact and reading yields the stored bytes.
pub fn walk_zip<P, F, E>(path: P, mut callback: Option<F>) -> std::result::Result<(), E>
where
    P: AsRef<Path>,
    F: FnMut(&mut ZipEntry<'_>) -> std::result::Result<(), E>,
    E: From<Error>,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "walking zip archive");

    let file = open_archive(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|err| Error::Open {
        path: path.to_path_buf(),
        source: zip_to_io(err),
    })?;

    for index in 0..archive.len() {
        let decodable = match archive.by_index(index) {
            Ok(_) => true,
            Err(ZipError::UnsupportedArchive(reason)) => {
                tracing::debug!(index, reason, "zip entry not decodable, opening raw");
                false
            }
            Err(err) => return Err(Error::Decode(zip_to_io(err)).into()),
        };

        let mut entry = if decodable {
            archive.by_index(index)
        } else {
            archive.by_index_raw(index)
        }
        .map_err(|err| Error::Decode(zip_to_io(err)))?;
        tracing::trace!(path = entry.name(), "zip entry");

        if let Some(callback) = callback.as_mut() {
            callback(&mut entry)?;
        }
    }

    Ok(())
}
