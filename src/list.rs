//! archive listing functionality

use crate::formats::{
    bz2::walk_tar_bzip2, gz::walk_tar_gz, tarball::walk_tar, tarball::TarEntry, xz::walk_tar_xz,
    zip::walk_zip, zip::ZipEntry, ArchiveType,
};
use crate::progress::Progress;
use crate::{Error, Result};
use std::path::Path;

/// One archive entry, normalized across container formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub size: u64,
    pub is_dir: bool,
}

/// list the entries of an archive, resolving its type from the filename
/// unless one is given
pub fn list(
    archive_path: &Path,
    archive_type: Option<ArchiveType>,
    progress: Option<&Progress>,
) -> Result<Vec<ArchiveEntry>> {
    let archive_type = match archive_type {
        Some(archive_type) => archive_type,
        None => ArchiveType::from_path(archive_path)?,
    };

    list_entries(archive_path, archive_type, progress)
}

/// list the entries of an archive of a known type, in walk order
pub fn list_entries(
    archive_path: &Path,
    archive_type: ArchiveType,
    progress: Option<&Progress>,
) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::new();

    let mut record = |entry: ArchiveEntry| {
        entries.push(entry);
        if let Some(progress) = progress {
            progress.inc();
        }
    };

    let tar_callback = |entry: &mut TarEntry<'_>| -> Result<()> {
        record(ArchiveEntry {
            path: String::from_utf8_lossy(&entry.path_bytes()).into_owned(),
            size: entry.header().size().map_err(Error::Decode)?,
            is_dir: entry.header().entry_type().is_dir(),
        });
        Ok(())
    };

    match archive_type {
        ArchiveType::Tar => walk_tar(archive_path, Some(tar_callback))?,
        ArchiveType::TarBz2 => walk_tar_bzip2(archive_path, Some(tar_callback))?,
        ArchiveType::TarGz => walk_tar_gz(archive_path, Some(tar_callback))?,
        ArchiveType::TarXz => walk_tar_xz(archive_path, Some(tar_callback))?,
        ArchiveType::Zip => walk_zip(
            archive_path,
            Some(|entry: &mut ZipEntry<'_>| -> Result<()> {
                record(ArchiveEntry {
                    path: entry.name().to_string(),
                    size: entry.size(),
                    is_dir: entry.is_dir(),
                });
                Ok(())
            }),
        )?,
    }

    Ok(entries)
}
