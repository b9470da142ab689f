//! archive type resolution and the per-format entry walkers

use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::{fmt, path::Path, str::FromStr};

pub mod bz2;
pub mod gz;
pub mod tarball;
pub mod xz;
pub mod zip;

/// Supported archive types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveType {
    Tar,
    TarBz2,
    TarGz,
    TarXz,
    Zip,
}

struct TypeInfo {
    archive_type: ArchiveType,
    extensions: &'static [&'static str],
}

/// Suffix table, in the order `determine_type` consults it.
static TYPE_INFO: Lazy<Vec<TypeInfo>> = Lazy::new(|| {
    vec![
        TypeInfo {
            archive_type: ArchiveType::Tar,
            extensions: &[".tar"],
        },
        TypeInfo {
            archive_type: ArchiveType::TarBz2,
            extensions: &[".tar.bz2", ".tar.bzip2", ".tbz", ".tbz2"],
        },
        TypeInfo {
            archive_type: ArchiveType::TarGz,
            extensions: &[".tar.gz", ".tgz"],
        },
        TypeInfo {
            archive_type: ArchiveType::TarXz,
            extensions: &[".tar.xz", ".txz"],
        },
        TypeInfo {
            archive_type: ArchiveType::Zip,
            extensions: &[".zip"],
        },
    ]
});

/// Identify the archive type from the extension at the end of `filename`.
///
/// Matching is case-insensitive and only looks at the tail of the string, so
/// leading directories (with either separator style) never matter and the last
/// suffix wins: `foo.zip.tar.xz` is `TarXz`, `foo.tar.xz.zip` is `Zip`.
///
/// Returns [`Error::UnknownType`] when no registered suffix matches.
pub fn determine_type(filename: &str) -> Result<ArchiveType> {
    let name = filename.to_lowercase();

    let found = TYPE_INFO
        .iter()
        .find(|info| info.extensions.iter().any(|ext| name.ends_with(ext)))
        .map(|info| info.archive_type);

    tracing::trace!(filename, ?found, "resolved archive type");
    found.ok_or(Error::UnknownType)
}

impl ArchiveType {
    /// every type, in declaration order
    pub const ALL: [ArchiveType; 5] = [
        ArchiveType::Tar,
        ArchiveType::TarBz2,
        ArchiveType::TarGz,
        ArchiveType::TarXz,
        ArchiveType::Zip,
    ];

    /// Resolve the type of an archive path (see [`determine_type`])
    pub fn from_path(path: &Path) -> Result<Self> {
        determine_type(&path.to_string_lossy())
    }

    /// Filename suffixes recognized for this type
    pub fn extensions(self) -> &'static [&'static str] {
        TYPE_INFO
            .iter()
            .find(|info| info.archive_type == self)
            .map(|info| info.extensions)
            .unwrap_or_default()
    }

    /// Get the fixed label for display
    pub fn name(self) -> &'static str {
        match self {
            ArchiveType::Tar => "Tar",
            ArchiveType::TarBz2 => "TarBz2",
            ArchiveType::TarGz => "TarGz",
            ArchiveType::TarXz => "TarXz",
            ArchiveType::Zip => "Zip",
        }
    }
}

impl fmt::Display for ArchiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArchiveType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().trim_start_matches('.') {
            "tar" => Ok(ArchiveType::Tar),
            "tarbz2" | "tar.bz2" | "tar.bzip2" | "tbz" | "tbz2" | "bz2" | "bzip2" => {
                Ok(ArchiveType::TarBz2)
            }
            "targz" | "tar.gz" | "tgz" | "gz" | "gzip" => Ok(ArchiveType::TarGz),
            "tarxz" | "tar.xz" | "txz" | "xz" => Ok(ArchiveType::TarXz),
            "zip" => Ok(ArchiveType::Zip),
            _ => Err(format!(
                "unsupported archive type '{s}'. Supported types: tar, tar.bz2, tar.gz, tar.xz, zip"
            )),
        }
    }
}
