//! arcwalk - walk the entries of tar, tar.bz2, tar.gz, tar.xz and zip archives
//!
//! Each walker opens one archive, layers the matching decompression filter in
//! front of the container reader, and calls a visitor once per entry in the
//! order the archive stores them. [`determine_type`] picks the walker from a
//! filename.
//!
//! ```no_run
//! use arcwalk::{determine_type, walk_tar_gz, walk_zip, ArchiveType, TarEntry, ZipEntry};
//!
//! # fn main() -> arcwalk::Result<()> {
//! let filename = "sample.tar.gz";
//! match determine_type(filename)? {
//!     ArchiveType::Zip => walk_zip(filename, Some(|file: &mut ZipEntry<'_>| -> arcwalk::Result<()> {
//!         println!("{}", file.name());
//!         Ok(())
//!     }))?,
//!     ArchiveType::TarGz => walk_tar_gz(filename, Some(|entry: &mut TarEntry<'_>| -> arcwalk::Result<()> {
//!         println!("{}", String::from_utf8_lossy(&entry.path_bytes()));
//!         Ok(())
//!     }))?,
//!     other => println!("{filename} is {other}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod formats;
pub mod list;
pub mod progress;
pub mod utils;

// re-export main types for convenience
pub use error::{Error, Result};
pub use formats::{
    bz2::walk_tar_bzip2,
    determine_type,
    gz::walk_tar_gz,
    tarball::{walk_tar, TarCallback, TarEntry},
    xz::walk_tar_xz,
    zip::{walk_zip, ZipCallback, ZipEntry},
    ArchiveType,
};
